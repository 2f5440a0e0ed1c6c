// FollowCheck - platform/mod.rs
//
// Platform abstraction layer.
// Dependencies: standard library, directories, toml.
// Must NOT depend on: core logic, app.

pub mod config;
pub mod fs;
