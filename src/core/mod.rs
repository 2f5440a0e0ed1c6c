// FollowCheck - core/mod.rs
//
// Core business logic layer.
// Dependencies: chrono, serde_json, tracing.
// Must NOT depend on: app, platform, or any file I/O.

pub mod document;
pub mod export;
pub mod filter;
pub mod index;
pub mod model;
pub mod reconcile;
