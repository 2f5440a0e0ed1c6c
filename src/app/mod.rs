// FollowCheck - app/mod.rs
//
// Application layer: session state and orchestration over the core.
// Dependencies: core layer.
// Must NOT depend on: platform specifics.

pub mod cli;
pub mod state;
