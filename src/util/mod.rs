// FollowCheck - util/mod.rs
//
// Utility modules: error types, named constants, logging setup.
// Depends only on core::model vocabulary types.

pub mod constants;
pub mod error;
pub mod logging;
