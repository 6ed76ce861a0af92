//! Team picker API server library.
//!
//! Exposes the building blocks (config, state, error handling, routes,
//! router construction) so integration tests and both binary entrypoints
//! can share them.

pub mod config;
pub mod error;
pub mod handlers;
pub mod response;
pub mod router;
pub mod routes;
pub mod server;
pub mod state;
