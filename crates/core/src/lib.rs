//! Domain logic for the team picker.
//!
//! Pure functions and types only: no database or HTTP dependencies, so both
//! the repository layer and the API handlers can share them.

pub mod error;
pub mod picker;
pub mod roster;
pub mod schedule;
pub mod types;
