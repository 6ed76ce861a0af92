//! Row structs and DTOs.
//!
//! Each submodule contains a `FromRow` + `Serialize` struct matching the
//! database row, plus any input DTOs the repositories accept.

pub mod history;
pub mod project;
pub mod team;
