pub mod history;
pub mod picker;
pub mod presenter;
pub mod project;
pub mod team;
