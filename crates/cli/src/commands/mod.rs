//! CLI command implementations

pub mod catalog;
pub mod clarify;
pub mod evaluate;
pub mod explain;
