//! CLI command implementations.

pub mod check;
pub mod dsn;
pub mod features;
pub mod show;
pub mod vars;
