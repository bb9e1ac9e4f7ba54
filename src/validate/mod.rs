//! Edit-time and whole-graph validation.

pub mod connection;
pub mod cycle;
pub mod structure;

pub use connection::{can_connect, can_connect_draft};
pub use cycle::would_create_cycle;
pub use structure::structural_warnings;
