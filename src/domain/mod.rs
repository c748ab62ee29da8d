//! Domain layer types and invariants.

pub mod payload;
pub mod post;
pub mod types;
