//! Application layer: the publish pipeline and its error taxonomy.

pub mod error;
pub mod publish;
