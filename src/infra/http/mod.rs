//! Outbound HTTP to the WordPress.com REST API.

pub mod client;

pub use client::{WpcomClient, endpoint};
