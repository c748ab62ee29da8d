//! wpcom-post: create a WordPress.com post with one authenticated REST call.
//!
//! The pipeline is parse → build payload → dispatch → report; see
//! [`application::publish::publish`] for the dispatch step.

pub mod application;
pub mod config;
pub mod domain;
pub mod infra;
pub mod presentation;
pub mod util;
