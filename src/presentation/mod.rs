//! Output to the terminal: JSON on stdout, diagnostics on stderr.

pub mod print;
pub mod report;
