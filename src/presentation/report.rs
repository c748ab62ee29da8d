use std::io::Write;

use crate::application::error::PublishError;
use crate::application::publish::Outcome;
use crate::presentation::print::print_json;

/// Print a successful outcome to `out`.
pub fn report_outcome<W: Write>(out: &mut W, outcome: &Outcome) -> Result<(), PublishError> {
    match outcome {
        Outcome::DryRun(report) => print_json(out, report),
        Outcome::Created(created) => print_json(out, created),
    }
}

/// One-line stderr message for a failure.
pub fn diagnostic(error: &PublishError) -> String {
    match error {
        PublishError::Http { .. } | PublishError::Network(_) => error.to_string(),
        other => format!("error: {other}"),
    }
}

pub fn report_error<W: Write>(err: &mut W, error: &PublishError) {
    // Nothing left to report to if stderr itself is gone.
    let _ = writeln!(err, "{}", diagnostic(error));
}
