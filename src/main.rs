use std::{io, process::ExitCode};

use tracing::debug;
use wpcom_post::{
    application::{
        error::PublishError,
        publish::{PublishConfig, publish},
    },
    config,
    infra::telemetry,
    presentation::report::{report_error, report_outcome},
};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            debug!(error = %err, "publish failed");
            report_error(&mut io::stderr().lock(), &err);
            ExitCode::from(err.exit_code())
        }
    }
}

async fn run() -> Result<(), PublishError> {
    let (cli_args, settings) = config::load_with_cli()?;
    telemetry::init(&settings.logging)?;
    debug!(
        api_base = %settings.api.base_url,
        timeout_secs = settings.api.timeout.as_secs(),
        "settings resolved"
    );

    let publish_config = PublishConfig::from_args(cli_args.post)?;
    let outcome = publish(&settings.api, &publish_config).await?;

    report_outcome(&mut io::stdout().lock(), &outcome)
}
