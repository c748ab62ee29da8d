//! Dry-run or live dispatch of a single post.

use serde::Serialize;
use tracing::{debug, info};

use crate::application::error::PublishError;
use crate::config::{ApiSettings, PostArgs};
use crate::domain::{payload::Payload, post::PostDraft};
use crate::infra::http::{WpcomClient, endpoint};
use crate::util::input::read_value;

/// Immutable snapshot of one invocation's post and credentials.
#[derive(Debug, Clone)]
pub struct PublishConfig {
    pub draft: PostDraft,
    pub access_token: String,
    pub dry_run: bool,
}

impl PublishConfig {
    /// Resolve parsed arguments, reading `--content-file` when given.
    pub fn from_args(args: PostArgs) -> Result<Self, PublishError> {
        let PostArgs {
            site,
            title,
            content,
            content_file,
            status,
            excerpt,
            slug,
            categories,
            tags,
            access_token,
            dry_run,
        } = args;

        let content = read_value(content, content_file)?;
        Ok(Self {
            draft: PostDraft {
                site,
                title,
                content,
                status: status.into(),
                excerpt,
                slug,
                categories,
                tags,
            },
            access_token,
            dry_run,
        })
    }
}

/// What a dry run would have sent.
#[derive(Debug, Clone, Serialize)]
pub struct DryRunReport {
    pub endpoint: String,
    pub payload: Payload,
}

#[derive(Debug, Clone)]
pub enum Outcome {
    DryRun(DryRunReport),
    Created(serde_json::Value),
}

/// Build the payload and either report it (dry run) or POST it once.
pub async fn publish(api: &ApiSettings, config: &PublishConfig) -> Result<Outcome, PublishError> {
    let endpoint = endpoint(&api.base_url, &config.draft.site);
    let payload = Payload::from(&config.draft);

    if config.dry_run {
        info!(%endpoint, fields = payload.len(), "dry run, request not sent");
        return Ok(Outcome::DryRun(DryRunReport { endpoint, payload }));
    }

    if config.access_token.is_empty() {
        return Err(PublishError::MissingToken);
    }

    let client = WpcomClient::new(config.access_token.clone(), api.timeout)?;
    debug!(
        %endpoint,
        fields = payload.len(),
        timeout_secs = api.timeout.as_secs(),
        "dispatching post"
    );
    let created = client.create_post(&endpoint, &payload).await?;
    Ok(Outcome::Created(created))
}
