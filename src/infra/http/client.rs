use std::time::Duration;

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use reqwest::{
    Client, Response, Url,
    header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE, HeaderValue},
};
use tracing::debug;

use crate::application::error::PublishError;
use crate::domain::payload::Payload;

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";
const JSON_ACCEPT: &str = "application/json";

/// Everything but ASCII alphanumerics and `-._~` is escaped, `/` included.
const SITE_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Build the `posts/new` endpoint for `site` under the API base.
pub fn endpoint(base: &Url, site: &str) -> String {
    let base = base.as_str().trim_end_matches('/');
    let site = utf8_percent_encode(site, SITE_SEGMENT);
    format!("{base}/sites/{site}/posts/new")
}

#[derive(Clone, Debug)]
pub struct WpcomClient {
    client: Client,
    token: String,
}

impl WpcomClient {
    pub fn new(token: String, timeout: Duration) -> Result<Self, PublishError> {
        let client = Client::builder()
            .user_agent(Self::user_agent())
            .timeout(timeout)
            .build()?;
        Ok(Self { client, token })
    }

    pub fn user_agent() -> &'static str {
        concat!("wpcom-post/", env!("CARGO_PKG_VERSION"))
    }

    pub fn auth_header(&self) -> Result<HeaderValue, PublishError> {
        let mut value = HeaderValue::from_str(&format!("Bearer {}", self.token))
            .map_err(|e| PublishError::InvalidInput(format!("access token: {e}")))?;
        value.set_sensitive(true);
        Ok(value)
    }

    /// Send one form-encoded POST and decode the JSON reply. No retries.
    pub async fn create_post(
        &self,
        endpoint: &str,
        payload: &Payload,
    ) -> Result<serde_json::Value, PublishError> {
        let url = Url::parse(endpoint)?;
        let auth = self.auth_header()?;

        let resp = self
            .client
            .post(url)
            .header(AUTHORIZATION, auth)
            .header(CONTENT_TYPE, FORM_CONTENT_TYPE)
            .header(ACCEPT, JSON_ACCEPT)
            .body(payload.to_form_body())
            .send()
            .await?;
        Self::handle(resp).await
    }

    async fn handle(resp: Response) -> Result<serde_json::Value, PublishError> {
        let status = resp.status();
        debug!(status = status.as_u16(), "received response");
        let bytes = resp.bytes().await?;
        if !status.is_success() {
            let body = String::from_utf8_lossy(&bytes).into_owned();
            return Err(PublishError::Http {
                status: status.as_u16(),
                body,
            });
        }
        serde_json::from_slice(&bytes).map_err(PublishError::Decode)
    }
}
