//! Command-line surface for `wpcom-post`.

use std::fmt;
use std::path::PathBuf;

use clap::{Args, Parser, ValueEnum, ValueHint, builder::BoolishValueParser};

use crate::domain::types::PostStatus;

/// Environment variable consulted when `--access-token` is omitted.
pub const ACCESS_TOKEN_ENV: &str = "WPCOM_ACCESS_TOKEN";

/// Command-line arguments for the `wpcom-post` binary.
#[derive(Debug, Parser)]
#[command(
    name = "wpcom-post",
    version,
    about = "Create a post on WordPress.com via REST API."
)]
pub struct CliArgs {
    /// Optional path to a configuration file.
    #[arg(
        long = "config-file",
        env = "WPCOM_POST_CONFIG_FILE",
        value_name = "PATH",
        value_hint = ValueHint::FilePath
    )]
    pub config_file: Option<PathBuf>,

    #[command(flatten)]
    pub post: PostArgs,

    #[command(flatten)]
    pub overrides: RuntimeOverrides,
}

#[derive(Debug, Args, Clone)]
pub struct PostArgs {
    /// Site domain or numeric site ID.
    #[arg(long)]
    pub site: String,

    /// Post title.
    #[arg(long)]
    pub title: String,

    /// Post content (HTML or plain text).
    #[arg(
        long,
        required_unless_present = "content_file",
        conflicts_with = "content_file"
    )]
    pub content: Option<String>,

    /// Read the post content from a file instead of --content.
    #[arg(long, value_name = "PATH", value_hint = ValueHint::FilePath)]
    pub content_file: Option<PathBuf>,

    /// Post status.
    #[arg(long, value_enum, default_value_t = PostStatusArg::Publish)]
    pub status: PostStatusArg,

    /// Optional post excerpt.
    #[arg(long, default_value = "")]
    pub excerpt: String,

    /// Optional URL slug.
    #[arg(long, default_value = "")]
    pub slug: String,

    /// Comma-separated categories (e.g. Blog,News).
    #[arg(long, default_value = "")]
    pub categories: String,

    /// Comma-separated tags (e.g. ai,wordpress).
    #[arg(long, default_value = "")]
    pub tags: String,

    /// OAuth bearer token.
    #[arg(
        long,
        env = ACCESS_TOKEN_ENV,
        default_value = "",
        hide_env_values = true,
        hide_default_value = true
    )]
    pub access_token: String,

    /// Print endpoint and payload without sending the request.
    #[arg(long, default_value_t = false)]
    pub dry_run: bool,
}

#[derive(Debug, Args, Default, Clone)]
pub struct RuntimeOverrides {
    /// Override the REST API base URL.
    #[arg(long = "api-base", value_name = "URL")]
    pub api_base: Option<String>,

    /// Override the request timeout.
    #[arg(long = "timeout-seconds", value_name = "SECONDS")]
    pub timeout_seconds: Option<u64>,

    /// Override the base log level (trace|debug|info|warn|error).
    #[arg(long = "log-level", value_name = "LEVEL")]
    pub log_level: Option<String>,

    /// Toggle JSON logging.
    #[arg(
        long = "log-json",
        value_name = "BOOL",
        value_parser = BoolishValueParser::new()
    )]
    pub log_json: Option<bool>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum PostStatusArg {
    Publish,
    Draft,
    Pending,
    Private,
    Future,
}

impl PostStatusArg {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        PostStatus::from(self).as_str()
    }
}

impl fmt::Display for PostStatusArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<PostStatusArg> for PostStatus {
    fn from(value: PostStatusArg) -> Self {
        match value {
            PostStatusArg::Publish => PostStatus::Publish,
            PostStatusArg::Draft => PostStatus::Draft,
            PostStatusArg::Pending => PostStatus::Pending,
            PostStatusArg::Private => PostStatus::Private,
            PostStatusArg::Future => PostStatus::Future,
        }
    }
}
