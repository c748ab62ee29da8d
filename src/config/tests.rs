use std::io::Write;

use tempfile::Builder;

use super::*;

fn parse(args: &[&str]) -> CliArgs {
    let mut argv = vec!["wpcom-post"];
    argv.extend_from_slice(args);
    CliArgs::try_parse_from(argv).expect("valid arguments")
}

#[test]
fn defaults_point_at_public_api() {
    let settings = Settings::from_raw(RawSettings::default()).expect("valid settings");

    assert_eq!(settings.api.base_url.as_str(), DEFAULT_API_BASE);
    assert_eq!(settings.api.timeout, Duration::from_secs(30));
    assert_eq!(settings.logging.level, LevelFilter::WARN);
    assert!(matches!(settings.logging.format, LogFormat::Compact));
}

#[test]
fn cli_overrides_take_highest_precedence() {
    let mut raw = RawSettings::default();
    raw.api.base_url = Some("https://file.example/rest".to_string());
    raw.api.timeout_seconds = Some(5);
    raw.logging.level = Some("info".to_string());

    let overrides = RuntimeOverrides {
        api_base: Some("http://127.0.0.1:9000".to_string()),
        timeout_seconds: Some(12),
        log_level: Some("debug".to_string()),
        log_json: Some(true),
    };

    raw.apply_overrides(&overrides);
    let settings = Settings::from_raw(raw).expect("valid settings");

    assert_eq!(settings.api.base_url.as_str(), "http://127.0.0.1:9000/");
    assert_eq!(settings.api.timeout, Duration::from_secs(12));
    assert_eq!(settings.logging.level, LevelFilter::DEBUG);
    assert!(matches!(settings.logging.format, LogFormat::Json));
}

#[test]
fn zero_timeout_is_rejected() {
    let mut raw = RawSettings::default();
    raw.api.timeout_seconds = Some(0);

    let err = Settings::from_raw(raw).expect_err("zero timeout");
    assert!(matches!(
        err,
        LoadError::Invalid {
            key: "api.timeout_seconds",
            ..
        }
    ));
}

#[test]
fn non_http_base_is_rejected() {
    let mut raw = RawSettings::default();
    raw.api.base_url = Some("ftp://example.com/rest".to_string());

    let err = Settings::from_raw(raw).expect_err("ftp base");
    assert!(matches!(
        err,
        LoadError::Invalid {
            key: "api.base_url",
            ..
        }
    ));
}

#[test]
fn unparseable_log_level_is_rejected() {
    let mut raw = RawSettings::default();
    raw.logging.level = Some("chatty".to_string());

    let err = Settings::from_raw(raw).expect_err("bad level");
    assert!(matches!(
        err,
        LoadError::Invalid {
            key: "logging.level",
            ..
        }
    ));
}

#[test]
fn config_file_sets_api_base() {
    let mut file = Builder::new()
        .suffix(".toml")
        .tempfile()
        .expect("tmp file");
    file.write_all(b"[api]\nbase_url = \"http://localhost:8080/rest/v1.1\"\ntimeout_seconds = 7\n")
        .expect("write config");

    let path = file.path().to_str().expect("utf-8 path");
    let args = parse(&[
        "--config-file",
        path,
        "--site",
        "example.com",
        "--title",
        "T",
        "--content",
        "C",
    ]);
    let settings = load(&args).expect("settings");

    assert_eq!(
        settings.api.base_url.as_str(),
        "http://localhost:8080/rest/v1.1"
    );
    assert_eq!(settings.api.timeout, Duration::from_secs(7));
}

#[test]
fn missing_config_file_fails() {
    let args = parse(&[
        "--config-file",
        "/nonexistent/wpcom-post.toml",
        "--site",
        "example.com",
        "--title",
        "T",
        "--content",
        "C",
    ]);

    let err = load(&args).expect_err("missing file");
    assert!(matches!(err, LoadError::Build(_)));
}

#[test]
fn parse_post_arguments() {
    let args = parse(&[
        "--site",
        "example.wordpress.com",
        "--title",
        "Hello",
        "--content",
        "<p>Body</p>",
        "--status",
        "draft",
        "--categories",
        "Blog, News",
        "--access-token",
        "tok",
        "--dry-run",
    ]);

    assert_eq!(args.post.site, "example.wordpress.com");
    assert_eq!(args.post.title, "Hello");
    assert_eq!(args.post.content.as_deref(), Some("<p>Body</p>"));
    assert_eq!(args.post.status, PostStatusArg::Draft);
    assert_eq!(args.post.categories, "Blog, News");
    assert_eq!(args.post.excerpt, "");
    assert_eq!(args.post.access_token, "tok");
    assert!(args.post.dry_run);
}

#[test]
fn status_defaults_to_publish() {
    let args = parse(&["--site", "s", "--title", "T", "--content", "C"]);
    assert_eq!(args.post.status, PostStatusArg::Publish);
    assert!(!args.post.dry_run);
}

#[test]
fn unknown_status_is_a_parse_error() {
    let result = CliArgs::try_parse_from([
        "wpcom-post",
        "--site",
        "s",
        "--title",
        "T",
        "--content",
        "C",
        "--status",
        "published",
    ]);
    assert!(result.is_err());
}

#[test]
fn content_is_required() {
    let result = CliArgs::try_parse_from(["wpcom-post", "--site", "s", "--title", "T"]);
    assert!(result.is_err());
}

#[test]
fn content_file_satisfies_content_requirement() {
    let args = parse(&["--site", "s", "--title", "T", "--content-file", "post.html"]);
    assert!(args.post.content.is_none());
    assert_eq!(
        args.post.content_file.as_deref(),
        Some(std::path::Path::new("post.html"))
    );
}

#[test]
fn content_and_content_file_conflict() {
    let result = CliArgs::try_parse_from([
        "wpcom-post",
        "--site",
        "s",
        "--title",
        "T",
        "--content",
        "C",
        "--content-file",
        "post.html",
    ]);
    assert!(result.is_err());
}
