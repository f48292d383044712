use listscan::{check_target, FetchConfig, Report, DEFAULT_TIMEOUT, DEFAULT_USER_AGENT, USAGE};
use std::time::Duration;

// ── check_target ──────────────────────────────────────────────────────────────

#[test]
fn check_target_accepts_http_and_https() {
    assert_eq!(check_target(Some("http://example.com")), Some("http://example.com"));
    assert_eq!(check_target(Some("https://example.com/a?b=c")), Some("https://example.com/a?b=c"));
}

#[test]
fn check_target_rejects_missing_argument() {
    assert_eq!(check_target(None), None);
}

#[test]
fn check_target_rejects_other_prefixes() {
    assert_eq!(check_target(Some("example.com")), None);
    assert_eq!(check_target(Some("ftp://example.com")), None);
    assert_eq!(check_target(Some("HTTP://example.com")), None);
    assert_eq!(check_target(Some("")), None);
}

#[test]
fn check_target_is_only_a_prefix_test() {
    // full URL validation happens in the fetcher
    assert_eq!(check_target(Some("httpnonsense")), Some("httpnonsense"));
}

#[test]
fn usage_mentions_invocation() {
    assert!(USAGE.contains("Usage: listscan <url>"));
}

// ── FetchConfig ───────────────────────────────────────────────────────────────

#[test]
fn fetch_config_defaults() {
    let config = FetchConfig::default();
    assert_eq!(config.timeout, Duration::from_secs(10));
    assert_eq!(config.timeout, DEFAULT_TIMEOUT);
    assert_eq!(config.user_agent, DEFAULT_USER_AGENT);
    assert!(!config.follow_redirects);
}

// ── Report ────────────────────────────────────────────────────────────────────

#[test]
fn report_sentence() {
    let report = Report::new("https://example.com", 3);
    assert_eq!(report.sentence(), "The largest unordered list contains 3 items");
}

#[test]
fn report_sentence_zero() {
    let report = Report::new("https://example.com", 0);
    assert_eq!(report.sentence(), "The largest unordered list contains 0 items");
}

#[test]
fn report_json_shape() {
    let report = Report::new("https://example.com", 7);
    let v: serde_json::Value = serde_json::from_str(&report.to_json().unwrap()).unwrap();
    assert_eq!(v["url"], "https://example.com");
    assert_eq!(v["largest_list_items"], 7);
}
