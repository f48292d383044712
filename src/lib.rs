pub mod error;
pub mod fetch;
pub mod scanner;

pub use error::{AnalyzeError, FetchError};
pub use fetch::{fetch_page, FetchConfig, DEFAULT_TIMEOUT, DEFAULT_USER_AGENT};
pub use scanner::{
    count_list_items, find_largest_list, find_list, find_list_item, lists, ItemMatch, ListMatch,
};

use serde::Serialize;
use tracing::{debug, info};

/// Printed to stderr when the command line has no usable URL.
pub const USAGE: &str = "Please provide a URL as an argument\n\
                         Usage: listscan <url>\n\
                         Example: listscan https://example.com";

// ── Argument check ────────────────────────────────────────────────────────────

/// Accept the positional argument only if it starts with `http`.
///
/// This is a cheap guard run before any network activity; full URL
/// validation happens in [`fetch_page`].
pub fn check_target(arg: Option<&str>) -> Option<&str> {
    arg.filter(|url| url.starts_with("http"))
}

// ── Analysis ──────────────────────────────────────────────────────────────────

/// Fetch `url` with the default settings and return the largest list's item count.
pub async fn analyze(url: &str) -> Result<usize, AnalyzeError> {
    analyze_with(url, &FetchConfig::default()).await
}

pub async fn analyze_with(url: &str, config: &FetchConfig) -> Result<usize, AnalyzeError> {
    info!(url, "analyzing webpage");
    let html = fetch_page(url, config).await.map_err(|e| {
        debug!(url, error = %e, "fetch failed");
        AnalyzeError::from(e)
    })?;

    let largest = find_largest_list(&html);
    debug!(url, largest, "scan complete");
    Ok(largest)
}

// ── Output ────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    pub url: String,
    pub largest_list_items: usize,
}

impl Report {
    pub fn new(url: impl Into<String>, largest_list_items: usize) -> Self {
        Self {
            url: url.into(),
            largest_list_items,
        }
    }

    pub fn sentence(&self) -> String {
        format!(
            "The largest unordered list contains {} items",
            self.largest_list_items
        )
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
