use std::time::Duration;

// ── Fetch errors ──────────────────────────────────────────────────────────────

/// Everything that can go wrong while retrieving a page.
#[derive(thiserror::Error, Debug)]
pub enum FetchError {
    #[error("Invalid URL {url:?}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("HTTP error! status: {0}")]
    HttpStatus(u16),

    #[error("Request timeout")]
    Timeout(Duration),

    #[error("Transport error")]
    Transport(#[source] reqwest::Error),
}

// ── Analysis errors ───────────────────────────────────────────────────────────

/// User-facing failure of a whole fetch-then-scan run.
///
/// The message names only this layer; the cause is reachable through
/// `source()`, so print the chain (`{:#}` on an `anyhow::Error`) to show it.
#[derive(thiserror::Error, Debug)]
pub enum AnalyzeError {
    #[error("Failed to analyze webpage")]
    AnalysisFailed(#[from] FetchError),
}

impl AnalyzeError {
    /// The fetch failure this analysis error wraps.
    pub fn fetch_error(&self) -> &FetchError {
        match self {
            AnalyzeError::AnalysisFailed(e) => e,
        }
    }
}
