use futures_util::StreamExt;
use reqwest::{redirect, Client, StatusCode};
use std::time::Duration;
use tracing::debug;
use url::Url;

use crate::error::FetchError;

// ── Constants ─────────────────────────────────────────────────────────────────

/// User-agent sent with every page request unless overridden.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (compatible; WebScraper/1.0)";

/// Wall-clock budget for one fetch, body included.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Redirect hops allowed when `follow_redirects` is enabled.
pub const MAX_REDIRECTS: usize = 5;

// ── Configuration ─────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub struct FetchConfig {
    pub timeout: Duration,
    pub user_agent: String,
    /// Off by default: a 3xx answer is reported as a non-200 status.
    pub follow_redirects: bool,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            follow_redirects: false,
        }
    }
}

// ── Page fetch ────────────────────────────────────────────────────────────────

/// Fetch `url` with GET and return the whole body as text.
///
/// The URL is validated before anything touches the network. Only a 200
/// response counts as success; any other status is returned as
/// [`FetchError::HttpStatus`] without reading the body. The timeout covers
/// connecting, headers and body. When it fires the request future is dropped,
/// which closes the connection.
pub async fn fetch_page(url: &str, config: &FetchConfig) -> Result<String, FetchError> {
    let parsed = Url::parse(url).map_err(|source| FetchError::InvalidUrl {
        url: url.to_string(),
        source,
    })?;

    let client = build_client(config)?;

    debug!(%parsed, timeout = ?config.timeout, "sending GET");
    match tokio::time::timeout(config.timeout, get_body(&client, parsed)).await {
        Ok(result) => result,
        Err(_) => Err(FetchError::Timeout(config.timeout)),
    }
}

fn build_client(config: &FetchConfig) -> Result<Client, FetchError> {
    let policy = if config.follow_redirects {
        redirect::Policy::limited(MAX_REDIRECTS)
    } else {
        redirect::Policy::none()
    };

    Client::builder()
        .user_agent(config.user_agent.as_str())
        .redirect(policy)
        .build()
        .map_err(FetchError::Transport)
}

async fn get_body(client: &Client, url: Url) -> Result<String, FetchError> {
    let resp = client.get(url).send().await.map_err(FetchError::Transport)?;

    let status = resp.status();
    debug!(status = status.as_u16(), "response received");
    if status != StatusCode::OK {
        return Err(FetchError::HttpStatus(status.as_u16()));
    }

    // Decode once at the end so a character split across chunks survives.
    let mut body = Vec::new();
    let mut stream = resp.bytes_stream();
    while let Some(chunk) = stream.next().await {
        let bytes = chunk.map_err(FetchError::Transport)?;
        body.extend_from_slice(&bytes);
    }
    debug!(bytes = body.len(), "body read");

    Ok(String::from_utf8_lossy(&body).into_owned())
}
