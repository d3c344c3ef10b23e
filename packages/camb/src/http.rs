//! HTTP client wrapper for fetching dictionary pages.

use std::thread;
use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::StatusCode;

use crate::config::HTTP_TIMEOUT_SECS;
use crate::error::{CambError, Result};

/// User agent string identifying this client.
const USER_AGENT: &str = concat!("camb/", env!("CARGO_PKG_VERSION"));

/// Maximum number of attempts for transient failures.
const MAX_RETRIES: u32 = 3;

/// Base delay for exponential backoff (milliseconds).
const RETRY_BASE_DELAY_MS: u64 = 500;

/// A fetched page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchedPage {
    /// Final URL after redirects.
    pub url: String,

    /// HTTP status code.
    pub status: u16,

    /// Response body as text.
    pub body: String,
}

impl FetchedPage {
    /// Whether the server answered 404.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        self.status == StatusCode::NOT_FOUND.as_u16()
    }
}

/// Create a configured HTTP client.
///
/// # Errors
/// Returns `Http` if the TLS backend cannot be initialized.
pub fn create_client() -> Result<Client> {
    let client = Client::builder()
        .timeout(Duration::from_secs(HTTP_TIMEOUT_SECS))
        .user_agent(USER_AGENT)
        .build()?;
    Ok(client)
}

/// Fetch a page with retry logic.
///
/// Uses exponential backoff for transient failures (network errors, 5xx
/// responses). A 404 is returned as a page: Merriam-Webster serves its
/// spelling suggestions with that status. Other client errors fail at once.
///
/// # Errors
/// Returns `UnexpectedStatus` for 4xx responses other than 404,
/// `RetriesExhausted` when every attempt failed transiently and `Http` for
/// other request errors.
pub fn fetch_page(client: &Client, url: &str) -> Result<FetchedPage> {
    let mut last_error: Option<String> = None;

    for attempt in 0..MAX_RETRIES {
        if attempt > 0 {
            // Exponential backoff: 500ms, 1000ms
            let delay = RETRY_BASE_DELAY_MS * (1 << (attempt - 1));
            tracing::debug!(attempt, delay_ms = delay, "Retrying after delay");
            thread::sleep(Duration::from_millis(delay));
        }

        match client.get(url).send() {
            Ok(response) => {
                let status = response.status();

                if status.is_server_error() {
                    tracing::warn!(
                        status = %status,
                        attempt = attempt + 1,
                        max_retries = MAX_RETRIES,
                        "Server error, will retry"
                    );
                    last_error = Some(format!("Server error: {status}"));
                    continue;
                }

                let final_url = response.url().to_string();
                if status.is_client_error() && status != StatusCode::NOT_FOUND {
                    return Err(CambError::UnexpectedStatus {
                        status: status.as_u16(),
                        url: final_url,
                    });
                }

                let body = response.text()?;
                tracing::debug!(
                    url = %final_url,
                    status = status.as_u16(),
                    bytes = body.len(),
                    "Fetched page"
                );
                return Ok(FetchedPage {
                    url: final_url,
                    status: status.as_u16(),
                    body,
                });
            }
            Err(e) => {
                if e.is_connect() || e.is_timeout() {
                    tracing::warn!(
                        error = %e,
                        attempt = attempt + 1,
                        max_retries = MAX_RETRIES,
                        "Connection error, will retry"
                    );
                    last_error = Some(e.to_string());
                    continue;
                }
                return Err(CambError::Http(e));
            }
        }
    }

    Err(CambError::RetriesExhausted {
        attempts: MAX_RETRIES,
        message: last_error.unwrap_or_else(|| "Unknown error".to_string()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_client() {
        let client = create_client();
        assert!(client.is_ok());
    }

    #[test]
    fn test_not_found_page() {
        let page = FetchedPage {
            url: "https://www.merriam-webster.com/dictionary/exampel".to_string(),
            status: 404,
            body: String::new(),
        };
        assert!(page.is_not_found());
    }
}
