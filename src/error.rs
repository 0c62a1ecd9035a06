// src/error.rs
use reqwest::StatusCode;

/// Failures of one fetch attempt. The parser has no error type: a page
/// without a results table is a valid (pending) answer.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// Hidden Struts token missing from the landing page. Usually an expired
    /// session, layout drift, or an anti-bot interstitial.
    #[error("token not found on landing page")]
    TokenNotFound,

    /// Transport-level failure: DNS, TLS, connect, timeout, body decode.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The portal answered with a non-2xx status.
    #[error("HTTP status {status} from {url}")]
    Status { status: StatusCode, url: String },
}

impl FetchError {
    /// Short label for logs and error badges.
    pub fn kind(&self) -> &'static str {
        match self {
            FetchError::TokenNotFound => "token",
            FetchError::Http(_) | FetchError::Status { .. } => "http",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_and_status_are_distinguished() {
        let t = FetchError::TokenNotFound;
        assert_eq!(t.kind(), "token");

        let s = FetchError::Status { status: StatusCode::BAD_GATEWAY, url: s!("https://x") };
        assert_eq!(s.kind(), "http");
        assert!(s.to_string().contains("502"));
    }
}
