//! Transport configuration for the REST client.
//!
//! # Design
//! - The app root builds one [`ClientConfig`] and hands it to the client explicitly.
//! - Header names are validated up front; browsers silently drop forbidden ones.

use thiserror::Error;

/// Header carrying the JSON media type on every request.
pub const JSON_CONTENT_TYPE: (&str, &str) = ("Content-Type", "application/json");

/// Header names a page script is not allowed to set on `fetch` requests.
const FORBIDDEN_HEADERS: [&str; 12] = [
    "accept-charset",
    "accept-encoding",
    "connection",
    "content-length",
    "cookie",
    "date",
    "host",
    "keep-alive",
    "origin",
    "referer",
    "te",
    "transfer-encoding",
];

/// Errors raised while assembling a [`ClientConfig`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ClientConfigError {
    /// Header name was empty or contained characters outside the token grammar.
    #[error("invalid header name '{name}'")]
    InvalidHeaderName {
        /// Offending header name.
        name: String,
    },
    /// Header name is controlled by the browser and cannot be set by scripts.
    #[error("header '{name}' is managed by the browser and cannot be set")]
    ForbiddenHeader {
        /// Offending header name.
        name: String,
    },
}

/// Base URL plus default headers applied to every outbound request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    base_url: String,
    headers: Vec<(String, String)>,
}

impl Default for ClientConfig {
    /// Origin-relative base URL with the JSON content header.
    fn default() -> Self {
        Self {
            base_url: String::new(),
            headers: vec![(
                JSON_CONTENT_TYPE.0.to_string(),
                JSON_CONTENT_TYPE.1.to_string(),
            )],
        }
    }
}

impl ClientConfig {
    /// Configuration with the given base URL and no default headers.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            headers: Vec::new(),
        }
    }

    /// Add or replace a default header (names compare case-insensitively).
    ///
    /// # Errors
    ///
    /// Returns [`ClientConfigError`] when the name is malformed or browser-managed.
    pub fn with_header(
        mut self,
        name: impl Into<String>,
        value: impl Into<String>,
    ) -> Result<Self, ClientConfigError> {
        let name = name.into();
        validate_header_name(&name)?;
        self.headers
            .retain(|(existing, _)| !existing.eq_ignore_ascii_case(&name));
        self.headers.push((name, value.into()));
        Ok(self)
    }

    /// Base URL prefixed onto request paths. Empty means relative to the page origin.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Default headers in insertion order.
    #[must_use]
    pub fn headers(&self) -> &[(String, String)] {
        &self.headers
    }

    /// Join the base URL and a request path with exactly one separating slash.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        let base = self.base_url.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        format!("{base}/{path}")
    }
}

fn validate_header_name(name: &str) -> Result<(), ClientConfigError> {
    let is_token = !name.is_empty()
        && name
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b"!#$%&'*+-.^_`|~".contains(&b));
    if !is_token {
        return Err(ClientConfigError::InvalidHeaderName {
            name: name.to_string(),
        });
    }
    let lowered = name.to_ascii_lowercase();
    if FORBIDDEN_HEADERS.contains(&lowered.as_str())
        || lowered.starts_with("proxy-")
        || lowered.starts_with("sec-")
    {
        return Err(ClientConfigError::ForbiddenHeader {
            name: name.to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_origin_relative_json() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url(), "");
        assert_eq!(
            config.headers(),
            &[("Content-Type".to_string(), "application/json".to_string())]
        );
    }

    #[test]
    fn url_joins_with_single_slash() {
        assert_eq!(ClientConfig::default().url("/api/login"), "/api/login");
        assert_eq!(ClientConfig::default().url("api/login"), "/api/login");
        let remote = ClientConfig::new("https://shop.example/");
        assert_eq!(remote.url("/api/login"), "https://shop.example/api/login");
    }

    #[test]
    fn content_length_is_rejected() {
        let err = ClientConfig::default()
            .with_header("Content-Length", "application/json")
            .unwrap_err();
        assert_eq!(
            err,
            ClientConfigError::ForbiddenHeader {
                name: "Content-Length".to_string()
            }
        );
        assert!(
            ClientConfig::default()
                .with_header("Sec-Fetch-Mode", "cors")
                .is_err()
        );
    }

    #[test]
    fn malformed_header_names_are_rejected() {
        for name in ["", "x header", "x:y", "naïve"] {
            assert!(
                matches!(
                    ClientConfig::default().with_header(name, "v"),
                    Err(ClientConfigError::InvalidHeaderName { .. })
                ),
                "{name:?} should be invalid"
            );
        }
    }

    #[test]
    fn headers_replace_case_insensitively() -> Result<(), ClientConfigError> {
        let config = ClientConfig::default()
            .with_header("x-trace", "a")?
            .with_header("content-type", "application/problem+json")?
            .with_header("X-Trace", "b")?;
        assert_eq!(
            config.headers(),
            &[
                (
                    "content-type".to_string(),
                    "application/problem+json".to_string()
                ),
                ("X-Trace".to_string(), "b".to_string()),
            ]
        );
        Ok(())
    }

    #[test]
    fn error_messages_name_the_header() {
        let err = ClientConfigError::ForbiddenHeader {
            name: "Cookie".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "header 'Cookie' is managed by the browser and cannot be set"
        );
    }
}
