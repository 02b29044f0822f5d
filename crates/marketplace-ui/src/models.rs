//! Shared UI and wire models.

use serde::{Deserialize, Serialize};

/// Toast variants surfaced by the notification layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    /// Error toast.
    Error,
}

impl ToastKind {
    /// Value for the `role` attribute announced to assistive tech.
    #[must_use]
    pub const fn aria_role(self) -> &'static str {
        match self {
            Self::Error => "alert",
        }
    }
}

/// Toast payload held by the queue.
#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    /// Monotonic toast identifier.
    pub id: u64,
    /// Display message for the toast.
    pub message: String,
    /// Severity classification.
    pub kind: ToastKind,
    /// Wall-clock time the toast was raised, in epoch milliseconds.
    pub raised_at_ms: f64,
}

/// Arguments for raising an error toast.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NotifyErrorArgs {
    /// Text shown in the toast.
    pub caption: String,
}

/// Body posted to `/api/login`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    /// Account login.
    pub login: String,
    /// Account password.
    pub password: String,
}

/// Token pair returned by `/api/login`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginResponse {
    /// Short-lived bearer token.
    pub access_token: String,
    /// Token used to mint new access tokens.
    pub refresh_token: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn login_request_uses_plain_field_names() -> Result<(), serde_json::Error> {
        let body = LoginRequest {
            login: "alice".to_string(),
            password: "secret".to_string(),
        };
        assert_eq!(
            serde_json::to_value(&body)?,
            json!({ "login": "alice", "password": "secret" })
        );
        Ok(())
    }

    #[test]
    fn login_response_reads_snake_case_tokens() -> Result<(), serde_json::Error> {
        let response: LoginResponse = serde_json::from_value(json!({
            "access_token": "a.b.c",
            "refresh_token": "r.s.t"
        }))?;
        assert_eq!(response.access_token, "a.b.c");
        assert_eq!(response.refresh_token, "r.s.t");
        Ok(())
    }

    #[test]
    fn error_toasts_announce_as_alerts() {
        assert_eq!(ToastKind::Error.aria_role(), "alert");
    }
}
