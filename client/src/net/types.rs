//! Auth wire types shared with the Supabase GoTrue API.
//!
//! DESIGN
//! ======
//! Only the fields the UI actually reads are modeled; unknown JSON fields
//! are ignored so provider-side additions never break decoding.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Seconds before `expires_at` at which a session is already treated as
/// expired, so a token is never sent moments before it lapses.
pub const EXPIRY_MARGIN_SECS: i64 = 10;

/// Profile fields stored by the provider alongside the account.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserMetadata {
    #[serde(default)]
    pub full_name: Option<String>,
}

/// An authenticated account as reported by the auth provider.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Provider account identifier (UUID string).
    pub id: String,
    /// Sign-in email, absent for phone or anonymous accounts.
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub user_metadata: UserMetadata,
}

impl User {
    /// Name shown in navigation: full name, then email, then the raw id.
    pub fn display_name(&self) -> &str {
        self.user_metadata
            .full_name
            .as_deref()
            .filter(|name| !name.trim().is_empty())
            .or(self.email.as_deref())
            .unwrap_or(&self.id)
    }
}

/// A provider-issued session, as returned by the token endpoints.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub access_token: String,
    pub refresh_token: String,
    #[serde(default = "default_token_type")]
    pub token_type: String,
    /// Lifetime of `access_token` in seconds.
    #[serde(default)]
    pub expires_in: i64,
    /// Absolute expiry in Unix seconds, when the provider sends one.
    #[serde(default)]
    pub expires_at: Option<i64>,
    pub user: User,
}

fn default_token_type() -> String {
    "bearer".to_owned()
}

impl Session {
    /// Fill `expires_at` from `expires_in` when the provider omitted it.
    /// Both inputs are untrusted, so the sum saturates.
    #[must_use]
    pub fn stamped(mut self, now_secs: i64) -> Self {
        if self.expires_at.is_none() {
            self.expires_at = Some(now_secs.saturating_add(self.expires_in));
        }
        self
    }

    /// Whether the access token is expired (or about to be) at `now_secs`.
    /// Sessions without a known expiry never expire locally.
    pub fn is_expired_at(&self, now_secs: i64) -> bool {
        self.expires_at
            .is_some_and(|at| at.saturating_sub(EXPIRY_MARGIN_SECS) <= now_secs)
    }
}

/// Auth state change kinds emitted to subscribers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthEvent {
    SignedIn,
    SignedOut,
    TokenRefreshed,
}

impl AuthEvent {
    /// Provider event name, e.g. `SIGNED_IN`.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::SignedIn => "SIGNED_IN",
            Self::SignedOut => "SIGNED_OUT",
            Self::TokenRefreshed => "TOKEN_REFRESHED",
        }
    }
}

impl std::fmt::Display for AuthEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of a registration request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SignUpOutcome {
    /// The project auto-confirms accounts and a session was issued.
    SignedIn(Session),
    /// The account exists but the email address must be confirmed first.
    ConfirmationRequired(User),
}
