//! Minimal Supabase GoTrue client: password sign-in, sign-up, token
//! refresh, sign-out, and session change notifications.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net` and session
//! persistence in `localStorage`.
//! Server-side (SSR) and native tests: network calls return
//! [`AuthError::Unavailable`]; the in-memory session and event fan-out
//! behave the same as in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every operation returns `Result<_, AuthError>`. Callers decide whether a
//! failure is shown (login/register forms) or swallowed (session mirror,
//! logout).

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "supabase_test.rs"]
mod supabase_test;

use std::sync::{Arc, Mutex, PoisonError};

use serde_json::Value;

use super::provider::{AuthEvents, AuthListener, AuthProvider, Subscription};
use super::types::{AuthEvent, Session, SignUpOutcome, User};
use crate::config::SupabaseConfig;
use crate::util::storage;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    #[error("authentication is only available in the browser")]
    Unavailable,
    #[error("network error: {0}")]
    Network(String),
    #[error("{message}")]
    Api { status: u16, message: String },
    #[error("unexpected auth response: {0}")]
    Decode(String),
}

/// Build an [`AuthError::Api`] from a GoTrue error body.
///
/// GoTrue reports errors under several keys depending on the endpoint and
/// version; the first non-empty one wins.
pub(crate) fn api_error(status: u16, body: &Value) -> AuthError {
    let message = ["error_description", "msg", "message", "error"]
        .iter()
        .find_map(|key| body.get(key).and_then(Value::as_str))
        .map(str::trim)
        .filter(|m| !m.is_empty())
        .map_or_else(|| format!("request failed: {status}"), str::to_owned);
    AuthError::Api { status, message }
}

pub(crate) fn decode_session(body: Value, now_secs: i64) -> Result<Session, AuthError> {
    serde_json::from_value::<Session>(body)
        .map(|session| session.stamped(now_secs))
        .map_err(|e| AuthError::Decode(e.to_string()))
}

/// Sign-up answers with a session when the project auto-confirms accounts,
/// otherwise with the bare user record.
pub(crate) fn decode_sign_up(body: Value, now_secs: i64) -> Result<SignUpOutcome, AuthError> {
    if body.get("access_token").is_some() {
        return decode_session(body, now_secs).map(SignUpOutcome::SignedIn);
    }
    let user = body.get("user").cloned().unwrap_or(body);
    serde_json::from_value::<User>(user)
        .map(SignUpOutcome::ConfirmationRequired)
        .map_err(|e| AuthError::Decode(e.to_string()))
}

#[allow(clippy::cast_possible_truncation)]
fn now_secs() -> i64 {
    #[cfg(feature = "hydrate")]
    {
        (js_sys::Date::now() / 1000.0) as i64
    }
    #[cfg(not(feature = "hydrate"))]
    {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map_or(0, |d| i64::try_from(d.as_secs()).unwrap_or(i64::MAX))
    }
}

#[derive(Default)]
struct SessionSlot {
    session: Option<Session>,
    /// Whether `localStorage` has been consulted yet.
    restored: bool,
}

/// Handle to one Supabase project's auth API. Clones share state.
#[derive(Clone)]
pub struct SupabaseClient {
    config: Arc<SupabaseConfig>,
    slot: Arc<Mutex<SessionSlot>>,
    events: AuthEvents,
}

impl SupabaseClient {
    pub fn new(config: SupabaseConfig) -> Self {
        Self {
            config: Arc::new(config),
            slot: Arc::new(Mutex::new(SessionSlot::default())),
            events: AuthEvents::new(),
        }
    }

    /// Session held locally (memory, else `localStorage`), without any
    /// expiry check or network traffic.
    pub fn current_session(&self) -> Option<Session> {
        let mut slot = self.slot.lock().unwrap_or_else(PoisonError::into_inner);
        if !slot.restored {
            slot.restored = true;
            if slot.session.is_none() {
                slot.session = storage::load_json(&self.config.storage_key());
            }
        }
        slot.session.clone()
    }

    /// Current session, refreshing it first when the access token expired.
    ///
    /// # Errors
    ///
    /// Returns the refresh failure; the stale session is cleared first.
    pub async fn get_session(&self) -> Result<Option<Session>, AuthError> {
        let Some(session) = self.current_session() else {
            return Ok(None);
        };
        if !session.is_expired_at(now_secs()) {
            return Ok(Some(session));
        }
        log::debug!("access token expired, refreshing");
        match self.refresh(&session.refresh_token).await {
            Ok(fresh) => {
                self.store_session(fresh.clone(), AuthEvent::TokenRefreshed);
                Ok(Some(fresh))
            }
            Err(e) => {
                self.clear_session();
                Err(e)
            }
        }
    }

    /// Exchange email + password for a session.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::Api`] for rejected credentials and
    /// [`AuthError::Network`]/[`AuthError::Decode`] for transport problems.
    pub async fn sign_in_with_password(&self, email: &str, password: &str) -> Result<Session, AuthError> {
        let body = serde_json::json!({ "email": email, "password": password });
        let url = self.config.auth_endpoint("token?grant_type=password");
        let session = decode_session(self.post_json(&url, &body, None).await?, now_secs())?;
        self.store_session(session.clone(), AuthEvent::SignedIn);
        Ok(session)
    }

    /// Register a new account with `full_name` stored as user metadata.
    ///
    /// # Errors
    ///
    /// Same as [`SupabaseClient::sign_in_with_password`].
    pub async fn sign_up(&self, email: &str, password: &str, full_name: &str) -> Result<SignUpOutcome, AuthError> {
        let body = serde_json::json!({
            "email": email,
            "password": password,
            "data": { "full_name": full_name },
        });
        let url = self.config.auth_endpoint("signup");
        let outcome = decode_sign_up(self.post_json(&url, &body, None).await?, now_secs())?;
        if let SignUpOutcome::SignedIn(session) = &outcome {
            self.store_session(session.clone(), AuthEvent::SignedIn);
        }
        Ok(outcome)
    }

    /// Revoke the session remotely, then drop it locally.
    ///
    /// The local session is cleared and `SIGNED_OUT` emitted even when the
    /// revoke call fails.
    ///
    /// # Errors
    ///
    /// Returns the revoke failure, if any.
    pub async fn sign_out(&self) -> Result<(), AuthError> {
        let remote = match self.current_session() {
            Some(session) => {
                let url = self.config.auth_endpoint("logout");
                self.post_json(&url, &Value::Null, Some(&session.access_token))
                    .await
                    .map(|_| ())
            }
            None => Ok(()),
        };
        self.clear_session();
        remote
    }

    pub fn on_auth_state_change(&self, listener: AuthListener) -> Subscription {
        self.events.subscribe(listener)
    }

    async fn refresh(&self, refresh_token: &str) -> Result<Session, AuthError> {
        let body = serde_json::json!({ "refresh_token": refresh_token });
        let url = self.config.auth_endpoint("token?grant_type=refresh_token");
        decode_session(self.post_json(&url, &body, None).await?, now_secs())
    }

    fn store_session(&self, session: Session, event: AuthEvent) {
        storage::save_json(&self.config.storage_key(), &session);
        {
            let mut slot = self.slot.lock().unwrap_or_else(PoisonError::into_inner);
            slot.session = Some(session.clone());
            slot.restored = true;
        }
        self.events.emit(event, Some(&session));
    }

    fn clear_session(&self) {
        storage::remove(&self.config.storage_key());
        {
            let mut slot = self.slot.lock().unwrap_or_else(PoisonError::into_inner);
            slot.session = None;
            slot.restored = true;
        }
        self.events.emit(AuthEvent::SignedOut, None);
    }

    #[cfg(feature = "hydrate")]
    async fn post_json(&self, url: &str, body: &Value, bearer: Option<&str>) -> Result<Value, AuthError> {
        let bearer = bearer.unwrap_or(self.config.anon_key());
        let resp = gloo_net::http::Request::post(url)
            .header("apikey", self.config.anon_key())
            .header("Authorization", &format!("Bearer {bearer}"))
            .json(body)
            .map_err(|e| AuthError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| AuthError::Network(e.to_string()))?;
        let status = resp.status();
        let ok = resp.ok();
        let text = resp.text().await.map_err(|e| AuthError::Network(e.to_string()))?;
        if !ok {
            // Error bodies are not always JSON (gateway errors); fall back to the status.
            let value = serde_json::from_str(&text).unwrap_or(Value::Null);
            return Err(api_error(status, &value));
        }
        if text.trim().is_empty() {
            return Ok(Value::Null);
        }
        serde_json::from_str(&text).map_err(|e| AuthError::Decode(e.to_string()))
    }

    #[cfg(not(feature = "hydrate"))]
    async fn post_json(&self, url: &str, body: &Value, bearer: Option<&str>) -> Result<Value, AuthError> {
        let _ = (url, body, bearer);
        Err(AuthError::Unavailable)
    }
}

impl AuthProvider for SupabaseClient {
    async fn get_session(&self) -> Result<Option<Session>, AuthError> {
        SupabaseClient::get_session(self).await
    }

    fn on_auth_state_change(&self, listener: AuthListener) -> Subscription {
        SupabaseClient::on_auth_state_change(self, listener)
    }

    async fn sign_out(&self) -> Result<(), AuthError> {
        SupabaseClient::sign_out(self).await
    }
}
