//! Session mirror: keeps [`AuthState`] in step with the auth provider.
//!
//! SYSTEM CONTEXT
//! ==============
//! The app shell creates one mirror on mount. It subscribes to provider
//! notifications, issues one initial session query, and tears both down on
//! unmount. Provider failures never reach the UI: they leave the state
//! logged out and are only logged.
//!
//! ORDERING
//! ========
//! Notifications and the initial query both funnel into [`SessionMirror::apply`].
//! A generation counter bumps on every notification, so an initial query that
//! resolves after a newer notification is discarded instead of overwriting it.
//! After teardown every apply is dropped, including a late initial query.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

use leptos::prelude::*;

use super::auth::AuthState;
use super::page::{Page, PageSelector};
use crate::net::provider::{AuthProvider, Subscription};
use crate::net::types::{AuthEvent, Session};

/// Mirrors provider session changes into an `RwSignal<AuthState>`.
#[derive(Clone)]
pub struct SessionMirror {
    auth: RwSignal<AuthState>,
    alive: Arc<AtomicBool>,
    generation: Arc<AtomicU64>,
    subscription: Arc<Mutex<Option<Subscription>>>,
}

impl SessionMirror {
    pub fn new(auth: RwSignal<AuthState>) -> Self {
        Self {
            auth,
            alive: Arc::new(AtomicBool::new(true)),
            generation: Arc::new(AtomicU64::new(0)),
            subscription: Arc::new(Mutex::new(None)),
        }
    }

    pub fn is_alive(&self) -> bool {
        self.alive.load(Ordering::Acquire)
    }

    /// Project `session` into the auth state. Ignored after teardown.
    pub fn apply(&self, session: Option<&Session>) {
        if !self.is_alive() {
            return;
        }
        self.auth.set(AuthState::from_session(session));
    }

    /// Handle one provider notification.
    pub fn on_event(&self, event: AuthEvent, session: Option<&Session>) {
        if !self.is_alive() {
            return;
        }
        log::debug!("session mirror received {event}");
        self.generation.fetch_add(1, Ordering::AcqRel);
        self.apply(session);
    }

    /// Subscribe to `provider` notifications, replacing any previous
    /// subscription held by this mirror.
    pub fn subscribe<P: AuthProvider>(&self, provider: &P) {
        if !self.is_alive() {
            return;
        }
        let mirror = self.clone();
        let subscription = provider.on_auth_state_change(Arc::new(
            move |event: AuthEvent, session: Option<&Session>| mirror.on_event(event, session),
        ));
        let previous = self
            .subscription
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .replace(subscription);
        if let Some(previous) = previous {
            previous.unsubscribe();
        }
    }

    /// Query the provider once for an existing session.
    ///
    /// A failure is logged and leaves the state untouched; a result that
    /// arrives after a newer notification or after teardown is dropped.
    pub async fn load_initial<P: AuthProvider>(&self, provider: &P) {
        let started_at = self.generation.load(Ordering::Acquire);
        let result = provider.get_session().await;
        if !self.is_alive() {
            log::debug!("initial session resolved after teardown; dropped");
            return;
        }
        if self.generation.load(Ordering::Acquire) != started_at {
            log::debug!("initial session superseded by a newer auth event");
            return;
        }
        match result {
            Ok(session) => self.apply(session.as_ref()),
            Err(e) => log::warn!("initial session query failed: {e}"),
        }
    }

    /// Stop mirroring. Safe to call with no subscription or more than once.
    pub fn teardown(&self) {
        self.alive.store(false, Ordering::Release);
        let subscription = self
            .subscription
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take();
        if let Some(subscription) = subscription {
            subscription.unsubscribe();
        }
    }
}

/// Sign out through `provider`, then return to the home page whether or not
/// the provider call succeeded.
pub async fn logout<P: AuthProvider>(provider: &P, selector: PageSelector) {
    if let Err(e) = provider.sign_out().await {
        log::warn!("sign-out failed: {e}");
    }
    selector.navigate(Page::Home);
}
