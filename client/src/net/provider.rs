//! Auth provider contract and the listener registry behind
//! `on_auth_state_change`.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session mirror only needs three capabilities from a provider: read
//! the current session, subscribe to changes, and sign out. Keeping them
//! behind a trait lets the mirror be exercised against an in-memory
//! provider in tests while the browser build talks to Supabase.

#[cfg(test)]
#[path = "provider_test.rs"]
mod provider_test;

use std::future::Future;
use std::sync::{Arc, Mutex, PoisonError, Weak};

use super::supabase::AuthError;
use super::types::{AuthEvent, Session};

/// Callback invoked with every auth state change.
pub type AuthListener = Arc<dyn Fn(AuthEvent, Option<&Session>) + Send + Sync>;

/// Capabilities the application requires from an auth backend.
pub trait AuthProvider {
    /// Current session, if any.
    fn get_session(&self) -> impl Future<Output = Result<Option<Session>, AuthError>>;

    /// Register `listener` for every future state change.
    fn on_auth_state_change(&self, listener: AuthListener) -> Subscription;

    /// End the current session.
    fn sign_out(&self) -> impl Future<Output = Result<(), AuthError>>;
}

#[derive(Default)]
struct Registry {
    next_id: u64,
    listeners: Vec<(u64, AuthListener)>,
}

/// Shared fan-out of auth events to subscribed listeners.
#[derive(Clone, Default)]
pub struct AuthEvents {
    registry: Arc<Mutex<Registry>>,
}

impl AuthEvents {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&self, listener: AuthListener) -> Subscription {
        let mut registry = self.registry.lock().unwrap_or_else(PoisonError::into_inner);
        let id = registry.next_id;
        registry.next_id += 1;
        registry.listeners.push((id, listener));
        Subscription { id, registry: Arc::downgrade(&self.registry) }
    }

    /// Deliver `event` to every listener registered at the time of the call.
    ///
    /// Listeners run outside the registry lock, so they may subscribe or
    /// unsubscribe re-entrantly.
    pub fn emit(&self, event: AuthEvent, session: Option<&Session>) {
        let listeners: Vec<AuthListener> = {
            let registry = self.registry.lock().unwrap_or_else(PoisonError::into_inner);
            registry.listeners.iter().map(|(_, l)| Arc::clone(l)).collect()
        };
        log::debug!("auth event {event} -> {} listener(s)", listeners.len());
        for listener in listeners {
            listener(event, session);
        }
    }

    pub fn listener_count(&self) -> usize {
        self.registry.lock().unwrap_or_else(PoisonError::into_inner).listeners.len()
    }
}

/// Handle returned by [`AuthEvents::subscribe`].
///
/// Dropping the handle keeps the listener registered; call
/// [`Subscription::unsubscribe`] to remove it.
pub struct Subscription {
    id: u64,
    registry: Weak<Mutex<Registry>>,
}

impl Subscription {
    /// Remove the listener. Repeated calls, or calls after the provider is
    /// gone, do nothing.
    pub fn unsubscribe(&self) {
        let Some(registry) = self.registry.upgrade() else {
            return;
        };
        let mut registry = registry.lock().unwrap_or_else(PoisonError::into_inner);
        registry.listeners.retain(|(id, _)| *id != self.id);
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription").field("id", &self.id).finish_non_exhaustive()
    }
}
