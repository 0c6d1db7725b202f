use std::sync::atomic::AtomicUsize;

use futures::executor::block_on;

use super::*;
use crate::net::provider::{AuthEvents, AuthListener};
use crate::net::supabase::AuthError;
use crate::net::types::{User, UserMetadata};

type QueryHook = Box<dyn FnOnce() + Send>;

/// In-memory provider with scripted responses.
struct MockProvider {
    events: AuthEvents,
    initial: Result<Option<Session>, AuthError>,
    sign_out_result: Result<(), AuthError>,
    sign_out_calls: AtomicUsize,
    /// Runs inside `get_session`, before it resolves.
    during_query: Mutex<Option<QueryHook>>,
}

impl MockProvider {
    fn new(initial: Result<Option<Session>, AuthError>) -> Self {
        Self {
            events: AuthEvents::new(),
            initial,
            sign_out_result: Ok(()),
            sign_out_calls: AtomicUsize::new(0),
            during_query: Mutex::new(None),
        }
    }

    fn failing_sign_out(mut self) -> Self {
        self.sign_out_result = Err(AuthError::Network("offline".to_owned()));
        self
    }

    fn with_query_hook(self, hook: impl FnOnce() + Send + 'static) -> Self {
        *self.during_query.lock().unwrap() = Some(Box::new(hook));
        self
    }

    fn emit(&self, event: AuthEvent, session: Option<&Session>) {
        self.events.emit(event, session);
    }
}

impl AuthProvider for MockProvider {
    async fn get_session(&self) -> Result<Option<Session>, AuthError> {
        let hook = self.during_query.lock().unwrap().take();
        if let Some(hook) = hook {
            hook();
        }
        self.initial.clone()
    }

    fn on_auth_state_change(&self, listener: AuthListener) -> Subscription {
        self.events.subscribe(listener)
    }

    async fn sign_out(&self) -> Result<(), AuthError> {
        self.sign_out_calls.fetch_add(1, Ordering::SeqCst);
        self.sign_out_result.clone()
    }
}

fn session_for(id: &str) -> Session {
    Session {
        access_token: format!("at-{id}"),
        refresh_token: format!("rt-{id}"),
        token_type: "bearer".to_owned(),
        expires_in: 3600,
        expires_at: None,
        user: User {
            id: id.to_owned(),
            email: Some(format!("{id}@example.com")),
            user_metadata: UserMetadata::default(),
        },
    }
}

fn user_id(auth: RwSignal<AuthState>) -> Option<String> {
    auth.get_untracked().user.map(|u| u.id)
}

// =============================================================
// Initialization
// =============================================================

#[test]
fn no_session_and_no_events_stays_logged_out() {
    let auth = RwSignal::new(AuthState::default());
    let provider = MockProvider::new(Ok(None));
    let mirror = SessionMirror::new(auth);

    mirror.subscribe(&provider);
    block_on(mirror.load_initial(&provider));

    let state = auth.get_untracked();
    assert!(!state.is_logged_in);
    assert!(state.user.is_none());
}

#[test]
fn existing_session_logs_in() {
    let auth = RwSignal::new(AuthState::default());
    let provider = MockProvider::new(Ok(Some(session_for("ada"))));
    let mirror = SessionMirror::new(auth);

    block_on(mirror.load_initial(&provider));

    assert!(auth.get_untracked().is_logged_in);
    assert_eq!(user_id(auth), Some("ada".to_owned()));
}

#[test]
fn failed_initial_query_leaves_default_state() {
    let auth = RwSignal::new(AuthState::default());
    let provider = MockProvider::new(Err(AuthError::Network("offline".to_owned())));
    let mirror = SessionMirror::new(auth);

    block_on(mirror.load_initial(&provider));

    assert_eq!(auth.get_untracked(), AuthState::default());
}

#[test]
fn initial_query_superseded_by_newer_notification() {
    let auth = RwSignal::new(AuthState::default());
    let mirror = SessionMirror::new(auth);
    let provider = MockProvider::new(Ok(None));
    let events = provider.events.clone();
    let provider = provider.with_query_hook(move || events.emit(AuthEvent::SignedIn, Some(&session_for("ada"))));

    mirror.subscribe(&provider);
    block_on(mirror.load_initial(&provider));

    assert!(auth.get_untracked().is_logged_in);
    assert_eq!(user_id(auth), Some("ada".to_owned()));
}

#[test]
fn initial_query_after_teardown_is_dropped() {
    let auth = RwSignal::new(AuthState::default());
    let mirror = SessionMirror::new(auth);
    let mirror_in_hook = mirror.clone();
    let provider = MockProvider::new(Ok(Some(session_for("ada")))).with_query_hook(move || mirror_in_hook.teardown());

    mirror.subscribe(&provider);
    block_on(mirror.load_initial(&provider));

    assert_eq!(auth.get_untracked(), AuthState::default());
    assert!(!mirror.is_alive());
}

// =============================================================
// Notifications
// =============================================================

#[test]
fn notification_with_session_overwrites_prior_user() {
    let auth = RwSignal::new(AuthState::default());
    let provider = MockProvider::new(Ok(None));
    let mirror = SessionMirror::new(auth);
    mirror.subscribe(&provider);

    provider.emit(AuthEvent::SignedIn, Some(&session_for("ada")));
    assert_eq!(user_id(auth), Some("ada".to_owned()));

    provider.emit(AuthEvent::SignedIn, Some(&session_for("grace")));
    assert!(auth.get_untracked().is_logged_in);
    assert_eq!(user_id(auth), Some("grace".to_owned()));
}

#[test]
fn notification_without_session_logs_out() {
    let auth = RwSignal::new(AuthState::default());
    let provider = MockProvider::new(Ok(None));
    let mirror = SessionMirror::new(auth);
    mirror.subscribe(&provider);

    provider.emit(AuthEvent::SignedIn, Some(&session_for("ada")));
    provider.emit(AuthEvent::SignedOut, None);

    let state = auth.get_untracked();
    assert!(!state.is_logged_in);
    assert!(state.user.is_none());
}

#[test]
fn resubscribe_replaces_previous_subscription() {
    let auth = RwSignal::new(AuthState::default());
    let provider = MockProvider::new(Ok(None));
    let mirror = SessionMirror::new(auth);

    mirror.subscribe(&provider);
    mirror.subscribe(&provider);

    assert_eq!(provider.events.listener_count(), 1);
}

// =============================================================
// Teardown
// =============================================================

#[test]
fn notifications_after_teardown_are_inert() {
    let auth = RwSignal::new(AuthState::default());
    let provider = MockProvider::new(Ok(None));
    let mirror = SessionMirror::new(auth);
    mirror.subscribe(&provider);

    mirror.teardown();
    provider.emit(AuthEvent::SignedIn, Some(&session_for("ada")));

    assert_eq!(auth.get_untracked(), AuthState::default());
    assert_eq!(provider.events.listener_count(), 0);
}

#[test]
fn apply_after_teardown_is_ignored() {
    let auth = RwSignal::new(AuthState::default());
    let mirror = SessionMirror::new(auth);
    mirror.teardown();
    mirror.apply(Some(&session_for("ada")));
    assert_eq!(auth.get_untracked(), AuthState::default());
}

#[test]
fn teardown_without_subscription_is_noop() {
    let auth = RwSignal::new(AuthState::default());
    let mirror = SessionMirror::new(auth);
    mirror.teardown();
    mirror.teardown();
    assert!(!mirror.is_alive());
}

#[test]
fn subscribe_after_teardown_does_nothing() {
    let auth = RwSignal::new(AuthState::default());
    let provider = MockProvider::new(Ok(None));
    let mirror = SessionMirror::new(auth);
    mirror.teardown();
    mirror.subscribe(&provider);
    assert_eq!(provider.events.listener_count(), 0);
}

// =============================================================
// Logout
// =============================================================

#[test]
fn logout_returns_home_after_successful_sign_out() {
    let provider = MockProvider::new(Ok(None));
    let selector = PageSelector::new(Page::MyLearning);

    block_on(logout(&provider, selector));

    assert_eq!(selector.current_untracked(), Page::Home);
    assert_eq!(provider.sign_out_calls.load(Ordering::SeqCst), 1);
}

#[test]
fn logout_returns_home_even_when_sign_out_fails() {
    let provider = MockProvider::new(Ok(None)).failing_sign_out();
    let selector = PageSelector::new(Page::Courses);

    block_on(logout(&provider, selector));

    assert_eq!(selector.current_untracked(), Page::Home);
    assert_eq!(provider.sign_out_calls.load(Ordering::SeqCst), 1);
}
