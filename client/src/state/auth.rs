//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! A non-authoritative copy of the provider's session, read by the
//! navigation bar and the learner dashboard. Only the session mirror
//! writes it.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::{Session, User};

/// Projection of the provider session into UI state.
///
/// `is_logged_in` is true exactly when `user` is present; construct values
/// through [`AuthState::from_session`] to keep it that way.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    pub is_logged_in: bool,
    pub user: Option<User>,
}

impl AuthState {
    pub fn from_session(session: Option<&Session>) -> Self {
        match session {
            Some(session) => Self { is_logged_in: true, user: Some(session.user.clone()) },
            None => Self::default(),
        }
    }

    pub fn display_name(&self) -> Option<&str> {
        self.user.as_ref().map(User::display_name)
    }
}
