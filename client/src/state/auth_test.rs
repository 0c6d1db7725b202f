use super::*;
use crate::net::types::UserMetadata;

fn session() -> Session {
    Session {
        access_token: "at".to_owned(),
        refresh_token: "rt".to_owned(),
        token_type: "bearer".to_owned(),
        expires_in: 3600,
        expires_at: None,
        user: User {
            id: "u1".to_owned(),
            email: Some("alice@example.com".to_owned()),
            user_metadata: UserMetadata { full_name: Some("Alice".to_owned()) },
        },
    }
}

#[test]
fn auth_state_default_logged_out() {
    let state = AuthState::default();
    assert!(!state.is_logged_in);
    assert!(state.user.is_none());
    assert_eq!(state.display_name(), None);
}

#[test]
fn from_session_present_logs_in_with_user() {
    let state = AuthState::from_session(Some(&session()));
    assert!(state.is_logged_in);
    assert_eq!(state.user.as_ref().map(|u| u.id.as_str()), Some("u1"));
    assert_eq!(state.display_name(), Some("Alice"));
}

#[test]
fn from_session_absent_is_default() {
    assert_eq!(AuthState::from_session(None), AuthState::default());
}

#[test]
fn flag_tracks_user_presence() {
    for state in [AuthState::from_session(Some(&session())), AuthState::from_session(None)] {
        assert_eq!(state.is_logged_in, state.user.is_some());
    }
}
