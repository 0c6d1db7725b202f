//! Page modules, one per [`Page`](crate::state::page::Page) variant.
//!
//! ARCHITECTURE
//! ============
//! Pages receive only the props the router injects (a navigation callback
//! and, for the auth forms, a success callback) and read shared auth state
//! from context when they need it.

pub mod about;
pub mod courses;
pub mod demo;
pub mod home;
pub mod login;
pub mod my_courses;
pub mod register;

/// Shown by the auth forms when the build carries no Supabase settings.
pub(crate) const AUTH_DISABLED: &str = "Sign-in is unavailable right now. Please try again later.";
