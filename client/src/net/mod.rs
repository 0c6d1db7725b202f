//! Networking modules for the hosted auth backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `provider` defines what the UI needs from an auth backend, `supabase`
//! implements it over the GoTrue REST API, and `types` defines the shared
//! wire schema.

pub mod provider;
pub mod supabase;
pub mod types;
