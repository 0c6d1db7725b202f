//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`auth`, `page`, `session`) so components can
//! depend on small focused models. The app shell owns every instance; none
//! of them is global.

pub mod auth;
pub mod page;
pub mod session;
