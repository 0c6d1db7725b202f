//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns from page and
//! state logic so the rest of the crate compiles and tests natively.

pub mod scroll;
pub mod storage;
