//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the persistent site chrome (navigation, footer) and
//! shared catalog pieces. They receive state through props and report user
//! intent through callbacks.

pub mod course_card;
pub mod footer;
pub mod navigation;
