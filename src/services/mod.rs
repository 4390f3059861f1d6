//! Domain services used by HTTP routes.
//!
//! ARCHITECTURE
//! ============
//! Service modules own validation and persistence so route handlers can
//! stay focused on protocol translation and response envelopes.

pub mod store;
pub mod submission;
