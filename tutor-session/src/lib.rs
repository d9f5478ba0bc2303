//! # tutor-session
//!
//! Per-user conversation state for the tutor middleware.
//! Concurrent access via `DashMap`, one async lock per user.
//!
//! ## Modules
//!
//! - `context`: `SessionContext`: bounded FIFO history plus topic index
//! - `topics`: tokenizer, stop-words, stemming, and topic matching
//! - `manager`: `SessionManager` registry with per-user turn locks

pub mod context;
pub mod manager;
pub mod topics;

pub use context::SessionContext;
pub use manager::{SessionGuard, SessionManager};
