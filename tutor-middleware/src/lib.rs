//! # tutor-middleware
//!
//! Wraps an opaque LLM call with response-integrity checks: false memory
//! claims are rewritten, wrong arithmetic is corrected inline, and every
//! turn is serialized per user.
//!
//! ```text
//! pre_process_message ─▶ caller builds prompt, calls LLM ─▶ post_process_response
//!   lock user session        (outside this crate)              memory check
//!   append user message                                        math check
//!   fetch profile                                              append assistant turn
//! ```

pub mod context;
pub mod fault;
pub mod harness;
pub mod middleware;
pub mod profile_store;

pub use context::PreProcessedContext;
pub use harness::{replay_all, Expectation, HistoryTurn, RegressionCase, RegressionOutcome};
pub use middleware::AiTutorMiddleware;
pub use profile_store::{InMemoryProfileStore, NoProfileStore};
