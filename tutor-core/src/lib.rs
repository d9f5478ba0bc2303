//! # tutor-core
//!
//! Foundation crate for the tutor response-integrity middleware.
//! Defines the shared models, traits, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::TutorConfig;
pub use errors::{TutorError, TutorResult};
pub use models::{ChatMessage, LearningStyleProfile, MessageFormat, Role, UserProfile};
