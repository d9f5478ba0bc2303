//! Configuration system for the tutor middleware.
//! TOML-based, 3-layer resolution: env > file > defaults.

pub mod analysis_config;
pub mod defaults;
pub mod runtime_config;
pub mod session_config;
pub mod tutor_config;

pub use analysis_config::{MathConfig, MemoryConfig, StyleConfig};
pub use runtime_config::{MiddlewareConfig, ObservabilityConfig};
pub use session_config::SessionConfig;
pub use tutor_config::TutorConfig;
