//! Error handling for the tutor middleware.
//! One error enum per subsystem, `thiserror` only.

pub mod config_error;
pub mod math_error;
pub mod profile_error;

pub use config_error::ConfigError;
pub use math_error::MathError;
pub use profile_error::ProfileStoreError;

/// Top-level error aggregating subsystem errors via `From` conversions.
#[derive(Debug, thiserror::Error)]
pub enum TutorError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("math error: {0}")]
    Math(#[from] MathError),

    #[error("profile store error: {0}")]
    ProfileStore(#[from] ProfileStoreError),

    #[error("validator fault in {component}: {reason}")]
    ValidatorFault { component: String, reason: String },
}

pub type TutorResult<T> = Result<T, TutorError>;
