//! Fault boundary around sub-validators.
//!
//! A validator that panics must never block a response. The panic is caught,
//! logged, and reported as [`TutorError::ValidatorFault`] for the caller to
//! downgrade to an inconclusive verdict.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

use tutor_core::errors::{TutorError, TutorResult};
use tutor_observability::tracing_setup::events;

/// Run `check`, converting a panic into a validator fault.
pub fn guarded<T>(user_id: &str, component: &str, check: impl FnOnce() -> T) -> TutorResult<T> {
    panic::catch_unwind(AssertUnwindSafe(check)).map_err(|payload| {
        let reason = panic_message(payload.as_ref());
        events::validator_fault(user_id, component, &reason);
        TutorError::ValidatorFault {
            component: component.to_string(),
            reason,
        }
    })
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}
