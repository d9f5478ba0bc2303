pub mod chat_message;
pub mod learning_style;
pub mod math_validation;
pub mod memory_validation;
pub mod topic_record;
pub mod tutor_response;
pub mod user_profile;

pub use chat_message::{ChatMessage, MessageFormat, Role};
pub use learning_style::{LearningDimension, LearningStyleProfile};
pub use math_validation::{MathStatement, MathValidationResult, SolutionStep};
pub use memory_validation::{ClaimClass, MemoryClaim, MemoryValidationResult};
pub use topic_record::TopicRecord;
pub use tutor_response::PostProcessedResponse;
pub use user_profile::UserProfile;
