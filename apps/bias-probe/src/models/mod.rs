pub mod hypothesis;
pub mod records;

pub use hypothesis::Hypothesis;
pub use records::{PromptRecord, ResultRecord};
