// Claim Validator: flags responses whose wording contradicts ground-truth stats.

pub mod claims;
pub mod ground_truth;
pub mod report;
