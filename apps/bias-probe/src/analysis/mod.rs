// Response Classifier: keyword labels per hypothesis, aggregated per condition.

pub mod counts;
pub mod labels;
