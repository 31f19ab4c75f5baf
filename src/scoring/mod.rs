//! The scoring engine: a deterministic point accumulator over the seven quiz
//! answers.
//!
//! Pure and total: any record with the seven field names classifies without
//! error, regardless of how well-formed the values are.

mod engine;
mod insights;
mod record;
mod report;

pub use engine::{ClassificationResult, EXTROVERT, INTROVERT, classify};
pub use record::{AnswerRecord, REQUIRED_FIELDS, first_missing_field};
