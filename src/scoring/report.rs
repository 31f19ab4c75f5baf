//! Plain-text rendering of a classification result.

use std::fmt::Write as _;

use crate::scoring::engine::ClassificationResult;

impl ClassificationResult {
    /// Confidence as a rounded whole percentage.
    pub fn confidence_percentage(&self) -> u32 {
        (self.confidence * 100.0).round() as u32
    }

    /// Plain-text result sheet, the same shape the quiz front end offers as
    /// a download.
    pub fn text_report(&self) -> String {
        let mut out = String::new();
        out.push_str("Personality Classification Results\n");
        out.push_str("=================================\n\n");
        let _ = writeln!(out, "Personality Type: {}", self.personality_type);
        let _ = writeln!(out, "Confidence: {}%", self.confidence_percentage());
        out.push_str("\nKey Insights:\n");
        for insight in &self.insights {
            let _ = writeln!(out, "\u{2022} {insight}");
        }
        out
    }
}
