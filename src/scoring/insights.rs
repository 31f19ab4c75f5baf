//! Canned insight selection.
//!
//! Five rules run in a fixed order; the first four selected strings win.
//! The stage-fear and drained rules always contribute one insight, the
//! other three have a dead zone in the middle of their range.

use crate::scoring::record::AnswerRecord;

const MAX_INSIGHTS: usize = 4;

/// Select up to [`MAX_INSIGHTS`] observations for the given answers.
///
/// The alone-time thresholds here (`<3`, `>8`) are tuned separately from
/// that rule's scoring tiers (`>4`, `>8`); the two sets are intentionally
/// not unified.
pub(crate) fn select_insights(answers: &AnswerRecord) -> Vec<String> {
    let mut insights = Vec::new();

    if answers.time_spent_alone > 8.0 {
        insights.push("You value significant alone time for reflection and recharging".to_string());
    } else if answers.time_spent_alone < 3.0 {
        insights.push(
            "You prefer being around others and gain energy from social interaction".to_string(),
        );
    }

    if answers.stage_fear == "Yes" {
        insights.push("Public speaking makes you nervous, which is common for introverts".to_string());
    } else {
        insights.push(
            "You feel comfortable speaking in public, showing extroverted confidence".to_string(),
        );
    }

    if answers.social_event_attendance <= 3.0 {
        insights.push("You prefer smaller, intimate gatherings over large social events".to_string());
    } else if answers.social_event_attendance >= 7.0 {
        insights.push("You actively seek out and enjoy social gatherings and events".to_string());
    }

    if answers.drained_after_socializing == "Yes" {
        insights.push("Social interactions drain your energy, requiring recovery time".to_string());
    } else {
        insights.push("Social interactions energize you and make you feel more alive".to_string());
    }

    if answers.friends_circle_size <= 3.0 {
        insights.push("You prefer a small, close-knit circle of deep friendships".to_string());
    } else if answers.friends_circle_size >= 10.0 {
        insights.push("You maintain a large network of friends and acquaintances".to_string());
    }

    insights.truncate(MAX_INSIGHTS);
    insights
}
