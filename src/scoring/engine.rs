//! The classification rules and their tier tables.

use serde::Serialize;

use crate::scoring::insights::select_insights;
use crate::scoring::record::AnswerRecord;

/// Label for the introvert-leaning side of the scale.
pub const INTROVERT: &str = "Introvert";
/// Label for the extrovert-leaning side of the scale.
pub const EXTROVERT: &str = "Extrovert";

/// Outcome of classifying one [`AnswerRecord`].
#[derive(Debug, Clone, Serialize)]
pub struct ClassificationResult {
    /// "Introvert" or "Extrovert".
    pub prediction: String,
    /// Winning score over total score, always in (0, 1].
    pub confidence: f64,
    /// Duplicate of `prediction`, kept as a separate field for the
    /// presentation layer.
    pub personality_type: String,
    /// At most four human-readable observations, in rule order.
    pub insights: Vec<String>,
}

// Each rule keeps its own literal tier table; the thresholds are tuned
// per-field and are not derived from any shared configuration.

/// Descending (exclusive lower bound, introvert points) tiers for time spent
/// alone. A value clearing neither bound scores +1 for the extrovert side:
/// this rule's extrovert award is asymmetric with the +2 of the others.
const ALONE_TIME_TIERS: [(f64, u32); 2] = [(8.0, 2), (4.0, 1)];

/// Ascending (inclusive upper bound, introvert points) tiers for the rules
/// where a low value leans introvert. A value above every bound scores +2
/// for the extrovert side instead.
const EVENT_ATTENDANCE_TIERS: [(f64, u32); 2] = [(3.0, 2), (6.0, 1)];
const GOING_OUTSIDE_TIERS: [(f64, u32); 2] = [(3.0, 2), (6.0, 1)];
const FRIENDS_CIRCLE_TIERS: [(f64, u32); 2] = [(3.0, 2), (8.0, 1)];
const POST_FREQUENCY_TIERS: [(f64, u32); 2] = [(3.0, 2), (6.0, 1)];

/// Classify one answer record.
///
/// Deterministic and total: malformed values (NaN numbers, non-"Yes"
/// strings) fall through each rule's branches rather than erroring.
pub fn classify(answers: &AnswerRecord) -> ClassificationResult {
    let (introvert, extrovert) = score(answers);

    let total = introvert + extrovert;
    let confidence = f64::from(introvert.max(extrovert)) / f64::from(total);
    // Ties resolve to Extrovert: only a strictly greater introvert score
    // flips the label.
    let prediction = if introvert > extrovert {
        INTROVERT
    } else {
        EXTROVERT
    };

    ClassificationResult {
        prediction: prediction.to_string(),
        confidence,
        personality_type: prediction.to_string(),
        insights: select_insights(answers),
    }
}

/// Run the seven scoring rules, returning (introvert, extrovert) totals.
///
/// Every rule adds at least one point to one side, so the total is always
/// at least 7 and never zero.
fn score(answers: &AnswerRecord) -> (u32, u32) {
    let mut introvert = 0u32;
    let mut extrovert = 0u32;

    // Time spent alone: more alone time leans introvert.
    match ALONE_TIME_TIERS
        .iter()
        .find(|(bound, _)| answers.time_spent_alone > *bound)
    {
        Some((_, points)) => introvert += points,
        None => extrovert += 1,
    }

    // Stage fear: anything other than exactly "Yes" counts as "No".
    if answers.stage_fear == "Yes" {
        introvert += 2;
    } else {
        extrovert += 2;
    }

    // Social event attendance: low attendance leans introvert.
    match lowest_tier(&EVENT_ATTENDANCE_TIERS, answers.social_event_attendance) {
        Some(points) => introvert += points,
        None => extrovert += 2,
    }

    // Going outside: staying in leans introvert.
    match lowest_tier(&GOING_OUTSIDE_TIERS, answers.going_outside) {
        Some(points) => introvert += points,
        None => extrovert += 2,
    }

    // Drained after socializing.
    if answers.drained_after_socializing == "Yes" {
        introvert += 2;
    } else {
        extrovert += 2;
    }

    // Friends circle size: a small circle leans introvert.
    match lowest_tier(&FRIENDS_CIRCLE_TIERS, answers.friends_circle_size) {
        Some(points) => introvert += points,
        None => extrovert += 2,
    }

    // Post frequency: rare posting leans introvert.
    match lowest_tier(&POST_FREQUENCY_TIERS, answers.post_frequency) {
        Some(points) => introvert += points,
        None => extrovert += 2,
    }

    (introvert, extrovert)
}

/// Introvert points for the first ascending tier whose bound the value does
/// not exceed; `None` when the value (or NaN) clears every bound.
fn lowest_tier(tiers: &[(f64, u32)], value: f64) -> Option<u32> {
    tiers
        .iter()
        .find(|(bound, _)| value <= *bound)
        .map(|(_, points)| *points)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(
        time_spent_alone: f64,
        stage_fear: &str,
        social_event_attendance: f64,
        going_outside: f64,
        drained_after_socializing: &str,
        friends_circle_size: f64,
        post_frequency: f64,
    ) -> AnswerRecord {
        AnswerRecord {
            time_spent_alone,
            stage_fear: stage_fear.to_string(),
            social_event_attendance,
            going_outside,
            drained_after_socializing: drained_after_socializing.to_string(),
            friends_circle_size,
            post_frequency,
        }
    }

    #[test]
    fn test_strong_introvert_scores_fourteen_to_zero() {
        let answers = record(10.0, "Yes", 2.0, 1.0, "Yes", 2.0, 1.0);
        assert_eq!(score(&answers), (14, 0));

        let result = classify(&answers);
        assert_eq!(result.prediction, INTROVERT);
        assert_eq!(result.personality_type, INTROVERT);
        assert_eq!(result.confidence, 1.0);
    }

    #[test]
    fn test_strong_extrovert_is_unanimous() {
        let answers = record(1.0, "No", 9.0, 9.0, "No", 12.0, 9.0);
        assert_eq!(score(&answers), (0, 13));

        let result = classify(&answers);
        assert_eq!(result.prediction, EXTROVERT);
        assert_eq!(result.confidence, 1.0);
    }

    #[test]
    fn test_midpoint_answers_lean_introvert() {
        // time 12 -> I+2, stage No -> E+2, attendance 5 -> I+1,
        // outside 5 -> I+1, drained No -> E+2, friends 7.5 -> I+1,
        // posting 5 -> I+1.
        let answers = record(12.0, "No", 5.0, 5.0, "No", 7.5, 5.0);
        assert_eq!(score(&answers), (6, 4));

        let result = classify(&answers);
        assert_eq!(result.prediction, INTROVERT);
        assert_eq!(result.confidence, 0.6);
    }

    #[test]
    fn test_tie_resolves_to_extrovert() {
        // time 1 -> E+1, stage Yes -> I+2, attendance 5 -> I+1,
        // outside 5 -> I+1, drained No -> E+2, friends 5 -> I+1,
        // posting 9 -> E+2. Five points each.
        let answers = record(1.0, "Yes", 5.0, 5.0, "No", 5.0, 9.0);
        assert_eq!(score(&answers), (5, 5));

        let result = classify(&answers);
        assert_eq!(result.prediction, EXTROVERT);
        assert_eq!(result.confidence, 0.5);
    }

    #[test]
    fn test_alone_time_tiers_are_asymmetric() {
        // The fall-through branch awards the extrovert side +1, not +2.
        assert_eq!(score(&record(9.0, "Yes", 0.0, 0.0, "Yes", 0.0, 0.0)).0, 14);
        assert_eq!(score(&record(5.0, "Yes", 0.0, 0.0, "Yes", 0.0, 0.0)), (13, 0));
        assert_eq!(score(&record(2.0, "Yes", 0.0, 0.0, "Yes", 0.0, 0.0)), (12, 1));
    }

    #[test]
    fn test_boundary_values_land_in_lower_tier() {
        // Inclusive upper bounds: exactly 3 and exactly 6 stay introvert.
        assert_eq!(lowest_tier(&EVENT_ATTENDANCE_TIERS, 3.0), Some(2));
        assert_eq!(lowest_tier(&EVENT_ATTENDANCE_TIERS, 6.0), Some(1));
        assert_eq!(lowest_tier(&EVENT_ATTENDANCE_TIERS, 6.5), None);
        assert_eq!(lowest_tier(&FRIENDS_CIRCLE_TIERS, 8.0), Some(1));
        assert_eq!(lowest_tier(&FRIENDS_CIRCLE_TIERS, 9.0), None);
    }

    #[test]
    fn test_out_of_range_values_fall_into_extreme_buckets() {
        // Negative numbers land in the lowest bucket, huge ones in the highest.
        assert_eq!(lowest_tier(&POST_FREQUENCY_TIERS, -5.0), Some(2));
        assert_eq!(lowest_tier(&POST_FREQUENCY_TIERS, 1000.0), None);
    }

    #[test]
    fn test_nan_falls_through_to_final_branch() {
        // A non-numeric answer coerces to NaN, which fails every comparison.
        let answers = record(f64::NAN, "Yes", f64::NAN, f64::NAN, "Yes", f64::NAN, f64::NAN);
        // time -> E+1, stage -> I+2, attendance/outside/friends/posting -> E+2 each,
        // drained -> I+2.
        assert_eq!(score(&answers), (4, 9));
    }

    #[test]
    fn test_non_yes_strings_take_the_no_branch() {
        let yes = record(5.0, "Yes", 5.0, 5.0, "Yes", 5.0, 5.0);
        for odd in ["yes", "YES", "", "maybe"] {
            let answers = record(5.0, odd, 5.0, 5.0, odd, 5.0, 5.0);
            let (introvert, extrovert) = score(&answers);
            assert_eq!((introvert + 4, extrovert - 4), score(&yes));
        }
    }

    #[test]
    fn test_total_is_at_least_seven_and_confidence_bounded() {
        let grid = [0.0, 3.0, 4.0, 6.0, 7.0, 8.0, 9.0, 24.0, f64::NAN];
        for &time in &grid {
            for stage in ["Yes", "No"] {
                for &attendance in &grid {
                    let answers = record(time, stage, attendance, 5.0, "No", 5.0, 5.0);
                    let (introvert, extrovert) = score(&answers);
                    assert!(introvert + extrovert >= 7);

                    let result = classify(&answers);
                    assert!(result.confidence > 0.0 && result.confidence <= 1.0);
                    assert_eq!(result.prediction, result.personality_type);
                    assert!(result.insights.len() <= 4);
                }
            }
        }
    }
}
