//! The answer record and its lenient construction from JSON.

use serde_json::Value;

/// Field names of [`AnswerRecord`], in validation order. The boundary checks
/// presence in exactly this order and rejects on the first miss.
pub const REQUIRED_FIELDS: [&str; 7] = [
    "time_spent_alone",
    "stage_fear",
    "social_event_attendance",
    "going_outside",
    "drained_after_socializing",
    "friends_circle_size",
    "post_frequency",
];

/// One respondent's answers to the seven quiz questions.
///
/// Values are taken as-is: numbers outside their nominal range still land in
/// the nearest scoring bucket, and any string other than exactly "Yes" takes
/// the "No" branch. The engine never rejects malformed values.
#[derive(Debug, Clone)]
pub struct AnswerRecord {
    /// Hours per day spent alone (nominal 0-24).
    pub time_spent_alone: f64,
    /// "Yes"/"No": nervous when speaking in public or on stage.
    pub stage_fear: String,
    /// How often the respondent attends social events (nominal 0-10).
    pub social_event_attendance: f64,
    /// How often the respondent goes outside for activities (nominal 0-10).
    pub going_outside: f64,
    /// "Yes"/"No": feels drained after socializing.
    pub drained_after_socializing: String,
    /// Number of close friends (nominal 0-15).
    pub friends_circle_size: f64,
    /// How often the respondent posts on social media (nominal 0-10).
    pub post_frequency: f64,
}

impl AnswerRecord {
    /// Build a record from a JSON object whose field presence has already
    /// been checked, coercing values leniently: a non-numeric value becomes
    /// NaN, which compares false against every threshold and falls through
    /// to a rule's final branch; a non-string value becomes "", which takes
    /// every "No" branch.
    pub fn from_value(body: &Value) -> Self {
        Self {
            time_spent_alone: number_field(body, "time_spent_alone"),
            stage_fear: string_field(body, "stage_fear"),
            social_event_attendance: number_field(body, "social_event_attendance"),
            going_outside: number_field(body, "going_outside"),
            drained_after_socializing: string_field(body, "drained_after_socializing"),
            friends_circle_size: number_field(body, "friends_circle_size"),
            post_frequency: number_field(body, "post_frequency"),
        }
    }
}

/// First field of [`REQUIRED_FIELDS`] that is absent or JSON null in `body`.
///
/// Checks short-circuit: later fields are not inspected once one is missing.
pub fn first_missing_field(body: &Value) -> Option<&'static str> {
    REQUIRED_FIELDS
        .into_iter()
        .find(|field| body.get(field).is_none_or(Value::is_null))
}

fn number_field(body: &Value, field: &str) -> f64 {
    body.get(field).and_then(Value::as_f64).unwrap_or(f64::NAN)
}

fn string_field(body: &Value, field: &str) -> String {
    body.get(field)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_first_missing_field_reports_in_order() {
        assert_eq!(first_missing_field(&json!({})), Some("time_spent_alone"));

        let partial = json!({"time_spent_alone": 5, "stage_fear": "No"});
        assert_eq!(
            first_missing_field(&partial),
            Some("social_event_attendance")
        );
    }

    #[test]
    fn test_null_counts_as_missing() {
        let body = json!({
            "time_spent_alone": 5,
            "stage_fear": null,
            "social_event_attendance": 5,
            "going_outside": 5,
            "drained_after_socializing": "No",
            "friends_circle_size": 5,
            "post_frequency": 5,
        });
        assert_eq!(first_missing_field(&body), Some("stage_fear"));
    }

    #[test]
    fn test_complete_record_has_no_missing_field() {
        let body = json!({
            "time_spent_alone": 5,
            "stage_fear": "No",
            "social_event_attendance": 5,
            "going_outside": 5,
            "drained_after_socializing": "No",
            "friends_circle_size": 5,
            "post_frequency": 5,
        });
        assert_eq!(first_missing_field(&body), None);
    }

    #[test]
    fn test_non_object_body_is_missing_first_field() {
        assert_eq!(first_missing_field(&json!(42)), Some("time_spent_alone"));
        assert_eq!(first_missing_field(&json!([1, 2])), Some("time_spent_alone"));
    }

    #[test]
    fn test_from_value_coerces_wrong_types() {
        let body = json!({
            "time_spent_alone": "lots",
            "stage_fear": 7,
            "social_event_attendance": 5,
            "going_outside": true,
            "drained_after_socializing": "Yes",
            "friends_circle_size": 3,
            "post_frequency": null,
        });
        let record = AnswerRecord::from_value(&body);
        assert!(record.time_spent_alone.is_nan());
        assert_eq!(record.stage_fear, "");
        assert_eq!(record.social_event_attendance, 5.0);
        assert!(record.going_outside.is_nan());
        assert_eq!(record.drained_after_socializing, "Yes");
        assert_eq!(record.friends_circle_size, 3.0);
        assert!(record.post_frequency.is_nan());
    }
}
