//! The quiz domain model: the seven-question catalog and the per-session
//! state machine that walks a respondent through it.

pub mod session;

use serde::Serialize;

/// How a question is answered.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AnswerKind {
    /// Numeric answer picked from a bounded range.
    Slider {
        min: f64,
        max: f64,
        step: f64,
        #[serde(skip_serializing_if = "Option::is_none")]
        unit: Option<&'static str>,
    },
    /// One of a fixed pair of labelled choices.
    Choice { options: [ChoiceOption; 2] },
}

/// A selectable answer for a [`AnswerKind::Choice`] question.
#[derive(Debug, Clone, Serialize)]
pub struct ChoiceOption {
    /// Value submitted to the scoring engine ("Yes" or "No").
    pub value: &'static str,
    /// Label shown to the respondent.
    pub label: &'static str,
}

/// One quiz question. `id` doubles as the answer record field name.
#[derive(Debug, Clone, Serialize)]
pub struct Question {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    #[serde(flatten)]
    pub kind: AnswerKind,
}

/// The seven questions in presentation order, which is also the boundary's
/// field validation order.
pub static QUESTIONS: [Question; 7] = [
    Question {
        id: "time_spent_alone",
        title: "Time Spent Alone",
        description: "How many hours do you typically spend alone each day?",
        kind: AnswerKind::Slider {
            min: 0.0,
            max: 24.0,
            step: 0.5,
            unit: Some("hours"),
        },
    },
    Question {
        id: "stage_fear",
        title: "Stage Fear",
        description: "Do you experience fear when speaking in public or on stage?",
        kind: AnswerKind::Choice {
            options: [
                ChoiceOption {
                    value: "Yes",
                    label: "Yes, I get nervous",
                },
                ChoiceOption {
                    value: "No",
                    label: "No, I feel comfortable",
                },
            ],
        },
    },
    Question {
        id: "social_event_attendance",
        title: "Social Event Attendance",
        description: "How often do you attend social events? (0 = Never, 10 = Very Often)",
        kind: AnswerKind::Slider {
            min: 0.0,
            max: 10.0,
            step: 1.0,
            unit: None,
        },
    },
    Question {
        id: "going_outside",
        title: "Going Outside",
        description: "How often do you go outside for activities? (0 = Rarely, 10 = Very Often)",
        kind: AnswerKind::Slider {
            min: 0.0,
            max: 10.0,
            step: 1.0,
            unit: None,
        },
    },
    Question {
        id: "drained_after_socializing",
        title: "Energy After Socializing",
        description: "Do you feel drained after socializing with others?",
        kind: AnswerKind::Choice {
            options: [
                ChoiceOption {
                    value: "Yes",
                    label: "Yes, I need time to recharge",
                },
                ChoiceOption {
                    value: "No",
                    label: "No, I feel energized",
                },
            ],
        },
    },
    Question {
        id: "friends_circle_size",
        title: "Friends Circle Size",
        description: "How many close friends do you have? (0-15)",
        kind: AnswerKind::Slider {
            min: 0.0,
            max: 15.0,
            step: 1.0,
            unit: None,
        },
    },
    Question {
        id: "post_frequency",
        title: "Social Media Posting",
        description: "How often do you post on social media? (0 = Never, 10 = Very Often)",
        kind: AnswerKind::Slider {
            min: 0.0,
            max: 10.0,
            step: 1.0,
            unit: None,
        },
    },
];

/// Look up a question by its field id.
pub fn question(id: &str) -> Option<&'static Question> {
    QUESTIONS.iter().find(|q| q.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::REQUIRED_FIELDS;

    #[test]
    fn test_catalog_order_matches_validation_order() {
        let ids: Vec<&str> = QUESTIONS.iter().map(|q| q.id).collect();
        assert_eq!(ids, REQUIRED_FIELDS);
    }

    #[test]
    fn test_choice_questions_offer_yes_and_no() {
        for q in &QUESTIONS {
            if let AnswerKind::Choice { options } = &q.kind {
                assert_eq!(options[0].value, "Yes");
                assert_eq!(options[1].value, "No");
            }
        }
    }

    #[test]
    fn test_question_lookup() {
        assert_eq!(
            question("friends_circle_size").map(|q| q.title),
            Some("Friends Circle Size")
        );
        assert!(question("shoe_size").is_none());
    }

    #[test]
    fn test_slider_serialization_shape() {
        let json = serde_json::to_value(&QUESTIONS[0]).unwrap();
        assert_eq!(json["type"], "slider");
        assert_eq!(json["id"], "time_spent_alone");
        assert_eq!(json["max"], 24.0);
        assert_eq!(json["unit"], "hours");

        let radio = serde_json::to_value(&QUESTIONS[1]).unwrap();
        assert_eq!(radio["type"], "choice");
        assert_eq!(radio["options"][0]["label"], "Yes, I get nervous");
        // Sliders without a unit omit the field entirely.
        let bare = serde_json::to_value(&QUESTIONS[2]).unwrap();
        assert!(bare.get("unit").is_none());
    }
}
