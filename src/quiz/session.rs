//! Per-session quiz flow: an explicit state machine over the question
//! catalog with a single answer map.
//!
//! One value per respondent; nothing here is shared process-wide.

use serde_json::{Map, Value};

use crate::quiz::{QUESTIONS, Question};

/// Where a session currently is in the flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Welcome,
    /// Showing the question at this index.
    Quiz { index: usize },
    Results,
}

/// Errors from driving a [`QuizSession`] out of order.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error("Not currently on a question")]
    NotInQuiz,

    #[error("Question '{0}' has no answer yet")]
    Unanswered(&'static str),
}

/// One respondent's walk through the quiz.
#[derive(Debug, Clone)]
pub struct QuizSession {
    state: SessionState,
    answers: Map<String, Value>,
}

impl Default for QuizSession {
    fn default() -> Self {
        Self::new()
    }
}

impl QuizSession {
    pub fn new() -> Self {
        Self {
            state: SessionState::Welcome,
            answers: Map::new(),
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Current question, when in the quiz state.
    pub fn current_question(&self) -> Option<&'static Question> {
        match self.state {
            SessionState::Quiz { index } => QUESTIONS.get(index),
            _ => None,
        }
    }

    /// Welcome screen to first question. No-op elsewhere.
    pub fn start(&mut self) {
        if self.state == SessionState::Welcome {
            self.state = SessionState::Quiz { index: 0 };
        }
    }

    /// Record an answer for the current question, replacing any earlier one.
    pub fn answer(&mut self, value: Value) -> Result<(), SessionError> {
        let question = self.current_question().ok_or(SessionError::NotInQuiz)?;
        self.answers.insert(question.id.to_string(), value);
        Ok(())
    }

    /// Advance past the current question; requires it to be answered.
    /// Leaving the last question moves to results.
    pub fn next(&mut self) -> Result<(), SessionError> {
        let SessionState::Quiz { index } = self.state else {
            return Err(SessionError::NotInQuiz);
        };
        let question = &QUESTIONS[index];
        if !self.answers.contains_key(question.id) {
            return Err(SessionError::Unanswered(question.id));
        }
        if index + 1 < QUESTIONS.len() {
            self.state = SessionState::Quiz { index: index + 1 };
        } else {
            self.state = SessionState::Results;
        }
        Ok(())
    }

    /// Step back to the previous question. No-op on the first one.
    pub fn back(&mut self) {
        if let SessionState::Quiz { index } = self.state
            && index > 0
        {
            self.state = SessionState::Quiz { index: index - 1 };
        }
    }

    /// Results back to the welcome screen with a cleared answer map.
    pub fn restart(&mut self) {
        self.state = SessionState::Welcome;
        self.answers.clear();
    }

    /// Fraction of the quiz completed, for progress display.
    pub fn progress(&self) -> f64 {
        match self.state {
            SessionState::Welcome => 0.0,
            SessionState::Quiz { index } => (index + 1) as f64 / QUESTIONS.len() as f64,
            SessionState::Results => 1.0,
        }
    }

    /// The JSON object a client submits to the predict endpoint.
    pub fn answers_json(&self) -> Value {
        Value::Object(self.answers.clone())
    }
}
