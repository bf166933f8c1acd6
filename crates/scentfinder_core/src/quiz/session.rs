//! Per-run quiz state.
//!
//! # Invariants
//! - `answers.len()` equals the index of the current question.
//! - The run completes exactly when every question has one answer.

use crate::config::DiscoveryConfig;
use crate::model::criteria::Criteria;
use crate::quiz::aggregate::{aggregate, QuizAnswer};
use crate::quiz::questions::{default_questions, QuizQuestion};
use log::info;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Result-set size for the final quiz results view.
pub const QUIZ_RESULT_LIMIT: u32 = 12;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuizError {
    /// A session needs at least one question.
    NoQuestions,
    /// Selected option index does not exist on the current question.
    OptionOutOfRange {
        question_id: u32,
        index: usize,
        available: usize,
    },
    /// Every question already has an answer.
    AlreadyComplete,
}

impl Display for QuizError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoQuestions => write!(f, "quiz has no questions"),
            Self::OptionOutOfRange {
                question_id,
                index,
                available,
            } => write!(
                f,
                "option {index} out of range for question {question_id} ({available} options)"
            ),
            Self::AlreadyComplete => write!(f, "quiz already complete"),
        }
    }
}

impl Error for QuizError {}

/// Outcome of answering the current question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuizStep {
    /// Index of the next question to show.
    Next(usize),
    /// Aggregated criteria for the whole run.
    Complete(Criteria),
}

/// Answer state for one quiz run.
#[derive(Debug, Clone)]
pub struct QuizSession {
    questions: Vec<QuizQuestion>,
    answers: Vec<QuizAnswer>,
    result_limit: u32,
}

impl QuizSession {
    pub fn new(questions: Vec<QuizQuestion>, result_limit: u32) -> Result<Self, QuizError> {
        if questions.is_empty() {
            return Err(QuizError::NoQuestions);
        }
        Ok(Self {
            questions,
            answers: Vec::new(),
            result_limit,
        })
    }

    /// Session over the built-in question bank.
    pub fn with_default_questions() -> Self {
        Self {
            questions: default_questions(),
            answers: Vec::new(),
            result_limit: QUIZ_RESULT_LIMIT,
        }
    }

    /// Session over the built-in question bank with the configured result limit.
    pub fn with_config(config: &DiscoveryConfig) -> Self {
        Self {
            questions: default_questions(),
            answers: Vec::new(),
            result_limit: config.normalized().quiz_result_limit,
        }
    }

    pub fn questions(&self) -> &[QuizQuestion] {
        &self.questions
    }

    pub fn answers(&self) -> &[QuizAnswer] {
        &self.answers
    }

    pub fn current_index(&self) -> usize {
        self.answers.len()
    }

    /// Question awaiting an answer, `None` once complete.
    pub fn current(&self) -> Option<&QuizQuestion> {
        self.questions.get(self.answers.len())
    }

    pub fn is_complete(&self) -> bool {
        self.answers.len() >= self.questions.len()
    }

    /// Records option `option_index` of the current question.
    pub fn answer(&mut self, option_index: usize) -> Result<QuizStep, QuizError> {
        let question = self.current().ok_or(QuizError::AlreadyComplete)?;
        let selected = question
            .options
            .get(option_index)
            .cloned()
            .ok_or(QuizError::OptionOutOfRange {
                question_id: question.id,
                index: option_index,
                available: question.options.len(),
            })?;

        self.answers.push(selected);
        if self.is_complete() {
            let criteria = aggregate(&self.answers, self.result_limit);
            info!(
                "event=quiz_complete module=quiz status=ok questions={} notes={} has_preferences={}",
                self.questions.len(),
                criteria.notes.len(),
                criteria.has_preferences()
            );
            return Ok(QuizStep::Complete(criteria));
        }
        Ok(QuizStep::Next(self.answers.len()))
    }

    /// Drops the latest answer. Returns `false` on the first question.
    pub fn back(&mut self) -> bool {
        self.answers.pop().is_some()
    }

    pub fn restart(&mut self) {
        self.answers.clear();
    }

    /// Progress shown while answering: the current question counts as reached.
    pub fn progress_percent(&self) -> u32 {
        let total = self.questions.len();
        let reached = (self.answers.len() + 1).min(total);
        u32::try_from(reached * 100 / total).unwrap_or(100)
    }
}
