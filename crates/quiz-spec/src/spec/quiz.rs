use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::spec::question::Question;

/// Built-in hair-loss consultation dataset.
pub const DEFAULT_QUIZ_JSON: &str = include_str!("../../data/hair_loss_quiz.json");

const DEFAULT_REJECTION: &str = "Unfortunately, we are unable to prescribe this medication for you. \
This is because finasteride can alter the PSA levels, which may be used to monitor for cancer. \
You should discuss this further with your GP or specialist if you would still like this medication.";

const DEFAULT_SUCCESS: &str = "Great news! We have the perfect treatment for your hair loss. \
Proceed to www.manual.co, and prepare to say hello to your new hair!";

#[derive(Debug, Error)]
pub enum SpecError {
    #[error("failed to parse quiz spec: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("quiz '{0}' has no questions")]
    NoQuestions(String),
    #[error("question {index} ('{prompt}') has no options")]
    NoOptions { index: usize, prompt: String },
    #[error("learn-more deck has no slides")]
    EmptyDeck,
}

/// Result copy shown once the flow reaches a terminal state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct OutcomeCopy {
    #[serde(default = "default_rejection")]
    pub rejection: String,
    #[serde(default = "default_success")]
    pub success: String,
}

impl Default for OutcomeCopy {
    fn default() -> Self {
        Self {
            rejection: default_rejection(),
            success: default_success(),
        }
    }
}

fn default_rejection() -> String {
    DEFAULT_REJECTION.to_string()
}

fn default_success() -> String {
    DEFAULT_SUCCESS.to_string()
}

fn default_version() -> String {
    "0.0.0".to_string()
}

/// Top-level quiz dataset. Loaded once and treated as read-only afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct QuizSpec {
    pub id: String,
    pub title: String,
    #[serde(default = "default_version")]
    pub version: String,
    pub questions: Vec<Question>,
    #[serde(default)]
    pub outcomes: OutcomeCopy,
}

impl QuizSpec {
    /// Parses a dataset and checks that every index the flow can reach exists.
    pub fn from_json(json: &str) -> Result<Self, SpecError> {
        let spec: QuizSpec = serde_json::from_str(json)?;
        spec.check_bounds()?;
        Ok(spec)
    }

    pub fn builtin() -> Result<Self, SpecError> {
        Self::from_json(DEFAULT_QUIZ_JSON)
    }

    /// JSON schema describing the dataset format.
    pub fn json_schema() -> serde_json::Value {
        schemars::schema_for!(QuizSpec).to_value()
    }

    pub fn check_bounds(&self) -> Result<(), SpecError> {
        if self.questions.is_empty() {
            return Err(SpecError::NoQuestions(self.id.clone()));
        }
        if let Some((index, question)) = self
            .questions
            .iter()
            .enumerate()
            .find(|(_, question)| question.options.is_empty())
        {
            return Err(SpecError::NoOptions {
                index,
                prompt: question.prompt.clone(),
            });
        }
        Ok(())
    }

    pub fn question(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    pub fn total_questions(&self) -> usize {
        self.questions.len()
    }

    pub fn is_last_question(&self, index: usize) -> bool {
        index + 1 == self.questions.len()
    }

    /// Whether the option at `option_index` of question `question_index` rejects.
    /// Unknown indices are never rejections.
    pub fn is_rejection_option(&self, question_index: usize, option_index: usize) -> bool {
        self.question(question_index)
            .and_then(|question| question.option(option_index))
            .map(|option| option.is_rejection)
            .unwrap_or(false)
    }
}
