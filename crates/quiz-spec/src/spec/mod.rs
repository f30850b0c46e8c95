pub mod question;
pub mod quiz;

pub use question::{AnswerValue, Question, QuestionKind, QuizOption};
pub use quiz::{DEFAULT_QUIZ_JSON, OutcomeCopy, QuizSpec, SpecError};
