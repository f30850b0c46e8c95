use serde::Serialize;

use crate::spec::{AnswerValue, QuizSpec};

/// Outcome of submitting one answer. The caller decides how to apply it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Transition {
    pub is_rejection: bool,
    pub is_complete: bool,
    pub next_question_index: usize,
    pub updated_answers: Vec<AnswerValue>,
}

impl Transition {
    /// Transition that leaves index and answers untouched.
    pub fn unchanged(current: usize, answers: &[AnswerValue]) -> Self {
        Self {
            is_rejection: false,
            is_complete: false,
            next_question_index: current,
            updated_answers: answers.to_vec(),
        }
    }

    pub fn is_terminal(&self) -> bool {
        self.is_rejection || self.is_complete
    }
}

/// Maps a selected option on the current question to the next flow step.
///
/// Unknown question or option indices and a missing selection yield
/// [`Transition::unchanged`]. A rejecting option wins over completion, even on
/// the last question.
pub fn process_answer(
    spec: &QuizSpec,
    current: usize,
    selected: Option<usize>,
    answers: &[AnswerValue],
) -> Transition {
    let Some(option) = spec
        .question(current)
        .zip(selected)
        .and_then(|(question, index)| question.option(index))
    else {
        return Transition::unchanged(current, answers);
    };

    let mut updated_answers = Vec::with_capacity(answers.len() + 1);
    updated_answers.extend_from_slice(answers);
    updated_answers.push(option.value.clone());

    if option.is_rejection {
        return Transition {
            is_rejection: true,
            is_complete: false,
            next_question_index: current,
            updated_answers,
        };
    }

    if spec.is_last_question(current) {
        return Transition {
            is_rejection: false,
            is_complete: true,
            next_question_index: current,
            updated_answers,
        };
    }

    Transition {
        is_rejection: false,
        is_complete: false,
        next_question_index: current + 1,
        updated_answers,
    }
}
