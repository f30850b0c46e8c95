use std::collections::BTreeMap;

use serde::Serialize;
use tracing::{debug, info};

use crate::processor::Transition;
use crate::spec::{AnswerValue, QuizSpec};

/// Position of the flow in the quiz state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "state", content = "index", rename_all = "snake_case")]
pub enum FlowState {
    Question(usize),
    Rejected,
    Succeeded,
}

impl FlowState {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, FlowState::Question(_))
    }
}

/// Result of a backward navigation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackNavigation {
    /// Moved to the given question.
    Previous(usize),
    /// Nothing earlier in the quiz; the caller should leave for the home screen.
    Home,
}

/// In-memory progress of one user through a quiz.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuizSession {
    total_questions: usize,
    current_question: usize,
    answers: Vec<AnswerValue>,
    selections: BTreeMap<usize, usize>,
    rejected: bool,
    succeeded: bool,
}

impl QuizSession {
    pub fn new(total_questions: usize) -> Self {
        Self {
            total_questions,
            current_question: 0,
            answers: Vec::new(),
            selections: BTreeMap::new(),
            rejected: false,
            succeeded: false,
        }
    }

    /// Session sized for `spec`.
    pub fn for_spec(spec: &QuizSpec) -> Self {
        Self::new(spec.total_questions())
    }

    pub fn total_questions(&self) -> usize {
        self.total_questions
    }

    pub fn current_question(&self) -> usize {
        self.current_question
    }

    /// Jumps to `index`. Out-of-range indices are ignored.
    pub fn set_current_question(&mut self, index: usize) -> bool {
        if index >= self.total_questions {
            debug!(index, total = self.total_questions, "ignoring out-of-range question index");
            return false;
        }
        self.current_question = index;
        true
    }

    pub fn answers(&self) -> &[AnswerValue] {
        &self.answers
    }

    /// Answers recorded for the questions before the current one.
    pub fn prior_answers(&self) -> &[AnswerValue] {
        let end = self.answers.len().min(self.current_question);
        &self.answers[..end]
    }

    pub fn selections(&self) -> &BTreeMap<usize, usize> {
        &self.selections
    }

    pub fn selection_for(&self, question: usize) -> Option<usize> {
        self.selections.get(&question).copied()
    }

    /// Option chosen on the current question, restored when revisiting it.
    pub fn selected_option(&self) -> Option<usize> {
        self.selection_for(self.current_question)
    }

    /// Records `option` as the choice for the current question.
    pub fn select_option(&mut self, option: usize) -> bool {
        if self.is_terminal() {
            return false;
        }
        self.selections.insert(self.current_question, option);
        true
    }

    pub fn is_rejected(&self) -> bool {
        self.rejected
    }

    pub fn set_rejected(&mut self, rejected: bool) {
        self.rejected = rejected;
        if rejected {
            self.succeeded = false;
        }
    }

    pub fn is_succeeded(&self) -> bool {
        self.succeeded
    }

    pub fn set_succeeded(&mut self, succeeded: bool) {
        self.succeeded = succeeded;
        if succeeded {
            self.rejected = false;
        }
    }

    pub fn is_terminal(&self) -> bool {
        self.rejected || self.succeeded
    }

    pub fn state(&self) -> FlowState {
        if self.rejected {
            FlowState::Rejected
        } else if self.succeeded {
            FlowState::Succeeded
        } else {
            FlowState::Question(self.current_question)
        }
    }

    /// Applies a processed answer. Never moves backward and does nothing once
    /// the session is terminal.
    pub fn advance(&mut self, transition: Transition) -> FlowState {
        if self.is_terminal() {
            debug!(state = ?self.state(), "session is terminal; ignoring transition");
            return self.state();
        }

        self.answers = transition.updated_answers;
        if transition.is_rejection {
            info!(question = self.current_question, "quiz rejected");
            self.set_rejected(true);
        } else if transition.is_complete {
            info!(answers = self.answers.len(), "quiz completed");
            self.set_succeeded(true);
        } else if transition.next_question_index > self.current_question {
            self.set_current_question(transition.next_question_index);
        }
        self.state()
    }

    /// Steps back one question. Selections are kept so the earlier choice is
    /// restored; answers past the new position are dropped.
    pub fn go_back(&mut self) -> BackNavigation {
        if self.is_terminal() || self.current_question == 0 {
            return BackNavigation::Home;
        }
        self.current_question -= 1;
        self.answers.truncate(self.current_question + 1);
        debug!(question = self.current_question, "moved back");
        BackNavigation::Previous(self.current_question)
    }

    /// Restores the initial state.
    pub fn reset(&mut self) {
        info!("resetting quiz session");
        *self = Self::new(self.total_questions);
    }
}
