use tracing::{debug, warn};

use crate::processor::process_answer;
use crate::session::{BackNavigation, FlowState, QuizSession};
use crate::spec::{Question, QuizOption, QuizSpec};

/// Navigation the presentation layer should perform after a hook.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    Stay,
    Home,
}

/// Hooks driven by user input. The session is borrowed for the lifetime of
/// the controller, so its owner decides when it is created and dropped.
/// A session sized for a different quiz is replaced by a fresh one.
pub struct QuizFlow<'a> {
    spec: &'a QuizSpec,
    session: &'a mut QuizSession,
}

impl<'a> QuizFlow<'a> {
    pub fn new(spec: &'a QuizSpec, session: &'a mut QuizSession) -> Self {
        if session.total_questions() != spec.total_questions() {
            warn!(
                session_total = session.total_questions(),
                spec_total = spec.total_questions(),
                "session does not match quiz; starting over"
            );
            *session = QuizSession::for_spec(spec);
        }
        Self { spec, session }
    }

    pub fn spec(&self) -> &QuizSpec {
        self.spec
    }

    pub fn session(&self) -> &QuizSession {
        self.session
    }

    pub fn state(&self) -> FlowState {
        self.session.state()
    }

    /// Question to display, or `None` once the flow is terminal.
    pub fn current_question(&self) -> Option<&'a Question> {
        match self.session.state() {
            FlowState::Question(index) => self.spec.question(index),
            FlowState::Rejected | FlowState::Succeeded => None,
        }
    }

    pub fn selected_option(&self) -> Option<&'a QuizOption> {
        let question = self.current_question()?;
        question.option(self.session.selected_option()?)
    }

    pub fn on_select_option(&mut self, option_index: usize) -> bool {
        let in_range = self
            .current_question()
            .is_some_and(|question| option_index < question.options.len());
        if !in_range {
            debug!(option_index, "ignoring selection");
            return false;
        }
        self.session.select_option(option_index)
    }

    /// Submits the current selection. Answers recorded at or after the current
    /// question are replaced, so revisiting a question re-answers it.
    pub fn on_next(&mut self) -> FlowState {
        let current = self.session.current_question();
        let Some(selected) = self.session.selected_option() else {
            return self.session.state();
        };
        if self.session.is_terminal() {
            return self.session.state();
        }

        let transition = process_answer(
            self.spec,
            current,
            Some(selected),
            self.session.prior_answers(),
        );
        debug!(
            current,
            selected,
            next = transition.next_question_index,
            rejected = transition.is_rejection,
            complete = transition.is_complete,
            "processed answer"
        );
        self.session.advance(transition)
    }

    pub fn on_back(&mut self) -> Navigation {
        match self.session.go_back() {
            BackNavigation::Previous(_) => Navigation::Stay,
            BackNavigation::Home => Navigation::Home,
        }
    }

    /// Leaves the flow. A finished session is reset so the next visit starts
    /// over; an unfinished one is left as is.
    pub fn on_go_home(&mut self) -> Navigation {
        if self.session.is_terminal() {
            self.session.reset();
        }
        Navigation::Home
    }
}
