use serde_json::{Value, json};

use crate::answers::Outcome;
use crate::session::{FlowState, QuizSession};
use crate::spec::{QuestionKind, QuizSpec};

/// Status labels returned by the renderers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderStatus {
    /// A question is waiting for an answer.
    NeedInput,
    /// The flow ended on a rejecting answer.
    Rejected,
    /// Every question was answered without rejection.
    Complete,
}

impl RenderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            RenderStatus::NeedInput => "need_input",
            RenderStatus::Rejected => "rejected",
            RenderStatus::Complete => "complete",
        }
    }
}

impl From<FlowState> for RenderStatus {
    fn from(state: FlowState) -> Self {
        match Outcome::from(state) {
            Outcome::InProgress => RenderStatus::NeedInput,
            Outcome::Rejected => RenderStatus::Rejected,
            Outcome::Succeeded => RenderStatus::Complete,
        }
    }
}

#[derive(Debug, Clone)]
pub struct RenderProgress {
    /// 1-based position of the current question.
    pub position: usize,
    pub total: usize,
}

#[derive(Debug, Clone)]
pub struct RenderOption {
    pub index: usize,
    pub display: String,
    pub selected: bool,
}

#[derive(Debug, Clone)]
pub struct RenderQuestion {
    pub index: usize,
    pub prompt: String,
    pub kind: QuestionKind,
    pub options: Vec<RenderOption>,
}

/// Everything a screen needs to draw the current flow state.
#[derive(Debug, Clone)]
pub struct RenderPayload {
    pub quiz_id: String,
    pub quiz_title: String,
    pub status: RenderStatus,
    pub progress: RenderProgress,
    pub question: Option<RenderQuestion>,
    pub can_go_back: bool,
    pub outcome_message: Option<String>,
}

pub fn build_render_payload(spec: &QuizSpec, session: &QuizSession) -> RenderPayload {
    let state = session.state();
    let current = session.current_question();

    // A missing question renders nothing rather than failing.
    let question = match state {
        FlowState::Question(index) => spec.question(index).map(|question| RenderQuestion {
            index,
            prompt: question.prompt.clone(),
            kind: question.kind,
            options: question
                .options
                .iter()
                .enumerate()
                .map(|(option_index, option)| RenderOption {
                    index: option_index,
                    display: option.display_value.clone(),
                    selected: session.selection_for(index) == Some(option_index),
                })
                .collect(),
        }),
        FlowState::Rejected | FlowState::Succeeded => None,
    };

    let outcome_message = match state {
        FlowState::Rejected => Some(spec.outcomes.rejection.clone()),
        FlowState::Succeeded => Some(spec.outcomes.success.clone()),
        FlowState::Question(_) => None,
    };

    RenderPayload {
        quiz_id: spec.id.clone(),
        quiz_title: spec.title.clone(),
        status: state.into(),
        progress: RenderProgress {
            position: current + 1,
            total: spec.total_questions(),
        },
        question,
        can_go_back: !state.is_terminal() && current > 0,
        outcome_message,
    }
}

pub fn render_json_ui(payload: &RenderPayload) -> Value {
    let question = payload.question.as_ref().map(|question| {
        let options = question
            .options
            .iter()
            .map(|option| {
                json!({
                    "index": option.index,
                    "display": option.display,
                    "selected": option.selected,
                })
            })
            .collect::<Vec<_>>();
        json!({
            "index": question.index,
            "prompt": question.prompt,
            "type": question.kind.as_str(),
            "options": options,
        })
    });

    json!({
        "quiz_id": payload.quiz_id,
        "quiz_title": payload.quiz_title,
        "status": payload.status.as_str(),
        "progress": {
            "position": payload.progress.position,
            "total": payload.progress.total,
        },
        "question": question,
        "can_go_back": payload.can_go_back,
        "outcome": payload.outcome_message,
    })
}

pub fn render_text(payload: &RenderPayload) -> String {
    let mut lines = Vec::new();
    lines.push(format!("Quiz: {} ({})", payload.quiz_title, payload.quiz_id));

    if let Some(message) = &payload.outcome_message {
        lines.push(format!("Status: {}", payload.status.as_str()));
        lines.push(message.clone());
        return lines.join("\n");
    }

    let Some(question) = &payload.question else {
        return lines.join("\n");
    };

    lines.push(format!(
        "Question {}/{}: {}",
        payload.progress.position, payload.progress.total, question.prompt
    ));
    for option in &question.options {
        let marker = if option.selected { "*" } else { " " };
        lines.push(format!(" {} {}) {}", marker, option.index, option.display));
    }
    if payload.can_go_back {
        lines.push("Type 'back' for the previous question.".to_string());
    }

    lines.join("\n")
}
