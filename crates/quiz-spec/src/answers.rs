use serde::{Deserialize, Serialize};

use crate::session::{FlowState, QuizSession};
use crate::spec::{AnswerValue, QuizSpec};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    InProgress,
    Rejected,
    Succeeded,
}

impl From<FlowState> for Outcome {
    fn from(state: FlowState) -> Self {
        match state {
            FlowState::Question(_) => Outcome::InProgress,
            FlowState::Rejected => Outcome::Rejected,
            FlowState::Succeeded => Outcome::Succeeded,
        }
    }
}

/// Snapshot of the answers collected by a session, for handing to the host.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnswerSet {
    pub quiz_id: String,
    pub spec_version: String,
    pub outcome: Outcome,
    pub answers: Vec<AnswerValue>,
}

impl AnswerSet {
    pub fn from_session(spec: &QuizSpec, session: &QuizSession) -> Self {
        Self {
            quiz_id: spec.id.clone(),
            spec_version: spec.version.clone(),
            outcome: session.state().into(),
            answers: session.answers().to_vec(),
        }
    }

    pub fn to_cbor(&self) -> Result<Vec<u8>, serde_cbor::Error> {
        serde_cbor::to_vec(self)
    }

    pub fn from_cbor(bytes: &[u8]) -> Result<Self, serde_cbor::Error> {
        serde_cbor::from_slice(bytes)
    }

    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
