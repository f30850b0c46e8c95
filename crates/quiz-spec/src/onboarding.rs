use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::spec::SpecError;

pub const DEFAULT_ONBOARDING_JSON: &str = include_str!("../data/onboarding.json");

/// Copy for the onboarding home screen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct OnboardingContent {
    pub heading1: String,
    pub heading2: String,
    pub subtitle: String,
    pub learn_more_text: String,
    pub button_text: String,
}

impl OnboardingContent {
    pub fn from_json(json: &str) -> Result<Self, SpecError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn builtin() -> Result<Self, SpecError> {
        Self::from_json(DEFAULT_ONBOARDING_JSON)
    }
}
