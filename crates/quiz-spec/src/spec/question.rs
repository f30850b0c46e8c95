use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// How the options of a question are presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub enum QuestionKind {
    /// Options display an image URI.
    #[serde(rename = "ChoiceTypeImage")]
    ImageChoice,
    /// Options display plain text.
    #[serde(rename = "ChoiceTypeText")]
    TextChoice,
}

impl QuestionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            QuestionKind::ImageChoice => "image_choice",
            QuestionKind::TextChoice => "text_choice",
        }
    }
}

/// Value recorded when an option is chosen.
///
/// Datasets mix string and boolean values freely, so an answer sequence may
/// contain both variants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum AnswerValue {
    Flag(bool),
    Text(String),
}

impl fmt::Display for AnswerValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnswerValue::Flag(flag) => write!(f, "{}", flag),
            AnswerValue::Text(text) => f.write_str(text),
        }
    }
}

impl From<bool> for AnswerValue {
    fn from(value: bool) -> Self {
        AnswerValue::Flag(value)
    }
}

impl From<&str> for AnswerValue {
    fn from(value: &str) -> Self {
        AnswerValue::Text(value.to_string())
    }
}

impl From<String> for AnswerValue {
    fn from(value: String) -> Self {
        AnswerValue::Text(value)
    }
}

/// A single selectable answer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct QuizOption {
    /// Text label or image URI, depending on the question kind.
    #[serde(rename = "display", alias = "displayValue")]
    pub display_value: String,
    pub value: AnswerValue,
    /// Choosing this option ends the flow in the rejected state.
    #[serde(rename = "isRejection", default)]
    pub is_rejection: bool,
}

/// A quiz question with its ordered options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Question {
    #[serde(rename = "question")]
    pub prompt: String,
    #[serde(rename = "type")]
    pub kind: QuestionKind,
    pub options: Vec<QuizOption>,
}

impl Question {
    pub fn option(&self, index: usize) -> Option<&QuizOption> {
        self.options.get(index)
    }

    pub fn has_rejection(&self) -> bool {
        self.options.iter().any(|option| option.is_rejection)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn option_value_accepts_strings_and_booleans() {
        let options: Vec<QuizOption> = serde_json::from_value(json!([
            { "display": "Yes", "value": true, "isRejection": true },
            { "display": "Temples", "value": "Temples" }
        ]))
        .expect("deserialize");

        assert_eq!(options[0].value, AnswerValue::Flag(true));
        assert!(options[0].is_rejection);
        assert_eq!(options[1].value, AnswerValue::Text("Temples".into()));
        assert!(!options[1].is_rejection);
    }

    #[test]
    fn kind_uses_dataset_labels() {
        let kind: QuestionKind = serde_json::from_value(json!("ChoiceTypeImage")).unwrap();
        assert_eq!(kind, QuestionKind::ImageChoice);
        assert_eq!(
            serde_json::to_value(QuestionKind::TextChoice).unwrap(),
            json!("ChoiceTypeText")
        );
    }
}
