use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::spec::SpecError;

/// Built-in learn-more slides.
pub const DEFAULT_LEARN_MORE_JSON: &str = include_str!("../data/learn_more.json");

/// One learn-more slide.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct LearnMoreItem {
    pub id: u32,
    #[serde(rename = "assetID")]
    pub asset_id: String,
    pub title: String,
    pub header: String,
    pub subtitle: String,
    /// Illustration URI.
    pub image: String,
}

/// Where the "next" button of a slide leads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NextAction {
    /// The slide is the last one; the caller should leave the deck.
    pub is_last: bool,
    pub next_index: usize,
}

/// Ordered learn-more slides, read-only once loaded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct LearnMoreDeck {
    #[serde(rename = "data")]
    pub items: Vec<LearnMoreItem>,
}

impl LearnMoreDeck {
    pub fn from_json(json: &str) -> Result<Self, SpecError> {
        let deck: LearnMoreDeck = serde_json::from_str(json)?;
        if deck.items.is_empty() {
            return Err(SpecError::EmptyDeck);
        }
        Ok(deck)
    }

    pub fn builtin() -> Result<Self, SpecError> {
        Self::from_json(DEFAULT_LEARN_MORE_JSON)
    }

    pub fn item(&self, index: usize) -> Option<&LearnMoreItem> {
        self.items.get(index)
    }

    pub fn total_items(&self) -> usize {
        self.items.len()
    }

    pub fn is_last_screen(&self, index: usize) -> bool {
        index + 1 == self.items.len()
    }

    pub fn image_source(&self, index: usize) -> Option<&str> {
        self.item(index).map(|item| item.image.as_str())
    }

    /// Next slide after `current`. Indices past the end stay put and report
    /// the deck as finished.
    pub fn next_action(&self, current: usize) -> NextAction {
        if current + 1 >= self.items.len() {
            return NextAction {
                is_last: true,
                next_index: current,
            };
        }
        NextAction {
            is_last: false,
            next_index: current + 1,
        }
    }
}
