use serde::{Deserialize, Serialize};

use super::ItemId;

/// Presentational fields derived from an item id
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardItem {
    pub id: ItemId,
    pub title: String,
    pub image_url: String,
    pub link: String,
}

impl CardItem {
    pub fn from_id(id: ItemId) -> Self {
        Self {
            id,
            title: format!("Recommended item #{}", id),
            image_url: format!("https://picsum.photos/seed/{}/400/220", id),
            link: format!("https://example.org/items/{}", id),
        }
    }
}

/// Hero card content, serialized with Bot Framework field names
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HeroCard {
    pub title: String,
    pub subtitle: String,
    pub text: String,
    pub images: Vec<CardImage>,
    pub buttons: Vec<CardAction>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CardImage {
    pub url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CardAction {
    #[serde(rename = "type")]
    pub action_type: ActionType,
    pub title: String,
    pub value: String,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum ActionType {
    OpenUrl,
}

/// What the bot says back for one turn
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BotReply {
    Text(String),
    /// A message carrying exactly one card
    Attachment(HeroCard),
    /// Horizontally browsable cards
    Carousel(Vec<HeroCard>),
}

impl BotReply {
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }

    /// Number of cards carried by the reply
    pub fn card_count(&self) -> usize {
        match self {
            BotReply::Text(_) => 0,
            BotReply::Attachment(_) => 1,
            BotReply::Carousel(cards) => cards.len(),
        }
    }
}
