// ============================================================================
// Bot Framework activity records
// ============================================================================
//
// Only the fields the bot reads or writes are modelled. Unknown fields in
// inbound payloads are ignored.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{BotReply, HeroCard};

pub const HERO_CARD_CONTENT_TYPE: &str = "application/vnd.microsoft.card.hero";

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum ActivityType {
    Message,
    ConversationUpdate,
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChannelAccount {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ConversationAccount {
    pub id: String,
}

/// Inbound activity posted to `/api/messages`
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    #[serde(rename = "type")]
    pub activity_type: ActivityType,
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub service_url: Option<String>,
    #[serde(default)]
    pub channel_id: Option<String>,
    #[serde(default)]
    pub from: Option<ChannelAccount>,
    #[serde(default)]
    pub recipient: Option<ChannelAccount>,
    #[serde(default)]
    pub conversation: Option<ConversationAccount>,
    #[serde(default)]
    pub members_added: Vec<ChannelAccount>,
}

impl Activity {
    /// Trimmed message text, empty when absent
    pub fn trimmed_text(&self) -> &str {
        self.text.as_deref().unwrap_or_default().trim()
    }

    /// Members that joined, excluding the bot itself
    pub fn joined_members(&self) -> impl Iterator<Item = &ChannelAccount> {
        let bot_id = self.recipient.as_ref().map(|r| r.id.as_str());
        self.members_added
            .iter()
            .filter(move |member| Some(member.id.as_str()) != bot_id)
    }

    /// Where replies to this activity must be posted
    pub fn reply_target(&self) -> Option<ReplyTarget> {
        let service_url = self.service_url.as_deref().filter(|url| !url.is_empty())?;
        let conversation = self.conversation.as_ref().filter(|c| !c.id.is_empty())?;

        Some(ReplyTarget {
            service_url: service_url.trim_end_matches('/').to_string(),
            conversation: conversation.clone(),
            reply_to_id: self.id.clone(),
            bot: self.recipient.clone().unwrap_or_default(),
            user: self.from.clone().unwrap_or_default(),
            channel_id: self.channel_id.clone(),
        })
    }
}

/// Conversation reference extracted from an inbound activity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplyTarget {
    pub service_url: String,
    pub conversation: ConversationAccount,
    pub reply_to_id: Option<String>,
    pub bot: ChannelAccount,
    pub user: ChannelAccount,
    pub channel_id: Option<String>,
}

impl ReplyTarget {
    /// Connector endpoint for a reply in this conversation
    pub fn activities_url(&self) -> String {
        match &self.reply_to_id {
            Some(reply_to) => format!(
                "{}/v3/conversations/{}/activities/{}",
                self.service_url, self.conversation.id, reply_to
            ),
            None => format!(
                "{}/v3/conversations/{}/activities",
                self.service_url, self.conversation.id
            ),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Attachment {
    pub content_type: String,
    pub content: HeroCard,
}

impl From<HeroCard> for Attachment {
    fn from(card: HeroCard) -> Self {
        Self {
            content_type: HERO_CARD_CONTENT_TYPE.to_string(),
            content: card,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum AttachmentLayout {
    List,
    Carousel,
}

/// Outbound message activity sent through the channel connector
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OutgoingActivity {
    #[serde(rename = "type")]
    pub activity_type: ActivityType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attachment_layout: Option<AttachmentLayout>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub attachments: Vec<Attachment>,
    pub from: ChannelAccount,
    pub recipient: ChannelAccount,
    pub conversation: ConversationAccount,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_to_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channel_id: Option<String>,
    pub timestamp: DateTime<Utc>,
}

impl OutgoingActivity {
    /// Addresses a rendered reply back to the sender of the inbound activity
    pub fn reply(target: &ReplyTarget, reply: BotReply) -> Self {
        let (text, attachment_layout, attachments) = match reply {
            BotReply::Text(text) => (Some(text), None, Vec::new()),
            BotReply::Attachment(card) => (None, None, vec![Attachment::from(card)]),
            BotReply::Carousel(cards) => (
                None,
                Some(AttachmentLayout::Carousel),
                cards.into_iter().map(Attachment::from).collect(),
            ),
        };

        Self {
            activity_type: ActivityType::Message,
            text,
            attachment_layout,
            attachments,
            from: target.bot.clone(),
            recipient: target.user.clone(),
            conversation: target.conversation.clone(),
            reply_to_id: target.reply_to_id.clone(),
            channel_id: target.channel_id.clone(),
            timestamp: Utc::now(),
        }
    }
}
