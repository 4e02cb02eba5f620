use std::num::IntErrorKind;
use std::sync::Arc;

use crate::{
    models::{
        Activity, ActivityType, BotReply, RecommendationRequest, DEFAULT_K, DEFAULT_USER,
        MAX_SLATE_LEN,
    },
    services::{cards::render_cards, fallback::recommend_with_fallback, providers::RecommenderClient},
};

pub const GREETING: &str = "Hi! Type `/help` to see what I can do.";
pub const APOLOGY: &str = "Sorry, something went wrong on my side.";
const ECHO_PREFIX: &str = "you said: ";

/// Classification of one inbound text message
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Help,
    Recommend(RecommendationRequest),
    Echo(String),
}

/// Classifies a message: `help`, `/recommend <userId> [k]`, or echo
pub fn classify(text: &str) -> Command {
    let raw = text.trim();
    let lowered = raw.to_lowercase();

    if lowered == "help" || lowered == "/help" {
        return Command::Help;
    }

    if lowered.starts_with("/recommend") {
        let mut args = raw.split_whitespace().skip(1);
        let user = args.next().unwrap_or(DEFAULT_USER);
        let k = args.next().map_or(DEFAULT_K as i64, parse_k);
        return Command::Recommend(RecommendationRequest::new(user, k));
    }

    Command::Echo(raw.to_string())
}

/// Integers too large for `i64` still clamp; only non-numeric tokens get the default
fn parse_k(token: &str) -> i64 {
    match token.parse::<i64>() {
        Ok(k) => k,
        Err(error) => match error.kind() {
            IntErrorKind::PosOverflow => MAX_SLATE_LEN as i64,
            IntErrorKind::NegOverflow => 1,
            _ => DEFAULT_K as i64,
        },
    }
}

/// Per-turn bot logic; holds no state between messages
#[derive(Clone)]
pub struct RecBot {
    recommender: Arc<dyn RecommenderClient>,
}

impl RecBot {
    pub fn new(recommender: Arc<dyn RecommenderClient>) -> Self {
        Self { recommender }
    }

    pub fn help_text(&self) -> String {
        format!(
            "Commands:\n\
             • hello — echo\n\
             • /help — this help\n\
             • /recommend <userId> [k] — show a carousel (default k={})\n\
             (API: {})",
            DEFAULT_K,
            self.recommender.endpoint()
        )
    }

    /// Replies owed for one inbound activity, in send order
    pub async fn on_turn(&self, activity: &Activity) -> Vec<BotReply> {
        match activity.activity_type {
            ActivityType::Message => vec![self.on_message(activity.trimmed_text()).await],
            ActivityType::ConversationUpdate => activity
                .joined_members()
                .map(|_| BotReply::text(GREETING))
                .collect(),
            ActivityType::Other => Vec::new(),
        }
    }

    pub async fn on_message(&self, text: &str) -> BotReply {
        match classify(text) {
            Command::Help => BotReply::Text(self.help_text()),
            Command::Recommend(request) => {
                let item_ids =
                    recommend_with_fallback(self.recommender.as_ref(), &request.user, request.k)
                        .await;

                tracing::info!(
                    user_id = %request.user,
                    k = request.k,
                    items = item_ids.len(),
                    "Rendering recommendations"
                );

                render_cards(&item_ids)
            }
            Command::Echo(text) => BotReply::Text(format!("{}{}", ECHO_PREFIX, text)),
        }
    }
}
