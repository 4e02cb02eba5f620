pub mod activity;
pub mod card;
pub mod slate;

pub use activity::{
    Activity, ActivityType, Attachment, AttachmentLayout, ChannelAccount, ConversationAccount,
    OutgoingActivity, ReplyTarget,
};
pub use card::{ActionType, BotReply, CardAction, CardImage, CardItem, HeroCard};
pub use slate::{
    clamp_k, RecommendationMapping, RecommendationRequest, DEFAULT_K, DEFAULT_SLATE_KEY,
    DEFAULT_USER, MAX_SLATE_LEN,
};

/// Identifier of a recommendable item
pub type ItemId = i64;
