use axum::{extract::State, http::StatusCode, Extension, Json};

use crate::{
    error::{AppError, AppResult},
    middleware::RequestId,
    models::{Activity, BotReply, OutgoingActivity, ReplyTarget},
    services::commands::APOLOGY,
};

use super::BotState;

pub const LIVENESS_TEXT: &str = "Bot is running. POST /api/messages";

/// Liveness endpoint
pub async fn health() -> &'static str {
    LIVENESS_TEXT
}

/// Inbound activity webhook
///
/// Failures while replying are answered with an apology and never surface
/// as an HTTP error; the channel has already delivered the message.
pub async fn messages(
    State(state): State<BotState>,
    Extension(request_id): Extension<RequestId>,
    Json(activity): Json<Activity>,
) -> AppResult<(StatusCode, &'static str)> {
    let target = activity.reply_target().ok_or_else(|| {
        AppError::InvalidInput("activity has no serviceUrl or conversation id".to_string())
    })?;

    tracing::info!(
        request_id = %request_id,
        activity_type = ?activity.activity_type,
        conversation = %target.conversation.id,
        "Processing activity"
    );

    for reply in state.bot.on_turn(&activity).await {
        let outgoing = OutgoingActivity::reply(&target, reply);
        if let Err(error) = state.connector.send(&target, &outgoing).await {
            tracing::error!(
                request_id = %request_id,
                error = %error,
                "Bot error"
            );
            apologize(&state, &target, &request_id).await;
            break;
        }
    }

    Ok((StatusCode::OK, "OK"))
}

async fn apologize(state: &BotState, target: &ReplyTarget, request_id: &RequestId) {
    let apology = OutgoingActivity::reply(target, BotReply::text(APOLOGY));
    if let Err(error) = state.connector.send(target, &apology).await {
        tracing::warn!(
            request_id = %request_id,
            error = %error,
            "Could not deliver apology"
        );
    }
}
