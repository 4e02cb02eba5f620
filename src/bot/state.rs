use std::sync::Arc;

use crate::services::RecBot;

use super::ChannelConnector;

/// Shared bot state; nothing in it changes between turns
#[derive(Clone)]
pub struct BotState {
    pub bot: RecBot,
    pub connector: Arc<dyn ChannelConnector>,
}

impl BotState {
    pub fn new(bot: RecBot, connector: Arc<dyn ChannelConnector>) -> Self {
        Self { bot, connector }
    }
}
