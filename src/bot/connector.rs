/// Outbound half of the channel protocol
///
/// Replies are posted back to the conversation's connector service. Token
/// acquisition for authenticated channels is not performed here.
use std::time::Duration;

use reqwest::Client as HttpClient;

use crate::{
    error::{AppError, AppResult},
    models::{OutgoingActivity, ReplyTarget},
};

const SEND_TIMEOUT: Duration = Duration::from_secs(10);

#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait ChannelConnector: Send + Sync {
    /// Deliver one activity into the target conversation
    async fn send(&self, target: &ReplyTarget, activity: &OutgoingActivity) -> AppResult<()>;
}

#[derive(Clone)]
pub struct HttpConnector {
    http_client: HttpClient,
}

impl HttpConnector {
    pub fn new() -> AppResult<Self> {
        let http_client = HttpClient::builder().timeout(SEND_TIMEOUT).build()?;
        Ok(Self { http_client })
    }
}

#[async_trait::async_trait]
impl ChannelConnector for HttpConnector {
    async fn send(&self, target: &ReplyTarget, activity: &OutgoingActivity) -> AppResult<()> {
        let url = target.activities_url();

        let response = self.http_client.post(&url).json(activity).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::Channel(format!(
                "Connector returned status {}: {}",
                status, body
            )));
        }

        tracing::debug!(
            url = %url,
            attachments = activity.attachments.len(),
            "Activity delivered"
        );

        Ok(())
    }
}
