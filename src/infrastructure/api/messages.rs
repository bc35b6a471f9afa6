#[cfg(test)]
#[path = "messages_test.rs"]
mod tests;

use anyhow::Result;
use async_trait::async_trait;
use serde_json::Value;

use super::ApiClient;
use crate::domain::models::Endpoint;
use crate::domain::models::MessageFeed;
use crate::domain::models::NewMessages;
use crate::domain::models::OutgoingMessage;

impl ApiClient {
    pub async fn conversations(&self) -> Result<Value> {
        return self.request(Endpoint::get("/api/messages/conversations")).await;
    }

    pub async fn conversation_messages(&self, partner_id: u64) -> Result<Value> {
        return self
            .request(Endpoint::get(&format!(
                "/api/messages/conversation/{partner_id}"
            )))
            .await;
    }

    pub async fn send_message(&self, message: &OutgoingMessage) -> Result<Value> {
        return self
            .request(Endpoint::post("/api/messages/send").body(serde_json::to_value(message)?))
            .await;
    }

    pub async fn unread_count(&self) -> Result<Value> {
        return self.request(Endpoint::get("/api/messages/unread-count")).await;
    }

    /// Messages received after `since`. Without a cursor the server answers
    /// with its own recent window.
    pub async fn new_messages(&self, since: Option<&str>) -> Result<NewMessages> {
        return self
            .request_as(Endpoint::get("/api/messages/new-messages").query_opt("since", since))
            .await;
    }
}

#[async_trait]
impl MessageFeed for ApiClient {
    #[allow(clippy::implicit_return)]
    async fn fetch_new(&self, since: Option<String>) -> Result<NewMessages> {
        return self.new_messages(since.as_deref()).await;
    }
}
