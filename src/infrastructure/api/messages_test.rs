use std::sync::Arc;

use anyhow::Result;
use mockito::Matcher;
use serde_json::json;
use test_utils::new_messages_fixture;

use crate::domain::models::FeedBox;
use crate::domain::models::OutgoingMessage;
use crate::domain::models::PollPolicy;
use crate::domain::services::ChatPoller;
use crate::infrastructure::api::ApiClient;

#[tokio::test]
async fn it_lists_conversations() -> Result<()> {
    let mut server = mockito::Server::new_async().await;
    let list = server
        .mock("GET", "/api/messages/conversations")
        .with_status(200)
        .with_body(r#"{"conversations":[{"partner":{"id":7},"unread_count":1}]}"#)
        .create_async()
        .await;
    let thread = server
        .mock("GET", "/api/messages/conversation/7")
        .with_status(200)
        .with_body(r#"{"messages":[{"id":41}]}"#)
        .create_async()
        .await;

    let client = ApiClient::new(&server.url(), None)?;

    let res = client.conversations().await?;
    assert_eq!(res["conversations"][0]["partner"]["id"], 7);

    let res = client.conversation_messages(7).await?;
    assert_eq!(res["messages"][0]["id"], 41);

    list.assert_async().await;
    thread.assert_async().await;

    return Ok(());
}

#[tokio::test]
async fn it_sends_a_message_with_an_explicit_null_product() -> Result<()> {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/api/messages/send")
        .match_body(Matcher::Json(json!({
            "receiver_id": 7,
            "content": "Toujours disponible ?",
            "product_id": null,
        })))
        .with_status(201)
        .with_body(r#"{"message":"Message envoyé"}"#)
        .create_async()
        .await;

    let client = ApiClient::new(&server.url(), None)?;
    client
        .send_message(&OutgoingMessage {
            receiver_id: 7,
            content: "Toujours disponible ?".to_string(),
            product_id: None,
        })
        .await?;

    mock.assert_async().await;

    return Ok(());
}

#[tokio::test]
async fn it_reads_the_unread_count() -> Result<()> {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/api/messages/unread-count")
        .with_status(200)
        .with_body(r#"{"unread_count":2}"#)
        .create_async()
        .await;

    let client = ApiClient::new(&server.url(), None)?;
    let res = client.unread_count().await?;

    assert_eq!(res["unread_count"], 2);
    mock.assert_async().await;

    return Ok(());
}

mod new_messages {
    use super::*;

    #[tokio::test]
    async fn it_omits_since_without_a_cursor() -> Result<()> {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/api/messages/new-messages")
            .with_status(200)
            .with_body(new_messages_fixture())
            .create_async()
            .await;

        let client = ApiClient::new(&server.url(), None)?;
        let res = client.new_messages(None).await?;

        assert_eq!(res.count, 2);
        assert_eq!(res.timestamp, Some("2024-03-01T10:15:00.123456".to_string()));
        mock.assert_async().await;

        return Ok(());
    }

    #[tokio::test]
    async fn it_passes_the_cursor() -> Result<()> {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/api/messages/new-messages")
            .match_query(Matcher::UrlEncoded(
                "since".to_string(),
                "2024-03-01T10:00:00".to_string(),
            ))
            .with_status(200)
            .with_body(r#"{"new_messages":[],"count":0,"timestamp":"2024-03-01T10:15:00"}"#)
            .create_async()
            .await;

        let client = ApiClient::new(&server.url(), None)?;
        let res = client.new_messages(Some("2024-03-01T10:00:00")).await?;

        assert!(res.new_messages.is_empty());
        mock.assert_async().await;

        return Ok(());
    }

    #[tokio::test]
    async fn it_feeds_the_chat_poller() -> Result<()> {
        let mut server = mockito::Server::new_async().await;
        let first = server
            .mock("GET", "/api/messages/new-messages")
            .with_status(200)
            .with_body(new_messages_fixture())
            .create_async()
            .await;
        let second = server
            .mock("GET", "/api/messages/new-messages")
            .match_query(Matcher::UrlEncoded(
                "since".to_string(),
                "2024-03-01T10:15:00.123456".to_string(),
            ))
            .with_status(401)
            .with_body(r#"{"error":"Non authentifié"}"#)
            .create_async()
            .await;

        let feed: FeedBox = Arc::new(ApiClient::new(&server.url(), None)?);
        let poller = ChatPoller::new(feed, PollPolicy::default());

        assert!(poller.poll_once(None).await);
        assert!(!poller.poll_once(None).await);
        assert_eq!(
            poller.cursor().await,
            Some("2024-03-01T10:15:00.123456".to_string())
        );

        first.assert_async().await;
        second.assert_async().await;

        return Ok(());
    }
}
