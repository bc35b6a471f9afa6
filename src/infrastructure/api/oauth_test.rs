use anyhow::Result;
use mockito::Matcher;
use serde_json::json;

use crate::domain::models::OAuthProvider;
use crate::infrastructure::api::ApiClient;

#[tokio::test]
async fn it_starts_provider_logins() -> Result<()> {
    let mut server = mockito::Server::new_async().await;
    let google = server
        .mock("GET", "/api/oauth/google/login")
        .with_status(200)
        .with_body(r#"{"auth_url":"https://accounts.google.com/o/oauth2/auth"}"#)
        .create_async()
        .await;
    let facebook = server
        .mock("GET", "/api/oauth/facebook/login")
        .with_status(200)
        .with_body(r#"{"auth_url":"https://www.facebook.com/v18.0/dialog/oauth"}"#)
        .create_async()
        .await;

    let client = ApiClient::new(&server.url(), None)?;
    client.oauth_login(OAuthProvider::Google).await?;
    client.oauth_login(OAuthProvider::Facebook).await?;

    google.assert_async().await;
    facebook.assert_async().await;

    return Ok(());
}

#[tokio::test]
async fn it_simulates_logins_with_and_without_email() -> Result<()> {
    let mut server = mockito::Server::new_async().await;
    let with_email = server
        .mock("POST", "/api/oauth/google/simulate")
        .match_body(Matcher::Json(json!({ "email": "kofi@example.com" })))
        .with_status(200)
        .with_body(r#"{"user":{"email":"kofi@example.com"}}"#)
        .create_async()
        .await;
    let without_email = server
        .mock("POST", "/api/oauth/facebook/simulate")
        .match_body(Matcher::Json(json!({ "email": null })))
        .with_status(200)
        .with_body(r#"{"user":{"email":"demo@facebook.com"}}"#)
        .create_async()
        .await;

    let client = ApiClient::new(&server.url(), None)?;

    let res = client
        .simulate_oauth_login(OAuthProvider::Google, Some("kofi@example.com"))
        .await?;
    assert_eq!(res["user"]["email"], "kofi@example.com");

    client
        .simulate_oauth_login(OAuthProvider::Facebook, None)
        .await?;

    with_email.assert_async().await;
    without_email.assert_async().await;

    return Ok(());
}

#[tokio::test]
async fn it_links_and_unlinks_accounts() -> Result<()> {
    let mut server = mockito::Server::new_async().await;
    let link = server
        .mock("POST", "/api/oauth/link-account")
        .match_body(Matcher::Json(json!({ "provider": "google", "provider_id": "1093" })))
        .with_status(200)
        .with_body("{}")
        .create_async()
        .await;
    let unlink = server
        .mock("POST", "/api/oauth/unlink-account")
        .match_body(Matcher::Json(json!({ "provider": "facebook" })))
        .with_status(400)
        .with_body(r#"{"error":"Compte non lié"}"#)
        .create_async()
        .await;
    let linked = server
        .mock("GET", "/api/oauth/linked-accounts")
        .with_status(200)
        .with_body(r#"{"google":true,"facebook":false}"#)
        .create_async()
        .await;

    let client = ApiClient::new(&server.url(), None)?;
    client
        .link_oauth_account(OAuthProvider::Google, "1093")
        .await?;

    let res = client.unlink_oauth_account(OAuthProvider::Facebook).await;
    assert_eq!(res.unwrap_err().to_string(), "Compte non lié");

    let res = client.linked_accounts().await?;
    assert_eq!(res["google"], true);

    link.assert_async().await;
    unlink.assert_async().await;
    linked.assert_async().await;

    return Ok(());
}
