use anyhow::Result;
use mockito::Matcher;
use serde_json::json;

use super::check_auth_status;
use crate::domain::models::Registration;
use crate::domain::models::UserType;
use crate::infrastructure::api::ApiClient;

#[tokio::test]
async fn it_logs_in() -> Result<()> {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/api/auth/login")
        .match_header("content-type", "application/json")
        .match_body(Matcher::JsonString(
            r#"{"email":"a@b.com","password":"pw"}"#.to_string(),
        ))
        .with_status(200)
        .with_body(r#"{"message":"Connexion réussie","user":{"id":3,"email":"a@b.com"}}"#)
        .create_async()
        .await;

    let client = ApiClient::new(&server.url(), None)?;
    let res = client.login("a@b.com", "pw").await?;

    assert_eq!(
        res,
        json!({
            "message": "Connexion réussie",
            "user": { "id": 3, "email": "a@b.com" }
        })
    );
    mock.assert_async().await;

    return Ok(());
}

#[tokio::test]
async fn it_surfaces_bad_credentials() -> Result<()> {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/api/auth/login")
        .with_status(401)
        .with_body(r#"{"error":"Email ou mot de passe incorrect"}"#)
        .create_async()
        .await;

    let client = ApiClient::new(&server.url(), None)?;
    let res = client.login("a@b.com", "pw").await;

    assert_eq!(
        res.unwrap_err().to_string(),
        "Email ou mot de passe incorrect"
    );
    mock.assert_async().await;

    return Ok(());
}

#[tokio::test]
async fn it_registers_without_optional_fields() -> Result<()> {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/api/auth/register")
        .match_body(Matcher::Json(json!({
            "username": "amina",
            "email": "amina@example.com",
            "password": "secret",
            "first_name": "Amina",
            "last_name": "Nkoulou",
            "user_type": "seller",
        })))
        .with_status(201)
        .with_body(r#"{"message":"Inscription réussie"}"#)
        .create_async()
        .await;

    let client = ApiClient::new(&server.url(), None)?;
    let res = client
        .register(&Registration {
            username: "amina".to_string(),
            email: "amina@example.com".to_string(),
            password: "secret".to_string(),
            first_name: "Amina".to_string(),
            last_name: "Nkoulou".to_string(),
            user_type: UserType::Seller,
            phone: None,
            address: None,
        })
        .await?;

    assert_eq!(res["message"], "Inscription réussie");
    mock.assert_async().await;

    return Ok(());
}

#[tokio::test]
async fn it_logs_out_and_reads_the_current_user() -> Result<()> {
    let mut server = mockito::Server::new_async().await;
    let logout = server
        .mock("POST", "/api/auth/logout")
        .with_status(200)
        .with_body(r#"{"message":"Déconnexion réussie"}"#)
        .create_async()
        .await;
    let me = server
        .mock("GET", "/api/auth/me")
        .with_status(200)
        .with_body(r#"{"user":{"id":3}}"#)
        .create_async()
        .await;

    let client = ApiClient::new(&server.url(), None)?;
    client.logout().await?;
    let res = client.current_user().await?;

    assert_eq!(res["user"]["id"], 3);
    logout.assert_async().await;
    me.assert_async().await;

    return Ok(());
}

mod auth_status {
    use super::*;

    #[tokio::test]
    async fn it_reports_an_authenticated_session() -> Result<()> {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/api/auth/check-session")
            .with_status(200)
            .with_body(r#"{"authenticated":true,"user":{"id":3}}"#)
            .expect(2)
            .create_async()
            .await;

        let client = ApiClient::new(&server.url(), None)?;
        let session = client.check_session().await?;
        assert!(session.authenticated);
        assert_eq!(session.user, Some(json!({ "id": 3 })));

        assert!(check_auth_status(&client).await);
        mock.assert_async().await;

        return Ok(());
    }

    #[tokio::test]
    async fn it_reports_a_guest_session() -> Result<()> {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/api/auth/check-session")
            .with_status(200)
            .with_body(r#"{"authenticated":false}"#)
            .create_async()
            .await;

        let client = ApiClient::new(&server.url(), None)?;
        assert!(!check_auth_status(&client).await);
        mock.assert_async().await;

        return Ok(());
    }

    #[tokio::test]
    async fn it_swallows_failures() -> Result<()> {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/api/auth/check-session")
            .with_status(500)
            .create_async()
            .await;

        let client = ApiClient::new(&server.url(), None)?;
        assert!(!check_auth_status(&client).await);
        mock.assert_async().await;

        let offline = ApiClient::new("http://127.0.0.1:1", None)?;
        assert!(!check_auth_status(&offline).await);

        return Ok(());
    }
}
