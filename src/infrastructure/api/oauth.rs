#[cfg(test)]
#[path = "oauth_test.rs"]
mod tests;

use anyhow::Result;
use serde_json::json;
use serde_json::Value;

use super::ApiClient;
use crate::domain::models::Endpoint;
use crate::domain::models::OAuthProvider;

impl ApiClient {
    pub async fn oauth_login(&self, provider: OAuthProvider) -> Result<Value> {
        return self
            .request(Endpoint::get(&format!("/api/oauth/{provider}/login")))
            .await;
    }

    /// Development sign-in that skips the provider round trip.
    pub async fn simulate_oauth_login(
        &self,
        provider: OAuthProvider,
        email: Option<&str>,
    ) -> Result<Value> {
        return self
            .request(
                Endpoint::post(&format!("/api/oauth/{provider}/simulate"))
                    .body(json!({ "email": email })),
            )
            .await;
    }

    pub async fn link_oauth_account(
        &self,
        provider: OAuthProvider,
        provider_id: &str,
    ) -> Result<Value> {
        let body = json!({
            "provider": provider,
            "provider_id": provider_id,
        });

        return self
            .request(Endpoint::post("/api/oauth/link-account").body(body))
            .await;
    }

    pub async fn unlink_oauth_account(&self, provider: OAuthProvider) -> Result<Value> {
        return self
            .request(Endpoint::post("/api/oauth/unlink-account").body(json!({ "provider": provider })))
            .await;
    }

    pub async fn linked_accounts(&self) -> Result<Value> {
        return self.request(Endpoint::get("/api/oauth/linked-accounts")).await;
    }
}
