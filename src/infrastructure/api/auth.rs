#[cfg(test)]
#[path = "auth_test.rs"]
mod tests;

use anyhow::Result;
use serde_json::Value;

use super::ApiClient;
use crate::domain::models::Credentials;
use crate::domain::models::Endpoint;
use crate::domain::models::Registration;
use crate::domain::models::SessionStatus;

impl ApiClient {
    pub async fn login(&self, email: &str, password: &str) -> Result<Value> {
        let credentials = Credentials {
            email: email.to_string(),
            password: password.to_string(),
        };

        return self
            .request(Endpoint::post("/api/auth/login").body(serde_json::to_value(credentials)?))
            .await;
    }

    pub async fn register(&self, registration: &Registration) -> Result<Value> {
        return self
            .request(Endpoint::post("/api/auth/register").body(serde_json::to_value(registration)?))
            .await;
    }

    pub async fn logout(&self) -> Result<Value> {
        return self.request(Endpoint::post("/api/auth/logout")).await;
    }

    pub async fn current_user(&self) -> Result<Value> {
        return self.request(Endpoint::get("/api/auth/me")).await;
    }

    pub async fn check_session(&self) -> Result<SessionStatus> {
        return self
            .request_as(Endpoint::get("/api/auth/check-session"))
            .await;
    }
}

/// Whether the current cookie session is authenticated. Any failure counts as
/// signed out.
pub async fn check_auth_status(client: &ApiClient) -> bool {
    return match client.check_session().await {
        Ok(status) => status.authenticated,
        Err(err) => {
            tracing::debug!(error = %err, "Session check failed");
            false
        }
    };
}
