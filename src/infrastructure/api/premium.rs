#[cfg(test)]
#[path = "premium_test.rs"]
mod tests;

use anyhow::Result;
use serde_json::json;
use serde_json::Value;

use super::ApiClient;
use crate::domain::models::Endpoint;

impl ApiClient {
    pub async fn premium_plans(&self) -> Result<Value> {
        return self.request(Endpoint::get("/api/premium/plans")).await;
    }

    pub async fn current_plan(&self) -> Result<Value> {
        return self.request(Endpoint::get("/api/premium/current-plan")).await;
    }

    pub async fn subscribe_to_premium(&self, plan_id: &str, phone_number: &str) -> Result<Value> {
        let body = json!({
            "plan_id": plan_id,
            "phone_number": phone_number,
        });

        return self
            .request(Endpoint::post("/api/premium/subscribe").body(body))
            .await;
    }

    pub async fn premium_payment_status(&self, transaction_id: &str) -> Result<Value> {
        return self
            .request(Endpoint::get("/api/premium/payment-status").segment(transaction_id))
            .await;
    }

    pub async fn cancel_premium_subscription(&self) -> Result<Value> {
        return self
            .request(Endpoint::post("/api/premium/cancel-subscription"))
            .await;
    }

    pub async fn premium_features(&self) -> Result<Value> {
        return self.request(Endpoint::get("/api/premium/features")).await;
    }

    pub async fn premium_usage_stats(&self) -> Result<Value> {
        return self.request(Endpoint::get("/api/premium/usage-stats")).await;
    }

    pub async fn pending_premium_payments(&self) -> Result<Value> {
        return self
            .request(Endpoint::get("/api/premium/pending-payments"))
            .await;
    }
}
