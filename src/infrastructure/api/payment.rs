#[cfg(test)]
#[path = "payment_test.rs"]
mod tests;

use anyhow::Result;
use serde_json::json;
use serde_json::Value;

use super::ApiClient;
use crate::domain::models::Endpoint;

fn pay_request(order_id: u64, phone_number: &str) -> Value {
    return json!({
        "order_id": order_id,
        "phone_number": phone_number,
    });
}

impl ApiClient {
    pub async fn payment_methods(&self) -> Result<Value> {
        return self.request(Endpoint::get("/api/payment/methods")).await;
    }

    pub async fn request_mtn_payment(&self, order_id: u64, phone_number: &str) -> Result<Value> {
        return self
            .request(
                Endpoint::post("/api/payment/mtn/request-to-pay")
                    .body(pay_request(order_id, phone_number)),
            )
            .await;
    }

    pub async fn mtn_payment_status(&self, transaction_id: &str) -> Result<Value> {
        return self
            .request(Endpoint::get("/api/payment/mtn/status").segment(transaction_id))
            .await;
    }

    pub async fn pending_payments(&self) -> Result<Value> {
        return self
            .request(Endpoint::get("/api/payment/pending-payments"))
            .await;
    }

    pub async fn cancel_payment(&self, transaction_id: &str) -> Result<Value> {
        return self
            .request(
                Endpoint::post("/api/payment/cancel-payment")
                    .body(json!({ "transaction_id": transaction_id })),
            )
            .await;
    }

    pub async fn payment_history(&self, page: u32) -> Result<Value> {
        return self
            .request(Endpoint::get("/api/payment/payment-history").query("page", page))
            .await;
    }

    /// Operator-agnostic mobile money (MTN or Airtel, picked server side from
    /// the phone number).
    pub async fn request_mobile_money_payment(
        &self,
        order_id: u64,
        phone_number: &str,
    ) -> Result<Value> {
        return self
            .request(
                Endpoint::post("/api/payment/mobile-money/request-to-pay")
                    .body(pay_request(order_id, phone_number)),
            )
            .await;
    }

    pub async fn mobile_money_payment_status(&self, transaction_id: &str) -> Result<Value> {
        return self
            .request(
                Endpoint::get("/api/payment/mobile-money/status").segment(transaction_id),
            )
            .await;
    }
}
