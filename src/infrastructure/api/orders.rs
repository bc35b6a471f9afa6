#[cfg(test)]
#[path = "orders_test.rs"]
mod tests;

use anyhow::Result;
use serde_json::json;
use serde_json::Value;

use super::ApiClient;
use crate::domain::models::CartLine;
use crate::domain::models::Endpoint;
use crate::domain::models::OrderDraft;
use crate::domain::models::OrderPage;
use crate::domain::models::OrderStatus;

impl ApiClient {
    pub async fn cart(&self) -> Result<Value> {
        return self.request(Endpoint::get("/api/orders/cart")).await;
    }

    pub async fn add_to_cart(&self, line: CartLine) -> Result<Value> {
        return self
            .request(Endpoint::post("/api/orders/cart/add").body(serde_json::to_value(line)?))
            .await;
    }

    pub async fn update_cart_item(&self, line: CartLine) -> Result<Value> {
        return self
            .request(Endpoint::put("/api/orders/cart/update").body(serde_json::to_value(line)?))
            .await;
    }

    pub async fn remove_from_cart(&self, product_id: u64) -> Result<Value> {
        return self
            .request(Endpoint::delete("/api/orders/cart/remove").body(json!({ "product_id": product_id })))
            .await;
    }

    pub async fn clear_cart(&self) -> Result<Value> {
        return self.request(Endpoint::delete("/api/orders/cart/clear")).await;
    }

    /// Creates one order for `product_id`, or one per cart line when the draft
    /// has no product.
    pub async fn create_order(&self, draft: &OrderDraft) -> Result<Value> {
        return self
            .request(Endpoint::post("/api/orders/create").body(serde_json::to_value(draft)?))
            .await;
    }

    pub async fn my_orders(&self, page: &OrderPage) -> Result<Value> {
        return self
            .request(page.apply(Endpoint::get("/api/orders/my-orders")))
            .await;
    }

    pub async fn my_sales(&self, page: &OrderPage) -> Result<Value> {
        return self
            .request(page.apply(Endpoint::get("/api/orders/my-sales")))
            .await;
    }

    pub async fn order(&self, order_id: u64) -> Result<Value> {
        return self
            .request(Endpoint::get(&format!("/api/orders/{order_id}")))
            .await;
    }

    pub async fn update_order_status(&self, order_id: u64, status: OrderStatus) -> Result<Value> {
        let body = json!({
            "order_id": order_id,
            "status": status,
        });

        return self
            .request(Endpoint::put(&format!("/api/orders/{order_id}/status")).body(body))
            .await;
    }
}
