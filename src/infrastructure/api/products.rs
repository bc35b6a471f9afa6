#[cfg(test)]
#[path = "products_test.rs"]
mod tests;

use anyhow::Result;
use serde_json::json;
use serde_json::Value;

use super::ApiClient;
use crate::domain::models::Endpoint;
use crate::domain::models::ProductQuery;

pub const DEFAULT_TRENDING_LIMIT: u32 = 10;

impl ApiClient {
    pub async fn products(&self, query: &ProductQuery) -> Result<Value> {
        return self.request(query.apply(Endpoint::get("/api/products"))).await;
    }

    pub async fn product(&self, product_id: u64) -> Result<Value> {
        return self
            .request(Endpoint::get(&format!("/api/products/{product_id}")))
            .await;
    }

    pub async fn compare_products(&self, product_ids: &[u64]) -> Result<Value> {
        return self
            .request(Endpoint::post("/api/products/compare").body(json!({ "product_ids": product_ids })))
            .await;
    }

    pub async fn categories(&self) -> Result<Value> {
        return self.request(Endpoint::get("/api/products/categories")).await;
    }

    pub async fn brands(&self, category: Option<&str>) -> Result<Value> {
        return self
            .request(Endpoint::get("/api/products/brands").query_opt("category", category))
            .await;
    }

    pub async fn trending_products(&self, limit: u32) -> Result<Value> {
        return self
            .request(Endpoint::get("/api/products/trending").query("limit", limit))
            .await;
    }

    /// Adds the product to the user's favorites, or removes it if already there.
    pub async fn toggle_favorite(&self, product_id: u64) -> Result<Value> {
        return self
            .request(Endpoint::post("/api/products/favorites").body(json!({ "product_id": product_id })))
            .await;
    }

    pub async fn user_favorites(&self) -> Result<Value> {
        return self.request(Endpoint::get("/api/products/user-favorites")).await;
    }

    pub async fn market_analysis(&self, category: Option<&str>, brand: Option<&str>) -> Result<Value> {
        return self
            .request(
                Endpoint::get("/api/products/market-analysis")
                    .query_opt("category", category)
                    .query_opt("brand", brand),
            )
            .await;
    }
}
