#[cfg(test)]
#[path = "location_test.rs"]
mod tests;

use anyhow::Result;
use serde_json::json;
use serde_json::Value;

use super::ApiClient;
use crate::domain::models::Endpoint;
use crate::domain::models::StaticMapImage;
use crate::domain::models::StaticMapOptions;

pub const DEFAULT_NEARBY_RADIUS: f64 = 10.0;

impl ApiClient {
    pub async fn geocode(&self, address: &str) -> Result<Value> {
        return self
            .request(Endpoint::post("/api/location/geocode").body(json!({ "address": address })))
            .await;
    }

    pub async fn reverse_geocode(&self, latitude: f64, longitude: f64) -> Result<Value> {
        let body = json!({
            "latitude": latitude,
            "longitude": longitude,
        });

        return self
            .request(Endpoint::post("/api/location/reverse-geocode").body(body))
            .await;
    }

    /// URL of the rendered map image, for embedding. Makes no request.
    pub fn static_map_url(&self, lat: f64, lon: f64, options: &StaticMapOptions) -> Result<String> {
        return self.url_for(&options.apply(Endpoint::get("/api/location/static-map"), lat, lon));
    }

    pub async fn static_map_base64(
        &self,
        lat: f64,
        lon: f64,
        options: &StaticMapOptions,
    ) -> Result<StaticMapImage> {
        return self
            .request_as(options.apply(Endpoint::get("/api/location/static-map-base64"), lat, lon))
            .await;
    }

    pub async fn product_location(&self, product_id: u64) -> Result<Value> {
        return self
            .request(Endpoint::get(&format!(
                "/api/location/product-location/{product_id}"
            )))
            .await;
    }

    pub async fn nearby_products(&self, lat: f64, lon: f64, radius: f64) -> Result<Value> {
        return self
            .request(
                Endpoint::get("/api/location/nearby-products")
                    .query("lat", lat)
                    .query("lon", lon)
                    .query("radius", radius),
            )
            .await;
    }
}
