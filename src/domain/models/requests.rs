#[cfg(test)]
#[path = "requests_test.rs"]
mod tests;

use serde_derive::Deserialize;
use serde_derive::Serialize;
use strum::EnumString;
use strum::EnumVariantNames;

use super::Endpoint;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, EnumString, EnumVariantNames, strum::Display,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum UserType {
    #[default]
    Buyer,
    Seller,
    Both,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Registration {
    pub username: String,
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub user_type: UserType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

/// Filters accepted by the product listing. Unset fields are left out of the
/// query string so the server applies its own defaults.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ProductQuery {
    pub page: Option<u32>,
    pub per_page: Option<u32>,
    pub category: Option<String>,
    pub search: Option<String>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    pub condition: Option<String>,
    pub brand: Option<String>,
    pub location: Option<String>,
    pub sort_by: Option<String>,
    pub sort_order: Option<String>,
}

impl ProductQuery {
    pub fn apply(&self, endpoint: Endpoint) -> Endpoint {
        return endpoint
            .query_opt("page", self.page)
            .query_opt("per_page", self.per_page)
            .query_opt("category", self.category.as_deref())
            .query_opt("search", self.search.as_deref())
            .query_opt("min_price", self.min_price)
            .query_opt("max_price", self.max_price)
            .query_opt("condition", self.condition.as_deref())
            .query_opt("brand", self.brand.as_deref())
            .query_opt("location", self.location.as_deref())
            .query_opt("sort_by", self.sort_by.as_deref())
            .query_opt("sort_order", self.sort_order.as_deref());
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutgoingMessage {
    pub receiver_id: u64,
    pub content: String,
    pub product_id: Option<u64>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    pub product_id: u64,
    pub quantity: u32,
}

impl CartLine {
    pub fn single(product_id: u64) -> CartLine {
        return CartLine {
            product_id,
            quantity: 1,
        };
    }
}

#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, EnumString, EnumVariantNames, strum::Display,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum PaymentMethod {
    #[default]
    MtnMobileMoney,
    Card,
    Cash,
}

/// Order creation payload. Without a `product_id` the server turns the whole
/// cart into orders.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderDraft {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_id: Option<u64>,
    pub shipping_address: String,
    pub payment_method: PaymentMethod,
}

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, EnumString, EnumVariantNames, strum::Display,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum OrderStatus {
    Pending,
    Confirmed,
    Shipped,
    Delivered,
    Cancelled,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OrderPage {
    pub status: Option<OrderStatus>,
    pub page: u32,
}

impl Default for OrderPage {
    fn default() -> OrderPage {
        return OrderPage {
            status: None,
            page: 1,
        };
    }
}

impl OrderPage {
    pub fn apply(&self, endpoint: Endpoint) -> Endpoint {
        return endpoint
            .query("page", self.page)
            .query_opt("status", self.status);
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StaticMapOptions {
    pub zoom: u8,
    pub width: u32,
    pub height: u32,
    pub marker: bool,
}

impl Default for StaticMapOptions {
    fn default() -> StaticMapOptions {
        return StaticMapOptions {
            zoom: 15,
            width: 400,
            height: 300,
            marker: true,
        };
    }
}

impl StaticMapOptions {
    pub fn apply(&self, endpoint: Endpoint, lat: f64, lon: f64) -> Endpoint {
        return endpoint
            .query("lat", lat)
            .query("lon", lon)
            .query("zoom", self.zoom)
            .query("width", self.width)
            .query("height", self.height)
            .query("marker", self.marker);
    }
}

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, EnumString, EnumVariantNames, strum::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum OAuthProvider {
    Google,
    Facebook,
}
