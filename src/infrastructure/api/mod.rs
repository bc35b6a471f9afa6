mod auth;
mod client;
mod location;
mod messages;
mod oauth;
mod orders;
mod payment;
mod premium;
mod products;

pub use auth::*;
pub use client::*;
pub use location::DEFAULT_NEARBY_RADIUS;
pub use products::DEFAULT_TRENDING_LIMIT;
