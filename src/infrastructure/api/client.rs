#[cfg(test)]
#[path = "client_test.rs"]
mod tests;

use std::time::Duration;

use anyhow::bail;
use anyhow::Result;
use reqwest::header::HeaderMap;
use reqwest::header::HeaderName;
use reqwest::header::HeaderValue;
use reqwest::header::CONTENT_TYPE;
use reqwest::Method;
use reqwest::Url;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::domain::models::Endpoint;
use crate::domain::models::HttpMethod;

fn to_method(method: HttpMethod) -> Method {
    return match method {
        HttpMethod::Get => Method::GET,
        HttpMethod::Post => Method::POST,
        HttpMethod::Put => Method::PUT,
        HttpMethod::Delete => Method::DELETE,
    };
}

fn error_message(status: u16, data: &Value) -> String {
    if let Some(msg) = data.get("error").and_then(|e| return e.as_str()) {
        if !msg.is_empty() {
            return msg.to_string();
        }
    }

    return format!("HTTP error! status: {status}");
}

/// Client for the marketplace REST API. Holds a cookie store so the session
/// set at login is sent on every later call.
#[derive(Clone, Debug)]
pub struct ApiClient {
    base_url: String,
    client: reqwest::Client,
}

impl ApiClient {
    pub fn new(base_url: &str, timeout: Option<Duration>) -> Result<ApiClient> {
        let mut builder = reqwest::Client::builder().cookie_store(true);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        return Ok(ApiClient {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: builder.build()?,
        });
    }

    pub fn from_config() -> Result<ApiClient> {
        return ApiClient::new(&Config::get(ConfigKey::ApiURL), Config::request_timeout()?);
    }

    pub fn base_url(&self) -> &str {
        return &self.base_url;
    }

    /// Absolute URL for an endpoint. Extra segments are percent-encoded, and
    /// the query string is only added when the endpoint carries a pair.
    pub fn url_for(&self, endpoint: &Endpoint) -> Result<String> {
        let url = format!("{}{}", self.base_url, endpoint.path);
        if endpoint.segments.is_empty() && endpoint.query.is_empty() {
            return Ok(url);
        }

        let mut parsed = Url::parse(&url)?;
        if !endpoint.segments.is_empty() {
            let Ok(mut segments) = parsed.path_segments_mut() else {
                bail!(format!("Cannot append path segments to {url}"));
            };
            segments.extend(endpoint.segments.iter());
        }

        if !endpoint.query.is_empty() {
            parsed.query_pairs_mut().extend_pairs(
                endpoint
                    .query
                    .iter()
                    .map(|(key, val)| return (key.as_str(), val.as_str())),
            );
        }

        return Ok(parsed.to_string());
    }

    pub async fn request(&self, endpoint: Endpoint) -> Result<Value> {
        let url = self.url_for(&endpoint)?;
        tracing::debug!(method = %endpoint.method, url = url.as_str(), "API request");

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        for (key, val) in &endpoint.headers {
            headers.insert(
                HeaderName::from_bytes(key.as_bytes())?,
                HeaderValue::from_str(val)?,
            );
        }

        let mut req = self
            .client
            .request(to_method(endpoint.method), &url)
            .headers(headers);
        if let Some(body) = &endpoint.body {
            req = req.body(serde_json::to_string(body)?);
        }

        let res = match req.send().await {
            Ok(res) => res,
            Err(err) => {
                tracing::error!(
                    error = ?err,
                    method = %endpoint.method,
                    url = url.as_str(),
                    "API request failed"
                );
                return Err(err.into());
            }
        };

        let status = res.status();
        let text = res.text().await?;
        let data = serde_json::from_str::<Value>(&text).unwrap_or(Value::Null);

        if !status.is_success() {
            let message = error_message(status.as_u16(), &data);
            tracing::error!(
                status = status.as_u16(),
                method = %endpoint.method,
                url = url.as_str(),
                error = message.as_str(),
                "API request failed"
            );
            bail!(message);
        }

        return Ok(data);
    }

    pub async fn request_as<T: DeserializeOwned>(&self, endpoint: Endpoint) -> Result<T> {
        let data = self.request(endpoint).await?;
        return Ok(serde_json::from_value(data)?);
    }
}
