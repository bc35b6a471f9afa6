#[cfg(test)]
#[path = "responses_test.rs"]
mod tests;

use anyhow::bail;
use anyhow::Result;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde_derive::Deserialize;
use serde_derive::Serialize;
use serde_json::Value;

const PNG_DATA_PREFIX: &str = "data:image/png;base64,";

/// Body of `/api/messages/new-messages`. Messages are passed through untouched.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct NewMessages {
    #[serde(default)]
    pub new_messages: Vec<Value>,
    #[serde(default)]
    pub count: usize,
    pub timestamp: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionStatus {
    #[serde(default)]
    pub authenticated: bool,
    pub user: Option<Value>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StaticMapImage {
    pub image: String,
    pub latitude: f64,
    pub longitude: f64,
    pub zoom: u8,
    pub width: u32,
    pub height: u32,
}

impl StaticMapImage {
    /// Decodes the embedded `data:image/png;base64,` payload.
    pub fn png_bytes(&self) -> Result<Vec<u8>> {
        let Some(encoded) = self.image.strip_prefix(PNG_DATA_PREFIX) else {
            bail!("Static map image is not a base64 PNG data URL");
        };

        return Ok(STANDARD.decode(encoded)?);
    }
}
