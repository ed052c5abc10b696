//! JSON encoding of API values for the plugin channel.
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::config::BridgeConfig;
use crate::error::BridgeError;

/// Encodes `shared` API values into the JSON the plugin host decodes.
#[derive(Debug, Clone, Copy, Default)]
pub struct ApiCodec {
    pretty: bool,
}

impl ApiCodec {
    pub fn new(config: &BridgeConfig) -> Self {
        Self {
            pretty: config.pretty_json,
        }
    }

    pub fn encode<T: Serialize>(&self, value: &T) -> Result<Vec<u8>, BridgeError> {
        let bytes = if self.pretty {
            serde_json::to_vec_pretty(value)?
        } else {
            serde_json::to_vec(value)?
        };
        Ok(bytes)
    }

    pub fn encode_value<T: Serialize>(&self, value: &T) -> Result<Value, BridgeError> {
        Ok(serde_json::to_value(value)?)
    }

    pub fn decode<T: DeserializeOwned>(&self, bytes: &[u8]) -> Result<T, BridgeError> {
        Ok(serde_json::from_slice(bytes)?)
    }
}
