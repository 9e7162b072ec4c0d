use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::apns::compose_apns;
use crate::errors::PayloadError;
use crate::gcm::compose_gcm;
use crate::options::NotificationOptions;

/// Key SNS reads for endpoints without a platform-specific entry
pub const DEFAULT_MESSAGE_KEY: &str = "default";

/// Target push protocol
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Platform {
    #[serde(rename = "GCM")]
    Gcm,
    #[serde(rename = "APNS")]
    Apns,
    #[serde(rename = "APNS_SANDBOX")]
    ApnsSandbox,
}

impl Platform {
    /// Message-structure key used by SNS for this platform
    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Gcm => "GCM",
            Platform::Apns => "APNS",
            Platform::ApnsSandbox => "APNS_SANDBOX",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Platform {
    type Err = PayloadError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "GCM" => Ok(Platform::Gcm),
            "APNS" => Ok(Platform::Apns),
            "APNS_SANDBOX" => Ok(Platform::ApnsSandbox),
            _ => Err(PayloadError::UnknownPlatform(s.to_string())),
        }
    }
}

/// Compose the payload for a single platform
pub fn compose(
    platform: Platform,
    message: &str,
    options: &NotificationOptions,
) -> Result<String, PayloadError> {
    match platform {
        Platform::Gcm => compose_gcm(message, options),
        Platform::Apns | Platform::ApnsSandbox => compose_apns(message, options),
    }
}

/// Compose an SNS `MessageStructure=json` body covering several platforms
///
/// Each platform payload is embedded as a JSON string under its platform key,
/// next to the plain-text `default` entry.
pub fn compose_message_structure(
    platforms: &[Platform],
    message: &str,
    options: &NotificationOptions,
) -> Result<String, PayloadError> {
    let mut envelope = Map::with_capacity(platforms.len() + 1);
    envelope.insert(DEFAULT_MESSAGE_KEY.to_string(), Value::from(message));

    for platform in platforms {
        let payload = compose(*platform, message, options)?;
        envelope.insert(platform.as_str().to_string(), Value::String(payload));
    }

    Ok(serde_json::to_string(&envelope)?)
}
