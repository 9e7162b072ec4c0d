use serde::Serialize;
use serde_json::{Map, Value};

/// GCM/FCM payload keys
pub mod gcm_keys {
    pub const DATA: &str = "data";
    pub const MESSAGE: &str = "message";
    pub const ANDROID: &str = "android";
    pub const PRIORITY: &str = "priority";

    /// FCM priority that GCM clients also honour
    pub const PRIORITY_HIGH: &str = "high";
}

/// APNS payload keys
pub mod apns_keys {
    pub const APS: &str = "aps";
    pub const ALERT: &str = "alert";
    pub const TITLE: &str = "title";
    pub const BODY: &str = "body";
    pub const SOUND: &str = "sound";
    pub const CATEGORY: &str = "category";
    pub const BADGE: &str = "badge";
    pub const MUTABLE_CONTENT: &str = "mutable-content";

    pub const DEFAULT_SOUND: &str = "default";

    /// Options consumed into `aps` and kept off the top level.
    ///
    /// `title` is deliberately absent: it lands in `aps.alert.title` and at the
    /// top level, which existing consumers read.
    pub const APS_ONLY: [&str; 4] = [SOUND, CATEGORY, BADGE, MUTABLE_CONTENT];
}

/// GCM/FCM message body
#[derive(Debug, Serialize)]
pub struct GcmPayload {
    pub data: Map<String, Value>,
    pub android: AndroidConfig,
}

/// Android delivery hint
#[derive(Debug, Serialize)]
pub struct AndroidConfig {
    pub priority: &'static str,
}

impl AndroidConfig {
    pub fn high_priority() -> Self {
        Self {
            priority: gcm_keys::PRIORITY_HIGH,
        }
    }
}

/// The `aps` dictionary of an APNS payload
#[derive(Debug, Serialize)]
pub struct Aps<'a> {
    pub alert: ApsAlert<'a>,
    pub sound: Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub badge: Option<Value>,
    #[serde(rename = "mutable-content", skip_serializing_if = "Option::is_none")]
    pub mutable_content: Option<Value>,
}

/// APNS alert, either a plain string or a title/body dictionary
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum ApsAlert<'a> {
    Plain(&'a str),
    Structured { title: Value, body: &'a str },
}
