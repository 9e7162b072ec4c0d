use serde_json::{Map, Value};

use crate::errors::PayloadError;
use crate::models::{gcm_keys, AndroidConfig, GcmPayload};
use crate::options::NotificationOptions;

/// Compose an SNS message body for Google/Firebase Cloud Messaging
///
/// The message text goes to `data.message`; every option is merged into
/// `data` as-is and may overwrite `message`. `android.priority` is always
/// `"high"`.
pub fn compose_gcm(message: &str, options: &NotificationOptions) -> Result<String, PayloadError> {
    let mut data = Map::with_capacity(options.len() + 1);
    data.insert(gcm_keys::MESSAGE.to_string(), Value::from(message));
    for (key, value) in options {
        data.insert(key.clone(), value.clone());
    }

    let payload = GcmPayload {
        data,
        android: AndroidConfig::high_priority(),
    };

    Ok(serde_json::to_string(&payload)?)
}
