use serde_json::{Map, Value};

use crate::errors::PayloadError;
use crate::models::{apns_keys, Aps, ApsAlert};
use crate::options::NotificationOptions;

/// Compose an SNS message body for Apple Push Notification Service
///
/// Builds the `aps` dictionary from `title`, `sound`, `category`, `badge` and
/// `mutable-content`, then copies every option except the aps-only keys to
/// the top level as custom data.
///
/// See <https://developer.apple.com/library/archive/documentation/NetworkingInternet/Conceptual/RemoteNotificationsPG/CreatingtheNotificationPayload.html>
pub fn compose_apns(message: &str, options: &NotificationOptions) -> Result<String, PayloadError> {
    let alert = match options.get(apns_keys::TITLE) {
        Some(title) => ApsAlert::Structured {
            title: title.clone(),
            body: message,
        },
        None => ApsAlert::Plain(message),
    };

    let aps = Aps {
        alert,
        sound: options
            .get(apns_keys::SOUND)
            .cloned()
            .unwrap_or_else(|| Value::from(apns_keys::DEFAULT_SOUND)),
        category: options.get(apns_keys::CATEGORY).cloned(),
        badge: options.get(apns_keys::BADGE).cloned(),
        mutable_content: options.get(apns_keys::MUTABLE_CONTENT).cloned(),
    };

    let mut payload = Map::with_capacity(options.len() + 1);
    payload.insert(apns_keys::APS.to_string(), serde_json::to_value(&aps)?);

    // Custom data sits next to `aps`; a caller key named "aps" replaces it.
    for (key, value) in options {
        if apns_keys::APS_ONLY.contains(&key.as_str()) {
            continue;
        }
        payload.insert(key.clone(), value.clone());
    }

    Ok(serde_json::to_string(&payload)?)
}
