use tracing::{error, info};

use crate::errors::DispatchError;
use crate::options::NotificationOptions;
use crate::platform::{compose, Platform};

/// Notification dispatch backend
///
/// Implemented by the transport that delivers composed payloads (for example an
/// SNS publish client). Takes an opaque JSON payload and the target platform
/// and returns the backend message id.
#[async_trait::async_trait]
pub trait PushDispatcher: Send + Sync {
    async fn dispatch(&self, platform: Platform, payload: String) -> Result<String, DispatchError>;
}

pub type DynPushDispatcher = Box<dyn PushDispatcher>;

/// Compose a payload for `platform` and hand it to the dispatcher
///
/// Composition failures are returned before anything reaches the backend.
/// Nothing is retried.
pub async fn publish<D>(
    dispatcher: &D,
    platform: Platform,
    message: &str,
    options: &NotificationOptions,
) -> Result<String, DispatchError>
where
    D: PushDispatcher + ?Sized,
{
    let payload = compose(platform, message, options)?;

    match dispatcher.dispatch(platform, payload).await {
        Ok(message_id) => {
            info!(platform = %platform, message_id = %message_id, "Push payload dispatched");
            Ok(message_id)
        }
        Err(e) => {
            error!(platform = %platform, error = %e, "Push payload dispatch failed");
            Err(e)
        }
    }
}
