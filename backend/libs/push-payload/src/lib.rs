//! Push Payload Library
//!
//! Composes SNS mobile-push message bodies for Google/Firebase Cloud Messaging
//! and Apple Push Notification Service from a message text and a bag of
//! provider-specific options.
//!
//! It handles:
//! - GCM/FCM `data` payloads with the Android high-priority hint
//! - APNS `aps` dictionaries with alert/sound/category/badge/mutable-content
//! - Pass-through of caller custom data
//! - SNS multi-platform message structures
//! - Handing composed payloads to a dispatch backend
//!
//! Composers are pure functions and safe to call from any thread.

pub mod apns;
pub mod dispatch;
pub mod errors;
pub mod gcm;
pub mod models;
pub mod options;
pub mod platform;

pub use apns::compose_apns;
pub use dispatch::{publish, DynPushDispatcher, PushDispatcher};
pub use errors::{DispatchError, PayloadError};
pub use gcm::compose_gcm;
pub use options::NotificationOptions;
pub use platform::{compose, compose_message_structure, Platform};
