//! PushPlus integration
//!
//! Delivers plain-text messages through the PushPlus `send` endpoint
//! (<https://www.pushplus.plus/doc/>), either to the token owner or to a
//! group topic.

pub mod client;
mod models;

pub use client::{PushPlusClient, PushPlusConfig, PushPlusError, PushPlusSender};
pub use models::{PushMessage, SendPayload};
