//! TianAPI quote integration
//!
//! Fetches short texts from the TianAPI `saylove` and `caihongpi`
//! endpoints (<https://www.tianapi.com>).

pub mod client;
mod models;

pub use client::{QuoteClient, QuoteConfig, QuoteError, TianQuoteClient};
pub use models::QuoteEndpoint;
