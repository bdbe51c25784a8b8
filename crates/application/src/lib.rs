//! Application layer - Use cases and orchestration
//!
//! Contains the reminder jobs and the port definitions they talk through.
//! Each job fetches, formats and hands at most one message to the notifier.

pub mod error;
pub mod outcome;
pub mod ports;
pub mod services;

pub use error::ApplicationError;
pub use outcome::JobOutcome;
pub use ports::*;
pub use services::*;
