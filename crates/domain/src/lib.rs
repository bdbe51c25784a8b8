//! Domain layer for the reminder jobs
//!
//! Contains the calendar arithmetic (lunar/solar conversion, recurring
//! events), the weather advice table and the notification message type.
//! Nothing in here performs I/O.

pub mod entities;
pub mod errors;
pub mod value_objects;
pub mod weather_advice;

pub use entities::*;
pub use errors::DomainError;
pub use value_objects::*;
pub use weather_advice::{DEFAULT_ADVICE, advice_for};
