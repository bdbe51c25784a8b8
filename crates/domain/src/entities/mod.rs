//! Domain entities

mod notification;
mod recurring_event;

pub use notification::NotificationMessage;
pub use recurring_event::{EvaluatedEvent, RecurringEvent, default_events};
