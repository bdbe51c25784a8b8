//! Calendar kind value object

use serde::{Deserialize, Serialize};
use std::fmt;

/// Marker the original event names use for lunar dates
const LUNAR_NAME_MARKER: &str = "农历";

/// Calendar a recurring date is expressed in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CalendarKind {
    /// Traditional Chinese lunisolar calendar
    Lunar,
    /// Gregorian calendar
    Solar,
}

impl CalendarKind {
    /// Infer the calendar kind from an event name
    ///
    /// Names containing `农历` are lunar, everything else is solar.
    #[must_use]
    pub fn infer_from_name(name: &str) -> Self {
        if name.contains(LUNAR_NAME_MARKER) {
            Self::Lunar
        } else {
            Self::Solar
        }
    }

    /// Chinese label
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Lunar => "农历",
            Self::Solar => "阳历",
        }
    }
}

impl fmt::Display for CalendarKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
