//! Reminders attached to calendar events.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Delivery channel for a reminder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReminderKind {
    Email,
    System,
}

impl fmt::Display for ReminderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReminderKind::Email => write!(f, "email"),
            ReminderKind::System => write!(f, "system"),
        }
    }
}

/// A timestamped notice attached to an event.
///
/// Reminders are plain values owned exclusively by their event. The `when`
/// timestamp is not validated against the event's own date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reminder {
    pub when: NaiveDateTime,
    pub kind: ReminderKind,
}

impl Reminder {
    pub fn new(when: NaiveDateTime, kind: ReminderKind) -> Self {
        Reminder { when, kind }
    }

    /// Email reminder, the default delivery channel.
    pub fn email(when: NaiveDateTime) -> Self {
        Reminder::new(when, ReminderKind::Email)
    }
}

impl fmt::Display for Reminder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Reminder on {} of type {}", self.when, self.kind)
    }
}
