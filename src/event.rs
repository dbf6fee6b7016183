//! Calendar events and their reminder sequences.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{CalendarError, CalendarResult};
use crate::reminder::{Reminder, ReminderKind};

/// A titled activity occupying a time range on a single date.
///
/// Events are owned by the [`Calendar`](crate::Calendar) event table; day
/// ledgers reference them by id only. The id is assigned once at
/// construction and never changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    id: String,
    pub title: String,
    pub description: String,
    date: NaiveDate,
    start: NaiveTime,
    end: NaiveTime,
    reminders: Vec<Reminder>,
}

impl Event {
    /// Build a new event with a pre-generated unique id.
    ///
    /// Fails with `InvalidTimeRange` if `start` is after `end`.
    pub fn new(
        id: String,
        title: &str,
        description: &str,
        date: NaiveDate,
        start: NaiveTime,
        end: NaiveTime,
    ) -> CalendarResult<Self> {
        if start > end {
            return Err(CalendarError::InvalidTimeRange);
        }

        Ok(Event {
            id,
            title: title.to_string(),
            description: description.to_string(),
            date,
            start,
            end,
            reminders: Vec::new(),
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn start(&self) -> NaiveTime {
        self.start
    }

    pub fn end(&self) -> NaiveTime {
        self.end
    }

    /// Append a reminder to the end of the sequence. No de-duplication.
    pub fn add_reminder(&mut self, when: NaiveDateTime, kind: ReminderKind) {
        self.reminders.push(Reminder::new(when, kind));
    }

    /// Remove and return the reminder at `index`, shifting later reminders
    /// down by one.
    ///
    /// Fails with `ReminderNotFound` if `index` is out of range, leaving
    /// the sequence untouched.
    pub fn delete_reminder(&mut self, index: usize) -> CalendarResult<Reminder> {
        if index < self.reminders.len() {
            Ok(self.reminders.remove(index))
        } else {
            Err(CalendarError::ReminderNotFound)
        }
    }

    /// Reminders in the order they were added.
    pub fn reminders(&self) -> &[Reminder] {
        &self.reminders
    }

    /// Move the event to a new date and time range.
    ///
    /// Callers have already validated the range and reserved the matching
    /// slots; this only updates the event's own fields.
    pub(crate) fn set_schedule(&mut self, date: NaiveDate, start: NaiveTime, end: NaiveTime) {
        self.date = date;
        self.start = start;
        self.end = end;
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ID: {}\nEvent title: {}\nDescription: {}\nTime: {} - {}",
            self.id, self.title, self.description, self.start, self.end
        )
    }
}
