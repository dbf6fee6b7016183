//! The calendar aggregate root.

use std::collections::HashMap;

use chrono::{Local, NaiveDate, NaiveDateTime, NaiveTime};
use tracing::debug;

use crate::day::Day;
use crate::error::{CalendarError, CalendarResult};
use crate::event::Event;
use crate::ids::{IdSource, UuidSource};
use crate::reminder::ReminderKind;

/// Aggregate root owning every event and every per-date slot ledger.
///
/// All creation and cross-entity consistency flows through this type: day
/// ledgers reference events by id only, and the event table is the single
/// owner of the events themselves. The calendar is an explicit object the
/// caller constructs and passes around; there is no hidden global instance.
///
/// Every operation takes `&mut self` and completes before returning, so
/// within one thread the borrow checker enforces exclusive access. Callers
/// sharing a calendar across threads must add their own synchronization.
pub struct Calendar {
    days: HashMap<NaiveDate, Day>,
    events: HashMap<String, Event>,
    ids: Box<dyn IdSource>,
}

impl Calendar {
    /// New empty calendar with UUID-backed event ids.
    pub fn new() -> Self {
        Self::with_id_source(Box::new(UuidSource))
    }

    /// New empty calendar around a caller-provided id source.
    pub fn with_id_source(ids: Box<dyn IdSource>) -> Self {
        Calendar {
            days: HashMap::new(),
            events: HashMap::new(),
            ids,
        }
    }

    // =========================================================================
    // Event operations
    // =========================================================================

    /// Schedule a new event and return its id.
    ///
    /// Fails with `DateInPast` for dates before today (time of day is not
    /// considered). The day ledger is created lazily on first use. Slots
    /// are reserved before the event is registered, so a conflict leaves
    /// no orphaned event behind.
    pub fn add_event(
        &mut self,
        title: &str,
        description: &str,
        date: NaiveDate,
        start: NaiveTime,
        end: NaiveTime,
    ) -> CalendarResult<String> {
        if date < today() {
            return Err(CalendarError::DateInPast);
        }

        let event = Event::new(self.ids.next_id(), title, description, date, start, end)?;
        let id = event.id().to_string();

        let day = self.days.entry(date).or_insert_with(|| Day::new(date));
        day.add_event(&id, start, end)?;

        debug!("Scheduled event {} on {}", id, date);
        self.events.insert(id.clone(), event);
        Ok(id)
    }

    /// Move an event to a new date and/or time range.
    ///
    /// Same-day moves go through the ledger's rollback-protected update.
    /// Cross-day moves reserve the target day before releasing the old
    /// one. Either way, a conflict leaves the original reservation and the
    /// event's own fields unchanged.
    pub fn reschedule_event(
        &mut self,
        event_id: &str,
        date: NaiveDate,
        start: NaiveTime,
        end: NaiveTime,
    ) -> CalendarResult<()> {
        if date < today() {
            return Err(CalendarError::DateInPast);
        }
        if start > end {
            return Err(CalendarError::InvalidTimeRange);
        }

        let old_date = self
            .events
            .get(event_id)
            .ok_or(CalendarError::EventNotFound)?
            .date();

        if old_date == date {
            let day = self
                .days
                .get_mut(&date)
                .ok_or(CalendarError::EventNotFound)?;
            day.update_event(event_id, start, end)?;
        } else {
            let target = self.days.entry(date).or_insert_with(|| Day::new(date));
            target.add_event(event_id, start, end)?;

            if let Some(old_day) = self.days.get_mut(&old_date) {
                // Zero-length reservations hold no slots, so a miss is fine.
                let _ = old_day.delete_event(event_id);
            }
        }

        if let Some(event) = self.events.get_mut(event_id) {
            event.set_schedule(date, start, end);
        }
        debug!("Rescheduled event {} to {} {}-{}", event_id, date, start, end);
        Ok(())
    }

    /// Remove an event entirely, freeing its slots, and return it.
    pub fn delete_event(&mut self, event_id: &str) -> CalendarResult<Event> {
        let event = self
            .events
            .remove(event_id)
            .ok_or(CalendarError::EventNotFound)?;

        if let Some(day) = self.days.get_mut(&event.date()) {
            // Zero-length reservations hold no slots, so a miss is fine.
            let _ = day.delete_event(event_id);
        }

        debug!("Deleted event {}", event_id);
        Ok(event)
    }

    // =========================================================================
    // Reminder operations
    // =========================================================================

    /// Attach a reminder to an event.
    pub fn add_reminder(
        &mut self,
        event_id: &str,
        when: NaiveDateTime,
        kind: ReminderKind,
    ) -> CalendarResult<()> {
        let event = self
            .events
            .get_mut(event_id)
            .ok_or(CalendarError::EventNotFound)?;
        event.add_reminder(when, kind);
        Ok(())
    }

    /// Drop the reminder at `index` from an event.
    pub fn delete_reminder(&mut self, event_id: &str, index: usize) -> CalendarResult<()> {
        let event = self
            .events
            .get_mut(event_id)
            .ok_or(CalendarError::EventNotFound)?;
        event.delete_reminder(index)?;
        Ok(())
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Free slot start times for `date`, in ascending order.
    ///
    /// A date that has no ledger yet reports no slots; querying never
    /// creates one.
    pub fn find_available_slots(&self, date: NaiveDate) -> Vec<NaiveTime> {
        self.days
            .get(&date)
            .map(|day| day.available_slots())
            .unwrap_or_default()
    }

    /// Look up an event by id.
    pub fn event(&self, event_id: &str) -> Option<&Event> {
        self.events.get(event_id)
    }

    /// All registered events, in no particular order.
    pub fn events(&self) -> impl Iterator<Item = &Event> {
        self.events.values()
    }

    /// Events scheduled on `date`, ordered by start time.
    pub fn events_on(&self, date: NaiveDate) -> Vec<&Event> {
        let mut events: Vec<&Event> = self
            .events
            .values()
            .filter(|event| event.date() == date)
            .collect();
        events.sort_by_key(|event| event.start());
        events
    }
}

impl Default for Calendar {
    fn default() -> Self {
        Self::new()
    }
}

/// Today's civil date in the system's local timezone.
fn today() -> NaiveDate {
    Local::now().date_naive()
}
