//! Per-date ledger of fixed fifteen-minute slots.

use chrono::{NaiveDate, NaiveTime, Timelike};

use crate::error::{CalendarError, CalendarResult};

/// Width of one slot in minutes.
pub const SLOT_MINUTES: u32 = 15;

/// Number of slots in a day: 96, from 00:00 through 23:45.
pub const SLOTS_PER_DAY: usize = (24 * 60 / SLOT_MINUTES) as usize;

const SECONDS_PER_SLOT: u32 = SLOT_MINUTES * 60;

/// Occupancy ledger for one calendar date.
///
/// Each slot holds the id of the event occupying it, or `None` when free.
/// A slot is never partially occupied and never holds more than one event.
/// Slots are stored in a fixed array indexed by minutes-since-midnight
/// divided by the slot width, so lookups are O(1).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Day {
    date: NaiveDate,
    slots: [Option<String>; SLOTS_PER_DAY],
}

impl Day {
    /// Build the ledger for `date` with every slot free.
    pub fn new(date: NaiveDate) -> Self {
        Day {
            date,
            slots: std::array::from_fn(|_| None),
        }
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// Reserve every slot in `[start, end)` for `event_id`.
    ///
    /// The interval is half-open: the slot beginning exactly at `end` stays
    /// free, so back-to-back events never conflict. All-or-nothing: if any
    /// slot in the range is occupied, the ledger is left untouched and
    /// `SlotNotAvailable` is returned.
    pub fn add_event(
        &mut self,
        event_id: &str,
        start: NaiveTime,
        end: NaiveTime,
    ) -> CalendarResult<()> {
        if start > end {
            return Err(CalendarError::InvalidTimeRange);
        }

        let range = slot_range(start, end);
        if self.slots[range.clone()].iter().any(|slot| slot.is_some()) {
            return Err(CalendarError::SlotNotAvailable);
        }

        for slot in &mut self.slots[range] {
            *slot = Some(event_id.to_string());
        }
        Ok(())
    }

    /// Free every slot currently held by `event_id`.
    ///
    /// Always a full scan of the ledger. Fails with `EventNotFound` if no
    /// slot held the id.
    pub fn delete_event(&mut self, event_id: &str) -> CalendarResult<()> {
        let mut freed = false;
        for slot in &mut self.slots {
            if slot.as_deref() == Some(event_id) {
                *slot = None;
                freed = true;
            }
        }

        if freed {
            Ok(())
        } else {
            Err(CalendarError::EventNotFound)
        }
    }

    /// Move `event_id`'s reservation to a new time range.
    ///
    /// The prior reservation is restored if the new range conflicts with
    /// another event, so a failed update never unschedules the event.
    pub fn update_event(
        &mut self,
        event_id: &str,
        new_start: NaiveTime,
        new_end: NaiveTime,
    ) -> CalendarResult<()> {
        let snapshot = self.slots.clone();

        // An event with a zero-length range holds no slots; there is
        // nothing to free for it.
        let _ = self.delete_event(event_id);

        if let Err(err) = self.add_event(event_id, new_start, new_end) {
            self.slots = snapshot;
            return Err(err);
        }
        Ok(())
    }

    /// Start times of the free slots, in ascending order.
    pub fn available_slots(&self) -> Vec<NaiveTime> {
        self.slots
            .iter()
            .enumerate()
            .filter(|(_, slot)| slot.is_none())
            .map(|(index, _)| slot_time(index))
            .collect()
    }

    /// Id of the event occupying the slot containing `time`, if any.
    pub fn event_at(&self, time: NaiveTime) -> Option<&str> {
        self.slots[slot_index(time)].as_deref()
    }
}

/// Ledger index of the slot containing `time`.
fn slot_index(time: NaiveTime) -> usize {
    (time.num_seconds_from_midnight() / SECONDS_PER_SLOT) as usize
}

/// Start time of the slot at `index`.
fn slot_time(index: usize) -> NaiveTime {
    let minutes = index as u32 * SLOT_MINUTES;
    NaiveTime::from_hms_opt(minutes / 60, minutes % 60, 0).expect("slot index is within one day")
}

/// Indices of the slots whose start time falls in `[start, end)`.
fn slot_range(start: NaiveTime, end: NaiveTime) -> std::ops::Range<usize> {
    let first = start.num_seconds_from_midnight().div_ceil(SECONDS_PER_SLOT) as usize;
    let last = end.num_seconds_from_midnight().div_ceil(SECONDS_PER_SLOT) as usize;
    first.min(SLOTS_PER_DAY)..last.min(SLOTS_PER_DAY)
}
