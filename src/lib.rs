//! Core types for the slotcal in-memory calendar.
//!
//! This crate keeps a calendar's entire state in memory:
//! - `Calendar`, the aggregate root owning events and per-date slot ledgers
//! - `Day`, the ledger of 96 fifteen-minute slots for one date
//! - `Event` and `Reminder` for the scheduled activities themselves
//!
//! Persistence, presentation and concurrency control are the caller's
//! concern; every operation here is synchronous and completes before
//! returning.

pub mod calendar;
pub mod day;
pub mod error;
pub mod event;
pub mod ids;
pub mod reminder;

pub use calendar::Calendar;
pub use day::{Day, SLOT_MINUTES, SLOTS_PER_DAY};
pub use error::{CalendarError, CalendarResult};
pub use event::Event;
pub use ids::{IdSource, UuidSource};
pub use reminder::{Reminder, ReminderKind};
