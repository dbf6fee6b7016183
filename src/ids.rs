//! Unique id generation for events.
//!
//! The calendar treats event ids as opaque strings handed out by an
//! injected source, so embedders can swap in their own scheme (sequential
//! counters in tests, externally issued ids, and so on).

use uuid::Uuid;

/// A source of unique event identifiers.
///
/// Every id returned must be distinct from every id the same source has
/// returned before.
pub trait IdSource {
    fn next_id(&mut self) -> String;
}

/// Default id source backed by random v4 UUIDs.
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidSource;

impl IdSource for UuidSource {
    fn next_id(&mut self) -> String {
        Uuid::new_v4().to_string()
    }
}
