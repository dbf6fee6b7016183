use chrono::{Duration, Local, NaiveDate, NaiveTime};
use slotcal::{Calendar, CalendarError, SLOTS_PER_DAY};

fn today() -> NaiveDate {
    Local::now().date_naive()
}

fn t(hour: u32, minute: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0).unwrap()
}

#[test]
fn same_day_reschedule_moves_the_reservation() {
    let mut calendar = Calendar::new();
    let id = calendar
        .add_event("Standup", "daily", today(), t(9, 0), t(9, 30))
        .unwrap();

    calendar
        .reschedule_event(&id, today(), t(11, 0), t(11, 30))
        .unwrap();

    let available = calendar.find_available_slots(today());
    assert!(available.contains(&t(9, 0)), "old slots must be freed");
    assert!(!available.contains(&t(11, 0)), "new slots must be reserved");

    let event = calendar.event(&id).unwrap();
    assert_eq!(event.start(), t(11, 0));
    assert_eq!(event.end(), t(11, 30));
}

#[test]
fn same_day_conflict_keeps_the_original_reservation() {
    let mut calendar = Calendar::new();
    let standup = calendar
        .add_event("Standup", "daily", today(), t(9, 0), t(9, 30))
        .unwrap();
    calendar
        .add_event("Planning", "", today(), t(10, 0), t(10, 30))
        .unwrap();
    let before = calendar.find_available_slots(today());

    let result = calendar.reschedule_event(&standup, today(), t(10, 0), t(10, 30));
    assert_eq!(result.unwrap_err(), CalendarError::SlotNotAvailable);
    assert_eq!(
        calendar.find_available_slots(today()),
        before,
        "a failed reschedule must not move any slot"
    );

    let event = calendar.event(&standup).unwrap();
    assert_eq!(event.start(), t(9, 0), "event fields must be untouched");
    assert_eq!(event.date(), today());
}

#[test]
fn cross_day_reschedule_moves_between_ledgers() {
    let mut calendar = Calendar::new();
    let tomorrow = today() + Duration::days(1);
    let id = calendar
        .add_event("Standup", "daily", today(), t(9, 0), t(9, 30))
        .unwrap();

    calendar
        .reschedule_event(&id, tomorrow, t(9, 0), t(9, 30))
        .unwrap();

    assert_eq!(
        calendar.find_available_slots(today()).len(),
        SLOTS_PER_DAY,
        "the old day must be fully free again"
    );
    let tomorrow_free = calendar.find_available_slots(tomorrow);
    assert!(!tomorrow_free.contains(&t(9, 0)));
    assert_eq!(calendar.event(&id).unwrap().date(), tomorrow);
}

#[test]
fn cross_day_conflict_leaves_the_event_where_it_was() {
    let mut calendar = Calendar::new();
    let tomorrow = today() + Duration::days(1);
    let id = calendar
        .add_event("Standup", "daily", today(), t(9, 0), t(9, 30))
        .unwrap();
    calendar
        .add_event("Blocker", "", tomorrow, t(9, 0), t(9, 30))
        .unwrap();

    let result = calendar.reschedule_event(&id, tomorrow, t(9, 15), t(9, 45));
    assert_eq!(result.unwrap_err(), CalendarError::SlotNotAvailable);

    let event = calendar.event(&id).unwrap();
    assert_eq!(event.date(), today());
    assert!(
        !calendar.find_available_slots(today()).contains(&t(9, 0)),
        "the original reservation must remain in place"
    );
}

#[test]
fn reschedule_rejects_unknown_events_and_past_dates() {
    let mut calendar = Calendar::new();
    let id = calendar
        .add_event("Standup", "daily", today(), t(9, 0), t(9, 30))
        .unwrap();

    let unknown = calendar.reschedule_event("ev-404", today(), t(10, 0), t(10, 30));
    assert_eq!(unknown.unwrap_err(), CalendarError::EventNotFound);

    let yesterday = today() - Duration::days(1);
    let past = calendar.reschedule_event(&id, yesterday, t(10, 0), t(10, 30));
    assert_eq!(past.unwrap_err(), CalendarError::DateInPast);
    assert_eq!(calendar.event(&id).unwrap().date(), today());
}

#[test]
fn deleted_event_resolves_nowhere() {
    let mut calendar = Calendar::new();
    let id = calendar
        .add_event("Standup", "daily", today(), t(9, 0), t(9, 30))
        .unwrap();

    let removed = calendar.delete_event(&id).unwrap();
    assert_eq!(removed.title, "Standup");

    assert!(calendar.event(&id).is_none());
    assert_eq!(calendar.find_available_slots(today()).len(), SLOTS_PER_DAY);

    let again = calendar.delete_event(&id);
    assert_eq!(again.unwrap_err(), CalendarError::EventNotFound);
}
