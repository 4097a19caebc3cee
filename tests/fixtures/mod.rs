// Test fixtures - reusable test data
// Provides consistent events and catalogs across all test files

#![allow(dead_code)]

use chrono::NaiveTime;
use rust_timetable::models::day::Day;
use rust_timetable::models::event::{ScheduleEvent, SubjectType, WeekCycle};
use rust_timetable::models::settings::ScheduleCatalog;

/// Parse an `HH:MM` literal.
pub fn t(value: &str) -> NaiveTime {
    NaiveTime::parse_from_str(value, "%H:%M").unwrap()
}

/// Sample catalogs for testing
pub mod catalogs {
    use super::*;

    /// Six teaching slots with lunch at index 3, Monday to Friday.
    pub fn standard() -> ScheduleCatalog {
        ScheduleCatalog::default()
    }
}

/// Sample events for testing
pub mod events {
    use super::*;

    /// Creates a lecture without validation so malformed input can be tested.
    pub fn class(id: u64, day: Day, start: &str, end: &str, cycle: WeekCycle) -> ScheduleEvent {
        ScheduleEvent::builder()
            .id(id)
            .day(day)
            .start(t(start))
            .end(t(end))
            .week_cycle(cycle)
            .subject(format!("Course {}", id))
            .build_unchecked()
            .unwrap()
    }

    pub fn every(id: u64, day: Day, start: &str, end: &str) -> ScheduleEvent {
        class(id, day, start, end, WeekCycle::Every)
    }

    pub fn odd(id: u64, day: Day, start: &str, end: &str) -> ScheduleEvent {
        class(id, day, start, end, WeekCycle::Odd)
    }

    pub fn even(id: u64, day: Day, start: &str, end: &str) -> ScheduleEvent {
        class(id, day, start, end, WeekCycle::Even)
    }

    /// A seminar split into subgroups.
    pub fn seminar(id: u64, day: Day, start: &str, end: &str) -> ScheduleEvent {
        let mut event = class(id, day, start, end, WeekCycle::Every);
        event.subject_type = SubjectType::Seminar;
        event
    }
}

/// Sample events JSON as the CLI reads it.
pub const WEEK_JSON: &str = r#"[
  {"id": 1, "day": "monday", "start_time": "09:00", "end_time": "11:00",
   "subject_type": "lecture", "subject_name": "Algorithms", "room": "A-101",
   "control_form": "exam"},
  {"id": 2, "day": "tuesday", "start_time": "10:00", "end_time": "11:00",
   "week_cycle": "odd", "subject_type": "lab", "subject_name": "Networks",
   "subgroup": "a"},
  {"id": 3, "day": "tuesday", "start_time": "10:00", "end_time": "11:00",
   "week_cycle": "even", "subject_type": "lab", "subject_name": "Networks",
   "subgroup": "b"},
  {"id": 4, "day": "thursday", "start_time": "11:00", "end_time": "14:00",
   "subject_type": "seminar", "subject_name": "Databases", "group_number": 2},
  {"id": 5, "day": "friday", "start_time": "09:40", "end_time": "10:00",
   "subject_type": "lecture", "subject_name": "Misaligned"}
]"#;
