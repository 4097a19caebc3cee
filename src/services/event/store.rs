use crate::models::event::{EventId, EventValidationError, ScheduleEvent};
use crate::models::time_slot::TimeSlotTable;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use std::sync::Arc;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("event {0} not found")]
    NotFound(EventId),
    #[error("event {0} already exists")]
    DuplicateId(EventId),
    #[error("invalid event: {0}")]
    Invalid(#[from] EventValidationError),
}

/// Immutable view of the event collection at one revision.
#[derive(Debug, Clone)]
pub struct EventSnapshot {
    revision: u64,
    events: Arc<[ScheduleEvent]>,
}

impl EventSnapshot {
    pub fn new(revision: u64, events: Vec<ScheduleEvent>) -> Self {
        Self {
            revision,
            events: events.into(),
        }
    }

    pub fn empty() -> Self {
        Self::new(0, Vec::new())
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn events(&self) -> &[ScheduleEvent] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

impl Default for EventSnapshot {
    fn default() -> Self {
        Self::empty()
    }
}

/// In-memory owner of the schedule events.
#[derive(Debug, Default)]
pub struct EventStore {
    snapshot: EventSnapshot,
    next_id: u64,
    slots: Option<TimeSlotTable>,
}

impl EventStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store that logs slot alignment warnings for new and edited events.
    pub fn with_slot_table(slots: TimeSlotTable) -> Self {
        Self {
            slots: Some(slots),
            ..Self::default()
        }
    }

    /// Parse a JSON array of events.
    ///
    /// Imported events are kept as-is even when they do not fit the slot
    /// catalog; the grid excludes them at render time. Events without an
    /// id get a fresh one.
    pub fn from_json(json: &str) -> Result<Self> {
        let events: Vec<ScheduleEvent> =
            serde_json::from_str(json).context("Failed to parse events JSON")?;
        let mut store = Self::new();
        store.import(events)?;
        Ok(store)
    }

    pub fn load_json(path: &Path) -> Result<Self> {
        let data = fs::read_to_string(path)
            .with_context(|| format!("Failed to read events from {}", path.display()))?;
        Self::from_json(&data).with_context(|| format!("Failed to load {}", path.display()))
    }

    fn import(&mut self, events: Vec<ScheduleEvent>) -> Result<(), StoreError> {
        let mut next_id = events.iter().map(|e| e.id.0).max().unwrap_or(0);
        let mut imported: Vec<ScheduleEvent> = Vec::with_capacity(events.len());

        for mut event in events {
            if event.id == EventId::default() {
                next_id += 1;
                event.id = EventId(next_id);
            } else if imported.iter().any(|e| e.id == event.id) {
                return Err(StoreError::DuplicateId(event.id));
            }
            if let Err(err) = event.validate() {
                log::warn!("Imported event {} is invalid: {}", event.id, err);
            }
            imported.push(event);
        }

        log::info!("Imported {} events", imported.len());
        self.next_id = next_id;
        self.publish(imported);
        Ok(())
    }

    /// Current settled snapshot. Cheap to clone.
    pub fn snapshot(&self) -> EventSnapshot {
        self.snapshot.clone()
    }

    pub fn revision(&self) -> u64 {
        self.snapshot.revision
    }

    pub fn len(&self) -> usize {
        self.snapshot.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshot.is_empty()
    }

    pub fn get(&self, id: EventId) -> Option<&ScheduleEvent> {
        self.snapshot.events().iter().find(|e| e.id == id)
    }

    /// Validate and add an event, assigning it a new id.
    pub fn create(&mut self, mut event: ScheduleEvent) -> Result<ScheduleEvent, StoreError> {
        event.validate()?;
        self.next_id += 1;
        event.id = EventId(self.next_id);
        self.warn_alignment(&event);

        let mut events = self.snapshot.events().to_vec();
        events.push(event.clone());
        self.publish(events);

        log::debug!("Created event {} '{}'", event.id, event.subject_name);
        Ok(event)
    }

    /// Replace the event with the same id.
    pub fn update(&mut self, event: ScheduleEvent) -> Result<(), StoreError> {
        event.validate()?;
        let position = self
            .snapshot
            .events()
            .iter()
            .position(|e| e.id == event.id)
            .ok_or(StoreError::NotFound(event.id))?;
        self.warn_alignment(&event);

        let mut events = self.snapshot.events().to_vec();
        events[position] = event;
        self.publish(events);
        Ok(())
    }

    pub fn delete(&mut self, id: EventId) -> Result<ScheduleEvent, StoreError> {
        let mut events = self.snapshot.events().to_vec();
        let position = events
            .iter()
            .position(|e| e.id == id)
            .ok_or(StoreError::NotFound(id))?;
        let removed = events.remove(position);
        self.publish(events);

        log::debug!("Deleted event {}", id);
        Ok(removed)
    }

    fn warn_alignment(&self, event: &ScheduleEvent) {
        let Some(slots) = &self.slots else {
            return;
        };
        for issue in slots.alignment_issues(event) {
            log::warn!(
                "Event {} '{}' on {}: {}",
                event.id,
                event.subject_name,
                event.day,
                issue
            );
        }
    }

    fn publish(&mut self, events: Vec<ScheduleEvent>) {
        self.snapshot = EventSnapshot::new(self.snapshot.revision + 1, events);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::day::Day;
    use crate::models::event::WeekCycle;
    use chrono::NaiveTime;

    fn at(hour: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(hour, 0, 0).unwrap()
    }

    fn sample_event() -> ScheduleEvent {
        ScheduleEvent::builder()
            .day(Day::Monday)
            .start(at(9))
            .end(at(11))
            .subject("Calculus")
            .build()
            .unwrap()
    }

    #[test]
    fn test_create_assigns_ids_and_bumps_revision() {
        let mut store = EventStore::new();
        assert_eq!(store.revision(), 0);

        let first = store.create(sample_event()).unwrap();
        let second = store.create(sample_event()).unwrap();

        assert_eq!(first.id, EventId(1));
        assert_eq!(second.id, EventId(2));
        assert_eq!(store.revision(), 2);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_create_rejects_invalid_event() {
        let mut store = EventStore::new();
        let mut event = sample_event();
        event.subject_name = String::new();

        let err = store.create(event).unwrap_err();
        assert_eq!(err, StoreError::Invalid(EventValidationError::EmptySubject));
        assert_eq!(store.revision(), 0);
    }

    #[test]
    fn test_snapshot_is_not_affected_by_later_mutation() {
        let mut store = EventStore::new();
        store.create(sample_event()).unwrap();
        let before = store.snapshot();

        store.create(sample_event()).unwrap();

        assert_eq!(before.len(), 1);
        assert_eq!(before.revision(), 1);
        assert_eq!(store.snapshot().len(), 2);
    }

    #[test]
    fn test_update_and_delete() {
        let mut store = EventStore::with_slot_table(TimeSlotTable::default());
        let mut event = store.create(sample_event()).unwrap();

        event.week_cycle = WeekCycle::Odd;
        store.update(event.clone()).unwrap();
        assert_eq!(store.get(event.id).unwrap().week_cycle, WeekCycle::Odd);

        let removed = store.delete(event.id).unwrap();
        assert_eq!(removed.id, event.id);
        assert!(store.is_empty());
        assert_eq!(store.delete(event.id).unwrap_err(), StoreError::NotFound(event.id));
    }

    #[test]
    fn test_update_unknown_id() {
        let mut store = EventStore::new();
        let mut event = sample_event();
        event.id = EventId(42);
        assert_eq!(store.update(event).unwrap_err(), StoreError::NotFound(EventId(42)));
    }

    #[test]
    fn test_from_json_assigns_missing_ids() {
        let json = r#"[
            {"id": 5, "day": "monday", "start_time": "09:00", "end_time": "10:00",
             "subject_type": "lecture", "subject_name": "A"},
            {"day": "friday", "start_time": "13:00", "end_time": "15:00",
             "subject_type": "lab", "subject_name": "B", "week_cycle": "even"}
        ]"#;
        let mut store = EventStore::from_json(json).unwrap();
        assert_eq!(store.len(), 2);
        assert!(store.get(EventId(5)).is_some());
        assert_eq!(store.get(EventId(6)).unwrap().subject_name, "B");

        let created = store.create(sample_event()).unwrap();
        assert_eq!(created.id, EventId(7));
    }

    #[test]
    fn test_from_json_rejects_duplicate_ids() {
        let json = r#"[
            {"id": 1, "day": "monday", "start_time": "09:00", "end_time": "10:00",
             "subject_type": "lecture", "subject_name": "A"},
            {"id": 1, "day": "monday", "start_time": "10:00", "end_time": "11:00",
             "subject_type": "lecture", "subject_name": "B"}
        ]"#;
        assert!(EventStore::from_json(json).is_err());
    }

    #[test]
    fn test_from_json_keeps_misaligned_events() {
        let json = r#"[
            {"id": 1, "day": "monday", "start_time": "09:20", "end_time": "10:00",
             "subject_type": "lecture", "subject_name": "Odd start"}
        ]"#;
        let store = EventStore::from_json(json).unwrap();
        assert_eq!(store.len(), 1);
    }
}
