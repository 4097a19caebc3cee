//! Time slot catalog.
//!
//! The catalog is the ordered list of teaching slots that make up one
//! working day. Exactly one slot is the lunch break. Slot indices are the
//! row coordinates of the timetable grid.

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::event::ScheduleEvent;
use crate::models::settings::ConfigError;
use crate::utils::time::{clock_format, format_range};

/// A single row of the daily schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSlot {
    #[serde(with = "clock_format")]
    pub start: NaiveTime,
    #[serde(with = "clock_format")]
    pub end: NaiveTime,
    #[serde(default)]
    pub lunch: bool,
}

impl TimeSlot {
    pub fn new(start: NaiveTime, end: NaiveTime) -> Self {
        Self {
            start,
            end,
            lunch: false,
        }
    }

    pub fn lunch(start: NaiveTime, end: NaiveTime) -> Self {
        Self {
            start,
            end,
            lunch: true,
        }
    }

    pub fn label(&self) -> String {
        format_range(self.start, self.end)
    }
}

/// Problems found when checking an event against the slot catalog.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AlignmentIssue {
    #[error("start time {0} is not the start of any slot")]
    UnalignedStart(NaiveTime),
    #[error("end time {0} is not the end of any slot")]
    UnalignedEnd(NaiveTime),
    #[error("end time is not after start time")]
    NonPositiveDuration,
    #[error("event starts on the lunch break")]
    StartsOnLunch,
}

/// Validated, immutable slot catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeSlotTable {
    slots: Vec<TimeSlot>,
    lunch_index: usize,
}

impl TimeSlotTable {
    /// Build a table, rejecting catalogs the grid cannot be laid out on.
    pub fn new(slots: Vec<TimeSlot>) -> Result<Self, ConfigError> {
        if slots.is_empty() {
            return Err(ConfigError::EmptySlotCatalog);
        }

        for (index, slot) in slots.iter().enumerate() {
            if slot.end <= slot.start {
                return Err(ConfigError::EmptySlot { index });
            }
        }

        for (index, pair) in slots.windows(2).enumerate() {
            if pair[0].end != pair[1].start {
                return Err(ConfigError::SlotGap {
                    index: index + 1,
                    expected: pair[0].end,
                    found: pair[1].start,
                });
            }
        }

        let mut lunch_slots = slots
            .iter()
            .enumerate()
            .filter(|(_, slot)| slot.lunch)
            .map(|(index, _)| index);
        let lunch_index = lunch_slots.next().ok_or(ConfigError::MissingLunch)?;
        let extra = lunch_slots.count();
        if extra > 0 {
            return Err(ConfigError::MultipleLunch { count: extra + 1 });
        }

        Ok(Self { slots, lunch_index })
    }

    pub fn slots(&self) -> &[TimeSlot] {
        &self.slots
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Always false for a constructed table; present for API symmetry.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&TimeSlot> {
        self.slots.get(index)
    }

    /// Index of the slot starting exactly at `time`.
    pub fn slot_index_of(&self, time: NaiveTime) -> Option<usize> {
        self.slots.iter().position(|slot| slot.start == time)
    }

    /// Number of slots, lunch included, lying within `[start, end)`.
    ///
    /// Never returns less than 1, so inverted or zero-length events still
    /// occupy their start cell.
    pub fn slot_count_between(&self, start: NaiveTime, end: NaiveTime) -> usize {
        self.slots
            .iter()
            .filter(|slot| slot.start >= start && slot.end <= end)
            .count()
            .max(1)
    }

    pub fn lunch_index(&self) -> usize {
        self.lunch_index
    }

    pub fn lunch_slot(&self) -> &TimeSlot {
        &self.slots[self.lunch_index]
    }

    pub fn is_lunch(&self, index: usize) -> bool {
        index == self.lunch_index
    }

    /// Slot index an event is placed at, or `None` if it cannot be placed.
    pub fn placement_index(&self, event: &ScheduleEvent) -> Option<usize> {
        self.slot_index_of(event.start_time)
            .filter(|index| !self.is_lunch(*index))
    }

    /// Check an event against the catalog. Used at creation time; the grid
    /// itself degrades gracefully around these problems.
    pub fn alignment_issues(&self, event: &ScheduleEvent) -> Vec<AlignmentIssue> {
        let mut issues = Vec::new();

        match self.slot_index_of(event.start_time) {
            None => issues.push(AlignmentIssue::UnalignedStart(event.start_time)),
            Some(index) if self.is_lunch(index) => issues.push(AlignmentIssue::StartsOnLunch),
            Some(_) => {}
        }

        if !self.slots.iter().any(|slot| slot.end == event.end_time) {
            issues.push(AlignmentIssue::UnalignedEnd(event.end_time));
        }

        if event.end_time <= event.start_time {
            issues.push(AlignmentIssue::NonPositiveDuration);
        }

        issues
    }
}

impl Default for TimeSlotTable {
    fn default() -> Self {
        let slots = crate::models::settings::default_time_slots();
        let lunch_index = slots.iter().position(|slot| slot.lunch).unwrap_or(0);
        Self { slots, lunch_index }
    }
}
