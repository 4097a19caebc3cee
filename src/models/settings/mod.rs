// Settings module
// Static timetable configuration: slot catalog and day catalog

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::day::Day;
use crate::models::time_slot::{TimeSlot, TimeSlotTable};

/// Configuration errors are fatal: the grid cannot be laid out without a
/// well-formed catalog.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("time slot catalog is empty")]
    EmptySlotCatalog,
    #[error("time slot {index} does not end after it starts")]
    EmptySlot { index: usize },
    #[error("time slot {index} starts at {found} but the previous slot ends at {expected}")]
    SlotGap {
        index: usize,
        expected: NaiveTime,
        found: NaiveTime,
    },
    #[error("time slot catalog has no lunch slot")]
    MissingLunch,
    #[error("time slot catalog has {count} lunch slots, expected exactly one")]
    MultipleLunch { count: usize },
    #[error("day catalog is empty")]
    EmptyDayCatalog,
    #[error("day catalog lists {0} more than once")]
    DuplicateDay(Day),
}

/// On-disk timetable configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScheduleConfig {
    pub time_slots: Vec<TimeSlot>,
    pub days: Vec<Day>,
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            time_slots: default_time_slots(),
            days: Day::WORK_WEEK.to_vec(),
        }
    }
}

impl ScheduleConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.clone().into_catalog().map(|_| ())
    }

    /// Validate and turn the configuration into the catalogs the grid is
    /// built on.
    pub fn into_catalog(self) -> Result<ScheduleCatalog, ConfigError> {
        ScheduleCatalog::new(TimeSlotTable::new(self.time_slots)?, self.days)
    }
}

/// Validated slot and day catalogs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleCatalog {
    slots: TimeSlotTable,
    days: Vec<Day>,
}

impl ScheduleCatalog {
    pub fn new(slots: TimeSlotTable, days: Vec<Day>) -> Result<Self, ConfigError> {
        if days.is_empty() {
            return Err(ConfigError::EmptyDayCatalog);
        }
        for (index, day) in days.iter().enumerate() {
            if days[..index].contains(day) {
                return Err(ConfigError::DuplicateDay(*day));
            }
        }
        Ok(Self { slots, days })
    }

    pub fn slots(&self) -> &TimeSlotTable {
        &self.slots
    }

    pub fn days(&self) -> &[Day] {
        &self.days
    }

    /// Column position of a day, if it is part of the catalog.
    pub fn day_position(&self, day: Day) -> Option<usize> {
        self.days.iter().position(|d| *d == day)
    }
}

impl Default for ScheduleCatalog {
    fn default() -> Self {
        Self {
            slots: TimeSlotTable::default(),
            days: Day::WORK_WEEK.to_vec(),
        }
    }
}

fn hm(hour: u32, minute: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0).unwrap_or(NaiveTime::MIN)
}

/// Default catalog: three morning slots, lunch, three afternoon slots.
pub fn default_time_slots() -> Vec<TimeSlot> {
    vec![
        TimeSlot::new(hm(9, 0), hm(10, 0)),
        TimeSlot::new(hm(10, 0), hm(11, 0)),
        TimeSlot::new(hm(11, 0), hm(12, 0)),
        TimeSlot::lunch(hm(12, 0), hm(13, 0)),
        TimeSlot::new(hm(13, 0), hm(14, 0)),
        TimeSlot::new(hm(14, 0), hm(15, 0)),
        TimeSlot::new(hm(15, 0), hm(16, 0)),
    ]
}
