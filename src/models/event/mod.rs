// Event module
// Recurring weekly class event placed on the timetable grid

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use crate::models::day::Day;
use crate::utils::time::clock_format;

/// Identifier assigned by the event store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventId(pub u64);

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Which weeks of the two-week pattern an event occurs on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeekCycle {
    #[default]
    Every,
    Odd,
    Even,
}

impl WeekCycle {
    /// Badge text for parity-bound events. `Every` events carry no badge.
    pub fn badge_label(&self) -> Option<&'static str> {
        match self {
            WeekCycle::Every => None,
            WeekCycle::Odd => Some("Odd week"),
            WeekCycle::Even => Some("Even week"),
        }
    }

    pub fn short_badge(&self) -> Option<&'static str> {
        match self {
            WeekCycle::Every => None,
            WeekCycle::Odd => Some("ODD"),
            WeekCycle::Even => Some("EVEN"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventType {
    #[default]
    Regular,
    Makeup,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubjectType {
    Lecture,
    Seminar,
    Lab,
}

impl SubjectType {
    pub fn label(&self) -> &'static str {
        match self {
            SubjectType::Lecture => "Lecture",
            SubjectType::Seminar => "Seminar",
            SubjectType::Lab => "Lab",
        }
    }

    /// Suffix appended to the title of makeup sessions.
    pub fn makeup_abbreviation(&self) -> &'static str {
        match self {
            SubjectType::Lecture => "(L)",
            SubjectType::Seminar => "(S)",
            SubjectType::Lab => "(LAB)",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Subgroup {
    A,
    B,
}

impl Subgroup {
    pub fn label(&self) -> &'static str {
        match self {
            Subgroup::A => "Subgroup A",
            Subgroup::B => "Subgroup B",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ControlForm {
    Exam,
    CurrentAssessment,
}

impl ControlForm {
    pub fn label(&self) -> &'static str {
        match self {
            ControlForm::Exam => "exam",
            ControlForm::CurrentAssessment => "current assessment",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectType {
    CourseProject,
    CourseWork,
}

impl ProjectType {
    pub fn label(&self) -> &'static str {
        match self {
            ProjectType::CourseProject => "Course project",
            ProjectType::CourseWork => "Course work",
        }
    }
}

/// A weekly class session.
///
/// `start_time` is expected to equal some slot start and `end_time` some
/// slot end; see `TimeSlotTable::alignment_issues`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleEvent {
    #[serde(default)]
    pub id: EventId,
    pub day: Day,
    #[serde(with = "clock_format")]
    pub start_time: NaiveTime,
    #[serde(with = "clock_format")]
    pub end_time: NaiveTime,
    #[serde(default)]
    pub week_cycle: WeekCycle,
    #[serde(default)]
    pub event_type: EventType,
    pub subject_type: SubjectType,
    pub subject_name: String,
    #[serde(default)]
    pub room: Option<String>,
    #[serde(default)]
    pub group_number: Option<u32>,
    #[serde(default)]
    pub subgroup: Option<Subgroup>,
    #[serde(default)]
    pub control_form: Option<ControlForm>,
    #[serde(default)]
    pub project_type: Option<ProjectType>,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EventValidationError {
    #[error("Subject name cannot be empty")]
    EmptySubject,
    #[error("Event end time must be after start time")]
    EndNotAfterStart,
    #[error("Group number must be positive")]
    InvalidGroupNumber,
    #[error("{0} is required")]
    MissingField(&'static str),
}

impl ScheduleEvent {
    /// Create a builder for constructing events with optional fields
    pub fn builder() -> ScheduleEventBuilder {
        ScheduleEventBuilder::new()
    }

    /// Validate the event fields that do not depend on the slot catalog.
    pub fn validate(&self) -> Result<(), EventValidationError> {
        if self.subject_name.trim().is_empty() {
            return Err(EventValidationError::EmptySubject);
        }

        if self.end_time <= self.start_time {
            return Err(EventValidationError::EndNotAfterStart);
        }

        if self.group_number == Some(0) {
            return Err(EventValidationError::InvalidGroupNumber);
        }

        Ok(())
    }

    pub fn is_makeup(&self) -> bool {
        self.event_type == EventType::Makeup
    }

    /// Title as displayed in an event block.
    pub fn display_title(&self) -> String {
        if self.is_makeup() {
            format!(
                "{} {}",
                self.subject_name,
                self.subject_type.makeup_abbreviation()
            )
        } else {
            self.subject_name.clone()
        }
    }

    pub fn room_label(&self) -> &str {
        self.room
            .as_deref()
            .filter(|room| !room.trim().is_empty())
            .unwrap_or("-")
    }

    /// Subgroup label if set, otherwise the group number.
    pub fn group_label(&self) -> Option<String> {
        match (self.subgroup, self.group_number) {
            (Some(subgroup), _) => Some(subgroup.label().to_string()),
            (None, Some(number)) => Some(format!("Group {}", number)),
            (None, None) => None,
        }
    }

    pub fn shows_control_form(&self) -> bool {
        self.control_form.is_some() && self.subject_type == SubjectType::Lecture
    }

    pub fn shows_project(&self) -> bool {
        self.project_type.is_some() && self.subject_type == SubjectType::Lecture
    }

    pub fn shows_subgroup(&self) -> bool {
        self.subgroup.is_some()
            && matches!(self.subject_type, SubjectType::Seminar | SubjectType::Lab)
    }
}

/// Builder for creating events with optional fields
pub struct ScheduleEventBuilder {
    id: EventId,
    day: Option<Day>,
    start_time: Option<NaiveTime>,
    end_time: Option<NaiveTime>,
    week_cycle: WeekCycle,
    event_type: EventType,
    subject_type: SubjectType,
    subject_name: Option<String>,
    room: Option<String>,
    group_number: Option<u32>,
    subgroup: Option<Subgroup>,
    control_form: Option<ControlForm>,
    project_type: Option<ProjectType>,
}

impl ScheduleEventBuilder {
    pub fn new() -> Self {
        Self {
            id: EventId::default(),
            day: None,
            start_time: None,
            end_time: None,
            week_cycle: WeekCycle::Every,
            event_type: EventType::Regular,
            subject_type: SubjectType::Lecture,
            subject_name: None,
            room: None,
            group_number: None,
            subgroup: None,
            control_form: None,
            project_type: None,
        }
    }

    pub fn id(mut self, id: u64) -> Self {
        self.id = EventId(id);
        self
    }

    pub fn day(mut self, day: Day) -> Self {
        self.day = Some(day);
        self
    }

    pub fn start(mut self, start: NaiveTime) -> Self {
        self.start_time = Some(start);
        self
    }

    pub fn end(mut self, end: NaiveTime) -> Self {
        self.end_time = Some(end);
        self
    }

    pub fn week_cycle(mut self, cycle: WeekCycle) -> Self {
        self.week_cycle = cycle;
        self
    }

    pub fn event_type(mut self, event_type: EventType) -> Self {
        self.event_type = event_type;
        self
    }

    pub fn subject_type(mut self, subject_type: SubjectType) -> Self {
        self.subject_type = subject_type;
        self
    }

    pub fn subject(mut self, name: impl Into<String>) -> Self {
        self.subject_name = Some(name.into());
        self
    }

    pub fn room(mut self, room: impl Into<String>) -> Self {
        self.room = Some(room.into());
        self
    }

    pub fn group_number(mut self, number: u32) -> Self {
        self.group_number = Some(number);
        self
    }

    pub fn subgroup(mut self, subgroup: Subgroup) -> Self {
        self.subgroup = Some(subgroup);
        self
    }

    pub fn control_form(mut self, form: ControlForm) -> Self {
        self.control_form = Some(form);
        self
    }

    pub fn project_type(mut self, project: ProjectType) -> Self {
        self.project_type = Some(project);
        self
    }

    /// Build without validation. Useful for snapshots that may hold
    /// malformed data which the grid must degrade around.
    pub fn build_unchecked(self) -> Result<ScheduleEvent, EventValidationError> {
        Ok(ScheduleEvent {
            id: self.id,
            day: self.day.ok_or(EventValidationError::MissingField("Day"))?,
            start_time: self
                .start_time
                .ok_or(EventValidationError::MissingField("Start time"))?,
            end_time: self
                .end_time
                .ok_or(EventValidationError::MissingField("End time"))?,
            week_cycle: self.week_cycle,
            event_type: self.event_type,
            subject_type: self.subject_type,
            subject_name: self
                .subject_name
                .ok_or(EventValidationError::MissingField("Subject name"))?,
            room: self.room,
            group_number: self.group_number,
            subgroup: self.subgroup,
            control_form: self.control_form,
            project_type: self.project_type,
        })
    }

    /// Build the event
    pub fn build(self) -> Result<ScheduleEvent, EventValidationError> {
        let event = self.build_unchecked()?;
        event.validate()?;
        Ok(event)
    }
}

impl Default for ScheduleEventBuilder {
    fn default() -> Self {
        Self::new()
    }
}
