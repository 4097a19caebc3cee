//! Category colours for event blocks and the legend.
//!
//! Makeup sessions share one colour regardless of subject type; everything
//! else is coloured by subject type.

use serde::Serialize;

use crate::models::event::{ScheduleEvent, SubjectType, WeekCycle};

pub const LECTURE_COLOR: &str = "#86EFAC";
pub const SEMINAR_COLOR: &str = "#2DD4BF";
pub const LAB_COLOR: &str = "#CEBDE6";
pub const MAKEUP_COLOR: &str = "#5FCFB8";
pub const ODD_WEEK_COLOR: &str = "#85DAFF";
pub const EVEN_WEEK_COLOR: &str = "#FF9EC6";

/// Used when no event is available to pick a colour from.
pub const NEUTRAL_COLOR: &str = "#646464";

pub fn subject_color(subject_type: SubjectType) -> &'static str {
    match subject_type {
        SubjectType::Lecture => LECTURE_COLOR,
        SubjectType::Seminar => SEMINAR_COLOR,
        SubjectType::Lab => LAB_COLOR,
    }
}

/// Border/accent colour of an event block.
pub fn accent_color(event: &ScheduleEvent) -> &'static str {
    if event.is_makeup() {
        MAKEUP_COLOR
    } else {
        subject_color(event.subject_type)
    }
}

pub fn week_color(cycle: WeekCycle) -> Option<&'static str> {
    match cycle {
        WeekCycle::Every => None,
        WeekCycle::Odd => Some(ODD_WEEK_COLOR),
        WeekCycle::Even => Some(EVEN_WEEK_COLOR),
    }
}

/// Colour of the diagonal divider: the first present side decides.
pub fn divider_color(odd: Option<&ScheduleEvent>, even: Option<&ScheduleEvent>) -> &'static str {
    odd.or(even).map(accent_color).unwrap_or(NEUTRAL_COLOR)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LegendEntry {
    pub label: &'static str,
    pub color: &'static str,
}

/// Legend shown above the timetable.
pub fn legend() -> Vec<LegendEntry> {
    vec![
        LegendEntry { label: SubjectType::Lecture.label(), color: LECTURE_COLOR },
        LegendEntry { label: SubjectType::Seminar.label(), color: SEMINAR_COLOR },
        LegendEntry { label: SubjectType::Lab.label(), color: LAB_COLOR },
        LegendEntry { label: "Makeup", color: MAKEUP_COLOR },
        LegendEntry { label: "Odd week", color: ODD_WEEK_COLOR },
        LegendEntry { label: "Even week", color: EVEN_WEEK_COLOR },
    ]
}
