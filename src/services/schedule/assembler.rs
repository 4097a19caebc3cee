//! Grid assembly.
//!
//! Walks the slot catalog row by row and the day catalog column by column,
//! emitting one `RenderCell` for every cell that is not hidden under a
//! spanning event. The output order is row-major and depends only on the
//! events snapshot and the catalogs.

use chrono::NaiveTime;
use serde::Serialize;

use crate::models::day::Day;
use crate::models::event::{EventId, ScheduleEvent};
use crate::models::settings::ScheduleCatalog;
use crate::models::time_slot::TimeSlot;

use super::cell_layout::{resolve_layout, CellLayout, LayoutVariant};
use super::grid::group_events;
use super::occupancy::{covered_cells, CoveredSet};
use super::row_span::row_span;

/// What the event editor should open when a cell is clicked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ClickTarget {
    /// Create a new event in an empty cell.
    EmptySlot {
        day: Day,
        #[serde(with = "crate::utils::time::clock_format")]
        start: NaiveTime,
        #[serde(with = "crate::utils::time::clock_format")]
        end: NaiveTime,
    },
    /// Edit an existing event.
    Event(EventId),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderCell {
    pub day: Day,
    pub start_slot_index: usize,
    /// The slot the cell starts in.
    pub slot: TimeSlot,
    pub row_span: usize,
    pub layout: CellLayout,
}

impl RenderCell {
    pub fn variant(&self) -> LayoutVariant {
        self.layout.variant()
    }

    pub fn events(&self) -> Vec<&ScheduleEvent> {
        self.layout.events()
    }

    /// Click targets in display order. An empty cell offers a single
    /// target for adding an event at its slot.
    pub fn click_targets(&self) -> Vec<ClickTarget> {
        match self.layout {
            CellLayout::Empty => vec![ClickTarget::EmptySlot {
                day: self.day,
                start: self.slot.start,
                end: self.slot.end,
            }],
            _ => self
                .events()
                .into_iter()
                .map(|event| ClickTarget::Event(event.id))
                .collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum GridRow {
    /// Merged break row spanning every day column.
    Lunch { slot_index: usize, slot: TimeSlot },
    Slots {
        slot_index: usize,
        slot: TimeSlot,
        cells: Vec<RenderCell>,
    },
}

impl GridRow {
    pub fn slot_index(&self) -> usize {
        match self {
            GridRow::Lunch { slot_index, .. } | GridRow::Slots { slot_index, .. } => *slot_index,
        }
    }

    pub fn slot(&self) -> &TimeSlot {
        match self {
            GridRow::Lunch { slot, .. } | GridRow::Slots { slot, .. } => slot,
        }
    }

    pub fn cells(&self) -> &[RenderCell] {
        match self {
            GridRow::Lunch { .. } => &[],
            GridRow::Slots { cells, .. } => cells,
        }
    }
}

/// Assembled timetable for one events snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScheduleGrid {
    days: Vec<Day>,
    rows: Vec<GridRow>,
    #[serde(skip)]
    covered: CoveredSet,
}

impl ScheduleGrid {
    pub fn days(&self) -> &[Day] {
        &self.days
    }

    pub fn rows(&self) -> &[GridRow] {
        &self.rows
    }

    /// Row-major sequence of rendered cells.
    pub fn cells(&self) -> impl Iterator<Item = &RenderCell> {
        self.rows.iter().flat_map(GridRow::cells)
    }

    pub fn cell_at(&self, day: Day, slot_index: usize) -> Option<&RenderCell> {
        self.cells()
            .find(|cell| cell.day == day && cell.start_slot_index == slot_index)
    }

    pub fn is_covered(&self, day: Day, slot_index: usize) -> bool {
        self.day_position(day)
            .is_some_and(|position| self.covered.contains(position, slot_index))
    }

    pub fn covered_slots(&self, day: Day) -> Vec<usize> {
        self.day_position(day)
            .map(|position| self.covered.covered_slots(position))
            .unwrap_or_default()
    }

    fn day_position(&self, day: Day) -> Option<usize> {
        self.days.iter().position(|d| *d == day)
    }
}

/// Build the grid from an events snapshot.
pub fn assemble(events: &[ScheduleEvent], catalog: &ScheduleCatalog) -> ScheduleGrid {
    let slots = catalog.slots();
    let by_start = group_events(events, catalog);
    let covered = covered_cells(events, catalog);

    let rows = slots
        .slots()
        .iter()
        .enumerate()
        .map(|(slot_index, slot)| {
            if slot.lunch {
                return GridRow::Lunch {
                    slot_index,
                    slot: *slot,
                };
            }

            let cells = catalog
                .days()
                .iter()
                .enumerate()
                .filter(|(position, _)| !covered.contains(*position, slot_index))
                .map(|(position, day)| {
                    let cell_events = &by_start[(position, slot_index)];
                    RenderCell {
                        day: *day,
                        start_slot_index: slot_index,
                        slot: *slot,
                        row_span: row_span(slot_index, cell_events, slots),
                        layout: resolve_layout(cell_events),
                    }
                })
                .collect();

            GridRow::Slots {
                slot_index,
                slot: *slot,
                cells,
            }
        })
        .collect();

    let grid = ScheduleGrid {
        days: catalog.days().to_vec(),
        rows,
        covered,
    };
    log::debug!(
        "Assembled timetable: {} events, {} cells",
        events.len(),
        grid.cells().count()
    );
    grid
}
