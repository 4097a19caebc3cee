//! Cells hidden under a spanning event.

use crate::models::event::ScheduleEvent;
use crate::models::settings::ScheduleCatalog;

use super::grid::SlotGrid;

/// Set of (day, slot) cells covered by an earlier event's span in the same
/// day column. Covered cells get no cell of their own when the grid is
/// assembled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoveredSet {
    grid: SlotGrid<bool>,
}

impl CoveredSet {
    pub fn contains(&self, day: usize, slot: usize) -> bool {
        self.grid.get(day, slot).copied().unwrap_or(false)
    }

    /// Covered slot indices of one day column, ascending.
    pub fn covered_slots(&self, day: usize) -> Vec<usize> {
        self.grid
            .column(day)
            .iter()
            .enumerate()
            .filter_map(|(slot, covered)| covered.then_some(slot))
            .collect()
    }

    pub fn len(&self) -> usize {
        (0..self.grid.day_count())
            .map(|day| self.grid.column(day).iter().filter(|c| **c).count())
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Walk each event's span and mark the cells below its start.
///
/// The walk starts at the slot after the start slot. Every visited slot is
/// marked, but the lunch slot does not count towards the
/// `slot_count_between - 1` slots the event still has to cover, so a span
/// crossing lunch also swallows the first slot after it.
pub fn covered_cells(events: &[ScheduleEvent], catalog: &ScheduleCatalog) -> CoveredSet {
    let slots = catalog.slots();
    let mut grid = SlotGrid::<bool>::for_catalog(catalog);

    for event in events {
        let (Some(day), Some(start)) = (
            catalog.day_position(event.day),
            slots.placement_index(event),
        ) else {
            continue;
        };

        let remaining = slots.slot_count_between(event.start_time, event.end_time) - 1;
        let mut consumed = 0;
        let mut slot = start + 1;

        while slot < slots.len() && consumed < remaining {
            grid[(day, slot)] = true;
            if !slots.is_lunch(slot) {
                consumed += 1;
            }
            slot += 1;
        }
    }

    CoveredSet { grid }
}
