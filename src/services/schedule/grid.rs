//! Fixed-size day × slot arena and event grouping.

use std::ops::{Index, IndexMut};

use crate::models::event::ScheduleEvent;
use crate::models::settings::ScheduleCatalog;

/// Dense grid indexed by (day position, slot index).
///
/// Every coordinate inside the catalog has a value, so lookups never have
/// to deal with missing keys.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotGrid<T> {
    day_count: usize,
    slot_count: usize,
    cells: Vec<T>,
}

impl<T: Clone + Default> SlotGrid<T> {
    pub fn new(day_count: usize, slot_count: usize) -> Self {
        Self {
            day_count,
            slot_count,
            cells: vec![T::default(); day_count * slot_count],
        }
    }

    pub fn for_catalog(catalog: &ScheduleCatalog) -> Self {
        Self::new(catalog.days().len(), catalog.slots().len())
    }
}

impl<T> SlotGrid<T> {
    pub fn day_count(&self) -> usize {
        self.day_count
    }

    pub fn slot_count(&self) -> usize {
        self.slot_count
    }

    fn offset(&self, day: usize, slot: usize) -> Option<usize> {
        (day < self.day_count && slot < self.slot_count).then(|| day * self.slot_count + slot)
    }

    pub fn get(&self, day: usize, slot: usize) -> Option<&T> {
        self.offset(day, slot).map(|offset| &self.cells[offset])
    }

    pub fn get_mut(&mut self, day: usize, slot: usize) -> Option<&mut T> {
        self.offset(day, slot).map(move |offset| &mut self.cells[offset])
    }

    /// All slots of one day column, in slot order.
    pub fn column(&self, day: usize) -> &[T] {
        let start = day.min(self.day_count) * self.slot_count;
        let end = (start + self.slot_count).min(self.cells.len());
        &self.cells[start..end]
    }
}

impl<T> Index<(usize, usize)> for SlotGrid<T> {
    type Output = T;

    fn index(&self, (day, slot): (usize, usize)) -> &T {
        assert!(day < self.day_count && slot < self.slot_count, "cell ({day}, {slot}) out of range");
        &self.cells[day * self.slot_count + slot]
    }
}

impl<T> IndexMut<(usize, usize)> for SlotGrid<T> {
    fn index_mut(&mut self, (day, slot): (usize, usize)) -> &mut T {
        assert!(day < self.day_count && slot < self.slot_count, "cell ({day}, {slot}) out of range");
        &mut self.cells[day * self.slot_count + slot]
    }
}

/// Events grouped by the cell they start in.
pub type EventGrid<'a> = SlotGrid<Vec<&'a ScheduleEvent>>;

/// Group events into the (day, start slot) cell they start in.
///
/// Events that cannot be placed are skipped with a warning: a start that
/// matches no slot, a start on the lunch break, or a day outside the
/// catalog. Input order is preserved inside each cell.
pub fn group_events<'a>(events: &'a [ScheduleEvent], catalog: &ScheduleCatalog) -> EventGrid<'a> {
    let mut grid = EventGrid::for_catalog(catalog);

    for event in events {
        let Some(day) = catalog.day_position(event.day) else {
            log::warn!(
                "Skipping event {} '{}': {} is not a timetable day",
                event.id,
                event.subject_name,
                event.day
            );
            continue;
        };
        let Some(slot) = catalog.slots().placement_index(event) else {
            log::warn!(
                "Skipping event {} '{}': start {} does not begin a teaching slot",
                event.id,
                event.subject_name,
                event.start_time.format("%H:%M")
            );
            continue;
        };
        grid[(day, slot)].push(event);
    }

    grid
}
