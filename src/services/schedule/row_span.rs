//! Physical row span of a start cell.

use crate::models::event::ScheduleEvent;
use crate::models::time_slot::TimeSlotTable;

/// Number of grid rows the cell starting at `start_slot` occupies.
///
/// The longest event in the cell decides the span. Shorter events sharing
/// the cell are cut by the renderer, not here. A span that reaches past
/// the lunch slot gains one row for the lunch row sitting in between.
pub fn row_span(start_slot: usize, cell_events: &[&ScheduleEvent], slots: &TimeSlotTable) -> usize {
    let Some(max_slot_count) = cell_events
        .iter()
        .map(|event| slots.slot_count_between(event.start_time, event.end_time))
        .max()
    else {
        return 1;
    };

    let lunch = slots.lunch_index();
    let end_slot = start_slot + max_slot_count - 1;
    let span = if start_slot < lunch && end_slot >= lunch {
        max_slot_count + 1
    } else {
        max_slot_count
    };

    span.max(1)
}
