// Property-based tests for grid assembly
// Random event snapshots against the default slot catalog

use chrono::NaiveTime;
use proptest::prelude::*;
use rust_timetable::models::day::Day;
use rust_timetable::models::event::{ScheduleEvent, WeekCycle};
use rust_timetable::models::settings::ScheduleCatalog;
use rust_timetable::services::schedule::{assemble, CellLayout, GRID_CAPACITY};

const LUNCH: usize = 3;

fn hour(h: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, 0, 0).unwrap()
}

fn cycle_from(index: u8) -> WeekCycle {
    match index % 3 {
        0 => WeekCycle::Every,
        1 => WeekCycle::Odd,
        _ => WeekCycle::Even,
    }
}

/// Event starting at slot `start` (09:00 + start hours) lasting `len` hours.
fn event(id: u64, day: usize, start: usize, len: usize, cycle: u8) -> ScheduleEvent {
    let start_hour = 9 + start as u32;
    let end_hour = (start_hour + len as u32).min(23);
    ScheduleEvent::builder()
        .id(id)
        .day(Day::WORK_WEEK[day])
        .start(hour(start_hour))
        .end(hour(end_hour))
        .week_cycle(cycle_from(cycle))
        .subject(format!("Course {}", id))
        .build_unchecked()
        .unwrap()
}

fn snapshot() -> impl Strategy<Value = Vec<ScheduleEvent>> {
    prop::collection::vec((0..5usize, 0..7usize, 1..4usize, any::<u8>()), 0..24).prop_map(
        |specs| {
            specs
                .into_iter()
                .enumerate()
                .map(|(i, (day, start, len, cycle))| event(i as u64 + 1, day, start, len, cycle))
                .collect()
        },
    )
}

proptest! {
    /// Property: a lone event that stays on one side of lunch spans exactly
    /// its slot count and covers the slots right below it
    #[test]
    fn prop_span_without_lunch_matches_slot_count(
        morning in any::<bool>(),
        offset in 0..3usize,
        len in 1..=3usize,
    ) {
        let start = if morning { offset } else { LUNCH + 1 + offset.min(1) };
        let last_slot = if morning { LUNCH - 1 } else { 5 };
        let len = len.min(last_slot - start + 1);
        let catalog = ScheduleCatalog::default();
        let grid = assemble(&[event(1, 0, start, len, 0)], &catalog);

        let cell = grid.cell_at(Day::Monday, start).unwrap();
        prop_assert_eq!(cell.row_span, len);
        let expected: Vec<usize> = (start + 1..start + len).collect();
        prop_assert_eq!(grid.covered_slots(Day::Monday), expected);
    }

    /// Property: a morning event reaching into lunch gains one extra row
    #[test]
    fn prop_span_across_lunch_adds_one_row(start in 0..LUNCH, extra in 0..2usize) {
        let len = LUNCH - start + 1 + extra;
        let catalog = ScheduleCatalog::default();
        let grid = assemble(&[event(1, 2, start, len, 0)], &catalog);

        let cell = grid.cell_at(Day::Wednesday, start).unwrap();
        prop_assert_eq!(cell.row_span, len + 1);
        prop_assert!(grid.is_covered(Day::Wednesday, LUNCH));
    }

    /// Property: no rendered cell starts in a covered slot, and every
    /// rendered cell spans at least one row
    #[test]
    fn prop_rendered_cells_are_never_covered(events in snapshot()) {
        let grid = assemble(&events, &ScheduleCatalog::default());
        for cell in grid.cells() {
            prop_assert!(!grid.is_covered(cell.day, cell.start_slot_index));
            prop_assert!(cell.row_span >= 1);
            prop_assert!(cell.start_slot_index != LUNCH);
        }
    }

    /// Property: every cell resolves to exactly one layout, the grid never
    /// holds more than four events, and nothing placed in a cell is lost
    #[test]
    fn prop_layout_accounts_for_every_event(events in snapshot()) {
        let grid = assemble(&events, &ScheduleCatalog::default());
        for cell in grid.cells() {
            let placed = events
                .iter()
                .filter(|e| e.day == cell.day && e.start_time == cell.slot.start)
                .count();
            let shown = cell.events().len();
            prop_assert_eq!(shown + cell.layout.omitted(), placed);

            match &cell.layout {
                CellLayout::Empty => prop_assert_eq!(placed, 0),
                CellLayout::Grid2x2 { .. } => prop_assert!(shown <= GRID_CAPACITY),
                CellLayout::DiagonalSplit { .. } => prop_assert!(shown <= 2),
                CellLayout::SingleFull(_) => prop_assert_eq!(placed, 1),
                CellLayout::LinearList(_) => prop_assert!(shown > 0),
            }
        }
    }

    /// Property: assembly is a pure function of the snapshot
    #[test]
    fn prop_assembly_is_deterministic(events in snapshot()) {
        let catalog = ScheduleCatalog::default();
        prop_assert_eq!(assemble(&events, &catalog), assemble(&events, &catalog));
    }
}
