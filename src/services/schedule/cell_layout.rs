//! Per-cell layout variant selection.
//!
//! A cell is a fixed-size visual slot that may have to host odd-week,
//! even-week and every-week sessions at once. The variant is picked from
//! the number of events of each week cycle, first match wins:
//!
//! 1. no events: `Empty`
//! 2. one every-week event and nothing else: `SingleFull`
//! 3. several every-week events and nothing else: `Grid2x2`
//! 4. three or more events of any cycle: `Grid2x2` with week badges,
//!    ordered odd, even, every
//! 5. odd or even events, two at most: `DiagonalSplit`
//! 6. anything else: `LinearList`
//!
//! The 2×2 grid holds four events. Extra events are left out of the cell
//! and counted in `omitted`.

use serde::Serialize;
use std::fmt;

use crate::models::event::{ScheduleEvent, WeekCycle};

use super::palette;

pub const GRID_CAPACITY: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum LayoutVariant {
    Empty,
    SingleFull,
    #[serde(rename = "grid-2x2")]
    Grid2x2,
    DiagonalSplit,
    LinearList,
}

impl LayoutVariant {
    pub fn as_str(&self) -> &'static str {
        match self {
            LayoutVariant::Empty => "empty",
            LayoutVariant::SingleFull => "single-full",
            LayoutVariant::Grid2x2 => "grid-2x2",
            LayoutVariant::DiagonalSplit => "diagonal-split",
            LayoutVariant::LinearList => "linear-list",
        }
    }
}

impl fmt::Display for LayoutVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Number of events per week cycle in one cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CycleCounts {
    pub odd: usize,
    pub even: usize,
    pub every: usize,
}

impl CycleCounts {
    pub fn of(events: &[&ScheduleEvent]) -> Self {
        events.iter().fold(Self::default(), |mut counts, event| {
            match event.week_cycle {
                WeekCycle::Odd => counts.odd += 1,
                WeekCycle::Even => counts.even += 1,
                WeekCycle::Every => counts.every += 1,
            }
            counts
        })
    }

    pub fn total(&self) -> usize {
        self.odd + self.even + self.every
    }
}

/// Pick the layout variant from the per-cycle event counts.
pub fn resolve_variant(counts: CycleCounts) -> LayoutVariant {
    let parity = counts.odd + counts.even;
    let total = counts.total();

    if total == 0 {
        LayoutVariant::Empty
    } else if counts.every == 1 && parity == 0 {
        LayoutVariant::SingleFull
    } else if counts.every >= 2 && parity == 0 {
        LayoutVariant::Grid2x2
    } else if total >= 3 {
        LayoutVariant::Grid2x2
    } else if parity > 0 && total <= 2 {
        LayoutVariant::DiagonalSplit
    } else {
        LayoutVariant::LinearList
    }
}

/// One of the four positions of the 2×2 grid, filled left to right, top
/// to bottom.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Quadrant {
    Event(ScheduleEvent),
    Filler,
}

impl Quadrant {
    pub fn event(&self) -> Option<&ScheduleEvent> {
        match self {
            Quadrant::Event(event) => Some(event),
            Quadrant::Filler => None,
        }
    }
}

/// Layout of one rendered cell together with the events it shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "variant", content = "content", rename_all = "kebab-case")]
pub enum CellLayout {
    /// Nothing scheduled; the cell is a click target for adding an event.
    Empty,
    /// One every-week event filling the cell at full size.
    SingleFull(ScheduleEvent),
    /// Compact four-quadrant grid.
    #[serde(rename = "grid-2x2")]
    Grid2x2 {
        quadrants: [Quadrant; GRID_CAPACITY],
        week_badges: bool,
        omitted: usize,
    },
    /// Odd-week event in the upper-left triangle, even-week event in the
    /// lower-right one.
    DiagonalSplit {
        odd: Option<ScheduleEvent>,
        even: Option<ScheduleEvent>,
        divider_color: &'static str,
        omitted: usize,
    },
    /// Compact vertical stack with week badges.
    LinearList(Vec<ScheduleEvent>),
}

impl CellLayout {
    pub fn variant(&self) -> LayoutVariant {
        match self {
            CellLayout::Empty => LayoutVariant::Empty,
            CellLayout::SingleFull(_) => LayoutVariant::SingleFull,
            CellLayout::Grid2x2 { .. } => LayoutVariant::Grid2x2,
            CellLayout::DiagonalSplit { .. } => LayoutVariant::DiagonalSplit,
            CellLayout::LinearList(_) => LayoutVariant::LinearList,
        }
    }

    /// Events shown in the cell, in display order.
    pub fn events(&self) -> Vec<&ScheduleEvent> {
        match self {
            CellLayout::Empty => Vec::new(),
            CellLayout::SingleFull(event) => vec![event],
            CellLayout::Grid2x2 { quadrants, .. } => {
                quadrants.iter().filter_map(Quadrant::event).collect()
            }
            CellLayout::DiagonalSplit { odd, even, .. } => {
                odd.iter().chain(even.iter()).collect()
            }
            CellLayout::LinearList(events) => events.iter().collect(),
        }
    }

    /// Events scheduled in the cell but not shown by this layout.
    pub fn omitted(&self) -> usize {
        match self {
            CellLayout::Grid2x2 { omitted, .. } | CellLayout::DiagonalSplit { omitted, .. } => {
                *omitted
            }
            _ => 0,
        }
    }
}

fn quadrants(events: Vec<&ScheduleEvent>) -> [Quadrant; GRID_CAPACITY] {
    std::array::from_fn(|index| {
        events
            .get(index)
            .map(|event| Quadrant::Event((*event).clone()))
            .unwrap_or(Quadrant::Filler)
    })
}

fn with_cycle<'a>(events: &[&'a ScheduleEvent], cycle: WeekCycle) -> Vec<&'a ScheduleEvent> {
    events
        .iter()
        .copied()
        .filter(|event| event.week_cycle == cycle)
        .collect()
}

/// Resolve the layout of one cell from the events starting in it.
pub fn resolve_layout(events: &[&ScheduleEvent]) -> CellLayout {
    let odd = with_cycle(events, WeekCycle::Odd);
    let even = with_cycle(events, WeekCycle::Even);
    let every = with_cycle(events, WeekCycle::Every);
    let counts = CycleCounts::of(events);

    match resolve_variant(counts) {
        LayoutVariant::Empty => CellLayout::Empty,
        LayoutVariant::SingleFull => CellLayout::SingleFull(every[0].clone()),
        LayoutVariant::Grid2x2 => {
            let week_badges = counts.odd + counts.even > 0;
            let ordered: Vec<&ScheduleEvent> = odd.into_iter().chain(even).chain(every).collect();
            let omitted = ordered.len().saturating_sub(GRID_CAPACITY);
            if omitted > 0 {
                log::warn!(
                    "{} events collide in one cell, {} not shown",
                    ordered.len(),
                    omitted
                );
            }
            CellLayout::Grid2x2 {
                quadrants: quadrants(ordered),
                week_badges,
                omitted,
            }
        }
        LayoutVariant::DiagonalSplit => {
            let odd_event = odd.first().copied();
            let even_event = even.first().copied();
            let shown = usize::from(odd_event.is_some()) + usize::from(even_event.is_some());
            CellLayout::DiagonalSplit {
                divider_color: palette::divider_color(odd_event, even_event),
                odd: odd_event.cloned(),
                even: even_event.cloned(),
                omitted: counts.total() - shown,
            }
        }
        LayoutVariant::LinearList => {
            CellLayout::LinearList(events.iter().map(|event| (*event).clone()).collect())
        }
    }
}
