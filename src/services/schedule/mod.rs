//! Timetable placement engine.
//!
//! Derives the renderable grid from an events snapshot in four pure steps:
//! grouping events by start cell, marking cells covered by spans, computing
//! row spans and resolving each cell's layout variant.

pub mod assembler;
pub mod cell_layout;
pub mod grid;
pub mod occupancy;
pub mod palette;
pub mod row_span;
mod view;

pub use assembler::{assemble, ClickTarget, GridRow, RenderCell, ScheduleGrid};
pub use cell_layout::{
    resolve_layout, resolve_variant, CellLayout, CycleCounts, LayoutVariant, Quadrant,
    GRID_CAPACITY,
};
pub use grid::{group_events, EventGrid, SlotGrid};
pub use occupancy::{covered_cells, CoveredSet};
pub use row_span::row_span;
pub use view::ScheduleView;
