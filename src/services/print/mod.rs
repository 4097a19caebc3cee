//! Plain-text rendering of an assembled timetable.
//!
//! Prints one block per slot row. Each rendered cell is listed with its
//! day, row span and layout variant; the lunch row is a single merged line.

use std::fmt;

use crate::models::event::ScheduleEvent;
use crate::services::schedule::palette;
use crate::services::schedule::{CellLayout, GridRow, Quadrant, RenderCell, ScheduleGrid};

/// Options for the text table.
#[derive(Debug, Clone)]
pub struct PrintOptions {
    pub show_legend: bool,
    /// Print empty cells as well as occupied ones.
    pub show_empty: bool,
}

impl Default for PrintOptions {
    fn default() -> Self {
        Self {
            show_legend: true,
            show_empty: true,
        }
    }
}

/// `Display` adapter over a `ScheduleGrid`.
pub struct TextTable<'a> {
    grid: &'a ScheduleGrid,
    options: PrintOptions,
}

impl<'a> TextTable<'a> {
    pub fn new(grid: &'a ScheduleGrid) -> Self {
        Self::with_options(grid, PrintOptions::default())
    }

    pub fn with_options(grid: &'a ScheduleGrid, options: PrintOptions) -> Self {
        Self { grid, options }
    }
}

fn describe(event: &ScheduleEvent, week_badge: bool) -> String {
    let mut text = format!("{} · {}", event.display_title(), event.room_label());
    if let Some(group) = event.group_label() {
        text.push_str(&format!(" · {}", group));
    }
    if event.shows_control_form() {
        if let Some(form) = event.control_form {
            text.push_str(&format!(" ({})", form.label()));
        }
    }
    if event.shows_project() {
        if let Some(project) = event.project_type {
            text.push_str(&format!(" [{}]", project.label()));
        }
    }
    if week_badge {
        if let Some(badge) = event.week_cycle.short_badge() {
            text.push_str(&format!(" [{}]", badge));
        }
    }
    text
}

fn describe_layout(layout: &CellLayout) -> String {
    match layout {
        CellLayout::Empty => "+".to_string(),
        CellLayout::SingleFull(event) => describe(event, false),
        CellLayout::Grid2x2 {
            quadrants,
            week_badges,
            omitted,
        } => {
            let parts: Vec<String> = quadrants
                .iter()
                .enumerate()
                .map(|(index, quadrant)| match quadrant {
                    Quadrant::Event(event) => format!("q{}: {}", index + 1, describe(event, *week_badges)),
                    Quadrant::Filler => format!("q{}: -", index + 1),
                })
                .collect();
            let mut text = parts.join(" | ");
            if *omitted > 0 {
                text.push_str(&format!(" | +{} more", omitted));
            }
            text
        }
        CellLayout::DiagonalSplit {
            odd, even, omitted, ..
        } => {
            let side = |event: &Option<ScheduleEvent>| {
                event
                    .as_ref()
                    .map(|e| describe(e, false))
                    .unwrap_or_else(|| "-".to_string())
            };
            let mut text = format!("odd: {} / even: {}", side(odd), side(even));
            if *omitted > 0 {
                text.push_str(&format!(" | +{} more", omitted));
            }
            text
        }
        CellLayout::LinearList(events) => events
            .iter()
            .map(|event| describe(event, true))
            .collect::<Vec<_>>()
            .join(" ; "),
    }
}

fn write_cell(f: &mut fmt::Formatter<'_>, cell: &RenderCell) -> fmt::Result {
    let span = if cell.row_span > 1 {
        format!(", {} rows", cell.row_span)
    } else {
        String::new()
    };
    writeln!(
        f,
        "  {:<4}[{}{}] {}",
        cell.day.short_label(),
        cell.variant(),
        span,
        describe_layout(&cell.layout)
    )
}

impl fmt::Display for TextTable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let days: Vec<&str> = self.grid.days().iter().map(|day| day.label()).collect();
        writeln!(f, "Timetable: {}", days.join(", "))?;

        if self.options.show_legend {
            let legend: Vec<String> = palette::legend()
                .iter()
                .map(|entry| format!("{} {}", entry.label, entry.color))
                .collect();
            writeln!(f, "Legend: {}", legend.join(" | "))?;
        }

        for row in self.grid.rows() {
            match row {
                GridRow::Lunch { slot, .. } => {
                    writeln!(f, "{}  === Lunch break ===", slot.label())?;
                }
                GridRow::Slots { slot, cells, .. } => {
                    writeln!(f, "{}", slot.label())?;
                    for cell in cells {
                        if !self.options.show_empty && matches!(cell.layout, CellLayout::Empty) {
                            continue;
                        }
                        write_cell(f, cell)?;
                    }
                }
            }
        }

        Ok(())
    }
}
