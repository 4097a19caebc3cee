// Rust Timetable Library
// Exports all modules for testing and reuse

pub mod models;
pub mod services;
pub mod utils;

pub use models::day::Day;
pub use models::event::{EventId, ScheduleEvent, WeekCycle};
pub use models::settings::{ScheduleCatalog, ScheduleConfig};
pub use models::time_slot::{TimeSlot, TimeSlotTable};
pub use services::schedule::{assemble, CellLayout, LayoutVariant, RenderCell, ScheduleGrid};
