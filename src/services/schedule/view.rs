//! Memoized grid for the current events snapshot.

use std::sync::Arc;

use crate::models::settings::ScheduleCatalog;
use crate::services::event::EventSnapshot;

use super::assembler::{assemble, ScheduleGrid};

/// Caches the assembled grid per snapshot revision.
///
/// A view follows a single event store: revisions are only comparable
/// between snapshots of the same store. Any new revision triggers a full
/// recompute, since one inserted event can change the occupancy of every
/// cell below it in its day column.
pub struct ScheduleView {
    catalog: ScheduleCatalog,
    cached: Option<(u64, Arc<ScheduleGrid>)>,
}

impl ScheduleView {
    pub fn new(catalog: ScheduleCatalog) -> Self {
        Self {
            catalog,
            cached: None,
        }
    }

    pub fn catalog(&self) -> &ScheduleCatalog {
        &self.catalog
    }

    /// Grid for `snapshot`, recomputed only when the revision changed.
    pub fn grid(&mut self, snapshot: &EventSnapshot) -> Arc<ScheduleGrid> {
        if let Some((revision, grid)) = &self.cached {
            if *revision == snapshot.revision() {
                return Arc::clone(grid);
            }
        }

        log::debug!("Recomputing timetable for revision {}", snapshot.revision());
        let grid = Arc::new(assemble(snapshot.events(), &self.catalog));
        self.cached = Some((snapshot.revision(), Arc::clone(&grid)));
        grid
    }

    pub fn invalidate(&mut self) {
        self.cached = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::day::Day;
    use crate::models::event::ScheduleEvent;
    use crate::services::event::EventStore;
    use chrono::NaiveTime;

    fn sample_event() -> ScheduleEvent {
        ScheduleEvent::builder()
            .day(Day::Monday)
            .start(NaiveTime::from_hms_opt(9, 0, 0).unwrap())
            .end(NaiveTime::from_hms_opt(10, 0, 0).unwrap())
            .subject("Linear Algebra")
            .build()
            .unwrap()
    }

    #[test]
    fn test_same_revision_reuses_grid() {
        let mut store = EventStore::new();
        store.create(sample_event()).unwrap();
        let mut view = ScheduleView::new(ScheduleCatalog::default());

        let first = view.grid(&store.snapshot());
        let second = view.grid(&store.snapshot());
        assert!(Arc::ptr_eq(&first, &second));
    }

    #[test]
    fn test_new_revision_recomputes() {
        let mut store = EventStore::new();
        let mut view = ScheduleView::new(ScheduleCatalog::default());
        let before = view.grid(&store.snapshot());

        store.create(sample_event()).unwrap();
        let after = view.grid(&store.snapshot());

        assert!(!Arc::ptr_eq(&before, &after));
        assert_eq!(after.cells().filter(|c| !c.events().is_empty()).count(), 1);
    }

    #[test]
    fn test_invalidate_forces_recompute() {
        let store = EventStore::new();
        let mut view = ScheduleView::new(ScheduleCatalog::default());
        let first = view.grid(&store.snapshot());
        view.invalidate();
        let second = view.grid(&store.snapshot());
        assert!(!Arc::ptr_eq(&first, &second));
        assert_eq!(*first, *second);
    }
}
