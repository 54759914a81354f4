use chrono::NaiveDate;

use crate::model::task::Task;
use crate::ops::query::is_overdue;

/// Aggregate counters over the full (unfiltered) task sequence
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TaskStats {
    pub total: usize,
    pub completed: usize,
    pub pending: usize,
    pub overdue: usize,
}

/// Recompute the stats from scratch. Always derived from the full sequence
/// so the counters cannot drift from the store.
pub fn task_counts(tasks: &[Task], today: NaiveDate) -> TaskStats {
    let total = tasks.len();
    let completed = tasks.iter().filter(|t| t.completed).count();
    let overdue = tasks.iter().filter(|t| is_overdue(t, today)).count();

    TaskStats {
        total,
        completed,
        pending: total - completed,
        overdue,
    }
}
