use std::fmt;

use chrono::{Days, NaiveDate};

use crate::model::task::Task;

/// Status filter applied after the search term
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Active,
    Completed,
    Overdue,
}

/// Sort key for the displayed task list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    /// Ascending by due date; undated tasks sort last
    #[default]
    DueDate,
    /// Descending by priority weight
    Priority,
    /// Most recently created first
    Created,
}

/// A display query: search term, status filter, and sort key.
#[derive(Debug, Clone, Default)]
pub struct Query {
    /// Case-insensitive substring matched against title and description
    pub search: Option<String>,
    pub filter: StatusFilter,
    pub sort: SortKey,
}

/// Whether a task counts as overdue on the given day.
///
/// Calendar-day rule throughout: a task due today is not yet overdue. The
/// same rule drives the overdue filter, the stats counter, and the labels.
pub fn is_overdue(task: &Task, today: NaiveDate) -> bool {
    !task.completed && task.due_date.is_some_and(|due| due < today)
}

/// Produce the derived, ordered view of the task sequence.
///
/// Pipeline order is fixed: search filter, then status filter, then a stable
/// sort. The input sequence is never reordered, so ties keep insertion order.
pub fn query<'a>(tasks: &'a [Task], q: &Query, today: NaiveDate) -> Vec<&'a Task> {
    let term = q.search.as_deref().unwrap_or("").trim().to_lowercase();

    let mut result: Vec<&Task> = tasks
        .iter()
        .filter(|t| {
            term.is_empty()
                || t.title.to_lowercase().contains(&term)
                || t.description.to_lowercase().contains(&term)
        })
        .filter(|t| match q.filter {
            StatusFilter::All => true,
            StatusFilter::Active => !t.completed,
            StatusFilter::Completed => t.completed,
            StatusFilter::Overdue => is_overdue(t, today),
        })
        .collect();

    // sort_by is stable, so equal keys keep their pre-sort order
    match q.sort {
        SortKey::DueDate => result.sort_by(|a, b| match (a.due_date, b.due_date) {
            (Some(da), Some(db)) => da.cmp(&db),
            (Some(_), None) => std::cmp::Ordering::Less,
            (None, Some(_)) => std::cmp::Ordering::Greater,
            (None, None) => std::cmp::Ordering::Equal,
        }),
        SortKey::Priority => {
            result.sort_by(|a, b| b.priority.weight().cmp(&a.priority.weight()))
        }
        SortKey::Created => result.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
    }

    result
}

// ---------------------------------------------------------------------------
// Due-date classification
// ---------------------------------------------------------------------------

/// Display label for a due date
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DueLabel {
    Today,
    Tomorrow,
    Overdue,
    /// Any other date, shown as a short calendar date
    Date(NaiveDate),
}

impl fmt::Display for DueLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DueLabel::Today => write!(f, "Today"),
            DueLabel::Tomorrow => write!(f, "Tomorrow"),
            DueLabel::Overdue => write!(f, "Overdue"),
            DueLabel::Date(d) => write!(f, "{}", d.format("%b %d")),
        }
    }
}

/// Classify a due date against today. `None` when the task has no deadline.
pub fn due_label(due: Option<NaiveDate>, today: NaiveDate) -> Option<DueLabel> {
    let due = due?;
    let tomorrow = today.checked_add_days(Days::new(1));
    if due == today {
        Some(DueLabel::Today)
    } else if Some(due) == tomorrow {
        Some(DueLabel::Tomorrow)
    } else if due < today {
        Some(DueLabel::Overdue)
    } else {
        Some(DueLabel::Date(due))
    }
}

/// Urgency tier for a task's deadline (drives display emphasis)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Urgency {
    /// Completed tasks carry no urgency
    Done,
    /// No deadline
    None,
    Overdue,
    /// Due today
    DueSoon,
    Normal,
}

/// Classify how urgent a task's deadline is.
pub fn urgency(due: Option<NaiveDate>, completed: bool, today: NaiveDate) -> Urgency {
    if completed {
        return Urgency::Done;
    }
    match due {
        None => Urgency::None,
        Some(d) if d < today => Urgency::Overdue,
        Some(d) if d == today => Urgency::DueSoon,
        Some(_) => Urgency::Normal,
    }
}
