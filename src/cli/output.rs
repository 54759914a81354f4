use chrono::NaiveDate;
use serde::Serialize;

use crate::model::task::{Priority, Task};
use crate::ops::query::{SortKey, StatusFilter, Urgency, due_label, urgency};
use crate::ops::stats::TaskStats;

// ---------------------------------------------------------------------------
// JSON output structs
// ---------------------------------------------------------------------------

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskJson {
    pub id: String,
    pub title: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_label: Option<String>,
    pub priority: Priority,
    pub completed: bool,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Serialize)]
pub struct StatsJson {
    pub total: usize,
    pub completed: usize,
    pub pending: usize,
    pub overdue: usize,
    /// Completed share of the total, 0–100
    pub percent: u32,
}

pub fn task_to_json(task: &Task, today: NaiveDate) -> TaskJson {
    TaskJson {
        id: task.id.clone(),
        title: task.title.clone(),
        description: task.description.clone(),
        due_date: task.due_date,
        due_label: due_label(task.due_date, today).map(|l| l.to_string()),
        priority: task.priority,
        completed: task.completed,
        created_at: task.created_at.to_rfc3339(),
        updated_at: task.updated_at.to_rfc3339(),
    }
}

pub fn stats_to_json(stats: &TaskStats) -> StatsJson {
    StatsJson {
        total: stats.total,
        completed: stats.completed,
        pending: stats.pending,
        overdue: stats.overdue,
        percent: percent_complete(stats),
    }
}

pub fn percent_complete(stats: &TaskStats) -> u32 {
    if stats.total == 0 {
        0
    } else {
        (stats.completed * 100 / stats.total) as u32
    }
}

// ---------------------------------------------------------------------------
// Human-readable formatting
// ---------------------------------------------------------------------------

fn checkbox_char(completed: bool) -> char {
    if completed { 'x' } else { ' ' }
}

/// Priority marker for list lines. Medium is the default and stays unmarked.
fn priority_marker(priority: Priority) -> &'static str {
    match priority {
        Priority::High => " !high",
        Priority::Low => " !low",
        Priority::Medium => "",
    }
}

/// Format a single task as a one-line summary
pub fn format_task_line(task: &Task, today: NaiveDate) -> String {
    // Completed tasks show the raw date; Overdue/Today wording no longer
    // applies to them.
    let due_str = match (task.due_date, task.completed) {
        (Some(due), true) => format!("  (was due {})", due.format("%b %d")),
        (Some(_), false) => match due_label(task.due_date, today) {
            Some(label) => format!("  ({})", label),
            None => String::new(),
        },
        (None, _) => String::new(),
    };
    format!(
        "[{}] {} {}{}{}",
        checkbox_char(task.completed),
        task.id,
        task.title,
        priority_marker(task.priority),
        due_str
    )
}

/// Format detailed task view
pub fn format_task_detail(task: &Task, today: NaiveDate) -> Vec<String> {
    let mut lines = Vec::new();

    lines.push(format!(
        "[{}] {} {}",
        checkbox_char(task.completed),
        task.id,
        task.title
    ));
    lines.push(format!("priority: {}", task.priority.as_str()));

    if let Some(due) = task.due_date {
        let mut line = format!("due: {}", due);
        if let Some(label) = due_label(task.due_date, today) {
            match urgency(task.due_date, task.completed, today) {
                Urgency::Done => {}
                _ => line.push_str(&format!(" ({})", label)),
            }
        }
        lines.push(line);
    }

    lines.push(format!(
        "created: {}",
        task.created_at.format("%b %d, %Y")
    ));
    lines.push(format!(
        "updated: {}",
        task.updated_at.format("%b %d, %Y")
    ));

    if !task.description.is_empty() {
        lines.push(String::new());
        for line in task.description.lines() {
            lines.push(format!("  {}", line));
        }
    }

    lines
}

/// Format the stats overview
pub fn format_stats(stats: &TaskStats) -> Vec<String> {
    vec![
        format!("total:     {}", stats.total),
        format!("pending:   {}", stats.pending),
        format!("completed: {}", stats.completed),
        format!("overdue:   {}", stats.overdue),
        format!("progress:  {}%", percent_complete(stats)),
    ]
}

// ---------------------------------------------------------------------------
// Flag parsing
// ---------------------------------------------------------------------------

/// Parse a filter string into StatusFilter
pub fn parse_status_filter(s: &str) -> Result<StatusFilter, String> {
    match s {
        "all" => Ok(StatusFilter::All),
        "active" => Ok(StatusFilter::Active),
        "completed" => Ok(StatusFilter::Completed),
        "overdue" => Ok(StatusFilter::Overdue),
        _ => Err(format!(
            "unknown filter '{}' (expected: all, active, completed, overdue)",
            s
        )),
    }
}

/// Parse a sort string into SortKey
pub fn parse_sort_key(s: &str) -> Result<SortKey, String> {
    match s {
        "due" => Ok(SortKey::DueDate),
        "priority" => Ok(SortKey::Priority),
        "created" => Ok(SortKey::Created),
        _ => Err(format!(
            "unknown sort key '{}' (expected: due, priority, created)",
            s
        )),
    }
}

/// Parse a priority string into Priority
pub fn parse_priority(s: &str) -> Result<Priority, String> {
    match s {
        "low" => Ok(Priority::Low),
        "medium" => Ok(Priority::Medium),
        "high" => Ok(Priority::High),
        _ => Err(format!(
            "unknown priority '{}' (expected: low, medium, high)",
            s
        )),
    }
}

/// Parse a YYYY-MM-DD due date
pub fn parse_due_date(s: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|_| format!("invalid date '{}' (expected YYYY-MM-DD)", s))
}
