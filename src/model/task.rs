use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Task priority level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

impl Priority {
    /// Sort weight: high > medium > low
    pub fn weight(self) -> u8 {
        match self {
            Priority::High => 3,
            Priority::Medium => 2,
            Priority::Low => 1,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
        }
    }
}

/// A single task record.
///
/// Serialized with camelCase keys so the on-disk blob reads
/// `{"id": .., "dueDate": .., "createdAt": .., "updatedAt": ..}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Unique ID like `T-014`, assigned at creation and never changed
    pub id: String,
    /// Title text (non-empty after trimming)
    pub title: String,
    /// Longer description, may be empty
    #[serde(default)]
    pub description: String,
    /// Optional due date (calendar day, no time-of-day)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<NaiveDate>,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default)]
    pub completed: bool,
    /// Set once at creation
    pub created_at: DateTime<Utc>,
    /// Bumped on every mutation, including completion toggles
    pub updated_at: DateTime<Utc>,
}

/// The caller-supplied fields for creating or updating a task.
#[derive(Debug, Clone, Default)]
pub struct TaskInput {
    pub title: String,
    pub description: String,
    pub due_date: Option<NaiveDate>,
    pub priority: Priority,
}

impl TaskInput {
    pub fn new(title: impl Into<String>) -> Self {
        TaskInput {
            title: title.into(),
            ..Default::default()
        }
    }

    /// Prefill an input from an existing task (for partial edits).
    pub fn from_task(task: &Task) -> Self {
        TaskInput {
            title: task.title.clone(),
            description: task.description.clone(),
            due_date: task.due_date,
            priority: task.priority,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn priority_weights_are_ordered() {
        assert!(Priority::High.weight() > Priority::Medium.weight());
        assert!(Priority::Medium.weight() > Priority::Low.weight());
    }

    #[test]
    fn priority_default_is_medium() {
        assert_eq!(Priority::default(), Priority::Medium);
    }

    #[test]
    fn task_serializes_with_camel_case_keys() {
        let task = Task {
            id: "T-001".into(),
            title: "Write report".into(),
            description: "quarterly numbers".into(),
            due_date: Some(NaiveDate::from_ymd_opt(2025, 6, 1).unwrap()),
            priority: Priority::High,
            completed: false,
            created_at: "2025-05-20T10:00:00Z".parse().unwrap(),
            updated_at: "2025-05-20T10:00:00Z".parse().unwrap(),
        };

        let json = serde_json::to_value(&task).unwrap();
        assert_eq!(json["dueDate"], "2025-06-01");
        assert_eq!(json["createdAt"], "2025-05-20T10:00:00Z");
        assert_eq!(json["updatedAt"], "2025-05-20T10:00:00Z");
        assert_eq!(json["priority"], "high");
    }

    #[test]
    fn task_deserializes_with_defaults() {
        // Only the required fields; everything else takes its default
        let task: Task = serde_json::from_str(
            r#"{
                "id": "T-002",
                "title": "Minimal",
                "createdAt": "2025-05-20T10:00:00Z",
                "updatedAt": "2025-05-20T10:00:00Z"
            }"#,
        )
        .unwrap();
        assert_eq!(task.description, "");
        assert_eq!(task.due_date, None);
        assert_eq!(task.priority, Priority::Medium);
        assert!(!task.completed);
    }

    #[test]
    fn undated_task_omits_due_date_key() {
        let task = Task {
            id: "T-003".into(),
            title: "No deadline".into(),
            description: String::new(),
            due_date: None,
            priority: Priority::Low,
            completed: true,
            created_at: "2025-05-20T10:00:00Z".parse().unwrap(),
            updated_at: "2025-05-21T09:30:00Z".parse().unwrap(),
        };
        let json = serde_json::to_value(&task).unwrap();
        assert!(json.get("dueDate").is_none());
    }
}
