use std::path::{Path, PathBuf};

use chrono::Utc;

use crate::io::store_io;
use crate::model::task::{Task, TaskInput};

/// ID prefix for generated task IDs (`T-001`, `T-002`, ...)
const ID_PREFIX: &str = "T";

/// Error type for task store operations
#[derive(Debug, thiserror::Error)]
pub enum TaskError {
    #[error("task title is required")]
    EmptyTitle,
    #[error("task not found: {0}")]
    NotFound(String),
}

/// Owns the canonical ordered task sequence and its persistence.
///
/// Every mutating operation rewrites the whole blob synchronously. A failed
/// write is reported on stderr but does not roll back the in-memory change;
/// the running session's state is the source of truth.
pub struct TaskStore {
    store_dir: PathBuf,
    tasks: Vec<Task>,
}

impl TaskStore {
    /// Hydrate the store from disk. Missing or malformed data yields an
    /// empty sequence.
    pub fn load(store_dir: &Path) -> Self {
        TaskStore {
            store_dir: store_dir.to_path_buf(),
            tasks: store_io::read_tasks(store_dir),
        }
    }

    /// The full task sequence in insertion order.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Find a task by ID.
    pub fn get(&self, id: &str) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    /// Create a new task from the given input and append it to the sequence.
    /// Returns the created task.
    pub fn create(&mut self, input: TaskInput) -> Result<Task, TaskError> {
        let title = input.title.trim();
        if title.is_empty() {
            return Err(TaskError::EmptyTitle);
        }

        let now = Utc::now();
        let task = Task {
            id: self.next_id(),
            title: title.to_string(),
            description: input.description.trim().to_string(),
            due_date: input.due_date,
            priority: input.priority,
            completed: false,
            created_at: now,
            updated_at: now,
        };
        self.tasks.push(task.clone());
        self.persist();
        Ok(task)
    }

    /// Replace a task's editable fields in place, preserving its position,
    /// ID, creation time, and completion flag.
    pub fn update(&mut self, id: &str, input: TaskInput) -> Result<(), TaskError> {
        let title = input.title.trim();
        if title.is_empty() {
            return Err(TaskError::EmptyTitle);
        }

        let task = self.find_mut(id)?;
        task.title = title.to_string();
        task.description = input.description.trim().to_string();
        task.due_date = input.due_date;
        task.priority = input.priority;
        task.updated_at = Utc::now();
        self.persist();
        Ok(())
    }

    /// Flip a task's completion flag. Returns the new value.
    pub fn toggle_complete(&mut self, id: &str) -> Result<bool, TaskError> {
        let task = self.find_mut(id)?;
        task.completed = !task.completed;
        task.updated_at = Utc::now();
        let completed = task.completed;
        self.persist();
        Ok(completed)
    }

    /// Remove a task from the sequence.
    pub fn delete(&mut self, id: &str) -> Result<(), TaskError> {
        let idx = self
            .tasks
            .iter()
            .position(|t| t.id == id)
            .ok_or_else(|| TaskError::NotFound(id.to_string()))?;
        self.tasks.remove(idx);
        self.persist();
        Ok(())
    }

    fn find_mut(&mut self, id: &str) -> Result<&mut Task, TaskError> {
        self.tasks
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or_else(|| TaskError::NotFound(id.to_string()))
    }

    /// Next available ID: highest existing numeric suffix plus one.
    fn next_id(&self) -> String {
        let prefix_dash = format!("{}-", ID_PREFIX);
        let mut max = 0usize;
        for task in &self.tasks {
            if let Some(num_str) = task.id.strip_prefix(&prefix_dash)
                && let Ok(n) = num_str.parse::<usize>()
                && n > max
            {
                max = n;
            }
        }
        format!("{}-{:03}", ID_PREFIX, max + 1)
    }

    /// Rewrite the whole blob. Write failures warn but do not fail the
    /// operation.
    fn persist(&self) {
        if let Err(e) = store_io::write_tasks(&self.store_dir, &self.tasks) {
            eprintln!("warning: could not write task store: {}", e);
        }
    }
}
