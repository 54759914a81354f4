use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::model::task::Task;

/// Name of the store directory searched for during discovery
pub const STORE_DIR: &str = ".taskflow";
/// Blob file holding the serialized task sequence
pub const TASKS_FILE: &str = "tasks.json";

/// Error type for store I/O operations
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("not a taskflow store: no .taskflow/ directory found (run `tf init`)")]
    NotAStore,
    #[error("store already initialized at {0}")]
    AlreadyInitialized(PathBuf),
    #[error("io error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Discover the store by walking up from the given directory, looking for
/// a `.taskflow/` subdirectory. Returns the store directory itself.
pub fn discover_store(start: &Path) -> Result<PathBuf, StoreError> {
    let mut current = start.to_path_buf();
    loop {
        let store_dir = current.join(STORE_DIR);
        if store_dir.is_dir() {
            return Ok(store_dir);
        }
        if !current.pop() {
            return Err(StoreError::NotAStore);
        }
    }
}

/// Create a fresh store directory with an empty task blob.
pub fn init_store(root: &Path, force: bool) -> Result<PathBuf, StoreError> {
    let store_dir = root.join(STORE_DIR);
    if store_dir.join(TASKS_FILE).exists() && !force {
        return Err(StoreError::AlreadyInitialized(store_dir));
    }
    fs::create_dir_all(&store_dir)?;
    atomic_write(&store_dir.join(TASKS_FILE), b"[]")?;
    Ok(store_dir)
}

/// Read the task blob from the store directory.
///
/// Fails soft: a missing or malformed file yields an empty sequence. The
/// running session's in-memory state is the source of truth, so a corrupt
/// blob is never surfaced as an error.
pub fn read_tasks(store_dir: &Path) -> Vec<Task> {
    let path = store_dir.join(TASKS_FILE);
    let Ok(content) = fs::read_to_string(&path) else {
        return Vec::new();
    };
    serde_json::from_str(&content).unwrap_or_default()
}

/// Write the full task sequence to the store directory.
pub fn write_tasks(store_dir: &Path, tasks: &[Task]) -> Result<(), StoreError> {
    let path = store_dir.join(TASKS_FILE);
    let content = serde_json::to_string_pretty(tasks).map_err(io::Error::other)?;
    atomic_write(&path, content.as_bytes())?;
    Ok(())
}

/// Write content to a file atomically via a temp file in the same directory.
pub fn atomic_write(path: &Path, content: &[u8]) -> io::Result<()> {
    let dir = path.parent().unwrap_or(Path::new("."));
    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(content)?;
    tmp.flush()?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::task::Priority;
    use tempfile::TempDir;

    fn sample_task(id: &str) -> Task {
        Task {
            id: id.into(),
            title: format!("Task {}", id),
            description: String::new(),
            due_date: None,
            priority: Priority::Medium,
            completed: false,
            created_at: "2025-05-20T10:00:00Z".parse().unwrap(),
            updated_at: "2025-05-20T10:00:00Z".parse().unwrap(),
        }
    }

    #[test]
    fn test_discover_store() {
        let tmp = TempDir::new().unwrap();
        init_store(tmp.path(), false).unwrap();

        // Discover from root
        let dir = discover_store(tmp.path()).unwrap();
        assert_eq!(dir, tmp.path().join(STORE_DIR));

        // Discover from a nested subdirectory
        let sub = tmp.path().join("a/b/c");
        fs::create_dir_all(&sub).unwrap();
        let dir = discover_store(&sub).unwrap();
        assert_eq!(dir, tmp.path().join(STORE_DIR));
    }

    #[test]
    fn test_discover_store_not_found() {
        let tmp = TempDir::new().unwrap();
        assert!(discover_store(tmp.path()).is_err());
    }

    #[test]
    fn test_init_refuses_existing_without_force() {
        let tmp = TempDir::new().unwrap();
        init_store(tmp.path(), false).unwrap();
        assert!(matches!(
            init_store(tmp.path(), false),
            Err(StoreError::AlreadyInitialized(_))
        ));
        // --force reinitializes
        init_store(tmp.path(), true).unwrap();
        assert!(read_tasks(&tmp.path().join(STORE_DIR)).is_empty());
    }

    #[test]
    fn test_write_and_read_round_trip() {
        let tmp = TempDir::new().unwrap();
        let store_dir = init_store(tmp.path(), false).unwrap();

        let tasks = vec![sample_task("T-001"), sample_task("T-002")];
        write_tasks(&store_dir, &tasks).unwrap();
        let loaded = read_tasks(&store_dir);
        assert_eq!(loaded, tasks);
    }

    #[test]
    fn test_read_missing_file_is_empty() {
        let tmp = TempDir::new().unwrap();
        assert!(read_tasks(tmp.path()).is_empty());
    }

    #[test]
    fn test_read_malformed_blob_is_empty() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join(TASKS_FILE), "not json {{{").unwrap();
        assert!(read_tasks(tmp.path()).is_empty());
    }

    #[test]
    fn test_atomic_write_overwrites() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("test.txt");

        atomic_write(&path, b"hello world").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "hello world");

        atomic_write(&path, b"goodbye").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "goodbye");
    }
}
