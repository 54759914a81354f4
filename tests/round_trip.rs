//! Round-trip tests: persisting a task sequence and loading it back must
//! reproduce an equal sequence with the original ordering preserved.

use chrono::NaiveDate;
use pretty_assertions::assert_eq;
use tempfile::TempDir;

use taskflow::io::store_io;
use taskflow::model::task::{Priority, TaskInput};
use taskflow::ops::store::TaskStore;

fn init_store(tmp: &TempDir) -> TaskStore {
    let dir = store_io::init_store(tmp.path(), false).unwrap();
    TaskStore::load(&dir)
}

#[test]
fn store_round_trip_preserves_fields_and_order() {
    let tmp = TempDir::new().unwrap();
    let mut store = init_store(&tmp);

    store
        .create(TaskInput {
            title: "Pay rent".into(),
            description: "before the 1st".into(),
            due_date: NaiveDate::from_ymd_opt(2025, 6, 1),
            priority: Priority::High,
        })
        .unwrap();
    store
        .create(TaskInput {
            title: "Read a book".into(),
            ..Default::default()
        })
        .unwrap();
    store
        .create(TaskInput {
            title: "Water the plants".into(),
            due_date: NaiveDate::from_ymd_opt(2025, 5, 28),
            priority: Priority::Low,
            ..Default::default()
        })
        .unwrap();
    store.toggle_complete("T-002").unwrap();

    let reloaded = TaskStore::load(&tmp.path().join(store_io::STORE_DIR));
    assert_eq!(reloaded.tasks(), store.tasks());

    // Field-for-field spot check
    let task = reloaded.get("T-001").unwrap();
    assert_eq!(task.title, "Pay rent");
    assert_eq!(task.description, "before the 1st");
    assert_eq!(task.due_date, NaiveDate::from_ymd_opt(2025, 6, 1));
    assert_eq!(task.priority, Priority::High);
    assert!(!task.completed);

    // Insertion order survives
    let ids: Vec<&str> = reloaded.tasks().iter().map(|t| t.id.as_str()).collect();
    assert_eq!(ids, vec!["T-001", "T-002", "T-003"]);
}

#[test]
fn round_trip_after_update_and_delete() {
    let tmp = TempDir::new().unwrap();
    let mut store = init_store(&tmp);

    for title in ["One", "Two", "Three"] {
        store.create(TaskInput::new(title)).unwrap();
    }
    store
        .update(
            "T-002",
            TaskInput {
                title: "Two, revised".into(),
                priority: Priority::High,
                ..Default::default()
            },
        )
        .unwrap();
    store.delete("T-001").unwrap();

    let reloaded = TaskStore::load(&tmp.path().join(store_io::STORE_DIR));
    assert_eq!(reloaded.tasks(), store.tasks());
    assert_eq!(reloaded.tasks().len(), 2);
    assert_eq!(reloaded.get("T-002").unwrap().title, "Two, revised");
}

#[test]
fn timestamps_survive_the_round_trip_exactly() {
    let tmp = TempDir::new().unwrap();
    let mut store = init_store(&tmp);
    let created = store.create(TaskInput::new("Precise")).unwrap();

    let reloaded = TaskStore::load(&tmp.path().join(store_io::STORE_DIR));
    let task = reloaded.get(&created.id).unwrap();
    assert_eq!(task.created_at, created.created_at);
    assert_eq!(task.updated_at, created.updated_at);
}
