mod init;
pub use init::cmd_init;

use std::path::PathBuf;
use std::sync::Mutex;

use chrono::{Local, NaiveDate};

use crate::cli::commands::*;
use crate::cli::output::*;
use crate::io::store_io::{self, StoreError};
use crate::model::task::TaskInput;
use crate::ops::query::{self, Query};
use crate::ops::stats;
use crate::ops::store::TaskStore;

/// Global override for the start directory (set by -C flag)
static DIR_OVERRIDE: Mutex<Option<PathBuf>> = Mutex::new(None);

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

pub fn dispatch(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let json = cli.json;

    // Store -C override for load_store_cwd()
    if let Some(ref dir) = cli.dir {
        let abs = std::fs::canonicalize(dir)
            .map_err(|e| format!("cannot resolve -C path '{}': {}", dir, e))?;
        DIR_OVERRIDE.lock().unwrap().replace(abs);
    }

    match cli.command {
        // No subcommand → default list view
        None => cmd_list(
            ListArgs {
                filter: "all".into(),
                sort: "due".into(),
                search: None,
            },
            json,
        ),
        Some(cmd) => match cmd {
            // Init is handled in main.rs before store discovery
            Commands::Init(args) => cmd_init(args),

            // Read commands
            Commands::List(args) => cmd_list(args, json),
            Commands::Show(args) => cmd_show(args, json),
            Commands::Stats => cmd_stats(json),

            // Write commands
            Commands::Add(args) => cmd_add(args, json),
            Commands::Edit(args) => cmd_edit(args),
            Commands::Toggle(args) => cmd_toggle(args),
            Commands::Rm(args) => cmd_rm(args),
        },
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn load_store_cwd() -> Result<TaskStore, StoreError> {
    let start = match DIR_OVERRIDE.lock().unwrap().as_ref() {
        Some(dir) => dir.clone(),
        None => std::env::current_dir().map_err(StoreError::IoError)?,
    };
    let store_dir = store_io::discover_store(&start)?;
    Ok(TaskStore::load(&store_dir))
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}

// ---------------------------------------------------------------------------
// Read command handlers
// ---------------------------------------------------------------------------

fn cmd_list(args: ListArgs, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let store = load_store_cwd()?;
    let q = Query {
        search: args.search,
        filter: parse_status_filter(&args.filter)?,
        sort: parse_sort_key(&args.sort)?,
    };
    let today = today();
    let view = query::query(store.tasks(), &q, today);

    if json {
        let tasks: Vec<TaskJson> = view.iter().map(|t| task_to_json(t, today)).collect();
        println!("{}", serde_json::to_string_pretty(&tasks)?);
    } else if view.is_empty() {
        println!("no tasks");
    } else {
        for task in &view {
            println!("{}", format_task_line(task, today));
        }
    }
    Ok(())
}

fn cmd_show(args: ShowArgs, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let store = load_store_cwd()?;
    let task = store
        .get(&args.id)
        .ok_or_else(|| format!("task not found: {}", args.id))?;

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&task_to_json(task, today()))?
        );
    } else {
        for line in format_task_detail(task, today()) {
            println!("{}", line);
        }
    }
    Ok(())
}

fn cmd_stats(json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let store = load_store_cwd()?;
    let counts = stats::task_counts(store.tasks(), today());

    if json {
        println!("{}", serde_json::to_string_pretty(&stats_to_json(&counts))?);
    } else {
        for line in format_stats(&counts) {
            println!("{}", line);
        }
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Write command handlers
// ---------------------------------------------------------------------------

fn cmd_add(args: AddArgs, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let mut store = load_store_cwd()?;

    let input = TaskInput {
        title: args.title,
        description: args.desc,
        due_date: args.due.as_deref().map(parse_due_date).transpose()?,
        priority: parse_priority(&args.priority)?,
    };

    let task = store.create(input)?;
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&task_to_json(&task, today()))?
        );
    } else {
        println!("{}", task.id);
    }
    Ok(())
}

fn cmd_edit(args: EditArgs) -> Result<(), Box<dyn std::error::Error>> {
    let mut store = load_store_cwd()?;
    let existing = store
        .get(&args.id)
        .ok_or_else(|| format!("task not found: {}", args.id))?;

    // Merge the given flags over the existing record
    let mut input = TaskInput::from_task(existing);
    if let Some(title) = args.title {
        input.title = title;
    }
    if let Some(desc) = args.desc {
        input.description = desc;
    }
    if args.clear_due {
        input.due_date = None;
    } else if let Some(ref due) = args.due {
        input.due_date = Some(parse_due_date(due)?);
    }
    if let Some(ref priority) = args.priority {
        input.priority = parse_priority(priority)?;
    }

    store.update(&args.id, input)?;
    println!("{}", args.id);
    Ok(())
}

fn cmd_toggle(args: ToggleArgs) -> Result<(), Box<dyn std::error::Error>> {
    let mut store = load_store_cwd()?;
    let completed = store.toggle_complete(&args.id)?;
    println!(
        "{} {}",
        args.id,
        if completed { "completed" } else { "reopened" }
    );
    Ok(())
}

fn cmd_rm(args: RmArgs) -> Result<(), Box<dyn std::error::Error>> {
    let mut store = load_store_cwd()?;
    for id in &args.ids {
        store.delete(id)?;
        println!("deleted {}", id);
    }
    Ok(())
}
