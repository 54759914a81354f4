use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "tf", about = concat!("[+] taskflow v", env!("CARGO_PKG_VERSION"), " - your tasks in one json file"), version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Run against a different directory
    #[arg(short = 'C', long = "dir", global = true)]
    pub dir: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize a task store in the current directory
    Init(InitArgs),
    /// Add a new task
    Add(AddArgs),
    /// List tasks (filtered, searched, sorted)
    List(ListArgs),
    /// Show task details
    Show(ShowArgs),
    /// Edit a task's fields
    Edit(EditArgs),
    /// Toggle a task's completion
    Toggle(ToggleArgs),
    /// Delete tasks
    Rm(RmArgs),
    /// Show task statistics
    Stats,
}

#[derive(Args)]
pub struct InitArgs {
    /// Reinitialize even if a store already exists
    #[arg(long)]
    pub force: bool,
}

#[derive(Args)]
pub struct AddArgs {
    /// Task title
    pub title: String,
    /// Task description
    #[arg(long, default_value = "")]
    pub desc: String,
    /// Due date (YYYY-MM-DD)
    #[arg(long)]
    pub due: Option<String>,
    /// Priority (low, medium, high)
    #[arg(long, default_value = "medium")]
    pub priority: String,
}

#[derive(Args)]
pub struct ListArgs {
    /// Status filter (all, active, completed, overdue)
    #[arg(long, default_value = "all")]
    pub filter: String,
    /// Sort key (due, priority, created)
    #[arg(long, default_value = "due")]
    pub sort: String,
    /// Case-insensitive search over title and description
    #[arg(long)]
    pub search: Option<String>,
}

#[derive(Args)]
pub struct ShowArgs {
    /// Task ID to show
    pub id: String,
}

#[derive(Args)]
pub struct EditArgs {
    /// Task ID
    pub id: String,
    /// New title
    #[arg(long)]
    pub title: Option<String>,
    /// New description
    #[arg(long)]
    pub desc: Option<String>,
    /// New due date (YYYY-MM-DD)
    #[arg(long)]
    pub due: Option<String>,
    /// Remove the due date
    #[arg(long, conflicts_with = "due")]
    pub clear_due: bool,
    /// New priority (low, medium, high)
    #[arg(long)]
    pub priority: Option<String>,
}

#[derive(Args)]
pub struct ToggleArgs {
    /// Task ID
    pub id: String,
}

#[derive(Args)]
pub struct RmArgs {
    /// Task IDs to delete
    #[arg(required = true)]
    pub ids: Vec<String>,
}
