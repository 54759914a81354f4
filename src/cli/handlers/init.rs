use crate::cli::commands::InitArgs;
use crate::io::store_io::{self, StoreError};

pub fn cmd_init(args: InitArgs) -> Result<(), Box<dyn std::error::Error>> {
    let cwd = std::env::current_dir()?;

    // Warn when a store higher up would shadow this one
    if let Some(parent) = cwd.parent()
        && let Ok(existing) = store_io::discover_store(parent)
    {
        eprintln!("Note: existing store found at {}/", existing.display());
        eprintln!("Creating new store in ./{}/", store_io::STORE_DIR);
    }

    match store_io::init_store(&cwd, args.force) {
        Ok(store_dir) => {
            println!("Initialized task store: {}", store_dir.display());
            Ok(())
        }
        Err(StoreError::AlreadyInitialized(_)) => {
            Err("task store already exists in ./.taskflow/ (use --force to reinitialize)".into())
        }
        Err(e) => Err(e.into()),
    }
}
