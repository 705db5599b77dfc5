use anyhow::Result;
use std::path::PathBuf;

use super::config::Config;

/// List the dispatch table
pub fn run(config_path: Option<PathBuf>) -> Result<()> {
    let config = Config::load(config_path.as_deref())?;
    let table = config.dispatch_table();

    println!("Mapped element paths ({})", table.len());
    println!("=====================");
    for (path, action) in table.entries() {
        if action.is_ignore() {
            println!("  {:<80} (ignored)", path);
        } else {
            println!("  {:<80} {:?}", path, action);
        }
    }

    Ok(())
}
