//! Command implementations for the `status` binary
//!
//! Each command is a separate module that implements its own CLI args and execution logic.

mod bond;
mod export;
mod init;
mod list;
mod show;
mod snapshot;

pub use bond::Bond;
pub use export::Export;
pub use init::Init;
pub use list::List;
pub use show::Show;
pub use snapshot::Snapshot;

use anyhow::{Context as _, Result};
use console::style;
use status_core::{IssueSeverity, StatResult};
use status_store::{CharacterStatus, FileCharacterRepository, StatusService, StoreConfig};
use strum::IntoEnumIterator;

/// Shared state handed to every command.
pub struct Context {
    store: StoreConfig,
}

impl Context {
    pub fn new(store: StoreConfig) -> Self {
        Self { store }
    }

    /// Opens the file-backed status service under the configured data dir.
    pub fn service(&self) -> Result<StatusService<FileCharacterRepository>> {
        let dir = self.store.characters_dir();
        let repo = FileCharacterRepository::new(&dir).with_context(|| {
            format!("Failed to open character directory: {}", dir.display())
        })?;
        Ok(StatusService::new(repo))
    }
}

/// Prints the resolved stat block, one stat per line.
fn print_stats(result: &StatResult) {
    for stat in status_core::Stat::iter() {
        println!(
            "  {:<13} {}",
            format!("{}:", stat.label()),
            style(result.get(stat)).bold()
        );
    }
}

/// Prints record issues found while loading, if any.
fn print_issues(status: &CharacterStatus) {
    if status.issues.is_empty() {
        return;
    }

    println!();
    println!("{}", style("Record issues:").bold().yellow());
    for issue in &status.issues {
        let tag = match issue.severity() {
            IssueSeverity::Inconsistent => style(issue.severity().as_str()).red(),
            IssueSeverity::Notice => style(issue.severity().as_str()).dim(),
        };
        println!("  [{}] {}", tag, issue);
    }
}
