//! Export the plain-text status screen.

use std::path::PathBuf;

use anyhow::{Context as _, Result};
use clap::Parser;

use super::Context;

/// Export the plain-text status screen
#[derive(Parser)]
pub struct Export {
    /// Character id
    #[arg(value_name = "ID")]
    id: String,

    /// Write to a file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,
}

impl Export {
    pub fn execute(self, ctx: &Context) -> Result<()> {
        let screen = ctx.service()?.export(&self.id)?;

        match self.output {
            Some(path) => {
                std::fs::write(&path, &screen)
                    .with_context(|| format!("Failed to write export: {}", path.display()))?;
                tracing::info!("Exported character[{}] to {}", self.id, path.display());
            }
            None => print!("{screen}"),
        }

        Ok(())
    }
}
