//! Capture a snapshot at the character's current level.

use anyhow::Result;
use clap::Parser;
use console::style;
use status_core::Stat;
use strum::IntoEnumIterator;

use super::Context;

/// Capture a snapshot at the character's current level
#[derive(Parser)]
pub struct Snapshot {
    /// Character id
    #[arg(value_name = "ID")]
    id: String,
}

impl Snapshot {
    pub fn execute(self, ctx: &Context) -> Result<()> {
        let snapshot = ctx.service()?.take_snapshot(&self.id)?;

        println!(
            "{} {} at Lv.{}",
            style("Snapshot captured:").bold().green(),
            self.id,
            snapshot.level
        );
        for stat in Stat::iter() {
            println!(
                "  {:<13} {}",
                format!("{}:", stat.label()),
                snapshot.stats.get(stat)
            );
        }

        Ok(())
    }
}
