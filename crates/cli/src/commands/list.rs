//! List stored characters with their level and active class.

use anyhow::Result;
use clap::Parser;
use console::style;

use super::Context;

/// List stored characters
#[derive(Parser)]
pub struct List {}

impl List {
    pub fn execute(self, ctx: &Context) -> Result<()> {
        let service = ctx.service()?;
        let ids = service.list()?;

        if ids.is_empty() {
            println!("{}", style("No characters found").yellow());
            println!(
                "Create one with: {}",
                style("status init <id> --name <name>").cyan()
            );
            return Ok(());
        }

        println!("{}", style(format!("Characters ({})", ids.len())).bold().green());
        for id in ids {
            match service.load(&id) {
                Ok(record) => {
                    let class = record
                        .active_phase()
                        .map(|phase| phase.name.as_str())
                        .unwrap_or("-");
                    println!(
                        "  {:<16} {:<20} Lv.{:<4} {}",
                        style(&id).cyan(),
                        record.name,
                        record.level,
                        style(class).dim()
                    );
                }
                Err(e) => {
                    tracing::warn!("Skipping character[{}]: {}", id, e);
                    println!("  {:<16} {}", style(&id).cyan(), style(e).red());
                }
            }
        }

        Ok(())
    }
}
