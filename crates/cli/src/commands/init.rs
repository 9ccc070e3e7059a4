//! Create a new character record.

use anyhow::Result;
use clap::Parser;
use console::style;

use super::Context;

/// Create a new level-1 character record
#[derive(Parser)]
pub struct Init {
    /// Character id (letters, digits, '-' or '_')
    #[arg(value_name = "ID")]
    id: String,

    /// Display name
    #[arg(short, long)]
    name: String,
}

impl Init {
    pub fn execute(self, ctx: &Context) -> Result<()> {
        let service = ctx.service()?;
        service.create(&self.id, &self.name)?;

        println!(
            "{} {} ({})",
            style("Created").bold().green(),
            self.name,
            self.id
        );
        println!(
            "Edit {} to add growth phases, traits and titles.",
            style(
                service
                    .repository()
                    .base_dir()
                    .join(format!("character_{}.json", self.id))
                    .display()
            )
            .cyan()
        );

        Ok(())
    }
}
