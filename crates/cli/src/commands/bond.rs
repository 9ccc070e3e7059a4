//! Display a character with a share of a bonded partner's stat.

use anyhow::Result;
use clap::Parser;
use status_core::{BondRule, ShareRounding, Stat};

use super::Context;
use super::show::print_summary;

/// Display a character with a share borrowed from a bonded partner
#[derive(Parser)]
pub struct Bond {
    /// Character id
    #[arg(value_name = "ID")]
    id: String,

    /// Partner character id
    #[arg(short, long, value_name = "ID")]
    partner: String,

    /// Stat to borrow
    #[arg(short, long, default_value = "mana")]
    stat: Stat,

    /// Fraction of the partner's stat to borrow
    #[arg(long, value_name = "N/D", default_value = "1/2", value_parser = parse_share)]
    share: (u32, u32),

    /// How the fractional share is turned into whole points
    #[arg(short, long, default_value = "floor")]
    rounding: ShareRounding,
}

impl Bond {
    pub fn execute(self, ctx: &Context) -> Result<()> {
        let (numerator, denominator) = self.share;
        let rule = BondRule::new(self.stat, numerator, denominator, self.rounding);
        let status = ctx
            .service()?
            .bonded_status(&self.id, &self.partner, rule)?;

        print_summary(&status);
        Ok(())
    }
}

fn parse_share(s: &str) -> Result<(u32, u32), String> {
    let (n, d) = s
        .split_once('/')
        .ok_or_else(|| format!("expected N/D, got '{s}'"))?;
    let n: u32 = n.trim().parse().map_err(|_| format!("invalid numerator '{n}'"))?;
    let d: u32 = d.trim().parse().map_err(|_| format!("invalid denominator '{d}'"))?;
    if d == 0 {
        return Err("denominator must be positive".to_string());
    }
    Ok((n, d))
}
