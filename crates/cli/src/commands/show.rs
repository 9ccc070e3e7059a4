//! Resolve a character and display its stats.

use anyhow::Result;
use clap::Parser;
use console::style;
use status_core::{Stat, StatBreakdown};
use status_store::CharacterStatus;
use strum::IntoEnumIterator;

use super::{Context, print_issues, print_stats};

/// Resolve and display a character
#[derive(Parser)]
pub struct Show {
    /// Character id (file name without `character_` / `.json`)
    #[arg(value_name = "ID")]
    id: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "summary")]
    format: OutputFormat,
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum OutputFormat {
    /// Stats, resources and record issues
    Summary,
    /// Full JSON output (record, result, resources)
    Json,
    /// Per-stat audit trail of every intermediate quantity
    Breakdown,
}

impl Show {
    pub fn execute(self, ctx: &Context) -> Result<()> {
        let status = ctx.service()?.status(&self.id)?;

        match self.format {
            OutputFormat::Summary => print_summary(&status),
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&status)?),
            OutputFormat::Breakdown => print_breakdowns(&status),
        }

        Ok(())
    }
}

pub(super) fn print_summary(status: &CharacterStatus) {
    let record = &status.record;

    println!(
        "{} {} {}",
        style(&record.name).bold().green(),
        style(format!("Lv.{}", record.level)).bold(),
        style(format!("({})", status.id)).dim()
    );
    if let Some(phase) = record.active_phase() {
        println!("  {:<13} {}", "Class:", phase.name);
    }
    if let Some(snapshot) = record.applicable_snapshot() {
        println!("  {:<13} Lv.{}", "Snapshot:", snapshot.level);
    }
    println!();

    println!("{}", style("Stats:").bold().yellow());
    print_stats(&status.result);
    println!();

    println!("{}", style("Resources:").bold().yellow());
    let hp = status.resources.hp;
    let mp = status.resources.mp;
    for (label, meter) in [("HP:", hp), ("MP:", mp)] {
        let full = if meter.is_full() { " full" } else { "" };
        println!(
            "  {:<13} {}/{} ({}%){}",
            label,
            meter.current,
            meter.max,
            meter.percent(),
            style(full).dim()
        );
    }
    if let Some(bond) = status.bond {
        println!("  {:<13} {:+} {}", "Bond:", bond.amount, bond.stat.label());
    }

    print_issues(status);
}

fn print_breakdowns(status: &CharacterStatus) {
    println!(
        "{} {}",
        style(&status.record.name).bold().green(),
        style(format!("Lv.{}", status.record.level)).bold()
    );

    for stat in Stat::iter() {
        println!();
        println!(
            "{} = {}",
            style(stat.label()).bold().yellow(),
            style(status.result.get(stat)).bold()
        );
        if let Some(breakdown) = status.result.breakdown(stat) {
            print_breakdown(breakdown);
        }
    }

    print_issues(status);
}

fn print_breakdown(b: &StatBreakdown) {
    for line in breakdown_lines(b) {
        println!("  {line}");
    }
}

/// Audit trail rows for one stat. Net quantities always carry their sign.
fn breakdown_lines(b: &StatBreakdown) -> Vec<String> {
    let baseline = b
        .snapshot_level
        .map_or_else(|| "none".to_string(), |level| format!("Lv.{level}"));
    let escalated = if b.escalated { " (escalated)" } else { "" };

    vec![
        format!("{:<22} {} ({})", "base", b.base, baseline),
        format!("{:<22} {}", "growth", b.growth),
        format!("{:<22} {}", "redirected points", b.redirected_free_points),
        format!(
            "{:<22} {} (net {:+}, baked {})",
            "manual points", b.manual_free_points, b.net_free_points, b.baked_free_points
        ),
        format!(
            "{:<22} {} x {} = {}",
            "gains", b.gains, b.trait_multiplier, b.gains_after_trait
        ),
        format!(
            "{:<22} {:+} / {:+}% (net {:+})",
            "title",
            b.title.additive,
            b.title.rate * 100.0,
            b.net_title_additive
        ),
        format!(
            "{:<22} {:+} / {:+}% (net {:+})",
            "boost",
            b.boost.additive,
            b.boost.rate * 100.0,
            b.net_boost_additive
        ),
        format!("{:<22} {}", "pre-multiplier", b.pre_multiplier),
        format!(
            "{:<22} title {:+}%{} / boost {:+}%",
            "net rates",
            b.net_title_rate * 100.0,
            escalated,
            b.net_boost_rate * 100.0
        ),
        format!("{:<22} {}", "composed", b.composed),
        format!(
            "{:<22} {} (net {:+})",
            "derivation", b.derivation_bonus, b.net_derivation
        ),
    ]
}
