//! Plain-text "status screen" export.
//!
//! Titles are part of the exported text; stat boosts are not, and disabled
//! titles are left out.

use core::fmt::Write;

use strum::IntoEnumIterator;

use crate::character::{CharacterRecord, Stat, Title};
use crate::stats::{DerivedResources, StatResult};

/// Renders the status screen for `record`.
pub fn status_screen(
    record: &CharacterRecord,
    result: &StatResult,
    resources: &DerivedResources,
) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = render(&mut out, record, result, resources);
    out
}

fn render(
    out: &mut String,
    record: &CharacterRecord,
    result: &StatResult,
    resources: &DerivedResources,
) -> core::fmt::Result {
    writeln!(out, "[Status]")?;
    writeln!(out, "Name: {}", record.name)?;
    writeln!(out, "Level: {}", record.level)?;
    if let Some(phase) = record.active_phase() {
        writeln!(out, "Class: {}", phase.name)?;
    }
    writeln!(out)?;

    writeln!(out, "HP: {}/{}", resources.hp.current, resources.hp.max)?;
    writeln!(out, "MP: {}/{}", resources.mp.current, resources.mp.max)?;
    writeln!(out)?;

    for stat in Stat::iter() {
        writeln!(out, "{}: {}", stat.label(), result.get(stat))?;
    }

    let titles: Vec<&Title> = record.titles.iter().filter(|t| t.enabled).collect();
    if !titles.is_empty() {
        writeln!(out)?;
        writeln!(out, "[Titles]")?;
        for title in titles {
            writeln!(out, "- {}{}", title.name, title_bonus_text(title))?;
        }
    }

    if !record.traits.is_empty() {
        writeln!(out)?;
        writeln!(out, "[Traits]")?;
        for t in &record.traits {
            if t.description.is_empty() {
                writeln!(out, "- {}", t.name)?;
            } else {
                writeln!(out, "- {}: {}", t.name, t.description)?;
            }
        }
    }

    if !record.skills.is_empty() {
        writeln!(out)?;
        writeln!(out, "[Skills]")?;
        for skill in &record.skills {
            match skill.level {
                Some(level) => writeln!(out, "- {} Lv.{}", skill.name, level)?,
                None => writeln!(out, "- {}", skill.name)?,
            }
        }
    }

    Ok(())
}

/// " (Strength +5, Agility +10%)", or empty when the title has no bonuses.
fn title_bonus_text(title: &Title) -> String {
    let parts: Vec<String> = title
        .bonuses
        .iter()
        .flat_map(|bonus| {
            let additive = (bonus.additive != 0.0)
                .then(|| format!("{} {}", bonus.stat.label(), signed(bonus.additive)));
            let rate = (bonus.multiplier != 0.0).then(|| {
                format!(
                    "{} {}%",
                    bonus.stat.label(),
                    signed(bonus.multiplier * 100.0)
                )
            });
            additive.into_iter().chain(rate)
        })
        .collect();

    if parts.is_empty() {
        String::new()
    } else {
        format!(" ({})", parts.join(", "))
    }
}

fn signed(value: f64) -> String {
    let rounded = (value * 100.0).round() / 100.0;
    if rounded >= 0.0 {
        format!("+{rounded}")
    } else {
        format!("{rounded}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::character::{Skill, StatBoost, StoredResources, TitleBonus, Trait};
    use crate::stats::resolve;

    #[test]
    fn boosts_and_disabled_titles_are_not_exported() {
        let mut record = CharacterRecord::new("Mira").with_level(4);
        record.titles.push(Title::new(
            "Goblin Slayer",
            vec![
                TitleBonus::new(Stat::Strength, 5.0, 0.0),
                TitleBonus::new(Stat::Agility, 0.0, 0.1),
            ],
        ));
        record
            .titles
            .push(Title::new("Forgotten", vec![]).disabled());
        let mut boost = StatBoost::new(Stat::Mana, 3.0, 0.0);
        boost.description = "Elixir of Focus".into();
        record.stat_boosts.push(boost);
        record.traits.push(Trait::new("Night Eyes", vec![]));
        record.skills.push(Skill {
            name: "Fireball".into(),
            level: Some(2),
            description: String::new(),
        });

        let result = resolve(&record);
        let resources = DerivedResources::compute(&result.stats, &[], &StoredResources::default());
        let text = status_screen(&record, &result, &resources);

        assert!(text.contains("Name: Mira"));
        assert!(text.contains("- Goblin Slayer (Strength +5, Agility +10%)"));
        assert!(!text.contains("Forgotten"));
        assert!(!text.contains("Elixir"));
        assert!(text.contains("- Night Eyes"));
        assert!(text.contains("- Fireball Lv.2"));
        assert!(text.contains("Mana: 3"));
        assert!(text.contains("MP: 30/30"));
    }
}
