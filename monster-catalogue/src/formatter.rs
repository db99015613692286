//! Rendering of single cards and of the whole catalogue.

use std::fmt::Display;

use crate::catalogue::{Catalogue, Stats};

const CARD_RULE_WIDTH: usize = 40;
const TABLE_RULE_WIDTH: usize = 60;

/// Trait for turning catalogue data into something the session can print.
///
/// A `CatalogueFormatter` decides the layout; the session only writes the
/// output to its terminal.
pub trait CatalogueFormatter {
    type Output: Display;

    fn format_card(&self, name: &str, stats: &Stats) -> Self::Output;

    fn format_catalogue(&self, catalogue: &Catalogue) -> Self::Output;
}

/// Fixed-width text layout used by the interactive menu.
#[derive(Debug, Clone, Copy, Default)]
pub struct TableFormatter;

impl CatalogueFormatter for TableFormatter {
    type Output = String;

    fn format_card(&self, name: &str, stats: &Stats) -> Self::Output {
        let rule = "-".repeat(CARD_RULE_WIDTH);
        [
            rule.clone(),
            format!("Monster: {}", name),
            format!("Strength: {}", stats.strength),
            format!("Speed:    {}", stats.speed),
            format!("Stealth:  {}", stats.stealth),
            format!("Cunning:  {}", stats.cunning),
            rule,
        ]
        .join("\n")
    }

    fn format_catalogue(&self, catalogue: &Catalogue) -> Self::Output {
        let rule = "-".repeat(TABLE_RULE_WIDTH);
        let mut lines = vec![
            rule.clone(),
            format!(
                "{:<15} {:<10} {:<10} {:<10} {:<10}",
                "Name", "Strength", "Speed", "Stealth", "Cunning"
            ),
            rule.clone(),
        ];
        lines.extend(catalogue.iter().map(|(name, stats)| {
            format!(
                "{:<15} {:<10} {:<10} {:<10} {:<10}",
                name, stats.strength, stats.speed, stats.stealth, stats.cunning
            )
        }));
        lines.push(rule.clone());
        lines.push(format!("Total monsters in catalogue: {}", catalogue.len()));
        lines.push(rule);
        lines.join("\n")
    }
}

/// Formats cards as JSON values.
#[cfg(feature = "serde")]
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonFormatter;

#[cfg(feature = "serde")]
impl CatalogueFormatter for JsonFormatter {
    type Output = serde_json::Value;

    fn format_card(&self, name: &str, stats: &Stats) -> Self::Output {
        serde_json::json!({ "name": name, "stats": stats })
    }

    fn format_catalogue(&self, catalogue: &Catalogue) -> Self::Output {
        serde_json::json!({ "monsters": catalogue, "total": catalogue.len() })
    }
}
