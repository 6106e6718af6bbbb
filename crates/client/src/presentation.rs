//! Stat block rendering.
//!
//! Text layout:
//!
//! ```text
//!       Owlbear
//! ━━━━━━━━━━━━━━━━━━━
//!  Adventurer (5-8)
//!      Solo (1)
//!  Medium threat (0)
//! ━━━━━━━━━┯━━━━━━━━━
//! Prof: +3 │ DC:   15
//! AC:   15 │ HP:  110
//! Atk:  +7 │ Dmg:  24
//! ```
use anyhow::Result;
use monster_core::MonsterStatBlock;

use crate::cli::OutputFormat;

const RULE: char = '━';
const SPLIT: &str = "━┯━";
const COLUMN_SEPARATOR: &str = " │ ";
const LABEL_WIDTH: usize = 5;
const VALUE_WIDTH: usize = 3;

/// Renders a stat block in the requested format.
pub fn render(block: &MonsterStatBlock, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(block)),
        OutputFormat::Json => render_json(block),
    }
}

/// Pretty-printed JSON of the full stat block.
pub fn render_json(block: &MonsterStatBlock) -> Result<String> {
    serde_json::to_string_pretty(block)
        .map_err(|e| anyhow::anyhow!("Failed to serialize stat block: {}", e))
}

struct Layout {
    total_width: usize,
    left_rule: usize,
    right_rule: usize,
    left_value: usize,
    right_value: usize,
}

impl Layout {
    fn fit(name: &str) -> Self {
        let left_rule = LABEL_WIDTH + VALUE_WIDTH;
        let split_width = SPLIT.chars().count();
        let total_width = left_rule * 2 + split_width;
        let name_width = name.chars().count();

        if name_width <= total_width {
            return Self {
                total_width,
                left_rule,
                right_rule: total_width - left_rule - split_width,
                left_value: VALUE_WIDTH,
                right_value: VALUE_WIDTH,
            };
        }

        // Widen both columns evenly around the split to fit the name.
        let left_rule = (name_width - split_width) / 2;
        let right_rule = name_width - left_rule - split_width;
        Self {
            total_width: name_width,
            left_rule,
            right_rule,
            left_value: left_rule - LABEL_WIDTH,
            right_value: right_rule - LABEL_WIDTH,
        }
    }

    fn centered(&self, text: &str) -> String {
        format!("{text:^width$}\n", width = self.total_width)
    }

    fn row(&self, left: (&str, String), right: (&str, String)) -> String {
        format!(
            "{:<lw$}{:>lv$}{COLUMN_SEPARATOR}{:<lw$}{:>rv$}\n",
            left.0,
            left.1,
            right.0,
            right.1,
            lw = LABEL_WIDTH,
            lv = self.left_value,
            rv = self.right_value,
        )
    }
}

/// Box-drawn stat block sized to fit the monster's name.
pub fn render_text(block: &MonsterStatBlock) -> String {
    let layout = Layout::fit(block.name());
    let rule = |len: usize| RULE.to_string().repeat(len);
    let mut out = String::new();

    out.push_str(&layout.centered(block.name()));
    out.push_str(&rule(layout.total_width));
    out.push('\n');

    out.push_str(&layout.centered(&format!("{} ({})", block.tier(), block.levels())));
    out.push_str(&layout.centered(&block.count().to_string()));
    out.push_str(&layout.centered(&format!(
        "{} threat ({})",
        block.threat_level(),
        block.threat().value()
    )));

    out.push_str(&rule(layout.left_rule));
    out.push_str(SPLIT);
    out.push_str(&rule(layout.right_rule));
    out.push('\n');

    out.push_str(&layout.row(
        ("Prof:", format!("{:+}", block.proficiency())),
        ("DC:", block.dc().to_string()),
    ));
    out.push_str(&layout.row(
        ("AC:", block.ac().to_string()),
        ("HP:", block.hp().to_string()),
    ));
    out.push_str(&layout.row(
        ("Atk:", format!("{:+}", block.attack_bonus())),
        ("Dmg:", block.damage().to_string()),
    ));

    out
}
