//! Command-line arguments.
use std::path::PathBuf;
use std::str::FromStr;

use clap::{Parser, ValueEnum};
use monster_core::{
    AttackProfile, Count, CountCategory, MonsterRequest, StatKind, Tier, TierSelector,
};

const VALUES_HELP: &str = "\
STAT values:  AC, HP, ATK, DC, DMG
TIER values:  Apprentice, Journeyman, Adventurer, Veteran, Champion, Heroic, Legendary
COUNT values: SOLO, PAIR, PARTY, GANG, MOB, ARMY
    (STAT, TIER, and COUNT values are case-insensitive)";

/// Generate a balanced monster stat block
#[derive(Parser, Debug, Clone)]
#[command(name = "mkmonster")]
#[command(about = "Generate a balanced monster stat block", long_about = None)]
#[command(version, after_help = VALUES_HELP)]
pub struct Cli {
    /// Monster's level (1-20) or TIER (see below)
    #[arg(value_name = "TIER|LEVEL", value_parser = parse_tier_selector)]
    pub tier: TierSelector,

    /// Number of monsters to appear together (integer or COUNT, see below)
    #[arg(value_name = "COUNT", value_parser = parse_count)]
    pub count: u32,

    /// Monster name
    pub name: Option<String>,

    /// Boost a STAT to good quality (may be repeated)
    #[arg(short, long, value_name = "STAT", value_parser = parse_stat)]
    pub good: Vec<StatKind>,

    /// Reduce a STAT to poor quality (may be repeated)
    #[arg(short, long, value_name = "STAT", value_parser = parse_stat)]
    pub poor: Vec<StatKind>,

    /// Attacks per round: an integer, "area", or "dot" (damage over time)
    #[arg(
        short,
        long,
        default_value = "1",
        allow_negative_numbers = true,
        value_parser = parse_attack_profile
    )]
    pub apr: AttackProfile,

    /// Significant defensive abilities or many resistances
    #[arg(short, long)]
    pub resist: bool,

    /// Tier table file (.toml or .ron) to use instead of the built-in table
    #[arg(short, long, value_name = "PATH")]
    pub tables: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,
}

impl Cli {
    /// Converts parsed arguments into an engine request.
    pub fn to_request(&self) -> anyhow::Result<MonsterRequest> {
        let mut builder = MonsterRequest::builder(self.tier)
            .count(self.count)
            .attacks(self.apr)
            .defense(self.resist);
        for &stat in &self.good {
            builder = builder.good(stat);
        }
        for &stat in &self.poor {
            builder = builder.poor(stat);
        }
        if let Some(name) = &self.name {
            builder = builder.name(name.clone());
        }
        Ok(builder.build()?)
    }
}

/// How the stat block is written to stdout.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

fn parse_tier_selector(arg: &str) -> Result<TierSelector, String> {
    if arg.chars().all(|c| c.is_ascii_digit()) {
        let level = arg.parse::<u32>().map_err(|e| e.to_string())?;
        return Ok(TierSelector::Level(level));
    }
    Tier::from_str(arg)
        .map(TierSelector::Tier)
        .map_err(|_| format!("unrecognized tier: {arg}"))
}

fn parse_count(arg: &str) -> Result<u32, String> {
    if arg.chars().all(|c| c.is_ascii_digit()) {
        let count = arg.parse::<u32>().map_err(|e| e.to_string())?;
        return Count::new(count)
            .map(|count| count.count)
            .map_err(|e| e.to_string());
    }
    CountCategory::from_str(arg)
        .map(|category| Count::from_category(category).count)
        .map_err(|_| format!("unrecognized count label: {arg}"))
}

fn parse_stat(arg: &str) -> Result<StatKind, String> {
    StatKind::from_str(arg).map_err(|_| format!("unrecognized stat: {arg}"))
}

fn parse_attack_profile(arg: &str) -> Result<AttackProfile, String> {
    AttackProfile::from_str(arg).map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use monster_core::{ConflictError, StatQuality};

    fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
        Cli::try_parse_from(std::iter::once("mkmonster").chain(args.iter().copied()))
    }

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_minimal_invocation_with_defaults() {
        let cli = parse(&["veteran", "1"]).unwrap();
        assert_eq!(cli.tier, TierSelector::Tier(Tier::Veteran));
        assert_eq!(cli.count, 1);
        assert_eq!(cli.apr, AttackProfile::default());
        assert!(!cli.resist);
        assert!(cli.name.is_none());
        assert!(cli.good.is_empty() && cli.poor.is_empty());
    }

    #[test]
    fn parses_level_label_and_flags() {
        let cli = parse(&[
            "7", "mob", "Skeleton", "-g", "hp", "--good", "AC", "-p", "dmg", "-a", "area", "-r",
        ])
        .unwrap();
        assert_eq!(cli.tier, TierSelector::Level(7));
        assert_eq!(cli.count, 16);
        assert_eq!(cli.name.as_deref(), Some("Skeleton"));
        assert_eq!(cli.good, vec![StatKind::Hp, StatKind::Ac]);
        assert_eq!(cli.poor, vec![StatKind::Dmg]);
        assert_eq!(cli.apr, AttackProfile::Area);
        assert!(cli.resist);

        let request = cli.to_request().unwrap();
        assert_eq!(request.qualities.get(StatKind::Hp), StatQuality::Good);
        assert_eq!(request.qualities.get(StatKind::Dmg), StatQuality::Poor);
        assert_eq!(request.qualities.get(StatKind::Dc), StatQuality::Average);
    }

    #[test]
    fn rejects_bad_values() {
        assert!(parse(&["epic", "1"]).is_err());
        assert!(parse(&["veteran", "0"]).is_err());
        assert!(parse(&["veteran", "horde"]).is_err());
        assert!(parse(&["veteran", "1", "-g", "str"]).is_err());
        assert!(parse(&["veteran", "1", "-a", "0"]).is_err());
    }

    #[test]
    fn negative_attacks_report_the_range() {
        let err = parse(&["veteran", "1", "-a", "-1"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::ValueValidation);
        assert!(err.to_string().contains("at least 1"), "{err}");
    }

    #[test]
    fn out_of_range_level_reaches_the_engine() {
        let cli = parse(&["21", "1"]).unwrap();
        assert_eq!(cli.tier, TierSelector::Level(21));
    }

    #[test]
    fn conflicting_flags_fail_request_conversion() {
        let cli = parse(&["heroic", "2", "-g", "dc", "-p", "DC"]).unwrap();
        let err = cli.to_request().unwrap_err();
        assert_eq!(
            err.downcast_ref::<ConflictError>(),
            Some(&ConflictError { stat: StatKind::Dc })
        );
    }
}
