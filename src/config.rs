//! Ranking configuration.
//!
//! [`RankingConfig`] names the identifier columns, the missing-value token and
//! the ordered list of scored stats with their importance ranks and polarity.
//! `Default` carries the built-in running back table; a YAML file can replace
//! any part of it.

use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

pub const DEFAULT_NAME_COLUMN: &str = "Name";
pub const DEFAULT_TEAM_COLUMN: &str = "Team";
pub const DEFAULT_MISSING_TOKEN: &str = "n/a";

const DEFAULT_STATS: &[(&str, f64, bool)] = &[
    ("Depth_Chart", 3.5, true),
    ("RB_Expected_Tier", 1.0, true),
    ("Rec_Yds", 4.5, false),
    ("Games_Played", 6.0, false),
    ("Targets", 5.0, false),
    ("Receptions", 4.0, false),
    ("Yds_Tgt", 4.5, false),
    ("Rec_TDs", 3.0, false),
    ("Yds_per_Carry", 4.0, false),
    ("Rush_Yds", 4.5, false),
    ("Carries", 4.0, false),
    ("Rushing_TDs", 3.0, false),
    ("Snap_Percent", 4.0, false),
    ("Redzone_Yds", 6.0, false),
    ("Redzone_Targets", 4.0, false),
    ("Redzone_Carries", 4.0, false),
    ("20_Plus_Yd_Rushes", 5.0, false),
    ("Rush_Yds_Over_Expected_per_Carry", 3.5, false),
    ("Offensive_Line_Rank", 3.5, true),
    ("Team_Rush_Percent_2023", 3.5, false),
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RankingConfig {
    pub name_column: String,
    pub team_column: String,
    /// Cell text treated as a missing value (exact, case-sensitive match).
    pub missing_token: String,
    pub stats: Vec<StatSpec>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatSpec {
    pub name: String,
    /// Smaller numbers mean more important.
    pub importance: f64,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub lower_is_better: bool,
}

impl StatSpec {
    pub fn new(name: impl Into<String>, importance: f64) -> Self {
        Self {
            name: name.into(),
            importance,
            lower_is_better: false,
        }
    }

    pub fn inverted(mut self) -> Self {
        self.lower_is_better = true;
        self
    }
}

impl Default for RankingConfig {
    fn default() -> Self {
        let stats = DEFAULT_STATS
            .iter()
            .map(|(name, importance, lower_is_better)| StatSpec {
                name: (*name).to_string(),
                importance: *importance,
                lower_is_better: *lower_is_better,
            })
            .collect();
        Self {
            name_column: DEFAULT_NAME_COLUMN.to_string(),
            team_column: DEFAULT_TEAM_COLUMN.to_string(),
            missing_token: DEFAULT_MISSING_TOKEN.to_string(),
            stats,
        }
    }
}

impl RankingConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let mut file =
            File::open(path).with_context(|| format!("Opening configuration file {path:?}"))?;
        let mut raw = String::new();
        file.read_to_string(&mut raw)
            .with_context(|| format!("Reading configuration file {path:?}"))?;
        Self::from_yaml(&raw).with_context(|| format!("Parsing configuration file {path:?}"))
    }

    pub fn from_yaml(raw: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(raw)?)
    }

    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let serialized = self.to_yaml()?;
        let mut file =
            File::create(path).with_context(|| format!("Creating configuration file {path:?}"))?;
        file.write_all(serialized.as_bytes())?;
        file.flush()?;
        Ok(())
    }

    pub fn identifier_columns(&self) -> [&str; 2] {
        [self.name_column.as_str(), self.team_column.as_str()]
    }

    pub fn is_identifier(&self, column: &str) -> bool {
        column == self.name_column || column == self.team_column
    }

    pub fn inverted_stats(&self) -> impl Iterator<Item = &str> {
        self.stats
            .iter()
            .filter(|stat| stat.lower_is_better)
            .map(|stat| stat.name.as_str())
    }
}
