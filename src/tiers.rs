//! Grower constraints: space tier, sun exposure and goal
//!
//! Closed enumerations. Unknown strings are rejected when parsing, so the
//! selector never sees an out-of-range value.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Error returned when a constraint string is not recognised
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind} '{value}' (expected one of: {expected})")]
pub struct ParseTierError {
    pub kind: &'static str,
    pub value: String,
    pub expected: &'static str,
}

/// Available planting area, smallest first
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpaceTier {
    Pot,
    Balcony,
    SmallBed,
    LargeBed,
}

impl SpaceTier {
    pub const ALL: [SpaceTier; 4] = [
        SpaceTier::Pot,
        SpaceTier::Balcony,
        SpaceTier::SmallBed,
        SpaceTier::LargeBed,
    ];

    /// Maximum recipe size; fixed per tier
    pub const fn max_plants(self) -> usize {
        match self {
            SpaceTier::Pot => 3,
            SpaceTier::Balcony => 4,
            SpaceTier::SmallBed => 5,
            SpaceTier::LargeBed => 6,
        }
    }

    /// The two smallest tiers are grown in containers
    pub fn is_container(self) -> bool {
        matches!(self, SpaceTier::Pot | SpaceTier::Balcony)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SpaceTier::Pot => "pot",
            SpaceTier::Balcony => "balcony",
            SpaceTier::SmallBed => "small_bed",
            SpaceTier::LargeBed => "large_bed",
        }
    }
}

/// Sun exposure at the planting site
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SunTier {
    FullSun,
    PartSun,
    Shade,
}

impl SunTier {
    pub const ALL: [SunTier; 3] = [SunTier::FullSun, SunTier::PartSun, SunTier::Shade];

    pub fn as_str(self) -> &'static str {
        match self {
            SunTier::FullSun => "full_sun",
            SunTier::PartSun => "part_sun",
            SunTier::Shade => "shade",
        }
    }
}

/// Grower intent driving the ranking bonuses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Goal {
    Cooking,
    Herbal,
    Pollinators,
    Harvest,
}

impl Goal {
    pub const COUNT: usize = 4;
    pub const ALL: [Goal; Goal::COUNT] = [Goal::Cooking, Goal::Herbal, Goal::Pollinators, Goal::Harvest];

    /// Dense index for per-goal lookup arrays
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Goal::Cooking => "cooking",
            Goal::Herbal => "herbal",
            Goal::Pollinators => "pollinators",
            Goal::Harvest => "harvest",
        }
    }
}

fn canonical(s: &str) -> String {
    s.trim().to_lowercase().replace(['-', ' '], "_")
}

impl FromStr for SpaceTier {
    type Err = ParseTierError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match canonical(s).as_str() {
            "pot" | "container" => Ok(SpaceTier::Pot),
            "balcony" => Ok(SpaceTier::Balcony),
            "small_bed" | "small" => Ok(SpaceTier::SmallBed),
            "large_bed" | "large" => Ok(SpaceTier::LargeBed),
            _ => Err(ParseTierError {
                kind: "space tier",
                value: s.to_string(),
                expected: "pot, balcony, small_bed, large_bed",
            }),
        }
    }
}

impl FromStr for SunTier {
    type Err = ParseTierError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match canonical(s).as_str() {
            "full_sun" | "full" | "sun" => Ok(SunTier::FullSun),
            "part_sun" | "partial" | "part_shade" => Ok(SunTier::PartSun),
            "shade" => Ok(SunTier::Shade),
            _ => Err(ParseTierError {
                kind: "sun tier",
                value: s.to_string(),
                expected: "full_sun, part_sun, shade",
            }),
        }
    }
}

impl FromStr for Goal {
    type Err = ParseTierError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match canonical(s).as_str() {
            "cooking" | "culinary" => Ok(Goal::Cooking),
            "herbal" | "tea" => Ok(Goal::Herbal),
            "pollinators" | "flowers" => Ok(Goal::Pollinators),
            "harvest" | "staples" => Ok(Goal::Harvest),
            _ => Err(ParseTierError {
                kind: "goal",
                value: s.to_string(),
                expected: "cooking, herbal, pollinators, harvest",
            }),
        }
    }
}

impl fmt::Display for SpaceTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for SunTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Goal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
