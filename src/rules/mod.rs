//! Rule Tables
//!
//! Immutable configuration consumed by the classifier, scorer and selector:
//! - Antagonist rules (pairs of name-fragment groups)
//! - Shade-tolerant reference list
//! - Per-goal preferred names and category affinities
//!
//! Space tier sizes are not part of the tables (see `SpaceTier::max_plants`).
//!
//! A built-in table ships with the crate. A JSON table with the same shape
//! can be loaded at startup; it is validated once and compiled into
//! pre-tokenized fragments so that matching never re-parses rule strings.

mod builtin;

use crate::tiers::Goal;
use crate::utils::NameTokens;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use std::sync::{Arc, OnceLock};

/// Serialized form of one antagonist rule
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AntagonistRuleConfig {
    pub name: String,
    pub group_a: Vec<String>,
    pub group_b: Vec<String>,
    #[serde(default)]
    pub reason: String,
}

/// Serialized form of one goal profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoalConfig {
    pub preferred: Vec<String>,
    #[serde(default)]
    pub herb_oriented: bool,
    #[serde(default)]
    pub flower_oriented: bool,
    #[serde(default)]
    pub affinity_categories: Vec<String>,
}

/// Species profiles index rules and preferred names with `u16`
pub const MAX_INDEXED_ENTRIES: usize = u16::MAX as usize + 1;

/// Serialized rule tables (JSON on disk)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RuleConfig {
    pub antagonists: Vec<AntagonistRuleConfig>,
    pub shade_tolerant: Vec<String>,
    pub goals: BTreeMap<Goal, GoalConfig>,
}

impl RuleConfig {
    /// Check table invariants
    ///
    /// Every antagonist group needs at least one non-blank fragment and every
    /// goal needs a profile. Rule and preferred-name counts must fit the
    /// `u16` indices stored per species.
    pub fn validate(&self) -> Result<()> {
        if self.antagonists.len() > MAX_INDEXED_ENTRIES {
            anyhow::bail!(
                "{} antagonist rules exceed the limit of {}",
                self.antagonists.len(),
                MAX_INDEXED_ENTRIES
            );
        }

        for rule in &self.antagonists {
            for (label, group) in [("group_a", &rule.group_a), ("group_b", &rule.group_b)] {
                if !group.iter().any(|f| !NameTokens::new(f).is_empty()) {
                    anyhow::bail!(
                        "Antagonist rule '{}' has no usable fragment in {}",
                        rule.name,
                        label
                    );
                }
            }
        }

        for goal in Goal::ALL {
            match self.goals.get(&goal) {
                None => anyhow::bail!("Goal '{}' has no profile in rule tables", goal),
                Some(profile) if profile.preferred.len() > MAX_INDEXED_ENTRIES => anyhow::bail!(
                    "Goal '{}' has {} preferred names, limit is {}",
                    goal,
                    profile.preferred.len(),
                    MAX_INDEXED_ENTRIES
                ),
                Some(_) => {}
            }
        }

        Ok(())
    }
}

/// Compiled antagonist rule
#[derive(Debug, Clone)]
pub struct AntagonistRule {
    pub name: String,
    pub reason: String,
    pub group_a: Vec<NameTokens>,
    pub group_b: Vec<NameTokens>,
}

/// Compiled goal profile
#[derive(Debug, Clone)]
pub struct GoalProfile {
    pub goal: Goal,
    /// Raw preferred names, parallel to `preferred`
    pub preferred_names: Vec<String>,
    pub preferred: Vec<NameTokens>,
    pub herb_oriented: bool,
    pub flower_oriented: bool,
    pub affinity_categories: Vec<String>,
}

/// Validated, pre-tokenized rule tables
#[derive(Debug, Clone)]
pub struct RuleTables {
    antagonists: Vec<AntagonistRule>,
    shade_tolerant: Vec<NameTokens>,
    /// Indexed by `Goal::index()`
    goals: Vec<GoalProfile>,
    config: RuleConfig,
}

static BUILTIN: OnceLock<Arc<RuleTables>> = OnceLock::new();

impl RuleTables {
    /// Shared built-in tables
    pub fn builtin() -> Arc<RuleTables> {
        BUILTIN
            .get_or_init(|| {
                let config = builtin::builtin_config();
                debug_assert!(config.validate().is_ok(), "built-in rule tables are invalid");
                Arc::new(Self::compile(config))
            })
            .clone()
    }

    /// Validate and compile a rule configuration
    pub fn from_config(config: RuleConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::compile(config))
    }

    /// Load rule tables from a JSON file
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read rule tables: {:?}", path))?;

        let tables = Self::from_json_str(&contents)
            .with_context(|| format!("Invalid rule tables: {:?}", path))?;

        tracing::info!(
            "Loaded rule tables from {:?} ({} antagonist rules, {} shade-tolerant names)",
            path,
            tables.antagonists.len(),
            tables.shade_tolerant.len()
        );

        Ok(tables)
    }

    /// Parse rule tables from a JSON string
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: RuleConfig =
            serde_json::from_str(json).with_context(|| "Failed to parse rule tables JSON")?;
        Self::from_config(config)
    }

    fn compile(config: RuleConfig) -> Self {
        let tokenize = |list: &[String]| -> Vec<NameTokens> {
            list.iter()
                .map(|s| NameTokens::new(s))
                .filter(|t| !t.is_empty())
                .collect()
        };

        let antagonists = config
            .antagonists
            .iter()
            .map(|rule| AntagonistRule {
                name: rule.name.clone(),
                reason: rule.reason.clone(),
                group_a: tokenize(&rule.group_a),
                group_b: tokenize(&rule.group_b),
            })
            .collect();

        let shade_tolerant = tokenize(&config.shade_tolerant);

        let goals = Goal::ALL
            .iter()
            .map(|&goal| {
                let profile = config.goals.get(&goal);
                let preferred_names: Vec<String> = profile
                    .map(|p| {
                        p.preferred
                            .iter()
                            .filter(|s| !NameTokens::new(s).is_empty())
                            .cloned()
                            .collect()
                    })
                    .unwrap_or_default();
                GoalProfile {
                    goal,
                    preferred: tokenize(&preferred_names),
                    preferred_names,
                    herb_oriented: profile.map_or(false, |p| p.herb_oriented),
                    flower_oriented: profile.map_or(false, |p| p.flower_oriented),
                    affinity_categories: profile
                        .map(|p| p.affinity_categories.clone())
                        .unwrap_or_default(),
                }
            })
            .collect();

        Self {
            antagonists,
            shade_tolerant,
            goals,
            config,
        }
    }

    pub fn antagonists(&self) -> &[AntagonistRule] {
        &self.antagonists
    }

    pub fn antagonist(&self, index: usize) -> Option<&AntagonistRule> {
        self.antagonists.get(index)
    }

    pub fn shade_tolerant(&self) -> &[NameTokens] {
        &self.shade_tolerant
    }

    pub fn goal(&self, goal: Goal) -> &GoalProfile {
        &self.goals[goal.index()]
    }

    /// The configuration these tables were compiled from
    pub fn config(&self) -> &RuleConfig {
        &self.config
    }
}

impl Default for RuleTables {
    fn default() -> Self {
        Self::compile(builtin::builtin_config())
    }
}
