//! Catalog Data Model and Loading
//!
//! Species records arrive from an external catalog (JSON, CSV or Parquet).
//! Each record is profiled once when the catalog is built: names are
//! tokenized, the deduplication identity and season mask are computed,
//! spacing is parsed and antagonist/shade/goal membership is resolved
//! against the rule tables. Classifier and scorer only read these profiles.

use crate::rules::RuleTables;
use crate::tiers::Goal;
use crate::utils::{identity_key, parse_spacing_inches, split_list, NameTokens};
use anyhow::{Context, Result};
use polars::prelude::*;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::fmt;
use std::fs;
use std::path::Path;
use std::sync::Arc;

// ============================================================================
// Seasons
// ============================================================================

/// Planting season tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub enum Season {
    Spring,
    Summer,
    Fall,
    Winter,
}

impl Season {
    pub fn parse(raw: &str) -> Option<Season> {
        match raw.trim().to_lowercase().as_str() {
            "spring" => Some(Season::Spring),
            "summer" => Some(Season::Summer),
            "fall" | "autumn" => Some(Season::Fall),
            "winter" => Some(Season::Winter),
            _ => None,
        }
    }

    fn bit(self) -> u8 {
        match self {
            Season::Spring => 0b0001,
            Season::Summer => 0b0010,
            Season::Fall => 0b0100,
            Season::Winter => 0b1000,
        }
    }
}

/// Keeps the recognised tags, warning on each one dropped
fn known_seasons<'a>(tags: impl IntoIterator<Item = &'a str>) -> Option<Vec<Season>> {
    let seasons: Vec<Season> = tags
        .into_iter()
        .filter_map(|tag| {
            let season = Season::parse(tag);
            if season.is_none() {
                tracing::warn!("Dropping unknown planting season '{}'", tag);
            }
            season
        })
        .collect();
    Some(seasons).filter(|list| !list.is_empty())
}

/// Lenient `planting_seasons`: non-string and unknown tags are dropped, as in CSV
fn deserialize_seasons<'de, D>(deserializer: D) -> std::result::Result<Option<Vec<Season>>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw: Option<Vec<serde_json::Value>> = Option::deserialize(deserializer)?;
    Ok(raw.and_then(|tags| {
        known_seasons(tags.iter().filter_map(|tag| {
            let text = tag.as_str();
            if text.is_none() {
                tracing::warn!("Dropping non-string planting season {}", tag);
            }
            text
        }))
    }))
}

/// Lenient `harvest_duration_days`: anything outside `u32` becomes absent, as in CSV
fn deserialize_harvest_days<'de, D>(deserializer: D) -> std::result::Result<Option<u32>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw: Option<serde_json::Value> = Option::deserialize(deserializer)?;
    Ok(raw.and_then(|value| {
        let days = value.as_u64().and_then(|d| u32::try_from(d).ok());
        if days.is_none() {
            tracing::warn!("Ignoring harvest_duration_days {}", value);
        }
        days
    }))
}

impl TryFrom<String> for Season {
    type Error = String;

    fn try_from(value: String) -> std::result::Result<Self, Self::Error> {
        Season::parse(&value).ok_or_else(|| format!("unknown season '{}'", value))
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Season::Spring => "Spring",
            Season::Summer => "Summer",
            Season::Fall => "Fall",
            Season::Winter => "Winter",
        };
        f.write_str(label)
    }
}

// ============================================================================
// Species records
// ============================================================================

/// One catalog entry, exactly as supplied
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpeciesRecord {
    #[serde(default)]
    pub identity: Option<String>,
    pub display_name: String,
    #[serde(default)]
    pub taxonomic_name: Option<String>,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub growth_habit: Option<String>,
    #[serde(default, deserialize_with = "deserialize_seasons")]
    pub planting_seasons: Option<Vec<Season>>,
    #[serde(default, deserialize_with = "deserialize_harvest_days")]
    pub harvest_duration_days: Option<u32>,
    #[serde(default)]
    pub spacing_inches: Option<String>,
    #[serde(default)]
    pub explicit_companions: Option<Vec<String>>,
}

impl SpeciesRecord {
    pub fn new(display_name: &str, category: &str) -> Self {
        Self {
            identity: None,
            display_name: display_name.to_string(),
            taxonomic_name: None,
            category: category.to_string(),
            growth_habit: None,
            planting_seasons: None,
            harvest_duration_days: None,
            spacing_inches: None,
            explicit_companions: None,
        }
    }

    pub fn with_identity(mut self, identity: &str) -> Self {
        self.identity = Some(identity.to_string());
        self
    }

    pub fn with_taxonomic_name(mut self, name: &str) -> Self {
        self.taxonomic_name = Some(name.to_string());
        self
    }

    pub fn with_habit(mut self, habit: &str) -> Self {
        self.growth_habit = Some(habit.to_string());
        self
    }

    pub fn with_seasons(mut self, seasons: &[Season]) -> Self {
        self.planting_seasons = Some(seasons.to_vec());
        self
    }

    pub fn with_harvest_days(mut self, days: u32) -> Self {
        self.harvest_duration_days = Some(days);
        self
    }

    pub fn with_spacing(mut self, spacing: &str) -> Self {
        self.spacing_inches = Some(spacing.to_string());
        self
    }

    pub fn with_companions(mut self, companions: &[&str]) -> Self {
        self.explicit_companions = Some(companions.iter().map(|s| s.to_string()).collect());
        self
    }
}

/// Coarse growth-habit classes used by the habit complement bonus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HabitClass {
    /// Tall or structural: trees, shrubs
    Tall,
    /// Low, ground-covering
    GroundCover,
    Herb,
    Other,
}

impl HabitClass {
    fn classify(habit: &NameTokens) -> Self {
        let has = |frag: &str| habit.contains_fragment(&NameTokens::new(frag));

        if has("tree") || has("shrub") {
            HabitClass::Tall
        } else if has("ground cover") || has("groundcover") || has("creeping") || has("creeper") || has("mat") {
            HabitClass::GroundCover
        } else if has("herb") {
            HabitClass::Herb
        } else {
            HabitClass::Other
        }
    }
}

/// A catalog record plus its derived profile
#[derive(Debug, Clone)]
pub struct Species {
    record: SpeciesRecord,
    display: NameTokens,
    taxonomic: Option<NameTokens>,
    identity: String,
    dedup_key: String,
    companions: SmallVec<[NameTokens; 4]>,
    habit: Option<String>,
    habit_class: Option<HabitClass>,
    season_mask: u8,
    spacing: Option<u32>,
    /// Antagonist rule indices whose group A matches this name
    group_a: SmallVec<[u16; 4]>,
    /// Antagonist rule indices whose group B matches this name
    group_b: SmallVec<[u16; 4]>,
    shade_tolerant: bool,
    /// Per goal: index of the first preferred name this species matches
    preferred_match: [Option<u16>; Goal::COUNT],
}

impl Species {
    /// Profile a record against the rule tables
    pub fn new(record: SpeciesRecord, rules: &RuleTables) -> Self {
        let display = NameTokens::new(&record.display_name);

        let taxonomic = record
            .taxonomic_name
            .as_deref()
            .map(NameTokens::new)
            .filter(|t| !t.is_empty());

        let dedup_key = record
            .taxonomic_name
            .as_deref()
            .and_then(identity_key)
            .or_else(|| identity_key(&record.display_name))
            .unwrap_or_default();

        let identity = record
            .identity
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .or_else(|| {
                record
                    .taxonomic_name
                    .as_deref()
                    .map(str::trim)
                    .filter(|s| !s.is_empty())
                    .map(str::to_string)
            })
            .unwrap_or_else(|| record.display_name.trim().to_string());

        let companions = record
            .explicit_companions
            .iter()
            .flatten()
            .map(|c| NameTokens::new(c))
            .filter(|t| !t.is_empty())
            .collect();

        let habit_tokens = record
            .growth_habit
            .as_deref()
            .map(NameTokens::new)
            .filter(|t| !t.is_empty());
        let habit_class = habit_tokens.as_ref().map(HabitClass::classify);
        let habit = habit_tokens.map(|t| t.normalized().to_string());

        let season_mask = record
            .planting_seasons
            .iter()
            .flatten()
            .fold(0u8, |mask, s| mask | s.bit());

        let spacing = record.spacing_inches.as_deref().and_then(parse_spacing_inches);

        let mut group_a = SmallVec::new();
        let mut group_b = SmallVec::new();
        for (idx, rule) in rules.antagonists().iter().enumerate() {
            let Ok(idx) = u16::try_from(idx) else {
                break;
            };
            if display.matches_any(&rule.group_a) {
                group_a.push(idx);
            }
            if display.matches_any(&rule.group_b) {
                group_b.push(idx);
            }
        }

        let shade_tolerant = display.matches_any(rules.shade_tolerant());

        let mut preferred_match = [None; Goal::COUNT];
        for goal in Goal::ALL {
            preferred_match[goal.index()] = display
                .first_match(&rules.goal(goal).preferred)
                .and_then(|i| u16::try_from(i).ok());
        }

        Self {
            record,
            display,
            taxonomic,
            identity,
            dedup_key,
            companions,
            habit,
            habit_class,
            season_mask,
            spacing,
            group_a,
            group_b,
            shade_tolerant,
            preferred_match,
        }
    }

    pub fn record(&self) -> &SpeciesRecord {
        &self.record
    }

    pub fn display_name(&self) -> &str {
        &self.record.display_name
    }

    pub fn category(&self) -> &str {
        &self.record.category
    }

    /// Stable key: identity, else taxonomic name, else display name
    pub fn identity(&self) -> &str {
        &self.identity
    }

    /// Normalized taxonomic name, or display name when absent
    pub fn dedup_key(&self) -> &str {
        &self.dedup_key
    }

    pub fn display_tokens(&self) -> &NameTokens {
        &self.display
    }

    pub fn taxonomic_tokens(&self) -> Option<&NameTokens> {
        self.taxonomic.as_ref()
    }

    pub fn companion_names(&self) -> &[NameTokens] {
        &self.companions
    }

    /// Normalized growth habit, None when unknown
    pub fn habit(&self) -> Option<&str> {
        self.habit.as_deref()
    }

    pub fn habit_class(&self) -> Option<HabitClass> {
        self.habit_class
    }

    pub fn is_herb(&self) -> bool {
        self.habit_class == Some(HabitClass::Herb)
    }

    /// Bit mask of planting seasons, 0 when unknown
    pub fn season_mask(&self) -> u8 {
        self.season_mask
    }

    /// Parsed primary spacing in inches
    pub fn spacing_inches(&self) -> Option<u32> {
        self.spacing
    }

    pub fn harvest_days(&self) -> Option<u32> {
        self.record.harvest_duration_days
    }

    pub fn antagonist_groups(&self) -> (&[u16], &[u16]) {
        (&self.group_a, &self.group_b)
    }

    pub fn is_shade_tolerant(&self) -> bool {
        self.shade_tolerant
    }

    /// Index into the goal's preferred list of the first name this species matches
    pub fn preferred_match(&self, goal: Goal) -> Option<usize> {
        self.preferred_match[goal.index()].map(usize::from)
    }
}

// ============================================================================
// Catalog
// ============================================================================

/// Read-only species catalog with its rule tables
#[derive(Debug, Clone)]
pub struct Catalog {
    species: Vec<Species>,
    rules: Arc<RuleTables>,
}

impl Catalog {
    /// Build a catalog against the built-in rule tables
    pub fn new(records: Vec<SpeciesRecord>) -> Self {
        Self::with_rules(records, RuleTables::builtin())
    }

    /// Build a catalog against the given rule tables
    pub fn with_rules(records: Vec<SpeciesRecord>, rules: Arc<RuleTables>) -> Self {
        let species = records
            .into_iter()
            .map(|record| Species::new(record, &rules))
            .collect();

        Self { species, rules }
    }

    /// Parse a JSON array of species records
    pub fn from_json_str(json: &str) -> Result<Self> {
        let records: Vec<SpeciesRecord> =
            serde_json::from_str(json).with_context(|| "Failed to parse catalog JSON")?;
        Ok(Self::new(records))
    }

    /// Load a catalog file (.json, .csv or .parquet) with built-in rules
    pub fn load(path: &Path) -> Result<Self> {
        Self::load_with_rules(path, RuleTables::builtin())
    }

    /// Load a catalog file (.json, .csv or .parquet)
    pub fn load_with_rules(path: &Path, rules: Arc<RuleTables>) -> Result<Self> {
        let records = load_records(path)?;
        tracing::info!("Loaded {} species from {:?}", records.len(), path);
        Ok(Self::with_rules(records, rules))
    }

    pub fn species(&self) -> &[Species] {
        &self.species
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Species> {
        self.species.iter()
    }

    pub fn len(&self) -> usize {
        self.species.len()
    }

    pub fn is_empty(&self) -> bool {
        self.species.is_empty()
    }

    /// First species whose normalized display name equals `name`
    pub fn find(&self, name: &str) -> Option<&Species> {
        let wanted = NameTokens::new(name);
        self.species
            .iter()
            .find(|s| s.display_tokens().normalized() == wanted.normalized())
    }

    pub fn rules(&self) -> &RuleTables {
        &self.rules
    }

    pub fn shared_rules(&self) -> Arc<RuleTables> {
        Arc::clone(&self.rules)
    }
}

// ============================================================================
// File loading
// ============================================================================

/// Read species records from a catalog file, dispatching on extension
pub fn load_records(path: &Path) -> Result<Vec<SpeciesRecord>> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase())
        .unwrap_or_default();

    match extension.as_str() {
        "json" => {
            let contents = fs::read_to_string(path)
                .with_context(|| format!("Failed to read catalog: {:?}", path))?;
            serde_json::from_str(&contents)
                .with_context(|| format!("Failed to parse catalog JSON: {:?}", path))
        }
        "csv" => {
            let df = CsvReadOptions::default()
                .with_has_header(true)
                .try_into_reader_with_file_path(Some(path.to_path_buf()))
                .with_context(|| format!("Failed to create CSV reader: {:?}", path))?
                .finish()
                .with_context(|| format!("Failed to load catalog CSV: {:?}", path))?;
            records_from_dataframe(&df)
        }
        "parquet" => {
            let path_str = path
                .to_str()
                .ok_or_else(|| anyhow::anyhow!("Catalog path is not valid UTF-8: {:?}", path))?;
            let df = LazyFrame::scan_parquet(path_str, Default::default())
                .with_context(|| format!("Failed to scan parquet: {:?}", path))?
                .collect()
                .with_context(|| format!("Failed to load catalog parquet: {:?}", path))?;
            records_from_dataframe(&df)
        }
        other => anyhow::bail!(
            "Unsupported catalog format '{}' for {:?} (expected json, csv or parquet)",
            other,
            path
        ),
    }
}

/// Cast a column if present; absent columns are treated as all-null
fn optional_column(df: &DataFrame, name: &str, dtype: &DataType) -> Result<Option<Column>> {
    match df.column(name) {
        Ok(col) => Ok(Some(
            col.cast(dtype)
                .with_context(|| format!("Column '{}' cannot be read as {:?}", name, dtype))?,
        )),
        Err(_) => Ok(None),
    }
}

fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// Convert a catalog table into species records
///
/// `display_name` is required. List columns (`planting_seasons`,
/// `explicit_companions`) are `;` or `|` separated strings.
pub fn records_from_dataframe(df: &DataFrame) -> Result<Vec<SpeciesRecord>> {
    let display = df
        .column("display_name")
        .with_context(|| "Catalog is missing required column 'display_name'")?
        .cast(&DataType::String)
        .with_context(|| "Column 'display_name' is not string type")?;
    let display = display.str()?;

    let identity = optional_column(df, "identity", &DataType::String)?;
    let taxonomic = optional_column(df, "taxonomic_name", &DataType::String)?;
    let category = optional_column(df, "category", &DataType::String)?;
    let habit = optional_column(df, "growth_habit", &DataType::String)?;
    let seasons = optional_column(df, "planting_seasons", &DataType::String)?;
    let harvest = optional_column(df, "harvest_duration_days", &DataType::Int64)?;
    let spacing = optional_column(df, "spacing_inches", &DataType::String)?;
    let companions = optional_column(df, "explicit_companions", &DataType::String)?;

    let identity = identity.as_ref().map(|c| c.str()).transpose()?;
    let taxonomic = taxonomic.as_ref().map(|c| c.str()).transpose()?;
    let category = category.as_ref().map(|c| c.str()).transpose()?;
    let habit = habit.as_ref().map(|c| c.str()).transpose()?;
    let seasons = seasons.as_ref().map(|c| c.str()).transpose()?;
    let harvest = harvest.as_ref().map(|c| c.i64()).transpose()?;
    let spacing = spacing.as_ref().map(|c| c.str()).transpose()?;
    let companions = companions.as_ref().map(|c| c.str()).transpose()?;

    let mut records = Vec::with_capacity(df.height());

    for i in 0..df.height() {
        let display_name = match non_blank(display.get(i)) {
            Some(name) => name,
            None => {
                tracing::warn!("Skipping catalog row {} with no display_name", i);
                continue;
            }
        };

        let planting_seasons = seasons
            .and_then(|col| col.get(i))
            .and_then(|raw| known_seasons(split_list(raw).iter().map(String::as_str)));

        let explicit_companions = companions
            .and_then(|col| col.get(i))
            .map(split_list)
            .filter(|list| !list.is_empty());

        let harvest_duration_days = harvest.and_then(|col| col.get(i)).and_then(|d| {
            let days = u32::try_from(d).ok();
            if days.is_none() {
                tracing::warn!("Ignoring harvest_duration_days {} for '{}'", d, display_name);
            }
            days
        });

        records.push(SpeciesRecord {
            identity: non_blank(identity.and_then(|col| col.get(i))),
            display_name,
            taxonomic_name: non_blank(taxonomic.and_then(|col| col.get(i))),
            category: category
                .and_then(|col| col.get(i))
                .map(|s| s.trim().to_string())
                .unwrap_or_default(),
            growth_habit: non_blank(habit.and_then(|col| col.get(i))),
            planting_seasons,
            harvest_duration_days,
            spacing_inches: non_blank(spacing.and_then(|col| col.get(i))),
            explicit_companions,
        });
    }

    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(record: SpeciesRecord) -> Species {
        Species::new(record, &RuleTables::builtin())
    }

    #[test]
    fn test_season_parse_and_alias() {
        assert_eq!(Season::parse("Autumn"), Some(Season::Fall));
        assert_eq!(Season::parse(" SPRING "), Some(Season::Spring));
        assert_eq!(Season::parse("monsoon"), None);
    }

    #[test]
    fn test_dedup_key_prefers_taxonomic_name() {
        let tomato = profile(
            SpeciesRecord::new("Cherry Tomato", "food").with_taxonomic_name("  Solanum  Lycopersicum "),
        );
        assert_eq!(tomato.dedup_key(), "solanum lycopersicum");
        assert_eq!(tomato.identity(), "Solanum  Lycopersicum");

        let basil = profile(SpeciesRecord::new("Basil", "food"));
        assert_eq!(basil.dedup_key(), "basil");
        assert_eq!(basil.identity(), "Basil");
    }

    #[test]
    fn test_blank_taxonomic_name_falls_back() {
        let s = profile(SpeciesRecord::new("Sweet Pea", "nitrogen-fixer").with_taxonomic_name("   "));
        assert_eq!(s.dedup_key(), "sweet pea");
        assert!(s.taxonomic_tokens().is_none());
    }

    #[test]
    fn test_explicit_identity_wins() {
        let s = profile(
            SpeciesRecord::new("Basil", "food")
                .with_identity("plant-042")
                .with_taxonomic_name("Ocimum basilicum"),
        );
        assert_eq!(s.identity(), "plant-042");
        assert_eq!(s.dedup_key(), "ocimum basilicum");
    }

    #[test]
    fn test_habit_classes() {
        let tree = profile(SpeciesRecord::new("Apple", "food").with_habit("Fruit Tree"));
        let cover = profile(SpeciesRecord::new("Clover", "nitrogen-fixer").with_habit("ground cover"));
        let herb = profile(SpeciesRecord::new("Basil", "food").with_habit("Herb"));
        let vine = profile(SpeciesRecord::new("Tomato", "food").with_habit("vine"));
        let none = profile(SpeciesRecord::new("Mystery", "food"));

        assert_eq!(tree.habit_class(), Some(HabitClass::Tall));
        assert_eq!(cover.habit_class(), Some(HabitClass::GroundCover));
        assert!(herb.is_herb());
        assert_eq!(vine.habit_class(), Some(HabitClass::Other));
        assert_eq!(none.habit(), None);
        assert_eq!(none.habit_class(), None);
    }

    #[test]
    fn test_season_mask() {
        let s = profile(SpeciesRecord::new("Pea", "food").with_seasons(&[Season::Spring, Season::Fall]));
        assert_eq!(s.season_mask(), 0b0101);
        assert_eq!(profile(SpeciesRecord::new("Pea", "food")).season_mask(), 0);
        assert_eq!(profile(SpeciesRecord::new("Pea", "food").with_seasons(&[])).season_mask(), 0);
    }

    #[test]
    fn test_rule_membership_is_precomputed() {
        let tables = RuleTables::builtin();
        let onion = Species::new(SpeciesRecord::new("Red Onion", "food"), &tables);
        let (a, _) = onion.antagonist_groups();
        let allium = tables
            .antagonists()
            .iter()
            .position(|r| r.name == "allium_legume")
            .unwrap() as u16;
        assert!(a.contains(&allium));

        let lettuce = Species::new(SpeciesRecord::new("Butter Lettuce", "food"), &tables);
        assert!(lettuce.is_shade_tolerant());
        assert!(!onion.is_shade_tolerant());
        assert!(lettuce.preferred_match(Goal::Cooking).is_some());
    }

    #[test]
    fn test_catalog_from_json() {
        let json = r#"[
            {"display_name": "Tomato", "category": "food", "growth_habit": "vine",
             "planting_seasons": ["Spring", "summer"], "spacing_inches": "18-24",
             "explicit_companions": ["Basil", "Carrot", "Marigold"]},
            {"display_name": "Basil", "category": "food", "planting_seasons": ["Autumn"]}
        ]"#;

        let catalog = Catalog::from_json_str(json).unwrap();
        assert_eq!(catalog.len(), 2);

        let tomato = catalog.find("tomato").unwrap();
        assert_eq!(tomato.spacing_inches(), Some(18));
        assert_eq!(tomato.season_mask(), 0b0011);
        assert_eq!(tomato.companion_names().len(), 3);
        assert_eq!(catalog.find("BASIL").unwrap().season_mask(), 0b0100);
    }

    #[test]
    fn test_catalog_json_drops_unknown_seasons() {
        let json = r#"[
            {"display_name": "Tomato", "planting_seasons": ["Monsoon"]},
            {"display_name": "Basil", "planting_seasons": ["Summer", "Monsoon", 3, null]},
            {"display_name": "Pea", "planting_seasons": null}
        ]"#;

        let catalog = Catalog::from_json_str(json).unwrap();
        assert_eq!(catalog.len(), 3);

        let tomato = catalog.find("Tomato").unwrap();
        assert_eq!(tomato.record().planting_seasons, None);
        assert_eq!(tomato.season_mask(), 0);
        assert_eq!(catalog.find("Basil").unwrap().season_mask(), 0b0010);
        assert_eq!(catalog.find("Pea").unwrap().season_mask(), 0);
    }

    #[test]
    fn test_catalog_json_ignores_out_of_range_harvest() {
        let json = r#"[
            {"display_name": "Tomato", "harvest_duration_days": -5},
            {"display_name": "Squash", "harvest_duration_days": 5000000000},
            {"display_name": "Radish", "harvest_duration_days": 2.5},
            {"display_name": "Basil", "harvest_duration_days": 60}
        ]"#;

        let catalog = Catalog::from_json_str(json).unwrap();
        assert_eq!(catalog.len(), 4);
        assert_eq!(catalog.find("Tomato").unwrap().harvest_days(), None);
        assert_eq!(catalog.find("Squash").unwrap().harvest_days(), None);
        assert_eq!(catalog.find("Radish").unwrap().harvest_days(), None);
        assert_eq!(catalog.find("Basil").unwrap().harvest_days(), Some(60));
    }

    #[test]
    fn test_dataframe_drops_negative_harvest() {
        let df = df! {
            "display_name" => &["Tomato", "Basil"],
            "planting_seasons" => &["Monsoon", "Summer;Monsoon"],
            "harvest_duration_days" => &[Some(-5i64), Some(60)]
        }
        .unwrap();

        let records = records_from_dataframe(&df).unwrap();
        assert_eq!(records[0].planting_seasons, None);
        assert_eq!(records[0].harvest_duration_days, None);
        assert_eq!(records[1].planting_seasons, Some(vec![Season::Summer]));
        assert_eq!(records[1].harvest_duration_days, Some(60));
    }

    #[test]
    fn test_records_from_dataframe() {
        let df = df! {
            "display_name" => &["Tomato", "Basil", ""],
            "taxonomic_name" => &[Some("Solanum lycopersicum"), None, None],
            "category" => &["food", "food", "food"],
            "planting_seasons" => &["Spring;Summer", "Summer|Autumn", ""],
            "harvest_duration_days" => &[Some(75i64), None, Some(30)],
            "spacing_inches" => &["18-24", "12", ""],
            "explicit_companions" => &["Basil|Carrot", "", ""]
        }
        .unwrap();

        let records = records_from_dataframe(&df).unwrap();
        assert_eq!(records.len(), 2);

        assert_eq!(records[0].taxonomic_name.as_deref(), Some("Solanum lycopersicum"));
        assert_eq!(records[0].planting_seasons, Some(vec![Season::Spring, Season::Summer]));
        assert_eq!(records[0].harvest_duration_days, Some(75));
        assert_eq!(
            records[0].explicit_companions,
            Some(vec!["Basil".to_string(), "Carrot".to_string()])
        );

        assert_eq!(records[1].planting_seasons, Some(vec![Season::Summer, Season::Fall]));
        assert_eq!(records[1].harvest_duration_days, None);
        assert_eq!(records[1].explicit_companions, None);
        assert_eq!(records[1].growth_habit, None);
    }

    #[test]
    fn test_records_require_display_name() {
        let df = df! { "category" => &["food"] }.unwrap();
        assert!(records_from_dataframe(&df).is_err());
    }

    #[test]
    fn test_unsupported_extension() {
        let err = load_records(Path::new("catalog.xlsx")).unwrap_err();
        assert!(err.to_string().contains("Unsupported catalog format"));
    }
}
