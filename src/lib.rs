//! Garden Recipe Engine
//!
//! Picks a small, diverse, mutually compatible set of plant species for a
//! grower's space, sun and goal.
//!
//! Module layout, bottom-up:
//! - `utils/`: Name normalization, fragment matching, spacing parsing
//! - `tiers`: Space, sun and goal enumerations
//! - `rules/`: Antagonist, shade and goal tables (built-in or JSON)
//! - `data`: Species records, derived profiles and catalog loading with Polars
//! - `metrics/`: Compatibility classifier, companion score, goal alignment
//! - `selector`: Greedy bounded selection
//! - `explanation/`: Synergy notes and Markdown/JSON reports

pub mod utils;
pub mod tiers;
pub mod rules;
pub mod data;
pub mod metrics;
pub mod selector;
pub mod explanation;

// Re-export commonly used types
pub use data::{Catalog, Season, Species, SpeciesRecord};
pub use explanation::{get_synergy_notes, ExplanationGenerator, NoteKind, SynergyNote};
pub use metrics::{companion_score, is_antagonist, is_explicit_companion};
pub use rules::RuleTables;
pub use selector::{pick_recipe, Recipe, RecipeRequest, RecipeSelector};
pub use tiers::{Goal, ParseTierError, SpaceTier, SunTier};
