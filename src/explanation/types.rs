use crate::metrics::GoalAlignment;
use crate::selector::RecipeRequest;
use serde::{Deserialize, Serialize};

/// Complete explanation for a recipe
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecipeExplanation {
    pub request: RequestSummary,
    pub cards: Vec<PlantCard>,
    pub warnings: Vec<WarningCard>,
}

/// Grower constraints in display form
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestSummary {
    pub request: RecipeRequest,
    pub space_display: String, // "Small bed"
    pub sun_display: String,   // "Full sun"
    pub goal_display: String,  // "Cooking"
    pub max_plants: usize,
    pub selected: usize,
    pub feasible_candidates: usize,
}

/// One accepted species with its scores and notes
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlantCard {
    pub position: usize, // 1-based acceptance order
    pub display_name: String,
    pub taxonomic_name: Option<String>,
    pub category: String,
    pub ranking_score: i32,
    pub companion_score: i32,
    pub alignment: GoalAlignment,
    pub reasons: Vec<String>,
    pub synergy_notes: Vec<SynergyNote>,
}

/// Kind of synergy note
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NoteKind {
    Companion,
    Antagonist,
}

/// Derived, transient note about a species pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SynergyNote {
    pub kind: NoteKind,
    pub related_species_name: String,
    pub message: String,
}

/// Warning card for an incomplete or empty recipe
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WarningCard {
    pub warning_type: String, // "empty_recipe", "under_filled"
    pub severity: Severity,
    pub icon: String,
    pub message: String,
    pub detail: String,
    pub advice: String,
}

/// Severity level for warnings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Severity {
    Info,
    Low,
    Medium,
    High,
}

impl Severity {
    /// Derive severity from the share of the tier left unfilled
    pub fn from_fill(selected: usize, max_plants: usize) -> Self {
        if max_plants == 0 || selected >= max_plants {
            return Severity::Info;
        }
        match selected * 100 / max_plants {
            0 => Severity::High,
            p if p < 50 => Severity::Medium,
            _ => Severity::Low,
        }
    }
}
