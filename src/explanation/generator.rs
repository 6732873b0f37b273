use crate::explanation::synergy::get_synergy_notes;
use crate::explanation::types::*;
use crate::rules::RuleTables;
use crate::selector::Recipe;
use crate::tiers::{Goal, SpaceTier, SunTier};

/// Main explanation generator
pub struct ExplanationGenerator;

impl ExplanationGenerator {
    /// Generate a complete explanation for a selected recipe
    ///
    /// Takes:
    /// - recipe: Selected entries with their scores
    /// - rules: Rule tables the recipe was selected against (for antagonist reasons)
    ///
    /// Returns: Request summary, one card per entry, and fill warnings
    pub fn generate(recipe: &Recipe<'_>, rules: &RuleTables) -> RecipeExplanation {
        let request = Self::generate_request_summary(recipe);

        let species = recipe.species();
        let cards = recipe
            .entries
            .iter()
            .enumerate()
            .map(|(i, entry)| {
                let record = entry.species.record();
                PlantCard {
                    position: i + 1,
                    display_name: record.display_name.clone(),
                    taxonomic_name: record.taxonomic_name.clone(),
                    category: record.category.clone(),
                    ranking_score: entry.ranking_score(),
                    companion_score: entry.companion_score,
                    reasons: entry.alignment.reasons(),
                    alignment: entry.alignment.clone(),
                    synergy_notes: get_synergy_notes(entry.species, &species, rules),
                }
            })
            .collect();

        let warnings = Self::generate_fill_warning(recipe).into_iter().collect();

        RecipeExplanation {
            request,
            cards,
            warnings,
        }
    }

    fn generate_request_summary(recipe: &Recipe<'_>) -> RequestSummary {
        RequestSummary {
            request: recipe.request,
            space_display: space_display(recipe.request.space).to_string(),
            sun_display: sun_display(recipe.request.sun).to_string(),
            goal_display: goal_display(recipe.request.goal).to_string(),
            max_plants: recipe.max_plants,
            selected: recipe.len(),
            feasible_candidates: recipe.feasible_candidates,
        }
    }

    fn generate_fill_warning(recipe: &Recipe<'_>) -> Option<WarningCard> {
        if recipe.is_full() {
            return None;
        }

        let severity = Severity::from_fill(recipe.len(), recipe.max_plants);

        if recipe.is_empty() {
            let detail = if recipe.feasible_candidates == 0 {
                "No catalog species can grow under these sun and space conditions.".to_string()
            } else {
                format!(
                    "{} species passed the sun and space checks but none could be accepted.",
                    recipe.feasible_candidates
                )
            };

            return Some(WarningCard {
                warning_type: "empty_recipe".to_string(),
                severity,
                icon: "🚨".to_string(),
                message: "No plants could be recommended".to_string(),
                detail,
                advice: "Try a larger space, more sun, or a broader catalog.".to_string(),
            });
        }

        Some(WarningCard {
            warning_type: "under_filled".to_string(),
            severity,
            icon: "⚠️".to_string(),
            message: format!(
                "Only {} of {} slots filled",
                recipe.len(),
                recipe.max_plants
            ),
            detail: format!(
                "{} of {} feasible species were rejected as duplicates, over the category limit, or incompatible with the plan.",
                recipe.feasible_candidates - recipe.len(),
                recipe.feasible_candidates
            ),
            advice: "Add more varied species to the catalog to fill the remaining space.".to_string(),
        })
    }
}

fn space_display(space: SpaceTier) -> &'static str {
    match space {
        SpaceTier::Pot => "Pot",
        SpaceTier::Balcony => "Balcony",
        SpaceTier::SmallBed => "Small bed",
        SpaceTier::LargeBed => "Large bed",
    }
}

fn sun_display(sun: SunTier) -> &'static str {
    match sun {
        SunTier::FullSun => "Full sun",
        SunTier::PartSun => "Part sun",
        SunTier::Shade => "Shade",
    }
}

fn goal_display(goal: Goal) -> &'static str {
    match goal {
        Goal::Cooking => "Cooking",
        Goal::Herbal => "Herbal",
        Goal::Pollinators => "Pollinators",
        Goal::Harvest => "Harvest",
    }
}
