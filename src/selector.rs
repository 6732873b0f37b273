//! Recipe Selector - greedy bounded selection
//!
//! Turns a catalog and a grower's constraints into a short planting plan:
//! 1. Feasibility filter (shade tolerance, container spacing)
//! 2. Ranking score per survivor (goal alignment)
//! 3. Stable sort, highest score first, catalog order breaks ties
//! 4. Single greedy pass with three accumulators: used dedup identities,
//!    per-category counts and the growing result
//!
//! No backtracking. When the greedy pass under-fills the tier, the shorter
//! plan is returned as is.
//!
//! Includes both sequential and parallel (Rayon) batch selection.

use crate::data::{Catalog, Species};
use crate::metrics::{antagonist_rule, companion_score, goal_alignment, GoalAlignment};
use crate::tiers::{Goal, SpaceTier, SunTier};
use ahash::AHashSet;
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Container tiers exclude species whose primary spacing exceeds this
pub const CONTAINER_MAX_SPACING_INCHES: u32 = 18;

/// Maximum accepted members per category
pub const CATEGORY_CAP: usize = 2;

/// Candidates scoring at or below this against the plan are rejected
pub const ANTAGONIST_REJECT_THRESHOLD: i32 = -10;

/// Why a candidate cannot join the current plan
#[derive(Debug, Clone, Copy)]
enum PlanConflict<'a> {
    /// Net companion score at or below `ANTAGONIST_REJECT_THRESHOLD`
    LowScore(i32),
    /// Antagonist whose penalty is offset by companions already in the plan
    Antagonist(&'a Species),
}

/// Companion score of a candidate against the plan, or the reason it is rejected
fn check_plan<'a>(species: &Species, placed: &[&'a Species]) -> Result<i32, PlanConflict<'a>> {
    let score = companion_score(species, placed);
    if score <= ANTAGONIST_REJECT_THRESHOLD {
        return Err(PlanConflict::LowScore(score));
    }

    if let Some(&conflict) = placed.iter().find(|p| antagonist_rule(species, p).is_some()) {
        return Err(PlanConflict::Antagonist(conflict));
    }

    Ok(score)
}

/// Grower constraints for one selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RecipeRequest {
    pub space: SpaceTier,
    pub sun: SunTier,
    pub goal: Goal,
}

impl RecipeRequest {
    pub fn new(space: SpaceTier, sun: SunTier, goal: Goal) -> Self {
        Self { space, sun, goal }
    }
}

/// One accepted species with the scores it was accepted with
#[derive(Debug, Clone)]
pub struct RecipeEntry<'a> {
    pub species: &'a Species,
    pub alignment: GoalAlignment,
    /// Companion score against the entries accepted before it
    pub companion_score: i32,
}

impl RecipeEntry<'_> {
    pub fn ranking_score(&self) -> i32 {
        self.alignment.total()
    }
}

/// Selected planting plan
#[derive(Debug, Clone)]
pub struct Recipe<'a> {
    pub request: RecipeRequest,
    pub entries: Vec<RecipeEntry<'a>>,
    /// Tier maximum
    pub max_plants: usize,
    /// Species surviving the feasibility filter
    pub feasible_candidates: usize,
}

impl<'a> Recipe<'a> {
    /// Accepted species, in acceptance order
    pub fn species(&self) -> Vec<&'a Species> {
        self.entries.iter().map(|e| e.species).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.entries.len() >= self.max_plants
    }
}

struct Ranked<'a> {
    species: &'a Species,
    alignment: GoalAlignment,
    score: i32,
}

/// Selector over a read-only catalog
pub struct RecipeSelector<'a> {
    catalog: &'a Catalog,
}

impl<'a> RecipeSelector<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &'a Catalog {
        self.catalog
    }

    /// True when the species can be grown under the request's sun and space
    pub fn is_feasible(species: &Species, request: &RecipeRequest) -> bool {
        if request.sun == SunTier::Shade && !species.is_shade_tolerant() {
            return false;
        }

        if request.space.is_container() {
            if let Some(spacing) = species.spacing_inches() {
                if spacing > CONTAINER_MAX_SPACING_INCHES {
                    return false;
                }
            }
        }

        true
    }

    /// Select a recipe for one request
    pub fn select(&self, request: RecipeRequest) -> Recipe<'a> {
        let rules = self.catalog.rules();
        let max_plants = request.space.max_plants();

        let mut ranked: Vec<Ranked<'a>> = self
            .catalog
            .iter()
            .filter(|s| Self::is_feasible(s, &request))
            .map(|species| {
                let alignment = goal_alignment(species, request.goal, request.space, rules);
                let score = alignment.total();
                Ranked {
                    species,
                    alignment,
                    score,
                }
            })
            .collect();

        let feasible_candidates = ranked.len();

        // sort_by is stable: equal scores keep catalog order
        ranked.sort_by(|a, b| b.score.cmp(&a.score));

        let mut used: AHashSet<&'a str> = AHashSet::with_capacity(max_plants);
        let mut per_category: FxHashMap<&'a str, usize> = FxHashMap::default();
        let mut placed: Vec<&'a Species> = Vec::with_capacity(max_plants);
        let mut entries: Vec<RecipeEntry<'a>> = Vec::with_capacity(max_plants);

        for candidate in ranked {
            if entries.len() >= max_plants {
                break;
            }

            let species = candidate.species;
            let name = species.display_name();

            if used.contains(species.dedup_key()) {
                tracing::debug!("Skipping {}: duplicate of an accepted species ({})", name, species.dedup_key());
                continue;
            }

            let in_category = per_category.get(species.category()).copied().unwrap_or(0);
            if in_category >= CATEGORY_CAP {
                tracing::debug!("Skipping {}: category '{}' is full", name, species.category());
                continue;
            }

            let score = match check_plan(species, &placed) {
                Ok(score) => score,
                Err(PlanConflict::LowScore(score)) => {
                    tracing::debug!("Skipping {}: companion score {} against current plan", name, score);
                    continue;
                }
                Err(PlanConflict::Antagonist(conflict)) => {
                    tracing::debug!("Skipping {}: antagonist of {}", name, conflict.display_name());
                    continue;
                }
            };

            tracing::debug!(
                "Accepting {} (ranking {}, companion {})",
                name,
                candidate.score,
                score
            );

            used.insert(species.dedup_key());
            *per_category.entry(species.category()).or_insert(0) += 1;
            placed.push(species);
            entries.push(RecipeEntry {
                species,
                alignment: candidate.alignment,
                companion_score: score,
            });
        }

        Recipe {
            request,
            entries,
            max_plants,
            feasible_candidates,
        }
    }

    /// Select recipes for many requests in parallel, preserving request order
    pub fn select_many(&self, requests: &[RecipeRequest]) -> Vec<Recipe<'a>> {
        requests.par_iter().map(|&request| self.select(request)).collect()
    }
}

/// Select a planting plan and return the chosen species in order
pub fn pick_recipe(catalog: &Catalog, space: SpaceTier, sun: SunTier, goal: Goal) -> Vec<&Species> {
    RecipeSelector::new(catalog)
        .select(RecipeRequest::new(space, sun, goal))
        .species()
}
