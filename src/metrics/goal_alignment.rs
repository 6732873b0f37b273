//! GOAL ALIGNMENT: ranking score
//!
//! How well a species fits the grower's goal and space, independent of what
//! has already been placed. The selector sorts candidates by this score
//! before the greedy pass.
//!
//! Components (summed):
//!   - Preferred name for the goal: +20 (first match only)
//!   - Herb-oriented goal and herb habit: +10
//!   - Flower-oriented goal and affinity category or herb habit: +8
//!   - Sustenance category (`food`): +2
//!   - Harvest ≤ 60 days: +3, else ≤ 90 days: +1
//!   - Container tier and herb habit: +3

use crate::data::Species;
use crate::rules::RuleTables;
use crate::tiers::{Goal, SpaceTier};
use serde::{Deserialize, Serialize};

pub const PREFERRED_NAME_BONUS: i32 = 20;
pub const HERB_GOAL_BONUS: i32 = 10;
pub const FLOWER_GOAL_BONUS: i32 = 8;
pub const SUSTENANCE_BONUS: i32 = 2;
pub const FAST_HARVEST_BONUS: i32 = 3;
pub const MEDIUM_HARVEST_BONUS: i32 = 1;
pub const CONTAINER_HERB_BONUS: i32 = 3;

pub const FAST_HARVEST_DAYS: u32 = 60;
pub const MEDIUM_HARVEST_DAYS: u32 = 90;

/// Category that earns the sustenance bonus regardless of goal
pub const SUSTENANCE_CATEGORY: &str = "food";

/// Ranking score with per-component breakdown
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GoalAlignment {
    /// Preferred name that matched, if any
    pub preferred_match: Option<String>,
    pub preferred_bonus: i32,
    pub herb_bonus: i32,
    pub flower_bonus: i32,
    pub sustenance_bonus: i32,
    pub harvest_bonus: i32,
    pub container_bonus: i32,
}

impl GoalAlignment {
    pub fn total(&self) -> i32 {
        self.preferred_bonus
            + self.herb_bonus
            + self.flower_bonus
            + self.sustenance_bonus
            + self.harvest_bonus
            + self.container_bonus
    }

    /// Human-readable reasons for each nonzero component
    pub fn reasons(&self) -> Vec<String> {
        let mut reasons = Vec::new();

        if let Some(name) = &self.preferred_match {
            reasons.push(format!("matches preferred name '{}' (+{})", name, self.preferred_bonus));
        }
        if self.herb_bonus > 0 {
            reasons.push(format!("herb for an herbal goal (+{})", self.herb_bonus));
        }
        if self.flower_bonus > 0 {
            reasons.push(format!("flowering or aromatic plant (+{})", self.flower_bonus));
        }
        if self.sustenance_bonus > 0 {
            reasons.push(format!("food crop (+{})", self.sustenance_bonus));
        }
        if self.harvest_bonus == FAST_HARVEST_BONUS {
            reasons.push(format!("harvest within {} days (+{})", FAST_HARVEST_DAYS, self.harvest_bonus));
        } else if self.harvest_bonus > 0 {
            reasons.push(format!("harvest within {} days (+{})", MEDIUM_HARVEST_DAYS, self.harvest_bonus));
        }
        if self.container_bonus > 0 {
            reasons.push(format!("herb suited to containers (+{})", self.container_bonus));
        }

        reasons
    }
}

/// Compute the ranking score of `species` for a goal and space tier
pub fn goal_alignment(species: &Species, goal: Goal, space: SpaceTier, rules: &RuleTables) -> GoalAlignment {
    let profile = rules.goal(goal);
    let herb = species.is_herb();

    let preferred_match = species
        .preferred_match(goal)
        .and_then(|idx| profile.preferred_names.get(idx))
        .cloned();
    let preferred_bonus = if preferred_match.is_some() {
        PREFERRED_NAME_BONUS
    } else {
        0
    };

    let herb_bonus = if profile.herb_oriented && herb {
        HERB_GOAL_BONUS
    } else {
        0
    };

    let affinity = profile
        .affinity_categories
        .iter()
        .any(|c| c == species.category());
    let flower_bonus = if profile.flower_oriented && (affinity || herb) {
        FLOWER_GOAL_BONUS
    } else {
        0
    };

    let sustenance_bonus = if species.category() == SUSTENANCE_CATEGORY {
        SUSTENANCE_BONUS
    } else {
        0
    };

    let harvest_bonus = match species.harvest_days() {
        Some(days) if days <= FAST_HARVEST_DAYS => FAST_HARVEST_BONUS,
        Some(days) if days <= MEDIUM_HARVEST_DAYS => MEDIUM_HARVEST_BONUS,
        _ => 0,
    };

    let container_bonus = if space.is_container() && herb {
        CONTAINER_HERB_BONUS
    } else {
        0
    };

    GoalAlignment {
        preferred_match,
        preferred_bonus,
        herb_bonus,
        flower_bonus,
        sustenance_bonus,
        harvest_bonus,
        container_bonus,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::SpeciesRecord;

    fn score(record: SpeciesRecord, goal: Goal, space: SpaceTier) -> GoalAlignment {
        let rules = RuleTables::builtin();
        let species = Species::new(record, &rules);
        goal_alignment(&species, goal, space, &rules)
    }

    #[test]
    fn test_preferred_name_does_not_stack() {
        // "Tomato Basil" hits two cooking names but scores the bonus once
        let s = score(SpeciesRecord::new("Tomato Basil", "other"), Goal::Cooking, SpaceTier::LargeBed);
        assert_eq!(s.preferred_bonus, 20);
        assert_eq!(s.preferred_match.as_deref(), Some("tomato"));
        assert_eq!(s.total(), 20);
    }

    #[test]
    fn test_herbal_goal_with_herb_in_pot() {
        let s = score(
            SpeciesRecord::new("Peppermint", "aromatic/dye").with_habit("herb"),
            Goal::Herbal,
            SpaceTier::Pot,
        );
        // peppermint is not "mint" as a whole word
        assert_eq!(s.preferred_bonus, 0);
        assert_eq!(s.herb_bonus, 10);
        assert_eq!(s.container_bonus, 3);
        assert_eq!(s.flower_bonus, 0);
        assert_eq!(s.total(), 13);
    }

    #[test]
    fn test_pollinator_affinity() {
        let marigold = score(SpeciesRecord::new("Marigold", "aromatic/dye"), Goal::Pollinators, SpaceTier::SmallBed);
        assert_eq!(marigold.total(), 20 + 8);

        let thyme = score(
            SpeciesRecord::new("Thyme", "food").with_habit("herb"),
            Goal::Pollinators,
            SpaceTier::SmallBed,
        );
        assert_eq!(thyme.flower_bonus, 8);
        assert_eq!(thyme.sustenance_bonus, 2);

        let clover = score(SpeciesRecord::new("Clover", "nitrogen-fixer"), Goal::Pollinators, SpaceTier::SmallBed);
        assert_eq!(clover.total(), 0);
    }

    #[test]
    fn test_sustenance_applies_to_every_goal() {
        for goal in Goal::ALL {
            let s = score(SpeciesRecord::new("Xyzzy", "food"), goal, SpaceTier::LargeBed);
            assert_eq!(s.sustenance_bonus, 2, "goal {}", goal);
        }
    }

    #[test]
    fn test_harvest_thresholds() {
        let days = |d: u32| {
            score(SpeciesRecord::new("Xyzzy", "other").with_harvest_days(d), Goal::Harvest, SpaceTier::LargeBed)
                .harvest_bonus
        };
        assert_eq!(days(30), 3);
        assert_eq!(days(60), 3);
        assert_eq!(days(61), 1);
        assert_eq!(days(90), 1);
        assert_eq!(days(91), 0);

        let unknown = score(SpeciesRecord::new("Xyzzy", "other"), Goal::Harvest, SpaceTier::LargeBed);
        assert_eq!(unknown.harvest_bonus, 0);
    }

    #[test]
    fn test_container_bonus_only_in_containers() {
        let herb = || SpeciesRecord::new("Xyzzy", "other").with_habit("Herb");
        assert_eq!(score(herb(), Goal::Cooking, SpaceTier::Balcony).container_bonus, 3);
        assert_eq!(score(herb(), Goal::Cooking, SpaceTier::SmallBed).container_bonus, 0);
    }

    #[test]
    fn test_reasons_follow_components() {
        let s = score(
            SpeciesRecord::new("Basil", "food").with_habit("herb").with_harvest_days(70),
            Goal::Cooking,
            SpaceTier::Pot,
        );
        assert_eq!(s.total(), 20 + 2 + 1 + 3);

        let reasons = s.reasons();
        assert_eq!(reasons.len(), 4);
        assert!(reasons[0].contains("basil"));
        assert!(reasons[2].contains("90 days"));
    }
}
