//! CANDIDATE SCORER: pairwise companion score
//!
//! Scores one candidate against the species already placed in a recipe.
//! The score is a sum over placed species, not an average, so a candidate
//! compared against more neighbours accrues proportionally larger totals.
//!
//! Per placed neighbour:
//!   - Antagonist: −15, and nothing else for that pair
//!   - Explicit companion: +5
//!   - Season overlap: +2 shared, 0 disjoint, +1 when either side is unknown
//!   - Growth habit: +2 tall/structural with ground cover, +1 other known
//!     differing habits, 0 identical or unknown

use crate::data::{HabitClass, Species};
use crate::metrics::compatibility::{is_antagonist, is_explicit_companion};

pub const ANTAGONIST_PENALTY: i32 = -15;
pub const COMPANION_BONUS: i32 = 5;
pub const SHARED_SEASON_BONUS: i32 = 2;
pub const UNKNOWN_SEASON_BONUS: i32 = 1;
pub const HABIT_DIFFERENCE_BONUS: i32 = 1;
pub const LAYERED_HABIT_BONUS: i32 = 2;

/// Score contributions of one candidate/neighbour pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PairScore {
    pub antagonist: bool,
    pub companion: i32,
    pub season: i32,
    pub habit: i32,
}

impl PairScore {
    pub fn total(&self) -> i32 {
        if self.antagonist {
            ANTAGONIST_PENALTY
        } else {
            self.companion + self.season + self.habit
        }
    }
}

/// Score a single candidate/neighbour pair
pub fn pair_score(candidate: &Species, other: &Species) -> PairScore {
    if is_antagonist(candidate, other) {
        return PairScore {
            antagonist: true,
            ..PairScore::default()
        };
    }

    PairScore {
        antagonist: false,
        companion: if is_explicit_companion(candidate, other) {
            COMPANION_BONUS
        } else {
            0
        },
        season: season_score(candidate, other),
        habit: habit_score(candidate, other),
    }
}

/// Sum of pair scores against every already-placed species
///
/// Returns 0 when nothing has been placed yet.
pub fn companion_score(candidate: &Species, already_placed: &[&Species]) -> i32 {
    already_placed
        .iter()
        .map(|other| pair_score(candidate, other).total())
        .sum()
}

fn season_score(a: &Species, b: &Species) -> i32 {
    let (mask_a, mask_b) = (a.season_mask(), b.season_mask());

    if mask_a == 0 || mask_b == 0 {
        UNKNOWN_SEASON_BONUS
    } else if mask_a & mask_b != 0 {
        SHARED_SEASON_BONUS
    } else {
        0
    }
}

fn habit_score(a: &Species, b: &Species) -> i32 {
    let (habit_a, habit_b) = match (a.habit(), b.habit()) {
        (Some(x), Some(y)) => (x, y),
        _ => return 0,
    };

    if habit_a == habit_b {
        return 0;
    }

    let layered = matches!(
        (a.habit_class(), b.habit_class()),
        (Some(HabitClass::Tall), Some(HabitClass::GroundCover))
            | (Some(HabitClass::GroundCover), Some(HabitClass::Tall))
    );

    if layered {
        LAYERED_HABIT_BONUS
    } else {
        HABIT_DIFFERENCE_BONUS
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{Season, SpeciesRecord};
    use crate::rules::RuleTables;

    fn species(record: SpeciesRecord) -> Species {
        Species::new(record, &RuleTables::builtin())
    }

    fn tomato() -> Species {
        species(
            SpeciesRecord::new("Tomato", "food")
                .with_habit("vine")
                .with_seasons(&[Season::Spring, Season::Summer])
                .with_companions(&["Basil", "Carrot", "Marigold"]),
        )
    }

    #[test]
    fn test_empty_placement_scores_zero() {
        assert_eq!(companion_score(&tomato(), &[]), 0);
    }

    #[test]
    fn test_antagonist_penalty_is_exclusive() {
        // Potato shares seasons and has a different habit, but nothing offsets the penalty
        let potato = species(
            SpeciesRecord::new("Potato", "food")
                .with_habit("underground")
                .with_seasons(&[Season::Spring])
                .with_companions(&["Tomato"]),
        );
        let t = tomato();

        assert_eq!(pair_score(&potato, &t).total(), ANTAGONIST_PENALTY);
        assert_eq!(companion_score(&potato, &[&t]), -15);
        assert!(companion_score(&potato, &[&t]) <= -10);
    }

    #[test]
    fn test_basil_next_to_tomato() {
        let basil = species(
            SpeciesRecord::new("Basil", "food")
                .with_habit("herb")
                .with_seasons(&[Season::Spring, Season::Summer]),
        );
        let t = tomato();

        let pair = pair_score(&basil, &t);
        assert_eq!(pair.companion, 5);
        assert_eq!(pair.season, 2);
        assert_eq!(pair.habit, 1);
        assert!(companion_score(&basil, &[&t]) >= 7);
    }

    #[test]
    fn test_unknown_season_is_neutral_bonus() {
        let a = species(SpeciesRecord::new("Basil", "food").with_seasons(&[Season::Summer]));
        let b = species(SpeciesRecord::new("Marigold", "aromatic/dye"));
        assert_eq!(pair_score(&a, &b).season, UNKNOWN_SEASON_BONUS);
    }

    #[test]
    fn test_disjoint_seasons_score_zero() {
        let a = species(SpeciesRecord::new("Garlic", "food").with_seasons(&[Season::Fall]));
        let b = species(SpeciesRecord::new("Basil", "food").with_seasons(&[Season::Summer]));
        assert_eq!(pair_score(&a, &b).season, 0);
    }

    #[test]
    fn test_habit_scores() {
        let tree = species(SpeciesRecord::new("Apple", "food").with_habit("tree"));
        let cover = species(SpeciesRecord::new("Clover", "nitrogen-fixer").with_habit("Ground Cover"));
        let herb = species(SpeciesRecord::new("Basil", "food").with_habit("herb"));
        let herb2 = species(SpeciesRecord::new("Thyme", "food").with_habit(" Herb "));
        let unknown = species(SpeciesRecord::new("Mystery", "food"));

        assert_eq!(pair_score(&tree, &cover).habit, LAYERED_HABIT_BONUS);
        assert_eq!(pair_score(&cover, &tree).habit, LAYERED_HABIT_BONUS);
        assert_eq!(pair_score(&tree, &herb).habit, HABIT_DIFFERENCE_BONUS);
        assert_eq!(pair_score(&herb, &herb2).habit, 0);
        assert_eq!(pair_score(&herb, &unknown).habit, 0);
    }

    #[test]
    fn test_score_accumulates_across_neighbours() {
        let marigold = species(
            SpeciesRecord::new("Marigold", "aromatic/dye")
                .with_habit("upright")
                .with_seasons(&[Season::Summer]),
        );
        let t = tomato();
        let single = companion_score(&marigold, &[&t]);
        let double = companion_score(&marigold, &[&t, &t]);
        assert_eq!(double, single * 2);
    }

    #[test]
    fn test_mixed_neighbours_sum() {
        let bean = species(SpeciesRecord::new("Bush Bean", "nitrogen-fixer"));
        let onion = species(SpeciesRecord::new("Onion", "food"));
        let carrot = species(SpeciesRecord::new("Carrot", "food"));

        // -15 against onion, +1 (unknown season) against carrot
        assert_eq!(companion_score(&bean, &[&onion, &carrot]), -14);
    }
}
