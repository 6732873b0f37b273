//! Built-in rule tables
//!
//! Content, not code: changing a fragment here is a catalog update.

use super::{AntagonistRuleConfig, GoalConfig, RuleConfig};
use crate::tiers::Goal;
use std::collections::BTreeMap;

struct AntagonistSpec {
    name: &'static str,
    group_a: &'static [&'static str],
    group_b: &'static [&'static str],
    reason: &'static str,
}

struct GoalSpec {
    goal: Goal,
    preferred: &'static [&'static str],
    herb_oriented: bool,
    flower_oriented: bool,
    affinity_categories: &'static [&'static str],
}

// ============================================================================
// ANTAGONIST RULES
// ============================================================================

static ANTAGONISTS: &[AntagonistSpec] = &[
    AntagonistSpec {
        name: "nightshade_blight",
        group_a: &["tomato"],
        group_b: &["potato"],
        reason: "they share early and late blight",
    },
    AntagonistSpec {
        name: "allium_legume",
        group_a: &["onion", "garlic", "leek", "shallot", "chive", "scallion"],
        group_b: &["bean", "pea"],
        reason: "alliums suppress the nitrogen-fixing bacteria on legume roots",
    },
    AntagonistSpec {
        name: "fennel_allelopathy",
        group_a: &["fennel"],
        group_b: &["tomato", "bean", "pepper", "eggplant", "kohlrabi", "dill", "coriander", "cilantro"],
        reason: "fennel releases compounds that inhibit most garden neighbours",
    },
    AntagonistSpec {
        name: "brassica_competition",
        group_a: &["cabbage", "broccoli", "cauliflower", "kale", "brussels sprout"],
        group_b: &["strawberry", "tomato"],
        reason: "they compete heavily for the same nutrients",
    },
    AntagonistSpec {
        name: "cucurbit_potato",
        group_a: &["cucumber", "squash", "pumpkin", "melon"],
        group_b: &["potato", "sage"],
        reason: "they attract the same pests and stunt each other",
    },
    AntagonistSpec {
        name: "carrot_dill",
        group_a: &["carrot"],
        group_b: &["dill"],
        reason: "mature dill stunts carrots and the two cross-pollinate",
    },
    AntagonistSpec {
        name: "corn_tomato",
        group_a: &["corn"],
        group_b: &["tomato"],
        reason: "the corn earworm and tomato fruitworm are the same insect",
    },
    AntagonistSpec {
        name: "walnut_juglone",
        group_a: &["walnut"],
        group_b: &["tomato", "potato", "pepper", "eggplant", "apple", "blueberry"],
        reason: "walnut roots release juglone, which is toxic to many crops",
    },
    AntagonistSpec {
        name: "asparagus_allium",
        group_a: &["asparagus"],
        group_b: &["onion", "garlic"],
        reason: "alliums stunt asparagus growth",
    },
    AntagonistSpec {
        name: "sunflower_allelopathy",
        group_a: &["sunflower"],
        group_b: &["potato", "bean"],
        reason: "sunflower husks inhibit nearby germination",
    },
];

// ============================================================================
// SHADE-TOLERANT REFERENCE LIST
// ============================================================================

static SHADE_TOLERANT: &[&str] = &[
    "lettuce", "spinach", "kale", "chard", "arugula", "rocket", "mint", "parsley",
    "cilantro", "coriander", "chive", "sorrel", "radish", "beet", "pea", "bok choy",
    "mustard", "lemon balm", "chervil", "watercress", "wild garlic", "hosta", "fern",
    "astilbe", "impatiens", "begonia", "foxglove", "violet",
];

// ============================================================================
// GOAL PROFILES
// ============================================================================

static GOALS: &[GoalSpec] = &[
    GoalSpec {
        goal: Goal::Cooking,
        preferred: &[
            "tomato", "basil", "pepper", "onion", "garlic", "oregano", "thyme",
            "rosemary", "parsley", "cilantro", "chive", "zucchini", "bean", "lettuce",
        ],
        herb_oriented: false,
        flower_oriented: false,
        affinity_categories: &[],
    },
    GoalSpec {
        goal: Goal::Herbal,
        preferred: &[
            "mint", "chamomile", "lemon balm", "lavender", "sage", "thyme",
            "rosemary", "echinacea", "calendula", "lemon verbena",
        ],
        herb_oriented: true,
        flower_oriented: false,
        affinity_categories: &[],
    },
    GoalSpec {
        goal: Goal::Pollinators,
        preferred: &[
            "marigold", "sunflower", "zinnia", "lavender", "borage", "nasturtium",
            "cosmos", "calendula", "echinacea", "phacelia",
        ],
        herb_oriented: false,
        flower_oriented: true,
        affinity_categories: &["aromatic/dye"],
    },
    GoalSpec {
        goal: Goal::Harvest,
        preferred: &[
            "potato", "bean", "squash", "corn", "kale", "pea", "carrot", "beet",
            "cabbage", "pumpkin",
        ],
        herb_oriented: false,
        flower_oriented: false,
        affinity_categories: &[],
    },
];

fn owned(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

/// Build the built-in rule configuration
pub(super) fn builtin_config() -> RuleConfig {
    let antagonists = ANTAGONISTS
        .iter()
        .map(|spec| AntagonistRuleConfig {
            name: spec.name.to_string(),
            group_a: owned(spec.group_a),
            group_b: owned(spec.group_b),
            reason: spec.reason.to_string(),
        })
        .collect();

    let goals: BTreeMap<Goal, GoalConfig> = GOALS
        .iter()
        .map(|spec| {
            (
                spec.goal,
                GoalConfig {
                    preferred: owned(spec.preferred),
                    herb_oriented: spec.herb_oriented,
                    flower_oriented: spec.flower_oriented,
                    affinity_categories: owned(spec.affinity_categories),
                },
            )
        })
        .collect();

    RuleConfig {
        antagonists,
        shade_tolerant: owned(SHADE_TOLERANT),
        goals,
    }
}
