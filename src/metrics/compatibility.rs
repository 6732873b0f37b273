//! COMPATIBILITY CLASSIFIER
//!
//! Decides, for a pair of species, whether they are antagonistic (must never
//! share a recipe) or explicitly companion-linked (declared in catalog data).
//!
//! Antagonism is resolved against rule-group memberships computed when the
//! catalog was built, so a pairwise check is a lookup over a handful of
//! rule indices rather than a string match.

use crate::data::Species;
use crate::utils::NameTokens;

/// Index of the first antagonist rule linking `a` and `b`, in rule order
///
/// Checks both assignments (a in group A and b in group B, or the reverse),
/// so the result does not depend on argument order.
pub fn antagonist_rule(a: &Species, b: &Species) -> Option<usize> {
    let (a_in_a, a_in_b) = a.antagonist_groups();
    let (b_in_a, b_in_b) = b.antagonist_groups();

    let forward = a_in_a.iter().filter(|r| b_in_b.contains(*r)).min();
    let reverse = a_in_b.iter().filter(|r| b_in_a.contains(*r)).min();

    match (forward, reverse) {
        (Some(f), Some(r)) => Some(usize::from(*f.min(r))),
        (Some(f), None) => Some(usize::from(*f)),
        (None, Some(r)) => Some(usize::from(*r)),
        (None, None) => None,
    }
}

/// True when some antagonist rule links the two species
pub fn is_antagonist(a: &Species, b: &Species) -> bool {
    antagonist_rule(a, b).is_some()
}

/// True when either species lists the other as a companion
///
/// A companion entry matches a species when it overlaps the display name or
/// the taxonomic name as a whole-word sequence ("Basil" matches "Thai Basil").
pub fn is_explicit_companion(a: &Species, b: &Species) -> bool {
    lists_as_companion(a, b) || lists_as_companion(b, a)
}

fn lists_as_companion(lister: &Species, listed: &Species) -> bool {
    lister
        .companion_names()
        .iter()
        .any(|entry| names_match(entry, listed))
}

fn names_match(entry: &NameTokens, species: &Species) -> bool {
    entry.overlaps(species.display_tokens())
        || species
            .taxonomic_tokens()
            .map_or(false, |tax| entry.overlaps(tax))
}
