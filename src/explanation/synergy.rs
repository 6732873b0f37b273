//! Synergy notes
//!
//! Presentation support only. Notes explain a plan after it has been
//! selected and never feed back into selection.

use crate::data::Species;
use crate::explanation::types::{NoteKind, SynergyNote};
use crate::metrics::{antagonist_rule, is_explicit_companion};
use crate::rules::RuleTables;

/// Notes for `focal` against each of `others`
///
/// The focal species itself (same identity or same dedup key) is skipped.
/// Each other species yields at most one note: antagonist first, then
/// companion. Neutral pairs yield nothing.
pub fn get_synergy_notes(focal: &Species, others: &[&Species], rules: &RuleTables) -> Vec<SynergyNote> {
    others
        .iter()
        .filter(|other| !is_same_species(focal, other))
        .filter_map(|other| note_for(focal, other, rules))
        .collect()
}

fn is_same_species(a: &Species, b: &Species) -> bool {
    a.identity() == b.identity() || a.dedup_key() == b.dedup_key()
}

fn note_for(focal: &Species, other: &Species, rules: &RuleTables) -> Option<SynergyNote> {
    if let Some(idx) = antagonist_rule(focal, other) {
        let reason = rules
            .antagonist(idx)
            .map(|r| r.reason.as_str())
            .filter(|r| !r.is_empty())
            .unwrap_or("they are known to hinder each other");

        return Some(SynergyNote {
            kind: NoteKind::Antagonist,
            related_species_name: other.display_name().to_string(),
            message: format!(
                "Keep {} away from {}: {}.",
                focal.display_name(),
                other.display_name(),
                reason
            ),
        });
    }

    if is_explicit_companion(focal, other) {
        return Some(SynergyNote {
            kind: NoteKind::Companion,
            related_species_name: other.display_name().to_string(),
            message: format!(
                "{} is a known companion of {}.",
                focal.display_name(),
                other.display_name()
            ),
        });
    }

    None
}
