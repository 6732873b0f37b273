//! Pairwise and per-candidate metrics
//!
//! - `compatibility`: antagonist and explicit-companion classification
//! - `companion_score`: placement-dependent score against already-placed species
//! - `goal_alignment`: placement-independent ranking score

pub mod companion_score;
pub mod compatibility;
pub mod goal_alignment;

pub use companion_score::{companion_score, pair_score, PairScore};
pub use compatibility::{antagonist_rule, is_antagonist, is_explicit_companion};
pub use goal_alignment::{goal_alignment, GoalAlignment};
