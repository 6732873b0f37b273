//! Recipe explanations
//!
//! Synergy notes, per-plant cards and fill warnings for a selected recipe,
//! rendered as Markdown or JSON.

pub mod types;
pub mod synergy;
pub mod generator;
pub mod formatters;

pub use types::{
    NoteKind, PlantCard, RecipeExplanation, RequestSummary, Severity, SynergyNote, WarningCard,
};

pub use synergy::get_synergy_notes;
pub use generator::ExplanationGenerator;
pub use formatters::{JsonFormatter, MarkdownFormatter};
