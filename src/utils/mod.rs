//! Utility modules for recipe selection
//!
//! Contains shared functionality used across the classifier, scorer and loaders:
//! - Names: normalization, tokenization and whole-word fragment matching
//! - Spacing: free-text spacing parsing

pub mod names;
pub mod spacing;

// Re-export commonly used types
pub use names::{identity_key, normalize_name, split_list, NameTokens};
pub use spacing::parse_spacing_inches;
