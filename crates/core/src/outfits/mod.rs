//! Outfit recommendation
//!
//! Turns a closet and an [`OutfitRequest`] into ranked outfit suggestions:
//! - Parse free-text constraints into exclusion rules
//! - Classify the occasion and weather into coarse buckets
//! - Score every top/bottom/shoes combination and attach optional layers
//! - Explain each surviving outfit in one sentence

pub mod classify;
pub mod constraints;
pub mod engine;
pub mod explanation;
pub mod scoring;
pub mod types;

pub use classify::{occasion_bucket, weather_band};
pub use constraints::{
    filter_items, parse_constraints, ConstraintPolicy, ExclusionRule, ItemPredicate,
};
pub use engine::{missing_required_categories, suggest_outfits};
pub use explanation::explain_outfit;
pub use scoring::OutfitScorer;
pub use types::*;

/// Dominant colors that pair with anything.
pub const NEUTRAL_COLORS: &[&str] = &["black", "white", "gray", "grey", "navy", "beige", "cream"];

/// Disclosure returned with every result.
pub const LIMITATIONS: &str =
    "Constraint parsing is keyword-based for now (hoodies, sneakers, jeans, and simple \
     shoe-color exclusions).";

pub const MAX_SUGGESTIONS: usize = 3;
