pub mod config;
pub mod domain;
pub mod errors;
pub mod outfits;

pub use domain::{
    normalize_closet, Category, ClothingItem, ClothingItemId, Formality, NormalizedCloset,
    RawClothingItem, SkippedRow, Warmth,
};
pub use errors::{ApplicationError, DomainError, InterfaceError, RequestError};
pub use outfits::{
    suggest_outfits, OutfitItems, OutfitRequest, OutfitSuggestion, OutfitSuggestionResult,
};
