pub mod clothing;
pub mod normalize;

pub use clothing::{normalize_text, Category, ClothingItem, ClothingItemId, Formality, Warmth};
pub use normalize::{normalize_closet, NormalizedCloset, RawClothingItem, SkippedRow};
