//! Scoring tables and outfit scorer
//!
//! Scores are additive and unnormalized; they only rank outfits within a
//! single request.

use super::types::{OccasionBucket, WeatherBand};
use super::NEUTRAL_COLORS;
use crate::domain::{ClothingItem, Formality, Warmth};

/// Outerwear is worn only when its bonus is strictly above this.
pub const OUTERWEAR_MIN_BONUS: f64 = 1.0;
/// Accessories are worn only when their bonus is strictly above this.
pub const ACCESSORY_MIN_BONUS: f64 = 0.0;

pub fn formality_score(formality: Formality, occasion: OccasionBucket) -> i32 {
    use Formality as F;
    use OccasionBucket as O;

    match (occasion, formality) {
        (O::Interview, F::Business) => 6,
        (O::Interview, F::Smart) => 3,
        (O::Interview, F::Casual) => -4,
        (O::Date, F::Business) => 2,
        (O::Date, F::Smart) => 5,
        (O::Date, F::Casual) => 3,
        (O::Casual, F::Business) => -2,
        (O::Casual, F::Smart) => 2,
        (O::Casual, F::Casual) => 5,
    }
}

pub fn warmth_score(warmth: Warmth, weather: Option<WeatherBand>) -> i32 {
    use Warmth::*;
    use WeatherBand::*;

    match (weather, warmth) {
        (None, _) => 0,
        (Some(Cold), Heavy) => 3,
        (Some(Cold), Medium) => 1,
        (Some(Cold), Light) => -2,
        (Some(Mild), Heavy) => 1,
        (Some(Mild), Medium) => 3,
        (Some(Mild), Light) => 1,
        (Some(Hot), Heavy) => -3,
        (Some(Hot), Medium) => 1,
        (Some(Hot), Light) => 3,
    }
}

/// Warmth adjustment applied to outerwear candidates only.
pub fn outerwear_warmth_adjustment(warmth: Warmth, weather: Option<WeatherBand>) -> i32 {
    use Warmth::*;
    use WeatherBand::*;

    match (weather, warmth) {
        (None, _) => 0,
        (Some(Cold), Heavy) => 4,
        (Some(Cold), Medium) => 2,
        (Some(Cold), Light) => 1,
        (Some(Mild), Heavy) => 0,
        (Some(Mild), Medium) => 2,
        (Some(Mild), Light) => 1,
        (Some(Hot), Heavy) => -5,
        (Some(Hot), Medium) => -2,
        (Some(Hot), Light) => -1,
    }
}

/// Harmony of two items' dominant colors.
pub fn color_pair_score(a: &ClothingItem, b: &ClothingItem) -> i32 {
    let (Some(color_a), Some(color_b)) = (a.dominant_color(), b.dominant_color()) else {
        return 0;
    };

    if NEUTRAL_COLORS.contains(&color_a.as_str()) || NEUTRAL_COLORS.contains(&color_b.as_str()) {
        2
    } else if color_a == color_b {
        1
    } else {
        -2
    }
}

pub fn outfit_color_score(top: &ClothingItem, bottom: &ClothingItem, shoes: &ClothingItem) -> i32 {
    color_pair_score(top, bottom) + color_pair_score(top, shoes) + color_pair_score(bottom, shoes)
}

/// Scores outfits for one occasion and weather context.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutfitScorer {
    occasion: OccasionBucket,
    weather: Option<WeatherBand>,
}

impl OutfitScorer {
    pub fn new(occasion: OccasionBucket, weather: Option<WeatherBand>) -> Self {
        Self { occasion, weather }
    }

    pub fn occasion(&self) -> OccasionBucket {
        self.occasion
    }

    pub fn weather(&self) -> Option<WeatherBand> {
        self.weather
    }

    /// Formality plus warmth for a single required piece.
    pub fn item_score(&self, item: &ClothingItem) -> i32 {
        formality_score(item.formality, self.occasion) + warmth_score(item.warmth, self.weather)
    }

    pub fn base_score(
        &self,
        top: &ClothingItem,
        bottom: &ClothingItem,
        shoes: &ClothingItem,
    ) -> f64 {
        let total = self.item_score(top)
            + self.item_score(bottom)
            + self.item_score(shoes)
            + outfit_color_score(top, bottom, shoes);
        f64::from(total)
    }

    fn half_formality(&self, item: &ClothingItem) -> f64 {
        f64::from(formality_score(item.formality, self.occasion)) / 2.0
    }

    pub fn outerwear_bonus(
        &self,
        candidate: &ClothingItem,
        top: &ClothingItem,
        bottom: &ClothingItem,
    ) -> f64 {
        self.half_formality(candidate)
            + f64::from(
                outerwear_warmth_adjustment(candidate.warmth, self.weather)
                    + color_pair_score(candidate, top)
                    + color_pair_score(candidate, bottom),
            )
    }

    pub fn accessory_bonus(
        &self,
        candidate: &ClothingItem,
        top: &ClothingItem,
        shoes: &ClothingItem,
    ) -> f64 {
        let casual_match = self.occasion == OccasionBucket::Casual
            && candidate.formality == Formality::Casual;

        self.half_formality(candidate)
            + f64::from(
                i32::from(casual_match)
                    + color_pair_score(candidate, top)
                    + color_pair_score(candidate, shoes),
            )
    }

    /// Highest-bonus outerwear for this top and bottom, if it clears the threshold.
    pub fn best_outerwear<'a>(
        &self,
        candidates: &[&'a ClothingItem],
        top: &ClothingItem,
        bottom: &ClothingItem,
    ) -> Option<(&'a ClothingItem, f64)> {
        best_above(candidates, OUTERWEAR_MIN_BONUS, |candidate| {
            self.outerwear_bonus(candidate, top, bottom)
        })
    }

    /// Highest-bonus accessory for this top and shoes, if it clears the threshold.
    pub fn best_accessory<'a>(
        &self,
        candidates: &[&'a ClothingItem],
        top: &ClothingItem,
        shoes: &ClothingItem,
    ) -> Option<(&'a ClothingItem, f64)> {
        best_above(candidates, ACCESSORY_MIN_BONUS, |candidate| {
            self.accessory_bonus(candidate, top, shoes)
        })
    }
}

/// First candidate with the maximum bonus, kept only when that maximum is
/// strictly greater than `threshold`.
fn best_above<'a>(
    candidates: &[&'a ClothingItem],
    threshold: f64,
    bonus: impl Fn(&ClothingItem) -> f64,
) -> Option<(&'a ClothingItem, f64)> {
    let mut best: Option<(&'a ClothingItem, f64)> = None;

    for &candidate in candidates {
        let value = bonus(candidate);
        if best.map_or(true, |(_, current)| value > current) {
            best = Some((candidate, value));
        }
    }

    best.filter(|(_, value)| *value > threshold)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Category, ClothingItemId};

    fn piece(
        id: &str,
        category: Category,
        color: &str,
        warmth: Warmth,
        formality: Formality,
    ) -> ClothingItem {
        ClothingItem {
            id: ClothingItemId(id.to_owned()),
            owner_id: "user-1".to_owned(),
            name: id.to_owned(),
            brand: None,
            subtype: None,
            category,
            colors: if color.is_empty() { Vec::new() } else { vec![color.to_owned()] },
            material: None,
            warmth,
            formality,
            notes: None,
            photo_path: None,
        }
    }

    #[test]
    fn formality_table_matches_occasions() {
        assert_eq!(formality_score(Formality::Business, OccasionBucket::Interview), 6);
        assert_eq!(formality_score(Formality::Casual, OccasionBucket::Interview), -4);
        assert_eq!(formality_score(Formality::Smart, OccasionBucket::Date), 5);
        assert_eq!(formality_score(Formality::Business, OccasionBucket::Date), 2);
        assert_eq!(formality_score(Formality::Casual, OccasionBucket::Casual), 5);
        assert_eq!(formality_score(Formality::Business, OccasionBucket::Casual), -2);
    }

    #[test]
    fn warmth_is_neutral_without_weather() {
        for warmth in [Warmth::Light, Warmth::Medium, Warmth::Heavy] {
            assert_eq!(warmth_score(warmth, None), 0);
            assert_eq!(outerwear_warmth_adjustment(warmth, None), 0);
        }
        assert_eq!(warmth_score(Warmth::Heavy, Some(WeatherBand::Cold)), 3);
        assert_eq!(warmth_score(Warmth::Heavy, Some(WeatherBand::Hot)), -3);
        assert_eq!(outerwear_warmth_adjustment(Warmth::Heavy, Some(WeatherBand::Hot)), -5);
    }

    #[test]
    fn color_pairs_prefer_neutrals_then_monochrome() {
        let navy = piece("a", Category::Top, "Navy", Warmth::Light, Formality::Casual);
        let red = piece("b", Category::Bottom, "red", Warmth::Light, Formality::Casual);
        let red_again = piece("c", Category::Shoes, " RED ", Warmth::Light, Formality::Casual);
        let green = piece("d", Category::Shoes, "green", Warmth::Light, Formality::Casual);
        let bare = piece("e", Category::Shoes, "", Warmth::Light, Formality::Casual);

        assert_eq!(color_pair_score(&navy, &red), 2);
        assert_eq!(color_pair_score(&red, &red_again), 1);
        assert_eq!(color_pair_score(&red, &green), -2);
        assert_eq!(color_pair_score(&red, &bare), 0);
        assert_eq!(outfit_color_score(&red, &red_again, &green), 1 - 2 - 2);
    }

    #[test]
    fn base_score_sums_formality_warmth_and_color() {
        let scorer = OutfitScorer::new(OccasionBucket::Casual, Some(WeatherBand::Mild));
        let top = piece("top", Category::Top, "white", Warmth::Light, Formality::Casual);
        let bottom = piece("bottom", Category::Bottom, "navy", Warmth::Medium, Formality::Casual);
        let shoes = piece("shoes", Category::Shoes, "black", Warmth::Light, Formality::Smart);

        // formality 5 + 5 + 2, warmth 1 + 3 + 1, color 2 + 2 + 2
        assert_eq!(scorer.base_score(&top, &bottom, &shoes), 23.0);
    }

    #[test]
    fn outerwear_requires_bonus_above_one() {
        let scorer = OutfitScorer::new(OccasionBucket::Casual, Some(WeatherBand::Hot));
        let top = piece("top", Category::Top, "red", Warmth::Light, Formality::Casual);
        let bottom = piece("bottom", Category::Bottom, "green", Warmth::Light, Formality::Casual);
        let parka = piece("parka", Category::Outerwear, "blue", Warmth::Heavy, Formality::Casual);

        // 2.5 - 5 - 2 - 2
        assert_eq!(scorer.outerwear_bonus(&parka, &top, &bottom), -6.5);
        assert_eq!(scorer.best_outerwear(&[&parka], &top, &bottom), None);

        let cold = OutfitScorer::new(OccasionBucket::Casual, Some(WeatherBand::Cold));
        let coat = piece("coat", Category::Outerwear, "black", Warmth::Heavy, Formality::Smart);
        // 1 + 4 + 2 + 2
        assert_eq!(cold.best_outerwear(&[&parka, &coat], &top, &bottom), Some((&coat, 9.0)));
    }

    #[test]
    fn outerwear_exactly_one_is_omitted() {
        let scorer = OutfitScorer::new(OccasionBucket::Casual, None);
        let top = piece("top", Category::Top, "red", Warmth::Light, Formality::Casual);
        let bottom = piece("bottom", Category::Bottom, "red", Warmth::Light, Formality::Casual);
        let vest = piece("vest", Category::Outerwear, "green", Warmth::Light, Formality::Smart);

        // 1 + 0 - 2 - 2 = -3; a smart neutral one: 1 + 0 + 2 + 2 = 5
        assert_eq!(scorer.outerwear_bonus(&vest, &top, &bottom), -3.0);

        let shell = piece("shell", Category::Outerwear, "red", Warmth::Light, Formality::Business);
        // -1 + 0 + 1 + 1 = 1, not strictly above the threshold
        assert_eq!(scorer.outerwear_bonus(&shell, &top, &bottom), 1.0);
        assert_eq!(scorer.best_outerwear(&[&shell], &top, &bottom), None);
    }

    #[test]
    fn accessory_gets_casual_bonus_and_ties_keep_first() {
        let scorer = OutfitScorer::new(OccasionBucket::Casual, None);
        let top = piece("top", Category::Top, "white", Warmth::Light, Formality::Casual);
        let shoes = piece("shoes", Category::Shoes, "black", Warmth::Light, Formality::Casual);
        let cap = piece("cap", Category::Accessory, "red", Warmth::Light, Formality::Casual);
        let beanie =
            piece("beanie", Category::Accessory, "green", Warmth::Light, Formality::Casual);

        // 2.5 + 1 + 2 + 2
        assert_eq!(scorer.accessory_bonus(&cap, &top, &shoes), 7.5);
        assert_eq!(scorer.best_accessory(&[&cap, &beanie], &top, &shoes), Some((&cap, 7.5)));
    }

    #[test]
    fn accessory_with_zero_bonus_is_omitted() {
        let scorer = OutfitScorer::new(OccasionBucket::Interview, None);
        let top = piece("top", Category::Top, "red", Warmth::Light, Formality::Business);
        let shoes = piece("shoes", Category::Shoes, "green", Warmth::Light, Formality::Business);
        let pin = piece("pin", Category::Accessory, "", Warmth::Light, Formality::Casual);
        let watch = piece("watch", Category::Accessory, "", Warmth::Light, Formality::Smart);

        // -2 with no colors; smart gives 1.5
        assert_eq!(scorer.best_accessory(&[&pin], &top, &shoes), None);
        assert_eq!(scorer.best_accessory(&[&pin, &watch], &top, &shoes), Some((&watch, 1.5)));
    }
}
