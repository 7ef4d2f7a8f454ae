//! Outfit suggestion engine

use std::cmp::Ordering;

use super::classify::{occasion_bucket, weather_band};
use super::constraints::{filter_items, parse_constraints};
use super::explanation::explain_outfit;
use super::scoring::OutfitScorer;
use super::types::*;
use super::{LIMITATIONS, MAX_SUGGESTIONS};
use crate::domain::{Category, ClothingItem};

/// Rank outfits from an owner's closet for one request.
///
/// Items must already be restricted to a single owner and carry valid enum
/// values. A closet that cannot fill top, bottom and shoes after constraint
/// filtering yields no suggestions and lists the missing categories instead.
pub fn suggest_outfits<'a>(
    items: &'a [ClothingItem],
    request: &OutfitRequest,
) -> OutfitSuggestionResult<'a> {
    let policy = parse_constraints(request.constraints.as_deref());
    let scorer = OutfitScorer::new(
        occasion_bucket(&request.occasion),
        weather_band(request.temperature_c, request.weather.as_deref()),
    );
    let filtered = filter_items(items, &policy);

    let missing = missing_required_categories(&filtered);
    if !missing.is_empty() {
        return OutfitSuggestionResult {
            suggestions: Vec::new(),
            missing_required_categories: missing,
            constraints_applied: policy.applied,
            limitations: LIMITATIONS.to_owned(),
        };
    }

    let tops = by_category(&filtered, Category::Top);
    let bottoms = by_category(&filtered, Category::Bottom);
    let shoes = by_category(&filtered, Category::Shoes);
    let outerwear = by_category(&filtered, Category::Outerwear);
    let accessories = by_category(&filtered, Category::Accessory);

    let mut ranked = Vec::with_capacity(tops.len() * bottoms.len() * shoes.len());
    for &top in &tops {
        for &bottom in &bottoms {
            for &shoe in &shoes {
                let mut score = scorer.base_score(top, bottom, shoe);

                let chosen_outerwear = scorer.best_outerwear(&outerwear, top, bottom);
                if let Some((_, bonus)) = chosen_outerwear {
                    score += bonus;
                }

                let chosen_accessory = scorer.best_accessory(&accessories, top, shoe);
                if let Some((_, bonus)) = chosen_accessory {
                    score += bonus;
                }

                let items = OutfitItems {
                    top,
                    bottom,
                    shoes: shoe,
                    outerwear: chosen_outerwear.map(|(item, _)| item),
                    accessory: chosen_accessory.map(|(item, _)| item),
                };
                ranked.push(RankedOutfit { key: items.ranking_key(), score, items });
            }
        }
    }

    ranked.sort_by(RankedOutfit::ranking_order);
    ranked.truncate(MAX_SUGGESTIONS);

    let constraints_applied = !policy.applied.is_empty();
    let suggestions = ranked
        .into_iter()
        .map(|outfit| OutfitSuggestion {
            score: outfit.score,
            explanation: explain_outfit(
                &outfit.items,
                scorer.occasion(),
                scorer.weather(),
                constraints_applied,
            ),
            items: outfit.items,
        })
        .collect();

    OutfitSuggestionResult {
        suggestions,
        missing_required_categories: Vec::new(),
        constraints_applied: policy.applied,
        limitations: LIMITATIONS.to_owned(),
    }
}

struct RankedOutfit<'a> {
    key: String,
    score: f64,
    items: OutfitItems<'a>,
}

impl RankedOutfit<'_> {
    /// Score descending, then ranking key ascending.
    fn ranking_order(a: &Self, b: &Self) -> Ordering {
        b.score.total_cmp(&a.score).then_with(|| a.key.cmp(&b.key))
    }
}

fn by_category<'a>(items: &[&'a ClothingItem], category: Category) -> Vec<&'a ClothingItem> {
    items.iter().copied().filter(|item| item.category == category).collect()
}

/// Required categories with no eligible item, in top, bottom, shoes order.
pub fn missing_required_categories(items: &[&ClothingItem]) -> Vec<Category> {
    Category::REQUIRED
        .into_iter()
        .filter(|category| !items.iter().any(|item| item.category == *category))
        .collect()
}
