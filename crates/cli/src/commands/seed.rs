use std::collections::HashSet;

use closet_core::domain::{Category, Formality, RawClothingItem, Warmth};
use serde_json::{json, Value};
use uuid::Uuid;

use crate::commands::{ClosetArgs, CommandResult};
use crate::snapshot::ClosetSnapshot;

const COMMAND: &str = "seed";

/// One entry of the demo wardrobe.
#[derive(Clone, Copy, Debug)]
pub struct SeedItem {
    pub category: Category,
    pub colors: &'static [&'static str],
    pub material: &'static str,
    pub warmth: Warmth,
    pub formality: Formality,
    pub notes: &'static str,
}

#[rustfmt::skip]
pub const DEMO_WARDROBE: &[SeedItem] = &[
    SeedItem { category: Category::Top, colors: &["white"], material: "cotton", warmth: Warmth::Light, formality: Formality::Casual, notes: "plain white tee" },
    SeedItem { category: Category::Top, colors: &["black"], material: "cotton", warmth: Warmth::Light, formality: Formality::Casual, notes: "plain black tee" },
    SeedItem { category: Category::Top, colors: &["gray"], material: "fleece", warmth: Warmth::Heavy, formality: Formality::Casual, notes: "gray hoodie" },
    SeedItem { category: Category::Top, colors: &["navy"], material: "cotton", warmth: Warmth::Medium, formality: Formality::Casual, notes: "navy crewneck" },
    SeedItem { category: Category::Top, colors: &["light blue"], material: "cotton", warmth: Warmth::Light, formality: Formality::Smart, notes: "light blue button-up" },
    SeedItem { category: Category::Top, colors: &["heather gray"], material: "polyester blend", warmth: Warmth::Medium, formality: Formality::Smart, notes: "charcoal quarter zip" },
    SeedItem { category: Category::Bottom, colors: &["dark blue"], material: "denim", warmth: Warmth::Medium, formality: Formality::Casual, notes: "dark jeans" },
    SeedItem { category: Category::Bottom, colors: &["light blue"], material: "denim", warmth: Warmth::Light, formality: Formality::Casual, notes: "light jeans" },
    SeedItem { category: Category::Bottom, colors: &["black"], material: "wool blend", warmth: Warmth::Medium, formality: Formality::Business, notes: "black trousers" },
    SeedItem { category: Category::Bottom, colors: &["gray"], material: "cotton fleece", warmth: Warmth::Medium, formality: Formality::Casual, notes: "gray sweats" },
    SeedItem { category: Category::Outerwear, colors: &["blue"], material: "denim", warmth: Warmth::Medium, formality: Formality::Casual, notes: "denim jacket" },
    SeedItem { category: Category::Outerwear, colors: &["black"], material: "nylon", warmth: Warmth::Heavy, formality: Formality::Casual, notes: "black puffer jacket" },
    SeedItem { category: Category::Shoes, colors: &["white"], material: "leather", warmth: Warmth::Light, formality: Formality::Smart, notes: "white sneakers" },
    SeedItem { category: Category::Shoes, colors: &["black"], material: "mesh", warmth: Warmth::Light, formality: Formality::Casual, notes: "black running shoes" },
    SeedItem { category: Category::Accessory, colors: &["silver", "black"], material: "stainless steel", warmth: Warmth::Light, formality: Formality::Smart, notes: "silver watch" },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedReport {
    pub inserted: usize,
    pub skipped: usize,
}

pub fn run(args: ClosetArgs) -> CommandResult {
    let config = match args.load_config(COMMAND) {
        Ok(config) => config,
        Err(result) => return result,
    };
    let path = &config.closet.path;
    let owner_id = &config.closet.owner_id;

    let mut snapshot = match ClosetSnapshot::load_or_default(path) {
        Ok(snapshot) => snapshot,
        Err(error) => {
            return CommandResult::failure(COMMAND, "snapshot_unavailable", error.to_string(), 3)
        }
    };

    let report = merge_seed(&mut snapshot, owner_id, DEMO_WARDROBE);

    if report.inserted > 0 {
        if let Err(error) = snapshot.save(path) {
            return CommandResult::failure(COMMAND, "snapshot_write", error.to_string(), 3);
        }
    }

    tracing::info!(
        event_name = "cli.seed.completed",
        correlation_id = %Uuid::new_v4(),
        owner_id = %owner_id,
        inserted = report.inserted,
        skipped = report.skipped,
        "demo wardrobe merged"
    );

    let message = if report.inserted == 0 {
        format!("seed complete: no new items needed for {owner_id}")
    } else {
        format!("seed complete: inserted {} closet items for {owner_id}", report.inserted)
    };

    CommandResult::success_with_data(
        COMMAND,
        message,
        Some(json!({
            "closet_path": path.display().to_string(),
            "owner_id": owner_id,
            "inserted": report.inserted,
            "skipped": report.skipped,
        })),
    )
}

/// Append every seed item whose identity key is not already present among
/// `owner_id`'s rows. Other owners' rows never block an insert.
pub fn merge_seed(snapshot: &mut ClosetSnapshot, owner_id: &str, seed: &[SeedItem]) -> SeedReport {
    let mut existing: HashSet<String> = snapshot
        .items
        .iter()
        .filter(|row| row.owner_id == owner_id)
        .map(|row| {
            let colors = string_colors(row.colors.as_deref().unwrap_or_default());
            item_key(&row.category, row.material.as_deref(), &colors, row.notes.as_deref())
        })
        .collect();

    let mut report = SeedReport { inserted: 0, skipped: 0 };
    for item in seed {
        let colors: Vec<String> = item.colors.iter().map(|color| (*color).to_string()).collect();
        let key = item_key(item.category.as_str(), Some(item.material), &colors, Some(item.notes));
        if !existing.insert(key) {
            report.skipped += 1;
            continue;
        }

        snapshot.items.push(RawClothingItem {
            id: Uuid::new_v4().to_string(),
            owner_id: owner_id.to_string(),
            category: item.category.as_str().to_string(),
            colors: Some(colors.into_iter().map(Value::String).collect()),
            material: Some(item.material.to_string()),
            warmth: item.warmth.as_str().to_string(),
            formality: item.formality.as_str().to_string(),
            notes: Some(item.notes.to_string()),
            ..RawClothingItem::default()
        });
        report.inserted += 1;
    }

    report
}

fn string_colors(values: &[Value]) -> Vec<String> {
    values.iter().filter_map(|value| value.as_str().map(str::to_string)).collect()
}

/// Category, material, sorted colors and notes, all trimmed and lowercased.
pub fn item_key(
    category: &str,
    material: Option<&str>,
    colors: &[String],
    notes: Option<&str>,
) -> String {
    let mut colors: Vec<String> = colors.iter().map(|color| color.trim().to_lowercase()).collect();
    colors.sort();

    [
        category.trim().to_lowercase(),
        material.unwrap_or_default().trim().to_lowercase(),
        colors.join("|"),
        notes.unwrap_or_default().trim().to_lowercase(),
    ]
    .join("::")
}

#[cfg(test)]
mod tests {
    use closet_core::domain::normalize_closet;
    use serde_json::json;

    use super::*;

    #[test]
    fn item_key_ignores_case_whitespace_and_color_order() {
        let a = item_key(
            "Accessory",
            Some(" Stainless Steel"),
            &["Silver".to_string(), "black ".to_string()],
            Some("silver watch"),
        );
        let b = item_key(
            "accessory",
            Some("stainless steel"),
            &["black".to_string(), "silver".to_string()],
            Some("Silver Watch "),
        );

        assert_eq!(a, b);
        assert_eq!(a, "accessory::stainless steel::black|silver::silver watch");
    }

    #[test]
    fn merge_into_empty_closet_inserts_whole_wardrobe() {
        let mut snapshot = ClosetSnapshot::default();

        let report = merge_seed(&mut snapshot, "user-1", DEMO_WARDROBE);

        assert_eq!(report, SeedReport { inserted: DEMO_WARDROBE.len(), skipped: 0 });
        let closet = normalize_closet(snapshot.items, "user-1");
        assert_eq!(closet.items.len(), DEMO_WARDROBE.len());
        assert!(closet.skipped.is_empty());
        assert_eq!(closet.items[0].name, "white top");
    }

    #[test]
    fn merge_is_idempotent_per_owner() {
        let mut snapshot = ClosetSnapshot::default();
        merge_seed(&mut snapshot, "user-1", DEMO_WARDROBE);

        let again = merge_seed(&mut snapshot, "user-1", DEMO_WARDROBE);
        assert_eq!(again, SeedReport { inserted: 0, skipped: DEMO_WARDROBE.len() });

        let other = merge_seed(&mut snapshot, "user-2", DEMO_WARDROBE);
        assert_eq!(other.inserted, DEMO_WARDROBE.len());
    }

    #[test]
    fn existing_matching_row_is_skipped() {
        let mut snapshot = ClosetSnapshot {
            items: vec![RawClothingItem {
                id: "mine".to_string(),
                owner_id: "user-1".to_string(),
                category: "top".to_string(),
                colors: Some(vec![json!("WHITE")]),
                material: Some("Cotton".to_string()),
                warmth: "light".to_string(),
                formality: "casual".to_string(),
                notes: Some("Plain white tee".to_string()),
                ..RawClothingItem::default()
            }],
        };

        let report = merge_seed(&mut snapshot, "user-1", DEMO_WARDROBE);

        assert_eq!(report.skipped, 1);
        assert_eq!(report.inserted, DEMO_WARDROBE.len() - 1);
    }
}
