//! Normalization of loosely typed closet rows into engine-ready items.
//!
//! Rows come from an external store where enum columns are plain strings and
//! optional fields may be missing. Rows belonging to another owner or carrying
//! an unknown category/warmth/formality never reach the recommendation engine.

use serde::{Deserialize, Serialize};

use super::clothing::{Category, ClothingItem, ClothingItemId, Formality, Warmth};
use crate::errors::DomainError;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RawClothingItem {
    pub id: String,
    pub owner_id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub brand: Option<String>,
    #[serde(default)]
    pub subtype: Option<String>,
    pub category: String,
    #[serde(default)]
    pub colors: Option<Vec<serde_json::Value>>,
    #[serde(default)]
    pub material: Option<String>,
    pub warmth: String,
    pub formality: String,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub photo_path: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SkippedRow {
    pub id: String,
    pub reason: String,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct NormalizedCloset {
    pub items: Vec<ClothingItem>,
    pub skipped: Vec<SkippedRow>,
    /// Rows owned by someone else. Dropped silently, only counted.
    pub foreign_rows: usize,
}

impl RawClothingItem {
    pub fn into_item(self) -> Result<ClothingItem, DomainError> {
        if self.id.trim().is_empty() {
            return Err(DomainError::InvariantViolation(
                "clothing item id must not be blank".to_owned(),
            ));
        }

        let category = self.category.parse::<Category>()?;
        let warmth = self.warmth.parse::<Warmth>()?;
        let formality = self.formality.parse::<Formality>()?;

        let colors: Vec<String> = self
            .colors
            .unwrap_or_default()
            .into_iter()
            .filter_map(|value| value.as_str().map(str::to_owned))
            .collect();

        let name = match self.name.as_deref().map(str::trim) {
            Some(name) if !name.is_empty() => name.to_owned(),
            _ => fallback_name(
                colors.first().map(String::as_str),
                self.subtype.as_deref(),
                category,
            ),
        };

        Ok(ClothingItem {
            id: ClothingItemId(self.id),
            owner_id: self.owner_id,
            name,
            brand: self.brand,
            subtype: self.subtype,
            category,
            colors,
            material: self.material,
            warmth,
            formality,
            notes: self.notes,
            photo_path: self.photo_path,
        })
    }
}

impl TryFrom<RawClothingItem> for ClothingItem {
    type Error = DomainError;

    fn try_from(row: RawClothingItem) -> Result<Self, Self::Error> {
        row.into_item()
    }
}

fn fallback_name(first_color: Option<&str>, subtype: Option<&str>, category: Category) -> String {
    let noun = subtype.unwrap_or(category.as_str());
    format!("{} {}", first_color.unwrap_or_default(), noun).trim().to_owned()
}

/// Keeps only `owner_id`'s rows with valid enum values, preserving input order.
pub fn normalize_closet(rows: Vec<RawClothingItem>, owner_id: &str) -> NormalizedCloset {
    let mut closet = NormalizedCloset::default();

    for row in rows {
        if row.owner_id != owner_id {
            closet.foreign_rows += 1;
            continue;
        }

        let id = row.id.clone();
        match ClothingItem::try_from(row) {
            Ok(item) => closet.items.push(item),
            Err(error) => closet.skipped.push(SkippedRow { id, reason: error.to_string() }),
        }
    }

    closet
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn row(id: &str, owner: &str, category: &str) -> RawClothingItem {
        RawClothingItem {
            id: id.to_owned(),
            owner_id: owner.to_owned(),
            category: category.to_owned(),
            warmth: "medium".to_owned(),
            formality: "casual".to_owned(),
            colors: Some(vec![json!("black")]),
            ..RawClothingItem::default()
        }
    }

    #[test]
    fn drops_foreign_and_invalid_rows() {
        let closet = normalize_closet(
            vec![row("a", "user-1", "top"), row("b", "user-2", "top"), row("c", "user-1", "hat")],
            "user-1",
        );

        assert_eq!(closet.items.len(), 1);
        assert_eq!(closet.items[0].id.0, "a");
        assert_eq!(closet.foreign_rows, 1);
        assert_eq!(closet.skipped.len(), 1);
        assert_eq!(closet.skipped[0].id, "c");
        assert!(closet.skipped[0].reason.contains("category"));
    }

    #[test]
    fn blank_name_falls_back_to_color_and_subtype() {
        let mut with_subtype = row("a", "user-1", "shoes");
        with_subtype.name = Some("   ".to_owned());
        with_subtype.subtype = Some("loafers".to_owned());
        assert_eq!(with_subtype.into_item().map(|item| item.name), Ok("black loafers".to_owned()));

        let mut bare = row("b", "user-1", "bottom");
        bare.colors = None;
        assert_eq!(bare.into_item().map(|item| item.name), Ok("bottom".to_owned()));
    }

    #[test]
    fn blank_id_is_rejected() {
        let closet = normalize_closet(vec![row(" ", "user-1", "top")], "user-1");

        assert!(closet.items.is_empty());
        assert_eq!(closet.skipped.len(), 1);
        assert!(closet.skipped[0].reason.contains("id must not be blank"));
    }

    #[test]
    fn non_string_colors_are_discarded() {
        let mut mixed = row("a", "user-1", "top");
        mixed.colors = Some(vec![json!(7), json!("navy"), json!(null)]);

        let item = mixed.into_item().expect("valid row");
        assert_eq!(item.colors, vec!["navy".to_owned()]);
    }
}
