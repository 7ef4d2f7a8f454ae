use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ClothingItemId(pub String);

impl fmt::Display for ClothingItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Top,
    Bottom,
    Shoes,
    Outerwear,
    Accessory,
}

impl Category {
    pub const ALL: [Category; 5] =
        [Self::Top, Self::Bottom, Self::Shoes, Self::Outerwear, Self::Accessory];

    /// Categories every outfit must fill, in reporting order.
    pub const REQUIRED: [Category; 3] = [Self::Top, Self::Bottom, Self::Shoes];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Bottom => "bottom",
            Self::Shoes => "shoes",
            Self::Outerwear => "outerwear",
            Self::Accessory => "accessory",
        }
    }

    pub fn is_required(&self) -> bool {
        Self::REQUIRED.contains(self)
    }
}

impl FromStr for Category {
    type Err = DomainError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "top" => Ok(Self::Top),
            "bottom" => Ok(Self::Bottom),
            "shoes" => Ok(Self::Shoes),
            "outerwear" => Ok(Self::Outerwear),
            "accessory" => Ok(Self::Accessory),
            other => {
                Err(DomainError::InvalidEnumValue { field: "category", value: other.to_owned() })
            }
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Warmth {
    Light,
    Medium,
    Heavy,
}

impl Warmth {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Medium => "medium",
            Self::Heavy => "heavy",
        }
    }
}

impl FromStr for Warmth {
    type Err = DomainError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "light" => Ok(Self::Light),
            "medium" => Ok(Self::Medium),
            "heavy" => Ok(Self::Heavy),
            other => {
                Err(DomainError::InvalidEnumValue { field: "warmth", value: other.to_owned() })
            }
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Formality {
    Casual,
    Smart,
    Business,
}

impl Formality {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Casual => "casual",
            Self::Smart => "smart",
            Self::Business => "business",
        }
    }
}

impl FromStr for Formality {
    type Err = DomainError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "casual" => Ok(Self::Casual),
            "smart" => Ok(Self::Smart),
            "business" => Ok(Self::Business),
            other => {
                Err(DomainError::InvalidEnumValue { field: "formality", value: other.to_owned() })
            }
        }
    }
}

/// A validated closet entry as the recommendation engine consumes it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ClothingItem {
    pub id: ClothingItemId,
    pub owner_id: String,
    pub name: String,
    pub brand: Option<String>,
    pub subtype: Option<String>,
    pub category: Category,
    pub colors: Vec<String>,
    pub material: Option<String>,
    pub warmth: Warmth,
    pub formality: Formality,
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo_path: Option<String>,
}

impl ClothingItem {
    /// First listed color, trimmed and lowercased. `None` when absent or blank.
    pub fn dominant_color(&self) -> Option<String> {
        self.colors
            .first()
            .map(|color| normalize_text(color))
            .filter(|color| !color.is_empty())
    }

    /// Lowercased text searched by keyword constraints.
    pub fn search_text(&self) -> String {
        [
            self.name.as_str(),
            self.brand.as_deref().unwrap_or_default(),
            self.subtype.as_deref().unwrap_or_default(),
            self.category.as_str(),
            self.material.as_deref().unwrap_or_default(),
            self.notes.as_deref().unwrap_or_default(),
            &self.colors.join(" "),
        ]
        .join(" ")
        .to_lowercase()
    }

    pub fn has_color(&self, color: &str) -> bool {
        self.colors.iter().any(|candidate| normalize_text(candidate) == color)
    }
}

pub fn normalize_text(value: &str) -> String {
    value.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(colors: &[&str]) -> ClothingItem {
        ClothingItem {
            id: ClothingItemId("item-1".to_owned()),
            owner_id: "user-1".to_owned(),
            name: "Oxford Shirt".to_owned(),
            brand: Some("Uniqlo".to_owned()),
            subtype: None,
            category: Category::Top,
            colors: colors.iter().map(|color| (*color).to_owned()).collect(),
            material: Some("Cotton".to_owned()),
            warmth: Warmth::Light,
            formality: Formality::Smart,
            notes: None,
            photo_path: None,
        }
    }

    #[test]
    fn enum_values_parse_only_known_members() {
        assert_eq!("shoes".parse::<Category>(), Ok(Category::Shoes));
        assert_eq!("heavy".parse::<Warmth>(), Ok(Warmth::Heavy));
        assert_eq!("business".parse::<Formality>(), Ok(Formality::Business));

        assert!(matches!(
            "Shoes".parse::<Category>(),
            Err(DomainError::InvalidEnumValue { field: "category", .. })
        ));
        assert!("formal".parse::<Formality>().is_err());
        assert!("warm".parse::<Warmth>().is_err());
    }

    #[test]
    fn dominant_color_is_first_normalized_entry() {
        assert_eq!(item(&[" Navy ", "white"]).dominant_color().as_deref(), Some("navy"));
        assert_eq!(item(&[]).dominant_color(), None);
        assert_eq!(item(&["  "]).dominant_color(), None);
    }

    #[test]
    fn search_text_covers_descriptive_fields() {
        let text = item(&["Light Blue"]).search_text();
        assert!(text.contains("oxford shirt"));
        assert!(text.contains("uniqlo"));
        assert!(text.contains("top"));
        assert!(text.contains("cotton"));
        assert!(text.contains("light blue"));
    }
}
