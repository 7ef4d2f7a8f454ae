//! Keyword-based constraint parsing and item exclusion.
//!
//! Free text such as "no hoodies, no white shoes" becomes a list of exclusion
//! rules. Each rule is an [`ItemPredicate`] so new phrasings can be added
//! without touching scoring.

use std::sync::LazyLock;

use regex::Regex;

use crate::domain::{normalize_text, Category, ClothingItem};

/// Colors recognized in `no <color> shoes`.
pub const SHOE_COLORS: &[&str] = &[
    "black", "white", "gray", "grey", "navy", "beige", "cream", "red", "blue", "green", "yellow",
    "orange", "purple", "pink", "brown",
];

/// Words captured by the generic `no <word>` pattern that are never banned terms.
pub const TERM_STOPWORDS: &[&str] =
    &["white", "black", "gray", "grey", "navy", "beige", "cream", "shoes", "shoe"];

static NO_HOODIES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?-u:\b)no\s+hoodies?(?-u:\b)").expect("valid regex"));
static NO_SNEAKERS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?-u:\b)no\s+sneakers?(?-u:\b)").expect("valid regex"));
static NO_JEANS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?-u:\b)no\s+jeans?(?-u:\b)").expect("valid regex"));
static NO_WHITE_SHOES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?-u:\b)no\s+white\s+shoes?(?-u:\b)").expect("valid regex"));
static NO_COLOR_SHOES: LazyLock<Regex> = LazyLock::new(|| {
    let pattern = format!(r"(?-u:\b)no\s+({})\s+shoes?(?-u:\b)", SHOE_COLORS.join("|"));
    Regex::new(&pattern).expect("valid regex")
});
static NO_TERM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?-u:\b)no\s+([a-z]{3,})(?-u:\b)").expect("valid regex"));

pub trait ItemPredicate {
    /// Returns true when `item` must be left out of every outfit.
    fn excludes(&self, item: &ClothingItem) -> bool;
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ExclusionRule {
    Hoodies,
    /// Shoes only.
    Sneakers,
    /// Matches denim as well.
    Jeans,
    /// Shoes only.
    WhiteShoes,
    /// Shoes carrying this color anywhere in their color list.
    ShoeColor(String),
    /// Substring of any descriptive field, any category.
    Term(String),
}

impl ExclusionRule {
    pub fn label(&self) -> String {
        match self {
            Self::Hoodies => "no hoodies".to_owned(),
            Self::Sneakers => "no sneakers".to_owned(),
            Self::Jeans => "no jeans".to_owned(),
            Self::WhiteShoes => "no white shoes".to_owned(),
            Self::ShoeColor(color) => format!("no {color} shoes"),
            Self::Term(term) => format!("no {term}"),
        }
    }
}

impl ItemPredicate for ExclusionRule {
    fn excludes(&self, item: &ClothingItem) -> bool {
        let is_shoes = item.category == Category::Shoes;
        match self {
            Self::Hoodies => item.search_text().contains("hoodie"),
            Self::Sneakers => is_shoes && item.search_text().contains("sneaker"),
            Self::Jeans => {
                let text = item.search_text();
                text.contains("jean") || text.contains("denim")
            }
            Self::WhiteShoes => is_shoes && item.has_color("white"),
            Self::ShoeColor(color) => is_shoes && item.has_color(color),
            Self::Term(term) => item.search_text().contains(term.as_str()),
        }
    }
}

/// Structured form of the request's `constraints` text.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ConstraintPolicy {
    pub rules: Vec<ExclusionRule>,
    /// Display labels, always in the order hoodies, white shoes, sneakers, jeans.
    pub applied: Vec<String>,
}

impl ConstraintPolicy {
    pub fn allows(&self, item: &ClothingItem) -> bool {
        !self.rules.iter().any(|rule| rule.excludes(item))
    }

    pub fn has_rule(&self, rule: &ExclusionRule) -> bool {
        self.rules.contains(rule)
    }
}

pub fn parse_constraints(raw: Option<&str>) -> ConstraintPolicy {
    let text = normalize_text(raw.unwrap_or_default());
    if text.is_empty() {
        return ConstraintPolicy::default();
    }

    let no_hoodies = NO_HOODIES.is_match(&text);
    let no_sneakers = NO_SNEAKERS.is_match(&text);
    let no_jeans = NO_JEANS.is_match(&text);
    let no_white_shoes = NO_WHITE_SHOES.is_match(&text);

    let mut rules = Vec::new();
    if no_hoodies {
        rules.push(ExclusionRule::Hoodies);
    }
    if no_sneakers {
        rules.push(ExclusionRule::Sneakers);
    }
    if no_jeans {
        rules.push(ExclusionRule::Jeans);
    }
    if no_white_shoes {
        rules.push(ExclusionRule::WhiteShoes);
    }

    for captures in NO_COLOR_SHOES.captures_iter(&text) {
        push_unique(&mut rules, ExclusionRule::ShoeColor(captures[1].to_owned()));
    }

    for captures in NO_TERM.captures_iter(&text) {
        let term = &captures[1];
        if !TERM_STOPWORDS.contains(&term) {
            push_unique(&mut rules, ExclusionRule::Term(term.to_owned()));
        }
    }

    let applied = [
        (no_hoodies, ExclusionRule::Hoodies),
        (no_white_shoes, ExclusionRule::WhiteShoes),
        (no_sneakers, ExclusionRule::Sneakers),
        (no_jeans, ExclusionRule::Jeans),
    ]
    .into_iter()
    .filter_map(|(present, rule)| present.then(|| rule.label()))
    .collect();

    ConstraintPolicy { rules, applied }
}

fn push_unique(rules: &mut Vec<ExclusionRule>, rule: ExclusionRule) {
    if !rules.contains(&rule) {
        rules.push(rule);
    }
}

/// Items the policy allows, in their original order.
pub fn filter_items<'a>(
    items: &'a [ClothingItem],
    policy: &ConstraintPolicy,
) -> Vec<&'a ClothingItem> {
    items.iter().filter(|item| policy.allows(item)).collect()
}
