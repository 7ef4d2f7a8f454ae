//! Types for the outfit recommendation engine

use serde::{Deserialize, Serialize};

use crate::domain::{Category, ClothingItem};
use crate::errors::RequestError;

/// Request for outfit suggestions
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutfitRequest {
    /// Free-text occasion, e.g. "job interview" or "dinner date"
    pub occasion: String,
    /// Reserved; not used in scoring yet
    #[serde(default)]
    pub vibe: Option<String>,
    /// Celsius. Takes precedence over `weather` when finite
    #[serde(default)]
    pub temperature_c: Option<f64>,
    /// Free-text weather, consulted only without a temperature
    #[serde(default)]
    pub weather: Option<String>,
    /// Natural language exclusions such as "no hoodies, no white shoes"
    #[serde(default)]
    pub constraints: Option<String>,
}

impl OutfitRequest {
    /// Create a new request for an occasion
    pub fn new(occasion: impl Into<String>) -> Self {
        Self { occasion: occasion.into(), ..Self::default() }
    }

    pub fn with_temperature(mut self, temperature_c: f64) -> Self {
        self.temperature_c = Some(temperature_c);
        self
    }

    pub fn with_weather(mut self, weather: impl Into<String>) -> Self {
        self.weather = Some(weather.into());
        self
    }

    pub fn with_constraints(mut self, constraints: impl Into<String>) -> Self {
        self.constraints = Some(constraints.into());
        self
    }

    /// Build a request from raw form fields.
    ///
    /// Every field is trimmed and blank optional fields become `None`. The
    /// occasion is mandatory and a non-blank temperature must parse to a
    /// finite number.
    pub fn from_form(
        occasion: &str,
        vibe: Option<&str>,
        weather: Option<&str>,
        constraints: Option<&str>,
        temperature: Option<&str>,
    ) -> Result<Self, RequestError> {
        let occasion = occasion.trim();
        if occasion.is_empty() {
            return Err(RequestError::MissingOccasion);
        }

        let temperature_c = match non_blank(temperature) {
            Some(raw) => match raw.parse::<f64>() {
                Ok(value) if value.is_finite() => Some(value),
                _ => return Err(RequestError::InvalidTemperature(raw)),
            },
            None => None,
        };

        Ok(Self {
            occasion: occasion.to_owned(),
            vibe: non_blank(vibe),
            temperature_c,
            weather: non_blank(weather),
            constraints: non_blank(constraints),
        })
    }
}

fn non_blank(value: Option<&str>) -> Option<String> {
    value.map(str::trim).filter(|value| !value.is_empty()).map(str::to_owned)
}

/// Coarse occasion classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OccasionBucket {
    Interview,
    Date,
    Casual,
}

/// Coarse weather classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeatherBand {
    Cold,
    Mild,
    Hot,
}

/// The pieces making up one suggested outfit
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OutfitItems<'a> {
    pub top: &'a ClothingItem,
    pub bottom: &'a ClothingItem,
    pub shoes: &'a ClothingItem,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outerwear: Option<&'a ClothingItem>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accessory: Option<&'a ClothingItem>,
}

impl OutfitItems<'_> {
    /// Identity used for deterministic tie-breaking between equal scores.
    pub fn ranking_key(&self) -> String {
        format!("{}-{}-{}", self.top.id, self.bottom.id, self.shoes.id)
    }
}

/// A scored outfit with its human-readable explanation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OutfitSuggestion<'a> {
    pub score: f64,
    pub explanation: String,
    pub items: OutfitItems<'a>,
}

/// Everything the engine reports back for one request
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OutfitSuggestionResult<'a> {
    pub suggestions: Vec<OutfitSuggestion<'a>>,
    pub missing_required_categories: Vec<Category>,
    pub constraints_applied: Vec<String>,
    pub limitations: String,
}

impl OutfitSuggestionResult<'_> {
    pub fn is_insufficient_closet(&self) -> bool {
        !self.missing_required_categories.is_empty()
    }
}
