use super::types::{OccasionBucket, OutfitItems, WeatherBand};

pub fn occasion_clause(occasion: OccasionBucket) -> &'static str {
    match occasion {
        OccasionBucket::Interview => "to keep the look business-leaning for interview settings",
        OccasionBucket::Date => "to balance smart and approachable pieces for a date",
        OccasionBucket::Casual => "to keep things casual and easy to wear",
    }
}

pub fn weather_clause(weather: Option<WeatherBand>, has_outerwear: bool) -> Option<&'static str> {
    match weather? {
        WeatherBand::Cold if has_outerwear => Some("with added outerwear for cold weather"),
        WeatherBand::Cold => Some("using warmer pieces for cold weather"),
        WeatherBand::Mild => Some("with medium warmth for mild weather"),
        WeatherBand::Hot => Some("with lighter pieces for hot weather"),
    }
}

/// One sentence describing why an outfit was picked.
pub fn explain_outfit(
    items: &OutfitItems<'_>,
    occasion: OccasionBucket,
    weather: Option<WeatherBand>,
    constraints_applied: bool,
) -> String {
    let mut parts = vec![
        format!("Built around {}, {}, and {}", items.top.name, items.bottom.name, items.shoes.name),
        occasion_clause(occasion).to_owned(),
    ];

    if let Some(clause) = weather_clause(weather, items.outerwear.is_some()) {
        parts.push(clause.to_owned());
    }

    if constraints_applied {
        parts.push("while respecting your constraints".to_owned());
    }

    format!("{}.", parts.join(" "))
}
