use super::types::{OccasionBucket, WeatherBand};
use crate::domain::normalize_text;

const COLD_WORDS: &[&str] = &["cold", "chilly", "winter"];
const HOT_WORDS: &[&str] = &["hot", "warm", "summer"];
const MILD_WORDS: &[&str] = &["mild", "cool"];

pub const COLD_MAX_C: f64 = 12.0;
pub const HOT_MIN_C: f64 = 24.0;

pub fn occasion_bucket(occasion: &str) -> OccasionBucket {
    let normalized = normalize_text(occasion);

    if normalized.contains("interview") {
        OccasionBucket::Interview
    } else if normalized.contains("date") {
        OccasionBucket::Date
    } else {
        OccasionBucket::Casual
    }
}

/// Temperature wins when finite; otherwise the first word list hit in the
/// weather text decides. `None` means weather does not influence scoring.
pub fn weather_band(temperature_c: Option<f64>, weather: Option<&str>) -> Option<WeatherBand> {
    if let Some(temperature) = temperature_c.filter(|value| value.is_finite()) {
        return Some(if temperature <= COLD_MAX_C {
            WeatherBand::Cold
        } else if temperature >= HOT_MIN_C {
            WeatherBand::Hot
        } else {
            WeatherBand::Mild
        });
    }

    let normalized = normalize_text(weather.unwrap_or_default());
    if normalized.is_empty() {
        return None;
    }

    [
        (COLD_WORDS, WeatherBand::Cold),
        (HOT_WORDS, WeatherBand::Hot),
        (MILD_WORDS, WeatherBand::Mild),
    ]
    .into_iter()
        .find(|(words, _)| words.iter().any(|word| normalized.contains(*word)))
        .map(|(_, band)| band)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn occasion_priority_is_interview_then_date() {
        assert_eq!(occasion_bucket("Job Interview"), OccasionBucket::Interview);
        assert_eq!(occasion_bucket("interview lunch date"), OccasionBucket::Interview);
        assert_eq!(occasion_bucket("  DATE night"), OccasionBucket::Date);
        assert_eq!(occasion_bucket("update meeting"), OccasionBucket::Date);
        assert_eq!(occasion_bucket("brunch"), OccasionBucket::Casual);
    }

    #[test]
    fn temperature_thresholds_are_inclusive() {
        assert_eq!(weather_band(Some(12.0), None), Some(WeatherBand::Cold));
        assert_eq!(weather_band(Some(12.5), None), Some(WeatherBand::Mild));
        assert_eq!(weather_band(Some(23.9), None), Some(WeatherBand::Mild));
        assert_eq!(weather_band(Some(24.0), None), Some(WeatherBand::Hot));
        assert_eq!(weather_band(Some(-5.0), None), Some(WeatherBand::Cold));
    }

    #[test]
    fn temperature_overrides_weather_text() {
        assert_eq!(weather_band(Some(30.0), Some("winter storm")), Some(WeatherBand::Hot));
    }

    #[test]
    fn non_finite_temperature_falls_back_to_text() {
        assert_eq!(weather_band(Some(f64::NAN), Some("Chilly")), Some(WeatherBand::Cold));
        assert_eq!(weather_band(Some(f64::INFINITY), None), None);
    }

    #[test]
    fn weather_word_lists_are_checked_in_order() {
        assert_eq!(weather_band(None, Some("warm but windy")), Some(WeatherBand::Hot));
        assert_eq!(weather_band(None, Some("cool summer evening")), Some(WeatherBand::Hot));
        assert_eq!(weather_band(None, Some("cold and cool")), Some(WeatherBand::Cold));
        assert_eq!(weather_band(None, Some("mild")), Some(WeatherBand::Mild));
        assert_eq!(weather_band(None, Some("rainy")), None);
        assert_eq!(weather_band(None, Some("   ")), None);
        assert_eq!(weather_band(None, None), None);
    }
}
