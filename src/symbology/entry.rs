//! A single symbology band.

use super::Colour;
use serde::{Deserialize, Serialize};

/// One `(minRange, maxRange] -> colour` rule.
///
/// Field names serialize the way band lists are written in configuration
/// (`label`, `colour`, `minRange`, `maxRange`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SymbologyEntry {
    /// Display-only label, e.g. `"2 to 3"`.
    pub label: String,
    pub colour: Colour,
    /// Exclusive lower bound.
    pub min_range: f64,
    /// Inclusive upper bound.
    pub max_range: f64,
}

impl SymbologyEntry {
    pub fn new(label: impl Into<String>, colour: Colour, min_range: f64, max_range: f64) -> Self {
        Self {
            label: label.into(),
            colour,
            min_range,
            max_range,
        }
    }

    /// Returns true if `value` falls in `(min_range, max_range]`.
    pub fn contains(&self, value: f64) -> bool {
        value <= self.max_range && value > self.min_range
    }
}

/// A band as written in configuration, before its colour token is checked.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BandConfig {
    pub label: String,
    pub colour: String,
    pub min_range: f64,
    pub max_range: f64,
}

impl From<&SymbologyEntry> for BandConfig {
    fn from(entry: &SymbologyEntry) -> Self {
        Self {
            label: entry.label.clone(),
            colour: entry.colour.token().to_string(),
            min_range: entry.min_range,
            max_range: entry.max_range,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn band(min: f64, max: f64) -> SymbologyEntry {
        SymbologyEntry::new("band", Colour::from_rgb(0, 0, 0), min, max)
    }

    #[test]
    fn test_contains_is_upper_inclusive_lower_exclusive() {
        let entry = band(2.0, 3.0);
        assert!(entry.contains(3.0));
        assert!(entry.contains(2.5));
        assert!(!entry.contains(2.0));
        assert!(!entry.contains(3.000001));
    }

    #[test]
    fn test_contains_rejects_nan() {
        assert!(!band(0.0, 1.0).contains(f64::NAN));
    }

    #[test]
    fn test_serializes_with_config_field_names() {
        let entry = SymbologyEntry::new("0 to 1", Colour::parse("#7b3294").unwrap(), 0.0, 1.0);
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["label"], "0 to 1");
        assert_eq!(json["colour"], "#7b3294");
        assert_eq!(json["minRange"], 0.0);
        assert_eq!(json["maxRange"], 1.0);
    }
}
