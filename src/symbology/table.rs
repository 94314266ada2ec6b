//! Validated, ordered symbology table.

use super::{BandConfig, Colour, SymbologyEntry};
use crate::error::SymbologyError;

/// An ordered, contiguous list of symbology bands.
///
/// Construction validates that every band has `min < max` and that each band
/// starts exactly where the previous one ends, so any value inside the table's
/// domain matches at most one band. Tables are immutable once built.
#[derive(Debug, Clone, PartialEq)]
pub struct SymbologyTable {
    entries: Vec<SymbologyEntry>,
}

impl SymbologyTable {
    /// Validates and wraps a list of bands.
    pub fn new(entries: Vec<SymbologyEntry>) -> Result<Self, SymbologyError> {
        validate(&entries)?;
        Ok(Self { entries })
    }

    /// Wraps bands that are contiguous by construction (the built-in presets).
    pub(super) fn from_trusted(entries: Vec<SymbologyEntry>) -> Self {
        debug_assert!(validate(&entries).is_ok());
        Self { entries }
    }

    /// Builds a table from configured bands, checking each colour token.
    pub fn from_bands(bands: Vec<BandConfig>) -> Result<Self, SymbologyError> {
        let entries = bands
            .into_iter()
            .enumerate()
            .map(|(index, band)| {
                let Some(colour) = Colour::parse(&band.colour) else {
                    return Err(SymbologyError::InvalidColour {
                        index,
                        token: band.colour,
                    });
                };
                Ok(SymbologyEntry::new(band.label, colour, band.min_range, band.max_range))
            })
            .collect::<Result<Vec<_>, SymbologyError>>()?;

        Self::new(entries)
    }

    /// Finds the band for a value.
    ///
    /// Absent values, zero and NaN never match. Otherwise the first band with
    /// `min < value <= max` is returned. The lower bound is exclusive for every
    /// band, including the lowest, so a value equal to the table's global
    /// minimum (e.g. `0` for a `0 to 1` band) has no band.
    pub fn classify(&self, value: Option<f64>) -> Option<&SymbologyEntry> {
        let value = value?;
        if value == 0.0 || value.is_nan() {
            return None;
        }

        self.lookup(value)
    }

    /// The first band with `min < value <= max`, without treating zero as
    /// absent.
    pub fn lookup(&self, value: f64) -> Option<&SymbologyEntry> {
        self.entries.iter().find(|entry| entry.contains(value))
    }

    pub fn entries(&self) -> &[SymbologyEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false for a validated table.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The `(min, max]` span covered by the whole table.
    pub fn domain(&self) -> (f64, f64) {
        let min = self.entries.first().map_or(0.0, |e| e.min_range);
        let max = self.entries.last().map_or(0.0, |e| e.max_range);
        (min, max)
    }

    /// Label and colour pairs in band order, for legends.
    pub fn legend(&self) -> impl Iterator<Item = (&str, &Colour)> {
        self.entries.iter().map(|e| (e.label.as_str(), &e.colour))
    }

    /// Bands in their configuration form.
    pub fn to_bands(&self) -> Vec<BandConfig> {
        self.entries.iter().map(BandConfig::from).collect()
    }
}

fn validate(entries: &[SymbologyEntry]) -> Result<(), SymbologyError> {
    if entries.is_empty() {
        return Err(SymbologyError::Empty);
    }

    for (index, entry) in entries.iter().enumerate() {
        if !entry.min_range.is_finite() || !entry.max_range.is_finite() {
            return Err(SymbologyError::NonFiniteRange {
                index,
                label: entry.label.clone(),
            });
        }
        if entry.min_range >= entry.max_range {
            return Err(SymbologyError::InvertedRange {
                index,
                label: entry.label.clone(),
                min: entry.min_range,
                max: entry.max_range,
            });
        }
    }

    for (index, pair) in entries.windows(2).enumerate() {
        let (prev, next) = (&pair[0], &pair[1]);

        if next.min_range < prev.min_range {
            return Err(SymbologyError::Unordered {
                index,
                prev_min: prev.min_range,
                next_min: next.min_range,
            });
        }
        if next.min_range > prev.max_range {
            return Err(SymbologyError::Gap {
                index,
                prev_max: prev.max_range,
                next_min: next.min_range,
            });
        }
        if next.min_range < prev.max_range {
            return Err(SymbologyError::Overlap {
                index,
                prev_max: prev.max_range,
                next_min: next.min_range,
            });
        }
    }

    Ok(())
}
