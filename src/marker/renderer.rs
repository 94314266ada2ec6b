//! Feature-to-marker conversion.

use super::shell::{
    VisualMarker, VisualShell, ICON_ANCHOR, ICON_SIZE, MARKER_CLASS, PULSE_CLASS, UNKNOWN_CLASS,
};
use super::{DelaySource, RandomDelay};
use crate::error::RenderError;
use crate::geo::PointFeature;
use crate::symbology::{Colour, SymbologyTable};
use geo_types::Coord;

/// Pulse delays are drawn from `[0, PULSE_DELAY_RANGE_MS)`.
pub const PULSE_DELAY_RANGE_MS: u32 = 1000;

/// Grey used for markers whose value has no band.
pub const UNKNOWN_COLOUR: (u8, u8, u8) = (0x9e, 0x9e, 0x9e);

/// Builds one styled, individually delayed marker per feature.
///
/// The feature id is the value that gets classified. The table is only read;
/// the delay source is the only state that changes between calls.
pub struct MarkerRenderer<'t, D = RandomDelay> {
    table: &'t SymbologyTable,
    delays: D,
}

impl<'t> MarkerRenderer<'t, RandomDelay> {
    /// Renderer with unseeded random delays.
    pub fn with_random_delays(table: &'t SymbologyTable) -> Self {
        Self::new(table, RandomDelay)
    }
}

impl<'t, D: DelaySource> MarkerRenderer<'t, D> {
    pub fn new(table: &'t SymbologyTable, delays: D) -> Self {
        Self { table, delays }
    }

    pub fn table(&self) -> &SymbologyTable {
        self.table
    }

    /// Styles a feature as a pulsing marker at `position`.
    ///
    /// Fails with `NoSymbologyMatch` when the id has no band; there is no
    /// fallback colour.
    pub fn render_point(
        &mut self,
        feature: &PointFeature,
        position: Coord<f64>,
    ) -> Result<VisualMarker, RenderError> {
        let entry = match feature.id {
            Some(value) if feature.has_text_id() => self.table.lookup(value),
            id => self.table.classify(id),
        };
        let entry = entry.ok_or(RenderError::NoSymbologyMatch {
            feature_id: feature.id,
        })?;

        let delay = self
            .delays
            .next_delay_ms(PULSE_DELAY_RANGE_MS)
            .min(PULSE_DELAY_RANGE_MS - 1);

        let icon = VisualShell {
            text: feature.label(),
            classes: vec![MARKER_CLASS, PULSE_CLASS],
            border_colour: entry.colour.clone(),
            fill_colour: entry.colour.clone(),
            animation_delay_ms: delay,
            icon_size: ICON_SIZE,
            icon_anchor: ICON_ANCHOR,
        };

        Ok(VisualMarker {
            feature_id: feature.id,
            position,
            band: Some(entry.label.clone()),
            icon,
        })
    }

    /// Styles a feature at its own position.
    pub fn render_feature(&mut self, feature: &PointFeature) -> Result<VisualMarker, RenderError> {
        self.render_point(feature, feature.position)
    }

    /// The static grey marker shown in place of an unclassifiable feature.
    pub fn render_unknown(&self, feature: &PointFeature, position: Coord<f64>) -> VisualMarker {
        let (r, g, b) = UNKNOWN_COLOUR;
        let colour = Colour::from_rgb(r, g, b);
        let mut text = feature.label();
        if text.is_empty() {
            text.push('?');
        }

        VisualMarker {
            feature_id: feature.id,
            position,
            band: None,
            icon: VisualShell {
                text,
                classes: vec![MARKER_CLASS, UNKNOWN_CLASS],
                border_colour: colour.clone(),
                fill_colour: colour,
                animation_delay_ms: 0,
                icon_size: ICON_SIZE,
                icon_anchor: ICON_ANCHOR,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::marker::{FixedDelay, SequenceDelay};
    use crate::symbology::{presets, SymbologyEntry};

    #[test]
    fn test_feature_three_gets_two_to_three_band() {
        let table = presets::purple_green();
        let mut renderer = MarkerRenderer::new(&table, FixedDelay(250));
        let feature = PointFeature::new(3.0, 20.113042190422988, 7.169236944483231);

        let marker = renderer.render_feature(&feature).unwrap();

        assert_eq!(marker.icon.text, "3");
        assert_eq!(marker.icon.border_colour.token(), "#f7f7f7");
        assert_eq!(marker.icon.fill_colour.token(), "#f7f7f7");
        assert_eq!(marker.icon.animation_delay_ms, 250);
        assert_eq!(marker.band.as_deref(), Some("2 to 3"));
        assert_eq!(marker.position, feature.position);
        assert!(marker.icon.pulses());
        assert_eq!(marker.icon.icon_size, [40.0, 40.0]);
        assert_eq!(marker.icon.icon_anchor, [20.0, 20.0]);
    }

    #[test]
    fn test_feature_zero_has_no_match() {
        let table = presets::purple_green();
        let mut renderer = MarkerRenderer::new(&table, FixedDelay(0));
        let feature = PointFeature::new(0.0, 1.0, 1.0);

        let err = renderer.render_feature(&feature).unwrap_err();
        assert_eq!(
            err,
            RenderError::NoSymbologyMatch {
                feature_id: Some(0.0)
            }
        );
    }

    #[test]
    fn test_feature_without_id_has_no_match() {
        let table = presets::red_green();
        let mut renderer = MarkerRenderer::new(&table, FixedDelay(0));
        let feature = PointFeature {
            id: None,
            ..PointFeature::new(1.0, 0.0, 0.0)
        };
        assert!(renderer.render_feature(&feature).is_err());
    }

    #[test]
    fn test_text_ids_classify_by_numeric_value() {
        let table = SymbologyTable::new(vec![
            SymbologyEntry::new("low", Colour::from_rgb(1, 1, 1), -1.0, 1.0),
            SymbologyEntry::new("high", Colour::from_rgb(2, 2, 2), 1.0, 5.0),
        ])
        .unwrap();
        let mut renderer = MarkerRenderer::new(&table, FixedDelay(0));

        let padded = PointFeature::with_text_id("03", 0.0, 0.0);
        let marker = renderer.render_feature(&padded).unwrap();
        assert_eq!(marker.icon.text, "03");
        assert_eq!(marker.band.as_deref(), Some("high"));

        let hex = PointFeature::with_text_id("0x2", 0.0, 0.0);
        let marker = renderer.render_feature(&hex).unwrap();
        assert_eq!(marker.band.as_deref(), Some("high"));

        // Non-empty text is present even when it reads as zero.
        let zero_text = PointFeature::with_text_id("0", 0.0, 0.0);
        let marker = renderer.render_feature(&zero_text).unwrap();
        assert_eq!(marker.band.as_deref(), Some("low"));
        let zero = PointFeature::new(0.0, 0.0, 0.0);
        assert!(renderer.render_feature(&zero).is_err());

        let blank = PointFeature::with_text_id("", 0.0, 0.0);
        assert!(renderer.render_feature(&blank).is_err());

        let word = PointFeature::with_text_id("north-gate", 0.0, 0.0);
        let err = renderer.render_feature(&word).unwrap_err();
        assert_eq!(err, RenderError::NoSymbologyMatch { feature_id: None });
        let marker = renderer.render_unknown(&word, word.position);
        assert_eq!(marker.icon.text, "north-gate");
    }

    #[test]
    fn test_position_argument_wins_over_feature_position() {
        let table = presets::red_green();
        let mut renderer = MarkerRenderer::new(&table, FixedDelay(0));
        let feature = PointFeature::new(1.0, 5.0, 5.0);
        let at = Coord { x: -1.0, y: 2.0 };
        assert_eq!(renderer.render_point(&feature, at).unwrap().position, at);
    }

    #[test]
    fn test_styling_is_stable_apart_from_delay() {
        let table = presets::red_green();
        let mut renderer = MarkerRenderer::with_random_delays(&table);
        let feature = PointFeature::new(4.0, 18.93, -11.17);

        let first = renderer.render_feature(&feature).unwrap();
        for _ in 0..200 {
            let next = renderer.render_feature(&feature).unwrap();
            assert_eq!(next.icon.text, first.icon.text);
            assert_eq!(next.icon.fill_colour, first.icon.fill_colour);
            assert_eq!(next.icon.border_colour, first.icon.border_colour);
            assert!(next.icon.animation_delay_ms < PULSE_DELAY_RANGE_MS);
        }
    }

    #[test]
    fn test_out_of_range_delay_is_clamped() {
        let table = presets::red_green();
        let mut renderer = MarkerRenderer::new(&table, SequenceDelay::new([5000, 999]));
        let feature = PointFeature::new(2.0, 0.0, 0.0);

        let a = renderer.render_feature(&feature).unwrap();
        let b = renderer.render_feature(&feature).unwrap();
        assert_eq!(a.icon.animation_delay_ms, 999);
        assert_eq!(b.icon.animation_delay_ms, 999);
    }

    #[test]
    fn test_unknown_marker() {
        let table = presets::red_green();
        let renderer = MarkerRenderer::new(&table, FixedDelay(0));

        let zero = PointFeature::new(0.0, 1.0, 2.0);
        let marker = renderer.render_unknown(&zero, zero.position);
        assert!(marker.is_unknown());
        assert_eq!(marker.icon.text, "0");
        assert_eq!(marker.icon.fill_colour.token(), "#9e9e9e");
        assert!(!marker.icon.pulses());

        let anonymous = PointFeature {
            id: None,
            ..zero
        };
        let marker = renderer.render_unknown(&anonymous, anonymous.position);
        assert_eq!(marker.icon.text, "?");
    }
}
