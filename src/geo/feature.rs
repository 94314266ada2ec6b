//! Point features read from GeoJSON.

use crate::error::FeatureError;
use geo_types::Coord;
use geojson::{feature::Id, Feature, GeoJson, Geometry, JsonObject, Value};
use std::path::Path;

/// A point feature: an optional numeric id, a lon/lat position and whatever
/// properties came with it.
#[derive(Debug, Clone, PartialEq)]
pub struct PointFeature {
    pub id: Option<f64>,
    /// Verbatim text of a string id, e.g. `"03"`. `id` holds its numeric value.
    pub id_text: Option<String>,
    /// `x` is longitude, `y` is latitude.
    pub position: Coord<f64>,
    pub properties: Option<JsonObject>,
}

impl PointFeature {
    pub fn new(id: f64, lon: f64, lat: f64) -> Self {
        Self {
            id: Some(id),
            id_text: None,
            position: Coord { x: lon, y: lat },
            properties: None,
        }
    }

    /// A feature whose id was given as text.
    pub fn with_text_id(text: impl Into<String>, lon: f64, lat: f64) -> Self {
        let text = text.into();
        Self {
            id: number_from_text(&text),
            id_text: Some(text),
            position: Coord { x: lon, y: lat },
            properties: None,
        }
    }

    /// True for a non-empty text id. Such an id counts as present even when
    /// its numeric value is zero.
    pub fn has_text_id(&self) -> bool {
        self.id_text.as_deref().is_some_and(|text| !text.is_empty())
    }

    /// Display text for the id, or an empty string when there is none.
    ///
    /// Text ids are shown as written (`"03"` stays `03`).
    pub fn label(&self) -> String {
        match (&self.id_text, self.id) {
            (Some(text), _) => text.clone(),
            (None, Some(id)) => format_feature_id(id),
            (None, None) => String::new(),
        }
    }
}

/// Formats an id the way it is shown on a marker: integral values without a
/// fractional part (`3`, not `3.0`).
pub fn format_feature_id(id: f64) -> String {
    if id == 0.0 {
        // Avoid "-0".
        return "0".to_string();
    }
    format!("{}", id)
}

/// An ordered collection of point features.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FeatureSet {
    features: Vec<PointFeature>,
}

impl FeatureSet {
    pub fn new(features: Vec<PointFeature>) -> Self {
        Self { features }
    }

    /// The five demo points (ids 1 to 5) scattered around central Africa.
    pub fn sample() -> Self {
        Self::new(vec![
            PointFeature::new(1.0, 15.887259826195844, -1.9123582851803036),
            PointFeature::new(2.0, -6.887543697112704, 8.833062813665634),
            PointFeature::new(3.0, 20.113042190422988, 7.169236944483231),
            PointFeature::new(4.0, 18.937693750697576, -11.177597113118466),
            PointFeature::new(5.0, 10.352244413199145, 16.802957535698198),
        ])
    }

    /// Parses a FeatureCollection, a single Feature or a bare Point geometry.
    ///
    /// Only point geometries are kept; anything else is skipped.
    pub fn from_geojson(geojson_str: &str) -> Result<Self, FeatureError> {
        let geojson: GeoJson = geojson_str.parse()?;

        let features = match geojson {
            GeoJson::FeatureCollection(fc) => {
                fc.features.iter().filter_map(convert_feature).collect()
            }
            GeoJson::Feature(f) => convert_feature(&f).into_iter().collect(),
            GeoJson::Geometry(g) => convert_geometry(&g)
                .map(|position| PointFeature {
                    id: None,
                    id_text: None,
                    position,
                    properties: None,
                })
                .into_iter()
                .collect(),
        };

        Ok(Self { features })
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, FeatureError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| FeatureError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let set = Self::from_geojson(&text)?;
        log::info!(
            "Loaded {} point features from {}",
            set.len(),
            path.display()
        );
        Ok(set)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PointFeature> {
        self.features.iter()
    }

    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }
}

impl<'a> IntoIterator for &'a FeatureSet {
    type Item = &'a PointFeature;
    type IntoIter = std::slice::Iter<'a, PointFeature>;

    fn into_iter(self) -> Self::IntoIter {
        self.features.iter()
    }
}

fn convert_feature(feature: &Feature) -> Option<PointFeature> {
    let Some(geometry) = feature.geometry.as_ref() else {
        log::debug!("Skipping feature {:?} without geometry", feature.id);
        return None;
    };

    let position = convert_geometry(geometry)?;

    let (id, id_text) = match &feature.id {
        Some(Id::Number(n)) => (n.as_f64(), None),
        Some(Id::String(text)) => (number_from_text(text), Some(text.clone())),
        None => (None, None),
    };

    Some(PointFeature {
        id,
        id_text,
        position,
        properties: feature.properties.clone(),
    })
}

fn convert_geometry(geometry: &Geometry) -> Option<Coord<f64>> {
    match &geometry.value {
        Value::Point(coords) if coords.len() >= 2 => Some(Coord {
            x: coords[0],
            y: coords[1],
        }),
        other => {
            log::debug!("Skipping non-point geometry: {}", geometry_kind(other));
            None
        }
    }
}

fn geometry_kind(value: &Value) -> &'static str {
    match value {
        Value::Point(_) => "Point",
        Value::MultiPoint(_) => "MultiPoint",
        Value::LineString(_) => "LineString",
        Value::MultiLineString(_) => "MultiLineString",
        Value::Polygon(_) => "Polygon",
        Value::MultiPolygon(_) => "MultiPolygon",
        Value::GeometryCollection(_) => "GeometryCollection",
    }
}

/// Reads a text id as a number the way JavaScript's `Number(text)` does.
///
/// Surrounding whitespace is ignored and blank text is zero. `0x`, `0o` and
/// `0b` prefixes select a radix, and `Infinity` may carry a sign. Text that is
/// not a number gives `None`.
pub fn number_from_text(text: &str) -> Option<f64> {
    let text = text.trim();
    if text.is_empty() {
        return Some(0.0);
    }

    match text {
        "Infinity" | "+Infinity" => return Some(f64::INFINITY),
        "-Infinity" => return Some(f64::NEG_INFINITY),
        _ => {}
    }

    let radix = match text.get(..2) {
        Some("0x" | "0X") => Some(16),
        Some("0o" | "0O") => Some(8),
        Some("0b" | "0B") => Some(2),
        _ => None,
    };
    if let Some(radix) = radix {
        let digits = &text[2..];
        if digits.is_empty() {
            return None;
        }
        return digits.chars().try_fold(0.0, |acc, c| {
            c.to_digit(radix)
                .map(|d| acc * f64::from(radix) + f64::from(d))
        });
    }

    // `str::parse` also takes "inf" and "nan", which are not numbers here.
    let decimal = |c: char| c.is_ascii_digit() || matches!(c, '+' | '-' | '.' | 'e' | 'E');
    if !text.chars().all(decimal) {
        return None;
    }
    text.parse::<f64>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    const COLLECTION: &str = r#"{
        "type": "FeatureCollection",
        "features": [
            {
                "type": "Feature",
                "properties": { },
                "geometry": { "coordinates": [15.887259826195844, -1.9123582851803036], "type": "Point" },
                "id": 1
            },
            {
                "type": "Feature",
                "properties": { "name": "river" },
                "geometry": { "coordinates": [[0.0, 0.0], [1.0, 1.0]], "type": "LineString" },
                "id": 2
            },
            {
                "type": "Feature",
                "properties": { "name": "three" },
                "geometry": { "coordinates": [20.113042190422988, 7.169236944483231], "type": "Point" },
                "id": "3"
            },
            {
                "type": "Feature",
                "properties": null,
                "geometry": { "coordinates": [1.0, 2.0], "type": "Point" },
                "id": "north-gate"
            },
            {
                "type": "Feature",
                "properties": null,
                "geometry": { "coordinates": [3.0, 4.0], "type": "Point" }
            }
        ]
    }"#;

    #[test]
    fn test_collection_keeps_points_only() {
        let set = FeatureSet::from_geojson(COLLECTION).unwrap();
        assert_eq!(set.len(), 4);

        let first = set.iter().next().unwrap();
        assert_eq!(first.id, Some(1.0));
        assert_eq!(first.position.x, 15.887259826195844);
        assert_eq!(first.position.y, -1.9123582851803036);
    }

    #[test]
    fn test_id_coercion() {
        let set = FeatureSet::from_geojson(COLLECTION).unwrap();
        let ids: Vec<Option<f64>> = set.iter().map(|f| f.id).collect();
        assert_eq!(ids, [Some(1.0), Some(3.0), None, None]);
    }

    #[test]
    fn test_text_ids_keep_their_spelling() {
        let set = FeatureSet::from_geojson(COLLECTION).unwrap();
        let labels: Vec<String> = set.iter().map(|f| f.label()).collect();
        assert_eq!(labels, ["1", "3", "north-gate", ""]);

        let padded = PointFeature::with_text_id("03", 0.0, 0.0);
        assert_eq!(padded.id, Some(3.0));
        assert_eq!(padded.label(), "03");
        assert!(padded.has_text_id());
    }

    #[test]
    fn test_number_from_text() {
        assert_eq!(number_from_text("3"), Some(3.0));
        assert_eq!(number_from_text(" 2.5 "), Some(2.5));
        assert_eq!(number_from_text("1e2"), Some(100.0));
        assert_eq!(number_from_text(".5"), Some(0.5));
        assert_eq!(number_from_text("0x2"), Some(2.0));
        assert_eq!(number_from_text("0b101"), Some(5.0));
        assert_eq!(number_from_text("0o17"), Some(15.0));
        assert_eq!(number_from_text(""), Some(0.0));
        assert_eq!(number_from_text("-Infinity"), Some(f64::NEG_INFINITY));

        assert_eq!(number_from_text("0x"), None);
        assert_eq!(number_from_text("-0x2"), None);
        assert_eq!(number_from_text("inf"), None);
        assert_eq!(number_from_text("NaN"), None);
        assert_eq!(number_from_text("north-gate"), None);
    }

    #[test]
    fn test_properties_are_kept() {
        let set = FeatureSet::from_geojson(COLLECTION).unwrap();
        let three = set.iter().find(|f| f.id == Some(3.0)).unwrap();
        let props = three.properties.as_ref().unwrap();
        assert_eq!(props.get("name").and_then(|v| v.as_str()), Some("three"));
    }

    #[test]
    fn test_single_feature_and_bare_geometry() {
        let single = r#"{ "type": "Feature", "properties": {}, "id": 7,
            "geometry": { "type": "Point", "coordinates": [1.5, -2.5] } }"#;
        let set = FeatureSet::from_geojson(single).unwrap();
        assert_eq!(set.len(), 1);
        assert_eq!(set.iter().next().unwrap().id, Some(7.0));

        let bare = r#"{ "type": "Point", "coordinates": [1.5, -2.5] }"#;
        let set = FeatureSet::from_geojson(bare).unwrap();
        assert_eq!(set.iter().next().unwrap().id, None);
    }

    #[test]
    fn test_invalid_geojson() {
        assert!(matches!(
            FeatureSet::from_geojson("{ not json"),
            Err(FeatureError::GeoJson(_))
        ));
    }

    #[test]
    fn test_sample_ids() {
        let ids: Vec<String> = FeatureSet::sample().iter().map(|f| f.label()).collect();
        assert_eq!(ids, ["1", "2", "3", "4", "5"]);
    }

    #[test]
    fn test_format_feature_id() {
        assert_eq!(format_feature_id(3.0), "3");
        assert_eq!(format_feature_id(2.5), "2.5");
        assert_eq!(format_feature_id(-0.0), "0");
    }
}
