use crate::{
    core::geo::LatLng,
    MapError, Result,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A GeoJSON position: `[lng, lat]`, optionally followed by altitude/depth
pub type Position = Vec<f64>;

/// Geometry variants the map knows how to draw
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GeoJsonGeometry {
    Point {
        coordinates: Position,
    },
    LineString {
        coordinates: Vec<Position>,
    },
    Polygon {
        coordinates: Vec<Vec<Position>>,
    },
    MultiLineString {
        coordinates: Vec<Vec<Position>>,
    },
    MultiPolygon {
        coordinates: Vec<Vec<Vec<Position>>>,
    },
}

impl GeoJsonGeometry {
    const SUPPORTED: [&'static str; 5] = [
        "Point",
        "LineString",
        "Polygon",
        "MultiLineString",
        "MultiPolygon",
    ];
}

/// A raw feature as found in the feed.
///
/// Kept as untyped JSON so that one odd entry cannot fail the whole
/// collection; its shape is checked per feature by [`Feature::decode`].
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GeoJsonFeature(Value);

impl GeoJsonFeature {
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }
}

/// Root GeoJSON object
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type")]
pub enum GeoJson {
    Feature(GeoJsonFeature),
    FeatureCollection { features: Vec<GeoJsonFeature> },
}

impl GeoJson {
    /// Parses a feed body. Anything that is not a feature or feature
    /// collection is a parse error; individual features are not checked here.
    pub fn parse(body: &str) -> Result<Self> {
        serde_json::from_str(body)
            .map_err(|e| MapError::Parse(format!("Invalid feature collection: {}", e)))
    }

    /// Features in document order
    pub fn into_features(self) -> Vec<GeoJsonFeature> {
        match self {
            GeoJson::Feature(feature) => vec![feature],
            GeoJson::FeatureCollection { features } => features,
        }
    }
}

/// Geometry family of a decoded feature
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GeometryType {
    Point,
    LineString,
    MultiLineString,
    Polygon,
    MultiPolygon,
}

/// Decoded geometry in map coordinates
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Geometry {
    Point(LatLng),
    /// Lines or polygon rings, each a non-empty run of points
    Path {
        kind: GeometryType,
        rings: Vec<Vec<LatLng>>,
    },
}

/// One validated geospatial record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Feature {
    pub id: Option<String>,
    pub geometry: Geometry,
    /// Present for events; `None` when missing, null or not a number
    pub magnitude: Option<f64>,
    pub place: Option<String>,
    pub timestamp_millis: Option<i64>,
}

impl Feature {
    /// Validates a raw feature.
    ///
    /// Fails with `MalformedFeature` when geometry or coordinates are missing
    /// or unusable, and with `UnsupportedGeometry` for geometry types outside
    /// the point and line/polygon families.
    pub fn decode(raw: &GeoJsonFeature) -> Result<Self> {
        let object = raw
            .as_value()
            .as_object()
            .ok_or_else(|| MapError::MalformedFeature("feature is not a JSON object".to_string()))?;

        let id = object.get("id").and_then(id_string);
        let label = id.as_deref().unwrap_or("<no id>");

        let properties = match object.get("properties") {
            None | Some(Value::Null) => None,
            Some(Value::Object(map)) => Some(map),
            Some(_) => {
                return Err(MapError::MalformedFeature(format!(
                    "feature {} has non-object properties",
                    label
                )))
            }
        };

        let geometry_json = object
            .get("geometry")
            .filter(|g| !g.is_null())
            .ok_or_else(|| {
                MapError::MalformedFeature(format!("feature {} has no geometry", label))
            })?;

        let type_name = geometry_json
            .get("type")
            .and_then(Value::as_str)
            .ok_or_else(|| {
                MapError::MalformedFeature(format!("feature {} has an untyped geometry", label))
            })?;

        if !GeoJsonGeometry::SUPPORTED.contains(&type_name) {
            return Err(MapError::UnsupportedGeometry(format!(
                "feature {} has geometry type {}",
                label, type_name
            )));
        }

        let typed: GeoJsonGeometry = serde_json::from_value(geometry_json.clone()).map_err(|e| {
            MapError::MalformedFeature(format!("feature {} has bad coordinates: {}", label, e))
        })?;
        let geometry = convert_geometry(typed).ok_or_else(|| {
            MapError::MalformedFeature(format!("feature {} has unusable coordinates", label))
        })?;

        let property = |key: &str| properties.and_then(|p| p.get(key));

        Ok(Self {
            id,
            geometry,
            magnitude: property("mag").and_then(Value::as_f64),
            place: property("place").and_then(Value::as_str).map(str::to_string),
            timestamp_millis: property("time").and_then(|v| {
                v.as_i64().or_else(|| v.as_f64().map(|f| f as i64))
            }),
        })
    }
}

fn id_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn ring(positions: &[Position]) -> Option<Vec<LatLng>> {
    if positions.is_empty() {
        return None;
    }
    positions.iter().map(|p| LatLng::from_position(p)).collect()
}

fn rings(lines: &[Vec<Position>]) -> Option<Vec<Vec<LatLng>>> {
    if lines.is_empty() {
        return None;
    }
    lines.iter().map(|line| ring(line)).collect()
}

fn convert_geometry(geometry: GeoJsonGeometry) -> Option<Geometry> {
    let path = |kind, rings| Geometry::Path { kind, rings };
    match geometry {
        GeoJsonGeometry::Point { coordinates } => {
            LatLng::from_position(&coordinates).map(Geometry::Point)
        }
        GeoJsonGeometry::LineString { coordinates } => {
            ring(&coordinates).map(|line| path(GeometryType::LineString, vec![line]))
        }
        GeoJsonGeometry::MultiLineString { coordinates } => {
            rings(&coordinates).map(|lines| path(GeometryType::MultiLineString, lines))
        }
        GeoJsonGeometry::Polygon { coordinates } => {
            rings(&coordinates).map(|lines| path(GeometryType::Polygon, lines))
        }
        GeoJsonGeometry::MultiPolygon { coordinates } => {
            if coordinates.is_empty() {
                return None;
            }
            let mut all = Vec::new();
            for polygon in &coordinates {
                all.extend(rings(polygon)?);
            }
            Some(path(GeometryType::MultiPolygon, all))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn raw(value: Value) -> GeoJsonFeature {
        GeoJsonFeature::new(value)
    }

    #[test]
    fn test_parse_collection() {
        let body = r#"
        {
            "type": "FeatureCollection",
            "metadata": {"count": 2},
            "features": [
                {
                    "type": "Feature",
                    "id": "us7000abcd",
                    "properties": {"mag": 4.7, "place": "10 km S of Somewhere", "time": 1700000000000},
                    "geometry": {"type": "Point", "coordinates": [-122.5, 37.75, 8.1]}
                },
                {
                    "type": "Feature",
                    "properties": {"Name": "AF-AN"},
                    "geometry": {"type": "LineString", "coordinates": [[-0.4, -54.8], [0.1, -54.5]]}
                }
            ]
        }
        "#;

        let features = GeoJson::parse(body).unwrap().into_features();
        assert_eq!(features.len(), 2);

        let quake = Feature::decode(&features[0]).unwrap();
        assert_eq!(quake.id.as_deref(), Some("us7000abcd"));
        assert_eq!(quake.geometry, Geometry::Point(LatLng::new(37.75, -122.5)));
        assert_eq!(quake.magnitude, Some(4.7));
        assert_eq!(quake.place.as_deref(), Some("10 km S of Somewhere"));
        assert_eq!(quake.timestamp_millis, Some(1_700_000_000_000));

        let boundary = Feature::decode(&features[1]).unwrap();
        assert!(matches!(
            boundary.geometry,
            Geometry::Path { kind: GeometryType::LineString, .. }
        ));
        assert_eq!(boundary.magnitude, None);
    }

    #[test]
    fn test_parse_single_feature_document() {
        let body = r#"{"type": "Feature", "geometry": {"type": "Point", "coordinates": [1.0, 2.0]}}"#;
        assert_eq!(GeoJson::parse(body).unwrap().into_features().len(), 1);
    }

    #[test]
    fn test_odd_entries_do_not_fail_the_collection() {
        let body = r#"{"type": "FeatureCollection", "features": [
            {"type": "Feature", "properties": "oops",
             "geometry": {"type": "Point", "coordinates": [1.0, 2.0]}},
            null,
            42,
            {"type": "Feature", "properties": {"mag": 1.5},
             "geometry": {"type": "Point", "coordinates": [1.0, 2.0]}}
        ]}"#;

        let features = GeoJson::parse(body).unwrap().into_features();
        assert_eq!(features.len(), 4);

        for odd in &features[..3] {
            assert!(matches!(
                Feature::decode(odd),
                Err(MapError::MalformedFeature(_))
            ));
        }
        assert_eq!(Feature::decode(&features[3]).unwrap().magnitude, Some(1.5));
    }

    #[test]
    fn test_null_properties_are_absent() {
        let feature = Feature::decode(&raw(json!({
            "properties": null,
            "geometry": {"type": "Point", "coordinates": [0.0, 0.0]}
        })))
        .unwrap();
        assert_eq!(feature.magnitude, None);
        assert_eq!(feature.place, None);
    }

    #[test]
    fn test_parse_rejects_non_collections() {
        assert!(matches!(GeoJson::parse("not json"), Err(MapError::Parse(_))));
        assert!(matches!(
            GeoJson::parse(r#"{"type": "Topology", "objects": {}}"#),
            Err(MapError::Parse(_))
        ));
        assert!(matches!(
            GeoJson::parse(r#"{"features": []}"#),
            Err(MapError::Parse(_))
        ));
    }

    #[test]
    fn test_missing_geometry_is_malformed() {
        let err = Feature::decode(&raw(json!({"type": "Feature", "properties": {"mag": 2.0}})))
            .unwrap_err();
        assert!(matches!(err, MapError::MalformedFeature(_)));

        let err = Feature::decode(&raw(json!({"geometry": null}))).unwrap_err();
        assert!(matches!(err, MapError::MalformedFeature(_)));

        let err = Feature::decode(&raw(json!({"geometry": {"type": "Point"}}))).unwrap_err();
        assert!(matches!(err, MapError::MalformedFeature(_)));

        let short = json!({"geometry": {"type": "Point", "coordinates": [5.0]}});
        let err = Feature::decode(&raw(short)).unwrap_err();
        assert!(matches!(err, MapError::MalformedFeature(_)));

        let empty = json!({"geometry": {"type": "LineString", "coordinates": []}});
        let err = Feature::decode(&raw(empty)).unwrap_err();
        assert!(matches!(err, MapError::MalformedFeature(_)));
    }

    #[test]
    fn test_unknown_geometry_is_unsupported() {
        let err = Feature::decode(&raw(json!({
            "geometry": {"type": "MultiPoint", "coordinates": [[1.0, 2.0]]}
        })))
        .unwrap_err();
        assert!(matches!(err, MapError::UnsupportedGeometry(_)));
        assert!(err.is_per_feature());
    }

    #[test]
    fn test_non_numeric_magnitude_is_absent() {
        let feature = Feature::decode(&raw(json!({
            "properties": {"mag": "strong", "place": "Nowhere", "time": 1.7e12},
            "geometry": {"type": "Point", "coordinates": [0.0, 0.0]}
        })))
        .unwrap();
        assert_eq!(feature.magnitude, None);
        assert_eq!(feature.timestamp_millis, Some(1_700_000_000_000));
    }

    #[test]
    fn test_multipolygon_rings_are_flattened() {
        let feature = Feature::decode(&raw(json!({
            "id": 7,
            "geometry": {
                "type": "MultiPolygon",
                "coordinates": [
                    [[[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 0.0]]],
                    [[[5.0, 5.0], [6.0, 5.0], [6.0, 6.0], [5.0, 5.0]]]
                ]
            }
        })))
        .unwrap();

        assert_eq!(feature.id.as_deref(), Some("7"));
        match &feature.geometry {
            Geometry::Path { kind, rings } => {
                assert_eq!(*kind, GeometryType::MultiPolygon);
                assert_eq!(rings.len(), 2);
                assert_eq!(rings[1][1], LatLng::new(5.0, 6.0));
            }
            other => panic!("expected a path, got {:?}", other),
        }
    }
}
