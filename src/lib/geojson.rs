use super::geometry::Geometry;
use geo_types::{LineString, MultiLineString, MultiPoint, MultiPolygon, Point, Polygon};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::error::Error;

type Position = (f64, f64);

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(tag = "type")]
pub enum GeometryObject {
    Point {
        coordinates: Position,
    },
    LineString {
        coordinates: Vec<Position>,
    },
    Polygon {
        coordinates: Vec<Vec<Position>>,
    },
    MultiPoint {
        coordinates: Vec<Position>,
    },
    MultiLineString {
        coordinates: Vec<Vec<Position>>,
    },
    MultiPolygon {
        coordinates: Vec<Vec<Vec<Position>>>,
    },
    GeometryCollection {
        geometries: Vec<GeometryObject>,
    },
}

#[derive(Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Entity {
    Feature {
        #[serde(default)]
        properties: Option<Map<String, Value>>,
        geometry: Option<GeometryObject>,
    },
    FeatureCollection {
        features: Vec<Entity>,
    },
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Document {
    Entity(Entity),
    Geometry(GeometryObject),
}

fn check_depth(depth: usize, max_depth: usize) -> Result<(), Box<dyn Error>> {
    if depth >= max_depth {
        let msg = format!("collections nested deeper than {} levels", max_depth);
        return Err(msg.into());
    }
    Ok(())
}

fn to_polygon(rings: Vec<Vec<Position>>) -> Polygon<f64> {
    let mut rings = rings.into_iter().map(LineString::from);
    let exterior = rings.next().unwrap_or_else(|| LineString::new(vec![]));
    Polygon::new(exterior, rings.collect())
}

impl GeometryObject {
    fn into_geometry(self, depth: usize, max_depth: usize) -> Result<Geometry<f64>, Box<dyn Error>> {
        let geometry = match self {
            GeometryObject::Point { coordinates } => Geometry::Point(Point::from(coordinates)),
            GeometryObject::LineString { coordinates } => {
                Geometry::LineString(LineString::from(coordinates))
            }
            GeometryObject::Polygon { coordinates } => Geometry::Polygon(to_polygon(coordinates)),
            GeometryObject::MultiPoint { coordinates } => {
                Geometry::MultiPoint(MultiPoint::from(coordinates))
            }
            GeometryObject::MultiLineString { coordinates } => {
                let line_strings = coordinates.into_iter().map(LineString::from).collect();
                Geometry::MultiLineString(MultiLineString::new(line_strings))
            }
            GeometryObject::MultiPolygon { coordinates } => {
                let polygons = coordinates.into_iter().map(to_polygon).collect();
                Geometry::MultiPolygon(MultiPolygon::new(polygons))
            }
            GeometryObject::GeometryCollection { geometries } => {
                check_depth(depth, max_depth)?;
                let geometries = geometries
                    .into_iter()
                    .map(|g| g.into_geometry(depth + 1, max_depth))
                    .collect::<Result<_, _>>()?;
                Geometry::GeometryCollection(geometries)
            }
        };
        Ok(geometry)
    }
}

impl Entity {
    fn into_geometry(self, depth: usize, max_depth: usize) -> Result<Geometry<f64>, Box<dyn Error>> {
        match self {
            Entity::Feature { geometry, .. } => match geometry {
                Some(geometry) => geometry.into_geometry(depth, max_depth),
                None => Ok(Geometry::Empty),
            },
            Entity::FeatureCollection { features } => {
                check_depth(depth, max_depth)?;
                let geometries = features
                    .into_iter()
                    .map(|f| f.into_geometry(depth + 1, max_depth))
                    .collect::<Result<_, _>>()?;
                Ok(Geometry::GeometryCollection(geometries))
            }
        }
    }
}

/// Parse a GeoJSON document into a geometry
///
/// The document may be a bare geometry object, a `Feature` or a
/// `FeatureCollection`. A feature collection becomes a geometry collection of
/// its features' geometries, features without a geometry and a top level
/// `null` become `Geometry::Empty`. Collections nested deeper than
/// `max_depth` levels are rejected.
///
/// # Example
///
/// ```
/// use geo_closest_point::geojson::parse;
/// use geo_closest_point::Geometry;
///
/// let geometry = parse(r#"{"type": "Point", "coordinates": [1.0, 2.0]}"#, 8).unwrap();
/// assert!(matches!(geometry, Geometry::Point(_)));
/// ```
pub fn parse(json: &str, max_depth: usize) -> Result<Geometry<f64>, Box<dyn Error>> {
    let document: Option<Document> = serde_json::from_str(json)?;
    match document {
        Some(Document::Geometry(geometry)) => geometry.into_geometry(0, max_depth),
        Some(Document::Entity(entity)) => entity.into_geometry(0, max_depth),
        None => Ok(Geometry::Empty),
    }
}
