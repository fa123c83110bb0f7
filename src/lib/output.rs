use super::geojson::{Entity, GeometryObject};
use super::kernel::Nearest;
use geo_types::Point;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::error::Error;
use std::io::Write;

const NO_RESULT: f64 = -1.0;

/// Flat representation of a resolver result.
///
/// A negative `distance` marks the absence of a closest point, which is what
/// an empty geometry yields.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct ClosestPointInfo {
    pub x: f64,
    pub y: f64,
    pub distance: f64,
}

impl Default for ClosestPointInfo {
    fn default() -> Self {
        ClosestPointInfo {
            x: 0.,
            y: 0.,
            distance: NO_RESULT,
        }
    }
}

impl ClosestPointInfo {
    pub fn is_empty(&self) -> bool {
        self.distance < 0.
    }
}

impl From<Nearest> for ClosestPointInfo {
    fn from(nearest: Nearest) -> Self {
        ClosestPointInfo {
            x: nearest.point.x(),
            y: nearest.point.y(),
            distance: nearest.distance,
        }
    }
}

impl From<Option<Nearest>> for ClosestPointInfo {
    fn from(nearest: Option<Nearest>) -> Self {
        nearest.map(Self::from).unwrap_or_default()
    }
}

impl From<ClosestPointInfo> for Option<Nearest> {
    fn from(info: ClosestPointInfo) -> Self {
        if info.is_empty() {
            return None;
        }
        let point = Point::new(info.x, info.y);
        Some(Nearest::new(point, info.distance))
    }
}

pub trait Output {
    fn write_geojson(&self, writer: &mut dyn Write) -> Result<(), Box<dyn Error>>;
    fn write_json_lines(&self, writer: &mut dyn Write) -> Result<(), Box<dyn Error>>;
}

impl Output for Vec<ClosestPointInfo> {
    fn write_json_lines(&self, writer: &mut dyn Write) -> Result<(), Box<dyn Error>> {
        for info in self.iter() {
            let json = serde_json::to_string(info)?;
            writeln!(writer, "{}", json)?;
        }
        Ok(())
    }

    fn write_geojson(&self, writer: &mut dyn Write) -> Result<(), Box<dyn Error>> {
        let features = self
            .iter()
            .enumerate()
            .filter(|(_, info)| !info.is_empty())
            .map(|(idx, info)| {
                let mut properties = Map::new();
                properties.insert("query".into(), idx.into());
                properties.insert("distance".into(), Value::from(info.distance));
                let geometry = GeometryObject::Point {
                    coordinates: (info.x, info.y),
                };
                Entity::Feature {
                    properties: Some(properties),
                    geometry: Some(geometry),
                }
            })
            .collect();
        let feature_collection = Entity::FeatureCollection { features };
        let string = serde_json::to_string(&feature_collection)?;
        writeln!(writer, "{}", string)?;
        Ok(())
    }
}
