use super::geometry::{promote_line_string, promote_point, promote_polygon, Promote};
use geo::{Closest, ClosestPoint, Contains, EuclideanDistance};
use geo_types::{LineString, Point, Polygon};

/// A point on a geometry together with its distance to the query point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Nearest {
    pub point: Point<f64>,
    pub distance: f64,
}

impl Nearest {
    pub fn new(point: Point<f64>, distance: f64) -> Self {
        Nearest { point, distance }
    }
}

/// The primitive shapes a kernel knows how to project onto.
///
/// Polygon rings are passed as line strings.
#[derive(Clone, Copy, Debug)]
pub enum Shape<'a, T: Promote> {
    Point(&'a Point<T>),
    LineString(&'a LineString<T>),
}

/// Primitive nearest-point and containment routines.
pub trait Kernel {
    /// Nearest point on `shape`, `None` if the shape has no coordinates.
    fn nearest_point<T: Promote>(&self, query: &Point<f64>, shape: Shape<'_, T>)
        -> Option<Nearest>;

    /// Whether `query` lies inside the exterior ring and outside every hole.
    fn contains<T: Promote>(&self, query: &Point<f64>, polygon: &Polygon<T>) -> bool;
}

/// Kernel backed by the algorithms of the `geo` crate.
///
/// Points on a ring are not contained by the polygon.
#[derive(Clone, Copy, Debug, Default)]
pub struct GeoKernel;

fn to_nearest(query: &Point<f64>, closest: Closest<f64>) -> Option<Nearest> {
    match closest {
        Closest::Intersection(_) => Some(Nearest::new(*query, 0.0)),
        Closest::SinglePoint(point) => {
            let distance = query.euclidean_distance(&point);
            Some(Nearest::new(point, distance))
        }
        Closest::Indeterminate => None,
    }
}

impl Kernel for GeoKernel {
    fn nearest_point<T: Promote>(
        &self,
        query: &Point<f64>,
        shape: Shape<'_, T>,
    ) -> Option<Nearest> {
        match shape {
            Shape::Point(point) => {
                let point = promote_point(point);
                to_nearest(query, point.closest_point(query))
            }
            Shape::LineString(line_string) => {
                let line_string = promote_line_string(line_string);
                // geo has no answer for lines without a segment of non-zero
                // length, all their coordinates coincide with the first one
                to_nearest(query, line_string.closest_point(query)).or_else(|| {
                    let first = line_string.points().next()?;
                    to_nearest(query, first.closest_point(query))
                })
            }
        }
    }

    fn contains<T: Promote>(&self, query: &Point<f64>, polygon: &Polygon<T>) -> bool {
        promote_polygon(polygon).contains(query)
    }
}
