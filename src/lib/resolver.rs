use super::geometry::{promote_point, Geometry, Promote};
use super::kernel::{Kernel, Nearest, Shape};
use geo_types::{LineString, Point, Polygon};
use itertools::{FoldWhile, Itertools};
use std::iter;
use tracing::trace;

/// Resolves the nearest point of arbitrary geometries to a fixed query point.
///
/// Primitive projections and containment tests are delegated to the kernel,
/// the resolver only dispatches on the geometry kind and merges the results
/// of composite geometries.
pub struct Resolver<'k, K> {
    query: Point<f64>,
    kernel: &'k K,
}

fn closer(best: Option<Nearest>, candidate: Nearest) -> Option<Nearest> {
    match best {
        Some(best) if !(candidate.distance < best.distance) => Some(best),
        _ => Some(candidate),
    }
}

impl<'k, K: Kernel> Resolver<'k, K> {
    pub fn new<Q: Promote>(query: &Point<Q>, kernel: &'k K) -> Self {
        Resolver {
            query: promote_point(query),
            kernel,
        }
    }

    pub fn query(&self) -> Point<f64> {
        self.query
    }

    pub fn resolve<T: Promote>(&self, geometry: &Geometry<T>) -> Option<Nearest> {
        match geometry {
            Geometry::Empty => None,
            Geometry::Point(point) => self.point(point),
            Geometry::LineString(line_string) => self.line_string(line_string),
            Geometry::Polygon(polygon) => self.polygon(polygon),
            Geometry::MultiPoint(points) => self.fold(points.0.iter().map(|p| self.point(p))),
            Geometry::MultiLineString(line_strings) => {
                self.fold(line_strings.0.iter().map(|ls| self.line_string(ls)))
            }
            Geometry::MultiPolygon(polygons) => {
                self.fold(polygons.0.iter().map(|p| self.polygon(p)))
            }
            Geometry::GeometryCollection(geometries) => {
                self.fold(geometries.iter().map(|g| self.resolve(g)))
            }
        }
    }

    fn point<T: Promote>(&self, point: &Point<T>) -> Option<Nearest> {
        self.kernel.nearest_point(&self.query, Shape::Point(point))
    }

    fn line_string<T: Promote>(&self, line_string: &LineString<T>) -> Option<Nearest> {
        self.kernel
            .nearest_point(&self.query, Shape::LineString(line_string))
    }

    fn polygon<T: Promote>(&self, polygon: &Polygon<T>) -> Option<Nearest> {
        if self.kernel.contains(&self.query, polygon) {
            trace!(query = ?self.query, "query contained in polygon");
            return Some(Nearest::new(self.query, 0.0));
        }
        // holes are scanned like the exterior, the nearest ring wins
        iter::once(polygon.exterior())
            .chain(polygon.interiors())
            .filter_map(|ring| self.line_string(ring))
            .fold(None, closer)
    }

    /// Keeps the strictly nearest result, elements without a result are
    /// skipped. Stops pulling results once one at distance zero shows up.
    fn fold(&self, results: impl Iterator<Item = Option<Nearest>>) -> Option<Nearest> {
        results
            .flatten()
            .fold_while(None, |best, candidate| {
                if candidate.distance == 0.0 {
                    trace!(query = ?self.query, "exact hit, skipping remaining elements");
                    FoldWhile::Done(Some(candidate))
                } else {
                    FoldWhile::Continue(closer(best, candidate))
                }
            })
            .into_inner()
    }
}
