//! Closest point and distance from a query point to arbitrary geometries.
//!
//! Geometries may be empty, primitive (point, line string, polygon), multi
//! geometries or arbitrarily nested collections. Primitive nearest point
//! and containment math is provided by the `geo` crate.
//!
//! # Example
//!
//! ```
//! use geo_closest_point::{closest_point, Geometry};
//! use geo_types::{line_string, point};
//!
//! let geometry: Geometry<f64> = line_string![(x: 0., y: 0.), (x: 4., y: 0.)].into();
//! let nearest = closest_point(&point!(x: 1, y: 3), &geometry).unwrap();
//! assert_eq!(nearest.distance, 3.);
//! ```
use geo_types::Point;
use rayon::prelude::*;
use tracing::debug;

pub use self::geometry::{Geometry, Promote};
pub use self::kernel::{GeoKernel, Kernel, Nearest, Shape};
pub use self::output::ClosestPointInfo;
pub use self::resolver::Resolver;

pub mod geojson;
mod geometry;
mod kernel;
pub mod output;
mod resolver;
#[cfg(test)]
mod test_helpers;

/// Nearest point of `geometry` to `query`, `None` if the geometry is empty.
///
/// The coordinate types of query and geometry may differ, both are promoted
/// to `f64`.
pub fn closest_point<Q: Promote, T: Promote>(
    query: &Point<Q>,
    geometry: &Geometry<T>,
) -> Option<Nearest> {
    closest_point_with(&GeoKernel, query, geometry)
}

/// Like [`closest_point`], with primitives provided by a custom kernel.
pub fn closest_point_with<K: Kernel, Q: Promote, T: Promote>(
    kernel: &K,
    query: &Point<Q>,
    geometry: &Geometry<T>,
) -> Option<Nearest> {
    Resolver::new(query, kernel).resolve(geometry)
}

/// Resolves many queries against one geometry in parallel, results are in
/// query order.
pub fn closest_points<Q: Promote, T: Promote>(
    queries: &[Point<Q>],
    geometry: &Geometry<T>,
) -> Vec<Option<Nearest>> {
    debug!("resolving {} queries", queries.len());
    queries
        .par_iter()
        .map(|query| closest_point(query, geometry))
        .collect()
}
