use super::geometry::Promote;
use super::kernel::{GeoKernel, Kernel, Nearest, Shape};
use geo_types::{polygon, Point, Polygon};
use std::sync::atomic::{AtomicUsize, Ordering};

/// 10x10 square with its lower left corner in the origin.
pub fn square() -> Polygon<f64> {
    polygon![
        (x: 0., y: 0.),
        (x: 10., y: 0.),
        (x: 10., y: 10.),
        (x: 0., y: 10.)
    ]
}

// 3------2
// |      |
// | h    |
// 0------1
pub fn square_with_hole() -> Polygon<f64> {
    polygon!(
        exterior: [(x: 0., y: 0.), (x: 10., y: 0.), (x: 10., y: 10.), (x: 0., y: 10.)],
        interiors: [[(x: 1., y: 1.), (x: 2., y: 1.), (x: 2., y: 2.), (x: 1., y: 2.)]],
    )
}

/// Forwards to the geo kernel and counts the primitive invocations.
#[derive(Default)]
pub struct CountingKernel {
    nearest: AtomicUsize,
    contains: AtomicUsize,
}

impl CountingKernel {
    pub fn nearest_calls(&self) -> usize {
        self.nearest.load(Ordering::SeqCst)
    }

    pub fn contains_calls(&self) -> usize {
        self.contains.load(Ordering::SeqCst)
    }
}

impl Kernel for CountingKernel {
    fn nearest_point<T: Promote>(
        &self,
        query: &Point<f64>,
        shape: Shape<'_, T>,
    ) -> Option<Nearest> {
        self.nearest.fetch_add(1, Ordering::SeqCst);
        GeoKernel.nearest_point(query, shape)
    }

    fn contains<T: Promote>(&self, query: &Point<f64>, polygon: &Polygon<T>) -> bool {
        self.contains.fetch_add(1, Ordering::SeqCst);
        GeoKernel.contains(query, polygon)
    }
}
