use geo_types::{
    Coord, CoordNum, Line, LineString, MultiLineString, MultiPoint, MultiPolygon, Point, Polygon,
    Rect, Triangle,
};

/// Coordinate types which can be widened to `f64` without failing.
///
/// Query points and geometries may use different coordinate types, all
/// arithmetic is carried out on the promoted values.
pub trait Promote: CoordNum + Send + Sync {
    fn promote(self) -> f64;
}

macro_rules! impl_promote {
    ($($t:ty),*) => {
        $(
            impl Promote for $t {
                #[inline]
                fn promote(self) -> f64 {
                    self as f64
                }
            }
        )*
    };
}

impl_promote!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);

pub fn promote_coord<T: Promote>(coord: Coord<T>) -> Coord<f64> {
    Coord {
        x: coord.x.promote(),
        y: coord.y.promote(),
    }
}

pub fn promote_point<T: Promote>(point: &Point<T>) -> Point<f64> {
    Point(promote_coord(point.0))
}

pub fn promote_line_string<T: Promote>(line_string: &LineString<T>) -> LineString<f64> {
    line_string.coords().copied().map(promote_coord).collect()
}

pub fn promote_polygon<T: Promote>(polygon: &Polygon<T>) -> Polygon<f64> {
    let exterior = promote_line_string(polygon.exterior());
    let interiors = polygon.interiors().iter().map(promote_line_string).collect();
    Polygon::new(exterior, interiors)
}

/// A geometry value, possibly empty and possibly nested.
#[derive(Clone, Debug, PartialEq)]
pub enum Geometry<T: CoordNum> {
    Empty,
    Point(Point<T>),
    LineString(LineString<T>),
    Polygon(Polygon<T>),
    MultiPoint(MultiPoint<T>),
    MultiLineString(MultiLineString<T>),
    MultiPolygon(MultiPolygon<T>),
    GeometryCollection(Vec<Geometry<T>>),
}

impl<T: CoordNum> Default for Geometry<T> {
    fn default() -> Self {
        Geometry::Empty
    }
}

impl<T: CoordNum> Geometry<T> {
    /// Number of nested collection levels, a bare geometry has depth 0.
    pub fn depth(&self) -> usize {
        match self {
            Geometry::GeometryCollection(geometries) => {
                1 + geometries.iter().map(Geometry::depth).max().unwrap_or(0)
            }
            _ => 0,
        }
    }
}

impl<T: CoordNum> From<Point<T>> for Geometry<T> {
    fn from(point: Point<T>) -> Self {
        Geometry::Point(point)
    }
}

impl<T: CoordNum> From<LineString<T>> for Geometry<T> {
    fn from(line_string: LineString<T>) -> Self {
        Geometry::LineString(line_string)
    }
}

impl<T: CoordNum> From<Line<T>> for Geometry<T> {
    fn from(line: Line<T>) -> Self {
        Geometry::LineString(LineString::new(vec![line.start, line.end]))
    }
}

impl<T: CoordNum> From<Polygon<T>> for Geometry<T> {
    fn from(polygon: Polygon<T>) -> Self {
        Geometry::Polygon(polygon)
    }
}

impl<T: CoordNum> From<Rect<T>> for Geometry<T> {
    fn from(rect: Rect<T>) -> Self {
        Geometry::Polygon(rect.to_polygon())
    }
}

impl<T: CoordNum> From<Triangle<T>> for Geometry<T> {
    fn from(triangle: Triangle<T>) -> Self {
        Geometry::Polygon(triangle.to_polygon())
    }
}

impl<T: CoordNum> From<MultiPoint<T>> for Geometry<T> {
    fn from(multi_point: MultiPoint<T>) -> Self {
        Geometry::MultiPoint(multi_point)
    }
}

impl<T: CoordNum> From<MultiLineString<T>> for Geometry<T> {
    fn from(multi_line_string: MultiLineString<T>) -> Self {
        Geometry::MultiLineString(multi_line_string)
    }
}

impl<T: CoordNum> From<MultiPolygon<T>> for Geometry<T> {
    fn from(multi_polygon: MultiPolygon<T>) -> Self {
        Geometry::MultiPolygon(multi_polygon)
    }
}

impl<T: CoordNum> From<Vec<Geometry<T>>> for Geometry<T> {
    fn from(geometries: Vec<Geometry<T>>) -> Self {
        Geometry::GeometryCollection(geometries)
    }
}

impl<T: CoordNum> From<geo_types::Geometry<T>> for Geometry<T> {
    fn from(geometry: geo_types::Geometry<T>) -> Self {
        use geo_types::Geometry as G;

        match geometry {
            G::Point(p) => p.into(),
            G::Line(l) => l.into(),
            G::LineString(ls) => ls.into(),
            G::Polygon(p) => p.into(),
            G::MultiPoint(mp) => mp.into(),
            G::MultiLineString(mls) => mls.into(),
            G::MultiPolygon(mp) => mp.into(),
            G::GeometryCollection(gc) => {
                Geometry::GeometryCollection(gc.0.into_iter().map(Geometry::from).collect())
            }
            G::Rect(r) => r.into(),
            G::Triangle(t) => t.into(),
        }
    }
}
