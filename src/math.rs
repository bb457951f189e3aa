
//! Simple math utilities: positions and integer rectangles.

use std::convert::TryFrom;

/// Simple two-dimensional vector of any numerical type.
/// Supports only few mathematical operations
/// as this is used mainly as data struct.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct Vec2<T> (pub T, pub T);

impl<T> Vec2<T> {

    /// Maps all components of this vector to a new type, yielding a vector of that new type.
    pub fn map<B>(self, map: impl Fn(T) -> B) -> Vec2<B> {
        Vec2(map(self.0), map(self.1))
    }

    /// Try to convert all components of this vector to a new type,
    /// yielding either a vector of that new type, or an error.
    pub fn try_from<S>(value: Vec2<S>) -> std::result::Result<Self, T::Error> where T: TryFrom<S> {
        let x = T::try_from(value.0)?;
        let y = T::try_from(value.1)?;
        Ok(Vec2(x, y))
    }

    /// Seeing this vector as a dimension or size (width and height),
    /// this returns the area that this dimensions contains (`width * height`).
    pub fn area(self) -> T where T: std::ops::Mul<T, Output = T> {
        self.0 * self.1
    }

    /// The first component of this 2D vector.
    #[inline] pub fn x(self) -> T { self.0 }

    /// The second component of this 2D vector.
    #[inline] pub fn y(self) -> T { self.1 }

    /// The first component of this 2D vector.
    #[inline] pub fn width(self) -> T { self.0 }

    /// The second component of this 2D vector.
    #[inline] pub fn height(self) -> T { self.1 }
}


impl<T: std::ops::Add<T>> std::ops::Add<Vec2<T>> for Vec2<T> {
    type Output = Vec2<T::Output>;
    fn add(self, other: Vec2<T>) -> Self::Output {
        Vec2(self.0 + other.0, self.1 + other.1)
    }
}

impl<T: std::ops::Sub<T>> std::ops::Sub<Vec2<T>> for Vec2<T> {
    type Output = Vec2<T::Output>;
    fn sub(self, other: Vec2<T>) -> Self::Output {
        Vec2(self.0 - other.0, self.1 - other.1)
    }
}

impl<T> From<(T, T)> for Vec2<T> {
    fn from((x, y): (T, T)) -> Self { Vec2(x, y) }
}

impl<T> From<Vec2<T>> for (T, T) {
    fn from(vec2: Vec2<T>) -> Self { (vec2.0, vec2.1) }
}


/// A rectangular section anywhere in 2D integer space.
/// Contains every point `p` with `min <= p < max` in both dimensions.
/// A rectangle with `max <= min` in any dimension contains no points at all.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Default, Hash)]
pub struct Rect {

    /// The top left corner of this rectangle.
    /// Included in the rectangle if the rectangle is not empty.
    pub min: Vec2<i32>,

    /// The bottom right corner of this rectangle.
    /// Not included in the rectangle, just like `Vec::len()`.
    pub max: Vec2<i32>,
}

impl Rect {

    /// The rectangle at (0,0) without any size.
    pub const ZERO: Rect = Rect { min: Vec2(0, 0), max: Vec2(0, 0) };

    /// Create a rectangle from two corners. The corners are used as given,
    /// so `max < min` results in an empty rectangle.
    pub fn new(min: impl Into<Vec2<i32>>, max: impl Into<Vec2<i32>>) -> Self {
        Rect { min: min.into(), max: max.into() }
    }

    /// Create a rectangle with a size, starting at zero.
    /// Panics if the size does not fit into `i32`.
    pub fn from_size(size: impl Into<Vec2<usize>>) -> Self {
        let size: Vec2<usize> = size.into();
        let size = Vec2::try_from(size).expect("rectangle size too large");
        Rect { min: Vec2(0, 0), max: size }
    }

    /// The horizontal extent, `max.x - min.x`. Negative for inverted rectangles.
    #[inline]
    pub fn width(self) -> i32 { self.max.x() - self.min.x() }

    /// The vertical extent, `max.y - min.y`. Negative for inverted rectangles.
    #[inline]
    pub fn height(self) -> i32 { self.max.y() - self.min.y() }

    /// Width and height, where negative extents count as zero.
    pub fn size(self) -> Vec2<usize> {
        (self.max - self.min).map(|extent| usize::try_from(extent).unwrap_or(0))
    }

    /// Whether this rectangle contains no points.
    #[inline]
    pub fn is_empty(self) -> bool {
        self.width() <= 0 || self.height() <= 0
    }

    /// Whether the point lies inside this rectangle.
    #[inline]
    pub fn contains_point(self, point: Vec2<i32>) -> bool {
           point.x() >= self.min.x() && point.x() < self.max.x()
        && point.y() >= self.min.y() && point.y() < self.max.y()
    }

    /// Returns whether every point of the other rectangle lies inside this rectangle.
    /// An empty rectangle is inside every rectangle.
    pub fn contains(self, subset: Rect) -> bool {
        if subset.is_empty() { return true; }

           subset.min.x() >= self.min.x()
        && subset.min.y() >= self.min.y()
        && subset.max.x() <= self.max.x()
        && subset.max.y() <= self.max.y()
    }

    /// The largest rectangle contained in both rectangles.
    /// Returns `Rect::ZERO` if they do not overlap.
    pub fn intersection(self, other: Rect) -> Rect {
        let min = Vec2(self.min.x().max(other.min.x()), self.min.y().max(other.min.y()));
        let max = Vec2(self.max.x().min(other.max.x()), self.max.y().min(other.max.y()));

        let intersection = Rect { min, max };
        if intersection.is_empty() { Rect::ZERO } else { intersection }
    }

    /// Create a new rectangle which is offset by the specified amount.
    pub fn translated(self, offset: Vec2<i32>) -> Rect {
        Rect { min: self.min + offset, max: self.max + offset }
    }

    /// Iterate all points in this rectangle, row by row.
    pub fn points(self) -> impl Iterator<Item = Vec2<i32>> {
        let Rect { min, max } = self;
        (min.y() .. max.y()).flat_map(move |y| (min.x() .. max.x()).map(move |x| Vec2(x, y)))
    }

    /// Divide the interval `[start, start + length)` into `parts` pieces and return the
    /// start of piece `index`. Piece sizes differ by at most one.
    #[inline]
    pub(crate) fn split_boundary(start: i32, length: i32, index: usize, parts: usize) -> i32 {
        let offset = i64::from(length) * index as i64 / parts as i64;
        start + offset as i32
    }
}

impl std::fmt::Display for Rect {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "({},{})-({},{})", self.min.x(), self.min.y(), self.max.x(), self.max.y())
    }
}
