//! # Generic Point Module
//!
//! This module provides [`Point`], a location in three-dimensional Cartesian
//! space whose coordinate type is chosen by the caller.
//!
//! ## Coordinate Types
//!
//! The container itself places no restriction on the coordinate type:
//! - `Point<f64>` for continuous space with double precision
//! - `Point<f32>` when memory or speed matters more than precision
//! - `Point<i32>` / `Point<i64>` for discrete grids
//! - any custom type, including non-numeric ones
//!
//! `Point<f64>` and `Point<i32>` are distinct types and never mix.
//!
//! ## Distance
//!
//! [`Point::distance_from`] is only available when the coordinate type can
//! be subtracted, the difference multiplied, the products summed, and the
//! sum cast to `f64`. The result is always an `f64`, even for integral
//! coordinates.
//!
//! ## Examples
//!
//! ```rust
//! use point3d::coordinates::Point;
//!
//! let origin = Point::new(0.0, 0.0, 0.0);
//! let corner = Point::new(3.0, 4.0, 0.0);
//! assert_eq!(origin.distance_from(&corner), 5.0);
//!
//! let grid_a = Point::new(0, 0, 0);
//! let grid_b = Point::new(1, 1, 1);
//! assert!((grid_a.distance_from(&grid_b) - 3f64.sqrt()).abs() < 1e-15);
//! ```
//!
//! A point of strings is a perfectly good container:
//!
//! ```rust
//! use point3d::coordinates::Point;
//!
//! let labels = Point::new("east".to_string(), "north".to_string(), "up".to_string());
//! assert_eq!(labels.y(), "north");
//! ```
//!
//! but asking for its distance is rejected by the compiler, since strings
//! cannot be subtracted:
//!
//! ```compile_fail
//! use point3d::coordinates::Point;
//!
//! let a = Point::new("a".to_string(), "b".to_string(), "c".to_string());
//! let b = a.clone();
//! let _ = a.distance_from(&b);
//! ```

use std::fmt;
use std::ops::{Add, Index, IndexMut, Mul, Sub};
use std::str::FromStr;

use log::trace;
use nalgebra::{Scalar, Vector3};
use num_traits::AsPrimitive;

use super::Axis;
use crate::errors::{component_err, PointError, Result};

/// Three-dimensional point with a caller-chosen coordinate type
///
/// Holds exactly three coordinates of the same type `C`. Coordinates are
/// stored as given; no validation, normalization or conversion happens at
/// construction time (NaN and infinities are accepted as-is).
///
/// Each coordinate is read through `x()`, `y()`, `z()` and replaced
/// through `x_mut()`, `y_mut()`, `z_mut()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Point<C> {
    x: C,
    y: C,
    z: C,
}

impl<C> Point<C> {
    /// Creates a new point from its three coordinates
    ///
    /// # Examples
    ///
    /// ```rust
    /// use point3d::coordinates::Point;
    ///
    /// let p = Point::new(3.5, 7.75, -6.25);
    /// assert_eq!(*p.x(), 3.5);
    /// assert_eq!(*p.y(), 7.75);
    /// assert_eq!(*p.z(), -6.25);
    /// ```
    pub fn new(x: C, y: C, z: C) -> Self {
        Point { x, y, z }
    }

    /// The x-coordinate
    pub fn x(&self) -> &C {
        &self.x
    }

    /// Mutable access to the x-coordinate
    ///
    /// ```rust
    /// use point3d::coordinates::Point;
    ///
    /// let mut p = Point::new(5, -7, 4);
    /// *p.x_mut() = 10;
    /// assert_eq!(p, Point::new(10, -7, 4));
    /// ```
    pub fn x_mut(&mut self) -> &mut C {
        &mut self.x
    }

    /// The y-coordinate
    pub fn y(&self) -> &C {
        &self.y
    }

    /// Mutable access to the y-coordinate
    pub fn y_mut(&mut self) -> &mut C {
        &mut self.y
    }

    /// The z-coordinate
    pub fn z(&self) -> &C {
        &self.z
    }

    /// Mutable access to the z-coordinate
    pub fn z_mut(&mut self) -> &mut C {
        &mut self.z
    }

    /// The coordinate along `axis`
    pub fn coordinate(&self, axis: Axis) -> &C {
        match axis {
            Axis::X => &self.x,
            Axis::Y => &self.y,
            Axis::Z => &self.z,
        }
    }

    /// Mutable access to the coordinate along `axis`
    pub fn coordinate_mut(&mut self, axis: Axis) -> &mut C {
        match axis {
            Axis::X => &mut self.x,
            Axis::Y => &mut self.y,
            Axis::Z => &mut self.z,
        }
    }

    /// Consumes the point, returning `(x, y, z)`
    pub fn into_tuple(self) -> (C, C, C) {
        (self.x, self.y, self.z)
    }

    /// Calculates the squared Euclidean distance to another point
    ///
    /// Same computation as [`distance_from`](Self::distance_from) without
    /// the final square root. The sum is formed in the coordinate
    /// arithmetic and only then cast to `f64`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use point3d::coordinates::Point;
    ///
    /// let a = Point::new(1, 2, 3);
    /// let b = Point::new(4, 6, 3);
    /// assert_eq!(a.squared_distance_from(&b), 25.0);
    /// ```
    pub fn squared_distance_from<D, S>(&self, other: &Point<C>) -> f64
    where
        C: Clone + Sub<Output = D>,
        D: Clone + Mul<Output = S>,
        S: Add<Output = S> + AsPrimitive<f64>,
    {
        let sum = squared_difference(&self.x, &other.x)
            + squared_difference(&self.y, &other.y)
            + squared_difference(&self.z, &other.z);
        sum.as_()
    }

    /// Calculates the Euclidean distance to another point
    ///
    /// Computes `sqrt((x1-x2)² + (y1-y2)² + (z1-z2)²)`, squaring each
    /// difference by multiplying it with itself. The result is always an
    /// `f64` regardless of the coordinate type.
    ///
    /// Neither point is modified. There is no overflow handling beyond the
    /// coordinate type's own arithmetic: integer coordinates that overflow
    /// panic in debug builds, exactly as the bare arithmetic would.
    ///
    /// # Unsigned coordinates
    ///
    /// With unsigned coordinate types such as `u32`, `a - b` underflows
    /// whenever `b` is larger on some axis, so `p.distance_from(&q)` may
    /// panic in debug builds while `q.distance_from(&p)` succeeds. Prefer a
    /// signed or floating point coordinate type for such data, or give the
    /// coordinate type a `Sub` whose output is a signed offset type.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use point3d::coordinates::Point;
    ///
    /// let a = Point::new(-1.0, -1.0, -1.0);
    /// let b = Point::new(1.0, 1.0, 1.0);
    /// assert!((a.distance_from(&b) - 2.0 * 3f64.sqrt()).abs() < 1e-15);
    /// ```
    pub fn distance_from<D, S>(&self, other: &Point<C>) -> f64
    where
        C: Clone + Sub<Output = D>,
        D: Clone + Mul<Output = S>,
        S: Add<Output = S> + AsPrimitive<f64>,
    {
        let squared = self.squared_distance_from(other);
        let distance = squared.sqrt();
        trace!("distance evaluated: squared={} distance={}", squared, distance);
        distance
    }
}

/// `(a - b) * (a - b)` in the coordinate arithmetic
fn squared_difference<C, D, S>(a: &C, b: &C) -> S
where
    C: Clone + Sub<Output = D>,
    D: Clone + Mul<Output = S>,
{
    let diff = a.clone() - b.clone();
    diff.clone() * diff
}

impl<C: Scalar> Point<C> {
    /// Converts to nalgebra Vector3 for linear algebra operations
    ///
    /// # Examples
    ///
    /// ```rust
    /// use point3d::coordinates::Point;
    /// use nalgebra::Vector3;
    ///
    /// let p = Point::new(1.0, 2.0, 3.0);
    /// let vec: Vector3<f64> = p.to_vector3();
    /// assert_eq!(vec, Vector3::new(1.0, 2.0, 3.0));
    /// ```
    pub fn to_vector3(&self) -> Vector3<C> {
        Vector3::new(self.x.clone(), self.y.clone(), self.z.clone())
    }

    /// Creates from nalgebra Vector3
    pub fn from_vector3(vec: Vector3<C>) -> Self {
        Point::new(vec.x.clone(), vec.y.clone(), vec.z.clone())
    }
}

impl<C> From<(C, C, C)> for Point<C> {
    fn from((x, y, z): (C, C, C)) -> Self {
        Point::new(x, y, z)
    }
}

impl<C> From<[C; 3]> for Point<C> {
    fn from([x, y, z]: [C; 3]) -> Self {
        Point::new(x, y, z)
    }
}

impl<C> Index<Axis> for Point<C> {
    type Output = C;

    fn index(&self, axis: Axis) -> &C {
        self.coordinate(axis)
    }
}

impl<C> IndexMut<Axis> for Point<C> {
    fn index_mut(&mut self, axis: Axis) -> &mut C {
        self.coordinate_mut(axis)
    }
}

impl<C: fmt::Display> fmt::Display for Point<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

/// Parses `x,y,z`, optionally wrapped in parentheses
///
/// ```rust
/// use point3d::coordinates::Point;
///
/// let p: Point<i64> = "(1, -2, 3)".parse().unwrap();
/// assert_eq!(p, Point::new(1, -2, 3));
/// ```
impl<C> FromStr for Point<C>
where
    C: FromStr,
    C::Err: fmt::Display,
{
    type Err = PointError;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        let inner = trimmed
            .strip_prefix('(')
            .and_then(|rest| rest.strip_suffix(')'))
            .unwrap_or(trimmed);

        let parts: Vec<&str> = inner.split(',').map(str::trim).collect();
        let [x, y, z] = parts.as_slice() else {
            return Err(PointError::WrongComponentCount { found: parts.len() });
        };

        Ok(Point::new(
            parse_component(Axis::X, x)?,
            parse_component(Axis::Y, y)?,
            parse_component(Axis::Z, z)?,
        ))
    }
}

fn parse_component<C>(axis: Axis, text: &str) -> Result<C>
where
    C: FromStr,
    C::Err: fmt::Display,
{
    text.parse().map_err(|e| component_err(axis, text, e))
}
