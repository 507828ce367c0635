//! point3d: a generic three-dimensional point
//!
//! This crate provides [`Point`], a location in Cartesian space holding three
//! coordinates of a caller-chosen type, together with a Euclidean distance
//! that always reports an `f64`.
//!
//! ```rust
//! use point3d::Point;
//!
//! let a: Point<f64> = Point::new(0.0, 0.0, 0.0);
//! let b: Point<f64> = Point::new(3.0, 4.0, 0.0);
//! assert_eq!(a.distance_from(&b), 5.0);
//! ```

pub mod coordinates;
pub mod errors;

// Re-export commonly used types
pub use coordinates::{Axis, Point};
pub use errors::{PointError, Result};
