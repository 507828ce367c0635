//! Cartesian axis names
//!
//! An [`Axis`] selects one coordinate of a [`Point`](super::Point), either
//! through [`Point::coordinate`](super::Point::coordinate) or by indexing:
//!
//! ```rust
//! use point3d::coordinates::{Axis, Point};
//!
//! let mut p = Point::new(1, 2, 3);
//! assert_eq!(p[Axis::Y], 2);
//!
//! p[Axis::Z] = 30;
//! assert_eq!(*p.z(), 30);
//! ```

use std::fmt;

/// One of the three Cartesian axes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    /// All axes in x, y, z order
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Axis::X => "x",
            Axis::Y => "y",
            Axis::Z => "z",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_axis_order_and_names() {
        let names: Vec<String> = Axis::ALL.iter().map(|a| a.to_string()).collect();
        assert_eq!(names, vec!["x", "y", "z"]);
    }
}
