pub mod axis;
pub mod point;

pub use axis::Axis;
pub use point::Point;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_points_are_distinct_per_coordinate_type() {
        let grid: Point<i32> = Point::new(5, -7, 4);
        let space: Point<f64> = Point::new(3.5, 7.75, -6.25);

        // Same template, different types: each only measures against its own kind
        assert_eq!(grid.distance_from(&grid), 0.0);
        assert_eq!(space.distance_from(&space), 0.0);
        assert_ne!(
            std::any::TypeId::of::<Point<i32>>(),
            std::any::TypeId::of::<Point<f64>>()
        );
    }

    #[test]
    fn test_axis_walk() {
        let p = Point::new(1, 2, 3);
        let coords: Vec<i32> = Axis::ALL.iter().map(|&axis| p[axis]).collect();
        assert_eq!(coords, vec![1, 2, 3]);
    }
}
