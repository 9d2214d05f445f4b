#[cfg(test)]
mod _tests_point {
    use super::super::point::Point;
    use crate::DiagramError;
    use approx::assert_abs_diff_eq;
    use nalgebra::Vector2;
    use std::f64::consts::PI;

    #[test]
    fn test_construction_variants() {
        let a = Point::new(1.5, -2.0);
        let b: Point = (1.5, -2.0).into();
        let c: Point = [1.5, -2.0].into();
        let d: Point = Vector2::new(1.5, -2.0).into();
        let copied = a;

        assert_eq!(a, b);
        assert_eq!(a, c);
        assert_eq!(a, d);
        assert_eq!(a, copied);
    }

    #[test]
    fn test_try_from_slice_requires_two_values() {
        let ok = Point::try_from(&[3.0, 4.0][..]).unwrap();
        assert_eq!(ok, Point::new(3.0, 4.0));

        match Point::try_from(&[1.0][..]) {
            Err(DiagramError::InvalidPoint(1)) => {}
            other => panic!("Expected InvalidPoint(1), got {:?}", other),
        }
        match Point::try_from(vec![1.0, 2.0, 3.0]) {
            Err(DiagramError::InvalidPoint(3)) => {}
            other => panic!("Expected InvalidPoint(3), got {:?}", other),
        }
    }

    #[test]
    fn test_arithmetic_with_points_and_tuples() {
        let p = Point::new(1.0, 2.0);

        assert_eq!(p + Point::new(0.5, 0.5), Point::new(1.5, 2.5));
        assert_eq!(p + (0.0, 2.0), Point::new(1.0, 4.0));
        assert_eq!(p - Point::new(1.0, 1.0), Point::new(0.0, 1.0));
        assert_eq!(p - (1.0, 2.0), Point::ORIGIN);
        assert_eq!(p * 2.0, Point::new(2.0, 4.0));
        assert_eq!(2.0 * p, Point::new(2.0, 4.0));
        assert_eq!(p / 2.0, Point::new(0.5, 1.0));
        assert_eq!(-p, Point::new(-1.0, -2.0));
    }

    #[test]
    fn test_arithmetic_leaves_operands_unchanged() {
        let p = Point::new(1.0, 1.0);
        let _ = p + (5.0, 5.0);
        let _ = p * 10.0;
        assert_eq!(p, Point::new(1.0, 1.0));
    }

    #[test]
    fn test_try_div_rejects_zero() {
        let p = Point::new(4.0, 2.0);
        assert_eq!(p.try_div(2.0).unwrap(), Point::new(2.0, 1.0));
        assert!(matches!(p.try_div(0.0), Err(DiagramError::DivisionByZero)));
    }

    #[test]
    #[should_panic(expected = "Cannot divide a point by zero")]
    fn test_div_operator_panics_on_zero() {
        let _ = Point::new(1.0, 1.0) / 0.0;
    }

    #[test]
    fn test_distance_and_angle() {
        let a = Point::new(0.0, 0.0);

        assert_abs_diff_eq!(a.distance_to((3.0, 4.0)), 5.0, epsilon = 1e-12);
        assert_abs_diff_eq!(a.angle_to((0.0, 2.0)), PI / 2.0, epsilon = 1e-12);
        assert_abs_diff_eq!(a.angle_to((-1.0, 0.0)), PI, epsilon = 1e-12);
        assert_abs_diff_eq!(Point::new(1.0, 1.0).angle_to((2.0, 2.0)), PI / 4.0, epsilon = 1e-12);
    }

    #[test]
    fn test_normalized_and_midpoint() {
        let n = Point::new(3.0, 4.0).normalized().unwrap();
        assert_abs_diff_eq!(n.norm(), 1.0, epsilon = 1e-12);
        assert!(Point::ORIGIN.normalized().is_none());

        assert_eq!(Point::new(0.0, 0.0).midpoint(Point::new(2.0, 4.0)), Point::new(1.0, 2.0));
    }

    #[test]
    fn test_interop_conversions() {
        let p = Point::new(1.25, -3.5);
        assert_eq!(p.to_tuple(), (1.25, -3.5));
        assert_eq!(p.to_array(), [1.25, -3.5]);
        assert_eq!(p.to_vector(), Vector2::new(1.25, -3.5));
        assert_eq!(format!("{}", p), "Point(1.25, -3.50)");
    }
}
