#[cfg(test)]
mod _tests_incline {
    use super::super::incline::{Incline, InclineShape, SlopeDirection};
    use super::super::surface::Surface;
    use crate::geometries::Point;
    use crate::objects::PlacedObject;
    use crate::render::{DrawCommand, Figure};
    use crate::DiagramError;
    use approx::assert_abs_diff_eq;

    fn assert_point_approx_eq(a: Point, b: Point, epsilon: f64) {
        if !a.approx_eq(b, epsilon) {
            panic!("Points not approximately equal: {} != {}", a, b);
        }
    }

    fn incline(direction: SlopeDirection) -> Incline {
        Incline::new(
            (0.0, 0.0),
            direction,
            InclineShape::WidthHeight {
                width: 6.0,
                height: 3.0,
            },
        )
        .unwrap()
    }

    #[test]
    fn test_falling_incline_scenario() {
        let incline = incline(SlopeDirection::Falling);

        assert_abs_diff_eq!(incline.angle_rad(), 3.0_f64.atan2(6.0), epsilon = 1e-12);
        assert_abs_diff_eq!(incline.angle_rad(), 0.4636, epsilon = 1e-4);
        assert_point_approx_eq(incline.point_on_surface(0.0), Point::new(0.0, 3.0), 1e-12);
        assert_point_approx_eq(incline.point_on_surface(1.0), Point::new(6.0, 0.0), 1e-12);
        assert_eq!(incline.slope_start(), Point::new(0.0, 3.0));
        assert_eq!(incline.slope_end(), Point::new(6.0, 0.0));
    }

    #[test]
    fn test_rising_incline_ends() {
        let incline = incline(SlopeDirection::Rising);

        assert_eq!(incline.slope_start(), Point::new(6.0, 3.0));
        assert_eq!(incline.slope_end(), Point::new(0.0, 0.0));
        assert_point_approx_eq(incline.point_on_surface(0.0), Point::new(0.0, 0.0), 1e-12);
        assert_point_approx_eq(incline.point_on_surface(1.0), Point::new(6.0, 3.0), 1e-12);
    }

    #[test]
    fn test_t_zero_is_always_left() {
        for direction in [SlopeDirection::Rising, SlopeDirection::Falling] {
            let incline = incline(direction);
            let left = incline.point_on_surface(0.0);
            let right = incline.point_on_surface(1.0);

            assert_abs_diff_eq!(left.x, 0.0, epsilon = 1e-12);
            assert_abs_diff_eq!(right.x, 6.0, epsilon = 1e-12);
            for i in 0..10 {
                let t = i as f64 / 10.0;
                assert!(incline.point_on_surface(t).x < incline.point_on_surface(t + 0.1).x);
            }
        }
    }

    #[test]
    fn test_frame_tangent_points_right() {
        let rising = incline(SlopeDirection::Rising).surface_transform(0.5);
        let falling = incline(SlopeDirection::Falling).surface_transform(0.5);

        assert!(rising.tangent().x > 0.0 && rising.tangent().y > 0.0);
        assert!(falling.tangent().x > 0.0 && falling.tangent().y < 0.0);
        assert!(rising.normal().y > 0.0);
        assert!(falling.normal().y > 0.0);
        assert_abs_diff_eq!(rising.angle(), -falling.angle(), epsilon = 1e-12);
    }

    #[test]
    fn test_frame_origin_lies_on_slope() {
        for direction in [SlopeDirection::Rising, SlopeDirection::Falling] {
            let incline = incline(direction);
            for i in 0..=10 {
                let t = i as f64 / 10.0;
                let frame = incline.surface_transform(t);
                assert_point_approx_eq(frame.origin(), incline.point_on_surface(t), 1e-12);

                // Moving along the tangent stays on the slope line
                let along = frame.local_to_world((0.5, 0.0));
                let local = incline.surface_transform(0.0).world_to_local(along);
                assert_abs_diff_eq!(local.y, 0.0, epsilon = 1e-9);
            }
        }
    }

    #[test]
    fn test_parameter_equivalence() {
        let angle_deg = 2.0_f64.atan2(3.0).to_degrees();
        let shapes = [
            InclineShape::WidthHeight { width: 3.0, height: 2.0 },
            InclineShape::WidthAngle { width: 3.0, angle_deg },
            InclineShape::HeightAngle { height: 2.0, angle_deg },
        ];

        for shape in shapes {
            let incline = Incline::new((0.0, 0.0), SlopeDirection::Rising, shape).unwrap();
            assert_abs_diff_eq!(incline.angle_rad(), 2.0_f64.atan2(3.0), epsilon = 1e-9);
            assert_abs_diff_eq!(incline.width(), 3.0, epsilon = 1e-9);
            assert_abs_diff_eq!(incline.height(), 2.0, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_from_options_requires_exactly_one_pair() {
        assert_eq!(
            InclineShape::from_options(Some(3.0), Some(2.0), None).unwrap(),
            InclineShape::WidthHeight { width: 3.0, height: 2.0 }
        );
        assert_eq!(
            InclineShape::from_options(None, Some(2.0), Some(30.0)).unwrap(),
            InclineShape::HeightAngle { height: 2.0, angle_deg: 30.0 }
        );

        let rejected = [
            (None, None, None),
            (Some(3.0), None, None),
            (None, None, Some(30.0)),
            (Some(3.0), Some(2.0), Some(30.0)),
        ];
        for (w, h, a) in rejected {
            assert!(matches!(
                InclineShape::from_options(w, h, a),
                Err(DiagramError::InvalidInclineParameters(_))
            ));
        }
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        let bad = [
            InclineShape::WidthHeight { width: 0.0, height: 2.0 },
            InclineShape::WidthHeight { width: 3.0, height: -1.0 },
            InclineShape::WidthAngle { width: 3.0, angle_deg: 90.0 },
            InclineShape::HeightAngle { height: 2.0, angle_deg: 0.0 },
            InclineShape::WidthAngle { width: f64::NAN, angle_deg: 30.0 },
        ];
        for shape in bad {
            assert!(matches!(
                Incline::new((0.0, 0.0), SlopeDirection::Falling, shape),
                Err(DiagramError::InvalidInclineParameters(_))
            ));
        }
    }

    #[test]
    fn test_slope_direction_parsing() {
        assert_eq!("+".parse::<SlopeDirection>().unwrap(), SlopeDirection::Rising);
        assert_eq!("-".parse::<SlopeDirection>().unwrap(), SlopeDirection::Falling);
        assert_eq!(SlopeDirection::Falling.to_string(), "-");
        assert!(matches!(
            "left".parse::<SlopeDirection>(),
            Err(DiagramError::InvalidSlopeDirection(_))
        ));
    }

    #[test]
    fn test_angle_mark_sits_in_the_low_corner() {
        let falling = incline(SlopeDirection::Falling);
        let mark = falling.angle_mark();
        assert_eq!(mark.center, Point::new(6.0, 0.0));
        assert_abs_diff_eq!(mark.end_deg - mark.start_deg, falling.angle_deg(), epsilon = 1e-12);
        assert_abs_diff_eq!(mark.end_deg, 180.0, epsilon = 1e-12);

        let rising = incline(SlopeDirection::Rising).angle_mark();
        assert_eq!(rising.center, Point::new(0.0, 0.0));
        assert_abs_diff_eq!(rising.start_deg, 0.0, epsilon = 1e-12);

        // label sits on the bisector, inside the ramp
        let label = rising.label_position();
        assert!(label.x > 0.0 && label.y > 0.0);
    }

    #[test]
    fn test_angle_mark_uses_resolved_width() {
        let incline = Incline::new(
            (1.0, 0.0),
            SlopeDirection::Falling,
            InclineShape::HeightAngle { height: 2.0, angle_deg: 45.0 },
        )
        .unwrap();

        assert_point_approx_eq(incline.angle_mark().center, Point::new(3.0, 0.0), 1e-9);
    }

    #[test]
    fn test_placed_object_accessors() {
        let incline = incline(SlopeDirection::Rising);
        assert_eq!(incline.center(), Point::new(3.0, 1.5));
        assert_eq!(incline.vertices()[2], Point::new(6.0, 0.0));
        assert_abs_diff_eq!(incline.slope_length(), 45.0_f64.sqrt(), epsilon = 1e-12);
    }

    #[test]
    fn test_draw_without_angle_mark() {
        let mut with_mark = Figure::default();
        with_mark.add(&incline(SlopeDirection::Rising));
        let mut without_mark = Figure::default();
        without_mark.add(&incline(SlopeDirection::Rising).with_angle_mark(false));

        assert_eq!(with_mark.len(), without_mark.len() + 2);
        let has_arc = |figure: &Figure| {
            figure
                .items()
                .iter()
                .any(|item| matches!(item.command, DrawCommand::Arc { .. }))
        };
        assert!(has_arc(&with_mark));
        assert!(!has_arc(&without_mark));
    }
}
