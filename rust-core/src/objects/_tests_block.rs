#[cfg(test)]
mod _tests_block {
    use super::super::block::Block;
    use super::super::placed_object::PlacedObject;
    use super::super::placement::Anchor;
    use crate::geometries::Point;
    use crate::render::{DrawCommand, Figure};
    use crate::surfaces::{Ground, Incline, InclineShape, SlopeDirection, Surface, Table};
    use approx::assert_abs_diff_eq;

    fn assert_point_approx_eq(a: Point, b: Point, epsilon: f64) {
        if !a.approx_eq(b, epsilon) {
            panic!("Points not approximately equal: {} != {}", a, b);
        }
    }

    fn incline(direction: SlopeDirection) -> Incline {
        Incline::new((0.0, 0.0), direction, InclineShape::WidthHeight { width: 6.0, height: 3.0 }).unwrap()
    }

    #[test]
    fn test_block_on_ground_scenario() {
        let ground = Ground::new(0.0, (-2.0, 8.0));
        let block = Block::new(2.0, 1.5, Anchor::on(&ground, 0.5));

        assert_abs_diff_eq!(block.center().x, 3.0, epsilon = 1e-12);
        assert_abs_diff_eq!(block.bottom().y, 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(block.top().y, 1.5, epsilon = 1e-12);
        assert_abs_diff_eq!(block.rotation(), 0.0, epsilon = 1e-12);
        assert!(block.is_on_surface());
    }

    #[test]
    fn test_bottom_touches_surface_origin() {
        let ground = Ground::new(0.5, (0.0, 10.0));
        let table = Table::new(1.0, 2.0, 6.0, 1.0);
        let rising = incline(SlopeDirection::Rising);
        let falling = incline(SlopeDirection::Falling);
        let surfaces: [&dyn Surface; 4] = [&ground, &table, &rising, &falling];

        for surface in surfaces {
            for i in 0..=10 {
                let t = i as f64 / 10.0;
                let block = Block::new(1.2, 0.8, Anchor::on(surface, t));
                assert_point_approx_eq(block.bottom(), surface.surface_transform(t).origin(), 1e-9);
            }
        }
    }

    #[test]
    fn test_block_on_incline_inherits_angle() {
        let falling = incline(SlopeDirection::Falling);
        let block = Block::new(1.0, 0.6, Anchor::on(&falling, 0.4));

        assert_abs_diff_eq!(block.rotation(), -falling.angle_deg(), epsilon = 1e-9);
        assert_point_approx_eq(block.surface_normal(), falling.surface_transform(0.4).normal(), 1e-12);

        // the base runs parallel to the slope
        let base = block.bottom_right() - block.bottom_left();
        assert_abs_diff_eq!(Point::ORIGIN.angle_to(base), -falling.angle_rad(), epsilon = 1e-9);
    }

    #[test]
    fn test_rotation_preserves_extents() {
        for i in 0..24 {
            let angle = -180.0 + 15.0 * i as f64;
            let block = Block::new(2.0, 1.0, Point::new(1.0, 1.0)).with_angle(angle);

            assert_abs_diff_eq!(block.top().distance_to(block.bottom()), 1.0, epsilon = 1e-9);
            assert_abs_diff_eq!(block.left().distance_to(block.right()), 2.0, epsilon = 1e-9);
            assert_point_approx_eq(block.center(), Point::new(1.0, 1.0), 1e-12);
        }
    }

    #[test]
    fn test_unrotated_accessors_are_axis_aligned() {
        let block = Block::new(2.0, 1.0, (3.0, 4.0));

        assert_point_approx_eq(block.top(), Point::new(3.0, 4.5), 1e-12);
        assert_point_approx_eq(block.bottom(), Point::new(3.0, 3.5), 1e-12);
        assert_point_approx_eq(block.left(), Point::new(2.0, 4.0), 1e-12);
        assert_point_approx_eq(block.right(), Point::new(4.0, 4.0), 1e-12);
        assert_point_approx_eq(block.top_left(), Point::new(2.0, 4.5), 1e-12);
        assert_point_approx_eq(block.bottom_right(), Point::new(4.0, 3.5), 1e-12);
        assert_eq!(block.left_at(3.8), Point::new(2.0, 3.8));
    }

    #[test]
    fn test_corner_order() {
        let block = Block::new(2.0, 1.0, (0.0, 0.0));
        let [bl, br, tr, tl] = block.corners();

        assert_point_approx_eq(bl, Point::new(-1.0, -0.5), 1e-12);
        assert_point_approx_eq(br, Point::new(1.0, -0.5), 1e-12);
        assert_point_approx_eq(tr, Point::new(1.0, 0.5), 1e-12);
        assert_point_approx_eq(tl, Point::new(-1.0, 0.5), 1e-12);
    }

    #[test]
    fn test_quarter_turn_moves_top_to_the_left() {
        let block = Block::new(2.0, 1.0, (0.0, 0.0)).with_angle(90.0);

        assert_point_approx_eq(block.top(), Point::new(-0.5, 0.0), 1e-12);
        assert_point_approx_eq(block.right(), Point::new(0.0, 1.0), 1e-12);
        assert_abs_diff_eq!(block.rotation(), 90.0, epsilon = 1e-12);
    }

    #[test]
    fn test_freestanding_frame_is_synthesized() {
        let block = Block::new(2.0, 1.0, (3.0, 2.0)).with_angle(30.0);
        let frame = block.frame();

        assert!(!block.is_on_surface());
        assert_point_approx_eq(frame.origin(), Point::new(3.0, 1.5), 1e-12);
        assert_abs_diff_eq!(frame.angle_deg(), 30.0, epsilon = 1e-9);
        assert_abs_diff_eq!(block.surface_tangent().norm(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_angle_offset_on_surface_keeps_frame() {
        let falling = incline(SlopeDirection::Falling);
        let plain = Block::new(1.0, 1.0, Anchor::on(&falling, 0.5));
        let tilted = Block::new(1.0, 1.0, Anchor::on(&falling, 0.5)).with_angle(10.0).with_angle(20.0);

        assert_eq!(plain.frame(), tilted.frame());
        assert_point_approx_eq(plain.center(), tilted.center(), 1e-12);
        assert_abs_diff_eq!(tilted.rotation(), plain.rotation() + 20.0, epsilon = 1e-9);
        assert_abs_diff_eq!(tilted.angle_offset(), 20.0);
    }

    #[test]
    fn test_from_option_falls_back_to_coordinates() {
        let ground = Ground::new(0.0, (0.0, 10.0));
        let on = Block::new(1.0, 1.0, Anchor::from_option(Some(&ground as &dyn Surface), 0.2, (7.0, 7.0)));
        let off = Block::new(1.0, 1.0, Anchor::from_option(None, 0.2, (7.0, 7.0)));

        assert_point_approx_eq(on.center(), Point::new(2.0, 0.5), 1e-12);
        assert_point_approx_eq(off.center(), Point::new(7.0, 7.0), 1e-12);
    }

    #[test]
    fn test_draw_emits_polygon_and_label() {
        let block = Block::new(1.0, 1.0, (0.0, 0.0)).with_label("m");
        let mut figure = Figure::default();
        figure.add(&block);

        assert_eq!(figure.len(), 2);
        match &figure.items()[0].command {
            DrawCommand::Polygon { points, .. } => assert_eq!(points.len(), 4),
            other => panic!("Expected polygon, got {:?}", other),
        }
        match &figure.items()[1].command {
            DrawCommand::Text { text, .. } => assert_eq!(text, "m"),
            other => panic!("Expected text, got {:?}", other),
        }
    }

    #[test]
    fn test_label_turns_with_block() {
        let slope = incline(SlopeDirection::Rising);
        let block = Block::new(1.0, 0.6, Anchor::on(&slope, 0.5)).with_angle(10.0).with_label("m");
        let mut figure = Figure::default();
        figure.add(&block);

        match &figure.items()[1].command {
            DrawCommand::Text { style, .. } => {
                assert_abs_diff_eq!(style.rotation_deg, block.rotation(), epsilon = 1e-12);
                assert!(style.rotation_deg > 10.0);
            }
            other => panic!("Expected text, got {:?}", other),
        }
    }
}
