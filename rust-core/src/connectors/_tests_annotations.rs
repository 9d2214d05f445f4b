#[cfg(test)]
mod _tests_annotations {
    use super::super::annotations::{AngleArc, CoordAxes, FormulaBox};
    use crate::geometries::{Point, Transform2D};
    use crate::render::{DrawCommand, Figure};
    use approx::assert_abs_diff_eq;

    fn assert_point_approx_eq(a: Point, b: Point, epsilon: f64) {
        if !a.approx_eq(b, epsilon) {
            panic!("Points not approximately equal: {} != {}", a, b);
        }
    }

    #[test]
    fn test_angle_arc_label_on_bisector() {
        let arc = AngleArc::new((0.0, 0.0), 1.0, 0.0, 90.0).with_label("θ");
        let expected = Point::from_angle(45f64.to_radians()) * 1.3;
        assert_point_approx_eq(arc.label_position(), expected, 1e-12);
    }

    #[test]
    fn test_angle_arc_is_dashed() {
        let mut figure = Figure::default();
        figure.add(&AngleArc::new((0.0, 0.0), 1.0, 10.0, 40.0));

        assert_eq!(figure.len(), 1);
        match &figure.items()[0].command {
            DrawCommand::Arc { stroke, start_deg, end_deg, .. } => {
                assert!(stroke.dashed);
                assert_abs_diff_eq!(*start_deg, 10.0);
                assert_abs_diff_eq!(*end_deg, 40.0);
            }
            other => panic!("Expected arc, got {:?}", other),
        }
    }

    #[test]
    fn test_axes_are_orthogonal() {
        for i in 0..8 {
            let axes = CoordAxes::new((1.0, 1.0), 45.0 * i as f64).with_length(2.0);
            let x = axes.x_end() - Point::new(1.0, 1.0);
            let y = axes.y_end() - Point::new(1.0, 1.0);
            assert_abs_diff_eq!(x.dot(y), 0.0, epsilon = 1e-12);
            assert_abs_diff_eq!(x.norm(), 2.0, epsilon = 1e-12);
            // y' is x' turned a quarter counterclockwise
            assert_abs_diff_eq!(x.x * y.y - x.y * y.x, 4.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_axes_from_frame_follow_tangent_and_normal() {
        let frame = Transform2D::from_degrees((2.0, 0.0), -30.0);
        let axes = CoordAxes::from_frame(&frame);

        assert_point_approx_eq(axes.x_end(), frame.origin() + frame.tangent() * 1.5, 1e-12);
        assert_point_approx_eq(axes.y_end(), frame.origin() + frame.normal() * 1.5, 1e-12);
    }

    #[test]
    fn test_axes_draw_two_arrows_and_labels() {
        let mut figure = Figure::default();
        figure.add(&CoordAxes::new((0.0, 0.0), 0.0).with_labels("x", "y"));

        let arrows = figure
            .items()
            .iter()
            .filter(|item| matches!(item.command, DrawCommand::Arrow { .. }))
            .count();
        assert_eq!(arrows, 2);
        assert_eq!(figure.len(), 4);
    }

    #[test]
    fn test_formula_box_grows_with_text() {
        let short = FormulaBox::new((0.0, 0.0), "F = ma");
        let long = FormulaBox::new((0.0, 0.0), "F = ma\na = g sin θ - μ g cos θ");

        let (sw, sh) = short.half_extents(60.0);
        let (lw, lh) = long.half_extents(60.0);
        assert!(lw > sw);
        assert!(lh > sh);
    }

    #[test]
    fn test_formula_box_panel_centered() {
        let mut figure = Figure::default();
        figure.add(&FormulaBox::new((3.0, 2.0), "p = mv"));

        match &figure.items()[0].command {
            DrawCommand::Polygon { points, style } => {
                let center = points[0].midpoint(points[2]);
                assert_point_approx_eq(center, Point::new(3.0, 2.0), 1e-12);
                assert_abs_diff_eq!(style.fill_opacity, 0.8);
            }
            other => panic!("Expected polygon, got {:?}", other),
        }
    }
}
