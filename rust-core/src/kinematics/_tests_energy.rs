#[cfg(test)]
mod _tests_energy {
    use super::super::energy::{FreeFall, InclineSlide, WorkEnergyPush};
    use crate::config::DEFAULT_GRAVITY;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_free_fall_scene_values() {
        let fall = FreeFall::new(2.0, DEFAULT_GRAVITY, 5.0).unwrap();
        assert_abs_diff_eq!(fall.fall_time(), 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(fall.impact_speed(), 10.0, epsilon = 1e-12);
        assert_abs_diff_eq!(fall.total_energy(), 100.0);
    }

    #[test]
    fn test_free_fall_energy_conserved() {
        let fall = FreeFall::new(2.0, DEFAULT_GRAVITY, 5.0).unwrap();
        for i in 0..=20 {
            let t = i as f64 * 0.05;
            assert_abs_diff_eq!(
                fall.potential_energy(t) + fall.kinetic_energy(t),
                fall.total_energy(),
                epsilon = 1e-9
            );
        }
    }

    #[test]
    fn test_free_fall_stops_at_ground() {
        let fall = FreeFall::new(1.0, 9.8, 2.0).unwrap();
        assert_eq!(fall.height(10.0), 0.0);
        assert_abs_diff_eq!(fall.speed(10.0), fall.impact_speed());
        assert_abs_diff_eq!(fall.height(-1.0), 2.0);
    }

    #[test]
    fn test_incline_slide_scene_values() {
        let slide = InclineSlide::new(2.0, DEFAULT_GRAVITY, 5.0, 30.0).unwrap();
        assert_abs_diff_eq!(slide.acceleration(), 5.0, epsilon = 1e-12);
        assert_abs_diff_eq!(slide.slope_length(), 10.0, epsilon = 1e-12);
        assert_abs_diff_eq!(slide.time_to_bottom(), 2.0, epsilon = 1e-12);
        assert_abs_diff_eq!(slide.speed_at(slide.slope_length()), 10.0, epsilon = 1e-9);
    }

    #[test]
    fn test_incline_energy_conserved_along_slope() {
        let slide = InclineSlide::new(2.0, DEFAULT_GRAVITY, 5.0, 30.0).unwrap();
        let total = slide.potential_energy_at(0.0);
        for i in 0..=10 {
            let s = i as f64;
            assert_abs_diff_eq!(
                slide.potential_energy_at(s) + slide.kinetic_energy_at(s),
                total,
                epsilon = 1e-9
            );
        }
    }

    #[test]
    fn test_incline_distance_clamps() {
        let slide = InclineSlide::new(1.0, DEFAULT_GRAVITY, 5.0, 30.0).unwrap();
        assert_abs_diff_eq!(slide.distance(1.0), 2.5, epsilon = 1e-12);
        assert_abs_diff_eq!(slide.distance(9.0), slide.slope_length());
        assert_abs_diff_eq!(slide.height_at(50.0), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_work_energy_push_scene_values() {
        let push = WorkEnergyPush::new(2.0, 4.0, 5.0, 0.0).unwrap();
        assert_abs_diff_eq!(push.acceleration(), 2.0, epsilon = 1e-12);
        assert_abs_diff_eq!(push.push_time(), 5.0_f64.sqrt(), epsilon = 1e-12);
        assert_abs_diff_eq!(push.final_speed(), 20.0_f64.sqrt(), epsilon = 1e-12);
        assert_abs_diff_eq!(push.position(push.push_time()), 5.0, epsilon = 1e-9);
    }

    #[test]
    fn test_work_equals_kinetic_energy_gain() {
        let push = WorkEnergyPush::new(2.0, 4.0, 5.0, 0.0).unwrap();
        for i in 0..=30 {
            let t = i as f64 * 0.1;
            assert_abs_diff_eq!(push.work(t), push.kinetic_energy(t), epsilon = 1e-9);
        }
        assert_abs_diff_eq!(push.work(10.0), 20.0, epsilon = 1e-9);
    }

    #[test]
    fn test_angled_push_only_counts_component() {
        let push = WorkEnergyPush::new(2.0, 4.0, 5.0, 60.0).unwrap();
        assert_abs_diff_eq!(push.effective_force(), 2.0, epsilon = 1e-12);
        assert_abs_diff_eq!(push.work(push.push_time()), 10.0, epsilon = 1e-9);
        assert_abs_diff_eq!(push.kinetic_energy(push.push_time()), 10.0, epsilon = 1e-9);
    }

    #[test]
    fn test_push_coasts_after_release() {
        let push = WorkEnergyPush::new(2.0, 4.0, 5.0, 0.0).unwrap();
        let t_push = push.push_time();
        assert_abs_diff_eq!(push.velocity(t_push + 1.0), push.final_speed(), epsilon = 1e-12);
        assert_abs_diff_eq!(push.position(t_push + 1.0), 5.0 + push.final_speed(), epsilon = 1e-9);
        assert_eq!(push.force_at(t_push + 0.1), 0.0);
        assert_eq!(push.force_at(0.0), 4.0);
    }

    #[test]
    fn test_invalid_parameters() {
        assert!(FreeFall::new(0.0, 10.0, 5.0).is_err());
        assert!(FreeFall::new(1.0, 10.0, -5.0).is_err());
        assert!(InclineSlide::new(1.0, 10.0, 5.0, 90.0).is_err());
        assert!(InclineSlide::new(1.0, 10.0, 5.0, 0.0).is_err());
        assert!(WorkEnergyPush::new(2.0, 4.0, 5.0, 90.0).is_err());
        assert!(WorkEnergyPush::new(2.0, -4.0, 5.0, 0.0).is_err());
    }
}
