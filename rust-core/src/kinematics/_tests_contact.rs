#[cfg(test)]
mod _tests_contact {
    use super::super::contact::SpringContact;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    fn landing() -> SpringContact {
        SpringContact::new(19.6, 9.8, 0.1).unwrap()
    }

    #[test]
    fn test_average_force_times_duration_is_impulse() {
        let contact = landing();
        assert_relative_eq!(contact.average_force() * contact.duration, contact.impulse, max_relative = 1e-12);
    }

    #[test]
    fn test_force_integrates_to_impulse() {
        let contact = landing();
        let n = 10_000;
        let h = contact.duration / n as f64;
        let integral: f64 = (0..n).map(|i| contact.force((i as f64 + 0.5) * h) * h).sum();
        assert_relative_eq!(integral, contact.impulse, max_relative = 1e-6);
    }

    #[test]
    fn test_peak_force_at_one_third() {
        let contact = landing();
        assert_relative_eq!(contact.force(contact.peak_time()), contact.peak_force(), max_relative = 1e-12);
        assert!(contact.force(contact.peak_time() * 0.9) < contact.peak_force());
        assert!(contact.force(contact.peak_time() * 1.1) < contact.peak_force());
        assert!(contact.peak_force() > contact.average_force());
    }

    #[test]
    fn test_velocity_continuous_at_both_ends() {
        let contact = landing();
        let eps = 1e-9;
        assert_abs_diff_eq!(contact.velocity(eps), contact.impact_speed, epsilon = 1e-6);
        assert_abs_diff_eq!(contact.velocity(contact.duration - eps), 0.0, epsilon = 1e-6);
        assert_abs_diff_eq!(contact.velocity(-1.0), 9.8);
        assert_abs_diff_eq!(contact.velocity(1.0), 0.0);
    }

    #[test]
    fn test_velocity_decreases_monotonically() {
        let contact = landing();
        let speeds: Vec<f64> = (0..=100).map(|i| contact.velocity(i as f64 * 0.001)).collect();
        assert!(speeds.windows(2).all(|w| w[1] <= w[0]));
    }

    #[test]
    fn test_deformation_runs_zero_to_one() {
        let contact = landing();
        assert_abs_diff_eq!(contact.deformation(0.0), 0.0);
        assert_abs_diff_eq!(contact.deformation(0.05), 6.0 * 0.25 - 8.0 * 0.125 + 3.0 * 0.0625, epsilon = 1e-12);
        assert_abs_diff_eq!(contact.deformation(contact.duration - 1e-9), 1.0, epsilon = 1e-6);
        assert_abs_diff_eq!(contact.deformation(5.0), 1.0);
    }

    #[test]
    fn test_force_zero_outside_contact() {
        let contact = landing();
        assert_eq!(contact.force(-0.01), 0.0);
        assert_eq!(contact.force(0.0), 0.0);
        assert_eq!(contact.force(0.1), 0.0);
    }

    #[test]
    fn test_rejects_non_positive_duration() {
        assert!(SpringContact::new(1.0, 1.0, 0.0).is_err());
        assert!(SpringContact::new(1.0, 1.0, -0.1).is_err());
    }
}
