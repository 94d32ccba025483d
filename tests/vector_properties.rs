//! Property-based tests for the vector algebra

use approx::{abs_diff_eq, relative_eq};
use proptest::prelude::*;
use sketchmath::Vector;
use std::f64::consts::TAU;

fn component() -> impl Strategy<Value = f64> {
    -1.0e6..1.0e6f64
}

fn vector() -> impl Strategy<Value = Vector> {
    (component(), component(), component()).prop_map(|(x, y, z)| Vector::new(x, y, z))
}

fn nonzero_vector() -> impl Strategy<Value = Vector> {
    vector().prop_filter("nonzero magnitude", |v| v.magnitude() > 1e-3)
}

proptest! {
    #[test]
    fn prop_dot_is_commutative(a in vector(), b in vector()) {
        prop_assert_eq!(a.dot(&b), b.dot(&a));
    }

    #[test]
    fn prop_cross_is_anticommutative(a in vector(), b in vector()) {
        prop_assert_eq!(a.cross(&b), -b.cross(&a));
    }

    #[test]
    fn prop_add_then_subtract_roundtrips(a in vector(), b in vector()) {
        let roundtrip = a + b - b;
        prop_assert!(abs_diff_eq!(roundtrip, a, epsilon = 1e-6));
    }

    #[test]
    fn prop_negation_is_scaling_by_minus_one(v in vector()) {
        prop_assert_eq!(-v, v * -1.0);
    }

    #[test]
    fn prop_scalar_multiplication_is_commutative(v in vector(), k in -1.0e3..1.0e3f64) {
        prop_assert_eq!(v * k, k * v);
    }

    #[test]
    fn prop_lerp_endpoints(a in vector(), b in vector()) {
        prop_assert_eq!(a.lerp(&b, 0.0), a);
        prop_assert!(abs_diff_eq!(a.lerp(&b, 1.0), b, epsilon = 1e-6));
    }

    #[test]
    fn prop_distance_is_symmetric(a in vector(), b in vector()) {
        prop_assert_eq!(a.distance(&b), b.distance(&a));
        prop_assert_eq!(a.dist(&b), a.distance(&b));
    }

    #[test]
    fn prop_distance_to_self_is_zero(a in vector()) {
        prop_assert_eq!(a.distance(&a), 0.0);
    }

    #[test]
    fn prop_triangle_inequality(a in vector(), b in vector(), c in vector()) {
        prop_assert!(a.distance(&c) <= a.distance(&b) + b.distance(&c) + 1e-6);
    }

    #[test]
    fn prop_rotation_preserves_magnitude(v in nonzero_vector(), theta in -TAU..TAU) {
        let before = v.magnitude();
        let mut rotated = v;
        rotated.rotate(theta);
        prop_assert!(relative_eq!(rotated.magnitude(), before, max_relative = 1e-12));
    }

    #[test]
    fn prop_limit_upper_bound_holds(v in nonzero_vector(), upper in 1.0e-3..1.0e3f64) {
        let mut limited = v;
        limited.limit(Some(upper), None);
        prop_assert!(limited.magnitude() <= upper * (1.0 + 1e-9));
    }

    #[test]
    fn prop_limit_lower_bound_holds(v in nonzero_vector(), lower in 1.0e-3..1.0e3f64) {
        let mut limited = v;
        limited.limit(None, Some(lower));
        prop_assert!(limited.magnitude() >= lower * (1.0 - 1e-9));
    }

    #[test]
    fn prop_from_angle_is_unit(theta in 0.0..TAU) {
        let v = Vector::from_angle(theta);
        prop_assert!(relative_eq!(v.magnitude(), 1.0, max_relative = 1e-12));

        let wrapped = (v.angle().unwrap() - theta).rem_euclid(TAU);
        prop_assert!(wrapped < 1e-9 || TAU - wrapped < 1e-9);
    }

    #[test]
    fn prop_normalize_yields_unit_magnitude(v in nonzero_vector()) {
        let mut unit = v;
        unit.normalize();
        prop_assert!(relative_eq!(unit.magnitude(), 1.0, max_relative = 1e-12));
    }

    #[test]
    fn prop_dot_of_self_is_magnitude_sq(v in vector()) {
        prop_assert!(relative_eq!(v.dot(&v), v.magnitude_sq(), max_relative = 1e-12));
    }
}
