//___________________________________TESTS____________________________________
// identities and reference values of the public functions over many angles

#[cfg(test)]
mod tests {
    use crate::trig::domain_reduction::reduce;
    use crate::trig::trig_functions::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, FRAC_PI_6, PI, TAU};
    use strum::IntoEnumIterator;

    /// angles from -20 to 20 with an irregular step so guard points are not hit by accident
    fn sample_angles() -> Vec<f64> {
        (0..4000).map(|k| -20.0 + k as f64 * 0.01001).collect()
    }

    #[test]
    fn test_pythagorean_identity() {
        for a in sample_angles() {
            let s = sine(a);
            let c = cosine(a);
            assert_abs_diff_eq!(s * s + c * c, 1.0, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_matches_std() {
        for a in sample_angles() {
            assert_abs_diff_eq!(sine(a), a.sin(), epsilon = 1e-12);
            assert_abs_diff_eq!(cosine(a), a.cos(), epsilon = 1e-12);
        }
    }

    #[test]
    fn test_periodicity() {
        for a in sample_angles() {
            assert_abs_diff_eq!(sine(a), sine(a + TAU), epsilon = 1e-9);
            assert_abs_diff_eq!(cosine(a), cosine(a + TAU), epsilon = 1e-9);
        }
    }

    #[test]
    fn test_symmetry() {
        for a in sample_angles() {
            assert_abs_diff_eq!(sine(-a), -sine(a), epsilon = 1e-9);
            assert_abs_diff_eq!(cosine(-a), cosine(a), epsilon = 1e-9);
        }
    }

    #[test]
    fn test_tangent_is_quotient() {
        for a in sample_angles() {
            let c = cosine(a);
            if c.abs() < 1e-3 {
                continue;
            }
            let tan = tangent(a).value().unwrap();
            assert_relative_eq!(tan, sine(a) / c, max_relative = 1e-12);
        }
    }

    #[test]
    fn test_reciprocals() {
        for a in sample_angles() {
            let s = sine(a);
            let c = cosine(a);
            if s.abs() > 1e-3 {
                assert_relative_eq!(cosecant(a).value().unwrap() * s, 1.0, max_relative = 1e-12);
                assert_relative_eq!(
                    cotangent(a).value().unwrap(),
                    c / s,
                    max_relative = 1e-9
                );
            }
            if c.abs() > 1e-3 {
                assert_relative_eq!(secant(a).value().unwrap() * c, 1.0, max_relative = 1e-12);
            }
        }
    }

    #[test]
    fn test_pi_over_six() {
        let a = FRAC_PI_6;
        assert_abs_diff_eq!(sine(a), 0.5, epsilon = 1e-4);
        assert_abs_diff_eq!(cosine(a), 0.8660, epsilon = 1e-4);
        assert_abs_diff_eq!(tangent(a).value().unwrap(), 0.5774, epsilon = 1e-4);
        assert_abs_diff_eq!(cosecant(a).value().unwrap(), 2.0, epsilon = 1e-9);
    }

    #[test]
    fn test_three_pi_over_four() {
        let a = 3.0 * FRAC_PI_4;
        assert_eq!(reduce(a).quadrant.number(), 2);
        assert_abs_diff_eq!(sine(a), 0.7071, epsilon = 1e-4);
        assert_abs_diff_eq!(cosine(a), -0.7071, epsilon = 1e-4);
        assert_abs_diff_eq!(tangent(a).value().unwrap(), -1.0, epsilon = 1e-9);
        assert_abs_diff_eq!(cotangent(a).value().unwrap(), -1.0, epsilon = 1e-9);
    }

    #[test]
    fn test_undefined_along_periods() {
        for k in -5..=5 {
            let multiple_of_pi = k as f64 * PI;
            let odd_half_pi = multiple_of_pi + FRAC_PI_2;
            assert!(cosecant(multiple_of_pi).is_undefined(), "csc at {}", multiple_of_pi);
            assert!(cotangent(multiple_of_pi).is_undefined(), "cot at {}", multiple_of_pi);
            assert!(tangent(odd_half_pi).is_undefined(), "tan at {}", odd_half_pi);
            assert!(secant(odd_half_pi).is_undefined(), "sec at {}", odd_half_pi);
            assert_eq!(sine(multiple_of_pi), 0.0);
            assert_eq!(cosine(odd_half_pi), 0.0);
        }
    }

    #[test]
    fn test_every_function_is_finite_off_guard_points() {
        for function in TrigFunction::iter() {
            for a in sample_angles() {
                if let TrigResult::Value(v) = function.evaluate(a) {
                    assert!(v.is_finite(), "{}({}) = {}", function.abbrev(), a, v);
                }
            }
        }
    }

    #[test]
    fn test_large_angles() {
        let a = 1000.0 * PI;
        assert_eq!(sine(a), 0.0);
        assert_abs_diff_eq!(cosine(a), 1.0, epsilon = 1e-9);
        let a = 12345.678;
        assert_abs_diff_eq!(sine(a), a.sin(), epsilon = 1e-9);
        assert_abs_diff_eq!(cosine(a), a.cos(), epsilon = 1e-9);
    }

    #[test]
    fn test_concurrent_calls() {
        let handles: Vec<_> = (0..4)
            .map(|t| {
                std::thread::spawn(move || {
                    (0..1000)
                        .map(|k| sine(t as f64 + k as f64 * 0.001))
                        .sum::<f64>()
                })
            })
            .collect();
        for (t, handle) in handles.into_iter().enumerate() {
            let expected: f64 = (0..1000).map(|k| sine(t as f64 + k as f64 * 0.001)).sum();
            assert_eq!(handle.join().unwrap(), expected);
        }
    }
}
