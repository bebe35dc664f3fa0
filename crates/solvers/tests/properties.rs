//! Property tests over randomized problems and grids.

use approx::relative_eq;
use odekit_core::Grid;
use odekit_solvers::{
    compare::{self, summarize_errors},
    fixed_step::{self, Method},
};
use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64, .. ProptestConfig::default()
    })]

    /// With f = 0 every scheme holds y at y0 exactly.
    #[test]
    fn zero_derivative_is_stationary(
        x0 in -5.0f64..5.0,
        y0 in -10.0f64..10.0,
        h in 0.01f64..1.0,
        n in 0usize..200,
    ) {
        let f = |_x: f64, _y: f64| 0.0;
        for method in Method::ALL {
            let trajectory = fixed_step::integrate(method, &f, x0, y0, h, n);
            prop_assert_eq!(trajectory.len(), n + 1);
            prop_assert!(trajectory.y().iter().all(|&y| y == y0), "{}", method);
        }
    }

    /// With f = c every scheme agrees with Euler and follows y0 + c * i * h.
    #[test]
    fn constant_derivative_is_linear(
        x0 in -5.0f64..5.0,
        y0 in -10.0f64..10.0,
        c in -5.0f64..5.0,
        h in 0.01f64..1.0,
        n in 1usize..200,
    ) {
        let f = |_x: f64, _y: f64| c;
        let euler = fixed_step::euler(&f, x0, y0, h, n);

        for method in Method::ALL {
            let trajectory = fixed_step::integrate(method, &f, x0, y0, h, n);
            prop_assert_eq!(trajectory.y(), euler.y(), "{}", method);
        }

        for (i, &y) in euler.y().iter().enumerate() {
            let expected = y0 + c * h * i as f64;
            prop_assert!(relative_eq!(y, expected, epsilon = 1e-9, max_relative = 1e-9));
        }
    }

    /// The default AIME form and Modified Euler are the same update rule.
    #[test]
    fn aime_matches_modified_euler(
        y0 in -2.0f64..2.0,
        h in 0.01f64..0.2,
        n in 0usize..50,
    ) {
        let f = |x: f64, y: f64| x.sin() - 0.5 * y;
        let aime = fixed_step::aime(&f, 0.0, y0, h, n);
        let modified = fixed_step::modified_euler(&f, 0.0, y0, h, n);
        prop_assert_eq!(aime, modified);
    }

    /// Every method sees the same grid, sized from the rounded step count.
    #[test]
    fn comparison_shares_one_grid(
        x0 in -5.0f64..5.0,
        span in 0.0f64..5.0,
        h in 0.01f64..1.0,
    ) {
        let xn = x0 + span;
        let f = |x: f64, y: f64| x - y;
        let grid = Grid::new(x0, xn, h).unwrap();
        let result = compare::solve_all(&f, x0, 1.0, xn, h, None).unwrap();

        let points = grid.points();
        prop_assert_eq!(result.x(), points.as_slice());
        prop_assert_eq!(result.y_ref().len(), grid.len());
        for (_, trajectory) in result.iter() {
            prop_assert_eq!(trajectory.x(), result.x());
        }
    }

    /// Summary statistics are consistent with the error sequence.
    #[test]
    fn summaries_bound_the_errors(
        y0 in 0.1f64..2.0,
        span in 0.0f64..2.0,
        h in 0.05f64..0.5,
    ) {
        let f = |_x: f64, y: f64| -y;
        let exact = move |x: f64| y0 * (-x).exp();
        let result = compare::solve_all(&f, 0.0, y0, span, h, Some(&exact)).unwrap();

        for method in Method::ALL {
            let errors = result.errors(method).unwrap();
            let summary = summarize_errors(&errors).unwrap();

            prop_assert_eq!(Some(summary), result.error_summary(method));
            prop_assert_eq!(summary.final_error, errors[errors.len() - 1]);
            prop_assert!(errors.iter().all(|&e| e >= 0.0 && e <= summary.max));
            prop_assert!(0.0 <= summary.average && summary.average <= summary.max);
        }
    }
}
