use std::cell::Cell;

use approx::assert_relative_eq;
use descent_core::{FnStepSize, StepSizeFunction};

use super::{Config, Status, Step, minimize};

/// A simple polynomial: g(λ) = λ³ - 4λ.
fn polynomial() -> impl StepSizeFunction {
    FnStepSize::new(
        |l: f64| l.powi(3) - 4.0 * l,
        |l: f64| 3.0 * l * l - 4.0,
        |l: f64| 6.0 * l,
    )
}

fn widths(steps: &[Step]) -> Vec<f64> {
    steps
        .iter()
        .map(|step| match step {
            Step::Bracket([left, right]) => right - left,
            Step::Point(_) => panic!("golden section records brackets only"),
        })
        .collect()
}

#[test]
fn minimizes_polynomial() {
    // Local minimum at λ = 2/sqrt(3) ≈ 1.1547.
    let expected = 2.0 / 3.0_f64.sqrt();

    let config = Config::new([-2.0, 2.0], 1e-9, 200).unwrap();
    let solution = minimize(&polynomial(), &config);

    assert_eq!(solution.status, Status::Converged);
    assert_relative_eq!(solution.x, expected, epsilon = 1e-6);
    assert_relative_eq!(solution.objective, expected.powi(3) - 4.0 * expected, epsilon = 1e-9);
}

#[test]
fn bracket_shrinks_every_iteration() {
    let config = Config::new([-2.0, 2.0], 1e-6, 100).unwrap();
    let solution = minimize(&polynomial(), &config);

    let widths = widths(&solution.steps);
    assert_eq!(widths.len(), solution.iters() + 1);
    assert!(widths.windows(2).all(|pair| pair[1] < pair[0]));

    let Some(Step::Bracket([left, right])) = solution.steps.last() else {
        panic!("expected a final bracket");
    };
    assert!((*left..=*right).contains(&solution.x));
}

#[test]
fn final_bracket_keeps_the_minimizer_at_tight_tolerance() {
    for center in [1.0, 1.7, -0.3] {
        let g = FnStepSize::new(
            move |l: f64| (l - center).powi(2),
            move |l: f64| 2.0 * (l - center),
            |_: f64| 2.0,
        );

        let config = Config::new([-1.0, 2.0], 1e-10, 200).unwrap();
        let solution = minimize(&g, &config);

        assert_eq!(solution.status, Status::Converged);
        assert_relative_eq!(solution.x, center, epsilon = 1e-9);

        let Some(Step::Bracket([left, right])) = solution.steps.last() else {
            panic!("expected a final bracket");
        };
        assert!((*left..=*right).contains(&center), "{center}");
    }
}

#[test]
fn stops_at_max_iters() {
    let config = Config::new([-2.0, 2.0], 0.0, 5).unwrap();
    let solution = minimize(&polynomial(), &config);

    assert_eq!(solution.status, Status::MaxIters);
    assert_eq!(solution.iters(), 5);
    assert_eq!(solution.steps.len(), 6);
}

#[test]
fn narrow_bracket_needs_no_iterations() {
    let config = Config::new([1.0, 1.0], 1e-6, 100).unwrap();
    let solution = minimize(&polynomial(), &config);

    assert_eq!(solution.status, Status::Converged);
    assert_eq!(solution.iters(), 0);
    assert_eq!(solution.steps, [Step::Bracket([1.0, 1.0])]);
    assert_relative_eq!(solution.x, 1.0);
}

#[test]
fn evaluates_once_per_iteration() {
    let calls = Cell::new(0_usize);
    let g = FnStepSize::new(
        |l: f64| {
            calls.set(calls.get() + 1);
            (l - 0.25).powi(2)
        },
        |l: f64| 2.0 * (l - 0.25),
        |_: f64| 2.0,
    );

    let config = Config::new([0.0, 1.0], 1e-4, 100).unwrap();
    let solution = minimize(&g, &config);

    // Two interior points, one per iteration, one at the reported midpoint.
    assert_eq!(calls.get(), solution.iters() + 3);
}

#[test]
fn config_rejects_bad_inputs() {
    assert!(Config::new([f64::NAN, 1.0], 1e-6, 10).is_err());
    assert!(Config::new([0.0, 1.0], -1e-6, 10).is_err());
    assert!(Config::new([0.0, 1.0], f64::INFINITY, 10).is_err());
}
