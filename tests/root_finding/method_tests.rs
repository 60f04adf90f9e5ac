//! tests for runtime method selection and seed parsing
use rootviz::root_finding::method::{find_root, Method, SeedParseError, SolveError};
use rootviz::root_finding::report::TerminationReason;
use rootviz::root_finding::{Algorithm, SolverCfg};

type TestResult = Result<(), SolveError>;

#[test]
fn dispatches_bisection() -> TestResult {
    let res = find_root(
        |x: f64| x * x - 2.0,
        None::<fn(f64) -> f64>,
        Method::Bisection { a: 0.0, b: 2.0 },
        SolverCfg::new(),
    )?;

    assert_eq!(res.algorithm_name, "bisection");
    assert!((res.root - 2.0_f64.sqrt()).abs() < 1e-6);
    Ok(())
}

#[test]
fn dispatches_newton_raphson() -> TestResult {
    let res = find_root(
        |x: f64| x * x - 2.0,
        Some(|x: f64| 2.0 * x),
        Method::NewtonRaphson { x0: 1.0 },
        SolverCfg::new(),
    )?;

    assert_eq!(res.algorithm_name, "newton_raphson");
    assert!((res.root - 2.0_f64.sqrt()).abs() < 1e-6);
    Ok(())
}

#[test]
fn dispatches_secant() -> TestResult {
    let res = find_root(
        |x: f64| x.cos() - x,
        None::<fn(f64) -> f64>,
        Method::Secant { x0: 0.0, x1: 1.0 },
        SolverCfg::new(),
    )?;

    assert_eq!(res.algorithm_name, "secant");
    assert!((res.root - 0.739_085_133_2).abs() < 1e-6);
    Ok(())
}

#[test]
fn newton_without_derivative_is_an_error() -> TestResult {
    let err = find_root(
        |x: f64| x * x - 2.0,
        None::<fn(f64) -> f64>,
        Method::NewtonRaphson { x0: 1.0 },
        SolverCfg::new(),
    )
    .unwrap_err();

    assert!(matches!(err, SolveError::MissingDerivative));
    Ok(())
}

#[test]
fn derivative_is_ignored_by_two_point_methods() -> TestResult {
    // a booby-trapped derivative proves bisection never consults it
    let res = find_root(
        |x: f64| x * x - 2.0,
        Some(|_: f64| f64::NAN),
        Method::Bisection { a: 0.0, b: 2.0 },
        SolverCfg::new(),
    )?;

    assert_eq!(res.termination_reason, TerminationReason::ToleranceReached);
    Ok(())
}

#[test]
fn newton_beats_bisection_on_iterations() -> TestResult {
    let f   = |x: f64| x * x - 2.0;
    let cfg = SolverCfg::new();

    let slow = find_root(f, None::<fn(f64) -> f64>, Method::Bisection { a: 0.0, b: 2.0 }, cfg)?;
    let fast = find_root(f, Some(|x: f64| 2.0 * x), Method::NewtonRaphson { x0: 1.0 }, cfg)?;

    assert!(fast.iterations < slow.iterations);
    Ok(())
}

#[test]
fn algorithm_of_each_method() {
    assert_eq!(Method::Bisection { a: 0.0, b: 1.0 }.algorithm(), Algorithm::Bisection);
    assert_eq!(Method::NewtonRaphson { x0: 0.0 }.algorithm(), Algorithm::NewtonRaphson);
    assert_eq!(Method::Secant { x0: 0.0, x1: 1.0 }.algorithm(), Algorithm::Secant);
}

#[test]
fn parses_bisection_seeds() {
    let m = Method::from_seed_text(Algorithm::Bisection, "0, 2").unwrap();
    assert_eq!(m, Method::Bisection { a: 0.0, b: 2.0 });
}

#[test]
fn parses_newton_seed() {
    let m = Method::from_seed_text(Algorithm::NewtonRaphson, "1.5").unwrap();
    assert_eq!(m, Method::NewtonRaphson { x0: 1.5 });
}

#[test]
fn parses_secant_seeds_with_loose_whitespace() {
    let m = Method::from_seed_text(Algorithm::Secant, "  0 ,\t1.0 ").unwrap();
    assert_eq!(m, Method::Secant { x0: 0.0, x1: 1.0 });
}

#[test]
fn rejects_wrong_seed_count() {
    let err = Method::from_seed_text(Algorithm::Bisection, "1").unwrap_err();
    assert!(matches!(
        err,
        SeedParseError::WrongSeedCount { algorithm: Algorithm::Bisection, expected: 2, got: 1 }
    ));

    let err = Method::from_seed_text(Algorithm::NewtonRaphson, "1, 2").unwrap_err();
    assert!(matches!(
        err,
        SeedParseError::WrongSeedCount { algorithm: Algorithm::NewtonRaphson, expected: 1, got: 2 }
    ));
}

#[test]
fn rejects_non_numeric_seeds() {
    let err = Method::from_seed_text(Algorithm::Secant, "a, b").unwrap_err();
    assert!(matches!(err, SeedParseError::NotNumeric { .. }));
}

#[test]
fn solver_errors_pass_through() -> TestResult {
    let err = find_root(
        |x: f64| x * x,
        None::<fn(f64) -> f64>,
        Method::Bisection { a: 1.0, b: 2.0 },
        SolverCfg::new(),
    )
    .unwrap_err();

    assert!(matches!(err, SolveError::Bisection(_)));
    Ok(())
}
