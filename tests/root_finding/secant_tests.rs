//! tests for the secant root finding algorithm
use rootviz::root_finding::errors::RootFindingError;
use rootviz::root_finding::report::TerminationReason;
use rootviz::root_finding::secant::{secant, SecantError};
use rootviz::root_finding::SolverCfg;

type TestResult = Result<(), SecantError>;

#[test]
fn finds_fixed_point_of_cosine() -> TestResult {
    // cos(x) = x at the Dottie number
    let f = |x: f64| x.cos() - x;

    let res = secant(f, 0.0, 1.0, SolverCfg::new())?;

    assert_eq!(res.termination_reason, TerminationReason::ToleranceReached);
    assert!((res.root - 0.739_085_133_2).abs() < 1e-6);
    assert_eq!(res.algorithm_name, "secant");
    Ok(())
}

#[test]
fn finds_sqrt_2() -> TestResult {
    let f = |x: f64| x * x - 2.0;

    let res = secant(f, 1.0, 2.0, SolverCfg::new())?;

    assert_eq!(res.termination_reason, TerminationReason::ToleranceReached);
    assert!((res.root - 2.0_f64.sqrt()).abs() < 1e-6);
    Ok(())
}

#[test]
fn trace_opens_with_both_seeds() -> TestResult {
    let f = |x: f64| x.cos() - x;

    let res = secant(f, 0.0, 1.0, SolverCfg::new())?;

    assert_eq!(res.trace.first(), Some(0.0));
    assert_eq!(res.trace.as_slice()[1], 1.0);
    assert_eq!(res.trace.len(), res.iterations + 2);
    assert_eq!(res.trace.last(), Some(res.root));
    Ok(())
}

#[test]
fn equal_seeds_are_invalid() -> TestResult {
    let f   = |x: f64| x;
    let err = secant(f, 1.0, 1.0, SolverCfg::new()).unwrap_err();

    assert!(matches!(err, SecantError::InvalidGuess { x0, x1 } if x0 == 1.0 && x1 == 1.0));
    Ok(())
}

#[test]
fn non_finite_seed_is_invalid() -> TestResult {
    let f   = |x: f64| x;
    let err = secant(f, f64::NAN, 1.0, SolverCfg::new()).unwrap_err();

    assert!(matches!(err, SecantError::InvalidGuess { x0, .. } if x0.is_nan()));
    Ok(())
}

#[test]
fn stalls_on_flat_function() -> TestResult {
    // equal function values at both seeds: the secant is horizontal
    let f = |_: f64| 1.0;

    let res = secant(f, 0.0, 1.0, SolverCfg::new())?;

    assert_eq!(res.termination_reason, TerminationReason::StalledSlope);
    assert!(res.termination_reason.is_stalled());
    assert_eq!(res.root, 1.0);
    assert_eq!(res.f_root, 1.0);
    assert_eq!(res.iterations, 0);
    assert_eq!(res.trace.as_slice(), &[0.0, 1.0]);
    Ok(())
}

#[test]
fn stalls_on_symmetric_seeds() -> TestResult {
    // f(-1) == f(1) for an even function
    let f = |x: f64| x * x - 2.0;

    let res = secant(f, -1.0, 1.0, SolverCfg::new())?;

    assert_eq!(res.termination_reason, TerminationReason::StalledSlope);
    assert_eq!(res.root, 1.0);
    assert_eq!(res.iterations, 0);
    Ok(())
}

#[test]
fn iteration_limit_keeps_estimate_and_trace() -> TestResult {
    // one update from (0, 2) on x^2 - 2 lands at 1.0; the cap stops the
    // run there with the partial trace intact
    let f   = |x: f64| x * x - 2.0;
    let cfg = SolverCfg::new().set_max_iter(1)?;

    let res = secant(f, 0.0, 2.0, cfg)?;

    assert_eq!(res.termination_reason, TerminationReason::IterationLimit);
    assert_eq!(res.iterations, 1);
    assert_eq!(res.root, 1.0);
    assert_eq!(res.f_root, -1.0);
    assert_eq!(res.trace.as_slice(), &[0.0, 2.0, 1.0]);
    Ok(())
}

#[test]
fn non_finite_eval_mid_run() -> TestResult {
    // first update from (0, 1) on 1/(x - 0.5) lands exactly on the pole
    let f   = |x: f64| 1.0 / (x - 0.5);
    let err = secant(f, 0.0, 1.0, SolverCfg::new()).unwrap_err();

    assert!(matches!(
        err,
        SecantError::Common(RootFindingError::NonFiniteEvaluation { x, fx })
        if x == 0.5 && fx.is_infinite()));
    Ok(())
}

#[test]
fn counts_function_evaluations() -> TestResult {
    let f = |x: f64| x.cos() - x;

    let res = secant(f, 0.0, 1.0, SolverCfg::new())?;

    // both seeds once, then one evaluation per accepted update
    assert_eq!(res.evaluations, res.iterations + 2);
    Ok(())
}

#[test]
fn identical_inputs_give_identical_traces() -> TestResult {
    let f = |x: f64| x.cos() - x;

    let first  = secant(f, 0.0, 1.0, SolverCfg::new())?;
    let second = secant(f, 0.0, 1.0, SolverCfg::new())?;

    assert_eq!(first.trace.as_slice(), second.trace.as_slice());
    assert_eq!(first.root, second.root);
    Ok(())
}
