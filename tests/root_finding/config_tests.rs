//! tests for the shared solver configuration
use rootviz::root_finding::config::{SolverCfg, DEFAULT_MAX_ITER, DEFAULT_TOLERANCE};
use rootviz::root_finding::errors::RootFindingError;

type TestResult = Result<(), RootFindingError>;

#[test]
fn defaults() {
    let cfg = SolverCfg::new();
    assert_eq!(cfg.tolerance(), DEFAULT_TOLERANCE);
    assert_eq!(cfg.max_iter(), DEFAULT_MAX_ITER);
    assert_eq!(cfg, SolverCfg::default());
}

#[test]
fn setters_chain() -> TestResult {
    let cfg = SolverCfg::new().set_tolerance(1e-9)?.set_max_iter(200)?;

    assert_eq!(cfg.tolerance(), 1e-9);
    assert_eq!(cfg.max_iter(), 200);
    Ok(())
}

#[test]
fn rejects_zero_tolerance() {
    let err = SolverCfg::new().set_tolerance(0.0).unwrap_err();
    assert!(matches!(err, RootFindingError::InvalidTolerance { got } if got == 0.0));
}

#[test]
fn rejects_negative_tolerance() {
    let err = SolverCfg::new().set_tolerance(-1e-6).unwrap_err();
    assert!(matches!(err, RootFindingError::InvalidTolerance { .. }));
}

#[test]
fn rejects_non_finite_tolerance() {
    assert!(SolverCfg::new().set_tolerance(f64::NAN).is_err());
    assert!(SolverCfg::new().set_tolerance(f64::INFINITY).is_err());
}

#[test]
fn rejects_zero_max_iter() {
    let err = SolverCfg::new().set_max_iter(0).unwrap_err();
    assert!(matches!(err, RootFindingError::InvalidMaxIter { got: 0 }));
}
