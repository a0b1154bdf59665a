use chord_newton::root_finding::chord::{chord, ChordCfg};
use chord_newton::root_finding::equation::{Equation, FnEquation, SqrtCos};
use chord_newton::root_finding::errors::RootFindingError;
use chord_newton::root_finding::newton::{newton, NewtonCfg, NewtonError};
use chord_newton::root_finding::report::{Step, TerminationReason};

type TestResult = Result<(), NewtonError>;

const EPS: f64 = 0.001;

fn reference_cfg() -> Result<NewtonCfg, NewtonError> {
    Ok(NewtonCfg::new().set_eps(EPS)?)
}

#[test]
fn converges_from_substituted_zero() -> TestResult {
    let _ = simple_logger::init_with_level(log::Level::Debug);
    let eq  = SqrtCos::default();
    let res = newton(&eq, 0.0, reference_cfg()?)?;

    assert_eq!(res.termination_reason, TerminationReason::ToleranceReached);
    assert_eq!(res.algorithm_name, "newton");
    assert!(eq.f(res.root).abs() < 0.01);
    assert!((res.root - 0.8868).abs() < 0.005, "root={}", res.root);
    assert_eq!(res.iterations, 5);
    assert_eq!(res.trace.steps()[0], Step { prev: 0.0, curr: NewtonCfg::DEFAULT_ZERO_SUBSTITUTE });
    Ok(())
}

#[test]
fn agrees_with_chord_in_fewer_iterations() -> Result<(), Box<dyn std::error::Error>> {
    let eq    = SqrtCos::default();
    let tang  = newton(&eq, 0.0, reference_cfg()?)?;
    let chord = chord(&eq, 0.0, 1.5, ChordCfg::new())?;

    assert!((tang.root - chord.root).abs() < EPS);
    assert!(tang.iterations < chord.iterations);
    Ok(())
}

#[test]
fn trace_length_equals_iterations() -> TestResult {
    let res = newton(&SqrtCos::default(), 0.0, reference_cfg()?)?;

    assert_eq!(res.trace.len(), res.iterations);
    // f and f' per iteration, plus f(root)
    assert_eq!(res.evaluations, 2 * res.iterations + 1);
    for pair in res.trace.steps().windows(2) {
        assert_eq!(pair[1].prev, pair[0].curr);
    }
    Ok(())
}

#[test]
fn step_deltas_shrink_after_second_step() -> TestResult {
    let res = newton(&SqrtCos::default(), 0.0, reference_cfg()?)?;

    let deltas: Vec<f64> = res.trace.iter().map(Step::delta).collect();
    for pair in deltas[2..].windows(2) {
        assert!(pair[1] < pair[0], "deltas={deltas:?}");
    }
    Ok(())
}

#[test]
fn root_is_latest_estimate() -> TestResult {
    let eq  = SqrtCos::default();
    let res = newton(&eq, 0.0, reference_cfg()?)?;

    let last = res.trace.steps()[res.iterations - 1];
    assert_eq!(res.previous, last.curr);
    let expected = last.curr - eq.f(last.curr) / eq.df(last.curr);
    assert_eq!(res.root, expected);
    assert!((res.root - res.previous).abs() < EPS);
    Ok(())
}

#[test]
fn runs_are_deterministic() -> TestResult {
    let eq    = SqrtCos::default();
    let first = newton(&eq, 0.0, reference_cfg()?)?;
    let again = newton(&eq, 0.0, reference_cfg()?)?;

    assert_eq!(first, again);
    Ok(())
}

#[test]
fn custom_zero_substitute() -> TestResult {
    let cfg = reference_cfg()?.set_zero_substitute(0.5)?;
    let res = newton(&SqrtCos::default(), 0.0, cfg)?;

    assert_eq!(res.trace.steps()[0].curr, 0.5);
    assert!((res.root - 0.8868).abs() < 0.005);
    Ok(())
}

#[test]
fn nonzero_start_is_kept() -> TestResult {
    let res = newton(&SqrtCos::default(), 1.5, reference_cfg()?)?;

    assert_eq!(res.trace.steps()[0], Step { prev: 0.0, curr: 1.5 });
    assert!((res.root - 0.8868).abs() < 0.005);
    Ok(())
}

#[test]
fn finds_sqrt_2() -> TestResult {
    let eq  = FnEquation::new(|x: f64| x * x - 2.0, |x: f64| 2.0 * x, |_: f64| 2.0);
    let cfg = NewtonCfg::new().set_eps(1e-12)?;
    let res = newton(&eq, 1.0, cfg)?;

    assert!((res.root - 2.0_f64.sqrt()).abs() <= 1e-12);
    Ok(())
}

#[test]
fn iteration_limit_reported() -> TestResult {
    // x - cbrt(x) / (1 / (3 cbrt(x)^2)) = -2x: the iterates double and flip sign
    let eq  = FnEquation::new(
        |x: f64| x.cbrt(), 
        |x: f64| 1.0 / (3.0 * x.cbrt().powi(2)), 
        |x: f64| -2.0 / (9.0 * x.cbrt().powi(5)),
    );
    let cfg = NewtonCfg::new().set_max_iter(5)?;
    let res = newton(&eq, 1.0, cfg)?;

    assert_eq!(res.termination_reason, TerminationReason::IterationLimit);
    assert_eq!(res.iterations, 5);
    assert_eq!(res.trace.len(), 5);
    assert!((res.root + 32.0).abs() < 1e-9, "root={}", res.root);
    Ok(())
}

#[test]
fn vanishing_derivative_is_an_error() {
    let eq  = FnEquation::new(|x: f64| x * x + 1.0, |_: f64| 0.0, |_: f64| 2.0);
    let res = newton(&eq, 1.0, NewtonCfg::new());

    assert_eq!(res, Err(NewtonError::DerivativeVanished { x: 1.0, dfx: 0.0 }));
}

#[test]
fn non_finite_derivative_is_an_error() {
    let eq  = FnEquation::new(|x: f64| x - 1.0, |_: f64| f64::INFINITY, |_: f64| 0.0);
    let res = newton(&eq, 2.0, NewtonCfg::new());

    assert_eq!(res, Err(NewtonError::DerivativeNotFinite { x: 2.0, dfx: f64::INFINITY }));
}

#[test]
fn overflowing_step_is_an_error() {
    let eq  = FnEquation::new(|_: f64| 1e308, |_: f64| 1e-308, |_: f64| 0.0);
    let res = newton(&eq, 1.0, NewtonCfg::new());

    assert!(matches!(res, Err(NewtonError::StepNotFinite { x, .. }) if x == 1.0));
}

#[test]
fn non_finite_evaluation_is_an_error() {
    let res = newton(&SqrtCos::default(), -1.0, NewtonCfg::new());

    assert!(matches!(
        res, 
        Err(NewtonError::RootFinding(RootFindingError::NonFiniteEvaluation { x, .. })) if x == -1.0
    ));
}

#[test]
fn invalid_inputs_rejected() {
    let eq = SqrtCos::default();

    assert!(matches!(newton(&eq, f64::NAN, NewtonCfg::new()), Err(NewtonError::InvalidGuess { .. })));
    assert_eq!(
        NewtonCfg::new().set_zero_substitute(0.0), 
        Err(NewtonError::InvalidZeroSubstitute { got: 0.0 })
    );
    assert!(NewtonCfg::new().set_zero_substitute(f64::INFINITY).is_err());
    assert!(NewtonCfg::new().set_max_iter(0).is_err());
}
