use chord_newton::root_finding::equation::{Equation, FnEquation, SqrtCos};

const TOL: f64 = 1e-12;

#[test]
fn reference_coefficient() {
    let eq = SqrtCos::default();
    assert_eq!(eq.k(), 0.387);
}

#[test]
fn values_at_one_and_a_half() {
    let eq = SqrtCos::default();
    let x  = 1.5_f64;

    assert!((eq.f(x)   - (x.sqrt() - (0.387 * x).cos())).abs() <= TOL);
    assert!((eq.df(x)  - (0.5 / x.sqrt() + 0.387 * (0.387 * x).sin())).abs() <= TOL);
    assert!((eq.d2f(x) - (-0.25 / (x * x.sqrt()) + 0.149769 * (0.387 * x).cos())).abs() <= TOL);
}

#[test]
fn first_derivative_matches_central_difference() {
    let eq = SqrtCos::default();
    let h  = 1e-6;

    for &x in &[0.1, 0.5, 0.8867, 1.2, 1.5] {
        let fd = (eq.f(x + h) - eq.f(x - h)) / (2.0 * h);
        assert!((eq.df(x) - fd).abs() <= 1e-6, "x={x}, df={}, fd={fd}", eq.df(x));
    }
}

#[test]
fn second_derivative_matches_central_difference() {
    let eq = SqrtCos::default();
    let h  = 1e-5;

    for &x in &[0.2, 0.5, 1.0, 1.5] {
        let fd = (eq.df(x + h) - eq.df(x - h)) / (2.0 * h);
        assert!((eq.d2f(x) - fd).abs() <= 1e-5, "x={x}, d2f={}, fd={fd}", eq.d2f(x));
    }
}

#[test]
fn derivatives_are_singular_at_zero() {
    let eq = SqrtCos::default();

    assert_eq!(eq.f(0.0), -1.0);
    assert_eq!(eq.df(0.0), f64::INFINITY);
    assert_eq!(eq.d2f(0.0), f64::NEG_INFINITY);
}

#[test]
fn negative_input_is_nan() {
    let eq = SqrtCos::default();
    assert!(eq.f(-1.0).is_nan());
}

#[test]
fn closures_and_references_evaluate() {
    let eq     = FnEquation::new(|x: f64| x * x - 4.0, |x: f64| 2.0 * x, |_: f64| 2.0);
    let by_ref = &eq;

    assert_eq!(by_ref.f(3.0), 5.0);
    assert_eq!(by_ref.df(3.0), 6.0);
    assert_eq!(by_ref.d2f(3.0), 2.0);
}
