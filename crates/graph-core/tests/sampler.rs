// File: crates/graph-core/tests/sampler.rs
// Purpose: Sample count, endpoints, pen state, idempotence and both failure policies.

use graph_core::expr::EvalError;
use graph_core::sampler::{sample_count, sample_xs};
use graph_core::{
    sample, CoordinateMapper, Expression, OnEvalError, Origin, PathCommand, PixelPoint, Ratio, VisibleDomain,
};

fn mapper() -> CoordinateMapper {
    CoordinateMapper::new(Origin::new(400.0, 300.0).unwrap(), Ratio::new(30).unwrap())
}

fn expr(src: &str) -> Expression {
    Expression::parse(src).expect("valid expression")
}

const UNIT: VisibleDomain = VisibleDomain { xmin: -1, xmax: 1 };

#[test]
fn identity_over_unit_domain() {
    let line = sample(&mapper(), UNIT, &expr("x"), OnEvalError::Abort).unwrap();
    assert_eq!(line.len(), 21);
    assert_eq!(line.commands[0], PathCommand::MoveTo(PixelPoint::new(370.0, 270.0)));
    assert_eq!(line.commands[20], PathCommand::LineTo(PixelPoint::new(430.0, 330.0)));
    assert!(line.commands[1..].iter().all(|c| matches!(c, PathCommand::LineTo(_))));

    let m = mapper();
    for p in line.points() {
        let g = m.from_screen(p.x, p.y);
        assert!((g.x - g.y).abs() < 1e-9, "off the diagonal: {g:?}");
    }
}

#[test]
fn sample_count_includes_right_endpoint() {
    let d = VisibleDomain { xmin: -13, xmax: 13 };
    assert_eq!(sample_count(d), 261);
    let xs: Vec<f64> = sample_xs(d).collect();
    assert_eq!(xs.len(), 261);
    assert_eq!(xs[0], -13.0);
    assert_eq!(*xs.last().unwrap(), 13.0);
    assert_eq!(xs[1], -12.9);
}

#[test]
fn x_is_strictly_increasing() {
    let line = sample(&mapper(), VisibleDomain { xmin: -3, xmax: 4 }, &expr("sin(x)"), OnEvalError::Abort).unwrap();
    let xs: Vec<f64> = line.points().map(|p| p.x).collect();
    assert!(xs.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn sampling_is_idempotent() {
    let e = expr("x^3 - 2x + cos(3x)");
    let d = VisibleDomain { xmin: -5, xmax: 5 };
    let a = sample(&mapper(), d, &e, OnEvalError::Abort).unwrap();
    let b = sample(&mapper(), d, &e, OnEvalError::Abort).unwrap();
    assert_eq!(a, b);
}

#[test]
fn degenerate_domain_yields_single_move() {
    let line = sample(&mapper(), VisibleDomain { xmin: 0, xmax: 0 }, &expr("x + 1"), OnEvalError::Abort).unwrap();
    assert_eq!(line.commands, vec![PathCommand::MoveTo(PixelPoint::new(400.0, 330.0))]);
}

#[test]
fn abort_policy_fails_once_at_zero() {
    let err = sample(&mapper(), UNIT, &expr("1/x"), OnEvalError::Abort).unwrap_err();
    assert_eq!(err.x, 0.0);
    assert_eq!(err.source, EvalError::DivisionByZero);
}

#[test]
fn break_policy_skips_exactly_the_zero_sample() {
    let line = sample(&mapper(), UNIT, &expr("1/x"), OnEvalError::Break).unwrap();
    assert_eq!(line.gaps.len(), 1);
    assert_eq!(line.gaps[0].x, 0.0);
    assert_eq!(line.gaps[0].error, EvalError::DivisionByZero);
    assert_eq!(line.len(), 20);

    // samples before and after the hole are untouched
    let m = mapper();
    assert_eq!(line.commands[9], PathCommand::LineTo(m.to_screen(-0.1, 1.0 / -0.1)));
    assert_eq!(line.commands[10], PathCommand::MoveTo(m.to_screen(0.1, 1.0 / 0.1)));
    assert!(matches!(line.commands[11], PathCommand::LineTo(_)));
    let moves = line.commands.iter().filter(|c| matches!(c, PathCommand::MoveTo(_))).count();
    assert_eq!(moves, 2);
}

#[test]
fn break_policy_starts_with_move_when_left_edge_undefined() {
    let line = sample(&mapper(), UNIT, &expr("sqrt(x)"), OnEvalError::Break).unwrap();
    assert_eq!(line.gaps.len(), 10);
    assert_eq!(line.commands[0], PathCommand::MoveTo(PixelPoint::new(400.0, 300.0)));
    assert_eq!(line.len(), 11);
}
