// File: crates/graph-core/tests/scale.rs
// Purpose: Graph <-> pixel transform: origin identity, linearity, inverse.

use graph_core::{to_screen, CoordinateMapper, Origin, Ratio};

fn origin(x: f64, y: f64) -> Origin {
    Origin::new(x, y).expect("finite origin")
}

#[test]
fn graph_zero_maps_to_origin_for_any_ratio() {
    let o = origin(400.0, 300.0);
    for r in [1, 7, 30, 250] {
        let p = to_screen(o, Ratio::new(r).unwrap(), 0.0, 0.0);
        assert_eq!((p.x, p.y), (400.0, 300.0));
    }
}

#[test]
fn unit_steps_scale_by_ratio() {
    let p = to_screen(origin(400.0, 300.0), Ratio::new(30).unwrap(), 1.0, -2.0);
    assert_eq!((p.x, p.y), (430.0, 240.0));
}

#[test]
fn transform_is_linear() {
    let o = origin(123.0, 456.0);
    let r = Ratio::new(17).unwrap();
    let base = to_screen(o, r, 0.0, 0.0);
    let cases = [((1.5, -2.0), (0.25, 4.0)), ((-3.0, 0.1), (2.0, -0.7)), ((10.0, 10.0), (-10.0, -10.0))];
    for ((x1, y1), (x2, y2)) in cases {
        let sum = to_screen(o, r, x1 + x2, y1 + y2);
        let a = to_screen(o, r, x1, y1);
        let b = to_screen(o, r, x2, y2);
        let lhs = (sum.x - base.x, sum.y - base.y);
        let rhs = ((a.x - base.x) + (b.x - base.x), (a.y - base.y) + (b.y - base.y));
        assert!((lhs.0 - rhs.0).abs() < 1e-9, "x: {lhs:?} vs {rhs:?}");
        assert!((lhs.1 - rhs.1).abs() < 1e-9, "y: {lhs:?} vs {rhs:?}");
    }
}

#[test]
fn from_screen_inverts_to_screen() {
    let m = CoordinateMapper::new(origin(250.0, 100.0), Ratio::new(40).unwrap());
    for (x, y) in [(0.0, 0.0), (1.3, -2.7), (-6.0, 9.5)] {
        let p = m.to_screen(x, y);
        let g = m.from_screen(p.x, p.y);
        assert!((g.x - x).abs() < 1e-12 && (g.y - y).abs() < 1e-12);
    }
}

#[test]
fn repeated_mapping_does_not_drift() {
    let m = CoordinateMapper::new(origin(400.0, 300.0), Ratio::new(30).unwrap());
    let first = m.to_screen(0.3, 0.7);
    for _ in 0..1000 {
        assert_eq!(m.to_screen(0.3, 0.7), first);
    }
}

#[test]
fn non_finite_origin_rejected() {
    assert!(Origin::new(f64::NAN, 0.0).is_err());
    assert!(Origin::new(0.0, f64::INFINITY).is_err());
}
