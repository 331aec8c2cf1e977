#![allow(clippy::float_cmp)]

use super::*;

const EPSILON: f64 = 1e-10;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

fn vec_approx_eq(a: Vector2, b: Vector2) -> bool {
    approx_eq(a.x, b.x) && approx_eq(a.y, b.y)
}

fn samples() -> Vec<Vector2> {
    vec![
        Vector2::new(0.0, 0.0),
        Vector2::new(1.0, 0.0),
        Vector2::new(-3.5, 2.25),
        Vector2::new(0.1, 0.7),
        Vector2::new(350.0, -700.0),
        Vector2::new(1e-3, 1e3),
    ]
}

// --- Construction ---

#[test]
fn new_sets_components() {
    let v = Vector2::new(3.0, 4.0);
    assert_eq!(v.x, 3.0);
    assert_eq!(v.y, 4.0);
}

#[test]
fn zero_is_default() {
    assert_eq!(Vector2::default(), Vector2::ZERO);
}

#[test]
fn copy_is_equal() {
    let a = Vector2::new(1.5, -2.5);
    let b = a;
    assert_eq!(a, b);
}

#[test]
fn equality_is_exact() {
    assert_eq!(Vector2::new(0.1, 0.2), Vector2::new(0.1, 0.2));
    assert_ne!(Vector2::new(0.1 + 0.2, 0.0), Vector2::new(0.3, 0.0));
}

// --- Arithmetic ---

#[test]
fn pls_adds_components() {
    assert_eq!(Vector2::new(1.0, 2.0).pls(Vector2::new(3.0, 5.0)), Vector2::new(4.0, 7.0));
}

#[test]
fn sub_subtracts_components() {
    assert_eq!(Vector2::new(1.0, 2.0).sub(Vector2::new(3.0, 5.0)), Vector2::new(-2.0, -3.0));
}

#[test]
fn pls_then_sub_restores_original() {
    for a in samples() {
        for b in samples() {
            assert!(vec_approx_eq(a.pls(b).sub(b), a), "{a:?} + {b:?} - {b:?}");
        }
    }
}

#[test]
fn mul_is_component_wise() {
    let v = Vector2::new(0.25, 0.5).mul(Vector2::new(700.0, 700.0));
    assert_eq!(v, Vector2::new(175.0, 350.0));
}

#[test]
fn scl_multiplies_both_components() {
    assert_eq!(Vector2::new(2.0, -4.0).scl(0.5), Vector2::new(1.0, -2.0));
}

#[test]
fn dot_product() {
    assert_eq!(Vector2::new(1.0, 2.0).dot(Vector2::new(3.0, 4.0)), 11.0);
    assert_eq!(Vector2::new(1.0, 0.0).dot(Vector2::new(0.0, 1.0)), 0.0);
}

#[test]
fn cross_of_axes() {
    assert_eq!(Vector2::new(1.0, 0.0).cross(Vector2::new(0.0, 1.0)), 1.0);
    assert_eq!(Vector2::new(0.0, 1.0).cross(Vector2::new(1.0, 0.0)), -1.0);
}

#[test]
fn cross_is_anti_commutative() {
    for a in samples() {
        for b in samples() {
            assert!(approx_eq(a.cross(b), -b.cross(a)), "{a:?} x {b:?}");
        }
    }
}

#[test]
fn cross_of_parallel_is_zero() {
    let a = Vector2::new(2.0, 3.0);
    assert_eq!(a.cross(a.scl(4.0)), 0.0);
}

// --- Length / norm / dist ---

#[test]
fn length_of_3_4_is_5() {
    assert_eq!(Vector2::new(3.0, 4.0).length(), 5.0);
}

#[test]
fn norm_has_unit_length() {
    for a in samples().into_iter().filter(|v| v.length() > 0.0) {
        assert!(approx_eq(a.norm().length(), 1.0), "{a:?}");
    }
}

#[test]
fn norm_keeps_direction() {
    let n = Vector2::new(0.0, -8.0).norm();
    assert!(vec_approx_eq(n, Vector2::new(0.0, -1.0)));
}

#[test]
fn norm_of_zero_is_nan() {
    let n = Vector2::ZERO.norm();
    assert!(n.x.is_nan());
    assert!(n.y.is_nan());
}

#[test]
fn dist_is_symmetric() {
    let a = Vector2::new(1.0, 1.0);
    let b = Vector2::new(4.0, 5.0);
    assert_eq!(a.dist(b), 5.0);
    assert_eq!(b.dist(a), 5.0);
}

#[test]
fn dist_matches_length_of_difference() {
    for a in samples() {
        for b in samples() {
            assert!(approx_eq(a.dist(b), a.sub(b).length()));
        }
    }
}

#[test]
fn clamp_limits_components() {
    assert_eq!(Vector2::new(-0.1, 1.2).clamp(0.0, 1.0), Vector2::new(0.0, 1.0));
    assert_eq!(Vector2::new(0.3, 0.7).clamp(0.0, 1.0), Vector2::new(0.3, 0.7));
}
