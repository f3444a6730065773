// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

#![allow(missing_docs)]
use echo_linalg::{
    Mat2d, Mat2f, Mat4d, Mat4f, Narrow, Tolerance, Vec2, Vec3d, Vec3f, Vec4d, Vec4f, Widen,
};

#[test]
fn widening_then_narrowing_is_exact() {
    let v = Vec3f::new(0.1, -3.75, 1.0e-20);
    assert_eq!(v.widen().narrow(), v);

    let m = Mat4f::from_axis_angle(0.7, Vec3f::new(0.2, 0.4, -0.9));
    assert_eq!(m.widen().narrow(), m);
    assert_eq!(Mat4d::from(m).narrow(), m);
}

#[test]
fn widening_preserves_the_f32_value_exactly() {
    let v = Vec3f::new(0.1, 0.2, 0.3);
    let wide = Vec3d::from(v);
    assert_eq!(wide.x(), f64::from(0.1_f32));
    assert_ne!(wide.x(), 0.1_f64);
}

#[test]
fn narrowing_rounds_to_nearest_f32() {
    let v = Vec3d::new(0.1, 1.0 / 3.0, 1.0e10 + 0.5);
    let n = v.narrow();
    assert_eq!(n, Vec3f::new(0.1, 1.0 / 3.0, 1.0e10));
    assert_ne!(n.widen(), v);
    assert!(n.widen().approx_eq(&v, Tolerance::new(0.0, 1e-7)));
}

#[test]
fn mixed_vector_arithmetic_yields_f64() {
    let a = Vec3f::new(1.0, 2.0, 3.0);
    let b = Vec3d::new(0.5, 0.5, 0.5);

    let sum: Vec3d = a + b;
    assert_eq!(sum, Vec3d::new(1.5, 2.5, 3.5));
    let sum_rev: Vec3d = b + a;
    assert_eq!(sum_rev, sum);

    let diff: Vec3d = a - b;
    assert_eq!(diff, Vec3d::new(0.5, 1.5, 2.5));
    let diff_rev: Vec3d = b - a;
    assert_eq!(diff_rev, -diff);

    let prod: Vec3d = a * b;
    assert_eq!(prod, Vec3d::new(0.5, 1.0, 1.5));
}

#[test]
fn mixed_widening_happens_before_the_operation() {
    // 0.1_f32 + 0.2_f64 is evaluated as widen(0.1_f32) + 0.2 in f64.
    let a = Vec2::new(0.1_f32, 0.0_f32);
    let b = Vec2::new(0.2_f64, 0.0_f64);
    let sum = a + b;
    assert_eq!(sum.x(), f64::from(0.1_f32) + 0.2);
}

#[test]
fn mixed_matrix_products_yield_f64() {
    let a = Mat2f::from_cols([Vec2::new(1.0, 3.0), Vec2::new(2.0, 4.0)]);
    let b = Mat2d::from_cols([Vec2::new(0.0, 1.0), Vec2::new(1.0, 0.0)]);

    let ab: Mat2d = a * b;
    assert_eq!(ab, a.widen() * b);
    let ba: Mat2d = b * a;
    assert_eq!(ba, b * a.widen());

    let m = Mat4f::from_translation(Vec3f::new(1.0, 2.0, 3.0));
    let p: Vec4d = m * Vec4d::new(0.0, 0.0, 0.0, 1.0);
    assert_eq!(p, Vec4d::new(1.0, 2.0, 3.0, 1.0));

    let md = Mat4d::from_scale(Vec3d::new(2.0, 2.0, 2.0));
    let q: Vec4d = md * Vec4f::new(1.0, 1.0, 1.0, 1.0);
    assert_eq!(q, Vec4d::new(2.0, 2.0, 2.0, 1.0));
}

#[test]
fn scalar_bridge_matches_std_conversions() {
    assert_eq!(0.1_f32.widen(), f64::from(0.1_f32));
    assert_eq!(0.1_f64.narrow(), 0.1_f32);
}
