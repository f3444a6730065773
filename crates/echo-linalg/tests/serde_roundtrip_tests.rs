// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

#![allow(missing_docs, clippy::unwrap_used, clippy::expect_used)]
#![cfg(feature = "serde")]
use echo_linalg::{Mat3f, Mat4d, Vec2, Vec3, Vec3f, Vector};
use serde::{de::DeserializeOwned, Serialize};

fn to_cbor<T: Serialize>(value: &T) -> Vec<u8> {
    let mut buf = Vec::new();
    ciborium::into_writer(value, &mut buf).expect("encode");
    buf
}

fn from_cbor<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, ciborium::de::Error<std::io::Error>> {
    ciborium::from_reader(bytes)
}

#[test]
fn vector_round_trips_through_cbor() {
    let v = Vec3f::new(1.5, -0.25, 3.0e7);
    let back: Vec3f = from_cbor(&to_cbor(&v)).unwrap();
    assert_eq!(back, v);
}

#[test]
fn matrix_round_trips_through_cbor() {
    let m = Mat4d::from_axis_angle(0.3, Vec3::new(1.0, 2.0, 3.0)).translated(Vec3::new(4.0, 5.0, 6.0));
    let back: Mat4d = from_cbor(&to_cbor(&m)).unwrap();
    assert_eq!(back, m);

    let small = Mat3f::identity();
    let back: Mat3f = from_cbor(&to_cbor(&small)).unwrap();
    assert_eq!(back, small);
}

#[test]
fn matrix_encodes_as_nested_columns() {
    let m = Mat3f::identity();
    let cols: [[f32; 3]; 3] = from_cbor(&to_cbor(&m)).unwrap();
    assert_eq!(cols, [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]]);
}

#[test]
fn wrong_length_is_rejected() {
    let short = to_cbor(&Vec2::new(1.0_f64, 2.0));
    assert!(from_cbor::<Vector<f64, 3>>(&short).is_err());

    let long = to_cbor(&Vec3::new(1.0_f64, 2.0, 3.0));
    assert!(from_cbor::<Vector<f64, 2>>(&long).is_err());
}
