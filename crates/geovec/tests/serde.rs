#![cfg(feature = "serde")]

use geovec::{Vec2, Vec3};

#[test]
fn serializes_as_named_fields() {
    let v = Vec3::new(1.0, 2.5, -3.0);
    let json = serde_json::to_string(&v).unwrap();
    assert_eq!(json, r#"{"x":1.0,"y":2.5,"z":-3.0}"#);
    let back: Vec3<f64> = serde_json::from_str(&json).unwrap();
    assert_eq!(back, v);
}

#[test]
fn rejects_missing_component() {
    assert!(serde_json::from_str::<Vec2<f32>>(r#"{"x":1.0}"#).is_err());
}
