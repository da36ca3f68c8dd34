use super::*;

#[test]
fn color_parses_hex_rgb() {
    let c: ColorDef = serde_json::from_str("\"#FF0000\"").unwrap();
    assert_eq!(c, ColorDef::rgba(1.0, 0.0, 0.0, 1.0));
}

#[test]
fn color_parses_hex_rgba() {
    let c: ColorDef = serde_json::from_str("\"#00FF00FF\"").unwrap();
    assert_eq!(c, ColorDef::rgba(0.0, 1.0, 0.0, 1.0));
    let c: ColorDef = serde_json::from_str("\"#00000000\"").unwrap();
    assert_eq!(c.a, 0.0);
}

#[test]
fn color_parses_object_with_default_alpha() {
    let c: ColorDef = serde_json::from_str(r#"{"r": 0.5, "g": 0.25, "b": 1.0}"#).unwrap();
    assert_eq!(c, ColorDef::rgba(0.5, 0.25, 1.0, 1.0));
}

#[test]
fn color_parses_arrays() {
    let c: ColorDef = serde_json::from_str("[0.1, 0.2, 0.3]").unwrap();
    assert_eq!(c.a, 1.0);
    let c: ColorDef = serde_json::from_str("[0.1, 0.2, 0.3, 0.4]").unwrap();
    assert_eq!(c.a, 0.4);
}

#[test]
fn color_rejects_bad_hex() {
    assert!(serde_json::from_str::<ColorDef>("\"#12345\"").is_err());
    assert!(serde_json::from_str::<ColorDef>("\"#GGGGGG\"").is_err());
}

#[test]
fn vec2_anim_accepts_array_and_object() {
    let v: Vec2AnimDef = serde_json::from_str("[1.0, 2.0]").unwrap();
    assert_eq!(v.x.sample(0).unwrap(), 1.0);
    assert_eq!(v.y.sample(0).unwrap(), 2.0);

    let v: Vec2AnimDef = serde_json::from_str(r#"{"x": 3.0, "y": 4.0}"#).unwrap();
    assert_eq!(v.x.sample(0).unwrap(), 3.0);
    assert_eq!(v.y.sample(0).unwrap(), 4.0);
}

#[test]
fn shape_node_fills_defaults() {
    let s: ShapeNodeDef = serde_json::from_str(
        r#"{"id": "a", "kind": {"rect": {"width": 4.0, "height": 4.0}}}"#,
    )
    .unwrap();
    assert_eq!(s.opacity.sample(0).unwrap(), 1.0);
    assert_eq!(s.fill.sample(0).unwrap(), ColorDef::rgba(1.0, 1.0, 1.0, 1.0));
    assert!(s.range.is_none());
    assert_eq!(s.transform.scale.x.sample(0).unwrap(), 1.0);
}

#[test]
fn shape_kinds_are_snake_case() {
    let s: ShapeKindDef =
        serde_json::from_str(r#"{"rounded_rect": {"width": 2.0, "height": 2.0, "radius": 0.5}}"#)
            .unwrap();
    assert!(matches!(s, ShapeKindDef::RoundedRect { .. }));
    let s: ShapeKindDef = serde_json::from_str(r#"{"ellipse": {"rx": 1.0, "ry": 2.0}}"#).unwrap();
    assert!(matches!(s, ShapeKindDef::Ellipse { .. }));
    let s: ShapeKindDef = serde_json::from_str(r#"{"path": {"svg_path_d": "M0 0L1 1Z"}}"#).unwrap();
    assert!(matches!(s, ShapeKindDef::Path { .. }));
}

#[test]
fn color_lerp_is_componentwise() {
    let a = ColorDef::rgba(0.0, 0.0, 0.0, 0.0);
    let b = ColorDef::rgba(1.0, 0.5, 0.25, 1.0);
    let mid = <ColorDef as Lerp>::lerp(&a, &b, 0.5);
    assert_eq!(mid, ColorDef::rgba(0.5, 0.25, 0.125, 0.5));
}
