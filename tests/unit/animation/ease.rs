use super::*;

#[test]
fn all_curves_hit_endpoints() {
    let curves = [
        Ease::Linear,
        Ease::In,
        Ease::Out,
        Ease::InOut,
        Ease::InCubic,
        Ease::OutCubic,
        Ease::InOutCubic,
    ];
    for ease in curves {
        assert_eq!(ease.apply(0.0), 0.0, "{ease:?} at 0");
        assert_eq!(ease.apply(1.0), 1.0, "{ease:?} at 1");
    }
}

#[test]
fn midpoint_values() {
    assert_eq!(Ease::Linear.apply(0.5), 0.5);
    assert_eq!(Ease::In.apply(0.5), 0.25);
    assert_eq!(Ease::Out.apply(0.5), 0.75);
    assert_eq!(Ease::InOut.apply(0.5), 0.5);
    assert_eq!(Ease::InCubic.apply(0.5), 0.125);
    assert_eq!(Ease::InOutCubic.apply(0.5), 0.5);
}

#[test]
fn input_is_clamped() {
    assert_eq!(Ease::In.apply(-1.0), 0.0);
    assert_eq!(Ease::In.apply(2.0), 1.0);
}

#[test]
fn serde_names_are_snake_case() {
    let e: Ease = serde_json::from_str("\"in_out\"").unwrap();
    assert_eq!(e, Ease::InOut);
    let e: Ease = serde_json::from_str("\"out_cubic\"").unwrap();
    assert_eq!(e, Ease::OutCubic);
}
