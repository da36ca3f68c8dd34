use super::*;

fn doc(json: &str) -> DocumentDef {
    serde_json::from_str(json).unwrap()
}

fn messages(def: &DocumentDef) -> String {
    validate_document(def).unwrap_err().to_string()
}

#[test]
fn valid_document_passes() {
    let def = doc(r#"{
        "version": "1",
        "canvas": { "width": 8, "height": 8 },
        "fps": { "num": 30, "den": 1 },
        "duration": 5,
        "shapes": [
            { "id": "a", "kind": { "rect": { "width": 2.0, "height": 2.0 } }, "range": [0, 5] }
        ]
    }"#);
    assert!(validate_document(&def).is_ok());
}

#[test]
fn zero_duration_reports_its_path() {
    let def = doc(r#"{
        "version": "1",
        "canvas": { "width": 8, "height": 8 },
        "fps": { "num": 30, "den": 1 },
        "duration": 0
    }"#);
    assert!(messages(&def).contains("$.duration"));
}

#[test]
fn duplicate_shape_ids_are_rejected() {
    let def = doc(r#"{
        "version": "1",
        "canvas": { "width": 8, "height": 8 },
        "fps": { "num": 30, "den": 1 },
        "duration": 5,
        "shapes": [
            { "id": "a", "kind": { "rect": { "width": 1.0, "height": 1.0 } } },
            { "id": "a", "kind": { "rect": { "width": 1.0, "height": 1.0 } } }
        ]
    }"#);
    let msg = messages(&def);
    assert!(msg.contains("$.shapes[1].id"));
    assert!(msg.contains("duplicate"));
}

#[test]
fn range_outside_duration_reports_shape_index() {
    let def = doc(r#"{
        "version": "1",
        "canvas": { "width": 8, "height": 8 },
        "fps": { "num": 30, "den": 1 },
        "duration": 5,
        "shapes": [
            { "id": "a", "kind": { "rect": { "width": 1.0, "height": 1.0 } } },
            { "id": "b", "kind": { "rect": { "width": 1.0, "height": 1.0 } }, "range": [2, 9] }
        ]
    }"#);
    assert!(messages(&def).contains("$.shapes[1].range"));
}

#[test]
fn empty_range_is_rejected() {
    let def = doc(r#"{
        "version": "1",
        "canvas": { "width": 8, "height": 8 },
        "fps": { "num": 30, "den": 1 },
        "duration": 5,
        "shapes": [
            { "id": "a", "kind": { "rect": { "width": 1.0, "height": 1.0 } }, "range": [3, 3] }
        ]
    }"#);
    assert!(messages(&def).contains("range"));
}

#[test]
fn unsorted_keyframes_report_the_field() {
    let def = doc(r#"{
        "version": "1",
        "canvas": { "width": 8, "height": 8 },
        "fps": { "num": 30, "den": 1 },
        "duration": 5,
        "shapes": [
            {
                "id": "a",
                "kind": { "rect": { "width": 1.0, "height": 1.0 } },
                "opacity": { "keys": [
                    { "frame": 4, "value": 1.0 },
                    { "frame": 0, "value": 0.0 }
                ] }
            }
        ]
    }"#);
    let msg = messages(&def);
    assert!(msg.contains("$.shapes[0].opacity"));
    assert!(msg.contains("sorted"));
}

#[test]
fn bad_svg_path_is_rejected() {
    let def = doc(r#"{
        "version": "1",
        "canvas": { "width": 8, "height": 8 },
        "fps": { "num": 30, "den": 1 },
        "duration": 5,
        "shapes": [
            { "id": "a", "kind": { "path": { "svg_path_d": "Q not a path" } } }
        ]
    }"#);
    assert!(messages(&def).contains("svg_path_d"));
}

#[test]
fn nonpositive_shape_dimensions_are_rejected() {
    let def = doc(r#"{
        "version": "1",
        "canvas": { "width": 8, "height": 8 },
        "fps": { "num": 30, "den": 1 },
        "duration": 5,
        "shapes": [
            { "id": "a", "kind": { "ellipse": { "rx": 0.0, "ry": 2.0 } } }
        ]
    }"#);
    assert!(messages(&def).contains("ellipse"));
}

#[test]
fn multiple_errors_accumulate() {
    let def = doc(r#"{
        "version": "2",
        "canvas": { "width": 0, "height": 8 },
        "fps": { "num": 30, "den": 1 },
        "duration": 0
    }"#);
    let errs = validate_document(&def).unwrap_err();
    assert!(errs.errors.len() >= 3);
}
