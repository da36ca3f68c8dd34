use super::*;

const TINY_DOC: &str = r##"{
    "version": "1",
    "canvas": { "width": 8, "height": 8 },
    "fps": { "num": 30, "den": 1 },
    "duration": 3,
    "shapes": [
        { "id": "sq", "kind": { "rect": { "width": 8.0, "height": 8.0 } }, "fill": "#336699" }
    ]
}"##;

#[test]
fn options_default_to_frame_0_100x100_quality_100() {
    let opts = ExportOptions::default();
    assert_eq!(opts.frame, 0);
    assert_eq!(opts.width, 100);
    assert_eq!(opts.height, 100);
    assert_eq!(opts.quality, 100);
}

#[test]
fn options_deserialize_with_defaults_and_ignore_unknown_fields() {
    let opts: ExportOptions =
        serde_json::from_str(r#"{"frame": 2, "someFutureKnob": true}"#).unwrap();
    assert_eq!(opts.frame, 2);
    assert_eq!(opts.width, 100);
    assert_eq!(opts.quality, 100);

    let opts: ExportOptions = serde_json::from_str("{}").unwrap();
    assert_eq!(opts, ExportOptions::default());
}

#[test]
fn zero_and_oversized_dimensions_are_rejected() {
    for (width, height) in [(0, 10), (10, 0), (MAX_DIMENSION + 1, 10), (10, MAX_DIMENSION + 1)] {
        let opts = ExportOptions {
            width,
            height,
            ..Default::default()
        };
        let err = ConversionRequest::new(Vec::new(), &opts).unwrap_err();
        assert!(matches!(err, FramepressError::InvalidDimensions(_)), "{width}x{height}");
        assert!(err.to_string().contains("between 1 and 4096"));
    }
}

#[test]
fn boundary_dimensions_are_accepted() {
    for (width, height) in [(1, 1), (MAX_DIMENSION, 1), (1, MAX_DIMENSION)] {
        let opts = ExportOptions {
            width,
            height,
            ..Default::default()
        };
        assert!(ConversionRequest::new(Vec::new(), &opts).is_ok(), "{width}x{height}");
    }
}

#[test]
fn out_of_range_quality_is_rejected() {
    for quality in [0, 101] {
        let opts = ExportOptions {
            quality,
            ..Default::default()
        };
        let err = ConversionRequest::new(Vec::new(), &opts).unwrap_err();
        assert!(matches!(err, FramepressError::InvalidQuality(_)), "quality {quality}");
    }
}

#[test]
fn quality_knob_maps_to_unit_interval() {
    let opts = ExportOptions {
        quality: 50,
        ..Default::default()
    };
    let request = ConversionRequest::new(Vec::new(), &opts).unwrap();
    assert_eq!(request.quality, 0.5);

    let request = ConversionRequest::new(Vec::new(), &ExportOptions::default()).unwrap();
    assert_eq!(request.quality, 1.0);
}

#[test]
fn run_produces_a_png() {
    let opts = ExportOptions {
        width: 8,
        height: 8,
        ..Default::default()
    };
    let request = ConversionRequest::new(TINY_DOC.as_bytes().to_vec(), &opts).unwrap();
    let bytes = ConversionJob::new(request).run().unwrap();
    assert_eq!(&bytes[0..8], &[0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A]);
}

#[test]
fn run_surfaces_load_failures() {
    let request =
        ConversionRequest::new(b"not a document".to_vec(), &ExportOptions::default()).unwrap();
    let err = ConversionJob::new(request).run().unwrap_err();
    assert!(matches!(err, FramepressError::Load(_)));
}

#[test]
fn run_surfaces_frame_range_failures() {
    let opts = ExportOptions {
        frame: 3,
        width: 8,
        height: 8,
        ..Default::default()
    };
    let request = ConversionRequest::new(TINY_DOC.as_bytes().to_vec(), &opts).unwrap();
    let err = ConversionJob::new(request).run().unwrap_err();
    assert!(matches!(err, FramepressError::FrameRange(_)));
    assert!(err.to_string().contains("total frames: 3"));
}
