use chart_annotations::annotations::{AnnotationKind, PitchforkOptions, PitchforkStyle};
use chart_annotations::api::{ANNOTATION_FRAME_JSON_SCHEMA_V1, AnnotationStyle};
use chart_annotations::core::{Bounds, Point};
use chart_annotations::render::{AnnotationFrame, Color, PenRole};
use chart_annotations::{Annotation, AnnotationConfig};

// binary-exact channel values so JSON parsing reproduces them bit for bit
fn exact_style() -> AnnotationStyle {
    AnnotationStyle {
        stroke_color: Color::rgb(0.25, 0.5, 1.0),
        stroke_width: 2.0,
        trend_color: Color::rgb(1.0, 0.5, 0.0),
        trend_width: 1.0,
        bullish_target_fill: Color::rgba(0.0, 1.0, 0.0, 0.25),
        bearish_target_fill: Color::rgba(1.0, 0.0, 0.0, 0.25),
        hover_gap: 4.0,
    }
}

fn drawn_wedge() -> Annotation {
    let mut annotation =
        Annotation::new(AnnotationConfig::symmetrical_wedge().with_style(exact_style()))
            .expect("annotation");
    annotation
        .set_bounds(Bounds::from_size(200.0, 100.0).expect("bounds"))
        .expect("bounds");
    annotation
        .set_anchors(&[
            Point::new(0.0, 0.0),
            Point::new(5.0, 10.0),
            Point::new(10.0, 0.0),
        ])
        .expect("anchors");
    annotation
}

#[test]
fn contract_payload_is_versioned_and_named() {
    let mut annotation = drawn_wedge();
    let json = annotation.frame_json_contract_v1_pretty().expect("contract");
    let value: serde_json::Value = serde_json::from_str(&json).expect("valid json");

    assert_eq!(
        value["schema_version"],
        serde_json::json!(ANNOTATION_FRAME_JSON_SCHEMA_V1)
    );
    assert_eq!(value["kind"], "symmetrical-wedge");
    assert_eq!(value["frame"]["pens"][0]["role"], "stroke");
    assert_eq!(
        value["frame"]["pens"][0]["commands"][0],
        serde_json::json!({"op": "move_to", "x": 0.0, "y": 0.0})
    );
}

#[test]
fn contract_and_bare_frame_parse_to_the_same_frame() {
    let mut annotation = drawn_wedge();
    let frame = annotation.build_frame().expect("frame");

    let contract = annotation.frame_json_contract_v1_pretty().expect("contract");
    let from_contract = AnnotationFrame::from_json_compat_str(&contract).expect("contract parse");
    let bare = frame.to_json_pretty().expect("frame json");
    let from_bare = AnnotationFrame::from_json_compat_str(&bare).expect("bare parse");

    assert_eq!(from_contract, frame);
    assert_eq!(from_bare, frame);
    assert_eq!(
        from_bare
            .pen(PenRole::BullishTarget)
            .expect("target pen")
            .commands
            .len(),
        7
    );
}

#[test]
fn unknown_schema_version_is_rejected() {
    let mut annotation = drawn_wedge();
    let json = annotation.frame_json_contract_v1_pretty().expect("contract");
    let mut value: serde_json::Value = serde_json::from_str(&json).expect("valid json");
    value["schema_version"] = serde_json::json!(2);

    let err = AnnotationFrame::from_json_compat_str(&value.to_string())
        .expect_err("future schema must fail");
    assert!(err.to_string().contains("schema version"));
}

#[test]
fn garbage_payload_is_rejected() {
    assert!(AnnotationFrame::from_json_compat_str("{\"pens\": 3}").is_err());
    assert!(AnnotationFrame::from_json_compat_str("not json").is_err());
}

#[test]
fn config_round_trips_through_json() {
    let config = AnnotationConfig::pitchfork(PitchforkOptions {
        style: PitchforkStyle::ModifiedSchiff,
        extra_lines: 2,
    })
    .with_style(exact_style());

    let json = config.to_json_pretty().expect("config json");
    let parsed = AnnotationConfig::from_json_str(&json).expect("config parse");

    assert_eq!(parsed, config);
    assert!(json.contains("\"modified-schiff\""));
}

#[test]
fn config_with_invalid_style_is_rejected() {
    let json = r#"{"kind":{"type":"wave-abc"},"style":{"stroke_width":-2.0}}"#;
    assert!(AnnotationConfig::from_json_str(json).is_err());

    let parsed = AnnotationConfig::from_json_str(r#"{"kind":{"type":"wave-abc"}}"#)
        .expect("config parse");
    assert!(matches!(parsed.kind, AnnotationKind::WaveAbc(options) if options.show_target));
}

#[test]
fn config_with_unbounded_extra_lines_is_rejected() {
    let json = r#"{"kind":{"type":"pitchfork","style":"andrews","extra_lines":4294967295}}"#;
    let err = AnnotationConfig::from_json_str(json).expect_err("extra lines over limit");
    assert!(err.to_string().contains("extra_lines"));
}
