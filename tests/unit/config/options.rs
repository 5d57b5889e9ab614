use super::*;

#[test]
fn defaults_match_documented_values() {
    let o = ShimmerOptions::default();
    assert_eq!(o.color, Rgba8::new(0xDD, 0xDD, 0xDD, 0xFF));
    assert_eq!(o.angle_degrees, 0);
    assert_eq!(o.duration(), Duration::from_millis(1500));
    assert_eq!(o.band_width_ratio, 0.5);
    assert_eq!(o.center_width_ratio, 0.1);
    assert!(!o.reverse);
    assert!(o.auto_start);
    assert_eq!(o.easing, Ease::Linear);
    assert_eq!(o.max_surface_bytes, None);
    o.validate().unwrap();
}

#[test]
fn json_fills_missing_fields_with_defaults() {
    let o = ShimmerOptions::from_json_str(
        r##"{"color": "#336699", "angle_degrees": -20, "reverse": true, "easing": "in_out_quad"}"##,
    )
    .unwrap();
    assert_eq!(o.color, Rgba8::opaque(0x33, 0x66, 0x99));
    assert_eq!(o.angle_degrees, -20);
    assert_eq!(o.direction(), SweepDirection::Reverse);
    assert_eq!(o.easing, Ease::InOutQuad);
    assert_eq!(o.duration_ms, DEFAULT_DURATION_MS);
}

#[test]
fn json_rejects_unknown_fields_and_bad_values() {
    let err = ShimmerOptions::from_json_str(r##"{"colour": "#fff"}"##).unwrap_err();
    assert!(matches!(err, ShimmerError::Serde(_)));

    let err = ShimmerOptions::from_json_str(r#"{"angle_degrees": 120}"#).unwrap_err();
    assert!(matches!(err, ShimmerError::InvalidArgument(_)));

    let err = ShimmerOptions::from_json_str(r#"{"duration_ms": 0}"#).unwrap_err();
    assert!(matches!(err, ShimmerError::InvalidArgument(_)));
}

#[test]
fn json_reader_round_trips_serialized_options() {
    let o = ShimmerOptions {
        color: Rgba8::new(1, 2, 3, 4),
        max_surface_bytes: Some(4096),
        ..ShimmerOptions::default()
    };
    let s = serde_json::to_string(&o).unwrap();
    let back = ShimmerOptions::from_json_reader(s.as_bytes()).unwrap();
    assert_eq!(back, o);
}

#[test]
fn ratio_validators_respect_bounds() {
    assert!(validate_band_width_ratio(1.0).is_ok());
    assert!(validate_band_width_ratio(0.0).is_err());
    assert!(validate_band_width_ratio(1.01).is_err());
    assert!(validate_band_width_ratio(f32::NAN).is_err());

    assert!(validate_center_width_ratio(0.5).is_ok());
    assert!(validate_center_width_ratio(0.0).is_err());
    assert!(validate_center_width_ratio(1.0).is_err());
    assert!(validate_center_width_ratio(f32::INFINITY).is_err());
}

#[test]
fn angle_bounds_are_inclusive() {
    assert!(validate_angle(-90).is_ok());
    assert!(validate_angle(90).is_ok());
    assert!(validate_angle(91).is_err());
    assert!(validate_angle(-91).is_err());
}

#[test]
fn gradient_spec_mirrors_options() {
    let o = ShimmerOptions {
        angle_degrees: 15,
        center_width_ratio: 0.3,
        ..ShimmerOptions::default()
    };
    let spec = o.gradient_spec();
    assert_eq!(spec.angle_degrees, 15);
    assert_eq!(spec.center_width_ratio, 0.3);
    assert_eq!(spec.color, DEFAULT_COLOR);
}
