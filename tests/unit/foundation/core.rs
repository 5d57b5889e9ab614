use super::*;

#[test]
fn view_size_rejects_edges_past_rasterizer_limit() {
    assert!(ViewSize::new(65_535, 1).is_ok());
    let err = ViewSize::new(65_536, 10).unwrap_err();
    assert!(matches!(err, ShimmerError::InvalidArgument(_)));
}

#[test]
fn view_size_empty_when_any_edge_is_zero() {
    assert!(ViewSize::new(0, 10).unwrap().is_empty());
    assert!(ViewSize::new(10, 0).unwrap().is_empty());
    assert!(!ViewSize::new(1, 1).unwrap().is_empty());
    assert_eq!(ViewSize::new(4, 3).unwrap().pixel_count(), 12);
}

#[test]
fn with_alpha_keeps_color_channels() {
    let c = Rgba8::opaque(10, 20, 30).with_alpha(0);
    assert_eq!(c, Rgba8::new(10, 20, 30, 0));
}

#[test]
fn premul_scales_channels_by_alpha() {
    assert_eq!(
        Rgba8::new(255, 128, 0, 255).to_premul().to_array(),
        [255, 128, 0, 255]
    );
    assert_eq!(
        Rgba8::new(255, 255, 255, 0).to_premul(),
        Rgba8Premul::transparent()
    );
    assert_eq!(
        Rgba8::new(200, 100, 50, 128).to_premul().to_array(),
        [100, 50, 25, 128]
    );
}
