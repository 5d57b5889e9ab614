use super::*;
use crate::{foundation::core::ViewSize, render::frame::ContentRasterizer};

#[test]
fn json_blocks_use_defaults() {
    let content = BlockContent::from_json_str(
        r##"{"blocks": [{"x": 1, "y": 2, "width": 10, "height": 4},
                        {"x": 0, "y": 0, "width": 5, "height": 5, "radius": 2, "color": "#ff000080"}]}"##,
    )
    .unwrap();
    assert_eq!(content.blocks.len(), 2);
    assert_eq!(content.blocks[0].color, Rgba8::opaque(0xEE, 0xEE, 0xEE));
    assert_eq!(content.blocks[0].opacity, 1.0);
    assert_eq!(content.blocks[1].radius, 2.0);
    assert_eq!(content.blocks[1].color, Rgba8::new(255, 0, 0, 0x80));
}

#[test]
fn negative_sizes_are_rejected() {
    let err = BlockContent::from_json_str(
        r#"{"blocks": [{"x": 0, "y": 0, "width": -1, "height": 4}]}"#,
    )
    .unwrap_err();
    assert!(matches!(err, ShimmerError::InvalidArgument(_)));

    let err = BlockContent::from_json_str(r#"{"blocks": [{"x": 0}]}"#).unwrap_err();
    assert!(matches!(err, ShimmerError::Serde(_)));
}

#[test]
fn list_rows_fit_inside_height() {
    let c = BlockContent::list_rows(200, 100, 40, Rgba8::opaque(0, 0, 0));
    // Two complete rows of three blocks each.
    assert_eq!(c.blocks.len(), 6);
    for b in &c.blocks {
        assert!(b.y + b.height <= 100.0);
        assert!(b.x + b.width <= 200.0);
    }
    // Avatar is round.
    assert_eq!(c.blocks[0].radius, c.blocks[0].width / 2.0);
    assert!(BlockContent::list_rows(200, 100, 0, Rgba8::TRANSPARENT).blocks.is_empty());
}

#[test]
fn blocks_render_where_placed() {
    let content = BlockContent::new(vec![Block::new(
        4.0,
        2.0,
        8.0,
        4.0,
        Rgba8::opaque(0, 0, 255),
    )]);
    let mut raster = ContentRasterizer::new();
    let frame = raster.render(&content, ViewSize::new(16, 8).unwrap());
    assert_eq!(frame.pixel(6, 3), Some([0, 0, 255, 255]));
    assert_eq!(frame.pixel(1, 1), Some([0, 0, 0, 0]));
}

#[test]
fn block_opacity_scales_coverage() {
    let mut block = Block::new(0.0, 0.0, 8.0, 8.0, Rgba8::opaque(255, 255, 255));
    block.opacity = 0.5;
    let mut raster = ContentRasterizer::new();
    let frame = raster.render(&BlockContent::new(vec![block]), ViewSize::new(8, 8).unwrap());
    let a = frame.pixel(4, 4).unwrap()[3];
    assert!((120..=136).contains(&a), "alpha {a}");
}

#[test]
fn list_rows_stop_before_the_row_origin_overflows() {
    let row = u32::MAX / 2 + 1;
    let c = BlockContent::list_rows(100, u32::MAX, row, Rgba8::opaque(0, 0, 0));
    assert_eq!(c.blocks.len(), 3);
}
