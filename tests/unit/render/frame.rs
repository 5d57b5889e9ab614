use super::*;
use crate::foundation::core::{Rect, Rgba8};

#[test]
fn empty_size_yields_empty_frame() {
    let mut r = ContentRasterizer::new();
    let frame = r.render(&|_: &mut ContentCanvas<'_>| {}, ViewSize::new(0, 10).unwrap());
    assert_eq!(frame.width, 0);
    assert!(frame.data.is_empty());
}

#[test]
fn renders_opaque_rect_where_content_draws() {
    let mut r = ContentRasterizer::new();
    let content = |c: &mut ContentCanvas<'_>| {
        c.fill_rect(Rect::new(0.0, 0.0, 8.0, 4.0), Rgba8::opaque(255, 0, 0));
    };
    let frame = r.render(&content, ViewSize::new(16, 4).unwrap());
    assert_eq!(frame.data.len(), 16 * 4 * 4);
    assert_eq!(frame.pixel(2, 2), Some([255, 0, 0, 255]));
    assert_eq!(frame.pixel(12, 2), Some([0, 0, 0, 0]));
    assert_eq!(frame.pixel(16, 0), None);
}

#[test]
fn straight_alpha_export_unpremultiplies() {
    let frame = FrameRGBA {
        width: 2,
        height: 1,
        data: vec![64, 32, 0, 128, 10, 20, 30, 255],
        premultiplied: true,
    };
    let out = frame.to_straight_rgba8();
    assert_eq!(&out[4..], &[10, 20, 30, 255]);
    assert_eq!(out[3], 128);
    assert_eq!(out[0], 128);
    assert_eq!(out[1], 64);
}
