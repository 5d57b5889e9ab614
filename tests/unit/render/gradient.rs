use super::*;

fn spec(angle: i32, band: f32, center: f32) -> GradientSpec {
    GradientSpec {
        color: Rgba8::opaque(200, 100, 50),
        angle_degrees: angle,
        band_width_ratio: band,
        center_width_ratio: center,
    }
}

#[test]
fn stops_are_four_sorted_and_in_unit_range() {
    for band in [0.001f32, 0.25, 0.5, 1.0] {
        for center in [0.001f32, 0.1, 0.5, 0.999] {
            let stops = spec(0, band, center).stops();
            assert_eq!(stops.len(), 4);
            for pair in stops.windows(2) {
                assert!(pair[0].offset <= pair[1].offset);
            }
            assert!(stops.iter().all(|s| (0.0..=1.0).contains(&s.offset)));
        }
    }
}

#[test]
fn edge_stops_are_transparent_center_is_color() {
    let s = spec(0, 0.5, 0.1);
    let stops = s.stops();
    assert_eq!(stops[0].color, Rgba8::new(200, 100, 50, 0));
    assert_eq!(stops[1].color, s.color);
    assert_eq!(stops[2].color, s.color);
    assert_eq!(stops[3].color, Rgba8::new(200, 100, 50, 0));
    assert!((stops[1].offset - 0.45).abs() < 1e-6);
    assert!((stops[2].offset - 0.55).abs() < 1e-6);
}

#[test]
fn axis_starts_bottom_left_for_positive_angles() {
    let band = build_band(1000, 200, &spec(0, 0.5, 0.1));
    assert_eq!(band.start, Point::new(0.0, 200.0));
    assert!((band.end.x - 250.0).abs() < 1e-9);
    assert!((band.end.y - 200.0).abs() < 1e-9);

    let band = build_band(1000, 200, &spec(30, 0.5, 0.1));
    assert_eq!(band.start, Point::new(0.0, 200.0));
    assert!(band.end.y > 200.0);
}

#[test]
fn axis_starts_top_left_for_negative_angles() {
    let band = build_band(1000, 200, &spec(-30, 0.5, 0.1));
    assert_eq!(band.start, Point::new(0.0, 0.0));
    assert!(band.end.y < 0.0);
    assert!(band.end.x > 0.0);
}

#[test]
fn sampling_clamps_to_edge_color() {
    let band = build_band(1000, 200, &spec(0, 0.5, 0.1));
    assert_eq!(band.sample(Point::new(-50.0, 10.0)).a, 0);
    assert_eq!(band.sample(Point::new(900.0, 10.0)).a, 0);
    assert_eq!(band.sample(Point::new(125.0, 10.0)), Rgba8::opaque(200, 100, 50));

    // Fade-in region is partially transparent.
    let fading = band.sample(Point::new(56.25, 10.0));
    assert!(fading.a > 0 && fading.a < 255);
    assert_eq!((fading.r, fading.g, fading.b), (200, 100, 50));
}

#[test]
fn flat_band_is_constant_per_column() {
    let band = build_band(100, 20, &spec(0, 1.0, 0.2));
    for x in 0..50 {
        let px = Point::new(x as f64 + 0.5, 0.5);
        let py = Point::new(x as f64 + 0.5, 19.5);
        assert_eq!(band.sample(px), band.sample(py));
    }
}

#[test]
fn degenerate_band_samples_first_stop() {
    let band = build_band(1, 10, &spec(0, 1.0, 0.1));
    assert_eq!(band.start, band.end);
    assert_eq!(band.sample(Point::new(0.5, 0.5)).a, 0);
}

#[test]
fn rasterize_fills_premultiplied_pixels() {
    let band = build_band(100, 2, &spec(0, 1.0, 0.2));
    let mut out = vec![0u8; 50 * 2 * 4];
    band.rasterize_premul_into(50, 2, &mut out);
    let center = 25 * 4;
    assert_eq!(&out[center..center + 4], &[200, 100, 50, 255]);
    // First column sits right next to the transparent edge stop.
    assert!(out[3] < 10);
    assert!(out[0] <= out[3]);
}
