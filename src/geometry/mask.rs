use crate::foundation::{
    core::ViewSize,
    math::half_px,
};

/// Length of the gradient axis: half the view width scaled by the band width ratio.
pub fn band_line_length(view_width: u32, band_width_ratio: f32) -> f64 {
    half_px(view_width) * f64::from(band_width_ratio)
}

/// Horizontal extent covered by a band slanted by `angle_degrees`.
///
/// The bottom edge of a slanted band is `line / cos(a)` wide and its top edge is shifted by
/// `height * tan(a)`. Saturates instead of overflowing near +-90 degrees.
pub fn projected_band_width(view: ViewSize, angle_degrees: i32, band_width_ratio: f32) -> u32 {
    let line = band_line_length(view.width, band_width_ratio);
    let angle = f64::from(angle_degrees.unsigned_abs()).to_radians();
    let bottom = line / angle.cos();
    let top_shift = f64::from(view.height) * angle.tan();
    let w = bottom + top_shift;
    if w.is_nan() {
        return u32::MAX;
    }
    w as u32
}

/// Size of the offscreen mask: `{0, 0, width, height}`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct MaskRect {
    pub width: u32,
    pub height: u32,
}

impl MaskRect {
    pub fn compute(view: ViewSize, angle_degrees: i32, band_width_ratio: f32) -> Self {
        let projected = projected_band_width(view, angle_degrees, band_width_ratio);
        let width = if angle_degrees == 0 {
            projected
        } else {
            projected.max(view.width)
        };
        Self {
            width,
            height: view.height,
        }
    }

    pub fn is_empty(self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Whether the CPU rasterizer can allocate a surface of this size.
    pub fn is_renderable(self) -> bool {
        !self.is_empty() && self.width <= ViewSize::MAX_DIM && self.height <= ViewSize::MAX_DIM
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct MaskKey {
    view: ViewSize,
    angle_degrees: i32,
    band_width_bits: u32,
}

/// Memoizes the [`MaskRect`] until view size, angle or band width changes.
#[derive(Clone, Debug, Default)]
pub struct MaskRectCache {
    cached: Option<(MaskKey, MaskRect)>,
}

impl MaskRectCache {
    pub fn get(&mut self, view: ViewSize, angle_degrees: i32, band_width_ratio: f32) -> MaskRect {
        let key = MaskKey {
            view,
            angle_degrees,
            band_width_bits: band_width_ratio.to_bits(),
        };
        match self.cached {
            Some((k, rect)) if k == key => rect,
            _ => {
                let rect = MaskRect::compute(view, angle_degrees, band_width_ratio);
                tracing::trace!(?rect, ?view, angle_degrees, "mask rect recomputed");
                self.cached = Some((key, rect));
                rect
            }
        }
    }

    pub fn invalidate(&mut self) {
        self.cached = None;
    }
}

/// Horizontal range the mask origin travels during one sweep.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SweepBounds {
    pub start: i64,
    pub end: i64,
}

impl SweepBounds {
    /// The sweep ends at the right edge of the view and starts one view width (or one mask
    /// width, whichever is larger) left of the origin, so the band always enters from fully
    /// off-screen.
    pub fn compute(view_width: u32, mask_width: u32) -> Self {
        let end = i64::from(view_width);
        let start = if view_width > mask_width {
            -end
        } else {
            -i64::from(mask_width)
        };
        Self { start, end }
    }

    pub fn full_span(self) -> i64 {
        self.end - self.start
    }
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/mask.rs"]
mod tests;
