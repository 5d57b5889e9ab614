use crate::{
    foundation::{error::ShimmerResult, math::mul_div255_u8},
    render::{
        frame::FrameRGBA,
        gradient::{GradientSpec, build_band},
        surface::{AlphaSurface, SurfaceAllocator},
    },
};

pub type PremulRgba8 = [u8; 4];

/// Source-over for premultiplied pixels.
pub fn over(dst: PremulRgba8, src: PremulRgba8) -> PremulRgba8 {
    let sa = u16::from(src[3]);
    if sa == 0 {
        return dst;
    }
    if sa == 255 {
        return src;
    }

    let inv = 255u16 - sa;
    let mut out = [0u8; 4];
    for i in 0..4 {
        out[i] = src[i].saturating_add(mul_div255_u8(u16::from(dst[i]), inv));
    }
    out
}

/// DST_IN: keep the source color, scaled by the destination (mask) coverage.
pub fn dst_in(src: PremulRgba8, mask_alpha: u8) -> PremulRgba8 {
    match mask_alpha {
        0 => [0, 0, 0, 0],
        255 => src,
        m => {
            let m = u16::from(m);
            [
                mul_div255_u8(u16::from(src[0]), m),
                mul_div255_u8(u16::from(src[1]), m),
                mul_div255_u8(u16::from(src[2]), m),
                mul_div255_u8(u16::from(src[3]), m),
            ]
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
struct PaintKey {
    view_width: u32,
    width: u32,
    height: u32,
    spec: GradientSpec,
}

/// The band rasterized once at mask size. Only the draw position changes per frame.
#[derive(Clone, Debug)]
pub struct ShimmerPaint {
    key: PaintKey,
    raster: Vec<u8>,
}

impl ShimmerPaint {
    /// Rasterize the band for a view `view_width` wide into a `width` x `height` mask area.
    #[tracing::instrument(skip(allocator))]
    pub fn build(
        view_width: u32,
        width: u32,
        height: u32,
        spec: &GradientSpec,
        allocator: &mut SurfaceAllocator,
    ) -> ShimmerResult<Self> {
        allocator.check_dims(width, height, "band raster")?;
        let band = build_band(view_width, height, spec);
        let len = (width as usize)
            .saturating_mul(height as usize)
            .saturating_mul(4);
        let mut raster = allocator.alloc_bytes(len, "band raster")?;
        band.rasterize_premul_into(width, height, &mut raster);
        Ok(Self {
            key: PaintKey {
                view_width,
                width,
                height,
                spec: *spec,
            },
            raster,
        })
    }

    pub fn spec(&self) -> &GradientSpec {
        &self.key.spec
    }

    pub fn width(&self) -> u32 {
        self.key.width
    }

    pub fn height(&self) -> u32 {
        self.key.height
    }

    pub fn byte_len(&self) -> usize {
        self.raster.len()
    }

    pub fn pixel(&self, x: u32, y: u32) -> PremulRgba8 {
        if x >= self.key.width || y >= self.key.height {
            return [0, 0, 0, 0];
        }
        let idx = ((y as usize) * (self.key.width as usize) + (x as usize)) * 4;
        [
            self.raster[idx],
            self.raster[idx + 1],
            self.raster[idx + 2],
            self.raster[idx + 3],
        ]
    }
}

/// The band combined with a silhouette for one frame.
#[derive(Clone, Copy, Debug)]
pub struct Paintable<'a> {
    paint: &'a ShimmerPaint,
    mask: &'a AlphaSurface,
}

impl Paintable<'_> {
    pub fn width(&self) -> u32 {
        self.paint.width().min(self.mask.width())
    }

    pub fn height(&self) -> u32 {
        self.paint.height().min(self.mask.height())
    }

    /// Composited pixel in mask-local coordinates.
    pub fn sample(&self, x: u32, y: u32) -> PremulRgba8 {
        if x >= self.width() || y >= self.height() {
            return [0, 0, 0, 0];
        }
        dst_in(self.paint.pixel(x, y), self.mask.alpha_at(x, y))
    }

    /// Paint over `frame` with the mask origin at `(offset_x, 0)`; clipped to the frame.
    pub fn draw_onto(&self, frame: &mut FrameRGBA, offset_x: i64) {
        let frame_w = i64::from(frame.width);
        let x_start = (-offset_x).clamp(0, i64::from(self.width()));
        let x_end = (frame_w - offset_x).clamp(0, i64::from(self.width()));
        if x_start >= x_end {
            return;
        }
        let rows = self.height().min(frame.height);

        for y in 0..rows {
            let row = (y as usize) * (frame.width as usize);
            for x in x_start..x_end {
                let src = self.sample(x as u32, y);
                if src[3] == 0 {
                    continue;
                }
                let idx = (row + (x + offset_x) as usize) * 4;
                let dst = [
                    frame.data[idx],
                    frame.data[idx + 1],
                    frame.data[idx + 2],
                    frame.data[idx + 3],
                ];
                frame.data[idx..idx + 4].copy_from_slice(&over(dst, src));
            }
        }
    }
}

/// Caches the [`ShimmerPaint`] for the current animation and pairs it with fresh masks.
#[derive(Debug, Default)]
pub struct Compositor {
    paint: Option<ShimmerPaint>,
    builds: u64,
}

impl Compositor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cached paint, rebuilt only when the view size, mask size or spec changed.
    pub fn paint_for(
        &mut self,
        view_width: u32,
        width: u32,
        height: u32,
        spec: &GradientSpec,
        allocator: &mut SurfaceAllocator,
    ) -> ShimmerResult<&ShimmerPaint> {
        let key = PaintKey {
            view_width,
            width,
            height,
            spec: *spec,
        };
        if self.paint.as_ref().is_some_and(|p| p.key != key) {
            self.discard(allocator);
        }
        let paint = match self.paint.take() {
            Some(paint) => paint,
            None => {
                let paint = ShimmerPaint::build(view_width, width, height, spec, allocator)?;
                self.builds = self.builds.saturating_add(1);
                paint
            }
        };
        Ok(self.paint.insert(paint))
    }

    pub fn paint(&self) -> Option<&ShimmerPaint> {
        self.paint.as_ref()
    }

    pub fn composite<'a>(paint: &'a ShimmerPaint, mask: &'a AlphaSurface) -> Paintable<'a> {
        Paintable { paint, mask }
    }

    pub fn discard(&mut self, allocator: &mut SurfaceAllocator) {
        if let Some(paint) = self.paint.take() {
            allocator.release(paint.byte_len());
        }
    }

    /// Number of band rasters built over the compositor lifetime.
    pub fn build_count(&self) -> u64 {
        self.builds
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/composite.rs"]
mod tests;
