use crate::{
    foundation::{
        core::Affine,
        error::{ShimmerError, ShimmerResult},
    },
    geometry::mask::MaskRect,
    render::{
        canvas::{ContentCanvas, ContentRenderer},
        surface::{AlphaSurface, SurfaceAllocator},
    },
};

struct Scratch {
    width: u16,
    height: u16,
    ctx: vello_cpu::RenderContext,
    pixmap: vello_cpu::Pixmap,
}

impl Scratch {
    fn byte_len(&self) -> usize {
        usize::from(self.width) * usize::from(self.height) * 4
    }
}

/// Renders content into an alpha-only mask, translated by the sweep offset.
///
/// The mask is allocated on first capture and reused until [`SilhouetteCapture::release`].
#[derive(Default)]
pub struct SilhouetteCapture {
    mask: Option<AlphaSurface>,
    scratch: Option<Scratch>,
    captures: u64,
}

impl std::fmt::Debug for SilhouetteCapture {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SilhouetteCapture")
            .field("mask", &self.mask.as_ref().map(|m| (m.width(), m.height())))
            .field("has_scratch", &self.scratch.is_some())
            .field("captures", &self.captures)
            .finish()
    }
}

impl SilhouetteCapture {
    pub fn new() -> Self {
        Self::default()
    }

    /// Capture `content` with its origin moved to `-offset_x`.
    ///
    /// Content outside `(0, 0)-(rect.width, rect.height)` is clipped by the surface bounds.
    #[tracing::instrument(skip(self, content, allocator))]
    pub fn capture(
        &mut self,
        content: &dyn ContentRenderer,
        offset_x: i64,
        rect: MaskRect,
        allocator: &mut SurfaceAllocator,
    ) -> ShimmerResult<&AlphaSurface> {
        self.ensure_surfaces(rect, allocator)?;
        let (Some(mask), Some(scratch)) = (self.mask.as_mut(), self.scratch.as_mut()) else {
            return Err(ShimmerError::resource_exhausted("capture surfaces unavailable"));
        };

        mask.clear();
        scratch.ctx.reset();
        {
            let base = Affine::translate((-(offset_x as f64), 0.0));
            let mut canvas = ContentCanvas::new(&mut scratch.ctx, base);
            content.render(&mut canvas);
        }
        scratch.ctx.flush();
        scratch.pixmap.data_as_u8_slice_mut().fill(0);
        scratch.ctx.render_to_pixmap(&mut scratch.pixmap);
        mask.fill_from_rgba8(scratch.pixmap.data_as_u8_slice())?;

        self.captures = self.captures.saturating_add(1);
        Ok(mask)
    }

    fn ensure_surfaces(
        &mut self,
        rect: MaskRect,
        allocator: &mut SurfaceAllocator,
    ) -> ShimmerResult<()> {
        if self
            .mask
            .as_ref()
            .is_some_and(|m| m.width() != rect.width || m.height() != rect.height)
        {
            self.release(allocator);
        }

        if self.mask.is_none() {
            self.mask = Some(allocator.alloc_alpha(rect.width, rect.height)?);
            tracing::debug!(width = rect.width, height = rect.height, "mask surface allocated");
        }

        if self.scratch.is_none() {
            allocator.check_dims(rect.width, rect.height, "capture target")?;
            let (w, h) = (rect.width as u16, rect.height as u16);
            allocator.reserve(usize::from(w) * usize::from(h) * 4, "capture target")?;
            self.scratch = Some(Scratch {
                width: w,
                height: h,
                ctx: vello_cpu::RenderContext::new(w, h),
                pixmap: vello_cpu::Pixmap::new(w, h),
            });
        }
        Ok(())
    }

    pub fn mask(&self) -> Option<&AlphaSurface> {
        self.mask.as_ref()
    }

    pub fn capture_count(&self) -> u64 {
        self.captures
    }

    /// Drop the reclaimable render target, keeping the mask.
    pub fn release_scratch(&mut self, allocator: &mut SurfaceAllocator) {
        if let Some(scratch) = self.scratch.take() {
            allocator.release(scratch.byte_len());
        }
    }

    pub fn release(&mut self, allocator: &mut SurfaceAllocator) {
        self.release_scratch(allocator);
        if let Some(mask) = self.mask.take() {
            allocator.release_alpha(mask);
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/capture.rs"]
mod tests;
