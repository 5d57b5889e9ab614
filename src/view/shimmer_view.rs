use std::time::Duration;

use crate::{
    animation::{
        deferred::{DeferredQueue, TaskId},
        ease::Ease,
        sweep::{AnimationState, SweepAnimator, SweepTiming},
    },
    config::options::{
        ShimmerOptions, validate_angle, validate_band_width_ratio, validate_center_width_ratio,
        validate_duration_ms,
    },
    foundation::{
        core::{Rgba8, ViewSize},
        error::ShimmerResult,
    },
    geometry::mask::{MaskRect, MaskRectCache, SweepBounds},
    render::{
        canvas::ContentRenderer,
        capture::SilhouetteCapture,
        composite::Compositor,
        frame::{ContentRasterizer, FrameRGBA},
        surface::{AllocatorStats, SurfaceAllocator},
    },
};

/// A shimmer placeholder over host-drawn content.
///
/// The host reports layout with [`ShimmerView::on_layout`], drives time with
/// [`ShimmerView::on_frame`] and renders with [`ShimmerView::draw`] whenever
/// [`ShimmerView::take_repaint_request`] says so. Everything runs on the caller's thread.
pub struct ShimmerView {
    options: ShimmerOptions,
    size: Option<ViewSize>,
    visible: bool,
    attached: bool,
    animator: SweepAnimator,
    mask_rects: MaskRectCache,
    capture: SilhouetteCapture,
    compositor: Compositor,
    allocator: SurfaceAllocator,
    content_raster: ContentRasterizer,
    layout_tasks: DeferredQueue<ShimmerView>,
    pending_start: Option<TaskId>,
    repaint_requested: bool,
    resets: u64,
}

impl std::fmt::Debug for ShimmerView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ShimmerView")
            .field("options", &self.options)
            .field("size", &self.size)
            .field("visible", &self.visible)
            .field("attached", &self.attached)
            .field("state", &self.animator.state())
            .field("pending_start", &self.pending_start.is_some())
            .field("capture", &self.capture)
            .field("allocator", &self.allocator)
            .finish()
    }
}

impl ShimmerView {
    /// Create a visible, attached view. Starts immediately (deferred until layout) when
    /// `auto_start` is set.
    pub fn new(options: ShimmerOptions) -> ShimmerResult<Self> {
        options.validate()?;
        let allocator = SurfaceAllocator::new(options.max_surface_bytes);
        let mut view = Self {
            options,
            size: None,
            visible: true,
            attached: true,
            animator: SweepAnimator::new(),
            mask_rects: MaskRectCache::default(),
            capture: SilhouetteCapture::new(),
            compositor: Compositor::new(),
            allocator,
            content_raster: ContentRasterizer::new(),
            layout_tasks: DeferredQueue::new(),
            pending_start: None,
            repaint_requested: false,
            resets: 0,
        };
        if view.options.auto_start {
            view.start();
        }
        Ok(view)
    }

    pub fn options(&self) -> &ShimmerOptions {
        &self.options
    }

    pub fn size(&self) -> Option<ViewSize> {
        self.size
    }

    pub fn is_running(&self) -> bool {
        self.animator.is_running()
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn is_attached(&self) -> bool {
        self.attached
    }

    /// Whether a start is waiting for the first non-empty layout.
    pub fn has_pending_start(&self) -> bool {
        self.pending_start.is_some()
    }

    pub fn animation_state(&self) -> Option<AnimationState> {
        self.animator.state()
    }

    /// Width of the mask used by the running sweep.
    pub fn mask_width(&self) -> Option<u32> {
        self.animator.mask_width()
    }

    /// Number of stop/start resets caused by option or size changes.
    pub fn reset_count(&self) -> u64 {
        self.resets
    }

    pub fn allocator_stats(&self) -> AllocatorStats {
        self.allocator.stats()
    }

    /// Start sweeping. A no-op when already running; deferred to the next layout when the
    /// view width is still unknown.
    pub fn start(&mut self) {
        if self.animator.is_running() {
            return;
        }

        let size = match self.size {
            Some(size) if size.width > 0 => size,
            _ => {
                if self.pending_start.is_none() {
                    let id = self.layout_tasks.register(|view: &mut ShimmerView| {
                        view.pending_start = None;
                        view.start();
                    });
                    self.pending_start = Some(id);
                    tracing::debug!("layout not ready, start deferred");
                }
                return;
            }
        };

        let rect = self.current_mask_rect(size);
        let bounds = SweepBounds::compute(size.width, rect.width);
        let timing = SweepTiming {
            period: self.options.duration(),
            direction: self.options.direction(),
            ease: self.options.easing,
        };
        if self.animator.begin(bounds, rect.width, timing) {
            tracing::debug!(
                width = size.width,
                height = size.height,
                mask_width = rect.width,
                start_bound = bounds.start,
                end_bound = bounds.end,
                "shimmer started"
            );
            if !rect.is_renderable() {
                tracing::debug!(
                    mask_width = rect.width,
                    angle = self.options.angle_degrees,
                    "mask exceeds the rasterizer limit, frames draw content only"
                );
            }
            if let Some(state) = self.animator.state()
                && state.current_offset_x.saturating_add(i64::from(rect.width)) >= 0
            {
                self.repaint_requested = true;
            }
        }
    }

    /// Stop sweeping, cancel a deferred start and release every surface. Idempotent.
    pub fn stop(&mut self) {
        if let Some(id) = self.pending_start.take() {
            self.layout_tasks.cancel(id);
            tracing::debug!("deferred start cancelled");
        }
        let was_running = self.animator.end();
        self.capture.release(&mut self.allocator);
        self.compositor.discard(&mut self.allocator);
        if was_running {
            tracing::debug!("shimmer stopped");
            self.repaint_requested = true;
        }
    }

    fn reset_if_running(&mut self) {
        if !self.animator.is_running() {
            return;
        }
        self.stop();
        self.start();
        self.resets = self.resets.saturating_add(1);
        tracing::debug!(resets = self.resets, "shimmer reset");
    }

    fn current_mask_rect(&mut self, size: ViewSize) -> MaskRect {
        self.mask_rects.get(
            size,
            self.options.angle_degrees,
            self.options.band_width_ratio,
        )
    }

    pub fn set_color(&mut self, color: Rgba8) {
        self.options.color = color;
        self.reset_if_running();
    }

    pub fn set_duration_ms(&mut self, duration_ms: u32) -> ShimmerResult<()> {
        validate_duration_ms(duration_ms)?;
        self.options.duration_ms = duration_ms;
        self.reset_if_running();
        Ok(())
    }

    pub fn set_angle(&mut self, angle_degrees: i32) -> ShimmerResult<()> {
        validate_angle(angle_degrees)?;
        self.options.angle_degrees = angle_degrees;
        self.reset_if_running();
        Ok(())
    }

    pub fn set_band_width_ratio(&mut self, ratio: f32) -> ShimmerResult<()> {
        validate_band_width_ratio(ratio)?;
        self.options.band_width_ratio = ratio;
        self.reset_if_running();
        Ok(())
    }

    pub fn set_center_width_ratio(&mut self, ratio: f32) -> ShimmerResult<()> {
        validate_center_width_ratio(ratio)?;
        self.options.center_width_ratio = ratio;
        self.reset_if_running();
        Ok(())
    }

    pub fn set_reverse(&mut self, reverse: bool) {
        self.options.reverse = reverse;
        self.reset_if_running();
    }

    pub fn set_easing(&mut self, easing: Ease) {
        self.options.easing = easing;
        self.reset_if_running();
    }

    /// Takes effect on the next visibility or attach change.
    pub fn set_auto_start(&mut self, auto_start: bool) {
        self.options.auto_start = auto_start;
    }

    /// Replace every option at once, with a single reset when running.
    pub fn set_options(&mut self, options: ShimmerOptions) -> ShimmerResult<()> {
        options.validate()?;
        self.allocator.set_max_bytes(options.max_surface_bytes);
        self.options = options;
        self.reset_if_running();
        Ok(())
    }

    /// Change the surface byte budget. Live surfaces are kept; the budget applies to the next
    /// allocation.
    pub fn set_surface_budget(&mut self, max_bytes: Option<usize>) {
        self.options.max_surface_bytes = max_bytes;
        self.allocator.set_max_bytes(max_bytes);
    }

    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
        if visible {
            if self.options.auto_start {
                self.start();
            }
        } else {
            self.stop();
        }
    }

    pub fn on_attach(&mut self) {
        self.attached = true;
        if self.options.auto_start && self.visible {
            self.start();
        }
    }

    pub fn on_detach(&mut self) {
        self.attached = false;
        self.stop();
        self.mask_rects.invalidate();
        self.content_raster.release();
    }

    /// Record the laid-out size, reset a running sweep whose size changed, then run the
    /// tasks waiting for layout.
    pub fn on_layout(&mut self, width: u32, height: u32) -> ShimmerResult<()> {
        let size = ViewSize::new(width, height)?;
        let changed = self.size != Some(size);
        self.size = Some(size);
        if changed {
            tracing::debug!(width, height, "layout changed");
            self.reset_if_running();
        }

        for task in self.layout_tasks.take_all() {
            task(self);
        }
        Ok(())
    }

    /// Advance the sweep to `now` (host clock, any origin). Returns whether a repaint is
    /// needed.
    pub fn on_frame(&mut self, now: Duration) -> bool {
        let Some(tick) = self.animator.tick(now) else {
            return false;
        };
        if tick.repaint {
            self.repaint_requested = true;
        }
        tick.repaint
    }

    /// Consume the pending repaint flag.
    pub fn take_repaint_request(&mut self) -> bool {
        std::mem::take(&mut self.repaint_requested)
    }

    /// Render `content` and, while running, the masked band over it at the current offset.
    ///
    /// Never fails: when surfaces cannot be allocated (after one reclamation pass) the frame
    /// holds the content alone.
    pub fn draw(&mut self, content: &dyn ContentRenderer) -> FrameRGBA {
        let Some(size) = self.size else {
            return FrameRGBA::transparent(0, 0);
        };
        let mut frame = self.content_raster.render(content, size);
        if size.is_empty() {
            return frame;
        }
        let (Some(offset_x), Some(mask_width)) =
            (self.animator.offset_x(), self.animator.mask_width())
        else {
            return frame;
        };
        let rect = MaskRect {
            width: mask_width,
            height: size.height,
        };
        if !rect.is_renderable() {
            return frame;
        }

        let result = match self.draw_shimmer(&mut frame, content, size, offset_x, rect) {
            Err(e) if e.is_resource_exhausted() => {
                tracing::warn!(error = %e, "shimmer surfaces unavailable, reclaiming");
                self.reclaim();
                self.draw_shimmer(&mut frame, content, size, offset_x, rect)
            }
            other => other,
        };
        if let Err(e) = result {
            tracing::warn!(error = %e, "shimmer skipped for this frame");
        }
        frame
    }

    fn draw_shimmer(
        &mut self,
        frame: &mut FrameRGBA,
        content: &dyn ContentRenderer,
        size: ViewSize,
        offset_x: i64,
        rect: MaskRect,
    ) -> ShimmerResult<()> {
        let spec = self.options.gradient_spec();
        let mask = self
            .capture
            .capture(content, offset_x, rect, &mut self.allocator)?;
        let paint = self.compositor.paint_for(
            size.width,
            rect.width,
            rect.height,
            &spec,
            &mut self.allocator,
        )?;
        Compositor::composite(paint, mask).draw_onto(frame, offset_x);
        Ok(())
    }

    fn reclaim(&mut self) {
        self.capture.release_scratch(&mut self.allocator);
        self.compositor.discard(&mut self.allocator);
        self.allocator.note_reclaim();
    }
}

#[cfg(test)]
#[path = "../../tests/unit/view/shimmer_view.rs"]
mod tests;
