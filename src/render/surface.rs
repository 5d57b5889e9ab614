use crate::foundation::{
    core::ViewSize,
    error::{ShimmerError, ShimmerResult},
};

/// Owned single-channel (alpha-only) pixel buffer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AlphaSurface {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl AlphaSurface {
    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn byte_len(&self) -> usize {
        self.data.len()
    }

    /// Coverage at `(x, y)`; zero outside the surface.
    pub fn alpha_at(&self, x: u32, y: u32) -> u8 {
        if x >= self.width || y >= self.height {
            return 0;
        }
        self.data[(y as usize) * (self.width as usize) + (x as usize)]
    }

    pub fn clear(&mut self) {
        self.data.fill(0);
    }

    pub fn is_clear(&self) -> bool {
        self.data.iter().all(|&a| a == 0)
    }

    /// Copy the alpha channel of a same-sized RGBA8 buffer.
    pub(crate) fn fill_from_rgba8(&mut self, rgba: &[u8]) -> ShimmerResult<()> {
        if rgba.len() != self.data.len().saturating_mul(4) {
            return Err(ShimmerError::invalid_argument(
                "alpha extraction expects an rgba8 buffer matching the surface size",
            ));
        }
        for (dst, px) in self.data.iter_mut().zip(rgba.chunks_exact(4)) {
            *dst = px[3];
        }
        Ok(())
    }
}

/// Counters describing surface lifetime.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct AllocatorStats {
    pub live_bytes: usize,
    pub peak_bytes: usize,
    pub allocations: u64,
    pub failures: u64,
    pub reclaim_passes: u64,
}

/// Budgeted allocator for masks, scratch targets and band rasters.
///
/// Every byte handed out is accounted until it is released; a request that would push the live
/// total past `max_bytes` (or that the heap refuses) fails with
/// [`ShimmerError::ResourceExhausted`].
#[derive(Debug, Default, Clone)]
pub struct SurfaceAllocator {
    max_bytes: Option<usize>,
    stats: AllocatorStats,
}

impl SurfaceAllocator {
    pub fn new(max_bytes: Option<usize>) -> Self {
        Self {
            max_bytes,
            stats: AllocatorStats::default(),
        }
    }

    pub fn max_bytes(&self) -> Option<usize> {
        self.max_bytes
    }

    pub fn set_max_bytes(&mut self, max_bytes: Option<usize>) {
        self.max_bytes = max_bytes;
    }

    pub fn stats(&self) -> AllocatorStats {
        self.stats.clone()
    }

    /// Account `bytes` against the budget.
    pub(crate) fn reserve(&mut self, bytes: usize, what: &str) -> ShimmerResult<()> {
        let total = self.stats.live_bytes.saturating_add(bytes);
        if let Some(max) = self.max_bytes
            && total > max
        {
            self.stats.failures = self.stats.failures.saturating_add(1);
            return Err(ShimmerError::resource_exhausted(format!(
                "{what}: {bytes} bytes would exceed the {max} byte surface budget ({} live)",
                self.stats.live_bytes
            )));
        }
        self.stats.live_bytes = total;
        self.stats.peak_bytes = self.stats.peak_bytes.max(total);
        self.stats.allocations = self.stats.allocations.saturating_add(1);
        Ok(())
    }

    pub(crate) fn release(&mut self, bytes: usize) {
        self.stats.live_bytes = self.stats.live_bytes.saturating_sub(bytes);
    }

    pub(crate) fn note_reclaim(&mut self) {
        self.stats.reclaim_passes = self.stats.reclaim_passes.saturating_add(1);
    }

    /// Zeroed, accounted byte buffer.
    pub(crate) fn alloc_bytes(&mut self, len: usize, what: &str) -> ShimmerResult<Vec<u8>> {
        self.reserve(len, what)?;
        let mut data = Vec::new();
        if data.try_reserve_exact(len).is_err() {
            self.release(len);
            self.stats.failures = self.stats.failures.saturating_add(1);
            return Err(ShimmerError::resource_exhausted(format!(
                "{what}: heap refused {len} bytes"
            )));
        }
        data.resize(len, 0);
        Ok(data)
    }

    /// Reject empty surfaces and edges the CPU rasterizer cannot address. A rejection counts
    /// as a failed allocation.
    pub(crate) fn check_dims(&mut self, width: u32, height: u32, what: &str) -> ShimmerResult<()> {
        check_dims(width, height, what).inspect_err(|_| {
            self.stats.failures = self.stats.failures.saturating_add(1);
        })
    }

    /// Allocate a cleared mask. Edges must be non-zero and within the rasterizer limit.
    pub fn alloc_alpha(&mut self, width: u32, height: u32) -> ShimmerResult<AlphaSurface> {
        self.check_dims(width, height, "mask surface")?;
        let len = (width as usize).saturating_mul(height as usize);
        let data = self.alloc_bytes(len, "mask surface")?;
        Ok(AlphaSurface {
            width,
            height,
            data,
        })
    }

    pub fn release_alpha(&mut self, surface: AlphaSurface) {
        self.release(surface.byte_len());
    }
}

fn check_dims(width: u32, height: u32, what: &str) -> ShimmerResult<()> {
    if width == 0 || height == 0 {
        return Err(ShimmerError::resource_exhausted(format!(
            "{what}: cannot allocate an empty {width}x{height} surface"
        )));
    }
    if width > ViewSize::MAX_DIM || height > ViewSize::MAX_DIM {
        return Err(ShimmerError::resource_exhausted(format!(
            "{what}: {width}x{height} exceeds the {}px rasterizer limit",
            ViewSize::MAX_DIM
        )));
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/render/surface.rs"]
mod tests;
