use crate::{
    foundation::core::{Affine, ViewSize},
    render::canvas::{ContentCanvas, ContentRenderer},
};

/// A rendered frame as RGBA8 pixels.
///
/// Frames are **premultiplied alpha**; the `premultiplied` flag makes this explicit at API
/// boundaries.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameRGBA {
    pub width: u32,
    pub height: u32,
    /// RGBA8 bytes, tightly packed, row-major.
    pub data: Vec<u8>,
    pub premultiplied: bool,
}

impl FrameRGBA {
    pub fn transparent(width: u32, height: u32) -> Self {
        let len = (width as usize)
            .saturating_mul(height as usize)
            .saturating_mul(4);
        Self {
            width,
            height,
            data: vec![0; len],
            premultiplied: true,
        }
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = ((y as usize) * (self.width as usize) + (x as usize)) * 4;
        let px = self.data.get(idx..idx + 4)?;
        Some([px[0], px[1], px[2], px[3]])
    }

    /// Straight-alpha copy of the pixel data, for encoders that expect unassociated alpha.
    pub fn to_straight_rgba8(&self) -> Vec<u8> {
        if !self.premultiplied {
            return self.data.clone();
        }
        let mut out = self.data.clone();
        for px in out.chunks_exact_mut(4) {
            let a = u16::from(px[3]);
            if a == 0 || a == 255 {
                continue;
            }
            for c in &mut px[..3] {
                *c = ((u16::from(*c) * 255 + a / 2) / a).min(255) as u8;
            }
        }
        out
    }
}

/// Renders content into full-view frames, reusing the CPU render context between frames.
#[derive(Default)]
pub struct ContentRasterizer {
    ctx: Option<vello_cpu::RenderContext>,
}

impl ContentRasterizer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn render(&mut self, content: &dyn ContentRenderer, size: ViewSize) -> FrameRGBA {
        if size.is_empty() {
            return FrameRGBA::transparent(size.width, size.height);
        }
        // `ViewSize` caps both edges at u16::MAX.
        let (w, h) = (size.width as u16, size.height as u16);

        let mut ctx = match self.ctx.take() {
            Some(ctx) if ctx.width() == w && ctx.height() == h => ctx,
            _ => vello_cpu::RenderContext::new(w, h),
        };
        ctx.reset();
        {
            let mut canvas = ContentCanvas::new(&mut ctx, Affine::IDENTITY);
            content.render(&mut canvas);
        }
        ctx.flush();

        let mut pixmap = vello_cpu::Pixmap::new(w, h);
        ctx.render_to_pixmap(&mut pixmap);
        self.ctx = Some(ctx);

        FrameRGBA {
            width: size.width,
            height: size.height,
            data: pixmap.data_as_u8_slice().to_vec(),
            premultiplied: true,
        }
    }

    /// Drop the cached render context.
    pub fn release(&mut self) {
        self.ctx = None;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/frame.rs"]
mod tests;
