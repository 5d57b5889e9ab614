use kurbo::Shape as _;

use crate::foundation::core::{Affine, BezPath, Rect, RoundedRect, Rgba8};

/// Host-supplied drawing of the real content.
///
/// The same renderer is used for the visible content and for the silhouette capture, so it
/// must be deterministic for a given frame.
pub trait ContentRenderer {
    fn render(&self, canvas: &mut ContentCanvas<'_>);
}

impl<F> ContentRenderer for F
where
    F: Fn(&mut ContentCanvas<'_>),
{
    fn render(&self, canvas: &mut ContentCanvas<'_>) {
        self(canvas)
    }
}

/// Drawing surface handed to a [`ContentRenderer`].
///
/// Transforms set by the renderer are composed with the canvas base transform (the capture
/// translation), never replacing it.
pub struct ContentCanvas<'a> {
    ctx: &'a mut vello_cpu::RenderContext,
    base: Affine,
    transform: Affine,
    width: u32,
    height: u32,
}

impl<'a> ContentCanvas<'a> {
    pub(crate) fn new(ctx: &'a mut vello_cpu::RenderContext, base: Affine) -> Self {
        let width = u32::from(ctx.width());
        let height = u32::from(ctx.height());
        ctx.set_paint_transform(vello_cpu::kurbo::Affine::IDENTITY);
        ctx.set_transform(affine_to_cpu(base));
        Self {
            ctx,
            base,
            transform: Affine::IDENTITY,
            width,
            height,
        }
    }

    /// Pixel width of the target surface.
    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Current renderer transform, relative to the content origin.
    pub fn transform(&self) -> Affine {
        self.transform
    }

    pub fn set_transform(&mut self, transform: Affine) {
        self.transform = transform;
        self.ctx.set_transform(affine_to_cpu(self.base * transform));
    }

    pub fn fill_rect(&mut self, rect: Rect, color: Rgba8) {
        self.ctx.set_paint(to_cpu_color(color));
        self.ctx.fill_rect(&vello_cpu::kurbo::Rect::new(
            rect.x0, rect.y0, rect.x1, rect.y1,
        ));
    }

    pub fn fill_rounded_rect(&mut self, rect: Rect, radius: f64, color: Rgba8) {
        if radius <= 0.0 {
            self.fill_rect(rect, color);
            return;
        }
        let path = RoundedRect::from_rect(rect, radius).to_path(0.1);
        self.fill_path(&path, color);
    }

    pub fn fill_path(&mut self, path: &BezPath, color: Rgba8) {
        self.ctx.set_paint(to_cpu_color(color));
        self.ctx.fill_path(&bezpath_to_cpu(path));
    }

    /// Draw `f` into an opacity layer.
    pub fn with_opacity(&mut self, opacity: f32, f: impl FnOnce(&mut Self)) {
        let opacity = opacity.clamp(0.0, 1.0);
        if opacity >= 1.0 {
            f(self);
            return;
        }
        self.ctx.push_opacity_layer(opacity);
        f(self);
        self.ctx.pop_layer();
    }
}

fn to_cpu_color(c: Rgba8) -> vello_cpu::peniko::Color {
    vello_cpu::peniko::Color::from_rgba8(c.r, c.g, c.b, c.a)
}

fn affine_to_cpu(a: Affine) -> vello_cpu::kurbo::Affine {
    vello_cpu::kurbo::Affine::new(a.as_coeffs())
}

fn bezpath_to_cpu(path: &BezPath) -> vello_cpu::kurbo::BezPath {
    use kurbo::PathEl;

    let mut out = vello_cpu::kurbo::BezPath::new();
    for &el in path.elements() {
        match el {
            PathEl::MoveTo(p) => out.move_to(vello_cpu::kurbo::Point::new(p.x, p.y)),
            PathEl::LineTo(p) => out.line_to(vello_cpu::kurbo::Point::new(p.x, p.y)),
            PathEl::QuadTo(p1, p2) => out.quad_to(
                vello_cpu::kurbo::Point::new(p1.x, p1.y),
                vello_cpu::kurbo::Point::new(p2.x, p2.y),
            ),
            PathEl::CurveTo(p1, p2, p3) => out.curve_to(
                vello_cpu::kurbo::Point::new(p1.x, p1.y),
                vello_cpu::kurbo::Point::new(p2.x, p2.y),
                vello_cpu::kurbo::Point::new(p3.x, p3.y),
            ),
            PathEl::ClosePath => out.close_path(),
        }
    }
    out
}
