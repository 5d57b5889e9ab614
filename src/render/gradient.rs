use crate::{
    foundation::{
        core::{Point, Rgba8, Rgba8Premul},
        math::lerp_u8,
    },
    geometry::mask::band_line_length,
};

/// Visual parameters of the band. Validated by the option setters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GradientSpec {
    pub color: Rgba8,
    pub angle_degrees: i32,
    pub band_width_ratio: f32,
    pub center_width_ratio: f32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GradientStop {
    pub offset: f32,
    pub color: Rgba8,
}

impl GradientSpec {
    pub fn edge_color(&self) -> Rgba8 {
        self.color.with_alpha(0)
    }

    /// `[edge, color, color, edge]` at `[0, 0.5 - c/2, 0.5 + c/2, 1]`.
    pub fn stops(&self) -> [GradientStop; 4] {
        let edge = self.edge_color();
        let half_center = self.center_width_ratio / 2.0;
        [
            GradientStop {
                offset: 0.0,
                color: edge,
            },
            GradientStop {
                offset: 0.5 - half_center,
                color: self.color,
            },
            GradientStop {
                offset: 0.5 + half_center,
                color: self.color,
            },
            GradientStop {
                offset: 1.0,
                color: edge,
            },
        ]
    }
}

/// Linear gradient band in mask-local coordinates, clamped to its edge stops.
#[derive(Clone, Debug, PartialEq)]
pub struct LinearBand {
    pub start: Point,
    pub end: Point,
    pub stops: [GradientStop; 4],
}

/// Build the band for a `width` x `height` view.
///
/// The axis starts at the bottom-left corner for non-negative angles (top-left otherwise) and
/// runs `line_length` along `(cos a, sin a)`.
pub fn build_band(width: u32, height: u32, spec: &GradientSpec) -> LinearBand {
    let line = band_line_length(width, spec.band_width_ratio);
    let angle = f64::from(spec.angle_degrees).to_radians();
    let y = if spec.angle_degrees >= 0 {
        f64::from(height)
    } else {
        0.0
    };
    let start = Point::new(0.0, y);
    let end = Point::new(start.x + angle.cos() * line, start.y + angle.sin() * line);
    LinearBand {
        start,
        end,
        stops: spec.stops(),
    }
}

impl LinearBand {
    /// Position of `p` along the axis, unclamped (`0` at `start`, `1` at `end`).
    pub fn param_at(&self, p: Point) -> f64 {
        let d = self.end - self.start;
        let len2 = d.hypot2();
        if len2 <= f64::EPSILON {
            return 0.0;
        }
        (p - self.start).dot(d) / len2
    }

    pub fn color_at_param(&self, t: f64) -> Rgba8 {
        let t = if t.is_finite() { t.clamp(0.0, 1.0) } else { 0.0 };
        let stops = &self.stops;
        if t <= f64::from(stops[0].offset) {
            return stops[0].color;
        }
        for pair in stops.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            let (oa, ob) = (f64::from(a.offset), f64::from(b.offset));
            if t <= ob {
                let span = ob - oa;
                if span <= 0.0 {
                    return b.color;
                }
                let u = (t - oa) / span;
                return Rgba8::new(
                    lerp_u8(a.color.r, b.color.r, u),
                    lerp_u8(a.color.g, b.color.g, u),
                    lerp_u8(a.color.b, b.color.b, u),
                    lerp_u8(a.color.a, b.color.a, u),
                );
            }
        }
        stops[3].color
    }

    pub fn sample(&self, p: Point) -> Rgba8 {
        self.color_at_param(self.param_at(p))
    }

    pub fn sample_premul(&self, p: Point) -> Rgba8Premul {
        self.sample(p).to_premul()
    }

    /// Sample every pixel center of a `width` x `height` area into premultiplied RGBA8.
    pub fn rasterize_premul_into(&self, width: u32, height: u32, out: &mut [u8]) {
        let w = width as usize;
        for (y, row) in out.chunks_exact_mut(w * 4).take(height as usize).enumerate() {
            let py = y as f64 + 0.5;
            for (x, px) in row.chunks_exact_mut(4).enumerate() {
                let c = self.sample_premul(Point::new(x as f64 + 0.5, py));
                px.copy_from_slice(&c.to_array());
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/gradient.rs"]
mod tests;
