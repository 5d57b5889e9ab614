use std::{fs::File, io::BufReader, path::Path};

use crate::{
    foundation::{
        core::{Rect, Rgba8},
        error::{ShimmerError, ShimmerResult},
    },
    render::canvas::{ContentCanvas, ContentRenderer},
};

/// One placeholder shape in content coordinates.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Block {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    #[serde(default)]
    pub radius: f64,
    #[serde(default = "default_block_color")]
    pub color: Rgba8,
    #[serde(default = "default_opacity")]
    pub opacity: f32,
}

fn default_block_color() -> Rgba8 {
    Rgba8::opaque(0xEE, 0xEE, 0xEE)
}

fn default_opacity() -> f32 {
    1.0
}

impl Block {
    pub fn new(x: f64, y: f64, width: f64, height: f64, color: Rgba8) -> Self {
        Self {
            x,
            y,
            width,
            height,
            radius: 0.0,
            color,
            opacity: 1.0,
        }
    }

    pub fn with_radius(mut self, radius: f64) -> Self {
        self.radius = radius;
        self
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.x + self.width, self.y + self.height)
    }

    fn validate(&self, idx: usize) -> ShimmerResult<()> {
        let finite = [self.x, self.y, self.width, self.height, self.radius]
            .iter()
            .all(|v| v.is_finite());
        if !finite {
            return Err(ShimmerError::invalid_argument(format!(
                "block {idx}: coordinates must be finite"
            )));
        }
        if self.width < 0.0 || self.height < 0.0 || self.radius < 0.0 {
            return Err(ShimmerError::invalid_argument(format!(
                "block {idx}: width, height and radius must be >= 0"
            )));
        }
        if !(0.0..=1.0).contains(&self.opacity) {
            return Err(ShimmerError::invalid_argument(format!(
                "block {idx}: opacity must be in [0, 1]"
            )));
        }
        Ok(())
    }
}

/// Skeleton content made of filled (rounded) rectangles.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BlockContent {
    pub blocks: Vec<Block>,
}

impl BlockContent {
    pub fn new(blocks: Vec<Block>) -> Self {
        Self { blocks }
    }

    pub fn from_json_str(s: &str) -> ShimmerResult<Self> {
        let content: Self = serde_json::from_str(s)
            .map_err(|e| ShimmerError::serde(format!("parse block content JSON: {e}")))?;
        content.validate()?;
        Ok(content)
    }

    pub fn from_json_reader<R: std::io::Read>(r: R) -> ShimmerResult<Self> {
        let content: Self = serde_json::from_reader(r)
            .map_err(|e| ShimmerError::serde(format!("parse block content JSON: {e}")))?;
        content.validate()?;
        Ok(content)
    }

    pub fn from_path(path: impl AsRef<Path>) -> ShimmerResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            ShimmerError::Other(anyhow::anyhow!(
                "open block content '{}': {e}",
                path.display()
            ))
        })?;
        Self::from_json_reader(BufReader::new(f))
    }

    pub fn validate(&self) -> ShimmerResult<()> {
        for (idx, block) in self.blocks.iter().enumerate() {
            block.validate(idx)?;
        }
        Ok(())
    }

    /// List-item skeleton: per row a round avatar, a title bar and a shorter subtitle bar.
    ///
    /// Only rows that fit entirely inside `height` are emitted.
    pub fn list_rows(width: u32, height: u32, row_height: u32, color: Rgba8) -> Self {
        let mut blocks = Vec::new();
        if row_height == 0 {
            return Self { blocks };
        }
        let (w, rh) = (f64::from(width), f64::from(row_height));
        let pad = (rh / 8.0).floor().max(1.0);
        let avatar = (rh - 2.0 * pad).max(0.0);
        let text_x = pad + avatar + pad;
        let text_w = (w - text_x - pad).max(0.0);
        let bar_h = (avatar * 0.3).floor();

        let mut y = 0u32;
        while let Some(bottom) = y.checked_add(row_height)
            && bottom <= height
        {
            let top = f64::from(y) + pad;
            blocks.push(Block::new(pad, top, avatar, avatar, color).with_radius(avatar / 2.0));
            blocks.push(
                Block::new(text_x, top, (text_w * 0.7).floor(), bar_h, color)
                    .with_radius(bar_h / 2.0),
            );
            blocks.push(
                Block::new(
                    text_x,
                    top + avatar - bar_h,
                    (text_w * 0.45).floor(),
                    bar_h,
                    color,
                )
                .with_radius(bar_h / 2.0),
            );
            y = bottom;
        }
        Self { blocks }
    }
}

impl ContentRenderer for BlockContent {
    fn render(&self, canvas: &mut ContentCanvas<'_>) {
        for block in &self.blocks {
            if block.width <= 0.0 || block.height <= 0.0 {
                continue;
            }
            canvas.with_opacity(block.opacity, |c| {
                c.fill_rounded_rect(block.rect(), block.radius, block.color);
            });
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/content/blocks.rs"]
mod tests;
