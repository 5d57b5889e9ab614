use std::{fs::File, io::BufReader, path::Path, time::Duration};

use crate::{
    animation::{ease::Ease, sweep::SweepDirection},
    foundation::{
        core::Rgba8,
        error::{ShimmerError, ShimmerResult},
    },
    render::gradient::GradientSpec,
};

pub const DEFAULT_COLOR: Rgba8 = Rgba8::opaque(0xDD, 0xDD, 0xDD);
pub const DEFAULT_DURATION_MS: u32 = 1500;
pub const DEFAULT_BAND_WIDTH_RATIO: f32 = 0.5;
pub const DEFAULT_CENTER_WIDTH_RATIO: f32 = 0.1;

/// Shimmer configuration.
///
/// Loadable from JSON; omitted fields take their defaults. Colors accept `"#RRGGBB"`,
/// `"#RRGGBBAA"`, `{r,g,b,a}` or `[r,g,b(,a)]`.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ShimmerOptions {
    /// Center color of the band.
    pub color: Rgba8,
    /// Slant of the band in degrees, `[-90, 90]`.
    pub angle_degrees: i32,
    /// Sweep period.
    pub duration_ms: u32,
    /// Band width relative to half the view width, `(0, 1]`.
    pub band_width_ratio: f32,
    /// Fully opaque center width relative to the band, `(0, 1)`.
    pub center_width_ratio: f32,
    pub reverse: bool,
    /// Start as soon as the view is visible and attached.
    pub auto_start: bool,
    pub easing: Ease,
    /// Upper bound on live surface bytes (mask, capture target, band raster).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_surface_bytes: Option<usize>,
}

impl Default for ShimmerOptions {
    fn default() -> Self {
        Self {
            color: DEFAULT_COLOR,
            angle_degrees: 0,
            duration_ms: DEFAULT_DURATION_MS,
            band_width_ratio: DEFAULT_BAND_WIDTH_RATIO,
            center_width_ratio: DEFAULT_CENTER_WIDTH_RATIO,
            reverse: false,
            auto_start: true,
            easing: Ease::Linear,
            max_surface_bytes: None,
        }
    }
}

impl ShimmerOptions {
    /// Parse options from a JSON string and validate them.
    pub fn from_json_str(s: &str) -> ShimmerResult<Self> {
        let opts: Self = serde_json::from_str(s)
            .map_err(|e| ShimmerError::serde(format!("parse shimmer options JSON: {e}")))?;
        opts.validate()?;
        Ok(opts)
    }

    /// Parse options from a JSON reader and validate them.
    pub fn from_json_reader<R: std::io::Read>(r: R) -> ShimmerResult<Self> {
        let opts: Self = serde_json::from_reader(r)
            .map_err(|e| ShimmerError::serde(format!("parse shimmer options JSON: {e}")))?;
        opts.validate()?;
        Ok(opts)
    }

    /// Parse options from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> ShimmerResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            ShimmerError::Other(anyhow::anyhow!(
                "open shimmer options '{}': {e}",
                path.display()
            ))
        })?;
        Self::from_json_reader(BufReader::new(f))
    }

    pub fn validate(&self) -> ShimmerResult<()> {
        validate_angle(self.angle_degrees)?;
        validate_duration_ms(self.duration_ms)?;
        validate_band_width_ratio(self.band_width_ratio)?;
        validate_center_width_ratio(self.center_width_ratio)?;
        Ok(())
    }

    pub fn gradient_spec(&self) -> GradientSpec {
        GradientSpec {
            color: self.color,
            angle_degrees: self.angle_degrees,
            band_width_ratio: self.band_width_ratio,
            center_width_ratio: self.center_width_ratio,
        }
    }

    pub fn duration(&self) -> Duration {
        Duration::from_millis(u64::from(self.duration_ms))
    }

    pub fn direction(&self) -> SweepDirection {
        if self.reverse {
            SweepDirection::Reverse
        } else {
            SweepDirection::Forward
        }
    }
}

pub(crate) fn validate_angle(angle_degrees: i32) -> ShimmerResult<()> {
    if !(-90..=90).contains(&angle_degrees) {
        return Err(ShimmerError::invalid_argument(format!(
            "angle_degrees must be in [-90, 90], got {angle_degrees}"
        )));
    }
    Ok(())
}

pub(crate) fn validate_duration_ms(duration_ms: u32) -> ShimmerResult<()> {
    if duration_ms == 0 {
        return Err(ShimmerError::invalid_argument("duration_ms must be > 0"));
    }
    Ok(())
}

pub(crate) fn validate_band_width_ratio(ratio: f32) -> ShimmerResult<()> {
    if !ratio.is_finite() || ratio <= 0.0 || ratio > 1.0 {
        return Err(ShimmerError::invalid_argument(format!(
            "band_width_ratio must be in (0, 1], got {ratio}"
        )));
    }
    Ok(())
}

pub(crate) fn validate_center_width_ratio(ratio: f32) -> ShimmerResult<()> {
    if !ratio.is_finite() || ratio <= 0.0 || ratio >= 1.0 {
        return Err(ShimmerError::invalid_argument(format!(
            "center_width_ratio must be in (0, 1), got {ratio}"
        )));
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/config/options.rs"]
mod tests;
