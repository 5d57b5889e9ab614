//! Shimmer is a CPU engine for animated loading placeholders.
//!
//! A shimmer sweeps a slanted, color-graded band across the silhouette of content that has not
//! loaded yet. The band is only visible where the content's pixels are opaque:
//!
//! - Describe the look with [`ShimmerOptions`] (or load it from JSON)
//! - Create a [`ShimmerView`] and report layout with [`ShimmerView::on_layout`]
//! - Drive time with [`ShimmerView::on_frame`] and render with [`ShimmerView::draw`]
//!
//! Content is drawn by any [`ContentRenderer`]; [`BlockContent`] covers the common
//! skeleton-rows case.
#![forbid(unsafe_code)]

mod foundation;

pub(crate) mod animation;
pub(crate) mod config;
pub(crate) mod content;
pub(crate) mod geometry;
pub(crate) mod render;
pub(crate) mod view;

pub use crate::foundation::core::{
    Affine, BezPath, Point, Rect, Rgba8, Rgba8Premul, RoundedRect, Vec2, ViewSize,
};
pub use crate::foundation::error::{ShimmerError, ShimmerResult};

pub use crate::animation::deferred::{DeferredQueue, TaskId};
pub use crate::animation::ease::Ease;
pub use crate::animation::progression::RepeatingProgression;
pub use crate::animation::sweep::{AnimationState, SweepAnimator, SweepDirection, SweepTiming, Tick};
pub use crate::config::color::{parse_hex, to_hex};
pub use crate::config::options::ShimmerOptions;
pub use crate::content::blocks::{Block, BlockContent};
pub use crate::geometry::mask::{MaskRect, MaskRectCache, SweepBounds, projected_band_width};
pub use crate::render::canvas::{ContentCanvas, ContentRenderer};
pub use crate::render::capture::SilhouetteCapture;
pub use crate::render::composite::{Compositor, Paintable, ShimmerPaint, dst_in, over};
pub use crate::render::frame::{ContentRasterizer, FrameRGBA};
pub use crate::render::gradient::{GradientSpec, GradientStop, LinearBand, build_band};
pub use crate::render::surface::{AllocatorStats, AlphaSurface, SurfaceAllocator};
pub use crate::view::shimmer_view::ShimmerView;
