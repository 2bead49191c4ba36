//! Slide metadata layer.
//!
//! This module is the boundary between the crate and whatever library
//! actually decodes slide files:
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │                 Callers                 │
//! │        (pipelines, tiling code)         │
//! └────────────────────┬────────────────────┘
//!                      │
//!                      ▼
//! ┌─────────────────────────────────────────┐
//! │                   Wsi                   │
//! │   (immutable metadata snapshot taken    │
//! │        once at construction time)       │
//! └────────────────────┬────────────────────┘
//!                      │
//!                      ▼
//! ┌─────────────────────────────────────────┐
//! │       SlideSource / SlideHandle         │
//! │   (backend-agnostic decoding seam)      │
//! └─────────────────────────────────────────┘
//! ```
//!
//! # Usage
//!
//! ```ignore
//! use wsimorph::slide::{SlideSource, Wsi};
//!
//! // Any decoding backend that implements SlideSource will do.
//! let source = OpenSlideSource::new();
//!
//! let wsi = Wsi::open("slides/sample.svs", &source)?;
//! println!("{} levels, {} um/px", wsi.level_count(), wsi.mpp());
//!
//! // 123 microns expressed in level-1 pixels.
//! let pixels = wsi.pixels_from_microns(123.0, 1)?;
//! ```

mod properties;
mod source;
mod wsi;

pub use properties::{PropertyMap, PROP_MPP_X, PROP_MPP_Y, PROP_VENDOR};
pub use source::{SlideHandle, SlideSource};
pub use wsi::Wsi;
