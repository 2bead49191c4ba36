//! # WSIMorph
//!
//! Validated metadata accessors and normalized tile value objects for Whole
//! Slide Images (WSI).
//!
//! This crate is a thin facade over an external slide-decoding library. It
//! does not parse slide formats or touch pixel I/O itself; it snapshots a
//! slide's static metadata once at construction time and wraps extracted
//! pixel regions in validated, immutable value objects.
//!
//! ## Features
//!
//! - **One-pass metadata**: [`slide::Wsi`] opens the slide through a
//!   pluggable [`slide::SlideSource`] backend, reads pyramid geometry,
//!   vendor, and pixel spacing exactly once, and releases the handle before
//!   the constructor returns
//! - **Unit conversion**: microns to pixels at any pyramid level via
//!   [`slide::Wsi::pixels_from_microns`]
//! - **Validated tiles**: [`tile::Tile`] checks position and level against
//!   the parent slide and normalizes integer pixel buffers into floating
//!   point `[0, 1]`
//! - **Fail-fast construction**: every object is fully validated when built
//!   and immutable afterwards; there is no partially-constructed state
//!
//! ## Architecture
//!
//! - [`slide`] - backend seam, property map, and the `Wsi` accessor
//! - [`tile`] - pixel buffer normalization and the `Tile` value object
//! - [`error`] - validation error types with fixed message contracts

pub mod error;
pub mod slide;
pub mod tile;

// Re-export commonly used types
pub use error::{TileError, WsiError};
pub use slide::{PropertyMap, SlideHandle, SlideSource, Wsi, PROP_MPP_X, PROP_MPP_Y, PROP_VENDOR};
pub use tile::{PixelBuffer, Tile};
