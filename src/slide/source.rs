//! Traits for pluggable slide-decoding backends.
//!
//! The crate never parses slide files itself. A [`SlideSource`] opens a path
//! through some external decoding library (OpenSlide bindings, a native TIFF
//! reader, an in-memory double in tests) and yields a [`SlideHandle`] that
//! exposes the static metadata [`crate::slide::Wsi`] snapshots at
//! construction.
//!
//! # Resource model
//!
//! A handle represents an open slide file. It is held only for the scoped
//! duration of metadata extraction and released by dropping it, on success
//! and error paths alike. Implementations release their underlying file
//! descriptor or native handle in `Drop`.
//!
//! Thread safety of concurrent opens is the backend library's own contract;
//! this crate neither serializes nor parallelizes calls into it.

use std::path::Path;

use crate::error::WsiError;

use super::properties::PropertyMap;

/// An open slide file, queried once for its static metadata.
///
/// All accessors are cheap reads of already-decoded structure; none of them
/// touch pixel data.
pub trait SlideHandle {
    /// The backend's string property map (`openslide.*`-style keys).
    fn properties(&self) -> &PropertyMap;

    /// Number of resolution pyramid levels. Level 0 is full resolution.
    fn level_count(&self) -> usize;

    /// Dimensions `(width, height)` of level 0, or `None` if the slide has
    /// no levels.
    fn dimensions(&self) -> Option<(u32, u32)>;

    /// Dimensions `(width, height)` of a specific level, or `None` if the
    /// level is out of range.
    fn level_dimensions(&self, level: usize) -> Option<(u32, u32)>;

    /// Downsample factor of a level relative to level 0, or `None` if the
    /// level is out of range. Level 0 has downsample 1.0.
    fn level_downsample(&self, level: usize) -> Option<f64>;
}

/// Factory for slide handles, abstracting over the decoding backend.
pub trait SlideSource {
    /// Handle type produced by this source.
    type Handle: SlideHandle;

    /// Open the slide at `path`.
    ///
    /// The path has already been checked for existence and canonicalized by
    /// the caller. Decoder failures are surfaced as
    /// [`WsiError::Backend`].
    fn open(&self, path: &Path) -> Result<Self::Handle, WsiError>;
}
