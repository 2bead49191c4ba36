//! Whole Slide Image metadata accessor.
//!
//! [`Wsi`] is an immutable snapshot of a slide's static metadata: pyramid
//! geometry, vendor, and physical pixel spacing. The backing file is opened
//! exactly once, inside [`Wsi::open`], and the backend handle is dropped
//! before the constructor returns; the accessor never re-reads the file.

use std::fmt;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::WsiError;

use super::properties::{PROP_MPP_X, PROP_MPP_Y, PROP_VENDOR};
use super::source::{SlideHandle, SlideSource};

/// Vendor string reported when the backend supplies none.
const UNKNOWN_VENDOR: &str = "Unknown";

// =============================================================================
// Wsi
// =============================================================================

/// Immutable metadata for a Whole Slide Image.
///
/// Constructed via [`Wsi::open`]; every field is validated there and
/// read-only afterwards, so sharing a `Wsi` across threads (typically behind
/// an `Arc`) needs no synchronization.
#[derive(Debug, Clone, PartialEq)]
pub struct Wsi {
    path: PathBuf,
    name: String,
    stem: String,
    vendor: String,
    level_count: usize,
    dimensions: (u32, u32),
    level_dimensions: Vec<(u32, u32)>,
    level_downsamples: Vec<f64>,
    mpp_x: f64,
    mpp_y: f64,
    mpp: f64,
}

impl Wsi {
    /// Open the slide at `path` through `source` and snapshot its metadata.
    ///
    /// The backend handle lives only for the duration of this call. Vendor
    /// defaults to `"Unknown"` and the microns-per-pixel properties default
    /// to `0.0` (the "no spacing information" sentinel) when absent from the
    /// property map. The unified [`mpp`](Self::mpp) is set only for
    /// isotropic, strictly positive spacing.
    ///
    /// # Errors
    ///
    /// - [`WsiError::FileNotFound`] if `path` does not exist.
    /// - [`WsiError::Backend`] if the backend fails to open the file or its
    ///   handle reports inconsistent pyramid metadata.
    pub fn open<S: SlideSource>(path: impl AsRef<Path>, source: &S) -> Result<Self, WsiError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(WsiError::FileNotFound);
        }
        let path = path.canonicalize().map_err(|_| WsiError::FileNotFound)?;

        let name = path
            .file_name()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        let stem = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();

        // Scoped acquisition: the handle is dropped at the end of this block,
        // releasing the backend's file resources before the Wsi exists.
        let (vendor, level_count, dimensions, level_dimensions, level_downsamples, mpp_x, mpp_y) = {
            let handle = source.open(&path)?;
            let props = handle.properties();

            let vendor = props.get_or(PROP_VENDOR, UNKNOWN_VENDOR).to_string();
            let mpp_x = props.get_f64_or(PROP_MPP_X, 0.0);
            let mpp_y = props.get_f64_or(PROP_MPP_Y, 0.0);

            let level_count = handle.level_count();
            let dimensions = handle.dimensions().ok_or_else(|| {
                WsiError::Backend("handle reported no level 0 dimensions".to_string())
            })?;

            let mut level_dimensions = Vec::with_capacity(level_count);
            let mut level_downsamples = Vec::with_capacity(level_count);
            for level in 0..level_count {
                let dims = handle.level_dimensions(level).ok_or_else(|| {
                    WsiError::Backend(format!("handle reported no dimensions for level {level}"))
                })?;
                let downsample = handle.level_downsample(level).ok_or_else(|| {
                    WsiError::Backend(format!("handle reported no downsample for level {level}"))
                })?;
                level_dimensions.push(dims);
                level_downsamples.push(downsample);
            }

            (
                vendor,
                level_count,
                dimensions,
                level_dimensions,
                level_downsamples,
                mpp_x,
                mpp_y,
            )
        };

        let mpp = if mpp_x == mpp_y && mpp_x > 0.0 {
            mpp_x
        } else {
            0.0
        };

        debug!(
            path = %path.display(),
            vendor = %vendor,
            levels = level_count,
            mpp,
            "opened slide metadata"
        );

        Ok(Wsi {
            path,
            name,
            stem,
            vendor,
            level_count,
            dimensions,
            level_dimensions,
            level_downsamples,
            mpp_x,
            mpp_y,
            mpp,
        })
    }

    /// Convert a distance in microns to pixels at the given pyramid level.
    ///
    /// `mpp` is the pixel pitch at level 0; multiplying by the level's
    /// downsample factor rescales it to that level's pitch, and dividing the
    /// micron distance by the pitch yields the equivalent pixel count.
    ///
    /// `level` is accepted as a signed integer so that a negative level is a
    /// reported range violation rather than a silent wrap.
    ///
    /// # Errors
    ///
    /// Checked in order: [`WsiError::LevelOutOfRange`] for `level` outside
    /// `[0, level_count)`, [`WsiError::NonPositiveMicrons`] for
    /// `microns <= 0`, [`WsiError::NoPixelSpacing`] when the slide has no
    /// unified pixel spacing.
    pub fn pixels_from_microns(&self, microns: f64, level: i64) -> Result<f64, WsiError> {
        if level < 0 || level as usize >= self.level_count {
            return Err(WsiError::LevelOutOfRange);
        }
        if microns <= 0.0 {
            return Err(WsiError::NonPositiveMicrons);
        }
        if self.mpp == 0.0 {
            return Err(WsiError::NoPixelSpacing);
        }
        Ok(microns / (self.mpp * self.level_downsamples[level as usize]))
    }

    /// Canonicalized filesystem path of the slide.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// File name of the slide, including extension.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// File name of the slide without its extension.
    pub fn stem(&self) -> &str {
        &self.stem
    }

    /// Scanner vendor, or `"Unknown"`.
    pub fn vendor(&self) -> &str {
        &self.vendor
    }

    /// Number of resolution pyramid levels.
    pub fn level_count(&self) -> usize {
        self.level_count
    }

    /// Dimensions `(width, height)` of level 0 in pixels.
    pub fn dimensions(&self) -> (u32, u32) {
        self.dimensions
    }

    /// Per-level dimensions, index-aligned with level index.
    pub fn level_dimensions(&self) -> &[(u32, u32)] {
        &self.level_dimensions
    }

    /// Per-level downsample factors relative to level 0.
    pub fn level_downsamples(&self) -> &[f64] {
        &self.level_downsamples
    }

    /// Unified microns-per-pixel spacing, or `0.0` when spacing is unknown
    /// or anisotropic.
    pub fn mpp(&self) -> f64 {
        self.mpp
    }

    /// Horizontal microns-per-pixel, or `0.0` when unknown.
    pub fn mpp_x(&self) -> f64 {
        self.mpp_x
    }

    /// Vertical microns-per-pixel, or `0.0` when unknown.
    pub fn mpp_y(&self) -> f64 {
        self.mpp_y
    }
}

impl fmt::Display for Wsi {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<WSI: {}>", self.name)
    }
}

// =============================================================================
// Tests
// =============================================================================
