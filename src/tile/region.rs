//! The [`Tile`] value object.

use std::sync::Arc;

use ndarray::{Array3, Axis, Ix3};

use crate::error::TileError;
use crate::slide::Wsi;

use super::pixels::PixelBuffer;

/// A rectangular pixel region extracted from a Whole Slide Image.
///
/// A `Tile` couples a normalized pixel buffer with the position and pyramid
/// level it was extracted at, plus a shared handle to the parent [`Wsi`].
/// Everything is validated in [`Tile::new`] and immutable afterwards: either
/// every check passes and a fully valid tile exists, or construction fails
/// and nothing does.
///
/// The parent handle is non-owning in the sense that the `Wsi`'s lifetime is
/// managed independently; one slide is typically shared among many tiles.
#[derive(Debug, Clone, PartialEq)]
pub struct Tile {
    image: Array3<f32>,
    y_start: u64,
    x_start: u64,
    level: usize,
    parent: Arc<Wsi>,
    num_channels: usize,
}

impl Tile {
    /// Validate and build a tile.
    ///
    /// Offsets and level are accepted as signed integers so negative values
    /// are reported as range violations; validated values are stored
    /// unsigned, wide enough that any accepted input round-trips exactly.
    /// The pixel buffer is normalized per the [`PixelBuffer`] dtype rules
    /// and stored as `f32` in `[0, 1]`.
    ///
    /// # Errors
    ///
    /// Checked in order:
    ///
    /// 1. [`TileError::NotThreeDimensional`] unless the buffer has exactly
    ///    three axes (height x width x channel).
    /// 2. [`TileError::NegativeYStart`] / [`TileError::NegativeXStart`] for
    ///    negative offsets.
    /// 3. [`TileError::LevelOutOfRange`] for `level` outside
    ///    `[0, parent.level_count())`.
    /// 4. [`TileError::IncompatibleDtype`] for buffers with no defined
    ///    normalization.
    /// 5. [`TileError::NotNormalized`] for floating buffers with elements
    ///    outside `[0, 1]`.
    pub fn new(
        image: impl Into<PixelBuffer>,
        y_start: i64,
        x_start: i64,
        level: i64,
        parent: Arc<Wsi>,
    ) -> Result<Self, TileError> {
        let image = image.into();
        if image.ndim() != 3 {
            return Err(TileError::NotThreeDimensional);
        }
        if y_start < 0 {
            return Err(TileError::NegativeYStart);
        }
        if x_start < 0 {
            return Err(TileError::NegativeXStart);
        }
        if level < 0 || level as usize >= parent.level_count() {
            return Err(TileError::LevelOutOfRange);
        }

        let image = image
            .into_normalized()?
            .into_dimensionality::<Ix3>()
            .map_err(|_| TileError::NotThreeDimensional)?;
        let num_channels = image.len_of(Axis(2));

        Ok(Tile {
            image,
            y_start: y_start as u64,
            x_start: x_start as u64,
            level: level as usize,
            parent,
            num_channels,
        })
    }

    /// Normalized pixel data, height x width x channel, every element in
    /// `[0, 1]`.
    pub fn image(&self) -> &Array3<f32> {
        &self.image
    }

    /// Vertical offset of the tile's top-left corner within the parent
    /// slide's coordinate space at [`level`](Self::level).
    pub fn y_start(&self) -> u64 {
        self.y_start
    }

    /// Horizontal offset of the tile's top-left corner within the parent
    /// slide's coordinate space at [`level`](Self::level).
    pub fn x_start(&self) -> u64 {
        self.x_start
    }

    /// Pyramid level the tile was extracted at.
    pub fn level(&self) -> usize {
        self.level
    }

    /// The slide this tile was extracted from.
    pub fn parent_wsi(&self) -> &Arc<Wsi> {
        &self.parent
    }

    /// Number of color channels (length of the last axis).
    pub fn num_channels(&self) -> usize {
        self.num_channels
    }
}
