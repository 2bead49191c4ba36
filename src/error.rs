use thiserror::Error;

/// Errors raised while constructing a [`crate::slide::Wsi`] or converting
/// units against its metadata.
///
/// Message strings are part of the public contract: callers match on them
/// when reporting validation failures, so they are fixed text rather than
/// formatted detail.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WsiError {
    /// The slide path does not point to an existing file
    #[error("File not found.")]
    FileNotFound,

    /// Requested level is outside `[0, level_count)`
    #[error("Level must be greater than or equal to zero and less than the level count of the WSI.")]
    LevelOutOfRange,

    /// Micron distances must be strictly positive
    #[error("Microns must be greater than zero.")]
    NonPositiveMicrons,

    /// The slide carries no usable microns-per-pixel metadata
    #[error("WSI has no pixel size information.")]
    NoPixelSpacing,

    /// Failure surfaced by the external slide-decoding backend, or
    /// inconsistent metadata returned by its handle
    #[error("Slide backend error: {0}")]
    Backend(String),
}

/// Errors raised while constructing a [`crate::tile::Tile`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TileError {
    /// The pixel buffer does not have exactly three axes (H x W x C)
    #[error("Image must be a 3D array.")]
    NotThreeDimensional,

    /// Negative vertical offset
    #[error("Y start must be greater than or equal to zero.")]
    NegativeYStart,

    /// Negative horizontal offset
    #[error("X start must be greater than or equal to zero.")]
    NegativeXStart,

    /// Tile level is outside the parent slide's pyramid
    #[error("Level must be greater than or equal to zero and less than the level count of the parent WSI.")]
    LevelOutOfRange,

    /// The buffer's element type has no defined normalization
    #[error("Image must be a of a compatible dtype.")]
    IncompatibleDtype,

    /// A floating-point buffer contains values outside `[0, 1]`
    #[error("Image must be normalized to [0, 1].")]
    NotNormalized,
}
