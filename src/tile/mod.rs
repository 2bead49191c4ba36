//! Tile value objects.
//!
//! A [`Tile`] wraps one decoded pixel region together with where it came
//! from: top-left offset, pyramid level, and a shared handle to the parent
//! [`crate::slide::Wsi`]. Construction validates position and level against
//! the parent's metadata and normalizes the pixel buffer into floating point
//! `[0, 1]`; after that the tile is a passive, immutable data holder.
//!
//! # Components
//!
//! - [`PixelBuffer`]: closed set of decoder element types with their
//!   normalization rules
//! - [`Tile`]: the validated value object
//!
//! # Usage
//!
//! ```ignore
//! use std::sync::Arc;
//! use wsimorph::tile::Tile;
//!
//! // `region` is an H x W x C u8 buffer produced by the decoding backend.
//! let tile = Tile::new(region, 512, 1024, 0, Arc::clone(&wsi))?;
//! assert_eq!(tile.num_channels(), 3);
//! ```

mod pixels;
mod region;

pub use pixels::PixelBuffer;
pub use region::Tile;
