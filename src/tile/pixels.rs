//! Pixel buffers and dtype normalization.
//!
//! Decoded tile data arrives in whatever element type the decoding backend
//! produces. [`PixelBuffer`] enumerates the closed set of element types this
//! crate knows how to handle and maps each supported one to a fixed
//! normalization into floating point `[0, 1]`:
//!
//! | Variant | Normalization                      |
//! |---------|------------------------------------|
//! | `U8`    | `x / 255` as `f32`                 |
//! | `U16`   | `x / 65535` as `f32`               |
//! | `F32`   | identity, range-checked            |
//! | `F64`   | range-checked, then cast to `f32`  |
//! | `U32`   | unsupported                        |
//! | `I32`   | unsupported                        |
//!
//! The unsupported variants exist so that integer buffers real decoders can
//! emit (label masks, raw counts) are rejected with a typed error instead of
//! being silently rescaled by a wrong constant.

use ndarray::{Array3, ArrayD};

use crate::error::TileError;

/// Scale divisor for 8-bit unsigned samples.
const U8_SCALE: f32 = 255.0;

/// Scale divisor for 16-bit unsigned samples.
const U16_SCALE: f32 = 65_535.0;

/// A dynamic-rank pixel buffer tagged with its element type.
///
/// Rank is dynamic (`ArrayD`) so that rank validation is a runtime check
/// owned by [`crate::tile::Tile`] rather than a compile-time constraint;
/// decoders hand over buffers whose rank is only known at runtime.
#[derive(Debug, Clone, PartialEq)]
pub enum PixelBuffer {
    /// 8-bit unsigned samples, normalized by dividing by 255
    U8(ArrayD<u8>),
    /// 16-bit unsigned samples, normalized by dividing by 65535
    U16(ArrayD<u16>),
    /// 32-bit unsigned samples; no defined normalization
    U32(ArrayD<u32>),
    /// 32-bit signed samples; no defined normalization
    I32(ArrayD<i32>),
    /// Single-precision samples, expected to already lie in `[0, 1]`
    F32(ArrayD<f32>),
    /// Double-precision samples, expected to already lie in `[0, 1]`
    F64(ArrayD<f64>),
}

impl PixelBuffer {
    /// Number of axes of the underlying buffer.
    pub fn ndim(&self) -> usize {
        match self {
            PixelBuffer::U8(a) => a.ndim(),
            PixelBuffer::U16(a) => a.ndim(),
            PixelBuffer::U32(a) => a.ndim(),
            PixelBuffer::I32(a) => a.ndim(),
            PixelBuffer::F32(a) => a.ndim(),
            PixelBuffer::F64(a) => a.ndim(),
        }
    }

    /// Shape of the underlying buffer.
    pub fn shape(&self) -> &[usize] {
        match self {
            PixelBuffer::U8(a) => a.shape(),
            PixelBuffer::U16(a) => a.shape(),
            PixelBuffer::U32(a) => a.shape(),
            PixelBuffer::I32(a) => a.shape(),
            PixelBuffer::F32(a) => a.shape(),
            PixelBuffer::F64(a) => a.shape(),
        }
    }

    /// Normalize into a floating-point buffer with every element in `[0, 1]`.
    ///
    /// Integer variants with a defined scale are rescaled and can never be
    /// out of range. Floating variants are validated as-is; elements above 1
    /// or below 0 fail with [`TileError::NotNormalized`] (NaN elements pass,
    /// since they are neither). Variants without a defined normalization
    /// fail with [`TileError::IncompatibleDtype`].
    pub(crate) fn into_normalized(self) -> Result<ArrayD<f32>, TileError> {
        match self {
            PixelBuffer::U8(a) => Ok(a.mapv(|v| f32::from(v) / U8_SCALE)),
            PixelBuffer::U16(a) => Ok(a.mapv(|v| f32::from(v) / U16_SCALE)),
            PixelBuffer::F32(a) => {
                if a.iter().any(|&v| v > 1.0 || v < 0.0) {
                    return Err(TileError::NotNormalized);
                }
                Ok(a)
            }
            PixelBuffer::F64(a) => {
                // Range-check at full precision before narrowing, so a value
                // like 1.0 + 1e-9 cannot round into range.
                if a.iter().any(|&v| v > 1.0 || v < 0.0) {
                    return Err(TileError::NotNormalized);
                }
                Ok(a.mapv(|v| v as f32))
            }
            PixelBuffer::U32(_) | PixelBuffer::I32(_) => Err(TileError::IncompatibleDtype),
        }
    }
}

macro_rules! impl_from_arrays {
    ($($variant:ident => $elem:ty),* $(,)?) => {
        $(
            impl From<ArrayD<$elem>> for PixelBuffer {
                fn from(array: ArrayD<$elem>) -> Self {
                    PixelBuffer::$variant(array)
                }
            }

            impl From<Array3<$elem>> for PixelBuffer {
                fn from(array: Array3<$elem>) -> Self {
                    PixelBuffer::$variant(array.into_dyn())
                }
            }
        )*
    };
}

impl_from_arrays!(
    U8 => u8,
    U16 => u16,
    U32 => u32,
    I32 => i32,
    F32 => f32,
    F64 => f64,
);

/// Reinterpret an interleaved `image` container as an H x W x C buffer.
fn buffer_from_samples(width: u32, height: u32, channels: usize, samples: Vec<u8>) -> PixelBuffer {
    let shape = (height as usize, width as usize, channels);
    let array =
        Array3::from_shape_vec(shape, samples).expect("container length matches its dimensions");
    PixelBuffer::U8(array.into_dyn())
}

impl From<image::RgbImage> for PixelBuffer {
    fn from(img: image::RgbImage) -> Self {
        let (width, height) = img.dimensions();
        buffer_from_samples(width, height, 3, img.into_raw())
    }
}

impl From<image::RgbaImage> for PixelBuffer {
    fn from(img: image::RgbaImage) -> Self {
        let (width, height) = img.dimensions();
        buffer_from_samples(width, height, 4, img.into_raw())
    }
}

impl From<image::GrayImage> for PixelBuffer {
    fn from(img: image::GrayImage) -> Self {
        let (width, height) = img.dimensions();
        buffer_from_samples(width, height, 1, img.into_raw())
    }
}
