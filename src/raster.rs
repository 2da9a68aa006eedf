//! Owned packed pixel storage.

use alloc::vec;
use alloc::vec::Vec;
use core::fmt;

use crate::channel::Value;
use crate::format::{FormatError, PixelFormat};
use crate::surface::Surface;
use crate::vector::Vec2;

/// An owned, contiguous packed pixel store implementing [`Surface`].
///
/// Pixels are stored row-major with a computed row stride; every row starts
/// on a byte boundary. Sub-byte formats pack multiple pixels per byte with
/// the leftmost pixel in the highest-order bits; multi-byte formats store
/// each pixel big-endian, channel 0 first.
///
/// This is the storage a codec collaborator populates on decode and reads
/// back on encode — [`from_vec`](Raster::from_vec) / [`into_vec`](Raster::into_vec)
/// move the raw bytes across that boundary without copying.
///
/// # Example
///
/// ```
/// use rasterink::{PixelFormat, Raster, Surface, Vec2};
///
/// let mut raster = Raster::new(4, 4, PixelFormat::RGB8)?;
/// raster.set(Vec2::new(1, 2), 0x102030);
/// assert_eq!(raster.get(Vec2::new(1, 2)), 0x102030);
/// # Ok::<(), rasterink::RasterError>(())
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Raster {
    format: PixelFormat,
    width: u32,
    height: u32,
    stride: usize,
    buf: Vec<u8>,
}

impl Raster {
    /// Create a zero-filled raster.
    pub fn new(width: u32, height: u32, format: PixelFormat) -> Result<Self, RasterError> {
        let (stride, len) = Self::layout(width, height, format)?;
        Ok(Raster {
            format,
            width,
            height,
            stride,
            buf: vec![0; len],
        })
    }

    /// Create a raster over existing packed bytes.
    ///
    /// `buf` must hold exactly `height` rows of `(width * bits_per_pixel + 7) / 8`
    /// bytes each, laid out as described on [`Raster`].
    pub fn from_vec(
        width: u32,
        height: u32,
        format: PixelFormat,
        buf: Vec<u8>,
    ) -> Result<Self, RasterError> {
        let (stride, len) = Self::layout(width, height, format)?;
        if buf.len() != len {
            return Err(RasterError::BufferSize {
                actual: buf.len(),
                expected: len,
            });
        }
        Ok(Raster {
            format,
            width,
            height,
            stride,
            buf,
        })
    }

    /// Create a zero-filled raster from a raw channel count and bit depth,
    /// as read from a container header.
    pub fn with_layout(
        width: u32,
        height: u32,
        channels: u8,
        bit_depth: u8,
    ) -> Result<Self, RasterError> {
        Self::new(width, height, PixelFormat::new(channels, bit_depth)?)
    }

    fn layout(width: u32, height: u32, format: PixelFormat) -> Result<(usize, usize), RasterError> {
        if width == 0 || height == 0 {
            return Err(RasterError::ZeroDimension { width, height });
        }
        let row_bits = (width as usize)
            .checked_mul(format.bits_per_pixel() as usize)
            .ok_or(RasterError::Overflow)?;
        let stride = row_bits / 8 + usize::from(row_bits % 8 != 0);
        let len = stride
            .checked_mul(height as usize)
            .ok_or(RasterError::Overflow)?;
        Ok((stride, len))
    }

    /// Bytes per row.
    #[inline]
    pub fn stride(&self) -> usize {
        self.stride
    }

    /// The packed bytes, row-major.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf
    }

    /// The packed bytes, row-major, mutable.
    #[inline]
    pub fn as_bytes_mut(&mut self) -> &mut [u8] {
        &mut self.buf
    }

    /// Consume the raster and return the packed bytes.
    #[inline]
    pub fn into_vec(self) -> Vec<u8> {
        self.buf
    }
}

impl Surface for Raster {
    #[inline]
    fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    fn format(&self) -> PixelFormat {
        self.format
    }

    fn get(&self, pos: Vec2) -> Value {
        let x = pos.x as usize;
        let row = pos.y as usize * self.stride;
        let pixels_per_byte = self.format.pixels_per_byte();

        if pixels_per_byte > 1 {
            let bits = self.format.bits_per_pixel() as usize;
            let shift = (pixels_per_byte - 1 - x % pixels_per_byte) * bits;
            (self.buf[row + x / pixels_per_byte] as Value >> shift) & self.format.pixel_mask()
        } else {
            let bytes = self.format.bytes_per_pixel();
            let base = row + x * bytes;
            self.buf[base..base + bytes]
                .iter()
                .fold(0, |value, &b| (value << 8) | b as Value)
        }
    }

    fn set(&mut self, pos: Vec2, value: Value) {
        let x = pos.x as usize;
        let row = pos.y as usize * self.stride;
        let pixels_per_byte = self.format.pixels_per_byte();
        let value = value & self.format.pixel_mask();

        if pixels_per_byte > 1 {
            let bits = self.format.bits_per_pixel() as usize;
            let shift = (pixels_per_byte - 1 - x % pixels_per_byte) * bits;
            let mask = self.format.pixel_mask() as u8;
            let byte = &mut self.buf[row + x / pixels_per_byte];
            *byte = (*byte & !(mask << shift)) | ((value as u8) << shift);
        } else {
            let bytes = self.format.bytes_per_pixel();
            let base = row + x * bytes;
            for (i, b) in self.buf[base..base + bytes].iter_mut().enumerate() {
                *b = (value >> ((bytes - 1 - i) * 8)) as u8;
            }
        }
    }
}

/// A raster could not be constructed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RasterError {
    /// Width or height was zero.
    ZeroDimension {
        /// Requested width.
        width: u32,
        /// Requested height.
        height: u32,
    },
    /// The supplied buffer does not match the computed layout.
    BufferSize {
        /// Supplied buffer length in bytes.
        actual: usize,
        /// Required buffer length in bytes.
        expected: usize,
    },
    /// The byte layout does not fit in addressable memory.
    Overflow,
    /// The pixel format itself was invalid.
    Format(FormatError),
}

impl fmt::Display for RasterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroDimension { width, height } => {
                write!(f, "raster dimensions {width}x{height} must be positive")
            }
            Self::BufferSize { actual, expected } => {
                write!(f, "buffer holds {actual} bytes, layout requires {expected}")
            }
            Self::Overflow => write!(f, "raster byte layout overflows usize"),
            Self::Format(err) => write!(f, "invalid pixel format: {err}"),
        }
    }
}

impl core::error::Error for RasterError {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            Self::Format(err) => Some(err),
            _ => None,
        }
    }
}

impl From<FormatError> for RasterError {
    fn from(err: FormatError) -> Self {
        Self::Format(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn rejects_zero_dimensions_and_bad_buffers() {
        assert_eq!(
            Raster::new(0, 4, PixelFormat::GRAY8),
            Err(RasterError::ZeroDimension {
                width: 0,
                height: 4
            })
        );
        assert_eq!(
            Raster::from_vec(2, 2, PixelFormat::RGB8, vec![0; 5]),
            Err(RasterError::BufferSize {
                actual: 5,
                expected: 12
            })
        );
    }

    #[test]
    fn with_layout_validates_the_format() {
        assert!(Raster::with_layout(4, 4, 3, 8).is_ok());
        assert_eq!(
            Raster::with_layout(4, 4, 2, 4),
            Err(RasterError::Format(FormatError::SubBytePacking {
                channels: 2,
                bit_depth: 4
            }))
        );
    }

    #[test]
    fn stride_rounds_up_to_byte_boundary() {
        // 9 one-bit pixels per row need two bytes.
        let raster = Raster::new(9, 3, PixelFormat::GRAY1).unwrap();
        assert_eq!(raster.stride(), 2);
        assert_eq!(raster.as_bytes().len(), 6);

        let raster = Raster::new(5, 1, PixelFormat::GRAY2).unwrap();
        assert_eq!(raster.stride(), 2);
    }

    #[test]
    fn sub_byte_pixels_pack_most_significant_first() {
        let mut raster = Raster::new(5, 2, PixelFormat::GRAY2).unwrap();
        raster.set(Vec2::new(0, 0), 0b11);
        raster.set(Vec2::new(3, 0), 0b01);
        raster.set(Vec2::new(4, 0), 0b10);
        raster.set(Vec2::new(0, 1), 0b10);

        // Leftmost pixel occupies the high-order bits of its byte.
        assert_eq!(raster.as_bytes()[0], 0b11000001);
        assert_eq!(raster.as_bytes()[1], 0b10000000);
        assert_eq!(raster.as_bytes()[2], 0b10000000);

        assert_eq!(raster.get(Vec2::new(0, 0)), 0b11);
        assert_eq!(raster.get(Vec2::new(1, 0)), 0);
        assert_eq!(raster.get(Vec2::new(3, 0)), 0b01);
        assert_eq!(raster.get(Vec2::new(4, 0)), 0b10);
    }

    #[test]
    fn sub_byte_set_preserves_neighbors() {
        let mut raster = Raster::from_vec(8, 1, PixelFormat::GRAY1, vec![0b1111_1111]).unwrap();
        raster.set(Vec2::new(2, 0), 0);
        assert_eq!(raster.as_bytes()[0], 0b1101_1111);
    }

    #[test]
    fn multi_byte_pixels_are_big_endian() {
        let mut raster = Raster::new(2, 1, PixelFormat::RGB16).unwrap();
        raster.set(Vec2::new(0, 0), 0x0123_4567_89AB);
        assert_eq!(
            &raster.as_bytes()[..6],
            &[0x01, 0x23, 0x45, 0x67, 0x89, 0xAB]
        );
        assert_eq!(raster.get(Vec2::new(0, 0)), 0x0123_4567_89AB);
        assert_eq!(raster.get(Vec2::new(1, 0)), 0);
    }

    #[test]
    fn set_masks_to_format_width() {
        let mut raster = Raster::new(1, 1, PixelFormat::GRAY8).unwrap();
        raster.set(Vec2::new(0, 0), 0x1_FF);
        assert_eq!(raster.get(Vec2::new(0, 0)), 0xFF);
    }

    #[test]
    fn round_trips_through_raw_bytes() {
        let mut raster = Raster::new(3, 2, PixelFormat::RGBA8).unwrap();
        raster.set(Vec2::new(2, 1), 0xDEADBEEF);
        let (width, height, format) = (3, 2, PixelFormat::RGBA8);
        let bytes = raster.into_vec();
        let restored = Raster::from_vec(width, height, format, bytes).unwrap();
        assert_eq!(restored.get(Vec2::new(2, 1)), 0xDEADBEEF);
        assert_eq!(restored.get(Vec2::new(0, 0)), 0);
    }

    #[test]
    fn full_width_rgba16_pixels() {
        let mut raster = Raster::new(1, 1, PixelFormat::RGBA16).unwrap();
        raster.set(Vec2::new(0, 0), u64::MAX);
        assert_eq!(raster.get(Vec2::new(0, 0)), u64::MAX);
    }
}
