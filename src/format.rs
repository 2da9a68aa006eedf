//! Pixel format descriptors.

use core::fmt;

use crate::channel::Value;

/// Describes how a packed pixel is laid out: how many channels it has and
/// how many bits each channel occupies.
///
/// Valid channel counts are 1–4. Valid bit depths are 1, 2, 4, 8 and 16;
/// sub-byte depths (below 8) are only allowed with a single channel, so a
/// pixel never straddles a byte boundary.
///
/// # Example
///
/// ```
/// use rasterink::PixelFormat;
///
/// let format = PixelFormat::new(3, 8)?;
/// assert_eq!(format, PixelFormat::RGB8);
/// assert_eq!(format.bits_per_pixel(), 24);
/// assert_eq!(format.bytes_per_pixel(), 3);
/// # Ok::<(), rasterink::FormatError>(())
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PixelFormat {
    channels: u8,
    bit_depth: u8,
}

impl PixelFormat {
    /// 1-bit grayscale (8 pixels per byte).
    pub const GRAY1: PixelFormat = PixelFormat { channels: 1, bit_depth: 1 };
    /// 2-bit grayscale (4 pixels per byte).
    pub const GRAY2: PixelFormat = PixelFormat { channels: 1, bit_depth: 2 };
    /// 4-bit grayscale (2 pixels per byte).
    pub const GRAY4: PixelFormat = PixelFormat { channels: 1, bit_depth: 4 };
    /// 8-bit grayscale.
    pub const GRAY8: PixelFormat = PixelFormat { channels: 1, bit_depth: 8 };
    /// 16-bit grayscale.
    pub const GRAY16: PixelFormat = PixelFormat { channels: 1, bit_depth: 16 };
    /// 8-bit grayscale + alpha.
    pub const GRAY_ALPHA8: PixelFormat = PixelFormat { channels: 2, bit_depth: 8 };
    /// 8-bit red, green, blue.
    pub const RGB8: PixelFormat = PixelFormat { channels: 3, bit_depth: 8 };
    /// 8-bit red, green, blue, alpha.
    pub const RGBA8: PixelFormat = PixelFormat { channels: 4, bit_depth: 8 };
    /// 16-bit red, green, blue.
    pub const RGB16: PixelFormat = PixelFormat { channels: 3, bit_depth: 16 };
    /// 16-bit red, green, blue, alpha.
    pub const RGBA16: PixelFormat = PixelFormat { channels: 4, bit_depth: 16 };

    /// Create a format from a channel count and per-channel bit depth.
    pub const fn new(channels: u8, bit_depth: u8) -> Result<Self, FormatError> {
        if channels == 0 || channels > 4 {
            return Err(FormatError::ChannelCount { actual: channels });
        }
        if !matches!(bit_depth, 1 | 2 | 4 | 8 | 16) {
            return Err(FormatError::BitDepth { actual: bit_depth });
        }
        if bit_depth < 8 && channels != 1 {
            return Err(FormatError::SubBytePacking {
                channels,
                bit_depth,
            });
        }
        Ok(PixelFormat {
            channels,
            bit_depth,
        })
    }

    /// Number of channels per pixel (1–4).
    #[inline]
    pub const fn channels(self) -> u8 {
        self.channels
    }

    /// Bits per channel.
    #[inline]
    pub const fn bit_depth(self) -> u8 {
        self.bit_depth
    }

    /// Bits per whole pixel (`channels * bit_depth`).
    #[inline]
    pub const fn bits_per_pixel(self) -> u32 {
        self.channels as u32 * self.bit_depth as u32
    }

    /// Bytes per whole pixel, rounded up. 1 for sub-byte formats.
    #[inline]
    pub const fn bytes_per_pixel(self) -> usize {
        (self.bits_per_pixel() as usize + 7) / 8
    }

    /// How many pixels share one byte. 1 for byte-and-wider formats.
    #[inline]
    pub const fn pixels_per_byte(self) -> usize {
        if self.bit_depth < 8 {
            8 / self.bits_per_pixel() as usize
        } else {
            1
        }
    }

    /// Mask covering every bit of a whole packed pixel.
    #[inline]
    pub const fn pixel_mask(self) -> Value {
        Value::MAX >> (Value::BITS - self.bits_per_pixel())
    }

    /// Mask covering one channel's bits (right-aligned).
    #[inline]
    pub const fn channel_mask(self) -> Value {
        (1 << self.bit_depth) - 1
    }

    /// Number of distinct values a whole pixel may take,
    /// i.e. `2^(channels * bit_depth)`.
    #[inline]
    pub const fn color_depth(self) -> u128 {
        1u128 << self.bits_per_pixel()
    }
}

/// An invalid channel count / bit depth combination.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormatError {
    /// Channel count outside 1–4.
    ChannelCount {
        /// Requested channel count.
        actual: u8,
    },
    /// Bit depth not one of 1, 2, 4, 8, 16.
    BitDepth {
        /// Requested bit depth.
        actual: u8,
    },
    /// Sub-byte bit depth combined with more than one channel.
    SubBytePacking {
        /// Requested channel count.
        channels: u8,
        /// Requested bit depth.
        bit_depth: u8,
    },
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ChannelCount { actual } => {
                write!(f, "channel count {actual} outside supported range 1-4")
            }
            Self::BitDepth { actual } => {
                write!(f, "bit depth {actual} not one of 1, 2, 4, 8, 16")
            }
            Self::SubBytePacking {
                channels,
                bit_depth,
            } => write!(
                f,
                "sub-byte bit depth {bit_depth} requires a single channel, got {channels}"
            ),
        }
    }
}

impl core::error::Error for FormatError {}
