//! The pixel-surface capability trait.

use crate::channel::{ChannelIndex, Value};
use crate::format::PixelFormat;
use crate::vector::Vec2;

/// A fixed-size grid of packed pixels.
///
/// This is the contract between raster codecs and the drawing engine: a
/// codec implements the five required methods on its decoded representation
/// and everything else — coordinate mapping, clamping, masked channel
/// mutation — comes for free. [`Drawer`](crate::Drawer) operates purely
/// through this trait and never interprets container headers, compression
/// or color-space metadata.
///
/// # Contract
///
/// - `width()` and `height()` are positive and constant for the object's
///   lifetime.
/// - `get`/`set` expect in-bounds positions; callers guarantee bounds via
///   [`bind`](Surface::bind) or explicit checks before calling.
/// - `set` masks the incoming value to the format's valid bit width; the
///   caller is not required to pre-mask.
pub trait Surface {
    /// Surface width in pixels.
    fn width(&self) -> u32;

    /// Surface height in pixels.
    fn height(&self) -> u32;

    /// Channel count and per-channel bit depth of every pixel.
    fn format(&self) -> PixelFormat;

    /// Packed pixel value at an in-bounds position.
    fn get(&self, pos: Vec2) -> Value;

    /// Overwrite the packed pixel value at an in-bounds position.
    ///
    /// The value is masked to the format's bit width by the implementation.
    fn set(&mut self, pos: Vec2, value: Value);

    /// Number of channels per pixel.
    #[inline]
    fn channels(&self) -> u8 {
        self.format().channels()
    }

    /// Bits per channel.
    #[inline]
    fn bit_depth(&self) -> u8 {
        self.format().bit_depth()
    }

    /// Number of distinct values a whole pixel may take.
    #[inline]
    fn color_depth(&self) -> u128 {
        self.format().color_depth()
    }

    /// Row-major linear index of a position.
    ///
    /// Pure arithmetic — the position is not validated. Inverse of
    /// [`coordinates`](Surface::coordinates) for all in-bounds indices.
    #[inline]
    fn index(&self, pos: Vec2) -> usize {
        pos.y as usize * self.width() as usize + pos.x as usize
    }

    /// Position of a linear index in `[0, width * height)`.
    #[inline]
    fn coordinates(&self, i: usize) -> Vec2 {
        let width = self.width() as usize;
        Vec2::new((i % width) as i64, (i / width) as i64)
    }

    /// Clamp an x coordinate into `[0, width - 1]`.
    #[inline]
    fn bind_x(&self, x: i64) -> i64 {
        x.clamp(0, self.width() as i64 - 1)
    }

    /// Clamp a y coordinate into `[0, height - 1]`.
    #[inline]
    fn bind_y(&self, y: i64) -> i64 {
        y.clamp(0, self.height() as i64 - 1)
    }

    /// Clamp both components of a position onto the surface.
    #[inline]
    fn bind(&self, pos: Vec2) -> Vec2 {
        Vec2::new(self.bind_x(pos.x), self.bind_y(pos.y))
    }

    /// Whether a position lies on the surface.
    #[inline]
    fn contains(&self, pos: Vec2) -> bool {
        0 <= pos.x && pos.x < self.width() as i64 && 0 <= pos.y && pos.y < self.height() as i64
    }

    /// Overwrite a single channel, preserving every other channel bit-exactly.
    ///
    /// Read-modify-write: the channel's bits are cleared in the packed value
    /// and replaced with the low `bit_depth` bits of `value`. Channel 0 is
    /// the most significant. An out-of-range channel index is a no-op.
    fn set_channel(&mut self, pos: Vec2, channel: ChannelIndex, value: Value) {
        let format = self.format();
        if channel >= format.channels() as usize {
            return;
        }

        let mask = format.channel_mask();
        let offset = (format.channels() as usize - 1 - channel) * format.bit_depth() as usize;
        let old = self.get(pos);
        self.set(pos, (old & !(mask << offset)) | ((value & mask) << offset));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::raster::Raster;

    #[test]
    fn index_and_coordinates_are_inverses() {
        let raster = Raster::new(7, 5, PixelFormat::GRAY8).unwrap();
        for i in 0..(7 * 5) {
            let pos = raster.coordinates(i);
            assert_eq!(raster.index(pos), i);
            assert!(raster.contains(pos));
        }
    }

    #[test]
    fn binding_clamps_into_range() {
        let raster = Raster::new(4, 3, PixelFormat::GRAY8).unwrap();
        assert_eq!(raster.bind_x(-17), 0);
        assert_eq!(raster.bind_x(2), 2);
        assert_eq!(raster.bind_x(100), 3);
        assert_eq!(raster.bind_y(-1), 0);
        assert_eq!(raster.bind_y(100), 2);
        assert_eq!(raster.bind(Vec2::new(-5, 9)), Vec2::new(0, 2));
    }

    #[test]
    fn set_channel_preserves_other_channels() {
        let mut raster = Raster::new(1, 1, PixelFormat::RGBA8).unwrap();
        let pos = Vec2::new(0, 0);
        raster.set(pos, 0x11223344);
        raster.set_channel(pos, 2, 0xAB);
        assert_eq!(raster.get(pos), 0x1122AB44);

        // Value wider than the channel is masked to the low bits.
        raster.set_channel(pos, 0, 0x1FF);
        assert_eq!(raster.get(pos), 0xFF22AB44);
    }

    #[test]
    fn set_channel_out_of_range_is_noop() {
        let mut raster = Raster::new(1, 1, PixelFormat::GRAY_ALPHA8).unwrap();
        let pos = Vec2::new(0, 0);
        raster.set(pos, 0xBEEF);
        raster.set_channel(pos, 2, 0x12);
        assert_eq!(raster.get(pos), 0xBEEF);
    }

    #[test]
    fn derived_format_accessors() {
        let raster = Raster::new(2, 2, PixelFormat::GRAY_ALPHA8).unwrap();
        assert_eq!(raster.channels(), 2);
        assert_eq!(raster.bit_depth(), 8);
        assert_eq!(raster.color_depth(), 1 << 16);
    }
}
