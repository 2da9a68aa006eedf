//! [`Surface`] over typed `imgref` pixel buffers.
//!
//! Codecs that decode into `ImgVec<Rgb<u8>>` and friends can hand those
//! buffers straight to a [`Drawer`](crate::Drawer) — no packed copy needed.

use alloc::vec::Vec;

use imgref::Img;
use rgb::alt::GrayAlpha;
use rgb::{Gray, Rgb, Rgba};

use crate::channel::Value;
use crate::format::PixelFormat;
use crate::surface::Surface;
use crate::vector::Vec2;

/// A typed pixel that converts to and from a packed [`Value`].
///
/// Channel 0 is packed most-significant-first, matching the layout
/// [`Surface::set_channel`] assumes. Implementing this trait gives a
/// buffer of the pixel type a free [`Surface`] implementation.
pub trait PackedPixel: Copy {
    /// Channel count and bit depth of this pixel type.
    const FORMAT: PixelFormat;

    /// Pack the channels into a single value, channel 0 most significant.
    fn pack(self) -> Value;

    /// Unpack a value produced by [`pack`](PackedPixel::pack).
    ///
    /// Only the low `bits_per_pixel` bits are interpreted.
    fn unpack(value: Value) -> Self;
}

impl PackedPixel for Gray<u8> {
    const FORMAT: PixelFormat = PixelFormat::GRAY8;

    fn pack(self) -> Value {
        self.0 as Value
    }

    fn unpack(value: Value) -> Self {
        Gray(value as u8)
    }
}

impl PackedPixel for Gray<u16> {
    const FORMAT: PixelFormat = PixelFormat::GRAY16;

    fn pack(self) -> Value {
        self.0 as Value
    }

    fn unpack(value: Value) -> Self {
        Gray(value as u16)
    }
}

impl PackedPixel for GrayAlpha<u8> {
    const FORMAT: PixelFormat = PixelFormat::GRAY_ALPHA8;

    fn pack(self) -> Value {
        (self.0 as Value) << 8 | self.1 as Value
    }

    fn unpack(value: Value) -> Self {
        GrayAlpha((value >> 8) as u8, value as u8)
    }
}

impl PackedPixel for Rgb<u8> {
    const FORMAT: PixelFormat = PixelFormat::RGB8;

    fn pack(self) -> Value {
        (self.r as Value) << 16 | (self.g as Value) << 8 | self.b as Value
    }

    fn unpack(value: Value) -> Self {
        Rgb {
            r: (value >> 16) as u8,
            g: (value >> 8) as u8,
            b: value as u8,
        }
    }
}

impl PackedPixel for Rgba<u8> {
    const FORMAT: PixelFormat = PixelFormat::RGBA8;

    fn pack(self) -> Value {
        (self.r as Value) << 24 | (self.g as Value) << 16 | (self.b as Value) << 8 | self.a as Value
    }

    fn unpack(value: Value) -> Self {
        Rgba {
            r: (value >> 24) as u8,
            g: (value >> 16) as u8,
            b: (value >> 8) as u8,
            a: value as u8,
        }
    }
}

impl PackedPixel for Rgb<u16> {
    const FORMAT: PixelFormat = PixelFormat::RGB16;

    fn pack(self) -> Value {
        (self.r as Value) << 32 | (self.g as Value) << 16 | self.b as Value
    }

    fn unpack(value: Value) -> Self {
        Rgb {
            r: (value >> 32) as u16,
            g: (value >> 16) as u16,
            b: value as u16,
        }
    }
}

impl PackedPixel for Rgba<u16> {
    const FORMAT: PixelFormat = PixelFormat::RGBA16;

    fn pack(self) -> Value {
        (self.r as Value) << 48 | (self.g as Value) << 32 | (self.b as Value) << 16 | self.a as Value
    }

    fn unpack(value: Value) -> Self {
        Rgba {
            r: (value >> 48) as u16,
            g: (value >> 32) as u16,
            b: (value >> 16) as u16,
            a: value as u16,
        }
    }
}

impl<T: PackedPixel> Surface for Img<Vec<T>> {
    fn width(&self) -> u32 {
        Img::width(self) as u32
    }

    fn height(&self) -> u32 {
        Img::height(self) as u32
    }

    fn format(&self) -> PixelFormat {
        T::FORMAT
    }

    fn get(&self, pos: Vec2) -> Value {
        let i = pos.y as usize * self.stride() + pos.x as usize;
        self.buf()[i].pack()
    }

    fn set(&mut self, pos: Vec2, value: Value) {
        let i = pos.y as usize * self.stride() + pos.x as usize;
        self.buf_mut()[i] = T::unpack(value & T::FORMAT.pixel_mask());
    }
}

impl<T: PackedPixel> Surface for Img<&mut [T]> {
    fn width(&self) -> u32 {
        Img::width(self) as u32
    }

    fn height(&self) -> u32 {
        Img::height(self) as u32
    }

    fn format(&self) -> PixelFormat {
        T::FORMAT
    }

    fn get(&self, pos: Vec2) -> Value {
        let i = pos.y as usize * self.stride() + pos.x as usize;
        self.buf()[i].pack()
    }

    fn set(&mut self, pos: Vec2, value: Value) {
        let i = pos.y as usize * self.stride() + pos.x as usize;
        self.buf_mut()[i] = T::unpack(value & T::FORMAT.pixel_mask());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;
    use imgref::ImgVec;

    #[test]
    fn pack_and_unpack_round_trip() {
        let px = Rgba {
            r: 0x12u8,
            g: 0x34,
            b: 0x56,
            a: 0x78,
        };
        assert_eq!(px.pack(), 0x12345678);
        let back = <Rgba<u8>>::unpack(0x12345678);
        assert_eq!((back.r, back.g, back.b, back.a), (0x12, 0x34, 0x56, 0x78));

        let px = GrayAlpha(0xABu8, 0xCD);
        assert_eq!(px.pack(), 0xABCD);

        let px = Rgb {
            r: 0x0102u16,
            g: 0x0304,
            b: 0x0506,
        };
        assert_eq!(px.pack(), 0x0102_0304_0506);
    }

    #[test]
    fn typed_buffer_acts_as_surface() {
        let mut img = ImgVec::new(vec![Rgb { r: 0u8, g: 0, b: 0 }; 12], 4, 3);
        assert_eq!(Surface::width(&img), 4);
        assert_eq!(Surface::height(&img), 3);
        assert_eq!(img.format(), PixelFormat::RGB8);

        img.set(Vec2::new(2, 1), 0x0A0B0C);
        assert_eq!(img.get(Vec2::new(2, 1)), 0x0A0B0C);
        let px = img.buf()[1 * 4 + 2];
        assert_eq!((px.r, px.g, px.b), (0x0A, 0x0B, 0x0C));
    }

    #[test]
    fn set_channel_on_typed_buffer_preserves_others() {
        let mut img = ImgVec::new(
            vec![
                Rgba {
                    r: 1u8,
                    g: 2,
                    b: 3,
                    a: 4
                };
                4
            ],
            2,
            2,
        );
        img.set_channel(Vec2::new(1, 1), 2, 0xEE);
        let px = img.buf()[3];
        assert_eq!((px.r, px.g, px.b, px.a), (1, 2, 0xEE, 4));
    }

    #[test]
    fn drawer_operates_on_typed_buffer() {
        use crate::draw::Drawer;

        let mut img = ImgVec::new(vec![Rgb { r: 0u8, g: 0, b: 0 }; 16], 4, 4);
        let mut drawer = Drawer::new(&mut img);
        drawer.rectangle(Vec2::new(0, 0), Vec2::new(3, 3), 1, 0xFF0000, None);
        drawer.color_filter(2, 0x40);

        let corner = img.buf()[0];
        assert_eq!((corner.r, corner.g, corner.b), (0xFF, 0, 0x40));
        let center = img.buf()[1 * 4 + 1];
        assert_eq!((center.r, center.g, center.b), (0, 0, 0x40));
    }

    #[test]
    fn borrowed_slice_buffer_acts_as_surface() {
        let mut pixels = vec![Gray(0u8); 9];
        let mut img = Img::new(pixels.as_mut_slice(), 3, 3);
        img.set(Vec2::new(0, 2), 0x7F);
        assert_eq!(img.get(Vec2::new(0, 2)), 0x7F);
        drop(img);
        assert_eq!(pixels[6], Gray(0x7F));
    }
}
