//! Packed pixel values and channel naming.

/// A packed whole-pixel value.
///
/// Channels are packed most-significant-first: channel 0 occupies the
/// highest-order `bit_depth` bits in use. The widest supported pixel
/// (4 channels × 16 bits) fills all 64 bits.
pub type Value = u64;

/// 0-based channel index; channel 0 is the most significant.
pub type ChannelIndex = usize;

/// Channel names for grayscale and grayscale+alpha surfaces.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum GrayChannel {
    Luma = 0,
    Alpha = 1,
}

impl GrayChannel {
    /// Channel index for [`Surface::set_channel`](crate::Surface::set_channel).
    #[inline]
    pub const fn index(self) -> ChannelIndex {
        self as ChannelIndex
    }
}

/// Channel names for truecolor surfaces.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum RgbChannel {
    Red = 0,
    Green = 1,
    Blue = 2,
    Alpha = 3,
}

impl RgbChannel {
    /// Channel index for [`Surface::set_channel`](crate::Surface::set_channel).
    #[inline]
    pub const fn index(self) -> ChannelIndex {
        self as ChannelIndex
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn channel_indices() {
        assert_eq!(GrayChannel::Luma.index(), 0);
        assert_eq!(GrayChannel::Alpha.index(), 1);
        assert_eq!(RgbChannel::Red.index(), 0);
        assert_eq!(RgbChannel::Alpha.index(), 3);
    }
}
