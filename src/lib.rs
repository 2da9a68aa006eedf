//! Pixel-addressable packed raster surfaces and exact-integer drawing.
//!
//! This crate defines the pixel-surface contract that raster codecs expose
//! and the drawing engine that operates through it:
//!
//! - [`Surface`] — the pixel-surface capability trait (dimensions, packed
//!   whole-pixel get/set, masked single-channel get/set, coordinate mapping)
//! - [`Raster`] — an owned packed pixel store implementing [`Surface`] for
//!   arbitrary channel counts (1–4) and per-channel bit depths (1–16)
//! - [`Drawer`] — points, clamped fills, directed thick lines, stroked and
//!   filled rectangles and circles, grid slicing, whole-surface channel
//!   overwrite
//! - [`PixelFormat`] / [`Vec2`] / [`Value`] — the supporting value types
//!
//! Codec crates implement [`Surface`] on their decoded representation and
//! hand it to a [`Drawer`]; typed `imgref` buffers of `rgb` pixels get the
//! implementation for free via [`PackedPixel`].
//!
//! All drawing is exact-integer geometry against a discrete grid: no
//! anti-aliasing, no sub-pixel precision, no color-space conversion.
//! Invalid or degenerate geometry is silently absorbed — the drawing
//! routines never fail, they no-op.

#![no_std]
#![forbid(unsafe_code)]

extern crate alloc;

mod channel;
mod draw;
mod format;
mod raster;
mod surface;
mod typed;
mod vector;

pub use channel::{ChannelIndex, GrayChannel, RgbChannel, Value};
pub use draw::Drawer;
pub use format::{FormatError, PixelFormat};
pub use raster::{Raster, RasterError};
pub use surface::Surface;
pub use typed::PackedPixel;
pub use vector::Vec2;

// Re-exports for surface implementors and users.
pub use imgref::{Img, ImgRef, ImgRefMut, ImgVec};
pub use rgb;
pub use rgb::alt::GrayAlpha;
pub use rgb::{Gray, Rgb, Rgba};
