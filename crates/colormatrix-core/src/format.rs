//! Pixel format descriptors: bit depth, channel layout, and their pairing.
//!
//! The host negotiates images in one of three sample representations and
//! one of two component layouts. [`ImageFormat`] is the (depth, layout)
//! pair attached to every [`crate::ImageBuf`]; the filter compares these
//! to reject mismatched clips and to select a kernel instantiation.
//!
//! # Example
//!
//! ```rust
//! use colormatrix_core::{BitDepth, ChannelLayout, ImageFormat};
//!
//! let fmt = ImageFormat::new(BitDepth::U8, ChannelLayout::Rgba);
//! assert_eq!(fmt.layout.channels(), 4);
//! assert_eq!(fmt.to_string(), "u8 RGBA");
//! ```

use std::fmt;

/// Numeric encoding of one pixel component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BitDepth {
    /// 8-bit unsigned integer, 0-255.
    U8,
    /// 16-bit unsigned integer, 0-65535.
    U16,
    /// 32-bit float, nominally 0.0-1.0.
    F32,
}

impl BitDepth {
    /// Number of bits per component.
    #[inline]
    pub const fn bits(self) -> u32 {
        match self {
            Self::U8 => 8,
            Self::U16 => 16,
            Self::F32 => 32,
        }
    }

    /// Maximum value of the representation's natural range.
    ///
    /// 255 for u8, 65535 for u16, 1.0 for float (floats are not clamped
    /// to this range in storage, it is only the nominal white point).
    #[inline]
    pub const fn max_value(self) -> f32 {
        match self {
            Self::U8 => 255.0,
            Self::U16 => 65535.0,
            Self::F32 => 1.0,
        }
    }

    /// Whether this is a floating-point representation.
    #[inline]
    pub const fn is_float(self) -> bool {
        matches!(self, Self::F32)
    }

    /// Short lowercase name, e.g. `"u8"`.
    #[inline]
    pub const fn name(self) -> &'static str {
        match self {
            Self::U8 => "u8",
            Self::U16 => "u16",
            Self::F32 => "f32",
        }
    }
}

impl fmt::Display for BitDepth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Component layout of a pixel: RGB (3 samples) or RGBA (4 samples).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChannelLayout {
    /// Red, green, blue.
    Rgb,
    /// Red, green, blue, alpha.
    Rgba,
}

impl ChannelLayout {
    /// Number of samples per pixel.
    #[inline]
    pub const fn channels(self) -> usize {
        match self {
            Self::Rgb => 3,
            Self::Rgba => 4,
        }
    }

    /// Whether the layout carries an alpha channel.
    #[inline]
    pub const fn has_alpha(self) -> bool {
        matches!(self, Self::Rgba)
    }

    /// Layout name, e.g. `"RGBA"`.
    #[inline]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Rgb => "RGB",
            Self::Rgba => "RGBA",
        }
    }
}

impl fmt::Display for ChannelLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Bit depth and channel layout of an image, as negotiated with the host.
///
/// Two clips are compatible for a render call when their formats are equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ImageFormat {
    /// Sample representation.
    pub depth: BitDepth,
    /// Component layout.
    pub layout: ChannelLayout,
}

impl ImageFormat {
    /// Creates a format from depth and layout.
    #[inline]
    pub const fn new(depth: BitDepth, layout: ChannelLayout) -> Self {
        Self { depth, layout }
    }

    /// Number of samples per pixel.
    #[inline]
    pub const fn channels(self) -> usize {
        self.layout.channels()
    }
}

impl fmt::Display for ImageFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.depth, self.layout)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bit_depth() {
        assert_eq!(BitDepth::U8.bits(), 8);
        assert_eq!(BitDepth::U16.max_value(), 65535.0);
        assert!(BitDepth::F32.is_float());
        assert!(!BitDepth::U16.is_float());
    }

    #[test]
    fn test_channel_layout() {
        assert_eq!(ChannelLayout::Rgb.channels(), 3);
        assert_eq!(ChannelLayout::Rgba.channels(), 4);
        assert!(ChannelLayout::Rgba.has_alpha());
        assert!(!ChannelLayout::Rgb.has_alpha());
    }

    #[test]
    fn test_format_display() {
        let fmt = ImageFormat::new(BitDepth::F32, ChannelLayout::Rgb);
        assert_eq!(fmt.to_string(), "f32 RGB");
    }

    #[test]
    fn test_format_equality() {
        let a = ImageFormat::new(BitDepth::U8, ChannelLayout::Rgba);
        let b = ImageFormat::new(BitDepth::U8, ChannelLayout::Rgba);
        let c = ImageFormat::new(BitDepth::U16, ChannelLayout::Rgba);
        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
