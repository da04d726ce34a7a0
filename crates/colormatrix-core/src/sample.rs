//! The [`Sample`] trait closing over the supported sample types.
//!
//! The per-pixel kernel is generic over the sample representation; this
//! trait is implemented for exactly the three types the filter declares to
//! the host: `u8`, `u16` and `f32`.
//!
//! # Conversion Convention
//!
//! Integer samples are normalized to `[0.0, 1.0]` by [`to_f32`](Sample::to_f32)
//! and clamped/rounded back by [`from_f32`](Sample::from_f32). Float samples
//! pass through untouched. The matrix transform is linear, so normalizing
//! is equivalent to operating on raw code values, up to the explicit clamp
//! on the write side.

use crate::format::BitDepth;
use crate::image::PixelData;

/// A pixel sample type the filter can process.
///
/// Closed set: `u8`, `u16`, `f32`. Also carries the typed view into the
/// runtime-tagged [`PixelData`] store, so generic code can recover a
/// `&[T]` from a buffer whose depth is only known at runtime.
pub trait Sample: Copy + Default + Send + Sync + PartialOrd + 'static {
    /// Bit depth tag matching this type.
    const DEPTH: BitDepth;

    /// Per-channel maximum of the natural range (255, 65535, 1.0).
    const MAX: f32;

    /// Convert to f32, normalized to [0.0, 1.0] for integer types.
    fn to_f32(self) -> f32;

    /// Convert from f32.
    ///
    /// Integer types clamp to their representable range and round;
    /// f32 stores the value directly.
    fn from_f32(v: f32) -> Self;

    /// Zero sample.
    fn zero() -> Self;

    /// Typed view into a tagged sample store.
    ///
    /// `None` when the store holds a different depth.
    fn samples(data: &PixelData) -> Option<&[Self]>;

    /// Mutable typed view into a tagged sample store.
    fn samples_mut(data: &mut PixelData) -> Option<&mut [Self]>;

    /// Wraps an owned sample vector in the matching tagged store.
    fn into_data(samples: Vec<Self>) -> PixelData;
}

impl Sample for u8 {
    const DEPTH: BitDepth = BitDepth::U8;
    const MAX: f32 = 255.0;

    #[inline]
    fn to_f32(self) -> f32 {
        self as f32 / 255.0
    }

    #[inline]
    fn from_f32(v: f32) -> Self {
        (v.clamp(0.0, 1.0) * 255.0).round() as u8
    }

    #[inline]
    fn zero() -> Self {
        0
    }

    #[inline]
    fn samples(data: &PixelData) -> Option<&[Self]> {
        match data {
            PixelData::U8(v) => Some(v),
            _ => None,
        }
    }

    #[inline]
    fn samples_mut(data: &mut PixelData) -> Option<&mut [Self]> {
        match data {
            PixelData::U8(v) => Some(v),
            _ => None,
        }
    }

    #[inline]
    fn into_data(samples: Vec<Self>) -> PixelData {
        PixelData::U8(samples)
    }
}

impl Sample for u16 {
    const DEPTH: BitDepth = BitDepth::U16;
    const MAX: f32 = 65535.0;

    #[inline]
    fn to_f32(self) -> f32 {
        self as f32 / 65535.0
    }

    #[inline]
    fn from_f32(v: f32) -> Self {
        (v.clamp(0.0, 1.0) * 65535.0).round() as u16
    }

    #[inline]
    fn zero() -> Self {
        0
    }

    #[inline]
    fn samples(data: &PixelData) -> Option<&[Self]> {
        match data {
            PixelData::U16(v) => Some(v),
            _ => None,
        }
    }

    #[inline]
    fn samples_mut(data: &mut PixelData) -> Option<&mut [Self]> {
        match data {
            PixelData::U16(v) => Some(v),
            _ => None,
        }
    }

    #[inline]
    fn into_data(samples: Vec<Self>) -> PixelData {
        PixelData::U16(samples)
    }
}

impl Sample for f32 {
    const DEPTH: BitDepth = BitDepth::F32;
    const MAX: f32 = 1.0;

    #[inline]
    fn to_f32(self) -> f32 {
        self
    }

    #[inline]
    fn from_f32(v: f32) -> Self {
        v
    }

    #[inline]
    fn zero() -> Self {
        0.0
    }

    #[inline]
    fn samples(data: &PixelData) -> Option<&[Self]> {
        match data {
            PixelData::F32(v) => Some(v),
            _ => None,
        }
    }

    #[inline]
    fn samples_mut(data: &mut PixelData) -> Option<&mut [Self]> {
        match data {
            PixelData::F32(v) => Some(v),
            _ => None,
        }
    }

    #[inline]
    fn into_data(samples: Vec<Self>) -> PixelData {
        PixelData::F32(samples)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_u8_roundtrip() {
        assert_eq!(u8::from_f32(0u8.to_f32()), 0);
        assert_eq!(u8::from_f32(255u8.to_f32()), 255);
        assert_eq!(u8::from_f32(128u8.to_f32()), 128);
    }

    #[test]
    fn test_u8_clamps() {
        assert_eq!(u8::from_f32(1.5), 255);
        assert_eq!(u8::from_f32(-0.5), 0);
    }

    #[test]
    fn test_u16_normalization() {
        assert!((65535u16.to_f32() - 1.0).abs() < 1e-6);
        assert_eq!(u16::from_f32(0.5), 32768);
    }

    #[test]
    fn test_f32_passthrough() {
        assert_eq!(f32::from_f32(-2.5), -2.5);
        assert_eq!(3.25f32.to_f32(), 3.25);
    }

    #[test]
    fn test_typed_view() {
        let data = u8::into_data(vec![1, 2, 3]);
        assert_eq!(u8::samples(&data), Some([1u8, 2, 3].as_slice()));
        assert!(u16::samples(&data).is_none());
        assert!(f32::samples(&data).is_none());
    }
}
