//! Image buffer type for one render call.
//!
//! [`ImageBuf`] is the Rust-side stand-in for a host image handle: a 2D
//! pixel buffer with a fixed channel layout and a runtime-tagged sample
//! representation, addressable by absolute (x, y) within its bounds
//! window. Buffers are fetched (or allocated) per render call and
//! discarded afterward; nothing here caches across calls.
//!
//! # Memory Layout
//!
//! Samples are interleaved row-major, bottom row first, matching the
//! bounds window:
//!
//! ```text
//! [R G B (A)  R G B (A)  ...]  <- row y1
//! [R G B (A)  R G B (A)  ...]  <- row y1 + 1
//! ```
//!
//! # Usage
//!
//! ```rust
//! use colormatrix_core::{BitDepth, ChannelLayout, ImageBuf, Window};
//!
//! let mut img = ImageBuf::new(Window::from_size(4, 4), BitDepth::F32, ChannelLayout::Rgba);
//! img.set_pixel_f32(1, 2, [0.2, 0.4, 0.6, 1.0]);
//! assert_eq!(img.pixel_f32(1, 2), Some([0.2, 0.4, 0.6, 1.0]));
//! assert_eq!(img.pixel_f32(9, 9), None); // outside bounds
//! ```

use crate::error::{Error, Result};
use crate::format::{BitDepth, ChannelLayout, ImageFormat};
use crate::sample::Sample;
use crate::window::Window;

/// Runtime-tagged sample storage for one image.
///
/// The host only reveals an image's bit depth at render time, so the
/// store is a closed tagged variant rather than a generic parameter.
/// Use [`Sample::samples`] / [`Sample::samples_mut`] to recover a typed
/// slice once a kernel instantiation has been selected.
#[derive(Debug, Clone, PartialEq)]
pub enum PixelData {
    /// 8-bit unsigned samples.
    U8(Vec<u8>),
    /// 16-bit unsigned samples.
    U16(Vec<u16>),
    /// 32-bit float samples.
    F32(Vec<f32>),
}

impl PixelData {
    /// Bit depth of the stored samples.
    #[inline]
    pub fn depth(&self) -> BitDepth {
        match self {
            Self::U8(_) => BitDepth::U8,
            Self::U16(_) => BitDepth::U16,
            Self::F32(_) => BitDepth::F32,
        }
    }

    /// Total number of samples (pixels x channels).
    #[inline]
    pub fn len(&self) -> usize {
        match self {
            Self::U8(v) => v.len(),
            Self::U16(v) => v.len(),
            Self::F32(v) => v.len(),
        }
    }

    /// Returns `true` if the store holds no samples.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn zeroed(depth: BitDepth, len: usize) -> Self {
        match depth {
            BitDepth::U8 => Self::U8(vec![0; len]),
            BitDepth::U16 => Self::U16(vec![0; len]),
            BitDepth::F32 => Self::F32(vec![0.0; len]),
        }
    }

    #[inline]
    fn get_f32(&self, i: usize) -> f32 {
        match self {
            Self::U8(v) => v[i].to_f32(),
            Self::U16(v) => v[i].to_f32(),
            Self::F32(v) => v[i],
        }
    }

    #[inline]
    fn set_f32(&mut self, i: usize, value: f32) {
        match self {
            Self::U8(v) => v[i] = u8::from_f32(value),
            Self::U16(v) => v[i] = u16::from_f32(value),
            Self::F32(v) => v[i] = value,
        }
    }
}

/// A 2D pixel buffer with fixed layout and runtime-tagged samples.
///
/// The buffer covers exactly its bounds [`Window`]; pixel lookups outside
/// the bounds return `None`, which is how an absent source pixel is
/// represented to the kernel.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageBuf {
    bounds: Window,
    layout: ChannelLayout,
    data: PixelData,
}

impl ImageBuf {
    /// Creates a zero-filled buffer covering `bounds`.
    ///
    /// A degenerate window yields an empty buffer.
    pub fn new(bounds: Window, depth: BitDepth, layout: ChannelLayout) -> Self {
        let len = bounds.area() as usize * layout.channels();
        Self {
            bounds,
            layout,
            data: PixelData::zeroed(depth, len),
        }
    }

    /// Creates a buffer from existing samples.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidBounds`] when the window is empty;
    /// [`Error::SampleCountMismatch`] when the sample count doesn't equal
    /// `bounds.area() * layout.channels()`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use colormatrix_core::{ChannelLayout, ImageBuf, Window};
    ///
    /// let img = ImageBuf::from_samples(
    ///     Window::from_size(2, 1),
    ///     ChannelLayout::Rgb,
    ///     vec![255u8, 0, 0, 0, 255, 0],
    /// ).unwrap();
    /// assert_eq!(img.pixel_f32(1, 0), Some([0.0, 1.0, 0.0, 0.0]));
    /// ```
    pub fn from_samples<T: Sample>(
        bounds: Window,
        layout: ChannelLayout,
        samples: Vec<T>,
    ) -> Result<Self> {
        if bounds.is_empty() {
            return Err(Error::invalid_bounds(bounds, "window covers no pixels"));
        }
        let expected = bounds.area() as usize * layout.channels();
        if samples.len() != expected {
            return Err(Error::sample_count_mismatch(expected, samples.len()));
        }
        Ok(Self {
            bounds,
            layout,
            data: T::into_data(samples),
        })
    }

    /// The window this buffer covers, in absolute pixel coordinates.
    #[inline]
    pub fn bounds(&self) -> Window {
        self.bounds
    }

    /// Sample representation of the stored pixels.
    #[inline]
    pub fn depth(&self) -> BitDepth {
        self.data.depth()
    }

    /// Component layout of the stored pixels.
    #[inline]
    pub fn layout(&self) -> ChannelLayout {
        self.layout
    }

    /// Depth and layout as one descriptor.
    #[inline]
    pub fn format(&self) -> ImageFormat {
        ImageFormat::new(self.depth(), self.layout)
    }

    /// Samples per pixel.
    #[inline]
    pub fn channels(&self) -> usize {
        self.layout.channels()
    }

    /// Buffer width in pixels.
    #[inline]
    pub fn width(&self) -> i32 {
        self.bounds.width()
    }

    /// Buffer height in pixels.
    #[inline]
    pub fn height(&self) -> i32 {
        self.bounds.height()
    }

    /// Index of the first sample of pixel (x, y), or `None` outside bounds.
    ///
    /// This is the Rust rendition of the host's pixel-address lookup,
    /// which returns null for coordinates outside the image.
    #[inline]
    pub fn sample_index(&self, x: i32, y: i32) -> Option<usize> {
        if !self.bounds.contains(x, y) {
            return None;
        }
        let row = (y - self.bounds.y1) as usize;
        let col = (x - self.bounds.x1) as usize;
        Some((row * self.bounds.width() as usize + col) * self.channels())
    }

    /// Typed read access to the raw samples.
    ///
    /// # Errors
    ///
    /// [`Error::DepthMismatch`] when `T` doesn't match the stored depth.
    #[inline]
    pub fn samples<T: Sample>(&self) -> Result<&[T]> {
        T::samples(&self.data).ok_or(Error::depth_mismatch(self.data.depth(), T::DEPTH))
    }

    /// Typed mutable access to the raw samples.
    ///
    /// # Errors
    ///
    /// [`Error::DepthMismatch`] when `T` doesn't match the stored depth.
    #[inline]
    pub fn samples_mut<T: Sample>(&mut self) -> Result<&mut [T]> {
        let depth = self.data.depth();
        T::samples_mut(&mut self.data).ok_or(Error::depth_mismatch(depth, T::DEPTH))
    }

    /// Reads pixel (x, y) as (R, G, B, A) in f32.
    ///
    /// Integer depths are normalized to [0, 1]; a 3-channel layout reads
    /// alpha as 0. Returns `None` outside the bounds window.
    pub fn pixel_f32(&self, x: i32, y: i32) -> Option<[f32; 4]> {
        let idx = self.sample_index(x, y)?;
        let a = if self.layout.has_alpha() {
            self.data.get_f32(idx + 3)
        } else {
            0.0
        };
        Some([
            self.data.get_f32(idx),
            self.data.get_f32(idx + 1),
            self.data.get_f32(idx + 2),
            a,
        ])
    }

    /// Writes pixel (x, y) from (R, G, B, A) in f32.
    ///
    /// Integer depths clamp and round; a 3-channel layout ignores the
    /// alpha component. Writes outside the bounds window are ignored.
    pub fn set_pixel_f32(&mut self, x: i32, y: i32, pixel: [f32; 4]) {
        let Some(idx) = self.sample_index(x, y) else {
            return;
        };
        for (c, v) in pixel.iter().enumerate().take(self.channels()) {
            self.data.set_f32(idx + c, *v);
        }
    }

    /// Fills every sample with zero.
    pub fn clear(&mut self) {
        match &mut self.data {
            PixelData::U8(v) => v.fill(0),
            PixelData::U16(v) => v.fill(0),
            PixelData::F32(v) => v.fill(0.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_zero_filled() {
        let img = ImageBuf::new(Window::from_size(4, 3), BitDepth::U16, ChannelLayout::Rgba);
        assert_eq!(img.width(), 4);
        assert_eq!(img.height(), 3);
        assert_eq!(img.channels(), 4);
        assert_eq!(img.pixel_f32(2, 1), Some([0.0, 0.0, 0.0, 0.0]));
    }

    #[test]
    fn test_from_samples_validates_count() {
        let result = ImageBuf::from_samples(
            Window::from_size(2, 2),
            ChannelLayout::Rgb,
            vec![0u8; 11], // should be 12
        );
        assert!(matches!(
            result,
            Err(Error::SampleCountMismatch {
                expected: 12,
                got: 11
            })
        ));
    }

    #[test]
    fn test_from_samples_rejects_empty_window() {
        let result = ImageBuf::from_samples(
            Window::new(5, 5, 5, 5),
            ChannelLayout::Rgb,
            Vec::<f32>::new(),
        );
        assert!(matches!(result, Err(Error::InvalidBounds { .. })));
    }

    #[test]
    fn test_offset_bounds_addressing() {
        // Bounds window that doesn't start at the origin
        let bounds = Window::new(10, 20, 12, 22);
        let mut img = ImageBuf::new(bounds, BitDepth::F32, ChannelLayout::Rgb);
        img.set_pixel_f32(11, 21, [0.5, 0.25, 0.125, 9.0]);

        assert_eq!(img.sample_index(10, 20), Some(0));
        assert_eq!(img.sample_index(11, 21), Some(9));
        assert_eq!(img.sample_index(12, 21), None);
        // RGB layout: alpha reads as 0, the written alpha was discarded
        assert_eq!(img.pixel_f32(11, 21), Some([0.5, 0.25, 0.125, 0.0]));
    }

    #[test]
    fn test_out_of_bounds_lookup() {
        let img = ImageBuf::new(Window::from_size(2, 2), BitDepth::U8, ChannelLayout::Rgba);
        assert!(img.pixel_f32(-1, 0).is_none());
        assert!(img.pixel_f32(0, 2).is_none());
    }

    #[test]
    fn test_typed_access() {
        let mut img = ImageBuf::new(Window::from_size(2, 1), BitDepth::U8, ChannelLayout::Rgb);
        assert!(img.samples::<u8>().is_ok());
        assert!(matches!(
            img.samples::<f32>(),
            Err(Error::DepthMismatch { .. })
        ));
        img.samples_mut::<u8>().unwrap()[0] = 255;
        assert_eq!(img.pixel_f32(0, 0), Some([1.0, 0.0, 0.0, 0.0]));
    }

    #[test]
    fn test_u8_write_rounds_and_clamps() {
        let mut img = ImageBuf::new(Window::from_size(1, 1), BitDepth::U8, ChannelLayout::Rgba);
        img.set_pixel_f32(0, 0, [1.5, -0.25, 0.5, 1.0]);
        assert_eq!(img.samples::<u8>().unwrap(), &[255, 0, 128, 255]);
    }

    #[test]
    fn test_clear() {
        let mut img = ImageBuf::new(Window::from_size(2, 1), BitDepth::F32, ChannelLayout::Rgb);
        img.set_pixel_f32(0, 0, [1.0, 1.0, 1.0, 1.0]);
        img.clear();
        assert_eq!(img.pixel_f32(0, 0), Some([0.0, 0.0, 0.0, 0.0]));
    }
}
