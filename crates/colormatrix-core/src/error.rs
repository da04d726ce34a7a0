//! Error types for core buffer and format operations.
//!
//! Render-level failures (clip mismatches, unsupported formats) live in
//! `colormatrix-render`; this module covers construction and typed-access
//! errors on the core types.

use crate::format::BitDepth;
use crate::window::Window;
use thiserror::Error;

/// Result type alias using [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building or accessing core types.
#[derive(Debug, Error)]
pub enum Error {
    /// The bounds window cannot describe a pixel buffer.
    ///
    /// Returned when a window is empty or its area would overflow the
    /// buffer size calculation.
    #[error("invalid bounds {window}: {reason}")]
    InvalidBounds {
        /// The offending window
        window: Window,
        /// Reason why the bounds are invalid
        reason: String,
    },

    /// Sample buffer length doesn't match the bounds and layout.
    #[error("sample count mismatch: expected {expected}, got {got}")]
    SampleCountMismatch {
        /// Samples required by bounds x channels
        expected: usize,
        /// Samples actually provided
        got: usize,
    },

    /// Typed access at a different bit depth than the buffer stores.
    #[error("bit depth mismatch: buffer is {stored}, requested {requested}")]
    DepthMismatch {
        /// Depth of the stored samples
        stored: BitDepth,
        /// Depth that was requested
        requested: BitDepth,
    },
}

impl Error {
    /// Creates an [`Error::InvalidBounds`] error.
    #[inline]
    pub fn invalid_bounds(window: Window, reason: impl Into<String>) -> Self {
        Self::InvalidBounds {
            window,
            reason: reason.into(),
        }
    }

    /// Creates an [`Error::SampleCountMismatch`] error.
    #[inline]
    pub fn sample_count_mismatch(expected: usize, got: usize) -> Self {
        Self::SampleCountMismatch { expected, got }
    }

    /// Creates an [`Error::DepthMismatch`] error.
    #[inline]
    pub fn depth_mismatch(stored: BitDepth, requested: BitDepth) -> Self {
        Self::DepthMismatch { stored, requested }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_bounds_message() {
        let err = Error::invalid_bounds(Window::new(0, 0, 0, 10), "zero width");
        assert!(err.to_string().contains("zero width"));
    }

    #[test]
    fn test_depth_mismatch_message() {
        let err = Error::depth_mismatch(BitDepth::U8, BitDepth::F32);
        let msg = err.to_string();
        assert!(msg.contains("u8"));
        assert!(msg.contains("f32"));
    }
}
