//! # colormatrix-core
//!
//! Core types for the color-matrix image filter.
//!
//! This crate provides the data model shared by the filter and its host
//! adapters:
//!
//! - [`Matrix44`] - Row-major 4x4 matrix mapping input (R,G,B,A) to output (R,G,B,A)
//! - [`ImageBuf`] - Runtime-typed 2D pixel buffer addressable by absolute (x, y)
//! - [`Window`] - Half-open rectangular pixel region (the host's render window)
//! - [`BitDepth`], [`ChannelLayout`], [`ImageFormat`] - Format descriptors
//! - [`Sample`] - Trait closing over the supported sample types (u8, u16, f32)
//!
//! ## Design
//!
//! The host hands the filter images whose bit depth and channel layout are
//! only known at runtime, so [`ImageBuf`] stores its samples in a tagged
//! variant ([`PixelData`]) and the kernel is instantiated per concrete
//! [`Sample`] type. Everything here is per-render-call state: matrices and
//! buffers are built for one call and discarded afterward.
//!
//! ## Crate Structure
//!
//! ```text
//! colormatrix-core (this crate)
//!    ^
//!    |
//!    +-- colormatrix-render (kernel, dispatch, host boundary)
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod error;
pub mod format;
pub mod image;
pub mod matrix;
pub mod sample;
pub mod window;

// Re-exports for convenience
pub use error::{Error, Result};
pub use format::{BitDepth, ChannelLayout, ImageFormat};
pub use image::{ImageBuf, PixelData};
pub use matrix::Matrix44;
pub use sample::Sample;
pub use window::Window;

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```
/// use colormatrix_core::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::format::{BitDepth, ChannelLayout, ImageFormat};
    pub use crate::image::{ImageBuf, PixelData};
    pub use crate::matrix::Matrix44;
    pub use crate::sample::Sample;
    pub use crate::window::Window;
}
