//! # colormatrix-render
//!
//! The color-matrix filter: each output pixel is a 4x4 linear combination
//! of the corresponding input pixel's (R, G, B, A) components, with one
//! user-settable weight vector per output channel.
//!
//! # Modules
//!
//! - [`filter`] - [`ColorMatrixFilter`] and the render entry point
//! - `kernel` - the generic per-pixel transform and row-parallel dispatch
//! - [`host`] - injected collaborator traits ([`ParamSource`], [`FrameSource`], [`AbortQuery`])
//! - [`descriptor`] - describe-time metadata ([`FilterDescriptor`])
//!
//! # Example
//!
//! ```rust
//! use colormatrix_core::{BitDepth, ChannelLayout, ImageBuf, Window};
//! use colormatrix_render::{ColorMatrixFilter, ConstantParams, NeverAbort, RenderArgs};
//!
//! // Source frame and a filter that swaps red and green
//! let source = ImageBuf::from_samples(
//!     Window::from_size(1, 1),
//!     ChannelLayout::Rgba,
//!     vec![0.8f32, 0.2, 0.0, 1.0],
//! ).unwrap();
//! let params = ConstantParams::new(
//!     [0.0, 1.0, 0.0, 0.0],
//!     [1.0, 0.0, 0.0, 0.0],
//!     [0.0, 0.0, 1.0, 0.0],
//!     [0.0, 0.0, 0.0, 1.0],
//! );
//! let filter = ColorMatrixFilter::new(params, source.clone(), NeverAbort);
//!
//! let mut dst = ImageBuf::new(source.bounds(), BitDepth::F32, ChannelLayout::Rgba);
//! filter.render(&RenderArgs::new(0.0, dst.bounds()), &mut dst).unwrap();
//! assert_eq!(dst.pixel_f32(0, 0), Some([0.2, 0.8, 0.0, 1.0]));
//! ```
//!
//! # Feature Flags
//!
//! - `parallel` - row-parallel dispatch via rayon (enabled by default);
//!   without it scanlines are processed serially in the caller's thread.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod descriptor;
mod error;
pub mod filter;
pub mod host;
mod kernel;

pub use descriptor::{ClipDecl, EffectContext, FilterDescriptor, ParamDecl};
pub use error::{RenderError, RenderResult};
pub use filter::ColorMatrixFilter;
pub use host::{
    AbortFlag, AbortQuery, ConstantParams, FrameSource, NeverAbort, NoSource, OutputChannel,
    ParamSource, RenderArgs,
};
