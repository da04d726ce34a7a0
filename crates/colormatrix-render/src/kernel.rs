//! Per-pixel matrix transform kernel and its row-parallel dispatch.
//!
//! The kernel is one generic routine instantiated per sample type and
//! channel count: {u8, u16, f32} x {3, 4}. For each destination pixel in
//! the render window it reads the corresponding source pixel, applies the
//! 4x4 matrix and writes the result in the destination representation;
//! where no source pixel exists the destination is black/transparent.
//!
//! # Concurrency
//!
//! Destination rows are disjoint scanlines of the render window, so the
//! dispatch hands each row to the pool with no synchronization: the source
//! slice and matrix are shared read-only, every row slice is owned
//! exclusively by one task. Output depends only on pixel position, never
//! on execution order.
//!
//! # Cancellation
//!
//! The abort query is polled once per scanline. Rows that start after the
//! signal are skipped; rows already in flight finish. Unvisited rows keep
//! whatever the destination buffer held before the call.

use crate::error::RenderResult;
use crate::host::AbortQuery;
use colormatrix_core::{ImageBuf, Matrix44, Sample, Window};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Read-only view of a source image's typed samples and geometry.
struct SrcView<'a, T> {
    samples: &'a [T],
    bounds: Window,
    channels: usize,
}

impl<T: Sample> SrcView<'_, T> {
    /// First-sample index of (x, y), or `None` outside the source bounds.
    #[inline]
    fn pixel(&self, x: i32, y: i32) -> Option<&[T]> {
        if !self.bounds.contains(x, y) {
            return None;
        }
        let row = (y - self.bounds.y1) as usize;
        let col = (x - self.bounds.x1) as usize;
        let idx = (row * self.bounds.width() as usize + col) * self.channels;
        Some(&self.samples[idx..idx + self.channels])
    }
}

/// Transforms one destination scanline.
///
/// `row` holds the full-width destination scanline covered by the
/// one-row `band`; only columns inside the band are written.
fn transform_row<T: Sample, const N: usize>(
    row: &mut [T],
    band: &Window,
    dst_x1: i32,
    src: Option<&SrcView<'_, T>>,
    matrix: &Matrix44,
) {
    let y = band.y1;
    for x in band.cols() {
        let d = (x - dst_x1) as usize * N;
        let dst_px = &mut row[d..d + N];

        match src.and_then(|s| s.pixel(x, y)) {
            Some(src_px) => {
                let in_r = src_px[0].to_f32();
                let in_g = src_px[1].to_f32();
                let in_b = src_px[2].to_f32();
                let in_a = if N == 4 { src_px[3].to_f32() } else { 0.0 };
                for (c, out) in dst_px.iter_mut().enumerate() {
                    let v = matrix[4 * c] * in_r
                        + matrix[4 * c + 1] * in_g
                        + matrix[4 * c + 2] * in_b
                        + matrix[4 * c + 3] * in_a;
                    *out = T::from_f32(v);
                }
            }
            // no source pixel here, be black and transparent
            None => dst_px.fill(T::zero()),
        }
    }
}

/// Runs one kernel instantiation over the render window.
///
/// `window` must already be clipped to the destination bounds, and the
/// source (when present) must match the destination's depth and layout;
/// both are enforced by the render entry point before dispatch.
pub(crate) fn process_window<T: Sample, const N: usize>(
    src: Option<&ImageBuf>,
    dst: &mut ImageBuf,
    window: Window,
    matrix: &Matrix44,
    abort: &(impl AbortQuery + ?Sized),
) -> RenderResult<()> {
    if window.is_empty() {
        return Ok(());
    }

    let src_view = match src {
        Some(img) => Some(SrcView {
            samples: img.samples::<T>()?,
            bounds: img.bounds(),
            channels: img.channels(),
        }),
        None => None,
    };
    let src_view = src_view.as_ref();

    let dst_bounds = dst.bounds();
    let dst_x1 = dst_bounds.x1;
    let row_stride = dst_bounds.width() as usize * N;

    // Scanlines of the window, as disjoint slices of the destination.
    let first = (window.y1 - dst_bounds.y1) as usize * row_stride;
    let last = (window.y2 - dst_bounds.y1) as usize * row_stride;
    let rows = &mut dst.samples_mut::<T>()?[first..last];

    #[cfg(feature = "parallel")]
    rows.par_chunks_mut(row_stride)
        .enumerate()
        .for_each(|(i, row)| {
            if abort.aborted() {
                return;
            }
            let band = window.row_band(i as i32, 1);
            transform_row::<T, N>(row, &band, dst_x1, src_view, matrix);
        });

    #[cfg(not(feature = "parallel"))]
    for (i, row) in rows.chunks_mut(row_stride).enumerate() {
        if abort.aborted() {
            break;
        }
        let band = window.row_band(i as i32, 1);
        transform_row::<T, N>(row, &band, dst_x1, src_view, matrix);
    }

    Ok(())
}
