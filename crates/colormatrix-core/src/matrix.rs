//! 4x4 color matrix.
//!
//! [`Matrix44`] describes how each output channel is derived from the
//! input channels: row 0 weights the red output, row 1 green, row 2 blue,
//! row 3 alpha. It is rebuilt from the host's four parameter vectors on
//! every render call and shared read-only across the parallel kernel
//! invocations of that call.
//!
//! # Convention
//!
//! Row-major storage with column input vectors:
//!
//! ```text
//! | m0  m1  m2  m3  |   | inR |   | outR |
//! | m4  m5  m6  m7  | * | inG | = | outG |
//! | m8  m9  m10 m11 |   | inB |   | outB |
//! | m12 m13 m14 m15 |   | inA |   | outA |
//! ```
//!
//! # Example
//!
//! ```rust
//! use colormatrix_core::Matrix44;
//!
//! // Swap red and green
//! let m = Matrix44::from_rows(
//!     [0.0, 1.0, 0.0, 0.0],
//!     [1.0, 0.0, 0.0, 0.0],
//!     [0.0, 0.0, 1.0, 0.0],
//!     [0.0, 0.0, 0.0, 1.0],
//! );
//! assert_eq!(m.apply([0.2, 0.8, 0.1, 1.0]), [0.8, 0.2, 0.1, 1.0]);
//! ```

use std::ops::Index;

/// A row-major 4x4 matrix mapping input (R,G,B,A) to output (R,G,B,A).
///
/// No validation is performed on the coefficients; any real values are
/// accepted, including ones producing out-of-range output. Clamping is
/// the responsibility of the sample write step, not of the matrix.
#[derive(Debug, Clone, Copy, PartialEq)]
#[repr(C)]
pub struct Matrix44 {
    /// Coefficients in row-major order.
    pub m: [f32; 16],
}

impl Matrix44 {
    /// Zero matrix.
    pub const ZERO: Self = Self { m: [0.0; 16] };

    /// Identity matrix (the filter's default: output equals input).
    pub const IDENTITY: Self = Self {
        m: [
            1.0, 0.0, 0.0, 0.0, //
            0.0, 1.0, 0.0, 0.0, //
            0.0, 0.0, 1.0, 0.0, //
            0.0, 0.0, 0.0, 1.0,
        ],
    };

    /// Creates a matrix from the four output-channel rows.
    ///
    /// Each row describes one output channel's dependency on
    /// (inR, inG, inB, inA).
    #[inline]
    pub const fn from_rows(red: [f32; 4], green: [f32; 4], blue: [f32; 4], alpha: [f32; 4]) -> Self {
        Self {
            m: [
                red[0], red[1], red[2], red[3], //
                green[0], green[1], green[2], green[3], //
                blue[0], blue[1], blue[2], blue[3], //
                alpha[0], alpha[1], alpha[2], alpha[3],
            ],
        }
    }

    /// Creates a matrix from the host's f64 parameter vectors.
    ///
    /// Coefficients are narrowed to f32 for the kernel.
    #[inline]
    pub fn from_params(red: [f64; 4], green: [f64; 4], blue: [f64; 4], alpha: [f64; 4]) -> Self {
        let narrow = |row: [f64; 4]| [row[0] as f32, row[1] as f32, row[2] as f32, row[3] as f32];
        Self::from_rows(narrow(red), narrow(green), narrow(blue), narrow(alpha))
    }

    /// Creates a matrix from 16 coefficients in row-major order.
    #[inline]
    pub const fn from_coefficients(m: [f32; 16]) -> Self {
        Self { m }
    }

    /// Returns row `c` (the weights of output channel `c`).
    ///
    /// # Panics
    ///
    /// Panics if `c >= 4`.
    #[inline]
    pub fn row(&self, c: usize) -> [f32; 4] {
        [
            self.m[4 * c],
            self.m[4 * c + 1],
            self.m[4 * c + 2],
            self.m[4 * c + 3],
        ]
    }

    /// Applies the matrix to an input vector.
    #[inline]
    pub fn apply(&self, rgba: [f32; 4]) -> [f32; 4] {
        let mut out = [0.0f32; 4];
        for (c, dst) in out.iter_mut().enumerate() {
            *dst = self.m[4 * c] * rgba[0]
                + self.m[4 * c + 1] * rgba[1]
                + self.m[4 * c + 2] * rgba[2]
                + self.m[4 * c + 3] * rgba[3];
        }
        out
    }

    /// Returns `true` if this is exactly the identity matrix.
    #[inline]
    pub fn is_identity(&self) -> bool {
        self.m == Self::IDENTITY.m
    }
}

impl Default for Matrix44 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Index<usize> for Matrix44 {
    type Output = f32;

    #[inline]
    fn index(&self, i: usize) -> &f32 {
        &self.m[i]
    }
}
