//! Render window rectangle.
//!
//! The host describes image bounds and render regions as half-open
//! rectangles `[x1, x2) x [y1, y2)` in absolute pixel coordinates, which
//! may be negative. [`Window`] mirrors that convention directly so no
//! translation happens at the host boundary.
//!
//! # Coordinate System
//!
//! - (x1, y1) is the lower-left corner (inclusive)
//! - (x2, y2) is the upper-right corner (exclusive)
//! - A window with `x2 <= x1` or `y2 <= y1` is empty
//!
//! # Example
//!
//! ```rust
//! use colormatrix_core::Window;
//!
//! let win = Window::new(10, 20, 110, 70);
//! assert_eq!(win.width(), 100);
//! assert_eq!(win.height(), 50);
//! assert!(win.contains(10, 20));
//! assert!(!win.contains(110, 70)); // upper corner excluded
//! ```

use std::fmt;
use std::ops::Range;

/// A half-open rectangle `[x1, x2) x [y1, y2)` in pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(C)]
pub struct Window {
    /// Left edge (inclusive).
    pub x1: i32,
    /// Bottom edge (inclusive).
    pub y1: i32,
    /// Right edge (exclusive).
    pub x2: i32,
    /// Top edge (exclusive).
    pub y2: i32,
}

impl Window {
    /// Creates a window from its corner coordinates.
    #[inline]
    pub const fn new(x1: i32, y1: i32, x2: i32, y2: i32) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// Creates a window at the origin with the given dimensions.
    #[inline]
    pub const fn from_size(width: i32, height: i32) -> Self {
        Self::new(0, 0, width, height)
    }

    /// Width in pixels (zero for degenerate windows).
    #[inline]
    pub const fn width(&self) -> i32 {
        if self.x2 > self.x1 { self.x2 - self.x1 } else { 0 }
    }

    /// Height in pixels (zero for degenerate windows).
    #[inline]
    pub const fn height(&self) -> i32 {
        if self.y2 > self.y1 { self.y2 - self.y1 } else { 0 }
    }

    /// Number of pixels covered.
    #[inline]
    pub const fn area(&self) -> u64 {
        self.width() as u64 * self.height() as u64
    }

    /// Returns `true` if the window covers no pixels.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.x2 <= self.x1 || self.y2 <= self.y1
    }

    /// Returns `true` if the pixel (x, y) lies inside this window.
    #[inline]
    pub const fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.x1 && x < self.x2 && y >= self.y1 && y < self.y2
    }

    /// Returns the intersection with another window.
    ///
    /// `None` if the windows share no pixels.
    ///
    /// # Example
    ///
    /// ```rust
    /// use colormatrix_core::Window;
    ///
    /// let a = Window::new(0, 0, 100, 100);
    /// let b = Window::new(50, 50, 150, 150);
    /// assert_eq!(a.intersect(&b), Some(Window::new(50, 50, 100, 100)));
    /// ```
    #[inline]
    pub fn intersect(&self, other: &Window) -> Option<Window> {
        let win = Window::new(
            self.x1.max(other.x1),
            self.y1.max(other.y1),
            self.x2.min(other.x2),
            self.y2.min(other.y2),
        );
        if win.is_empty() { None } else { Some(win) }
    }

    /// Row coordinates covered by this window, bottom to top.
    #[inline]
    pub fn rows(&self) -> Range<i32> {
        self.y1..self.y2
    }

    /// Column coordinates covered by this window, left to right.
    #[inline]
    pub fn cols(&self) -> Range<i32> {
        self.x1..self.x2
    }

    /// The sub-window covering rows `[y1 + offset, y1 + offset + count)`.
    ///
    /// Carves a render window into disjoint horizontal bands, the shape a
    /// host's tiling dispatcher hands out. The result is clipped to this
    /// window.
    #[inline]
    pub fn row_band(&self, offset: i32, count: i32) -> Window {
        Window::new(
            self.x1,
            (self.y1 + offset).max(self.y1).min(self.y2),
            self.x2,
            (self.y1 + offset + count).max(self.y1).min(self.y2),
        )
    }
}

impl fmt::Display for Window {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}) x [{}, {})", self.x1, self.x2, self.y1, self.y2)
    }
}
