//! Basic geometry value types.

use serde::{Deserialize, Serialize};

/// A rectangle described by its side lengths.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rectangle {
    pub width: f64,
    pub height: f64,
}

impl Rectangle {
    /// Create a new rectangle. Inputs are taken as-is; nothing rejects a
    /// negative side length.
    #[inline]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Zero-sized rectangle.
    pub const ZERO: Self = Self {
        width: 0.0,
        height: 0.0,
    };

    /// Surface area (`width * height`).
    #[inline]
    pub fn area(&self) -> f64 {
        self.width * self.height
    }

    /// Check if the rectangle has zero area.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}

impl From<(f64, f64)> for Rectangle {
    fn from((width, height): (f64, f64)) -> Self {
        Self { width, height }
    }
}
