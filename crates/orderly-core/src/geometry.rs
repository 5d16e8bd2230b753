//! Geometric primitives in integer pixels: `Size`, `Rect`, `Insets`.

use serde::{Deserialize, Serialize};

/// A 2D size with width and height.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Size {
    /// Width
    pub width: i32,
    /// Height
    pub height: i32,
}

impl Size {
    /// Zero size
    pub const ZERO: Self = Self {
        width: 0,
        height: 0,
    };

    /// Create a new size.
    #[must_use]
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// Calculate area, widened so that large sizes cannot overflow.
    #[must_use]
    pub const fn area(&self) -> i64 {
        self.width as i64 * self.height as i64
    }

    /// Component-wise maximum.
    #[must_use]
    pub fn max(self, other: Self) -> Self {
        Self::new(self.width.max(other.width), self.height.max(other.height))
    }
}

/// A rectangle in its parent's coordinate space, stored as four edges.
///
/// `right` and `bottom` are exclusive, so `width() == right - left`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rect {
    /// Left edge
    pub left: i32,
    /// Top edge
    pub top: i32,
    /// Right edge
    pub right: i32,
    /// Bottom edge
    pub bottom: i32,
}

impl Rect {
    /// Create a rectangle from its four edges.
    #[must_use]
    pub const fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Create a rectangle from a top-left corner and a size.
    ///
    /// The far edges saturate at the `i32` range.
    #[must_use]
    pub const fn from_origin_size(left: i32, top: i32, size: Size) -> Self {
        Self::new(
            left,
            top,
            left.saturating_add(size.width),
            top.saturating_add(size.height),
        )
    }

    /// Create from size at origin.
    #[must_use]
    pub const fn from_size(size: Size) -> Self {
        Self::from_origin_size(0, 0, size)
    }

    /// Width of the rectangle.
    #[must_use]
    pub const fn width(&self) -> i32 {
        self.right.saturating_sub(self.left)
    }

    /// Height of the rectangle.
    #[must_use]
    pub const fn height(&self) -> i32 {
        self.bottom.saturating_sub(self.top)
    }

    /// Get the size.
    #[must_use]
    pub const fn size(&self) -> Size {
        Size::new(self.width(), self.height())
    }

    /// Translate by an offset.
    #[must_use]
    pub const fn offset(&self, dx: i32, dy: i32) -> Self {
        Self::new(
            self.left.saturating_add(dx),
            self.top.saturating_add(dy),
            self.right.saturating_add(dx),
            self.bottom.saturating_add(dy),
        )
    }
}

/// Four edge insets, used for both padding and margins.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Insets {
    /// Left inset
    pub left: i32,
    /// Top inset
    pub top: i32,
    /// Right inset
    pub right: i32,
    /// Bottom inset
    pub bottom: i32,
}

impl Insets {
    /// No insets.
    pub const ZERO: Self = Self::uniform(0);

    /// Create insets from the four edges.
    #[must_use]
    pub const fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Same inset on every edge.
    #[must_use]
    pub const fn uniform(value: i32) -> Self {
        Self::new(value, value, value, value)
    }

    /// Sum of the left and right insets, saturating.
    #[must_use]
    pub const fn horizontal(&self) -> i32 {
        self.left.saturating_add(self.right)
    }

    /// Sum of the top and bottom insets, saturating.
    #[must_use]
    pub const fn vertical(&self) -> i32 {
        self.top.saturating_add(self.bottom)
    }
}
