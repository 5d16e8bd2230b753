//! Per-child layout parameters.
//!
//! A container attaches parameters to each child. The base contract is the
//! [`LayoutParams`] trait; containers define their own concrete type and
//! reject any other through a type check, so a parameter object is always
//! handled behind `dyn LayoutParams` until the container has accepted it.

use crate::attrs::{AttributeError, AttributeSet};
use crate::geometry::Insets;
use serde::{Deserialize, Serialize};
use std::any::Any;
use std::fmt;

/// Requested size of a child along one axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dimension {
    /// As large as the parent allows, minus padding and margins.
    MatchParent,
    /// Just large enough for the child's content.
    WrapContent,
    /// A fixed size in pixels.
    Exact(i32),
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MatchParent => f.write_str("match_parent"),
            Self::WrapContent => f.write_str("wrap_content"),
            Self::Exact(px) => write!(f, "{px}px"),
        }
    }
}

/// Layout parameters a parent attaches to a child.
pub trait LayoutParams: Any + fmt::Debug {
    /// Requested width.
    fn width(&self) -> Dimension;

    /// Requested height.
    fn height(&self) -> Dimension;

    /// Margins, for parameter types that carry them.
    fn margins(&self) -> Option<Insets> {
        None
    }

    /// Upcast for type checks.
    fn as_any(&self) -> &dyn Any;
}

/// Plain width/height parameters with no margins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BasicLayoutParams {
    /// Requested width
    pub width: Dimension,
    /// Requested height
    pub height: Dimension,
}

impl BasicLayoutParams {
    /// Create parameters from a width and a height.
    #[must_use]
    pub const fn new(width: Dimension, height: Dimension) -> Self {
        Self { width, height }
    }
}

impl LayoutParams for BasicLayoutParams {
    fn width(&self) -> Dimension {
        self.width
    }

    fn height(&self) -> Dimension {
        self.height
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Width/height parameters with four margins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarginLayoutParams {
    /// Requested width
    pub width: Dimension,
    /// Requested height
    pub height: Dimension,
    /// Margins around the child
    #[serde(default)]
    pub margins: Insets,
}

impl MarginLayoutParams {
    /// Create parameters with zero margins.
    #[must_use]
    pub const fn new(width: Dimension, height: Dimension) -> Self {
        Self {
            width,
            height,
            margins: Insets::ZERO,
        }
    }

    /// Set the margins.
    #[must_use]
    pub const fn with_margins(mut self, margins: Insets) -> Self {
        self.margins = margins;
        self
    }

    /// Read parameters from inflation attributes.
    ///
    /// `layout_width` and `layout_height` are required. `layout_margin`
    /// sets every edge; the per-edge attributes override it.
    pub fn from_attributes(attrs: &AttributeSet) -> Result<Self, AttributeError> {
        let width = attrs.required_dimension("layout_width")?;
        let height = attrs.required_dimension("layout_height")?;

        let all = attrs.pixels("layout_margin")?.unwrap_or(0);
        let margins = Insets::new(
            attrs.pixels("layout_margin_left")?.unwrap_or(all),
            attrs.pixels("layout_margin_top")?.unwrap_or(all),
            attrs.pixels("layout_margin_right")?.unwrap_or(all),
            attrs.pixels("layout_margin_bottom")?.unwrap_or(all),
        );

        Ok(Self::new(width, height).with_margins(margins))
    }

    /// Copy width and height from any parameter object.
    ///
    /// Margins start at zero even when `source` carries some.
    #[must_use]
    pub fn from_params(source: &dyn LayoutParams) -> Self {
        Self::new(source.width(), source.height())
    }
}

impl LayoutParams for MarginLayoutParams {
    fn width(&self) -> Dimension {
        self.width
    }

    fn height(&self) -> Dimension {
        self.height
    }

    fn margins(&self) -> Option<Insets> {
        Some(self.margins)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
