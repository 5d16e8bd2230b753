//! Container-specific layout parameters.

use orderly_core::{
    AttributeError, AttributeSet, Dimension, Insets, LayoutParams, MarginLayoutParams,
};
use std::any::Any;
use std::fmt;
use std::marker::PhantomData;
use std::ops::Deref;

/// Margin-aware parameters owned by one container type `L`.
///
/// Parameters for different containers are distinct types even though they
/// carry the same data, so a container can reject parameters built for
/// another one.
pub struct ContainerParams<L> {
    inner: MarginLayoutParams,
    _layout: PhantomData<fn() -> L>,
}

impl<L> ContainerParams<L> {
    /// Create parameters from a width and a height, with zero margins.
    #[must_use]
    pub const fn new(width: Dimension, height: Dimension) -> Self {
        Self::wrap(MarginLayoutParams::new(width, height))
    }

    /// Fill available space in both dimensions.
    #[must_use]
    pub const fn fill() -> Self {
        Self::new(Dimension::MatchParent, Dimension::MatchParent)
    }

    const fn wrap(inner: MarginLayoutParams) -> Self {
        Self {
            inner,
            _layout: PhantomData,
        }
    }

    /// Set the margins.
    #[must_use]
    pub fn with_margins(self, margins: Insets) -> Self {
        Self::wrap(self.inner.with_margins(margins))
    }

    /// Read parameters from inflation attributes.
    pub fn from_attributes(attrs: &AttributeSet) -> Result<Self, AttributeError> {
        MarginLayoutParams::from_attributes(attrs).map(Self::wrap)
    }

    /// Copy width and height from any parameter object. Margins reset to zero.
    #[must_use]
    pub fn from_params(source: &dyn LayoutParams) -> Self {
        Self::wrap(MarginLayoutParams::from_params(source))
    }
}

impl<L> Deref for ContainerParams<L> {
    type Target = MarginLayoutParams;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl<L> Clone for ContainerParams<L> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<L> Copy for ContainerParams<L> {}

impl<L> PartialEq for ContainerParams<L> {
    fn eq(&self, other: &Self) -> bool {
        self.inner == other.inner
    }
}

impl<L> Eq for ContainerParams<L> {}

impl<L> fmt::Debug for ContainerParams<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ContainerParams")
            .field("width", &self.inner.width)
            .field("height", &self.inner.height)
            .field("margins", &self.inner.margins)
            .finish()
    }
}

impl<L: 'static> LayoutParams for ContainerParams<L> {
    fn width(&self) -> Dimension {
        self.inner.width
    }

    fn height(&self) -> Dimension {
        self.inner.height
    }

    fn margins(&self) -> Option<Insets> {
        Some(self.inner.margins)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
