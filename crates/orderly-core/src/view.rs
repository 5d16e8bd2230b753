//! The `View` trait and a leaf view.
//!
//! A view tree is driven in two passes:
//!
//! 1. **Measure**: the parent hands each child a pair of [`MeasureSpec`]s and
//!    the child records a [`MeasuredSize`].
//! 2. **Layout**: the parent commits each child's frame, in the parent's
//!    coordinate space.
//!
//! # Examples
//!
//! ```
//! use orderly_core::{Block, MeasureSpec, Rect, Size, View};
//!
//! let mut block = Block::new(Size::new(40, 20));
//! block.measure(MeasureSpec::at_most(30), MeasureSpec::exactly(50));
//! assert_eq!(block.measured().size(), Size::new(30, 50));
//!
//! block.layout(Rect::new(0, 0, 30, 50));
//! assert_eq!(block.frame().size(), Size::new(30, 50));
//! ```

use crate::geometry::{Rect, Size};
use crate::measure::{resolve_size_and_state, MeasureSpec, MeasuredSize, MeasuredState};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Whether a view is drawn and whether it takes up space.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Visibility {
    /// Drawn and takes up space.
    #[default]
    Visible,
    /// Not drawn, still takes up space.
    Invisible,
    /// Collapsed: not drawn, takes up no space, skipped by layout.
    Gone,
}

impl Visibility {
    /// Check if the view is collapsed.
    #[must_use]
    pub const fn is_gone(self) -> bool {
        matches!(self, Self::Gone)
    }
}

/// A node in the view tree.
pub trait View: fmt::Debug {
    /// Identifier used for lookups.
    fn id(&self) -> Option<&str> {
        None
    }

    /// Current visibility.
    fn visibility(&self) -> Visibility;

    /// Change visibility. Takes effect on the next pass.
    fn set_visibility(&mut self, visibility: Visibility);

    /// Measure under the given specs and record the result.
    fn measure(&mut self, width_spec: MeasureSpec, height_spec: MeasureSpec);

    /// Result of the last [`View::measure`].
    fn measured(&self) -> MeasuredSize;

    /// Commit a frame in the parent's coordinate space.
    fn layout(&mut self, frame: Rect);

    /// Last committed frame.
    fn frame(&self) -> Rect;

    /// Number of child views.
    fn child_count(&self) -> usize {
        0
    }

    /// Child at `index`.
    fn child_at(&self, _index: usize) -> Option<&dyn View> {
        None
    }

    /// Mutable child at `index`.
    fn child_at_mut(&mut self, _index: usize) -> Option<&mut dyn View> {
        None
    }
}

/// Depth-first search for a view by id, including `root` itself.
#[must_use]
pub fn find_view<'a>(root: &'a dyn View, id: &str) -> Option<&'a dyn View> {
    if root.id() == Some(id) {
        return Some(root);
    }
    (0..root.child_count())
        .filter_map(|i| root.child_at(i))
        .find_map(|child| find_view(child, id))
}

/// Mutable variant of [`find_view`].
pub fn find_view_mut<'a>(root: &'a mut dyn View, id: &str) -> Option<&'a mut dyn View> {
    if root.id() == Some(id) {
        return Some(root);
    }
    let index = (0..root.child_count())
        .find(|&i| root.child_at(i).is_some_and(|c| find_view(c, id).is_some()))?;
    find_view_mut(root.child_at_mut(index)?, id)
}

/// A leaf view with a fixed intrinsic content size.
///
/// It wants `max(content, min_size)` in each dimension and resolves that
/// against the spec, so an `AtMost` spec smaller than the content reports
/// [`MeasuredState::TOO_SMALL`].
#[derive(Debug, Clone, Default)]
pub struct Block {
    id: Option<String>,
    content: Size,
    min_size: Size,
    visibility: Visibility,
    measured: MeasuredSize,
    frame: Rect,
}

impl Block {
    /// Create a visible block with the given content size.
    #[must_use]
    pub fn new(content: Size) -> Self {
        Self {
            content,
            ..Self::default()
        }
    }

    /// Set the id.
    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Set the minimum size.
    #[must_use]
    pub const fn with_min_size(mut self, min_size: Size) -> Self {
        self.min_size = min_size;
        self
    }

    /// Set the visibility.
    #[must_use]
    pub const fn with_visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }

    /// Intrinsic content size.
    #[must_use]
    pub const fn content(&self) -> Size {
        self.content
    }
}

impl View for Block {
    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn visibility(&self) -> Visibility {
        self.visibility
    }

    fn set_visibility(&mut self, visibility: Visibility) {
        self.visibility = visibility;
    }

    fn measure(&mut self, width_spec: MeasureSpec, height_spec: MeasureSpec) {
        let desired = self.content.max(self.min_size);
        self.measured = MeasuredSize::new(
            resolve_size_and_state(desired.width, width_spec, MeasuredState::empty()),
            resolve_size_and_state(desired.height, height_spec, MeasuredState::empty()),
        );
        log::trace!(
            "Block {:?} measured {:?} under {width_spec} x {height_spec}",
            self.id,
            self.measured
        );
    }

    fn measured(&self) -> MeasuredSize {
        self.measured
    }

    fn layout(&mut self, frame: Rect) {
        self.frame = frame;
    }

    fn frame(&self) -> Rect {
        self.frame
    }
}
