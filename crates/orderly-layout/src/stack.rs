//! The single-column stacking pass shared by both containers.
//!
//! Both containers run the same two steps and differ only in how child
//! extents are accumulated and in which order, and from which origin, the
//! column is walked.

use orderly_core::{
    child_measure_spec, combine_measured_states, Dimension, Insets, MeasureSpec, MeasuredSize,
    MeasuredStates, Rect, Size, Visibility,
};
use serde::{Deserialize, Serialize};

/// A child as seen by a container's measure and layout passes.
pub trait LayoutChild {
    /// Current visibility.
    fn visibility(&self) -> Visibility;

    /// Margins from the child's layout parameters.
    fn margins(&self) -> Insets;

    /// Requested `(width, height)` from the child's layout parameters.
    fn requested(&self) -> (Dimension, Dimension);

    /// Measure the child and return the recorded result.
    fn measure(&mut self, width_spec: MeasureSpec, height_spec: MeasureSpec) -> MeasuredSize;

    /// Result of the child's last measurement.
    fn measured(&self) -> MeasuredSize;
}

/// How child extents combine into the container's content size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Accumulate {
    /// Add every child's extent in both dimensions.
    Sum,
    /// Keep the largest child extent in each dimension.
    Max,
}

/// Content size and merged child states from one measure pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ChildExtent {
    /// Accumulated size including margins, excluding padding
    pub size: Size,
    /// Merged child states
    pub states: MeasuredStates,
}

/// A frame assigned to a child during layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placement {
    /// Child index in attachment order
    pub index: usize,
    /// Frame in the container's coordinate space
    pub frame: Rect,
}

/// Where a column starts and how the cursor advances past each child.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Column {
    /// Left edge before the child's left margin
    pub left: i32,
    /// Initial cursor position
    pub top: i32,
    /// Whether the cursor moves past each child's bottom margin
    pub advance_bottom_margin: bool,
}

/// Measure a child with the parent's specs minus padding and its margins.
pub fn measure_child_with_margins<C: LayoutChild + ?Sized>(
    child: &mut C,
    width_spec: MeasureSpec,
    height_spec: MeasureSpec,
    padding: Insets,
) -> MeasuredSize {
    let margins = child.margins();
    let (width, height) = child.requested();
    child.measure(
        child_measure_spec(
            width_spec,
            padding.horizontal().saturating_add(margins.horizontal()),
            width,
        ),
        child_measure_spec(
            height_spec,
            padding.vertical().saturating_add(margins.vertical()),
            height,
        ),
    )
}

/// Measure every non-collapsed child and accumulate their extents.
///
/// Collapsed children are neither measured nor counted.
pub fn measure_children<C: LayoutChild>(
    children: &mut [C],
    width_spec: MeasureSpec,
    height_spec: MeasureSpec,
    padding: Insets,
    accumulate: Accumulate,
) -> ChildExtent {
    let mut extent = ChildExtent::default();

    for child in children.iter_mut() {
        if child.visibility().is_gone() {
            continue;
        }
        let measured = measure_child_with_margins(child, width_spec, height_spec, padding);
        let margins = child.margins();
        let width = measured.width.size.saturating_add(margins.horizontal());
        let height = measured.height.size.saturating_add(margins.vertical());

        extent.size = match accumulate {
            Accumulate::Sum => Size::new(
                extent.size.width.saturating_add(width),
                extent.size.height.saturating_add(height),
            ),
            Accumulate::Max => extent.size.max(Size::new(width, height)),
        };

        log::trace!(
            "child state {:?} merged into {:?}",
            measured.states(),
            extent.states
        );
        extent.states = combine_measured_states(extent.states, measured.states());
    }

    extent
}

/// Walk `order` top to bottom and assign each non-collapsed child a frame.
///
/// Collapsed children are skipped and leave no gap to compact.
pub fn stack_column<C: LayoutChild>(
    children: &[C],
    order: impl IntoIterator<Item = usize>,
    column: Column,
) -> Vec<Placement> {
    let mut cursor = column.top;
    let mut placements = Vec::with_capacity(children.len());

    for index in order {
        let Some(child) = children.get(index) else {
            continue;
        };
        if child.visibility().is_gone() {
            continue;
        }
        let margins = child.margins();
        let size = child.measured().size();

        cursor = cursor.saturating_add(margins.top);
        let frame = Rect::from_origin_size(column.left.saturating_add(margins.left), cursor, size);
        cursor = cursor.saturating_add(size.height);
        if column.advance_bottom_margin {
            cursor = cursor.saturating_add(margins.bottom);
        }

        placements.push(Placement { index, frame });
    }

    placements
}
