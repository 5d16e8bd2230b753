//! Area-ordered container.
//!
//! Children are measured against the container's specs and their extents are
//! **summed** in both dimensions (width is summed too, even though children
//! end up in a single column). Layout stacks them top to bottom in descending
//! order of measured area, largest first.
//!
//! # Examples
//!
//! ```
//! use orderly_core::{Block, Dimension, MeasureSpec, Rect, Size, View};
//! use orderly_layout::area::{AreaOrderedLayout, LayoutParams};
//!
//! let wrap = LayoutParams::new(Dimension::WrapContent, Dimension::WrapContent);
//! let mut layout = AreaOrderedLayout::new()
//!     .with_child(Block::new(Size::new(10, 10)).with_id("small"), &wrap)
//!     .with_child(Block::new(Size::new(20, 20)).with_id("large"), &wrap);
//!
//! layout.measure(MeasureSpec::unspecified(0), MeasureSpec::unspecified(0));
//! assert_eq!(layout.measured().size(), Size::new(30, 30));
//!
//! layout.layout(Rect::new(0, 0, 30, 30));
//! assert_eq!(layout.child_at(1).unwrap().frame(), Rect::new(0, 0, 20, 20));
//! assert_eq!(layout.child_at(0).unwrap().frame(), Rect::new(0, 20, 10, 30));
//! ```

use crate::group::{OrderedLayout, ViewGroup};
use crate::params::ContainerParams;
use crate::stack::{measure_children, stack_column, Accumulate, Column, LayoutChild, Placement};
use orderly_core::{resolve_size_and_state, Insets, MeasureSpec, MeasuredSize, Rect, Size};
use std::cmp::Reverse;

/// Placement policy: sum extents, stack by descending area.
#[derive(Debug, Clone, Copy, Default)]
pub struct AreaOrdered;

/// Layout parameters accepted by [`AreaOrderedLayout`].
pub type LayoutParams = ContainerParams<AreaOrdered>;

/// A container that stacks children largest-area first.
pub type AreaOrderedLayout = ViewGroup<AreaOrdered>;

/// A child index paired with its measured area, built fresh on every pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AreaRank {
    /// Child index in attachment order
    pub index: usize,
    /// Measured width times measured height
    pub area: i64,
}

/// Rank every child, collapsed ones included, by descending measured area.
///
/// The sort is stable: children with equal areas keep their attachment order.
pub fn rank_by_area<C: LayoutChild>(children: &[C]) -> Vec<AreaRank> {
    let mut ranks: Vec<AreaRank> = children
        .iter()
        .enumerate()
        .map(|(index, child)| AreaRank {
            index,
            area: child.measured().size().area(),
        })
        .collect();
    ranks.sort_by_key(|rank| Reverse(rank.area));
    ranks
}

impl OrderedLayout for AreaOrdered {
    const NAME: &'static str = "AreaOrderedLayout";

    fn compute_size<C: LayoutChild>(
        children: &mut [C],
        width_spec: MeasureSpec,
        height_spec: MeasureSpec,
        padding: Insets,
        min_size: Size,
    ) -> MeasuredSize {
        let extent = measure_children(children, width_spec, height_spec, padding, Accumulate::Sum);

        let width = extent
            .size
            .width
            .saturating_add(padding.horizontal())
            .max(min_size.width);
        let height = extent
            .size
            .height
            .saturating_add(padding.vertical())
            .max(min_size.height);

        MeasuredSize::new(
            resolve_size_and_state(width, width_spec, extent.states.width),
            resolve_size_and_state(height, height_spec, extent.states.height),
        )
    }

    fn compute_layout<C: LayoutChild>(
        children: &[C],
        _bounds: Rect,
        padding: Insets,
    ) -> Vec<Placement> {
        let order = rank_by_area(children).into_iter().map(|rank| rank.index);
        stack_column(
            children,
            order,
            Column {
                left: padding.left,
                top: padding.top,
                advance_bottom_margin: true,
            },
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stack::testing::FixedChild;
    use orderly_core::MeasuredState;

    fn measured(children: &mut [FixedChild]) -> MeasuredSize {
        AreaOrdered::compute_size(
            children,
            MeasureSpec::unspecified(0),
            MeasureSpec::unspecified(0),
            Insets::ZERO,
            Size::ZERO,
        )
    }

    #[test]
    fn test_size_sums_both_dimensions() {
        let mut children = vec![
            FixedChild::new(10, 10).with_margins(Insets::new(1, 1, 1, 1)),
            FixedChild::new(20, 5),
        ];
        let size = AreaOrdered::compute_size(
            &mut children,
            MeasureSpec::unspecified(0),
            MeasureSpec::unspecified(0),
            Insets::new(3, 4, 5, 6),
            Size::ZERO,
        );
        assert_eq!(size.size(), Size::new(12 + 20 + 8, 12 + 5 + 10));
    }

    #[test]
    fn test_size_clamps_to_min_size() {
        let mut children: Vec<FixedChild> = Vec::new();
        let size = AreaOrdered::compute_size(
            &mut children,
            MeasureSpec::unspecified(0),
            MeasureSpec::unspecified(0),
            Insets::uniform(2),
            Size::new(50, 1),
        );
        assert_eq!(size.size(), Size::new(50, 4));
    }

    #[test]
    fn test_size_resolves_against_specs() {
        let mut children = vec![FixedChild::new(60, 60), FixedChild::new(60, 60)];
        let size = AreaOrdered::compute_size(
            &mut children,
            MeasureSpec::at_most(100),
            MeasureSpec::exactly(300),
            Insets::ZERO,
            Size::ZERO,
        );
        assert_eq!(size.size(), Size::new(100, 300));
        assert_eq!(size.width.state, MeasuredState::TOO_SMALL);
        assert!(size.height.state.is_empty());
    }

    #[test]
    fn test_rank_descending_by_area() {
        let mut children = vec![
            FixedChild::new(10, 10),
            FixedChild::new(20, 20),
            FixedChild::new(15, 15),
        ];
        measured(&mut children);
        let order: Vec<usize> = rank_by_area(&children).iter().map(|r| r.index).collect();
        assert_eq!(order, vec![1, 2, 0]);
    }

    #[test]
    fn test_rank_ties_keep_attachment_order() {
        let mut children = vec![
            FixedChild::new(4, 1),
            FixedChild::new(9, 9),
            FixedChild::new(2, 2),
            FixedChild::new(1, 4),
        ];
        measured(&mut children);
        let order: Vec<usize> = rank_by_area(&children).iter().map(|r| r.index).collect();
        assert_eq!(order, vec![1, 0, 2, 3]);
    }

    #[test]
    fn test_layout_stacks_largest_first() {
        let mut children = vec![
            FixedChild::new(10, 10),
            FixedChild::new(20, 20).with_margins(Insets::new(2, 3, 0, 4)),
            FixedChild::new(15, 15),
        ];
        measured(&mut children);
        let placements = AreaOrdered::compute_layout(
            &children,
            Rect::new(100, 100, 200, 200),
            Insets::new(5, 6, 0, 0),
        );
        let expected = vec![
            Placement {
                index: 1,
                frame: Rect::new(7, 9, 27, 29),
            },
            Placement {
                index: 2,
                frame: Rect::new(5, 33, 20, 48),
            },
            Placement {
                index: 0,
                frame: Rect::new(5, 48, 15, 58),
            },
        ];
        assert_eq!(placements, expected);
    }

    #[test]
    fn test_layout_skips_gone_without_compaction() {
        let mut children = vec![FixedChild::new(30, 30), FixedChild::new(10, 10)];
        measured(&mut children);
        children[0].visibility = orderly_core::Visibility::Gone;
        let placements = AreaOrdered::compute_layout(&children, Rect::default(), Insets::ZERO);
        assert_eq!(placements.len(), 1);
        assert_eq!(placements[0].index, 1);
        assert_eq!(placements[0].frame, Rect::new(0, 0, 10, 10));
    }
}
