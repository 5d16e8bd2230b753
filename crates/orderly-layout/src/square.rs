//! Square-ordered container.
//!
//! The container sizes itself to its single largest child (per dimension,
//! margins included) and stacks children top to bottom in attachment order.
//!
//! Three asymmetries are kept exactly as the container has always behaved,
//! since existing layouts depend on them:
//!
//! - self-sizing adds the **left and top** padding to the width; the right
//!   padding never contributes;
//! - placement starts from the container's own frame origin plus padding, so
//!   the container's position inside its parent shows up again in the child
//!   frames;
//! - the cursor does not move past a child's bottom margin, and the bottom
//!   padding plays no part in placement.

use crate::group::{OrderedLayout, ViewGroup};
use crate::params::ContainerParams;
use crate::stack::{measure_children, stack_column, Accumulate, Column, LayoutChild, Placement};
use orderly_core::{resolve_size_and_state, Insets, MeasureSpec, MeasuredSize, Rect, Size};

/// Placement policy: size to the largest child, stack in attachment order.
#[derive(Debug, Clone, Copy, Default)]
pub struct SquareOrdered;

/// Layout parameters accepted by [`SquareOrderedLayout`].
pub type LayoutParams = ContainerParams<SquareOrdered>;

/// A container that sizes itself to its largest child.
pub type SquareOrderedLayout = ViewGroup<SquareOrdered>;

impl OrderedLayout for SquareOrdered {
    const NAME: &'static str = "SquareOrderedLayout";

    fn compute_size<C: LayoutChild>(
        children: &mut [C],
        width_spec: MeasureSpec,
        height_spec: MeasureSpec,
        padding: Insets,
        min_size: Size,
    ) -> MeasuredSize {
        let extent = measure_children(children, width_spec, height_spec, padding, Accumulate::Max);

        let width = extent
            .size
            .width
            .saturating_add(padding.left.saturating_add(padding.top))
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

    // TODO: decide how a child taller or wider than the container should be
    // placed; today it simply overflows the container's frame.
    fn compute_layout<C: LayoutChild>(
        children: &[C],
        bounds: Rect,
        padding: Insets,
    ) -> Vec<Placement> {
        stack_column(
            children,
            0..children.len(),
            Column {
                left: bounds.left.saturating_add(padding.left),
                top: bounds.top.saturating_add(padding.top),
                advance_bottom_margin: false,
            },
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stack::testing::FixedChild;
    use orderly_core::{MeasuredState, Visibility};

    fn unbounded_size(children: &mut [FixedChild], padding: Insets) -> MeasuredSize {
        SquareOrdered::compute_size(
            children,
            MeasureSpec::unspecified(0),
            MeasureSpec::unspecified(0),
            padding,
            Size::ZERO,
        )
    }

    #[test]
    fn test_size_is_largest_child() {
        let mut children = vec![
            FixedChild::new(30, 50),
            FixedChild::new(10, 150).with_margins(Insets::new(0, 5, 0, 5)),
            FixedChild::new(40, 80).with_margins(Insets::new(2, 0, 2, 0)),
        ];
        let size = unbounded_size(&mut children, Insets::ZERO);
        assert_eq!(size.size(), Size::new(44, 160));
    }

    #[test]
    fn test_width_padding_uses_left_and_top() {
        let mut children = vec![FixedChild::new(10, 10)];
        let size = unbounded_size(&mut children, Insets::new(1, 20, 300, 4));
        assert_eq!(size.size(), Size::new(10 + 1 + 20, 10 + 20 + 4));
    }

    #[test]
    fn test_huge_padding_and_margins_saturate() {
        let mut children =
            vec![FixedChild::new(10, 10).with_margins(Insets::uniform(2_000_000_000))];
        let size = unbounded_size(&mut children, Insets::uniform(2_000_000_000));
        assert_eq!(size.size(), Size::new(i32::MAX, i32::MAX));

        let placements = SquareOrdered::compute_layout(
            &children,
            Rect::new(2_000_000_000, 0, i32::MAX, 10),
            Insets::uniform(2_000_000_000),
        );
        assert_eq!(placements[0].frame.left, i32::MAX);
        assert_eq!(placements[0].frame.top, i32::MAX);
    }

    #[test]
    fn test_size_propagates_child_state() {
        let mut children = vec![FixedChild::new(10, 500)];
        let size = SquareOrdered::compute_size(
            &mut children,
            MeasureSpec::exactly(100),
            MeasureSpec::exactly(100),
            Insets::ZERO,
            Size::ZERO,
        );
        assert_eq!(size.size(), Size::new(100, 100));
        assert!(size.width.state.is_empty());
        assert_eq!(size.height.state, MeasuredState::TOO_SMALL);
    }

    #[test]
    fn test_layout_keeps_attachment_order() {
        let mut children = vec![
            FixedChild::new(10, 50),
            FixedChild::new(10, 150),
            FixedChild::new(10, 80),
        ];
        unbounded_size(&mut children, Insets::ZERO);
        let placements = SquareOrdered::compute_layout(&children, Rect::default(), Insets::ZERO);
        let tops: Vec<(usize, i32, i32)> = placements
            .iter()
            .map(|p| (p.index, p.frame.top, p.frame.height()))
            .collect();
        assert_eq!(tops, vec![(0, 0, 50), (1, 50, 150), (2, 200, 80)]);
    }

    #[test]
    fn test_layout_ignores_bottom_margin_and_uses_bounds_origin() {
        let mut children = vec![
            FixedChild::new(10, 10).with_margins(Insets::new(1, 2, 3, 40)),
            FixedChild::new(10, 10).with_margins(Insets::new(0, 5, 0, 0)),
        ];
        unbounded_size(&mut children, Insets::ZERO);
        let placements = SquareOrdered::compute_layout(
            &children,
            Rect::new(100, 200, 300, 400),
            Insets::new(4, 6, 8, 8),
        );
        assert_eq!(placements[0].frame, Rect::new(105, 208, 115, 218));
        assert_eq!(placements[1].frame, Rect::new(104, 223, 114, 233));
    }

    #[test]
    fn test_gone_children_excluded() {
        let mut children = vec![
            FixedChild::new(10, 10),
            FixedChild::new(500, 500).gone(),
            FixedChild::new(20, 5),
        ];
        let size = unbounded_size(&mut children, Insets::ZERO);
        assert_eq!(size.size(), Size::new(20, 10));
        assert_eq!(children[1].measure_calls, 0);

        let placements = SquareOrdered::compute_layout(&children, Rect::default(), Insets::ZERO);
        let indices: Vec<usize> = placements.iter().map(|p| p.index).collect();
        assert_eq!(indices, vec![0, 2]);
        assert_eq!(placements[1].frame.top, 10);
        assert_eq!(children[1].visibility, Visibility::Gone);
    }
}
