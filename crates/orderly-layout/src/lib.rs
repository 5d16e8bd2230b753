#![allow(clippy::missing_const_for_fn)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::doc_markdown)]
//! Stacking containers for Orderly view trees.
//!
//! Two containers share one single-column stacking pass and differ in policy:
//!
//! - [`AreaOrderedLayout`]: sums child extents and stacks children in
//!   descending order of measured area.
//! - [`SquareOrderedLayout`]: sizes itself to the largest child and stacks
//!   children in attachment order.
//!
//! Each policy is a pair of pure functions ([`OrderedLayout::compute_size`]
//! and [`OrderedLayout::compute_layout`]) over the [`LayoutChild`] trait.
//! [`ViewGroup`] runs them as a [`View`](orderly_core::View), and
//! [`ViewRoot`] drives a whole tree.

pub mod area;
mod group;
mod params;
mod root;
pub mod square;
mod stack;

pub use area::{rank_by_area, AreaOrdered, AreaOrderedLayout, AreaRank};
pub use group::{Child, OrderedLayout, ViewGroup};
pub use params::ContainerParams;
pub use root::{FrameRecord, ViewRoot};
pub use square::{SquareOrdered, SquareOrderedLayout};
pub use stack::{
    measure_child_with_margins, measure_children, stack_column, Accumulate, ChildExtent, Column,
    LayoutChild, Placement,
};
