#![allow(clippy::missing_const_for_fn)]
#![allow(clippy::doc_markdown)]
//! Core view model for Orderly containers.
//!
//! This crate provides the types every container and host shares:
//! - Geometry in integer pixels: [`Size`], [`Rect`], [`Insets`]
//! - The measure protocol: [`MeasureSpec`], [`MeasuredSize`], [`MeasuredState`]
//! - Per-child configuration: [`LayoutParams`], [`MarginLayoutParams`], [`Dimension`]
//! - Inflation attributes: [`AttributeSet`]
//! - The [`View`] trait and the leaf [`Block`] view

mod attrs;
mod geometry;
mod measure;
mod params;
mod view;

pub use attrs::{AttributeError, AttributeSet};
pub use geometry::{Insets, Rect, Size};
pub use measure::{
    child_measure_spec, combine_measured_states, resolve_size_and_state, MeasureMode,
    MeasureSpec, MeasuredDimension, MeasuredSize, MeasuredState, MeasuredStates,
};
pub use params::{BasicLayoutParams, Dimension, LayoutParams, MarginLayoutParams};
pub use view::{find_view, find_view_mut, Block, View, Visibility};
