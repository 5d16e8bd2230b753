//! Measure specs and measured state.
//!
//! A parent constrains each child dimension with a [`MeasureSpec`]: a target
//! size plus a [`MeasureMode`]. The child answers with a [`MeasuredSize`],
//! whose per-dimension [`MeasuredState`] records whether the resolved size had
//! to be clipped below what the child wanted.
//!
//! # Examples
//!
//! ```
//! use orderly_core::{resolve_size_and_state, MeasureSpec, MeasuredState};
//!
//! let spec = MeasureSpec::at_most(100);
//! let resolved = resolve_size_and_state(140, spec, MeasuredState::empty());
//! assert_eq!(resolved.size, 100);
//! assert!(resolved.state.contains(MeasuredState::TOO_SMALL));
//! ```

use crate::geometry::Size;
use crate::params::Dimension;
use bitflags::bitflags;
use serde::{Deserialize, Serialize};
use std::fmt;

const MODE_SHIFT: u32 = 30;
const SIZE_MASK: u32 = (1 << MODE_SHIFT) - 1;

/// How a dimension is constrained by its parent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MeasureMode {
    /// No constraint; the child may be as large as it wants.
    #[default]
    Unspecified,
    /// The child must be exactly the spec's size.
    Exactly,
    /// The child may be as large as it wants up to the spec's size.
    AtMost,
}

impl MeasureMode {
    const fn bits(self) -> u32 {
        match self {
            Self::Unspecified => 0,
            Self::Exactly => 1,
            Self::AtMost => 2,
        }
    }
}

/// A `(mode, size)` pair describing the constraint on one dimension.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MeasureSpec {
    /// Constraint mode
    pub mode: MeasureMode,
    /// Target size in pixels, never negative
    pub size: i32,
}

impl MeasureSpec {
    /// Create a spec. Negative sizes clamp to zero.
    #[must_use]
    pub const fn new(mode: MeasureMode, size: i32) -> Self {
        let size = if size < 0 { 0 } else { size };
        Self { mode, size }
    }

    /// Exact size.
    #[must_use]
    pub const fn exactly(size: i32) -> Self {
        Self::new(MeasureMode::Exactly, size)
    }

    /// Upper bound.
    #[must_use]
    pub const fn at_most(size: i32) -> Self {
        Self::new(MeasureMode::AtMost, size)
    }

    /// No constraint.
    #[must_use]
    pub const fn unspecified(size: i32) -> Self {
        Self::new(MeasureMode::Unspecified, size)
    }

    /// Pack into a single word: two mode bits above a 30-bit size.
    ///
    /// Sizes beyond 30 bits are truncated, matching how hosts that exchange
    /// encoded specs behave.
    #[must_use]
    pub const fn to_bits(self) -> u32 {
        (self.mode.bits() << MODE_SHIFT) | (self.size as u32 & SIZE_MASK)
    }

    /// Unpack a word produced by [`MeasureSpec::to_bits`].
    ///
    /// The reserved mode value `3` is read as [`MeasureMode::Unspecified`].
    #[must_use]
    pub const fn from_bits(bits: u32) -> Self {
        let mode = match bits >> MODE_SHIFT {
            1 => MeasureMode::Exactly,
            2 => MeasureMode::AtMost,
            _ => MeasureMode::Unspecified,
        };
        Self::new(mode, (bits & SIZE_MASK) as i32)
    }
}

impl fmt::Display for MeasureSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mode = match self.mode {
            MeasureMode::Unspecified => "UNSPECIFIED",
            MeasureMode::Exactly => "EXACTLY",
            MeasureMode::AtMost => "AT_MOST",
        };
        write!(f, "{mode} {}", self.size)
    }
}

bitflags! {
    /// Per-dimension measurement outcome flags.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct MeasuredState: u8 {
        /// The resolved size is smaller than the size the view wanted.
        const TOO_SMALL = 0b01;
    }
}

impl Default for MeasuredState {
    fn default() -> Self {
        Self::empty()
    }
}

/// A resolved size for one dimension with its state flags.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MeasuredDimension {
    /// Resolved size
    pub size: i32,
    /// State flags
    pub state: MeasuredState,
}

impl MeasuredDimension {
    /// Create a resolved dimension.
    #[must_use]
    pub const fn new(size: i32, state: MeasuredState) -> Self {
        Self { size, state }
    }
}

/// The outcome of measuring a view in both dimensions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MeasuredSize {
    /// Width and its state
    pub width: MeasuredDimension,
    /// Height and its state
    pub height: MeasuredDimension,
}

impl MeasuredSize {
    /// Combine two resolved dimensions.
    #[must_use]
    pub const fn new(width: MeasuredDimension, height: MeasuredDimension) -> Self {
        Self { width, height }
    }

    /// A measurement that satisfied its constraints at the given size.
    #[must_use]
    pub const fn unclipped(size: Size) -> Self {
        Self::new(
            MeasuredDimension::new(size.width, MeasuredState::empty()),
            MeasuredDimension::new(size.height, MeasuredState::empty()),
        )
    }

    /// The resolved size without state.
    #[must_use]
    pub const fn size(&self) -> Size {
        Size::new(self.width.size, self.height.size)
    }

    /// Both dimensions' states.
    #[must_use]
    pub const fn states(&self) -> MeasuredStates {
        MeasuredStates {
            width: self.width.state,
            height: self.height.state,
        }
    }
}

/// Width and height states accumulated across children.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MeasuredStates {
    /// Width state
    pub width: MeasuredState,
    /// Height state
    pub height: MeasuredState,
}

/// Merge two sets of states. Flags are never cleared.
#[must_use]
pub fn combine_measured_states(current: MeasuredStates, child: MeasuredStates) -> MeasuredStates {
    MeasuredStates {
        width: current.width | child.width,
        height: current.height | child.height,
    }
}

/// Reconcile a desired size with a spec.
///
/// - `Exactly` forces the spec's size.
/// - `AtMost` caps the desired size, flagging [`MeasuredState::TOO_SMALL`]
///   when it had to clip.
/// - `Unspecified` keeps the desired size.
///
/// `child_state` is merged into the result unchanged.
#[must_use]
pub fn resolve_size_and_state(
    desired: i32,
    spec: MeasureSpec,
    child_state: MeasuredState,
) -> MeasuredDimension {
    let (size, state) = match spec.mode {
        MeasureMode::AtMost if spec.size < desired => (spec.size, MeasuredState::TOO_SMALL),
        MeasureMode::AtMost | MeasureMode::Unspecified => (desired, MeasuredState::empty()),
        MeasureMode::Exactly => (spec.size, MeasuredState::empty()),
    };
    MeasuredDimension::new(size, state | child_state)
}

/// Derive the spec a child receives for one dimension.
///
/// `padding` is everything the parent has already claimed on this axis (its
/// own padding plus the child's margins). `requested` is the child's layout
/// parameter for the dimension.
#[must_use]
pub fn child_measure_spec(parent: MeasureSpec, padding: i32, requested: Dimension) -> MeasureSpec {
    let available = parent.size.saturating_sub(padding).max(0);
    match (parent.mode, requested) {
        (_, Dimension::Exact(size)) => MeasureSpec::exactly(size),
        (MeasureMode::Exactly, Dimension::MatchParent) => MeasureSpec::exactly(available),
        (MeasureMode::Exactly | MeasureMode::AtMost, _) => MeasureSpec::at_most(available),
        (MeasureMode::Unspecified, _) => MeasureSpec::unspecified(available),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_spec_negative_size_clamps() {
        assert_eq!(MeasureSpec::exactly(-5).size, 0);
    }

    #[test]
    fn test_spec_bits_layout() {
        assert_eq!(MeasureSpec::unspecified(0).to_bits(), 0);
        assert_eq!(MeasureSpec::exactly(100).to_bits(), (1 << 30) | 100);
        assert_eq!(MeasureSpec::at_most(100).to_bits(), (2 << 30) | 100);
        assert_eq!(MeasureSpec::from_bits(3 << 30).mode, MeasureMode::Unspecified);
    }

    #[test]
    fn test_spec_display() {
        assert_eq!(MeasureSpec::at_most(320).to_string(), "AT_MOST 320");
        assert_eq!(MeasureSpec::exactly(1).to_string(), "EXACTLY 1");
    }

    #[test]
    fn test_resolve_exactly_ignores_desired() {
        let r = resolve_size_and_state(500, MeasureSpec::exactly(200), MeasuredState::empty());
        assert_eq!(r, MeasuredDimension::new(200, MeasuredState::empty()));
        let r = resolve_size_and_state(10, MeasureSpec::exactly(200), MeasuredState::empty());
        assert_eq!(r.size, 200);
    }

    #[test]
    fn test_resolve_at_most_clips_and_flags() {
        let r = resolve_size_and_state(500, MeasureSpec::at_most(200), MeasuredState::empty());
        assert_eq!(r, MeasuredDimension::new(200, MeasuredState::TOO_SMALL));
        let r = resolve_size_and_state(150, MeasureSpec::at_most(200), MeasuredState::empty());
        assert_eq!(r, MeasuredDimension::new(150, MeasuredState::empty()));
    }

    #[test]
    fn test_resolve_unspecified_keeps_desired() {
        let r = resolve_size_and_state(900, MeasureSpec::unspecified(10), MeasuredState::empty());
        assert_eq!(r.size, 900);
        assert!(r.state.is_empty());
    }

    #[test]
    fn test_resolve_merges_child_state() {
        let r = resolve_size_and_state(10, MeasureSpec::exactly(10), MeasuredState::TOO_SMALL);
        assert!(r.state.contains(MeasuredState::TOO_SMALL));
    }

    #[test]
    fn test_combine_states_is_or() {
        let a = MeasuredStates {
            width: MeasuredState::TOO_SMALL,
            height: MeasuredState::empty(),
        };
        let b = MeasuredStates {
            width: MeasuredState::empty(),
            height: MeasuredState::TOO_SMALL,
        };
        let c = combine_measured_states(a, b);
        assert_eq!(c.width, MeasuredState::TOO_SMALL);
        assert_eq!(c.height, MeasuredState::TOO_SMALL);
        assert_eq!(combine_measured_states(c, MeasuredStates::default()), c);
    }

    #[test]
    fn test_child_spec_exact_dimension_wins() {
        for parent in [
            MeasureSpec::exactly(100),
            MeasureSpec::at_most(100),
            MeasureSpec::unspecified(0),
        ] {
            assert_eq!(
                child_measure_spec(parent, 10, Dimension::Exact(300)),
                MeasureSpec::exactly(300)
            );
        }
    }

    #[test]
    fn test_child_spec_match_parent() {
        assert_eq!(
            child_measure_spec(MeasureSpec::exactly(100), 10, Dimension::MatchParent),
            MeasureSpec::exactly(90)
        );
        assert_eq!(
            child_measure_spec(MeasureSpec::at_most(100), 10, Dimension::MatchParent),
            MeasureSpec::at_most(90)
        );
        assert_eq!(
            child_measure_spec(MeasureSpec::unspecified(100), 10, Dimension::MatchParent),
            MeasureSpec::unspecified(90)
        );
    }

    #[test]
    fn test_child_spec_wrap_content() {
        assert_eq!(
            child_measure_spec(MeasureSpec::exactly(100), 30, Dimension::WrapContent),
            MeasureSpec::at_most(70)
        );
        assert_eq!(
            child_measure_spec(MeasureSpec::at_most(100), 30, Dimension::WrapContent),
            MeasureSpec::at_most(70)
        );
    }

    #[test]
    fn test_child_spec_padding_larger_than_parent() {
        assert_eq!(
            child_measure_spec(MeasureSpec::exactly(10), 40, Dimension::MatchParent),
            MeasureSpec::exactly(0)
        );
    }

    #[test]
    fn test_child_spec_extreme_padding_saturates() {
        assert_eq!(
            child_measure_spec(MeasureSpec::exactly(100), i32::MIN, Dimension::MatchParent),
            MeasureSpec::exactly(i32::MAX)
        );
        assert_eq!(
            child_measure_spec(MeasureSpec::at_most(0), i32::MAX, Dimension::WrapContent),
            MeasureSpec::at_most(0)
        );
    }

    proptest! {
        #[test]
        fn prop_spec_bits_roundtrip(size in 0i32..(1 << 30), mode in 0u8..3) {
            let mode = match mode {
                0 => MeasureMode::Unspecified,
                1 => MeasureMode::Exactly,
                _ => MeasureMode::AtMost,
            };
            let spec = MeasureSpec::new(mode, size);
            prop_assert_eq!(MeasureSpec::from_bits(spec.to_bits()), spec);
        }

        #[test]
        fn prop_at_most_never_exceeds_spec(desired in 0i32..10_000, limit in 0i32..10_000) {
            let r = resolve_size_and_state(
                desired,
                MeasureSpec::at_most(limit),
                MeasuredState::empty(),
            );
            prop_assert!(r.size <= limit);
            prop_assert_eq!(r.state.contains(MeasuredState::TOO_SMALL), desired > limit);
        }
    }
}
