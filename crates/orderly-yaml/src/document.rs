//! YAML layout document types.
//!
//! ```yaml
//! density: 2.0
//! root:
//!   type: area_ordered
//!   padding: 8
//!   children:
//!     - type: block
//!       id: banner
//!       content: [320, 48]
//!       layout_width: wrap_content
//!       layout_height: wrap_content
//!       layout_margin_bottom: 4dp
//! ```

use orderly_core::{Insets, Visibility};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A layout document loaded from YAML.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayoutDocument {
    /// dp-to-pixel density applied to `dp` attribute values
    #[serde(default = "default_density")]
    pub density: f32,
    /// Root view
    pub root: NodeSpec,
}

fn default_density() -> f32 {
    1.0
}

/// What kind of view a node inflates to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeKind {
    /// Area-ordered container
    AreaOrdered,
    /// Square-ordered container
    SquareOrdered,
    /// Leaf view with a fixed content size
    Block,
}

/// Padding as one value for every edge or as `[left, top, right, bottom]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PaddingSpec {
    /// Same padding on every edge
    Uniform(i32),
    /// Left, top, right, bottom
    Edges([i32; 4]),
}

impl From<PaddingSpec> for Insets {
    fn from(spec: PaddingSpec) -> Self {
        match spec {
            PaddingSpec::Uniform(value) => Self::uniform(value),
            PaddingSpec::Edges([left, top, right, bottom]) => Self::new(left, top, right, bottom),
        }
    }
}

/// One view in a layout document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NodeSpec {
    /// View kind
    #[serde(rename = "type")]
    pub kind: NodeKind,
    /// View id
    #[serde(default)]
    pub id: Option<String>,
    /// Initial visibility
    #[serde(default)]
    pub visibility: Visibility,
    /// Container padding
    #[serde(default)]
    pub padding: Option<PaddingSpec>,
    /// Suggested minimum width
    #[serde(default)]
    pub min_width: i32,
    /// Suggested minimum height
    #[serde(default)]
    pub min_height: i32,
    /// Content size `[width, height]`, blocks only
    #[serde(default)]
    pub content: Option<[i32; 2]>,
    /// Child views, containers only
    #[serde(default)]
    pub children: Vec<NodeSpec>,
    /// Remaining keys; `layout_*` entries become inflation attributes
    #[serde(flatten)]
    pub attributes: BTreeMap<String, serde_yaml_ng::Value>,
}
