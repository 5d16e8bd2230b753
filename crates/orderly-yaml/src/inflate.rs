//! Turning layout documents into view trees.

use crate::document::{LayoutDocument, NodeKind, NodeSpec};
use crate::error::InflateError;
use orderly_core::{AttributeSet, Block, Insets, Size, View};
use orderly_layout::{AreaOrdered, OrderedLayout, SquareOrdered, ViewGroup};
use serde_yaml_ng::Value;

const ATTRIBUTE_PREFIX: &str = "layout_";

/// Parse a layout document without inflating it.
pub fn parse_document(yaml: &str) -> Result<LayoutDocument, InflateError> {
    let document: LayoutDocument = serde_yaml_ng::from_str(yaml)?;
    if !(document.density.is_finite() && document.density > 0.0) {
        return Err(InflateError::InvalidDensity(document.density));
    }
    Ok(document)
}

/// Parse and inflate a layout document.
pub fn inflate_str(yaml: &str) -> Result<Box<dyn View>, InflateError> {
    inflate(&parse_document(yaml)?)
}

/// Inflate a parsed document into a view tree.
///
/// Every child's `layout_*` attributes are handed to its parent container,
/// which builds its own layout parameters from them. The root has no parent,
/// so its `layout_*` attributes are ignored.
pub fn inflate(document: &LayoutDocument) -> Result<Box<dyn View>, InflateError> {
    let root = &document.root;
    if !root.attributes.is_empty() {
        log::debug!("ignoring layout attributes on the root view");
    }
    build(root, document.density, "root")
}

fn build(node: &NodeSpec, density: f32, path: &str) -> Result<Box<dyn View>, InflateError> {
    if let Some(key) = node
        .attributes
        .keys()
        .find(|key| !key.starts_with(ATTRIBUTE_PREFIX))
    {
        return Err(InflateError::UnknownKey {
            path: path.to_string(),
            key: key.clone(),
        });
    }

    let view: Box<dyn View> = match node.kind {
        NodeKind::Block => Box::new(build_block(node, path)?),
        NodeKind::AreaOrdered => Box::new(build_group::<AreaOrdered>(node, density, path)?),
        NodeKind::SquareOrdered => Box::new(build_group::<SquareOrdered>(node, density, path)?),
    };
    Ok(view)
}

fn build_block(node: &NodeSpec, path: &str) -> Result<Block, InflateError> {
    if !node.children.is_empty() {
        return Err(InflateError::BlockWithChildren {
            path: path.to_string(),
        });
    }
    let [width, height] = node.content.ok_or_else(|| InflateError::MissingContent {
        path: path.to_string(),
    })?;
    if width < 0 || height < 0 {
        return Err(InflateError::InvalidValue {
            path: path.to_string(),
            key: "content".to_string(),
            message: "sizes must not be negative".to_string(),
        });
    }

    let mut block = Block::new(Size::new(width, height))
        .with_min_size(Size::new(node.min_width, node.min_height))
        .with_visibility(node.visibility);
    if let Some(id) = &node.id {
        block = block.with_id(id.clone());
    }
    Ok(block)
}

fn build_group<P: OrderedLayout>(
    node: &NodeSpec,
    density: f32,
    path: &str,
) -> Result<ViewGroup<P>, InflateError> {
    if node.content.is_some() {
        return Err(InflateError::InvalidValue {
            path: path.to_string(),
            key: "content".to_string(),
            message: "only blocks have a content size".to_string(),
        });
    }

    let mut group = ViewGroup::<P>::new()
        .with_padding(node.padding.map_or(Insets::ZERO, Insets::from))
        .with_min_size(Size::new(node.min_width, node.min_height))
        .with_visibility(node.visibility);
    if let Some(id) = &node.id {
        group = group.with_id(id.clone());
    }

    for (index, child) in node.children.iter().enumerate() {
        let child_path = format!("{path}.children[{index}]");
        let view = build(child, density, &child_path)?;
        let attrs = attribute_set(child, density, &child_path)?;
        let params = group
            .generate_layout_params(&attrs)
            .map_err(|source| InflateError::Attribute {
                path: child_path.clone(),
                source,
            })?;
        group.add_view(view, &params);
    }

    log::debug!(
        "inflated {} at {path} with {} children",
        P::NAME,
        node.children.len()
    );
    Ok(group)
}

fn attribute_set(node: &NodeSpec, density: f32, path: &str) -> Result<AttributeSet, InflateError> {
    let mut attrs = AttributeSet::new().with_density(density);
    for (key, value) in &node.attributes {
        let text = match value {
            Value::String(s) => s.clone(),
            Value::Number(n) => n.to_string(),
            other => {
                return Err(InflateError::InvalidValue {
                    path: path.to_string(),
                    key: key.clone(),
                    message: format!("expected a string or number, got {other:?}"),
                })
            }
        };
        attrs.insert(key.clone(), text);
    }
    Ok(attrs)
}
