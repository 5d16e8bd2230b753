//! Inflation attributes.
//!
//! Layout documents describe each child with string-valued attributes such as
//! `layout_width: wrap_content` or `layout_margin_top: 8dp`. An
//! [`AttributeSet`] holds them for the parent container, which turns them into
//! its own layout parameters.

use crate::params::Dimension;
use std::collections::BTreeMap;
use thiserror::Error;

/// Error reading an inflation attribute.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AttributeError {
    /// A required attribute is absent.
    #[error("missing required attribute '{0}'")]
    Missing(String),
    /// An attribute value could not be parsed.
    #[error("invalid value '{value}' for attribute '{name}'")]
    Invalid {
        /// Attribute name
        name: String,
        /// Raw value
        value: String,
    },
}

/// String-valued attributes for one view, plus the dp-to-pixel density.
#[derive(Debug, Clone, PartialEq)]
pub struct AttributeSet {
    values: BTreeMap<String, String>,
    density: f32,
}

impl Default for AttributeSet {
    fn default() -> Self {
        Self::new()
    }
}

impl AttributeSet {
    /// Create an empty set at density 1.0.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            values: BTreeMap::new(),
            density: 1.0,
        }
    }

    /// Set the dp-to-pixel density.
    #[must_use]
    pub const fn with_density(mut self, density: f32) -> Self {
        self.density = density;
        self
    }

    /// Add an attribute.
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(name, value);
        self
    }

    /// Insert or replace an attribute.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.values.insert(name.into(), value.into());
    }

    /// Raw value of an attribute.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    /// Attribute names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    /// Number of attributes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if there are no attributes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// dp-to-pixel density.
    #[must_use]
    pub const fn density(&self) -> f32 {
        self.density
    }

    /// Read an optional dimension: `match_parent`, `fill_parent`,
    /// `wrap_content`, or a non-negative pixel size.
    pub fn dimension(&self, name: &str) -> Result<Option<Dimension>, AttributeError> {
        let Some(raw) = self.get(name) else {
            return Ok(None);
        };
        let dimension = match raw.trim() {
            "match_parent" | "fill_parent" => Dimension::MatchParent,
            "wrap_content" => Dimension::WrapContent,
            other => match self.parse_pixels(other) {
                Some(px) if px >= 0 => Dimension::Exact(px),
                _ => return Err(invalid(name, raw)),
            },
        };
        Ok(Some(dimension))
    }

    /// Read a dimension that must be present.
    pub fn required_dimension(&self, name: &str) -> Result<Dimension, AttributeError> {
        self.dimension(name)?
            .ok_or_else(|| AttributeError::Missing(name.to_string()))
    }

    /// Read an optional pixel offset: `12`, `12px` or `8dp`. Negative values
    /// are allowed.
    pub fn pixels(&self, name: &str) -> Result<Option<i32>, AttributeError> {
        self.get(name)
            .map(|raw| self.parse_pixels(raw.trim()).ok_or_else(|| invalid(name, raw)))
            .transpose()
    }

    fn parse_pixels(&self, raw: &str) -> Option<i32> {
        if let Some(dp) = raw.strip_suffix("dp") {
            let value: f32 = dp.trim().parse().ok()?;
            return value
                .is_finite()
                .then(|| (value * self.density).round() as i32);
        }
        raw.strip_suffix("px").unwrap_or(raw).trim().parse().ok()
    }
}

fn invalid(name: &str, value: &str) -> AttributeError {
    AttributeError::Invalid {
        name: name.to_string(),
        value: value.to_string(),
    }
}
