//! Ordered, name-unique attribute list.

use std::fmt;

use crate::logging::targets;
use crate::update::{StyleCommand, StyleCommands};

/// A single style attribute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleAttribute {
    /// CSS property name.
    pub name: &'static str,
    /// Attribute value.
    pub value: String,
}

/// Attributes accumulated by one render call.
///
/// Names are unique and insertion order is preserved. Setting a name that is
/// already present replaces its value in place, so the attribute keeps the
/// position of its first insertion.
///
/// # Example
///
/// ```
/// use trellis_style::style::StyleAttributes;
///
/// let mut attrs = StyleAttributes::new();
/// attrs.set("width", "10px");
/// attrs.set("height", "5px");
/// attrs.set("width", "20px");
///
/// assert_eq!(attrs.to_css(), "width: 20px; height: 5px");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyleAttributes {
    entries: Vec<StyleAttribute>,
}

impl StyleAttributes {
    /// Create an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set an attribute. The last write for a name wins.
    pub fn set(&mut self, name: &'static str, value: impl Into<String>) {
        let value = value.into();
        tracing::trace!(target: targets::COMPOSE, name, value = %value, "set attribute");
        match self.entries.iter_mut().find(|attr| attr.name == name) {
            Some(existing) => existing.value = value,
            None => self.entries.push(StyleAttribute { name, value }),
        }
    }

    /// Remove an attribute, returning its value.
    pub fn remove(&mut self, name: &str) -> Option<String> {
        let index = self.entries.iter().position(|attr| attr.name == name)?;
        Some(self.entries.remove(index).value)
    }

    /// Get the value of an attribute.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|attr| attr.name == name)
            .map(|attr| attr.value.as_str())
    }

    /// Check if an attribute is present.
    pub fn contains(&self, name: &str) -> bool {
        self.entries.iter().any(|attr| attr.name == name)
    }

    /// Number of attributes.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if there are no attributes.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over attributes in order.
    pub fn iter(&self) -> std::slice::Iter<'_, StyleAttribute> {
        self.entries.iter()
    }

    /// Attribute names in order.
    pub fn names(&self) -> Vec<&'static str> {
        self.entries.iter().map(|attr| attr.name).collect()
    }

    /// Append every attribute of `other`, with the usual overwrite rule.
    pub fn extend(&mut self, other: StyleAttributes) {
        for attr in other.entries {
            self.set(attr.name, attr.value);
        }
    }

    /// Apply a patch produced by the update dispatcher.
    pub fn apply(&mut self, commands: &StyleCommands) {
        for command in commands {
            match command {
                StyleCommand::Set { name, value } => self.set(*name, value.clone()),
                StyleCommand::Remove { name } => {
                    self.remove(name);
                }
            }
        }
    }

    /// Render as an inline style string (`name: value; name: value`).
    pub fn to_css(&self) -> String {
        self.to_string()
    }

    /// Consume into the underlying list.
    pub fn into_vec(self) -> Vec<StyleAttribute> {
        self.entries
    }
}

impl fmt::Display for StyleAttributes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, attr) in self.entries.iter().enumerate() {
            if index > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{}: {}", attr.name, attr.value)?;
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a StyleAttributes {
    type Item = &'a StyleAttribute;
    type IntoIter = std::slice::Iter<'a, StyleAttribute>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
