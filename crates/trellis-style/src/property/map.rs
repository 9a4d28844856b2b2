//! In-memory property stores.

use std::collections::HashMap;

use super::{Capabilities, PropertySource, PropertyValue, Renderable};

/// A named set of property values.
///
/// Serves as a theme-style fallback source, or as the property storage of a
/// [`Component`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PropertyMap {
    values: HashMap<String, PropertyValue>,
}

impl PropertyMap {
    /// Create an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a property, returning the previous value.
    pub fn set(
        &mut self,
        name: impl Into<String>,
        value: impl Into<PropertyValue>,
    ) -> Option<PropertyValue> {
        self.values.insert(name.into(), value.into())
    }

    /// Set a property (builder form).
    pub fn with(mut self, name: impl Into<String>, value: impl Into<PropertyValue>) -> Self {
        self.set(name, value);
        self
    }

    /// Remove a property, returning its value.
    pub fn remove(&mut self, name: &str) -> Option<PropertyValue> {
        self.values.remove(name)
    }

    /// Get a property value.
    pub fn get(&self, name: &str) -> Option<&PropertyValue> {
        self.values.get(name)
    }

    /// Check if a property is set.
    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    /// Iterate over all properties.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &PropertyValue)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Number of properties set.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if no property is set.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl PropertySource for PropertyMap {
    fn property(&self, name: &str) -> Option<PropertyValue> {
        self.values.get(name).cloned()
    }
}

/// A renderable component backed by a [`PropertyMap`].
///
/// # Example
///
/// ```
/// use trellis_style::prelude::*;
///
/// let label = Component::new(Capabilities::BORDER | Capabilities::SIZE)
///     .with(names::WIDTH, Length::px(120.0));
///
/// assert!(label.has_capability(Capabilities::WIDTH));
/// assert!(!label.has_capability(Capabilities::SCROLL));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Component {
    capabilities: Capabilities,
    properties: PropertyMap,
}

impl Component {
    /// Create a component with no properties.
    pub fn new(capabilities: Capabilities) -> Self {
        Self {
            capabilities,
            properties: PropertyMap::new(),
        }
    }

    /// Set a property (builder form).
    pub fn with(mut self, name: impl Into<String>, value: impl Into<PropertyValue>) -> Self {
        self.properties.set(name, value);
        self
    }

    /// Set a property, returning the previous value.
    pub fn set(
        &mut self,
        name: impl Into<String>,
        value: impl Into<PropertyValue>,
    ) -> Option<PropertyValue> {
        self.properties.set(name, value)
    }

    /// Remove a property, returning its value.
    pub fn remove(&mut self, name: &str) -> Option<PropertyValue> {
        self.properties.remove(name)
    }

    /// The underlying property map.
    pub fn properties(&self) -> &PropertyMap {
        &self.properties
    }
}

impl PropertySource for Component {
    fn property(&self, name: &str) -> Option<PropertyValue> {
        self.properties.property(name)
    }
}

impl Renderable for Component {
    fn capabilities(&self) -> Capabilities {
        self.capabilities
    }
}
