//! The table of properties that support partial updates.

use std::collections::HashMap;
use std::sync::OnceLock;

use crate::logging::targets;
use crate::property::{Capabilities, PropertyValue, names};
use crate::render::{
    BORDER_ATTRIBUTES, CapabilityRenderer, POSITION_ATTRIBUTES, SHORTHAND_ATTRIBUTES,
    render_align, render_background_image, render_border, render_cursor, render_float,
    render_height, render_margin, render_padding, render_position, render_width,
};
use crate::types::Z_INDEX_UNSET;
use crate::{Error, Result};

/// Default registry, built on first use.
static GLOBAL_REGISTRY: OnceLock<PartialUpdateRegistry> = OnceLock::new();

/// How to patch the attributes of one property.
#[derive(Clone)]
pub struct RegistryEntry {
    property: &'static str,
    capabilities: Capabilities,
    renderer: CapabilityRenderer,
    emits: &'static [&'static str],
    clears: &'static [&'static str],
    recompute: bool,
    unset_value: Option<PropertyValue>,
}

impl RegistryEntry {
    /// Create an entry.
    ///
    /// `capabilities` is the mask an object must intersect for the entry to
    /// apply. `emits` lists every attribute `renderer` can produce; by
    /// default a cleared property removes all of them.
    pub fn new(
        property: &'static str,
        capabilities: Capabilities,
        renderer: CapabilityRenderer,
        emits: &'static [&'static str],
    ) -> Self {
        Self {
            property,
            capabilities,
            renderer,
            emits,
            clears: emits,
            recompute: false,
            unset_value: None,
        }
    }

    /// Limit the attributes removed when the property is cleared.
    pub fn clears(mut self, attributes: &'static [&'static str]) -> Self {
        self.clears = attributes;
        self
    }

    /// Re-run the renderer even when the property is cleared.
    pub fn recompute(mut self) -> Self {
        self.recompute = true;
        self
    }

    /// Treat `value` as a cleared property.
    pub fn unset_when(mut self, value: impl Into<PropertyValue>) -> Self {
        self.unset_value = Some(value.into());
        self
    }

    /// The property name.
    pub fn property(&self) -> &'static str {
        self.property
    }

    /// The capability mask.
    pub fn capabilities(&self) -> Capabilities {
        self.capabilities
    }

    /// The renderer to re-run.
    pub fn renderer(&self) -> CapabilityRenderer {
        self.renderer
    }

    /// Every attribute the renderer can produce.
    pub fn emits(&self) -> &'static [&'static str] {
        self.emits
    }

    /// Attributes removed when the property is cleared.
    pub fn cleared_attributes(&self) -> &'static [&'static str] {
        self.clears
    }

    /// Check if the renderer is re-run on clear.
    pub fn is_recompute(&self) -> bool {
        self.recompute
    }

    /// Check if an object with `capabilities` is affected.
    pub fn applies_to(&self, capabilities: Capabilities) -> bool {
        self.capabilities.intersects(capabilities)
    }

    /// Check if a resolved value counts as cleared.
    pub fn is_unset(&self, value: Option<&PropertyValue>) -> bool {
        match value {
            None => true,
            Some(value) => self.unset_value.as_ref() == Some(value),
        }
    }
}

impl std::fmt::Debug for RegistryEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RegistryEntry")
            .field("property", &self.property)
            .field("capabilities", &self.capabilities)
            .field("emits", &self.emits)
            .field("clears", &self.clears)
            .field("recompute", &self.recompute)
            .finish_non_exhaustive()
    }
}

/// Immutable table mapping property names to their patch entries.
///
/// Entries keep their registration order, which is also the order the
/// dispatcher visits them in.
#[derive(Debug, Clone, Default)]
pub struct PartialUpdateRegistry {
    entries: Vec<RegistryEntry>,
    index: HashMap<&'static str, usize>,
}

impl PartialUpdateRegistry {
    /// Start building a registry.
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::default()
    }

    /// The shared default registry.
    pub fn global() -> &'static PartialUpdateRegistry {
        GLOBAL_REGISTRY.get_or_init(Self::standard)
    }

    /// Build the default table.
    pub fn standard() -> Self {
        const OFFSETS: [(&str, &[&str]); 4] = [
            (names::LEFT, &["left"]),
            (names::TOP, &["top"]),
            (names::RIGHT, &["right"]),
            (names::BOTTOM, &["bottom"]),
        ];
        const CURSOR: &[&str] = &["cursor"];
        const FLOAT: &[&str] = &["float", "clear"];
        const BACKGROUND: &[&str] = &[
            "background-image",
            "background-position",
            "background-repeat",
        ];

        let position = |property: &'static str| {
            RegistryEntry::new(
                property,
                Capabilities::POSITION,
                render_position,
                &POSITION_ATTRIBUTES,
            )
        };
        let cursor = |property: &'static str| {
            RegistryEntry::new(property, Capabilities::MOUSE_CURSOR, render_cursor, CURSOR)
                .recompute()
        };
        let float = |property: &'static str, attribute: &'static [&'static str]| {
            RegistryEntry::new(property, Capabilities::FLOAT, render_float, FLOAT).clears(attribute)
        };

        let mut builder = Self::builder()
            .entry(
                RegistryEntry::new(
                    names::BORDER,
                    Capabilities::BORDER,
                    render_border,
                    &BORDER_ATTRIBUTES,
                )
                .clears(&SHORTHAND_ATTRIBUTES),
            )
            .entry(RegistryEntry::new(
                names::INSETS,
                Capabilities::INSETS,
                render_padding,
                &["padding"],
            ))
            .entry(RegistryEntry::new(
                names::OUTSETS,
                Capabilities::INSETS,
                render_margin,
                &["margin"],
            ))
            .entry(position(names::POSITION));
        for (property, attribute) in OFFSETS {
            builder = builder.entry(position(property).clears(attribute));
        }

        let result = builder
            .entry(
                position(names::Z_INDEX)
                    .clears(&["z-index"])
                    .unset_when(Z_INDEX_UNSET),
            )
            .entry(RegistryEntry::new(
                names::WIDTH,
                Capabilities::WIDTH | Capabilities::SCROLL,
                render_width,
                &["width"],
            ))
            .entry(RegistryEntry::new(
                names::HEIGHT,
                Capabilities::HEIGHT | Capabilities::SCROLL,
                render_height,
                &["height"],
            ))
            .entry(cursor(names::MOUSE_CURSOR))
            .entry(cursor(names::MOUSE_CURSOR_URI))
            .entry(RegistryEntry::new(
                names::ALIGNMENT,
                Capabilities::ALIGN,
                render_align,
                &["text-align", "vertical-align"],
            ))
            .entry(float(names::FLOAT, &["float"]))
            .entry(float(names::CLEAR, &["clear"]))
            .entry(RegistryEntry::new(
                names::BACKGROUND_IMAGE,
                Capabilities::BACKGROUND_IMAGE,
                render_background_image,
                BACKGROUND,
            ))
            .build();

        match result {
            Ok(registry) => registry,
            Err(err) => {
                tracing::error!(target: targets::UPDATE, "Invalid default registry: {}", err);
                Self::default()
            }
        }
    }

    /// Get the entry for a property.
    pub fn get(&self, property: &str) -> Option<&RegistryEntry> {
        self.index.get(property).map(|&i| &self.entries[i])
    }

    /// Check if a property is registered.
    pub fn contains(&self, property: &str) -> bool {
        self.index.contains_key(property)
    }

    /// Entries in registration order.
    pub fn entries(&self) -> &[RegistryEntry] {
        &self.entries
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if there are no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Builder for [`PartialUpdateRegistry`].
#[derive(Debug, Default)]
pub struct RegistryBuilder {
    entries: Vec<RegistryEntry>,
}

impl RegistryBuilder {
    /// Add an entry.
    pub fn entry(mut self, entry: RegistryEntry) -> Self {
        self.entries.push(entry);
        self
    }

    /// Finish, rejecting a property registered twice.
    pub fn build(self) -> Result<PartialUpdateRegistry> {
        let mut index = HashMap::with_capacity(self.entries.len());
        for (i, entry) in self.entries.iter().enumerate() {
            if index.insert(entry.property, i).is_some() {
                return Err(Error::duplicate_registration(entry.property));
            }
        }
        Ok(PartialUpdateRegistry {
            entries: self.entries,
            index,
        })
    }
}

static_assertions::assert_impl_all!(PartialUpdateRegistry: Send, Sync);
