//! Turns property change notifications into patch commands.

use std::collections::HashSet;
use std::sync::Arc;

use super::{PartialUpdateRegistry, StyleCommands};
use crate::logging::targets;
use crate::property::{PropertySource, Renderable};
use crate::render::{ImageResolver, RenderContext, ResourceImageResolver};
use crate::style::{RenderOptions, StyleAttributes};

/// A set of properties that changed on one component.
pub struct UpdateEvent<'a> {
    object: &'a dyn Renderable,
    changed: HashSet<String>,
}

impl<'a> UpdateEvent<'a> {
    /// Create an event for `object` naming the changed properties.
    pub fn new<I, S>(object: &'a dyn Renderable, changed: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            object,
            changed: changed.into_iter().map(Into::into).collect(),
        }
    }

    /// The component that changed.
    pub fn object(&self) -> &'a dyn Renderable {
        self.object
    }

    /// The changed property names.
    pub fn changed(&self) -> &HashSet<String> {
        &self.changed
    }

    /// Check if a property is among the changed names.
    pub fn is_changed(&self, property: &str) -> bool {
        self.changed.contains(property)
    }
}

impl std::fmt::Debug for UpdateEvent<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UpdateEvent")
            .field("capabilities", &self.object.capabilities())
            .field("changed", &self.changed)
            .finish()
    }
}

/// Computes the minimal patch for an [`UpdateEvent`].
///
/// For every registered property in the event, visited in registry order:
///
/// - objects without the entry's capability are skipped
/// - a cleared property removes the attributes it owns
/// - otherwise the owning renderer is re-run against current state; owned
///   attributes it no longer produces are removed and every produced
///   attribute is set
///
/// Unregistered property names are ignored. The result depends only on the
/// event and current property state, so replaying an event yields the same
/// commands.
///
/// # Example
///
/// ```
/// use trellis_style::prelude::*;
///
/// let mut button = Component::new(Capabilities::MOUSE_CURSOR)
///     .with(names::MOUSE_CURSOR, MouseCursor::Pointer)
///     .with(names::MOUSE_CURSOR_URI, "hand.cur");
///
/// button.remove(names::MOUSE_CURSOR);
/// let event = UpdateEvent::new(&button, [names::MOUSE_CURSOR]);
/// let commands = UpdateDispatcher::new().dispatch(&event, None);
///
/// assert_eq!(commands.into_vec(), vec![StyleCommand::Remove { name: "cursor" }]);
/// ```
#[derive(Clone)]
pub struct UpdateDispatcher {
    registry: &'static PartialUpdateRegistry,
    options: RenderOptions,
    images: Arc<dyn ImageResolver + Send + Sync>,
}

impl UpdateDispatcher {
    /// Create a dispatcher over the global registry.
    pub fn new() -> Self {
        Self::with_registry(PartialUpdateRegistry::global())
    }

    /// Create a dispatcher over a specific registry.
    pub fn with_registry(registry: &'static PartialUpdateRegistry) -> Self {
        Self {
            registry,
            options: RenderOptions::default(),
            images: Arc::new(ResourceImageResolver::default()),
        }
    }

    /// Use the given render options.
    pub fn with_options(mut self, options: RenderOptions) -> Self {
        self.options = options;
        self
    }

    /// Use the given image resolver.
    pub fn with_image_resolver(
        mut self,
        images: impl ImageResolver + Send + Sync + 'static,
    ) -> Self {
        self.images = Arc::new(images);
        self
    }

    /// The registry in use.
    pub fn registry(&self) -> &'static PartialUpdateRegistry {
        self.registry
    }

    /// Compute the patch commands for `event`.
    pub fn dispatch(
        &self,
        event: &UpdateEvent<'_>,
        fallback: Option<&dyn PropertySource>,
    ) -> StyleCommands {
        let object = event.object();
        let capabilities = object.capabilities();
        let ctx = RenderContext::new(object, fallback, self.options, self.images.as_ref());
        let mut commands = StyleCommands::new();

        for name in event.changed() {
            if !self.registry.contains(name) {
                tracing::debug!(
                    target: targets::UPDATE,
                    property = %name,
                    "no partial update for property"
                );
            }
        }

        for entry in self.registry.entries() {
            if !event.is_changed(entry.property()) {
                continue;
            }
            if !entry.applies_to(capabilities) {
                tracing::trace!(
                    target: targets::UPDATE,
                    property = entry.property(),
                    "object lacks capability"
                );
                continue;
            }

            let value = ctx.props.get(entry.property());
            if entry.is_unset(value.as_ref()) && !entry.is_recompute() {
                for &attribute in entry.cleared_attributes() {
                    commands.remove(attribute);
                }
                continue;
            }

            let mut produced = StyleAttributes::new();
            (entry.renderer())(&ctx, &mut produced);
            for &attribute in entry.emits() {
                if !produced.contains(attribute) {
                    commands.remove(attribute);
                }
            }
            for attribute in produced.into_vec() {
                commands.set(attribute.name, attribute.value);
            }
        }

        tracing::debug!(
            target: targets::UPDATE,
            changed = event.changed().len(),
            commands = commands.len(),
            "dispatched update"
        );
        commands
    }
}

impl Default for UpdateDispatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for UpdateDispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UpdateDispatcher")
            .field("entries", &self.registry.len())
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}

static_assertions::assert_impl_all!(UpdateDispatcher: Send, Sync);
static_assertions::assert_impl_all!(RenderOptions: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::property::{Capabilities, Component, PropertyMap, names};
    use crate::types::{
        Border, BorderSide, BorderStyle, Color, FillImage, FloatSide, ImageRef, ImageRepeat,
        Insets, Length, MouseCursor, PositionMode, Z_INDEX_UNSET,
    };
    use crate::update::StyleCommand;

    fn set(name: &'static str, value: &str) -> StyleCommand {
        StyleCommand::Set {
            name,
            value: value.to_string(),
        }
    }

    fn remove(name: &'static str) -> StyleCommand {
        StyleCommand::Remove { name }
    }

    fn dispatch(object: &Component, changed: &[&str]) -> Vec<StyleCommand> {
        let event = UpdateEvent::new(object, changed.iter().copied());
        UpdateDispatcher::new().dispatch(&event, None).into_vec()
    }

    #[test]
    fn unregistered_names_are_ignored() {
        let object = Component::new(Capabilities::all()).with(names::FOREGROUND, Color::RED);
        assert!(dispatch(&object, &[names::FOREGROUND, "text"]).is_empty());
    }

    #[test]
    fn missing_capability_is_ignored() {
        let object = Component::new(Capabilities::HEIGHT).with(names::WIDTH, Length::px(10.0));
        assert!(dispatch(&object, &[names::WIDTH]).is_empty());
    }

    #[test]
    fn set_and_clear_width() {
        let mut object = Component::new(Capabilities::SCROLL).with(names::WIDTH, Length::px(10.0));
        assert_eq!(dispatch(&object, &[names::WIDTH]), vec![set("width", "10px")]);

        object.remove(names::WIDTH);
        assert_eq!(dispatch(&object, &[names::WIDTH]), vec![remove("width")]);
    }

    #[test]
    fn cleared_border_removes_shorthand_only() {
        let object = Component::new(Capabilities::BORDER);
        assert_eq!(
            dispatch(&object, &[names::BORDER]),
            vec![remove("border-width"), remove("border-color"), remove("border-style")]
        );
    }

    #[test]
    fn per_side_border_drops_stale_shorthand() {
        let side = BorderSide::new(Length::px(1.0), Color::RED, BorderStyle::Solid);
        let mut border = Border::uniform(side);
        border.top = None;
        border.right = None;
        border.bottom = None;
        let object = Component::new(Capabilities::BORDER).with(names::BORDER, border);

        let commands = dispatch(&object, &[names::BORDER]);
        assert_eq!(
            &commands[..3],
            &[remove("border-width"), remove("border-color"), remove("border-style")]
        );
        assert!(commands.contains(&set("border-left-width", "1px")));
        assert!(commands.contains(&remove("border-top-width")));
    }

    #[test]
    fn cleared_offset_removes_one_attribute() {
        let object =
            Component::new(Capabilities::POSITION).with(names::POSITION, PositionMode::Fixed);
        assert_eq!(dispatch(&object, &[names::LEFT]), vec![remove("left")]);
    }

    #[test]
    fn z_index_sentinel_clears() {
        let object = Component::new(Capabilities::POSITION)
            .with(names::POSITION, PositionMode::Relative)
            .with(names::Z_INDEX, Z_INDEX_UNSET);
        assert_eq!(dispatch(&object, &[names::Z_INDEX]), vec![remove("z-index")]);
    }

    #[test]
    fn changed_offset_rerenders_position() {
        let object = Component::new(Capabilities::POSITION)
            .with(names::POSITION, PositionMode::Absolute)
            .with(names::TOP, Length::px(5.0));

        assert_eq!(
            dispatch(&object, &[names::TOP]),
            vec![
                remove("left"),
                remove("right"),
                remove("bottom"),
                remove("z-index"),
                set("position", "absolute"),
                set("top", "5px"),
            ]
        );
    }

    #[test]
    fn float_none_removes_float() {
        let object = Component::new(Capabilities::FLOAT).with(names::FLOAT, FloatSide::None);
        assert_eq!(dispatch(&object, &[names::FLOAT]), vec![remove("float"), remove("clear")]);
    }

    #[test]
    fn cursor_recomputes() {
        let mut object = Component::new(Capabilities::MOUSE_CURSOR)
            .with(names::MOUSE_CURSOR, MouseCursor::CustomUri)
            .with(names::MOUSE_CURSOR_URI, "a.cur");
        assert_eq!(
            dispatch(&object, &[names::MOUSE_CURSOR_URI]),
            vec![set("cursor", "uri(a.cur)")]
        );

        object.remove(names::MOUSE_CURSOR_URI);
        assert_eq!(dispatch(&object, &[names::MOUSE_CURSOR_URI]), vec![remove("cursor")]);

        object.set(names::MOUSE_CURSOR, MouseCursor::Wait);
        assert_eq!(
            dispatch(&object, &[names::MOUSE_CURSOR, names::MOUSE_CURSOR_URI]),
            vec![set("cursor", "wait")]
        );
    }

    #[test]
    fn fallback_value_is_not_cleared() {
        let object = Component::new(Capabilities::WIDTH);
        let theme = PropertyMap::new().with(names::WIDTH, Length::px(8.0));
        let event = UpdateEvent::new(&object, [names::WIDTH]);

        let commands = UpdateDispatcher::new().dispatch(&event, Some(&theme));
        assert_eq!(commands.into_vec(), vec![set("width", "8px")]);
    }

    #[test]
    fn registry_order_not_event_order() {
        let object = Component::new(Capabilities::WIDTH | Capabilities::HEIGHT)
            .with(names::WIDTH, Length::px(1.0))
            .with(names::HEIGHT, Length::px(2.0));

        let forward = dispatch(&object, &[names::WIDTH, names::HEIGHT]);
        let backward = dispatch(&object, &[names::HEIGHT, names::WIDTH]);
        assert_eq!(forward, backward);
        assert_eq!(forward, vec![set("width", "1px"), set("height", "2px")]);
    }

    #[test]
    fn insets_change_leaves_margin_alone() {
        let object = Component::new(Capabilities::INSETS)
            .with(names::INSETS, Insets::uniform(Length::px(2.0)))
            .with(names::OUTSETS, Insets::uniform(Length::px(6.0)));

        assert_eq!(dispatch(&object, &[names::INSETS]), vec![set("padding", "2px")]);
        assert_eq!(dispatch(&object, &[names::OUTSETS]), vec![set("margin", "6px")]);
    }

    #[test]
    fn static_position_removes_every_position_attribute() {
        let object = Component::new(Capabilities::POSITION)
            .with(names::POSITION, PositionMode::Static)
            .with(names::LEFT, Length::px(10.0))
            .with(names::TOP, Length::px(5.0))
            .with(names::Z_INDEX, 2);

        assert_eq!(
            dispatch(&object, &[names::POSITION]),
            vec![
                remove("position"),
                remove("left"),
                remove("top"),
                remove("right"),
                remove("bottom"),
                remove("z-index"),
            ]
        );
    }

    #[test]
    fn cleared_clear_removes_only_clear() {
        let object = Component::new(Capabilities::FLOAT).with(names::FLOAT, FloatSide::Left);
        assert_eq!(dispatch(&object, &[names::CLEAR]), vec![remove("clear")]);
    }

    #[test]
    fn cleared_background_removes_all_three() {
        let object = Component::new(Capabilities::BACKGROUND_IMAGE);
        assert_eq!(
            dispatch(&object, &[names::BACKGROUND_IMAGE]),
            vec![
                remove("background-image"),
                remove("background-position"),
                remove("background-repeat"),
            ]
        );
    }

    #[test]
    fn unresolved_background_removes_all_three() {
        let object = Component::new(Capabilities::BACKGROUND_IMAGE).with(
            names::BACKGROUND_IMAGE,
            FillImage::new(ImageRef::resource("gone.png")).with_repeat(ImageRepeat::NoRepeat),
        );
        let event = UpdateEvent::new(&object, [names::BACKGROUND_IMAGE]);

        let dispatcher = UpdateDispatcher::new()
            .with_image_resolver(|_: &ImageRef| -> Option<String> { None });
        assert_eq!(
            dispatcher.dispatch(&event, None).into_vec(),
            vec![
                remove("background-image"),
                remove("background-position"),
                remove("background-repeat"),
            ]
        );

        let resolved = UpdateDispatcher::new().dispatch(&event, None).into_vec();
        assert_eq!(
            resolved,
            vec![
                remove("background-position"),
                set("background-image", "url(gone.png)"),
                set("background-repeat", "no-repeat"),
            ]
        );
    }

    #[test]
    fn dispatcher_uses_global_registry() {
        let dispatcher = UpdateDispatcher::default();
        assert!(std::ptr::eq(dispatcher.registry(), PartialUpdateRegistry::global()));

        let entry = dispatcher.registry().get(names::HEIGHT).unwrap();
        assert_eq!(entry.capabilities(), Capabilities::HEIGHT | Capabilities::SCROLL);
    }
}
