//! Property resolution with fallback.
//!
//! A property is read from the component first. Only when the component has
//! no value is the fallback source consulted. Object-typed properties
//! (colours, lengths, borders) stay `None` when neither source has them;
//! primitive call sites supply a default through [`resolve_or`].

use super::{FromPropertyValue, PropertySource, PropertyValue};
use crate::logging::targets;
use crate::{Error, Result};

/// Resolve a property from `object`, falling back to `fallback` when unset.
///
/// # Example
///
/// ```
/// use trellis_style::prelude::*;
/// use trellis_style::property::resolve;
///
/// let theme = PropertyMap::new().with(names::FOREGROUND, Color::BLACK);
/// let button = Component::new(Capabilities::empty());
///
/// assert_eq!(
///     resolve(&button, names::FOREGROUND, Some(&theme)),
///     Some(PropertyValue::Color(Color::BLACK))
/// );
/// assert_eq!(resolve(&button, names::FOREGROUND, None), None);
/// ```
pub fn resolve<S: PropertySource + ?Sized>(
    object: &S,
    name: &str,
    fallback: Option<&dyn PropertySource>,
) -> Option<PropertyValue> {
    object
        .property(name)
        .or_else(|| fallback.and_then(|source| source.property(name)))
}

/// Resolve a property as `T`, failing on a value of another type.
pub fn try_resolve_as<T: FromPropertyValue, S: PropertySource + ?Sized>(
    object: &S,
    name: &str,
    fallback: Option<&dyn PropertySource>,
) -> Result<Option<T>> {
    let Some(value) = resolve(object, name, fallback) else {
        return Ok(None);
    };
    let found = value.type_name();
    T::from_value(value)
        .map(Some)
        .ok_or_else(|| Error::type_mismatch(name, T::TYPE_NAME, found))
}

/// Resolve a property as `T`, treating a value of another type as unset.
pub fn resolve_as<T: FromPropertyValue, S: PropertySource + ?Sized>(
    object: &S,
    name: &str,
    fallback: Option<&dyn PropertySource>,
) -> Option<T> {
    match try_resolve_as(object, name, fallback) {
        Ok(value) => value,
        Err(err) => {
            tracing::warn!(target: targets::PROPERTY, "Ignoring property: {}", err);
            None
        }
    }
}

/// Resolve a primitive property, using `default` when unset.
pub fn resolve_or<T: FromPropertyValue, S: PropertySource + ?Sized>(
    object: &S,
    name: &str,
    fallback: Option<&dyn PropertySource>,
    default: T,
) -> T {
    resolve_as(object, name, fallback).unwrap_or(default)
}

/// A component paired with its optional fallback source.
///
/// Renderers read every property through a lookup so the fallback rule is
/// applied uniformly.
#[derive(Clone, Copy)]
pub struct PropertyLookup<'a> {
    object: &'a dyn PropertySource,
    fallback: Option<&'a dyn PropertySource>,
}

impl<'a> PropertyLookup<'a> {
    /// Create a lookup.
    pub fn new(object: &'a dyn PropertySource, fallback: Option<&'a dyn PropertySource>) -> Self {
        Self { object, fallback }
    }

    /// See [`resolve`].
    pub fn get(&self, name: &str) -> Option<PropertyValue> {
        resolve(self.object, name, self.fallback)
    }

    /// See [`resolve_as`].
    pub fn get_as<T: FromPropertyValue>(&self, name: &str) -> Option<T> {
        resolve_as(self.object, name, self.fallback)
    }

    /// See [`try_resolve_as`].
    pub fn try_get_as<T: FromPropertyValue>(&self, name: &str) -> Result<Option<T>> {
        try_resolve_as(self.object, name, self.fallback)
    }

    /// See [`resolve_or`].
    pub fn get_or<T: FromPropertyValue>(&self, name: &str, default: T) -> T {
        resolve_or(self.object, name, self.fallback, default)
    }
}

impl std::fmt::Debug for PropertyLookup<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PropertyLookup")
            .field("has_fallback", &self.fallback.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::property::PropertyMap;
    use crate::types::{Color, Length};

    #[test]
    fn primary_wins_over_fallback() {
        let object = PropertyMap::new().with("foreground", Color::RED);
        let theme = PropertyMap::new().with("foreground", Color::BLUE);

        assert_eq!(
            resolve_as::<Color, _>(&object, "foreground", Some(&theme)),
            Some(Color::RED)
        );
    }

    #[test]
    fn fallback_used_only_when_unset() {
        let object = PropertyMap::new();
        let theme = PropertyMap::new().with("width", Length::px(10.0));

        assert_eq!(
            resolve_as::<Length, _>(&object, "width", Some(&theme)),
            Some(Length::px(10.0))
        );
        assert_eq!(resolve_as::<Length, _>(&object, "width", None), None);
    }

    #[test]
    fn primitive_default() {
        let object = PropertyMap::new();
        assert!(!resolve_or(&object, "hidden", None, false));
        assert_eq!(resolve_or(&object, "zIndex", None, -1), -1);

        let object = PropertyMap::new().with("hidden", true);
        assert!(resolve_or(&object, "hidden", None, false));
    }

    #[test]
    fn type_mismatch() {
        let object = PropertyMap::new().with("width", Color::RED);

        let err = try_resolve_as::<Length, _>(&object, "width", None).unwrap_err();
        assert_eq!(err, Error::type_mismatch("width", "Length", "Color"));
        assert_eq!(resolve_as::<Length, _>(&object, "width", None), None);
    }

    #[test]
    fn mismatched_primary_does_not_fall_back() {
        let object = PropertyMap::new().with("width", Color::RED);
        let theme = PropertyMap::new().with("width", Length::px(10.0));

        let lookup = PropertyLookup::new(&object, Some(&theme));
        assert_eq!(lookup.get_as::<Length>("width"), None);
        assert_eq!(
            lookup.try_get_as::<Length>("width"),
            Err(Error::type_mismatch("width", "Length", "Color"))
        );
        assert_eq!(lookup.try_get_as::<Length>("height"), Ok(None));
    }
}
