//! Incremental style updates.
//!
//! When only a few properties of an already-rendered component change, the
//! [`UpdateDispatcher`] re-runs just the renderers responsible for them and
//! emits [`StyleCommand`]s instead of a full attribute list. Which properties
//! can be patched this way is fixed by a [`PartialUpdateRegistry`]; changes
//! to any other property need a full render and are ignored here.

mod command;
mod dispatcher;
mod registry;

pub use command::{StyleCommand, StyleCommands};
pub use dispatcher::{UpdateDispatcher, UpdateEvent};
pub use registry::{PartialUpdateRegistry, RegistryBuilder, RegistryEntry};
