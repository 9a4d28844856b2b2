//! Patch commands consumed by the host's DOM writer.

use std::fmt;

use crate::logging::targets;

/// One change to apply to already-rendered style attributes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StyleCommand {
    /// Set an attribute to a value.
    Set {
        /// CSS property name.
        name: &'static str,
        /// New value.
        value: String,
    },
    /// Remove an attribute.
    Remove {
        /// CSS property name.
        name: &'static str,
    },
}

impl StyleCommand {
    /// The attribute this command targets.
    pub fn name(&self) -> &'static str {
        match self {
            StyleCommand::Set { name, .. } | StyleCommand::Remove { name } => *name,
        }
    }

    /// Check if this is a removal.
    pub fn is_remove(&self) -> bool {
        matches!(self, StyleCommand::Remove { .. })
    }
}

impl fmt::Display for StyleCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StyleCommand::Set { name, value } => write!(f, "SET {}: {}", name, value),
            StyleCommand::Remove { name } => write!(f, "REMOVE {}", name),
        }
    }
}

/// Ordered, name-unique list of patch commands.
///
/// A later command for an attribute replaces the earlier one in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyleCommands {
    commands: Vec<StyleCommand>,
}

impl StyleCommands {
    /// Create an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a SET command.
    pub fn set(&mut self, name: &'static str, value: impl Into<String>) {
        self.push(StyleCommand::Set {
            name,
            value: value.into(),
        });
    }

    /// Add a REMOVE command.
    pub fn remove(&mut self, name: &'static str) {
        self.push(StyleCommand::Remove { name });
    }

    /// Add a command, replacing any earlier command for the same attribute.
    pub fn push(&mut self, command: StyleCommand) {
        tracing::trace!(target: targets::UPDATE, %command, "patch command");
        match self
            .commands
            .iter_mut()
            .find(|existing| existing.name() == command.name())
        {
            Some(existing) => *existing = command,
            None => self.commands.push(command),
        }
    }

    /// Get the command for an attribute.
    pub fn get(&self, name: &str) -> Option<&StyleCommand> {
        self.commands.iter().find(|command| command.name() == name)
    }

    /// Number of commands.
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Check if there are no commands.
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Iterate over commands in order.
    pub fn iter(&self) -> std::slice::Iter<'_, StyleCommand> {
        self.commands.iter()
    }

    /// Consume into the underlying list.
    pub fn into_vec(self) -> Vec<StyleCommand> {
        self.commands
    }
}

impl<'a> IntoIterator for &'a StyleCommands {
    type Item = &'a StyleCommand;
    type IntoIter = std::slice::Iter<'a, StyleCommand>;

    fn into_iter(self) -> Self::IntoIter {
        self.commands.iter()
    }
}

impl IntoIterator for StyleCommands {
    type Item = StyleCommand;
    type IntoIter = std::vec::IntoIter<StyleCommand>;

    fn into_iter(self) -> Self::IntoIter {
        self.commands.into_iter()
    }
}
