//! Test fixtures for plugin manager scenarios.
//!
//! A tiny `Label` contract with two conforming plugins and one value that
//! does not conform, plus factories that fail in known ways.

use crate::manager::{Factory, Implements, Instance, PluginId, PluginTable};

/// Minimal contract used by manager tests.
pub trait Label: Send {
    fn label(&self) -> &str;
    fn set_label(&mut self, label: &str);
}

impl<T: Label + 'static> Implements<dyn Label> for T {
    fn upcast(self: Box<Self>) -> Box<dyn Label> {
        self
    }
}

/// Conforming plugin, labelled `plain`.
#[derive(Debug, Clone)]
pub struct PlainLabel {
    text: String,
}

impl Default for PlainLabel {
    fn default() -> Self {
        PlainLabel {
            text: "plain".to_string(),
        }
    }
}

impl Label for PlainLabel {
    fn label(&self) -> &str {
        &self.text
    }

    fn set_label(&mut self, label: &str) {
        self.text = label.to_string();
    }
}

/// Conforming plugin, labelled `*fancy*`.
#[derive(Debug, Clone)]
pub struct FancyLabel {
    text: String,
}

impl Default for FancyLabel {
    fn default() -> Self {
        FancyLabel {
            text: "*fancy*".to_string(),
        }
    }
}

impl Label for FancyLabel {
    fn label(&self) -> &str {
        &self.text
    }

    fn set_label(&mut self, label: &str) {
        self.text = format!("*{}*", label);
    }
}

/// A value that does not implement `Label`.
#[derive(Debug, Clone, Default)]
pub struct NotAPlugin {
    pub payload: Vec<u8>,
}

/// Table with `plain` and `fancy` registered.
pub fn label_table() -> PluginTable {
    PluginTable::new()
        .with_factory(PluginId::of::<PlainLabel>(), Factory::invokable::<dyn Label, PlainLabel>())
        .with_factory(PluginId::of::<FancyLabel>(), Factory::invokable::<dyn Label, FancyLabel>())
        .with_alias("plain", PluginId::of::<PlainLabel>())
        .with_alias("fancy", PluginId::of::<FancyLabel>())
}

/// Factory whose constructor always fails with `message`.
pub fn failing_factory(message: &'static str) -> Factory {
    Factory::new(move || Err(message.into()))
}

/// Factory producing a value that fails contract validation.
pub fn not_a_plugin_factory() -> Factory {
    Factory::new(|| Ok(Instance::new(NotAPlugin::default())))
}
