//! Custom element lifecycle and the tag registry.

use crate::config::PageConfig;
use crate::event::UiEvent;
use crate::number::NumericField;
use crate::select::SelectField;
use crate::text::TextField;
use dom::{Document, DomError, NodeId};
use forms::FormIndex;
use input_core::TextControlStore;
use std::any::Any;
use std::collections::HashMap;

/// Everything a widget may touch while reacting to a callback.
pub struct ElementContext<'a> {
    /// The element the widget instance is attached to.
    pub host: NodeId,
    pub doc: &'a mut Document,
    pub controls: &'a mut TextControlStore,
    pub forms: &'a mut FormIndex,
    pub config: &'a PageConfig,
}

impl ElementContext<'_> {
    pub fn is_connected(&self) -> bool {
        self.doc.is_connected(self.host)
    }
}

/// Lifecycle of a widget bound to a host element.
///
/// The page calls `on_create` once right after the host exists,
/// `on_attribute_change` for every edit of an attribute listed in
/// `observed_attributes` (also when the value is unchanged), `on_mount` and
/// `on_unmount` as the host enters and leaves the document, and `on_event`
/// for UI events targeted at the host or anything inside it.
pub trait CustomElement {
    fn observed_attributes(&self) -> &'static [&'static str];

    fn on_create(&mut self, cx: &mut ElementContext<'_>) -> Result<(), DomError>;

    fn on_attribute_change(
        &mut self,
        cx: &mut ElementContext<'_>,
        name: &str,
        old: Option<&str>,
        new: Option<&str>,
    ) -> Result<(), DomError>;

    fn on_mount(&mut self, _cx: &mut ElementContext<'_>) -> Result<(), DomError> {
        Ok(())
    }

    fn on_unmount(&mut self, _cx: &mut ElementContext<'_>) -> Result<(), DomError> {
        Ok(())
    }

    /// Returns `true` when the event was consumed.
    fn on_event(
        &mut self,
        _cx: &mut ElementContext<'_>,
        _target: NodeId,
        _event: &UiEvent,
    ) -> Result<bool, DomError> {
        Ok(false)
    }

    fn as_any(&self) -> &dyn Any;

    fn as_any_mut(&mut self) -> &mut dyn Any;
}

pub type ElementConstructor = fn() -> Box<dyn CustomElement>;

#[derive(Clone, Default)]
pub struct ElementRegistry {
    definitions: HashMap<String, ElementConstructor>,
}

impl ElementRegistry {
    /// Registry without any definitions.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with `mn-number`, `mn-input` and `mn-select` defined.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry.define(NumericField::TAG, NumericField::construct);
        registry.define(TextField::TAG, TextField::construct);
        registry.define(SelectField::TAG, SelectField::construct);
        registry
    }

    /// Define `tag`. A tag that is already defined keeps its first
    /// constructor and `false` is returned.
    pub fn define(&mut self, tag: &str, constructor: ElementConstructor) -> bool {
        let tag = tag.to_ascii_lowercase();
        if self.definitions.contains_key(&tag) {
            log::debug!(target: "widgets.registry", "'{tag}' already defined; keeping first");
            return false;
        }
        log::trace!(target: "widgets.registry", "define '{tag}'");
        self.definitions.insert(tag, constructor);
        true
    }

    pub fn get(&self, tag: &str) -> Option<ElementConstructor> {
        self.definitions.get(&tag.to_ascii_lowercase()).copied()
    }

    pub fn is_defined(&self, tag: &str) -> bool {
        self.get(tag).is_some()
    }

    /// A fresh, not yet created, instance for `tag`.
    pub fn construct(&self, tag: &str) -> Option<Box<dyn CustomElement>> {
        self.get(tag).map(|constructor| constructor())
    }

    pub fn tags(&self) -> Vec<&str> {
        let mut tags: Vec<&str> = self.definitions.keys().map(String::as_str).collect();
        tags.sort_unstable();
        tags
    }
}

impl std::fmt::Debug for ElementRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ElementRegistry")
            .field("tags", &self.tags())
            .finish()
    }
}
