//! The runtime that owns a document and the widgets living in it.

use crate::config::PageConfig;
use crate::element::{CustomElement, ElementContext, ElementRegistry};
use crate::event::UiEvent;
use dom::dom_snapshot::{DomSnapshot, DomSnapshotOptions};
use dom::{Document, DomError, NodeId, dom_utils};
use forms::{FormIndex, form_keys};
use input_core::TextControlStore;
use std::collections::{HashMap, HashSet};

pub struct Page {
    config: PageConfig,
    doc: Document,
    body: NodeId,
    controls: TextControlStore,
    forms: FormIndex,
    registry: ElementRegistry,
    instances: HashMap<NodeId, Box<dyn CustomElement>>,
    mounted: HashSet<NodeId>,
}

impl Default for Page {
    fn default() -> Self {
        Self::new()
    }
}

impl Page {
    pub fn new() -> Self {
        Self::with_config(PageConfig::default())
    }

    pub fn with_config(config: PageConfig) -> Self {
        let mut doc = Document::new();
        let body = doc.create_element("body");
        // A fresh element under the document node cannot fail to attach.
        let _ = doc.append_child(doc.root(), body);
        Self {
            config,
            doc,
            body,
            controls: TextControlStore::new(),
            forms: FormIndex::new(),
            registry: ElementRegistry::with_builtins(),
            instances: HashMap::new(),
            mounted: HashSet::new(),
        }
    }

    pub fn config(&self) -> &PageConfig {
        &self.config
    }

    pub fn document(&self) -> &Document {
        &self.doc
    }

    pub fn body(&self) -> NodeId {
        self.body
    }

    pub fn text_controls(&self) -> &TextControlStore {
        &self.controls
    }

    pub fn forms(&self) -> &FormIndex {
        &self.forms
    }

    pub fn registry(&self) -> &ElementRegistry {
        &self.registry
    }

    pub fn registry_mut(&mut self) -> &mut ElementRegistry {
        &mut self.registry
    }

    pub fn is_custom(&self, node: NodeId) -> bool {
        self.instances.contains_key(&node)
    }

    pub fn is_mounted(&self, node: NodeId) -> bool {
        self.mounted.contains(&node)
    }

    /// Create a detached element. Defined tags get a widget instance and
    /// its `on_create` runs before this returns.
    pub fn create_element(&mut self, tag: &str) -> Result<NodeId, DomError> {
        let id = self.doc.create_element(tag);
        if let Some(instance) = self.registry.construct(tag) {
            log::trace!(target: "widgets.page", "upgrade <{tag}> #{}", id.0);
            self.instances.insert(id, instance);
            self.call(id, |el, cx| el.on_create(cx)).transpose()?;
        }
        Ok(id)
    }

    pub fn create_text(&mut self, text: &str) -> NodeId {
        self.doc.create_text(text)
    }

    pub fn append_child(&mut self, parent: NodeId, child: NodeId) -> Result<(), DomError> {
        let was_mounted = self.mounted_in(child);
        self.doc.append_child(parent, child)?;
        for id in was_mounted {
            self.unmount(id)?;
        }
        if self.doc.is_connected(child) {
            for id in self.subtree(child) {
                self.mount(id)?;
            }
        }
        Ok(())
    }

    pub fn remove_child(&mut self, parent: NodeId, child: NodeId) -> Result<(), DomError> {
        self.doc.remove_child(parent, child)?;
        for id in self.mounted_in(child) {
            self.unmount(id)?;
        }
        Ok(())
    }

    pub fn set_attribute(&mut self, node: NodeId, name: &str, value: &str) -> Result<(), DomError> {
        let old = self.doc.set_attribute(node, name, Some(value))?;
        self.form_attribute_changed(node, name);
        self.attribute_changed(node, name, old.as_deref(), Some(value))
    }

    pub fn remove_attribute(&mut self, node: NodeId, name: &str) -> Result<(), DomError> {
        let old = self.doc.remove_attribute(node, name)?;
        self.form_attribute_changed(node, name);
        self.attribute_changed(node, name, old.as_deref(), None)
    }

    /// `classList.add`: routed through the attribute callbacks like any
    /// other `class` edit.
    pub fn add_class(&mut self, node: NodeId, class: &str) -> Result<bool, DomError> {
        let old = self.doc.attribute(node, "class").map(str::to_string);
        let changed = dom_utils::add_class(&mut self.doc, node, class)?;
        if changed {
            let new = self.doc.attribute(node, "class").map(str::to_string);
            self.attribute_changed(node, "class", old.as_deref(), new.as_deref())?;
        }
        Ok(changed)
    }

    pub fn remove_class(&mut self, node: NodeId, class: &str) -> Result<bool, DomError> {
        let old = self.doc.attribute(node, "class").map(str::to_string);
        let changed = dom_utils::remove_class(&mut self.doc, node, class)?;
        if changed {
            let new = self.doc.attribute(node, "class").map(str::to_string);
            self.attribute_changed(node, "class", old.as_deref(), new.as_deref())?;
        }
        Ok(changed)
    }

    /// Deliver `event` to the widget owning `target`. Returns whether the
    /// widget consumed it.
    pub fn dispatch(&mut self, target: NodeId, event: UiEvent) -> Result<bool, DomError> {
        let Some(host) = self.owner_of(target) else {
            log::debug!(
                target: "widgets.page",
                "{} on #{} has no widget owner",
                event.name(),
                target.0
            );
            return Ok(false);
        };
        log::trace!(
            target: "widgets.page",
            "{} on #{} -> widget #{}",
            event.name(),
            target.0,
            host.0
        );
        let consumed = self.call(host, |el, cx| el.on_event(cx, target, &event));
        Ok(consumed.transpose()?.unwrap_or(false))
    }

    /// Nearest inclusive ancestor of `node` that hosts a widget.
    pub fn owner_of(&self, node: NodeId) -> Option<NodeId> {
        self.doc
            .ancestors_inclusive(node)
            .find(|n| self.instances.contains_key(n))
    }

    /// Typed access to the widget on `host`.
    pub fn element<T: CustomElement + 'static>(&self, host: NodeId) -> Option<&T> {
        self.instances.get(&host)?.as_any().downcast_ref::<T>()
    }

    /// Run `f` against the widget on `host` if it is a `T`.
    pub fn with_element<T, R>(
        &mut self,
        host: NodeId,
        f: impl FnOnce(&mut T, &mut ElementContext<'_>) -> R,
    ) -> Option<R>
    where
        T: CustomElement + 'static,
    {
        self.call(host, |el, cx| {
            el.as_any_mut().downcast_mut::<T>().map(|typed| f(typed, cx))
        })
        .flatten()
    }

    pub fn snapshot(&self, root: NodeId) -> DomSnapshot {
        DomSnapshot::new(&self.doc, root, DomSnapshotOptions::default())
    }

    fn call<R>(
        &mut self,
        host: NodeId,
        f: impl FnOnce(&mut dyn CustomElement, &mut ElementContext<'_>) -> R,
    ) -> Option<R> {
        let Page {
            config,
            doc,
            controls,
            forms,
            instances,
            ..
        } = self;
        let instance = instances.get_mut(&host)?;
        let mut cx = ElementContext {
            host,
            doc,
            controls,
            forms,
            config,
        };
        Some(f(instance.as_mut(), &mut cx))
    }

    fn attribute_changed(
        &mut self,
        node: NodeId,
        name: &str,
        old: Option<&str>,
        new: Option<&str>,
    ) -> Result<(), DomError> {
        let name = name.to_ascii_lowercase();
        let observed = self
            .instances
            .get(&node)
            .is_some_and(|el| el.observed_attributes().contains(&name.as_str()));
        if !observed {
            return Ok(());
        }
        log::trace!(
            target: "widgets.page",
            "#{} {name}: {old:?} -> {new:?}",
            node.0
        );
        self.call(node, |el, cx| el.on_attribute_change(cx, &name, old, new))
            .transpose()
            .map(drop)
    }

    /// Keep the form index reachable through a form's new id or name.
    fn form_attribute_changed(&mut self, node: NodeId, name: &str) {
        let is_key = name.eq_ignore_ascii_case("id") || name.eq_ignore_ascii_case("name");
        if is_key && self.doc.name(node) == Some("form") {
            self.forms.update_keys(node, form_keys(&self.doc, node));
        }
    }

    fn subtree(&self, root: NodeId) -> Vec<NodeId> {
        let mut out = vec![root];
        out.extend(self.doc.descendants(root));
        out
    }

    fn mounted_in(&self, root: NodeId) -> Vec<NodeId> {
        self.subtree(root)
            .into_iter()
            .filter(|n| self.mounted.contains(n))
            .collect()
    }

    fn mount(&mut self, id: NodeId) -> Result<(), DomError> {
        if !self.instances.contains_key(&id) || !self.mounted.insert(id) {
            return Ok(());
        }
        log::trace!(target: "widgets.page", "mount #{}", id.0);
        self.call(id, |el, cx| el.on_mount(cx)).transpose().map(drop)
    }

    fn unmount(&mut self, id: NodeId) -> Result<(), DomError> {
        if !self.mounted.remove(&id) {
            return Ok(());
        }
        log::trace!(target: "widgets.page", "unmount #{}", id.0);
        self.call(id, |el, cx| el.on_unmount(cx)).transpose().map(drop)
    }
}
