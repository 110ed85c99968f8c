//! Named-field tables, one per form, reachable by the form's id and name.
//!
//! A field registers under its `name`. Two fields claiming the same name in
//! one form: last registration wins, and the loser's later unregister does
//! not evict the winner.

use crate::dom::FormKeys;
use dom::NodeId;
use std::collections::HashMap;

#[derive(Clone, Debug, Default)]
pub struct FormRegistry {
    fields: HashMap<String, NodeId>,
}

impl FormRegistry {
    /// Map `key` to `field`, returning the previous holder.
    pub fn register(&mut self, key: &str, field: NodeId) -> Option<NodeId> {
        self.fields.insert(key.to_string(), field)
    }

    /// Remove `key` if it is currently held by `field`.
    pub fn unregister(&mut self, key: &str, field: NodeId) -> bool {
        if self.fields.get(key) != Some(&field) {
            return false;
        }
        self.fields.remove(key);
        true
    }

    /// Move `field` from `old` to `new` in one step.
    pub fn rename(&mut self, old: &str, new: &str, field: NodeId) {
        self.unregister(old, field);
        self.register(new, field);
    }

    pub fn lookup(&self, key: &str) -> Option<NodeId> {
        self.fields.get(key).copied()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Field names in sorted order.
    pub fn keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self.fields.keys().map(String::as_str).collect();
        keys.sort_unstable();
        keys
    }
}

#[derive(Clone, Debug)]
struct FormEntry {
    keys: FormKeys,
    registry: FormRegistry,
}

#[derive(Clone, Debug, Default)]
pub struct FormIndex {
    forms: HashMap<NodeId, FormEntry>,
    form_by_id: HashMap<String, NodeId>,
    form_by_name: HashMap<String, NodeId>,
}

impl FormIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `field` under `key` in `form`'s registry.
    ///
    /// `keys` are the form's current id/name; they are refreshed on every call
    /// so a form renamed between registrations stays reachable.
    pub fn register(&mut self, form: NodeId, keys: FormKeys, key: &str, field: NodeId) {
        self.rekey_form(form, keys);
        let Some(entry) = self.forms.get_mut(&form) else {
            return;
        };
        if let Some(prev) = entry.registry.register(key, field)
            && prev != field
        {
            log::debug!(
                target: "forms.registry",
                "field #{} replaces #{} under '{key}' in form #{}",
                field.0,
                prev.0,
                form.0
            );
        }
        log::trace!(target: "forms.registry", "register '{key}' -> #{} in form #{}", field.0, form.0);
    }

    pub fn unregister(&mut self, form: NodeId, key: &str, field: NodeId) -> bool {
        let Some(entry) = self.forms.get_mut(&form) else {
            return false;
        };
        let removed = entry.registry.unregister(key, field);
        if removed {
            log::trace!(target: "forms.registry", "unregister '{key}' from form #{}", form.0);
        }
        self.prune(form);
        removed
    }

    /// Replace `old` with `new` for `field` without an observable gap.
    pub fn rename(&mut self, form: NodeId, keys: FormKeys, old: &str, new: &str, field: NodeId) {
        self.rekey_form(form, keys);
        if let Some(entry) = self.forms.get_mut(&form) {
            entry.registry.rename(old, new, field);
            log::trace!(
                target: "forms.registry",
                "rename '{old}' -> '{new}' for #{} in form #{}",
                field.0,
                form.0
            );
        }
    }

    /// Refresh the id/name tables after `form`'s own attributes changed.
    /// Forms without registered fields are not indexed and are left alone.
    pub fn update_keys(&mut self, form: NodeId, keys: FormKeys) -> bool {
        if !self.forms.contains_key(&form) {
            return false;
        }
        log::trace!(target: "forms.registry", "rekey form #{} -> {keys:?}", form.0);
        self.rekey_form(form, keys);
        true
    }

    pub fn registry(&self, form: NodeId) -> Option<&FormRegistry> {
        self.forms.get(&form).map(|e| &e.registry)
    }

    pub fn form_by_id(&self, form_id: &str) -> Option<NodeId> {
        self.form_by_id.get(form_id).copied()
    }

    pub fn form_by_name(&self, form_name: &str) -> Option<NodeId> {
        self.form_by_name.get(form_name).copied()
    }

    /// Field `key` of the form whose `id` attribute is `form_id`.
    pub fn lookup_by_id(&self, form_id: &str, key: &str) -> Option<NodeId> {
        let form = self.form_by_id(form_id)?;
        self.registry(form)?.lookup(key)
    }

    /// Field `key` of the form whose `name` attribute is `form_name`.
    pub fn lookup_by_name(&self, form_name: &str, key: &str) -> Option<NodeId> {
        let form = self.form_by_name(form_name)?;
        self.registry(form)?.lookup(key)
    }

    pub fn form_count(&self) -> usize {
        self.forms.len()
    }

    fn rekey_form(&mut self, form: NodeId, keys: FormKeys) {
        let entry = self.forms.entry(form).or_insert_with(|| FormEntry {
            keys: FormKeys::default(),
            registry: FormRegistry::default(),
        });

        if entry.keys.id != keys.id {
            if let Some(old) = entry.keys.id.take() {
                remove_if_owned(&mut self.form_by_id, &old, form);
            }
            if let Some(new) = keys.id.clone() {
                self.form_by_id.insert(new, form);
            }
        }
        if entry.keys.name != keys.name {
            if let Some(old) = entry.keys.name.take() {
                remove_if_owned(&mut self.form_by_name, &old, form);
            }
            if let Some(new) = keys.name.clone() {
                self.form_by_name.insert(new, form);
            }
        }
        entry.keys = keys;
    }

    fn prune(&mut self, form: NodeId) {
        if !self.forms.get(&form).is_some_and(|e| e.registry.is_empty()) {
            return;
        }
        if let Some(entry) = self.forms.remove(&form) {
            if let Some(id) = entry.keys.id {
                remove_if_owned(&mut self.form_by_id, &id, form);
            }
            if let Some(name) = entry.keys.name {
                remove_if_owned(&mut self.form_by_name, &name, form);
            }
        }
    }
}

fn remove_if_owned(map: &mut HashMap<String, NodeId>, key: &str, form: NodeId) {
    if map.get(key) == Some(&form) {
        map.remove(key);
    }
}
