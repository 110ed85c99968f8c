//! Pieces shared by the built-in widgets: form registration and attribute
//! mirroring onto child elements.

use crate::element::ElementContext;
use dom::{Document, DomError, NodeId};
use forms::{form_keys, form_owner};

/// Tracks where a widget is registered under its `name`.
#[derive(Clone, Debug, Default)]
pub(crate) struct FormBinding {
    name: Option<String>,
    mounted: bool,
    registered: Option<(NodeId, String)>,
}

impl FormBinding {
    pub(crate) fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub(crate) fn set_name(&mut self, cx: &mut ElementContext<'_>, name: Option<&str>) {
        self.name = name
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .map(str::to_string);
        self.sync(cx);
    }

    pub(crate) fn mount(&mut self, cx: &mut ElementContext<'_>) {
        self.mounted = true;
        self.sync(cx);
    }

    pub(crate) fn unmount(&mut self, cx: &mut ElementContext<'_>) {
        self.mounted = false;
        self.sync(cx);
    }

    fn sync(&mut self, cx: &mut ElementContext<'_>) {
        let form = if self.mounted {
            form_owner(cx.doc, cx.host)
        } else {
            None
        };
        let desired = form.zip(self.name.clone());
        if desired == self.registered {
            return;
        }

        match (self.registered.take(), &desired) {
            (Some((old_form, old)), Some((form, new))) if old_form == *form => {
                let keys = form_keys(cx.doc, *form);
                cx.forms.rename(*form, keys, &old, new, cx.host);
            }
            (previous, desired) => {
                if let Some((old_form, old)) = previous {
                    cx.forms.unregister(old_form, &old, cx.host);
                }
                if let Some((form, new)) = desired {
                    let keys = form_keys(cx.doc, *form);
                    cx.forms.register(*form, keys, new, cx.host);
                }
            }
        }
        self.registered = desired;
    }
}

/// Copy a host attribute onto `target`, removing it there when `value` is
/// `None`.
pub(crate) fn mirror_attribute(
    doc: &mut Document,
    target: NodeId,
    name: &str,
    value: Option<&str>,
) -> Result<(), DomError> {
    match value {
        Some(v) => doc.set_attribute(target, name, Some(v)).map(drop),
        None => doc.remove_attribute(target, name).map(drop),
    }
}
