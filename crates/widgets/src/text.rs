//! The `mn-input` widget: a single-line text field with a placeholder label.

use crate::binding::{FormBinding, mirror_attribute};
use crate::element::{CustomElement, ElementContext};
use crate::event::{EditOutcome, Key, UiEvent, apply_edit_key, key_edits_text};
use crate::number::{ValidationState, Violation, apply_classes};
use dom::dom_utils::add_class;
use dom::{DomError, NodeId};
use forms::is_submitted;
use input_core::ControlId;
use std::any::Any;

const OBSERVED: &[&str] = &[
    "value",
    "placeholder",
    "required",
    "readonly",
    "disabled",
    "autofocus",
    "name",
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TextParts {
    pub input: NodeId,
    pub label: NodeId,
}

#[derive(Debug, Default)]
pub struct TextField {
    parts: Option<TextParts>,
    value: String,
    placeholder: String,
    required: bool,
    disabled: bool,
    readonly: bool,
    autofocus: bool,
    validation: ValidationState,
    binding: FormBinding,
}

impl TextField {
    pub const TAG: &'static str = "mn-input";

    pub fn new() -> Self {
        Self::default()
    }

    pub fn construct() -> Box<dyn CustomElement> {
        Box::new(Self::new())
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    pub fn disabled(&self) -> bool {
        self.disabled
    }

    pub fn readonly(&self) -> bool {
        self.readonly
    }

    pub fn autofocus(&self) -> bool {
        self.autofocus
    }

    pub fn name(&self) -> Option<&str> {
        self.binding.name()
    }

    pub fn input(&self) -> Option<NodeId> {
        self.parts.map(|p| p.input)
    }

    pub fn label(&self) -> Option<NodeId> {
        self.parts.map(|p| p.label)
    }

    pub fn validation(&self) -> ValidationState {
        self.validation
    }

    pub fn set_value(&mut self, cx: &mut ElementContext<'_>, value: Option<&str>) -> Result<(), DomError> {
        self.value = value.unwrap_or_default().to_string();
        let (Some(parts), Some(control)) = (self.parts, self.control()) else {
            return Ok(());
        };
        cx.controls.set(control, &self.value);
        self.mirror_value(cx, parts)
    }

    pub fn set_placeholder(
        &mut self,
        cx: &mut ElementContext<'_>,
        placeholder: Option<&str>,
    ) -> Result<(), DomError> {
        self.placeholder = placeholder.unwrap_or_default().to_string();
        match self.parts {
            Some(parts) => cx.doc.set_text_content(parts.label, &self.placeholder),
            None => Ok(()),
        }
    }

    pub fn set_disabled(&mut self, cx: &mut ElementContext<'_>, on: bool) -> Result<(), DomError> {
        let old = if on {
            cx.doc.set_attribute(cx.host, "disabled", Some(""))?
        } else {
            cx.doc.remove_attribute(cx.host, "disabled")?
        };
        self.on_attribute_change(cx, "disabled", old.as_deref(), on.then_some(""))
    }

    /// Only `required` applies: blank text is a missing value.
    pub fn validate(&mut self, cx: &mut ElementContext<'_>) -> Result<ValidationState, DomError> {
        let mut state = ValidationState::default();
        if self.required && self.value.trim().is_empty() {
            state.insert(Violation::Required);
        }
        self.validation = state;
        apply_classes(cx.doc, cx.host, state)?;
        Ok(state)
    }

    fn control(&self) -> Option<ControlId> {
        self.input().map(|input| ControlId::from(input.0))
    }

    fn mirror_value(&self, cx: &mut ElementContext<'_>, parts: TextParts) -> Result<(), DomError> {
        let shown = (!self.value.is_empty()).then_some(self.value.as_str());
        mirror_attribute(cx.doc, parts.input, "value", shown)
    }

    fn text_edited(&mut self, cx: &mut ElementContext<'_>, control: ControlId) -> Result<(), DomError> {
        self.value = cx.controls.text(control).unwrap_or_default().to_string();
        match self.parts {
            Some(parts) => self.mirror_value(cx, parts),
            None => Ok(()),
        }
    }
}

impl CustomElement for TextField {
    fn observed_attributes(&self) -> &'static [&'static str] {
        OBSERVED
    }

    fn on_create(&mut self, cx: &mut ElementContext<'_>) -> Result<(), DomError> {
        let host = cx.host;
        add_class(cx.doc, host, Self::TAG)?;
        let input = cx.doc.create_element("input");
        cx.doc.set_attribute(input, "type", Some("text"))?;
        let label = cx.doc.create_element("label");
        cx.doc.append_child(host, input)?;
        cx.doc.append_child(host, label)?;
        self.parts = Some(TextParts { input, label });
        if let Some(control) = self.control() {
            cx.controls.ensure(control);
        }
        Ok(())
    }

    fn on_attribute_change(
        &mut self,
        cx: &mut ElementContext<'_>,
        name: &str,
        _old: Option<&str>,
        new: Option<&str>,
    ) -> Result<(), DomError> {
        match name {
            "value" => self.set_value(cx, new),
            "placeholder" => self.set_placeholder(cx, new),
            "required" => {
                self.required = new.is_some();
                Ok(())
            }
            "readonly" | "disabled" | "autofocus" => {
                let on = new.is_some();
                match name {
                    "readonly" => self.readonly = on,
                    "disabled" => self.disabled = on,
                    _ => self.autofocus = on,
                }
                match self.parts {
                    Some(parts) => mirror_attribute(cx.doc, parts.input, name, new),
                    None => Ok(()),
                }
            }
            "name" => {
                self.binding.set_name(cx, new);
                Ok(())
            }
            _ => Ok(()),
        }
    }

    fn on_mount(&mut self, cx: &mut ElementContext<'_>) -> Result<(), DomError> {
        self.binding.mount(cx);
        Ok(())
    }

    fn on_unmount(&mut self, cx: &mut ElementContext<'_>) -> Result<(), DomError> {
        self.binding.unmount(cx);
        Ok(())
    }

    fn on_event(
        &mut self,
        cx: &mut ElementContext<'_>,
        _target: NodeId,
        event: &UiEvent,
    ) -> Result<bool, DomError> {
        let Some(control) = self.control() else {
            return Ok(false);
        };
        match event {
            UiEvent::KeyDown { key, modifiers } => {
                let blocked = self.disabled || (self.readonly && key_edits_text(*key, *modifiers));
                if blocked || matches!(key, Key::ArrowUp | Key::ArrowDown) {
                    return Ok(false);
                }
                match apply_edit_key(&mut *cx.controls, control, *key, *modifiers) {
                    EditOutcome::Ignored => Ok(false),
                    EditOutcome::Handled => Ok(true),
                    EditOutcome::TextChanged => self.text_edited(cx, control).map(|_| true),
                }
            }
            UiEvent::KeyUp { .. } => {
                if is_submitted(cx.doc, cx.host) {
                    self.validate(cx)?;
                }
                Ok(true)
            }
            UiEvent::Input(text) => {
                if self.disabled || self.readonly {
                    return Ok(false);
                }
                cx.controls.replace_text(control, text);
                self.text_edited(cx, control).map(|_| true)
            }
            UiEvent::Focus => {
                cx.controls.focus(control);
                Ok(true)
            }
            UiEvent::Blur => {
                cx.controls.blur(control);
                Ok(true)
            }
        }
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
