use super::format::{format_with, is_displayable, mask_text_with};
use super::mode::DisplayMode;
use super::parse::{parse_entry_with, parse_with};
use super::validate::{Constraints, FieldStatus, ValidationState, apply_classes, validate};
use crate::binding::{FormBinding, mirror_attribute};
use crate::element::{CustomElement, ElementContext};
use crate::event::{EditOutcome, Key, Modifiers, UiEvent, apply_edit_key, key_edits_text};
use dom::dom_utils::add_class;
use dom::{DomError, NodeId};
use forms::is_submitted;
use input_core::ControlId;
use std::any::Any;

const OBSERVED: &[&str] = &[
    "value",
    "placeholder",
    "required",
    "min",
    "max",
    "step",
    "readonly",
    "disabled",
    "autofocus",
    "currency",
    "decimal",
    "percentage",
    "name",
];

pub(crate) const HOST_STYLE: [(&str, &str); 3] = [
    ("display", "flex"),
    ("position", "relative"),
    ("margin", "1.5em 0px 1em"),
];

/// A value assigned through the `value` property.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum PropertyValue {
    #[default]
    Undefined,
    Number(f64),
    Text(String),
}

impl From<f64> for PropertyValue {
    fn from(n: f64) -> Self {
        PropertyValue::Number(n)
    }
}

impl From<i32> for PropertyValue {
    fn from(n: i32) -> Self {
        PropertyValue::Number(f64::from(n))
    }
}

impl From<&str> for PropertyValue {
    fn from(s: &str) -> Self {
        PropertyValue::Text(s.to_string())
    }
}

impl From<String> for PropertyValue {
    fn from(s: String) -> Self {
        PropertyValue::Text(s)
    }
}

impl From<Option<f64>> for PropertyValue {
    fn from(n: Option<f64>) -> Self {
        n.map_or(PropertyValue::Undefined, PropertyValue::Number)
    }
}

/// Child elements built by `on_create`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NumberParts {
    pub input: NodeId,
    pub label: NodeId,
    pub mask: NodeId,
}

/// Numeric, currency and percentage input.
///
/// The value is the only state; the control text and the mask label are
/// rendered from it, except while the user types, when the value is read
/// back from the control on every edit.
#[derive(Debug, Default)]
pub struct NumericField {
    parts: Option<NumberParts>,
    value: Option<f64>,
    mode: DisplayMode,
    constraints: Constraints,
    placeholder: String,
    disabled: bool,
    readonly: bool,
    autofocus: bool,
    validation: ValidationState,
    validations: u64,
    binding: FormBinding,
}

impl NumericField {
    pub const TAG: &'static str = "mn-number";

    pub fn new() -> Self {
        Self::default()
    }

    pub fn construct() -> Box<dyn CustomElement> {
        Box::new(Self::new())
    }

    pub fn value(&self) -> Option<f64> {
        self.value
    }

    pub fn mode(&self) -> DisplayMode {
        self.mode
    }

    pub fn constraints(&self) -> &Constraints {
        &self.constraints
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

    pub fn parts(&self) -> Option<NumberParts> {
        self.parts
    }

    pub fn input(&self) -> Option<NodeId> {
        self.parts.map(|p| p.input)
    }

    pub fn label(&self) -> Option<NodeId> {
        self.parts.map(|p| p.label)
    }

    pub fn mask(&self) -> Option<NodeId> {
        self.parts.map(|p| p.mask)
    }

    /// Result of the most recent `validate` call.
    pub fn validation(&self) -> ValidationState {
        self.validation
    }

    /// How many times `validate` ran.
    pub fn validation_count(&self) -> u64 {
        self.validations
    }

    pub fn status(&self) -> FieldStatus {
        FieldStatus::derive(self.value, self.validation)
    }

    pub fn set_value(
        &mut self,
        cx: &mut ElementContext<'_>,
        value: impl Into<PropertyValue>,
    ) -> Result<(), DomError> {
        let value = match value.into() {
            PropertyValue::Undefined => None,
            PropertyValue::Number(n) => Some(n),
            PropertyValue::Text(text) => parse_with(&text, self.mode, &cx.config.format),
        };
        self.value = self.accept(value);
        self.render(cx)
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

    /// Reflects to the host `disabled` attribute.
    pub fn set_disabled(&mut self, cx: &mut ElementContext<'_>, on: bool) -> Result<(), DomError> {
        self.reflect_bool(cx, "disabled", on)
    }

    /// Reflects to the host `autofocus` attribute.
    pub fn set_autofocus(&mut self, cx: &mut ElementContext<'_>, on: bool) -> Result<(), DomError> {
        self.reflect_bool(cx, "autofocus", on)
    }

    /// Check the constraints and update the host classes.
    pub fn validate(&mut self, cx: &mut ElementContext<'_>) -> Result<ValidationState, DomError> {
        self.validations += 1;
        self.validation = validate(self.value, &self.constraints);
        log::trace!(
            target: "widgets.number",
            "validate #{}: {:?} -> {:?}",
            cx.host.0,
            self.value,
            self.validation
        );
        apply_classes(cx.doc, cx.host, self.validation)?;
        Ok(self.validation)
    }

    fn reflect_bool(&mut self, cx: &mut ElementContext<'_>, name: &str, on: bool) -> Result<(), DomError> {
        let (old, new) = if on {
            (cx.doc.set_attribute(cx.host, name, Some(""))?, Some(""))
        } else {
            (cx.doc.remove_attribute(cx.host, name)?, None)
        };
        self.on_attribute_change(cx, name, old.as_deref(), new)
    }

    /// Keep `value` only if the active mode can render it.
    fn accept(&self, value: Option<f64>) -> Option<f64> {
        let value = value?;
        if is_displayable(value, self.mode) {
            return Some(value);
        }
        log::debug!(target: "widgets.number", "dropping {value}: not displayable as {:?}", self.mode);
        None
    }

    fn control(&self) -> Option<ControlId> {
        self.input().map(|input| ControlId::from(input.0))
    }

    /// Project the value into the control text and the mask label.
    fn render(&mut self, cx: &mut ElementContext<'_>) -> Result<(), DomError> {
        let (Some(parts), Some(control)) = (self.parts, self.control()) else {
            return Ok(());
        };
        let text = format_with(self.value, self.mode, &cx.config.format);
        cx.controls.set(control, &text);
        self.mirror_control_text(cx, parts, &text)
    }

    fn mirror_control_text(
        &self,
        cx: &mut ElementContext<'_>,
        parts: NumberParts,
        text: &str,
    ) -> Result<(), DomError> {
        let shown = (!text.is_empty()).then_some(text);
        mirror_attribute(cx.doc, parts.input, "value", shown)?;
        let mask = mask_text_with(self.value, self.mode, &cx.config.format);
        cx.doc.set_text_content(parts.mask, &mask)
    }

    /// The user changed the control text; read the value back from it.
    fn text_edited(&mut self, cx: &mut ElementContext<'_>) -> Result<(), DomError> {
        let (Some(parts), Some(control)) = (self.parts, self.control()) else {
            return Ok(());
        };
        let text = cx.controls.text(control).unwrap_or_default().to_string();
        self.value = self.accept(parse_entry_with(&text, self.mode, &cx.config.format));
        log::trace!(target: "widgets.number", "entry '{text}' -> {:?}", self.value);
        self.mirror_control_text(cx, parts, &text)
    }

    fn step(&mut self, cx: &mut ElementContext<'_>, direction: f64) -> Result<(), DomError> {
        let next = self.value.unwrap_or(0.0) + direction * self.constraints.step;
        self.value = self.accept(Some(next));
        self.render(cx)
    }

    fn update_mode(&mut self, cx: &mut ElementContext<'_>) -> Result<(), DomError> {
        let host = cx.host;
        let mode = DisplayMode::from_attributes(
            cx.doc.attribute(host, "currency"),
            cx.doc.attribute(host, "decimal"),
            cx.doc.has_attribute(host, "percentage"),
            &cx.config.format,
        );
        if mode != self.mode {
            log::trace!(target: "widgets.number", "mode {:?} -> {mode:?}", self.mode);
            self.mode = mode;
            self.value = self.accept(self.value);
        }
        self.render(cx)
    }

    fn mirror_to_control(
        &self,
        cx: &mut ElementContext<'_>,
        name: &str,
        value: Option<&str>,
    ) -> Result<(), DomError> {
        match self.parts {
            Some(parts) => mirror_attribute(cx.doc, parts.input, name, value),
            None => Ok(()),
        }
    }

    fn handle_key_down(
        &mut self,
        cx: &mut ElementContext<'_>,
        key: Key,
        modifiers: Modifiers,
    ) -> Result<bool, DomError> {
        if self.disabled {
            return Ok(false);
        }
        match key {
            Key::ArrowUp | Key::ArrowDown if self.readonly => Ok(false),
            Key::ArrowUp => self.step(cx, 1.0).map(|_| true),
            Key::ArrowDown => self.step(cx, -1.0).map(|_| true),
            _ if self.readonly && key_edits_text(key, modifiers) => Ok(false),
            _ => {
                let Some(control) = self.control() else {
                    return Ok(false);
                };
                match apply_edit_key(&mut *cx.controls, control, key, modifiers) {
                    EditOutcome::Ignored => Ok(false),
                    EditOutcome::Handled => Ok(true),
                    EditOutcome::TextChanged => self.text_edited(cx).map(|_| true),
                }
            }
        }
    }
}

fn parse_step(raw: Option<&str>) -> f64 {
    let Some(raw) = raw else {
        return 1.0;
    };
    match raw.trim().parse::<f64>() {
        Ok(step) if step.is_finite() && step > 0.0 => step,
        _ => {
            log::debug!(target: "widgets.number", "unusable step '{raw}', using 1");
            1.0
        }
    }
}

impl CustomElement for NumericField {
    fn observed_attributes(&self) -> &'static [&'static str] {
        OBSERVED
    }

    fn on_create(&mut self, cx: &mut ElementContext<'_>) -> Result<(), DomError> {
        let host = cx.host;
        add_class(cx.doc, host, Self::TAG)?;
        for (property, value) in HOST_STYLE {
            cx.doc.set_style(host, property, value)?;
        }

        let input = cx.doc.create_element("input");
        cx.doc.set_attribute(input, "type", Some("text"))?;
        let label = cx.doc.create_element("label");
        let mask = cx.doc.create_element("div");
        add_class(cx.doc, mask, "mask")?;
        for child in [input, label, mask] {
            cx.doc.append_child(host, child)?;
        }

        self.parts = Some(NumberParts { input, label, mask });
        if let Some(control) = self.control() {
            cx.controls.ensure(control);
        }
        log::trace!(target: "widgets.number", "created #{}", host.0);
        self.render(cx)
    }

    fn on_attribute_change(
        &mut self,
        cx: &mut ElementContext<'_>,
        name: &str,
        _old: Option<&str>,
        new: Option<&str>,
    ) -> Result<(), DomError> {
        match name {
            "value" => {
                let parsed = new.and_then(|text| parse_with(text, self.mode, &cx.config.format));
                self.value = self.accept(parsed);
                self.render(cx)
            }
            "placeholder" => self.set_placeholder(cx, new),
            "required" => {
                self.constraints.required = new.is_some();
                Ok(())
            }
            "min" | "max" => {
                let bound = new.and_then(|raw| parse_with(raw, DisplayMode::Plain, &cx.config.format));
                if new.is_some() && bound.is_none() {
                    log::debug!(target: "widgets.number", "ignoring unusable {name} '{}'", new.unwrap_or_default());
                }
                if name == "min" {
                    self.constraints.min = bound;
                } else {
                    self.constraints.max = bound;
                }
                self.mirror_to_control(cx, name, new)?;
                match self.parts {
                    Some(parts) => mirror_attribute(cx.doc, parts.label, name, new),
                    None => Ok(()),
                }
            }
            "step" => {
                self.constraints.step = parse_step(new);
                Ok(())
            }
            "readonly" | "disabled" | "autofocus" => {
                let on = new.is_some();
                match name {
                    "readonly" => self.readonly = on,
                    "disabled" => self.disabled = on,
                    _ => self.autofocus = on,
                }
                self.mirror_to_control(cx, name, new)
            }
            "currency" | "decimal" | "percentage" => self.update_mode(cx),
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
            UiEvent::KeyDown { key, modifiers } => self.handle_key_down(cx, *key, *modifiers),
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
                self.text_edited(cx).map(|_| true)
            }
            UiEvent::Focus => {
                cx.controls.focus(control);
                Ok(true)
            }
            UiEvent::Blur => {
                cx.controls.blur(control);
                self.render(cx).map(|_| true)
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
