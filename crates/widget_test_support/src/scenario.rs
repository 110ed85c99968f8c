//! TOML-described widget scenarios.
//!
//! Each scenario builds `<form id="formID" name="formName">` in the page body,
//! creates one widget inside it, replays `steps` and checks `expect`.
//!
//! ```toml
//! format = "minimalist-scenarios-v1"
//!
//! [[scenario]]
//! id = "currency-default-places"
//! steps = [
//!   { op = "set_attribute", name = "currency", value = "" },
//!   { op = "set_value", text = "10" },
//! ]
//! expect = { value = 10.0, input = "10,00" }
//! ```

use crate::{diff_lines, escape_text};
use dom::NodeId;
use dom::dom_utils::class_list;
use input_core::ControlId;
use serde::Deserialize;
use std::collections::BTreeSet;
use std::fs;
use std::path::Path;
use widgets::{Key, NumericField, Page, PropertyValue, TextField, UiEvent};

pub const SCENARIOS_FORMAT_V1: &str = "minimalist-scenarios-v1";

#[derive(Debug, Deserialize)]
struct ScenarioFile {
    format: String,
    #[serde(rename = "scenario")]
    scenarios: Vec<Scenario>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct Scenario {
    pub id: String,
    #[serde(default = "default_tag")]
    pub tag: String,
    #[serde(default)]
    pub steps: Vec<Step>,
    #[serde(default)]
    pub expect: Expect,
}

fn default_tag() -> String {
    NumericField::TAG.to_string()
}

#[derive(Clone, Debug, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Step {
    SetAttribute { name: String, value: String },
    RemoveAttribute { name: String },
    /// Property write; neither field means `undefined`.
    SetValue {
        number: Option<f64>,
        text: Option<String>,
    },
    SetPlaceholder { value: Option<String> },
    SetDisabled { on: bool },
    SetAutofocus { on: bool },
    KeyDown { key: String },
    KeyUp { key: String },
    /// One `keydown` per char.
    Type { text: String },
    Input { text: String },
    Focus,
    Blur,
    /// Mark the form as submitted.
    Submit,
    Validate,
    /// Detach the form from the page.
    Detach,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(untagged)]
pub enum ExpectedValue {
    Number(f64),
    /// Only `"undefined"` is accepted.
    Keyword(String),
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct Expect {
    pub value: Option<ExpectedValue>,
    pub text: Option<String>,
    pub input: Option<String>,
    pub mask: Option<String>,
    pub label: Option<String>,
    #[serde(default)]
    pub classes: Vec<String>,
    #[serde(default)]
    pub absent_classes: Vec<String>,
    /// `[form-field-name, expected-to-resolve]` pairs checked via the form id.
    #[serde(default)]
    pub registered: Vec<(String, bool)>,
    pub snapshot: Option<Vec<String>>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ScenarioOutcome {
    pub value: Option<f64>,
    pub text: Option<String>,
    pub input: String,
    pub mask: String,
    pub label: String,
    pub classes: Vec<String>,
    pub snapshot: Vec<String>,
}

pub fn load_scenarios(path: &Path) -> Vec<Scenario> {
    let content = fs::read_to_string(path)
        .unwrap_or_else(|err| panic!("failed to read scenarios {path:?}: {err}"));
    let file: ScenarioFile = toml::from_str(&content)
        .unwrap_or_else(|err| panic!("failed to parse scenarios {path:?}: {err}"));
    assert_eq!(
        file.format, SCENARIOS_FORMAT_V1,
        "unsupported scenario format in {path:?}"
    );
    let mut seen = BTreeSet::new();
    for scenario in &file.scenarios {
        assert!(
            seen.insert(scenario.id.clone()),
            "duplicate scenario id in {path:?}: {}",
            scenario.id
        );
    }
    file.scenarios
}

pub fn parse_key(name: &str) -> Result<Key, String> {
    let key = match name {
        "ArrowUp" => Key::ArrowUp,
        "ArrowDown" => Key::ArrowDown,
        "ArrowLeft" => Key::ArrowLeft,
        "ArrowRight" => Key::ArrowRight,
        "Home" => Key::Home,
        "End" => Key::End,
        "Backspace" => Key::Backspace,
        "Delete" => Key::Delete,
        "Enter" => Key::Enter,
        "Tab" => Key::Tab,
        "Escape" => Key::Escape,
        other => {
            let mut chars = other.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => Key::Char(c),
                _ => return Err(format!("unknown key '{other}'")),
            }
        }
    };
    Ok(key)
}

struct Harness {
    page: Page,
    form: NodeId,
    host: NodeId,
}

impl Harness {
    fn new(tag: &str) -> Result<Self, String> {
        let mut page = Page::new();
        let form = page.create_element("form").map_err(|e| e.to_string())?;
        page.set_attribute(form, "name", "formName")
            .map_err(|e| e.to_string())?;
        page.set_attribute(form, "id", "formID")
            .map_err(|e| e.to_string())?;
        let host = page.create_element(tag).map_err(|e| e.to_string())?;
        if !page.is_custom(host) {
            return Err(format!("<{tag}> is not a defined widget"));
        }
        page.append_child(form, host).map_err(|e| e.to_string())?;
        let body = page.body();
        page.append_child(body, form).map_err(|e| e.to_string())?;
        Ok(Self { page, form, host })
    }

    fn input(&self) -> Option<NodeId> {
        self.page
            .element::<NumericField>(self.host)
            .and_then(NumericField::input)
            .or_else(|| self.page.element::<TextField>(self.host).and_then(TextField::input))
    }

    fn label(&self) -> Option<NodeId> {
        self.page
            .element::<NumericField>(self.host)
            .and_then(NumericField::label)
            .or_else(|| self.page.element::<TextField>(self.host).and_then(TextField::label))
    }

    fn apply(&mut self, step: &Step) -> Result<(), String> {
        let host = self.host;
        let target = self.input().unwrap_or(host);
        let page = &mut self.page;
        let dom_err = |e: dom::DomError| e.to_string();
        match step {
            Step::SetAttribute { name, value } => page.set_attribute(host, name, value).map_err(dom_err),
            Step::RemoveAttribute { name } => page.remove_attribute(host, name).map_err(dom_err),
            Step::SetValue { number, text } => {
                let value = match (number, text) {
                    (Some(n), _) => PropertyValue::Number(*n),
                    (None, Some(t)) => PropertyValue::Text(t.clone()),
                    (None, None) => PropertyValue::Undefined,
                };
                let text_value = match &value {
                    PropertyValue::Text(t) => Some(t.clone()),
                    PropertyValue::Number(n) => Some(n.to_string()),
                    PropertyValue::Undefined => None,
                };
                if let Some(result) =
                    page.with_element::<NumericField, _>(host, |f, cx| f.set_value(cx, value.clone()))
                {
                    return result.map_err(dom_err);
                }
                page.with_element::<TextField, _>(host, |f, cx| f.set_value(cx, text_value.as_deref()))
                    .ok_or_else(|| "set_value on an unknown widget".to_string())?
                    .map_err(dom_err)
            }
            Step::SetPlaceholder { value } => {
                let value = value.as_deref();
                if let Some(result) =
                    page.with_element::<NumericField, _>(host, |f, cx| f.set_placeholder(cx, value))
                {
                    return result.map_err(dom_err);
                }
                page.with_element::<TextField, _>(host, |f, cx| f.set_placeholder(cx, value))
                    .ok_or_else(|| "set_placeholder on an unknown widget".to_string())?
                    .map_err(dom_err)
            }
            Step::SetDisabled { on } => {
                if let Some(result) =
                    page.with_element::<NumericField, _>(host, |f, cx| f.set_disabled(cx, *on))
                {
                    return result.map_err(dom_err);
                }
                page.with_element::<TextField, _>(host, |f, cx| f.set_disabled(cx, *on))
                    .ok_or_else(|| "set_disabled on an unknown widget".to_string())?
                    .map_err(dom_err)
            }
            Step::SetAutofocus { on } => page
                .with_element::<NumericField, _>(host, |f, cx| f.set_autofocus(cx, *on))
                .ok_or_else(|| "set_autofocus needs mn-number".to_string())?
                .map_err(dom_err),
            Step::KeyDown { key } => page
                .dispatch(target, UiEvent::key_down(parse_key(key)?))
                .map(drop)
                .map_err(dom_err),
            Step::KeyUp { key } => page
                .dispatch(target, UiEvent::key_up(parse_key(key)?))
                .map(drop)
                .map_err(dom_err),
            Step::Type { text } => {
                for c in text.chars() {
                    page.dispatch(target, UiEvent::key_down(Key::Char(c)))
                        .map_err(dom_err)?;
                }
                Ok(())
            }
            Step::Input { text } => page
                .dispatch(target, UiEvent::Input(text.clone()))
                .map(drop)
                .map_err(dom_err),
            Step::Focus => page.dispatch(target, UiEvent::Focus).map(drop).map_err(dom_err),
            Step::Blur => page.dispatch(target, UiEvent::Blur).map(drop).map_err(dom_err),
            Step::Submit => page.add_class(self.form, "submitted").map(drop).map_err(dom_err),
            Step::Validate => {
                if let Some(result) = page.with_element::<NumericField, _>(host, |f, cx| f.validate(cx)) {
                    return result.map(drop).map_err(dom_err);
                }
                page.with_element::<TextField, _>(host, |f, cx| f.validate(cx))
                    .ok_or_else(|| "validate on an unknown widget".to_string())?
                    .map(drop)
                    .map_err(dom_err)
            }
            Step::Detach => {
                let body = page.body();
                page.remove_child(body, self.form).map_err(dom_err)
            }
        }
    }

    fn outcome(&self) -> ScenarioOutcome {
        let doc = self.page.document();
        let input = self
            .input()
            .and_then(|id| self.page.text_controls().text(ControlId::from(id.0)))
            .unwrap_or_default()
            .to_string();
        let mask = self
            .page
            .element::<NumericField>(self.host)
            .and_then(NumericField::mask)
            .map(|id| doc.text_content(id))
            .unwrap_or_default();
        let label = self.label().map(|id| doc.text_content(id)).unwrap_or_default();
        ScenarioOutcome {
            value: self.page.element::<NumericField>(self.host).and_then(NumericField::value),
            text: self
                .page
                .element::<TextField>(self.host)
                .map(|f| f.value().to_string()),
            input,
            mask,
            label,
            classes: class_list(doc, self.host).into_iter().map(str::to_string).collect(),
            snapshot: self.page.snapshot(self.host).into_lines(),
        }
    }
}

/// Run a scenario and return what it produced.
pub fn run_scenario(scenario: &Scenario) -> Result<(ScenarioOutcome, Page), String> {
    let mut harness = Harness::new(&scenario.tag)?;
    for (i, step) in scenario.steps.iter().enumerate() {
        harness
            .apply(step)
            .map_err(|err| format!("step {} ({step:?}): {err}", i + 1))?;
    }
    let outcome = harness.outcome();
    Ok((outcome, harness.page))
}

/// Run a scenario and compare every expectation it declares.
pub fn check_scenario(scenario: &Scenario) -> Result<(), String> {
    let (outcome, page) = run_scenario(scenario)?;
    let expect = &scenario.expect;
    let mut failures = Vec::new();

    match &expect.value {
        Some(ExpectedValue::Number(n)) => {
            if outcome.value != Some(*n) {
                failures.push(format!("value: expected {n}, got {:?}", outcome.value));
            }
        }
        Some(ExpectedValue::Keyword(k)) if k == "undefined" => {
            if outcome.value.is_some() {
                failures.push(format!("value: expected undefined, got {:?}", outcome.value));
            }
        }
        Some(ExpectedValue::Keyword(k)) => failures.push(format!("unsupported value keyword '{k}'")),
        None => {}
    }
    let texts = [
        ("text", expect.text.as_ref(), outcome.text.clone().unwrap_or_default()),
        ("input", expect.input.as_ref(), outcome.input.clone()),
        ("mask", expect.mask.as_ref(), outcome.mask.clone()),
        ("label", expect.label.as_ref(), outcome.label.clone()),
    ];
    for (what, expected, actual) in texts {
        if let Some(expected) = expected
            && *expected != actual
        {
            failures.push(format!(
                "{what}: expected \"{}\", got \"{}\"",
                escape_text(expected),
                escape_text(&actual)
            ));
        }
    }
    for class in &expect.classes {
        if !outcome.classes.contains(class) {
            failures.push(format!("missing class '{class}' in {:?}", outcome.classes));
        }
    }
    for class in &expect.absent_classes {
        if outcome.classes.contains(class) {
            failures.push(format!("unexpected class '{class}' in {:?}", outcome.classes));
        }
    }
    for (field, present) in &expect.registered {
        let by_id = page.forms().lookup_by_id("formID", field).is_some();
        let by_name = page.forms().lookup_by_name("formName", field).is_some();
        if by_id != *present || by_name != *present {
            failures.push(format!(
                "registration of '{field}': expected {present}, by id {by_id}, by name {by_name}"
            ));
        }
    }
    if let Some(expected) = &expect.snapshot
        && *expected != outcome.snapshot
    {
        failures.push(format!("snapshot mismatch\n{}", diff_lines(expected, &outcome.snapshot)));
    }

    if failures.is_empty() {
        Ok(())
    } else {
        Err(format!("scenario '{}':\n  {}", scenario.id, failures.join("\n  ")))
    }
}
