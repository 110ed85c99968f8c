//! Builds a small form (`mn-input` for a name, `mn-number` for an amount)
//! and drives it from the command line.
//!
//! ```text
//! hotsite [--currency[=N] | --decimal[=N] | --percentage] [--min=X] [--max=X]
//!         [--step=X] [--required] [--value=TEXT] [--who=TEXT] [KEYS...]
//! ```
//!
//! Each `KEYS` argument replaces the amount text by typing followed by a blur.
//! `up` and `down` step the amount instead. The form is marked submitted
//! and validated before the snapshot is printed.

use dom::NodeId;
use mimalloc::MiMalloc;
use std::process::ExitCode;
use widgets::{Key, Modifiers, NumericField, Page, TextField, UiEvent};

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

enum Command {
    Attribute(String, String),
    Value(String),
    Who(String),
    Step(Key),
    Type(String),
}

fn parse_args(args: impl Iterator<Item = String>) -> Result<Vec<Command>, String> {
    let mut commands = Vec::new();
    for arg in args {
        let Some(flag) = arg.strip_prefix("--") else {
            commands.push(match arg.as_str() {
                "up" => Command::Step(Key::ArrowUp),
                "down" => Command::Step(Key::ArrowDown),
                _ => Command::Type(arg),
            });
            continue;
        };
        let (name, value) = flag.split_once('=').unwrap_or((flag, ""));
        match name {
            "currency" | "decimal" | "percentage" | "required" | "readonly" | "disabled" => {
                commands.push(Command::Attribute(name.to_string(), value.to_string()));
            }
            "min" | "max" | "step" | "name" | "placeholder" => {
                if value.is_empty() {
                    return Err(format!("--{name} needs a value"));
                }
                commands.push(Command::Attribute(name.to_string(), value.to_string()));
            }
            "value" => commands.push(Command::Value(value.to_string())),
            "who" => commands.push(Command::Who(value.to_string())),
            other => return Err(format!("unknown flag --{other}")),
        }
    }
    Ok(commands)
}

struct Hotsite {
    form: NodeId,
    who: NodeId,
    amount: NodeId,
}

fn build(page: &mut Page) -> Result<Hotsite, dom::DomError> {
    let form = page.create_element("form")?;
    page.set_attribute(form, "id", "hotsite")?;
    page.set_attribute(form, "name", "signup")?;

    let who = page.create_element(TextField::TAG)?;
    page.set_attribute(who, "name", "who")?;
    page.set_attribute(who, "placeholder", "Nome")?;
    page.set_attribute(who, "required", "")?;
    page.append_child(form, who)?;

    let amount = page.create_element(NumericField::TAG)?;
    page.set_attribute(amount, "name", "amount")?;
    page.set_attribute(amount, "placeholder", "Valor")?;
    page.append_child(form, amount)?;

    page.append_child(page.body(), form)?;
    Ok(Hotsite { form, who, amount })
}

fn run(commands: Vec<Command>) -> Result<(), dom::DomError> {
    let mut page = Page::new();
    let Hotsite { form, who, amount: host } = build(&mut page)?;
    let input = page
        .element::<NumericField>(host)
        .and_then(NumericField::input)
        .unwrap_or(host);

    for command in commands {
        match command {
            Command::Attribute(name, value) => page.set_attribute(host, &name, &value)?,
            Command::Value(text) => {
                page.with_element::<NumericField, _>(host, |field, cx| {
                    field.set_value(cx, text.as_str())
                })
                .transpose()?;
            }
            Command::Who(text) => {
                page.with_element::<TextField, _>(who, |field, cx| {
                    field.set_value(cx, Some(text.as_str()))
                })
                .transpose()?;
            }
            Command::Step(key) => {
                page.dispatch(input, UiEvent::key_down(key))?;
            }
            Command::Type(text) => {
                page.dispatch(input, UiEvent::Focus)?;
                page.dispatch(input, UiEvent::key_down(Key::Home))?;
                page.dispatch(
                    input,
                    UiEvent::KeyDown {
                        key: Key::End,
                        modifiers: Modifiers::SHIFT,
                    },
                )?;
                for c in text.chars() {
                    page.dispatch(input, UiEvent::key_down(Key::Char(c)))?;
                }
                page.dispatch(input, UiEvent::Blur)?;
            }
        }
        log::debug!(
            target: "minimalist",
            "value now {:?}",
            page.element::<NumericField>(host).and_then(NumericField::value)
        );
    }

    page.add_class(form, "submitted")?;
    page.with_element::<TextField, _>(who, |field, cx| field.validate(cx))
        .transpose()?;
    page.with_element::<NumericField, _>(host, |field, cx| field.validate(cx))
        .transpose()?;

    println!("{}", page.snapshot(form));
    if let Some(field) = page.element::<NumericField>(host) {
        match field.value() {
            Some(value) => println!("value = {value}"),
            None => println!("value = undefined"),
        }
        println!("status = {:?}", field.status());
    }
    if let Some(found) = page.forms().lookup_by_id("hotsite", "amount") {
        println!("registered amount = #{}", found.0);
    }
    Ok(())
}

fn main() -> ExitCode {
    let commands = match parse_args(std::env::args().skip(1)) {
        Ok(commands) => commands,
        Err(err) => {
            eprintln!("hotsite: {err}");
            return ExitCode::from(2);
        }
    };
    match run(commands) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("hotsite: {err}");
            ExitCode::FAILURE
        }
    }
}
