#![no_main]

use libfuzzer_sys::fuzz_target;
use widgets::{Key, Modifiers, NumericField, Page, UiEvent};

const ATTRIBUTES: [&str; 6] = ["currency", "decimal", "percentage", "readonly", "disabled", "required"];

fn key_for(byte: u8) -> Key {
    match byte % 16 {
        0 => Key::ArrowUp,
        1 => Key::ArrowDown,
        2 => Key::ArrowLeft,
        3 => Key::ArrowRight,
        4 => Key::Home,
        5 => Key::End,
        6 => Key::Backspace,
        7 => Key::Delete,
        8 => Key::Char(','),
        9 => Key::Char('.'),
        10 => Key::Char('-'),
        11 => Key::Char('*'),
        _ => Key::Char(char::from(b'0' + byte % 10)),
    }
}

fuzz_target!(|data: &[u8]| {
    let mut page = Page::new();
    let Ok(host) = page.create_element(NumericField::TAG) else {
        return;
    };
    if page.append_child(page.body(), host).is_err() {
        return;
    }
    let Some(input) = page.element::<NumericField>(host).and_then(NumericField::input) else {
        return;
    };

    for pair in data.chunks(2) {
        let [op, arg] = *pair else {
            break;
        };
        let result = match op % 8 {
            0 => {
                let name = ATTRIBUTES[usize::from(arg) % ATTRIBUTES.len()];
                page.set_attribute(host, name, "")
            }
            1 => {
                let name = ATTRIBUTES[usize::from(arg) % ATTRIBUTES.len()];
                page.remove_attribute(host, name)
            }
            2 => page.dispatch(input, UiEvent::Blur).map(drop),
            3 => page
                .dispatch(
                    input,
                    UiEvent::KeyDown {
                        key: key_for(arg),
                        modifiers: Modifiers::SHIFT,
                    },
                )
                .map(drop),
            _ => page.dispatch(input, UiEvent::key_down(key_for(arg))).map(drop),
        };
        assert!(result.is_ok(), "widget operation failed: {result:?}");

        if let Some(field) = page.element::<NumericField>(host) {
            assert!(field.value().is_none_or(f64::is_finite));
        }
    }
});
