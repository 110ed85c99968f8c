#![no_main]

use libfuzzer_sys::fuzz_target;
use widgets::number::{DisplayMode, format, mask_text, parse, parse_entry};

fn mode_for(byte: u8) -> DisplayMode {
    match byte % 4 {
        0 => DisplayMode::Plain,
        1 => DisplayMode::Decimal(usize::from(byte >> 2) % 8),
        2 => DisplayMode::Currency(usize::from(byte >> 2) % 8),
        _ => DisplayMode::Percentage,
    }
}

fuzz_target!(|data: &[u8]| {
    let Some((&selector, rest)) = data.split_first() else {
        return;
    };
    let Ok(text) = std::str::from_utf8(rest) else {
        return;
    };
    let mode = mode_for(selector);

    for value in [parse(text, mode), parse_entry(text, mode)].into_iter().flatten() {
        assert!(value.is_finite(), "{text:?} parsed to {value}");
        let shown = format(Some(value), mode);
        // Whatever the widget displays must read back as a number.
        assert!(
            parse_entry(&shown, mode).is_some() || shown.is_empty(),
            "{shown:?} from {text:?} does not read back"
        );
        let _ = mask_text(Some(value), mode);
    }
});
