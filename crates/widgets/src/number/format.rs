//! Number to text.

use super::mode::DisplayMode;
use crate::config::FormatConfig;

pub fn format(value: Option<f64>, mode: DisplayMode) -> String {
    format_with(value, mode, &FormatConfig::default())
}

pub fn mask_text(value: Option<f64>, mode: DisplayMode) -> String {
    mask_text_with(value, mode, &FormatConfig::default())
}

pub fn format_with(value: Option<f64>, mode: DisplayMode, config: &FormatConfig) -> String {
    let Some(value) = value.filter(|v| v.is_finite()) else {
        return String::new();
    };
    match mode {
        DisplayMode::Plain => {
            if value == 0.0 {
                "0".to_string()
            } else {
                value.to_string()
            }
        }
        DisplayMode::Decimal(places) | DisplayMode::Currency(places) => {
            let places = places.min(config.max_places);
            let fixed = strip_negative_zero(to_fixed(value, places));
            if config.decimal_separator == '.' {
                fixed
            } else {
                fixed.replace('.', &config.decimal_separator.to_string())
            }
        }
        DisplayMode::Percentage => {
            let points = value * 100.0;
            if !points.is_finite() {
                return String::new();
            }
            strip_negative_zero(to_fixed(points, 0))
        }
    }
}

/// Whether `value` has a text projection in `mode`. Percentage text is
/// `value * 100`, which can overflow for finite values.
pub fn is_displayable(value: f64, mode: DisplayMode) -> bool {
    value.is_finite() && (!mode.is_percentage() || (value * 100.0).is_finite())
}

/// Label text shown next to the control; only percentage mode has one.
pub fn mask_text_with(value: Option<f64>, mode: DisplayMode, config: &FormatConfig) -> String {
    if !mode.is_percentage() {
        return String::new();
    }
    let digits = format_with(value, mode, config);
    if digits.is_empty() {
        return digits;
    }
    digits + &config.percent_suffix
}

fn strip_negative_zero(text: String) -> String {
    match text.strip_prefix('-') {
        Some(rest) if rest.bytes().all(|b| b == b'0' || b == b'.') => rest.to_string(),
        _ => text,
    }
}

/// Fixed-point text with `places` digits. Exact halfway cases round away
/// from zero rather than to the even digit.
fn to_fixed(value: f64, places: usize) -> String {
    if !is_halfway(value, places) {
        return format!("{value:.places$}");
    }
    // One more digit is exact and ends in 5.
    let longer = places + 1;
    let mut exact = format!("{value:.longer$}");
    exact.pop();
    if exact.ends_with('.') {
        exact.pop();
    }
    increment_last_digit(&exact)
}

/// True when the binary value of `value` sits exactly halfway between two
/// `places`-digit decimals, i.e. its exact expansion ends at digit
/// `places + 1`.
fn is_halfway(value: f64, places: usize) -> bool {
    let bits = value.abs().to_bits();
    let biased = ((bits >> 52) & 0x7ff) as i64;
    let fraction = bits & ((1u64 << 52) - 1);
    let (mantissa, exp2) = if biased == 0 {
        (fraction, -1074)
    } else {
        (fraction | (1u64 << 52), biased - 1075)
    };
    if mantissa == 0 || exp2 >= 0 {
        return false;
    }
    let denominator_bits = -exp2 - i64::from(mantissa.trailing_zeros());
    denominator_bits == places as i64 + 1
}

/// Add one unit in the last place to a decimal magnitude, keeping the sign.
fn increment_last_digit(text: &str) -> String {
    let (sign, digits) = match text.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", text),
    };
    let mut bytes = digits.as_bytes().to_vec();
    let mut carry = true;
    for b in bytes.iter_mut().rev() {
        match *b {
            b'.' => {}
            b'9' => *b = b'0',
            _ => {
                *b += 1;
                carry = false;
                break;
            }
        }
    }
    let mut out = String::with_capacity(text.len() + 1);
    out.push_str(sign);
    if carry {
        out.push('1');
    }
    out.extend(bytes.into_iter().map(char::from));
    out
}
