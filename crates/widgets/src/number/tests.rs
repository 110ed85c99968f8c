use super::eval::evaluate;
use super::*;
use crate::config::FormatConfig;

const MODES: [DisplayMode; 5] = [
    DisplayMode::Plain,
    DisplayMode::Decimal(2),
    DisplayMode::Currency(3),
    DisplayMode::Percentage,
    DisplayMode::Decimal(0),
];

#[test]
fn empty_and_blank_text_has_no_value() {
    for mode in MODES {
        assert_eq!(parse("", mode), None);
        assert_eq!(parse("   ", mode), None);
        assert_eq!(parse_entry("", mode), None);
    }
}

#[test]
fn letters_reject_the_whole_text() {
    for text in ["123a", "t1", "teste", "1e5", "R$ 10", "NaN", "Infinity", "ä1"] {
        for mode in MODES {
            assert_eq!(parse(text, mode), None, "{text:?} in {mode:?}");
        }
    }
}

#[test]
fn plain_numbers_and_separators() {
    assert_eq!(parse("123", DisplayMode::Plain), Some(123.0));
    assert_eq!(parse(" 10.70 ", DisplayMode::Plain), Some(10.7));
    assert_eq!(parse("10,000", DisplayMode::Currency(3)), Some(10.0));
    assert_eq!(parse("1.234,5", DisplayMode::Decimal(2)), Some(1234.5));
    assert_eq!(parse("1 234,50", DisplayMode::Decimal(2)), Some(1234.5));
    assert_eq!(parse("-3,25", DisplayMode::Plain), Some(-3.25));
    assert_eq!(parse(".5", DisplayMode::Plain), Some(0.5));
}

#[test]
fn expressions_evaluate() {
    assert_eq!(parse("1*2", DisplayMode::Percentage), Some(2.0));
    assert_eq!(parse("2+3*4", DisplayMode::Plain), Some(14.0));
    assert_eq!(parse("(2+3)*4", DisplayMode::Plain), Some(20.0));
    assert_eq!(parse("-(1,5)", DisplayMode::Plain), Some(-1.5));
    assert_eq!(parse("10/4", DisplayMode::Plain), Some(2.5));
    assert_eq!(parse("--2", DisplayMode::Plain), Some(2.0));
}

#[test]
fn failed_expressions_have_no_value() {
    for text in ["1/0", "0/0", "1+", "(1", "1)", "1..2", "*2", "()", ".", "%", "1#"] {
        assert_eq!(parse(text, DisplayMode::Plain), None, "{text:?}");
    }
}

#[test]
fn percentage_entry_divides_by_hundred() {
    assert_eq!(parse("50", DisplayMode::Percentage), Some(50.0));
    assert_eq!(parse_entry("50", DisplayMode::Percentage), Some(0.5));
    assert_eq!(parse_entry("50 %", DisplayMode::Percentage), Some(0.5));
    assert_eq!(parse_entry("12,5%", DisplayMode::Percentage), Some(0.125));
    assert_eq!(parse_entry("50", DisplayMode::Decimal(2)), Some(50.0));
    assert_eq!(parse_entry("abc", DisplayMode::Percentage), None);
}

#[test]
fn percent_sign_only_strips_in_percentage_mode() {
    assert_eq!(parse("5%", DisplayMode::Plain), None);
    assert_eq!(parse("5%", DisplayMode::Percentage), Some(5.0));
}

#[test]
fn no_value_formats_empty_everywhere() {
    for mode in MODES {
        assert_eq!(format(None, mode), "");
        assert_eq!(mask_text(None, mode), "");
    }
}

#[test]
fn plain_format() {
    assert_eq!(format(Some(123.0), DisplayMode::Plain), "123");
    assert_eq!(format(Some(10.5), DisplayMode::Plain), "10.5");
    assert_eq!(format(Some(-0.0), DisplayMode::Plain), "0");
    assert_eq!(format(Some(f64::NAN), DisplayMode::Plain), "");
}

#[test]
fn fixed_point_format_uses_comma() {
    assert_eq!(format(Some(10.0), DisplayMode::Currency(2)), "10,00");
    assert_eq!(format(Some(10.0), DisplayMode::Currency(3)), "10,000");
    assert_eq!(format(Some(10.7), DisplayMode::Decimal(2)), "10,70");
    assert_eq!(format(Some(10.1), DisplayMode::Decimal(2)), "10,10");
    assert_eq!(format(Some(2.4), DisplayMode::Decimal(0)), "2");
    assert_eq!(format(Some(-0.001), DisplayMode::Decimal(2)), "0,00");
    assert_eq!(format(Some(-1.5), DisplayMode::Decimal(1)), "-1,5");
}

#[test]
fn percentage_format_and_mask() {
    let mode = DisplayMode::Percentage;
    assert_eq!(format(Some(1.0), mode), "100");
    assert_eq!(mask_text(Some(1.0), mode), "100 %");
    assert_eq!(format(Some(0.01), mode), "1");
    assert_eq!(mask_text(Some(0.01), mode), "1 %");
    assert_eq!(format(Some(1182.0), mode), "118200");
    assert_eq!(format(Some(0.0), mode), "0");
    assert_eq!(mask_text(Some(0.0), mode), "0 %");
    assert_eq!(format(Some(0.07), mode), "7");
    assert_eq!(mask_text(Some(2.0), DisplayMode::Decimal(2)), "");
}

#[test]
fn halfway_values_round_away_from_zero() {
    assert_eq!(format(Some(0.125), DisplayMode::Currency(2)), "0,13");
    assert_eq!(format(Some(2.5), DisplayMode::Decimal(0)), "3");
    assert_eq!(format(Some(0.125), DisplayMode::Percentage), "13");
    assert_eq!(mask_text(Some(0.125), DisplayMode::Percentage), "13 %");
    assert_eq!(format(Some(-2.5), DisplayMode::Decimal(0)), "-3");
    assert_eq!(format(Some(9.995), DisplayMode::Decimal(2)), "9,99");
    assert_eq!(format(Some(9.5), DisplayMode::Decimal(0)), "10");
    assert_eq!(format(Some(0.375), DisplayMode::Currency(2)), "0,38");
    assert_eq!(format(Some(1.25), DisplayMode::Decimal(3)), "1,250");
}

#[test]
fn overflowing_percentage_is_not_displayable() {
    assert!(is_displayable(1e300, DisplayMode::Percentage));
    assert!(!is_displayable(1e307, DisplayMode::Percentage));
    assert!(is_displayable(1e307, DisplayMode::Decimal(2)));
    assert!(!is_displayable(f64::INFINITY, DisplayMode::Plain));
}

#[test]
fn places_are_clamped_by_config() {
    let config = FormatConfig::default();
    let wide = format(Some(1.0), DisplayMode::Decimal(40));
    assert_eq!(wide.split(',').nth(1).map(str::len), Some(config.max_places));
    assert_eq!(parse_places("", &config), 2);
    assert_eq!(parse_places("abc", &config), 2);
    assert_eq!(parse_places(" 3 ", &config), 3);
    assert_eq!(parse_places("99", &config), config.max_places);
}

#[test]
fn mode_precedence_is_currency_then_decimal_then_percentage() {
    let config = FormatConfig::default();
    assert_eq!(
        DisplayMode::from_attributes(Some("3"), Some("1"), true, &config),
        DisplayMode::Currency(3)
    );
    assert_eq!(
        DisplayMode::from_attributes(None, Some(""), true, &config),
        DisplayMode::Decimal(2)
    );
    assert_eq!(
        DisplayMode::from_attributes(None, None, true, &config),
        DisplayMode::Percentage
    );
    assert_eq!(
        DisplayMode::from_attributes(None, None, false, &config),
        DisplayMode::Plain
    );
}

#[test]
fn custom_separators_round_trip() {
    let config = FormatConfig {
        decimal_separator: '.',
        grouping_separator: ',',
        ..FormatConfig::default()
    };
    let text = format_with(Some(1234.5), DisplayMode::Decimal(2), &config);
    assert_eq!(text, "1234.50");
    assert_eq!(parse_with("1,234.50", DisplayMode::Decimal(2), &config), Some(1234.5));
    assert_eq!(parse_with("1,234", DisplayMode::Plain, &config), Some(1234.0));
}

#[test]
fn fixed_point_round_trip_stays_within_precision() {
    for v in [0.0, 1.0, -1.0, 10.125, 1234.5678, -98765.4321, 0.004, 1e12] {
        for places in [0usize, 1, 2, 3, 6] {
            for mode in [DisplayMode::Decimal(places), DisplayMode::Currency(places)] {
                let text = format(Some(v), mode);
                let back = parse(&text, mode).unwrap_or(f64::NAN);
                let tolerance = 10f64.powi(-(places as i32));
                assert!(
                    (back - v).abs() <= tolerance,
                    "{v} {mode:?} -> {text:?} -> {back}"
                );
            }
        }
    }
}

#[test]
fn validation_rules() {
    let none = Constraints::default();
    assert!(validate(None, &none).is_valid());
    assert!(validate(Some(-1e9), &none).is_valid());

    let bounded = Constraints {
        required: true,
        min: Some(0.0),
        max: Some(100.0),
        ..Constraints::default()
    };
    let missing = validate(None, &bounded);
    assert!(missing.contains(Violation::Required));
    assert!(!missing.contains(Violation::Min));
    assert!(!missing.contains(Violation::Max));

    assert!(validate(Some(-10.0), &bounded).contains(Violation::Min));
    assert!(validate(Some(101.0), &bounded).contains(Violation::Max));
    assert!(validate(Some(100.0), &bounded).is_valid());
    assert!(validate(Some(0.0), &bounded).is_valid());

    let unbounded_min = Constraints {
        min: Some(5.0),
        ..Constraints::default()
    };
    assert!(validate(None, &unbounded_min).is_valid());
}

#[test]
fn status_is_derived() {
    let state = ValidationState::default();
    assert_eq!(FieldStatus::derive(None, state), FieldStatus::Unset);
    assert_eq!(FieldStatus::derive(Some(1.0), state), FieldStatus::Valid);
    let mut bad = ValidationState::default();
    bad.insert(Violation::Max);
    assert_eq!(FieldStatus::derive(Some(1.0), bad), FieldStatus::Invalid);
    assert_eq!(bad.iter().collect::<Vec<_>>(), vec![Violation::Max]);
}

#[test]
fn eval_errors_carry_a_code_and_position() {
    let err = evaluate("1+*2").unwrap_err();
    assert_eq!(err.code, EvalErrorCode::UnexpectedChar);
    assert_eq!(err.position, 2);

    assert_eq!(evaluate("(1+2").unwrap_err().code, EvalErrorCode::UnbalancedParen);
    assert_eq!(evaluate("1)").unwrap_err().code, EvalErrorCode::UnbalancedParen);
    assert_eq!(evaluate("1 2").unwrap_err().code, EvalErrorCode::TrailingInput);
    assert_eq!(evaluate("1/0").unwrap_err().code, EvalErrorCode::NonFinite);
    assert_eq!(evaluate("1.2.3").unwrap_err().code, EvalErrorCode::InvalidNumber);
    assert_eq!(evaluate("").unwrap_err().code, EvalErrorCode::UnexpectedEnd);

    let deep = format!("{}1{}", "(".repeat(200), ")".repeat(200));
    assert_eq!(evaluate(&deep).unwrap_err().code, EvalErrorCode::TooDeep);
    assert!(evaluate(&format!("{}1", "-".repeat(500))).is_err());
}

#[test]
fn eval_error_display_names_the_position() {
    let err = evaluate("2*").unwrap_err();
    assert_eq!(err.to_string(), "unexpected end of expression at byte 2");
}
