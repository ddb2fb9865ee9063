//! Integration tests for list style types and marker generation.

use std::str::FromStr;

use strum::IntoEnumIterator;
use tally_counter::ListStyleType;

#[test]
fn test_parse_keywords() {
    assert_eq!(
        ListStyleType::from_str("upper-roman"),
        Ok(ListStyleType::UpperRoman)
    );
    assert_eq!(
        ListStyleType::from_str("Lower-Alpha"),
        Ok(ListStyleType::LowerAlpha)
    );
    assert_eq!(ListStyleType::from_str("NONE"), Ok(ListStyleType::None));
    assert!(ListStyleType::from_str("roman").is_err());
}

#[test]
fn test_keywords_round_trip_through_display() {
    for style in ListStyleType::iter() {
        assert_eq!(ListStyleType::from_str(&style.to_string()), Ok(style));
    }
    assert_eq!(ListStyleType::LowerRoman.to_string(), "lower-roman");
}

#[test]
fn test_default_is_disc() {
    assert_eq!(ListStyleType::default(), ListStyleType::Disc);
}

#[test]
fn test_bullet_markers_ignore_value() {
    for value in [-1, 0, 1, 5000] {
        assert_eq!(ListStyleType::Disc.marker(value), "• ");
        assert_eq!(ListStyleType::Circle.marker(value), "◦ ");
        assert_eq!(ListStyleType::Square.marker(value), "▪ ");
        assert_eq!(ListStyleType::None.marker(value), "");
    }
}

#[test]
fn test_counter_markers() {
    assert_eq!(ListStyleType::Decimal.marker(3), "3. ");
    assert_eq!(ListStyleType::Decimal.marker(-2), "-2. ");
    assert_eq!(ListStyleType::LowerAlpha.marker(27), "aa. ");
    assert_eq!(ListStyleType::UpperAlpha.marker(3), "C. ");
    assert_eq!(ListStyleType::LowerRoman.marker(14), "xiv. ");
    assert_eq!(ListStyleType::UpperRoman.marker(1994), "MCMXCIV. ");
}

#[test]
fn test_out_of_range_falls_back_to_decimal() {
    assert_eq!(ListStyleType::UpperRoman.marker(4000), "4000. ");
    assert_eq!(ListStyleType::LowerRoman.marker(0), "0. ");
    assert_eq!(ListStyleType::UpperAlpha.marker(-1), "-1. ");
}

#[test]
fn test_ranges() {
    assert!(ListStyleType::UpperRoman.in_range(3999));
    assert!(!ListStyleType::UpperRoman.in_range(4000));
    assert!(ListStyleType::LowerAlpha.in_range(100_000));
    assert!(!ListStyleType::LowerAlpha.in_range(0));
    assert!(ListStyleType::Decimal.in_range(i64::MIN));
}

#[test]
fn test_range_agrees_with_representation_at_boundaries() {
    let boundaries = [i64::MIN, -1, 0, 1, 2, 26, 27, 3998, 3999, 4000, i64::MAX];
    for style in ListStyleType::iter().filter(|style| style.is_counter()) {
        for value in boundaries {
            assert_eq!(
                style.in_range(value),
                style.representation(value).is_some(),
                "{style} at {value}"
            );
        }
    }
}

#[test]
fn test_representation() {
    assert_eq!(ListStyleType::Disc.representation(1), None);
    assert_eq!(
        ListStyleType::UpperRoman.representation(9).as_deref(),
        Some("IX")
    );
    assert_eq!(ListStyleType::UpperRoman.representation(4000), None);
    assert!(ListStyleType::Decimal.is_counter());
    assert!(!ListStyleType::Square.is_counter());
}

#[test]
fn test_serializes_as_keyword() {
    assert_eq!(
        serde_json::to_string(&ListStyleType::UpperAlpha).unwrap(),
        "\"upper-alpha\""
    );
}
