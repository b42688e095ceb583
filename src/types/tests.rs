use super::{coerce_amount, detect_currency, CurrencyRule, Monetary};
use anyhow::Result;
use rand::Rng;
use std::str::FromStr;

#[test]
fn test_monetary_successfully_parses_valid_strings() -> Result<()> {
    let test_cases = vec![
        ("1.0", "1.00"),
        ("3.00", "3.00"),
        ("0.01", "0.01"),
        ("-1.5", "-1.50"),
        ("  1.0  ", "1.00"),
        ("-0.01", "-0.01"),
        ("+1.0", "1.00"),
        ("100", "100.00"),
        ("1e2", "100.00"),
        ("2.5e-1", "0.25"),
    ];

    for (input_string, expected_output) in test_cases {
        assert_eq!(Monetary::from_str(input_string)?.to_string(), expected_output);
    }

    Ok(())
}

#[test]
fn test_monetary_rounds_half_away_from_zero() -> Result<()> {
    assert_eq!(Monetary::parse_decimal("0.125")?.cents(), 13);
    assert_eq!(Monetary::parse_decimal("0.124")?.cents(), 12);
    assert_eq!(Monetary::parse_decimal("-0.125")?.cents(), -13);
    assert_eq!(Monetary::parse_decimal("2.675")?.cents(), 268);
    assert_eq!(Monetary::parse_decimal("1.005")?.cents(), 101);

    Ok(())
}

#[test]
fn test_monetary_fails_to_parse_invalid_strings() {
    assert!(Monetary::from_str("abc").is_err());
    assert!(Monetary::from_str("1.2.3").is_err());
    assert!(Monetary::from_str("").is_err());
    assert!(Monetary::from_str("   ").is_err());
    assert!(Monetary::from_str("$3.00").is_err());
}

#[test]
fn test_monetary_rejects_values_beyond_cent_range() {
    assert!(Monetary::parse_decimal("100000000000000000000").is_err());
}

#[test]
fn test_monetary_quantity_multiplication_is_exact() -> Result<()> {
    let price = Monetary::parse_decimal("0.10")?;

    let total = price.checked_mul_quantity(3).unwrap_or_default();

    assert_eq!(total.cents(), 30);
    assert_eq!(total.to_string(), "0.30");
    assert_eq!(total.to_f64(), 0.3);
    assert!(price.checked_mul_quantity(i64::MAX).is_none());

    Ok(())
}

#[test]
fn test_monetary_provides_overflow_protection_for_large_values() {
    let mut monetary_value = Monetary::from_cents(i64::MAX - 1);

    monetary_value += Monetary::from_cents(1);

    assert_eq!(monetary_value.cents(), i64::MAX);

    monetary_value += Monetary::from_cents(1);

    assert_eq!(monetary_value.cents(), i64::MAX);
}

#[test]
fn test_monetary_displays_negative_fractions_with_sign() {
    assert_eq!(Monetary::from_cents(-5).to_string(), "-0.05");
    assert_eq!(Monetary::from_cents(-1234).to_string(), "-12.34");
    assert_eq!(Monetary::new().to_string(), "0.00");
}

#[test]
fn test_cents_round_trip_through_currency_text_is_lossless() -> Result<()> {
    let mut rng = rand::thread_rng();
    let rule = CurrencyRule::detected('$');

    for _ in 0..1_000 {
        let cents: i64 = rng.gen_range(0..10_000_000);
        let quantity: i64 = rng.gen_range(0..10_000);
        let price_text = format!("${}.{:02}", cents / 100, cents % 100);

        let (unit_price, coerced) = coerce_amount(&rule, Some(price_text.as_str()));
        let total = unit_price.checked_mul_quantity(quantity).unwrap_or_default();
        let (reparsed, _) = coerce_amount(&rule, Some(rule.format(total).as_str()));

        assert!(!coerced);
        assert_eq!(unit_price.cents(), cents);
        assert_eq!(total.cents(), cents * quantity);
        assert_eq!(reparsed, total);
    }

    Ok(())
}

#[test]
fn test_three_decimal_prices_round_consistently() -> Result<()> {
    let mut rng = rand::thread_rng();

    for _ in 0..1_000 {
        let mills: i64 = rng.gen_range(0..1_000_000);
        let text = format!("{}.{:03}", mills / 1000, mills % 1000);

        assert_eq!(Monetary::parse_decimal(&text)?.cents(), (mills + 5) / 10);
    }

    Ok(())
}

#[test]
fn test_detect_currency_takes_first_character_of_first_value() {
    let rule = detect_currency(["$3.00", "€2.00"], '£');

    assert_eq!(rule, CurrencyRule { symbol: '$', strip: 1 });
    assert!(rule.is_detected());
}

#[test]
fn test_detect_currency_skips_blank_values() {
    let rule = detect_currency(["", "   ", "€4.50"], '$');

    assert_eq!(rule, CurrencyRule::detected('€'));
}

#[test]
fn test_detect_currency_falls_back_without_values() {
    let values: Vec<&str> = Vec::new();

    assert_eq!(detect_currency(values, '$'), CurrencyRule { symbol: '$', strip: 0 });
    assert_eq!(detect_currency(["", ""], '$'), CurrencyRule::fallback('$'));
}

#[test]
fn test_detect_currency_treats_numeric_lead_as_no_symbol() {
    assert_eq!(detect_currency(["3.00"], '$'), CurrencyRule::fallback('$'));
    assert_eq!(detect_currency(["-3.00"], '$'), CurrencyRule::fallback('$'));
    assert_eq!(detect_currency([".50"], '£'), CurrencyRule::fallback('£'));
}

#[test]
fn test_detect_currency_is_idempotent() {
    let values = ["$1.00", "$2.00"];

    assert_eq!(detect_currency(values, '£'), detect_currency(values, '£'));
}

#[test]
fn test_symbol_only_value_is_detected_and_coerced_to_zero() {
    let rule = detect_currency(["$"], '£');

    let (amount, coerced) = coerce_amount(&rule, Some("$"));

    assert_eq!(rule, CurrencyRule::detected('$'));
    assert!(amount.is_zero());
    assert!(coerced);
}

#[test]
fn test_strip_counts_characters_not_bytes() {
    let rule = CurrencyRule::detected('€');

    assert_eq!(rule.strip("€12.50"), "12.50");
    assert_eq!(rule.strip("€"), "");
    assert_eq!(rule.strip(""), "");
    assert_eq!(CurrencyRule::fallback('$').strip("12.50"), "12.50");
}

#[test]
fn test_coerce_amount_zeroes_unparseable_values() {
    let rule = CurrencyRule::detected('$');

    assert_eq!(coerce_amount(&rule, Some("$abc")), (Monetary::new(), true));
    assert_eq!(coerce_amount(&rule, Some("")), (Monetary::new(), true));
    assert_eq!(coerce_amount(&rule, None), (Monetary::new(), true));
    assert_eq!(coerce_amount(&rule, Some("$3.00")), (Monetary::from_cents(300), false));
}

#[test]
fn test_format_prefixes_symbol_with_two_decimals() {
    let rule = CurrencyRule::fallback('$');

    assert_eq!(rule.format(Monetary::from_cents(1250)), "$12.50");
    assert_eq!(rule.format(Monetary::from_cents(-300)), "$-3.00");
}
