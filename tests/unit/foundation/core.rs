use super::*;

#[test]
fn digit_string_rejects_empty_and_non_digits() {
    assert!(DigitString::new("0123456789").is_ok());
    assert!(matches!(
        DigitString::new(""),
        Err(CounterError::InvalidParameter(_))
    ));
    assert!(matches!(
        DigitString::new("12a4"),
        Err(CounterError::InvalidParameter(_))
    ));
    assert!(DigitString::new("-1").is_err());
    assert!(DigitString::new("1.5").is_err());
}

#[test]
fn digit_string_bounded_length() {
    let ok = "7".repeat(MAX_DIGITS);
    assert_eq!(DigitString::parse_bounded(&ok, MAX_DIGITS).unwrap().len(), MAX_DIGITS);

    let too_long = "7".repeat(MAX_DIGITS + 1);
    assert!(DigitString::parse_bounded(&too_long, MAX_DIGITS).is_err());

    assert_eq!(
        DigitString::parse_bounded("  42\n", MAX_DIGITS).unwrap().as_str(),
        "42"
    );
}

#[test]
fn speed_multiplier_must_be_positive_and_finite() {
    assert!(SpeedMultiplier::new(0.0).is_err());
    assert!(SpeedMultiplier::new(-1.0).is_err());
    assert!(SpeedMultiplier::new(f64::NAN).is_err());
    assert!(SpeedMultiplier::new(f64::INFINITY).is_err());
    assert_eq!(SpeedMultiplier::new(2.0).unwrap().get(), 2.0);
    assert_eq!(SpeedMultiplier::default().get(), 0.5);
}

#[test]
fn speed_multiplier_parses_numeric_text() {
    assert_eq!("1.5".parse::<SpeedMultiplier>().unwrap().get(), 1.5);
    assert_eq!(" 2 ".parse::<SpeedMultiplier>().unwrap().get(), 2.0);
    assert!(matches!(
        "fast".parse::<SpeedMultiplier>(),
        Err(CounterError::InvalidParameter(_))
    ));
    assert!("0".parse::<SpeedMultiplier>().is_err());
}

#[test]
fn adjust_ms_divides_and_truncates() {
    let double = SpeedMultiplier::new(2.0).unwrap();
    let half = SpeedMultiplier::new(0.5).unwrap();
    let third = SpeedMultiplier::new(3.0).unwrap();
    assert_eq!(double.adjust_ms(100), 50);
    assert_eq!(half.adjust_ms(100), 200);
    assert_eq!(third.adjust_ms(100), 33);
    assert_eq!(SpeedMultiplier::new(1e-12).unwrap().adjust_ms(100), u32::MAX);
}

#[test]
fn default_file_stem_keeps_first_ten_digits() {
    let short = DigitString::new("42").unwrap();
    assert_eq!(default_file_stem(&short, "clock"), "42_clock");

    let long = DigitString::new("123456789012345").unwrap();
    assert_eq!(default_file_stem(&long, "flip"), "1234567890_flip");
}
