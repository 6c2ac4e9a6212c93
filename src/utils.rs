/// Common utility functions.
use crate::field::FieldValue;

/// Converts string into unsigned number with bounds validation.
pub(crate) fn parse_digital_value(input: &str, min: FieldValue, max: FieldValue) -> Option<FieldValue> {
    let value = input.parse::<u16>();
    if let Ok(value) = value {
        if value < min || value > max {
            None
        } else {
            Some(value)
        }
    } else {
        None
    }
}

/// Converts string with mnemonic value representation into unsigned number.
pub(crate) fn parse_string_value(input: &str, values: &[&str]) -> Option<FieldValue> {
    if input.is_empty() {
        None
    } else {
        values
            .iter()
            .position(|&x| x.to_uppercase() == input.to_uppercase())
            .map(|i| i as FieldValue)
    }
}

/// Returns `true` if provided year is leap.
#[inline]
pub(crate) fn is_leap_year(year: FieldValue) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// Returns number of days in specified month.
pub(crate) fn days_in_month(year: FieldValue, month: FieldValue) -> FieldValue {
    if month == 0 || month > 12 {
        panic!("Invalid month: {month}");
    }

    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => unreachable!(),
    }
}

/// Calculates day of week for specified date, 0 is Sunday.
pub(crate) fn day_of_week(year: FieldValue, month: FieldValue, day: FieldValue) -> FieldValue {
    if day == 0 || month == 0 || month > 12 || day > days_in_month(year, month) {
        panic!("Invalid date: {year:04}-{month:02}-{day:02}");
    }

    let month_offset: FieldValue = if is_leap_year(year) {
        [0, 3, 4, 0, 2, 5, 0, 3, 6, 1, 4, 6]
    } else {
        [0, 3, 3, 6, 1, 4, 6, 2, 5, 0, 3, 5]
    }[(month - 1) as usize];

    let year = year - 1;

    ((day + month_offset + 5 * (year % 4) + 4 * (year % 100) + 6 * (year % 400)) % 7) as FieldValue
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn parse_digital_value_valid_value_within_range() {
        assert_eq!(parse_digital_value("5", 0, 10), Some(5));
        assert_eq!(parse_digital_value("0", 0, 10), Some(0));
        assert_eq!(parse_digital_value("10", 0, 10), Some(10));
    }

    #[test]
    fn parse_digital_value_value_below_minimum() {
        assert_eq!(parse_digital_value("5", 10, 20), None);
    }

    #[test]
    fn parse_digital_value_value_above_maximum() {
        assert_eq!(parse_digital_value("25", 0, 20), None);
    }

    #[test]
    fn parse_digital_value_invalid_input() {
        assert_eq!(parse_digital_value("abc", 0, 10), None);
        assert_eq!(parse_digital_value("", 0, 10), None);
        assert_eq!(parse_digital_value("-1", 0, 10), None);
        assert_eq!(parse_digital_value("1.5", 0, 10), None);
    }

    #[test]
    fn parse_digital_value_edge_cases() {
        // Test with min equal to max
        assert_eq!(parse_digital_value("5", 5, 5), Some(5));
        assert_eq!(parse_digital_value("4", 5, 5), None);
        assert_eq!(parse_digital_value("6", 5, 5), None);

        // Test with large valid numbers
        assert_eq!(parse_digital_value("65535", 0, 65535), Some(65535));
    }

    #[test]
    fn parse_string_value_regular() {
        let test_array = &[
            "sunday",
            "monday",
            "tuesday",
            "wednesday",
            "thursday",
            "friday",
            "saturday",
        ];

        // Test valid cases with different casing
        assert_eq!(parse_string_value("monday", test_array), Some(1));
        assert_eq!(parse_string_value("FRIDAY", test_array), Some(5));
        assert_eq!(parse_string_value("SuNdAy", test_array), Some(0));

        // Test first and last elements
        assert_eq!(parse_string_value("sunday", test_array), Some(0));
        assert_eq!(parse_string_value("saturday", test_array), Some(6));

        // Test invalid cases
        assert_eq!(parse_string_value("", test_array), None);
        assert_eq!(parse_string_value("invalid_day", test_array), None);

        // Test with a different array
        let months = &["jan", "feb", "mar"];
        assert_eq!(parse_string_value("feb", months), Some(1));
        assert_eq!(parse_string_value("FEB", months), Some(1));
        assert_eq!(parse_string_value("dec", months), None);
    }

    #[test]
    fn parse_string_value_empty_array() {
        let empty_array: &[&str] = &[];
        assert_eq!(parse_string_value("test", empty_array), None);
    }

    #[test]
    fn parse_string_value_whitespace() {
        let array = &["test", "value"];
        assert_eq!(parse_string_value(" test ", array), None);
        assert_eq!(parse_string_value("\ttest", array), None);
    }

    #[rstest]
    // Test leap years divisible by 4 but not 100
    #[case(2024, true)]
    #[case(1996, true)]
    // Test leap years divisible by 400
    #[case(2000, true)]
    #[case(1600, true)]
    // Test non-leap years not divisible by 4
    #[case(2023, false)]
    #[case(2021, false)]
    // Test non-leap years divisible by 100 but not 400
    #[case(1900, false)]
    #[case(2100, false)]
    fn test_is_leap_year(#[case] year: FieldValue, #[case] expected: bool) {
        assert_eq!(
            is_leap_year(year),
            expected,
            "{year:} is {}",
            if expected { "leap" } else { "not-leap" }
        );
    }

    #[rstest]
    // Test months with 31 days
    #[case(2023, 1, 31)] // January
    #[case(2023, 3, 31)] // March
    #[case(2023, 5, 31)] // May
    #[case(2023, 7, 31)] // July
    #[case(2023, 8, 31)] // August
    #[case(2023, 10, 31)] // October
    #[case(2023, 12, 31)] // December
    // Test months with 30 days
    #[case(2023, 4, 30)] // April
    #[case(2023, 6, 30)] // June
    #[case(2023, 9, 30)] // September
    #[case(2023, 11, 30)] // November
    // Test February in non-leap year
    #[case(2023, 2, 28)]
    // Test February in leap years
    #[case(2024, 2, 29)]
    #[case(2020, 2, 29)]
    #[case(2000, 2, 29)]
    // Test February in century years (not leap unless divisible by 400)
    #[case(1900, 2, 28)]
    #[case(2100, 2, 28)]
    fn test_days_in_month(#[case] y: FieldValue, #[case] m: FieldValue, #[case] expected: FieldValue) {
        assert_eq!(days_in_month(y, m), expected, "{y:04}-{m:02} has {expected} days");
    }

    #[rstest]
    #[case(2023, 0)]
    #[case(2023, 13)]
    #[should_panic(expected = "Invalid month")]
    fn test_days_in_month_invalid(#[case] y: FieldValue, #[case] m: FieldValue) {
        days_in_month(y, m);
    }

    #[rstest]
    // Test regular days
    #[case(2023, 12, 25, 1)] // Monday
    #[case(2024, 1, 1, 1)] // Monday
    #[case(2025, 1, 1, 3)] // Wednesday
    #[case(2024, 2, 29, 4)] // Thursday (leap year)
    #[case(2023, 1, 1, 0)] // Sunday
    // Test edge cases
    #[case(2000, 1, 1, 6)] // Saturday (century leap year)
    #[case(1900, 1, 1, 1)] // Monday (non-leap century year)
    // Test different months
    #[case(2023, 3, 15, 3)] // Wednesday
    #[case(2023, 7, 4, 2)] // Tuesday
    #[case(2023, 10, 31, 2)] // Tuesday
    // Randomly picked days
    #[case(1971, 8, 21, 6)]
    #[case(1945, 6, 22, 5)]
    #[case(2020, 2, 29, 6)]
    #[case(2099, 1, 1, 4)]
    #[case(2100, 1, 1, 5)]
    #[case(2400, 1, 1, 6)]
    fn test_day_of_week(
        #[case] y: FieldValue,
        #[case] m: FieldValue,
        #[case] d: FieldValue,
        #[case] expected: FieldValue,
    ) {
        assert_eq!(
            day_of_week(y, m, d),
            expected,
            "date {y}-{m:02}-{d:02}, should be {expected}"
        );
    }

    #[rstest]
    #[case(2023, 2, 29)]
    #[case(2024, 0, 1)]
    #[case(2023, 13, 22)]
    #[case(2025, 1, 0)]
    #[case(2024, 1, 32)]
    #[case(2023, 4, 31)]
    #[should_panic(expected = "Invalid date: ")]
    fn test_day_of_week_invalid_date(#[case] y: FieldValue, #[case] m: FieldValue, #[case] d: FieldValue) {
        day_of_week(y, m, d);
    }
}
