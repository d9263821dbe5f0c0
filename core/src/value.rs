//! Interpretation of textual DICOM values.
//!
//! Numbers in text form (Decimal String, Integer String) may carry
//! multiple values separated by backslashes (the value multiplicity),
//! plus padding with spaces or NUL characters.
//! The functions here take these strings apart without allocating
//! for the common multiplicities (up to 6 values).

use smallvec::SmallVec;

/// The separator between values of a multi-valued textual element.
pub const VALUE_SEPARATOR: char = '\\';

/// A small vector of decimal values, inline for up to 6 values.
pub type Decimals = SmallVec<[f64; 6]>;

/// Remove leading and trailing padding (spaces and NUL characters)
/// from a textual value.
#[inline]
pub fn trim_value(text: &str) -> &str {
    text.trim_matches(|c: char| c == '\0' || c.is_whitespace())
}

/// Iterate over the individual values of a multi-valued textual element,
/// each trimmed of its padding.
///
/// ```
/// # use dcmhead_core::value::split_values;
/// let parts: Vec<_> = split_values(" 40\\80 ").collect();
/// assert_eq!(parts, vec!["40", "80"]);
/// ```
pub fn split_values(text: &str) -> impl Iterator<Item = &str> {
    text.split(VALUE_SEPARATOR).map(trim_value)
}

/// Parse a single decimal number in text form.
///
/// Padding is ignored. Only finite numbers are accepted,
/// since a Decimal String cannot represent infinities or NaN.
///
/// ```
/// # use dcmhead_core::value::parse_decimal;
/// assert_eq!(parse_decimal(" -1024 "), Some(-1024.));
/// assert_eq!(parse_decimal("1.5e2\0"), Some(150.));
/// assert_eq!(parse_decimal("abc"), None);
/// assert_eq!(parse_decimal("NaN"), None);
/// ```
pub fn parse_decimal(token: &str) -> Option<f64> {
    trim_value(token)
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
}

/// Parse all values of a multi-valued decimal string,
/// in which values are separated by backslashes.
///
/// Returns `None` if any of the values is not a valid number.
/// An empty string yields no values at all.
///
/// ```
/// # use dcmhead_core::value::parse_decimals_strict;
/// assert_eq!(parse_decimals_strict("0.3\\0.4").as_deref(), Some(&[0.3, 0.4][..]));
/// assert_eq!(parse_decimals_strict("0.3\\x"), None);
/// ```
pub fn parse_decimals_strict(text: &str) -> Option<Decimals> {
    if trim_value(text).is_empty() {
        return Some(Decimals::new());
    }
    split_values(text).map(parse_decimal).collect()
}

/// Parse a fixed number of decimal values,
/// treating both backslashes and white space as separators.
///
/// Values are taken by position:
/// the text must hold exactly `count` tokens,
/// and every one of them must be a valid number.
///
/// ```
/// # use dcmhead_core::value::parse_decimal_tuple;
/// let values = parse_decimal_tuple("1\\0\\0 0\\1\\0 ", 6).unwrap();
/// assert_eq!(&values[..], &[1., 0., 0., 0., 1., 0.]);
/// assert_eq!(parse_decimal_tuple("1\\?\\2", 3), None);
/// assert_eq!(parse_decimal_tuple("1\\2\\3\\4", 3), None);
/// ```
pub fn parse_decimal_tuple(text: &str, count: usize) -> Option<Decimals> {
    let values = text
        .split(|c: char| c == VALUE_SEPARATOR || c == '\0' || c.is_whitespace())
        .filter(|t| !t.is_empty())
        .map(parse_decimal)
        .collect::<Option<Decimals>>()?;
    if values.len() == count {
        Some(values)
    } else {
        None
    }
}
