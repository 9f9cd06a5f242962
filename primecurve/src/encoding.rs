//! Text encoding of scalars, coordinates and signature components.
//!
//! Values are rendered as lowercase hexadecimal without a `0x` prefix and
//! without zero padding. On input, both hexadecimal and decimal are
//! accepted:
//!
//! - a `0x` or `0X` prefix always selects hexadecimal;
//! - otherwise a string made only of decimal digits is read as decimal;
//! - otherwise a string made only of hexadecimal digits is read as
//!   hexadecimal.
//!
//! The middle rule makes an unprefixed hex string such as `"1234"` decimal.
//! Prefix hexadecimal input with `0x` whenever it may consist only of
//! decimal digits.

use crate::{Error, Result};
use alloc::string::String;
use num_bigint::BigUint;
use num_traits::Num;

/// Parse an integer from hexadecimal (`0x`-prefixed or containing hex
/// letters) or decimal text.
pub fn parse_scalar(input: &str) -> Result<BigUint> {
    let input = input.trim();

    if let Some(digits) = strip_hex_prefix(input) {
        return parse_radix(digits, 16);
    }

    if !input.is_empty() && input.bytes().all(|b| b.is_ascii_digit()) {
        parse_radix(input, 10)
    } else {
        parse_radix(input, 16)
    }
}

/// Parse an integer which is always hexadecimal, with or without a `0x`
/// prefix. Used for message digests.
pub fn parse_hex(input: &str) -> Result<BigUint> {
    let input = input.trim();
    parse_radix(strip_hex_prefix(input).unwrap_or(input), 16)
}

/// Number of significant hex digits in `input` once any `0x` prefix is
/// removed. Leading zeros are counted: they contribute to a digest's
/// bit length.
pub(crate) fn hex_digit_count(input: &str) -> usize {
    let input = input.trim();
    strip_hex_prefix(input).unwrap_or(input).len()
}

/// Render an integer as lowercase hexadecimal with no prefix.
pub fn to_hex(value: &BigUint) -> String {
    value.to_str_radix(16)
}

fn strip_hex_prefix(input: &str) -> Option<&str> {
    input
        .strip_prefix("0x")
        .or_else(|| input.strip_prefix("0X"))
}

fn parse_radix(digits: &str, radix: u32) -> Result<BigUint> {
    let valid = match radix {
        10 => digits.bytes().all(|b| b.is_ascii_digit()),
        _ => digits.bytes().all(|b| b.is_ascii_hexdigit()),
    };

    if digits.is_empty() || !valid {
        return Err(Error::InvalidArgument("malformed integer encoding"));
    }

    BigUint::from_str_radix(digits, radix)
        .map_err(|_| Error::InvalidArgument("malformed integer encoding"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefixed_hex() {
        assert_eq!(parse_scalar("0x1234").unwrap(), BigUint::from(0x1234u32));
        assert_eq!(parse_scalar("0XfF").unwrap(), BigUint::from(255u32));
    }

    #[test]
    fn decimal_digits_are_decimal() {
        assert_eq!(parse_scalar("1234").unwrap(), BigUint::from(1234u32));
    }

    #[test]
    fn hex_letters_select_hex() {
        assert_eq!(parse_scalar("abc").unwrap(), BigUint::from(0xabcu32));
        assert_eq!(parse_scalar("12ab").unwrap(), BigUint::from(0x12abu32));
    }

    #[test]
    fn rejects_garbage() {
        assert!(parse_scalar("").is_err());
        assert!(parse_scalar("0x").is_err());
        assert!(parse_scalar("12g4").is_err());
        assert!(parse_scalar("-5").is_err());
        assert!(parse_scalar("1_000").is_err());
        assert!(parse_hex("+ff").is_err());
    }

    #[test]
    fn digests_are_always_hex() {
        assert_eq!(parse_hex("1234").unwrap(), BigUint::from(0x1234u32));
        assert_eq!(hex_digit_count("0x00ff"), 4);
    }

    #[test]
    fn renders_lowercase_unpadded() {
        assert_eq!(to_hex(&BigUint::from(0x0abcu32)), "abc");
        assert_eq!(to_hex(&BigUint::from(0u32)), "0");
    }
}
