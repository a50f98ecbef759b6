// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

pub(crate) mod radix;

use self::radix::with_radix;
use super::{String, Value};
use crate::ecmascript::execution::Agent;

/// 2^53 - 1, the largest integer such that it and all smaller integers are
/// exactly representable.
pub(crate) const MAX_SAFE_INTEGER: f64 = 9007199254740991.0;

/// ### [6.1.6.1 The Number Type](https://tc39.es/ecma262/#sec-ecmascript-language-types-number-type)
///
/// Numbers are stored either as a 32-bit integer or as a full double. The
/// split is an internal detail: both variants are the same language type and
/// every operation treats them alike. [`Number::from_f64`] picks the integer
/// form whenever it is lossless, so -0 always stays a double.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    Integer(i32),
    Number(f64),
}

impl Number {
    pub fn from_f64(value: f64) -> Self {
        if value.fract() == 0.0
            && value >= i32::MIN as f64
            && value <= i32::MAX as f64
            && !(value == 0.0 && value.is_sign_negative())
        {
            Number::Integer(value as i32)
        } else {
            Number::Number(value)
        }
    }

    pub const fn nan() -> Self {
        Number::Number(f64::NAN)
    }

    pub const fn pos_inf() -> Self {
        Number::Number(f64::INFINITY)
    }

    pub const fn neg_inf() -> Self {
        Number::Number(f64::NEG_INFINITY)
    }

    pub const fn pos_zero() -> Self {
        Number::Integer(0)
    }

    pub const fn neg_zero() -> Self {
        Number::Number(-0.0)
    }

    pub fn into_f64(self) -> f64 {
        match self {
            Number::Integer(n) => n as f64,
            Number::Number(n) => n,
        }
    }

    pub fn into_value(self) -> Value {
        match self {
            Number::Integer(n) => Value::Integer(n),
            Number::Number(n) => Value::Number(n),
        }
    }

    pub fn is_nan(self) -> bool {
        matches!(self, Number::Number(n) if n.is_nan())
    }

    pub fn is_pos_zero(self) -> bool {
        match self {
            Number::Integer(n) => n == 0,
            Number::Number(n) => n == 0.0 && n.is_sign_positive(),
        }
    }

    pub fn is_neg_zero(self) -> bool {
        matches!(self, Number::Number(n) if n == 0.0 && n.is_sign_negative())
    }

    pub fn is_pos_infinity(self) -> bool {
        matches!(self, Number::Number(n) if n == f64::INFINITY)
    }

    pub fn is_neg_infinity(self) -> bool {
        matches!(self, Number::Number(n) if n == f64::NEG_INFINITY)
    }

    pub fn is_finite(self) -> bool {
        match self {
            Number::Integer(_) => true,
            Number::Number(n) => n.is_finite(),
        }
    }

    /// ### [6.1.6.1.20 Number::toString ( x, radix )](https://tc39.es/ecma262/#sec-numeric-types-number-tostring)
    ///
    /// Radix 10 form: the shortest digit string that round-trips, as produced
    /// by `ryu-js`.
    pub fn to_string_radix_10(agent: &mut Agent, x: Self) -> String {
        match x {
            Number::Integer(0) => String::from_str(agent, "0"),
            Number::Integer(n) => String::from_string(agent, n.to_string()),
            Number::Number(n) => String::from_string(agent, f64_to_string_radix_10(n)),
        }
    }

    /// ### [6.1.6.1.20 Number::toString ( x, radix )](https://tc39.es/ecma262/#sec-numeric-types-number-tostring)
    ///
    /// The digits chosen for fractional values in radixes other than 10 are
    /// implementation-defined. NaN, the infinities, zero and integral values
    /// always produce the same tokens and digit strings in every radix.
    pub fn to_string_radix_n(agent: &mut Agent, x: Self, radix: u32) -> String {
        let string = f64_to_string_radix_n(x.into_f64(), radix);
        String::from_string(agent, string)
    }
}

pub(crate) fn f64_to_string_radix_10(x: f64) -> std::string::String {
    if x.is_nan() {
        "NaN".to_owned()
    } else if x == 0.0 {
        // Both zeroes print as "0".
        "0".to_owned()
    } else if x.is_infinite() {
        if x.is_sign_positive() {
            "Infinity".to_owned()
        } else {
            "-Infinity".to_owned()
        }
    } else {
        let mut buffer = ryu_js::Buffer::new();
        buffer.format_finite(x).to_owned()
    }
}

/// Digits for every radix, lower case as the language requires.
const DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

pub(crate) fn f64_to_string_radix_n(x: f64, radix: u32) -> std::string::String {
    debug_assert!((2..=36).contains(&radix));
    if radix == 10 || !x.is_finite() || x == 0.0 {
        return f64_to_string_radix_10(x);
    }
    let value = x.abs();
    let mut integer = value.trunc();
    // Rounding the last fraction digit up may carry into the integer part, so
    // the fraction goes first.
    let fraction = fraction_digits(value, &mut integer, radix);

    let mut string = std::string::String::new();
    if x.is_sign_negative() {
        string.push('-');
    }
    string.push_str(&integer_digits(integer, radix));
    if !fraction.is_empty() {
        string.push('.');
        string.extend(fraction.iter().map(|&digit| char::from(DIGITS[usize::from(digit)])));
    }
    string
}

/// Exact digits of a non-negative integral double.
fn integer_digits(integer: f64, radix: u32) -> std::string::String {
    debug_assert!(integer >= 0.0 && integer.fract() == 0.0);
    if integer < u128::MAX as f64 {
        let options = lexical::WriteIntegerOptions::new();
        let mut string = with_radix!(
            radix,
            lexical::to_string_with_options::<u128, RADIX>(integer as u128, &options)
        );
        string.make_ascii_lowercase();
        return string;
    }

    // integer = mantissa * 2^exponent with exponent well above zero here.
    let bits = integer.to_bits();
    let exponent = ((bits >> 52) & 0x7ff) as u32 - 1075;
    let mantissa = (bits & ((1 << 52) - 1)) | (1 << 52);
    // Little-endian 32-bit limbs of the shifted mantissa.
    let mut limbs = vec![0u32; (exponent / 32) as usize];
    let shifted = u128::from(mantissa) << (exponent % 32);
    limbs.extend([shifted as u32, (shifted >> 32) as u32, (shifted >> 64) as u32]);
    while limbs.last() == Some(&0) {
        limbs.pop();
    }

    let radix = u64::from(radix);
    let mut digits = Vec::new();
    while !limbs.is_empty() {
        let mut remainder = 0u64;
        for limb in limbs.iter_mut().rev() {
            let current = (remainder << 32) | u64::from(*limb);
            *limb = (current / radix) as u32;
            remainder = current % radix;
        }
        digits.push(char::from(DIGITS[remainder as usize]));
        while limbs.last() == Some(&0) {
            limbs.pop();
        }
    }
    digits.iter().rev().collect()
}

/// Fraction digits of `value`: just enough of them to tell it apart from the
/// neighbouring doubles. A round up past the first digit increments `integer`.
fn fraction_digits(value: f64, integer: &mut f64, radix: u32) -> Vec<u8> {
    let radix_f64 = f64::from(radix);
    let mut fraction = value - *integer;
    // Half the gap to the next double up, but never zero.
    let mut delta = (0.5 * (next_up(value) - value)).max(next_up(0.0));
    let mut digits: Vec<u8> = Vec::new();
    while fraction >= delta {
        fraction *= radix_f64;
        delta *= radix_f64;
        // fraction < radix, so the digit fits.
        let digit = fraction as u8;
        digits.push(digit);
        fraction -= f64::from(digit);
        let past_half = fraction > 0.5 || (fraction == 0.5 && (digit & 1) == 1);
        if past_half && fraction + delta > 1.0 {
            loop {
                match digits.pop() {
                    None => {
                        *integer += 1.0;
                        break;
                    }
                    Some(last) if u32::from(last) + 1 < radix => {
                        digits.push(last + 1);
                        break;
                    }
                    Some(_) => {}
                }
            }
            break;
        }
    }
    digits
}

/// The smallest double above a non-negative finite `value`.
fn next_up(value: f64) -> f64 {
    f64::from_bits(value.to_bits() + 1)
}

impl From<i32> for Number {
    fn from(value: i32) -> Self {
        Number::Integer(value)
    }
}

impl From<f64> for Number {
    fn from(value: f64) -> Self {
        Number::from_f64(value)
    }
}

impl From<Number> for Value {
    fn from(value: Number) -> Self {
        value.into_value()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_f64_prefers_integers() {
        assert_eq!(Number::from_f64(3.0), Number::Integer(3));
        assert_eq!(Number::from_f64(-7.0), Number::Integer(-7));
        assert!(matches!(Number::from_f64(-0.0), Number::Number(n) if n.is_sign_negative()));
        assert!(matches!(Number::from_f64(0.5), Number::Number(_)));
        assert!(matches!(Number::from_f64(2147483648.0), Number::Number(_)));
        assert!(Number::from_f64(f64::NAN).is_nan());
    }

    #[test]
    fn zero_predicates() {
        assert!(Number::pos_zero().is_pos_zero());
        assert!(!Number::pos_zero().is_neg_zero());
        assert!(Number::neg_zero().is_neg_zero());
        assert!(!Number::neg_zero().is_pos_zero());
    }

    #[test]
    fn radix_10_tokens() {
        assert_eq!(f64_to_string_radix_10(f64::NAN), "NaN");
        assert_eq!(f64_to_string_radix_10(f64::INFINITY), "Infinity");
        assert_eq!(f64_to_string_radix_10(f64::NEG_INFINITY), "-Infinity");
        assert_eq!(f64_to_string_radix_10(-0.0), "0");
        assert_eq!(f64_to_string_radix_10(0.1), "0.1");
        assert_eq!(f64_to_string_radix_10(-1.5), "-1.5");
        assert_eq!(f64_to_string_radix_10(1e21), "1e+21");
        assert_eq!(f64_to_string_radix_10(123456789.0), "123456789");
    }

    #[test]
    fn radix_14_is_token_stable() {
        assert_eq!(f64_to_string_radix_n(0.0, 14), "0");
        assert_eq!(f64_to_string_radix_n(-0.0, 14), "0");
        assert_eq!(f64_to_string_radix_n(1.0, 14), "1");
        assert_eq!(f64_to_string_radix_n(-1.0, 14), "-1");
        assert_eq!(f64_to_string_radix_n(f64::NAN, 14), "NaN");
        assert_eq!(f64_to_string_radix_n(f64::INFINITY, 14), "Infinity");
        assert_eq!(f64_to_string_radix_n(f64::NEG_INFINITY, 14), "-Infinity");
    }

    #[test]
    fn radix_integers_use_lower_case_digits() {
        assert_eq!(f64_to_string_radix_n(255.0, 16), "ff");
        assert_eq!(f64_to_string_radix_n(-255.0, 16), "-ff");
        assert_eq!(f64_to_string_radix_n(5.0, 2), "101");
        assert_eq!(f64_to_string_radix_n(35.0, 36), "z");
        assert_eq!(f64_to_string_radix_n(14.0, 14), "10");
    }

    #[test]
    fn radix_integers_beyond_safe_range_are_exact() {
        assert_eq!(f64_to_string_radix_n(2f64.powi(60), 16), "1000000000000000");
        assert_eq!(
            f64_to_string_radix_n(-(2f64.powi(60)), 2),
            format!("-1{}", "0".repeat(60))
        );
        assert_eq!(f64_to_string_radix_n(9007199254740994.0, 16), "20000000000002");
        assert_eq!(f64_to_string_radix_n(1e21, 36), "5v1j4f4ds79m9s");
        assert_eq!(
            f64_to_string_radix_n(2f64.powi(128), 16),
            format!("1{}", "0".repeat(32))
        );
        assert_eq!(
            f64_to_string_radix_n(-(2f64.powi(200)), 32),
            format!("-1{}", "0".repeat(40))
        );
        let max = f64_to_string_radix_n(f64::MAX, 2);
        assert_eq!(max.len(), 1024);
        assert!(max.starts_with(&"1".repeat(53)));
        assert!(!max.contains('^'));
    }

    #[test]
    fn radix_fractions_stop_at_the_shortest_digits() {
        assert_eq!(f64_to_string_radix_n(0.5, 2), "0.1");
        assert_eq!(f64_to_string_radix_n(-0.5, 2), "-0.1");
        assert_eq!(f64_to_string_radix_n(3.75, 2), "11.11");
        assert_eq!(f64_to_string_radix_n(255.5, 16), "ff.8");
        assert_eq!(f64_to_string_radix_n(1.0 / 3.0, 3), "0.1");
        assert_eq!(f64_to_string_radix_n(0.1, 36), "0.3lllllllllm");
        assert_eq!(
            f64_to_string_radix_n(0.1, 2),
            "0.0001100110011001100110011001100110011001100110011001101"
        );
    }
}
