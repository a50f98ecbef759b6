// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! ## [7.1 Type Conversion](https://tc39.es/ecma262/#sec-type-conversion)
//!
//! The ECMAScript language implicitly performs automatic type conversion as
//! needed. To clarify the semantics of certain constructs it is useful to
//! define a set of conversion abstract operations. The conversion abstract
//! operations are polymorphic; they can accept a value of any ECMAScript
//! language type. But no other specification types are used with these
//! operations.

use super::{
    operations_on_objects::{call, get},
    testing_and_comparison::is_callable,
};
use crate::ecmascript::{
    builtins::{PrimitiveObject, PrimitiveObjectData},
    execution::{Agent, ExceptionType, JsResult},
    types::{
        BUILTIN_STRING_MEMORY, Number, Object, PreferredType, PropertyKey, String, Value,
        MAX_SAFE_INTEGER,
    },
};

/// ### [7.1.1 ToPrimitive ( input \[ , preferredType \] )](https://tc39.es/ecma262/#sec-toprimitive)
///
/// The abstract operation ToPrimitive takes argument input (an ECMAScript
/// language value) and optional argument preferredType (STRING or NUMBER) and
/// returns either a normal completion containing an ECMAScript language value
/// or a throw completion. It converts its input argument to a non-Object type.
/// If an object is capable of converting to more than one primitive type, it
/// may use the optional hint preferredType to favour that type.
///
/// > NOTE: When ToPrimitive is called without a hint, then it generally
/// > behaves as if the hint were NUMBER. Objects may override this through
/// > [`Object::set_default_preferred_type`]; Date-like host objects treat the
/// > absence of a hint as if the hint were STRING.
pub fn to_primitive(
    agent: &mut Agent,
    input: Value,
    preferred_type: Option<PreferredType>,
) -> JsResult<Value> {
    // 1. If input is an Object, then
    let Value::Object(input) = input else {
        // 2. Return input.
        return Ok(input);
    };
    // c. If preferredType is not present, let preferredType be NUMBER.
    let hint = preferred_type
        .or_else(|| input.default_preferred_type(agent))
        .unwrap_or(PreferredType::Number);
    // d. Return ? OrdinaryToPrimitive(input, preferredType).
    ordinary_to_primitive(agent, input, hint)
}

/// #### [7.1.1.1 OrdinaryToPrimitive ( O, hint )](https://tc39.es/ecma262/#sec-ordinarytoprimitive)
///
/// The abstract operation OrdinaryToPrimitive takes arguments O (an Object)
/// and hint (STRING or NUMBER) and returns either a normal completion
/// containing an ECMAScript language value or a throw completion.
pub(crate) fn ordinary_to_primitive(
    agent: &mut Agent,
    o: Object,
    hint: PreferredType,
) -> JsResult<Value> {
    let to_string_key = PropertyKey::from(BUILTIN_STRING_MEMORY.toString);
    let value_of_key = PropertyKey::from(BUILTIN_STRING_MEMORY.valueOf);
    let method_names = match hint {
        PreferredType::String => {
            // 1. If hint is STRING, then
            // a. Let methodNames be « "toString", "valueOf" ».
            [to_string_key, value_of_key]
        }
        PreferredType::Number => {
            // 2. Else,
            // a. Let methodNames be « "valueOf", "toString" ».
            [value_of_key, to_string_key]
        }
    };
    // 3. For each element name of methodNames, do
    for name in method_names {
        // a. Let method be ? Get(O, name).
        let method = get(agent, o, name)?;
        // b. If IsCallable(method) is true, then
        if is_callable(agent, method) {
            log::trace!("Converting {o:?} to primitive through {}", name.display(agent));
            // i. Let result be ? Call(method, O).
            let result: Value = call(agent, method, o.into(), None)?;
            // ii. If result is not an Object, return result.
            if !result.is_object() {
                return Ok(result);
            }
        }
    }
    // 4. Throw a TypeError exception.
    Err(agent.throw_exception(
        ExceptionType::TypeError,
        "Cannot convert object to primitive value",
    ))
}

/// ### [7.1.2 ToBoolean ( argument )](https://tc39.es/ecma262/#sec-toboolean)
///
/// Objects are always truthy, including wrappers around falsy primitives.
pub fn to_boolean(agent: &Agent, argument: Value) -> bool {
    match argument {
        // 1. If argument is a Boolean, return argument.
        Value::Boolean(b) => b,
        // 3. If argument is one of undefined, null, +0𝔽, -0𝔽, NaN, 0ℤ, or the
        //    empty String, return false.
        Value::Undefined | Value::Null => false,
        Value::Integer(n) => n != 0,
        Value::Number(n) => !(n == 0.0 || n.is_nan()),
        Value::String(s) => !s.is_empty(agent),
        // 4. NOTE: This step is replaced in section B.3.6.1.
        // 5. Return true.
        Value::Object(_) => true,
    }
}

/// ### [7.1.4 ToNumber ( argument )](https://tc39.es/ecma262/#sec-tonumber)
pub fn to_number(agent: &mut Agent, argument: Value) -> JsResult<Number> {
    // 7. Assert: argument is an Object.
    if let Value::Object(_) = argument {
        // 8. Let primValue be ? ToPrimitive(argument, NUMBER).
        let prim_value = to_primitive(agent, argument, Some(PreferredType::Number))?;
        // 9. Assert: primValue is not an Object.
        debug_assert!(!prim_value.is_object());
        // 10. Return ? ToNumber(primValue).
        return Ok(to_number_primitive(agent, prim_value));
    }
    Ok(to_number_primitive(agent, argument))
}

/// ToNumber of a value known not to be an Object. Never fails.
pub(crate) fn to_number_primitive(agent: &Agent, argument: Value) -> Number {
    match argument {
        // 1. If argument is a Number, return argument.
        Value::Integer(n) => Number::Integer(n),
        Value::Number(n) => Number::from_f64(n),
        // 3. If argument is undefined, return NaN.
        Value::Undefined => Number::nan(),
        // 4. If argument is either null or false, return +0𝔽.
        Value::Null | Value::Boolean(false) => Number::pos_zero(),
        // 5. If argument is true, return 1𝔽.
        Value::Boolean(true) => Number::Integer(1),
        // 6. If argument is a String, return StringToNumber(argument).
        Value::String(s) => Number::from_f64(string_to_number(s.as_str(agent))),
        Value::Object(_) => unreachable!("ToNumber of an object needs ToPrimitive first"),
    }
}

/// WhiteSpace or LineTerminator, the code points StrWhiteSpaceChar admits.
fn is_str_whitespace(c: char) -> bool {
    matches!(
        c,
        // WhiteSpace: TAB, VT, FF, ZWNBSP and the Space_Separator category.
        '\u{0009}' | '\u{000B}' | '\u{000C}' | '\u{FEFF}'
            | '\u{0020}' | '\u{00A0}' | '\u{1680}' | '\u{2000}'..='\u{200A}'
            | '\u{202F}' | '\u{205F}' | '\u{3000}'
            // LineTerminator: LF, CR, LS, PS.
            | '\u{000A}' | '\u{000D}' | '\u{2028}' | '\u{2029}'
    )
}

/// StrUnsignedDecimalLiteral without the Infinity alternative:
/// `(digits (. digits?)? | . digits) ([eE] [+-]? digits)?`.
fn is_str_unsigned_decimal_literal(s: &str) -> bool {
    let bytes = s.as_bytes();
    let mut i = 0;
    let count_digits = |from: usize| {
        bytes[from..]
            .iter()
            .take_while(|byte| byte.is_ascii_digit())
            .count()
    };
    let integer_digits = count_digits(i);
    i += integer_digits;
    let mut fraction_digits = 0;
    if bytes.get(i) == Some(&b'.') {
        i += 1;
        fraction_digits = count_digits(i);
        i += fraction_digits;
    }
    if integer_digits == 0 && fraction_digits == 0 {
        return false;
    }
    if matches!(bytes.get(i), Some(b'e' | b'E')) {
        i += 1;
        if matches!(bytes.get(i), Some(b'+' | b'-')) {
            i += 1;
        }
        let exponent_digits = count_digits(i);
        if exponent_digits == 0 {
            return false;
        }
        i += exponent_digits;
    }
    i == bytes.len()
}

/// NonDecimalIntegerLiteral digits after the `0x`, `0o` or `0b` prefix.
fn parse_non_decimal_digits(digits: &str, radix: u32) -> f64 {
    if digits.is_empty() {
        return f64::NAN;
    }
    let mut result = 0.0;
    for c in digits.chars() {
        let Some(digit) = c.to_digit(radix) else {
            return f64::NAN;
        };
        result = result * radix as f64 + digit as f64;
    }
    result
}

/// ### [7.1.4.1.1 StringToNumber ( str )](https://tc39.es/ecma262/#sec-stringtonumber)
///
/// Parses `str` as a StringNumericLiteral. Text that does not match the
/// grammar produces NaN rather than an error.
pub fn string_to_number(str: &str) -> f64 {
    // 1. Let literal be ParseText(str, StringNumericLiteral).
    let literal = str.trim_matches(is_str_whitespace);

    // StringNumericLiteral ::: StrWhiteSpace_opt
    // 1. Return 0.
    if literal.is_empty() {
        return 0.0;
    }

    match literal {
        "Infinity" | "+Infinity" => return f64::INFINITY,
        "-Infinity" => return f64::NEG_INFINITY,
        _ => {}
    }

    // NonDecimalIntegerLiteral: no sign is permitted.
    if literal.len() > 2 && literal.as_bytes()[0] == b'0' {
        let radix = match literal.as_bytes()[1] {
            b'x' | b'X' => Some(16),
            b'o' | b'O' => Some(8),
            b'b' | b'B' => Some(2),
            _ => None,
        };
        if let Some(radix) = radix {
            return parse_non_decimal_digits(&literal[2..], radix);
        }
    }

    // StrDecimalLiteral ::: StrUnsignedDecimalLiteral | + | - StrUnsignedDecimalLiteral
    let (negative, unsigned) = match literal.as_bytes()[0] {
        b'-' => (true, &literal[1..]),
        b'+' => (false, &literal[1..]),
        _ => (false, literal),
    };
    // 2. If literal is a List of errors, return NaN.
    if !is_str_unsigned_decimal_literal(unsigned) {
        return f64::NAN;
    }
    // 3. Return the StringNumericValue of literal.
    match fast_float::parse::<f64, _>(unsigned) {
        Ok(value) if negative => -value,
        Ok(value) => value,
        Err(_) => f64::NAN,
    }
}

/// ### [7.1.5 ToIntegerOrInfinity ( argument )](https://tc39.es/ecma262/#sec-tointegerorinfinity)
///
/// The result is an integral `f64` or one of the infinities. -0 becomes +0.
pub fn to_integer_or_infinity(agent: &mut Agent, argument: Value) -> JsResult<f64> {
    // 1. Let number be ? ToNumber(argument).
    let number = to_number(agent, argument)?;
    Ok(to_integer_or_infinity_number(number.into_f64()))
}

/// ToIntegerOrInfinity of a value already converted to a number.
pub fn to_integer_or_infinity_number(number: f64) -> f64 {
    // 2. If number is one of NaN, +0𝔽, or -0𝔽, return 0.
    if number.is_nan() || number == 0.0 {
        return 0.0;
    }
    // 3. If number is +∞𝔽, return +∞.
    // 4. If number is -∞𝔽, return -∞.
    if number.is_infinite() {
        return number;
    }
    // 5. Return truncate(ℝ(number)).
    // Adding +0 turns a -0 from truncating (-1, 0) into +0.
    number.trunc() + 0.0
}

/// Truncates `number` and reduces it modulo 2^`bits` into the unsigned range.
/// NaN, the zeroes and the infinities map to 0.
fn modulo_power_of_two(number: f64, bits: i32) -> f64 {
    // 2. If number is not finite or number is either +0𝔽 or -0𝔽, return +0𝔽.
    if !number.is_finite() || number == 0.0 {
        return 0.0;
    }
    // 3. Let int be truncate(ℝ(number)).
    // 4. Let intNbit be int modulo 2^N.
    number.trunc().rem_euclid(2f64.powi(bits))
}

/// ### [7.1.6 ToInt32 ( argument )](https://tc39.es/ecma262/#sec-toint32)
pub fn to_int32(agent: &mut Agent, argument: Value) -> JsResult<i32> {
    if let Value::Integer(n) = argument {
        return Ok(n);
    }
    // 1. Let number be ? ToNumber(argument).
    let number = to_number(agent, argument)?;
    Ok(to_int32_number(number.into_f64()))
}

/// ToInt32 of a value already converted to a number.
pub fn to_int32_number(number: f64) -> i32 {
    let int32bit = modulo_power_of_two(number, 32);
    // 5. If int32bit ≥ 2^31, return 𝔽(int32bit - 2^32); otherwise return 𝔽(int32bit).
    int32bit as u32 as i32
}

/// ### [7.1.7 ToUint32 ( argument )](https://tc39.es/ecma262/#sec-touint32)
pub fn to_uint32(agent: &mut Agent, argument: Value) -> JsResult<u32> {
    // 1. Let number be ? ToNumber(argument).
    let number = to_number(agent, argument)?;
    Ok(to_uint32_number(number.into_f64()))
}

/// ToUint32 of a value already converted to a number.
pub fn to_uint32_number(number: f64) -> u32 {
    // 5. Return 𝔽(int32bit).
    modulo_power_of_two(number, 32) as u32
}

/// ### [7.1.9 ToUint16 ( argument )](https://tc39.es/ecma262/#sec-touint16)
pub fn to_uint16(agent: &mut Agent, argument: Value) -> JsResult<u16> {
    // 1. Let number be ? ToNumber(argument).
    let number = to_number(agent, argument)?;
    Ok(to_uint16_number(number.into_f64()))
}

/// ToUint16 of a value already converted to a number.
pub fn to_uint16_number(number: f64) -> u16 {
    // 5. Return 𝔽(int16bit).
    modulo_power_of_two(number, 16) as u16
}

/// ### [7.1.17 ToString ( argument )](https://tc39.es/ecma262/#sec-tostring)
pub fn to_string(agent: &mut Agent, argument: Value) -> JsResult<String> {
    match argument {
        // 1. If argument is a String, return argument.
        Value::String(s) => Ok(s),
        // 3. If argument is undefined, return "undefined".
        Value::Undefined => Ok(BUILTIN_STRING_MEMORY.undefined),
        // 4. If argument is null, return "null".
        Value::Null => Ok(BUILTIN_STRING_MEMORY.null),
        // 5. If argument is true, return "true".
        Value::Boolean(true) => Ok(BUILTIN_STRING_MEMORY.r#true),
        // 6. If argument is false, return "false".
        Value::Boolean(false) => Ok(BUILTIN_STRING_MEMORY.r#false),
        // 7. If argument is a Number, return Number::toString(argument, 10).
        Value::Integer(_) | Value::Number(_) => {
            let number = to_number_primitive(agent, argument);
            Ok(Number::to_string_radix_10(agent, number))
        }
        // 9. Assert: argument is an Object.
        Value::Object(_) => {
            // 10. Let primValue be ? ToPrimitive(argument, STRING).
            let prim_value = to_primitive(agent, argument, Some(PreferredType::String))?;
            // 11. Assert: primValue is not an Object.
            debug_assert!(!prim_value.is_object());
            // 12. Return ? ToString(primValue).
            to_string(agent, prim_value)
        }
    }
}

/// ### [7.1.18 ToObject ( argument )](https://tc39.es/ecma262/#sec-toobject)
///
/// The abstract operation ToObject takes argument argument (an ECMAScript
/// language value) and returns either a normal completion containing an Object
/// or a throw completion. It converts argument to a value of type Object
/// according to [Table 13](https://tc39.es/ecma262/#table-toobject-conversions):
pub fn to_object(agent: &mut Agent, argument: Value) -> JsResult<Object> {
    let data = match argument {
        Value::Undefined | Value::Null => {
            return Err(agent.throw_exception(
                ExceptionType::TypeError,
                "Cannot convert undefined or null to object",
            ));
        }
        // Return a new Boolean object whose [[BooleanData]] internal slot is set to argument.
        Value::Boolean(b) => PrimitiveObjectData::Boolean(b),
        // Return a new String object whose [[StringData]] internal slot is set to argument.
        Value::String(s) => PrimitiveObjectData::String(s),
        // Return a new Number object whose [[NumberData]] internal slot is set to argument.
        Value::Integer(n) => PrimitiveObjectData::Number(Number::Integer(n)),
        Value::Number(n) => PrimitiveObjectData::Number(Number::from_f64(n)),
        // Return argument.
        Value::Object(object) => return Ok(object),
    };
    Ok(PrimitiveObject::create(agent, data))
}

/// ### [7.1.19 ToPropertyKey ( argument )](https://tc39.es/ecma262/#sec-topropertykey)
pub fn to_property_key(agent: &mut Agent, argument: Value) -> JsResult<PropertyKey> {
    // Fast paths that skip the string round trip.
    match argument {
        Value::Integer(n) if n >= 0 => return Ok(PropertyKey::Integer(n as u32)),
        Value::String(s) => return Ok(PropertyKey::from_js_string(agent, s)),
        _ => {}
    }
    // 1. Let key be ? ToPrimitive(argument, STRING).
    let key = to_primitive(agent, argument, Some(PreferredType::String))?;
    // 2. If key is a Symbol, then
    //    a. Return key.
    // 3. Return ! ToString(key).
    let key = to_string(agent, key)?;
    Ok(PropertyKey::from_js_string(agent, key))
}

/// ### [7.1.20 ToLength ( argument )](https://tc39.es/ecma262/#sec-tolength)
pub fn to_length(agent: &mut Agent, argument: Value) -> JsResult<i64> {
    // 1. Let len be ? ToIntegerOrInfinity(argument).
    let len = to_integer_or_infinity(agent, argument)?;
    // 2. If len ≤ 0, return +0𝔽.
    if len <= 0.0 {
        return Ok(0);
    }
    // 3. Return 𝔽(min(len, 2^53 - 1)).
    Ok(len.min(MAX_SAFE_INTEGER) as i64)
}

/// Coarse kind of a value, used where only the category matters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueClass {
    /// Undefined, null, or no value at all.
    Empty,
    String,
    Number,
    Boolean,
    Object,
}

/// Classifies a value without converting it and without side effects.
/// Both numeric widths classify as [`ValueClass::Number`].
pub fn classify(value: impl Into<Option<Value>>) -> ValueClass {
    match value.into() {
        None | Some(Value::Undefined | Value::Null) => ValueClass::Empty,
        Some(Value::String(_)) => ValueClass::String,
        Some(Value::Integer(_) | Value::Number(_)) => ValueClass::Number,
        Some(Value::Boolean(_)) => ValueClass::Boolean,
        Some(Value::Object(_)) => ValueClass::Object,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn string_to_number_decimal_forms() {
        assert_eq!(string_to_number("42"), 42.0);
        assert_eq!(string_to_number("  \t\n 42 \u{00A0}\u{FEFF}"), 42.0);
        assert_eq!(string_to_number("-1.5e3"), -1500.0);
        assert_eq!(string_to_number("+.5"), 0.5);
        assert_eq!(string_to_number("5."), 5.0);
        assert_eq!(string_to_number("1E-2"), 0.01);
        assert!(string_to_number("-0").is_sign_negative());
    }

    #[test]
    fn string_to_number_empty_and_whitespace_is_zero() {
        assert_eq!(string_to_number(""), 0.0);
        assert_eq!(string_to_number(" \u{2028}\u{3000} "), 0.0);
    }

    #[test]
    fn string_to_number_infinity_is_case_sensitive() {
        assert_eq!(string_to_number("Infinity"), f64::INFINITY);
        assert_eq!(string_to_number("+Infinity"), f64::INFINITY);
        assert_eq!(string_to_number(" -Infinity "), f64::NEG_INFINITY);
        assert!(string_to_number("infinity").is_nan());
        assert!(string_to_number("inf").is_nan());
        assert!(string_to_number("NaN").is_nan());
    }

    #[test]
    fn string_to_number_non_decimal_prefixes() {
        assert_eq!(string_to_number("0x1F"), 31.0);
        assert_eq!(string_to_number("0o17"), 15.0);
        assert_eq!(string_to_number("0B101"), 5.0);
        assert!(string_to_number("-0x10").is_nan());
        assert!(string_to_number("0x").is_nan());
        assert!(string_to_number("0b102").is_nan());
    }

    #[test]
    fn string_to_number_rejects_garbage() {
        for text in ["abc", "1a", ".", "e5", "1e", "1e+", "--1", "1 2", "0x1.5", "1_000"] {
            assert!(string_to_number(text).is_nan(), "{text:?} should be NaN");
        }
    }

    #[test]
    fn integer_conversions_wrap() {
        assert_eq!(to_int32_number(2147483648.0), -2147483648);
        assert_eq!(to_int32_number(4294967296.0), 0);
        assert_eq!(to_int32_number(-2147483649.0), 2147483647);
        assert_eq!(to_int32_number(-1.9), -1);
        assert_eq!(to_uint32_number(-1.0), 4294967295);
        assert_eq!(to_uint32_number(4294967297.5), 1);
        assert_eq!(to_uint16_number(65541.0), 5);
        assert_eq!(to_uint16_number(-1.0), 65535);
        assert_eq!(to_int32_number(1e300), 0);
    }

    #[test]
    fn integer_conversions_of_non_finite_are_zero() {
        for number in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY, 0.0, -0.0] {
            assert_eq!(to_int32_number(number), 0);
            assert_eq!(to_uint32_number(number), 0);
            assert_eq!(to_uint16_number(number), 0);
        }
    }

    #[test]
    fn integer_or_infinity() {
        assert_eq!(to_integer_or_infinity_number(f64::NAN), 0.0);
        assert!(to_integer_or_infinity_number(-0.0).is_sign_positive());
        assert!(to_integer_or_infinity_number(-0.5).is_sign_positive());
        assert_eq!(to_integer_or_infinity_number(-3.7), -3.0);
        assert_eq!(to_integer_or_infinity_number(3.7), 3.0);
        assert_eq!(
            to_integer_or_infinity_number(f64::NEG_INFINITY),
            f64::NEG_INFINITY
        );
    }

    #[test]
    fn classify_values() {
        assert_eq!(classify(None), ValueClass::Empty);
        assert_eq!(classify(Value::Undefined), ValueClass::Empty);
        assert_eq!(classify(Value::Null), ValueClass::Empty);
        assert_eq!(classify(Value::Integer(1)), ValueClass::Number);
        assert_eq!(classify(Value::Number(0.5)), ValueClass::Number);
        assert_eq!(classify(Value::Boolean(false)), ValueClass::Boolean);
        assert_eq!(classify(Value::String(String::EMPTY_STRING)), ValueClass::String);
    }
}
