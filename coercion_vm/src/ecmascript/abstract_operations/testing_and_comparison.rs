// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! ### [7.2 Testing and Comparison Operations](https://tc39.es/ecma262/#sec-testing-and-comparison-operations)

use crate::ecmascript::{
    execution::{Agent, ExceptionType, JsResult},
    types::{Function, Value},
};

/// ### [7.2.1 RequireObjectCoercible ( argument )](https://tc39.es/ecma262/#sec-requireobjectcoercible)
///
/// The abstract operation RequireObjectCoercible takes argument argument (an
/// ECMAScript language value) and returns either a normal completion
/// containing an ECMAScript language value or a throw completion. It throws an
/// error if argument is a value that cannot be converted to an Object using
/// ToObject.
pub fn require_object_coercible(agent: &mut Agent, argument: Value) -> JsResult<Value> {
    if argument.is_nullish() {
        Err(agent.throw_exception(
            ExceptionType::TypeError,
            "Argument cannot be converted into an object",
        ))
    } else {
        Ok(argument)
    }
}

/// ### [7.2.3 IsCallable ( argument )](https://tc39.es/ecma262/#sec-iscallable)
///
/// The abstract operation IsCallable takes argument argument (an ECMAScript
/// language value) and returns a Boolean. It determines if argument is a
/// callable function with a \[\[Call\]\] internal method.
pub fn is_callable(agent: &Agent, argument: Value) -> bool {
    // 1. If argument is not an Object, return false.
    // 2. If argument has a [[Call]] internal method, return true.
    // 3. Return false.
    matches!(argument, Value::Object(object) if object.is_callable(agent))
}

/// ### [7.2.4 IsConstructor ( argument )](https://tc39.es/ecma262/#sec-isconstructor)
///
/// The abstract operation IsConstructor takes argument argument (an ECMAScript
/// language value) and returns a Boolean. It determines if argument is a
/// function object with a \[\[Construct\]\] internal method.
pub fn is_constructor(agent: &Agent, argument: Value) -> bool {
    // 1. If argument is not an Object, return false.
    // 2. If argument has a [[Construct]] internal method, return true.
    // 3. Return false.
    Function::try_from_value(agent, argument).is_some_and(|function| function.is_constructor(agent))
}

/// ### [7.2.10 SameValue ( x, y )](https://tc39.es/ecma262/#sec-samevalue)
///
/// The abstract operation SameValue takes arguments x (an ECMAScript language
/// value) and y (an ECMAScript language value) and returns a Boolean. It
/// determines whether or not the two arguments are the same value.
pub fn same_value(agent: &Agent, x: Value, y: Value) -> bool {
    match (x, y) {
        // 1. If Type(x) is not Type(y), return false.
        // 2. If x is a Number, then
        //    a. Return Number::sameValue(x, y).
        (Value::Integer(_) | Value::Number(_), Value::Integer(_) | Value::Number(_)) => {
            let (x, y) = (x.as_f64().unwrap_or(f64::NAN), y.as_f64().unwrap_or(f64::NAN));
            number_same_value(x, y)
        }
        // 3. Return SameValueNonNumber(x, y).
        (Value::String(x), Value::String(y)) => x == y || x.as_str(agent) == y.as_str(agent),
        _ => x == y,
    }
}

/// ### [6.1.6.1.14 Number::sameValue ( x, y )](https://tc39.es/ecma262/#sec-numeric-types-number-samevalue)
fn number_same_value(x: f64, y: f64) -> bool {
    // 1. If x is NaN and y is NaN, return true.
    if x.is_nan() && y.is_nan() {
        return true;
    }
    // 2. If x is +0𝔽 and y is -0𝔽, return false.
    // 3. If x is -0𝔽 and y is +0𝔽, return false.
    // 4. If x is y, return true.
    // 5. Return false.
    x == y && x.is_sign_negative() == y.is_sign_negative()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_value_numbers() {
        let agent = Agent::default();
        assert!(same_value(&agent, Value::nan(), Value::Number(f64::NAN)));
        assert!(!same_value(&agent, Value::Number(0.0), Value::Number(-0.0)));
        assert!(same_value(&agent, Value::Integer(3), Value::Number(3.0)));
        assert!(!same_value(&agent, Value::Integer(3), Value::Boolean(true)));
        assert!(same_value(&agent, Value::Null, Value::Null));
        assert!(!same_value(&agent, Value::Null, Value::Undefined));
    }
}
