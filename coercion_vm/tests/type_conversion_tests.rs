// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::{cell::Cell, rc::Rc};

use coercion_vm::ecmascript::{
    abstract_operations::{
        operations_on_objects::{construct, create_data_property_or_throw},
        type_conversion::{
            ValueClass, classify, to_boolean, to_int32, to_integer_or_infinity, to_number,
            to_object, to_primitive, to_string, to_uint16, to_uint32,
        },
    },
    builtins::{PrimitiveObjectData, create_host_function},
    execution::{Agent, ExceptionType, JsError, Options},
    types::{Object, PreferredType, PropertyKey, Value},
};

fn new_object(agent: &mut Agent) -> Object {
    let object_constructor = agent.current_realm().intrinsics().object_constructor();
    construct(agent, object_constructor, None, None).unwrap()
}

fn define_hook(agent: &mut Agent, object: Object, name: &str, result: Value) {
    let hook = create_host_function(agent, name, 0, move |_, _, _| Ok(result));
    let key = PropertyKey::from_str(agent, name);
    create_data_property_or_throw(agent, object, key, hook.into()).unwrap();
}

fn string_of(agent: &mut Agent, value: Value) -> std::string::String {
    let string = to_string(agent, value).unwrap();
    string.as_str(agent).to_owned()
}

fn assert_error(agent: &Agent, error: JsError, kind: ExceptionType) {
    assert_eq!(agent.exception_type(error), Some(kind));
}

#[test]
fn to_boolean_of_primitives() {
    let mut agent = Agent::default();
    assert!(!to_boolean(&agent, Value::Undefined));
    assert!(!to_boolean(&agent, Value::Null));
    assert!(!to_boolean(&agent, Value::Integer(0)));
    assert!(!to_boolean(&agent, Value::Number(-0.0)));
    assert!(!to_boolean(&agent, Value::nan()));
    assert!(to_boolean(&agent, Value::Integer(-3)));
    assert!(to_boolean(&agent, Value::pos_inf()));

    let empty = Value::from_str(&mut agent, "");
    let space = Value::from_str(&mut agent, " ");
    let zero = Value::from_str(&mut agent, "0");
    assert!(!to_boolean(&agent, empty));
    assert!(to_boolean(&agent, space));
    assert!(to_boolean(&agent, zero));
}

#[test]
fn to_boolean_of_wrapper_holding_false_is_true() {
    let mut agent = Agent::default();
    let wrapper = to_object(&mut agent, Value::Boolean(false)).unwrap();
    assert_eq!(
        wrapper.primitive_data(&agent),
        Some(PrimitiveObjectData::Boolean(false))
    );
    assert!(to_boolean(&agent, wrapper.into()));
}

#[test]
fn to_number_of_primitives() {
    let mut agent = Agent::default();
    assert_eq!(to_number(&mut agent, Value::Boolean(true)).unwrap().into_f64(), 1.0);
    assert_eq!(to_number(&mut agent, Value::Boolean(false)).unwrap().into_f64(), 0.0);
    assert_eq!(to_number(&mut agent, Value::Null).unwrap().into_f64(), 0.0);
    assert!(to_number(&mut agent, Value::Undefined).unwrap().is_nan());

    let abc = Value::from_str(&mut agent, "abc");
    assert!(to_number(&mut agent, abc).unwrap().is_nan());
    let padded = Value::from_str(&mut agent, " \n12.5\t");
    assert_eq!(to_number(&mut agent, padded).unwrap().into_f64(), 12.5);
    let hex = Value::from_str(&mut agent, "0x1F");
    assert_eq!(to_number(&mut agent, hex).unwrap().into_f64(), 31.0);
    let empty = Value::from_str(&mut agent, "   ");
    assert!(to_number(&mut agent, empty).unwrap().is_pos_zero());
    let infinity = Value::from_str(&mut agent, "-Infinity");
    assert!(to_number(&mut agent, infinity).unwrap().is_neg_infinity());
    let lowercase = Value::from_str(&mut agent, "infinity");
    assert!(to_number(&mut agent, lowercase).unwrap().is_nan());
}

#[test]
fn integer_conversions_wrap_around() {
    let mut agent = Agent::default();
    assert_eq!(
        to_int32(&mut agent, Value::from_f64(2147483648.0)).unwrap(),
        -2147483648
    );
    assert_eq!(to_uint32(&mut agent, Value::Integer(-1)).unwrap(), 4294967295);
    assert_eq!(to_uint16(&mut agent, Value::Integer(65541)).unwrap(), 5);
    assert_eq!(to_int32(&mut agent, Value::nan()).unwrap(), 0);
    assert_eq!(to_uint32(&mut agent, Value::neg_inf()).unwrap(), 0);
    assert_eq!(to_int32(&mut agent, Value::Number(-1.9)).unwrap(), -1);

    let numeric_string = Value::from_str(&mut agent, "4294967297");
    assert_eq!(to_uint32(&mut agent, numeric_string).unwrap(), 1);
}

#[test]
fn to_integer_truncates_toward_zero() {
    let mut agent = Agent::default();
    assert_eq!(to_integer_or_infinity(&mut agent, Value::Number(-3.7)).unwrap(), -3.0);
    assert_eq!(to_integer_or_infinity(&mut agent, Value::Number(3.7)).unwrap(), 3.0);
    assert_eq!(to_integer_or_infinity(&mut agent, Value::nan()).unwrap(), 0.0);
    assert_eq!(
        to_integer_or_infinity(&mut agent, Value::pos_inf()).unwrap(),
        f64::INFINITY
    );
    let negative_zero = to_integer_or_infinity(&mut agent, Value::Number(-0.0)).unwrap();
    assert_eq!(negative_zero, 0.0);
    assert!(negative_zero.is_sign_positive());

    // Integral values survive the round trip unchanged.
    for value in [0, 1, -1, 42, i32::MAX, i32::MIN] {
        let integer = to_integer_or_infinity(&mut agent, Value::Integer(value)).unwrap();
        assert_eq!(integer, value as f64);
        assert_eq!(to_int32(&mut agent, Value::from_f64(integer)).unwrap(), value);
    }
}

#[test]
fn to_string_of_numbers() {
    let mut agent = Agent::default();
    assert_eq!(string_of(&mut agent, Value::nan()), "NaN");
    assert_eq!(string_of(&mut agent, Value::pos_inf()), "Infinity");
    assert_eq!(string_of(&mut agent, Value::neg_inf()), "-Infinity");
    assert_eq!(string_of(&mut agent, Value::Number(-0.0)), "0");
    assert_eq!(string_of(&mut agent, Value::Integer(-17)), "-17");
    assert_eq!(string_of(&mut agent, Value::Number(0.1)), "0.1");
    assert_eq!(string_of(&mut agent, Value::Number(1e21)), "1e+21");
    assert_eq!(string_of(&mut agent, Value::Undefined), "undefined");
    assert_eq!(string_of(&mut agent, Value::Null), "null");
    assert_eq!(string_of(&mut agent, Value::Boolean(true)), "true");
}

#[test]
fn to_object_of_nullish_throws() {
    let mut agent = Agent::default();
    let error = to_object(&mut agent, Value::Undefined).unwrap_err();
    assert_error(&agent, error, ExceptionType::TypeError);
    let error = to_object(&mut agent, Value::Null).unwrap_err();
    assert_error(&agent, error, ExceptionType::TypeError);
}

#[test]
fn to_object_wraps_primitives() {
    let mut agent = Agent::default();
    let wrapper = to_object(&mut agent, Value::Integer(42)).unwrap();
    assert_eq!(classify(Value::from(wrapper)), ValueClass::Object);
    assert_eq!(
        wrapper.primitive_data(&agent).map(PrimitiveObjectData::into_value),
        Some(Value::Integer(42))
    );
    let number_prototype = agent.current_realm().intrinsics().number_prototype();
    assert_eq!(wrapper.internal_prototype(&agent), Some(number_prototype));
    assert_eq!(to_number(&mut agent, wrapper.into()).unwrap().into_f64(), 42.0);

    // Objects are returned as they are.
    assert_eq!(to_object(&mut agent, wrapper.into()).unwrap(), wrapper);
}

#[test]
fn classify_values() {
    let mut agent = Agent::default();
    let string = Value::from_str(&mut agent, "");
    assert_eq!(classify(None), ValueClass::Empty);
    assert_eq!(classify(Value::Undefined), ValueClass::Empty);
    assert_eq!(classify(Value::Null), ValueClass::Empty);
    assert_eq!(classify(string), ValueClass::String);
    assert_eq!(classify(Value::Integer(1)), ValueClass::Number);
    assert_eq!(classify(Value::nan()), ValueClass::Number);
    assert_eq!(classify(Value::Boolean(false)), ValueClass::Boolean);
}

#[test]
fn to_primitive_follows_hint_order() {
    let mut agent = Agent::default();
    let object = new_object(&mut agent);
    let text = Value::from_str(&mut agent, "from toString");
    define_hook(&mut agent, object, "valueOf", Value::Integer(7));
    define_hook(&mut agent, object, "toString", text);

    let as_number = to_primitive(&mut agent, object.into(), Some(PreferredType::Number)).unwrap();
    assert_eq!(as_number, Value::Integer(7));
    let as_string = to_primitive(&mut agent, object.into(), Some(PreferredType::String)).unwrap();
    assert_eq!(as_string, text);
    let default = to_primitive(&mut agent, object.into(), None).unwrap();
    assert_eq!(default, Value::Integer(7));

    object.set_default_preferred_type(&mut agent, Some(PreferredType::String));
    let default = to_primitive(&mut agent, object.into(), None).unwrap();
    assert_eq!(default, text);
    assert_eq!(string_of(&mut agent, object.into()), "from toString");
}

#[test]
fn to_primitive_skips_object_results() {
    let mut agent = Agent::default();
    let object = new_object(&mut agent);
    let other = new_object(&mut agent);
    let seven = Value::from_str(&mut agent, "7");
    define_hook(&mut agent, object, "valueOf", other.into());
    define_hook(&mut agent, object, "toString", seven);
    assert_eq!(to_number(&mut agent, object.into()).unwrap().into_f64(), 7.0);

    // Neither hook produces a primitive.
    define_hook(&mut agent, object, "toString", other.into());
    let error = to_number(&mut agent, object.into()).unwrap_err();
    assert_error(&agent, error, ExceptionType::TypeError);
}

#[test]
fn ordinary_objects_use_object_prototype_to_string() {
    let mut agent = Agent::default();
    let object = new_object(&mut agent);
    assert_eq!(string_of(&mut agent, object.into()), "[object Object]");
    assert!(to_number(&mut agent, object.into()).unwrap().is_nan());
    assert!(to_boolean(&agent, object.into()));
}

#[test]
fn hook_errors_propagate_unchanged() {
    let mut agent = Agent::default();
    let object = new_object(&mut agent);
    let thrown = Value::from_str(&mut agent, "custom");
    let hook = create_host_function(&mut agent, "valueOf", 0, move |_, _, _| {
        Err(JsError::new(thrown))
    });
    let key = PropertyKey::from_str(&mut agent, "valueOf");
    create_data_property_or_throw(&mut agent, object, key, hook.into()).unwrap();

    let error = to_number(&mut agent, object.into()).unwrap_err();
    assert_eq!(error.value(), thrown);
    assert_eq!(agent.exception_type(error), None);
}

#[test]
fn reentrant_conversion_is_bounded() {
    let mut agent = Agent::new(Options { max_call_depth: 64 });
    let object = new_object(&mut agent);
    let value_of = create_host_function(&mut agent, "valueOf", 0, |agent, this, _| {
        to_number(agent, this).map(Value::from)
    });
    let key = PropertyKey::from_str(&mut agent, "valueOf");
    create_data_property_or_throw(&mut agent, object, key, value_of.into()).unwrap();

    let error = to_number(&mut agent, object.into()).unwrap_err();
    assert_error(&agent, error, ExceptionType::RangeError);
    let message = error.to_string(&mut agent);
    assert_eq!(
        message.as_str(&agent),
        "RangeError: Maximum call stack size exceeded"
    );

    // The depth is fully restored: a hook recursing just below the limit
    // succeeds afterwards.
    let remaining = Rc::new(Cell::new(60));
    let counter = remaining.clone();
    let value_of = create_host_function(&mut agent, "valueOf", 0, move |agent, this, _| {
        if counter.get() == 0 {
            return Ok(Value::Integer(1));
        }
        counter.set(counter.get() - 1);
        to_number(agent, this).map(Value::from)
    });
    create_data_property_or_throw(&mut agent, object, key, value_of.into()).unwrap();
    assert_eq!(to_number(&mut agent, object.into()).unwrap().into_f64(), 1.0);
    assert_eq!(remaining.get(), 0);
}
