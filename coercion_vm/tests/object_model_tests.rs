// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use coercion_vm::ecmascript::{
    abstract_operations::{
        operations_on_objects::{
            call, construct, create_data_property_or_throw, find_property, get, has_own_property,
            invoke, length_of_array_like,
        },
        testing_and_comparison::same_value,
        type_conversion::{to_object, to_string},
    },
    builtins::{ArgumentsList, create_host_function},
    execution::{Agent, ExceptionType},
    types::{InternalMethods, Object, PropertyEntry, PropertyKey, Value, read_descriptor_attributes},
};

fn new_object(agent: &mut Agent) -> Object {
    let object_constructor = agent.current_realm().intrinsics().object_constructor();
    construct(agent, object_constructor, None, None).unwrap()
}

fn define(agent: &mut Agent, object: Object, name: &str, value: Value) {
    let key = PropertyKey::from_str(agent, name);
    create_data_property_or_throw(agent, object, key, value).unwrap();
}

fn string_of(agent: &mut Agent, value: Value) -> std::string::String {
    let string = to_string(agent, value).unwrap();
    string.as_str(agent).to_owned()
}

/// Reads an array's elements as strings.
fn array_strings(agent: &mut Agent, array: Value) -> Vec<std::string::String> {
    let Value::Object(array) = array else {
        panic!("expected an array object");
    };
    let length = length_of_array_like(agent, array).unwrap();
    (0..length as u32)
        .map(|index| {
            let element = get(agent, array, PropertyKey::Integer(index)).unwrap();
            string_of(agent, element)
        })
        .collect()
}

#[test]
fn own_attribute_shadows_inherited_attribute() {
    let mut agent = Agent::default();
    let prototype = new_object(&mut agent);
    let descriptor = new_object(&mut agent);
    assert!(
        descriptor
            .internal_set_prototype_of(&mut agent, Some(prototype))
            .unwrap()
    );
    define(&mut agent, prototype, "writable", Value::Boolean(true));
    define(&mut agent, prototype, "enumerable", Value::Boolean(true));
    define(&mut agent, descriptor, "writable", Value::Boolean(false));

    let entry = read_descriptor_attributes(&mut agent, descriptor.into()).unwrap();
    assert_eq!(
        entry,
        PropertyEntry::Data {
            value: Value::Undefined,
            writable: false,
            enumerable: true,
            configurable: false,
        }
    );

    let key = PropertyKey::from_str(&mut agent, "writable");
    let lookup = find_property(&mut agent, descriptor, key).unwrap();
    assert!(lookup.is_own());
    let key = PropertyKey::from_str(&mut agent, "enumerable");
    let lookup = find_property(&mut agent, descriptor, key).unwrap();
    assert!(!lookup.is_own() && !lookup.is_absent());
    let key = PropertyKey::from_str(&mut agent, "missing");
    assert!(find_property(&mut agent, descriptor, key).unwrap().is_absent());
}

#[test]
fn descriptor_reader_rejects_bad_sources() {
    let mut agent = Agent::default();
    let error = read_descriptor_attributes(&mut agent, Value::Integer(1)).unwrap_err();
    assert_eq!(agent.exception_type(error), Some(ExceptionType::TypeError));

    // A getter that is not callable.
    let descriptor = new_object(&mut agent);
    define(&mut agent, descriptor, "get", Value::Integer(1));
    let error = read_descriptor_attributes(&mut agent, descriptor.into()).unwrap_err();
    assert_eq!(agent.exception_type(error), Some(ExceptionType::TypeError));

    // Accessor and data attributes mixed.
    let descriptor = new_object(&mut agent);
    let getter = create_host_function(&mut agent, "get", 0, |_, _, _| Ok(Value::Null));
    define(&mut agent, descriptor, "get", getter.into());
    define(&mut agent, descriptor, "value", Value::Integer(1));
    let error = read_descriptor_attributes(&mut agent, descriptor.into()).unwrap_err();
    assert_eq!(agent.exception_type(error), Some(ExceptionType::TypeError));
}

#[test]
fn descriptor_reader_completes_accessors() {
    let mut agent = Agent::default();
    let descriptor = new_object(&mut agent);
    let getter = create_host_function(&mut agent, "get", 0, |_, _, _| Ok(Value::Integer(3)));
    define(&mut agent, descriptor, "get", getter.into());
    define(&mut agent, descriptor, "set", Value::Undefined);
    define(&mut agent, descriptor, "configurable", Value::Integer(1));

    let entry = read_descriptor_attributes(&mut agent, descriptor.into()).unwrap();
    assert_eq!(
        entry,
        PropertyEntry::Accessor {
            get: Some(getter),
            set: None,
            enumerable: false,
            configurable: true,
        }
    );
}

#[test]
fn object_define_properties() {
    let mut agent = Agent::default();
    let target = new_object(&mut agent);
    let properties = new_object(&mut agent);
    let x_descriptor = new_object(&mut agent);
    define(&mut agent, x_descriptor, "value", Value::Integer(1));
    define(&mut agent, x_descriptor, "enumerable", Value::Boolean(true));
    define(&mut agent, properties, "x", x_descriptor.into());

    let y_descriptor = new_object(&mut agent);
    let getter = create_host_function(&mut agent, "get", 0, |_, _, _| Ok(Value::Integer(2)));
    define(&mut agent, y_descriptor, "get", getter.into());
    define(&mut agent, properties, "y", y_descriptor.into());

    let object_constructor = agent.current_realm().intrinsics().object_constructor();
    let key = PropertyKey::from_str(&mut agent, "defineProperties");
    let result = invoke(
        &mut agent,
        object_constructor.into(),
        key,
        Some(ArgumentsList::new(&[target.into(), properties.into()])),
    )
    .unwrap();
    assert_eq!(result, Value::Object(target));

    let x = PropertyKey::from_str(&mut agent, "x");
    let descriptor = target
        .internal_get_own_property(&mut agent, x)
        .unwrap()
        .unwrap();
    assert_eq!(descriptor.value, Some(Value::Integer(1)));
    assert_eq!(descriptor.writable, Some(false));
    assert_eq!(descriptor.enumerable, Some(true));
    assert_eq!(descriptor.configurable, Some(false));

    let y = PropertyKey::from_str(&mut agent, "y");
    assert_eq!(get(&mut agent, target, y).unwrap(), Value::Integer(2));
    assert!(has_own_property(&mut agent, target, y).unwrap());

    // Non-writable: ordinary [[Set]] refuses.
    assert!(
        !target
            .internal_set(&mut agent, x, Value::Integer(5), target.into())
            .unwrap()
    );
}

#[test]
fn object_define_properties_reads_every_descriptor_first() {
    let mut agent = Agent::default();
    let target = new_object(&mut agent);
    let properties = new_object(&mut agent);
    let good = new_object(&mut agent);
    define(&mut agent, good, "value", Value::Integer(1));
    define(&mut agent, properties, "good", good.into());
    define(&mut agent, properties, "bad", Value::Integer(1));

    let object_constructor = agent.current_realm().intrinsics().object_constructor();
    let key = PropertyKey::from_str(&mut agent, "defineProperties");
    let error = invoke(
        &mut agent,
        object_constructor.into(),
        key,
        Some(ArgumentsList::new(&[target.into(), properties.into()])),
    )
    .unwrap_err();
    assert_eq!(agent.exception_type(error), Some(ExceptionType::TypeError));

    let good = PropertyKey::from_str(&mut agent, "good");
    assert!(!has_own_property(&mut agent, target, good).unwrap());
}

#[test]
fn string_wrapper_exposes_indices_and_length() {
    let mut agent = Agent::default();
    let ab = Value::from_str(&mut agent, "ab");
    let wrapper = to_object(&mut agent, ab).unwrap();

    let first = get(&mut agent, wrapper, PropertyKey::Integer(0)).unwrap();
    assert_eq!(string_of(&mut agent, first), "a");
    let length = PropertyKey::from_str(&mut agent, "length");
    assert_eq!(get(&mut agent, wrapper, length).unwrap(), Value::Integer(2));
    assert!(!has_own_property(&mut agent, wrapper, PropertyKey::Integer(2)).unwrap());

    let keys = wrapper.internal_own_property_keys(&mut agent).unwrap();
    assert_eq!(
        keys,
        vec![PropertyKey::Integer(0), PropertyKey::Integer(1), length]
    );

    // Index properties are read-only.
    let z = Value::from_str(&mut agent, "z");
    assert!(
        !wrapper
            .internal_set(&mut agent, PropertyKey::Integer(0), z, wrapper.into())
            .unwrap()
    );
    assert_eq!(string_of(&mut agent, wrapper.into()), "ab");
}

#[test]
fn number_to_string_with_radix() {
    let mut agent = Agent::default();
    let to_string_key = PropertyKey::from_str(&mut agent, "toString");
    let result = invoke(
        &mut agent,
        Value::Integer(255),
        to_string_key,
        Some(ArgumentsList::new(&[Value::Integer(14)])),
    )
    .unwrap();
    assert_eq!(string_of(&mut agent, result), "143");

    let result = invoke(
        &mut agent,
        Value::Integer(-255),
        to_string_key,
        Some(ArgumentsList::new(&[Value::Integer(14)])),
    )
    .unwrap();
    assert_eq!(string_of(&mut agent, result), "-143");

    let result = invoke(
        &mut agent,
        Value::pos_inf(),
        to_string_key,
        Some(ArgumentsList::new(&[Value::Integer(14)])),
    )
    .unwrap();
    assert_eq!(string_of(&mut agent, result), "Infinity");

    let result = invoke(
        &mut agent,
        Value::from_f64(-(2f64.powi(60))),
        to_string_key,
        Some(ArgumentsList::new(&[Value::Integer(2)])),
    )
    .unwrap();
    assert_eq!(
        string_of(&mut agent, result),
        format!("-1{}", "0".repeat(60))
    );

    let result = invoke(
        &mut agent,
        Value::from_f64(9007199254740994.0),
        to_string_key,
        Some(ArgumentsList::new(&[Value::Integer(16)])),
    )
    .unwrap();
    assert_eq!(string_of(&mut agent, result), "20000000000002");

    let result = invoke(
        &mut agent,
        Value::from_f64(-255.5),
        to_string_key,
        Some(ArgumentsList::new(&[Value::Integer(16)])),
    )
    .unwrap();
    assert_eq!(string_of(&mut agent, result), "-ff.8");

    let error = invoke(
        &mut agent,
        Value::Integer(255),
        to_string_key,
        Some(ArgumentsList::new(&[Value::Integer(37)])),
    )
    .unwrap_err();
    assert_eq!(agent.exception_type(error), Some(ExceptionType::RangeError));
}

#[test]
fn string_split() {
    let mut agent = Agent::default();
    let split = PropertyKey::from_str(&mut agent, "split");

    let undefinedd = Value::from_str(&mut agent, "undefinedd");
    let result = invoke(
        &mut agent,
        undefinedd,
        split,
        Some(ArgumentsList::new(&[Value::Undefined])),
    )
    .unwrap();
    assert_eq!(array_strings(&mut agent, result), ["undefinedd"]);

    let csv = Value::from_str(&mut agent, "a,b,,c");
    let comma = Value::from_str(&mut agent, ",");
    let result = invoke(&mut agent, csv, split, Some(ArgumentsList::new(&[comma]))).unwrap();
    assert_eq!(array_strings(&mut agent, result), ["a", "b", "", "c"]);
    let Value::Object(parts) = result else {
        panic!("split returns an array object");
    };
    let array_constructor = agent.current_realm().intrinsics().array();
    let constructor = PropertyKey::from_str(&mut agent, "constructor");
    assert_eq!(
        get(&mut agent, parts, constructor).unwrap(),
        Value::from(array_constructor)
    );

    let result = invoke(
        &mut agent,
        csv,
        split,
        Some(ArgumentsList::new(&[comma, Value::Integer(2)])),
    )
    .unwrap();
    assert_eq!(array_strings(&mut agent, result), ["a", "b"]);

    let empty = Value::from_str(&mut agent, "");
    let result = invoke(&mut agent, csv, split, Some(ArgumentsList::new(&[empty]))).unwrap();
    assert_eq!(array_strings(&mut agent, result).len(), 6);

    let error = invoke(&mut agent, Value::Null, split, None).unwrap_err();
    assert_eq!(agent.exception_type(error), Some(ExceptionType::TypeError));
}

#[test]
fn array_constructor() {
    let mut agent = Agent::default();
    let array = agent.current_realm().intrinsics().array();
    let length = PropertyKey::from_str(&mut agent, "length");

    let result = call(
        &mut agent,
        array.into(),
        Value::Undefined,
        Some(ArgumentsList::new(&[Value::Integer(3)])),
    )
    .unwrap();
    let Value::Object(sized) = result else {
        panic!("Array(3) returns an array object");
    };
    assert_eq!(get(&mut agent, sized, length).unwrap(), Value::Integer(3));
    assert!(!has_own_property(&mut agent, sized, PropertyKey::Integer(0)).unwrap());
    assert_eq!(
        sized.internal_prototype(&agent),
        Some(agent.current_realm().intrinsics().array_prototype())
    );

    let x = Value::from_str(&mut agent, "x");
    let result = call(
        &mut agent,
        array.into(),
        Value::Undefined,
        Some(ArgumentsList::new(&[x])),
    )
    .unwrap();
    assert_eq!(array_strings(&mut agent, result), ["x"]);

    let items = construct(
        &mut agent,
        array,
        Some(ArgumentsList::new(&[Value::Integer(1), Value::Boolean(true)])),
        None,
    )
    .unwrap();
    assert_eq!(array_strings(&mut agent, items.into()), ["1", "true"]);

    let error = call(
        &mut agent,
        array.into(),
        Value::Undefined,
        Some(ArgumentsList::new(&[Value::from_f64(1.5)])),
    )
    .unwrap_err();
    assert_eq!(agent.exception_type(error), Some(ExceptionType::RangeError));
}

#[test]
fn wrapper_constructors() {
    let mut agent = Agent::default();
    let intrinsics = agent.current_realm().intrinsics();
    let boolean = intrinsics.boolean();
    let number = intrinsics.number();
    let string = intrinsics.string();

    let empty = Value::from_str(&mut agent, "");
    let result = call(
        &mut agent,
        boolean.into(),
        Value::Undefined,
        Some(ArgumentsList::new(&[empty])),
    )
    .unwrap();
    assert_eq!(result, Value::Boolean(false));

    let wrapper = construct(
        &mut agent,
        boolean,
        Some(ArgumentsList::new(&[Value::Boolean(false)])),
        None,
    )
    .unwrap();
    let value_of = PropertyKey::from_str(&mut agent, "valueOf");
    let result = invoke(&mut agent, wrapper.into(), value_of, None).unwrap();
    assert_eq!(result, Value::Boolean(false));

    let result = call(&mut agent, number.into(), Value::Undefined, None).unwrap();
    assert!(same_value(&agent, result, Value::Integer(0)));

    let result = call(
        &mut agent,
        string.into(),
        Value::Undefined,
        Some(ArgumentsList::new(&[Value::Number(1.5)])),
    )
    .unwrap();
    assert_eq!(string_of(&mut agent, result), "1.5");

    let object_to_string = PropertyKey::from_str(&mut agent, "toString");
    let object_prototype = agent.current_realm().intrinsics().object_prototype();
    let tag = get(&mut agent, object_prototype, object_to_string).unwrap();
    let result = call(&mut agent, tag, wrapper.into(), None).unwrap();
    assert_eq!(string_of(&mut agent, result), "[object Boolean]");

    // Calling a non-function.
    let error = call(&mut agent, Value::Integer(1), Value::Undefined, None).unwrap_err();
    assert_eq!(agent.exception_type(error), Some(ExceptionType::TypeError));
}
