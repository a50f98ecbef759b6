// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::ecmascript::{
    abstract_operations::type_conversion::to_integer_or_infinity,
    builders::ordinary_object_builder::OrdinaryObjectBuilder,
    builtins::{ArgumentsList, Behaviour, Builtin, PrimitiveObjectData},
    execution::{Agent, ExceptionType, JsResult},
    types::{BUILTIN_STRING_MEMORY, Number, ObjectData, String, Value},
};

pub(crate) struct NumberPrototype;

struct NumberPrototypeToString;
impl Builtin for NumberPrototypeToString {
    const NAME: String = BUILTIN_STRING_MEMORY.toString;

    const LENGTH: u8 = 1;

    const BEHAVIOUR: Behaviour = Behaviour::Regular(NumberPrototype::to_string);
}

struct NumberPrototypeValueOf;
impl Builtin for NumberPrototypeValueOf {
    const NAME: String = BUILTIN_STRING_MEMORY.valueOf;

    const LENGTH: u8 = 0;

    const BEHAVIOUR: Behaviour = Behaviour::Regular(NumberPrototype::value_of);
}

impl NumberPrototype {
    /// ### [21.1.3.6 Number.prototype.toString ( \[ radix \] )](https://tc39.es/ecma262/#sec-number.prototype.tostring)
    fn to_string(agent: &mut Agent, this_value: Value, arguments: ArgumentsList) -> JsResult<Value> {
        // 1. Let x be ? ThisNumberValue(this value).
        let x = this_number_value(agent, this_value)?;
        let radix = arguments.get(0);
        // 2. If radix is undefined, let radixMV be 10.
        if radix.is_undefined() || radix == Value::Integer(10) {
            // 5. Return Number::toString(x, 10).
            return Ok(Number::to_string_radix_10(agent, x).into());
        }
        // 3. Else, let radixMV be ? ToIntegerOrInfinity(radix).
        let radix = to_integer_or_infinity(agent, radix)?;
        // 4. If radixMV is not in the inclusive interval from 2 to 36, throw a RangeError exception.
        if !(2.0..=36.0).contains(&radix) {
            return Err(agent.throw_exception(
                ExceptionType::RangeError,
                "radix must be an integer at least 2 and no greater than 36",
            ));
        }
        // 5. Return Number::toString(x, radixMV).
        Ok(Number::to_string_radix_n(agent, x, radix as u32).into())
    }

    /// ### [21.1.3.7 Number.prototype.valueOf ( )](https://tc39.es/ecma262/#sec-number.prototype.valueof)
    fn value_of(agent: &mut Agent, this_value: Value, _: ArgumentsList) -> JsResult<Value> {
        // 1. Return ? ThisNumberValue(this value).
        this_number_value(agent, this_value).map(Number::into_value)
    }

    pub(crate) fn create_intrinsic(agent: &mut Agent) {
        let intrinsics = agent.current_realm().intrinsics();
        let object_prototype = intrinsics.object_prototype();
        let this = intrinsics.number_prototype();
        let number_constructor = intrinsics.number();

        // The Number prototype object has a [[NumberData]] internal slot
        // whose value is +0𝔽.
        OrdinaryObjectBuilder::new_intrinsic_object(agent, this)
            .with_property_capacity(3)
            .with_prototype(object_prototype)
            .with_data(ObjectData::Primitive(PrimitiveObjectData::Number(
                Number::pos_zero(),
            )))
            .with_constructor_property(number_constructor)
            .with_builtin_function_property::<NumberPrototypeToString>()
            .with_builtin_function_property::<NumberPrototypeValueOf>()
            .build();
    }
}

/// ### [21.1.3.7.1 ThisNumberValue ( value )](https://tc39.es/ecma262/#sec-thisnumbervalue)
fn this_number_value(agent: &mut Agent, value: Value) -> JsResult<Number> {
    // 1. If value is a Number, return value.
    if let Ok(value) = Number::try_from(value) {
        return Ok(value);
    }
    // 2. If value is an Object and value has a [[NumberData]] internal slot, then
    if let Value::Object(object) = value {
        if let Some(PrimitiveObjectData::Number(n)) = object.primitive_data(agent) {
            // a. Let n be value.[[NumberData]].
            // b. Assert: n is a Number.
            // c. Return n.
            return Ok(n);
        }
    }
    // 3. Throw a TypeError exception.
    Err(agent.throw_exception(ExceptionType::TypeError, "Not a Number"))
}
