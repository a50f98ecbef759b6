// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::ecmascript::{
    builders::ordinary_object_builder::OrdinaryObjectBuilder,
    builtins::{ArgumentsList, Behaviour, Builtin, PrimitiveObjectData},
    execution::{Agent, ExceptionType, JsResult},
    types::{BUILTIN_STRING_MEMORY, ObjectData, String, Value},
};

pub(crate) struct BooleanPrototype;

struct BooleanPrototypeToString;
impl Builtin for BooleanPrototypeToString {
    const NAME: String = BUILTIN_STRING_MEMORY.toString;

    const LENGTH: u8 = 0;

    const BEHAVIOUR: Behaviour = Behaviour::Regular(BooleanPrototype::to_string);
}

struct BooleanPrototypeValueOf;
impl Builtin for BooleanPrototypeValueOf {
    const NAME: String = BUILTIN_STRING_MEMORY.valueOf;

    const LENGTH: u8 = 0;

    const BEHAVIOUR: Behaviour = Behaviour::Regular(BooleanPrototype::value_of);
}

impl BooleanPrototype {
    /// ### [20.3.3.2 Boolean.prototype.toString ( )](https://tc39.es/ecma262/#sec-boolean.prototype.tostring)
    fn to_string(agent: &mut Agent, this_value: Value, _: ArgumentsList) -> JsResult<Value> {
        // 1. Let b be ? ThisBooleanValue(this value).
        let b = this_boolean_value(agent, this_value)?;
        // 2. If b is true, return "true"; else return "false".
        Ok(if b {
            BUILTIN_STRING_MEMORY.r#true.into()
        } else {
            BUILTIN_STRING_MEMORY.r#false.into()
        })
    }

    /// ### [20.3.3.3 Boolean.prototype.valueOf ( )](https://tc39.es/ecma262/#sec-boolean.prototype.valueof)
    fn value_of(agent: &mut Agent, this_value: Value, _: ArgumentsList) -> JsResult<Value> {
        // 1. Return ? ThisBooleanValue(this value).
        this_boolean_value(agent, this_value).map(Value::Boolean)
    }

    pub(crate) fn create_intrinsic(agent: &mut Agent) {
        let intrinsics = agent.current_realm().intrinsics();
        let object_prototype = intrinsics.object_prototype();
        let this = intrinsics.boolean_prototype();
        let boolean_constructor = intrinsics.boolean();

        // The Boolean prototype object has a [[BooleanData]] internal slot
        // whose value is false.
        OrdinaryObjectBuilder::new_intrinsic_object(agent, this)
            .with_property_capacity(3)
            .with_prototype(object_prototype)
            .with_data(ObjectData::Primitive(PrimitiveObjectData::Boolean(false)))
            .with_constructor_property(boolean_constructor)
            .with_builtin_function_property::<BooleanPrototypeToString>()
            .with_builtin_function_property::<BooleanPrototypeValueOf>()
            .build();
    }
}

/// ### [20.3.3.3.1 ThisBooleanValue ( value )](https://tc39.es/ecma262/#sec-thisbooleanvalue)
fn this_boolean_value(agent: &mut Agent, value: Value) -> JsResult<bool> {
    match value {
        // 1. If value is a Boolean, return value.
        Value::Boolean(value) => Ok(value),
        // 2. If value is an Object and value has a [[BooleanData]] internal slot, then
        //    a. Let b be value.[[BooleanData]].
        //    b. Assert: b is a Boolean.
        //    c. Return b.
        Value::Object(object) => match object.primitive_data(agent) {
            Some(PrimitiveObjectData::Boolean(b)) => Ok(b),
            _ => Err(agent.throw_exception(ExceptionType::TypeError, "Not a Boolean")),
        },
        // 3. Throw a TypeError exception.
        _ => Err(agent.throw_exception(ExceptionType::TypeError, "Not a Boolean")),
    }
}
