// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::ecmascript::{
    abstract_operations::{
        operations_on_objects::has_own_property,
        type_conversion::{to_object, to_property_key},
    },
    builders::ordinary_object_builder::OrdinaryObjectBuilder,
    builtins::{ArgumentsList, Behaviour, Builtin, PrimitiveObjectData},
    execution::{Agent, JsResult},
    types::{BUILTIN_STRING_MEMORY, ObjectData, String, Value},
};

pub(crate) struct ObjectPrototype;

struct ObjectPrototypeHasOwnProperty;
impl Builtin for ObjectPrototypeHasOwnProperty {
    const NAME: String = BUILTIN_STRING_MEMORY.hasOwnProperty;

    const LENGTH: u8 = 1;

    const BEHAVIOUR: Behaviour = Behaviour::Regular(ObjectPrototype::has_own_property);
}

struct ObjectPrototypeToString;
impl Builtin for ObjectPrototypeToString {
    const NAME: String = BUILTIN_STRING_MEMORY.toString;

    const LENGTH: u8 = 0;

    const BEHAVIOUR: Behaviour = Behaviour::Regular(ObjectPrototype::to_string);
}

struct ObjectPrototypeValueOf;
impl Builtin for ObjectPrototypeValueOf {
    const NAME: String = BUILTIN_STRING_MEMORY.valueOf;

    const LENGTH: u8 = 0;

    const BEHAVIOUR: Behaviour = Behaviour::Regular(ObjectPrototype::value_of);
}

impl ObjectPrototype {
    /// ### [20.1.3.2 Object.prototype.hasOwnProperty ( V )](https://tc39.es/ecma262/#sec-object.prototype.hasownproperty)
    fn has_own_property(
        agent: &mut Agent,
        this_value: Value,
        arguments: ArgumentsList,
    ) -> JsResult<Value> {
        // 1. Let P be ? ToPropertyKey(V).
        let p = to_property_key(agent, arguments.get(0))?;
        // 2. Let O be ? ToObject(this value).
        let o = to_object(agent, this_value)?;
        // 3. Return ? HasOwnProperty(O, P).
        has_own_property(agent, o, p).map(Value::Boolean)
    }

    /// ### [20.1.3.6 Object.prototype.toString ( )](https://tc39.es/ecma262/#sec-object.prototype.tostring)
    ///
    /// Without symbols there is no @@toStringTag lookup; the builtin tag is
    /// always used.
    fn to_string(agent: &mut Agent, this_value: Value, _: ArgumentsList) -> JsResult<Value> {
        let tag = match this_value {
            // 1. If the this value is undefined, return "[object Undefined]".
            Value::Undefined => "Undefined",
            // 2. If the this value is null, return "[object Null]".
            Value::Null => "Null",
            _ => {
                // 3. Let O be ! ToObject(this value).
                let o = to_object(agent, this_value)?;
                // 4. Let isArray be ? IsArray(O).
                // 5. If isArray is true, let builtinTag be "Array".
                // 6-14. Else, the tag follows the object's internal slots.
                match &agent[o].data {
                    ObjectData::Array => "Array",
                    ObjectData::Function(_) => "Function",
                    ObjectData::Error(_) => "Error",
                    ObjectData::Primitive(PrimitiveObjectData::Boolean(_)) => "Boolean",
                    ObjectData::Primitive(PrimitiveObjectData::Number(_)) => "Number",
                    ObjectData::Primitive(PrimitiveObjectData::String(_)) => "String",
                    ObjectData::Ordinary => "Object",
                }
            }
        };
        // 17. Return the string-concatenation of "[object ", tag, and "]".
        let result = format!("[object {tag}]");
        Ok(Value::from_string(agent, result))
    }

    /// ### [20.1.3.7 Object.prototype.valueOf ( )](https://tc39.es/ecma262/#sec-object.prototype.valueof)
    fn value_of(agent: &mut Agent, this_value: Value, _: ArgumentsList) -> JsResult<Value> {
        // 1. Return ? ToObject(this value).
        to_object(agent, this_value).map(Value::Object)
    }

    pub(crate) fn create_intrinsic(agent: &mut Agent) {
        let intrinsics = agent.current_realm().intrinsics();
        let this = intrinsics.object_prototype();
        let object_constructor = intrinsics.object_constructor();

        OrdinaryObjectBuilder::new_intrinsic_object(agent, this)
            .with_property_capacity(4)
            .with_constructor_property(object_constructor)
            .with_builtin_function_property::<ObjectPrototypeHasOwnProperty>()
            .with_builtin_function_property::<ObjectPrototypeToString>()
            .with_builtin_function_property::<ObjectPrototypeValueOf>()
            .build();
    }
}
