// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::ecmascript::{
    abstract_operations::{
        operations_on_objects::{define_property_or_throw, get},
        type_conversion::{to_object, to_property_key},
    },
    builders::builtin_function_builder::BuiltinFunctionBuilder,
    builtins::{
        ArgumentsList, Behaviour, Builtin, BuiltinIntrinsicConstructor,
        ordinary::{ordinary_create_from_constructor, ordinary_object_create},
    },
    execution::{Agent, ExceptionType, IntrinsicObjectIndexes, JsResult, ProtoIntrinsics},
    types::{
        BUILTIN_STRING_MEMORY, Function, InternalMethods, Object, ObjectData, PropertyDescriptor,
        PropertyKey, String, Value,
    },
};

pub(crate) struct ObjectConstructor;

impl Builtin for ObjectConstructor {
    const NAME: String = BUILTIN_STRING_MEMORY.Object;

    const LENGTH: u8 = 1;

    const BEHAVIOUR: Behaviour = Behaviour::Constructor(Self::behaviour);
}
impl BuiltinIntrinsicConstructor for ObjectConstructor {
    const INDEX: IntrinsicObjectIndexes = IntrinsicObjectIndexes::ObjectConstructor;
}

struct ObjectDefineProperties;
impl Builtin for ObjectDefineProperties {
    const NAME: String = BUILTIN_STRING_MEMORY.defineProperties;

    const LENGTH: u8 = 2;

    const BEHAVIOUR: Behaviour = Behaviour::Regular(ObjectConstructor::define_properties);
}

struct ObjectDefineProperty;
impl Builtin for ObjectDefineProperty {
    const NAME: String = BUILTIN_STRING_MEMORY.defineProperty;

    const LENGTH: u8 = 3;

    const BEHAVIOUR: Behaviour = Behaviour::Regular(ObjectConstructor::define_property);
}

struct ObjectGetOwnPropertyDescriptor;
impl Builtin for ObjectGetOwnPropertyDescriptor {
    const NAME: String = BUILTIN_STRING_MEMORY.getOwnPropertyDescriptor;

    const LENGTH: u8 = 2;

    const BEHAVIOUR: Behaviour = Behaviour::Regular(ObjectConstructor::get_own_property_descriptor);
}

struct ObjectGetPrototypeOf;
impl Builtin for ObjectGetPrototypeOf {
    const NAME: String = BUILTIN_STRING_MEMORY.getPrototypeOf;

    const LENGTH: u8 = 1;

    const BEHAVIOUR: Behaviour = Behaviour::Regular(ObjectConstructor::get_prototype_of);
}

impl ObjectConstructor {
    /// ### [20.1.1.1 Object ( \[ value \] )](https://tc39.es/ecma262/#sec-object-value)
    fn behaviour(
        agent: &mut Agent,
        _this_value: Value,
        arguments: ArgumentsList,
        new_target: Option<Object>,
    ) -> JsResult<Value> {
        let value = arguments.get(0);
        let active_function: Object = agent
            .current_realm()
            .intrinsics()
            .object_constructor()
            .into();
        // 1. If NewTarget is neither undefined nor the active function object, then
        if let Some(new_target) = new_target.filter(|target| *target != active_function) {
            // a. Return ? OrdinaryCreateFromConstructor(NewTarget, "%Object.prototype%").
            let Some(new_target) = Function::try_from_object(agent, new_target) else {
                return Err(agent.throw_exception(
                    ExceptionType::TypeError,
                    "NewTarget is not a constructor",
                ));
            };
            ordinary_create_from_constructor(
                agent,
                new_target,
                ProtoIntrinsics::Object,
                ObjectData::Ordinary,
            )
            .map(Value::Object)
        } else if value.is_nullish() {
            // 2. If value is either undefined or null, return OrdinaryObjectCreate(%Object.prototype%).
            let prototype = agent.current_realm().intrinsics().object_prototype();
            Ok(ordinary_object_create(agent, Some(prototype)).into())
        } else {
            // 3. Return ! ToObject(value).
            to_object(agent, value).map(Value::Object)
        }
    }

    /// ### [20.1.2.3 Object.defineProperties ( O, Properties )](https://tc39.es/ecma262/#sec-object.defineproperties)
    fn define_properties(
        agent: &mut Agent,
        _: Value,
        arguments: ArgumentsList,
    ) -> JsResult<Value> {
        // 1. If O is not an Object, throw a TypeError exception.
        let Ok(o) = Object::try_from(arguments.get(0)) else {
            return Err(agent.throw_exception(ExceptionType::TypeError, "Argument is not an object"));
        };
        // 2. Return ? ObjectDefineProperties(O, Properties).
        object_define_properties(agent, o, arguments.get(1)).map(Value::Object)
    }

    /// ### [20.1.2.4 Object.defineProperty ( O, P, Attributes )](https://tc39.es/ecma262/#sec-object.defineproperty)
    fn define_property(agent: &mut Agent, _: Value, arguments: ArgumentsList) -> JsResult<Value> {
        let o = arguments.get(0);
        let p = arguments.get(1);
        let attributes = arguments.get(2);
        // 1. If O is not an Object, throw a TypeError exception.
        let Ok(o) = Object::try_from(o) else {
            return Err(agent.throw_exception(ExceptionType::TypeError, "Argument is not an object"));
        };
        // 2. Let key be ? ToPropertyKey(P).
        let key = to_property_key(agent, p)?;
        // 3. Let desc be ? ToPropertyDescriptor(Attributes).
        let desc = PropertyDescriptor::to_property_descriptor(agent, attributes)?;
        // 4. Perform ? DefinePropertyOrThrow(O, key, desc).
        define_property_or_throw(agent, o, key, desc)?;
        // 5. Return O.
        Ok(o.into())
    }

    /// ### [20.1.2.8 Object.getOwnPropertyDescriptor ( O, P )](https://tc39.es/ecma262/#sec-object.getownpropertydescriptor)
    fn get_own_property_descriptor(
        agent: &mut Agent,
        _: Value,
        arguments: ArgumentsList,
    ) -> JsResult<Value> {
        // 1. Let obj be ? ToObject(O).
        let obj = to_object(agent, arguments.get(0))?;
        // 2. Let key be ? ToPropertyKey(P).
        let key = to_property_key(agent, arguments.get(1))?;
        // 3. Let desc be ? obj.[[GetOwnProperty]](key).
        let desc = obj.internal_get_own_property(agent, key)?;
        // 4. Return FromPropertyDescriptor(desc).
        Ok(PropertyDescriptor::from_property_descriptor(desc, agent).into())
    }

    /// ### [20.1.2.12 Object.getPrototypeOf ( O )](https://tc39.es/ecma262/#sec-object.getprototypeof)
    fn get_prototype_of(agent: &mut Agent, _: Value, arguments: ArgumentsList) -> JsResult<Value> {
        // 1. Let obj be ? ToObject(O).
        let obj = to_object(agent, arguments.get(0))?;
        // 2. Return ? obj.[[GetPrototypeOf]]().
        obj.internal_get_prototype_of(agent)
            .map(|proto| proto.map_or(Value::Null, Value::Object))
    }

    pub(crate) fn create_intrinsic(agent: &mut Agent) {
        let object_prototype = agent.current_realm().intrinsics().object_prototype();

        BuiltinFunctionBuilder::new_intrinsic_constructor::<ObjectConstructor>(agent)
            .with_property_capacity(5)
            .with_builtin_function_property::<ObjectDefineProperties>()
            .with_builtin_function_property::<ObjectDefineProperty>()
            .with_builtin_function_property::<ObjectGetOwnPropertyDescriptor>()
            .with_builtin_function_property::<ObjectGetPrototypeOf>()
            .with_prototype_property(object_prototype)
            .build();
    }
}

/// ### [20.1.2.3.1 ObjectDefineProperties ( O, Properties )](https://tc39.es/ecma262/#sec-objectdefineproperties)
///
/// Every descriptor is read and validated before any property is defined,
/// so a malformed descriptor leaves `O` untouched.
pub(crate) fn object_define_properties(
    agent: &mut Agent,
    o: Object,
    properties: Value,
) -> JsResult<Object> {
    // 1. Let props be ? ToObject(Properties).
    let props = to_object(agent, properties)?;
    // 2. Let keys be ? props.[[OwnPropertyKeys]]().
    let keys = props.internal_own_property_keys(agent)?;
    // 3. Let descriptors be a new empty List.
    let mut descriptors: Vec<(PropertyKey, PropertyDescriptor)> = Vec::with_capacity(keys.len());
    // 4. For each element nextKey of keys, do
    for next_key in keys {
        // a. Let propDesc be ? props.[[GetOwnProperty]](nextKey).
        let prop_desc = props.internal_get_own_property(agent, next_key)?;
        // b. If propDesc is not undefined and propDesc.[[Enumerable]] is true, then
        if prop_desc.is_some_and(|desc| desc.enumerable == Some(true)) {
            // i. Let descObj be ? Get(props, nextKey).
            let desc_obj = get(agent, props, next_key)?;
            // ii. Let desc be ? ToPropertyDescriptor(descObj).
            let desc = PropertyDescriptor::to_property_descriptor(agent, desc_obj)?;
            // iii. Append the Record { [[Key]]: nextKey, [[Descriptor]]: desc } to descriptors.
            descriptors.push((next_key, desc));
        }
    }
    // 5. For each element property of descriptors, do
    for (key, desc) in descriptors {
        // a. Perform ? DefinePropertyOrThrow(O, property.[[Key]], property.[[Descriptor]]).
        define_property_or_throw(agent, o, key, desc)?;
    }
    // 6. Return O.
    Ok(o)
}
