// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! ### [10.1 Ordinary Object Internal Methods and Internal Slots](https://tc39.es/ecma262/#sec-ordinary-object-internal-methods-and-internal-slots)
//!
//! Prototype chains are walked with loops over handles. Cycles cannot be
//! created through \[\[SetPrototypeOf\]\], and every walk is additionally
//! capped at [`MAX_PROTOTYPE_CHAIN_LENGTH`] links.

use crate::{
    ecmascript::{
        abstract_operations::{
            operations_on_objects::{call_function, create_data_property, get},
            testing_and_comparison::same_value,
        },
        execution::{Agent, ExceptionType, JsResult, ProtoIntrinsics},
        types::{
            BUILTIN_STRING_MEMORY, Function, InternalMethods, Object, ObjectData, ObjectHeapData,
            PropertyDescriptor, PropertyKey, PropertyLookup, Value,
        },
    },
    heap::CreateHeapData,
};

use super::ArgumentsList;

/// Longest prototype chain any lookup will follow.
pub const MAX_PROTOTYPE_CHAIN_LENGTH: usize = 1 << 16;

/// ### [10.1.1.1 OrdinaryGetPrototypeOf ( O )](https://tc39.es/ecma262/#sec-ordinarygetprototypeof)
pub(crate) fn ordinary_get_prototype_of(agent: &mut Agent, object: Object) -> Option<Object> {
    // 1. Return O.[[Prototype]].
    object.internal_prototype(agent)
}

/// ### [10.1.2.1 OrdinarySetPrototypeOf ( O, V )](https://tc39.es/ecma262/#sec-ordinarysetprototypeof)
pub(crate) fn ordinary_set_prototype_of(
    agent: &mut Agent,
    object: Object,
    prototype: Option<Object>,
) -> bool {
    // 1. Let current be O.[[Prototype]].
    let current = object.internal_prototype(agent);

    // 2. If SameValue(V, current) is true, return true.
    if prototype == current {
        return true;
    }

    // 3. Let extensible be O.[[Extensible]].
    let extensible = object.internal_extensible(agent);

    // 4. If extensible is false, return false.
    if !extensible {
        return false;
    }

    // 5. Let p be V.
    let mut p = prototype;
    // 6. Let done be false.
    // 7. Repeat, while done is false,
    // a. If p is null, then
    //    i. Set done to true.
    while let Some(p_inner) = p {
        // b. Else if SameValue(p, O) is true, then
        if p_inner == object {
            // i. Return false.
            log::debug!("Rejected prototype cycle through {object:?}");
            return false;
        }
        // c. Else,
        // ii. Else, set p to p.[[Prototype]].
        p = p_inner.internal_prototype(agent);
    }

    // 8. Set O.[[Prototype]] to V.
    log::trace!("Prototype of {object:?} set to {prototype:?}");
    object.internal_set_prototype(agent, prototype);

    // 9. Return true.
    true
}

/// ### [10.1.3.1 OrdinaryIsExtensible ( O )](https://tc39.es/ecma262/#sec-ordinaryisextensible)
pub(crate) fn ordinary_is_extensible(agent: &mut Agent, object: Object) -> bool {
    // 1. Return O.[[Extensible]].
    object.internal_extensible(agent)
}

/// ### [10.1.4.1 OrdinaryPreventExtensions ( O )](https://tc39.es/ecma262/#sec-ordinarypreventextensions)
pub(crate) fn ordinary_prevent_extensions(agent: &mut Agent, object: Object) -> bool {
    // 1. Set O.[[Extensible]] to false.
    object.internal_set_extensible(agent, false);

    // 2. Return true.
    true
}

/// ### [10.1.5.1 OrdinaryGetOwnProperty ( O, P )](https://tc39.es/ecma262/#sec-ordinarygetownproperty)
pub(crate) fn ordinary_get_own_property(
    agent: &mut Agent,
    object: Object,
    property_key: PropertyKey,
) -> Option<PropertyDescriptor> {
    // 1. If O does not have an own property with key P, return undefined.
    // 2. Let D be a newly created Property Descriptor with no fields.
    // 3. Let X be O's own property whose key is P.
    // 4-8. Copy the attributes of X into D.
    // 9. Return D.
    agent[object]
        .properties
        .get(property_key)
        .map(|entry| entry.into_descriptor())
}

/// ### [10.1.6.1 OrdinaryDefineOwnProperty ( O, P, Desc )](https://tc39.es/ecma262/#sec-ordinarydefineownproperty)
pub(crate) fn ordinary_define_own_property(
    agent: &mut Agent,
    object: Object,
    property_key: PropertyKey,
    descriptor: PropertyDescriptor,
) -> JsResult<bool> {
    // 1. Let current be ? O.[[GetOwnProperty]](P).
    let current = object.internal_get_own_property(agent, property_key)?;

    // 2. Let extensible be ? IsExtensible(O).
    let extensible = object.internal_is_extensible(agent)?;

    // 3. Return ValidateAndApplyPropertyDescriptor(O, P, extensible, Desc, current).
    Ok(validate_and_apply_property_descriptor(
        agent,
        Some(object),
        property_key,
        extensible,
        descriptor,
        current,
    ))
}

/// ### [10.1.6.2 IsCompatiblePropertyDescriptor ( Extensible, Desc, Current )](https://tc39.es/ecma262/#sec-iscompatiblepropertydescriptor)
pub(crate) fn is_compatible_property_descriptor(
    agent: &mut Agent,
    extensible: bool,
    descriptor: PropertyDescriptor,
    current: Option<PropertyDescriptor>,
) -> bool {
    // 1. Return ValidateAndApplyPropertyDescriptor(undefined, "", Extensible, Desc, Current).
    let property_key = PropertyKey::from(BUILTIN_STRING_MEMORY.empty);
    validate_and_apply_property_descriptor(
        agent,
        None,
        property_key,
        extensible,
        descriptor,
        current,
    )
}

/// ### [10.1.6.3 ValidateAndApplyPropertyDescriptor ( O, P, extensible, Desc, current )](https://tc39.es/ecma262/#sec-validateandapplypropertydescriptor)
fn validate_and_apply_property_descriptor(
    agent: &mut Agent,
    o: Option<Object>,
    property_key: PropertyKey,
    extensible: bool,
    descriptor: PropertyDescriptor,
    current: Option<PropertyDescriptor>,
) -> bool {
    // 1. Assert: IsPropertyKey(P) is true.

    // 2. If current is undefined, then
    let Some(current) = current else {
        // a. If extensible is false, return false.
        if !extensible {
            return false;
        }

        // b. If O is undefined, return true.
        let Some(o) = o else {
            return true;
        };

        // c. If IsAccessorDescriptor(Desc) is true, then
        //    i. Create an own accessor property named P of object O whose
        //       [[Get]], [[Set]], [[Enumerable]], and [[Configurable]]
        //       attributes are set to the value of the corresponding field
        //       in Desc if Desc has that field, or to the attribute's default
        //       value otherwise.
        // d. Else,
        //    i. Create an own data property named P of object O whose
        //       [[Value]], [[Writable]], [[Enumerable]], and [[Configurable]]
        //       attributes are set to the value of the corresponding field in
        //       Desc if Desc has that field, or to the attribute's default
        //       value otherwise.
        let entry = descriptor.complete_property_descriptor();
        agent[o].properties.set(property_key, entry);

        // e. Return true.
        return true;
    };

    // 3. Assert: current is a fully populated Property Descriptor.
    debug_assert!(current.is_fully_populated());

    // 4. If Desc does not have any fields, return true.
    if !descriptor.has_fields() {
        return true;
    }

    // 5. If current.[[Configurable]] is false, then
    if current.configurable == Some(false) {
        // a. If Desc has a [[Configurable]] field and Desc.[[Configurable]] is
        //    true, return false.
        if descriptor.configurable == Some(true) {
            return false;
        }

        // b. If Desc has an [[Enumerable]] field and
        //    SameValue(Desc.[[Enumerable]], current.[[Enumerable]]) is false,
        //    return false.
        if descriptor.enumerable.is_some() && descriptor.enumerable != current.enumerable {
            return false;
        }

        // c. If IsGenericDescriptor(Desc) is false and
        //    SameValue(IsAccessorDescriptor(Desc), IsAccessorDescriptor(current))
        //    is false, return false.
        if !descriptor.is_generic_descriptor()
            && descriptor.is_accessor_descriptor() != current.is_accessor_descriptor()
        {
            return false;
        }

        // d. If IsAccessorDescriptor(current) is true, then
        if current.is_accessor_descriptor() {
            // i. If Desc has a [[Get]] field and SameValue(Desc.[[Get]],
            //    current.[[Get]]) is false, return false.
            if descriptor.get.is_some() && descriptor.get != current.get {
                return false;
            }

            // ii. If Desc has a [[Set]] field and SameValue(Desc.[[Set]],
            //     current.[[Set]]) is false, return false.
            if descriptor.set.is_some() && descriptor.set != current.set {
                return false;
            }
        }
        // e. Else if current.[[Writable]] is false, then
        else if current.writable == Some(false) {
            // i. If Desc has a [[Writable]] field and Desc.[[Writable]] is
            //    true, return false.
            if descriptor.writable == Some(true) {
                return false;
            }

            // ii. If Desc has a [[Value]] field and SameValue(Desc.[[Value]],
            //     current.[[Value]]) is false, return false.
            if let Some(desc_value) = descriptor.value {
                match current.value {
                    Some(cur_value) if same_value(agent, desc_value, cur_value) => {}
                    _ => return false,
                }
            }
        }
    }

    // 6. If O is not undefined, then
    if let Some(o) = o {
        let merged = if current.is_data_descriptor() && descriptor.is_accessor_descriptor() {
            // a. If IsDataDescriptor(current) is true and
            //    IsAccessorDescriptor(Desc) is true, then
            //    i-iii. Replace the property with an accessor property keeping
            //    current's [[Configurable]] and [[Enumerable]] unless Desc
            //    has them.
            PropertyDescriptor {
                get: Some(descriptor.get.flatten()),
                set: Some(descriptor.set.flatten()),
                enumerable: descriptor.enumerable.or(current.enumerable),
                configurable: descriptor.configurable.or(current.configurable),
                ..Default::default()
            }
        } else if current.is_accessor_descriptor() && descriptor.is_data_descriptor() {
            // b. Else if IsAccessorDescriptor(current) is true and
            //    IsDataDescriptor(Desc) is true, then
            //    i-iii. Replace the property with a data property keeping
            //    current's [[Configurable]] and [[Enumerable]] unless Desc
            //    has them.
            PropertyDescriptor {
                value: Some(descriptor.value.unwrap_or(Value::Undefined)),
                writable: Some(descriptor.writable.unwrap_or(false)),
                enumerable: descriptor.enumerable.or(current.enumerable),
                configurable: descriptor.configurable.or(current.configurable),
                ..Default::default()
            }
        } else {
            // c. Else,
            //    i. For each field of Desc, set the corresponding attribute of
            //       the property named P of object O to the value of the field.
            PropertyDescriptor {
                value: descriptor.value.or(current.value),
                writable: descriptor.writable.or(current.writable),
                get: descriptor.get.or(current.get),
                set: descriptor.set.or(current.set),
                enumerable: descriptor.enumerable.or(current.enumerable),
                configurable: descriptor.configurable.or(current.configurable),
            }
        };
        agent[o]
            .properties
            .set(property_key, merged.complete_property_descriptor());
    }

    // 7. Return true.
    true
}

/// Walks the prototype chain of `object` looking for `property_key` and
/// reports whether the property was found on the object itself, on one of
/// its prototypes, or not at all.
///
/// The nearest definition wins, so an own property always shadows an
/// inherited one.
pub fn find_property(
    agent: &mut Agent,
    object: Object,
    property_key: PropertyKey,
) -> JsResult<PropertyLookup> {
    let mut holder = object;
    for depth in 0..MAX_PROTOTYPE_CHAIN_LENGTH {
        if let Some(descriptor) = holder.internal_get_own_property(agent, property_key)? {
            return Ok(if depth == 0 {
                PropertyLookup::Own(descriptor)
            } else {
                PropertyLookup::Inherited { holder, descriptor }
            });
        }
        match holder.internal_get_prototype_of(agent)? {
            Some(parent) => holder = parent,
            None => return Ok(PropertyLookup::Absent),
        }
    }
    Err(agent.throw_exception(
        ExceptionType::RangeError,
        "Maximum prototype chain length exceeded",
    ))
}

/// ### [10.1.7.1 OrdinaryHasProperty ( O, P )](https://tc39.es/ecma262/#sec-ordinaryhasproperty)
pub(crate) fn ordinary_has_property(
    agent: &mut Agent,
    object: Object,
    property_key: PropertyKey,
) -> JsResult<bool> {
    // 1. Let hasOwn be ? O.[[GetOwnProperty]](P).
    // 2. If hasOwn is not undefined, return true.
    // 3. Let parent be ? O.[[GetPrototypeOf]]().
    // 4. If parent is not null, then
    //    a. Return ? parent.[[HasProperty]](P).
    // 5. Return false.
    Ok(!find_property(agent, object, property_key)?.is_absent())
}

/// ### [10.1.8.1 OrdinaryGet ( O, P, Receiver )](https://tc39.es/ecma262/#sec-ordinaryget)
pub(crate) fn ordinary_get(
    agent: &mut Agent,
    object: Object,
    property_key: PropertyKey,
    receiver: Value,
) -> JsResult<Value> {
    // 1. Let desc be ? O.[[GetOwnProperty]](P).
    // 2. If desc is undefined, then
    //    a. Let parent be ? O.[[GetPrototypeOf]]().
    //    b. If parent is null, return undefined.
    //    c. Return ? parent.[[Get]](P, Receiver).
    let Some(descriptor) = find_property(agent, object, property_key)?.descriptor() else {
        return Ok(Value::Undefined);
    };

    // 3. If IsDataDescriptor(desc) is true, return desc.[[Value]].
    if let Some(value) = descriptor.value {
        debug_assert!(descriptor.is_data_descriptor());
        return Ok(value);
    }

    // 4. Assert: IsAccessorDescriptor(desc) is true.
    debug_assert!(descriptor.is_accessor_descriptor());

    // 5. Let getter be desc.[[Get]].
    // 6. If getter is undefined, return undefined.
    let Some(Some(getter)) = descriptor.get else {
        return Ok(Value::Undefined);
    };

    // 7. Return ? Call(getter, Receiver).
    call_function(agent, getter, receiver, None)
}

/// ### [10.1.9.1 OrdinarySet ( O, P, V, Receiver )](https://tc39.es/ecma262/#sec-ordinaryset)
pub(crate) fn ordinary_set(
    agent: &mut Agent,
    object: Object,
    property_key: PropertyKey,
    value: Value,
    receiver: Value,
) -> JsResult<bool> {
    // 1. Let ownDesc be ? O.[[GetOwnProperty]](P).
    // 2. Return ? OrdinarySetWithOwnDescriptor(O, P, V, Receiver, ownDesc).
    let own_descriptor = find_property(agent, object, property_key)?.descriptor();
    ordinary_set_with_own_descriptor(agent, property_key, value, receiver, own_descriptor)
}

/// ### [10.1.9.2 OrdinarySetWithOwnDescriptor ( O, P, V, Receiver, ownDesc )](https://tc39.es/ecma262/#sec-ordinarysetwithowndescriptor)
///
/// `own_descriptor` is the nearest descriptor on the prototype chain, which
/// is what the recursive parent.\[\[Set\]\] calls of step 1 arrive at.
fn ordinary_set_with_own_descriptor(
    agent: &mut Agent,
    property_key: PropertyKey,
    value: Value,
    receiver: Value,
    own_descriptor: Option<PropertyDescriptor>,
) -> JsResult<bool> {
    // 1. If ownDesc is undefined, then
    //    c. Else,
    //       i. Set ownDesc to the PropertyDescriptor { [[Value]]: undefined,
    //          [[Writable]]: true, [[Enumerable]]: true, [[Configurable]]: true }.
    let own_descriptor = own_descriptor
        .unwrap_or_else(|| PropertyDescriptor::new_data_descriptor(Value::Undefined));

    // 2. If IsDataDescriptor(ownDesc) is true, then
    if own_descriptor.is_data_descriptor() {
        // a. If ownDesc.[[Writable]] is false, return false.
        if own_descriptor.writable == Some(false) {
            return Ok(false);
        }

        // b. If Receiver is not an Object, return false.
        let Ok(receiver) = Object::try_from(receiver) else {
            return Ok(false);
        };

        // c. Let existingDescriptor be ? Receiver.[[GetOwnProperty]](P).
        let existing_descriptor = receiver.internal_get_own_property(agent, property_key)?;

        // d. If existingDescriptor is not undefined, then
        if let Some(existing_descriptor) = existing_descriptor {
            // i. If IsAccessorDescriptor(existingDescriptor) is true, return false.
            if existing_descriptor.is_accessor_descriptor() {
                return Ok(false);
            }

            // ii. If existingDescriptor.[[Writable]] is false, return false.
            if existing_descriptor.writable == Some(false) {
                return Ok(false);
            }

            // iii. Let valueDesc be the PropertyDescriptor { [[Value]]: V }.
            let value_descriptor = PropertyDescriptor {
                value: Some(value),
                ..Default::default()
            };

            // iv. Return ? Receiver.[[DefineOwnProperty]](P, valueDesc).
            return receiver.internal_define_own_property(agent, property_key, value_descriptor);
        }

        // e. Else,
        //    i. Assert: Receiver does not currently have a property P.
        //    ii. Return ? CreateDataProperty(Receiver, P, V).
        return create_data_property(agent, receiver, property_key, value);
    }

    // 3. Assert: IsAccessorDescriptor(ownDesc) is true.
    debug_assert!(own_descriptor.is_accessor_descriptor());

    // 4. Let setter be ownDesc.[[Set]].
    // 5. If setter is undefined, return false.
    let Some(Some(setter)) = own_descriptor.set else {
        return Ok(false);
    };

    // 6. Perform ? Call(setter, Receiver, « V »).
    call_function(agent, setter, receiver, Some(ArgumentsList(&[value])))?;

    // 7. Return true.
    Ok(true)
}

/// ### [10.1.10.1 OrdinaryDelete ( O, P )](https://tc39.es/ecma262/#sec-ordinarydelete)
pub(crate) fn ordinary_delete(
    agent: &mut Agent,
    object: Object,
    property_key: PropertyKey,
) -> JsResult<bool> {
    // 1. Let desc be ? O.[[GetOwnProperty]](P).
    let descriptor = object.internal_get_own_property(agent, property_key)?;

    // 2. If desc is undefined, return true.
    let Some(descriptor) = descriptor else {
        return Ok(true);
    };

    // 3. If desc.[[Configurable]] is true, then
    if descriptor.configurable == Some(true) {
        // a. Remove the own property with name P from O.
        agent[object].properties.remove(property_key);

        // b. Return true.
        return Ok(true);
    }

    // 4. Return false.
    Ok(false)
}

/// ### [10.1.11.1 OrdinaryOwnPropertyKeys ( O )](https://tc39.es/ecma262/#sec-ordinaryownpropertykeys)
pub(crate) fn ordinary_own_property_keys(agent: &mut Agent, object: Object) -> Vec<PropertyKey> {
    let keys = agent[object].properties.keys();
    // 1. Let keys be a new empty List.
    let mut integer_keys = vec![];
    let mut string_keys = Vec::with_capacity(keys.len());

    for key in keys.iter() {
        match key {
            PropertyKey::Integer(index) => integer_keys.push(*index),
            // 3. For each own property key P of O such that P is a String and
            //    P is not an array index, in ascending chronological order of
            //    property creation, do
            //    a. Append P to keys.
            PropertyKey::String(_) => string_keys.push(*key),
        }
    }

    // 2. For each own property key P of O such that P is an array index, in
    //    ascending numeric index order, do
    //    a. Append P to keys.
    integer_keys.sort_unstable();
    let mut result: Vec<PropertyKey> = integer_keys.into_iter().map(PropertyKey::from).collect();
    result.extend(string_keys);

    // 5. Return keys.
    result
}

/// ### [10.1.12 OrdinaryObjectCreate ( proto \[ , additionalInternalSlotsList \] )](https://tc39.es/ecma262/#sec-ordinaryobjectcreate)
pub(crate) fn ordinary_object_create(agent: &mut Agent, prototype: Option<Object>) -> Object {
    agent.heap.create(ObjectHeapData::new(prototype))
}

/// ### [10.1.13 OrdinaryCreateFromConstructor ( constructor, intrinsicDefaultProto \[ , internalSlotsList \] )](https://tc39.es/ecma262/#sec-ordinarycreatefromconstructor)
///
/// The internal slots of the new object are given as `data`.
pub(crate) fn ordinary_create_from_constructor(
    agent: &mut Agent,
    constructor: Function,
    intrinsic_default_proto: ProtoIntrinsics,
    data: ObjectData,
) -> JsResult<Object> {
    // 1. Assert: intrinsicDefaultProto is this specification's name of an
    //    intrinsic object.
    // 2. Let proto be ? GetPrototypeFromConstructor(constructor, intrinsicDefaultProto).
    let proto = get_prototype_from_constructor(agent, constructor, intrinsic_default_proto)?;
    // 3. If internalSlotsList is present, let slotsList be internalSlotsList.
    // 4. Else, let slotsList be a new empty List.
    // 5. Return OrdinaryObjectCreate(proto, slotsList).
    Ok(agent
        .heap
        .create(ObjectHeapData::with_data(Some(proto), data)))
}

/// ### [10.1.14 GetPrototypeFromConstructor ( constructor, intrinsicDefaultProto )](https://tc39.es/ecma262/#sec-getprototypefromconstructor)
pub(crate) fn get_prototype_from_constructor(
    agent: &mut Agent,
    constructor: Function,
    intrinsic_default_proto: ProtoIntrinsics,
) -> JsResult<Object> {
    // 1. Assert: intrinsicDefaultProto is this specification's name of an
    //    intrinsic object.
    // 2. Let proto be ? Get(constructor, "prototype").
    let proto = get(
        agent,
        constructor.into(),
        BUILTIN_STRING_MEMORY.prototype.into(),
    )?;
    match proto {
        Value::Object(proto) => Ok(proto),
        // 3. If proto is not an Object, then
        //    a. Let realm be ? GetFunctionRealm(constructor).
        //    b. Set proto to realm's intrinsic object named intrinsicDefaultProto.
        _ => Ok(agent
            .current_realm()
            .intrinsics()
            .get_intrinsic_default_proto(intrinsic_default_proto)),
    }
}
