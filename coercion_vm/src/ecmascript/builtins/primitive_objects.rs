// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Boolean, Number and String wrapper objects: ordinary objects carrying a
//! primitive in an internal slot. String wrappers are additionally exotic,
//! exposing their code units as read-only index properties.

use super::ordinary::{
    is_compatible_property_descriptor, ordinary_define_own_property, ordinary_get_own_property,
    ordinary_own_property_keys,
};
use crate::{
    ecmascript::{
        execution::{Agent, JsResult},
        types::{
            BUILTIN_STRING_MEMORY, Number, Object, ObjectData, ObjectHeapData, PropertyDescriptor,
            PropertyEntry, PropertyKey, String, Value,
        },
    },
    heap::CreateHeapData,
};

/// The \[\[BooleanData\]\], \[\[NumberData\]\] or \[\[StringData\]\] internal
/// slot of a wrapper object.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PrimitiveObjectData {
    Boolean(bool),
    Number(Number),
    String(String),
}

impl PrimitiveObjectData {
    pub fn into_value(self) -> Value {
        match self {
            PrimitiveObjectData::Boolean(b) => Value::Boolean(b),
            PrimitiveObjectData::Number(n) => n.into_value(),
            PrimitiveObjectData::String(s) => Value::String(s),
        }
    }
}

pub struct PrimitiveObject;

impl PrimitiveObject {
    /// Wraps a primitive in a new object whose prototype is the current
    /// realm's `%Boolean.prototype%`, `%Number.prototype%` or
    /// `%String.prototype%`.
    pub fn create(agent: &mut Agent, data: PrimitiveObjectData) -> Object {
        let intrinsics = agent.current_realm().intrinsics();
        let prototype = match data {
            PrimitiveObjectData::Boolean(_) => intrinsics.boolean_prototype(),
            PrimitiveObjectData::Number(_) => intrinsics.number_prototype(),
            PrimitiveObjectData::String(_) => intrinsics.string_prototype(),
        };
        Self::create_with_prototype(agent, prototype, data)
    }

    /// ### [10.4.3.4 StringCreate ( value, prototype )](https://tc39.es/ecma262/#sec-stringcreate)
    /// for strings, plain object creation for the other kinds.
    pub fn create_with_prototype(
        agent: &mut Agent,
        prototype: Object,
        data: PrimitiveObjectData,
    ) -> Object {
        let mut heap_data =
            ObjectHeapData::with_data(Some(prototype), ObjectData::Primitive(data));
        if let PrimitiveObjectData::String(string) = data {
            // 8. Let length be the length of value.
            let length = string.utf16_len(agent);
            // 9. Perform ! DefinePropertyOrThrow(S, "length", PropertyDescriptor {
            //    [[Value]]: 𝔽(length), [[Writable]]: false, [[Enumerable]]: false,
            //    [[Configurable]]: false }).
            heap_data.properties.set(
                BUILTIN_STRING_MEMORY.length.into(),
                PropertyEntry::Data {
                    value: Value::from_f64(length as f64),
                    writable: false,
                    enumerable: false,
                    configurable: false,
                },
            );
        }
        agent.heap.create(heap_data)
    }
}

/// ### [10.4.3.5 StringGetOwnProperty ( S, P )](https://tc39.es/ecma262/#sec-stringgetownproperty)
fn string_get_own_index_property(
    agent: &mut Agent,
    string: String,
    property_key: PropertyKey,
) -> Option<PropertyDescriptor> {
    // 1. If P is not a String, return undefined.
    // 2. Let index be CanonicalNumericIndexString(P).
    // 3. If index is undefined, return undefined.
    // 4. If IsIntegralNumber(index) is false, return undefined.
    // 5. If index is -0𝔽 or index < -0𝔽, return undefined.
    let PropertyKey::Integer(index) = property_key else {
        return None;
    };
    // 6. Let str be S.[[StringData]].
    // 7. Assert: str is a String.
    // 8. Let len be the length of str.
    // 9. If ℝ(index) ≥ len, return undefined.
    let code_unit = string.utf16_code_unit_at(agent, index as usize)?;
    // 10. Let resultStr be the substring of str from ℝ(index) to ℝ(index) + 1.
    let result_str = String::from_utf16_lossy(agent, &[code_unit]);
    // 11. Return the PropertyDescriptor { [[Value]]: resultStr, [[Writable]]: false,
    //     [[Enumerable]]: true, [[Configurable]]: false }.
    Some(PropertyDescriptor {
        value: Some(result_str.into()),
        writable: Some(false),
        enumerable: Some(true),
        configurable: Some(false),
        ..Default::default()
    })
}

/// ### [10.4.3.1 \[\[GetOwnProperty\]\] ( P )](https://tc39.es/ecma262/#sec-string-exotic-objects-getownproperty-p)
pub(crate) fn string_get_own_property(
    agent: &mut Agent,
    object: Object,
    string: String,
    property_key: PropertyKey,
) -> Option<PropertyDescriptor> {
    // 1. Let desc be OrdinaryGetOwnProperty(S, P).
    // 2. If desc is not undefined, return desc.
    if let Some(descriptor) = ordinary_get_own_property(agent, object, property_key) {
        return Some(descriptor);
    }
    // 3. Return StringGetOwnProperty(S, P).
    string_get_own_index_property(agent, string, property_key)
}

/// ### [10.4.3.2 \[\[DefineOwnProperty\]\] ( P, Desc )](https://tc39.es/ecma262/#sec-string-exotic-objects-defineownproperty-p-desc)
pub(crate) fn string_define_own_property(
    agent: &mut Agent,
    object: Object,
    string: String,
    property_key: PropertyKey,
    property_descriptor: PropertyDescriptor,
) -> JsResult<bool> {
    // 1. Let stringDesc be StringGetOwnProperty(S, P).
    // 2. If stringDesc is not undefined, then
    if let Some(string_desc) = string_get_own_index_property(agent, string, property_key) {
        // a. Let extensible be S.[[Extensible]].
        let extensible = object.internal_extensible(agent);
        // b. Return IsCompatiblePropertyDescriptor(extensible, Desc, stringDesc).
        return Ok(is_compatible_property_descriptor(
            agent,
            extensible,
            property_descriptor,
            Some(string_desc),
        ));
    }
    // 3. Return ! OrdinaryDefineOwnProperty(S, P, Desc).
    ordinary_define_own_property(agent, object, property_key, property_descriptor)
}

/// ### [10.4.3.3 \[\[OwnPropertyKeys\]\] ( )](https://tc39.es/ecma262/#sec-string-exotic-objects-ownpropertykeys)
pub(crate) fn string_own_property_keys(
    agent: &mut Agent,
    object: Object,
    string: String,
) -> Vec<PropertyKey> {
    // 1. Let keys be a new empty List.
    // 2. Let str be O.[[StringData]].
    // 4. Let len be the length of str.
    let len = string.utf16_len(agent) as u32;
    // 5. For each integer i such that 0 ≤ i < len, in ascending order, do
    //    a. Append ! ToString(𝔽(i)) to keys.
    let mut keys: Vec<PropertyKey> = (0..len).map(PropertyKey::from).collect();
    // 6. For each own property key P of O such that P is an array index and
    //    ToIntegerOrInfinity(P) ≥ len, in ascending numeric index order, do
    //    a. Append P to keys.
    // 7. For each own property key P of O such that P is a String and P is
    //    not an array index, in ascending chronological order of property
    //    creation, do
    //    a. Append P to keys.
    keys.extend(
        ordinary_own_property_keys(agent, object)
            .into_iter()
            .filter(|key| !matches!(key, PropertyKey::Integer(index) if *index < len)),
    );
    // 9. Return keys.
    keys
}
