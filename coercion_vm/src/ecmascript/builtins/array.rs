// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! ### [10.4.2 Array Exotic Objects](https://tc39.es/ecma262/#sec-array-exotic-objects)
//!
//! Arrays here are result containers, such as the output of
//! `String.prototype.split`. Their `length` is an ordinary data property
//! written once at creation; later index writes do not update it.

use crate::{
    ecmascript::{
        abstract_operations::type_conversion::to_uint32_number,
        builders::{
            builtin_function_builder::BuiltinFunctionBuilder,
            ordinary_object_builder::OrdinaryObjectBuilder,
        },
        builtins::{
            ArgumentsList, Behaviour, Builtin, BuiltinIntrinsicConstructor,
            ordinary::get_prototype_from_constructor,
        },
        execution::{Agent, ExceptionType, IntrinsicObjectIndexes, JsResult, ProtoIntrinsics},
        types::{
            BUILTIN_STRING_MEMORY, Function, Object, ObjectData, ObjectHeapData, PropertyEntry,
            PropertyKey, String, Value,
        },
    },
    heap::CreateHeapData,
};

fn length_property(length: usize) -> PropertyEntry {
    PropertyEntry::Data {
        value: Value::from_f64(length as f64),
        writable: true,
        enumerable: false,
        configurable: false,
    }
}

/// ### [7.3.17 CreateArrayFromList ( elements )](https://tc39.es/ecma262/#sec-createarrayfromlist)
pub fn create_array_from_list(agent: &mut Agent, elements: &[Value]) -> Object {
    // 1. Let array be ! ArrayCreate(0).
    let prototype = agent.current_realm().intrinsics().array_prototype();
    array_with_elements(agent, prototype, elements)
}

fn array_with_elements(agent: &mut Agent, prototype: Object, elements: &[Value]) -> Object {
    let mut data = ObjectHeapData::with_data(Some(prototype), ObjectData::Array);
    // 2. Let n be 0.
    // 3. For each element e of elements, do
    //    a. Perform ! CreateDataPropertyOrThrow(array, ! ToString(𝔽(n)), e).
    //    b. Set n to n + 1.
    for (n, element) in elements.iter().enumerate() {
        data.properties
            .set(PropertyKey::Integer(n as u32), PropertyEntry::data(*element));
    }
    data.properties
        .set(BUILTIN_STRING_MEMORY.length.into(), length_property(elements.len()));
    // 4. Return array.
    agent.heap.create(data)
}

pub(crate) struct ArrayConstructor;

impl Builtin for ArrayConstructor {
    const NAME: String = BUILTIN_STRING_MEMORY.Array;

    const LENGTH: u8 = 1;

    const BEHAVIOUR: Behaviour = Behaviour::Constructor(Self::behaviour);
}
impl BuiltinIntrinsicConstructor for ArrayConstructor {
    const INDEX: IntrinsicObjectIndexes = IntrinsicObjectIndexes::ArrayConstructor;
}

impl ArrayConstructor {
    /// ### [23.1.1.1 Array ( ...values )](https://tc39.es/ecma262/#sec-array)
    fn behaviour(
        agent: &mut Agent,
        _this_value: Value,
        arguments: ArgumentsList,
        new_target: Option<Object>,
    ) -> JsResult<Value> {
        // 1. If NewTarget is undefined, let newTarget be the active function
        //    object; else let newTarget be NewTarget.
        let new_target = match new_target {
            None => agent.current_realm().intrinsics().array(),
            Some(new_target) => Function::try_from_object(agent, new_target).ok_or_else(|| {
                agent.throw_exception(ExceptionType::TypeError, "NewTarget is not a constructor")
            })?,
        };
        // 2. Let proto be ? GetPrototypeFromConstructor(newTarget, "%Array.prototype%").
        let proto = get_prototype_from_constructor(agent, new_target, ProtoIntrinsics::Array)?;

        // 3. Let numberOfArgs be the number of elements in values.
        // 4. If numberOfArgs = 0, then
        //    a. Return ! ArrayCreate(0, proto).
        // 5. Else if numberOfArgs = 1, then
        if let &[len] = arguments.0 {
            // a. Let len be values[0].
            // c. If len is not a Number, then
            let Some(len) = len.as_f64() else {
                // i. Perform ! CreateDataPropertyOrThrow(array, "0", len).
                // ii. Let intLen be 1𝔽.
                return Ok(array_with_elements(agent, proto, &[len]).into());
            };
            // d. Else,
            //    i. Let intLen be ! ToUint32(len).
            let int_len = to_uint32_number(len);
            //    ii. If SameValueZero(intLen, len) is false, throw a RangeError exception.
            if f64::from(int_len) != len {
                return Err(agent.throw_exception(ExceptionType::RangeError, "Invalid array length"));
            }
            // e. Perform ! Set(array, "length", intLen, true).
            // f. Return array.
            let mut data = ObjectHeapData::with_data(Some(proto), ObjectData::Array);
            data.properties.set(
                BUILTIN_STRING_MEMORY.length.into(),
                length_property(int_len as usize),
            );
            let array: Object = agent.heap.create(data);
            return Ok(array.into());
        }
        // 6. Else,
        //    b. Let array be ? ArrayCreate(numberOfArgs, proto).
        //    d. Repeat, while k < numberOfArgs, perform
        //       ! CreateDataPropertyOrThrow(array, Pk, values[k]).
        //    f. Return array.
        Ok(array_with_elements(agent, proto, arguments.0).into())
    }

    pub(crate) fn create_intrinsic(agent: &mut Agent) {
        let array_prototype = agent.current_realm().intrinsics().array_prototype();

        BuiltinFunctionBuilder::new_intrinsic_constructor::<ArrayConstructor>(agent)
            .with_property_capacity(1)
            .with_prototype_property(array_prototype)
            .build();
    }
}

pub(crate) struct ArrayPrototype;

impl ArrayPrototype {
    pub(crate) fn create_intrinsic(agent: &mut Agent) {
        let intrinsics = agent.current_realm().intrinsics();
        let object_prototype = intrinsics.object_prototype();
        let array_constructor = intrinsics.array();
        let this = intrinsics.array_prototype();

        OrdinaryObjectBuilder::new_intrinsic_object(agent, this)
            .with_property_capacity(2)
            .with_prototype(object_prototype)
            .with_data(ObjectData::Array)
            .with_property(BUILTIN_STRING_MEMORY.length.into(), length_property(0))
            .with_constructor_property(array_constructor)
            .build();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ecmascript::{abstract_operations::operations_on_objects::get, execution::Agent};

    #[test]
    fn array_from_list_has_elements_and_length() {
        let mut agent = Agent::default();
        let a = Value::from_str(&mut agent, "a");
        let array = create_array_from_list(&mut agent, &[a, Value::Integer(2)]);
        assert_eq!(
            get(&mut agent, array, BUILTIN_STRING_MEMORY.length.into()).unwrap(),
            Value::Integer(2)
        );
        assert_eq!(get(&mut agent, array, PropertyKey::Integer(0)).unwrap(), a);
        assert_eq!(
            get(&mut agent, array, PropertyKey::Integer(1)).unwrap(),
            Value::Integer(2)
        );
        assert_eq!(
            array.internal_prototype(&agent),
            Some(agent.current_realm().intrinsics().array_prototype())
        );
    }
}
