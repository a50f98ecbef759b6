// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::ecmascript::{
    abstract_operations::{
        operations_on_objects::{get, has_property},
        testing_and_comparison::is_callable,
        type_conversion::to_boolean,
    },
    builtins::ordinary::ordinary_object_create,
    execution::{Agent, ExceptionType, JsResult},
    types::{BUILTIN_STRING_MEMORY, Function, Object, PropertyEntry, Value},
};

/// ### [6.2.6 The Property Descriptor Specification Type](https://tc39.es/ecma262/#sec-property-descriptor-specification-type)
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PropertyDescriptor {
    /// \[\[Value]]
    pub value: Option<Value>,

    /// \[\[Writable]]
    pub writable: Option<bool>,

    /// \[\[Get]]
    ///
    /// Note: double-Option because these fields can be set explicitly undefined
    /// to unset them.
    pub get: Option<Option<Function>>,

    /// \[\[Set]]
    ///
    /// Note: double-Option because these fields can be set explicitly undefined
    /// to unset them.
    pub set: Option<Option<Function>>,

    /// \[\[Enumerable]]
    pub enumerable: Option<bool>,

    /// \[\[Configurable]]
    pub configurable: Option<bool>,
}

impl PropertyDescriptor {
    pub fn new_data_descriptor(value: impl Into<Value>) -> Self {
        Self {
            value: Some(value.into()),
            writable: Some(true),
            get: None,
            set: None,
            enumerable: Some(true),
            configurable: Some(true),
        }
    }

    /// ### [6.2.6.1 IsAccessorDescriptor ( Desc )](https://tc39.es/ecma262/#sec-isaccessordescriptor)
    pub fn is_accessor_descriptor(&self) -> bool {
        // 1. If Desc is undefined, return false.
        match (self.get, self.set) {
            // 2. If Desc has a [[Get]] field, return true.
            (Some(_), _) => true,
            // 3. If Desc has a [[Set]] field, return true.
            (_, Some(_)) => true,
            // 4. Return false.
            _ => false,
        }
    }

    /// ### [6.2.6.2 IsDataDescriptor ( Desc )](https://tc39.es/ecma262/#sec-isdatadescriptor)
    pub fn is_data_descriptor(&self) -> bool {
        // 1. If Desc is undefined, return false.
        match (self.value, self.writable) {
            // 2. If Desc has a [[Value]] field, return true.
            (Some(_), _) => true,
            // 3. If Desc has a [[Writable]] field, return true.
            (_, Some(_)) => true,
            // 4. Return false.
            _ => false,
        }
    }

    /// ### [6.2.6.3 IsGenericDescriptor ( Desc )](https://tc39.es/ecma262/#sec-isgenericdescriptor)
    pub fn is_generic_descriptor(&self) -> bool {
        // 1. If Desc is undefined, return false.
        // 2. If IsAccessorDescriptor(Desc) is true, return false.
        // 3. If IsDataDescriptor(Desc) is true, return false.
        // 4. Return true.
        !self.is_accessor_descriptor() && !self.is_data_descriptor()
    }

    pub fn has_fields(&self) -> bool {
        self.value.is_some()
            || self.writable.is_some()
            || self.get.is_some()
            || self.set.is_some()
            || self.enumerable.is_some()
            || self.configurable.is_some()
    }

    /// True when the descriptor describes a complete data or accessor
    /// property.
    pub fn is_fully_populated(&self) -> bool {
        self.enumerable.is_some()
            && self.configurable.is_some()
            && ((self.value.is_some() && self.writable.is_some())
                || (self.get.is_some() && self.set.is_some()))
    }

    /// ### [6.2.6.4 FromPropertyDescriptor ( Desc )](https://tc39.es/ecma262/#sec-frompropertydescriptor)
    ///
    /// The abstract operation FromPropertyDescriptor takes argument Desc (a
    /// Property Descriptor or undefined) and returns an Object or undefined.
    pub fn from_property_descriptor(desc: Option<Self>, agent: &mut Agent) -> Option<Object> {
        // 1. If Desc is undefined, return undefined.
        let desc = desc?;

        // 2. Let obj be OrdinaryObjectCreate(%Object.prototype%).
        // 3. Assert: obj is an extensible ordinary object with no own properties.
        let object_prototype = agent.current_realm().intrinsics().object_prototype();
        let obj = ordinary_object_create(agent, Some(object_prototype));

        let mut entries = Vec::with_capacity(4);
        // 4. If Desc has a [[Value]] field, then
        if let Some(value) = desc.value {
            // a. Perform ! CreateDataPropertyOrThrow(obj, "value", Desc.[[Value]]).
            entries.push((BUILTIN_STRING_MEMORY.value, value));
        }
        // 5. If Desc has a [[Writable]] field, then
        if let Some(writable) = desc.writable {
            // a. Perform ! CreateDataPropertyOrThrow(obj, "writable", Desc.[[Writable]]).
            entries.push((BUILTIN_STRING_MEMORY.writable, writable.into()));
        }
        // 6. If Desc has a [[Get]] field, then
        if let Some(getter) = desc.get {
            // a. Perform ! CreateDataPropertyOrThrow(obj, "get", Desc.[[Get]]).
            entries.push((BUILTIN_STRING_MEMORY.get, getter.into()));
        }
        // 7. If Desc has a [[Set]] field, then
        if let Some(setter) = desc.set {
            // a. Perform ! CreateDataPropertyOrThrow(obj, "set", Desc.[[Set]]).
            entries.push((BUILTIN_STRING_MEMORY.set, setter.into()));
        }
        // 8. If Desc has an [[Enumerable]] field, then
        if let Some(enumerable) = desc.enumerable {
            // a. Perform ! CreateDataPropertyOrThrow(obj, "enumerable", Desc.[[Enumerable]]).
            entries.push((BUILTIN_STRING_MEMORY.enumerable, enumerable.into()));
        }
        // 9. If Desc has a [[Configurable]] field, then
        if let Some(configurable) = desc.configurable {
            // a. Perform ! CreateDataPropertyOrThrow(obj, "configurable", Desc.[[Configurable]]).
            entries.push((BUILTIN_STRING_MEMORY.configurable, configurable.into()));
        }
        for (key, value) in entries {
            agent[obj]
                .properties
                .set(key.into(), PropertyEntry::data(value));
        }

        // 10. Return obj.
        Some(obj)
    }

    /// ### [6.2.6.5 ToPropertyDescriptor ( Obj )](https://tc39.es/ecma262/#sec-topropertydescriptor)
    ///
    /// The abstract operation ToPropertyDescriptor takes argument Obj (an
    /// ECMAScript language value) and returns either a normal completion
    /// containing a Property Descriptor or a throw completion.
    ///
    /// Every field is read with \[\[HasProperty\]\] and \[\[Get\]\], so fields
    /// are found anywhere on the prototype chain and an own field shadows an
    /// inherited one.
    pub fn to_property_descriptor(agent: &mut Agent, obj: Value) -> JsResult<Self> {
        // 1. If Obj is not an Object, throw a TypeError exception.
        let Ok(obj) = Object::try_from(obj) else {
            return Err(agent.throw_exception(
                ExceptionType::TypeError,
                "Property description must be an object",
            ));
        };
        log::trace!("ToPropertyDescriptor({obj:?})");

        // 2. Let desc be a new Property Descriptor that initially has no fields.
        let mut desc = PropertyDescriptor::default();

        // 3. Let hasEnumerable be ? HasProperty(Obj, "enumerable").
        // 4. If hasEnumerable is true, then
        if has_property(agent, obj, BUILTIN_STRING_MEMORY.enumerable.into())? {
            // a. Let enumerable be ToBoolean(? Get(Obj, "enumerable")).
            let enumerable = get(agent, obj, BUILTIN_STRING_MEMORY.enumerable.into())?;
            // b. Set desc.[[Enumerable]] to enumerable.
            desc.enumerable = Some(to_boolean(agent, enumerable));
        }

        // 5. Let hasConfigurable be ? HasProperty(Obj, "configurable").
        // 6. If hasConfigurable is true, then
        if has_property(agent, obj, BUILTIN_STRING_MEMORY.configurable.into())? {
            // a. Let configurable be ToBoolean(? Get(Obj, "configurable")).
            let configurable = get(agent, obj, BUILTIN_STRING_MEMORY.configurable.into())?;
            // b. Set desc.[[Configurable]] to configurable.
            desc.configurable = Some(to_boolean(agent, configurable));
        }

        // 7. Let hasValue be ? HasProperty(Obj, "value").
        // 8. If hasValue is true, then
        if has_property(agent, obj, BUILTIN_STRING_MEMORY.value.into())? {
            // a. Let value be ? Get(Obj, "value").
            // b. Set desc.[[Value]] to value.
            desc.value = Some(get(agent, obj, BUILTIN_STRING_MEMORY.value.into())?);
        }

        // 9. Let hasWritable be ? HasProperty(Obj, "writable").
        // 10. If hasWritable is true, then
        if has_property(agent, obj, BUILTIN_STRING_MEMORY.writable.into())? {
            // a. Let writable be ToBoolean(? Get(Obj, "writable")).
            let writable = get(agent, obj, BUILTIN_STRING_MEMORY.writable.into())?;
            // b. Set desc.[[Writable]] to writable.
            desc.writable = Some(to_boolean(agent, writable));
        }

        // 11. Let hasGet be ? HasProperty(Obj, "get").
        // 12. If hasGet is true, then
        if has_property(agent, obj, BUILTIN_STRING_MEMORY.get.into())? {
            // a. Let getter be ? Get(Obj, "get").
            let getter = get(agent, obj, BUILTIN_STRING_MEMORY.get.into())?;
            // b. If IsCallable(getter) is false and getter is not undefined,
            //    throw a TypeError exception.
            // c. Set desc.[[Get]] to getter.
            desc.get = Some(accessor_function(agent, getter, "Getter must be a function")?);
        }

        // 13. Let hasSet be ? HasProperty(Obj, "set").
        // 14. If hasSet is true, then
        if has_property(agent, obj, BUILTIN_STRING_MEMORY.set.into())? {
            // a. Let setter be ? Get(Obj, "set").
            let setter = get(agent, obj, BUILTIN_STRING_MEMORY.set.into())?;
            // b. If IsCallable(setter) is false and setter is not undefined,
            //    throw a TypeError exception.
            // c. Set desc.[[Set]] to setter.
            desc.set = Some(accessor_function(agent, setter, "Setter must be a function")?);
        }

        // 15. If desc has a [[Get]] field or desc has a [[Set]] field, then
        // a. If desc has a [[Value]] field or desc has a [[Writable]] field,
        //    throw a TypeError exception.
        if desc.is_accessor_descriptor() && desc.is_data_descriptor() {
            return Err(agent.throw_exception(
                ExceptionType::TypeError,
                "Invalid property descriptor. Cannot both specify accessors and a value or writable attribute",
            ));
        }

        // 16. Return desc.
        Ok(desc)
    }

    /// ### [6.2.6.6 CompletePropertyDescriptor ( Desc )](https://tc39.es/ecma262/#sec-completepropertydescriptor)
    ///
    /// Fills every absent field with its default value and returns the
    /// resulting complete property.
    pub fn complete_property_descriptor(self) -> PropertyEntry {
        // 1. Let like be the Record { [[Value]]: undefined, [[Writable]]: false,
        //    [[Get]]: undefined, [[Set]]: undefined, [[Enumerable]]: false,
        //    [[Configurable]]: false }.
        // 2. If IsGenericDescriptor(Desc) is true or IsDataDescriptor(Desc) is true, then
        if self.is_generic_descriptor() || self.is_data_descriptor() {
            // a. If Desc does not have a [[Value]] field, set Desc.[[Value]] to like.[[Value]].
            // b. If Desc does not have a [[Writable]] field, set Desc.[[Writable]] to like.[[Writable]].
            // 4. If Desc does not have an [[Enumerable]] field, set Desc.[[Enumerable]] to like.[[Enumerable]].
            // 5. If Desc does not have a [[Configurable]] field, set Desc.[[Configurable]] to like.[[Configurable]].
            PropertyEntry::Data {
                value: self.value.unwrap_or(Value::Undefined),
                writable: self.writable.unwrap_or(false),
                enumerable: self.enumerable.unwrap_or(false),
                configurable: self.configurable.unwrap_or(false),
            }
        } else {
            // 3. Else,
            // a. If Desc does not have a [[Get]] field, set Desc.[[Get]] to like.[[Get]].
            // b. If Desc does not have a [[Set]] field, set Desc.[[Set]] to like.[[Set]].
            PropertyEntry::Accessor {
                get: self.get.flatten(),
                set: self.set.flatten(),
                enumerable: self.enumerable.unwrap_or(false),
                configurable: self.configurable.unwrap_or(false),
            }
        }
    }
}

/// Reads the attributes of a descriptor-shaped object, the way
/// `Object.defineProperties` does for each of its descriptors, and returns
/// the complete property they describe.
///
/// Attributes are looked up through the prototype chain with own properties
/// taking precedence, then missing attributes take their defaults: undefined
/// for `value`, false for `writable`, `enumerable` and `configurable`, and
/// no function for `get` and `set`.
///
/// Fails with a TypeError if `source` is not an object, if `get` or `set` is
/// neither callable nor undefined, or if accessor and data attributes are
/// mixed.
pub fn read_descriptor_attributes(agent: &mut Agent, source: Value) -> JsResult<PropertyEntry> {
    let descriptor = PropertyDescriptor::to_property_descriptor(agent, source)?;
    Ok(descriptor.complete_property_descriptor())
}

fn accessor_function(
    agent: &mut Agent,
    value: Value,
    message: &'static str,
) -> JsResult<Option<Function>> {
    if value.is_undefined() {
        return Ok(None);
    }
    if !is_callable(agent, value) {
        return Err(agent.throw_exception(ExceptionType::TypeError, message));
    }
    Ok(Function::try_from_value(agent, value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn descriptor_shapes() {
        let generic = PropertyDescriptor {
            enumerable: Some(true),
            ..Default::default()
        };
        assert!(generic.is_generic_descriptor());
        assert!(!generic.is_fully_populated());

        let data = PropertyDescriptor::new_data_descriptor(Value::Null);
        assert!(data.is_data_descriptor());
        assert!(!data.is_accessor_descriptor());
        assert!(data.is_fully_populated());

        let accessor = PropertyDescriptor {
            get: Some(None),
            ..Default::default()
        };
        assert!(accessor.is_accessor_descriptor());
        assert!(!accessor.is_generic_descriptor());
    }

    #[test]
    fn complete_fills_defaults() {
        let entry = PropertyDescriptor::default().complete_property_descriptor();
        assert_eq!(
            entry,
            PropertyEntry::Data {
                value: Value::Undefined,
                writable: false,
                enumerable: false,
                configurable: false,
            }
        );

        let entry = PropertyDescriptor {
            set: Some(None),
            configurable: Some(true),
            ..Default::default()
        }
        .complete_property_descriptor();
        assert_eq!(
            entry,
            PropertyEntry::Accessor {
                get: None,
                set: None,
                enumerable: false,
                configurable: true,
            }
        );
    }
}
