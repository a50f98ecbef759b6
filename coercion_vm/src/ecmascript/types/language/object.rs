// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

mod internal_methods;
mod property_key;
mod property_storage;

use std::ops::{Index, IndexMut};

pub use internal_methods::InternalMethods;
pub use property_key::PropertyKey;
pub use property_storage::PropertyStorage;

use super::{Function, FunctionHeapData, PreferredType, Value};
use crate::{
    ecmascript::{
        builtins::{
            error::ErrorHeapData,
            ordinary::{
                ordinary_define_own_property, ordinary_get_own_property,
                ordinary_own_property_keys,
            },
            primitive_objects::{
                PrimitiveObjectData, string_define_own_property, string_get_own_property,
                string_own_property_keys,
            },
        },
        execution::{Agent, JsResult},
        types::PropertyDescriptor,
    },
    heap::{Heap, indexes::ObjectIndex},
};

/// ### [6.1.7 The Object Type](https://tc39.es/ecma262/#sec-object-type)
///
/// A handle to an object on the heap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Object(pub(crate) ObjectIndex);

/// The internal slots an object carries besides its properties.
#[derive(Debug, Clone)]
pub enum ObjectData {
    Ordinary,
    Array,
    Function(FunctionHeapData),
    Primitive(PrimitiveObjectData),
    Error(ErrorHeapData),
}

#[derive(Debug, Clone)]
pub struct ObjectHeapData {
    pub(crate) extensible: bool,
    pub(crate) prototype: Option<Object>,
    pub(crate) properties: PropertyStorage,
    pub(crate) data: ObjectData,
    /// ToPrimitive hint used when the caller gives none. Unset means Number.
    pub(crate) default_preferred_type: Option<PreferredType>,
}

impl ObjectHeapData {
    pub(crate) fn new(prototype: Option<Object>) -> Self {
        Self {
            extensible: true,
            prototype,
            properties: PropertyStorage::default(),
            data: ObjectData::Ordinary,
            default_preferred_type: None,
        }
    }

    pub(crate) fn with_data(prototype: Option<Object>, data: ObjectData) -> Self {
        Self {
            data,
            ..Self::new(prototype)
        }
    }
}

/// A property as stored on an object: always complete, and always either a
/// data or an accessor property.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PropertyEntry {
    Data {
        value: Value,
        writable: bool,
        enumerable: bool,
        configurable: bool,
    },
    Accessor {
        get: Option<Function>,
        set: Option<Function>,
        enumerable: bool,
        configurable: bool,
    },
}

impl PropertyEntry {
    /// Writable, enumerable and configurable data property, the shape
    /// produced by CreateDataProperty.
    pub fn data(value: Value) -> Self {
        PropertyEntry::Data {
            value,
            writable: true,
            enumerable: true,
            configurable: true,
        }
    }

    pub fn is_data(&self) -> bool {
        matches!(self, PropertyEntry::Data { .. })
    }

    pub fn is_accessor(&self) -> bool {
        matches!(self, PropertyEntry::Accessor { .. })
    }

    pub fn value(&self) -> Option<Value> {
        match self {
            PropertyEntry::Data { value, .. } => Some(*value),
            PropertyEntry::Accessor { .. } => None,
        }
    }

    pub fn writable(&self) -> Option<bool> {
        match self {
            PropertyEntry::Data { writable, .. } => Some(*writable),
            PropertyEntry::Accessor { .. } => None,
        }
    }

    pub fn getter(&self) -> Option<Function> {
        match self {
            PropertyEntry::Accessor { get, .. } => *get,
            PropertyEntry::Data { .. } => None,
        }
    }

    pub fn setter(&self) -> Option<Function> {
        match self {
            PropertyEntry::Accessor { set, .. } => *set,
            PropertyEntry::Data { .. } => None,
        }
    }

    pub fn enumerable(&self) -> bool {
        match self {
            PropertyEntry::Data { enumerable, .. } | PropertyEntry::Accessor { enumerable, .. } => {
                *enumerable
            }
        }
    }

    pub fn configurable(&self) -> bool {
        match self {
            PropertyEntry::Data { configurable, .. }
            | PropertyEntry::Accessor { configurable, .. } => *configurable,
        }
    }

    /// The fully populated Property Descriptor describing this property.
    pub fn into_descriptor(self) -> PropertyDescriptor {
        match self {
            PropertyEntry::Data {
                value,
                writable,
                enumerable,
                configurable,
            } => PropertyDescriptor {
                value: Some(value),
                writable: Some(writable),
                enumerable: Some(enumerable),
                configurable: Some(configurable),
                ..Default::default()
            },
            PropertyEntry::Accessor {
                get,
                set,
                enumerable,
                configurable,
            } => PropertyDescriptor {
                get: Some(get),
                set: Some(set),
                enumerable: Some(enumerable),
                configurable: Some(configurable),
                ..Default::default()
            },
        }
    }
}

/// Where a property was found while walking the prototype chain.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PropertyLookup {
    /// The object itself has the property.
    Own(PropertyDescriptor),
    /// An object on the prototype chain has it.
    Inherited {
        holder: Object,
        descriptor: PropertyDescriptor,
    },
    Absent,
}

impl PropertyLookup {
    pub fn descriptor(self) -> Option<PropertyDescriptor> {
        match self {
            PropertyLookup::Own(descriptor) | PropertyLookup::Inherited { descriptor, .. } => {
                Some(descriptor)
            }
            PropertyLookup::Absent => None,
        }
    }

    pub fn is_own(self) -> bool {
        matches!(self, PropertyLookup::Own(_))
    }

    pub fn is_absent(self) -> bool {
        matches!(self, PropertyLookup::Absent)
    }
}

impl Object {
    /// The object's \[\[Prototype\]\] slot, read without going through the
    /// internal method.
    pub fn internal_prototype(self, agent: &Agent) -> Option<Object> {
        agent[self].prototype
    }

    pub(crate) fn internal_set_prototype(self, agent: &mut Agent, prototype: Option<Object>) {
        agent[self].prototype = prototype;
    }

    pub fn internal_extensible(self, agent: &Agent) -> bool {
        agent[self].extensible
    }

    pub(crate) fn internal_set_extensible(self, agent: &mut Agent, value: bool) {
        agent[self].extensible = value;
    }

    /// Overrides the hint ToPrimitive uses for this object when the caller
    /// passes none. Hosts use this for Date-like objects that prefer strings.
    pub fn set_default_preferred_type(self, agent: &mut Agent, hint: Option<PreferredType>) {
        agent[self].default_preferred_type = hint;
    }

    pub fn default_preferred_type(self, agent: &Agent) -> Option<PreferredType> {
        agent[self].default_preferred_type
    }

    pub fn is_callable(self, agent: &Agent) -> bool {
        matches!(agent[self].data, ObjectData::Function(_))
    }

    pub fn primitive_data(self, agent: &Agent) -> Option<PrimitiveObjectData> {
        match agent[self].data {
            ObjectData::Primitive(data) => Some(data),
            _ => None,
        }
    }

    pub fn into_value(self) -> Value {
        Value::Object(self)
    }
}

impl TryFrom<Value> for Object {
    type Error = ();

    fn try_from(value: Value) -> Result<Self, ()> {
        match value {
            Value::Object(object) => Ok(object),
            _ => Err(()),
        }
    }
}

impl InternalMethods for Object {
    fn internal_get_own_property(
        self,
        agent: &mut Agent,
        property_key: PropertyKey,
    ) -> JsResult<Option<PropertyDescriptor>> {
        match agent[self].data {
            ObjectData::Primitive(PrimitiveObjectData::String(string)) => {
                Ok(string_get_own_property(agent, self, string, property_key))
            }
            _ => Ok(ordinary_get_own_property(agent, self, property_key)),
        }
    }

    fn internal_define_own_property(
        self,
        agent: &mut Agent,
        property_key: PropertyKey,
        property_descriptor: PropertyDescriptor,
    ) -> JsResult<bool> {
        match agent[self].data {
            ObjectData::Primitive(PrimitiveObjectData::String(string)) => {
                string_define_own_property(agent, self, string, property_key, property_descriptor)
            }
            _ => ordinary_define_own_property(agent, self, property_key, property_descriptor),
        }
    }

    fn internal_own_property_keys(self, agent: &mut Agent) -> JsResult<Vec<PropertyKey>> {
        match agent[self].data {
            ObjectData::Primitive(PrimitiveObjectData::String(string)) => {
                Ok(string_own_property_keys(agent, self, string))
            }
            _ => Ok(ordinary_own_property_keys(agent, self)),
        }
    }
}

impl Index<Object> for Agent {
    type Output = ObjectHeapData;

    fn index(&self, index: Object) -> &Self::Output {
        Heap::get(&self.heap.objects, index.0)
    }
}

impl IndexMut<Object> for Agent {
    fn index_mut(&mut self, index: Object) -> &mut Self::Output {
        Heap::get_mut(&mut self.heap.objects, index.0)
    }
}
