// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::builtin_function_builder::BuiltinFunctionBuilder;
use crate::ecmascript::{
    builtins::Builtin,
    execution::Agent,
    types::{
        BUILTIN_STRING_MEMORY, Function, Object, ObjectData, ObjectHeapData, PropertyEntry,
        PropertyKey, PropertyStorage,
    },
};

/// Builds an intrinsic object and its properties in one go, into the heap
/// slot reserved for it.
pub struct OrdinaryObjectBuilder<'agent> {
    pub(crate) agent: &'agent mut Agent,
    this: Object,
    prototype: Option<Object>,
    data: ObjectData,
    properties: PropertyStorage,
}

impl<'agent> OrdinaryObjectBuilder<'agent> {
    #[must_use]
    pub(crate) fn new_intrinsic_object(agent: &'agent mut Agent, this: Object) -> Self {
        Self {
            agent,
            this,
            prototype: None,
            data: ObjectData::Ordinary,
            properties: PropertyStorage::default(),
        }
    }

    #[must_use]
    pub fn with_prototype(mut self, prototype: Object) -> Self {
        self.prototype = Some(prototype);
        self
    }

    #[must_use]
    pub(crate) fn with_data(mut self, data: ObjectData) -> Self {
        self.data = data;
        self
    }

    #[must_use]
    pub fn with_property_capacity(mut self, cap: usize) -> Self {
        self.properties = PropertyStorage::with_capacity(cap);
        self
    }

    #[must_use]
    pub fn with_property(mut self, key: PropertyKey, entry: PropertyEntry) -> Self {
        self.properties.set(key, entry);
        self
    }

    #[must_use]
    pub fn with_constructor_property(mut self, constructor: Function) -> Self {
        self.properties.set(
            BUILTIN_STRING_MEMORY.constructor.into(),
            PropertyEntry::Data {
                value: constructor.into(),
                writable: true,
                enumerable: false,
                configurable: true,
            },
        );
        self
    }

    #[must_use]
    pub fn with_builtin_function_property<T: Builtin>(mut self) -> Self {
        let function = BuiltinFunctionBuilder::new::<T>(&mut *self.agent).build();
        self.properties.set(
            T::NAME.into(),
            PropertyEntry::Data {
                value: function.into(),
                writable: T::WRITABLE,
                enumerable: T::ENUMERABLE,
                configurable: T::CONFIGURABLE,
            },
        );
        self
    }

    pub fn build(self) -> Object {
        let Self {
            agent,
            this,
            prototype,
            data,
            properties,
        } = self;
        let slot = agent
            .heap
            .objects
            .get_mut(this.0.into_index())
            .expect("Object slot out of bounds");
        *slot = Some(ObjectHeapData {
            extensible: true,
            prototype,
            properties,
            data,
            default_preferred_type: None,
        });
        this
    }
}
