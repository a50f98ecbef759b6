// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::{
    ecmascript::{
        builtins::{Behaviour, Builtin, BuiltinIntrinsicConstructor},
        execution::Agent,
        types::{
            BUILTIN_STRING_MEMORY, Function, FunctionHeapData, Object, ObjectData, ObjectHeapData,
            PropertyEntry, PropertyKey, PropertyStorage, String, Value,
        },
    },
    heap::indexes::ObjectIndex,
};

/// Builds a function object with the `length` and `name` properties every
/// builtin carries.
pub struct BuiltinFunctionBuilder<'agent> {
    pub(crate) agent: &'agent mut Agent,
    this: Function,
    prototype: Option<Object>,
    length: u8,
    name: String,
    behaviour: Behaviour,
    properties: Vec<(PropertyKey, PropertyEntry)>,
}

impl<'agent> BuiltinFunctionBuilder<'agent> {
    #[must_use]
    pub fn new<T: Builtin>(agent: &'agent mut Agent) -> Self {
        Self::new_with_behaviour(agent, T::NAME, T::LENGTH, T::BEHAVIOUR)
    }

    #[must_use]
    pub(crate) fn new_with_behaviour(
        agent: &'agent mut Agent,
        name: String,
        length: u8,
        behaviour: Behaviour,
    ) -> Self {
        agent.heap.objects.push(None);
        let this = Function(ObjectIndex::last(&agent.heap.objects));
        let prototype = Some(agent.current_realm().intrinsics().function_prototype());
        Self {
            agent,
            this,
            prototype,
            length,
            name,
            behaviour,
            properties: Vec::new(),
        }
    }

    #[must_use]
    pub(crate) fn new_intrinsic_constructor<T: BuiltinIntrinsicConstructor>(
        agent: &'agent mut Agent,
    ) -> Self {
        let intrinsics = agent.current_realm().intrinsics();
        let this = intrinsics.function(T::INDEX);
        let prototype = Some(intrinsics.function_prototype());
        Self {
            agent,
            this,
            prototype,
            length: T::LENGTH,
            name: T::NAME,
            behaviour: T::BEHAVIOUR,
            properties: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_prototype(mut self, prototype: Object) -> Self {
        self.prototype = Some(prototype);
        self
    }

    #[must_use]
    pub fn with_property_capacity(mut self, cap: usize) -> Self {
        self.properties.reserve(cap);
        self
    }

    /// Adds the non-writable, non-enumerable, non-configurable `prototype`
    /// property of a constructor.
    #[must_use]
    pub fn with_prototype_property(mut self, prototype: Object) -> Self {
        self.properties.push((
            BUILTIN_STRING_MEMORY.prototype.into(),
            PropertyEntry::Data {
                value: prototype.into(),
                writable: false,
                enumerable: false,
                configurable: false,
            },
        ));
        self
    }

    #[must_use]
    pub fn with_builtin_function_property<T: Builtin>(mut self) -> Self {
        let function = BuiltinFunctionBuilder::new::<T>(&mut *self.agent).build();
        self.properties.push((
            T::NAME.into(),
            PropertyEntry::Data {
                value: function.into(),
                writable: T::WRITABLE,
                enumerable: T::ENUMERABLE,
                configurable: T::CONFIGURABLE,
            },
        ));
        self
    }

    pub fn build(self) -> Function {
        let Self {
            agent,
            this,
            prototype,
            length,
            name,
            behaviour,
            properties,
        } = self;
        let mut storage = PropertyStorage::with_capacity(properties.len() + 2);
        storage.set(
            BUILTIN_STRING_MEMORY.length.into(),
            PropertyEntry::Data {
                value: Value::Integer(length.into()),
                writable: false,
                enumerable: false,
                configurable: true,
            },
        );
        storage.set(
            BUILTIN_STRING_MEMORY.name.into(),
            PropertyEntry::Data {
                value: name.into(),
                writable: false,
                enumerable: false,
                configurable: true,
            },
        );
        for (key, entry) in properties {
            storage.set(key, entry);
        }
        let slot = agent
            .heap
            .objects
            .get_mut(Object::from(this).0.into_index())
            .expect("Function slot out of bounds");
        *slot = Some(ObjectHeapData {
            extensible: true,
            prototype,
            properties: storage,
            data: ObjectData::Function(FunctionHeapData { behaviour }),
            default_preferred_type: None,
        });
        this
    }
}
