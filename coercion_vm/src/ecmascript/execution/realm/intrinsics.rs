// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::{
    ecmascript::types::{Function, Object},
    heap::indexes::ObjectIndex,
};

/// Heap slots of the intrinsic objects, in allocation order.
#[derive(Debug, Clone, Copy)]
#[repr(u32)]
pub(crate) enum IntrinsicObjectIndexes {
    ObjectPrototype,
    FunctionPrototype,
    ErrorPrototype,
    ArrayPrototype,
    BooleanPrototype,
    NumberPrototype,
    StringPrototype,
    ObjectConstructor,
    ArrayConstructor,
    BooleanConstructor,
    NumberConstructor,
    StringConstructor,
}

pub(crate) const INTRINSIC_OBJECT_COUNT: usize =
    IntrinsicObjectIndexes::StringConstructor as usize + 1;

impl IntrinsicObjectIndexes {
    pub(crate) const fn get_object_index(self, base: ObjectIndex) -> ObjectIndex {
        ObjectIndex::from_u32_index(self as u32 + base.into_u32_index())
    }
}

/// Enumeration of intrinsics intended to be used as the \[\[Prototype\]\]
/// value of an object. Used in GetPrototypeFromConstructor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ProtoIntrinsics {
    Array,
    Boolean,
    Number,
    Object,
    String,
}

#[derive(Debug, Clone)]
pub struct Intrinsics {
    object_index_base: ObjectIndex,
}

impl Default for Intrinsics {
    fn default() -> Self {
        Self {
            object_index_base: ObjectIndex::from_index(0),
        }
    }
}

impl Intrinsics {
    pub(crate) fn object(&self, index: IntrinsicObjectIndexes) -> Object {
        Object(index.get_object_index(self.object_index_base))
    }

    pub(crate) fn function(&self, index: IntrinsicObjectIndexes) -> Function {
        Function(index.get_object_index(self.object_index_base))
    }

    pub(crate) fn get_intrinsic_default_proto(&self, intrinsic: ProtoIntrinsics) -> Object {
        match intrinsic {
            ProtoIntrinsics::Array => self.array_prototype(),
            ProtoIntrinsics::Boolean => self.boolean_prototype(),
            ProtoIntrinsics::Number => self.number_prototype(),
            ProtoIntrinsics::Object => self.object_prototype(),
            ProtoIntrinsics::String => self.string_prototype(),
        }
    }

    /// %Array%
    pub fn array(&self) -> Function {
        self.function(IntrinsicObjectIndexes::ArrayConstructor)
    }

    /// %Array.prototype%
    pub fn array_prototype(&self) -> Object {
        self.object(IntrinsicObjectIndexes::ArrayPrototype)
    }

    /// %Boolean.prototype%
    pub fn boolean_prototype(&self) -> Object {
        self.object(IntrinsicObjectIndexes::BooleanPrototype)
    }

    /// %Boolean%
    pub fn boolean(&self) -> Function {
        self.function(IntrinsicObjectIndexes::BooleanConstructor)
    }

    /// %Error.prototype%
    pub fn error_prototype(&self) -> Object {
        self.object(IntrinsicObjectIndexes::ErrorPrototype)
    }

    /// %Function.prototype%
    pub fn function_prototype(&self) -> Object {
        self.object(IntrinsicObjectIndexes::FunctionPrototype)
    }

    /// %Number.prototype%
    pub fn number_prototype(&self) -> Object {
        self.object(IntrinsicObjectIndexes::NumberPrototype)
    }

    /// %Number%
    pub fn number(&self) -> Function {
        self.function(IntrinsicObjectIndexes::NumberConstructor)
    }

    /// %Object.prototype%
    pub fn object_prototype(&self) -> Object {
        self.object(IntrinsicObjectIndexes::ObjectPrototype)
    }

    /// %Object%
    pub fn object_constructor(&self) -> Function {
        self.function(IntrinsicObjectIndexes::ObjectConstructor)
    }

    /// %String.prototype%
    pub fn string_prototype(&self) -> Object {
        self.object(IntrinsicObjectIndexes::StringPrototype)
    }

    /// %String%
    pub fn string(&self) -> Function {
        self.function(IntrinsicObjectIndexes::StringConstructor)
    }
}
