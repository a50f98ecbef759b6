// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

mod language;
mod spec;

pub(crate) use language::number::MAX_SAFE_INTEGER;
pub use language::{
    BUILTIN_STRING_MEMORY, Function, InternalMethods, Number, Object, PreferredType,
    PropertyEntry, PropertyKey, PropertyLookup, String, Value,
};
pub(crate) use language::{
    BUILTIN_STRINGS_LIST, FunctionHeapData, ObjectData, ObjectHeapData, PropertyStorage,
    StringHeapData,
};
pub use spec::{PropertyDescriptor, read_descriptor_attributes};
