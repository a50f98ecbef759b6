// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! ### [6.1 ECMAScript Language Types](https://tc39.es/ecma262/#sec-ecmascript-language-types)

mod function;
pub(crate) mod number;
mod object;
mod string;
mod value;

pub use function::Function;
pub(crate) use function::FunctionHeapData;
pub use number::Number;
pub use object::{InternalMethods, Object, PropertyEntry, PropertyKey, PropertyLookup};
pub(crate) use object::{ObjectData, ObjectHeapData, PropertyStorage};
pub use string::{BUILTIN_STRING_MEMORY, String};
pub(crate) use string::{BUILTIN_STRINGS_LIST, StringHeapData};
pub use value::{PreferredType, Value};
