// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The builtin objects this engine layer ships: the primitive wrapper
//! constructors and prototypes, and the parts of `Object` and `Array` needed
//! to observe conversions and property descriptors.

pub(crate) mod array;
pub(crate) mod builtin_function;
pub(crate) mod error;
pub(crate) mod fundamental_objects;
pub(crate) mod numbers_and_dates;
pub(crate) mod ordinary;
pub(crate) mod primitive_objects;
pub(crate) mod text_processing;

pub use builtin_function::{
    ArgumentsList, Behaviour, Builtin, ConstructorFn, HostFn, RegularFn, create_host_function,
};
pub(crate) use builtin_function::BuiltinIntrinsicConstructor;
pub use primitive_objects::{PrimitiveObject, PrimitiveObjectData};
