// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

mod intrinsics;

pub(crate) use intrinsics::{INTRINSIC_OBJECT_COUNT, IntrinsicObjectIndexes, ProtoIntrinsics};
pub use intrinsics::Intrinsics;

use super::Agent;
use crate::ecmascript::builtins::{
    array::{ArrayConstructor, ArrayPrototype},
    error::ErrorPrototype,
    fundamental_objects::{
        boolean_objects::{
            boolean_constructor::BooleanConstructor, boolean_prototype::BooleanPrototype,
        },
        function_objects::function_prototype::FunctionPrototype,
        object_objects::{object_constructor::ObjectConstructor, object_prototype::ObjectPrototype},
    },
    numbers_and_dates::number_objects::{
        number_constructor::NumberConstructor, number_prototype::NumberPrototype,
    },
    text_processing::string_objects::{
        string_constructor::StringConstructor, string_prototype::StringPrototype,
    },
};

/// ### [9.3 Realms](https://tc39.es/ecma262/#sec-code-realms)
///
/// An agent has exactly one realm. Its intrinsic objects live at fixed heap
/// indexes reserved when the heap is created.
#[derive(Debug)]
pub struct Realm {
    intrinsics: Intrinsics,
}

impl Realm {
    pub(crate) fn new() -> Self {
        Self {
            intrinsics: Intrinsics::default(),
        }
    }

    pub fn intrinsics(&self) -> &Intrinsics {
        &self.intrinsics
    }

    /// ### [9.3.2 CreateIntrinsics ( realmRec )](https://tc39.es/ecma262/#sec-createintrinsics)
    ///
    /// Populates the reserved intrinsic object slots. Prototypes come first so
    /// that constructors and methods can link to them.
    pub(crate) fn create_intrinsics(agent: &mut Agent) {
        ObjectPrototype::create_intrinsic(agent);
        FunctionPrototype::create_intrinsic(agent);
        ErrorPrototype::create_intrinsic(agent);
        ArrayPrototype::create_intrinsic(agent);
        BooleanPrototype::create_intrinsic(agent);
        NumberPrototype::create_intrinsic(agent);
        StringPrototype::create_intrinsic(agent);

        ObjectConstructor::create_intrinsic(agent);
        ArrayConstructor::create_intrinsic(agent);
        BooleanConstructor::create_intrinsic(agent);
        NumberConstructor::create_intrinsic(agent);
        StringConstructor::create_intrinsic(agent);
    }
}
