// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::ecmascript::{
    builders::builtin_function_builder::BuiltinFunctionBuilder,
    builtins::{ArgumentsList, Behaviour, Builtin, BuiltinIntrinsicConstructor},
    execution::{Agent, IntrinsicObjectIndexes, JsResult},
    types::{String, Value},
};

pub(crate) struct FunctionPrototype;
impl Builtin for FunctionPrototype {
    const NAME: String = String::EMPTY_STRING;

    const LENGTH: u8 = 0;

    const BEHAVIOUR: Behaviour = Behaviour::Regular(Self::behaviour);
}
impl BuiltinIntrinsicConstructor for FunctionPrototype {
    const INDEX: IntrinsicObjectIndexes = IntrinsicObjectIndexes::FunctionPrototype;
}

impl FunctionPrototype {
    /// ### [20.2.3 Properties of the Function Prototype Object](https://tc39.es/ecma262/#sec-properties-of-the-function-prototype-object)
    ///
    /// The Function prototype object is itself a built-in function that
    /// accepts any arguments and returns undefined when invoked.
    fn behaviour(_: &mut Agent, _: Value, _: ArgumentsList) -> JsResult<Value> {
        Ok(Value::Undefined)
    }

    pub(crate) fn create_intrinsic(agent: &mut Agent) {
        let object_prototype = agent.current_realm().intrinsics().object_prototype();

        BuiltinFunctionBuilder::new_intrinsic_constructor::<FunctionPrototype>(agent)
            .with_prototype(object_prototype)
            .build();
    }
}
