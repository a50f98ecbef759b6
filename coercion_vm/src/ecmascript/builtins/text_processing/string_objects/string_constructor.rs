// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::ecmascript::{
    abstract_operations::type_conversion::to_string,
    builders::builtin_function_builder::BuiltinFunctionBuilder,
    builtins::{
        ArgumentsList, Behaviour, Builtin, BuiltinIntrinsicConstructor, PrimitiveObject,
        PrimitiveObjectData, ordinary::get_prototype_from_constructor,
    },
    execution::{Agent, ExceptionType, IntrinsicObjectIndexes, JsResult, ProtoIntrinsics},
    types::{BUILTIN_STRING_MEMORY, Function, Object, String, Value},
};

pub(crate) struct StringConstructor;

impl Builtin for StringConstructor {
    const NAME: String = BUILTIN_STRING_MEMORY.String;

    const LENGTH: u8 = 1;

    const BEHAVIOUR: Behaviour = Behaviour::Constructor(Self::behaviour);
}
impl BuiltinIntrinsicConstructor for StringConstructor {
    const INDEX: IntrinsicObjectIndexes = IntrinsicObjectIndexes::StringConstructor;
}

impl StringConstructor {
    /// ### [22.1.1.1 String ( value )](https://tc39.es/ecma262/#sec-string-constructor-string-value)
    fn behaviour(
        agent: &mut Agent,
        _this_value: Value,
        arguments: ArgumentsList,
        new_target: Option<Object>,
    ) -> JsResult<Value> {
        // 1. If value is not present, then
        let s = if arguments.is_empty() {
            // a. Let s be the empty String.
            String::EMPTY_STRING
        } else {
            // 2. Else,
            // b. Let s be ? ToString(value).
            to_string(agent, arguments.get(0))?
        };
        // 3. If NewTarget is undefined, return s.
        let Some(new_target) = new_target else {
            return Ok(s.into());
        };
        let Some(new_target) = Function::try_from_object(agent, new_target) else {
            return Err(
                agent.throw_exception(ExceptionType::TypeError, "NewTarget is not a constructor")
            );
        };
        // 4. Return StringCreate(s, ? GetPrototypeFromConstructor(NewTarget, "%String.prototype%")).
        let prototype = get_prototype_from_constructor(agent, new_target, ProtoIntrinsics::String)?;
        Ok(
            PrimitiveObject::create_with_prototype(agent, prototype, PrimitiveObjectData::String(s))
                .into(),
        )
    }

    pub(crate) fn create_intrinsic(agent: &mut Agent) {
        let string_prototype = agent.current_realm().intrinsics().string_prototype();

        BuiltinFunctionBuilder::new_intrinsic_constructor::<StringConstructor>(agent)
            .with_property_capacity(1)
            .with_prototype_property(string_prototype)
            .build();
    }
}
