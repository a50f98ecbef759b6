// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::ecmascript::abstract_operations::type_conversion::to_boolean;
use crate::ecmascript::builders::builtin_function_builder::BuiltinFunctionBuilder;
use crate::ecmascript::builtins::ordinary::ordinary_create_from_constructor;
use crate::ecmascript::builtins::ArgumentsList;
use crate::ecmascript::builtins::Behaviour;
use crate::ecmascript::builtins::Builtin;
use crate::ecmascript::builtins::BuiltinIntrinsicConstructor;
use crate::ecmascript::builtins::PrimitiveObjectData;
use crate::ecmascript::execution::Agent;
use crate::ecmascript::execution::ExceptionType;
use crate::ecmascript::execution::IntrinsicObjectIndexes;
use crate::ecmascript::execution::JsResult;
use crate::ecmascript::execution::ProtoIntrinsics;
use crate::ecmascript::types::BUILTIN_STRING_MEMORY;
use crate::ecmascript::types::Function;
use crate::ecmascript::types::Object;
use crate::ecmascript::types::ObjectData;
use crate::ecmascript::types::{String, Value};

pub(crate) struct BooleanConstructor;

impl Builtin for BooleanConstructor {
    const NAME: String = BUILTIN_STRING_MEMORY.Boolean;

    const LENGTH: u8 = 1;

    const BEHAVIOUR: Behaviour = Behaviour::Constructor(Self::behaviour);
}
impl BuiltinIntrinsicConstructor for BooleanConstructor {
    const INDEX: IntrinsicObjectIndexes = IntrinsicObjectIndexes::BooleanConstructor;
}

impl BooleanConstructor {
    /// ### [20.3.1.1 Boolean ( value )](https://tc39.es/ecma262/#sec-boolean-constructor-boolean-value)
    fn behaviour(
        agent: &mut Agent,
        _this_value: Value,
        arguments: ArgumentsList,
        new_target: Option<Object>,
    ) -> JsResult<Value> {
        let value = arguments.get(0);
        // 1. Let b be ToBoolean(value).
        let b = to_boolean(agent, value);
        // 2. If NewTarget is undefined, return b.
        let Some(new_target) = new_target else {
            return Ok(b.into());
        };
        let Some(new_target) = Function::try_from_object(agent, new_target) else {
            return Err(
                agent.throw_exception(ExceptionType::TypeError, "NewTarget is not a constructor")
            );
        };
        // 3. Let O be ? OrdinaryCreateFromConstructor(NewTarget, "%Boolean.prototype%", « [[BooleanData]] »).
        // 4. Set O.[[BooleanData]] to b.
        let o = ordinary_create_from_constructor(
            agent,
            new_target,
            ProtoIntrinsics::Boolean,
            ObjectData::Primitive(PrimitiveObjectData::Boolean(b)),
        )?;
        // 5. Return O.
        Ok(o.into())
    }

    pub(crate) fn create_intrinsic(agent: &mut Agent) {
        let boolean_prototype = agent.current_realm().intrinsics().boolean_prototype();

        BuiltinFunctionBuilder::new_intrinsic_constructor::<BooleanConstructor>(agent)
            .with_property_capacity(1)
            .with_prototype_property(boolean_prototype)
            .build();
    }
}
