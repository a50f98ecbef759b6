// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::ecmascript::{
    abstract_operations::type_conversion::to_number,
    builders::builtin_function_builder::BuiltinFunctionBuilder,
    builtins::{
        ArgumentsList, Behaviour, Builtin, BuiltinIntrinsicConstructor, PrimitiveObjectData,
        ordinary::ordinary_create_from_constructor,
    },
    execution::{Agent, ExceptionType, IntrinsicObjectIndexes, JsResult, ProtoIntrinsics},
    types::{BUILTIN_STRING_MEMORY, Function, Number, Object, ObjectData, String, Value},
};

pub(crate) struct NumberConstructor;

impl Builtin for NumberConstructor {
    const NAME: String = BUILTIN_STRING_MEMORY.Number;

    const LENGTH: u8 = 1;

    const BEHAVIOUR: Behaviour = Behaviour::Constructor(Self::behaviour);
}
impl BuiltinIntrinsicConstructor for NumberConstructor {
    const INDEX: IntrinsicObjectIndexes = IntrinsicObjectIndexes::NumberConstructor;
}

impl NumberConstructor {
    /// ### [21.1.1.1 Number ( value )](https://tc39.es/ecma262/#sec-number-constructor-number-value)
    fn behaviour(
        agent: &mut Agent,
        _this_value: Value,
        arguments: ArgumentsList,
        new_target: Option<Object>,
    ) -> JsResult<Value> {
        // 1. If value is present, then
        let n = if !arguments.is_empty() {
            // a. Let prim be ? ToNumeric(value).
            // b. If prim is a BigInt, let n be 𝔽(ℝ(prim)).
            // c. Otherwise, let n be prim.
            to_number(agent, arguments.get(0))?
        } else {
            // 2. Else,
            // a. Let n be +0𝔽.
            Number::pos_zero()
        };

        // 3. If NewTarget is undefined, return n.
        let Some(new_target) = new_target else {
            return Ok(n.into_value());
        };
        let Some(new_target) = Function::try_from_object(agent, new_target) else {
            return Err(
                agent.throw_exception(ExceptionType::TypeError, "NewTarget is not a constructor")
            );
        };

        // 4. Let O be ? OrdinaryCreateFromConstructor(NewTarget, "%Number.prototype%", « [[NumberData]] »).
        // 5. Set O.[[NumberData]] to n.
        let o = ordinary_create_from_constructor(
            agent,
            new_target,
            ProtoIntrinsics::Number,
            ObjectData::Primitive(PrimitiveObjectData::Number(n)),
        )?;

        // 6. Return O.
        Ok(o.into())
    }

    pub(crate) fn create_intrinsic(agent: &mut Agent) {
        let number_prototype = agent.current_realm().intrinsics().number_prototype();

        BuiltinFunctionBuilder::new_intrinsic_constructor::<NumberConstructor>(agent)
            .with_property_capacity(1)
            .with_prototype_property(number_prototype)
            .build();
    }
}
