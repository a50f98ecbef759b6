// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::{InternalMethods, Object, ObjectData, Value};
use crate::{
    ecmascript::{
        builtins::{ArgumentsList, Behaviour},
        execution::{Agent, ExceptionType, JsResult},
    },
    heap::indexes::ObjectIndex,
};

/// Internal slots of a function object.
#[derive(Debug, Clone)]
pub struct FunctionHeapData {
    pub(crate) behaviour: Behaviour,
}

/// ### [6.1.7 The Object Type: function objects](https://tc39.es/ecma262/#function-object)
///
/// A handle to an object that has a \[\[Call\]\] internal method. Every
/// `Function` is also an [`Object`]; the conversion is free.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Function(pub(crate) ObjectIndex);

impl Function {
    /// Returns the object as a function if it has a \[\[Call\]\] internal
    /// method.
    pub fn try_from_object(agent: &Agent, object: Object) -> Option<Function> {
        match agent[object].data {
            ObjectData::Function(_) => Some(Function(object.0)),
            _ => None,
        }
    }

    pub fn try_from_value(agent: &Agent, value: Value) -> Option<Function> {
        match value {
            Value::Object(object) => Self::try_from_object(agent, object),
            _ => None,
        }
    }

    pub(crate) fn behaviour(self, agent: &Agent) -> Behaviour {
        match &agent[Object::from(self)].data {
            ObjectData::Function(data) => data.behaviour.clone(),
            _ => unreachable!("Function handle to a non-function object"),
        }
    }

    pub fn is_constructor(self, agent: &Agent) -> bool {
        self.behaviour(agent).is_constructor()
    }

    /// ### [10.3.1 \[\[Call\]\] ( thisArgument, argumentsList )](https://tc39.es/ecma262/#sec-built-in-function-objects-call-thisargument-argumentslist)
    ///
    /// Every call counts against the agent's call depth, including calls
    /// made by conversions to host hooks.
    pub(crate) fn internal_call(
        self,
        agent: &mut Agent,
        this_argument: Value,
        arguments_list: ArgumentsList,
    ) -> JsResult<Value> {
        let behaviour = self.behaviour(agent);
        agent.enter_call()?;
        let result = match behaviour {
            Behaviour::Regular(func) => func(agent, this_argument, arguments_list),
            Behaviour::Constructor(func) => func(agent, this_argument, arguments_list, None),
            Behaviour::Host(func) => func(agent, this_argument, arguments_list),
        };
        agent.exit_call();
        result
    }

    /// ### [10.3.2 \[\[Construct\]\] ( argumentsList, newTarget )](https://tc39.es/ecma262/#sec-built-in-function-objects-construct-argumentslist-newtarget)
    pub(crate) fn internal_construct(
        self,
        agent: &mut Agent,
        arguments_list: ArgumentsList,
        new_target: Function,
    ) -> JsResult<Object> {
        let Behaviour::Constructor(func) = self.behaviour(agent) else {
            return Err(agent.throw_exception(ExceptionType::TypeError, "Not a constructor"));
        };
        agent.enter_call()?;
        let result = func(
            agent,
            Value::Undefined,
            arguments_list,
            Some(new_target.into()),
        );
        agent.exit_call();
        match result? {
            Value::Object(object) => Ok(object),
            _ => Err(agent.throw_exception(
                ExceptionType::TypeError,
                "Constructor did not return an object",
            )),
        }
    }
}

impl From<Function> for Object {
    fn from(value: Function) -> Self {
        Object(value.0)
    }
}

impl InternalMethods for Function {}
