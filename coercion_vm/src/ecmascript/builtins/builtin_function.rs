// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::{ops::Deref, rc::Rc};

use crate::ecmascript::{
    builders::builtin_function_builder::BuiltinFunctionBuilder,
    execution::{Agent, IntrinsicObjectIndexes, JsResult},
    types::{Function, Object, String, Value},
};

#[derive(Debug, Clone, Copy, Default)]
pub struct ArgumentsList<'a>(pub(crate) &'a [Value]);

impl<'a> ArgumentsList<'a> {
    pub fn new(arguments: &'a [Value]) -> Self {
        Self(arguments)
    }
}

impl<'a> Deref for ArgumentsList<'a> {
    type Target = &'a [Value];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl ArgumentsList<'_> {
    /// The argument at `index`, or undefined if it was not passed.
    #[inline]
    pub fn get(&self, index: usize) -> Value {
        *self.0.get(index).unwrap_or(&Value::Undefined)
    }
}

pub type RegularFn = fn(&mut Agent, Value, ArgumentsList<'_>) -> JsResult<Value>;
pub type ConstructorFn =
    fn(&mut Agent, Value, ArgumentsList<'_>, Option<Object>) -> JsResult<Value>;
/// Behaviour supplied by the embedder, such as conversion hooks standing in
/// for evaluated script functions.
pub type HostFn = Rc<dyn Fn(&mut Agent, Value, ArgumentsList<'_>) -> JsResult<Value>>;

#[derive(Clone)]
pub enum Behaviour {
    Regular(RegularFn),
    Constructor(ConstructorFn),
    Host(HostFn),
}

impl Behaviour {
    pub(crate) fn is_constructor(&self) -> bool {
        matches!(self, Behaviour::Constructor(_))
    }
}

impl std::fmt::Debug for Behaviour {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Behaviour::Regular(_) => f.write_str("Regular"),
            Behaviour::Constructor(_) => f.write_str("Constructor"),
            Behaviour::Host(_) => f.write_str("Host"),
        }
    }
}

pub trait Builtin {
    const NAME: String;
    const LENGTH: u8;
    const BEHAVIOUR: Behaviour;

    /// If the builtin function is created as a property then this controls the
    /// property's `[[Writable]]` value.
    const WRITABLE: bool = true;
    /// If the builtin function is created as a property then this controls the
    /// property's `[[Enumerable]]` value.
    const ENUMERABLE: bool = false;
    /// If the builtin function is created as a property then this controls the
    /// property's `[[Configurable]]` value.
    const CONFIGURABLE: bool = true;
}

pub(crate) trait BuiltinIntrinsicConstructor: Builtin {
    const INDEX: IntrinsicObjectIndexes;
}

/// Creates a function object whose \[\[Call\]\] runs the given closure. The
/// closure receives the this value and the arguments, like a builtin.
///
/// This is how embedders provide conversion hooks such as `valueOf` and
/// `toString` without a script evaluator.
pub fn create_host_function(
    agent: &mut Agent,
    name: &str,
    length: u8,
    behaviour: impl Fn(&mut Agent, Value, ArgumentsList<'_>) -> JsResult<Value> + 'static,
) -> Function {
    let name = String::from_str(agent, name);
    BuiltinFunctionBuilder::new_with_behaviour(
        agent,
        name,
        length,
        Behaviour::Host(Rc::new(behaviour)),
    )
    .build()
}
