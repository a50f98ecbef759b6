// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! ### [9.7 Agents](https://tc39.es/ecma262/#sec-agents)

use super::Realm;
use crate::{
    ecmascript::{
        abstract_operations::type_conversion::to_string,
        builtins::error::ErrorHeapData,
        types::{BUILTIN_STRING_MEMORY, Object, ObjectData, ObjectHeapData, PropertyEntry, String, Value},
    },
    heap::{CreateHeapData, Heap},
};

#[derive(Debug, Clone, Copy)]
pub struct Options {
    /// Number of nested function calls allowed before a RangeError is
    /// thrown. Conversion hooks count as calls.
    pub max_call_depth: u32,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            max_call_depth: 512,
        }
    }
}

pub type JsResult<T> = std::result::Result<T, JsError>;

/// A thrown ECMAScript value.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct JsError(pub(crate) Value);

impl JsError {
    /// Wraps any value as a throw completion. Hosts use this to throw values
    /// that are not engine errors.
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    pub fn value(self) -> Value {
        self.0
    }

    /// Describes the error as "Kind: message" for engine errors and as the
    /// ToString of the value otherwise.
    pub fn to_string(self, agent: &mut Agent) -> String {
        if let Value::Object(object) = self.0 {
            if let ObjectData::Error(ErrorHeapData { kind, message }) = agent[object].data {
                let text = match message {
                    Some(message) => format!("{}: {}", kind.name(), message.as_str(agent)),
                    None => kind.name().to_owned(),
                };
                return String::from_string(agent, text);
            }
        }
        match to_string(agent, self.0) {
            Ok(string) => string,
            Err(_) => String::from_str(agent, "Uncaught exception"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExceptionType {
    Error,
    /// Also used for resource exhaustion, such as exceeding the call depth.
    RangeError,
    TypeError,
}

impl ExceptionType {
    pub fn name(self) -> &'static str {
        match self {
            ExceptionType::Error => "Error",
            ExceptionType::RangeError => "RangeError",
            ExceptionType::TypeError => "TypeError",
        }
    }
}

/// ### [9.7 Agents](https://tc39.es/ecma262/#sec-agents)
///
/// The agent owns the heap and the realm. Every operation that may allocate,
/// read objects, or call into functions takes it as its first argument.
#[derive(Debug)]
pub struct Agent {
    pub(crate) heap: Heap,
    pub(crate) options: Options,
    realm: Realm,
    /// Number of function calls currently on the stack.
    pub(crate) call_depth: u32,
}

impl Agent {
    pub fn new(options: Options) -> Self {
        let mut agent = Self {
            heap: Heap::new(),
            options,
            realm: Realm::new(),
            call_depth: 0,
        };
        Realm::create_intrinsics(&mut agent);
        agent
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    pub fn current_realm(&self) -> &Realm {
        &self.realm
    }

    /// Creates an Error object of the given kind and returns it as a throw
    /// completion.
    pub fn throw_exception(&mut self, kind: ExceptionType, message: &str) -> JsError {
        let message = String::from_str(self, message);
        let error_prototype = self.current_realm().intrinsics().error_prototype();
        let mut data = ObjectHeapData::with_data(
            Some(error_prototype),
            ObjectData::Error(ErrorHeapData::new(kind, Some(message))),
        );
        data.properties.set(
            BUILTIN_STRING_MEMORY.message.into(),
            PropertyEntry::Data {
                value: message.into(),
                writable: true,
                enumerable: false,
                configurable: true,
            },
        );
        let error: Object = self.heap.create(data);
        JsError(error.into())
    }

    /// The kind of an engine-created error, or `None` if some other value
    /// was thrown.
    pub fn exception_type(&self, error: JsError) -> Option<ExceptionType> {
        match error.0 {
            Value::Object(object) => match &self[object].data {
                ObjectData::Error(data) => Some(data.kind),
                _ => None,
            },
            _ => None,
        }
    }

    /// Accounts for one more function call on the stack, failing with a
    /// RangeError once the configured depth is reached.
    pub(crate) fn enter_call(&mut self) -> JsResult<()> {
        if self.call_depth >= self.options.max_call_depth {
            log::debug!(
                "Call depth limit of {} reached",
                self.options.max_call_depth
            );
            return Err(self.throw_exception(
                ExceptionType::RangeError,
                "Maximum call stack size exceeded",
            ));
        }
        self.call_depth += 1;
        Ok(())
    }

    pub(crate) fn exit_call(&mut self) {
        debug_assert!(self.call_depth > 0);
        self.call_depth = self.call_depth.saturating_sub(1);
    }
}

impl Default for Agent {
    fn default() -> Self {
        Self::new(Options::default())
    }
}
