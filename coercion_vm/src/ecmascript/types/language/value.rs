// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::{Function, Number, Object, String};
use crate::ecmascript::{
    abstract_operations::type_conversion::{
        to_boolean, to_int32, to_number, to_object, to_primitive, to_string, to_uint16, to_uint32,
    },
    execution::{Agent, JsResult},
};

/// ### [6.1 ECMAScript Language Types](https://tc39.es/ecma262/#sec-ecmascript-language-types)
///
/// The `Integer` and `Number` variants are two storage widths of the single
/// Number language type. Construct numbers through [`Value::from_f64`] so
/// that integral doubles always land in `Integer`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Value {
    /// ### [6.1.1 The Undefined Type](https://tc39.es/ecma262/#sec-ecmascript-language-types-undefined-type)
    #[default]
    Undefined,

    /// ### [6.1.2 The Null Type](https://tc39.es/ecma262/#sec-ecmascript-language-types-null-type)
    Null,

    /// ### [6.1.3 The Boolean Type](https://tc39.es/ecma262/#sec-ecmascript-language-types-boolean-type)
    Boolean(bool),

    /// ### [6.1.4 The String Type](https://tc39.es/ecma262/#sec-ecmascript-language-types-string-type)
    String(String),

    /// ### [6.1.6.1 The Number Type](https://tc39.es/ecma262/#sec-ecmascript-language-types-number-type)
    ///
    /// 32-bit signed integer stored inline.
    Integer(i32),

    /// Any other number, including -0, NaN and the infinities.
    Number(f64),

    /// ### [6.1.7 The Object Type](https://tc39.es/ecma262/#sec-object-type)
    Object(Object),
}

/// Hint given to ToPrimitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreferredType {
    String = 1,
    Number,
}

impl Value {
    pub fn from_str(agent: &mut Agent, str: &str) -> Value {
        Value::String(String::from_str(agent, str))
    }

    pub fn from_string(agent: &mut Agent, string: std::string::String) -> Value {
        Value::String(String::from_string(agent, string))
    }

    pub fn from_f64(value: f64) -> Value {
        Number::from_f64(value).into_value()
    }

    pub fn nan() -> Self {
        Number::nan().into_value()
    }

    pub fn pos_inf() -> Self {
        Number::pos_inf().into_value()
    }

    pub fn neg_inf() -> Self {
        Number::neg_inf().into_value()
    }

    pub fn is_undefined(self) -> bool {
        matches!(self, Value::Undefined)
    }

    pub fn is_null(self) -> bool {
        matches!(self, Value::Null)
    }

    /// Undefined or Null.
    pub fn is_nullish(self) -> bool {
        matches!(self, Value::Undefined | Value::Null)
    }

    pub fn is_boolean(self) -> bool {
        matches!(self, Value::Boolean(_))
    }

    pub fn is_string(self) -> bool {
        matches!(self, Value::String(_))
    }

    pub fn is_number(self) -> bool {
        matches!(self, Value::Integer(_) | Value::Number(_))
    }

    pub fn is_object(self) -> bool {
        matches!(self, Value::Object(_))
    }

    pub fn is_nan(self) -> bool {
        matches!(self, Value::Number(n) if n.is_nan())
    }

    /// The numeric value when this is a Number, regardless of storage width.
    pub fn as_f64(self) -> Option<f64> {
        match self {
            Value::Integer(n) => Some(n as f64),
            Value::Number(n) => Some(n),
            _ => None,
        }
    }

    pub fn to_primitive(
        self,
        agent: &mut Agent,
        preferred_type: Option<PreferredType>,
    ) -> JsResult<Value> {
        to_primitive(agent, self, preferred_type)
    }

    pub fn to_boolean(self, agent: &Agent) -> bool {
        to_boolean(agent, self)
    }

    pub fn to_number(self, agent: &mut Agent) -> JsResult<Number> {
        to_number(agent, self)
    }

    pub fn to_int32(self, agent: &mut Agent) -> JsResult<i32> {
        to_int32(agent, self)
    }

    pub fn to_uint32(self, agent: &mut Agent) -> JsResult<u32> {
        to_uint32(agent, self)
    }

    pub fn to_uint16(self, agent: &mut Agent) -> JsResult<u16> {
        to_uint16(agent, self)
    }

    pub fn to_string(self, agent: &mut Agent) -> JsResult<String> {
        to_string(agent, self)
    }

    pub fn to_object(self, agent: &mut Agent) -> JsResult<Object> {
        to_object(agent, self)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Boolean(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Integer(value)
    }
}

impl From<u32> for Value {
    fn from(value: u32) -> Self {
        Value::from_f64(value as f64)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::from_f64(value)
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl From<Object> for Value {
    fn from(value: Object) -> Self {
        Value::Object(value)
    }
}

impl From<Function> for Value {
    fn from(value: Function) -> Self {
        Value::Object(value.into())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    /// `None` becomes undefined.
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Undefined, Into::into)
    }
}

impl TryFrom<Value> for Number {
    type Error = ();

    fn try_from(value: Value) -> Result<Self, ()> {
        match value {
            Value::Integer(n) => Ok(Number::Integer(n)),
            Value::Number(n) => Ok(Number::Number(n)),
            _ => Err(()),
        }
    }
}

impl TryFrom<Value> for String {
    type Error = ();

    fn try_from(value: Value) -> Result<Self, ()> {
        match value {
            Value::String(s) => Ok(s),
            _ => Err(()),
        }
    }
}

impl TryFrom<Value> for bool {
    type Error = ();

    fn try_from(value: Value) -> Result<Self, ()> {
        match value {
            Value::Boolean(b) => Ok(b),
            _ => Err(()),
        }
    }
}
