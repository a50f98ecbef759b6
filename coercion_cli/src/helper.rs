// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use coercion_vm::ecmascript::{
    abstract_operations::{
        operations_on_objects::construct, type_conversion::string_to_number,
    },
    execution::{Agent, JsError, JsResult},
    types::Value,
};

/// Parse a command line literal into a value.
///
/// Accepts `undefined`, `null`, `true`, `false`, numeric literals (including
/// `NaN` and `Infinity`), single or double quoted strings, and `{}` for a
/// fresh ordinary object.
pub fn parse_literal(agent: &mut Agent, literal: &str) -> Result<Value, String> {
    let value = match literal {
        "undefined" => Value::Undefined,
        "null" => Value::Null,
        "true" => Value::Boolean(true),
        "false" => Value::Boolean(false),
        "NaN" => Value::nan(),
        "{}" => {
            let object_constructor = agent.current_realm().intrinsics().object_constructor();
            let object = construct(agent, object_constructor, None, None)
                .map_err(|err| describe_error(agent, err))?;
            Value::Object(object)
        }
        _ => {
            if let Some(text) = unquote(literal) {
                return Ok(Value::from_str(agent, text));
            }
            let number = string_to_number(literal);
            if number.is_nan() || literal.trim().is_empty() {
                return Err(format!("Unrecognized literal: {literal}"));
            }
            Value::from_f64(number)
        }
    };
    Ok(value)
}

fn unquote(literal: &str) -> Option<&str> {
    ['"', '\'']
        .into_iter()
        .find_map(|quote| literal.strip_prefix(quote)?.strip_suffix(quote))
}

/// Render a value for display: strings are quoted, everything else is shown
/// by its ToString.
pub fn display_value(agent: &mut Agent, value: Value) -> String {
    match value {
        Value::String(string) => format!("{:?}", string.as_str(agent)),
        Value::Object(_) => match value.to_string(agent) {
            Ok(string) => format!("object {}", string.as_str(agent)),
            Err(err) => describe_error(agent, err),
        },
        _ => match value.to_string(agent) {
            Ok(string) => string.as_str(agent).to_owned(),
            Err(err) => describe_error(agent, err),
        },
    }
}

/// Render the outcome of an operation.
pub fn display_result<T>(
    agent: &mut Agent,
    result: JsResult<T>,
    show: impl FnOnce(&mut Agent, T) -> String,
) -> String {
    match result {
        Ok(value) => show(agent, value),
        Err(err) => format!("throws {}", describe_error(agent, err)),
    }
}

pub fn describe_error(agent: &mut Agent, error: JsError) -> String {
    let message = error.to_string(agent);
    message.as_str(agent).to_owned()
}
