// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! ### [20.5 Error Objects](https://tc39.es/ecma262/#sec-error-objects)
//!
//! Only the parts needed to report TypeError and RangeError completions: the
//! \[\[ErrorData\]\] slot and `%Error.prototype%`.

use crate::ecmascript::{
    abstract_operations::{operations_on_objects::get, type_conversion::to_string},
    builders::ordinary_object_builder::OrdinaryObjectBuilder,
    builtins::{ArgumentsList, Behaviour, Builtin},
    execution::{Agent, ExceptionType, JsResult},
    types::{BUILTIN_STRING_MEMORY, Object, PropertyEntry, String, Value},
};

/// The \[\[ErrorData\]\] internal slot.
#[derive(Debug, Clone, Copy)]
pub struct ErrorHeapData {
    pub(crate) kind: ExceptionType,
    pub(crate) message: Option<String>,
}

impl ErrorHeapData {
    pub(crate) fn new(kind: ExceptionType, message: Option<String>) -> Self {
        Self { kind, message }
    }
}

pub(crate) struct ErrorPrototype;

struct ErrorPrototypeToString;
impl Builtin for ErrorPrototypeToString {
    const NAME: String = BUILTIN_STRING_MEMORY.toString;
    const LENGTH: u8 = 0;
    const BEHAVIOUR: Behaviour = Behaviour::Regular(ErrorPrototype::to_string);
}

impl ErrorPrototype {
    /// ### [20.5.3.4 Error.prototype.toString ( )](https://tc39.es/ecma262/#sec-error.prototype.tostring)
    fn to_string(agent: &mut Agent, this_value: Value, _: ArgumentsList) -> JsResult<Value> {
        // 1. Let O be the this value.
        // 2. If O is not an Object, throw a TypeError exception.
        let Ok(o) = Object::try_from(this_value) else {
            return Err(agent.throw_exception(ExceptionType::TypeError, "'this' is not an object"));
        };
        // 3. Let name be ? Get(O, "name").
        let name = get(agent, o, BUILTIN_STRING_MEMORY.name.into())?;
        // 4. If name is undefined, set name to "Error"; otherwise set name to ? ToString(name).
        let name = if name.is_undefined() {
            BUILTIN_STRING_MEMORY.Error
        } else {
            to_string(agent, name)?
        };
        // 5. Let msg be ? Get(O, "message").
        let msg = get(agent, o, BUILTIN_STRING_MEMORY.message.into())?;
        // 6. If msg is undefined, set msg to the empty String; otherwise set msg to ? ToString(msg).
        let msg = if msg.is_undefined() {
            String::EMPTY_STRING
        } else {
            to_string(agent, msg)?
        };
        if name.is_empty(agent) {
            // 7. If name is the empty String, return msg.
            Ok(msg.into())
        } else if msg.is_empty(agent) {
            // 8. If msg is the empty String, return name.
            Ok(name.into())
        } else {
            // 9. Return the string-concatenation of name, ": ", and msg.
            let result = format!("{}: {}", name.as_str(agent), msg.as_str(agent));
            Ok(String::from_string(agent, result).into())
        }
    }

    pub(crate) fn create_intrinsic(agent: &mut Agent) {
        let intrinsics = agent.current_realm().intrinsics();
        let object_prototype = intrinsics.object_prototype();
        let this = intrinsics.error_prototype();

        OrdinaryObjectBuilder::new_intrinsic_object(agent, this)
            .with_property_capacity(3)
            .with_prototype(object_prototype)
            .with_property(
                BUILTIN_STRING_MEMORY.message.into(),
                PropertyEntry::Data {
                    value: String::EMPTY_STRING.into(),
                    writable: true,
                    enumerable: false,
                    configurable: true,
                },
            )
            .with_property(
                BUILTIN_STRING_MEMORY.name.into(),
                PropertyEntry::Data {
                    value: BUILTIN_STRING_MEMORY.Error.into(),
                    writable: true,
                    enumerable: false,
                    configurable: true,
                },
            )
            .with_builtin_function_property::<ErrorPrototypeToString>()
            .build();
    }
}
