// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::ecmascript::{
    abstract_operations::{
        operations_on_objects::create_array_from_list,
        testing_and_comparison::require_object_coercible,
        type_conversion::{to_string, to_uint32},
    },
    builders::ordinary_object_builder::OrdinaryObjectBuilder,
    builtins::{ArgumentsList, Behaviour, Builtin, PrimitiveObjectData},
    execution::{Agent, ExceptionType, JsResult},
    types::{BUILTIN_STRING_MEMORY, ObjectData, PropertyEntry, String, Value},
};

pub(crate) struct StringPrototype;

struct StringPrototypeSplit;
impl Builtin for StringPrototypeSplit {
    const NAME: String = BUILTIN_STRING_MEMORY.split;

    const LENGTH: u8 = 2;

    const BEHAVIOUR: Behaviour = Behaviour::Regular(StringPrototype::split);
}

struct StringPrototypeToString;
impl Builtin for StringPrototypeToString {
    const NAME: String = BUILTIN_STRING_MEMORY.toString;

    const LENGTH: u8 = 0;

    const BEHAVIOUR: Behaviour = Behaviour::Regular(StringPrototype::to_string);
}

struct StringPrototypeValueOf;
impl Builtin for StringPrototypeValueOf {
    const NAME: String = BUILTIN_STRING_MEMORY.valueOf;

    const LENGTH: u8 = 0;

    const BEHAVIOUR: Behaviour = Behaviour::Regular(StringPrototype::value_of);
}

impl StringPrototype {
    /// ### [22.1.3.23 String.prototype.split ( separator, limit )](https://tc39.es/ecma262/#sec-string.prototype.split)
    ///
    /// Only string separators are supported; there is no @@split dispatch.
    fn split(agent: &mut Agent, this_value: Value, arguments: ArgumentsList) -> JsResult<Value> {
        let separator = arguments.get(0);
        let limit = arguments.get(1);

        // 1. Let O be ? RequireObjectCoercible(this value).
        let o = require_object_coercible(agent, this_value)?;

        // 3. Let S be ? ToString(O).
        let s = to_string(agent, o)?;

        // 4. If limit is undefined, let lim be 2**32 - 1; else let lim be ℝ(? ToUint32(limit)).
        let lim = if limit.is_undefined() {
            u32::MAX
        } else {
            to_uint32(agent, limit)?
        };

        // 5. Let R be ? ToString(separator).
        let r = to_string(agent, separator)?;

        // 6. If lim = 0, then
        if lim == 0 {
            // a. Return CreateArrayFromList(« »).
            return Ok(create_array_from_list(agent, &[]).into());
        }

        // 7. If separator is undefined, then
        if separator.is_undefined() {
            // a. Return CreateArrayFromList(« S »).
            return Ok(create_array_from_list(agent, &[s.into()]).into());
        }

        let s_units = s.to_utf16(agent);
        let r_units = r.to_utf16(agent);

        // 8. Let separatorLength be the length of R.
        // 9. If separatorLength = 0, then
        if r_units.is_empty() {
            // a. Let head be the substring of S from 0 to lim.
            // b. Let codeUnits be a List consisting of the sequence of code units that are the elements of head.
            let head_len = s_units.len().min(lim as usize);
            let code_units: Vec<Value> = s_units[..head_len]
                .iter()
                .map(|code_unit| String::from_utf16_lossy(agent, &[*code_unit]).into())
                .collect();
            // c. Return CreateArrayFromList(codeUnits).
            return Ok(create_array_from_list(agent, &code_units).into());
        }

        // 10. If S is the empty String, return CreateArrayFromList(« S »).
        if s_units.is_empty() {
            return Ok(create_array_from_list(agent, &[s.into()]).into());
        }

        // 11. Let substrings be a new empty List.
        let mut substrings: Vec<Value> = Vec::new();
        // 12. Let i be 0.
        let mut i = 0;
        // 13. Let j be StringIndexOf(S, R, 0).
        let mut j = string_index_of(&s_units, &r_units, 0);
        // 14. Repeat, while j is not not-found,
        while let Some(found) = j {
            // a. Let T be the substring of S from i to j.
            let t = String::from_utf16_lossy(agent, &s_units[i..found]);
            // b. Append T to substrings.
            substrings.push(t.into());
            // c. If the number of elements in substrings is lim, return CreateArrayFromList(substrings).
            if substrings.len() == lim as usize {
                return Ok(create_array_from_list(agent, &substrings).into());
            }
            // d. Set i to j + separatorLength.
            i = found + r_units.len();
            // e. Set j to StringIndexOf(S, R, i).
            j = string_index_of(&s_units, &r_units, i);
        }
        // 15. Let T be the substring of S from i.
        let t = String::from_utf16_lossy(agent, &s_units[i..]);
        // 16. Append T to substrings.
        substrings.push(t.into());
        // 17. Return CreateArrayFromList(substrings).
        Ok(create_array_from_list(agent, &substrings).into())
    }

    /// ### [22.1.3.28 String.prototype.toString ( )](https://tc39.es/ecma262/#sec-string.prototype.tostring)
    fn to_string(agent: &mut Agent, this_value: Value, _: ArgumentsList) -> JsResult<Value> {
        // 1. Return ? ThisStringValue(this value).
        this_string_value(agent, this_value).map(Value::String)
    }

    /// ### [22.1.3.35 String.prototype.valueOf ( )](https://tc39.es/ecma262/#sec-string.prototype.valueof)
    fn value_of(agent: &mut Agent, this_value: Value, _: ArgumentsList) -> JsResult<Value> {
        // 1. Return ? ThisStringValue(this value).
        this_string_value(agent, this_value).map(Value::String)
    }

    pub(crate) fn create_intrinsic(agent: &mut Agent) {
        let intrinsics = agent.current_realm().intrinsics();
        let object_prototype = intrinsics.object_prototype();
        let this = intrinsics.string_prototype();
        let string_constructor = intrinsics.string();

        // The String prototype object is a String exotic object whose
        // [[StringData]] is the empty String.
        OrdinaryObjectBuilder::new_intrinsic_object(agent, this)
            .with_property_capacity(5)
            .with_prototype(object_prototype)
            .with_data(ObjectData::Primitive(PrimitiveObjectData::String(
                String::EMPTY_STRING,
            )))
            .with_property(
                BUILTIN_STRING_MEMORY.length.into(),
                PropertyEntry::Data {
                    value: Value::Integer(0),
                    writable: false,
                    enumerable: false,
                    configurable: false,
                },
            )
            .with_constructor_property(string_constructor)
            .with_builtin_function_property::<StringPrototypeSplit>()
            .with_builtin_function_property::<StringPrototypeToString>()
            .with_builtin_function_property::<StringPrototypeValueOf>()
            .build();
    }
}

/// ### [6.1.4.1 StringIndexOf ( string, searchValue, fromIndex )](https://tc39.es/ecma262/#sec-stringindexof)
///
/// `search_value` must not be empty.
fn string_index_of(string: &[u16], search_value: &[u16], from_index: usize) -> Option<usize> {
    debug_assert!(!search_value.is_empty());
    string
        .get(from_index..)?
        .windows(search_value.len())
        .position(|window| window == search_value)
        .map(|position| position + from_index)
}

/// ### [22.1.3.35.1 ThisStringValue ( value )](https://tc39.es/ecma262/#sec-thisstringvalue)
fn this_string_value(agent: &mut Agent, value: Value) -> JsResult<String> {
    match value {
        // 1. If value is a String, return value.
        Value::String(s) => Ok(s),
        // 2. If value is an Object and value has a [[StringData]] internal slot, then
        //    a. Let s be value.[[StringData]].
        //    b. Assert: s is a String.
        //    c. Return s.
        Value::Object(object) => match object.primitive_data(agent) {
            Some(PrimitiveObjectData::String(s)) => Ok(s),
            _ => Err(agent.throw_exception(ExceptionType::TypeError, "Not a string value")),
        },
        // 3. Throw a TypeError exception.
        _ => Err(agent.throw_exception(ExceptionType::TypeError, "Not a string value")),
    }
}

#[cfg(test)]
mod tests {
    use super::string_index_of;

    #[test]
    fn index_of_finds_code_unit_sequences() {
        let haystack: Vec<u16> = "a,b,,c".encode_utf16().collect();
        let comma: Vec<u16> = ",".encode_utf16().collect();
        assert_eq!(string_index_of(&haystack, &comma, 0), Some(1));
        assert_eq!(string_index_of(&haystack, &comma, 2), Some(3));
        assert_eq!(string_index_of(&haystack, &comma, 4), Some(4));
        assert_eq!(string_index_of(&haystack, &comma, 5), None);
        assert_eq!(string_index_of(&haystack, &comma, 10), None);
    }
}
