// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::ops::Index;

use crate::{
    ecmascript::execution::Agent,
    heap::{CreateHeapData, Heap, indexes::StringIndex},
};

/// Backing storage of a string value. Contents are UTF-8; UTF-16 views are
/// computed on demand since only a few operations index by code unit.
#[derive(Debug, Clone)]
pub struct StringHeapData {
    pub(crate) data: Box<str>,
    utf16_len: usize,
}

impl StringHeapData {
    pub(crate) fn from_str(str: &str) -> Self {
        Self {
            data: str.into(),
            utf16_len: str.encode_utf16().count(),
        }
    }

    pub(crate) fn from_string(string: std::string::String) -> Self {
        let utf16_len = string.encode_utf16().count();
        Self {
            data: string.into_boxed_str(),
            utf16_len,
        }
    }
}

/// ### [6.1.4 The String Type](https://tc39.es/ecma262/#sec-ecmascript-language-types-string-type)
///
/// Strings are interned: two handles are equal exactly when their contents
/// are equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct String(pub(crate) StringIndex);

impl String {
    pub const EMPTY_STRING: String = BUILTIN_STRING_MEMORY.empty;

    pub fn from_str(agent: &mut Agent, str: &str) -> String {
        agent.heap.create(str)
    }

    pub fn from_string(agent: &mut Agent, string: std::string::String) -> String {
        agent.heap.create(string)
    }

    /// Creates a string from UTF-16 code units. Unpaired surrogates cannot be
    /// stored and are replaced with U+FFFD.
    pub fn from_utf16_lossy(agent: &mut Agent, code_units: &[u16]) -> String {
        agent
            .heap
            .create(std::string::String::from_utf16_lossy(code_units))
    }

    pub fn as_str(self, agent: &Agent) -> &str {
        &agent[self].data
    }

    pub fn is_empty(self, agent: &Agent) -> bool {
        agent[self].data.is_empty()
    }

    /// Length in UTF-16 code units, which is what the language observes.
    pub fn utf16_len(self, agent: &Agent) -> usize {
        agent[self].utf16_len
    }

    pub fn to_utf16(self, agent: &Agent) -> Vec<u16> {
        agent[self].data.encode_utf16().collect()
    }

    pub fn utf16_code_unit_at(self, agent: &Agent, index: usize) -> Option<u16> {
        agent[self].data.encode_utf16().nth(index)
    }
}

impl Index<String> for Agent {
    type Output = StringHeapData;

    fn index(&self, index: String) -> &Self::Output {
        Heap::get(&self.heap.strings, index.0)
    }
}

macro_rules! builtin_strings {
    ($($field:ident: $text:literal,)*) => {
        #[allow(non_camel_case_types)]
        #[repr(u32)]
        enum BuiltinStringIndexes {
            $($field,)*
        }

        /// Strings interned into every heap at fixed indexes.
        #[allow(non_snake_case)]
        pub struct BuiltinStrings {
            $(pub $field: String,)*
        }

        pub(crate) const BUILTIN_STRINGS_LIST: &[&str] = &[$($text,)*];

        pub const BUILTIN_STRING_MEMORY: BuiltinStrings = BuiltinStrings {
            $($field: String(StringIndex::from_u32_index(
                BuiltinStringIndexes::$field as u32,
            )),)*
        };
    };
}

builtin_strings! {
    empty: "",
    undefined: "undefined",
    null: "null",
    r#true: "true",
    r#false: "false",
    NaN: "NaN",
    Infinity: "Infinity",
    NegativeInfinity: "-Infinity",
    zero: "0",
    valueOf: "valueOf",
    toString: "toString",
    value: "value",
    writable: "writable",
    get: "get",
    set: "set",
    enumerable: "enumerable",
    configurable: "configurable",
    length: "length",
    name: "name",
    prototype: "prototype",
    constructor: "constructor",
    message: "message",
    hasOwnProperty: "hasOwnProperty",
    defineProperty: "defineProperty",
    defineProperties: "defineProperties",
    getOwnPropertyDescriptor: "getOwnPropertyDescriptor",
    getPrototypeOf: "getPrototypeOf",
    split: "split",
    Array: "Array",
    Boolean: "Boolean",
    Error: "Error",
    Function: "Function",
    Number: "Number",
    Object: "Object",
    String: "String",
}
