// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::ecmascript::{
    execution::Agent,
    types::{String, Value},
};

/// # [Property key](https://tc39.es/ecma262/#property-key)
///
/// The properties of an object are uniquely identified using property keys.
/// Without Symbols a property key is always a String; strings that are array
/// indexes (canonical decimal integers from 0 to 2^32 - 2) are stored as
/// `Integer` so that equal keys always compare equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PropertyKey {
    Integer(u32),
    String(String),
}

impl PropertyKey {
    pub fn from_str(agent: &mut Agent, str: &str) -> Self {
        parse_array_index(str)
            .map(PropertyKey::Integer)
            .unwrap_or_else(|| String::from_str(agent, str).into())
    }

    pub fn from_string(agent: &mut Agent, string: std::string::String) -> Self {
        parse_array_index(&string)
            .map(PropertyKey::Integer)
            .unwrap_or_else(|| String::from_string(agent, string).into())
    }

    /// Canonicalizing conversion from an engine string.
    pub fn from_js_string(agent: &Agent, string: String) -> Self {
        parse_array_index(string.as_str(agent))
            .map(PropertyKey::Integer)
            .unwrap_or(PropertyKey::String(string))
    }

    pub fn is_array_index(self) -> bool {
        matches!(self, PropertyKey::Integer(_))
    }

    /// Convert a PropertyKey into a String value, turning integer keys back
    /// into their decimal form.
    pub fn into_string(self, agent: &mut Agent) -> String {
        match self {
            PropertyKey::Integer(index) => String::from_string(agent, index.to_string()),
            PropertyKey::String(string) => string,
        }
    }

    pub fn into_value(self, agent: &mut Agent) -> Value {
        self.into_string(agent).into()
    }

    /// Human readable form for error messages and logging.
    pub(crate) fn display(self, agent: &Agent) -> std::string::String {
        match self {
            PropertyKey::Integer(index) => index.to_string(),
            PropertyKey::String(string) => string.as_str(agent).to_owned(),
        }
    }
}

impl From<u32> for PropertyKey {
    fn from(value: u32) -> Self {
        debug_assert!(value != u32::MAX);
        PropertyKey::Integer(value)
    }
}

/// Wraps an engine string without canonicalizing it. Only use with strings
/// known not to be array indexes, such as builtin property names; use
/// [`PropertyKey::from_js_string`] otherwise.
impl From<String> for PropertyKey {
    fn from(value: String) -> Self {
        PropertyKey::String(value)
    }
}

/// Parses a canonical array index: "0" or a decimal without leading zeroes,
/// at most 2^32 - 2.
pub(crate) fn parse_array_index(str: &str) -> Option<u32> {
    let bytes = str.as_bytes();
    if bytes.is_empty() || bytes.len() > 10 || !bytes.iter().all(u8::is_ascii_digit) {
        return None;
    }
    if bytes.len() > 1 && bytes[0] == b'0' {
        return None;
    }
    let value: u64 = str.parse().ok()?;
    if value < u32::MAX as u64 {
        Some(value as u32)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::parse_array_index;

    #[test]
    fn array_index_parsing() {
        assert_eq!(parse_array_index("0"), Some(0));
        assert_eq!(parse_array_index("42"), Some(42));
        assert_eq!(parse_array_index("4294967294"), Some(4294967294));
        assert_eq!(parse_array_index("4294967295"), None);
        assert_eq!(parse_array_index("01"), None);
        assert_eq!(parse_array_index("-1"), None);
        assert_eq!(parse_array_index("1.5"), None);
        assert_eq!(parse_array_index(""), None);
        assert_eq!(parse_array_index("length"), None);
    }
}
