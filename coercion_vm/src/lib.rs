// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! # coercion_vm
//!
//! The value coercion layer of an ECMAScript engine: the abstract operations
//! of [ECMA-262 section 7.1](https://tc39.es/ecma262/#sec-type-conversion)
//! together with the minimal object model they depend on.
//!
//! Everything runs against an [`Agent`](ecmascript::execution::Agent), which
//! owns the heap and the realm's intrinsic objects.

pub mod ecmascript;
pub mod heap;

pub use ecmascript::execution::{Agent, JsError, JsResult, Options};
pub use ecmascript::types::Value;
