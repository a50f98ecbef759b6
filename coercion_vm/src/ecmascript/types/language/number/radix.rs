// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

/// A macro which matches a radix and on a match defines a constant called
/// RADIX to the appropriate lexical number format before evaluating the
/// expression.
macro_rules! with_radix {
    ($radix:expr, $expr:expr) => {
        $crate::ecmascript::types::language::number::radix::with_radix!(
            @arms $radix, $expr,
            2 3 4 5 6 7 8 9 10 11 12 13 14 15 16 17 18 19
            20 21 22 23 24 25 26 27 28 29 30 31 32 33 34 35 36
        )
    };
    (@arms $radix:expr, $expr:expr, $($value:literal)+) => {
        match $radix {
            $(
                $value => {
                    const RADIX: u128 = lexical::NumberFormatBuilder::from_radix($value);
                    $expr
                }
            )+
            _ => unreachable!(),
        }
    };
}
pub(crate) use with_radix;
