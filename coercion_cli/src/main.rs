// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
mod helper;

use clap::Parser as ClapParser;
use coercion_vm::ecmascript::{
    abstract_operations::{
        operations_on_objects::invoke,
        type_conversion::{
            classify, to_boolean, to_int32, to_integer_or_infinity, to_number, to_object,
            to_primitive, to_string, to_uint16, to_uint32,
        },
    },
    builtins::ArgumentsList,
    execution::{Agent, Options},
    types::{PropertyKey, Value},
};
use helper::{display_result, display_value, parse_literal};

/// Inspect how ECMAScript converts values
#[derive(Debug, ClapParser)] // requires `derive` feature
#[command(name = "coerce")]
#[command(about = "Prints the results of the ECMAScript type conversions", long_about = None)]
struct Cli {
    /// Also print Number.prototype.toString with this radix
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(2..=36))]
    radix: Option<u8>,

    /// Nested function calls allowed before a RangeError is thrown
    #[arg(long, default_value_t = Options::default().max_call_depth)]
    max_call_depth: u32,

    /// The literals to convert: undefined, null, true, false, numbers,
    /// quoted strings or {}
    #[arg(required = true)]
    literals: Vec<String>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Cli::parse();

    let mut agent = Agent::new(Options {
        max_call_depth: args.max_call_depth,
    });

    for literal in &args.literals {
        let value = parse_literal(&mut agent, literal)?;
        println!("{literal}");
        print_conversions(&mut agent, value, args.radix);
    }
    Ok(())
}

fn print_conversions(agent: &mut Agent, value: Value, radix: Option<u8>) {
    println!("  classify:    {:?}", classify(value));

    let result = to_primitive(agent, value, None);
    let line = display_result(agent, result, display_value);
    println!("  ToPrimitive: {line}");

    println!("  ToBoolean:   {}", to_boolean(agent, value));

    let result = to_number(agent, value);
    let line = display_result(agent, result, |agent, number| {
        display_value(agent, number.into())
    });
    println!("  ToNumber:    {line}");

    let result = to_integer_or_infinity(agent, value);
    let line = display_result(agent, result, |agent, integer| {
        display_value(agent, Value::from_f64(integer))
    });
    println!("  ToInteger:   {line}");

    let result = to_int32(agent, value);
    let line = display_result(agent, result, |_, integer| integer.to_string());
    println!("  ToInt32:     {line}");

    let result = to_uint32(agent, value);
    let line = display_result(agent, result, |_, integer| integer.to_string());
    println!("  ToUint32:    {line}");

    let result = to_uint16(agent, value);
    let line = display_result(agent, result, |_, integer| integer.to_string());
    println!("  ToUint16:    {line}");

    let result = to_string(agent, value);
    let line = display_result(agent, result, |agent, string| {
        display_value(agent, string.into())
    });
    println!("  ToString:    {line}");

    let result = to_object(agent, value);
    let line = display_result(agent, result, |agent, object| {
        display_value(agent, object.into())
    });
    println!("  ToObject:    {line}");

    if let Some(radix) = radix {
        let key = PropertyKey::from_str(agent, "toString");
        let arguments = [Value::Integer(radix.into())];
        let result = invoke(agent, value, key, Some(ArgumentsList::new(&arguments)));
        let line = display_result(agent, result, display_value);
        println!("  toString({radix}): {line}");
    }
}
