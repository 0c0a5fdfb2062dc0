use crate::function;

use crate::FunctionContext;
use crate::Value;
use crate::functions::ReturnValue;

use crate::functions::DataType;
use crate::functions::Function;
use crate::functions::ParamTypes::*;
use crate::functions::Parameter::{self, *};

function!(length, [ subject => Required(Any(vec![DataType::String, DataType::Array, DataType::Object])) ], |_: &length, args: &Vec<Value>, _: &dyn FunctionContext| {
    let length = match &args[0] {
        Value::Array(v) | Value::Projection(v) => v.len(),
        Value::Object(o) => o.len(),
        Value::String(s) => s.chars().count(),
        _ => unreachable!(),
    };
    Ok(length)
});
