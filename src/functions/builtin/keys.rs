use crate::function;

use crate::FunctionContext;
use crate::Value;
use crate::functions::ReturnValue;

use crate::functions::DataType;
use crate::functions::Function;
use crate::functions::ParamTypes::*;
use crate::functions::Parameter::{self, *};

function!(keys, [ obj => Required(Of(DataType::Object)) ], |_: &keys, args: &Vec<Value>, _: &dyn FunctionContext| {
    let obj = args[0].as_object().unwrap();
    let array: Vec<Value> = obj.keys().map(|key| Value::String(key.to_string())).collect();
    Ok(Value::Array(array))
});
