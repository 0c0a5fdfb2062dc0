use crate::function;

use crate::FunctionContext;
use crate::Value;
use crate::functions::ReturnValue;

use crate::functions::DataType;
use crate::functions::ElementType;
use crate::functions::Function;
use crate::functions::ParamTypes::*;
use crate::functions::Parameter::{self, *};

function!(join, [
    separator => Required(Of(DataType::String)),
    elements => Required(Of(DataType::ArrayOf(ElementType::String)))
    ], |_: &join, args: &Vec<Value>, _: &dyn FunctionContext| {
    let separator = args[0].as_str().unwrap();
    let elements = args[1].as_array().unwrap();
    let strings: Vec<&str> = elements.iter().filter_map(|x| x.as_str()).collect();
    Ok(Value::String(strings.join(separator)))
});
