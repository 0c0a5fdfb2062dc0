use crate::function;

use crate::FunctionContext;
use crate::Value;
use crate::functions::ReturnValue;

use crate::functions::DataType;
use crate::functions::ElementType;
use crate::functions::Function;
use crate::functions::ParamTypes::*;
use crate::functions::Parameter::{self, *};

function!(avg, [ elements => Required(Of(DataType::ArrayOf(ElementType::Number))) ], |_: &avg, args: &Vec<Value>, _: &dyn FunctionContext| {
    let elements = args[0].as_array().unwrap();
    if elements.is_empty() {
        return Ok(Value::Null);
    }
    let sum: f64 = elements.iter().filter_map(|x| x.as_f64()).sum();
    Value::from_f64(sum / elements.len() as f64)
});
