use crate::function;

use crate::FunctionContext;
use crate::Value;
use crate::functions::ReturnValue;

use crate::functions::DataType;
use crate::functions::ElementType;
use crate::functions::Function;
use crate::functions::ParamTypes::*;
use crate::functions::Parameter::{self, *};

function!(min, [ elements => Required(Of(DataType::ArrayOf(ElementType::Number))) ], |_: &min, args: &Vec<Value>, _: &dyn FunctionContext| {
    let elements = args[0].as_array().unwrap();
    match elements.iter().filter_map(|x| x.as_number()).min() {
        Some(best) => Ok(Value::Number(*best)),
        None => Ok(Value::Null),
    }
});
