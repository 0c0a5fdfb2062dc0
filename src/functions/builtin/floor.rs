use crate::function;

use crate::FunctionContext;
use crate::Value;
use crate::functions::ReturnValue;

use crate::functions::DataType;
use crate::functions::Function;
use crate::functions::ParamTypes::*;
use crate::functions::Parameter::{self, *};

function!(floor, [ value => Required(Of(DataType::Number)) ], |_: &floor, args: &Vec<Value>, _: &dyn FunctionContext| {
    Value::from_f64(args[0].as_f64().unwrap().floor())
});
