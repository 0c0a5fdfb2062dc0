use crate::function;

use crate::FunctionContext;
use crate::Value;
use crate::functions::ReturnValue;

use crate::functions::DataType;
use crate::functions::Function;
use crate::functions::ParamTypes::*;
use crate::functions::Parameter::{self, *};

function!(to_number, [ value => Required(Of(DataType::Any)) ], |_: &to_number, args: &Vec<Value>, _: &dyn FunctionContext| {
    match &args[0] {
        Value::Number(_) => Ok(args[0].clone()),
        Value::String(text) => {
            // a '.' selects the fractional parser, otherwise the
            // string must be a plain integer
            let parsed = if text.contains('.') {
                text.parse::<f64>().ok()
            } else {
                text.parse::<i64>().ok().map(|n| n as f64)
            };
            match parsed {
                Some(number) => Value::from_f64(number),
                None => Ok(Value::Null),
            }
        }
        _ => Ok(Value::Null),
    }
});
