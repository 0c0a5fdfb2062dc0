use crate::FunctionContext;
use crate::Value;
use crate::functions::ReturnValue;

use crate::functions::DataType;
use crate::functions::Function;
use crate::functions::ParamTypes::*;
use crate::functions::Parameter::{self, *};

/// The `type` builtin. Implemented by hand because `type` is a Rust
/// keyword and cannot name the struct the `function!` macro generates.
#[allow(non_camel_case_types)]
pub struct type_of {
    signature: Vec<Parameter>,
}
impl type_of {
    pub fn new() -> Self {
        type_of {
            signature: vec![Required(Of(DataType::Any))],
        }
    }
}
impl Function for type_of {
    fn get_name(&self) -> &str {
        "type"
    }
    fn get_signature(&self) -> &Vec<Parameter> {
        &self.signature
    }
    fn execute(&self, args: &Vec<Value>, _: &dyn FunctionContext) -> ReturnValue {
        let tag = match &args[0] {
            Value::String(_) => "string",
            Value::Boolean(_) => "boolean",
            Value::Array(_) | Value::Projection(_) => "array",
            Value::Object(_) => "object",
            Value::Number(_) => "number",
            Value::Null => "null",
            Value::Expression(_) => unreachable!(),
        };
        Ok(Value::String(tag.to_string()))
    }
    fn get_parameter_name(&self, _: usize) -> String {
        "value".to_string()
    }
}

#[cfg(test)]
mod tests {
    use crate::functions::builtin::test_utils::Fixture;
    use crate::{FunctionContext, Value};
    use rstest::*;

    #[rstest]
    #[case("string", "text".into())]
    #[case("boolean", true.into())]
    #[case("boolean", false.into())]
    #[case("array", vec![1].into())]
    #[case("array", Value::Projection(vec![]))]
    #[case("object", Value::from_json("{}").unwrap())]
    #[case("number", 0.into())]
    #[case("null", Value::Null)]
    fn type_of(#[case] expected: &str, #[case] input: Value) {
        let fixture = Fixture::setup();
        let context: &dyn FunctionContext = &fixture;

        let args = vec![input];
        let result = fixture.runtime.call("type", &args, context).unwrap();

        assert_eq!(expected, result);
    }
}
