use crate::function;

use crate::FunctionContext;
use crate::Value;
use crate::functions::ReturnValue;

use crate::functions::DataType;
use crate::functions::Function;
use crate::functions::ParamTypes::*;
use crate::functions::Parameter::{self, *};

function!(values, [ obj => Required(Of(DataType::Object)) ], |_: &values, args: &Vec<Value>, _: &dyn FunctionContext| {
    let obj = args[0].as_object().unwrap();
    Ok(Value::Array(obj.values().cloned().collect()))
});

#[cfg(test)]
mod tests {
    use crate::errors::Kind;
    use crate::functions::builtin::test_utils::Fixture;
    use crate::{FunctionContext, Value};
    use rstest::*;

    #[rstest]
    #[case(Value::from_json("[1, 2]").unwrap(), Value::from_json(r#"{"one": 1, "two": 2}"#).unwrap())]
    #[case(Value::Array(vec![]), Value::from_json("{}").unwrap())]
    fn values(#[case] expected: Value, #[case] input: Value) {
        let fixture = Fixture::setup();
        let context: &dyn FunctionContext = &fixture;

        let args = vec![input];
        let result = fixture.runtime.call("values", &args, context).unwrap();

        assert_eq!(expected, result);
    }

    #[test]
    fn values_requires_an_object() {
        let fixture = Fixture::setup();
        let context: &dyn FunctionContext = &fixture;

        let args = vec![Value::from_json("[1, 2]").unwrap()];
        let result = fixture
            .runtime
            .call("values", &args, context)
            .map_err(|e| e.kind);

        assert!(matches!(result, Err(Kind::InvalidType)));
    }
}
