use crate::function;

use crate::FunctionContext;
use crate::Value;
use crate::functions::ReturnValue;

use crate::functions::DataType;
use crate::functions::Function;
use crate::functions::ParamTypes::*;
use crate::functions::Parameter::{self, *};

function!(abs, [ value => Required(Of(DataType::Number)) ], |_: &abs, args: &Vec<Value>, _: &dyn FunctionContext| {
    let num = args[0].as_f64().unwrap().abs();
    Value::from_f64(num)
});

#[cfg(test)]
mod tests {
    use crate::errors::Kind;
    use crate::functions::builtin::test_utils::Fixture;
    use crate::{FunctionContext, Value};
    use rstest::*;

    #[rstest]
    #[case(3.into(), Value::from_f64(-3.0).unwrap())]
    #[case(3.into(), Value::from_f64(3.0).unwrap())]
    #[case(Value::from_f64(1.5).unwrap(), Value::from_f64(-1.5).unwrap())]
    fn abs(#[case] expected: Value, #[case] input: Value) {
        let fixture = Fixture::setup();
        let context: &dyn FunctionContext = &fixture;

        let args = vec![input];
        let result = fixture.runtime.call("abs", &args, context).unwrap();

        assert_eq!(expected, result);
    }

    #[rstest]
    #[case(Value::Boolean(true))]
    #[case(Value::Null)]
    #[case(Value::String("1".to_string()))]
    fn abs_requires_a_number(#[case] input: Value) {
        let fixture = Fixture::setup();
        let context: &dyn FunctionContext = &fixture;

        let args = vec![input];
        let result = fixture
            .runtime
            .call("abs", &args, context)
            .map_err(|e| e.kind);

        assert!(matches!(result, Err(Kind::InvalidType)));
    }
}
