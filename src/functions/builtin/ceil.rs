use crate::function;

use crate::FunctionContext;
use crate::Value;
use crate::functions::ReturnValue;

use crate::functions::DataType;
use crate::functions::Function;
use crate::functions::ParamTypes::*;
use crate::functions::Parameter::{self, *};

function!(ceil, [ value => Required(Of(DataType::Number)) ], |_: &ceil, args: &Vec<Value>, _: &dyn FunctionContext| {
    Value::from_f64(args[0].as_f64().unwrap().ceil())
});

#[cfg(test)]
mod tests {
    use crate::errors::Kind;
    use crate::functions::builtin::test_utils::Fixture;
    use crate::{FunctionContext, Value};
    use rstest::*;

    #[rstest]
    #[case(2.into(), Value::from_f64(1.2).unwrap())]
    #[case(Value::from_f64(-1.0).unwrap(), Value::from_f64(-1.8).unwrap())]
    #[case(42.into(), Value::from_f64(42.0).unwrap())]
    fn ceil(#[case] expected: Value, #[case] input: Value) {
        let fixture = Fixture::setup();
        let context: &dyn FunctionContext = &fixture;

        let args = vec![input];
        let result = fixture.runtime.call("ceil", &args, context).unwrap();

        assert_eq!(expected, result);
    }

    #[test]
    fn ceil_requires_a_number() {
        let fixture = Fixture::setup();
        let context: &dyn FunctionContext = &fixture;

        let args = vec!["1.2".into()];
        let result = fixture
            .runtime
            .call("ceil", &args, context)
            .map_err(|e| e.kind);

        assert!(matches!(result, Err(Kind::InvalidType)));
    }
}
