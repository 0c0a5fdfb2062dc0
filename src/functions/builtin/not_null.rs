use crate::function;

use crate::FunctionContext;
use crate::Value;
use crate::functions::ReturnValue;

use crate::functions::DataType;
use crate::functions::Function;
use crate::functions::ParamTypes::*;
use crate::functions::Parameter::{self, *};

function!(not_null, [ values => Variadic(Of(DataType::Any)) ], |_: &not_null, args: &Vec<Value>, _: &dyn FunctionContext| {
    match args.iter().find(|x| !x.is_null()) {
        Some(found) => Ok(found.clone()),
        None => Ok(Value::Null),
    }
});

#[cfg(test)]
mod tests {
    use crate::errors::Kind;
    use crate::functions::builtin::test_utils::Fixture;
    use crate::{FunctionContext, Value};
    use rstest::*;

    #[rstest]
    #[case("first".into(), vec!["first".into(), "second".into()])]
    #[case("second".into(), vec![Value::Null, "second".into()])]
    #[case(false.into(), vec![Value::Null, false.into(), "third".into()])]
    #[case(Value::Null, vec![Value::Null, Value::Null])]
    fn not_null(#[case] expected: Value, #[case] args: Vec<Value>) {
        let fixture = Fixture::setup();
        let context: &dyn FunctionContext = &fixture;

        let result = fixture.runtime.call("not_null", &args, context).unwrap();

        assert_eq!(expected, result);
    }

    #[test]
    fn not_null_requires_at_least_one_argument() {
        let fixture = Fixture::setup();
        let context: &dyn FunctionContext = &fixture;

        let result = fixture
            .runtime
            .call("not_null", &vec![], context)
            .map_err(|e| e.kind);

        assert!(matches!(result, Err(Kind::InvalidArity)));
    }
}
