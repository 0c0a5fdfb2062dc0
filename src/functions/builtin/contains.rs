use crate::function;

use crate::FunctionContext;
use crate::Value;
use crate::functions::ReturnValue;

use crate::functions::DataType;
use crate::functions::Function;
use crate::functions::ParamTypes::*;
use crate::functions::Parameter::{self, *};

function!(contains, [
    subject => Required(Any(vec![DataType::Array, DataType::String])),
    search => Required(Of(DataType::Any))
    ], |_: &contains, args: &Vec<Value>, _: &dyn FunctionContext| {
    if let Value::String(subject) = &args[0] {
        // on a string subject, a non-string needle never matches
        return Ok::<Value, crate::Error>(match args[1].as_str() {
            Some(needle) => Value::Boolean(subject.contains(needle)),
            None => Value::Boolean(false),
        });
    }
    let elements = args[0].as_array().unwrap();
    Ok(Value::Boolean(elements.iter().any(|x| x == &args[1])))
});

#[cfg(test)]
mod tests {
    use crate::errors::Kind;
    use crate::functions::builtin::test_utils::Fixture;
    use crate::{FunctionContext, Value};
    use rstest::*;

    #[rstest]
    #[case(true, Value::from_json(r#"[1, 2]"#).unwrap(), 1.into())]
    #[case(false, Value::from_json(r#"[1, 2]"#).unwrap(), 3.into())]
    #[case(true, Value::from_json(r#"["a", "b"]"#).unwrap(), "b".into())]
    #[case(true, "substring".into(), "string".into())]
    #[case(false, "substring".into(), "unknown".into())]
    #[case(false, "substring".into(), true.into())]
    fn contains(#[case] expected: bool, #[case] subject: Value, #[case] search: Value) {
        let fixture = Fixture::setup();
        let context: &dyn FunctionContext = &fixture;

        let args = vec![subject, search];
        let result = fixture.runtime.call("contains", &args, context).unwrap();

        assert_eq!(Value::Boolean(expected), result);
    }

    #[test]
    fn contains_requires_an_array_or_string_subject() {
        let fixture = Fixture::setup();
        let context: &dyn FunctionContext = &fixture;

        let args = vec![42.into(), 42.into()];
        let result = fixture
            .runtime
            .call("contains", &args, context)
            .map_err(|e| e.kind);

        assert!(matches!(result, Err(Kind::InvalidType)));
    }
}
