use crate::function;

use crate::FunctionContext;
use crate::Value;
use crate::functions::ReturnValue;

use crate::functions::DataType;
use crate::functions::ElementType;
use crate::functions::Function;
use crate::functions::ParamTypes::*;
use crate::functions::Parameter::{self, *};

function!(sort, [ elements => Required(Any(vec![
        DataType::ArrayOf(ElementType::String),
        DataType::ArrayOf(ElementType::Number),
    ])) ], |_: &sort, args: &Vec<Value>, _: &dyn FunctionContext| {
    let mut elements = args[0].as_array().unwrap().clone();
    // element validation guarantees a homogeneous sequence
    let numeric = matches!(elements.first(), Some(Value::Number(_)));
    if numeric {
        elements.sort_by(|a, b| a.as_number().unwrap().cmp(b.as_number().unwrap()));
    } else {
        elements.sort_by(|a, b| a.as_str().unwrap().cmp(b.as_str().unwrap()));
    }
    Ok(Value::Array(elements))
});

#[cfg(test)]
mod tests {
    use crate::errors::Kind;
    use crate::functions::builtin::test_utils::Fixture;
    use crate::{FunctionContext, Value};
    use rstest::*;

    #[rstest]
    #[case(vec![1, 2, 3].into(), vec![3, 1, 2].into())]
    #[case(vec!["a", "b", "c"].into(), vec!["b", "c", "a"].into())]
    #[case(Value::Array(vec![]), Value::Array(vec![]))]
    fn sort(#[case] expected: Value, #[case] input: Value) {
        let fixture = Fixture::setup();
        let context: &dyn FunctionContext = &fixture;

        let args = vec![input];
        let result = fixture.runtime.call("sort", &args, context).unwrap();

        assert_eq!(expected, result);
    }

    #[rstest]
    #[case(Value::Array(vec![1.into(), "two".into()]))]
    #[case(Value::Array(vec!["one".into(), 2.into()]))]
    #[case(Value::Array(vec![true.into()]))]
    #[case(42.into())]
    fn sort_requires_a_homogeneous_array(#[case] input: Value) {
        let fixture = Fixture::setup();
        let context: &dyn FunctionContext = &fixture;

        let args = vec![input];
        let result = fixture
            .runtime
            .call("sort", &args, context)
            .map_err(|e| e.kind);

        assert!(matches!(result, Err(Kind::InvalidType)));
    }
}
