use crate::errors::Error as RuntimeError;
use crate::errors::error_builder::{ErrorBuilder, FunctionErrorBuilder, InvalidTypeErrorBuilder};
use crate::errors::invalid_type::InvalidTypeErrorBuilderFactory;
use crate::function;

use crate::FunctionContext;
use crate::Value;
use crate::functions::ReturnValue;

use crate::functions::DataType;
use crate::functions::Function;
use crate::functions::ParamTypes::*;
use crate::functions::Parameter::{self, *};

function!(sort_by, [
    elements => Required(Of(DataType::Array)),
    expr => Required(Of(DataType::ExpRef))
    ], |me: &sort_by, args: &Vec<Value>, context: &dyn FunctionContext| {

    let elements = args[0].as_array().unwrap();
    let ast = args[1].as_expref().unwrap();

    let params = vec![Any(vec![DataType::Number, DataType::String])];
    let closure = context.create_by_function(ast, &params, me, 1)?;

    let keys = elements
        .iter()
        .map(|x| closure.call(x))
        .collect::<Result<Vec<Value>, RuntimeError>>()?;

    // the first key selects the kind the remaining keys are held to
    if let Some(first) = keys.first() {
        let expected = first.get_data_type();
        if let Some(stray) = keys.iter().find(|key| key.get_data_type() != expected) {
            let err = RuntimeError::get_invalid_type_error_builder()
                .for_function(me.get_name())
                .for_expression_parameter(&me.get_parameter_name(1))
                .expected_data_types(&vec![expected])
                .received(stray)
                .build();
            return Err(err);
        }
    }

    let mut pairs: Vec<(&Value, Value)> = elements.iter().zip(keys).collect();
    pairs.sort_by(|a, b| match (&a.1, &b.1) {
        (Value::Number(x), Value::Number(y)) => x.cmp(y),
        (Value::String(x), Value::String(y)) => x.cmp(y),
        _ => unreachable!(),
    });
    Ok(Value::Array(
        pairs.into_iter().map(|(element, _)| element.clone()).collect(),
    ))
});

#[cfg(test)]
mod tests {
    use super::*;
    use crate::AST;
    use crate::ByFunctionHolder;
    use crate::NodeType;
    use crate::Runtime;
    use crate::errors::{Kind, Position};
    use crate::functions::ParamTypes;
    use rstest::*;

    struct Fixture {
        runtime: Runtime,
    }
    impl FunctionContext for Fixture {
        fn create_by_function<'a>(
            &'a self,
            _ast: &'a AST,
            _params: &'a Vec<ParamTypes>,
            _function: &'a dyn Function,
            _param_index: usize,
        ) -> Result<ByFunctionHolder<'a>, RuntimeError> {
            // stand-in for the evaluator: the key of {"k": v} is v
            let closure = |x: &Value| match x {
                Value::Object(map) => Ok(map["k"].clone()),
                _ => Err(RuntimeError::new(Kind::InvalidType, "err")),
            };
            Ok(ByFunctionHolder {
                closure: Box::new(closure),
            })
        }
    }

    fn setup() -> Fixture {
        let runtime = Runtime::create_runtime();
        Fixture { runtime }
    }

    fn expref() -> Value {
        let field = AST::make(NodeType::Field("k".to_string()), Position::new(1, 1));
        Value::Expression(Box::new(field))
    }

    #[rstest]
    #[case(r#"[{"k": 1}, {"k": 2}, {"k": 3}]"#, r#"[{"k": 3}, {"k": 1}, {"k": 2}]"#)]
    #[case(r#"[{"k": "a"}, {"k": "b"}]"#, r#"[{"k": "b"}, {"k": "a"}]"#)]
    #[case("[]", "[]")]
    fn sort_by(#[case] expected: &str, #[case] input: &str) {
        let fixture = setup();
        let context: &dyn FunctionContext = &fixture;

        let args = vec![Value::from_json(input).unwrap(), expref()];
        let result = fixture.runtime.call("sort_by", &args, context).unwrap();

        assert_eq!(Value::from_json(expected).unwrap(), result);
    }

    #[test]
    fn sort_by_is_stable() {
        let fixture = setup();
        let context: &dyn FunctionContext = &fixture;

        let input = r#"[
            {"k": 1, "tag": "first"},
            {"k": 0, "tag": "zero"},
            {"k": 1, "tag": "second"}
        ]"#;
        let args = vec![Value::from_json(input).unwrap(), expref()];
        let result = fixture.runtime.call("sort_by", &args, context).unwrap();

        let expected = r#"[
            {"k": 0, "tag": "zero"},
            {"k": 1, "tag": "first"},
            {"k": 1, "tag": "second"}
        ]"#;
        assert_eq!(Value::from_json(expected).unwrap(), result);
    }

    #[test]
    fn sort_by_rejects_mixed_key_kinds() {
        let fixture = setup();
        let context: &dyn FunctionContext = &fixture;

        let input = r#"[{"k": 1}, {"k": "two"}]"#;
        let args = vec![Value::from_json(input).unwrap(), expref()];
        let result = fixture
            .runtime
            .call("sort_by", &args, context)
            .map_err(|e| e.kind);

        assert!(matches!(result, Err(Kind::InvalidType)));
    }

    #[test]
    fn sort_by_requires_an_expression_argument() {
        let fixture = setup();
        let context: &dyn FunctionContext = &fixture;

        let args = vec![Value::from_json("[]").unwrap(), "k".into()];
        let result = fixture
            .runtime
            .call("sort_by", &args, context)
            .map_err(|e| e.kind);

        assert!(matches!(result, Err(Kind::InvalidType)));
    }
}
