use crate::Value;
use crate::ast::AST;
use crate::errors::Error;
use crate::runtime::Runtime;

/// Evaluates a parsed JMESPath expression against a value.
///
/// A null result signals "no match" and is indistinguishable from a
/// matched explicit null; callers who need to tell them apart can
/// query with the `type` function instead. A projection result is a
/// sequence and serializes as a JSON array.
///
/// # Example
///
/// ```
/// use jmespath_eval::errors::Position;
/// use jmespath_eval::{AST, NodeType, Value, evaluate};
///
/// let ast = AST::make(NodeType::Field("foo".to_string()), Position::new(1, 1));
/// let input = Value::from_json(r#"{"foo": "bar"}"#).unwrap();
/// let result = evaluate(&ast, &input).unwrap();
///
/// assert_eq!("bar", result);
/// ```
pub fn evaluate(ast: &AST, root: &Value) -> Result<Value, Error> {
    Runtime::get_shared_runtime().evaluate(ast, root)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::NodeType;
    use crate::errors::{Kind, Position};

    fn field(name: &str) -> AST {
        AST::make(NodeType::Field(name.to_string()), Position::new(1, 1))
    }

    #[test]
    fn it_evaluates() {
        let ast = field("foo");
        let root = Value::from_json(r#"{"foo": "bar"}"#).unwrap();
        let result = evaluate(&ast, &root).unwrap();
        assert_eq!("\"bar\"", result.to_json());
    }

    #[test]
    fn it_collapses_missing_keys_to_null() {
        let ast = field("missing");
        let root = Value::from_json(r#"{"foo": "bar"}"#).unwrap();
        let result = evaluate(&ast, &root).unwrap();
        assert!(result.is_null());
    }

    #[test]
    fn it_surfaces_type_errors() {
        let arg = AST::make(NodeType::CurrentNode, Position::new(1, 8));
        let ast = AST::function("abs", vec![arg], Position::new(1, 1)).unwrap();
        let root = Value::from_json("\"not a number\"").unwrap();
        let err = evaluate(&ast, &root).unwrap_err();
        assert_eq!(Kind::InvalidType, err.kind);
    }
}
