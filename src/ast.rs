use crate::errors::Position;
use crate::functions::{ReturnValue, Signature};
use crate::node_type::NodeType;
use crate::runtime::{FunctionRegistrar, Runtime};
use crate::{Error, Value};

/// Represents an abstract syntax tree node.
///
/// Nodes are immutable once built. Every node evaluates through
/// [`AST::search`]; compound nodes recurse into their children.
#[derive(Clone)]
pub struct AST {
    /// The node type.
    pub node_type: NodeType,
    /// The position of this node in the JMESPath expression.
    pub position: Position,
}
impl AST {
    /// Creates a new instance of the [`AST`] type.
    pub fn make(node_type: NodeType, position: Position) -> Self {
        AST {
            node_type,
            position,
        }
    }
    /// Creates a [`NodeType::FunctionExpression`] node.
    ///
    /// The function name is resolved against the shared registry here,
    /// at construction time; an unregistered name is an
    /// [UnknownFunction](crate::errors::Kind::UnknownFunction) error and
    /// an argument count that cannot satisfy the signature is an
    /// [InvalidArity](crate::errors::Kind::InvalidArity) error. The
    /// resolved arity and variadic flag are recorded on the node.
    ///
    /// # Example
    /// ```
    /// use jmespath_eval::errors::{Kind, Position};
    /// use jmespath_eval::{AST, NodeType};
    ///
    /// let arg = AST::make(NodeType::CurrentNode, Position::new(1, 8));
    /// let ast = AST::function("length", vec![arg], Position::new(1, 1)).unwrap();
    /// assert!(matches!(ast.node_type, NodeType::FunctionExpression { .. }));
    ///
    /// let err = AST::function("no_such_function", vec![], Position::new(1, 1));
    /// assert_eq!(Kind::UnknownFunction, err.unwrap_err().kind);
    /// ```
    pub fn function(name: &str, args: Vec<AST>, position: Position) -> Result<Self, Error> {
        let runtime = Runtime::get_shared_runtime();
        Self::function_with(&runtime, name, args, position)
    }
    /// Creates a [`NodeType::FunctionExpression`] node resolved against
    /// the given [`Runtime`] instead of the shared registry.
    pub fn function_with(
        runtime: &Runtime,
        name: &str,
        args: Vec<AST>,
        position: Position,
    ) -> Result<Self, Error> {
        let Some(function) = runtime.get(name) else {
            let mut err = Error::unknown_function(name);
            err.position = Some(position);
            return Err(err);
        };
        let signature = function.get_signature();
        let arity = Signature::get_min_args_count(signature);
        let variadic = Signature::is_variadic(signature);
        if args.len() < arity {
            let mut err = Error::too_few_arguments(name, arity, args.len(), variadic);
            err.position = Some(position);
            return Err(err);
        }
        if let Some(max) = Signature::get_max_args_count(signature) {
            if args.len() > max {
                let mut err = Error::too_many_arguments(name, max, args.len());
                err.position = Some(position);
                return Err(err);
            }
        }
        Ok(AST::make(
            NodeType::FunctionExpression {
                name: name.to_string(),
                arity,
                variadic,
                args,
            },
            position,
        ))
    }
    /// Evaluates this expression against a value.
    ///
    /// # Example
    /// ```
    /// use jmespath_eval::errors::Position;
    /// use jmespath_eval::{AST, NodeType, Value};
    ///
    /// let ast = AST::make(NodeType::Field("foo".to_string()), Position::new(1, 1));
    /// let data = Value::from_json(r#"{"foo": "bar"}"#).unwrap();
    /// let result = ast.search(&data).unwrap();
    ///
    /// assert_eq!("bar", result);
    /// ```
    pub fn search(&self, root: &Value) -> ReturnValue {
        let runtime = Runtime::get_shared_runtime();
        runtime.evaluate(self, root)
    }
}

impl std::fmt::Debug for AST {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{:?}", self.position, self.node_type)
    }
}
impl std::fmt::Display for AST {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.pretty_print())
    }
}

macro_rules! pretty {
    ($ident:ident) => {
        (stringify!($ident).to_string(), "".to_string())
    };
    ($ident:ident, $text:expr) => {
        (format!("{}({})", stringify!($ident), $text), "".to_string())
    };
}
impl AST {
    /// Renders this tree as an indented multi-line listing, one node
    /// per line. The format is a debugging aid and is not stable.
    pub fn pretty_print(&self) -> String {
        self.pretty(0)
    }
    fn pretty(&self, indent_level: usize) -> String {
        fn pretty_children(children: &[AST], indent_level: usize) -> String {
            let mut text = "".to_string();
            for child in children {
                let pretty = format!("\n{}", child.pretty(indent_level));
                text.push_str(&pretty);
            }
            text
        }
        let (node_type, children) = match &self.node_type {
            NodeType::CurrentNode => pretty!(CurrentNode),
            NodeType::ListElements => pretty!(ListElements),
            NodeType::WildcardIndex => pretty!(WildcardIndex),
            NodeType::WildcardValues => pretty!(WildcardValues),

            NodeType::Field(name) => pretty!(Field, name),
            NodeType::Index(index) => pretty!(Index, index),
            NodeType::Literal(value) => pretty!(Literal, value),

            NodeType::Comparator(op, nodes) => (
                format!("Comparator({})", op),
                pretty_children(nodes, indent_level + 1),
            ),
            NodeType::FilterExpression(nodes) => (
                "FilterExpression".to_string(),
                pretty_children(nodes, indent_level + 1),
            ),
            NodeType::FunctionExpression { name, args, .. } => (
                format!("FunctionExpression({})", name),
                pretty_children(args, indent_level + 1),
            ),
            NodeType::KeyValPair(key, nodes) => (
                format!("KeyValPair({})", key),
                pretty_children(nodes, indent_level + 1),
            ),
            NodeType::MultiFieldDict(nodes) => (
                "MultiFieldDict".to_string(),
                pretty_children(nodes, indent_level + 1),
            ),
            NodeType::MultiFieldList(nodes) => (
                "MultiFieldList".to_string(),
                pretty_children(nodes, indent_level + 1),
            ),
            NodeType::OrExpression(nodes) => (
                "OrExpression".to_string(),
                pretty_children(nodes, indent_level + 1),
            ),
            NodeType::SubExpression(nodes) => (
                "SubExpression".to_string(),
                pretty_children(nodes, indent_level + 1),
            ),
        };
        format!(
            "{}{} [{}, {}]{}",
            "  ".repeat(indent_level),
            node_type,
            self.position.line,
            self.position.column,
            children,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node_type::Comparison;
    use crate::errors::Kind;
    use rstest::*;

    #[test]
    fn it_implements_debug_trait() {
        let node = NodeType::Field("foo".to_string());
        let ast = AST::make(node, Position::new(1, 1));
        assert_eq!("(1, 1):Field(\"foo\")", format!("{:?}", ast));
    }
    #[test]
    fn it_implements_display_trait() {
        let node = NodeType::Field("foo".to_string());
        let ast = AST::make(node, Position::new(1, 1));
        assert_eq!("Field(foo) [1, 1]", format!("{}", ast));
    }

    #[rstest]
    #[case("CurrentNode [0, 0]", NodeType::CurrentNode)]
    #[case("ListElements [0, 0]", NodeType::ListElements)]
    #[case("WildcardIndex [0, 0]", NodeType::WildcardIndex)]
    #[case("WildcardValues [0, 0]", NodeType::WildcardValues)]
    #[case("Field(foo) [0, 0]", NodeType::Field("foo".to_string()))]
    #[case("Index(-1) [0, 0]", NodeType::Index(-1))]
    #[case("Literal(42.0) [0, 0]", NodeType::Literal(42.into()))]
    fn it_pretty_prints_leaves(#[case] expected: &str, #[case] node_type: NodeType) {
        let ast = AST::make(node_type, Position::default());
        assert_eq!(expected, ast.pretty_print());
    }

    #[test]
    fn it_pretty_prints_sub_expression() {
        let nodes = vec![
            AST::make(NodeType::Field("foo".to_string()), Position::new(1, 1)),
            AST::make(NodeType::Field("bar".to_string()), Position::new(1, 5)),
        ];
        let ast = AST::make(NodeType::SubExpression(nodes), Position::new(1, 4));
        assert_eq!(
            r#"SubExpression [1, 4]
  Field(foo) [1, 1]
  Field(bar) [1, 5]"#,
            ast.pretty_print()
        );
    }

    #[test]
    fn it_pretty_prints_comparator() {
        let nodes = vec![
            AST::make(NodeType::Field("a".to_string()), Position::new(1, 3)),
            AST::make(NodeType::Literal(1.into()), Position::new(1, 8)),
        ];
        let ast = AST::make(
            NodeType::Comparator(Comparison::Equal, nodes),
            Position::new(1, 5),
        );
        assert_eq!(
            r#"Comparator(==) [1, 5]
  Field(a) [1, 3]
  Literal(1.0) [1, 8]"#,
            ast.pretty_print()
        );
    }

    #[test]
    fn it_pretty_prints_multi_select() {
        let pair = AST::make(
            NodeType::KeyValPair(
                "name".to_string(),
                vec![AST::make(
                    NodeType::Field("name".to_string()),
                    Position::new(1, 8),
                )],
            ),
            Position::new(1, 2),
        );
        let ast = AST::make(NodeType::MultiFieldDict(vec![pair]), Position::new(1, 1));
        assert_eq!(
            r#"MultiFieldDict [1, 1]
  KeyValPair(name) [1, 2]
    Field(name) [1, 8]"#,
            ast.pretty_print()
        );
    }

    #[test]
    fn it_pretty_prints_function_expression() {
        let arg = AST::make(NodeType::CurrentNode, Position::new(1, 8));
        let ast = AST::function("length", vec![arg], Position::new(1, 1)).unwrap();
        assert_eq!(
            r#"FunctionExpression(length) [1, 1]
  CurrentNode [1, 8]"#,
            ast.pretty_print()
        );
    }

    #[test]
    fn function_ctor_resolves_eagerly() {
        let err = AST::function("no_such_function", vec![], Position::new(1, 1)).unwrap_err();
        assert_eq!(Kind::UnknownFunction, err.kind);
    }

    #[rstest]
    #[case("length", 0)]
    #[case("length", 2)]
    #[case("not_null", 0)]
    #[case("contains", 1)]
    fn function_ctor_checks_arity(#[case] name: &str, #[case] count: usize) {
        let args = (0..count)
            .map(|_| AST::make(NodeType::CurrentNode, Position::default()))
            .collect();
        let err = AST::function(name, args, Position::new(1, 1)).unwrap_err();
        assert_eq!(Kind::InvalidArity, err.kind);
    }

    #[test]
    fn function_ctor_records_signature() {
        let args = vec![
            AST::make(NodeType::CurrentNode, Position::default()),
            AST::make(NodeType::CurrentNode, Position::default()),
        ];
        let ast = AST::function("not_null", args, Position::new(1, 1)).unwrap();
        match ast.node_type {
            NodeType::FunctionExpression {
                arity, variadic, ..
            } => {
                assert_eq!(1, arity);
                assert!(variadic);
            }
            _ => unreachable!(),
        }
    }
}
