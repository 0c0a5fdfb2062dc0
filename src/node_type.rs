use crate::Value;
use crate::ast::AST;

/// The comparison operator carried by a [`NodeType::Comparator`] node.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Comparison {
    Equal,
    NotEqual,
    LessThan,
    LessThanOrEqual,
    GreaterThan,
    GreaterThanOrEqual,
}

impl std::fmt::Display for Comparison {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let s = match self {
            Comparison::Equal => "==",
            Comparison::NotEqual => "!=",
            Comparison::LessThan => "<",
            Comparison::LessThanOrEqual => "<=",
            Comparison::GreaterThan => ">",
            Comparison::GreaterThanOrEqual => ">=",
        };
        write!(f, "{}", s)
    }
}

/// Represents the type of an [`AST`] node.
///
/// The parser delivers a finite, acyclic tree of these nodes.
/// Composite variants carry their children as a `Vec<AST>` in the
/// order documented on each variant.
#[derive(Debug, Clone)]
pub enum NodeType {
    /// A comparison between two sub-expressions: `[first, second]`.
    Comparator(Comparison, Vec<AST>),
    /// The `@` node, evaluating to the current value.
    CurrentNode,
    /// An identifier looked up on the current object.
    Field(String),
    /// A filter `[?expr]` over the elements of a sequence: `[predicate]`.
    FilterExpression(Vec<AST>),
    /// A call to a registered function. Built through
    /// [`AST::function`], which resolves the function name and binds
    /// its arity at construction time.
    FunctionExpression {
        name: String,
        arity: usize,
        variadic: bool,
        args: Vec<AST>,
    },
    /// A signed index into an array, negative counting from the end.
    Index(i32),
    /// One `key: expression` entry of a multi-select hash: `[child]`.
    KeyValPair(String, Vec<AST>),
    /// The `[]` flatten operator.
    ListElements,
    /// A literal JSON value. The payload is a value, not an expression.
    Literal(Value),
    /// A multi-select hash `{k1: e1, ...}` of [`NodeType::KeyValPair`]
    /// children, in declaration order.
    MultiFieldDict(Vec<AST>),
    /// A multi-select list `[e1, e2, ...]`.
    MultiFieldList(Vec<AST>),
    /// An or-expression: `[first, remaining]`. Falls through to
    /// `remaining` when `first` evaluates to null.
    OrExpression(Vec<AST>),
    /// A parent expression whose result feeds a child expression:
    /// `[parent, child]`.
    SubExpression(Vec<AST>),
    /// The `[*]` array wildcard.
    WildcardIndex,
    /// The `.*` object value wildcard.
    WildcardValues,
}
