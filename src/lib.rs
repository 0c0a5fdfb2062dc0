//! A tree-walking evaluator for JMESPath, a query and transformation
//! language for JSON.
//!
//! This crate is the evaluation half of a JMESPath engine: it takes an
//! expression that has already been parsed into an [`AST`] and searches
//! a JSON-shaped [`Value`] with it. Producing the tree is the parser's
//! job; any parser that emits [`NodeType`] nodes can drive this
//! evaluator.
//!
//! # Evaluating an expression
//!
//! Use the [evaluate](crate::evaluate) function, or [`AST::search`] on
//! the root node.
//!
//! ## Example
//! ```rust
//! use jmespath_eval::errors::Position;
//! use jmespath_eval::{AST, NodeType, Value, evaluate};
//!
//! // foo.bar
//! let ast = AST::make(
//!     NodeType::SubExpression(vec![
//!         AST::make(NodeType::Field("foo".to_string()), Position::new(1, 1)),
//!         AST::make(NodeType::Field("bar".to_string()), Position::new(1, 5)),
//!     ]),
//!     Position::new(1, 4),
//! );
//!
//! let data = Value::from_json(r#"{"foo": {"bar": 42}}"#).unwrap();
//! let result = evaluate(&ast, &data).unwrap();
//! assert_eq!(42, result);
//! ```
//!
//! Structural mismatches never fail: a missing key, an index past the
//! end of an array, or an accessor applied to the wrong kind of value
//! all evaluate to null. The only runtime failure is a function
//! argument of an undeclared type, which aborts the evaluation with an
//! [invalid-type](crate::errors::Kind::InvalidType) error.
//!
//! Wildcards, flatten and filters produce a *projection*: subsequent
//! operations apply to each element and null results are dropped. At
//! the JSON boundary a projection serializes as an array.
//!
//! # Registering Custom Functions
//!
//! The builtin functions can be extended with third-party functions
//! declared through the [function](crate::function) macro and
//! registered on a private [`Runtime`].
//!
//! ## Example
//! ```rust
//! mod custom_functions {
//!     use jmespath_eval::function;
//!
//!     use jmespath_eval::FunctionContext;
//!     use jmespath_eval::Value;
//!
//!     use jmespath_eval::functions::Function;
//!     use jmespath_eval::functions::ReturnValue;
//!
//!     use jmespath_eval::functions::DataType;
//!     use jmespath_eval::functions::ParamTypes::*;
//!     use jmespath_eval::functions::Parameter::{self, *};
//!
//!     function!(
//!         add,
//!         [
//!             left => Required(Of(DataType::Number)),
//!             right => Required(Of(DataType::Number))
//!         ],
//!         |_: &add, args: &Vec<Value>, _: &dyn FunctionContext| {
//!             // type checking has been performed by the runtime
//!             // safe to unwrap
//!
//!             let i = args[0].as_f64().unwrap();
//!             let j = args[1].as_f64().unwrap();
//!
//!             Value::from_f64(i + j)
//!         }
//!     );
//! }
//!
//! use jmespath_eval::errors::Position;
//! use jmespath_eval::{AST, FunctionRegistrar, NodeType, Runtime, Value};
//!
//! let mut runtime = Runtime::create_runtime();
//! runtime.register(Box::new(custom_functions::add::new()));
//!
//! let args = vec![
//!     AST::make(NodeType::Field("a".to_string()), Position::new(1, 5)),
//!     AST::make(NodeType::Field("b".to_string()), Position::new(1, 8)),
//! ];
//! let ast = AST::function_with(&runtime, "add", args, Position::new(1, 1)).unwrap();
//!
//! let input = Value::from_json(r#"{"a": 1, "b": 2}"#).unwrap();
//! let result = runtime.evaluate(&ast, &input).unwrap();
//! assert_eq!(3, result);
//! ```
mod api;
mod ast;
mod node_type;
mod registry;
mod utils;

/// Contains the types supporting error handling for this crate.
pub mod errors;
/// Defines the builtin JMESPath function implementations and
/// various helpers for authoring custom third-party functions.
pub mod functions;
/// Contains the main JMESPath expression interpreter.
pub(crate) mod interpreter;

pub(crate) mod runtime;

pub(crate) mod value;
pub(crate) mod value_eq;
pub(crate) mod value_from;

/// A type that represents a JMESPath function that can be stored
/// into a thread-safe registry.
pub type JmesPathFunction = dyn crate::functions::Function + Send + Sync;

pub use api::*;

pub use utils::Number;
pub use utils::map::Map;

pub use ast::AST;
pub use errors::Error;
pub use node_type::Comparison;
pub use node_type::NodeType;
pub use runtime::ByFunctionHolder;
pub use runtime::FunctionContext;
pub use runtime::FunctionRegistrar;
pub use runtime::Runtime;
pub use value::Value;
