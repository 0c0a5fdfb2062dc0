use crate::JmesPathFunction;
use crate::ast::AST;
use crate::errors::Error as RuntimeError;
use crate::errors::error_builder::{ErrorBuilder, FunctionErrorBuilder, InvalidTypeErrorBuilder};
use crate::errors::invalid_type::InvalidTypeErrorBuilderFactory;
use crate::functions::{DataType, ElementType, Function, ParamTypes, Parameter, Signature};
use crate::interpreter::Interpreter;
use crate::registry::{REGISTRY, Registry};
use crate::{Value, functions::ReturnValue};

/// Represents an expression argument at runtime.
///
/// This supports the "_by" functions by holding a closure.
/// A function that takes an expression parameter calls
/// [`crate::FunctionContext::create_by_function()`] to turn the
/// expression into an instance of this type, then applies it as a
/// "key" function over values.
pub struct ByFunctionHolder<'a> {
    pub(crate) closure: Box<dyn Fn(&Value) -> ReturnValue + 'a>,
}
impl<'a> ByFunctionHolder<'a> {
    /// Invokes the "key" function on a [`Value`].
    pub fn call(&self, value: &Value) -> ReturnValue {
        (self.closure)(value)
    }
}

/// A type that represents a context accessible to JMESPath function implementations.
pub trait FunctionContext {
    /// Creates a closure that evaluates an expression argument against
    /// a value and validates the result against the expected data
    /// types.
    ///
    /// # Parameters
    ///
    /// * `ast` - the expression argument, as received through a
    ///   [`Value::Expression`].
    /// * `params` - the data types the expression must evaluate to on
    ///   every value it is applied to.
    /// * `function` - the calling [`Function`]; its name and the
    ///   parameter name at `param_index` are used for error reporting.
    /// * `param_index` - the zero-based index of the expression
    ///   parameter in the function signature.
    fn create_by_function<'a>(
        &'a self,
        ast: &'a AST,
        params: &'a Vec<ParamTypes>,
        function: &'a dyn Function,
        param_index: usize,
    ) -> Result<ByFunctionHolder<'a>, RuntimeError>;
}

/// A type that represents a registry of JMESPath functions.
pub trait FunctionRegistrar {
    /// Registers custom functions to make them available to JMESPath expressions.
    fn register(&mut self, function: Box<JmesPathFunction>);
    /// Retrieves a reference to a registered JMESPath function.
    fn get(&self, function_name: &str) -> Option<&Box<JmesPathFunction>>;
}

/// Represents a processing runtime for JMESPath expression evaluation.
pub struct Runtime {
    shared_registry: &'static Box<Registry>,
    registry: Option<Box<Registry>>,
}
impl Runtime {
    /// Returns a static shared [`Runtime`] with all builtin [`Function`]
    /// types registered.
    pub fn get_shared_runtime() -> Self {
        Runtime {
            shared_registry: &REGISTRY,
            registry: None,
        }
    }
    /// Create a new instance of the [`Runtime`] type with all
    /// builtin [`Function`] types registered.
    ///
    /// Use the [register](crate::FunctionRegistrar::register()) function
    /// to register new custom functions.
    pub fn create_runtime() -> Self {
        Runtime {
            shared_registry: &REGISTRY,
            registry: Some(Box::new(Registry::create_registry())),
        }
    }
    /// Evaluates a parsed JMESPath expression against a value.
    pub fn evaluate(&self, ast: &AST, root: &Value) -> ReturnValue {
        let interpreter = Interpreter::new(self, root);
        interpreter.evaluate(ast)
    }
    pub(crate) fn call(
        &self,
        fname: &str,
        args: &Vec<Value>,
        context: &dyn FunctionContext,
    ) -> ReturnValue {
        if let Some(func) = self.get(fname) {
            Self::ensure_arity(func, args)?;
            Self::ensure_type(func, args)?;
            return func.execute(args, context);
        }
        Err(RuntimeError::unknown_function(fname))
    }
    fn ensure_arity(func: &Box<JmesPathFunction>, args: &Vec<Value>) -> Result<(), RuntimeError> {
        let params = func.get_signature();
        let function_name = func.get_name();

        let count = args.len();
        let is_variadic = Signature::is_variadic(params);
        let max_count = Signature::get_max_args_count(params);
        let min_count = Signature::get_min_args_count(params);

        if count < min_count {
            return Err(RuntimeError::too_few_arguments(
                function_name,
                min_count,
                count,
                is_variadic,
            ));
        }

        if let Some(n) = max_count {
            if count > n {
                return Err(RuntimeError::too_many_arguments(function_name, n, count));
            }
        }

        Ok(())
    }
    /// Validates every argument against the function signature.
    ///
    /// An argument index past the end of the signature is matched
    /// against the last parameter, so surplus variadic arguments share
    /// the trailing parameter's declared types.
    pub fn ensure_type(
        func: &Box<JmesPathFunction>,
        args: &Vec<Value>,
    ) -> Result<(), RuntimeError> {
        let params = func.get_signature();
        if params.is_empty() {
            return Ok(());
        }
        for (i, arg) in args.iter().enumerate() {
            let index = std::cmp::min(i, params.len() - 1);
            Self::ensure_matches_parameter(
                func.get_name(),
                &func.get_parameter_name(index),
                arg,
                &params[index],
            )?;
        }
        Ok(())
    }
    pub fn ensure_matches_parameter(
        function_name: &str,
        parameter_name: &str,
        arg: &Value,
        param: &Parameter,
    ) -> Result<(), RuntimeError> {
        match param.get_param_types() {
            ParamTypes::Of(t) => {
                let v = vec![*t];
                Self::ensure_matches_data_type(function_name, parameter_name, arg, &v)
            }
            ParamTypes::Any(v) => {
                Self::ensure_matches_data_type(function_name, parameter_name, arg, v)
            }
        }
    }
    pub fn ensure_matches_data_type(
        function_name: &str,
        parameter_name: &str,
        arg: &Value,
        data_types: &Vec<DataType>,
    ) -> Result<(), RuntimeError> {
        if !Self::matches_data_type(arg, data_types) {
            let err = RuntimeError::get_invalid_type_error_builder()
                .for_function(function_name)
                .for_parameter(parameter_name)
                .expected_data_types(data_types)
                .received(arg)
                .build();
            return Err(err);
        }
        Self::ensure_matches_element_types(function_name, parameter_name, arg, data_types)
    }
    /// Validates the elements of an array argument against the
    /// `array[T]` alternatives of its parameter.
    ///
    /// With a single alternative the element kind is known up front.
    /// With several, the first element selects the expected kind and
    /// the remaining elements are held to it; the error cites the
    /// offending element.
    fn ensure_matches_element_types(
        function_name: &str,
        parameter_name: &str,
        arg: &Value,
        data_types: &Vec<DataType>,
    ) -> Result<(), RuntimeError> {
        let Some(elements) = arg.as_array() else {
            return Ok(());
        };
        // an unrestricted array alternative admits any elements
        if data_types
            .iter()
            .any(|t| matches!(t, DataType::Array | DataType::Any))
        {
            return Ok(());
        }
        let allowed: Vec<ElementType> = data_types
            .iter()
            .filter_map(|t| match t {
                DataType::ArrayOf(element) => Some(*element),
                _ => None,
            })
            .collect();
        if allowed.is_empty() {
            return Ok(());
        }
        let invalid_element = |element: &Value| {
            RuntimeError::get_invalid_type_error_builder()
                .for_function(function_name)
                .for_parameter(parameter_name)
                .expected_data_types(data_types)
                .received(element)
                .build()
        };
        let expected = match elements.first() {
            None => return Ok(()),
            Some(first) => match allowed.iter().find(|e| e.matches(first)) {
                Some(element) => *element,
                None => return Err(invalid_element(first)),
            },
        };
        match elements.iter().find(|e| !expected.matches(e)) {
            Some(stray) => Err(invalid_element(stray)),
            None => Ok(()),
        }
    }
    pub(crate) fn matches_data_type(arg: &Value, data_types: &Vec<DataType>) -> bool {
        data_types
            .iter()
            .any(|x| match x {
                DataType::Any => true,
                DataType::Null => arg.is_null(),

                DataType::Array | DataType::ArrayOf(_) => arg.is_array(),
                DataType::Boolean => arg.is_bool(),
                DataType::ExpRef => arg.is_expression(),
                DataType::Number => arg.is_number(),
                DataType::Object => arg.is_object(),
                DataType::String => arg.is_str(),
            })
    }
}
impl FunctionRegistrar for Runtime {
    fn register(&mut self, function: Box<JmesPathFunction>) {
        if let Some(cell) = &mut self.registry {
            let registry = cell.as_mut();
            registry.register(function);
        } else {
            panic!("Cannot update an immutable shared registry!");
        }
    }

    fn get(&self, function_name: &str) -> Option<&Box<JmesPathFunction>> {
        match &self.registry {
            Some(cell) => cell.get(function_name),
            None => self.shared_registry.get(function_name),
        }
    }
}
