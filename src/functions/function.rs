use super::{Parameter, ReturnValue};
use crate::{FunctionContext, Value};

/// A type that represents a JMESPath function.
pub trait Function {
    /// Returns the name of the function.
    fn get_name(&self) -> &str;
    /// Returns the function signature.
    fn get_signature(&self) -> &Vec<Parameter>;
    /// Invokes the function with the given arguments.
    fn execute(&self, args: &Vec<Value>, context: &dyn FunctionContext) -> ReturnValue;

    /// Returns the name of the given parameter to the function.
    ///
    /// Function authors are encouraged to implement this function
    /// for better error reporting. Otherwise, default names
    /// such as `param0`, `param1`, etc. are returned.
    fn get_parameter_name(&self, index: usize) -> String {
        format!("param{}", index)
    }
}

/// Utility helper to implement a JMESPath [`Function`] trait.
///
/// The macro implements a JMESPath function as a struct implementing
/// the [`Function`] trait. A function is defined by its name, a
/// signature of named parameters, and a body supplied either as a
/// closure or as a code block over named arguments.
///
/// Parameters are declared with the [Parameter](crate::functions::Parameter)
/// and [ParamTypes](crate::functions::ParamTypes) enums. A signature may
/// list required parameters, followed by either optional parameters or
/// one trailing variadic parameter; the macro validates that shape when
/// the function is instantiated. A parameter declared with
/// [DataType::ExpRef](crate::functions::DataType::ExpRef) receives the
/// unevaluated argument expression, which the body can turn into a key
/// closure through [FunctionContext](crate::FunctionContext).
///
/// # Example
///
/// ```rust
/// use jmespath_eval::function;
///
/// use jmespath_eval::FunctionContext;
/// use jmespath_eval::Value;
///
/// use jmespath_eval::functions::ReturnValue;
/// use jmespath_eval::functions::Function;
///
/// use jmespath_eval::functions::DataType;
/// use jmespath_eval::functions::ParamTypes::*;
/// use jmespath_eval::functions::Parameter::{self, *};
///
/// function!(
///     add,
///     [
///         left => Required(Of(DataType::Number)),
///         right => Required(Of(DataType::Number))
///     ],
///     |_: &add, args: &Vec<Value>, _: &dyn FunctionContext| {
///         // type checking has been performed by the runtime
///         // safe to unwrap
///
///         let i = args[0].as_f64().unwrap();
///         let j = args[1].as_f64().unwrap();
///
///         Value::from_f64(i + j)
///     }
/// );
/// ```
///
/// The closure receives a reference to the struct itself, the resolved
/// argument values, and the [FunctionContext](crate::FunctionContext)
/// supplied by the runtime. The block form binds the arguments (and
/// optionally the context) to the supplied names instead:
///
/// ```compile_fail
/// function!(my_custom_function, [ subject => Required(Of(DataType::String)) ],
///   my_args, my_ctx, {
///     // use my_args to access function arguments
///     // use my_ctx as the function context
///     ...
///   });
/// ```
#[macro_export]
macro_rules! function {

    ($name:ident, [$($param_name:ident=> $param:expr),*], $closure: expr) => {
        #[allow(non_camel_case_types)]
        pub struct $name {
            signature: Vec<Parameter>,
            parameter_names: Vec<std::string::String>,
        }
        impl $name {
            pub fn new() -> Self {
                let signature = vec![ $($param),* ];
                let parameter_names = vec![ $(stringify!($param_name).to_string()),* ];
                // We convert a sequence of parameters to a string
                // by appending the lowercase initial of their categories:
                // - Required -> becomes "r"
                // - Optional -> becomes "o"
                // - Variadic -> becomes "v"
                //
                // We then match this against the following regex:
                // r"^r*(o+|v)?$"
                //
                let expression: &std::string::String = &signature
                    .iter()
                    .map(|p| match p {
                        Parameter::Required(_) => "r",
                        Parameter::Optional(_) => "o",
                        Parameter::Variadic(_) => "v",
                    })
                    .collect();

                let regex = regex::Regex::new(r"^r*(o+|v)?$").unwrap();
                if !regex.is_match(expression) {
                    panic!("The signature '{}' is invalid", expression);
                }
                $name {
                    signature,
                    parameter_names,
                }
            }
        }
        impl Function for $name {
            fn get_name(&self) -> &str {
                stringify!($name)
            }
            fn get_signature(&self) -> &Vec<Parameter> {
                &self.signature
            }
            fn execute(&self, args: &Vec<Value>, context: &dyn FunctionContext) -> ReturnValue {
                $closure(self, args, context).map(|v| v.into())
            }
            fn get_parameter_name(&self, index: usize) -> std::string::String {
                self.parameter_names[index].to_string()
            }
        }
    };

    ($name:ident, [$($param_name:ident=> $param:expr),*], $args:ident $(, $ctx:ident )?, $body: block) => {
        #[allow(non_camel_case_types)]
        pub struct $name {
            signature: Vec<Parameter>,
            parameter_names: Vec<std::string::String>,
        }
        impl $name {
            pub fn new() -> Self {
                let signature = vec![ $($param),* ];
                let parameter_names = vec![ $(stringify!($param_name).to_string()),* ];
                // We convert a sequence of parameters to a string
                // by appending the lowercase initial of their categories:
                // - Required -> becomes "r"
                // - Optional -> becomes "o"
                // - Variadic -> becomes "v"
                //
                // We then match this against the following regex:
                // r"^r*(o+|v)?$"
                //
                let expression: &std::string::String = &signature
                    .iter()
                    .map(|p| match p {
                        Parameter::Required(_) => "r",
                        Parameter::Optional(_) => "o",
                        Parameter::Variadic(_) => "v",
                    })
                    .collect();

                let regex = regex::Regex::new(r"^r*(o+|v)?$").unwrap();
                if !regex.is_match(expression) {
                    panic!("The signature '{}' is invalid", expression);
                }
                $name {
                    signature,
                    parameter_names,
                }
            }
        }
        impl Function for $name {
            fn get_name(&self) -> &str {
                stringify!($name)
            }
            fn get_signature(&self) -> &Vec<Parameter> {
                &self.signature
            }
            fn execute(&self, args: &Vec<Value>, #[allow(unused_variables)] context: &dyn FunctionContext) -> ReturnValue {
                let $args = args;
                $( let $ctx = context; )?
                $body
            }
            fn get_parameter_name(&self, index: usize) -> std::string::String {
                self.parameter_names[index].to_string()
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use crate::function;

    use crate::FunctionContext;
    use crate::Value;

    use crate::functions::DataType;
    use crate::functions::Function;
    use crate::functions::ParamTypes::*;
    use crate::functions::Parameter::{self, *};
    use crate::functions::ReturnValue;

    function!(
        required_args,
        [param => Required(Of(DataType::Number))],
        _args, _ctx, { Ok(true.into()) }
    );
    function!(
        optional_args,
        [param => Optional(Of(DataType::Number))],
        _args, { Ok(true.into()) }
    );
    function!(
        variadic_closure,
        [param => Variadic(Of(DataType::Number))],
        |_: &variadic_closure, _: &Vec<Value>, _: &dyn FunctionContext| { Ok(true) }
    );

    struct Fixture {
        pub args: Vec<Value>,
    }
    impl FunctionContext for Fixture {
        fn create_by_function<'a>(
            &'a self,
            _: &'a crate::AST,
            _: &'a Vec<crate::functions::ParamTypes>,
            _: &'a dyn Function,
            _: usize,
        ) -> Result<crate::ByFunctionHolder<'a>, crate::Error> {
            unimplemented!()
        }
    }

    fn setup() -> Fixture {
        Fixture {
            args: Value::map_into(vec![1, 2]),
        }
    }

    macro_rules! funcs {
        ($test:ident, $func:ident, $param:expr, $match:pat) => {
            #[test]
            fn $test() {
                let fixture = setup();
                let func = self::$func::new();
                assert_eq!(stringify!($func), func.get_name());
                assert_eq!($param, func.get_parameter_name(0));
                assert!(matches!(
                    func.execute(&fixture.args, &fixture),
                    Ok(Value::Boolean(true))
                ));
                assert!(matches!(func.get_signature()[..], $match));
            }
        };
    }

    funcs!(
        it_supports_custom_function_required_args,
        required_args,
        "param",
        [Required(Of(..))]
    );
    funcs!(
        it_supports_custom_function_optional_args,
        optional_args,
        "param",
        [Optional(Of(..))]
    );
    funcs!(
        it_supports_custom_function_variadic_closure,
        variadic_closure,
        "param",
        [Variadic(Of(..))]
    );
}
