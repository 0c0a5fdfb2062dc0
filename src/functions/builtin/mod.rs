pub mod abs;
pub mod avg;
pub mod ceil;
pub mod contains;
pub mod floor;
pub mod join;
pub mod keys;
pub mod length;
pub mod max;
pub mod min;
pub mod not_null;
pub mod sort;
pub mod sort_by;
pub mod to_number;
pub mod to_string;
pub mod type_of;
pub mod values;

#[cfg(test)]
mod test_utils {

    use crate::functions::{Function, RuntimeError};
    use crate::{ByFunctionHolder, FunctionContext, Runtime, Value};

    pub(crate) struct Fixture {
        pub runtime: Runtime,
    }
    impl Fixture {
        pub(crate) fn setup() -> Self {
            let runtime = Runtime::create_runtime();
            Fixture { runtime }
        }
    }
    impl FunctionContext for Fixture {
        fn create_by_function<'a>(
            &'a self,
            _ast: &'a crate::AST,
            _params: &'a Vec<crate::functions::ParamTypes>,
            _function: &'a dyn Function,
            _param_index: usize,
        ) -> Result<ByFunctionHolder<'a>, RuntimeError> {
            // stand-in for the evaluator: every value is its own key
            let closure = |value: &Value| Ok(value.clone());
            Ok(ByFunctionHolder {
                closure: Box::new(closure),
            })
        }
    }
}
