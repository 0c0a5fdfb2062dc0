use lazy_static::lazy_static;
use std::collections::HashMap;

use crate::JmesPathFunction;
use crate::runtime::FunctionRegistrar;

lazy_static! {
    pub static ref REGISTRY: Box<Registry> = Box::new(Registry::create_registry());
}
pub struct Registry {
    functions: HashMap<String, Box<JmesPathFunction>>,
}
macro_rules! register {
    ($expr:expr, $ident:ident) => {
        $expr.register(Box::new(crate::functions::builtin::$ident::$ident::new()));
    };
}
impl Registry {
    fn new() -> Self {
        Registry {
            functions: HashMap::new(),
        }
    }
    pub(crate) fn create_registry() -> Self {
        let mut registry = Self::new();
        registry.register_builtin_functions();
        registry
    }
    fn register_builtin_functions(&mut self) {
        register!(self, abs);
        register!(self, avg);
        register!(self, ceil);
        register!(self, contains);
        register!(self, floor);
        register!(self, join);
        register!(self, keys);
        register!(self, length);
        register!(self, max);
        register!(self, min);
        register!(self, not_null);
        register!(self, sort);
        register!(self, sort_by);
        register!(self, to_number);
        register!(self, to_string);
        register!(self, type_of);
        register!(self, values);
    }
}
impl FunctionRegistrar for Registry {
    fn register(&mut self, func: Box<JmesPathFunction>) {
        let name = func.get_name().to_string();
        self.functions.insert(name, func);
    }
    fn get(&self, function_name: &str) -> Option<&Box<JmesPathFunction>> {
        self.functions.get(function_name)
    }
}

#[cfg(test)]
mod tests {

    use super::*;
    use crate::function;

    use crate::FunctionContext;
    use crate::Value;

    use crate::functions::Function;
    use crate::functions::ReturnValue;

    use crate::functions::DataType;
    use crate::functions::ParamTypes::*;
    use crate::functions::Parameter::{self, *};

    function!(
        add,
        [
            left => Required(Of(DataType::Number)),
            right => Required(Of(DataType::Number))
        ],
        |_:&add, args: &Vec<Value>, _:&dyn FunctionContext|
        {
            // type checking has been performed by the runtime
            // safe to unwrap

            let i = args[0].as_f64().unwrap();
            let j = args[1].as_f64().unwrap();

            Value::from_f64(i+j)
        }
    );

    #[test]
    fn it_registers_function() {
        let add = Box::new(self::add::new());
        let mut registry = Registry::create_registry();
        registry.register(add);

        assert_eq!("add", registry.get("add").unwrap().get_name())
    }

    #[test]
    fn it_registers_every_builtin() {
        let registry = Registry::create_registry();
        for name in [
            "abs",
            "avg",
            "ceil",
            "contains",
            "floor",
            "join",
            "keys",
            "length",
            "max",
            "min",
            "not_null",
            "sort",
            "sort_by",
            "to_number",
            "to_string",
            "type",
            "values",
        ] {
            assert!(registry.get(name).is_some(), "missing builtin '{}'", name);
        }
    }
}
