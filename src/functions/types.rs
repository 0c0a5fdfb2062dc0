use crate::Value;

/// Restricts the element kind of a [`DataType::ArrayOf`] parameter.
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum ElementType {
    Number,
    String,
}

impl ElementType {
    /// Returns `true` if the value has this element kind.
    pub fn matches(&self, value: &Value) -> bool {
        match self {
            ElementType::Number => value.is_number(),
            ElementType::String => value.is_str(),
        }
    }
}

impl std::fmt::Display for ElementType {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let s = match self {
            ElementType::Number => "number",
            ElementType::String => "string",
        };
        write!(f, "{}", s)
    }
}

/// Represents a valid type for a [`crate::Value`] argument to a
/// JMESPath function.
///
/// [`DataType::ArrayOf`] declares an array whose elements must all be
/// of one [`ElementType`]; when a parameter admits several `ArrayOf`
/// alternatives, the first element of the received array selects the
/// element kind the remaining elements are held to.
#[derive(Debug, PartialEq, Copy, Clone)]
pub enum DataType {
    Any,
    Array,
    ArrayOf(ElementType),
    Boolean,
    ExpRef,
    Null,
    Number,
    Object,
    String,
}

impl std::fmt::Display for DataType {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            DataType::Any => write!(f, "any"),
            DataType::Array => write!(f, "array"),
            DataType::ArrayOf(element) => write!(f, "array[{}]", element),
            DataType::ExpRef => write!(f, "expression"),
            DataType::Object => write!(f, "object"),
            DataType::Boolean => write!(f, "boolean"),
            DataType::Null => write!(f, "null"),
            DataType::Number => write!(f, "number"),
            DataType::String => write!(f, "string"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("any", DataType::Any)]
    #[case("array", DataType::Array)]
    #[case("array[number]", DataType::ArrayOf(ElementType::Number))]
    #[case("array[string]", DataType::ArrayOf(ElementType::String))]
    #[case("boolean", DataType::Boolean)]
    #[case("expression", DataType::ExpRef)]
    #[case("number", DataType::Number)]
    #[case("null", DataType::Null)]
    #[case("object", DataType::Object)]
    #[case("string", DataType::String)]
    fn it_formats_data_type(#[case] expected: &str, #[case] data_type: DataType) {
        assert_eq!(expected, format!("{}", data_type))
    }

    #[rstest]
    #[case(ElementType::Number, Value::from_f64(1.0).unwrap(), true)]
    #[case(ElementType::Number, Value::Boolean(true), false)]
    #[case(ElementType::String, Value::String("one".to_string()), true)]
    #[case(ElementType::String, Value::Null, false)]
    fn it_matches_element_types(
        #[case] element: ElementType,
        #[case] value: Value,
        #[case] expected: bool,
    ) {
        assert_eq!(expected, element.matches(&value));
    }
}
