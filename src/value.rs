use crate::ast::AST;
use crate::functions::DataType;
use crate::utils::Number;
use crate::{Error, Map};

/// Represents any valid value that is processed during evaluation
/// of a JMESPath expression or used as an argument to a JMESPath
/// [Function](crate::functions::Function).
#[derive(Debug, Clone)]
pub enum Value {
    /// Represents a valid JSON array.
    /// # Example
    /// ```
    /// use jmespath_eval::Value;
    /// let value: Value = vec![1, 2, 3].into();
    /// assert!(matches!(value, Value::Array(..)));
    /// ```
    Array(Vec<Value>),
    /// Represents a valid JSON boolean.
    Boolean(bool),
    /// Represents a valid JSON null token.
    Null,
    /// Represents a valid JSON number.
    Number(Number),
    /// Represents a valid JSON string.
    String(String),
    /// Represents a valid JSON object.
    /// # Example
    /// ```
    /// use jmespath_eval::{map, Map, Value};
    /// let value: Value = map!("foo" => "bar").into();
    /// assert!(matches!(value, Value::Object(..)));
    /// ```
    Object(Map<String, Value>),

    /// Represents the sequence produced by a wildcard, flatten or
    /// filter node. Subsequent operations are broadcast element-wise
    /// over it. At the JSON boundary a projection is an array.
    Projection(Vec<Value>),

    /// Represents an unevaluated JMESPath expression, passed to
    /// functions that declare an expression parameter.
    Expression(Box<AST>),
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = match self {
            Self::Expression(ast) => format!("{:?}", ast),
            _ => serde_json::to_string(self).map_err(|_| std::fmt::Error)?,
        };
        write!(f, "{}", text)
    }
}

macro_rules! as_ {
    ($ident:ident, $enum:ident, $type:ty) => {
        #[doc = "Returns an"]
        #[doc = concat!("[`Option<", stringify!($type), ">`]") ]
        #[doc = "of the corresponding type."]
        pub fn $ident(&self) -> Option<$type> {
            if let Self::$enum(token) = self {
                Some(token)
            } else {
                None
            }
        }
    };
}
macro_rules! is_ {
    ($ident:ident, $type:ident) => {
        #[doc = "Returns `true` if the [`Value`] is a value from type"]
        #[doc = concat!("[`Value::", stringify!($type), "`].")]
        pub fn $ident(&self) -> bool {
            matches!(*self, Self::$type(..))
        }
    };
}

impl Value {
    pub fn from_f64(number: f64) -> Result<Self, Error> {
        match Number::from(number) {
            Err(err) => Err(err),
            Ok(n) => Ok(Value::Number(n)),
        }
    }
    /// Converts a [`serde_json::Value`] to a [`Value`].
    /// # Example
    /// ```
    /// use serde_json::json;
    /// use jmespath_eval::Value;
    ///
    /// let s = json!({"foo": "bar"});
    /// let v = Value::map_from_json(&s);
    /// assert!(matches!(v, Value::Object(..)));
    /// ```
    pub fn map_from_json(value: &serde_json::Value) -> Value {
        match value {
            serde_json::Value::Array(a) => {
                Value::Array(a.iter().map(Self::map_from_json).collect())
            }
            serde_json::Value::Bool(b) => Value::Boolean(*b),
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Number(n) => {
                let num = Number::from(n.as_f64().unwrap()).unwrap();
                Value::Number(num)
            }
            serde_json::Value::String(s) => Value::String(s.to_string()),
            serde_json::Value::Object(m) => {
                let map: Map<String, Value> = m
                    .iter()
                    .map(|(k, v)| (k.clone(), Self::map_from_json(v)))
                    .collect();
                Value::Object(map)
            }
        }
    }
    /// Creates a [`Value`] from a JSON representation.
    ///
    /// Convenience function that uses `serde_json` to convert
    /// a JSON representation to a [`Value`].
    ///
    /// # Example
    ///
    /// ```
    /// use jmespath_eval::Value;
    ///
    /// let value = Value::from_json(r#"{"foo": "bar"}"#).unwrap();
    /// assert!(value.is_object());
    /// ```
    ///
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        let parsed: serde_json::Value = serde_json::from_str(text)?;
        Ok(Self::map_from_json(&parsed))
    }
    /// Returns the JSON string representation
    /// for this [`Value`].
    ///
    /// A [`Value::Projection`] renders as a JSON array.
    ///
    /// # Example
    ///
    /// ```
    /// use jmespath_eval::Value;
    ///
    /// assert_eq!("null", Value::Null.to_json());
    /// assert_eq!("\"text\"", Value::String("text".to_string()).to_json());
    /// ```
    pub fn to_json(&self) -> String {
        // serde_json::to_string() can fail only if Value's
        // implementation of Serialize decides to fail, or if Value
        // contains a map with non-string keys.
        serde_json::to_string(self).expect("unable to serialize invalid JSON")
    }

    /// Returns the corresponding [`DataType`].
    ///
    /// A [`Value::Projection`] is an array as far as the function
    /// type checker is concerned.
    ///
    /// # Example
    ///
    /// ```
    /// use jmespath_eval::Value;
    /// use jmespath_eval::functions::DataType;
    ///
    /// let arg = Value::from_f64(42.0).unwrap();
    /// assert_eq!(DataType::Number, arg.get_data_type());
    /// ```
    ///
    pub fn get_data_type(&self) -> DataType {
        match self {
            Self::Array(_) => DataType::Array,
            Self::Boolean(_) => DataType::Boolean,
            Self::Null => DataType::Null,
            Self::Number(_) => DataType::Number,
            Self::Object(_) => DataType::Object,
            Self::Projection(_) => DataType::Array,
            Self::String(_) => DataType::String,
            Self::Expression(_) => DataType::ExpRef,
        }
    }

    /// Converts a [`Vec<T>`] to a [`Vec<Value>`].
    #[inline]
    pub fn map_into<T>(vec: Vec<T>) -> Vec<Self>
    where
        T: Into<Value>,
    {
        vec.into_iter().map(|x| x.into()).collect::<Vec<Value>>()
    }

    /// Returns an [`Option<&Vec<Value>>`] if the [`Value`] is a
    /// sequence, _i.e._ either an array or a projection.
    pub fn as_array(&self) -> Option<&Vec<Value>> {
        match self {
            Self::Array(vec) | Self::Projection(vec) => Some(vec),
            _ => None,
        }
    }

    as_!(as_expref, Expression, &AST);
    as_!(as_number, Number, &Number);
    as_!(as_object, Object, &Map<String, Value>);
    as_!(as_str, String, &str);

    /// Returns an [`Option<bool>`] of the corresponding type.
    pub fn as_bool(&self) -> Option<bool> {
        if let Self::Boolean(token) = self {
            Some(*token)
        } else {
            None
        }
    }
    /// Returns an [`Option<f64>`] of the corresponding type.
    pub fn as_f64(&self) -> Option<f64> {
        if let Self::Number(Number { number: token }) = self {
            Some(*token)
        } else {
            None
        }
    }

    /// Returns `true` if the [`Value`] is the `null` value.
    pub fn is_null(&self) -> bool {
        matches!(*self, Self::Null)
    }
    /// Returns `true` if the [`Value`] is a sequence, _i.e._ either
    /// [`Value::Array`] or [`Value::Projection`].
    pub fn is_array(&self) -> bool {
        matches!(*self, Self::Array(..) | Self::Projection(..))
    }

    is_!(is_bool, Boolean);
    is_!(is_number, Number);
    is_!(is_object, Object);
    is_!(is_projection, Projection);
    is_!(is_str, String);

    is_!(is_expression, Expression);

    /// Returns `true` if the [`Value`] is the boolean `true`.
    pub fn is_true(&self) -> bool {
        matches!(self, Value::Boolean(true))
    }
    /// Returns `false` if the [`Value`] is the boolean `false`.
    pub fn is_false(&self) -> bool {
        matches!(self, Value::Boolean(false))
    }

    /// Returns `true` if the [`Value`] is either:
    /// - the `null` value
    /// - the boolean `false`
    /// - the empty string `""`
    /// - an empty array `[]` or empty projection
    /// - an empty object `{}`
    pub fn is_falsy(&self) -> bool {
        match self {
            Value::Array(a) | Value::Projection(a) => a.is_empty(),
            Value::Boolean(b) => !*b,
            Value::Null => true,
            Value::String(s) => s.is_empty(),
            Value::Object(o) => o.is_empty(),
            _ => false,
        }
    }
    /// Returns `true` if the [`Value`] is not a _falsy_ value.
    /// This is the opposite to the [`Value::is_falsy()`] function.
    pub fn is_truthy(&self) -> bool {
        !self.is_falsy()
    }
}
