use crate::utils::Number;
use crate::{Map, Value};

impl<V> From<Map<&str, V>> for Value
where
    V: Into<Value>,
{
    fn from(v: Map<&str, V>) -> Self {
        let mut map: Map<String, Value> = Map::new();
        for (key, value) in v.into_iter() {
            map.insert(key.to_string(), value.into());
        }
        Self::Object(map)
    }
}
impl From<Number> for Value {
    fn from(number: Number) -> Self {
        Value::Number(number)
    }
}
impl From<Option<()>> for Value {
    fn from(_: Option<()>) -> Self {
        Self::Null
    }
}

impl<T> From<Vec<T>> for Value
where
    T: Into<Value>,
{
    fn from(v: Vec<T>) -> Self {
        Self::Array(v.into_iter().map(|item| item.into()).collect())
    }
}

macro_rules! from_ {
    ($ident:ty, $value:ident) => {
        impl From<$ident> for Value {
            fn from(v: $ident) -> Self {
                Self::$value(v.into())
            }
        }
    };
}

from_! {bool, Boolean}
from_! {i8, Number}
from_! {i16, Number}
from_! {i32, Number}
from_! {u8, Number}
from_! {u16, Number}
from_! {u32, Number}

impl From<usize> for Value {
    fn from(v: usize) -> Self {
        Self::Number(Number {
            number: v as f64,
        })
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::String(v.to_string())
    }
}
impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::String(v)
    }
}
impl From<&String> for Value {
    fn from(v: &String) -> Self {
        Self::String(v.to_string())
    }
}
