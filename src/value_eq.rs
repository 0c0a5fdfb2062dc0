use crate::{Value, utils::Number};

impl Eq for Value {}
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match self {
            Value::Expression(_) => false,
            Value::Null => other.is_null(),
            Value::Boolean(b) => other.as_bool() == Some(*b),
            Value::Number(Number { number: n }) => {
                other.is_number() && float_eq(*n, other.as_number().unwrap().into())
            }
            Value::String(s) => other.as_str() == Some(s.as_str()),
            // a projection compares as the sequence it denotes
            Value::Array(a) | Value::Projection(a) => match other {
                Value::Array(b) | Value::Projection(b) => a == b,
                _ => false,
            },
            Value::Object(o) => other.as_object() == Some(o),
        }
    }
}

impl PartialEq<Value> for bool {
    fn eq(&self, other: &Value) -> bool {
        other == self
    }
}

impl PartialEq<bool> for Value {
    fn eq(&self, other: &bool) -> bool {
        self.as_bool() == Some(*other)
    }
}

impl PartialEq<Value> for Option<()> {
    fn eq(&self, other: &Value) -> bool {
        other == self
    }
}
impl PartialEq<Option<()>> for Value {
    fn eq(&self, _: &Option<()>) -> bool {
        self.is_null()
    }
}

impl PartialEq<Value> for &str {
    fn eq(&self, other: &Value) -> bool {
        other == self
    }
}
impl PartialEq<&str> for Value {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == Some(*other)
    }
}
impl PartialEq<Value> for String {
    fn eq(&self, other: &Value) -> bool {
        other == self
    }
}
impl PartialEq<String> for Value {
    fn eq(&self, other: &String) -> bool {
        self.as_str() == Some(other.as_str())
    }
}

macro_rules! eq_num {
    ($type:ty) => {
        impl PartialEq<$type> for Value {
            fn eq(&self, other: &$type) -> bool {
                self.is_number() && float_eq(self.as_f64().unwrap(), (*other) as f64)
            }
        }
        impl PartialEq<Value> for $type {
            fn eq(&self, other: &Value) -> bool {
                other == self
            }
        }
    };
}

eq_num!(i8);
eq_num!(i16);
eq_num!(i32);
eq_num!(i64);

eq_num!(u8);
eq_num!(u16);
eq_num!(u32);
eq_num!(u64);

eq_num!(f32);
eq_num!(f64);

eq_num!(isize);
eq_num!(usize);

/// Compares two floating point numbers.
#[inline]
pub(crate) fn float_eq(a: f64, b: f64) -> bool {
    let diff = (b - a).abs();
    diff < f64::EPSILON
}
