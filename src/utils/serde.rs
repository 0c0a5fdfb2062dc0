use crate::{Map, utils::Number, value::Value};

impl serde::Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match self {
            // at the JSON boundary a projection is an array
            Self::Array(a) | Self::Projection(a) => a.serialize(serializer),
            Self::Boolean(b) => serializer.serialize_bool(*b),
            Self::Null => serializer.serialize_unit(),
            Self::Number(n) => n.serialize(serializer),
            Self::Object(o) => o.serialize(serializer),
            Self::String(s) => serializer.serialize_str(s),
            Self::Expression(_) => unreachable!(),
        }
    }
}
impl serde::Serialize for Number {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_f64(self.number)
    }
}
