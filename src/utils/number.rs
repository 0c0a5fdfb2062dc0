use crate::{Error, errors::Kind, value_eq::float_eq};

/// Represents a JSON [`f64`] number that can be safely ordered.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Number {
    pub(crate) number: f64,
}
impl Number {
    /// Creates a new instance of the [`Number`] type.
    ///
    /// JSON has no representation for NaN or the infinities, so those
    /// values are rejected. This keeps every [`Number`] totally ordered.
    pub fn from(number: f64) -> Result<Self, Error> {
        if number.is_nan() || number.is_infinite() {
            return Err(Error::new(
                Kind::NotANumber,
                "An invalid number was specified.",
            ));
        }
        Ok(Number { number })
    }
    /// Returns the underlying [`f64`].
    pub fn as_f64(&self) -> f64 {
        self.number
    }
}

impl std::fmt::Display for Number {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let number = if float_eq(self.number, self.number.floor()) {
            self.number.floor()
        } else {
            self.number
        };
        write!(f, "{}", number)
    }
}

macro_rules! from {
    ($type:ty) => {
        impl From<$type> for Number {
            fn from(value: $type) -> Self {
                Number {
                    number: value as f64,
                }
            }
        }
        impl PartialEq<$type> for Number {
            fn eq(&self, other: &$type) -> bool {
                self.number == *other as f64
            }
        }
        impl PartialEq<Number> for $type {
            fn eq(&self, other: &Number) -> bool {
                other == self
            }
        }
    };
}

from!(i8);
from!(i16);
from!(i32);
from!(i64);

from!(u8);
from!(u16);
from!(u32);
from!(u64);

from!(isize);
from!(usize);

impl From<Number> for f64 {
    fn from(value: Number) -> Self {
        value.number
    }
}
impl From<&Number> for f64 {
    fn from(value: &Number) -> Self {
        value.number
    }
}

impl PartialOrd for Number {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}
impl Eq for Number {}
impl Ord for Number {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        assert!(self.number.is_finite());
        assert!(!self.number.is_nan());
        self.number.partial_cmp(&other.number).unwrap()
    }
}
