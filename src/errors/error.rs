use std::cmp::Ordering;

use crate::errors::Kind;
use crate::errors::Position;
use crate::errors::invalid_arity::InvalidArityErrorBuilderFactory;
use crate::errors::unknown_function::UnknownFunctionErrorBuilderFactory;

use super::error_builder::ErrorBuilder;
use super::error_builder::FunctionErrorBuilder;
use super::error_builder::InvalidArityErrorBuilder;

/// The error type for this crate.
#[derive(Debug, Clone)]
pub struct Error {
    /// One of the valid error [`Kind`] values.
    pub kind: Kind,
    /// A message indicating the root cause for the error.
    pub message: String,
    /// The position within a JMESPath expression.
    pub position: Option<Position>,
}
impl Error {
    /// Creates a new instance of the [`Error`] type.
    pub(crate) fn new(kind: Kind, message: &str) -> Self {
        Error {
            kind,
            message: message.to_string(),
            position: None,
        }
    }
    /// Creates a new instance of the [`Error`] type with specified [`Position`].
    #[cfg(test)]
    pub(crate) fn new_at(kind: Kind, message: &str, position: Position) -> Self {
        Error {
            kind,
            message: message.to_string(),
            position: Some(position),
        }
    }
    /// Raises an error when not enough arguments are supplied to a JMESPath [Function](crate::functions::Function).
    pub fn too_few_arguments(
        function_name: &str,
        min_count: usize,
        count: usize,
        is_variadic: bool,
    ) -> Error {
        super::Error::get_invalid_arity_error_builder()
            .for_function(function_name)
            .min_expected(min_count)
            .supplied(count)
            .variadic(is_variadic)
            .build()
    }
    /// Raises an error when more arguments are supplied
    /// than expected by a JMESPath [Function](crate::functions::Function).
    pub fn too_many_arguments(function_name: &str, max_count: usize, count: usize) -> Error {
        super::Error::get_invalid_arity_error_builder()
            .for_function(function_name)
            .max_expected(max_count)
            .supplied(count)
            .build()
    }
    /// Raises an error when a function expression names an
    /// unregistered function.
    ///
    /// # Example
    /// ```
    /// use jmespath_eval::errors::Kind;
    /// use jmespath_eval::errors::Error;
    ///
    /// let err = Error::unknown_function("unknown");
    ///
    /// assert_eq!(Kind::UnknownFunction, err.kind);
    /// assert_eq!("Error: unknown-function, the function 'unknown' does not exist", err.to_string());
    /// ```
    pub fn unknown_function(function_name: &str) -> Error {
        super::Error::get_unknown_function_error_builder()
            .for_function(function_name)
            .build()
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let position = self.position.map_or("".to_string(), |p| format!("{}", p));
        let kind = format!("Error{}: {}, ", position, self.kind);
        write!(f, "{kind}{}", self.message)
    }
}
impl Eq for Error {}
impl PartialEq for Error {
    fn eq(&self, other: &Self) -> bool {
        let eq_positions = if self.position.is_some() && other.position.is_some() {
            self.position.unwrap().eq(&other.position.unwrap())
        } else {
            true
        };
        self.kind == other.kind && self.message == other.message && eq_positions
    }
}
impl Ord for Error {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        match self.kind.cmp(&other.kind) {
            core::cmp::Ordering::Equal => {}
            ord => return ord,
        }
        self.message.cmp(&other.message)
    }
}
impl PartialOrd for Error {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
