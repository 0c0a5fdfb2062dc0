use super::{Error, Kind, Position, error_builder};

pub(crate) trait InvalidArityErrorBuilderFactory {
    type Builder: super::error_builder::InvalidArityErrorBuilder;
    fn get_invalid_arity_error_builder() -> Self::Builder;
}
impl self::InvalidArityErrorBuilderFactory for Error {
    type Builder = self::InvalidArityErrorBuilder;

    fn get_invalid_arity_error_builder() -> Self::Builder {
        Self::Builder::new()
    }
}
pub(crate) struct InvalidArityErrorBuilder {
    count: usize,
    function_name: String,
    is_variadic: bool,
    max_count: Option<usize>,
    message: String,
    min_count: Option<usize>,
    position: Option<Position>,
}
impl InvalidArityErrorBuilder {
    pub fn new() -> Self {
        InvalidArityErrorBuilder {
            message: "".to_string(),
            position: None,

            function_name: "".to_string(),
            count: 0,
            is_variadic: false,
            max_count: None,
            min_count: None,
        }
    }
    fn format(&mut self) {
        let actual = self.count;
        if let Some(min) = self.min_count {
            let more = if self.is_variadic { "or more " } else { "" };
            let only_actual = format!("only {}", actual);
            let specified = if self.count == 0 {
                "none"
            } else {
                &only_actual
            };
            let plural = if min > 1 { "s" } else { "" };
            self.message = format!(
                "the function '{}' expects {} argument{} {}but {} were specified",
                self.function_name, min, plural, more, specified
            );
        }
        if let Some(max) = self.max_count {
            let plural = if max > 1 { "s" } else { "" };
            self.message = format!(
                "the function '{}' expects at most {} argument{} but {} were specified",
                self.function_name, max, plural, actual
            );
        }
    }
}
impl error_builder::FunctionErrorBuilder for InvalidArityErrorBuilder {
    fn for_function(&mut self, name: &str) -> &mut Self {
        self.function_name = name.to_string();
        self
    }
}
impl error_builder::ErrorBuilder for InvalidArityErrorBuilder {
    fn at(&mut self, position: Position) -> &mut Self {
        self.position = Some(position);
        self
    }
    fn build(&mut self) -> Error {
        self.format();
        Error {
            kind: Kind::InvalidArity,
            message: std::mem::take(&mut self.message),
            position: self.position,
        }
    }
}
impl error_builder::InvalidArityErrorBuilder for InvalidArityErrorBuilder {
    fn min_expected(&mut self, min_count: usize) -> &mut Self {
        self.min_count = Some(min_count);
        self
    }
    fn max_expected(&mut self, max_count: usize) -> &mut Self {
        self.max_count = Some(max_count);
        self
    }
    fn supplied(&mut self, count: usize) -> &mut Self {
        self.count = count;
        self
    }
    fn variadic(&mut self, is_variadic: bool) -> &mut Self {
        self.is_variadic = is_variadic;
        self
    }
}
