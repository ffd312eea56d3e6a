use miette::Diagnostic;
use thiserror::Error;

/// Result type for comment generation operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised around comment generation.
///
/// Building and rendering comment nodes never fails; these cover reading
/// requests and writing rendered output.
#[derive(Error, Debug, Diagnostic, Clone)]
pub enum Error {
    #[error("I/O error: {0}")]
    #[diagnostic(code(javadoc_ast::io_error))]
    Io(String),

    #[error("Invalid comment request: {message}")]
    #[diagnostic(
        code(javadoc_ast::json_error),
        help("see the request format accepted by `javadoc-ast render`")
    )]
    Json { message: String },

    #[error("Invalid arguments: {message}")]
    #[diagnostic(code(javadoc_ast::invalid_args))]
    InvalidArgs { message: String },
}

impl Error {
    /// Create an invalid arguments error
    pub fn invalid_args(message: impl Into<String>) -> Self {
        Error::InvalidArgs {
            message: message.into(),
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Json {
            message: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_conversion() {
        let err: Error = std::io::Error::new(std::io::ErrorKind::NotFound, "missing").into();
        assert!(matches!(err, Error::Io(ref msg) if msg.contains("missing")));
    }

    #[test]
    fn test_json_error_conversion() {
        let parse_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: Error = parse_err.into();
        assert!(err.to_string().starts_with("Invalid comment request:"));
    }
}
