use thiserror::Error;

#[derive(Debug, Error)]
#[error(transparent)]
pub struct Error(Box<ErrorKind>);

impl Error {
    pub fn kind(&self) -> &ErrorKind {
        self.0.as_ref()
    }

    pub fn into_kind(self) -> ErrorKind {
        *self.0
    }

    pub fn invalid_arg(name: impl Into<String>, message: impl Into<String>) -> Error {
        Error(
            ErrorKind::InvalidArgument {
                name: name.into(),
                message: message.into(),
            }
            .into(),
        )
    }

    pub fn index_out_of_range(index: usize, length: usize) -> Error {
        Error(ErrorKind::IndexOutOfRange { index, length }.into())
    }
}

#[derive(Debug, Error)]
pub enum ErrorKind {
    #[error("invalid argument {name}: {message}")]
    InvalidArgument { name: String, message: String },

    #[error("index out of range [{index}] with length {length}")]
    IndexOutOfRange { index: usize, length: usize },
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Self {
        Error(kind.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_the_condition() {
        let err = Error::invalid_arg("end", "end <= capacity");
        assert_eq!(err.to_string(), "invalid argument end: end <= capacity");
        assert!(matches!(err.kind(), ErrorKind::InvalidArgument { .. }));

        let err = Error::index_out_of_range(3, 3);
        assert_eq!(err.to_string(), "index out of range [3] with length 3");
        assert!(matches!(
            err.into_kind(),
            ErrorKind::IndexOutOfRange {
                index: 3,
                length: 3
            }
        ));
    }
}
