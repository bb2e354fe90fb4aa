//! Errors raised by the scalar operations.

use derive_more::with_trait::{Display, Error, From};

use crate::span::SourcePosition;

/// Failure of a `serialize` operation.
///
/// Raised when the server tries to send a value that is not valid for the
/// scalar, which is a bug on the server side rather than bad client input.
#[derive(Debug, Display, Error, From)]
pub enum ServerError {
    /// The value violates a constraint of the scalar.
    #[display("{_0}")]
    #[from(ignore)]
    Invariant(#[error(not(source))] String),

    /// The value could not be encoded.
    #[display("{_0}")]
    Codec(CodecError),
}

impl ServerError {
    /// Creates a new [`ServerError::Invariant`] with the given `message`.
    pub fn invariant(message: impl Into<String>) -> Self {
        Self::Invariant(message.into())
    }

    /// Human-readable message of this error.
    pub fn message(&self) -> String {
        self.to_string()
    }
}

/// Failure of a `parse_value` or `parse_literal` operation, caused by bad
/// client input.
///
/// Errors of literals carry the position of the offending literal in the
/// query document.
#[derive(Clone, Debug, Display, Error, PartialEq)]
#[display("{message}")]
pub struct ClientError {
    message: String,
    location: Option<SourcePosition>,
}

impl ClientError {
    /// Creates a new [`ClientError`] not pointing to any position.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            location: None,
        }
    }

    /// Creates a new [`ClientError`] pointing to the given position.
    pub fn located(message: impl Into<String>, location: SourcePosition) -> Self {
        Self {
            message: message.into(),
            location: Some(location),
        }
    }

    /// Points this error to the given position.
    #[must_use]
    pub fn at(mut self, location: SourcePosition) -> Self {
        self.location = Some(location);
        self
    }

    /// Human-readable message of this error.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Position of the offending literal, if known.
    pub fn location(&self) -> Option<SourcePosition> {
        self.location
    }
}

/// JSON encoding or decoding failure.
#[derive(Debug, Display, Error, From)]
#[display("{_0}")]
pub struct CodecError(serde_json::Error);

impl CodecError {
    /// Underlying [`serde_json`] error.
    pub fn inner(&self) -> &serde_json::Error {
        &self.0
    }
}

/// Regular expression given at runtime that does not compile.
#[derive(Debug, Display, Error, From)]
#[display("Invalid regex pattern: {_0}")]
pub struct InvalidPattern(regex::Error);

/// Which side is to blame for a failed coercion, selecting the error type to
/// raise.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    /// Raise a [`ServerError`].
    Server,
    /// Raise a [`ClientError`].
    Client,
}

/// Either of the two scalar error types, as produced by helpers shared
/// between `serialize` and the parse operations.
#[derive(Debug, Display, Error, From)]
pub enum CoercionError {
    /// See [`ServerError`].
    #[display("{_0}")]
    Server(ServerError),
    /// See [`ClientError`].
    #[display("{_0}")]
    Client(ClientError),
}

impl CoercionError {
    pub(crate) fn new(kind: ErrorKind, message: String) -> Self {
        match kind {
            ErrorKind::Server => Self::Server(ServerError::invariant(message)),
            ErrorKind::Client => Self::Client(ClientError::new(message)),
        }
    }

    pub(crate) fn into_server(self) -> ServerError {
        match self {
            Self::Server(e) => e,
            Self::Client(e) => ServerError::invariant(e.message),
        }
    }

    pub(crate) fn into_client(self) -> ClientError {
        match self {
            Self::Client(e) => e,
            Self::Server(e) => ClientError::new(e.message()),
        }
    }
}

/// Logs rejections of a scalar operation, when the `tracing` feature is on.
pub(crate) trait TraceRejection {
    fn traced(self, scalar: &str) -> Self;
}

impl<T> TraceRejection for Result<T, ClientError> {
    #[cfg_attr(
        not(feature = "tracing"),
        expect(unused_variables, reason = "only used by `tracing` events")
    )]
    fn traced(self, scalar: &str) -> Self {
        if let Err(e) = &self {
            __scalars_trace_debug!(scalar, error = %e, "rejected client input");
        }
        self
    }
}

impl<T> TraceRejection for Result<T, ServerError> {
    #[cfg_attr(
        not(feature = "tracing"),
        expect(unused_variables, reason = "only used by `tracing` events")
    )]
    fn traced(self, scalar: &str) -> Self {
        if let Err(e) = &self {
            __scalars_trace_error!(scalar, error = %e, "cannot serialize value");
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use crate::span::SourcePosition;

    use super::{ClientError, CoercionError, ErrorKind, ServerError};

    #[test]
    fn client_error_displays_message_only() {
        let err = ClientError::located("Bad input.", SourcePosition::new(10, 1, 4));

        assert_eq!(err.to_string(), "Bad input.");
        assert_eq!(err.location(), Some(SourcePosition::new(10, 1, 4)));
    }

    #[test]
    fn coercion_error_follows_kind() {
        let server = CoercionError::new(ErrorKind::Server, "nope".into());
        let client = CoercionError::new(ErrorKind::Client, "nope".into());

        assert!(matches!(server, CoercionError::Server(ServerError::Invariant(_))));
        assert!(matches!(client, CoercionError::Client(_)));
        assert_eq!(client.into_server().message(), "nope");
    }
}
