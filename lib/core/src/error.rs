use thiserror::Error;

use crate::kind::ValueKind;

pub type Result<T> = std::result::Result<T, Error>;

/// Remote status code signalling that the engine is overloaded.
pub const RETRY_LATER_CODE: i32 = -4009;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Unsupported value type: {0}")]
    UnsupportedType(ValueKind),

    #[error("Failed to assemble {request}: {source}")]
    Assembly {
        request: &'static str,
        #[source]
        source: Box<Error>,
    },

    #[error("proxima be error: code = {code} desc = {reason}")]
    Remote { code: i32, reason: String },

    #[error("Incompatible SDK and Proxima BE: client version {client}, server version {server}")]
    IncompatibleVersion { client: String, server: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Transport error: {0}")]
    Transport(String),
}

impl Error {
    /// Wrap a failure hit while building the named wire request.
    pub fn assembly(request: &'static str, source: Error) -> Self {
        Error::Assembly {
            request,
            source: Box::new(source),
        }
    }

    /// True when the engine asked the caller to back off and try again.
    pub fn is_retry_later(&self) -> bool {
        matches!(self, Error::Remote { code, .. } if *code == RETRY_LATER_CODE)
    }

    /// Remote status code, if this error came from the engine.
    pub fn remote_code(&self) -> Option<i32> {
        match self {
            Error::Remote { code, .. } => Some(*code),
            _ => None,
        }
    }
}
