use serde::{Deserialize, Serialize};

use crate::error::RETRY_LATER_CODE;
use crate::{Error, Result};

/// Client side status codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i32)]
pub enum ErrorCode {
    Success = 0,
    /// Engine is overloaded, retry later
    RetryLater = RETRY_LATER_CODE,
    /// Catch-all for engine failures the client does not classify
    Unknown = -1_000_000,
    /// Client and engine versions do not match
    Incompatible = -1_000_001,
}

impl ErrorCode {
    #[inline]
    pub fn code(self) -> i32 {
        self as i32
    }
}

/// Status returned by the engine for every call
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Status {
    /// 0 on success
    pub code: i32,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub reason: String,
}

impl Status {
    pub fn new(code: i32, reason: impl Into<String>) -> Self {
        Self {
            code,
            reason: reason.into(),
        }
    }

    #[inline]
    pub fn is_ok(&self) -> bool {
        self.code == ErrorCode::Success.code()
    }

    pub fn into_result(self) -> Result<()> {
        if self.is_ok() {
            Ok(())
        } else {
            Err(Error::Remote {
                code: self.code,
                reason: self.reason,
            })
        }
    }
}

/// Client and server version pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Version {
    pub client: String,
    pub server: String,
}

impl Version {
    pub fn new(client: impl Into<String>, server: impl Into<String>) -> Self {
        Self {
            client: client.into(),
            server: server.into(),
        }
    }

    /// The server version must start with the client version ("0.1.0-3f2a" works with "0.1.0")
    pub fn compatible(&self) -> bool {
        !self.client.is_empty() && self.server.starts_with(&self.client)
    }

    pub fn check(&self) -> Result<()> {
        if self.compatible() {
            Ok(())
        } else {
            Err(Error::IncompatibleVersion {
                client: self.client.clone(),
                server: self.server.clone(),
            })
        }
    }
}
