use std::convert::Infallible;
use std::fmt;
use std::num::{ParseFloatError, ParseIntError, TryFromIntError};
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FlatfigError {
    #[error("Config file not found: {path}")]
    NotFound { path: PathBuf },

    #[error("Failed to read {path}: {source}")]
    IoError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("error while setting value [{value}] for key [{key}]: {source}")]
    InvalidValue {
        key: String,
        value: String,
        source: DecodeError,
    },

    #[error("error while setting default value [{value}] for key [{key}]: {source}")]
    InvalidDefault {
        key: String,
        value: String,
        source: DecodeError,
    },
}

/// Error returned by [`Decode`](crate::Decode) when a raw string does not
/// describe a valid value for the target type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct DecodeError(String);

impl DecodeError {
    pub fn new(msg: impl fmt::Display) -> Self {
        DecodeError(msg.to_string())
    }

    pub fn message(&self) -> &str {
        &self.0
    }
}

impl From<ParseIntError> for DecodeError {
    fn from(e: ParseIntError) -> Self {
        DecodeError::new(e)
    }
}

impl From<ParseFloatError> for DecodeError {
    fn from(e: ParseFloatError) -> Self {
        DecodeError::new(e)
    }
}

impl From<Infallible> for DecodeError {
    fn from(e: Infallible) -> Self {
        match e {}
    }
}

impl From<TryFromIntError> for DecodeError {
    fn from(e: TryFromIntError) -> Self {
        DecodeError::new(e)
    }
}

impl From<humantime::DurationError> for DecodeError {
    fn from(e: humantime::DurationError) -> Self {
        DecodeError::new(e)
    }
}
