//! Error types.
//!
//! Errors are grouped per concern and wrapped by the top-level [`Error`].

use std::fmt;

use thiserror::Error;

/// Top-level error type.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Shamir(#[from] ShamirError),

    #[error(transparent)]
    KeyGroup(#[from] KeyGroupError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Encoding(#[from] EncodingError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors returned by `split` and `combine`.
///
/// Every variant except `Random` is a call-site mistake; retrying with the
/// same input fails the same way.
#[derive(Error, Debug)]
pub enum ShamirError {
    #[error("parts cannot be less than threshold")]
    PartsBelowThreshold,

    #[error("parts cannot exceed 255")]
    TooManyParts,

    #[error("threshold must be at least 2")]
    ThresholdTooSmall,

    #[error("threshold cannot exceed 255")]
    ThresholdTooLarge,

    #[error("cannot split an empty secret")]
    EmptySecret,

    #[error("failed to generate polynomial: {0}")]
    Random(#[source] rand::Error),

    #[error("at least two shares required")]
    NotEnoughShares,

    #[error("shares must be at least two bytes")]
    ShareTooShort,

    #[error("all shares must be the same length")]
    ShareLengthMismatch,

    #[error("duplicate share detected")]
    DuplicateShare,
}

/// A single master key that failed to encrypt or decrypt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyFailure {
    /// Identifier of the master key.
    pub key: String,
    /// Why the operation failed.
    pub reason: String,
}

impl fmt::Display for KeyFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.key, self.reason)
    }
}

/// Renders a list of failures as `[a: x; b: y]`.
struct Failures<'a>(&'a [KeyFailure]);

impl fmt::Display for Failures<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, failure) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{}", failure)?;
        }
        f.write_str("]")
    }
}

/// Errors protecting or recovering a data key with master keys.
#[derive(Error, Debug)]
pub enum KeyGroupError {
    #[error("no master keys configured")]
    NoMasterKeys,

    #[error("failed to encrypt data key with {} master key(s): {}", .failures.len(), Failures(.failures))]
    EncryptFailed { failures: Vec<KeyFailure> },

    #[error("not enough parts to recover data key: need {required}, have {recovered}")]
    NotEnoughParts {
        required: usize,
        recovered: usize,
        failures: Vec<KeyFailure>,
    },

    #[error("could not decrypt the data key with any master key: {}", Failures(.failures))]
    NoKeyDecrypted { failures: Vec<KeyFailure> },
}

/// Configuration errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },
}

/// Errors decoding textual shares.
#[derive(Error, Debug)]
pub enum EncodingError {
    #[error("share {index} is not valid {encoding}: {reason}")]
    InvalidShare {
        index: usize,
        encoding: &'static str,
        reason: String,
    },

    #[error("no shares provided")]
    Empty,
}

pub type Result<T> = std::result::Result<T, Error>;
