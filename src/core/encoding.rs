//! Text encodings for shares.
//!
//! Shares are raw bytes; to paste them into config files, tickets or
//! terminals they are rendered as base64 (default) or hex.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde::{Deserialize, Serialize};

use crate::error::{EncodingError, Result};

/// How shares are rendered as text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ShareEncoding {
    /// Standard base64 with padding
    #[default]
    Base64,
    /// Lowercase hexadecimal
    Hex,
}

impl ShareEncoding {
    /// Encoding name for display.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Base64 => "base64",
            Self::Hex => "hex",
        }
    }

    /// Render a share as text.
    pub fn encode(&self, share: &[u8]) -> String {
        match self {
            Self::Base64 => STANDARD.encode(share),
            Self::Hex => hex::encode(share),
        }
    }

    /// Parse one share. `index` is only used in the error message.
    ///
    /// Surrounding whitespace is ignored.
    pub fn decode(&self, index: usize, text: &str) -> Result<Vec<u8>> {
        let text = text.trim();
        let decoded = match self {
            Self::Base64 => STANDARD.decode(text).map_err(|e| e.to_string()),
            Self::Hex => hex::decode(text).map_err(|e| e.to_string()),
        };

        decoded.map_err(|reason| {
            EncodingError::InvalidShare {
                index,
                encoding: self.name(),
                reason,
            }
            .into()
        })
    }

    /// Parse a list of shares, skipping blank entries.
    ///
    /// # Errors
    ///
    /// Returns `EncodingError::Empty` if nothing is left after skipping blanks,
    /// or the first decoding failure.
    pub fn decode_all<S: AsRef<str>>(&self, texts: &[S]) -> Result<Vec<Vec<u8>>> {
        let shares = texts
            .iter()
            .map(|t| t.as_ref())
            .filter(|t| !t.trim().is_empty())
            .enumerate()
            .map(|(i, t)| self.decode(i + 1, t))
            .collect::<Result<Vec<_>>>()?;

        if shares.is_empty() {
            return Err(EncodingError::Empty.into());
        }

        Ok(shares)
    }
}
