//! Constants used throughout keysplit.

/// Bytes each share adds on top of the secret length (the x-coordinate tag).
pub const SHARE_OVERHEAD: usize = 1;

/// Largest number of shares, and largest threshold, a split can use.
///
/// x-coordinates are single non-zero bytes.
pub const MAX_SHARES: usize = 255;

/// Smallest threshold a split accepts.
pub const MIN_THRESHOLD: usize = 2;

/// Quorum used by key groups in Shamir mode when none is configured.
pub const DEFAULT_QUORUM: usize = 2;

/// Configuration file name (.keysplit.toml).
pub const CONFIG_FILE: &str = ".keysplit.toml";

/// Environment variable holding the tracing filter.
pub const LOG_ENV: &str = "KEYSPLIT_LOG";
