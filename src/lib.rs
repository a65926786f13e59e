//! keysplit - Shamir secret sharing for data keys.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Command-line interface
//! │   ├── split         # Split a secret into encoded shares
//! │   ├── combine       # Recover a secret from shares
//! │   └── completions   # Shell completions
//! └── core/             # Core library components
//!     ├── shamir/       # GF(2^8) arithmetic, polynomials, split/combine
//!     ├── keygroup      # Data key protection with master keys
//!     ├── encoding      # base64/hex share text
//!     ├── config        # .keysplit.toml management
//!     └── constants     # Shared limits and names
//! ```
//!
//! # Example
//!
//! ```
//! use keysplit::{combine, split};
//!
//! let shares = split(b"data key", 5, 3).unwrap();
//! assert_eq!(combine(&shares[1..4]).unwrap(), b"data key");
//! ```

pub mod cli;
pub mod core;
pub mod error;

pub use crate::core::constants::SHARE_OVERHEAD;
pub use crate::core::shamir::{combine, split};
