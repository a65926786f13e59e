//! Data key protection with groups of master keys.
//!
//! A document is encrypted with a random data key, and the data key is in
//! turn protected by master keys (KMS keys, PGP keys, age recipients...).
//! Two modes are supported:
//!
//! - **Plain**: every master key encrypts the full data key. Any one of them
//!   can recover it.
//! - **Shamir**: the data key is split into one share per master key, and
//!   each master key encrypts only its share. Recovering the data key needs
//!   `quorum` master keys to succeed.
//!
//! Concrete master key backends live outside this crate; they only need to
//! implement [`MasterKey`].

use std::fmt::Debug;

use tracing::{debug, warn};
use zeroize::Zeroizing;

use crate::core::constants::DEFAULT_QUORUM;
use crate::core::shamir;
use crate::error::{KeyFailure, KeyGroupError, Result};

/// A key that can protect a data key.
///
/// Implementations keep the encrypted data key themselves, the way a KMS
/// master key keeps the ciphertext blob it produced.
pub trait MasterKey: Debug {
    /// Encrypt `data_key` and store the ciphertext, replacing any previous one.
    fn encrypt(&mut self, data_key: &[u8]) -> Result<()>;

    /// Decrypt the stored ciphertext.
    fn decrypt(&self) -> Result<Vec<u8>>;

    /// Stable identifier used in logs and errors (ARN, fingerprint, ...).
    fn id(&self) -> String;
}

/// A named collection of master keys.
#[derive(Debug, Default)]
pub struct KeyGroup {
    pub name: String,
    pub keys: Vec<Box<dyn MasterKey>>,
}

impl KeyGroup {
    /// Create an empty group.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            keys: Vec::new(),
        }
    }

    /// Add a master key to the group.
    pub fn with_key(mut self, key: impl MasterKey + 'static) -> Self {
        self.keys.push(Box::new(key));
        self
    }
}

/// All master keys protecting one data key.
#[derive(Debug, Default)]
pub struct KeyGroups {
    pub groups: Vec<KeyGroup>,
    /// Split the data key across master keys instead of copying it.
    pub shamir: bool,
    /// Shares needed to recover the data key in Shamir mode. Zero means
    /// [`DEFAULT_QUORUM`].
    pub quorum: usize,
}

impl KeyGroups {
    /// Plain mode: any master key recovers the data key.
    pub fn plain(groups: Vec<KeyGroup>) -> Self {
        Self {
            groups,
            shamir: false,
            quorum: 0,
        }
    }

    /// Shamir mode with the given quorum.
    pub fn shamir(groups: Vec<KeyGroup>, quorum: usize) -> Self {
        Self {
            groups,
            shamir: true,
            quorum,
        }
    }

    /// Total number of master keys across all groups.
    pub fn master_key_count(&self) -> usize {
        self.groups.iter().map(|g| g.keys.len()).sum()
    }

    fn keys(&self) -> impl Iterator<Item = &dyn MasterKey> {
        self.groups
            .iter()
            .flat_map(|g| g.keys.iter().map(|k| k.as_ref()))
    }

    fn keys_mut(&mut self) -> impl Iterator<Item = &mut Box<dyn MasterKey>> {
        self.groups.iter_mut().flat_map(|g| g.keys.iter_mut())
    }

    /// Encrypt `data_key` with every master key.
    ///
    /// In Shamir mode the key is split into one share per master key first,
    /// and an unset quorum becomes [`DEFAULT_QUORUM`]. All keys are attempted
    /// even when some fail.
    ///
    /// # Errors
    ///
    /// - `KeyGroupError::NoMasterKeys` if there are no keys
    /// - `ShamirError` if the data key cannot be split with this quorum
    /// - `KeyGroupError::EncryptFailed` listing every key that failed
    pub fn update_master_keys(&mut self, data_key: &[u8]) -> Result<()> {
        let count = self.master_key_count();
        if count == 0 {
            return Err(KeyGroupError::NoMasterKeys.into());
        }

        let failures = if self.shamir {
            if self.quorum == 0 {
                self.quorum = DEFAULT_QUORUM;
            }
            debug!(keys = count, quorum = self.quorum, "splitting data key");

            let parts: Vec<Zeroizing<Vec<u8>>> = shamir::split(data_key, count, self.quorum)?
                .into_iter()
                .map(Zeroizing::new)
                .collect();

            self.keys_mut()
                .zip(parts.iter())
                .filter_map(|(key, part)| encrypt_with(&mut **key, part))
                .collect::<Vec<_>>()
        } else {
            debug!(keys = count, "encrypting data key with all master keys");
            self.keys_mut()
                .filter_map(|key| encrypt_with(&mut **key, data_key))
                .collect::<Vec<_>>()
        };

        if failures.is_empty() {
            Ok(())
        } else {
            Err(KeyGroupError::EncryptFailed { failures }.into())
        }
    }

    /// Recover the data key.
    ///
    /// # Errors
    ///
    /// - Shamir mode: `KeyGroupError::NotEnoughParts` when fewer than
    ///   `quorum` master keys decrypt their share, or `ShamirError` if the
    ///   shares are malformed
    /// - Plain mode: `KeyGroupError::NoKeyDecrypted` when no key succeeds
    pub fn data_key(&self) -> Result<Zeroizing<Vec<u8>>> {
        if self.shamir {
            self.data_key_shamir()
        } else {
            self.first_data_key()
        }
    }

    fn data_key_shamir(&self) -> Result<Zeroizing<Vec<u8>>> {
        let required = if self.quorum == 0 {
            DEFAULT_QUORUM
        } else {
            self.quorum
        };

        let mut parts = Vec::new();
        let mut failures = Vec::new();
        for key in self.keys() {
            match key.decrypt() {
                Ok(part) => parts.push(Zeroizing::new(part)),
                Err(e) => {
                    warn!(key = %key.id(), error = %e, "failed to decrypt data key part");
                    failures.push(KeyFailure {
                        key: key.id(),
                        reason: e.to_string(),
                    });
                }
            }
        }

        if parts.len() < required {
            return Err(KeyGroupError::NotEnoughParts {
                required,
                recovered: parts.len(),
                failures,
            }
            .into());
        }

        debug!(parts = parts.len(), required, "combining data key parts");
        let parts: Vec<&[u8]> = parts.iter().map(|p| p.as_slice()).collect();
        Ok(Zeroizing::new(shamir::combine(&parts)?))
    }

    fn first_data_key(&self) -> Result<Zeroizing<Vec<u8>>> {
        let mut failures = Vec::new();
        for key in self.keys() {
            match key.decrypt() {
                Ok(data_key) => {
                    debug!(key = %key.id(), "data key decrypted");
                    return Ok(Zeroizing::new(data_key));
                }
                Err(e) => {
                    warn!(key = %key.id(), error = %e, "failed to decrypt data key");
                    failures.push(KeyFailure {
                        key: key.id(),
                        reason: e.to_string(),
                    });
                }
            }
        }

        Err(KeyGroupError::NoKeyDecrypted { failures }.into())
    }

    /// Remove every master key whose id is in `ids`.
    ///
    /// In Shamir mode the remaining keys hold shares of the old split;
    /// call [`update_master_keys`](Self::update_master_keys) to reshare.
    pub fn remove_master_keys(&mut self, ids: &[&str]) {
        for group in &mut self.groups {
            group.keys.retain(|k| {
                let id = k.id();
                let keep = !ids.contains(&id.as_str());
                if !keep {
                    debug!(group = %group.name, key = %id, "removing master key");
                }
                keep
            });
        }
    }
}

fn encrypt_with(key: &mut dyn MasterKey, data: &[u8]) -> Option<KeyFailure> {
    match key.encrypt(data) {
        Ok(()) => None,
        Err(e) => {
            warn!(key = %key.id(), error = %e, "failed to encrypt with master key");
            Some(KeyFailure {
                key: key.id(),
                reason: e.to_string(),
            })
        }
    }
}
