//! File-backed persistent slot for the shop state.
//!
//! The slot is a single JSON file under the data directory. Reads happen
//! once, when the store opens; writes happen after every mutation.
//! Malformed or missing data is never an error to the caller: the load
//! path logs a diagnostic and falls back to the empty default state.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::catalog::Product;

use super::state::{CartLine, ShopState};

/// Version of the persisted schema. Bump on any change to the field
/// layout; a mismatched version is treated the same as a corrupt slot.
pub const SCHEMA_VERSION: u32 = 1;

/// On-disk layout of the shop state.
///
/// Field names are the stable contract across process restarts; any
/// shape mismatch makes the whole record count as absent.
#[derive(Debug, Serialize, Deserialize)]
struct PersistedState {
    version: u32,
    cart: Vec<CartLine>,
    wishlist: Vec<Product>,
    recently_viewed: Vec<Product>,
}

impl From<ShopState> for PersistedState {
    fn from(state: ShopState) -> Self {
        Self {
            version: SCHEMA_VERSION,
            cart: state.cart,
            wishlist: state.wishlist,
            recently_viewed: state.recently_viewed,
        }
    }
}

impl From<PersistedState> for ShopState {
    fn from(persisted: PersistedState) -> Self {
        Self {
            cart: persisted.cart,
            wishlist: persisted.wishlist,
            recently_viewed: persisted.recently_viewed,
        }
    }
}

/// Errors that can occur writing the slot.
///
/// These are logged by the store and never surfaced to callers; the
/// in-memory state remains authoritative for the session.
#[derive(Debug, thiserror::Error)]
pub enum SlotError {
    /// The data directory could not be created.
    #[error("failed to create data directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The slot file could not be written.
    #[error("failed to write state slot {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The state could not be serialized.
    #[error("failed to serialize shop state: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// The named storage location holding the serialized shop state.
#[derive(Debug, Clone)]
pub struct StateSlot {
    path: PathBuf,
}

impl StateSlot {
    /// Create a slot named `slot_name` under `data_dir`.
    #[must_use]
    pub fn new(data_dir: &Path, slot_name: &str) -> Self {
        Self {
            path: data_dir.join(format!("{slot_name}.json")),
        }
    }

    /// Path of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the slot, falling back to the default state.
    ///
    /// A missing file, unreadable file, unparseable content, or schema
    /// version mismatch all yield `ShopState::default()` with a
    /// diagnostic log; none of them is an error.
    #[must_use]
    pub fn load(&self) -> ShopState {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "no persisted shop state, starting empty");
                return ShopState::default();
            }
            Err(err) => {
                warn!(
                    path = %self.path.display(),
                    error = %err,
                    "failed to read shop state, starting empty"
                );
                return ShopState::default();
            }
        };

        match serde_json::from_str::<PersistedState>(&raw) {
            Ok(persisted) if persisted.version == SCHEMA_VERSION => persisted.into(),
            Ok(persisted) => {
                warn!(
                    path = %self.path.display(),
                    version = persisted.version,
                    expected = SCHEMA_VERSION,
                    "persisted shop state has unknown schema version, starting empty"
                );
                ShopState::default()
            }
            Err(err) => {
                warn!(
                    path = %self.path.display(),
                    error = %err,
                    "persisted shop state is malformed, starting empty"
                );
                ShopState::default()
            }
        }
    }

    /// Serialize and write the full state to the slot.
    ///
    /// Creates the parent directory if missing. Last write wins; there
    /// is no retry.
    ///
    /// # Errors
    ///
    /// Returns [`SlotError`] if serialization or the filesystem write
    /// fails.
    pub fn save(&self, state: &ShopState) -> Result<(), SlotError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|source| SlotError::CreateDir {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        let json = serde_json::to_string_pretty(&PersistedState::from(state.clone()))?;
        fs::write(&self.path, json).map_err(|source| SlotError::Write {
            path: self.path.clone(),
            source,
        })
    }
}
