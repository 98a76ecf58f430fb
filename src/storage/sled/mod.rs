pub(super) mod error;
mod flush_impl;
mod internal;
mod todos_impl;

#[cfg(any(test, feature = "integration_tests"))]
pub mod test_util;

use super::{StorageError, Todo, TodoFields, TodoId, TodoRecord, TodoStorage};
use crate::{config::types::SledConfig, utils::measure_metrics::measure_and_record_storage};
use bincode::config::{self};
use error::{SledStartupError, SledStorageError};
use tracing::{debug, info_span, instrument};

pub(crate) static SLED_TODO_TREE: &str = "todos";
const BINCODE_CONFIG: config::Configuration = config::standard()
    .with_variable_int_encoding()
    .with_little_endian();

use bincode::{Decode, Encode};

type BincodeConfig = bincode::config::Configuration;

trait ToBytesWithConfig: Encode {
    type Error;

    fn to_bytes(&self, config: &BincodeConfig) -> Result<Vec<u8>, Self::Error>;
}

trait FromBytesWithConfig: Decode<()> {
    type Error;

    fn from_bytes(bytes: &[u8], config: &BincodeConfig) -> Result<Self, Self::Error>;
}

pub(crate) struct SledStorage {
    db: sled::Db,
    todo_tree: sled::Tree,
    bincode_config: config::Configuration,
}

impl SledStorage {
    #[instrument(name = "Storage::new")]
    pub fn new(sled_config: &SledConfig) -> Result<Self, SledStartupError> {
        measure_and_record_storage("Storage::new", || {
            let db = info_span!("sled::open_db").in_scope(|| {
                let config = sled::Config::default()
                    .path(&sled_config.path)
                    .temporary(sled_config.temporary);
                config.open().map_err(|e| {
                    tracing::error!(error = %e, path = ?sled_config.path, "failed to open db");
                    SledStartupError::OpenSledStorageError(e)
                })
            })?;

            Self::from_db(db)
        })
    }

    pub(crate) fn from_db(db: sled::Db) -> Result<Self, SledStartupError> {
        let todo_tree = info_span!("sled::open_todo_tree").in_scope(|| {
            db.open_tree(SLED_TODO_TREE).map_err(|e| {
                tracing::error!(error = %e, tree_name = SLED_TODO_TREE, "failed to open todo tree");
                SledStartupError::OpenSledStorageError(e)
            })
        })?;

        debug!(tree_name = SLED_TODO_TREE, "opened todo tree");

        Ok(Self {
            db,
            todo_tree,
            bincode_config: BINCODE_CONFIG,
        })
    }

    /// Ids start at 1 and are never handed out twice by the same database.
    #[instrument(name = "SledStorage::next_id", skip_all)]
    fn next_id(&self) -> Result<TodoId, SledStorageError> {
        let raw = self.db.generate_id()?;
        Ok(TodoId::from(raw + 1))
    }
}

impl FromBytesWithConfig for TodoRecord {
    type Error = SledStorageError;

    #[instrument(name = "TodoRecord::from_bytes", skip_all)]
    fn from_bytes(bytes: &[u8], config: &BincodeConfig) -> Result<Self, Self::Error> {
        let (todo, _len) = bincode::decode_from_slice::<TodoRecord, _>(bytes, *config)?;
        Ok(todo)
    }
}

impl ToBytesWithConfig for TodoRecord {
    type Error = SledStorageError;

    #[instrument(name = "TodoRecord::to_bytes", skip_all)]
    fn to_bytes(&self, config: &BincodeConfig) -> Result<Vec<u8>, Self::Error> {
        let bytes = bincode::encode_to_vec(self, *config)?;
        Ok(bytes)
    }
}
