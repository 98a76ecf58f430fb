use sled::transaction::{ConflictableTransactionError, TransactionalTree};
use tracing::{info, instrument, warn};

use crate::storage::sled::{
    error::SledStorageError, internal::Key, BincodeConfig, FromBytesWithConfig, ToBytesWithConfig,
};

type TxResult<T> = Result<T, ConflictableTransactionError<SledStorageError>>;

#[instrument(name = "sled::get_value_by_key", skip_all)]
pub(crate) fn get_value_with_span(
    key: &Key,
    tree: &sled::Tree,
) -> Result<Option<sled::IVec>, SledStorageError> {
    info!(key = %key, "get value with key");
    Ok(tree.get(key.as_bytes())?)
}

#[instrument(name = "sled::scan_tree", skip_all)]
pub(crate) fn scan_tree_with_span<T>(
    tree: &sled::Tree,
    decode: impl Fn(Key, &[u8]) -> Result<T, SledStorageError>,
) -> Result<Vec<T>, SledStorageError> {
    let mut items = Vec::new();
    for entry in tree.iter() {
        let (key_bytes, value_bytes) = entry?;
        let key = Key::from_bytes(&key_bytes)?;
        items.push(decode(key, &value_bytes)?);
    }
    info!(count = items.len(), "scanned tree");

    Ok(items)
}

#[instrument(name = "sled::get_value_by_key", skip_all)]
pub(crate) fn get_value_in_transaction_with_span(
    key: &Key,
    tree: &TransactionalTree,
) -> TxResult<Option<sled::IVec>> {
    info!(key = %key, "get value with key");
    Ok(tree.get(key.as_bytes())?)
}

#[instrument(name = "sled::insert_value_with_key", skip_all)]
pub(crate) fn insert_value_in_transaction_with_span(
    key: &Key,
    value: &[u8],
    tree: &TransactionalTree,
) -> TxResult<()> {
    info!(key = %key, "insert value with key");

    let old_value = tree.insert(key.as_bytes(), value)?;

    if old_value.is_some() {
        info!(key = %key, "insert replaced old value");
    }
    Ok(())
}

#[instrument(name = "sled::remove_value_with_key", skip_all)]
pub(crate) fn remove_value_in_transaction_with_span(
    key: &Key,
    tree: &TransactionalTree,
) -> TxResult<bool> {
    info!(key = %key, "remove value with key");
    if tree.remove(key.as_bytes())?.is_none() {
        warn!(key = %key, "Tried to remove non-existing key");
        Ok(false)
    } else {
        Ok(true)
    }
}

#[instrument(name = "convert_bytes_to_value", skip_all)]
pub(crate) fn deserialize_in_span<T: FromBytesWithConfig<Error = SledStorageError>>(
    config: &BincodeConfig,
    bytes: &[u8],
) -> Result<T, SledStorageError> {
    T::from_bytes(bytes, config)
}

#[instrument(name = "convert_value_to_bytes", skip_all)]
pub(crate) fn serialize_in_span<T: ToBytesWithConfig<Error = SledStorageError>>(
    config: &BincodeConfig,
    value: &T,
) -> Result<Vec<u8>, SledStorageError> {
    value.to_bytes(config)
}

#[instrument(name = "flush_tree", skip_all)]
pub(crate) fn flush_tree_in_span(
    tree: &sled::Tree,
    tree_name: &'static str,
) -> Result<(), SledStorageError> {
    let bytes = tree.flush()?;
    info!(bytes = %bytes, tree_name = %tree_name, "flushed sled tree");

    Ok(())
}
