use tracing::instrument;

use crate::storage::{sled::error::SledStorageError, TodoId};

const KEY_LEN: usize = std::mem::size_of::<u64>();

/// Big-endian id bytes, so sled's lexicographic key order is id order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub(crate) struct Key([u8; KEY_LEN]);

impl Key {
    pub fn new(id: TodoId) -> Self {
        Self(id.as_u64().to_be_bytes())
    }

    #[instrument(name = "Key::from_bytes", skip_all, level = "debug")]
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, SledStorageError> {
        let raw: [u8; KEY_LEN] = bytes.try_into().map_err(|_| SledStorageError::InvalidKey {
            expected: KEY_LEN,
            actual: bytes.len(),
        })?;
        Ok(Self(raw))
    }

    pub fn id(&self) -> TodoId {
        TodoId::from(u64::from_be_bytes(self.0))
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl std::fmt::Display for Key {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "todo:{}", self.id())
    }
}
