use crate::{
    config::types::StorageKind,
    service::Service,
    storage::{FlushStorage, TodoStorage},
    Settings,
};
use std::sync::Arc;

use tracing::{info, instrument};

use crate::storage::SledStorage;

use super::StartupError;

/// Opens the configured backend and wires it into a [`Service`].
#[instrument(name = "init_storage", skip_all)]
pub async fn init_storage(settings: &Settings) -> Result<Service, StartupError> {
    let service = match &settings.storage.backend {
        StorageKind::Sled => {
            let sled_config = settings
                .storage
                .sled
                .as_ref()
                .ok_or(StartupError::MissingStorageConfig("sled".to_string()))?;

            info!(path = ?sled_config.path, temporary = sled_config.temporary, "opening sled storage");

            let sled_storage = Arc::new(SledStorage::new(sled_config)?);

            Service::new(
                sled_storage.clone() as Arc<dyn TodoStorage>,
                sled_storage as Arc<dyn FlushStorage>,
            )
        }
    };

    Ok(service)
}
