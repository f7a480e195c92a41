use std::sync::Arc;

use sea_orm::DatabaseConnection;
use service::{assets::AssetStore, owners::OwnerService};

/// Shared, immutable per-request state.
#[derive(Clone)]
pub struct ServerState {
    pub db: DatabaseConnection,
    pub owners: OwnerService,
}

impl ServerState {
    pub fn new(db: DatabaseConnection, assets: Arc<dyn AssetStore>) -> Self {
        let owners = OwnerService::new(db.clone(), assets);
        Self { db, owners }
    }
}
