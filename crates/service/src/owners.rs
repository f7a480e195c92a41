use std::sync::Arc;

use sea_orm::{DatabaseConnection, EntityTrait};
use tracing::{debug, info, instrument, warn};
use uuid::Uuid;

use models::owner::{self, Entity as OwnerEntity};

use crate::assets::AssetStore;
use crate::errors::ServiceError;

/// An uploaded image as received from the client.
#[derive(Debug, Clone)]
pub struct ImageUpload {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

#[derive(Debug, Clone, Default)]
pub struct NewOwner {
    pub name: String,
    pub info: Option<String>,
    pub image: Option<ImageUpload>,
}

/// Owner records plus the image file each one may own.
///
/// The file is written before the record that references it is inserted,
/// and removed (best-effort) before the record is deleted.
#[derive(Clone)]
pub struct OwnerService {
    db: DatabaseConnection,
    assets: Arc<dyn AssetStore>,
}

impl OwnerService {
    pub fn new(db: DatabaseConnection, assets: Arc<dyn AssetStore>) -> Self { Self { db, assets } }

    pub async fn list(&self) -> Result<Vec<owner::Model>, ServiceError> {
        Ok(OwnerEntity::find().all(&self.db).await?)
    }

    #[instrument(skip(self, input), fields(name = %input.name, has_image = input.image.is_some()))]
    pub async fn create(&self, input: NewOwner) -> Result<owner::Model, ServiceError> {
        // reject before writing any file
        owner::validate_name(&input.name)?;

        let image_path = match &input.image {
            Some(upload) => Some(self.assets.save(&upload.file_name, &upload.bytes).await?),
            None => None,
        };

        match owner::create(&self.db, &input.name, input.info.as_deref(), image_path.as_deref()).await {
            Ok(created) => {
                info!(id = %created.id, image = %created.image, "owner created");
                Ok(created)
            }
            Err(e) => {
                if let Some(path) = &image_path {
                    if let Err(cleanup) = self.assets.remove(path).await {
                        warn!(image = %path, error = %cleanup, "failed to remove image of unsaved owner");
                    }
                }
                Err(e.into())
            }
        }
    }

    /// Delete an owner and its image. Image removal failures are logged, not returned.
    #[instrument(skip(self))]
    pub async fn delete(&self, id: Uuid) -> Result<(), ServiceError> {
        let found = OwnerEntity::find_by_id(id).one(&self.db).await?;
        let Some(existing) = found else { return Err(ServiceError::not_found("owner")); };

        if let Some(path) = existing.image_path() {
            match self.assets.remove(path).await {
                Ok(true) => debug!(image = %path, "owner image removed"),
                Ok(false) => debug!(image = %path, "owner image already absent"),
                Err(e) => warn!(image = %path, error = %e, "failed to remove owner image; deleting record anyway"),
            }
        }

        OwnerEntity::delete_by_id(id).exec(&self.db).await?;
        info!(id = %id, "owner deleted");
        Ok(())
    }
}
