use sea_orm::{DatabaseConnection, EntityTrait};
use uuid::Uuid;
use models::review::{self, Entity as ReviewEntity};
use crate::errors::ServiceError;

/// All reviews, newest first.
pub async fn list_reviews(db: &DatabaseConnection) -> Result<Vec<review::Model>, ServiceError> {
    Ok(review::list_newest_first(db).await?)
}

pub async fn create_review(db: &DatabaseConnection, name: &str, text: &str) -> Result<review::Model, ServiceError> {
    Ok(review::create(db, name, text).await?)
}

/// Delete a review; a missing id is reported as `NotFound`.
pub async fn delete_review(db: &DatabaseConnection, id: Uuid) -> Result<(), ServiceError> {
    let res = ReviewEntity::delete_by_id(id).exec(db).await?;
    if res.rows_affected == 0 {
        return Err(ServiceError::not_found("review"));
    }
    Ok(())
}
