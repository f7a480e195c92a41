use sea_orm::{DatabaseConnection, EntityTrait};
use uuid::Uuid;
use models::room::{self, Entity as RoomEntity};
use crate::errors::ServiceError;

/// List all rooms in store order.
pub async fn list_rooms(db: &DatabaseConnection) -> Result<Vec<room::Model>, ServiceError> {
    let rows = RoomEntity::find().all(db).await?;
    Ok(rows)
}

/// Update only the price of a room.
pub async fn update_room_price(db: &DatabaseConnection, id: Uuid, price: &str) -> Result<room::Model, ServiceError> {
    room::set_price(db, id, price)
        .await?
        .ok_or_else(|| ServiceError::not_found("room"))
}
