use sea_orm::{entity::prelude::*, Set, DatabaseConnection, ActiveModelTrait, EntityTrait};
use uuid::Uuid;
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::errors::{self, required};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "room")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    /// Text-encoded amount, e.g. "150".
    pub price: String,
    pub image: Option<String>,
    pub booked: bool,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef { match *self {} }
}

impl ActiveModelBehavior for ActiveModel {}

pub fn validate_price(price: &str) -> Result<String, errors::ModelError> {
    required("price", price)
}

/// Insert a room. Rooms are seeded out of band; the HTTP API never creates them.
pub async fn create(
    db: &DatabaseConnection,
    name: &str,
    price: &str,
    image: Option<&str>,
) -> Result<Model, errors::ModelError> {
    let name = required("name", name)?;
    let price = validate_price(price)?;
    let now = Utc::now().into();
    let am = ActiveModel {
        id: Set(Uuid::new_v4()),
        name: Set(name),
        price: Set(price),
        image: Set(image.map(str::to_string)),
        booked: Set(false),
        created_at: Set(now),
        updated_at: Set(now),
    };
    am.insert(db).await.map_err(|e| errors::ModelError::Db(e.to_string()))
}

/// Replace the price of one room; `Ok(None)` when no room has this id.
pub async fn set_price(db: &DatabaseConnection, id: Uuid, price: &str) -> Result<Option<Model>, errors::ModelError> {
    let price = validate_price(price)?;
    let Some(found) = Entity::find_by_id(id)
        .one(db)
        .await
        .map_err(|e| errors::ModelError::Db(e.to_string()))?
    else {
        return Ok(None);
    };
    let mut am: ActiveModel = found.into();
    am.price = Set(price);
    am.updated_at = Set(Utc::now().into());
    let updated = am.update(db).await.map_err(|e| errors::ModelError::Db(e.to_string()))?;
    Ok(Some(updated))
}
