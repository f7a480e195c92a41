use sea_orm::{entity::prelude::*, Set, DatabaseConnection, ActiveModelTrait};
use uuid::Uuid;
use serde::{Deserialize, Serialize};

use crate::errors::{self, required};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "owner")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    pub info: String,
    /// Public path of the uploaded image; empty when the owner has none.
    pub image: String,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef { match *self {} }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn image_path(&self) -> Option<&str> {
        Some(self.image.as_str()).filter(|p| !p.is_empty())
    }
}

pub fn validate_name(name: &str) -> Result<String, errors::ModelError> {
    required("name", name)
}

pub async fn create(
    db: &DatabaseConnection,
    name: &str,
    info: Option<&str>,
    image: Option<&str>,
) -> Result<Model, errors::ModelError> {
    let name = validate_name(name)?;
    let am = ActiveModel {
        id: Set(Uuid::new_v4()),
        name: Set(name),
        info: Set(info.unwrap_or_default().to_string()),
        image: Set(image.unwrap_or_default().to_string()),
    };
    am.insert(db).await.map_err(|e| errors::ModelError::Db(e.to_string()))
}
