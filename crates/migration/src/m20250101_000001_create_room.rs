//! Create `room` table.
//!
//! Rooms are seeded out of band; the API only lists them and updates price.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Room::Table)
                    .if_not_exists()
                    .col(uuid(Room::Id).primary_key())
                    .col(string_len(Room::Name, 256).not_null())
                    .col(string_len(Room::Price, 64).not_null())
                    .col(string_len_null(Room::Image, 512))
                    .col(boolean(Room::Booked).not_null().default(false))
                    .col(timestamp_with_time_zone(Room::CreatedAt).not_null())
                    .col(timestamp_with_time_zone(Room::UpdatedAt).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Room::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Room { Table, Id, Name, Price, Image, Booked, CreatedAt, UpdatedAt }
