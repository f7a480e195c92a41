//! Create `owner` table.
//!
//! `image` holds the public path of an uploaded file, or "" when there is none.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Owner::Table)
                    .if_not_exists()
                    .col(uuid(Owner::Id).primary_key())
                    .col(string_len(Owner::Name, 256).not_null())
                    .col(text(Owner::Info).not_null().default(""))
                    .col(string_len(Owner::Image, 512).not_null().default(""))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Owner::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Owner { Table, Id, Name, Info, Image }
