use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Bus::Table)
                    .if_not_exists()
                    .col(pk_auto(Bus::Id))
                    .col(string_len(Bus::CompanyName, 120).not_null())
                    .col(string_len(Bus::BusNumber, 20).not_null().unique_key())
                    .col(string_len(Bus::Source, 120).not_null())
                    .col(string_len(Bus::Destination, 120).not_null())
                    .col(time(Bus::StartTime).not_null())
                    .col(time(Bus::EndTime).not_null())
                    .col(integer(Bus::Capacity).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Bus::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Bus {
    Table,
    Id,
    CompanyName,
    BusNumber,
    Source,
    Destination,
    StartTime,
    EndTime,
    Capacity,
}
