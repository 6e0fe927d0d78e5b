use sea_orm_migration::{prelude::*, schema::*};

use super::m20240601_000001_create_buses::Bus;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(BusDay::Table)
                    .if_not_exists()
                    .col(pk_auto(BusDay::Id))
                    .col(integer(BusDay::BusId).not_null())
                    .col(string_len(BusDay::Weekday, 16).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_bus_day_bus")
                            .from(BusDay::Table, BusDay::BusId)
                            .to(Bus::Table, Bus::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // One row per operating day per bus
        manager
            .create_index(
                Index::create()
                    .name("idx_bus_day_unique")
                    .table(BusDay::Table)
                    .col(BusDay::BusId)
                    .col(BusDay::Weekday)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(BusDay::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum BusDay {
    Table,
    Id,
    BusId,
    Weekday,
}
