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
                    .table(Reservation::Table)
                    .if_not_exists()
                    .col(pk_auto(Reservation::Id))
                    .col(integer(Reservation::BusId).not_null())
                    .col(big_integer(Reservation::UserId).not_null())
                    .col(date(Reservation::ReservationDate).not_null())
                    .col(integer(Reservation::SeatsReserved).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_reservation_bus")
                            .from(Reservation::Table, Reservation::BusId)
                            .to(Bus::Table, Bus::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Capacity sums are always per bus per date
        manager
            .create_index(
                Index::create()
                    .name("idx_reservation_bus_date")
                    .table(Reservation::Table)
                    .col(Reservation::BusId)
                    .col(Reservation::ReservationDate)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Reservation::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Reservation {
    Table,
    Id,
    BusId,
    UserId,
    ReservationDate,
    SeatsReserved,
}
