use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder};

use crate::entities::bus_day::Weekday;
use crate::entities::{bus, bus_day};

/// Buses whose route matches exactly (case-sensitive) and whose
/// operating-day set contains `weekday`, in insertion order.
pub async fn find_by_route<C: ConnectionTrait>(
    db: &C,
    source: &str,
    destination: &str,
    weekday: Weekday,
) -> Result<Vec<bus::Model>, DbErr> {
    bus::Entity::find()
        .filter(bus::Column::Source.eq(source))
        .filter(bus::Column::Destination.eq(destination))
        .inner_join(bus_day::Entity)
        .filter(bus_day::Column::Weekday.eq(weekday))
        .order_by_asc(bus::Column::Id)
        .all(db)
        .await
}

pub async fn find_by_number<C: ConnectionTrait>(
    db: &C,
    bus_number: &str,
) -> Result<Option<bus::Model>, DbErr> {
    bus::Entity::find()
        .filter(bus::Column::BusNumber.eq(bus_number))
        .one(db)
        .await
}

/// Whether the bus runs on the given weekday.
pub async fn operates_on<C: ConnectionTrait>(
    db: &C,
    bus_id: i32,
    weekday: Weekday,
) -> Result<bool, DbErr> {
    let day = bus_day::Entity::find()
        .filter(bus_day::Column::BusId.eq(bus_id))
        .filter(bus_day::Column::Weekday.eq(weekday))
        .one(db)
        .await?;

    Ok(day.is_some())
}
