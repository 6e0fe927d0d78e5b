use chrono::NaiveDate;
use sea_orm::{ActiveModelTrait, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder, Set};

use crate::entities::reservation;

/// Total seats reserved for a bus on an exact date, 0 if none.
pub async fn sum_reserved_seats<C: ConnectionTrait>(
    db: &C,
    bus_id: i32,
    date: NaiveDate,
) -> Result<i32, DbErr> {
    let reserved = reservation::Entity::find()
        .filter(reservation::Column::BusId.eq(bus_id))
        .filter(reservation::Column::ReservationDate.eq(date))
        .all(db)
        .await?
        .iter()
        .map(|r| r.seats_reserved)
        .sum();

    Ok(reserved)
}

/// All reservations for a rider, in insertion order.
pub async fn list_by_user<C: ConnectionTrait>(
    db: &C,
    user_id: i64,
) -> Result<Vec<reservation::Model>, DbErr> {
    reservation::Entity::find()
        .filter(reservation::Column::UserId.eq(user_id))
        .order_by_asc(reservation::Column::Id)
        .all(db)
        .await
}

/// Raw insert. Performs no validation; crate-private so the capacity and
/// schedule checks in the booking workflow cannot be bypassed.
pub(crate) async fn create<C: ConnectionTrait>(
    db: &C,
    bus_id: i32,
    user_id: i64,
    date: NaiveDate,
    seats: i32,
) -> Result<reservation::Model, DbErr> {
    let new_reservation = reservation::ActiveModel {
        bus_id: Set(bus_id),
        user_id: Set(user_id),
        reservation_date: Set(date),
        seats_reserved: Set(seats),
        ..Default::default()
    };

    new_reservation.insert(db).await
}
