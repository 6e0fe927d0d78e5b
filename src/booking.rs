use sea_orm::{ConnectionTrait, DatabaseConnection, DbBackend, IsolationLevel, TransactionTrait};

use crate::entities::{bus, reservation};
use crate::error::{AppError, AppResult};
use crate::{availability, calendar, directory, ledger};

/// A validated-by-the-handler booking request: all fields present, seat
/// count positive.
#[derive(Debug)]
pub struct BookingRequest {
    pub bus_number: String,
    pub user_id: i64,
    pub reservation_date: String,
    pub seats_reserved: i32,
}

/// Run one booking through its gates: resolve the bus, resolve the date,
/// check the schedule, then check capacity and commit in a single
/// transaction. Returns the created reservation with its bus.
pub async fn book(
    db: &DatabaseConnection,
    request: BookingRequest,
) -> AppResult<(reservation::Model, bus::Model)> {
    let bus = directory::find_by_number(db, &request.bus_number)
        .await?
        .ok_or(AppError::BusNotFound)?;

    let (date, weekday) = calendar::resolve(&request.reservation_date)?;

    if !directory::operates_on(db, bus.id, weekday).await? {
        return Err(AppError::BusNotScheduled);
    }

    // Capacity check and insert share one transaction, serializable on
    // Postgres, so two concurrent bookings cannot jointly oversell.
    let txn = match db.get_database_backend() {
        DbBackend::Postgres => {
            db.begin_with_config(Some(IsolationLevel::Serializable), None)
                .await?
        }
        _ => db.begin().await?,
    };

    let available = availability::available_seats(&txn, &bus, date).await?;
    if request.seats_reserved > available {
        txn.rollback().await?;
        return Err(AppError::InsufficientCapacity);
    }

    let reservation = ledger::create(
        &txn,
        bus.id,
        request.user_id,
        date,
        request.seats_reserved,
    )
    .await?;
    txn.commit().await?;

    tracing::debug!(
        bus_number = %bus.bus_number,
        user_id = request.user_id,
        date = %date,
        seats = request.seats_reserved,
        "Reservation committed"
    );

    Ok((reservation, bus))
}
