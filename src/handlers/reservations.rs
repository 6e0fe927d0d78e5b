use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::{NaiveDate, NaiveTime};
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter};
use serde::{Deserialize, Serialize};

use crate::entities::{bus, reservation};
use crate::error::{AppError, AppResult};
use crate::{booking, ledger, AppState};

#[derive(Debug, Deserialize)]
pub struct CreateReservationRequest {
    pub bus_number: Option<String>,
    pub user_id: Option<i64>,
    pub reservation_date: Option<String>,
    pub seats_reserved: Option<i32>,
}

#[derive(Debug, Serialize)]
pub struct BusRef {
    pub bus_number: String,
    pub company_name: String,
    pub source: String,
    pub destination: String,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
}

#[derive(Debug, Serialize)]
pub struct ReservationResponse {
    pub id: i32,
    pub bus: BusRef,
    pub user_id: i64,
    pub reservation_date: NaiveDate,
    pub seats_reserved: i32,
}

impl ReservationResponse {
    fn new(reservation: reservation::Model, bus: &bus::Model) -> Self {
        Self {
            id: reservation.id,
            bus: BusRef {
                bus_number: bus.bus_number.clone(),
                company_name: bus.company_name.clone(),
                source: bus.source.clone(),
                destination: bus.destination.clone(),
                start_time: bus.start_time,
                end_time: bus.end_time,
            },
            user_id: reservation.user_id,
            reservation_date: reservation.reservation_date,
            seats_reserved: reservation.seats_reserved,
        }
    }
}

fn missing_fields() -> AppError {
    AppError::MissingField(
        "All fields (bus_number, user_id, reservation_date, seats_reserved) are required."
            .to_string(),
    )
}

/// Create a reservation. Field presence is checked here; scheduling and
/// capacity are checked by the booking workflow.
pub async fn create_reservation(
    State(state): State<AppState>,
    Json(payload): Json<CreateReservationRequest>,
) -> AppResult<(StatusCode, Json<ReservationResponse>)> {
    let bus_number = payload
        .bus_number
        .filter(|s| !s.is_empty())
        .ok_or_else(missing_fields)?;
    let user_id = payload.user_id.ok_or_else(missing_fields)?;
    let reservation_date = payload
        .reservation_date
        .filter(|s| !s.is_empty())
        .ok_or_else(missing_fields)?;
    // A zero or negative seat count is treated the same as an absent one
    let seats_reserved = payload
        .seats_reserved
        .filter(|seats| *seats > 0)
        .ok_or_else(missing_fields)?;

    let (reservation, bus) = booking::book(
        &state.db,
        booking::BookingRequest {
            bus_number,
            user_id,
            reservation_date,
            seats_reserved,
        },
    )
    .await?;

    Ok((
        StatusCode::CREATED,
        Json(ReservationResponse::new(reservation, &bus)),
    ))
}

#[derive(Debug, Deserialize)]
pub struct ListReservationsParams {
    pub user_id: Option<i64>,
}

/// List a rider's reservations in insertion order.
pub async fn list_reservations(
    State(state): State<AppState>,
    Query(params): Query<ListReservationsParams>,
) -> AppResult<Json<Vec<ReservationResponse>>> {
    let user_id = params
        .user_id
        .ok_or_else(|| AppError::MissingField("User ID is required.".to_string()))?;

    let reservations = ledger::list_by_user(&state.db, user_id).await?;
    if reservations.is_empty() {
        return Err(AppError::NoMatch(
            "No reservations found for the user.".to_string(),
        ));
    }

    let bus_ids: Vec<i32> = reservations.iter().map(|r| r.bus_id).collect();
    let buses = bus::Entity::find()
        .filter(bus::Column::Id.is_in(bus_ids))
        .all(&state.db)
        .await?;

    let responses: Vec<ReservationResponse> = reservations
        .into_iter()
        .filter_map(|r| {
            let bus = buses.iter().find(|b| b.id == r.bus_id)?;
            Some(ReservationResponse::new(r, bus))
        })
        .collect();

    Ok(Json(responses))
}
