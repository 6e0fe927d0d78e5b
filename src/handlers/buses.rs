use axum::extract::{Query, State};
use axum::Json;
use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::{availability, calendar, directory, AppState};

#[derive(Debug, Deserialize)]
pub struct BusSearchParams {
    pub source: Option<String>,
    pub destination: Option<String>,
    pub date: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct AvailableBusResponse {
    pub bus_number: String,
    pub company_name: String,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub available_seats: i32,
}

/// Search buses operating a route on a date, keeping only those with
/// seats left. "No buses for the route/day" and "no buses with seats"
/// are reported as distinct 404 messages.
pub async fn search_buses(
    State(state): State<AppState>,
    Query(params): Query<BusSearchParams>,
) -> AppResult<Json<Vec<AvailableBusResponse>>> {
    let (source, destination, date) = match (&params.source, &params.destination, &params.date) {
        (Some(source), Some(destination), Some(date))
            if !source.is_empty() && !destination.is_empty() && !date.is_empty() =>
        {
            (source, destination, date)
        }
        _ => {
            return Err(AppError::MissingField(
                "Source, destination, and date are required.".to_string(),
            ));
        }
    };

    let (date, weekday) = calendar::resolve(date)?;

    let buses = directory::find_by_route(&state.db, source, destination, weekday).await?;
    if buses.is_empty() {
        return Err(AppError::NoMatch(
            "No buses available for the selected route and day.".to_string(),
        ));
    }

    let mut available_buses = Vec::new();
    for bus in buses {
        let available = availability::available_seats(&state.db, &bus, date).await?;
        if available > 0 {
            available_buses.push(AvailableBusResponse {
                bus_number: bus.bus_number,
                company_name: bus.company_name,
                start_time: bus.start_time,
                end_time: bus.end_time,
                available_seats: available,
            });
        }
    }

    if available_buses.is_empty() {
        return Err(AppError::NoMatch("No buses with available seats.".to_string()));
    }

    Ok(Json(available_buses))
}
