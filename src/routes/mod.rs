use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{self, buses, reservations};
use crate::AppState;

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/buses", get(buses::search_buses))
        .route(
            "/reservations",
            post(reservations::create_reservation).get(reservations::list_reservations),
        )
        .with_state(state)
}
