pub mod availability;
pub mod booking;
pub mod calendar;
pub mod config;
pub mod db;
pub mod directory;
pub mod entities;
pub mod error;
pub mod handlers;
pub mod ledger;
pub mod routes;

use sea_orm::DatabaseConnection;

pub use config::Config;
pub use error::{AppError, AppResult};

#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub config: Config,
}
