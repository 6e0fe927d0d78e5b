use std::net::SocketAddr;
use std::sync::Arc;

use chrono::NaiveTime;
use sea_orm::{ActiveModelTrait, EntityTrait, Set};
use sea_orm_migration::MigratorTrait;
use tokio::net::TcpListener;
use tower_governor::{governor::GovernorConfigBuilder, GovernorLayer};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use bus_reservation_backend::{
    config::Config,
    db,
    entities::{bus, bus_day, bus_day::Weekday},
    routes, AppState,
};

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "bus_reservation_backend=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env();
    tracing::info!("Starting server at {}", config.server_addr());

    // Connect to database
    let db = db::connect(&config)
        .await
        .expect("Failed to connect to database");
    tracing::info!("Connected to database");

    // Run migrations
    migration::Migrator::up(&db, None)
        .await
        .expect("Failed to run migrations");
    tracing::info!("Migrations complete");

    // Seed a demo fleet if the directory is empty
    seed_fleet(&db).await;

    // Create app state
    let state = AppState {
        db,
        config: config.clone(),
    };

    // Configure rate limiting: 100 requests per 60 seconds per IP
    let governor_config = Arc::new(
        GovernorConfigBuilder::default()
            .per_second(60)
            .burst_size(100)
            .finish()
            .unwrap(),
    );

    // Create router with middleware
    let app = routes::create_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any))
        .layer(GovernorLayer::new(governor_config));

    // Start server with socket address for rate limiting
    let addr: SocketAddr = config.server_addr().parse().expect("Invalid address");
    let listener = TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    tracing::info!("Server listening on {}", addr);

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await
    .expect("Failed to start server");
}

/// Seed a few buses with their operating days when the table is empty.
/// Buses are otherwise administered directly in the database.
async fn seed_fleet(db: &sea_orm::DatabaseConnection) {
    use Weekday::*;

    let existing = bus::Entity::find()
        .one(db)
        .await
        .expect("Failed to check for buses");

    if existing.is_some() {
        return;
    }

    let fleet: [(&str, &str, &str, &str, (u32, u32), (u32, u32), i32, &[Weekday]); 3] = [
        (
            "Harmoni Express",
            "HE-101",
            "Jakarta",
            "Bandung",
            (6, 30),
            (9, 45),
            40,
            &[Monday, Tuesday, Wednesday, Thursday, Friday],
        ),
        (
            "Harmoni Express",
            "HE-102",
            "Bandung",
            "Jakarta",
            (10, 30),
            (13, 45),
            40,
            &[Monday, Tuesday, Wednesday, Thursday, Friday],
        ),
        (
            "Nusantara Lines",
            "NL-7",
            "Jakarta",
            "Semarang",
            (7, 0),
            (14, 0),
            52,
            &[Saturday, Sunday],
        ),
    ];

    for (company, number, source, destination, (sh, sm), (eh, em), capacity, days) in fleet {
        let new_bus = bus::ActiveModel {
            company_name: Set(company.to_string()),
            bus_number: Set(number.to_string()),
            source: Set(source.to_string()),
            destination: Set(destination.to_string()),
            start_time: Set(NaiveTime::from_hms_opt(sh, sm, 0).expect("Invalid seed time")),
            end_time: Set(NaiveTime::from_hms_opt(eh, em, 0).expect("Invalid seed time")),
            capacity: Set(capacity),
            ..Default::default()
        };

        let bus = new_bus.insert(db).await.expect("Failed to seed bus");

        for day in days {
            let operating_day = bus_day::ActiveModel {
                bus_id: Set(bus.id),
                weekday: Set(*day),
                ..Default::default()
            };
            operating_day
                .insert(db)
                .await
                .expect("Failed to seed operating day");
        }

        tracing::info!("Seeded bus {}", bus.bus_number);
    }
}
