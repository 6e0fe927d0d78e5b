pub mod buses;
pub mod reservations;

/// Landing page
pub async fn index() -> &'static str {
    "Welcome to Bus reservation platform"
}
