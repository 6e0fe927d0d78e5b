pub mod bus;
pub mod bus_day;
pub mod reservation;
