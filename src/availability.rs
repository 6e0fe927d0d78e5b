use chrono::NaiveDate;
use sea_orm::{ConnectionTrait, DbErr};

use crate::entities::bus;
use crate::ledger;

/// Remaining seats for a bus on a date: capacity minus the reserved total.
/// Callers must treat a non-positive result as "no seats available", not
/// as an error.
pub async fn available_seats<C: ConnectionTrait>(
    db: &C,
    bus: &bus::Model,
    date: NaiveDate,
) -> Result<i32, DbErr> {
    let reserved = ledger::sum_reserved_seats(db, bus.id, date).await?;
    Ok(remaining(bus.capacity, reserved))
}

pub fn remaining(capacity: i32, reserved: i32) -> i32 {
    capacity - reserved
}

#[cfg(test)]
mod tests {
    use super::remaining;

    #[test]
    fn tracks_sequential_bookings() {
        let capacity = 40;
        let mut reserved = 0;

        for seats in [10, 20, 8] {
            assert!(seats <= remaining(capacity, reserved));
            reserved += seats;
        }

        assert_eq!(remaining(capacity, reserved), 2);
        // exactly the remainder fits, one more does not
        assert!(2 <= remaining(capacity, reserved));
        assert!(3 > remaining(capacity, reserved));
    }

    #[test]
    fn oversold_bus_reports_negative_remainder() {
        assert_eq!(remaining(40, 43), -3);
    }
}
