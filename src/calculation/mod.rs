//! Calculation logic for the HR portal.
//!
//! This module contains the pure functions behind attendance and payroll:
//! opening and closing attendance sessions, measuring elapsed hours,
//! aggregating hours per calendar month, and converting hours to wages.

mod attendance;
mod monthly_hours;
mod wages;

pub use attendance::{can_check_in, can_check_out, check_in, check_out, elapsed_hours};
pub use monthly_hours::monthly_hours;
pub use wages::{DEFAULT_HOURLY_RATE, wages};
