//! Hours-to-wages conversion.
//!
//! Wages are paid at a single hourly rate and rounded to a whole currency
//! unit, halves away from zero.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::error::{PortalError, PortalResult};

/// Default hourly rate, in whole currency units.
pub const DEFAULT_HOURLY_RATE: Decimal = Decimal::from_parts(10_000, 0, 0, false, 0);

/// Converts hours to wages at `hourly_rate`.
///
/// # Errors
///
/// Returns [`PortalError::Calculation`] if the product does not fit in a
/// [`Decimal`].
///
/// # Examples
///
/// ```
/// use hr_portal::calculation::{wages, DEFAULT_HOURLY_RATE};
/// use rust_decimal::Decimal;
///
/// assert_eq!(wages(Decimal::new(8, 0), DEFAULT_HOURLY_RATE)?, Decimal::new(80000, 0));
/// assert_eq!(wages(Decimal::new(15, 1), DEFAULT_HOURLY_RATE)?, Decimal::new(15000, 0));
/// # Ok::<(), hr_portal::error::PortalError>(())
/// ```
pub fn wages(hours: Decimal, hourly_rate: Decimal) -> PortalResult<Decimal> {
    let gross = hours
        .checked_mul(hourly_rate)
        .ok_or_else(|| PortalError::Calculation {
            message: format!("wages for {} hours at rate {}", hours, hourly_rate),
        })?;
    Ok(gross.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero))
}
