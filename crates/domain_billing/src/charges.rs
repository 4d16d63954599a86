//! Metered charge computation
//!
//! Pure functions over value types, no I/O. A charge component is only
//! billed when everything needed to price it is present; a missing reading
//! or rate prices the component at zero rather than failing the bill.

use rust_decimal::Decimal;

use core_kernel::Money;

use crate::bill::MonthlyBill;
use crate::error::BillingError;

/// Computes the electricity charge from meter readings
///
/// Returns zero when readings or the rate are absent. Fails when the end
/// reading is below the start reading, whether or not a rate is present.
pub fn electricity_charge(
    start: Option<i32>,
    end: Option<i32>,
    rate: Option<Money>,
) -> Result<Money, BillingError> {
    if let (Some(start), Some(end)) = (start, end) {
        if end < start {
            return Err(BillingError::InvalidMeterRange { start, end });
        }
        if let Some(rate) = rate {
            return Ok(rate.multiply(Decimal::from(end - start)));
        }
    }
    Ok(Money::zero())
}

/// Computes the water charge from usage
///
/// Zero when usage or the rate is absent.
pub fn water_charge(usage: Option<i32>, rate: Option<Money>) -> Money {
    match (usage, rate) {
        (Some(usage), Some(rate)) => rate.multiply(Decimal::from(usage)),
        _ => Money::zero(),
    }
}

/// Computes the total of the metered components of a bill
///
/// This is advisory: the billed total is supplied by the caller, and ad-hoc
/// items are added after the bill exists, so the stored total is not
/// required to equal this sum.
pub fn metered_total(bill: &MonthlyBill) -> Result<Money, BillingError> {
    let electric = electricity_charge(bill.electric_start, bill.electric_end, bill.electric_rate)?;
    let water = water_charge(bill.water_usage, bill.water_rate);
    Ok(electric + water)
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn valid_readings_never_produce_negative_charges(
            start in 0i32..100_000,
            delta in 0i32..100_000,
            rate in 0i64..1_000_000i64
        ) {
            let charge = electricity_charge(
                Some(start),
                Some(start + delta),
                Some(Money::from_units(rate)),
            ).unwrap();

            prop_assert!(!charge.is_negative());
        }

        #[test]
        fn backwards_readings_always_fail(
            start in 1i32..100_000,
            shortfall in 1i32..1_000
        ) {
            let result = electricity_charge(Some(start), Some(start - shortfall), None);
            prop_assert!(result.is_err());
        }
    }
}
