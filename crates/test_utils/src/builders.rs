//! Builder patterns for test data construction

use core_kernel::{Money, UnitId};
use domain_billing::NewBill;

/// Builder for `NewBill` test data
///
/// Defaults to unit 1, January 2024, a 5,000,000 total, and no metered
/// components.
#[derive(Debug, Clone)]
pub struct BillBuilder {
    unit_id: UnitId,
    month: i32,
    year: i32,
    electric: Option<(i32, i32, Money)>,
    water: Option<(i32, Money)>,
    total_amount: Money,
    paid_amount: Option<Money>,
    note: Option<String>,
}

impl Default for BillBuilder {
    fn default() -> Self {
        Self {
            unit_id: UnitId::new(1),
            month: 1,
            year: 2024,
            electric: None,
            water: None,
            total_amount: Money::from_units(5_000_000),
            paid_amount: None,
            note: None,
        }
    }
}

impl BillBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn unit(mut self, unit_id: UnitId) -> Self {
        self.unit_id = unit_id;
        self
    }

    pub fn cycle(mut self, month: i32, year: i32) -> Self {
        self.month = month;
        self.year = year;
        self
    }

    pub fn electric(mut self, start: i32, end: i32, rate: i64) -> Self {
        self.electric = Some((start, end, Money::from_units(rate)));
        self
    }

    pub fn water(mut self, usage: i32, rate: i64) -> Self {
        self.water = Some((usage, Money::from_units(rate)));
        self
    }

    pub fn total(mut self, total: i64) -> Self {
        self.total_amount = Money::from_units(total);
        self
    }

    pub fn paid(mut self, paid: i64) -> Self {
        self.paid_amount = Some(Money::from_units(paid));
        self
    }

    pub fn note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }

    pub fn build(self) -> NewBill {
        let mut bill = NewBill::new(self.unit_id, self.month, self.year, self.total_amount);
        if let Some((start, end, rate)) = self.electric {
            bill = bill.with_electric(start, end, rate);
        }
        if let Some((usage, rate)) = self.water {
            bill = bill.with_water(usage, rate);
        }
        if let Some(paid) = self.paid_amount {
            bill = bill.with_paid_amount(paid);
        }
        if let Some(note) = self.note {
            bill = bill.with_note(note);
        }
        bill
    }
}
