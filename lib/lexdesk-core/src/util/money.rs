use rust_decimal::{Decimal, RoundingStrategy};

use crate::model::invoice::InvoiceStatus;

/// Tolerance for currency comparisons, one hundredth of a currency unit
pub const EPSILON: Decimal = Decimal::from_parts(1, 0, 0, false, 2);

/// Rounds to two decimal places, half away from zero
pub fn round2(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Status implied by the paid amount of a not cancelled invoice
pub fn derive_status(paid_amount: Decimal, amount: Decimal) -> InvoiceStatus {
    if paid_amount >= amount - EPSILON {
        InvoiceStatus::Paid
    } else if paid_amount <= EPSILON {
        InvoiceStatus::Unpaid
    } else {
        InvoiceStatus::PartiallyPaid
    }
}

pub fn remaining(amount: Decimal, paid_amount: Decimal) -> Decimal {
    round2(amount - paid_amount)
}
