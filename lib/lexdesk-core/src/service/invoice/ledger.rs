//! Paid amount and status bookkeeping of an invoice.
//!
//! Every function returns the new `(paid_amount, status)` pair for one ledger mutation or the
//! invariant it would violate. Callers persist the result together with the payment change.

use rust_decimal::Decimal;

use crate::model::invoice::{Invoice, InvoiceStatus};
use crate::service::error::{BusinessLogicError, ServiceError, ValidationError};
use crate::util::money::{EPSILON, derive_status, remaining, round2};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct LedgerUpdate {
    pub paid_amount: Decimal,
    pub status: InvoiceStatus,
}

impl LedgerUpdate {
    fn new(paid_amount: Decimal, amount: Decimal) -> Self {
        Self {
            paid_amount,
            status: derive_status(paid_amount, amount),
        }
    }
}

pub(crate) fn add_payment(invoice: &Invoice, amount: Decimal) -> Result<LedgerUpdate, ServiceError> {
    let amount = round2(amount);
    if amount <= Decimal::ZERO {
        return Err(ValidationError::NonPositivePaymentAmount(amount).into());
    }

    match invoice.status {
        InvoiceStatus::Paid => return Err(BusinessLogicError::InvoiceAlreadyPaid(invoice.id).into()),
        InvoiceStatus::Cancelled => {
            return Err(BusinessLogicError::InvoiceCancelled(invoice.id).into());
        }
        InvoiceStatus::Unpaid | InvoiceStatus::PartiallyPaid => {}
    }

    let remaining = remaining(invoice.amount, invoice.paid_amount);
    if amount > remaining + EPSILON {
        return Err(BusinessLogicError::PaymentExceedsRemaining {
            excess: round2(amount - remaining),
        }
        .into());
    }

    Ok(LedgerUpdate::new(
        round2(invoice.paid_amount + amount),
        invoice.amount,
    ))
}

pub(crate) fn change_payment(
    invoice: &Invoice,
    old_amount: Decimal,
    new_amount: Decimal,
) -> Result<LedgerUpdate, ServiceError> {
    let new_amount = round2(new_amount);
    if new_amount <= Decimal::ZERO {
        return Err(ValidationError::NonPositivePaymentAmount(new_amount).into());
    }

    if invoice.status == InvoiceStatus::Cancelled {
        return Err(BusinessLogicError::InvoiceCancelled(invoice.id).into());
    }

    let paid_amount = round2(invoice.paid_amount + (new_amount - old_amount));
    if paid_amount > invoice.amount + EPSILON {
        return Err(BusinessLogicError::PaymentsExceedInvoiceAmount {
            excess: round2(paid_amount - invoice.amount),
        }
        .into());
    }

    Ok(LedgerUpdate::new(
        non_negative(invoice, paid_amount)?,
        invoice.amount,
    ))
}

pub(crate) fn remove_payment(
    invoice: &Invoice,
    amount: Decimal,
) -> Result<LedgerUpdate, ServiceError> {
    if invoice.status == InvoiceStatus::Cancelled {
        return Err(BusinessLogicError::InvoiceCancelled(invoice.id).into());
    }

    let paid_amount = non_negative(invoice, round2(invoice.paid_amount - amount))?;

    Ok(LedgerUpdate::new(paid_amount, invoice.amount))
}

/// A negative paid amount means the payment being removed was never counted
fn non_negative(invoice: &Invoice, paid_amount: Decimal) -> Result<Decimal, ServiceError> {
    if paid_amount < Decimal::ZERO {
        return Err(BusinessLogicError::LedgerInconsistent {
            invoice_id: invoice.id,
            paid_amount,
        }
        .into());
    }

    Ok(paid_amount)
}

#[cfg(test)]
mod test {
    use std::str::FromStr;

    use shared_types::AdminId;

    use super::*;
    use crate::service::test_utilities::{cancelled, dummy_invoice};

    fn dec(value: &str) -> Decimal {
        Decimal::from_str(value).unwrap()
    }

    fn invoice(amount: &str, paid: &str) -> Invoice {
        dummy_invoice(AdminId::new_v4(), dec(amount), dec(paid))
    }

    #[test]
    fn test_add_payment_partial_then_full() {
        let first = add_payment(&invoice("1000.00", "0"), dec("400.00")).unwrap();
        assert_eq!(first.paid_amount, dec("400.00"));
        assert_eq!(first.status, InvoiceStatus::PartiallyPaid);

        let second = add_payment(&invoice("1000.00", "400.00"), dec("600.00")).unwrap();
        assert_eq!(second.paid_amount, dec("1000.00"));
        assert_eq!(second.status, InvoiceStatus::Paid);
    }

    #[test]
    fn test_add_payment_within_epsilon_of_remaining() {
        let update = add_payment(&invoice("100.00", "40.00"), dec("60.01")).unwrap();

        assert_eq!(update.paid_amount, dec("100.01"));
        assert_eq!(update.status, InvoiceStatus::Paid);
    }

    #[test]
    fn test_add_payment_exceeding_remaining() {
        let result = add_payment(&invoice("1000.00", "400.00"), dec("601.00"));

        let Err(ServiceError::BusinessLogic(BusinessLogicError::PaymentExceedsRemaining {
            excess,
        })) = result
        else {
            panic!("unexpected result: {result:?}");
        };
        assert_eq!(excess, dec("1.00"));
        assert_eq!(
            BusinessLogicError::PaymentExceedsRemaining { excess }.to_string(),
            "Payment exceeds remaining amount by 1.00"
        );
    }

    #[test]
    fn test_add_payment_rejected_states() {
        assert!(matches!(
            add_payment(&invoice("1000.00", "1000.00"), dec("1.00")),
            Err(ServiceError::BusinessLogic(
                BusinessLogicError::InvoiceAlreadyPaid(_)
            ))
        ));
        assert!(matches!(
            add_payment(&cancelled(invoice("1000.00", "0")), dec("1.00")),
            Err(ServiceError::BusinessLogic(BusinessLogicError::InvoiceCancelled(_)))
        ));
        assert!(matches!(
            add_payment(&invoice("1000.00", "0"), dec("0")),
            Err(ServiceError::Validation(
                ValidationError::NonPositivePaymentAmount(_)
            ))
        ));
        assert!(matches!(
            add_payment(&invoice("1000.00", "0"), dec("-5")),
            Err(ServiceError::Validation(
                ValidationError::NonPositivePaymentAmount(_)
            ))
        ));
    }

    #[test]
    fn test_add_payment_rounds_amount() {
        let update = add_payment(&invoice("10.00", "0"), dec("3.335")).unwrap();

        assert_eq!(update.paid_amount, dec("3.34"));
    }

    #[test]
    fn test_change_payment() {
        let update = change_payment(&invoice("1000.00", "1000.00"), dec("400.00"), dec("300.00"))
            .unwrap();
        assert_eq!(update.paid_amount, dec("900.00"));
        assert_eq!(update.status, InvoiceStatus::PartiallyPaid);

        let result = change_payment(&invoice("1000.00", "600.00"), dec("400.00"), dec("900.00"));
        assert!(matches!(
            result,
            Err(ServiceError::BusinessLogic(
                BusinessLogicError::PaymentsExceedInvoiceAmount { excess }
            )) if excess == dec("100.00")
        ));
    }

    #[test]
    fn test_remove_payment_regresses_status() {
        let update = remove_payment(&invoice("1000.00", "1000.00"), dec("400.00")).unwrap();
        assert_eq!(update.paid_amount, dec("600.00"));
        assert_eq!(update.status, InvoiceStatus::PartiallyPaid);

        let update = remove_payment(&invoice("1000.00", "600.00"), dec("600.00")).unwrap();
        assert_eq!(update.paid_amount, dec("0.00"));
        assert_eq!(update.status, InvoiceStatus::Unpaid);
    }

    #[test]
    fn test_remove_payment_larger_than_paid_amount() {
        let result = remove_payment(&invoice("1000.00", "100.00"), dec("150.00"));

        assert!(matches!(
            result,
            Err(ServiceError::BusinessLogic(
                BusinessLogicError::LedgerInconsistent { paid_amount, .. }
            )) if paid_amount == dec("-50.00")
        ));
    }

    #[test]
    fn test_change_payment_not_counted_in_paid_amount() {
        let result = change_payment(&invoice("1000.00", "100.00"), dec("400.00"), dec("50.00"));

        assert!(matches!(
            result,
            Err(ServiceError::BusinessLogic(
                BusinessLogicError::LedgerInconsistent { .. }
            ))
        ));
    }
}
