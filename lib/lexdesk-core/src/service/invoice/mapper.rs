use std::str::FromStr;

use serde_json::{Value, json};

use super::dto::{InvoicePaymentResponseDTO, InvoiceResponseDTO, InvoiceSummaryDTO};
use crate::model::client::Client;
use crate::model::invoice::Invoice;
use crate::model::invoice_payment::{InvoicePayment, PaymentMode};
use crate::provider::notifier::Notification;
use crate::service::error::{ServiceError, ValidationError};
use crate::util::money::remaining;

impl From<Invoice> for InvoiceResponseDTO {
    fn from(value: Invoice) -> Self {
        Self {
            remaining_amount: remaining(value.amount, value.paid_amount),
            id: value.id,
            created_date: value.created_date,
            last_modified: value.last_modified,
            number: value.number,
            client_id: value.client_id,
            owner_id: value.owner_id,
            amount: value.amount,
            paid_amount: value.paid_amount,
            status: value.status,
            due_date: value.due_date,
            comments: value.comments,
            last_reminder_sent_at: value.last_reminder_sent_at,
            reminder_count: value.reminder_count,
        }
    }
}

impl From<InvoicePayment> for InvoicePaymentResponseDTO {
    fn from(value: InvoicePayment) -> Self {
        Self {
            id: value.id,
            created_date: value.created_date,
            invoice_id: value.invoice_id,
            amount: value.amount,
            mode: value.mode,
            transaction_ref: value.transaction_ref,
            comment: value.comment,
            payment_date: value.payment_date,
            recorded_by: value.recorded_by,
        }
    }
}

impl From<&Invoice> for InvoiceSummaryDTO {
    fn from(value: &Invoice) -> Self {
        Self {
            total: value.amount,
            paid: value.paid_amount,
            remaining: remaining(value.amount, value.paid_amount),
            status: value.status,
        }
    }
}

pub(super) fn parse_payment_mode(value: &str) -> Result<PaymentMode, ServiceError> {
    PaymentMode::from_str(value.trim())
        .map_err(|_| ValidationError::InvalidPaymentMode(value.to_owned()).into())
}

pub(super) fn format_invoice_number(prefix: &str, year: i32, sequence: u32) -> String {
    format!("{prefix}-{year}-{sequence:05}")
}

pub(super) fn invoice_document(
    invoice: &Invoice,
    client: Option<&Client>,
    payments: &[InvoicePayment],
    currency: &str,
) -> Value {
    json!({
        "number": invoice.number,
        "status": invoice.status.to_string(),
        "currency": currency,
        "amount": invoice.amount.to_string(),
        "paidAmount": invoice.paid_amount.to_string(),
        "remainingAmount": remaining(invoice.amount, invoice.paid_amount).to_string(),
        "dueDate": invoice.due_date.to_string(),
        "issuedAt": invoice.created_date.date().to_string(),
        "comments": invoice.comments,
        "client": client.map(|client| json!({
            "name": client.name,
            "email": client.email,
            "phone": client.phone,
        })),
        "payments": payments.iter().map(|payment| json!({
            "amount": payment.amount.to_string(),
            "mode": payment.mode.to_string(),
            "transactionRef": payment.transaction_ref,
            "paymentDate": payment.payment_date.date().to_string(),
        })).collect::<Vec<_>>(),
    })
}

pub(super) fn payment_received_notification(
    invoice: &Invoice,
    payment: &InvoicePayment,
    client: &Client,
    currency: &str,
) -> Notification {
    Notification {
        recipient: client.email.to_owned(),
        subject: format!("Payment received for invoice {}", invoice.number),
        html_body: format!(
            "<p>Dear {name},</p><p>We received your payment of {currency} {amount} ({mode}) for invoice {number}.</p>\
             <p>Outstanding amount: {currency} {remaining}</p>",
            name = client.name,
            amount = payment.amount,
            mode = payment.mode,
            number = invoice.number,
            remaining = remaining(invoice.amount, invoice.paid_amount),
        ),
        attachments: vec![],
    }
}

pub(super) fn reminder_notification(
    invoice: &Invoice,
    client: &Client,
    currency: &str,
) -> Notification {
    Notification {
        recipient: client.email.to_owned(),
        subject: format!("Payment reminder for invoice {}", invoice.number),
        html_body: format!(
            "<p>Dear {name},</p><p>Invoice {number} was due on {due_date}.</p>\
             <p>Outstanding amount: {currency} {remaining}</p>",
            name = client.name,
            number = invoice.number,
            due_date = invoice.due_date,
            remaining = remaining(invoice.amount, invoice.paid_amount),
        ),
        attachments: vec![],
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_parse_payment_mode_ignores_case() {
        assert_eq!(parse_payment_mode("UPI").unwrap(), PaymentMode::Upi);
        assert_eq!(parse_payment_mode("Cheque").unwrap(), PaymentMode::Cheque);
        assert_eq!(parse_payment_mode(" cash ").unwrap(), PaymentMode::Cash);
        assert!(matches!(
            parse_payment_mode("crypto"),
            Err(ServiceError::Validation(ValidationError::InvalidPaymentMode(_)))
        ));
    }

    #[test]
    fn test_format_invoice_number() {
        assert_eq!(format_invoice_number("INV", 2026, 7), "INV-2026-00007");
        assert_eq!(format_invoice_number("LX", 2026, 123456), "LX-2026-123456");
    }
}
