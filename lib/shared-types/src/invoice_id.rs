use crate::macros::uuid_newtype;

uuid_newtype!(InvoiceId);

uuid_newtype!(InvoicePaymentId);
