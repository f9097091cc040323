pub mod access_link;
pub mod admin;
pub mod attachment;
pub mod client;
pub mod comment;
pub mod hearing;
pub mod history;
pub mod invoice;
pub mod invoice_payment;
pub mod legal_case;
