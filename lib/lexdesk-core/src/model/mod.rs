pub mod access_link;
pub mod admin;
pub mod case;
pub mod client;
pub mod comment;
pub mod common;
pub mod history;
pub mod invoice;
pub mod invoice_payment;
