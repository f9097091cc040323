pub mod common;
pub mod error;
pub mod response;
pub(crate) mod serialize;
