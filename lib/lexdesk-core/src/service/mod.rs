pub mod access_link;
pub mod admin;
pub mod case;
pub mod client;
pub mod error;
pub mod history;
pub mod invoice;
pub mod task;

#[cfg(test)]
pub(crate) mod test_utilities;
