pub mod access_link;
pub mod admin;
pub mod case;
pub mod client;
pub mod history;
pub mod invoice;
pub mod misc;
pub mod task;
