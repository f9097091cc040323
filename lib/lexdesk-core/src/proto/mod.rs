pub mod clock;
pub mod session;
pub mod transaction_manager;
