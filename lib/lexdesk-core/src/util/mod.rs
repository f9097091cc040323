pub mod history;
pub mod money;
