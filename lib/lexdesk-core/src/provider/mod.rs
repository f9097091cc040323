pub mod capability_token;
pub mod notifier;
pub mod pdf_renderer;
pub mod pin;
pub mod task;
