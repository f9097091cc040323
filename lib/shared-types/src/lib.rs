#![cfg_attr(feature = "strict", deny(warnings))]

mod macros;

mod access_link_id;
mod admin_id;
mod case_id;
mod client_id;
mod comment_id;
mod entity_id;
mod history_id;
mod invoice_id;

pub use access_link_id::AccessLinkId;
pub use admin_id::AdminId;
pub use case_id::{CaseId, HearingId};
pub use client_id::ClientId;
pub use comment_id::{AttachmentId, CommentId};
pub use entity_id::EntityId;
pub use history_id::HistoryId;
pub use invoice_id::{InvoiceId, InvoicePaymentId};
