use shared_types::{AccessLinkId, AdminId, AttachmentId, CaseId, CommentId, HearingId};
use time::OffsetDateTime;

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Comment {
    pub id: CommentId,
    pub created_date: OffsetDateTime,
    pub case_id: CaseId,
    /// Set only when the comment was posted against a hearing
    pub hearing_id: Option<HearingId>,
    pub author: CommentAuthor,
    pub text: Option<String>,

    // Relations
    pub attachments: Vec<Attachment>,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum CommentAuthor {
    Admin(AdminId),
    AccessLink(AccessLinkId),
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Attachment {
    pub id: AttachmentId,
    pub created_date: OffsetDateTime,
    pub comment_id: CommentId,
    pub file_name: String,
    pub media_type: String,
    pub size: u64,
    pub storage_key: String,
}
