use crate::macros::uuid_newtype;

uuid_newtype!(CommentId);

uuid_newtype!(AttachmentId);
