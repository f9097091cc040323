use crate::macros::uuid_newtype;
use crate::{
    AccessLinkId, AdminId, CaseId, ClientId, CommentId, HearingId, InvoiceId, InvoicePaymentId,
};

uuid_newtype!(
    /// Untyped reference to any entity, used by the audit history
    EntityId
);

macro_rules! impl_from_other_type {
    ($other: ty) => {
        impl std::convert::From<$other> for EntityId {
            fn from(value: $other) -> Self {
                Self(value.into())
            }
        }
    };
}

impl_from_other_type!(AccessLinkId);
impl_from_other_type!(AdminId);
impl_from_other_type!(CaseId);
impl_from_other_type!(ClientId);
impl_from_other_type!(CommentId);
impl_from_other_type!(HearingId);
impl_from_other_type!(InvoiceId);
impl_from_other_type!(InvoicePaymentId);
