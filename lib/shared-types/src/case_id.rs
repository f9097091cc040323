use crate::macros::uuid_newtype;

uuid_newtype!(CaseId);

uuid_newtype!(
    /// Identifier of a hearing, always scoped to a single case
    HearingId
);
