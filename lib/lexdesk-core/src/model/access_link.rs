use shared_types::{AccessLinkId, AdminId, CaseId, HearingId};
use strum::{Display, EnumString};
use time::OffsetDateTime;

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AccessLink {
    pub id: AccessLinkId,
    pub created_date: OffsetDateTime,
    pub last_modified: OffsetDateTime,
    pub target: AccessLinkTarget,
    pub title: String,
    pub description: Option<String>,
    pub status: AccessLinkStatus,
    /// PHC encoded hash of the PIN, the plaintext is never stored
    pub secret_hash: String,
    pub expires_at: OffsetDateTime,
    pub created_by: AdminId,
    pub contact: CounterpartyContact,
}

/// Where submissions through the link end up.
///
/// Resolved once when the link is created and never changed afterwards.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum AccessLinkTarget {
    Case(CaseId),
    Hearing(CaseId, HearingId),
}

impl AccessLinkTarget {
    pub fn case_id(&self) -> CaseId {
        match self {
            Self::Case(case_id) | Self::Hearing(case_id, _) => *case_id,
        }
    }

    pub fn hearing_id(&self) -> Option<HearingId> {
        match self {
            Self::Case(_) => None,
            Self::Hearing(_, hearing_id) => Some(*hearing_id),
        }
    }
}

#[derive(Clone, Copy, Debug, Display, EnumString, Eq, PartialEq)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum AccessLinkStatus {
    Active,
    Expired,
    Used,
}

impl AccessLinkStatus {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Self::Active)
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CounterpartyContact {
    pub email: String,
    pub phone: Option<String>,
}

/// Extra condition for a status transition, checked atomically with the status itself
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TransitionCondition {
    /// Only transition when the link is still valid at the given time
    NotExpiredAt(OffsetDateTime),
    /// Only transition when the link is already past its expiry at the given time
    ExpiredAt(OffsetDateTime),
}
