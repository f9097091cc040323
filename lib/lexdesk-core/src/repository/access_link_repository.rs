use shared_types::{AccessLinkId, CaseId};
use time::OffsetDateTime;

use super::error::DataLayerError;
use crate::model::access_link::{AccessLink, AccessLinkStatus, TransitionCondition};

#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
#[async_trait::async_trait]
pub trait AccessLinkRepository: Send + Sync {
    async fn create_access_link(&self, request: AccessLink)
    -> Result<AccessLinkId, DataLayerError>;

    async fn get_access_link(
        &self,
        id: &AccessLinkId,
    ) -> Result<Option<AccessLink>, DataLayerError>;

    async fn get_access_link_list(
        &self,
        case_id: &CaseId,
    ) -> Result<Vec<AccessLink>, DataLayerError>;

    /// Atomic compare-and-swap of the link status.
    ///
    /// Returns `true` only if the stored status equalled `from` (and the optional
    /// `condition` held) and the row was updated to `to`.
    async fn transition_status(
        &self,
        id: &AccessLinkId,
        from: AccessLinkStatus,
        to: AccessLinkStatus,
        condition: Option<TransitionCondition>,
        now: OffsetDateTime,
    ) -> Result<bool, DataLayerError>;

    /// Ids of links still ACTIVE whose expiry is before `now`
    async fn get_expired_active_ids(
        &self,
        now: OffsetDateTime,
        limit: u64,
    ) -> Result<Vec<AccessLinkId>, DataLayerError>;

    /// Removes terminal links last modified before `cutoff`, returns the number removed
    async fn delete_terminal_before(&self, cutoff: OffsetDateTime) -> Result<u64, DataLayerError>;
}
