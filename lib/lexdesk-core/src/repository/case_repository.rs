use shared_types::{CaseId, HearingId};

use super::error::DataLayerError;
use crate::model::case::{Case, CaseListQuery, GetCaseList, Hearing};

#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
#[async_trait::async_trait]
pub trait CaseRepository: Send + Sync {
    async fn create_case(&self, request: Case) -> Result<CaseId, DataLayerError>;

    async fn get_case(&self, id: &CaseId) -> Result<Option<Case>, DataLayerError>;

    async fn get_case_list(&self, query: CaseListQuery) -> Result<GetCaseList, DataLayerError>;

    async fn create_hearing(&self, request: Hearing) -> Result<HearingId, DataLayerError>;

    async fn get_hearing(&self, id: &HearingId) -> Result<Option<Hearing>, DataLayerError>;

    /// Hearings of a case ordered by hearing date
    async fn get_hearing_list(&self, case_id: &CaseId) -> Result<Vec<Hearing>, DataLayerError>;
}
