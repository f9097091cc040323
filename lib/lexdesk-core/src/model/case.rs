use shared_types::{AdminId, CaseId, ClientId, HearingId};
use time::OffsetDateTime;

use super::common::{GetListResponse, ListPagination};

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Case {
    pub id: CaseId,
    pub created_date: OffsetDateTime,
    pub last_modified: OffsetDateTime,
    pub owner_id: AdminId,
    pub client_id: ClientId,
    pub title: String,
    pub case_number: String,
    pub description: Option<String>,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Hearing {
    pub id: HearingId,
    pub created_date: OffsetDateTime,
    pub case_id: CaseId,
    pub hearing_date: OffsetDateTime,
    pub title: String,
    pub notes: Option<String>,
}

#[derive(Clone, Debug, Default)]
pub struct CaseListQuery {
    pub pagination: ListPagination,
    pub owner_id: Option<AdminId>,
    pub client_id: Option<ClientId>,
}

pub type GetCaseList = GetListResponse<Case>;
