use std::fmt;

use lexdesk_core::model::common::GetListResponse;
use one_dto_mapper::convert_inner;
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

pub(crate) const MAX_PAGE_SIZE: u32 = 1000;

pub(crate) fn default_page_size() -> u32 {
    20
}

/// Clamps a requested page size into `1..=MAX_PAGE_SIZE`
pub(crate) fn page_size(requested: u32) -> u32 {
    requested.clamp(1, MAX_PAGE_SIZE)
}

#[derive(Clone, Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct GetListResponseRestDTO<T>
where
    T: fmt::Debug + Serialize,
{
    pub values: Vec<T>,
    pub total_pages: u64,
    pub total_items: u64,
}

impl<T, U> From<GetListResponse<U>> for GetListResponseRestDTO<T>
where
    T: fmt::Debug + Serialize,
    U: Into<T>,
{
    fn from(value: GetListResponse<U>) -> Self {
        Self {
            values: convert_inner(value.values),
            total_pages: value.total_pages,
            total_items: value.total_items,
        }
    }
}

#[derive(Clone, Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct EntityResponseRestDTO {
    pub id: Uuid,
}

impl<T> From<T> for EntityResponseRestDTO
where
    T: Into<Uuid>,
{
    fn from(id: T) -> Self {
        EntityResponseRestDTO { id: id.into() }
    }
}
