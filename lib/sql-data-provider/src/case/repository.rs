use autometrics::autometrics;
use lexdesk_core::model::case::{Case, CaseListQuery, GetCaseList, Hearing};
use lexdesk_core::repository::case_repository::CaseRepository;
use lexdesk_core::repository::error::DataLayerError;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder};
use shared_types::{CaseId, HearingId};

use super::CaseProvider;
use crate::common::fetch_page;
use crate::entity::{hearing, legal_case};
use crate::mapper::to_data_layer_error;

#[autometrics]
#[async_trait::async_trait]
impl CaseRepository for CaseProvider {
    async fn create_case(&self, request: Case) -> Result<CaseId, DataLayerError> {
        let id = request.id;

        legal_case::Entity::insert(legal_case::ActiveModel::from(request))
            .exec(&self.db.tx())
            .await
            .map_err(to_data_layer_error)?;

        Ok(id)
    }

    async fn get_case(&self, id: &CaseId) -> Result<Option<Case>, DataLayerError> {
        let case = legal_case::Entity::find_by_id(id)
            .one(&self.db.tx())
            .await
            .map_err(to_data_layer_error)?;

        Ok(case.map(Case::from))
    }

    async fn get_case_list(&self, query: CaseListQuery) -> Result<GetCaseList, DataLayerError> {
        let mut select = legal_case::Entity::find()
            .order_by_desc(legal_case::Column::CreatedDate)
            .order_by_asc(legal_case::Column::Id);

        if let Some(owner_id) = query.owner_id {
            select = select.filter(legal_case::Column::OwnerId.eq(owner_id));
        }
        if let Some(client_id) = query.client_id {
            select = select.filter(legal_case::Column::ClientId.eq(client_id));
        }

        let page = fetch_page(select, &query.pagination, &self.db.tx())
            .await
            .map_err(to_data_layer_error)?;

        Ok(page.map(Case::from))
    }

    async fn create_hearing(&self, request: Hearing) -> Result<HearingId, DataLayerError> {
        let id = request.id;

        hearing::Entity::insert(hearing::ActiveModel::from(request))
            .exec(&self.db.tx())
            .await
            .map_err(to_data_layer_error)?;

        Ok(id)
    }

    async fn get_hearing(&self, id: &HearingId) -> Result<Option<Hearing>, DataLayerError> {
        let hearing = hearing::Entity::find_by_id(id)
            .one(&self.db.tx())
            .await
            .map_err(to_data_layer_error)?;

        Ok(hearing.map(Hearing::from))
    }

    async fn get_hearing_list(&self, case_id: &CaseId) -> Result<Vec<Hearing>, DataLayerError> {
        let hearings = hearing::Entity::find()
            .filter(hearing::Column::CaseId.eq(case_id))
            .order_by_asc(hearing::Column::HearingDate)
            .all(&self.db.tx())
            .await
            .map_err(to_data_layer_error)?;

        Ok(hearings.into_iter().map(Hearing::from).collect())
    }
}
