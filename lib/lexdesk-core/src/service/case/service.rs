use shared_types::{CaseId, CommentId, EntityId, HearingId};

use super::CaseService;
use super::dto::{
    CaseResponseDTO, CommentResponseDTO, CreateCaseRequestDTO, CreateCommentRequestDTO,
    CreateHearingRequestDTO, GetCaseListQueryDTO, GetCaseListResponseDTO, HearingResponseDTO,
};
use super::mapper::{
    case_from_create_request, comment_from_create_request, hearing_from_create_request,
};
use super::validator::{
    validate_create_case_request, validate_create_comment_request,
    validate_create_hearing_request,
};
use crate::model::case::{Case, CaseListQuery};
use crate::model::common::ListPagination;
use crate::model::history::{HistoryAction, HistoryEntityType};
use crate::proto::session::Session;
use crate::service::error::{EntityNotFoundError, ServiceError, ValidationError};
use crate::util::history::{history_event, log_history_event};

impl CaseService {
    /// Opens a case for a client
    ///
    /// # Arguments
    ///
    /// * `request` - client reference and case details
    /// * `session` - acting admin, must own the client
    pub async fn create_case(
        &self,
        request: CreateCaseRequestDTO,
        session: &Session,
    ) -> Result<CaseId, ServiceError> {
        validate_create_case_request(&request)?;

        let Some(client) = self.client_repository.get_client(&request.client_id).await? else {
            return Err(EntityNotFoundError::Client(request.client_id).into());
        };
        session.ensure_owner(&client.owner_id)?;

        let case = case_from_create_request(request, &client, self.clock.now_utc());
        let id = self.case_repository.create_case(case).await?;

        tracing::info!(%id, client_id = %client.id, "Case created");
        self.log_event(id, HistoryEntityType::Case, session).await;

        Ok(id)
    }

    pub async fn get_case(
        &self,
        case_id: &CaseId,
        session: &Session,
    ) -> Result<CaseResponseDTO, ServiceError> {
        Ok(self.get_owned_case(case_id, session).await?.into())
    }

    /// Returns a page of cases, advocates only see their own
    pub async fn get_case_list(
        &self,
        query: GetCaseListQueryDTO,
        session: &Session,
    ) -> Result<GetCaseListResponseDTO, ServiceError> {
        let list = self
            .case_repository
            .get_case_list(CaseListQuery {
                pagination: ListPagination {
                    page: query.page,
                    page_size: query.page_size,
                },
                owner_id: session.owner_filter(),
                client_id: query.client_id,
            })
            .await?;

        Ok(list.map(Into::into))
    }

    /// Schedules a hearing within a case
    ///
    /// # Arguments
    ///
    /// * `case_id` - id of the case
    /// * `request` - hearing date and title
    /// * `session` - acting admin, must own the case
    pub async fn create_hearing(
        &self,
        case_id: &CaseId,
        request: CreateHearingRequestDTO,
        session: &Session,
    ) -> Result<HearingId, ServiceError> {
        validate_create_hearing_request(&request)?;
        let case = self.get_owned_case(case_id, session).await?;

        let hearing = hearing_from_create_request(request, case.id, self.clock.now_utc());
        let id = self.case_repository.create_hearing(hearing).await?;

        tracing::info!(%id, %case_id, "Hearing created");
        self.log_event(id, HistoryEntityType::Hearing, session).await;

        Ok(id)
    }

    pub async fn get_hearing_list(
        &self,
        case_id: &CaseId,
        session: &Session,
    ) -> Result<Vec<HearingResponseDTO>, ServiceError> {
        self.get_owned_case(case_id, session).await?;

        let hearings = self.case_repository.get_hearing_list(case_id).await?;

        Ok(hearings.into_iter().map(Into::into).collect())
    }

    /// Posts a comment of the acting admin against a case or one of its hearings
    ///
    /// # Arguments
    ///
    /// * `case_id` - id of the case
    /// * `request` - optional hearing, text and attachment references
    /// * `session` - acting admin, must own the case
    pub async fn create_comment(
        &self,
        case_id: &CaseId,
        request: CreateCommentRequestDTO,
        session: &Session,
    ) -> Result<CommentId, ServiceError> {
        validate_create_comment_request(&request)?;
        let case = self.get_owned_case(case_id, session).await?;

        if let Some(hearing_id) = request.hearing_id {
            self.ensure_hearing_of_case(&case, &hearing_id).await?;
        }

        let comment =
            comment_from_create_request(request, case.id, session.admin_id, self.clock.now_utc());
        let id = self.comment_repository.create_comment(comment).await?;

        tracing::info!(%id, %case_id, "Comment created");
        self.log_event(id, HistoryEntityType::Comment, session).await;

        Ok(id)
    }

    /// Lists comments of owners and of access links, newest first
    ///
    /// # Arguments
    ///
    /// * `case_id` - id of the case
    /// * `hearing_id` - restricts the list to one hearing of the case
    /// * `session` - acting admin, must own the case
    pub async fn get_comment_list(
        &self,
        case_id: &CaseId,
        hearing_id: Option<HearingId>,
        session: &Session,
    ) -> Result<Vec<CommentResponseDTO>, ServiceError> {
        let case = self.get_owned_case(case_id, session).await?;

        if let Some(hearing_id) = &hearing_id {
            self.ensure_hearing_of_case(&case, hearing_id).await?;
        }

        let comments = self
            .comment_repository
            .get_comment_list(case_id, hearing_id)
            .await?;

        Ok(comments.into_iter().map(Into::into).collect())
    }

    async fn get_owned_case(&self, case_id: &CaseId, session: &Session) -> Result<Case, ServiceError> {
        let Some(case) = self.case_repository.get_case(case_id).await? else {
            return Err(EntityNotFoundError::Case(*case_id).into());
        };

        session.ensure_owner(&case.owner_id)?;

        Ok(case)
    }

    async fn ensure_hearing_of_case(
        &self,
        case: &Case,
        hearing_id: &HearingId,
    ) -> Result<(), ServiceError> {
        let Some(hearing) = self.case_repository.get_hearing(hearing_id).await? else {
            return Err(EntityNotFoundError::Hearing(*hearing_id).into());
        };

        if hearing.case_id != case.id {
            return Err(ValidationError::HearingCaseMismatch {
                case_id: case.id,
                hearing_id: *hearing_id,
            }
            .into());
        }

        Ok(())
    }

    async fn log_event(
        &self,
        entity_id: impl Into<EntityId>,
        entity_type: HistoryEntityType,
        session: &Session,
    ) {
        log_history_event(
            &*self.history_repository,
            history_event(
                entity_id,
                entity_type,
                HistoryAction::Created,
                Some(session.admin_id),
            ),
        )
        .await;
    }
}
