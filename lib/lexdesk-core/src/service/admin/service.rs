use shared_types::AdminId;

use super::AdminService;
use super::dto::{
    AdminResponseDTO, CreateAdminRequestDTO, GetAdminListQueryDTO, GetAdminListResponseDTO,
};
use super::mapper::{admin_from_create_request, normalize_email};
use super::validator::validate_create_request;
use crate::model::admin::{AdminListQuery, AdminRole};
use crate::model::common::ListPagination;
use crate::model::history::{HistoryAction, HistoryEntityType};
use crate::proto::session::Session;
use crate::repository::error::DataLayerError;
use crate::service::error::{
    BusinessLogicError, EntityNotFoundError, ServiceError, ValidationError,
};
use crate::util::history::{history_event, log_history_event};

impl AdminService {
    /// Creates a new admin account, super-admin only
    ///
    /// # Arguments
    ///
    /// * `request` - name, e-mail and role of the new account
    /// * `session` - acting admin
    pub async fn create_admin(
        &self,
        request: CreateAdminRequestDTO,
        session: &Session,
    ) -> Result<AdminId, ServiceError> {
        session.ensure_super_admin()?;
        validate_create_request(&request)?;

        let email = normalize_email(&request.email);
        if self
            .admin_repository
            .get_admin_by_email(&email)
            .await?
            .is_some()
        {
            return Err(BusinessLogicError::AdminAlreadyExists(email).into());
        }

        let admin = admin_from_create_request(request, self.clock.now_utc());
        let id = self
            .admin_repository
            .create_admin(admin)
            .await
            .map_err(|error| match error {
                DataLayerError::AlreadyExists => BusinessLogicError::AdminAlreadyExists(email).into(),
                error => ServiceError::from(error),
            })?;

        tracing::info!(%id, "Admin created");
        log_history_event(
            &*self.history_repository,
            history_event(
                id,
                HistoryEntityType::Admin,
                HistoryAction::Created,
                Some(session.admin_id),
            ),
        )
        .await;

        Ok(id)
    }

    /// Returns details of an admin, advocates may only read their own account
    pub async fn get_admin(
        &self,
        admin_id: &AdminId,
        session: &Session,
    ) -> Result<AdminResponseDTO, ServiceError> {
        session.ensure_owner(admin_id)?;

        let Some(admin) = self.admin_repository.get_admin(admin_id).await? else {
            return Err(EntityNotFoundError::Admin(*admin_id).into());
        };

        Ok(admin.into())
    }

    pub async fn get_admin_list(
        &self,
        query: GetAdminListQueryDTO,
        session: &Session,
    ) -> Result<GetAdminListResponseDTO, ServiceError> {
        session.ensure_super_admin()?;

        let list = self
            .admin_repository
            .get_admin_list(AdminListQuery {
                pagination: ListPagination {
                    page: query.page,
                    page_size: query.page_size,
                },
                role: query.role,
            })
            .await?;

        Ok(list.map(Into::into))
    }

    /// Resolves the acting admin of an authenticated request
    ///
    /// Unknown and deactivated admins are rejected as `Forbidden`.
    pub async fn get_session(&self, admin_id: &AdminId) -> Result<Session, ServiceError> {
        match self.admin_repository.get_admin(admin_id).await? {
            Some(admin) if admin.is_active() => Ok(Session {
                admin_id: admin.id,
                role: admin.role,
            }),
            Some(_) => {
                tracing::warn!(%admin_id, "Rejected deactivated admin");
                Err(ValidationError::Forbidden.into())
            }
            None => {
                tracing::warn!(%admin_id, "Rejected unknown admin");
                Err(ValidationError::Forbidden.into())
            }
        }
    }

    /// Makes sure the configured initial super-admin exists, returns its id
    pub async fn bootstrap_super_admin(
        &self,
        name: &str,
        email: &str,
    ) -> Result<AdminId, ServiceError> {
        let request = CreateAdminRequestDTO {
            name: name.to_owned(),
            email: email.to_owned(),
            phone: None,
            role: AdminRole::SuperAdmin,
        };
        validate_create_request(&request)?;

        if let Some(existing) = self
            .admin_repository
            .get_admin_by_email(&normalize_email(email))
            .await?
        {
            return Ok(existing.id);
        }

        let id = self
            .admin_repository
            .create_admin(admin_from_create_request(request, self.clock.now_utc()))
            .await?;

        tracing::info!(%id, "Initial super-admin created");
        log_history_event(
            &*self.history_repository,
            history_event(id, HistoryEntityType::Admin, HistoryAction::Created, None),
        )
        .await;

        Ok(id)
    }
}
