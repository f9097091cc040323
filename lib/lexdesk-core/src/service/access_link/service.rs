use secrecy::SecretString;
use shared_types::{AccessLinkId, CaseId, CommentId};
use time::{Duration, OffsetDateTime};

use super::AccessLinkService;
use super::dto::{
    AccessLinkResponseDTO, CreateAccessLinkRequestDTO, CreateAccessLinkResponseDTO,
    SubmissionReceiptDTO, SubmissionRequestDTO, VerifyAccessLinkResponseDTO,
};
use super::mapper::{attachment_from_request, link_created_notification, link_used_notification};
use super::validator::{validate_create_request, validate_submission};
use crate::model::access_link::{
    AccessLink, AccessLinkStatus, AccessLinkTarget, CounterpartyContact, TransitionCondition,
};
use crate::model::case::Case;
use crate::model::comment::{Comment, CommentAuthor};
use crate::model::history::{HistoryAction, HistoryEntityType};
use crate::proto::session::Session;
use crate::provider::capability_token::CapabilityTokenError;
use crate::provider::notifier::send_best_effort;
use crate::service::error::{
    BusinessLogicError, EntityNotFoundError, ServiceError, ValidationError,
};
use crate::util::history::{history_event, log_history_event};

const SWEEP_BATCH_SIZE: u64 = 500;

impl AccessLinkService {
    /// Creates a PIN protected link and sends the PIN to the counterparty
    ///
    /// The returned PIN is not stored anywhere and cannot be retrieved again.
    ///
    /// # Arguments
    ///
    /// * `request` - target, expiry and counterparty contact
    /// * `session` - acting admin, must own the case
    pub async fn create_access_link(
        &self,
        request: CreateAccessLinkRequestDTO,
        session: &Session,
    ) -> Result<CreateAccessLinkResponseDTO, ServiceError> {
        validate_create_request(&request, &self.config.access_link)?;

        let case = self.get_owned_case(&request.case_id, session).await?;

        let target = match request.hearing_id {
            None => AccessLinkTarget::Case(case.id),
            Some(hearing_id) => {
                let Some(hearing) = self.case_repository.get_hearing(&hearing_id).await? else {
                    return Err(EntityNotFoundError::Hearing(hearing_id).into());
                };

                if hearing.case_id != case.id {
                    return Err(ValidationError::HearingCaseMismatch {
                        case_id: case.id,
                        hearing_id,
                    }
                    .into());
                }

                AccessLinkTarget::Hearing(case.id, hearing_id)
            }
        };

        let pin = self.pin_provider.generate();
        let secret_hash = self.pin_provider.hash(&pin).await?;

        let now = self.clock.now_utc();
        let link = AccessLink {
            id: AccessLinkId::new_v4(),
            created_date: now,
            last_modified: now,
            target,
            title: request.title.trim().to_owned(),
            description: request.description,
            status: AccessLinkStatus::Active,
            secret_hash,
            expires_at: now + Duration::hours(i64::from(request.expires_in_hours)),
            created_by: session.admin_id,
            contact: CounterpartyContact {
                email: request.contact_email.trim().to_owned(),
                phone: request.contact_phone,
            },
        };

        let id = self
            .access_link_repository
            .create_access_link(link.clone())
            .await?;
        tracing::info!(%id, case_id = %case.id, expires_at = %link.expires_at, "Access link created");

        log_history_event(
            &*self.history_repository,
            history_event(
                id,
                HistoryEntityType::AccessLink,
                HistoryAction::Created,
                Some(session.admin_id),
            ),
        )
        .await;

        send_best_effort(
            &*self.notifier,
            link_created_notification(&link, &pin, &self.config.access_link),
            self.config.notification.timeout,
        )
        .await;

        Ok(CreateAccessLinkResponseDTO {
            link: link.into(),
            pin,
        })
    }

    /// Checks the presented PIN and issues a capability token scoped to the link
    ///
    /// A link found past its expiry is marked EXPIRED as a side effect.
    ///
    /// # Arguments
    ///
    /// * `link_id` - id of the link
    /// * `pin` - PIN presented by the counterparty
    pub async fn verify(
        &self,
        link_id: &AccessLinkId,
        pin: SecretString,
    ) -> Result<VerifyAccessLinkResponseDTO, ServiceError> {
        let Some(link) = self.access_link_repository.get_access_link(link_id).await? else {
            return Err(EntityNotFoundError::AccessLink(*link_id).into());
        };

        let now = self.clock.now_utc();
        match self.check_and_expire(&link, now).await? {
            AccessLinkStatus::Active => {}
            AccessLinkStatus::Expired => {
                return Err(BusinessLogicError::LinkExpired(link.id).into());
            }
            AccessLinkStatus::Used => {
                return Err(BusinessLogicError::LinkInactive(link.id).into());
            }
        }

        if !self.pin_provider.verify(&pin, &link.secret_hash).await? {
            tracing::warn!(%link_id, "Invalid PIN presented for access link");
            self.log_event(link.id, HistoryAction::VerificationFailed)
                .await;
            return Err(BusinessLogicError::InvalidSecret(link.id).into());
        }

        let token = self
            .token_provider
            .issue(link.id, link.expires_at)
            .map_err(|err| ServiceError::Other(err.to_string()))?;

        self.log_event(link.id, HistoryAction::Verified).await;

        Ok(VerifyAccessLinkResponseDTO {
            token,
            expires_at: link.expires_at,
        })
    }

    /// Stores a submission against the link target and marks the link USED
    ///
    /// Both happen in one transaction guarded by a conditional status update, so of two
    /// concurrent submissions only one succeeds.
    ///
    /// # Arguments
    ///
    /// * `token` - capability token obtained from [`AccessLinkService::verify`]
    /// * `request` - comment text and attachment references
    pub async fn consume(
        &self,
        token: &str,
        request: SubmissionRequestDTO,
    ) -> Result<SubmissionReceiptDTO, ServiceError> {
        let now = self.clock.now_utc();
        let link_id = match self.token_provider.validate(token, now) {
            Ok(link_id) => link_id,
            Err(CapabilityTokenError::Expired(link_id)) => {
                return Err(self.expired_token_error(link_id, now).await);
            }
            Err(error) => return Err(ValidationError::from(error).into()),
        };

        validate_submission(&request)?;

        let Some(link) = self.access_link_repository.get_access_link(&link_id).await? else {
            return Err(EntityNotFoundError::AccessLink(link_id).into());
        };

        match self.check_and_expire(&link, now).await? {
            AccessLinkStatus::Active => {}
            AccessLinkStatus::Expired => {
                return Err(BusinessLogicError::LinkExpired(link.id).into());
            }
            AccessLinkStatus::Used => {
                return Err(BusinessLogicError::LinkInactive(link.id).into());
            }
        }

        let comment_id = CommentId::new_v4();
        let comment = Comment {
            id: comment_id,
            created_date: now,
            case_id: link.target.case_id(),
            hearing_id: link.target.hearing_id(),
            author: CommentAuthor::AccessLink(link.id),
            text: request
                .text
                .map(|text| text.trim().to_owned())
                .filter(|text| !text.is_empty()),
            attachments: request
                .attachments
                .into_iter()
                .map(|attachment| attachment_from_request(attachment, comment_id, now))
                .collect(),
        };
        let attachment_count = comment.attachments.len();

        let access_link_repository = &self.access_link_repository;
        let comment_repository = &self.comment_repository;
        self.transaction_manager
            .tx(async move {
                let consumed = access_link_repository
                    .transition_status(
                        &link_id,
                        AccessLinkStatus::Active,
                        AccessLinkStatus::Used,
                        Some(TransitionCondition::NotExpiredAt(now)),
                        now,
                    )
                    .await?;

                if !consumed {
                    let current = access_link_repository
                        .get_access_link(&link_id)
                        .await?
                        .map(|link| link.status);

                    return Err(match current {
                        None => EntityNotFoundError::AccessLink(link_id).into(),
                        Some(AccessLinkStatus::Used) => {
                            BusinessLogicError::LinkInactive(link_id).into()
                        }
                        Some(AccessLinkStatus::Active | AccessLinkStatus::Expired) => {
                            BusinessLogicError::LinkExpired(link_id).into()
                        }
                    });
                }

                comment_repository.create_comment(comment).await?;

                Ok::<_, ServiceError>(())
            })
            .await??;

        tracing::info!(%link_id, %comment_id, attachment_count, "Access link consumed");
        self.log_event(link.id, HistoryAction::Consumed).await;
        self.notify_owner(&link, attachment_count).await;

        Ok(SubmissionReceiptDTO {
            comment_id,
            link_id,
            submitted_at: now,
            attachment_count,
        })
    }

    /// Returns details of a link, never including the PIN or its hash
    ///
    /// # Arguments
    ///
    /// * `link_id` - id of the link
    /// * `session` - acting admin, must own the case of the link
    pub async fn get_access_link(
        &self,
        link_id: &AccessLinkId,
        session: &Session,
    ) -> Result<AccessLinkResponseDTO, ServiceError> {
        let Some(mut link) = self.access_link_repository.get_access_link(link_id).await? else {
            return Err(EntityNotFoundError::AccessLink(*link_id).into());
        };

        self.get_owned_case(&link.target.case_id(), session).await?;

        link.status = self.check_and_expire(&link, self.clock.now_utc()).await?;

        Ok(link.into())
    }

    /// Returns all links of a case
    ///
    /// # Arguments
    ///
    /// * `case_id` - id of the case
    /// * `session` - acting admin, must own the case
    pub async fn get_access_link_list(
        &self,
        case_id: &CaseId,
        session: &Session,
    ) -> Result<Vec<AccessLinkResponseDTO>, ServiceError> {
        self.get_owned_case(case_id, session).await?;

        let now = self.clock.now_utc();
        let links = self
            .access_link_repository
            .get_access_link_list(case_id)
            .await?;

        let mut result = Vec::with_capacity(links.len());
        for mut link in links {
            link.status = self.check_and_expire(&link, now).await?;
            result.push(link.into());
        }

        Ok(result)
    }

    /// Marks the link EXPIRED when it is still ACTIVE but past its expiry
    ///
    /// Idempotent, returns the status the link has after the check.
    pub async fn check_and_expire(
        &self,
        link: &AccessLink,
        now: OffsetDateTime,
    ) -> Result<AccessLinkStatus, ServiceError> {
        if link.status != AccessLinkStatus::Active || now <= link.expires_at {
            return Ok(link.status);
        }

        let expired = self
            .access_link_repository
            .transition_status(
                &link.id,
                AccessLinkStatus::Active,
                AccessLinkStatus::Expired,
                Some(TransitionCondition::ExpiredAt(now)),
                now,
            )
            .await?;

        if expired {
            tracing::info!(link_id = %link.id, "Access link expired");
            self.log_event(link.id, HistoryAction::Expired).await;
            return Ok(AccessLinkStatus::Expired);
        }

        let current = self
            .access_link_repository
            .get_access_link(&link.id)
            .await?
            .map(|link| link.status);

        Ok(current.unwrap_or(AccessLinkStatus::Expired))
    }

    /// Error for a correctly signed token presented after its expiry, expires the link on the way
    async fn expired_token_error(
        &self,
        link_id: AccessLinkId,
        now: OffsetDateTime,
    ) -> ServiceError {
        let link = match self.access_link_repository.get_access_link(&link_id).await {
            Ok(Some(link)) => link,
            Ok(None) => return EntityNotFoundError::AccessLink(link_id).into(),
            Err(error) => return error.into(),
        };

        match self.check_and_expire(&link, now).await {
            Ok(AccessLinkStatus::Used) => BusinessLogicError::LinkInactive(link_id).into(),
            Ok(_) => BusinessLogicError::LinkExpired(link_id).into(),
            Err(error) => error,
        }
    }

    /// Expires every ACTIVE link that is past its expiry, returns how many were expired
    pub async fn expire_access_links(&self) -> Result<u64, ServiceError> {
        let now = self.clock.now_utc();
        let mut expired = 0;

        loop {
            let ids = self
                .access_link_repository
                .get_expired_active_ids(now, SWEEP_BATCH_SIZE)
                .await?;
            let batch_len = ids.len() as u64;

            for id in ids {
                let transitioned = self
                    .access_link_repository
                    .transition_status(
                        &id,
                        AccessLinkStatus::Active,
                        AccessLinkStatus::Expired,
                        Some(TransitionCondition::ExpiredAt(now)),
                        now,
                    )
                    .await?;

                if transitioned {
                    self.log_event(id, HistoryAction::Expired).await;
                    expired += 1;
                }
            }

            if batch_len < SWEEP_BATCH_SIZE {
                break;
            }
        }

        if expired > 0 {
            tracing::info!(expired, "Expired access links");
        }

        Ok(expired)
    }

    /// Deletes links that have been USED or EXPIRED for longer than `retention`
    pub async fn delete_terminal_access_links(
        &self,
        retention: Duration,
    ) -> Result<u64, ServiceError> {
        let cutoff = self.clock.now_utc() - retention;

        let deleted = self
            .access_link_repository
            .delete_terminal_before(cutoff)
            .await?;

        if deleted > 0 {
            tracing::info!(deleted, %cutoff, "Deleted terminal access links");
        }

        Ok(deleted)
    }

    async fn get_owned_case(
        &self,
        case_id: &CaseId,
        session: &Session,
    ) -> Result<Case, ServiceError> {
        let Some(case) = self.case_repository.get_case(case_id).await? else {
            return Err(EntityNotFoundError::Case(*case_id).into());
        };

        session.ensure_owner(&case.owner_id)?;

        Ok(case)
    }

    async fn notify_owner(&self, link: &AccessLink, attachment_count: usize) {
        let owner = match self.admin_repository.get_admin(&link.created_by).await {
            Ok(Some(owner)) => owner,
            Ok(None) => return,
            Err(error) => {
                tracing::warn!(link_id = %link.id, "Failed to load link owner: {error}");
                return;
            }
        };

        send_best_effort(
            &*self.notifier,
            link_used_notification(link, owner.email, attachment_count),
            self.config.notification.timeout,
        )
        .await;
    }

    async fn log_event(&self, link_id: AccessLinkId, action: HistoryAction) {
        log_history_event(
            &*self.history_repository,
            history_event(link_id, HistoryEntityType::AccessLink, action, None),
        )
        .await;
    }
}
