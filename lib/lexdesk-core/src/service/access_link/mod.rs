use std::sync::Arc;

use crate::config::core_config::CoreConfig;
use crate::proto::clock::Clock;
use crate::proto::transaction_manager::TransactionManager;
use crate::provider::capability_token::CapabilityTokenProvider;
use crate::provider::notifier::Notifier;
use crate::provider::pin::PinProvider;
use crate::repository::access_link_repository::AccessLinkRepository;
use crate::repository::admin_repository::AdminRepository;
use crate::repository::case_repository::CaseRepository;
use crate::repository::comment_repository::CommentRepository;
use crate::repository::history_repository::HistoryRepository;

pub mod dto;
pub mod service;

pub(crate) mod mapper;
pub(crate) mod validator;

#[derive(Clone)]
pub struct AccessLinkService {
    access_link_repository: Arc<dyn AccessLinkRepository>,
    case_repository: Arc<dyn CaseRepository>,
    comment_repository: Arc<dyn CommentRepository>,
    admin_repository: Arc<dyn AdminRepository>,
    history_repository: Arc<dyn HistoryRepository>,
    pin_provider: Arc<dyn PinProvider>,
    token_provider: Arc<dyn CapabilityTokenProvider>,
    notifier: Arc<dyn Notifier>,
    transaction_manager: Arc<dyn TransactionManager>,
    clock: Arc<dyn Clock>,
    config: Arc<CoreConfig>,
}

impl AccessLinkService {
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn new(
        access_link_repository: Arc<dyn AccessLinkRepository>,
        case_repository: Arc<dyn CaseRepository>,
        comment_repository: Arc<dyn CommentRepository>,
        admin_repository: Arc<dyn AdminRepository>,
        history_repository: Arc<dyn HistoryRepository>,
        pin_provider: Arc<dyn PinProvider>,
        token_provider: Arc<dyn CapabilityTokenProvider>,
        notifier: Arc<dyn Notifier>,
        transaction_manager: Arc<dyn TransactionManager>,
        clock: Arc<dyn Clock>,
        config: Arc<CoreConfig>,
    ) -> Self {
        Self {
            access_link_repository,
            case_repository,
            comment_repository,
            admin_repository,
            history_repository,
            pin_provider,
            token_provider,
            notifier,
            transaction_manager,
            clock,
            config,
        }
    }
}
