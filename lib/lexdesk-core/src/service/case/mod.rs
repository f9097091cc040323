use std::sync::Arc;

use crate::proto::clock::Clock;
use crate::repository::case_repository::CaseRepository;
use crate::repository::client_repository::ClientRepository;
use crate::repository::comment_repository::CommentRepository;
use crate::repository::history_repository::HistoryRepository;

pub mod dto;
pub mod service;

pub(crate) mod mapper;
pub(crate) mod validator;

#[derive(Clone)]
pub struct CaseService {
    case_repository: Arc<dyn CaseRepository>,
    client_repository: Arc<dyn ClientRepository>,
    comment_repository: Arc<dyn CommentRepository>,
    history_repository: Arc<dyn HistoryRepository>,
    clock: Arc<dyn Clock>,
}

impl CaseService {
    pub(crate) fn new(
        case_repository: Arc<dyn CaseRepository>,
        client_repository: Arc<dyn ClientRepository>,
        comment_repository: Arc<dyn CommentRepository>,
        history_repository: Arc<dyn HistoryRepository>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            case_repository,
            client_repository,
            comment_repository,
            history_repository,
            clock,
        }
    }
}
