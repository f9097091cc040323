use std::sync::Arc;

use crate::proto::clock::Clock;
use crate::repository::admin_repository::AdminRepository;
use crate::repository::history_repository::HistoryRepository;

pub mod dto;
pub mod service;

pub(crate) mod mapper;
pub(crate) mod validator;

#[derive(Clone)]
pub struct AdminService {
    admin_repository: Arc<dyn AdminRepository>,
    history_repository: Arc<dyn HistoryRepository>,
    clock: Arc<dyn Clock>,
}

impl AdminService {
    pub(crate) fn new(
        admin_repository: Arc<dyn AdminRepository>,
        history_repository: Arc<dyn HistoryRepository>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            admin_repository,
            history_repository,
            clock,
        }
    }
}
