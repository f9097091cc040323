use std::sync::Arc;

use crate::proto::clock::Clock;
use crate::repository::client_repository::ClientRepository;
use crate::repository::history_repository::HistoryRepository;

pub mod dto;
pub mod service;

pub(crate) mod mapper;
pub(crate) mod validator;

#[derive(Clone)]
pub struct ClientService {
    client_repository: Arc<dyn ClientRepository>,
    history_repository: Arc<dyn HistoryRepository>,
    clock: Arc<dyn Clock>,
}

impl ClientService {
    pub(crate) fn new(
        client_repository: Arc<dyn ClientRepository>,
        history_repository: Arc<dyn HistoryRepository>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            client_repository,
            history_repository,
            clock,
        }
    }
}
