use std::sync::Arc;

use crate::repository::history_repository::HistoryRepository;

pub mod dto;
pub mod service;

#[derive(Clone)]
pub struct HistoryService {
    history_repository: Arc<dyn HistoryRepository>,
}

impl HistoryService {
    pub(crate) fn new(history_repository: Arc<dyn HistoryRepository>) -> Self {
        Self { history_repository }
    }
}
