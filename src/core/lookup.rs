use crate::api::ApiClient;
use crate::core::request::{RequestState, RequestTracker};
use crate::errors::{AppError, AppResult};
use crate::models::SaleRecord;

pub const MSG_EMPTY_ID: &str = "Por favor, insira um ID de venda.";

/// What the lookup panel shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupStatus {
    Idle,
    Searching,
    Found(SaleRecord),
    NotFound(String),
    Failed(String),
}

pub fn not_found_message(id: &str) -> String {
    format!("Nenhuma venda encontrada com o ID: {}", id)
}

/// Single-record fetch keyed by a user-typed identifier. Only runs on an
/// explicit `search`.
#[derive(Debug, Default)]
pub struct RecordLookup {
    input: String,
    tracker: RequestTracker<Option<SaleRecord>>,
}

impl RecordLookup {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    /// Any change to the input discards the previous outcome.
    pub fn set_input(&mut self, input: &str) {
        if self.input != input {
            self.input = input.to_string();
            self.tracker.reset();
        }
    }

    pub fn status(&self) -> LookupStatus {
        match self.tracker.state() {
            RequestState::Idle => LookupStatus::Idle,
            RequestState::Loading => LookupStatus::Searching,
            RequestState::Loaded(Some(record)) => LookupStatus::Found(record.clone()),
            RequestState::Loaded(None) => LookupStatus::NotFound(not_found_message(self.input.trim())),
            RequestState::Failed(msg) => LookupStatus::Failed(msg.clone()),
        }
    }

    /// Local checks only; a rejected input never reaches the network.
    pub fn validate(&mut self) -> AppResult<u64> {
        let raw = self.input.trim();
        if raw.is_empty() {
            self.tracker.reject(MSG_EMPTY_ID);
            return Err(AppError::Validation(MSG_EMPTY_ID.to_string()));
        }

        match raw.parse::<u64>() {
            Ok(id) => Ok(id),
            Err(_) => {
                let err = AppError::InvalidId(raw.to_string());
                self.tracker.reject(err.to_string());
                Err(err)
            }
        }
    }

    pub fn search(&mut self, client: &ApiClient) -> AppResult<()> {
        let id = self.validate()?;
        self.tracker
            .run(|| client.get_sale_by_id(id).map_err(AppError::from))
    }

    pub fn reset(&mut self) {
        self.input.clear();
        self.tracker.reset();
    }
}
