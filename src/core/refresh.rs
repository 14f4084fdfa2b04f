use crate::api::ApiClient;
use crate::core::request::{RequestState, RequestTracker, Ticket};
use crate::errors::{AppError, AppResult};
use crate::models::{FilterCriteria, SaleRecord};

/// Keeps the displayed sales list in sync with the server.
///
/// The list is fully replaced on every successful fetch and never cached
/// beyond what is currently shown.
#[derive(Debug, Default)]
pub struct RefreshCycle {
    filters: FilterCriteria,
    tracker: RequestTracker<Vec<SaleRecord>>,
}

impl RefreshCycle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn filters(&self) -> &FilterCriteria {
        &self.filters
    }

    pub fn state(&self) -> &RequestState<Vec<SaleRecord>> {
        self.tracker.state()
    }

    pub fn is_loading(&self) -> bool {
        self.tracker.state().is_loading()
    }

    pub fn error(&self) -> Option<&str> {
        self.tracker.state().error()
    }

    /// Records currently on display; empty unless the last fetch succeeded.
    pub fn records(&self) -> &[SaleRecord] {
        self.tracker
            .state()
            .value()
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Fetch with the active filters.
    pub fn refresh(&mut self, client: &ApiClient) -> AppResult<()> {
        let filters = self.filters;
        self.tracker
            .run(|| client.list_sales(&filters).map_err(AppError::from))
    }

    /// Replace the active filters and fetch with them.
    pub fn apply_filters(&mut self, client: &ApiClient, filters: FilterCriteria) -> AppResult<()> {
        self.filters = filters;
        self.refresh(client)
    }

    /// Split form of `refresh` for callers that perform the fetch themselves.
    pub fn begin(&mut self) -> (Ticket, FilterCriteria) {
        (self.tracker.begin(), self.filters)
    }

    pub fn set_filters(&mut self, filters: FilterCriteria) {
        self.filters = filters;
    }

    pub fn complete(&mut self, ticket: Ticket, result: AppResult<Vec<SaleRecord>>) -> bool {
        match result {
            Ok(records) => self.tracker.complete(ticket, records),
            Err(e) => self.tracker.fail(ticket, e.to_string()),
        }
    }

    pub fn reset(&mut self) {
        self.tracker.reset();
    }
}
