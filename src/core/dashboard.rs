//! Top-level orchestration of the sales dashboard.
//!
//! `Dashboard` owns every flow and the current view. All flow results pass
//! through [`Dashboard::guard`]: a 401/403 from any call tears the session
//! down and returns the user to the login view.

use crate::api::ApiClient;
use crate::core::lookup::{LookupStatus, RecordLookup};
use crate::core::mutation::{CreateSaleForm, DeleteFlow, SaleDraft};
use crate::core::refresh::RefreshCycle;
use crate::db::log::audit;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::{Credentials, DeleteConfirmation, FilterCriteria, SaleRecord};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Login,
    Main,
}

pub struct Dashboard<'a> {
    client: ApiClient<'a>,
    audit_log: Option<&'a DbPool>,
    view: View,
    login_error: Option<String>,
    refresh: RefreshCycle,
    lookup: RecordLookup,
    create: CreateSaleForm,
    delete: DeleteFlow,
}

impl<'a> Dashboard<'a> {
    /// The initial view follows whatever token the store already holds.
    pub fn new(client: ApiClient<'a>) -> AppResult<Self> {
        let view = if client.session().is_authenticated()? {
            View::Main
        } else {
            View::Login
        };

        Ok(Self {
            client,
            audit_log: None,
            view,
            login_error: None,
            refresh: RefreshCycle::new(),
            lookup: RecordLookup::new(),
            create: CreateSaleForm::new(),
            delete: DeleteFlow::new(),
        })
    }

    /// Record session and mutation events in the storage `log` table.
    pub fn with_audit_log(mut self, pool: &'a DbPool) -> Self {
        self.audit_log = Some(pool);
        self
    }

    pub fn view(&self) -> View {
        self.view
    }

    pub fn login_error(&self) -> Option<&str> {
        self.login_error.as_deref()
    }

    pub fn refresh_cycle(&self) -> &RefreshCycle {
        &self.refresh
    }

    pub fn records(&self) -> &[SaleRecord] {
        self.refresh.records()
    }

    pub fn filters(&self) -> &FilterCriteria {
        self.refresh.filters()
    }

    pub fn lookup_status(&self) -> LookupStatus {
        self.lookup.status()
    }

    pub fn create_form(&self) -> &CreateSaleForm {
        &self.create
    }

    pub fn delete_flow(&self) -> &DeleteFlow {
        &self.delete
    }

    // ---------------------------
    // Session
    // ---------------------------

    pub fn login(&mut self, credentials: &Credentials) -> AppResult<()> {
        self.login_error = None;

        if credentials.usuario.trim().is_empty() || credentials.senha.is_empty() {
            let msg = "Informe usuário e senha.";
            self.login_error = Some(msg.to_string());
            return Err(AppError::Validation(msg.to_string()));
        }

        if let Err(e) = self.client.login(credentials) {
            self.login_error = Some(e.message.clone());
            self.view = View::Login;
            return Err(e.into());
        }

        self.view = View::Main;
        self.audit("login", &credentials.usuario, "Login successful");
        self.mount()
    }

    pub fn logout(&mut self) -> AppResult<()> {
        self.client.logout()?;
        self.enter_login_view();
        self.audit("logout", "", "Session token cleared");
        Ok(())
    }

    fn force_logout(&mut self) -> AppResult<()> {
        tracing::warn!("authorization rejected by server, clearing session");
        self.client.logout()?;
        self.enter_login_view();
        self.audit(
            "forced_logout",
            "",
            "Session cleared after authorization rejection",
        );
        Ok(())
    }

    fn enter_login_view(&mut self) {
        self.view = View::Login;
        self.refresh.reset();
        self.lookup.reset();
        self.create.close();
        self.delete.cancel();
    }

    /// Escalate authorization rejections to a session teardown; every other
    /// outcome passes through untouched.
    fn guard<T>(&mut self, result: AppResult<T>) -> AppResult<T> {
        match result {
            Err(AppError::Api(e)) if e.is_auth_rejection() => {
                self.force_logout()?;
                Err(AppError::SessionExpired)
            }
            other => other,
        }
    }

    fn require_main(&self) -> AppResult<()> {
        match self.view {
            View::Main => Ok(()),
            View::Login => Err(AppError::NotAuthenticated),
        }
    }

    // ---------------------------
    // Refresh cycle
    // ---------------------------

    /// Initial fetch. Without a session there is nothing to show.
    pub fn mount(&mut self) -> AppResult<()> {
        match self.view {
            View::Main => self.refresh(),
            View::Login => {
                self.refresh.reset();
                Ok(())
            }
        }
    }

    pub fn refresh(&mut self) -> AppResult<()> {
        self.require_main()?;
        let result = self.refresh.refresh(&self.client);
        self.guard(result)
    }

    pub fn apply_filters(&mut self, filters: FilterCriteria) -> AppResult<()> {
        self.require_main()?;
        let result = self.refresh.apply_filters(&self.client, filters);
        self.guard(result)
    }

    /// Set the filters a later refresh will use, without fetching.
    pub fn set_filters(&mut self, filters: FilterCriteria) {
        self.refresh.set_filters(filters);
    }

    // ---------------------------
    // Lookup
    // ---------------------------

    pub fn set_lookup_input(&mut self, input: &str) {
        self.lookup.set_input(input);
    }

    pub fn search(&mut self) -> AppResult<LookupStatus> {
        self.lookup.validate()?;
        self.require_main()?;
        let result = self.lookup.search(&self.client);
        self.guard(result)?;
        Ok(self.lookup.status())
    }

    /// Fetch one record outside the lookup panel (no state change).
    pub fn fetch_sale(&mut self, id: u64) -> AppResult<Option<SaleRecord>> {
        self.require_main()?;
        let result = self.client.get_sale_by_id(id).map_err(AppError::from);
        self.guard(result)
    }

    // ---------------------------
    // Create
    // ---------------------------

    pub fn open_create_form(&mut self) {
        self.create.open();
    }

    pub fn close_create_form(&mut self) {
        self.create.close();
    }

    pub fn draft_mut(&mut self) -> &mut SaleDraft {
        self.create.draft_mut()
    }

    /// Create, then refetch the list once with the active filters.
    pub fn submit_create(&mut self) -> AppResult<SaleRecord> {
        self.create.validate()?;
        self.require_main()?;
        let result = self.create.submit(&self.client);
        let record = self.guard(result)?;

        self.audit(
            "add",
            &format!("sale #{}", record.id),
            &format!("Created sale '{}'", record.product_name),
        );
        self.refresh_after_mutation();
        Ok(record)
    }

    // ---------------------------
    // Delete
    // ---------------------------

    pub fn request_delete(&mut self, record: SaleRecord) {
        self.delete.request(record);
    }

    pub fn cancel_delete(&mut self) {
        self.delete.cancel();
    }

    /// Delete the pending selection, then refetch the list once.
    pub fn confirm_delete(&mut self) -> AppResult<DeleteConfirmation> {
        self.require_main()?;
        let result = self.delete.confirm(&self.client);
        let confirmation = self.guard(result)?;

        self.audit(
            "del",
            &format!("sale #{}", confirmation.id),
            "Sale deleted",
        );
        self.refresh_after_mutation();
        Ok(confirmation)
    }

    /// The mutation already succeeded; a failed refetch is left in the
    /// refresh state (and auth failures have been escalated by `guard`).
    fn refresh_after_mutation(&mut self) {
        if let Err(e) = self.refresh() {
            tracing::warn!(error = %e, "list refresh after mutation failed");
        }
    }

    fn audit(&self, operation: &str, target: &str, message: &str) {
        if let Some(pool) = self.audit_log {
            audit(&pool.conn, operation, target, message);
        }
    }
}
