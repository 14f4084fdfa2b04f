//! Create and delete flows. Both leave list refreshing to the caller
//! (see `Dashboard`), which refetches once per successful mutation.

use crate::api::ApiClient;
use crate::errors::{AppError, AppResult};
use crate::models::{DeleteConfirmation, NewSale, SaleRecord};
use crate::utils::date;
use rust_decimal::Decimal;
use std::str::FromStr;

pub const MSG_NO_PENDING_DELETE: &str = "Nenhuma venda selecionada para exclusão.";

/// Raw text of the creation form, as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SaleDraft {
    pub product_name: String,
    pub quantity: String,
    pub sale_date: String,
    pub total_value: String,
}

impl SaleDraft {
    /// Presence checks plus the numeric and date parsing needed to build the
    /// payload. Nothing here touches the network.
    pub fn validate(&self) -> AppResult<NewSale> {
        let product_name = required(&self.product_name, "O nome do produto é obrigatório.")?;

        let quantity = required(&self.quantity, "A quantidade vendida é obrigatória.")?;
        let quantity_sold = quantity
            .parse::<u32>()
            .ok()
            .filter(|q| *q > 0)
            .ok_or_else(|| {
                AppError::Validation(
                    "A quantidade vendida deve ser um número inteiro positivo.".into(),
                )
            })?;

        let raw_date = required(&self.sale_date, "A data da venda é obrigatória.")?;
        let sale_date = date::parse_date(raw_date)
            .ok_or_else(|| AppError::InvalidDate(raw_date.to_string()))?;

        let raw_value = required(&self.total_value, "O valor total é obrigatório.")?;
        let total_value = parse_amount(raw_value)
            .filter(|v| !v.is_sign_negative())
            .ok_or_else(|| {
                AppError::Validation("O valor total deve ser um número não negativo.".into())
            })?;

        Ok(NewSale {
            product_name: product_name.to_string(),
            quantity_sold,
            sale_date,
            total_value,
        })
    }
}

fn required<'s>(value: &'s str, message: &str) -> AppResult<&'s str> {
    let v = value.trim();
    if v.is_empty() {
        Err(AppError::Validation(message.to_string()))
    } else {
        Ok(v)
    }
}

/// Accepts "59.90" as well as the pt-BR "59,90".
pub fn parse_amount(raw: &str) -> Option<Decimal> {
    let normalized = if raw.contains(',') && !raw.contains('.') {
        raw.replace(',', ".")
    } else {
        raw.to_string()
    };
    Decimal::from_str(&normalized).ok()
}

#[derive(Debug, Default)]
pub struct CreateSaleForm {
    open: bool,
    submitting: bool,
    draft: SaleDraft,
    error: Option<String>,
}

impl CreateSaleForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open(&mut self) {
        self.open = true;
        self.error = None;
    }

    pub fn close(&mut self) {
        self.open = false;
        self.submitting = false;
        self.draft = SaleDraft::default();
        self.error = None;
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn draft(&self) -> &SaleDraft {
        &self.draft
    }

    pub fn draft_mut(&mut self) -> &mut SaleDraft {
        &mut self.draft
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Validate the draft, keeping any message for inline display.
    pub fn validate(&mut self) -> AppResult<NewSale> {
        self.error = None;
        self.draft.validate().inspect_err(|e| {
            self.error = Some(e.to_string());
        })
    }

    /// On success the form closes; on any failure it stays open with the
    /// message inline.
    pub fn submit(&mut self, client: &ApiClient) -> AppResult<SaleRecord> {
        let sale = self.validate()?;

        self.submitting = true;
        let result = client.create_sale(&sale);
        self.submitting = false;

        match result {
            Ok(record) => {
                tracing::info!(id = record.id, "sale created");
                self.close();
                Ok(record)
            }
            Err(e) => {
                self.error = Some(e.message.clone());
                Err(e.into())
            }
        }
    }
}

/// Two-step deletion: a record is selected, then confirmed.
#[derive(Debug, Default)]
pub struct DeleteFlow {
    pending: Option<SaleRecord>,
    error: Option<String>,
}

impl DeleteFlow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn request(&mut self, record: SaleRecord) {
        self.pending = Some(record);
        self.error = None;
    }

    pub fn cancel(&mut self) {
        self.pending = None;
        self.error = None;
    }

    pub fn pending(&self) -> Option<&SaleRecord> {
        self.pending.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// On failure the selection stays pending so the user can retry or
    /// cancel; the error is kept for display.
    pub fn confirm(&mut self, client: &ApiClient) -> AppResult<DeleteConfirmation> {
        let id = match &self.pending {
            Some(record) => record.id,
            None => return Err(AppError::Validation(MSG_NO_PENDING_DELETE.to_string())),
        };

        match client.delete_sale(id) {
            Ok(confirmation) => {
                tracing::info!(id, "sale deleted");
                self.pending = None;
                self.error = None;
                Ok(confirmation)
            }
            Err(e) => {
                self.error = Some(e.message.clone());
                Err(e.into())
            }
        }
    }
}
