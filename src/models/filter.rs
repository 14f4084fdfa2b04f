use crate::errors::{AppError, AppResult};
use crate::utils::date;
use chrono::NaiveDate;

pub const PARAM_START: &str = "dataInicio";
pub const PARAM_END: &str = "dataFim";

/// Date-range filter for the sales list. Never persisted.
///
/// An absent bound means "no filter" and is left out of the request
/// entirely.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

impl FilterCriteria {
    pub fn new(start: Option<NaiveDate>, end: Option<NaiveDate>) -> Self {
        Self { start, end }
    }

    /// Build from raw user input. Blank strings count as absent.
    pub fn from_inputs(start: Option<&str>, end: Option<&str>) -> AppResult<Self> {
        Ok(Self {
            start: parse_bound(start)?,
            end: parse_bound(end)?,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.start.is_none() && self.end.is_none()
    }

    /// Query parameters for `GET /vendas`, present bounds only.
    pub fn query_params(&self) -> Vec<(String, String)> {
        let mut params = Vec::new();
        if let Some(d) = self.start {
            params.push((PARAM_START.to_string(), d.format("%Y-%m-%d").to_string()));
        }
        if let Some(d) = self.end {
            params.push((PARAM_END.to_string(), d.format("%Y-%m-%d").to_string()));
        }
        params
    }
}

fn parse_bound(raw: Option<&str>) -> AppResult<Option<NaiveDate>> {
    match raw.map(str::trim) {
        None | Some("") => Ok(None),
        Some(s) => date::parse_date(s)
            .map(Some)
            .ok_or_else(|| AppError::InvalidDate(s.to_string())),
    }
}
