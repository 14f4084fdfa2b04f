//! Unified application error type.
//! Every module (db, session, api, core, cli) returns AppError so that the
//! binary has a single place where failures are reported.

use crate::api::error::ApiError;
use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Local storage
    // ---------------------------
    #[error("Storage error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Storage migration error: {0}")]
    Migration(String),

    // ---------------------------
    // Remote API
    // ---------------------------
    #[error("{0}")]
    Api(#[from] ApiError),

    #[error("Sessão expirada ou não autorizada. Faça login novamente.")]
    SessionExpired,

    #[error("Not logged in. Run `rvendas login` first.")]
    NotAuthenticated,

    // ---------------------------
    // Input validation (never reaches the network)
    // ---------------------------
    #[error("{0}")]
    Validation(String),

    #[error("Invalid date format: {0} (expected YYYY-MM-DD)")]
    InvalidDate(String),

    #[error("Invalid sale id: {0}")]
    InvalidId(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Failed to parse configuration: {0}")]
    ConfigParse(#[from] serde_yaml::Error),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
