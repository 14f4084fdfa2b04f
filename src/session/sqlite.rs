use super::{SessionStore, TOKEN_KEY};
use crate::db::kv;
use crate::db::pool::DbPool;
use crate::errors::AppResult;

/// Durable store: the token lives in the `local_storage` table and survives
/// process restarts.
pub struct SqliteSessionStore<'a> {
    pool: &'a DbPool,
}

impl<'a> SqliteSessionStore<'a> {
    pub fn new(pool: &'a DbPool) -> Self {
        Self { pool }
    }
}

impl SessionStore for SqliteSessionStore<'_> {
    fn get_token(&self) -> AppResult<Option<String>> {
        let token = kv::get(&self.pool.conn, TOKEN_KEY)?;
        Ok(token.filter(|t| !t.is_empty()))
    }

    fn set_token(&self, token: &str) -> AppResult<()> {
        kv::set(&self.pool.conn, TOKEN_KEY, token)
    }

    fn clear_token(&self) -> AppResult<()> {
        kv::remove(&self.pool.conn, TOKEN_KEY)
    }
}
