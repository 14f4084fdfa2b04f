//! Session Store: the single owner of the bearer token.
//!
//! The token is opaque; its validity is decided by the server at call time,
//! so the store only keeps, returns and forgets it.

mod memory;
mod sqlite;

pub use memory::MemorySessionStore;
pub use sqlite::SqliteSessionStore;

use crate::errors::AppResult;

/// Fixed key under which the token is persisted.
pub const TOKEN_KEY: &str = "authToken";

pub trait SessionStore {
    fn get_token(&self) -> AppResult<Option<String>>;
    fn set_token(&self, token: &str) -> AppResult<()>;
    fn clear_token(&self) -> AppResult<()>;

    fn is_authenticated(&self) -> AppResult<bool> {
        Ok(self.get_token()?.is_some())
    }
}
