use super::SessionStore;
use crate::errors::AppResult;
use std::cell::RefCell;

/// Process-local store; nothing is persisted.
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    token: RefCell<Option<String>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token(token: &str) -> Self {
        Self {
            token: RefCell::new(Some(token.to_string())),
        }
    }
}

impl SessionStore for MemorySessionStore {
    fn get_token(&self) -> AppResult<Option<String>> {
        Ok(self.token.borrow().clone())
    }

    fn set_token(&self, token: &str) -> AppResult<()> {
        *self.token.borrow_mut() = Some(token.to_string());
        Ok(())
    }

    fn clear_token(&self) -> AppResult<()> {
        self.token.borrow_mut().take();
        Ok(())
    }
}
