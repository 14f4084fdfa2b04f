//! Generation-tagged request state shared by every fetch flow.
//!
//! Each `begin` hands out a [`Ticket`]; only the ticket of the most recent
//! `begin` may move the state out of `Loading`. A slow response to a
//! superseded request is dropped instead of overwriting newer data.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum RequestState<T> {
    #[default]
    Idle,
    Loading,
    Loaded(T),
    Failed(String),
}

impl<T> RequestState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, RequestState::Loading)
    }

    pub fn value(&self) -> Option<&T> {
        match self {
            RequestState::Loaded(v) => Some(v),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            RequestState::Failed(msg) => Some(msg),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

#[derive(Debug)]
pub struct RequestTracker<T> {
    state: RequestState<T>,
    generation: u64,
}

impl<T> Default for RequestTracker<T> {
    fn default() -> Self {
        Self {
            state: RequestState::Idle,
            generation: 0,
        }
    }
}

impl<T> RequestTracker<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &RequestState<T> {
        &self.state
    }

    pub fn begin(&mut self) -> Ticket {
        self.generation += 1;
        self.state = RequestState::Loading;
        Ticket(self.generation)
    }

    pub fn is_current(&self, ticket: Ticket) -> bool {
        ticket.0 == self.generation
    }

    /// Returns false when the ticket was superseded and the value dropped.
    pub fn complete(&mut self, ticket: Ticket, value: T) -> bool {
        if !self.is_current(ticket) {
            tracing::debug!(ticket = ticket.0, latest = self.generation, "stale result discarded");
            return false;
        }
        self.state = RequestState::Loaded(value);
        true
    }

    pub fn fail(&mut self, ticket: Ticket, message: impl Into<String>) -> bool {
        if !self.is_current(ticket) {
            tracing::debug!(ticket = ticket.0, latest = self.generation, "stale failure discarded");
            return false;
        }
        self.state = RequestState::Failed(message.into());
        true
    }

    /// Fail without issuing a request (local validation).
    pub fn reject(&mut self, message: impl Into<String>) {
        self.generation += 1;
        self.state = RequestState::Failed(message.into());
    }

    /// Back to `Idle`; in-flight tickets become stale.
    pub fn reset(&mut self) {
        self.generation += 1;
        self.state = RequestState::Idle;
    }

    /// begin, fetch and finish in one step.
    pub fn run<E, F>(&mut self, fetch: F) -> Result<(), E>
    where
        E: fmt::Display,
        F: FnOnce() -> Result<T, E>,
    {
        let ticket = self.begin();
        match fetch() {
            Ok(value) => {
                self.complete(ticket, value);
                Ok(())
            }
            Err(e) => {
                self.fail(ticket, e.to_string());
                Err(e)
            }
        }
    }
}
