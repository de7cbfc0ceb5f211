//! Request lifetimes tied to the screen that issued them.
//!
//! A [`RequestScope`] belongs to one mounted screen. Each request takes a
//! [`RequestTicket`]; issuing a newer ticket or closing the scope (unmount)
//! makes every older ticket stale. The controller checks its ticket after the
//! response arrives and drops stale results, so the last request *issued*
//! wins rather than the last one to finish, and nothing is written after
//! unmount.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;

#[derive(Clone, Debug, Default)]
pub struct RequestScope {
    generation: Arc<AtomicU64>,
    closed: Arc<AtomicBool>,
}

impl RequestScope {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a request, superseding any still in flight.
    pub fn begin(&self) -> RequestTicket {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        RequestTicket {
            scope: self.clone(),
            generation,
        }
    }

    /// Mark the owner as gone; every ticket becomes stale.
    pub fn close(&self) {
        self.closed.store(true, Ordering::SeqCst);
    }

    pub fn is_closed(&self) -> bool {
        self.closed.load(Ordering::SeqCst)
    }
}

#[derive(Clone, Debug)]
pub struct RequestTicket {
    scope: RequestScope,
    generation: u64,
}

impl RequestTicket {
    /// A ticket outside any scope; never goes stale.
    pub fn detached() -> Self {
        RequestScope::new().begin()
    }

    /// Whether results for this ticket may still be applied.
    pub fn is_current(&self) -> bool {
        !self.scope.is_closed() && self.scope.generation.load(Ordering::SeqCst) == self.generation
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_newer_ticket_supersedes() {
        let scope = RequestScope::new();
        let first = scope.begin();
        assert!(first.is_current());
        let second = scope.begin();
        assert!(!first.is_current());
        assert!(second.is_current());
    }

    #[test]
    fn test_close_invalidates_all() {
        let scope = RequestScope::new();
        let ticket = scope.begin();
        scope.close();
        assert!(!ticket.is_current());
        assert!(!scope.begin().is_current());
    }

    #[test]
    fn test_detached_ticket() {
        assert!(RequestTicket::detached().is_current());
    }
}
