use std::{
    future::Future,
    sync::{
        Arc,
        atomic::{AtomicU64, Ordering},
    },
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchTicket(u64);

/// Tracks which search is still relevant.
///
/// Each new search takes a ticket; results carried by an older ticket are dropped
/// instead of replacing what the user is looking at now.
#[derive(Clone, Default)]
pub struct SearchGeneration(Arc<AtomicU64>);

impl SearchGeneration {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin(&self) -> SearchTicket {
        SearchTicket(self.0.fetch_add(1, Ordering::SeqCst) + 1)
    }

    /// Makes every outstanding ticket stale, e.g. when the user navigates away.
    pub fn invalidate(&self) {
        self.0.fetch_add(1, Ordering::SeqCst);
    }

    pub fn is_current(&self, ticket: SearchTicket) -> bool {
        self.0.load(Ordering::SeqCst) == ticket.0
    }

    pub fn finish<T>(&self, ticket: SearchTicket, output: T) -> Option<T> {
        if self.is_current(ticket) {
            return Some(output);
        }

        tracing::debug!(ticket = ticket.0, "dropping stale search result");

        None
    }

    /// Runs `future` under a fresh ticket; `None` when a newer search began meanwhile.
    pub async fn guard<F: Future>(&self, future: F) -> Option<F::Output> {
        let ticket = self.begin();
        let output = future.await;

        self.finish(ticket, output)
    }
}
