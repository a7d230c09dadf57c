// ── Fetch cycle bookkeeping ──
//
// Each page owns one `FetchCycle`. Beginning a cycle bumps the generation
// and cancels the previous cycle's token; completions are accepted only
// if they carry the current generation and the cycle is still open.

use std::future::Future;

use tokio_util::sync::CancellationToken;

/// Tracks the in-flight fetch of a single page.
#[derive(Debug, Default)]
pub struct FetchCycle {
    generation: u64,
    /// Token of the open cycle. `None` once settled or cancelled.
    in_flight: Option<CancellationToken>,
}

/// Handle given to the task performing one fetch.
#[derive(Debug, Clone)]
pub struct FetchTicket {
    generation: u64,
    cancel: CancellationToken,
}

impl FetchCycle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a new cycle, cancelling any cycle still in flight.
    pub fn begin(&mut self) -> FetchTicket {
        self.cancel();
        self.generation += 1;
        let cancel = CancellationToken::new();
        self.in_flight = Some(cancel.clone());
        FetchTicket {
            generation: self.generation,
            cancel,
        }
    }

    /// Cancel the open cycle, if any. Later completions are ignored.
    pub fn cancel(&mut self) {
        if let Some(token) = self.in_flight.take() {
            token.cancel();
        }
    }

    /// Close the cycle if `generation` is current. Returns whether the
    /// completion should be applied.
    pub fn settle(&mut self, generation: u64) -> bool {
        if self.is_current(generation) {
            self.in_flight = None;
            true
        } else {
            false
        }
    }

    /// Whether `generation` belongs to the open cycle.
    pub fn is_current(&self, generation: u64) -> bool {
        self.in_flight.is_some() && generation == self.generation
    }

    /// Whether a cycle is open.
    pub fn in_flight(&self) -> bool {
        self.in_flight.is_some()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}

impl FetchTicket {
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancel.is_cancelled()
    }

    /// Drive `fut` to completion unless the cycle is cancelled first.
    pub async fn run<F>(&self, fut: F) -> Option<F::Output>
    where
        F: Future,
    {
        tokio::select! {
            biased;
            () = self.cancel.cancelled() => None,
            out = fut => Some(out),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn begin_bumps_generation() {
        let mut cycle = FetchCycle::new();
        let first = cycle.begin();
        let second = cycle.begin();
        assert_eq!(first.generation() + 1, second.generation());
        assert!(first.is_cancelled());
        assert!(!second.is_cancelled());
    }

    #[test]
    fn settle_accepts_current_once() {
        let mut cycle = FetchCycle::new();
        let ticket = cycle.begin();
        assert!(cycle.settle(ticket.generation()));
        assert!(!cycle.settle(ticket.generation()));
        assert!(!cycle.in_flight());
    }

    #[test]
    fn settle_rejects_superseded() {
        let mut cycle = FetchCycle::new();
        let old = cycle.begin();
        let new = cycle.begin();
        assert!(!cycle.settle(old.generation()));
        assert!(cycle.settle(new.generation()));
    }

    #[test]
    fn cancel_closes_cycle() {
        let mut cycle = FetchCycle::new();
        let ticket = cycle.begin();
        cycle.cancel();
        assert!(ticket.is_cancelled());
        assert!(!cycle.settle(ticket.generation()));
    }

    #[tokio::test]
    async fn run_completes_when_not_cancelled() {
        let mut cycle = FetchCycle::new();
        let ticket = cycle.begin();
        assert_eq!(ticket.run(async { 7 }).await, Some(7));
    }

    #[tokio::test]
    async fn run_yields_none_after_cancel() {
        let mut cycle = FetchCycle::new();
        let ticket = cycle.begin();
        cycle.cancel();
        let out = ticket.run(std::future::pending::<()>()).await;
        assert!(out.is_none());
    }
}
