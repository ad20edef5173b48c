//! Cancellable delay before the opponent answers

use crate::game::Ticket;
use std::future::Future;
use std::time::Duration;
use tokio::sync::oneshot;
use tracing::debug;

/// How a scheduled opponent reply ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerOutcome {
    Fired(Ticket),
    Cancelled(Ticket),
}

/// Holds at most one pending opponent reply.
///
/// Scheduling again, calling [`cancel`](Self::cancel) or dropping the timer
/// cancels the pending one.
#[derive(Debug, Default)]
pub struct OpponentTimer {
    cancel: Option<oneshot::Sender<()>>,
}

impl OpponentTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a future that resolves after `delay` unless cancelled first.
    ///
    /// The future owns everything it needs, so it can be handed to a runtime
    /// (or an iced `Task`) directly.
    pub fn schedule(
        &mut self,
        ticket: Ticket,
        delay: Duration,
    ) -> impl Future<Output = TimerOutcome> + Send + 'static {
        self.cancel();
        let (tx, rx) = oneshot::channel();
        self.cancel = Some(tx);
        debug!(ticket, ?delay, "opponent timer scheduled");

        async move {
            tokio::select! {
                _ = tokio::time::sleep(delay) => TimerOutcome::Fired(ticket),
                _ = rx => TimerOutcome::Cancelled(ticket),
            }
        }
    }

    pub fn cancel(&mut self) {
        if let Some(tx) = self.cancel.take() {
            // The receiver is gone once the timer has fired.
            let _ = tx.send(());
        }
    }

    /// A scheduled reply has neither fired nor been cancelled.
    pub fn is_pending(&self) -> bool {
        self.cancel.as_ref().is_some_and(|tx| !tx.is_closed())
    }
}

#[cfg(test)]
#[path = "timer_tests.rs"]
mod timer_tests;
