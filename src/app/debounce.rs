use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::time;

/// Collapses a burst of events so only the last one observed within the
/// quiet period goes through. Each caller takes a ticket, waits out the
/// delay, and is admitted only if no newer ticket was taken meanwhile.
#[derive(Clone)]
pub struct Debouncer {
    delay: Duration,
    seq: Arc<AtomicU64>,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            seq: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Registers a new event and waits out the quiet period. Returns true
    /// iff this event is still the latest one once the period has elapsed.
    pub async fn admit(&self) -> bool {
        let ticket = self.seq.fetch_add(1, Ordering::SeqCst) + 1;
        if !self.delay.is_zero() {
            time::sleep(self.delay).await;
        }
        self.seq.load(Ordering::SeqCst) == ticket
    }
}
