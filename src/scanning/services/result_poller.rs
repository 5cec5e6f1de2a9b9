use crate::ports::outbound::{HttpRequest, HttpResponse, HttpTransport};
use crate::scanning::domain::ScanId;
use crate::shared::error::TransportError;
use crate::shared::ServiceError;
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};

/// Time between two status queries
pub const DEFAULT_SYNC_SLEEP_INTERVAL: Duration = Duration::from_secs(5);

/// Wall-clock ceiling for one polling session
pub const DEFAULT_MAX_WAIT: Duration = Duration::from_secs(15 * 60);

/// States of a polling session. `Pending` is the only non-terminal one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PollState {
    Pending,
    Ready,
    Failed,
    TimedOut,
}

#[derive(Debug)]
enum PollOutcome {
    Ready(Vec<u8>),
    Failed(ServiceError),
    TimedOut,
}

impl PollOutcome {
    fn state(&self) -> PollState {
        match self {
            PollOutcome::Ready(_) => PollState::Ready,
            PollOutcome::Failed(_) => PollState::Failed,
            PollOutcome::TimedOut => PollState::TimedOut,
        }
    }
}

/// Maps one status response to the poller state it leads to.
///
/// 202 keeps polling, 200 carries the terminal body, anything else fails.
fn classify(response: HttpResponse) -> Option<PollOutcome> {
    match response.status {
        202 => None,
        200 => Some(PollOutcome::Ready(response.body)),
        _ => Some(PollOutcome::Failed(ServiceError::Status {
            status: response.status_line(),
            body: response.body_text(),
        })),
    }
}

/// Single-slot handoff: the first delivered outcome wins, later ones are dropped.
struct OutcomeSlot {
    sender: Mutex<Option<oneshot::Sender<PollOutcome>>>,
}

impl OutcomeSlot {
    fn new() -> (Arc<Self>, oneshot::Receiver<PollOutcome>) {
        let (sender, receiver) = oneshot::channel();
        let slot = Arc::new(Self {
            sender: Mutex::new(Some(sender)),
        });
        (slot, receiver)
    }

    fn deliver(&self, outcome: PollOutcome) -> bool {
        let sender = self
            .sender
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take();
        match sender {
            Some(sender) => {
                tracing::debug!(state = ?outcome.state(), "poll outcome settled");
                sender.send(outcome).is_ok()
            }
            None => false,
        }
    }

    fn is_settled(&self) -> bool {
        self.sender
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .is_none()
    }
}

/// Aborts the polling tasks when the session ends, on every exit path
/// including the caller dropping the future.
struct TaskGuard(Vec<JoinHandle<()>>);

impl Drop for TaskGuard {
    fn drop(&mut self) {
        for handle in &self.0 {
            handle.abort();
        }
    }
}

/// ResultPoller waits for a scan to reach a terminal state.
///
/// Two tasks race into one [`OutcomeSlot`]: a ticker that queries the
/// status URL once per interval, and a deadline that fires once after the
/// maximum wait. The caller only awaits the slot. The deadline is measured
/// from the start of polling and does not wait for an in-flight request.
pub struct ResultPoller<T: HttpTransport> {
    transport: Arc<T>,
    interval: Duration,
    max_wait: Duration,
}

impl<T: HttpTransport> ResultPoller<T> {
    pub fn new(transport: Arc<T>) -> Self {
        Self {
            transport,
            interval: DEFAULT_SYNC_SLEEP_INTERVAL,
            max_wait: DEFAULT_MAX_WAIT,
        }
    }

    /// Overrides the maximum wait. A zero duration keeps the default.
    pub fn with_max_wait(mut self, max_wait: Duration) -> Self {
        if !max_wait.is_zero() {
            self.max_wait = max_wait;
        }
        self
    }

    pub fn max_wait(&self) -> Duration {
        self.max_wait
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Polls `url` until the scan is ready and returns the terminal body.
    ///
    /// # Errors
    /// - `ServiceError::Transport` when a query cannot be sent
    /// - `ServiceError::Status` for any status other than 200 or 202
    /// - `ServiceError::Timeout` when the maximum wait elapses first
    pub async fn poll(&self, url: &str, scan_id: &ScanId) -> Result<Vec<u8>, ServiceError> {
        let (slot, receiver) = OutcomeSlot::new();

        let ticker = tokio::spawn(run_ticker(
            Arc::clone(&self.transport),
            Arc::clone(&slot),
            url.to_string(),
            scan_id.to_string(),
            self.interval,
        ));
        let deadline = tokio::spawn(run_deadline(Arc::clone(&slot), self.max_wait));
        let _guard = TaskGuard(vec![ticker, deadline]);

        match receiver.await {
            Ok(PollOutcome::Ready(body)) => Ok(body),
            Ok(PollOutcome::Failed(error)) => Err(error),
            Ok(PollOutcome::TimedOut) => Err(ServiceError::Timeout {
                scan_id: scan_id.to_string(),
                waited: self.max_wait,
            }),
            Err(_) => Err(TransportError::new(url, "polling stopped without an outcome").into()),
        }
    }
}

async fn run_ticker<T: HttpTransport>(
    transport: Arc<T>,
    slot: Arc<OutcomeSlot>,
    url: String,
    scan_id: String,
    period: Duration,
) {
    let mut ticker = tokio::time::interval_at(Instant::now() + period, period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        ticker.tick().await;
        if slot.is_settled() {
            return;
        }

        tracing::debug!(scan_id = %scan_id, "Sync: Get Scan Graph results");
        let request = HttpRequest::get(url.as_str()).with_content_type("application/json");
        let outcome = match transport.send(request).await {
            Ok(response) => classify(response),
            Err(error) => Some(PollOutcome::Failed(error.into())),
        };

        if let Some(outcome) = outcome {
            slot.deliver(outcome);
            return;
        }
    }
}

async fn run_deadline(slot: Arc<OutcomeSlot>, max_wait: Duration) {
    tokio::time::sleep(max_wait).await;
    slot.deliver(PollOutcome::TimedOut);
}
