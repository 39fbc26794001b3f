use std::sync::atomic::{AtomicBool, Ordering};
use chrono::{DateTime, TimeZone};
use rand::Rng;
use tokio::sync::Mutex;

use crate::analysis::ProfileAggregator;
use crate::models::AggregateResult;
use crate::receipt::codes::DecorativeCodes;
use crate::receipt::render::Receipt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriggerOutcome {
    /// Input was empty; nothing was fetched.
    Skipped,
    /// A generation was already running; this trigger was dropped.
    Ignored,
    Completed,
    /// The aggregation failed and was logged. The previous result is kept.
    Failed,
}

/// Holds the receipt UI state: the typed username, whether a generation is
/// running, and the last successful result.
///
/// Triggers that arrive while a generation is in flight are ignored rather than
/// queued or raced.
pub struct ReceiptPresenter {
    aggregator: ProfileAggregator,
    input: Mutex<String>,
    in_flight: AtomicBool,
    last_result: Mutex<Option<AggregateResult>>,
}

/// Clears the in-flight flag when dropped, including when the future is cancelled.
struct InFlightGuard<'a>(&'a AtomicBool);

impl<'a> InFlightGuard<'a> {
    fn acquire(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| Self(flag))
    }
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

impl ReceiptPresenter {
    pub fn new(aggregator: ProfileAggregator) -> Self {
        Self {
            aggregator,
            input: Mutex::new(String::new()),
            in_flight: AtomicBool::new(false),
            last_result: Mutex::new(None),
        }
    }

    pub async fn set_input(&self, text: impl Into<String>) {
        *self.input.lock().await = text.into();
    }

    pub async fn input(&self) -> String {
        self.input.lock().await.clone()
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    pub async fn last_result(&self) -> Option<AggregateResult> {
        self.last_result.lock().await.clone()
    }

    pub async fn generate(&self) -> TriggerOutcome {
        let username = self.input.lock().await.trim().to_string();
        if username.is_empty() {
            return TriggerOutcome::Skipped;
        }

        let Some(_guard) = InFlightGuard::acquire(&self.in_flight) else {
            tracing::debug!("Generation already in flight, ignoring trigger for {}", username);
            return TriggerOutcome::Ignored;
        };

        match self.aggregator.aggregate(&username).await {
            Ok(result) => {
                tracing::info!(
                    "Receipt ready for {} (score {})",
                    username,
                    result.contribution_score
                );
                *self.last_result.lock().await = Some(result);
                TriggerOutcome::Completed
            }
            Err(e) => {
                tracing::error!(remote = e.is_remote(), "Error fetching data for {}: {}", username, e);
                TriggerOutcome::Failed
            }
        }
    }

    /// Renders the last result with fresh decorative codes, or `None` before the first success.
    pub async fn render<R, Tz>(&self, rng: &mut R, now: DateTime<Tz>) -> Option<Receipt>
    where
        R: Rng + ?Sized,
        Tz: TimeZone,
    {
        let result = self.last_result().await?;
        Some(Receipt::new(
            result,
            DecorativeCodes::generate(rng),
            now.fixed_offset(),
        ))
    }
}
