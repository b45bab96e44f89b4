use crate::{
    errors::{RepositoryError, ServiceError},
    service::policy::ReportPolicy,
    utils::{DynClock, Method, Metrics, Status, SystemClock},
};
use std::{
    future::Future,
    sync::Arc,
    time::{Duration, Instant},
};
use tokio_util::sync::CancellationToken;
use tracing::{error, info, warn};

/// Everything the report services need besides their repositories.
#[derive(Clone)]
pub struct EngineContext {
    pub policy: ReportPolicy,
    pub clock: DynClock,
    pub cancel: CancellationToken,
    pub store_timeout: Duration,
    pub metrics: Metrics,
}

impl std::fmt::Debug for EngineContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EngineContext")
            .field("policy", &self.policy)
            .field("clock", &"DynClock")
            .field("cancelled", &self.cancel.is_cancelled())
            .field("store_timeout", &self.store_timeout)
            .finish()
    }
}

impl EngineContext {
    pub fn new(policy: ReportPolicy, cancel: CancellationToken, store_timeout: Duration) -> Self {
        Self {
            policy,
            clock: Arc::new(SystemClock),
            cancel,
            store_timeout,
            metrics: Metrics::new(),
        }
    }

    pub fn with_clock(mut self, clock: DynClock) -> Self {
        self.clock = clock;
        self
    }

    pub fn with_metrics(mut self, metrics: Metrics) -> Self {
        self.metrics = metrics;
        self
    }

    /// Awaits a store call, giving up on cancellation or once `store_timeout` elapses.
    ///
    /// `context` names the operation and key, e.g. `"card 1234****5678"`, and
    /// prefixes any error produced.
    pub async fn call<T, F>(&self, context: &str, fut: F) -> Result<T, ServiceError>
    where
        F: Future<Output = Result<T, RepositoryError>>,
    {
        tokio::select! {
            biased;

            _ = self.cancel.cancelled() => {
                warn!("🛑 Cancelled while waiting on {context}");
                Err(ServiceError::Cancelled)
            }

            outcome = tokio::time::timeout(self.store_timeout, fut) => match outcome {
                Ok(Ok(value)) => Ok(value),
                Ok(Err(err)) => {
                    if !matches!(err, RepositoryError::NotFound) {
                        error!("❌ Store call failed for {context}: {err:?}");
                    }
                    Err(ServiceError::from_repo(context, err))
                }
                Err(_) => {
                    error!("⏱️ Store call timed out for {context}");
                    Err(ServiceError::Unavailable(format!(
                        "{context}: timed out after {:?}",
                        self.store_timeout
                    )))
                }
            }
        }
    }

    pub fn finish<T>(
        &self,
        operation: &str,
        method: Method,
        started: Instant,
        result: &Result<T, ServiceError>,
    ) {
        let elapsed = started.elapsed().as_secs_f64();

        let status = match result {
            Ok(_) => {
                info!("✅ {operation} completed in {elapsed:.3}s");
                Status::Success
            }
            Err(
                e @ (ServiceError::NotFound(_)
                | ServiceError::InvalidArgument(_)
                | ServiceError::Validation(_)
                | ServiceError::Conflict(_)),
            ) => {
                warn!("⚠️ {operation} rejected: {e}");
                Status::Error
            }
            Err(e) => {
                error!("❌ {operation} failed: {e}");
                Status::Error
            }
        };

        self.metrics.record(operation, method, status, elapsed);
    }
}
