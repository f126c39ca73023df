use std::fmt;
use std::sync::Arc;

use tokio::sync::watch;

/// Health of the shared connection pool
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PoolStatus {
    /// Connections are being served normally
    Serving,
    /// An idle-connection fault was observed; the pool must not be used again
    Unusable { reason: String },
}

/// Observer for faults on idle pooled connections.
///
/// A cloneable handle over one watch channel; every clone sees the same
/// status. The Serving to Unusable transition is one-way: there is no reset,
/// restarting the process is the only recovery path.
#[derive(Debug, Clone)]
pub struct PoolSentinel {
    status: Arc<watch::Sender<PoolStatus>>,
}

impl PoolSentinel {
    pub fn new() -> Self {
        let (status, _) = watch::channel(PoolStatus::Serving);
        Self {
            status: Arc::new(status),
        }
    }

    /// Records a fault observed on an otherwise-idle connection.
    ///
    /// Every error value counts, whatever its type. Later faults are still
    /// logged but the first reason is kept.
    pub fn trip<E: fmt::Display>(&self, error: E) {
        tracing::error!(%error, "unexpected error on idle pooled connection");
        self.status.send_if_modified(|status| {
            if *status == PoolStatus::Serving {
                *status = PoolStatus::Unusable {
                    reason: error.to_string(),
                };
                true
            } else {
                false
            }
        });
    }

    /// Current status snapshot
    pub fn status(&self) -> PoolStatus {
        self.status.borrow().clone()
    }

    pub fn is_unusable(&self) -> bool {
        matches!(*self.status.borrow(), PoolStatus::Unusable { .. })
    }

    /// Resolves with the fault reason once the pool becomes unusable.
    pub async fn faulted(&self) -> String {
        let mut rx = self.status.subscribe();
        let reason = {
            let result = rx
                .wait_for(|status| matches!(status, PoolStatus::Unusable { .. }))
                .await;
            match result {
                Ok(status) => Some(match &*status {
                    PoolStatus::Unusable { reason } => reason.clone(),
                    PoolStatus::Serving => String::new(),
                }),
                Err(_) => None,
            }
        };
        match reason {
            Some(reason) => reason,
            // The sender half lives in self, so the channel cannot close
            // while this future is pending.
            None => std::future::pending().await,
        }
    }
}

impl Default for PoolSentinel {
    fn default() -> Self {
        Self::new()
    }
}
