//! One fetch per session, delivered through a single-assignment handle.
//!
//! The presenter owns a `Session` and polls it once per frame. The fetch
//! task runs exactly once; its result is applied at most once. If the
//! session is dropped before the response lands, the send fails and the
//! late result is simply never applied.

use std::future::Future;
use std::time::Duration;

use tokio::sync::oneshot;
use tracing::warn;
use wrapped_core::CategorizedView;

use crate::api;

/// Where the session's one fetch currently stands.
#[derive(Debug, Clone, PartialEq)]
pub enum ReportState {
    Pending,
    Ready(CategorizedView),
    Failed(String),
}

/// A slideshow session's data source.
pub struct Session {
    state: ReportState,
    rx: Option<oneshot::Receiver<Result<CategorizedView, String>>>,
}

impl Session {
    /// Start the session: spawn the one-shot fetch against `base_url`.
    pub fn start(base_url: &str, timeout: Duration) -> Self {
        let base = base_url.to_string();
        Self::spawn(async move {
            match api::fetch_report(&base, timeout).await {
                Ok(records) => Ok(CategorizedView::organize(Some(&records))),
                Err(err) => Err(format!("{err:#}")),
            }
        })
    }

    /// A session whose data is already in hand (offline `--file` runs).
    pub fn preloaded(view: CategorizedView) -> Self {
        Self {
            state: ReportState::Ready(view),
            rx: None,
        }
    }

    fn spawn<F>(fut: F) -> Self
    where
        F: Future<Output = Result<CategorizedView, String>> + Send + 'static,
    {
        let (tx, rx) = oneshot::channel();
        tokio::spawn(async move {
            // A closed receiver means the session is gone; nothing to do
            // with the late result.
            let _ = tx.send(fut.await);
        });

        Self {
            state: ReportState::Pending,
            rx: Some(rx),
        }
    }

    /// Poll the fetch. The result, success or failure, is applied exactly
    /// once; afterwards this just returns the settled state.
    pub fn poll(&mut self) -> &ReportState {
        if let Some(rx) = self.rx.as_mut() {
            match rx.try_recv() {
                Ok(Ok(view)) => {
                    self.state = ReportState::Ready(view);
                    self.rx = None;
                }
                Ok(Err(message)) => {
                    warn!(%message, "report fetch failed");
                    self.state = ReportState::Failed(message);
                    self.rx = None;
                }
                Err(oneshot::error::TryRecvError::Empty) => {}
                Err(oneshot::error::TryRecvError::Closed) => {
                    self.state =
                        ReportState::Failed("report fetch stopped without a result".to_string());
                    self.rx = None;
                }
            }
        }
        &self.state
    }
}
