//! Service context owning the loaded synthesizer capability.
//!
//! Replaces process-wide mutable init flags with an explicit object:
//! created once at process start, its status transitions from `Loading` to
//! exactly one terminal state, and both health and request paths read the
//! status lock-free.

use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::Arc;

use parking_lot::RwLock;
use tokio::task::JoinHandle;
use tracing::{error, info};

use tts_core::{Synthesizer, TtsError, TtsResult};

/// Lifecycle status of the synthesizer capability.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum SynthStatus {
    /// Initialization has not been requested yet.
    NotStarted = 0,
    /// The loader task is running.
    Loading = 1,
    /// The synthesizer is loaded and serving.
    Ready = 2,
    /// Loading failed; see [`ServiceContext::failure_reason`].
    Failed = 3,
}

impl SynthStatus {
    fn from_u8(value: u8) -> Self {
        match value {
            1 => Self::Loading,
            2 => Self::Ready,
            3 => Self::Failed,
            _ => Self::NotStarted,
        }
    }
}

/// Owns the synthesizer once loaded, plus its initialization status.
pub struct ServiceContext {
    status: AtomicU8,
    synthesizer: RwLock<Option<Arc<dyn Synthesizer>>>,
    failure: RwLock<Option<String>>,
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("status", &self.status())
            .finish()
    }
}

impl Default for ServiceContext {
    fn default() -> Self {
        Self::new()
    }
}

impl ServiceContext {
    /// Create a context in the `NotStarted` state.
    pub fn new() -> Self {
        Self {
            status: AtomicU8::new(SynthStatus::NotStarted as u8),
            synthesizer: RwLock::new(None),
            failure: RwLock::new(None),
        }
    }

    /// Read the current status without locking.
    pub fn status(&self) -> SynthStatus {
        SynthStatus::from_u8(self.status.load(Ordering::Acquire))
    }

    /// Get the failure reason after a `Failed` transition.
    pub fn failure_reason(&self) -> Option<String> {
        self.failure.read().clone()
    }

    /// Get the loaded synthesizer, or an unavailability error.
    pub fn synthesizer(&self) -> TtsResult<Arc<dyn Synthesizer>> {
        match self.status() {
            SynthStatus::Ready => self
                .synthesizer
                .read()
                .clone()
                .ok_or_else(|| TtsError::unavailable("synthesizer missing despite Ready status")),
            SynthStatus::NotStarted => Err(TtsError::unavailable("initialization not started")),
            SynthStatus::Loading => Err(TtsError::unavailable("synthesizer is still loading")),
            SynthStatus::Failed => Err(TtsError::unavailable(
                self.failure_reason()
                    .unwrap_or_else(|| "initialization failed".to_string()),
            )),
        }
    }

    /// Start the single initialization task.
    ///
    /// The loader runs on the blocking pool (model loading may take
    /// seconds) and its outcome is observed through [`Self::status`]; no
    /// polling flags, no second attempt. Returns an error if
    /// initialization was already requested.
    pub fn begin_loading<F>(self: &Arc<Self>, loader: F) -> TtsResult<JoinHandle<()>>
    where
        F: FnOnce() -> TtsResult<Arc<dyn Synthesizer>> + Send + 'static,
    {
        self.status
            .compare_exchange(
                SynthStatus::NotStarted as u8,
                SynthStatus::Loading as u8,
                Ordering::AcqRel,
                Ordering::Acquire,
            )
            .map_err(|_| TtsError::unavailable("initialization already started"))?;

        let context = Arc::clone(self);
        let handle = tokio::task::spawn_blocking(move || match loader() {
            Ok(synthesizer) => {
                *context.synthesizer.write() = Some(synthesizer);
                context
                    .status
                    .store(SynthStatus::Ready as u8, Ordering::Release);
                info!("Synthesizer loaded and ready");
            }
            Err(e) => {
                *context.failure.write() = Some(e.to_string());
                context
                    .status
                    .store(SynthStatus::Failed as u8, Ordering::Release);
                error!(error = %e, "Synthesizer initialization failed");
            }
        });

        Ok(handle)
    }
}
