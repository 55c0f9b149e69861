// SPDX-License-Identifier: MPL-2.0
//! Background panorama decoding with cooperative cancellation.
//!
//! Decodes run on the blocking pool and report back over a channel. A load
//! can be cancelled at any time; the decode call itself is not preemptible,
//! so the token is checked right before it starts and again before the
//! result is handed off. Cancelled loads send nothing.

use crate::error::{Error, Result};
use crate::port::Panorama;
use image::GenericImageView;
use log::{debug, info, warn};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;

/// Cancellation token type for background loads.
pub type CancellationToken = Arc<AtomicBool>;

/// Checks if the cancellation token has been triggered.
#[inline]
pub fn is_cancelled(token: &CancellationToken) -> bool {
    token.load(Ordering::SeqCst)
}

/// Decodes the image at `path` into an RGBA8 panorama.
///
/// # Errors
///
/// Returns an error if the file cannot be read ([`Error::Io`]) or its
/// contents are not a decodable image ([`Error::Decode`]).
pub fn decode_panorama(path: &Path) -> Result<Panorama> {
    let bytes = std::fs::read(path)?;
    let img = image::load_from_memory(&bytes)?;
    let (width, height) = img.dimensions();
    let pixels = img.to_rgba8().into_vec();
    Ok(Panorama::from_rgba(width, height, pixels))
}

/// One in-flight background load.
///
/// Exactly one of these exists per viewer at a time; starting a new load
/// cancels the previous task without waiting for it.
pub struct LoadTask {
    token: CancellationToken,
    handle: JoinHandle<()>,
}

impl LoadTask {
    /// Spawns a background decode of `path`.
    ///
    /// Unless cancelled, the outcome is sent as `(seq, result)` on
    /// `results`. A cancelled task sends nothing.
    pub fn spawn(
        seq: u64,
        path: PathBuf,
        results: UnboundedSender<(u64, Result<Panorama>)>,
    ) -> Self {
        let token: CancellationToken = Arc::new(AtomicBool::new(false));
        let task_token = Arc::clone(&token);

        let handle = tokio::spawn(async move {
            info!("Loading image {}...", path.display());

            let decode_token = Arc::clone(&task_token);
            let outcome = tokio::task::spawn_blocking(move || {
                // The decode cannot be interrupted; bail while still cheap.
                if is_cancelled(&decode_token) {
                    return None;
                }
                Some(decode_panorama(&path))
            })
            .await;

            let result = match outcome {
                Ok(None) => {
                    debug!("Load {seq} cancelled before decode");
                    return;
                }
                Ok(Some(result)) => result,
                Err(err) => Err(Error::Decode(format!("decode task failed: {err}"))),
            };

            if is_cancelled(&task_token) {
                debug!("Load {seq} cancelled; discarding result");
                return;
            }

            // The receiver may already be gone during teardown.
            let _ = results.send((seq, result));
        });

        Self { token, handle }
    }

    /// Requests cancellation without waiting for the task to finish.
    pub fn cancel(&self) {
        self.token.store(true, Ordering::SeqCst);
    }

    /// Cancels the task and waits up to `grace` for it to wind down.
    ///
    /// A task still running when the grace period elapses is abandoned; it
    /// can outlive the viewer by at most one decode.
    pub async fn shutdown(self, grace: Duration) {
        self.cancel();
        match tokio::time::timeout(grace, self.handle).await {
            Ok(Ok(())) => {}
            Ok(Err(err)) => warn!("Background load task failed: {err}"),
            Err(_) => warn!(
                "Background load still running after {}s; abandoning it",
                grace.as_secs()
            ),
        }
    }
}
