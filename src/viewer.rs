// SPDX-License-Identifier: MPL-2.0
//! Viewer orchestration: one foreground task that owns the browser, the
//! rendering sink, and the single in-flight background load.
//!
//! External events arrive over a channel and are handled strictly in order.
//! Starting a load cancels the previous one without waiting for it; every
//! load carries a sequence number, and a completion whose number is no
//! longer current is discarded before it can reach the sink. Teardown
//! cancels the active load and waits a bounded grace period before
//! abandoning it.

use crate::browser::ImageBrowser;
use crate::config::Config;
use crate::error::Result;
use crate::loader::LoadTask;
use crate::port::{Button, ConnectionState, Notice, NoticeSink, Panorama, PanoramaSink, RenderOptions};
use log::{debug, info, warn};
use std::path::PathBuf;
use std::time::Duration;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

/// External events driving the viewer.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewerEvent {
    /// Resolve the current image and (re)load it. Sent at launch and
    /// whenever the host wants the view refreshed.
    Reload,
    /// A controller button produced a rising edge.
    Pressed(Button),
    /// Switch browsing to another directory.
    SelectDirectory(PathBuf),
    /// Controller connection transition; informational.
    Connection(ConnectionState),
    /// The user recentered the view; informational.
    Recentered,
    /// The rendering widget reported an asynchronous failure.
    DisplayError(String),
    /// Host lost focus; suspend rendering.
    Pause,
    /// Host regained focus; resume rendering.
    Resume,
    /// Stop the viewer and release the background load.
    Shutdown,
}

/// Sending half used by host adapters to drive a running viewer.
#[derive(Debug, Clone)]
pub struct ViewerHandle {
    events: UnboundedSender<ViewerEvent>,
}

impl ViewerHandle {
    /// Queues an event. Returns `false` once the viewer has shut down.
    pub fn send(&self, event: ViewerEvent) -> bool {
        self.events.send(event).is_ok()
    }
}

/// One loop iteration's input: an external event or a finished load.
enum Input {
    Event(Option<ViewerEvent>),
    Loaded(u64, Result<Panorama>),
}

/// The viewer's foreground state. Construct with [`Viewer::new`], then drive
/// it by awaiting [`Viewer::run`] while sending events through the handle.
pub struct Viewer<S, N> {
    browser: ImageBrowser,
    sink: S,
    notices: N,
    render_options: RenderOptions,
    cancel_grace: Duration,
    seq: u64,
    active: Option<LoadTask>,
    events: UnboundedReceiver<ViewerEvent>,
    results: UnboundedReceiver<(u64, Result<Panorama>)>,
    results_tx: UnboundedSender<(u64, Result<Panorama>)>,
}

impl<S: PanoramaSink, N: NoticeSink> Viewer<S, N> {
    /// Builds a viewer over the configured picture directory.
    pub fn new(config: &Config, sink: S, notices: N) -> (Self, ViewerHandle) {
        let (events_tx, events_rx) = mpsc::unbounded_channel();
        let (results_tx, results_rx) = mpsc::unbounded_channel();

        let browser = ImageBrowser::new(
            config.picture_dir(),
            config.extension_filter().map(<[String]>::to_vec),
            config.sort_order(),
        );

        let viewer = Self {
            browser,
            sink,
            notices,
            render_options: RenderOptions::new(config.projection()),
            cancel_grace: config.cancel_grace(),
            seq: 0,
            active: None,
            events: events_rx,
            results: results_rx,
            results_tx,
        };
        (viewer, ViewerHandle { events: events_tx })
    }

    /// Consumes events until [`ViewerEvent::Shutdown`] arrives or every
    /// handle is dropped, then tears down the background load.
    pub async fn run(mut self) {
        info!("Viewer started over {}", self.browser.directory().display());

        loop {
            let input = tokio::select! {
                event = self.events.recv() => Input::Event(event),
                Some((seq, result)) = self.results.recv() => Input::Loaded(seq, result),
            };

            match input {
                Input::Event(Some(ViewerEvent::Shutdown)) | Input::Event(None) => break,
                Input::Event(Some(event)) => self.handle_event(event),
                Input::Loaded(seq, result) => self.apply_load_result(seq, result),
            }
        }

        self.teardown().await;
    }

    fn handle_event(&mut self, event: ViewerEvent) {
        debug!("Viewer event: {event:?}");
        match event {
            ViewerEvent::Reload => {
                let image = self.browser.current_image();
                self.start_load(image);
            }
            ViewerEvent::Pressed(Button::Primary) => {
                let image = self.browser.next();
                self.start_load(image);
            }
            ViewerEvent::Pressed(Button::Secondary) => {
                let image = self.browser.previous();
                self.start_load(image);
            }
            ViewerEvent::SelectDirectory(dir) => {
                if self.browser.select(&dir) {
                    let image = self.browser.current_image();
                    self.start_load(image);
                }
            }
            ViewerEvent::Connection(state) => {
                info!("Controller connection: {state:?}");
            }
            ViewerEvent::Recentered => {
                info!("View recentered");
            }
            ViewerEvent::DisplayError(message) => {
                self.notices.notify(Notice::LoadFailed(message));
            }
            ViewerEvent::Pause => self.sink.pause_rendering(),
            ViewerEvent::Resume => self.sink.resume_rendering(),
            // Handled by the run loop before dispatch.
            ViewerEvent::Shutdown => {}
        }
    }

    /// Replaces the in-flight load with a new one for `image`.
    ///
    /// `None` means the browser found nothing to show; the user is notified
    /// and any running load is left to finish on its own.
    fn start_load(&mut self, image: Option<PathBuf>) {
        let Some(path) = image else {
            warn!("No image specified");
            self.notices
                .notify(Notice::NoImages(self.browser.directory().to_path_buf()));
            return;
        };

        info!("Preparing to load image {}", path.display());
        if let Some(previous) = self.active.take() {
            previous.cancel();
        }

        self.seq += 1;
        self.active = Some(LoadTask::spawn(self.seq, path, self.results_tx.clone()));
    }

    /// Applies one finished load, unless a newer load has been started.
    fn apply_load_result(&mut self, seq: u64, result: Result<Panorama>) {
        if seq != self.seq {
            debug!("Discarding stale load {seq} (current is {})", self.seq);
            return;
        }
        self.active = None;

        match result {
            Ok(panorama) => {
                if let Err(err) = self.sink.display(panorama, self.render_options) {
                    self.notices.notify(Notice::LoadFailed(err.0));
                }
            }
            Err(err) => self.notices.notify(Notice::LoadFailed(err.to_string())),
        }
    }

    /// Cancels the active load and waits out the grace period. Dropping the
    /// viewer afterwards closes the results channel, so an abandoned load
    /// can never reach the sink.
    async fn teardown(mut self) {
        info!("Shutting down viewer");
        if let Some(task) = self.active.take() {
            task.shutdown(self.cancel_grace).await;
        }
    }
}
