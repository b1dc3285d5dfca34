use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use crossterm::event::{Event, KeyEvent, MouseEvent};
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tokio::sync::watch;
use tokio::task::JoinHandle;

/// Everything the application loop reacts to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    Key(KeyEvent),
    Mouse(MouseEvent),
    Resize(u16, u16),
    /// Autoplay timer fired. Tagged with the timer generation so ticks
    /// from a cancelled timer can be ignored.
    AutoplayTick { generation: u64 },
    /// Host reduced-motion preference changed.
    MotionPreferenceChanged(bool),
    /// OS signal received (SIGTERM, SIGINT)
    Shutdown,
}

/// Single queue feeding the application loop.
pub struct EventHandler {
    rx: UnboundedReceiver<AppEvent>,
    tx: UnboundedSender<AppEvent>,
}

impl Default for EventHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl EventHandler {
    pub fn new() -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self { rx, tx }
    }

    pub fn sender(&self) -> UnboundedSender<AppEvent> {
        self.tx.clone()
    }

    pub async fn next(&mut self) -> Option<AppEvent> {
        self.rx.recv().await
    }

    /// Next queued event, without waiting.
    pub fn try_next(&mut self) -> Option<AppEvent> {
        self.rx.try_recv().ok()
    }

    /// Read terminal input on a dedicated thread.
    pub fn spawn_input_reader(&self, poll_interval: Duration) -> InputReader {
        let stop = Arc::new(AtomicBool::new(false));
        let stop_flag = Arc::clone(&stop);
        let event_tx = self.sender();

        let handle = thread::spawn(move || {
            while !stop_flag.load(Ordering::Relaxed) {
                match crossterm::event::poll(poll_interval) {
                    Ok(true) => {}
                    Ok(false) => continue,
                    Err(err) => {
                        tracing::error!(error = %err, "Terminal input poll failed");
                        break;
                    }
                }
                let event = match crossterm::event::read() {
                    Ok(Event::Key(key)) => AppEvent::Key(key),
                    Ok(Event::Mouse(mouse)) => AppEvent::Mouse(mouse),
                    Ok(Event::Resize(cols, rows)) => AppEvent::Resize(cols, rows),
                    Ok(_) => continue,
                    Err(err) => {
                        tracing::error!(error = %err, "Terminal input read failed");
                        break;
                    }
                };
                if event_tx.send(event).is_err() {
                    break;
                }
            }
        });

        InputReader {
            stop,
            handle: Some(handle),
        }
    }

    /// Forward host motion-preference changes for the receiver's lifetime.
    pub fn forward_motion(&self, mut changes: watch::Receiver<bool>) -> JoinHandle<()> {
        let event_tx = self.sender();
        tokio::spawn(async move {
            while changes.changed().await.is_ok() {
                let reduce = *changes.borrow_and_update();
                if event_tx.send(AppEvent::MotionPreferenceChanged(reduce)).is_err() {
                    break;
                }
            }
        })
    }

    /// Turn Ctrl+C / SIGTERM delivered outside raw mode into `Shutdown`.
    pub fn forward_shutdown(&self) -> JoinHandle<()> {
        let event_tx = self.sender();
        tokio::spawn(async move {
            wait_for_shutdown_signal().await;
            let _ = event_tx.send(AppEvent::Shutdown);
        })
    }
}

#[cfg(unix)]
async fn wait_for_shutdown_signal() {
    use tokio::signal::unix::{signal, SignalKind};

    match signal(SignalKind::terminate()) {
        Ok(mut terminate) => {
            tokio::select! {
                _ = tokio::signal::ctrl_c() => {}
                _ = terminate.recv() => {}
            }
        }
        Err(err) => {
            tracing::warn!(error = %err, "SIGTERM handler unavailable");
            let _ = tokio::signal::ctrl_c().await;
        }
    }
}

#[cfg(not(unix))]
async fn wait_for_shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
}

/// Handle to the input thread; stops it on drop.
pub struct InputReader {
    stop: Arc<AtomicBool>,
    handle: Option<thread::JoinHandle<()>>,
}

impl InputReader {
    pub fn stop(&mut self) {
        self.stop.store(true, Ordering::Relaxed);
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

impl Drop for InputReader {
    fn drop(&mut self) {
        self.stop();
    }
}
