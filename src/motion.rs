//! Host reduced-motion preference.
//!
//! The preference is read once at start and then followed through a
//! watch channel; nothing polls it.

use std::sync::Arc;
use tokio::sync::watch;
use tokio::task::JoinHandle;

/// Environment variable consulted for the initial preference.
pub const REDUCED_MOTION_ENV: &str = "PARSCADE_REDUCED_MOTION";

/// Source of the host "prefers reduced motion" signal.
pub trait MotionPreference {
    /// Current host preference.
    fn prefers_reduced_motion(&self) -> bool;

    /// Change notifications, delivered for as long as the receiver lives.
    fn subscribe(&self) -> watch::Receiver<bool>;
}

/// Channel-backed signal that anyone holding it can publish on.
#[derive(Clone)]
pub struct MotionSignal {
    tx: Arc<watch::Sender<bool>>,
}

impl MotionSignal {
    pub fn new(reduce: bool) -> Self {
        let (tx, _rx) = watch::channel(reduce);
        Self { tx: Arc::new(tx) }
    }

    /// Publish a new preference. Repeating the current value notifies nobody.
    pub fn publish(&self, reduce: bool) {
        self.tx.send_if_modified(|current| {
            if *current == reduce {
                false
            } else {
                *current = reduce;
                true
            }
        });
    }
}

impl MotionPreference for MotionSignal {
    fn prefers_reduced_motion(&self) -> bool {
        *self.tx.borrow()
    }

    fn subscribe(&self) -> watch::Receiver<bool> {
        self.tx.subscribe()
    }
}

/// Interpret an environment value such as `1`, `true` or `reduce`.
pub fn parse_motion_value(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on" | "reduce"
    )
}

/// Terminal host preference.
///
/// Seeded from [`REDUCED_MOTION_ENV`] (or forced on from the command
/// line). On Unix, `SIGUSR1` switches to "reduce" and `SIGUSR2` back to
/// "no preference".
pub struct HostMotionPreference {
    signal: MotionSignal,
}

impl HostMotionPreference {
    pub fn detect(force_reduce: bool) -> Self {
        let from_env = std::env::var(REDUCED_MOTION_ENV)
            .map(|value| parse_motion_value(&value))
            .unwrap_or(false);
        Self {
            signal: MotionSignal::new(force_reduce || from_env),
        }
    }

    /// Start forwarding OS signals into the preference channel.
    ///
    /// Must be called from within a tokio runtime.
    #[cfg(unix)]
    pub fn listen(&self) -> std::io::Result<JoinHandle<()>> {
        use tokio::signal::unix::{signal, SignalKind};

        let mut reduce = signal(SignalKind::user_defined1())?;
        let mut restore = signal(SignalKind::user_defined2())?;
        let publisher = self.signal.clone();
        Ok(tokio::spawn(async move {
            loop {
                tokio::select! {
                    received = reduce.recv() => {
                        if received.is_none() {
                            break;
                        }
                        tracing::info!("Host requested reduced motion");
                        publisher.publish(true);
                    }
                    received = restore.recv() => {
                        if received.is_none() {
                            break;
                        }
                        tracing::info!("Host cleared reduced motion");
                        publisher.publish(false);
                    }
                }
            }
        }))
    }

    #[cfg(not(unix))]
    pub fn listen(&self) -> std::io::Result<JoinHandle<()>> {
        Ok(tokio::spawn(async {}))
    }
}

impl MotionPreference for HostMotionPreference {
    fn prefers_reduced_motion(&self) -> bool {
        self.signal.prefers_reduced_motion()
    }

    fn subscribe(&self) -> watch::Receiver<bool> {
        self.signal.subscribe()
    }
}
