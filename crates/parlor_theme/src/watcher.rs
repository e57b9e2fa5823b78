//! Polling scheme watcher
//!
//! Some hosts expose no push channel for display-mode changes. The watcher
//! samples a probe on a background thread and forwards flips into a
//! [`HostDisplayMode`] handle, which fans them out to its watchers.
//! Dropping the watcher stops and joins the thread.

use parlor_platform::HostDisplayMode;
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

/// Polling configuration.
#[derive(Clone, Copy, Debug)]
pub struct WatcherConfig {
    /// Delay between probe samples.
    pub interval: Duration,
}

impl Default for WatcherConfig {
    fn default() -> Self {
        Self {
            interval: Duration::from_secs(2),
        }
    }
}

/// Background sampler feeding a [`HostDisplayMode`].
pub struct SchemeWatcher {
    shutdown: mpsc::Sender<()>,
    handle: Option<thread::JoinHandle<()>>,
}

impl SchemeWatcher {
    /// Spawn a sampler thread running `probe` every `config.interval`.
    ///
    /// A probe returning `None` (host temporarily unable to answer) is
    /// skipped; the target keeps its last known state.
    pub fn spawn<F>(config: WatcherConfig, probe: F, target: HostDisplayMode) -> Self
    where
        F: Fn() -> Option<bool> + Send + 'static,
    {
        let (shutdown, signal) = mpsc::channel();
        let handle = thread::Builder::new()
            .name("parlor-scheme-watcher".into())
            .spawn(move || loop {
                match signal.recv_timeout(config.interval) {
                    Ok(()) | Err(mpsc::RecvTimeoutError::Disconnected) => break,
                    Err(mpsc::RecvTimeoutError::Timeout) => {
                        if let Some(dark) = probe() {
                            target.set_prefers_dark(dark);
                        }
                    }
                }
            })
            .expect("failed to spawn scheme watcher thread");

        Self {
            shutdown,
            handle: Some(handle),
        }
    }
}

impl Drop for SchemeWatcher {
    fn drop(&mut self) {
        let _ = self.shutdown.send(());
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}
