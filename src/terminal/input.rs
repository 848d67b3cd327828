use std::io::BufRead;
use std::sync::Arc;

use tokio::runtime::{Handle, RuntimeFlavor};
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tokio::sync::Mutex;

/// Shared line reader. The main loop and blocking prompts both pull from the
/// same queue so a confirmation answer is never read as a URL.
#[derive(Clone)]
pub struct LineSource {
    rx: Arc<Mutex<UnboundedReceiver<String>>>,
}

impl LineSource {
    pub fn channel() -> (UnboundedSender<String>, Self) {
        let (tx, rx) = mpsc::unbounded_channel();
        (
            tx,
            Self {
                rx: Arc::new(Mutex::new(rx)),
            },
        )
    }

    /// Feeds stdin lines from a dedicated thread. The queue closes on EOF.
    pub fn stdin() -> Self {
        let (tx, source) = Self::channel();
        let spawned = std::thread::Builder::new()
            .name("stdin-reader".into())
            .spawn(move || {
                for line in std::io::stdin().lock().lines() {
                    match line {
                        Ok(line) => {
                            if tx.send(line).is_err() {
                                break;
                            }
                        }
                        Err(e) => {
                            tracing::warn!("stdin read failed: {}", e);
                            break;
                        }
                    }
                }
            });
        if let Err(e) = spawned {
            tracing::error!("could not start stdin reader: {}", e);
        }
        source
    }

    pub async fn next_line(&self) -> Option<String> {
        self.rx.lock().await.recv().await
    }

    /// For synchronous prompts. Inside a current-thread runtime there is no
    /// way to wait without stalling the reader, so that case answers `None`.
    pub fn next_line_blocking(&self) -> Option<String> {
        match Handle::try_current() {
            Ok(handle) if handle.runtime_flavor() == RuntimeFlavor::MultiThread => {
                tokio::task::block_in_place(|| handle.block_on(self.next_line()))
            }
            Ok(_) => {
                tracing::warn!("blocking prompt unavailable on a current-thread runtime");
                None
            }
            Err(_) => self.rx.blocking_lock().blocking_recv(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn lines_arrive_in_order_and_close() {
        let (tx, source) = LineSource::channel();
        tx.send("first".into()).unwrap();
        tx.send("second".into()).unwrap();
        drop(tx);

        assert_eq!(source.next_line().await.as_deref(), Some("first"));
        assert_eq!(source.next_line().await.as_deref(), Some("second"));
        assert_eq!(source.next_line().await, None);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn blocking_read_works_inside_multi_thread_runtime() {
        let (tx, source) = LineSource::channel();
        tx.send("y".into()).unwrap();

        let line = tokio::spawn(async move { source.next_line_blocking() })
            .await
            .unwrap();
        assert_eq!(line.as_deref(), Some("y"));
    }

    #[tokio::test]
    async fn blocking_read_declines_on_current_thread_runtime() {
        let (tx, source) = LineSource::channel();
        tx.send("y".into()).unwrap();
        assert_eq!(source.next_line_blocking(), None);
    }

    #[test]
    fn blocking_read_outside_runtime() {
        let (tx, source) = LineSource::channel();
        tx.send("n".into()).unwrap();
        assert_eq!(source.next_line_blocking().as_deref(), Some("n"));
    }
}
