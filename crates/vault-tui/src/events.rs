use crossterm::event::{self, Event as CrosstermEvent, KeyEvent, KeyEventKind};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;

const POLL_INTERVAL: Duration = Duration::from_millis(50);

#[derive(Debug, Clone)]
pub enum Event {
    Key(KeyEvent),
    Resize,
    Tick,
}

/// Reads terminal input on a dedicated thread and forwards it to the event loop.
pub struct EventHandler {
    rx: mpsc::UnboundedReceiver<Event>,
    running: Arc<AtomicBool>,
}

impl EventHandler {
    pub fn new() -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        let running = Arc::new(AtomicBool::new(true));
        let flag = Arc::clone(&running);

        std::thread::spawn(move || {
            while flag.load(Ordering::Relaxed) {
                let next = match event::poll(POLL_INTERVAL) {
                    Ok(true) => match event::read() {
                        Ok(CrosstermEvent::Key(key)) if key.kind == KeyEventKind::Press => {
                            Event::Key(key)
                        }
                        Ok(CrosstermEvent::Resize(_, _)) => Event::Resize,
                        Ok(_) => continue,
                        Err(e) => {
                            tracing::error!("Terminal input error: {}", e);
                            break;
                        }
                    },
                    Ok(false) => Event::Tick,
                    Err(e) => {
                        tracing::error!("Terminal poll error: {}", e);
                        break;
                    }
                };
                if tx.send(next).is_err() {
                    break;
                }
            }
        });

        Self { rx, running }
    }

    pub async fn next(&mut self) -> Option<Event> {
        self.rx.recv().await
    }

    pub fn stop(&self) {
        self.running.store(false, Ordering::Relaxed);
    }
}

impl Default for EventHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for EventHandler {
    fn drop(&mut self) {
        self.stop();
    }
}
