//! Terminal event abstraction.
//!
//! Two background tasks feed the main loop over one channel: a blocking
//! task that polls crossterm for input, and a steady interval that emits
//! animation ticks stamped with their fire time.  Keeping the tick source
//! separate means heavy input traffic can never starve the carousels'
//! deadlines.

use std::time::{Duration, Instant};

use crossterm::event::{self, Event as CtEvent, KeyEvent, MouseEvent};
use tokio::sync::mpsc;
use tokio::time::MissedTickBehavior;

/// How long the input task blocks per poll before re-checking shutdown.
const INPUT_POLL: Duration = Duration::from_millis(50);

/// High-level events consumed by the application.
#[derive(Debug)]
pub enum AppEvent {
    Key(KeyEvent),
    Mouse(MouseEvent),
    Resize(u16, u16),
    /// Animation heartbeat, stamped when it fired.
    Tick(Instant),
}

/// Spawn the input-reader and tick tasks, returning their shared channel.
/// Both tasks exit once the receiver is dropped.
pub fn spawn_event_sources(tick_rate: Duration) -> mpsc::UnboundedReceiver<AppEvent> {
    let (tx, rx) = mpsc::unbounded_channel();

    let input_tx = tx.clone();
    tokio::task::spawn_blocking(move || {
        loop {
            if input_tx.is_closed() {
                break;
            }
            if !event::poll(INPUT_POLL).unwrap_or(false) {
                continue;
            }
            let Ok(ev) = event::read() else { continue };
            let app_event = match ev {
                CtEvent::Key(k) => AppEvent::Key(k),
                CtEvent::Mouse(m) => AppEvent::Mouse(m),
                CtEvent::Resize(w, h) => AppEvent::Resize(w, h),
                _ => continue,
            };
            if input_tx.send(app_event).is_err() {
                break; // receiver dropped
            }
        }
    });

    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(tick_rate);
        // A missed tick is simply skipped — the next one is the next
        // natural beat, never a burst of catch-up ticks.
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
        loop {
            ticker.tick().await;
            if tx.send(AppEvent::Tick(Instant::now())).is_err() {
                break;
            }
        }
    });

    rx
}
