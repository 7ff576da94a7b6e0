//! Terminal event abstraction.
//!
//! Wraps crossterm events into a simpler enum and runs a background task that
//! forwards them over a channel so the main loop stays non-blocking.  Ticks
//! arrive at a steady frame rate even while input is streaming in, so
//! animations never stall under a burst of mouse motion.

use std::time::{Duration, Instant};

use crossterm::event::{self, Event as CtEvent, KeyEvent, MouseEvent, MouseEventKind};
use tokio::sync::mpsc;

/// High-level events consumed by the application.
#[derive(Debug)]
pub enum AppEvent {
    Key(KeyEvent),
    Mouse(MouseEvent),
    Resize(u16, u16),
    /// One animation frame elapsed.
    Tick,
}

impl AppEvent {
    fn from_crossterm(ev: CtEvent) -> Option<Self> {
        match ev {
            CtEvent::Key(k) => Some(AppEvent::Key(k)),
            // Plain motion without a button is noise for this app.
            CtEvent::Mouse(m) if m.kind == MouseEventKind::Moved => None,
            CtEvent::Mouse(m) => Some(AppEvent::Mouse(m)),
            CtEvent::Resize(w, h) => Some(AppEvent::Resize(w, h)),
            _ => None,
        }
    }
}

/// Spawns a background task that polls the terminal for events and sends them
/// through the returned channel, interleaved with a [`AppEvent::Tick`] every
/// `frame`.
pub fn spawn_event_reader(frame: Duration) -> mpsc::UnboundedReceiver<AppEvent> {
    let (tx, rx) = mpsc::unbounded_channel();

    tokio::spawn(async move {
        let mut next_tick = Instant::now() + frame;
        loop {
            let timeout = next_tick.saturating_duration_since(Instant::now());
            if event::poll(timeout).unwrap_or(false) {
                match event::read() {
                    Ok(ev) => {
                        if let Some(app_event) = AppEvent::from_crossterm(ev) {
                            if tx.send(app_event).is_err() {
                                break; // receiver dropped
                            }
                        }
                    }
                    Err(err) => tracing::debug!("terminal read failed: {err}"),
                }
            }
            if Instant::now() >= next_tick {
                // Skip missed frames instead of bursting to catch up.
                next_tick = (next_tick + frame).max(Instant::now());
                if tx.send(AppEvent::Tick).is_err() {
                    break;
                }
            }
        }
    });

    rx
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyModifiers, MouseButton};

    fn mouse(kind: MouseEventKind) -> CtEvent {
        CtEvent::Mouse(MouseEvent {
            kind,
            column: 1,
            row: 1,
            modifiers: KeyModifiers::NONE,
        })
    }

    #[test]
    fn bare_motion_is_dropped() {
        assert!(AppEvent::from_crossterm(mouse(MouseEventKind::Moved)).is_none());
        assert!(matches!(
            AppEvent::from_crossterm(mouse(MouseEventKind::Drag(MouseButton::Left))),
            Some(AppEvent::Mouse(_))
        ));
        assert!(matches!(
            AppEvent::from_crossterm(CtEvent::Resize(80, 24)),
            Some(AppEvent::Resize(80, 24))
        ));
    }
}
