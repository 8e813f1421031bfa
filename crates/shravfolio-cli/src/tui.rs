//! Terminal lifecycle and the event channel feeding the portfolio views.

use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::panic;
use std::time::Duration;
use tokio::sync::mpsc;

pub type Tui = Terminal<CrosstermBackend<io::Stdout>>;

/// Switch to the alternate screen in raw mode.
pub fn init() -> io::Result<Tui> {
    execute!(io::stdout(), EnterAlternateScreen)?;
    enable_raw_mode()?;
    Terminal::new(CrosstermBackend::new(io::stdout()))
}

/// Leave the alternate screen and raw mode.
pub fn restore() -> io::Result<()> {
    execute!(io::stdout(), LeaveAlternateScreen)?;
    disable_raw_mode()?;
    Ok(())
}

/// Restore the terminal before any panic message is printed, so a crash
/// inside a view does not leave the shell in raw mode.
pub fn install_panic_hook() {
    chain_panic_hook(|| {
        let _ = restore();
    });
}

fn chain_panic_hook(cleanup: impl Fn() + Send + Sync + 'static) {
    let previous = panic::take_hook();
    panic::set_hook(Box::new(move |info| {
        cleanup();
        previous(info);
    }));
}

#[derive(Debug, Clone)]
pub enum Action {
    Tick,
    Resize(u16, u16),
    Key(event::KeyEvent),
    /// The typing delay of the assistant has elapsed.
    ReplyReady,
}

/// Merges ticks, terminal input and view-scheduled actions into one queue.
pub struct EventHandler {
    sender: mpsc::UnboundedSender<Action>,
    receiver: mpsc::UnboundedReceiver<Action>,
}

impl EventHandler {
    pub fn new(tick_rate: u64) -> Self {
        let (sender, receiver) = mpsc::unbounded_channel();

        let tick_sender = sender.clone();
        tokio::spawn(async move {
            let mut interval = tokio::time::interval(Duration::from_millis(tick_rate));
            loop {
                interval.tick().await;
                if tick_sender.send(Action::Tick).is_err() {
                    break;
                }
            }
        });

        // crossterm's read blocks, so input gets its own thread.
        let event_sender = sender.clone();
        std::thread::spawn(move || loop {
            let action = match event::read() {
                Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => Action::Key(key),
                Ok(Event::Resize(w, h)) => Action::Resize(w, h),
                Ok(_) => continue,
                Err(_) => break,
            };
            if event_sender.send(action).is_err() {
                break;
            }
        });

        Self { sender, receiver }
    }

    pub async fn next_async(&mut self) -> Option<Action> {
        self.receiver.recv().await
    }

    /// Sender for actions a view schedules itself, such as a delayed reply.
    pub fn get_sender(&self) -> mpsc::UnboundedSender<Action> {
        self.sender.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Arc;

    #[test]
    fn panic_runs_cleanup_first() {
        let cleaned = Arc::new(AtomicBool::new(false));
        let flag = cleaned.clone();
        chain_panic_hook(move || flag.store(true, Ordering::SeqCst));

        let result = panic::catch_unwind(|| panic!("view crashed"));
        // Back to the default hook.
        let _ = panic::take_hook();

        assert!(result.is_err());
        assert!(cleaned.load(Ordering::SeqCst));
    }
}
