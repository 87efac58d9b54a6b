mod render;
mod session;
mod terminal;

pub use session::{ChatSession, ScreenController};

use crate::error::Result;
use crate::service::AnswerService;
use crate::tui::events::{AppEvent, forward_completions, terminal_event_loop, tick_loop};
use crate::widget::FailurePolicy;
use std::sync::Arc;
use tokio::sync::mpsc;

use terminal::{ChatTerminal, restore_terminal, setup_terminal};

pub struct TuiApp {
    session: ChatSession,
    event_rx: mpsc::UnboundedReceiver<AppEvent>,
    event_tx: mpsc::UnboundedSender<AppEvent>,
    terminal: ChatTerminal,
}

impl TuiApp {
    pub fn new(service: Arc<dyn AnswerService>, policy: FailurePolicy) -> Result<Self> {
        let terminal = setup_terminal()?;
        let (event_tx, event_rx) = mpsc::unbounded_channel();

        let (session, completions) = ChatSession::new(service, policy);
        tokio::spawn(forward_completions(completions, event_tx.clone()));

        Ok(Self {
            session,
            event_rx,
            event_tx,
            terminal,
        })
    }

    pub async fn run(&mut self) -> Result<()> {
        let tx1 = self.event_tx.clone();
        let tx2 = self.event_tx.clone();

        tokio::spawn(async move {
            if let Err(e) = terminal_event_loop(tx1).await {
                tracing::error!(error = %e, "Terminal event loop stopped");
            }
        });

        tokio::spawn(async move {
            tick_loop(tx2).await;
        });

        while !self.session.should_quit() {
            self.terminal.draw(|f| self.session.draw(f))?;

            match self.event_rx.recv().await {
                Some(event) => self.session.handle_event(event),
                None => self.session.shutdown(),
            }
        }

        restore_terminal(&mut self.terminal)?;
        Ok(())
    }
}

impl Drop for TuiApp {
    fn drop(&mut self) {
        let _ = restore_terminal(&mut self.terminal);
    }
}
