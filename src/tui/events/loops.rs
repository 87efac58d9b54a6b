use super::{AppEvent, POLL_TIMEOUT, SCROLL_DELTA, TICK_INTERVAL};
use crate::error::Result;
use crate::widget::CompletionReceiver;
use crossterm::event::{self, Event as CrosstermEvent, MouseButton, MouseEventKind};
use tokio::sync::mpsc::UnboundedSender;

fn translate(event: CrosstermEvent) -> Option<AppEvent> {
    match event {
        CrosstermEvent::Key(key) => Some(AppEvent::Input(key)),
        CrosstermEvent::Paste(text) => Some(AppEvent::Paste(text)),
        CrosstermEvent::Resize(w, h) => Some(AppEvent::Resize(w, h)),
        CrosstermEvent::Mouse(mouse) => match mouse.kind {
            MouseEventKind::ScrollUp => Some(AppEvent::MouseScroll(-SCROLL_DELTA)),
            MouseEventKind::ScrollDown => Some(AppEvent::MouseScroll(SCROLL_DELTA)),
            MouseEventKind::Down(MouseButton::Left) => Some(AppEvent::MouseClick {
                column: mouse.column,
                row: mouse.row,
            }),
            _ => None,
        },
        _ => None,
    }
}

/// Polls the terminal on a blocking thread until the receiver goes away.
pub async fn terminal_event_loop(tx: UnboundedSender<AppEvent>) -> Result<()> {
    tokio::task::spawn_blocking(move || -> Result<()> {
        loop {
            if tx.is_closed() {
                break;
            }
            if event::poll(POLL_TIMEOUT)?
                && let Some(app_event) = translate(event::read()?)
                && tx.send(app_event).is_err()
            {
                break;
            }
        }
        Ok(())
    })
    .await
    .map_err(|e| crate::error::ChatError::InvalidState(format!("event thread failed: {e}")))?
}

pub async fn tick_loop(tx: UnboundedSender<AppEvent>) {
    let mut interval = tokio::time::interval(TICK_INTERVAL);
    loop {
        interval.tick().await;
        if tx.send(AppEvent::Tick).is_err() {
            break;
        }
    }
}

/// Feeds finished requests into the UI event stream.
pub async fn forward_completions(mut rx: CompletionReceiver, tx: UnboundedSender<AppEvent>) {
    while let Some(completion) = rx.recv().await {
        if tx.send(completion.into()).is_err() {
            break;
        }
    }
}
