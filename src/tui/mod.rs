pub mod app;
pub mod events;
pub mod layout;
pub mod state;
pub mod widgets;

pub use app::{ChatSession, TuiApp};

use crate::error::Result;
use crate::service::AnswerService;
use crate::widget::FailurePolicy;
use std::sync::Arc;

/// Runs the interactive chat until the user quits.
pub async fn run_tui(service: Arc<dyn AnswerService>, policy: FailurePolicy) -> Result<()> {
    tracing::info!(endpoint = %service.endpoint(), %policy, "Starting chat");
    let mut app = TuiApp::new(service, policy)?;
    app.run().await
}
