use std::sync::Arc;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::Frame;
use ratatui::layout::{Position, Rect};

use super::render::{render_header, render_status};
use crate::logging;
use crate::service::AnswerService;
use crate::tui::events::AppEvent;
use crate::tui::layout::calculate_layout;
use crate::tui::state::{AppState, TranscriptPane};
use crate::tui::widgets::{ChatWidget, InputAction, InputWidget};
use crate::widget::{ChatController, CompletionReceiver, FailurePolicy, InputField, Trigger};

const PAGE_SCROLL: usize = 10;

pub type ScreenController = ChatController<TranscriptPane, InputWidget<'static>>;

/// Everything on screen except the terminal itself.
pub struct ChatSession {
    controller: ScreenController,
    state: AppState,
    endpoint: String,
    input_area: Rect,
}

impl ChatSession {
    #[must_use]
    pub fn new(service: Arc<dyn AnswerService>, policy: FailurePolicy) -> (Self, CompletionReceiver) {
        let endpoint = service.endpoint();
        let (controller, completions) =
            ChatController::new(TranscriptPane::new(), InputWidget::new(), service, policy);
        let session = Self {
            controller,
            state: AppState::new(),
            endpoint,
            input_area: Rect::default(),
        };
        (session, completions)
    }

    #[must_use]
    pub const fn should_quit(&self) -> bool {
        self.state.should_quit
    }

    #[must_use]
    pub const fn controller(&self) -> &ScreenController {
        &self.controller
    }

    pub fn draw(&mut self, frame: &mut Frame) {
        let layout = calculate_layout(frame.area(), self.controller.input().line_count());
        self.input_area = layout.input;

        render_header(
            frame,
            layout.header,
            &self.endpoint,
            self.controller.policy(),
            logging::log_file_path().map(|p| p.as_path()),
        );

        let (messages, scroll) = self.controller.view_mut().parts_mut();
        ChatWidget::new(messages, scroll, &self.endpoint).render(layout.chat, frame.buffer_mut());

        self.controller.input().render(layout.input, frame);

        render_status(
            frame,
            layout.status,
            self.controller.pending_count(),
            self.controller.longest_wait(),
            self.state.spinner_frame,
        );
    }

    pub fn handle_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::Input(key) => self.handle_key(key),
            AppEvent::Paste(text) => self.controller.input_mut().handle_paste(&text),
            AppEvent::MouseScroll(delta) => {
                let scroll = &mut self.controller.view_mut().scroll;
                if delta < 0 {
                    scroll.scroll_up(usize::from(delta.unsigned_abs()));
                } else {
                    scroll.scroll_down(usize::from(delta.unsigned_abs()));
                }
            }
            AppEvent::MouseClick { column, row } => {
                let button = InputWidget::send_button_area(self.input_area);
                if button.contains(Position::new(column, row)) {
                    self.submit(Trigger::SendButton);
                }
            }
            AppEvent::Resize(..) => {}
            AppEvent::Tick => self.state.tick(),
            AppEvent::Completion(completion) => self.controller.complete(completion),
        }
    }

    /// Aborts outstanding requests and marks the session finished.
    pub fn shutdown(&mut self) {
        let cancelled = self.controller.cancel_pending();
        if cancelled > 0 {
            tracing::info!(cancelled, "Abandoned pending requests on exit");
        }
        self.state.quit();
    }

    fn handle_key(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            KeyCode::Char('c') if ctrl => {
                if self.controller.input().is_empty() {
                    self.shutdown();
                } else {
                    self.controller.input_mut().clear();
                }
                return;
            }
            KeyCode::Char('d') if ctrl => {
                if self.controller.input().is_empty() {
                    self.shutdown();
                }
                return;
            }
            KeyCode::PageUp => {
                self.controller.view_mut().scroll.scroll_up(PAGE_SCROLL);
                return;
            }
            KeyCode::PageDown => {
                self.controller.view_mut().scroll.scroll_down(PAGE_SCROLL);
                return;
            }
            KeyCode::Home if ctrl => {
                self.controller.view_mut().scroll.jump_to_top();
                return;
            }
            KeyCode::End if ctrl => {
                self.controller.view_mut().scroll.follow_latest();
                return;
            }
            _ => {}
        }

        if let Some(trigger) = Trigger::from_key(&key) {
            self.submit(trigger);
            return;
        }

        match self.controller.input_mut().handle_key(key) {
            InputAction::HistoryPrev => {
                if let Some(text) = self.state.history.older().map(ToString::to_string) {
                    self.controller.input_mut().set_text(&text);
                }
            }
            InputAction::HistoryNext => {
                match self.state.history.newer().map(ToString::to_string) {
                    Some(text) => self.controller.input_mut().set_text(&text),
                    None => self.controller.input_mut().clear(),
                }
            }
            InputAction::Continue | InputAction::Clear => {}
        }
    }

    fn submit(&mut self, trigger: Trigger) {
        let text = self.controller.input().text();
        if self.controller.trigger(trigger).is_some() {
            self.state.history.record(&text);
        }
    }
}
