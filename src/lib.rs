//! Terminal chat client for a question/answer HTTP service.
//!
//! Typed text is posted as a form field to the service, and the JSON reply is
//! appended to a scrolling transcript. The [`widget`] module holds the
//! front-end-independent controller; [`tui`] and the one-shot `ask` command
//! are two presentations of it.

pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod service;
pub mod tui;
pub mod ui;
pub mod widget;

pub use error::{ChatError, Result};
