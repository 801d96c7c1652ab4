//! healthwatch: terminal dashboard for AI log diagnoses.
//!
//! `domain` holds the pure types, reducer and history filter; `application`
//! wires them into the polling controller; `infrastructure` provides the
//! HTTP, file and terminal adapters; `presentation` is the CLI and TUI.

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod presentation;
