//! Application State
//!
//! Ties the credential store to the splash screen, list, form and dialogs.

mod actions;
mod config;
mod input;
mod logins;

use std::time::Instant;

use ratatui::layout::Rect;
use ratatui::Frame;

use crate::db::Database;
use crate::input::{InputMode, ModeState};
use crate::store::CredentialStore;
use crate::ui::components::{Alert, ListViewState, MessageType, RegistrationForm, SplashState};
use crate::ui::{Renderer, UiState, View};

pub use config::AppConfig;
use config::PendingAction;

pub struct App {
    pub config: AppConfig,
    pub store: CredentialStore<Database>,
    pub mode_state: ModeState,
    pub view: View,
    pub terminal_size: Rect,
    pub splash: SplashState,
    pub started_at: Instant,
    pub list_state: ListViewState,
    /// Stored indices of the rows currently shown
    pub rows: Vec<usize>,
    pub search_query: String,
    pub registration_form: Option<RegistrationForm>,
    pub alert: Option<Alert>,
    /// Mode to resume once the alert is dismissed
    alert_return: InputMode,
    pub message: Option<(String, MessageType, Instant)>,
    pub pending_action: Option<PendingAction>,
    /// A save failed and memory is ahead of storage
    pub unsaved_changes: bool,
    pub should_quit: bool,
}

impl App {
    pub fn new(config: AppConfig, store: CredentialStore<Database>) -> Self {
        let mut app = Self {
            config,
            store,
            mode_state: ModeState::new(),
            view: View::Splash,
            terminal_size: Rect::default(),
            splash: SplashState::new(),
            started_at: Instant::now(),
            list_state: ListViewState::new(),
            rows: Vec::new(),
            search_query: String::new(),
            registration_form: None,
            alert: None,
            alert_return: InputMode::Normal,
            message: None,
            pending_action: None,
            unsaved_changes: false,
            should_quit: false,
        };
        app.refresh_rows();
        app
    }

    /// Advance time-driven state: the splash animation and message expiry
    pub fn tick(&mut self) {
        self.check_message_expiry();

        if self.view != View::Splash {
            return;
        }
        self.splash.advance(self.started_at.elapsed());
        if self.splash.elapsed() >= self.config.splash_duration {
            self.finish_splash();
        }
    }

    pub fn finish_splash(&mut self) {
        if self.view == View::Splash {
            tracing::debug!("Splash finished");
            self.view = View::List;
        }
    }

    pub fn render(&mut self, frame: &mut Frame) {
        self.terminal_size = frame.area();

        let message = self.message.as_ref().map(|(m, t, _)| (m.as_str(), *t));
        let search = match self.mode_state.mode {
            InputMode::Search => Some(self.mode_state.get_buffer()),
            _ if !self.search_query.is_empty() => Some(self.search_query.as_str()),
            _ => None,
        };
        let confirm_message = self.pending_action.as_ref().map(|a| a.confirm_message());
        let rows = self.store.filter(&self.search_query);

        let mut state = UiState {
            view: self.view,
            mode: self.mode_state.mode,
            splash: &self.splash,
            rows,
            list_state: &mut self.list_state,
            search,
            message,
            confirm_message,
            alert: self.alert.as_ref(),
            registration_form: self.registration_form.as_ref(),
        };

        Renderer::render(frame, &mut state);
    }

    fn check_message_expiry(&mut self) {
        let timeout = self.config.message_timeout;
        let expired = self
            .message
            .as_ref()
            .is_some_and(|(_, _, time)| time.elapsed() > timeout);

        if expired {
            self.message = None;
        }
    }

    pub fn set_message(&mut self, msg: &str, msg_type: MessageType) {
        self.message = Some((msg.to_string(), msg_type, Instant::now()));
    }

    /// Show a modal alert; the previous mode resumes once it is dismissed
    pub fn show_alert(&mut self, title: &str, message: &str) {
        tracing::debug!(title, message, "Alert shown");
        if self.alert.is_none() {
            self.alert_return = self.mode_state.mode;
        }
        self.alert = Some(Alert::new(title, message));
        self.mode_state.to_alert();
    }

    pub fn dismiss_alert(&mut self) {
        self.alert = None;
        self.mode_state.mode = self.alert_return;
    }
}
