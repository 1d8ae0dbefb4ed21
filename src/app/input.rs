use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::input::keymap::{
    alert_action, confirm_action, normal_mode_action, text_input_action, Action,
};
use crate::input::modes::InputMode;
use crate::ui::components::RegistrationForm;
use crate::ui::View;

use super::App;

impl App {
    /// Handle one key press. Returns true when the application should exit.
    pub fn handle_key_event(&mut self, key: KeyEvent) -> bool {
        if key.kind != KeyEventKind::Press {
            return false;
        }

        if self.view == View::Splash {
            self.finish_splash();
            return false;
        }

        if self.alert.is_some() {
            if alert_action(key) == Action::Dismiss {
                self.dismiss_alert();
            }
            return false;
        }

        if self.view == View::Form && self.registration_form.is_some() {
            self.handle_form_key(key);
            return false;
        }

        let action = self.resolve_action(key);
        self.execute_action(action)
    }

    fn resolve_action(&mut self, key: KeyEvent) -> Action {
        match self.mode_state.mode {
            InputMode::Normal => self.resolve_normal_action(key),
            InputMode::Search => self.resolve_search_action(key),
            InputMode::Confirm => confirm_action(key),
            InputMode::Insert | InputMode::Alert => Action::None,
        }
    }

    fn resolve_normal_action(&mut self, key: KeyEvent) -> Action {
        let (action, pending) = normal_mode_action(key, self.mode_state.pending);
        self.mode_state.pending = pending;
        action
    }

    fn resolve_search_action(&mut self, key: KeyEvent) -> Action {
        let before = self.mode_state.get_buffer().to_string();

        match text_input_action(key) {
            Action::Submit => return Action::Search(before),
            Action::Cancel => return Action::Back,
            Action::InsertChar(c) => self.mode_state.insert_char(c),
            Action::DeleteChar => self.mode_state.delete_char(),
            Action::DeleteCharForward => self.mode_state.delete_char_forward(),
            Action::ClearLine => self.mode_state.clear_buffer(),
            Action::CursorLeft => self.mode_state.cursor_left(),
            Action::CursorRight => self.mode_state.cursor_right(),
            Action::CursorHome => self.mode_state.cursor_home(),
            Action::CursorEnd => self.mode_state.cursor_end(),
            _ => {}
        }

        if self.mode_state.get_buffer() != before {
            let query = self.mode_state.get_buffer().to_string();
            self.apply_search(&query);
        }
        Action::None
    }

    fn handle_form_key(&mut self, key: KeyEvent) {
        match (key.code, key.modifiers) {
            (KeyCode::Tab, KeyModifiers::NONE) | (KeyCode::Down, _) => {
                self.with_form(RegistrationForm::next_field);
                return;
            }
            (KeyCode::BackTab, _) | (KeyCode::Up, _) => {
                self.with_form(RegistrationForm::prev_field);
                return;
            }
            _ => {}
        }

        match text_input_action(key) {
            Action::Cancel => self.close_form(),
            Action::Submit => self.submit_form(),
            Action::GeneratePassword => self.fill_generated_password(),
            Action::InsertChar(c) => self.with_form(|f| f.insert_char(c)),
            Action::DeleteChar => self.with_form(RegistrationForm::delete_char),
            Action::DeleteCharForward => self.with_form(RegistrationForm::delete_char_forward),
            Action::CursorLeft => self.with_form(RegistrationForm::cursor_left),
            Action::CursorRight => self.with_form(RegistrationForm::cursor_right),
            Action::CursorHome => self.with_form(RegistrationForm::cursor_home),
            Action::CursorEnd => self.with_form(RegistrationForm::cursor_end),
            Action::ClearLine => self.with_form(RegistrationForm::clear_field),
            _ => {}
        }
    }

    fn with_form(&mut self, f: impl FnOnce(&mut RegistrationForm)) {
        if let Some(form) = self.registration_form.as_mut() {
            f(form);
        }
    }
}
