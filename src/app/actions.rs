use crate::input::keymap::Action;
use crate::ui::components::ListViewState;

use super::config::PendingAction;
use super::App;

impl App {
    /// Run an action. Returns true when the application should exit.
    pub fn execute_action(&mut self, action: Action) -> bool {
        match action {
            Action::MoveUp => self.list_state.move_up(),
            Action::MoveDown => self.list_state.move_down(),
            Action::MoveToTop => self.list_state.move_to_top(),
            Action::MoveToBottom => self.list_state.move_to_bottom(),
            Action::PageUp => self.page_move(|ls, h| ls.page_up(h.saturating_sub(1))),
            Action::PageDown => self.page_move(|ls, h| ls.page_down(h.saturating_sub(1))),
            Action::HalfPageUp => self.page_move(|ls, h| ls.page_up(h / 2)),
            Action::HalfPageDown => self.page_move(|ls, h| ls.page_down(h / 2)),
            Action::Back => self.go_back(),

            Action::New => self.open_form(),
            Action::Delete => self.initiate_delete(),
            Action::DeleteAll => self.initiate_delete_all(),

            Action::EnterSearch => {
                let query = self.search_query.clone();
                self.mode_state.to_search(&query);
            }
            Action::Search(query) => {
                self.apply_search(&query);
                self.mode_state.to_normal();
            }

            Action::Confirm => self.handle_confirm(),
            Action::Cancel => self.cancel_pending(),

            Action::Clear => self.message = None,
            Action::Quit => return self.quit(),
            Action::Refresh => self.refresh_logins(),

            _ => {}
        }

        false
    }

    fn page_move(&mut self, f: impl FnOnce(&mut ListViewState, usize)) {
        let visible = self.list_visible_height();
        f(&mut self.list_state, visible);
    }

    pub fn list_visible_height(&self) -> usize {
        (self.terminal_size.height as usize).saturating_sub(4)
    }

    fn go_back(&mut self) {
        self.mode_state.to_normal();
        if !self.search_query.is_empty() {
            self.apply_search("");
        }
    }

    fn initiate_delete(&mut self) {
        let Some(index) = self.selected_index() else { return };

        self.pending_action = Some(PendingAction::DeleteLogin(index));
        self.mode_state.to_confirm();
    }

    fn initiate_delete_all(&mut self) {
        if self.store.is_empty() {
            self.show_alert("No accounts yet", "Register first");
            return;
        }

        self.pending_action = Some(PendingAction::DeleteAll);
        self.mode_state.to_confirm();
    }

    fn cancel_pending(&mut self) {
        self.pending_action = None;
        self.mode_state.to_normal();
    }

    fn handle_confirm(&mut self) {
        self.mode_state.to_normal();
        let Some(action) = self.pending_action.take() else { return };

        match action {
            PendingAction::DeleteLogin(index) => self.delete_login(index),
            PendingAction::DeleteAll => self.delete_all_logins(),
        }
    }

    fn quit(&mut self) -> bool {
        self.should_quit = true;
        true
    }
}
