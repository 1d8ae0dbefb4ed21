use crate::store::StoreError;
use crate::ui::components::{MessageType, RegistrationForm};
use crate::ui::View;

use super::App;

impl App {
    /// Recompute the visible rows from the current search query
    pub fn refresh_rows(&mut self) {
        self.rows = self.store.filter_indices(&self.search_query);
        self.list_state.set_total(self.rows.len());
    }

    pub(super) fn apply_search(&mut self, query: &str) {
        self.search_query = query.to_string();
        self.list_state.select(None);
        self.refresh_rows();
        tracing::debug!(matches = self.rows.len(), "Search applied");
    }

    /// Stored index of the highlighted row
    pub(super) fn selected_index(&self) -> Option<usize> {
        self.list_state.selected().and_then(|i| self.rows.get(i).copied())
    }

    /// Ctrl+R: retry a failed save, otherwise reread storage
    pub(super) fn refresh_logins(&mut self) {
        if self.unsaved_changes {
            match self.store.flush() {
                Ok(()) => self.saved("Logins saved"),
                Err(e) => self.report_store_error(&e),
            }
            return;
        }

        self.store.reload();
        self.refresh_rows();
        self.set_message(&format!("Loaded {} logins", self.store.len()), MessageType::Info);
    }

    pub(super) fn open_form(&mut self) {
        self.registration_form = Some(RegistrationForm::new());
        self.view = View::Form;
        self.mode_state.to_insert();
    }

    pub(super) fn close_form(&mut self) {
        self.registration_form = None;
        self.view = View::List;
        self.mode_state.to_normal();
    }

    pub(super) fn fill_generated_password(&mut self) {
        let password = self.store.generate_password();
        if let Some(form) = self.registration_form.as_mut() {
            form.set_password(password);
        }
    }

    pub(super) fn submit_form(&mut self) {
        let Some(form) = self.registration_form.as_ref() else { return };

        if let Err(e) = form.validate() {
            self.show_alert("Error", &e);
            return;
        }

        let (name, email, password) = (
            form.get_name().to_string(),
            form.get_email().to_string(),
            form.get_password().to_string(),
        );
        let result = self.store.create(name, email, password);

        self.close_form();
        self.search_query.clear();
        self.refresh_rows();
        self.list_state.move_to_bottom();

        match result {
            Ok(()) => self.saved("Login saved"),
            Err(e) => self.report_store_error(&e),
        }
    }

    pub(super) fn delete_login(&mut self, index: usize) {
        let result = self.store.delete_at(index);
        self.refresh_rows();

        match result {
            Ok(removed) => self.saved(&format!("Deleted {}", removed.name)),
            Err(e) => self.report_store_error(&e),
        }
    }

    pub(super) fn delete_all_logins(&mut self) {
        let result = self.store.delete_all();
        self.refresh_rows();

        match result {
            Ok(()) => self.saved("All logins deleted"),
            Err(e) => self.report_store_error(&e),
        }
    }

    fn saved(&mut self, msg: &str) {
        self.unsaved_changes = false;
        self.set_message(msg, MessageType::Success);
    }

    fn report_store_error(&mut self, e: &StoreError) {
        tracing::error!(error = %e, "Store operation failed");
        if matches!(e, StoreError::StorageWriteFailed(_)) {
            self.unsaved_changes = true;
        }
        self.show_alert("Error", &e.to_string());
    }
}
