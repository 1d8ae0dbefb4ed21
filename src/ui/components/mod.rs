//! UI Components
//!
//! Widgets for the splash screen, login list and registration form.

pub mod form;
pub mod list;
pub mod popup;
pub mod splash;
pub mod statusline;

// Re-exports
pub use form::{RegistrationForm, RegistrationFormWidget};
pub use list::{EmptyState, ListViewState, LoginList};
pub use popup::{Alert, AlertDialog, ConfirmDialog};
pub use splash::{SplashScreen, SplashState};
pub use statusline::{HelpBar, MessageType, StatusLine};
