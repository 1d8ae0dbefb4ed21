use std::path::PathBuf;
use std::time::Duration;

pub struct AppConfig {
    pub data_path: PathBuf,
    pub log_path: PathBuf,
    pub log_filter: String,
    pub splash_duration: Duration,
    pub message_timeout: Duration,
}

fn data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("logins")
}

impl Default for AppConfig {
    fn default() -> Self {
        let dir = data_dir();

        Self {
            data_path: dir.join("logins.db"),
            log_path: dir.join("logins.log"),
            log_filter: "logins=info".to_string(),
            splash_duration: Duration::from_millis(4600),
            message_timeout: Duration::from_secs(5),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PendingAction {
    /// Stored index of the login to remove
    DeleteLogin(usize),
    DeleteAll,
}

impl PendingAction {
    pub fn confirm_message(&self) -> &'static str {
        match self {
            Self::DeleteLogin(_) => "Delete this login?",
            Self::DeleteAll => "Delete all logins?",
        }
    }
}
