use std::sync::Arc;

use log::{info, warn};
#[cfg(test)]
use mockall::automock;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Success,
    Warning,
    Error,
}

/// One-shot, non-blocking message shown to the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub level: Level,
    pub message: String,
}

impl Notification {
    pub fn success(message: &str) -> Self {
        Notification { level: Level::Success, message: message.to_string() }
    }
    pub fn warning(message: &str) -> Self {
        Notification { level: Level::Warning, message: message.to_string() }
    }
    pub fn error(message: &str) -> Self {
        Notification { level: Level::Error, message: message.to_string() }
    }
}

pub type DynNotifier = Arc<dyn Notifier + Send + Sync>;

#[cfg_attr(test, automock)]
pub trait Notifier {
    fn notify(&self, notification: Notification);
}

/// Prints notifications to the terminal
pub struct ConsoleNotifier;

impl ConsoleNotifier {
    pub fn new_dyn() -> DynNotifier {
        Arc::new(ConsoleNotifier)
    }
}

impl Notifier for ConsoleNotifier {
    fn notify(&self, notification: Notification) {
        match notification.level {
            Level::Success => {
                info!("notification: {}", notification.message);
                println!("✔ {}", notification.message);
            },
            Level::Warning => {
                warn!("notification: {}", notification.message);
                eprintln!("! {}", notification.message);
            },
            Level::Error => {
                warn!("notification: {}", notification.message);
                eprintln!("✘ {}", notification.message);
            },
        }
    }
}
