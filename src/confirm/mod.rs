use std::sync::Arc;

use log::error;
#[cfg(test)]
use mockall::automock;

pub type DynConfirmer = Arc<dyn Confirmer + Send + Sync>;

/// Asks the user to explicitly approve a destructive action
#[cfg_attr(test, automock)]
pub trait Confirmer {
    fn confirm(&self, prompt: &str) -> bool;
}

/// Interactive yes/no prompt on the terminal
pub struct InquireConfirmer;

impl InquireConfirmer {
    pub fn new_dyn() -> DynConfirmer {
        Arc::new(InquireConfirmer)
    }
}

impl Confirmer for InquireConfirmer {
    fn confirm(&self, prompt: &str) -> bool {
        match inquire::Confirm::new(prompt).with_default(false).prompt() {
            Ok(answer) => answer,
            Err(err) => {
                // Cancelled or no terminal: treat as declined
                error!("Confirmation prompt failed: {}", err);
                false
            }
        }
    }
}

/// Approves everything; backs the `--yes` flag
pub struct AutoConfirmer;

impl AutoConfirmer {
    pub fn new_dyn() -> DynConfirmer {
        Arc::new(AutoConfirmer)
    }
}

impl Confirmer for AutoConfirmer {
    fn confirm(&self, _prompt: &str) -> bool {
        true
    }
}
