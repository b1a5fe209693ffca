use std::{collections::HashMap, fs, path::PathBuf, sync::{Arc, RwLock}};

use log::{debug, info};
#[cfg(test)]
use mockall::automock;

use error::*;

pub mod error;


/// Well-known key the token is stored under
pub const TOKEN_KEY: &'static str = "token";

pub type DynSessionStore = Arc<dyn SessionStore + Send + Sync>;

///
/// Holds the opaque bearer token. A token counts as present until it is
/// explicitly cleared, whether or not the server would still accept it.
///
#[cfg_attr(test, automock)]
pub trait SessionStore {
    fn get_token(&self) -> Option<String>;
    fn set_token(&self, token: &str) -> Result<()>;
    fn clear_token(&self) -> Result<()>;
}

///
/// Durable key-value slot backed by a small JSON document on disk,
/// so the session survives restarts until logout.
///
pub struct FileSessionStore {
    path: PathBuf,
    slots: RwLock<HashMap<String, String>>,
}

impl FileSessionStore {
    pub fn new_dyn(path: PathBuf) -> Result<DynSessionStore> {
        Ok(Arc::new(Self::open(path)?))
    }

    pub fn open(path: PathBuf) -> Result<Self> {
        let slots = if path.exists() {
            let contents = fs::read_to_string(&path)
                .map_err(|err| Error::IoError(path.clone(), err))?;
            if contents.trim().is_empty() {
                HashMap::new()
            } else {
                serde_json::from_str::<HashMap<String, String>>(&contents)?
            }
        } else {
            HashMap::new()
        };
        debug!("Opened session file {} ({} slots)", path.display(), slots.len());

        Ok(FileSessionStore { path, slots: RwLock::new(slots) })
    }

    fn persist(&self, slots: &HashMap<String, String>) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|err| Error::IoError(parent.to_path_buf(), err))?;
        }
        fs::write(&self.path, serde_json::to_string_pretty(slots)?)
            .map_err(|err| Error::IoError(self.path.clone(), err))
    }
}

impl SessionStore for FileSessionStore {
    fn get_token(&self) -> Option<String> {
        let slots = self.slots.read().unwrap_or_else(|err| err.into_inner());
        slots.get(TOKEN_KEY).cloned()
    }

    fn set_token(&self, token: &str) -> Result<()> {
        let mut slots = self.slots.write().unwrap_or_else(|err| err.into_inner());
        let mut next = slots.clone();
        next.insert(TOKEN_KEY.to_string(), token.to_string());
        // Memory only follows once the file holds the change
        self.persist(&next)?;
        *slots = next;
        info!("Session token stored in {}", self.path.display());
        Ok(())
    }

    fn clear_token(&self) -> Result<()> {
        let mut slots = self.slots.write().unwrap_or_else(|err| err.into_inner());
        if slots.contains_key(TOKEN_KEY) {
            let mut next = slots.clone();
            next.remove(TOKEN_KEY);
            self.persist(&next)?;
            *slots = next;
            info!("Session token cleared from {}", self.path.display());
        }
        Ok(())
    }
}

/// Session that lives only as long as the process
#[derive(Default)]
pub struct MemorySessionStore {
    token: RwLock<Option<String>>,
}

impl MemorySessionStore {
    pub fn new_dyn() -> DynSessionStore {
        Arc::new(Self::default())
    }

    pub fn with_token(token: &str) -> DynSessionStore {
        Arc::new(MemorySessionStore { token: RwLock::new(Some(token.to_string())) })
    }
}

impl SessionStore for MemorySessionStore {
    fn get_token(&self) -> Option<String> {
        self.token.read().unwrap_or_else(|err| err.into_inner()).clone()
    }

    fn set_token(&self, token: &str) -> Result<()> {
        *self.token.write().unwrap_or_else(|err| err.into_inner()) = Some(token.to_string());
        Ok(())
    }

    fn clear_token(&self) -> Result<()> {
        *self.token.write().unwrap_or_else(|err| err.into_inner()) = None;
        Ok(())
    }
}
