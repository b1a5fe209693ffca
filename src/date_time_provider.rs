use std::sync::Arc;

use chrono::{Local, NaiveDate};
#[cfg(test)]
use mockall::automock;

pub type DynDateTimeProvider = Arc<dyn DateTimeProvider + Send + Sync>;

#[cfg_attr(test, automock)]
pub trait DateTimeProvider {
    /// The user's current calendar date
    fn today(&self) -> NaiveDate;
}

pub struct CoreTimeProvider;

impl CoreTimeProvider {
    pub fn new_dyn() -> DynDateTimeProvider {
        Arc::new(CoreTimeProvider)
    }
}

impl DateTimeProvider for CoreTimeProvider {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}
