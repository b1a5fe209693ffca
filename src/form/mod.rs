use std::sync::RwLock;

use log::{debug, error, info};

use crate::{
    api_client::DynApiClient,
    dashboard::DynRefresh,
    date_time_provider::DynDateTimeProvider,
    models::{Transaction, TransactionDraft},
    notifier::{DynNotifier, Notification},
};

use error::*;

pub mod error;


const MISSING_FIELDS_MSG: &'static str = "Please fill all required fields";
const ADDED_MSG: &'static str = "Expense added successfully";
const ADD_FAILED_MSG: &'static str = "Failed to add expense";

#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// Required fields missing, nothing sent
    Invalid,
    Failed,
    /// Accepted by the service, with the created record when it was echoed back
    Submitted(Option<Transaction>),
}

///
/// Holds the draft transaction being entered and submits it to the
/// expense service. Fields are merged without checks while editing;
/// validation only runs on submit.
///
pub struct FormController {
    api: DynApiClient,
    dt_provider: DynDateTimeProvider,
    notifier: DynNotifier,
    refresher: DynRefresh,
    draft: RwLock<TransactionDraft>,
}

impl FormController {
    pub fn new(
        api: DynApiClient,
        dt_provider: DynDateTimeProvider,
        notifier: DynNotifier,
        refresher: DynRefresh,
    ) -> Self {
        let draft = TransactionDraft::empty(dt_provider.today());
        FormController { api, dt_provider, notifier, refresher, draft: RwLock::new(draft) }
    }

    pub fn draft(&self) -> TransactionDraft {
        self.draft.read().unwrap_or_else(|err| err.into_inner()).clone()
    }

    pub fn update_field(&self, name: &str, value: &str) -> Result<()> {
        let mut draft = self.draft.write().unwrap_or_else(|err| err.into_inner());
        match name {
            "amount" => draft.amount = value.to_string(),
            "category" => draft.category = value.to_string(),
            "description" => draft.description = value.to_string(),
            "group" => draft.group = value.to_string(),
            "date" => draft.date = value.to_string(),
            "type" => draft.tx_type = value.parse().map_err(Error::InvalidType)?,
            other => return Err(Error::UnknownField(other.to_string())),
        }
        Ok(())
    }

    pub fn validate(draft: &TransactionDraft) -> bool {
        [&draft.amount, &draft.category, &draft.date]
            .iter()
            .all(|field| !field.trim().is_empty())
    }

    pub async fn submit(&self) -> SubmitOutcome {
        let draft = self.draft();
        if !Self::validate(&draft) {
            debug!("Draft rejected, required fields missing");
            self.notifier.notify(Notification::warning(MISSING_FIELDS_MSG));
            return SubmitOutcome::Invalid;
        }

        match self.api.insert_transaction(&draft).await {
            Ok(created) => {
                match &created {
                    Some(tx) => info!("Transaction {} created", tx.id),
                    None => info!("Transaction created"),
                }
                self.notifier.notify(Notification::success(ADDED_MSG));
                *self.draft.write().unwrap_or_else(|err| err.into_inner()) =
                    TransactionDraft::empty(self.dt_provider.today());
                self.refresher.refresh().await;
                SubmitOutcome::Submitted(created)
            },
            Err(err) => {
                error!("Could not create transaction: {}", err);
                self.notifier.notify(Notification::error(ADD_FAILED_MSG));
                SubmitOutcome::Failed
            },
        }
    }
}
