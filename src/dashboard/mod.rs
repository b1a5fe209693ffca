use std::sync::{atomic::{AtomicU64, AtomicUsize, Ordering}, Arc};

use async_trait::async_trait;
use log::{debug, error, warn};
#[cfg(test)]
use mockall::automock;

use crate::{
    aggregator,
    api_client::{error::Error as ApiError, DynApiClient},
    confirm::DynConfirmer,
    models::Period,
    notifier::{DynNotifier, Notification},
    observable::Observable,
    routing::{Navigation, Route, RouteGuard},
    session::DynSessionStore,
};

pub use models::*;

pub mod models;


pub const DELETE_PROMPT: &'static str = "Are you sure you want to delete this expense?";

const LOGIN_REQUIRED_MSG: &'static str = "Please login to continue";
const SESSION_EXPIRED_MSG: &'static str = "Session expired, please login again";
const FETCH_FAILED_MSG: &'static str = "Failed to fetch expenses";
const FILTER_FAILED_MSG: &'static str = "Failed to apply filter";
const DELETE_FAILED_MSG: &'static str = "Failed to delete expense";
const DELETED_MSG: &'static str = "Expense deleted successfully";

pub type DynRefresh = Arc<dyn Refresh + Send + Sync>;

#[cfg_attr(test, automock)]
#[async_trait]
pub trait Refresh {
    /// Re-fetches the collection currently on display
    async fn refresh(&self);
}

///
/// Composes the transaction collection, its summary and the period filter
/// into one observable state container.
///
/// Every fetch is numbered; a response that arrives after a newer fetch was
/// issued is dropped, so a slow filter can never overwrite a later one.
/// An authentication failure ends the session and sends the user to login.
///
pub struct DashboardView {
    api: DynApiClient,
    session: DynSessionStore,
    guard: RouteGuard,
    notifier: DynNotifier,
    confirmer: DynConfirmer,
    state: Observable<DashboardState>,
    latest_fetch: AtomicU64,
    in_flight: AtomicUsize,
}

impl DashboardView {
    pub fn new(
        api: DynApiClient,
        session: DynSessionStore,
        notifier: DynNotifier,
        confirmer: DynConfirmer,
    ) -> Self {
        DashboardView {
            api,
            guard: RouteGuard::new(session.clone()),
            session,
            notifier,
            confirmer,
            state: Observable::new(DashboardState::default()),
            latest_fetch: AtomicU64::new(0),
            in_flight: AtomicUsize::new(0),
        }
    }

    pub fn state(&self) -> &Observable<DashboardState> {
        &self.state
    }

    pub fn snapshot(&self) -> DashboardState {
        self.state.get()
    }

    /// Access check alone, for work on the dashboard that needs no listing
    pub fn enter(&self) -> Navigation {
        let nav = self.guard.evaluate(Route::Dashboard);
        if let Navigation::Redirect(_) = nav {
            self.notifier.notify(Notification::warning(LOGIN_REQUIRED_MSG));
        }
        nav
    }

    pub async fn mount(&self) -> Navigation {
        if let Navigation::Redirect(route) = self.enter() {
            return Navigation::Redirect(route);
        }
        self.fetch(None).await
    }

    pub async fn apply_filter(&self, period: Period) -> Navigation {
        self.fetch(Some(period)).await
    }

    pub async fn show_all(&self) -> Navigation {
        self.fetch(None).await
    }

    pub async fn delete(&self, id: &str) -> Navigation {
        if !self.confirmer.confirm(DELETE_PROMPT) {
            debug!("Delete of {} declined", id);
            return Navigation::Allow(Route::Dashboard);
        }

        match self.api.delete_transaction(id).await {
            Ok(()) => {
                self.notifier.notify(Notification::success(DELETED_MSG));
                let period = self.state.get().period;
                self.fetch(period).await
            },
            Err(err) if err.is_auth() => self.expire_session(&err),
            Err(err) => {
                error!("Could not delete transaction {}: {}", id, err);
                self.notifier.notify(Notification::error(DELETE_FAILED_MSG));
                Navigation::Allow(Route::Dashboard)
            },
        }
    }

    async fn fetch(&self, period: Option<Period>) -> Navigation {
        let fetch_id = self.latest_fetch.fetch_add(1, Ordering::SeqCst) + 1;
        let _loading = LoadingGuard::start(self);

        let result = match period {
            Some(period) => self.api.filter_transactions(period).await,
            None => self.api.list_transactions().await,
        };

        if fetch_id != self.latest_fetch.load(Ordering::SeqCst) {
            debug!("Discarding response of superseded fetch #{}", fetch_id);
            return Navigation::Allow(Route::Dashboard);
        }

        match result {
            Ok(transactions) => {
                let summary = aggregator::summarize(&transactions);
                self.state.update(|state| {
                    state.transactions = transactions;
                    state.summary = summary;
                    state.period = period;
                });
                Navigation::Allow(Route::Dashboard)
            },
            Err(err) if err.is_auth() => self.expire_session(&err),
            Err(err) => {
                // Collection stays as it was
                error!("Could not fetch transactions: {}", err);
                self.notifier.notify(Notification::error(
                    if period.is_some() { FILTER_FAILED_MSG } else { FETCH_FAILED_MSG }
                ));
                Navigation::Allow(Route::Dashboard)
            },
        }
    }

    fn expire_session(&self, err: &ApiError) -> Navigation {
        warn!("Expense service rejected the session, logging out: {}", err);
        if let Err(err) = self.session.clear_token() {
            error!("Could not clear session token: {}", err);
        }
        self.notifier.notify(Notification::error(SESSION_EXPIRED_MSG));
        Navigation::Redirect(Route::Login)
    }
}

#[async_trait]
impl Refresh for DashboardView {
    async fn refresh(&self) {
        let period = self.state.get().period;
        self.fetch(period).await;
    }
}

///
/// Holds `loading` true while any fetch is outstanding. The counter only
/// changes under the state's write lock, together with the flag.
///
struct LoadingGuard<'a> {
    view: &'a DashboardView,
}

impl<'a> LoadingGuard<'a> {
    fn start(view: &'a DashboardView) -> Self {
        view.state.update(|state| {
            view.in_flight.fetch_add(1, Ordering::SeqCst);
            state.loading = true;
        });
        LoadingGuard { view }
    }
}

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        let in_flight = &self.view.in_flight;
        self.view.state.update(|state| {
            state.loading = in_flight.fetch_sub(1, Ordering::SeqCst) > 1;
        });
    }
}
