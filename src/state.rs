use std::sync::Arc;

use crate::{
    api_client::DynApiClient,
    auth::AuthController,
    confirm::DynConfirmer,
    dashboard::DashboardView,
    date_time_provider::DynDateTimeProvider,
    form::FormController,
    notifier::DynNotifier,
    routing::RouteGuard,
    session::DynSessionStore,
};

/// Shared services every view is built from
#[derive(Clone)]
pub struct AppState {
    pub session: DynSessionStore,
    pub api: DynApiClient,
    pub notifier: DynNotifier,
    pub confirmer: DynConfirmer,
    pub dt_provider: DynDateTimeProvider,
}

impl AppState {
    pub fn dashboard(&self) -> Arc<DashboardView> {
        Arc::new(DashboardView::new(
            self.api.clone(),
            self.session.clone(),
            self.notifier.clone(),
            self.confirmer.clone(),
        ))
    }

    /// Form whose successful submits refresh `dashboard`
    pub fn form(&self, dashboard: Arc<DashboardView>) -> FormController {
        FormController::new(self.api.clone(), self.dt_provider.clone(), self.notifier.clone(), dashboard)
    }

    pub fn auth(&self) -> AuthController {
        AuthController::new(self.api.clone(), self.session.clone(), self.notifier.clone())
    }

    pub fn guard(&self) -> RouteGuard {
        RouteGuard::new(self.session.clone())
    }
}
