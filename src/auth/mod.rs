use log::{error, info, warn};

use crate::{
    api_client::DynApiClient,
    notifier::{DynNotifier, Notification},
    routing::Route,
    session::DynSessionStore,
};

#[cfg(test)]
mod test;

const MISSING_FIELDS_MSG: &'static str = "Please fill all fields";
const LOGIN_OK_MSG: &'static str = "Login successful!";
const LOGIN_FAILED_MSG: &'static str = "Login failed";
const SIGNUP_OK_MSG: &'static str = "Signup successful! Please login.";
const SIGNUP_FAILED_MSG: &'static str = "Signup failed";
const LOGOUT_MSG: &'static str = "Logged out successfully";
const LOGOUT_FAILED_MSG: &'static str = "Logout failed";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthOutcome {
    Redirect(Route),
    /// Remain on the current form
    Stay,
}

pub struct AuthController {
    api: DynApiClient,
    session: DynSessionStore,
    notifier: DynNotifier,
}

impl AuthController {
    pub fn new(api: DynApiClient, session: DynSessionStore, notifier: DynNotifier) -> Self {
        AuthController { api, session, notifier }
    }

    ///
    /// Exchanges credentials for a token and stores it. Rejections are
    /// reported with the server's own message when it sent one.
    ///
    pub async fn login(&self, email: &str, password: &str) -> AuthOutcome {
        if any_blank(&[email, password]) {
            self.notifier.notify(Notification::warning(MISSING_FIELDS_MSG));
            return AuthOutcome::Stay;
        }

        let token = match self.api.login(email, password).await {
            Ok(token) => token,
            Err(err) => {
                warn!("Login for {} failed: {}", email, err);
                self.notifier.notify(Notification::error(err.server_message().unwrap_or(LOGIN_FAILED_MSG)));
                return AuthOutcome::Stay;
            },
        };

        if let Err(err) = self.session.set_token(&token) {
            error!("Could not persist session token: {}", err);
            self.notifier.notify(Notification::error(LOGIN_FAILED_MSG));
            return AuthOutcome::Stay;
        }

        info!("Logged in as {}", email);
        self.notifier.notify(Notification::success(LOGIN_OK_MSG));
        AuthOutcome::Redirect(Route::Dashboard)
    }

    pub async fn signup(&self, name: &str, email: &str, password: &str) -> AuthOutcome {
        if any_blank(&[name, email, password]) {
            self.notifier.notify(Notification::warning(MISSING_FIELDS_MSG));
            return AuthOutcome::Stay;
        }

        match self.api.signup(name, email, password).await {
            Ok(()) => {
                info!("Account created for {}", email);
                self.notifier.notify(Notification::success(SIGNUP_OK_MSG));
                AuthOutcome::Redirect(Route::Login)
            },
            Err(err) => {
                warn!("Signup for {} failed: {}", email, err);
                self.notifier.notify(Notification::error(err.server_message().unwrap_or(SIGNUP_FAILED_MSG)));
                AuthOutcome::Stay
            },
        }
    }

    /// A token that cannot be removed keeps the user logged in
    pub fn logout(&self) -> AuthOutcome {
        if let Err(err) = self.session.clear_token() {
            error!("Could not clear session token: {}", err);
            self.notifier.notify(Notification::error(LOGOUT_FAILED_MSG));
            return AuthOutcome::Stay;
        }
        self.notifier.notify(Notification::success(LOGOUT_MSG));
        AuthOutcome::Redirect(Route::Login)
    }
}

fn any_blank(fields: &[&str]) -> bool {
    fields.iter().any(|field| field.trim().is_empty())
}
