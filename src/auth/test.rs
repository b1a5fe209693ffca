use std::{io, path::PathBuf, sync::Arc};

use mockall::predicate::eq;

use crate::{
    api_client::{error::Error as ApiError, MockApiClient},
    notifier::{DynNotifier, MockNotifier, Notification},
    routing::Route,
    session::{error::Error as SessionError, DynSessionStore, MemorySessionStore, MockSessionStore},
};

use super::{AuthController, AuthOutcome};

const TOKEN: &'static str = "header.payload.signature";

fn expect_one(notification: Notification) -> DynNotifier {
    let mut notifier = MockNotifier::new();
    notifier.expect_notify().with(eq(notification)).times(1).return_const(());
    Arc::new(notifier)
}

fn create_controller(api: MockApiClient, session: DynSessionStore, notifier: DynNotifier) -> AuthController {
    AuthController::new(Arc::new(api), session, notifier)
}

#[tokio::test]
async fn test_login_blank_field_makes_no_call() {
    let mut api = MockApiClient::new();
    api.expect_login().never();

    let session = MemorySessionStore::new_dyn();
    let controller = create_controller(api, session.clone(), expect_one(Notification::warning("Please fill all fields")));

    assert_eq!(AuthOutcome::Stay, controller.login("user1@mail.com", "  ").await);
    assert_eq!(None, session.get_token());
}

#[tokio::test]
async fn test_login_stores_token() {
    let mut api = MockApiClient::new();
    api.expect_login()
        .withf(|email: &str, password: &str| email == "user1@mail.com" && password == "secret")
        .times(1)
        .returning(|_, _| Ok(TOKEN.to_string()));

    let session = MemorySessionStore::new_dyn();
    let controller = create_controller(api, session.clone(), expect_one(Notification::success("Login successful!")));

    assert_eq!(AuthOutcome::Redirect(Route::Dashboard), controller.login("user1@mail.com", "secret").await);
    assert_eq!(Some(TOKEN.to_string()), session.get_token());
}

#[tokio::test]
async fn test_login_rejected_shows_server_message() {
    let mut api = MockApiClient::new();
    api.expect_login()
        .times(1)
        .returning(|_, _| Err(ApiError::Auth { message: Some(String::from("Invalid credentials")) }));

    let session = MemorySessionStore::new_dyn();
    let controller = create_controller(api, session.clone(), expect_one(Notification::error("Invalid credentials")));

    assert_eq!(AuthOutcome::Stay, controller.login("user1@mail.com", "wrong").await);
    assert_eq!(None, session.get_token());
}

#[tokio::test]
async fn test_login_failure_without_message() {
    let mut api = MockApiClient::new();
    api.expect_login()
        .times(1)
        .returning(|_, _| Err(ApiError::Status(reqwest::StatusCode::INTERNAL_SERVER_ERROR, String::new())));

    let controller = create_controller(api, MemorySessionStore::new_dyn(), expect_one(Notification::error("Login failed")));

    assert_eq!(AuthOutcome::Stay, controller.login("user1@mail.com", "secret").await);
}

#[tokio::test]
async fn test_login_token_not_persisted() {
    let mut api = MockApiClient::new();
    api.expect_login().times(1).returning(|_, _| Ok(TOKEN.to_string()));

    let mut session = MockSessionStore::new();
    session.expect_set_token()
        .withf(|token: &str| token == TOKEN)
        .times(1)
        .returning(|_| Err(SessionError::IoError(
            PathBuf::from("/read-only/session.json"),
            io::Error::new(io::ErrorKind::PermissionDenied, "read-only"),
        )));

    let controller = create_controller(api, Arc::new(session), expect_one(Notification::error("Login failed")));

    assert_eq!(AuthOutcome::Stay, controller.login("user1@mail.com", "secret").await);
}

#[tokio::test]
async fn test_signup_blank_field_makes_no_call() {
    let mut api = MockApiClient::new();
    api.expect_signup().never();

    let controller = create_controller(api, MemorySessionStore::new_dyn(), expect_one(Notification::warning("Please fill all fields")));

    assert_eq!(AuthOutcome::Stay, controller.signup("", "new@mail.com", "secret").await);
}

#[tokio::test]
async fn test_signup_redirects_to_login() {
    let mut api = MockApiClient::new();
    api.expect_signup()
        .withf(|name: &str, email: &str, _: &str| name == "Asha" && email == "new@mail.com")
        .times(1)
        .returning(|_, _, _| Ok(()));

    let session = MemorySessionStore::new_dyn();
    let controller = create_controller(api, session.clone(), expect_one(Notification::success("Signup successful! Please login.")));

    assert_eq!(AuthOutcome::Redirect(Route::Login), controller.signup("Asha", "new@mail.com", "secret").await);
    // Signing up does not log in
    assert_eq!(None, session.get_token());
}

#[tokio::test]
async fn test_signup_rejected() {
    let mut api = MockApiClient::new();
    api.expect_signup()
        .times(1)
        .returning(|_, _, _| Err(ApiError::Validation { message: Some(String::from("User already exists")) }));

    let controller = create_controller(api, MemorySessionStore::new_dyn(), expect_one(Notification::error("User already exists")));
    assert_eq!(AuthOutcome::Stay, controller.signup("Asha", "taken@mail.com", "secret").await);

    let mut api = MockApiClient::new();
    api.expect_signup()
        .times(1)
        .returning(|_, _, _| Err(ApiError::Validation { message: None }));

    let controller = create_controller(api, MemorySessionStore::new_dyn(), expect_one(Notification::error("Signup failed")));
    assert_eq!(AuthOutcome::Stay, controller.signup("Asha", "taken@mail.com", "secret").await);
}

#[test]
fn test_logout_clears_token() {
    let mut api = MockApiClient::new();
    api.expect_login().never();

    let session = MemorySessionStore::with_token(TOKEN);
    let controller = create_controller(api, session.clone(), expect_one(Notification::success("Logged out successfully")));

    assert_eq!(AuthOutcome::Redirect(Route::Login), controller.logout());
    assert_eq!(None, session.get_token());
}

#[test]
fn test_logout_failure_reported() {
    let mut session = MockSessionStore::new();
    session.expect_clear_token()
        .times(1)
        .returning(|| Err(SessionError::IoError(
            PathBuf::from("/read-only/session.json"),
            io::Error::new(io::ErrorKind::PermissionDenied, "read-only"),
        )));

    let controller = create_controller(MockApiClient::new(), Arc::new(session), expect_one(Notification::error("Logout failed")));

    assert_eq!(AuthOutcome::Stay, controller.logout());
}
