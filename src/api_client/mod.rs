use std::sync::Arc;

use async_trait::async_trait;
use log::{debug, warn};
#[cfg(test)]
use mockall::automock;
use reqwest::{header::CONTENT_TYPE, Client, RequestBuilder};
use serde::Serialize;

use crate::{models::{Period, Transaction, TransactionDraft}, session::DynSessionStore};

use {error::*, models::*};

pub mod error;
pub mod models;


const VIEW_PATH: &'static str = "/api/expense/view";
const FILTER_PATH: &'static str = "/api/expense/filter";
const INSERT_PATH: &'static str = "/api/expense/insert";
const DELETE_PATH: &'static str = "/api/expense/delete";
const LOGIN_PATH: &'static str = "/api/user/login";
const SIGNUP_PATH: &'static str = "/api/user/signup";

pub type DynApiClient = Arc<dyn ApiClient + Send + Sync>;

///
/// Calls against the remote expense service. Every expense operation carries
/// the session's bearer token; `login` and `signup` never do.
///
#[cfg_attr(test, automock)]
#[async_trait]
pub trait ApiClient {
    async fn list_transactions(&self) -> Result<Vec<Transaction>>;
    /// The server applies the date range; results are used as returned
    async fn filter_transactions(&self, period: Period) -> Result<Vec<Transaction>>;
    /// A 2xx is success; the created record is returned when the body carries one
    async fn insert_transaction(&self, draft: &TransactionDraft) -> Result<Option<Transaction>>;
    async fn delete_transaction(&self, id: &str) -> Result<()>;
    /// Returns the bearer token to persist
    async fn login(&self, email: &str, password: &str) -> Result<String>;
    async fn signup(&self, name: &str, email: &str, password: &str) -> Result<()>;
}

pub struct ReqwestApiClient {
    client: Client,
    base_url: String,
    session: DynSessionStore,
}

impl ReqwestApiClient {
    pub fn new_dyn(client: Client, base_url: &str, session: DynSessionStore) -> DynApiClient {
        Arc::new(ReqwestApiClient {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            session,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn authorize(&self, req: RequestBuilder) -> RequestBuilder {
        match self.session.get_token() {
            Some(token) => req.bearer_auth(token),
            None => {
                warn!("No session token present, sending request unauthenticated");
                req
            }
        }
    }

    fn json_body<T: Serialize>(req: RequestBuilder, body: &T) -> Result<RequestBuilder> {
        Ok(req.header(CONTENT_TYPE, "application/json").body(serde_json::to_string(body)?))
    }

    /// Sends the request, returning the body of a 2xx response
    async fn send(&self, req: RequestBuilder) -> Result<String> {
        let res = req.send().await?;
        let status = res.status();
        let body = res.text().await.unwrap_or(String::new());
        debug!("Expense service responded {}", status);

        if !status.is_success() {
            return Err(Error::from_response(status, body));
        }
        Ok(body)
    }

    fn parse_list(body: &str) -> Result<Vec<Transaction>> {
        let res = serde_json::from_str::<ListResponseModel>(body)?;
        Ok(res.data.unwrap_or_default())
    }
}

#[async_trait]
impl ApiClient for ReqwestApiClient {
    async fn list_transactions(&self) -> Result<Vec<Transaction>> {
        let req = self.authorize(self.client.get(self.url(VIEW_PATH)));
        let body = self.send(req).await?;
        Self::parse_list(&body)
    }

    async fn filter_transactions(&self, period: Period) -> Result<Vec<Transaction>> {
        let req = self.authorize(
            self.client.get(self.url(FILTER_PATH)).query(&[("period", period.as_str())])
        );
        let body = self.send(req).await?;
        Self::parse_list(&body)
    }

    async fn insert_transaction(&self, draft: &TransactionDraft) -> Result<Option<Transaction>> {
        let req = Self::json_body(self.authorize(self.client.post(self.url(INSERT_PATH))), draft)?;
        let body = self.send(req).await?;
        match serde_json::from_str::<InsertResponseModel>(&body) {
            Ok(res) => Ok(Some(res.into())),
            Err(err) => {
                debug!("Insert accepted without a readable record: {}", err);
                Ok(None)
            },
        }
    }

    async fn delete_transaction(&self, id: &str) -> Result<()> {
        let req = self.authorize(self.client.delete(self.url(&format!("{}/{}", DELETE_PATH, id))));
        self.send(req).await?;
        Ok(())
    }

    async fn login(&self, email: &str, password: &str) -> Result<String> {
        let req = Self::json_body(
            self.client.post(self.url(LOGIN_PATH)),
            &LoginRequestModel { email, password },
        )?;

        // Any rejected login is a credentials problem from the caller's point of view
        let body = self.send(req).await.map_err(|err| match err {
            Error::Validation { message } => Error::Auth { message },
            Error::Status(status, body) if status.is_client_error() => Error::Auth { message: parse_server_message(&body) },
            other => other,
        })?;
        Ok(serde_json::from_str::<LoginResponseModel>(&body)?.token)
    }

    async fn signup(&self, name: &str, email: &str, password: &str) -> Result<()> {
        let req = Self::json_body(
            self.client.post(self.url(SIGNUP_PATH)),
            &SignupRequestModel { name, email, password },
        )?;

        // Duplicate emails and other rejections surface as validation failures
        self.send(req).await.map_err(|err| match err {
            Error::Auth { message } => Error::Validation { message },
            Error::Status(status, body) if status.is_client_error() => Error::Validation { message: parse_server_message(&body) },
            other => other,
        })?;
        Ok(())
    }
}
