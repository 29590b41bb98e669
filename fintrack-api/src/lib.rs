pub mod endpoints;
mod error;
pub mod repositories;

pub use crate::error::{ErrorDetail, FintrackApiError};
use repositories::*;
use tower_api_client::{Client as ApiClient, Request as ApiRequest};

pub const DEFAULT_BASE_URL: &str = "http://localhost:3000/api";

pub struct Client {
    inner: ApiClient,
}

impl Client {
    pub fn new(base_url: &str, access_token: &str) -> Self {
        Self {
            inner: ApiClient::new(base_url).bearer_auth(access_token),
        }
    }

    pub async fn send<R>(&self, request: R) -> Result<R::Response, FintrackApiError>
    where
        R: ApiRequest,
    {
        self.inner.send(request).await.map_err(From::from)
    }
}

pub struct Request;

impl Request {
    pub fn transactions() -> TransactionRepository {
        TransactionRepository::new()
    }
}
