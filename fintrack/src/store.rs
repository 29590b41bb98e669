use fintrack_api::endpoints::transactions::{NewTransaction, Transaction};
use fintrack_api::{Client, FintrackApiError, Request};
use fintrack_session::SessionContext;
use futures::future::BoxFuture;
use futures::FutureExt;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("no session token available")]
    Unauthenticated,
    #[error(transparent)]
    Api(#[from] FintrackApiError),
}

/// Where transactions are persisted.
///
/// The returned futures own everything they need so they can be spawned onto
/// the runtime.
pub trait TransactionStore: Send + Sync {
    fn submit(
        &self,
        payload: NewTransaction,
        session: &SessionContext,
    ) -> BoxFuture<'static, Result<Transaction, StoreError>>;

    fn list(&self, session: &SessionContext)
        -> BoxFuture<'static, Result<Vec<Transaction>, StoreError>>;
}

/// Store backed by the tracker's REST API.
pub struct ApiTransactionStore {
    base_url: String,
}

impl ApiTransactionStore {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    fn client(&self, session: &SessionContext) -> Result<Client, StoreError> {
        let token = session.token().ok_or(StoreError::Unauthenticated)?;
        Ok(Client::new(&self.base_url, token))
    }
}

impl TransactionStore for ApiTransactionStore {
    fn submit(
        &self,
        payload: NewTransaction,
        session: &SessionContext,
    ) -> BoxFuture<'static, Result<Transaction, StoreError>> {
        let client = self.client(session);
        async move {
            let req = Request::transactions().create(payload);
            let response = client?.send(req).await?;
            Ok(response.data.transaction)
        }
        .boxed()
    }

    fn list(
        &self,
        session: &SessionContext,
    ) -> BoxFuture<'static, Result<Vec<Transaction>, StoreError>> {
        let client = self.client(session);
        async move {
            let response = client?.send(Request::transactions().list()).await?;
            Ok(response.data.transactions)
        }
        .boxed()
    }
}
