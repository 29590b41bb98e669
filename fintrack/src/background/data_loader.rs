use crate::events::DataEvent;
use crate::store::TransactionStore;
use fintrack_api::endpoints::transactions::NewTransaction;
use fintrack_session::SessionContext;
use std::future::Future;
use std::sync::Arc;
use tokio::sync::mpsc;
use uuid::Uuid;

/// Runs store calls and reports their results as data events
#[derive(Clone)]
pub struct DataLoader {
    pub store: Arc<dyn TransactionStore>,
    pub data_tx: mpsc::UnboundedSender<DataEvent>,
}

impl DataLoader {
    pub fn new(store: Arc<dyn TransactionStore>, data_tx: mpsc::UnboundedSender<DataEvent>) -> Self {
        Self { store, data_tx }
    }

    /// Load the transaction listing
    pub fn load_transactions(&self, session: &SessionContext) -> impl Future<Output = ()> + Send + 'static {
        let request = self.store.list(session);
        let data_tx = self.data_tx.clone();

        async move {
            tracing::info!("Loading transactions");
            match request.await {
                Ok(transactions) => {
                    tracing::info!("Loaded {} transactions", transactions.len());
                    let _ = data_tx.send(DataEvent::TransactionsLoaded { transactions });
                }
                Err(e) => {
                    tracing::error!("Failed to load transactions: {}", e);
                    let _ = data_tx.send(DataEvent::LoadError {
                        error: format!("Failed to load transactions: {}", e),
                    });
                }
            }
        }
    }

    /// Submit a new transaction. Failures are logged and reported, never retried.
    pub fn add_transaction(
        &self,
        dispatch_id: Uuid,
        payload: NewTransaction,
        session: &SessionContext,
    ) -> impl Future<Output = ()> + Send + 'static {
        tracing::info!(
            "Adding {} transaction in {} for {}",
            payload.kind,
            payload.category,
            payload.amount
        );
        let request = self.store.submit(payload, session);
        let data_tx = self.data_tx.clone();

        async move {
            match request.await {
                Ok(transaction) => {
                    tracing::info!("Transaction {} added", transaction.id);
                    let _ = data_tx.send(DataEvent::TransactionAdded {
                        dispatch_id,
                        transaction,
                    });
                }
                Err(e) => {
                    tracing::error!("Failed to add transaction: {}", e);
                    let _ = data_tx.send(DataEvent::TransactionAddFailed {
                        dispatch_id,
                        error: e.to_string(),
                    });
                }
            }
        }
    }
}
