use crate::endpoints::transactions::{CreateTransaction, ListTransactions, NewTransaction};

#[derive(Default)]
pub struct TransactionRepository;

impl TransactionRepository {
    pub fn new() -> Self {
        Self
    }

    pub fn list(&self) -> ListTransactions {
        ListTransactions::new()
    }

    pub fn create(&self, transaction: NewTransaction) -> CreateTransaction {
        CreateTransaction::new(transaction)
    }
}
