use super::Milliunits;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use tower_api_client::{Method, Request, RequestData};
use uuid::Uuid;

// Common

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Transaction {
    pub id: Uuid,
    #[serde(default)]
    pub date: Option<NaiveDate>,
    pub category: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub detail: String,
    pub amount: Milliunits,
}

impl PartialOrd for Transaction {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// Newest first; undated transactions sort last.
impl Ord for Transaction {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        other
            .date
            .cmp(&self.date)
            .then(self.amount.cmp(&other.amount))
            .then(self.id.cmp(&other.id))
    }
}

// Requests

#[derive(Default, Debug, Clone)]
pub struct ListTransactions;

impl ListTransactions {
    pub fn new() -> Self {
        Self
    }
}

impl Request for ListTransactions {
    type Data = ();
    type Response = TransactionsResponse;

    fn endpoint(&self) -> Cow<'_, str> {
        "/transactions".into()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CreateTransaction {
    transaction: NewTransaction,
}

impl CreateTransaction {
    pub fn new(transaction: NewTransaction) -> Self {
        Self { transaction }
    }
}

impl Request for CreateTransaction {
    type Data = Self;
    type Response = CreateTransactionResponse;
    const METHOD: Method = Method::POST;

    fn endpoint(&self) -> Cow<'_, str> {
        "/transactions".into()
    }

    fn data(&self) -> RequestData<&Self::Data> {
        RequestData::Json(self)
    }
}

/// Body of a create request. `date` is omitted when the entry surface has no
/// date input and the backend stamps the transaction itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewTransaction {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
    pub category: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub detail: String,
    pub amount: Milliunits,
}

impl NewTransaction {
    pub fn new<T>(
        category: impl Into<String>,
        kind: impl Into<String>,
        detail: impl Into<String>,
        amount: T,
    ) -> Self
    where
        T: Into<Milliunits>,
    {
        Self {
            date: None,
            category: category.into(),
            kind: kind.into(),
            detail: detail.into(),
            amount: amount.into(),
        }
    }

    pub fn with_date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransactionsResponse {
    pub data: TransactionsData,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransactionsData {
    pub transactions: Vec<Transaction>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTransactionResponse {
    pub data: CreateTransactionData,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTransactionData {
    pub transaction: Transaction,
}
