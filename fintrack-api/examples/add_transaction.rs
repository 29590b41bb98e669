use fintrack_api::{
    Client, DEFAULT_BASE_URL, FintrackApiError, Request, endpoints::transactions::NewTransaction,
};

#[tokio::main]
pub async fn main() -> Result<(), FintrackApiError> {
    let client = Client::new(DEFAULT_BASE_URL, "api_token");

    let req = Request::transactions().create(NewTransaction::new(
        "Food",
        "Expense",
        "Groceries",
        12_500,
    ));

    let _res = client.send(req).await?;
    Ok(())
}
