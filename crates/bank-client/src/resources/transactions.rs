use crate::envelope::{TransactionBatch, TransactionData, TransactionsData};
use crate::error::ClientResult;
use crate::outcome::{CREATED, OK};
use crate::request::{QueryParams, Request, DATE_FORMAT};
use crate::service::BankService;
use crate::transport::Transport;
use bank_core::{Transaction, Transactions, Uuid};
use chrono::NaiveDate;
use tracing::debug;

/// Optional inclusive bounds on transaction dates
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DateRange {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

impl DateRange {
    /// No bounds at all
    pub fn all() -> Self {
        Self::default()
    }

    pub fn between(start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            start: Some(start),
            end: Some(end),
        }
    }

    /// The `start_date` / `end_date` filters for this range
    pub fn to_query(&self) -> QueryParams {
        let mut query = QueryParams::new();
        if let Some(start) = self.start {
            query.append("start_date", start.format(DATE_FORMAT).to_string());
        }
        if let Some(end) = self.end {
            query.append("end_date", end.format(DATE_FORMAT).to_string());
        }
        query
    }
}

impl<T: Transport> BankService<T> {
    /// Transactions recorded against an account
    pub async fn get_account_transactions(&self, account: Uuid) -> ClientResult<Transactions> {
        let request = Request::get("/transaction/account/-").uuid(account);
        self.exchange::<TransactionsData>(request, OK).await
    }

    /// Transactions across every account an entity owns
    pub async fn get_entity_transactions(
        &self,
        entity: Uuid,
        range: DateRange,
    ) -> ClientResult<Transactions> {
        self.search_entity_transactions(entity, &range.to_query()).await
    }

    /// Entity transactions narrowed by arbitrary query filters
    ///
    /// Any `uuid` in `filters` is replaced by `entity`.
    pub async fn search_entity_transactions(
        &self,
        entity: Uuid,
        filters: &QueryParams,
    ) -> ClientResult<Transactions> {
        let mut query = filters.clone();
        query.set("uuid", entity.to_string());
        let request = Request::get("/transaction/entity/-").query(query);
        self.exchange::<TransactionsData>(request, OK).await
    }

    pub async fn get_transaction(&self, transaction: Uuid) -> ClientResult<Transaction> {
        let request = Request::get("/transaction/-").uuid(transaction);
        self.exchange::<TransactionData>(request, OK).await
    }

    pub async fn create_transaction(&self, transaction: &Transaction) -> ClientResult<Transaction> {
        let request = Request::post("/transaction").json(transaction)?;
        self.exchange::<TransactionData>(request, CREATED).await
    }

    pub async fn update_transaction(&self, transaction: &Transaction) -> ClientResult<Transaction> {
        let request = Request::put("/transaction/-").json(transaction)?;
        self.exchange::<TransactionData>(request, OK).await
    }

    pub async fn delete_transaction(&self, transaction: Uuid) -> ClientResult<()> {
        let request = Request::delete("/transaction/-").uuid(transaction);
        self.exchange_empty(request, OK).await
    }

    /// Create several transactions in one call
    ///
    /// The service silently skips entries whose account does not exist, so
    /// the result may be shorter than `transactions`. That is not an error.
    pub async fn create_transaction_batch(
        &self,
        transactions: &[Transaction],
    ) -> ClientResult<Transactions> {
        let request = Request::post("/transaction/batch").json(&TransactionBatch { transactions })?;
        let created = self.exchange::<TransactionsData>(request, CREATED).await?;

        if created.len() != transactions.len() {
            debug!(
                "Transaction batch: submitted {}, service created {}",
                transactions.len(),
                created.len()
            );
        }
        Ok(created)
    }
}

#[cfg(test)]
mod tests {
    use super::DateRange;
    use crate::request::QueryParams;
    use crate::resources::fixtures::{service, uuid, USER};
    use crate::testing::Exchange;
    use crate::transport::Method;
    use bank_core::{DeepEq, Transaction};
    use chrono::NaiveDate;

    const TRANSACTION: &str = r#"{"uuid":"2b5b5fe0-ba22-4f7f-b1de-499472193202","external_id":"","account_uuid":"8b3d8f9a-3c1e-4e7f-9b51-7e1f4f3a2c10","date":"2022-06-18T15:49:58.000Z","business_name":"Takealot","description":"speaker","debit":true,"credit":false,"amount":2400,"items":[{"uuid":"b5b3df71-d3cc-4069-9912-a0e7237aee2b","transaction_uuid":"2b5b5fe0-ba22-4f7f-b1de-499472193202","description":"jbl flip se 2","amount":2400,"tags":[{"uuid":"11982575-1b9f-4f67-88fa-4a3228119044","tag":"music"}]}],"active":true,"create_date":"2022-06-18T15:50:00.000Z","update_date":"2022-06-18T15:50:00.000Z"}"#;

    #[tokio::test]
    async fn test_get_account_transactions() {
        let service = service(vec![Exchange::json(
            200,
            &format!(r#"{{"data":{{"transactions":[{TRANSACTION}]}}}}"#),
        )]);

        let txns = service
            .get_account_transactions(uuid("8b3d8f9a-3c1e-4e7f-9b51-7e1f4f3a2c10"))
            .await
            .unwrap();
        let expected: Transaction = serde_json::from_str(TRANSACTION).unwrap();
        assert!(txns.deep_eq(&vec![expected]));
        assert!(txns[0].is_manual());
        assert_eq!(
            service.transport().last_request().unwrap().url.path(),
            "/transaction/account/-"
        );
    }

    #[tokio::test]
    async fn test_entity_transactions_with_range() {
        let empty = r#"{"data":{"transactions":[]}}"#;
        let service = service(vec![Exchange::json(200, empty), Exchange::json(200, empty)]);

        let start = NaiveDate::from_ymd_opt(2022, 6, 1).unwrap();
        let end = NaiveDate::from_ymd_opt(2022, 6, 30).unwrap();
        let txns = service
            .get_entity_transactions(uuid(USER), DateRange::between(start, end))
            .await
            .unwrap();
        assert!(txns.is_empty());

        service
            .get_entity_transactions(uuid(USER), DateRange::all())
            .await
            .unwrap();

        let requests = service.transport().requests();
        assert_eq!(
            requests[0].url.query(),
            Some("end_date=2022-06-30&start_date=2022-06-01&uuid=ef50ad5f-539a-454d-bb49-c2e3123eaba8")
        );
        assert_eq!(requests[1].url.query(), Some("uuid=ef50ad5f-539a-454d-bb49-c2e3123eaba8"));
    }

    #[tokio::test]
    async fn test_entity_transactions_extra_filters_keep_entity_uuid() {
        let service = service(vec![Exchange::json(200, r#"{"data":{"transactions":[]}}"#)]);

        let filters = QueryParams::new()
            .with("uuid", "00000000-0000-0000-0000-000000000000")
            .with("business_name", "Takealot")
            .with("start_date", "2022-06-01");
        service
            .search_entity_transactions(uuid(USER), &filters)
            .await
            .unwrap();

        let request = service.transport().last_request().unwrap();
        assert_eq!(request.url.path(), "/transaction/entity/-");
        assert_eq!(request.query_values("uuid"), vec![USER]);
        assert_eq!(request.query_values("business_name"), vec!["Takealot"]);
        assert_eq!(request.query_values("start_date"), vec!["2022-06-01"]);
    }

    #[tokio::test]
    async fn test_get_transaction_not_found() {
        let service = service(vec![Exchange::json(
            404,
            r#"{"message":"","data":{},"errors":{"transaction":["not found"]}}"#,
        )]);

        let err = service
            .get_transaction(uuid("2b5b5fe0-ba22-4f7f-b1de-499472193202"))
            .await
            .unwrap_err();
        assert_eq!(err.status(), Some(404));
        let request = service.transport().last_request().unwrap();
        assert_eq!(request.url.path(), "/transaction/-");
        assert_eq!(request.query_values("uuid").len(), 1);
    }

    #[tokio::test]
    async fn test_create_update_delete_transaction() {
        let service = service(vec![
            Exchange::json(201, &format!(r#"{{"data":{{"transaction":{TRANSACTION}}}}}"#)),
            Exchange::json(200, &format!(r#"{{"data":{{"transaction":{TRANSACTION}}}}}"#)),
            Exchange::json(200, r#"{"data":{}}"#),
        ]);

        let draft = Transaction {
            description: "speaker".into(),
            amount: 2400.0,
            ..Transaction::default()
        };
        let created = service.create_transaction(&draft).await.unwrap();
        let updated = service.update_transaction(&created).await.unwrap();
        assert_eq!(created, updated);
        service.delete_transaction(created.uuid).await.unwrap();

        let requests = service.transport().requests();
        assert_eq!(requests[0].method, Method::Post);
        assert_eq!(requests[0].url.path(), "/transaction");
        assert_eq!(requests[0].json_body().unwrap()["date"], "0001-01-01T00:00:00Z");
        assert_eq!(requests[1].method, Method::Put);
        assert_eq!(requests[1].url.path(), "/transaction/-");
        assert_eq!(requests[2].method, Method::Delete);
        assert_eq!(requests[2].query_values("uuid"), vec![created.uuid.to_string()]);
    }

    #[tokio::test]
    async fn test_batch_shorter_result_is_not_an_error() {
        let service = service(vec![Exchange::json(
            201,
            &format!(r#"{{"data":{{"transactions":[{TRANSACTION}]}}}}"#),
        )]);

        let drafts = vec![Transaction::default(), Transaction::default()];
        let created = service.create_transaction_batch(&drafts).await.unwrap();
        assert_eq!(created.len(), 1);

        let request = service.transport().last_request().unwrap();
        assert_eq!(request.url.path(), "/transaction/batch");
        let body = request.json_body().unwrap();
        assert_eq!(body["transactions"].as_array().unwrap().len(), 2);
    }
}
