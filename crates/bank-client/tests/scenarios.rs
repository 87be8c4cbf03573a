//! End-to-end exchanges against a scripted transport

use bank_client::testing::{Exchange, MockTransport};
use bank_client::{BankService, ClientError, Credentials, Method, QueryParams, ServiceConfig};
use bank_core::{DeepEq, Owner, Timestamp, Transaction, Uuid};

const USER: &str = "ef50ad5f-539a-454d-bb49-c2e3123eaba8";

fn service(replies: Vec<Exchange>) -> BankService<MockTransport> {
    let config = ServiceConfig::new("https", "bank.example.com")
        .unwrap()
        .with_credentials(Credentials::api_key("service-key"));
    let mock = MockTransport::new();
    for reply in replies {
        mock.push(reply);
    }
    BankService::with_transport(&config, mock).unwrap()
}

fn user() -> Uuid {
    Uuid::parse_str(USER).unwrap()
}

#[tokio::test]
async fn test_empty_account_list() {
    let service = service(vec![Exchange::json(
        200,
        r#"{"data":{"accounts":[]},"errors":{}}"#,
    )]);

    let accounts = service.get_user_accounts(user()).await.unwrap();
    assert!(accounts.is_empty());
    assert_eq!(accounts.len(), 0);

    let request = service.transport().last_request().unwrap();
    assert_eq!(
        request.url.as_str(),
        format!("https://bank.example.com/bank-account/user/-?uuid={USER}")
    );
    assert_eq!(request.header("X-Dot-Api-Key"), Some("service-key"));
    assert_eq!(request.header("Authorization"), None);
}

#[tokio::test]
async fn test_forbidden_account_list() {
    let service = service(vec![Exchange::json(
        403,
        r#"{"errors":{"permission":["Please ensure you have permission"]}}"#,
    )]);

    let err = service.get_user_accounts(user()).await.unwrap_err();
    match &err {
        ClientError::Remote { status, errors } => {
            assert_eq!(*status, 403);
            assert_eq!(errors.len(), 1);
            assert_eq!(
                errors["permission"],
                vec!["Please ensure you have permission".to_string()]
            );
        }
        other => panic!("expected a remote error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_query_without_q_never_dispatches() {
    let service = service(vec![]);

    let err = service.query(&QueryParams::new()).await.unwrap_err();
    assert_eq!(err.status(), Some(400));
    assert_eq!(err.errors().len(), 1);
    assert_eq!(err.errors()["q"], vec!["q is required".to_string()]);
    assert_eq!(service.transport().request_count(), 0);
}

#[tokio::test]
async fn test_transaction_batch_decodes_full_records() {
    let response = r#"{
        "message": "transactions created",
        "data": {
            "transactions": [
                {
                    "uuid": "d8bcb6fb-6d68-4cdd-9c8f-6f1bb0e46c0e",
                    "external_id": "unique-transaction-hash-1",
                    "account_uuid": "8b3d8f9a-3c1e-4e7f-9b51-7e1f4f3a2c10",
                    "date": "2023-01-05T00:00:00Z",
                    "business_name": "",
                    "description": "",
                    "debit": true,
                    "credit": false,
                    "amount": 202.5,
                    "items": [],
                    "active": true,
                    "create_date": "2023-01-06T09:12:44.000Z",
                    "update_date": "2023-01-06T09:12:44.000Z"
                },
                {
                    "uuid": "9b0b8ef9-47a1-4d5c-8a0f-3a0f3d1bb5a2",
                    "external_id": "unique-transaction-hash-2",
                    "account_uuid": "8b3d8f9a-3c1e-4e7f-9b51-7e1f4f3a2c10",
                    "date": "2023-01-05T00:00:00Z",
                    "business_name": "",
                    "description": "",
                    "debit": false,
                    "credit": true,
                    "amount": 35,
                    "items": [],
                    "active": true,
                    "create_date": "2023-01-06T09:12:44.000Z",
                    "update_date": "2023-01-06T09:12:44.000Z"
                }
            ]
        },
        "errors": {}
    }"#;
    let service = service(vec![Exchange::json(201, response)]);

    let account = Uuid::parse_str("8b3d8f9a-3c1e-4e7f-9b51-7e1f4f3a2c10").unwrap();
    let drafts = vec![
        Transaction {
            external_id: "unique-transaction-hash-1".into(),
            account_uuid: account,
            amount: 202.5,
            debit: true,
            ..Transaction::default()
        },
        Transaction {
            external_id: "unique-transaction-hash-2".into(),
            account_uuid: account,
            amount: 35.0,
            credit: true,
            ..Transaction::default()
        },
    ];

    let created = service.create_transaction_batch(&drafts).await.unwrap();

    let created_at = Timestamp::parse("2023-01-06T09:12:44.000Z").unwrap();
    let expected = vec![
        Transaction {
            uuid: Uuid::parse_str("d8bcb6fb-6d68-4cdd-9c8f-6f1bb0e46c0e").unwrap(),
            external_id: "unique-transaction-hash-1".into(),
            account_uuid: account,
            date: Timestamp::parse("2023-01-05T00:00:00Z").unwrap(),
            debit: true,
            amount: 202.5,
            active: true,
            create_date: created_at,
            update_date: created_at,
            ..Transaction::default()
        },
        Transaction {
            uuid: Uuid::parse_str("9b0b8ef9-47a1-4d5c-8a0f-3a0f3d1bb5a2").unwrap(),
            external_id: "unique-transaction-hash-2".into(),
            account_uuid: account,
            date: Timestamp::parse("2023-01-05T00:00:00Z").unwrap(),
            credit: true,
            amount: 35.0,
            active: true,
            create_date: created_at,
            update_date: created_at,
            ..Transaction::default()
        },
    ];
    assert!(created.deep_eq(&expected));
    assert_eq!(created, expected);

    let request = service.transport().last_request().unwrap();
    assert_eq!(request.method, Method::Post);
    assert_eq!(request.url.path(), "/transaction/batch");
}

#[tokio::test]
async fn test_created_transaction_round_trips() {
    let record = r#"{
        "uuid": "2b5b5fe0-ba22-4f7f-b1de-499472193202",
        "external_id": "",
        "account_uuid": "8b3d8f9a-3c1e-4e7f-9b51-7e1f4f3a2c10",
        "date": "2022-06-18T15:49:58.123Z",
        "business_name": "Takealot",
        "description": "speakers",
        "debit": true,
        "credit": false,
        "amount": 4800,
        "items": [
            {
                "uuid": "b5b3df71-d3cc-4069-9912-a0e7237aee2b",
                "transaction_uuid": "2b5b5fe0-ba22-4f7f-b1de-499472193202",
                "description": "jbl flip se 2",
                "sku": "barcode",
                "unit": "unit",
                "quantity": 1,
                "amount": 2400,
                "discount": 0,
                "tags": [
                    {"uuid": "11982575-1b9f-4f67-88fa-4a3228119044", "tag": "music", "active": true},
                    {"uuid": "91499027-ad4d-4cea-b18e-4a8d474e0874", "tag": "technology", "active": true}
                ],
                "active": true,
                "create_date": "2022-06-18T15:50:00Z",
                "update_date": "2022-06-18T15:50:00Z"
            },
            {
                "uuid": "c1a0b9b4-9f5b-4b8e-9a67-0f2c9f6a2d11",
                "transaction_uuid": "2b5b5fe0-ba22-4f7f-b1de-499472193202",
                "description": "jbl go 3",
                "sku": "barcode",
                "unit": "unit",
                "quantity": 2,
                "amount": 1200,
                "discount": 0,
                "tags": [
                    {"uuid": "11982575-1b9f-4f67-88fa-4a3228119044", "tag": "music", "active": true}
                ],
                "active": true,
                "create_date": "2022-06-18T15:50:00Z",
                "update_date": "2022-06-18T15:50:00Z"
            }
        ],
        "active": true,
        "create_date": "2022-06-18T15:50:00Z",
        "update_date": "2022-06-18T15:50:00Z"
    }"#;
    let body = format!(r#"{{"message":"transaction created","data":{{"transaction":{record}}},"errors":{{}}}}"#);
    let service = service(vec![
        Exchange::json(201, &body),
        Exchange::json(200, &body),
    ]);

    let independent: Transaction = serde_json::from_str(record).unwrap();
    let created = service.create_transaction(&independent).await.unwrap();
    assert!(created.deep_eq(&independent));
    assert_eq!(created.items.len(), 2);
    assert_eq!(created.items[0].tags.len(), 2);

    // what was sent decodes back to the same aggregate
    let sent: Transaction =
        serde_json::from_slice(service.transport().last_request().unwrap().body.as_deref().unwrap())
            .unwrap();
    assert!(sent.deep_eq(&independent));

    // decoding the same envelope twice gives equal values
    let again = service.get_transaction(created.uuid).await.unwrap();
    assert!(again.deep_eq(&created));

    let mut reordered = created.clone();
    reordered.items.swap(0, 1);
    assert!(!reordered.deep_eq(&created));
}

#[tokio::test]
async fn test_transport_failure_is_not_a_remote_error() {
    let service = service(vec![Exchange::fail("connection refused")]);

    let err = service.get_banks().await.unwrap_err();
    assert!(matches!(err, ClientError::Transport(_)));
    assert_eq!(err.status(), None);
}

#[tokio::test]
async fn test_one_client_serves_concurrent_calls() {
    let empty = r#"{"data":{"accounts":[]}}"#;
    let service = service(vec![Exchange::json(200, empty), Exchange::json(200, empty)]);
    let org = Uuid::new_v4();

    let (users, orgs) = tokio::join!(
        service.get_user_accounts(user()),
        service.get_organisation_accounts(org),
    );
    assert!(users.unwrap().is_empty());
    assert!(orgs.unwrap().is_empty());

    let mut seen: Vec<(String, Vec<String>)> = service
        .transport()
        .requests()
        .iter()
        .map(|r| (r.url.path().to_string(), r.query_values("uuid")))
        .collect();
    seen.sort();
    assert_eq!(
        seen,
        vec![
            ("/bank-account/organisation/-".to_string(), vec![org.to_string()]),
            ("/bank-account/user/-".to_string(), vec![USER.to_string()]),
        ]
    );
}

#[test]
fn test_owner_is_explicit() {
    let tag: bank_core::Tag = serde_json::from_str(&format!(
        r#"{{"tag":"one","user_uuid":"00000000-0000-0000-0000-000000000000","organisation_uuid":"{USER}"}}"#
    ))
    .unwrap();
    assert_eq!(tag.owner, Some(Owner::Organisation(user())));
}
