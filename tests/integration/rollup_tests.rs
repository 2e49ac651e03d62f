use super::helpers::*;
use super::mock_server::MockRollupServer;
use notary::handlers::{handle_advance, handle_inspect, handle_request, open_store};
use notary::RecordStore;

fn parse(output: &str) -> serde_json::Value {
    serde_json::from_str(output).unwrap()
}

#[tokio::test]
async fn test_notarise_document_workflow() {
    let server = MockRollupServer::new();
    let server_url = server.start().await;
    let client = hyper::Client::new();
    let contract = test_contract();
    let key = test_signing_key();

    let payload = create_notarise_payload(&key, &[0x11; 32]);
    let request = create_advance_request(&payload, "0x1234567890abcdef", 100);

    let result = handle_advance(&client, &server_url, &contract, request).await;
    assert_eq!(result.unwrap(), "accept");

    let notices = server.get_notices();
    assert_eq!(notices.len(), 1, "Should have exactly one notice");

    let notice = parse(&notices[0]);
    assert_eq!(notice["operation"], "NOTARISE");
    assert_eq!(notice["result"].as_str().unwrap().len(), 40); // 20 bytes hex
    assert_eq!(contract.store().count().unwrap(), 1);
}

#[tokio::test]
async fn test_notarise_then_inspect_details() {
    let server = MockRollupServer::new();
    let server_url = server.start().await;
    let client = hyper::Client::new();
    let contract = test_contract();
    let key = test_signing_key();
    let document_hash = [0x22u8; 32];

    let notarise = create_advance_request(&create_notarise_payload(&key, &document_hash), "0x1", 100);
    handle_advance(&client, &server_url, &contract, notarise)
        .await
        .unwrap();

    let id_hex = parse(&server.get_notices()[0])["result"]
        .as_str()
        .unwrap()
        .to_string();
    server.clear();

    let id = hex::decode(&id_hex).unwrap();
    let inspect = create_inspect_request(&create_details_payload(&id));
    let result = handle_inspect(&client, &server_url, &contract, inspect).await;
    assert_eq!(result.unwrap(), "accept");

    let reports = server.get_reports();
    assert_eq!(reports.len(), 1);

    let report = parse(&reports[0]);
    let details = hex::decode(report["result"].as_str().unwrap()).unwrap();
    assert_eq!(details.len(), 4 + 32 + 32);
    assert_eq!(&details[..4], &[0x64, 0x00, 0x00, 0x00]);
    assert_eq!(report["details"]["height"], 100);
    assert_eq!(
        report["details"]["signatory"],
        hex::encode(key.verifying_key().to_bytes())
    );
    assert_eq!(report["details"]["document_hash"], hex::encode(document_hash));
}

#[tokio::test]
async fn test_unwitnessed_notarise_reports_empty_result() {
    let server = MockRollupServer::new();
    let server_url = server.start().await;
    let client = hyper::Client::new();
    let contract = test_contract();

    let signatory: Vec<u8> = (0u8..32).collect();
    let payload = create_unwitnessed_payload(&signatory, &[0x33; 16]);
    let request = create_advance_request(&payload, "0x1", 100);

    let result = handle_advance(&client, &server_url, &contract, request).await;
    assert_eq!(result.unwrap(), "accept");

    assert!(server.get_notices().is_empty());
    let report = parse(&server.get_reports()[0]);
    assert_eq!(report["result"], "");
    assert_eq!(contract.store().count().unwrap(), 0);
}

#[tokio::test]
async fn test_short_document_hash_reports_empty_result() {
    let server = MockRollupServer::new();
    let server_url = server.start().await;
    let client = hyper::Client::new();
    let contract = test_contract();

    let payload = create_notarise_payload(&test_signing_key(), &[0x44; 10]);
    let request = create_advance_request(&payload, "0x1", 0);

    let result = handle_advance(&client, &server_url, &contract, request).await;
    assert_eq!(result.unwrap(), "accept");

    assert!(server.get_notices().is_empty());
    assert_eq!(parse(&server.get_reports()[0])["result"], "");
}

#[tokio::test]
async fn test_block_number_beyond_u32_is_soft_failure() {
    let server = MockRollupServer::new();
    let server_url = server.start().await;
    let client = hyper::Client::new();
    let contract = test_contract();

    let payload = create_notarise_payload(&test_signing_key(), &[0x55; 32]);
    let request = create_advance_request(&payload, "0x1", u64::from(u32::MAX) + 1);

    let result = handle_advance(&client, &server_url, &contract, request).await;
    assert_eq!(result.unwrap(), "accept");

    assert!(server.get_notices().is_empty());
    assert_eq!(contract.store().count().unwrap(), 0);
}

#[tokio::test]
async fn test_missing_block_number_is_soft_failure() {
    let server = MockRollupServer::new();
    let server_url = server.start().await;
    let client = hyper::Client::new();
    let contract = test_contract();

    let payload = create_notarise_payload(&test_signing_key(), &[0x57; 32]);
    let mut request = create_advance_request(&payload, "0x1", 100);
    request["data"]["metadata"].remove("block_number");

    let result = handle_advance(&client, &server_url, &contract, request).await;
    assert_eq!(result.unwrap(), "accept");

    assert!(server.get_notices().is_empty());
    assert_eq!(parse(&server.get_reports()[0])["result"], "");
    assert_eq!(contract.store().count().unwrap(), 0);
}

#[tokio::test]
async fn test_non_numeric_block_number_is_soft_failure() {
    let server = MockRollupServer::new();
    let server_url = server.start().await;
    let client = hyper::Client::new();
    let contract = test_contract();

    let payload = create_notarise_payload(&test_signing_key(), &[0x58; 32]);
    let mut request = create_advance_request(&payload, "0x1", 100);
    request["data"]["metadata"]["block_number"] = "one hundred".into();

    let result = handle_advance(&client, &server_url, &contract, request).await;
    assert_eq!(result.unwrap(), "accept");

    assert!(server.get_notices().is_empty());
    assert_eq!(contract.store().count().unwrap(), 0);
}

#[tokio::test]
async fn test_details_lookup_ignores_block_number() {
    let server = MockRollupServer::new();
    let server_url = server.start().await;
    let client = hyper::Client::new();
    let contract = test_contract();

    let notarise = create_advance_request(
        &create_notarise_payload(&test_signing_key(), &[0x59; 32]),
        "0x1",
        7,
    );
    handle_advance(&client, &server_url, &contract, notarise)
        .await
        .unwrap();
    let id = hex::decode(parse(&server.get_notices()[0])["result"].as_str().unwrap()).unwrap();
    server.clear();

    let mut lookup = create_advance_request(&create_details_payload(&id), "0x1", 0);
    lookup["data"]["metadata"].remove("block_number");
    let result = handle_advance(&client, &server_url, &contract, lookup).await;
    assert_eq!(result.unwrap(), "accept");

    let report = parse(&server.get_reports()[0]);
    assert_eq!(report["operation"], "GETDETAILS");
    assert_eq!(report["details"]["height"], 7);
}

#[test]
fn test_open_store_fails_without_fallback() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing").join("notary.db");

    assert!(open_store(path.to_str().unwrap()).is_err());
}

#[test]
fn test_open_store_persists_to_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("notary.db");

    let store = open_store(path.to_str().unwrap()).unwrap();
    assert_eq!(store.count().unwrap(), 0);
    assert!(path.exists());
}

#[tokio::test]
async fn test_inspect_cannot_notarise() {
    let server = MockRollupServer::new();
    let server_url = server.start().await;
    let client = hyper::Client::new();
    let contract = test_contract();

    let payload = create_notarise_payload(&test_signing_key(), &[0x66; 32]);
    let result = handle_inspect(&client, &server_url, &contract, create_inspect_request(&payload)).await;

    assert_eq!(result.unwrap(), "accept");
    assert_eq!(parse(&server.get_reports()[0])["result"], "");
    assert_eq!(contract.store().count().unwrap(), 0);
}

#[tokio::test]
async fn test_inspect_unknown_id() {
    let server = MockRollupServer::new();
    let server_url = server.start().await;
    let client = hyper::Client::new();
    let contract = test_contract();

    let inspect = create_inspect_request(&create_details_payload(&[0xAA; 20]));
    let result = handle_inspect(&client, &server_url, &contract, inspect).await;

    assert_eq!(result.unwrap(), "accept"); // Inspect always accepts

    let report = parse(&server.get_reports()[0]);
    assert_eq!(report["result"], "");
    assert!(report["details"].is_null());
}

#[tokio::test]
async fn test_invalid_json_rejected() {
    let server = MockRollupServer::new();
    let server_url = server.start().await;
    let client = hyper::Client::new();
    let contract = test_contract();

    let request = create_advance_request("not valid json {{{", "0x123", 100);
    let result = handle_advance(&client, &server_url, &contract, request).await;

    assert_eq!(result.unwrap(), "reject");

    let reports = server.get_reports();
    assert!(!reports.is_empty());
    assert!(parse(&reports[0])["error"].is_string());
}

#[tokio::test]
async fn test_invalid_base64_rejected() {
    let server = MockRollupServer::new();
    let server_url = server.start().await;
    let client = hyper::Client::new();
    let contract = test_contract();

    let payload = r#"{"operation":"NOTARISE","args":["!!!invalid-base64!!!","AAAA"]}"#;
    let request = create_advance_request(payload, "0x123", 100);
    let result = handle_advance(&client, &server_url, &contract, request).await;

    assert_eq!(result.unwrap(), "reject");
    assert!(server.get_reports()[0].contains("error"));
}

#[tokio::test]
async fn test_unknown_operation_is_soft_failure() {
    let server = MockRollupServer::new();
    let server_url = server.start().await;
    let client = hyper::Client::new();
    let contract = test_contract();

    let request = create_advance_request(r#"{"operation":"TRANSFER","args":[]}"#, "0x1", 1);
    let result = handle_request(&client, &server_url, &contract, request).await;

    assert_eq!(result.unwrap(), "accept");
    let report = parse(&server.get_reports()[0]);
    assert_eq!(report["operation"], "TRANSFER");
    assert_eq!(report["result"], "");
}

#[tokio::test]
async fn test_unknown_request_type_rejected() {
    let server = MockRollupServer::new();
    let server_url = server.start().await;
    let client = hyper::Client::new();
    let contract = test_contract();

    let request = json::object! { "request_type" => "rollback_state", "data" => json::object! {} };
    let result = handle_request(&client, &server_url, &contract, request).await;

    assert_eq!(result.unwrap(), "reject");
    assert!(server.get_reports().is_empty());
}
