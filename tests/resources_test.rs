//! Integration tests for signer, webhook and certificate operations.

use d4sign::{AddCertificate, ClientConfig, D4Sign, Signer, SignerType};
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, Request, ResponseTemplate};

fn ok(data: serde_json::Value) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(serde_json::json!({
        "success": true,
        "message": "Success",
        "data": data
    }))
}

fn client_for(mock_server: &MockServer) -> D4Sign {
    D4Sign::with_config(
        "test-api-key",
        ClientConfig {
            base_url: Some(mock_server.uri()),
            ..Default::default()
        },
    )
    .unwrap()
}

fn empty_body(req: &Request) -> bool {
    req.body.is_empty()
}

#[tokio::test]
async fn test_add_signers_sends_plain_json() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/documents/doc-1/signers"))
        .and(body_json(serde_json::json!({
            "signers": [
                { "email": "jane@example.com", "name": "Jane", "foreign": false },
                { "email": "joe@example.com", "name": "Joe", "phone_country": "55", "phone_number": "11999999999" }
            ]
        })))
        .respond_with(ok(serde_json::json!({ "added": 2 })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let result = client
        .signatures()
        .add(
            "doc-1",
            vec![
                Signer {
                    email: "jane@example.com".to_string(),
                    name: "Jane".to_string(),
                    foreign: Some(false),
                    ..Default::default()
                },
                Signer {
                    email: "joe@example.com".to_string(),
                    name: "Joe".to_string(),
                    phone_country: Some("55".to_string()),
                    phone_number: Some("11999999999".to_string()),
                    ..Default::default()
                },
            ],
        )
        .await
        .unwrap();
    assert_eq!(result.data.unwrap()["added"], 2);
}

#[tokio::test]
async fn test_list_signers() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/documents/doc-1/signers"))
        .respond_with(ok(serde_json::json!([
            { "uuid": "sig-1", "email": "jane@example.com", "status": "pending" },
            { "uuid": "sig-2", "email": "joe@example.com", "status": "signed", "signed_at": "2024-02-02" }
        ])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let signers = client.signatures().list("doc-1").await.unwrap().data.unwrap();
    assert_eq!(signers.len(), 2);
    assert_eq!(signers[0].uuid, "sig-1");
    assert_eq!(signers[1].signed_at.as_deref(), Some("2024-02-02"));
}

#[tokio::test]
async fn test_remove_signer() {
    let mock_server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/documents/doc-1/signers/jane@example.com"))
        .respond_with(ok(serde_json::json!({})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    client
        .signatures()
        .remove("doc-1", "jane@example.com")
        .await
        .unwrap();
}

#[tokio::test]
async fn test_set_signer_type() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/documents/doc-1/signers/jane@example.com/type"))
        .and(body_json(serde_json::json!({ "type": "phone" })))
        .respond_with(ok(serde_json::json!({})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    client
        .signatures()
        .set_type("doc-1", "jane@example.com", SignerType::Phone)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_bodyless_signer_actions() {
    let mock_server = MockServer::start().await;

    for endpoint in [
        "/documents/doc-1/signers/jane@example.com/reminder",
        "/documents/doc-1/signers/jane@example.com/cancel",
        "/documents/doc-1/signaturelist",
    ] {
        Mock::given(method("POST"))
            .and(path(endpoint))
            .and(header("content-type", "application/json"))
            .and(empty_body)
            .respond_with(ok(serde_json::json!({})))
            .expect(1)
            .mount(&mock_server)
            .await;
    }

    let client = client_for(&mock_server);
    let signatures = client.signatures();
    signatures
        .send_reminder("doc-1", "jane@example.com")
        .await
        .unwrap();
    signatures.cancel("doc-1", "jane@example.com").await.unwrap();
    signatures.create_list("doc-1").await.unwrap();
}

#[tokio::test]
async fn test_signature_status_passes_through() {
    let mock_server = MockServer::start().await;
    let body = serde_json::json!({
        "success": true,
        "message": "Success",
        "data": { "status": "2", "statusName": "Waiting for signatures" }
    });

    Mock::given(method("GET"))
        .and(path("/documents/doc-1/status"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body.clone()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let result = client.signatures().status("doc-1").await.unwrap();
    assert_eq!(serde_json::to_value(&result).unwrap(), body);
}

#[tokio::test]
async fn test_register_webhook_double_encodes_url() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/documents/doc-1/webhooks"))
        .and(body_json(serde_json::json!({ "url": "\"https://example.com/hook\"" })))
        .respond_with(ok(serde_json::json!({})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    client
        .webhooks()
        .register("doc-1", "https://example.com/hook")
        .await
        .unwrap();
}

#[tokio::test]
async fn test_list_webhooks() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/documents/doc-1/webhooks"))
        .respond_with(ok(serde_json::json!([
            { "uuid": "wh-1", "url": "https://example.com/a", "status": "active" },
            { "uuid": "wh-2", "url": "https://example.com/b", "status": "disabled" }
        ])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let hooks = client.webhooks().list("doc-1").await.unwrap().data.unwrap();
    assert_eq!(hooks.len(), 2);
    assert_eq!(hooks[0].url.as_deref(), Some("https://example.com/a"));
    assert_eq!(hooks[1].status.as_deref(), Some("disabled"));
}

#[tokio::test]
async fn test_webhook_without_uuid_passes_through() {
    let mock_server = MockServer::start().await;
    let body = serde_json::json!({
        "success": true,
        "message": "ok",
        "data": [{ "url": "https://example.com/hook", "events": ["signed"] }]
    });

    Mock::given(method("GET"))
        .and(path("/documents/doc-1/webhooks"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body.clone()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let result = client.webhooks().list("doc-1").await.unwrap();
    let hooks = result.data.as_ref().unwrap();
    assert_eq!(hooks[0].uuid, "");
    assert_eq!(hooks[0].url.as_deref(), Some("https://example.com/hook"));
    assert_eq!(hooks[0].extra["events"], serde_json::json!(["signed"]));
    assert_eq!(serde_json::to_value(&result).unwrap(), body);
}

#[tokio::test]
async fn test_update_webhook_sends_plain_url() {
    let mock_server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/documents/doc-1/webhooks/wh-1"))
        .and(body_json(serde_json::json!({ "url": "https://example.com/new" })))
        .respond_with(ok(serde_json::json!({
            "uuid": "wh-1",
            "url": "https://example.com/new"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let hook = client
        .webhooks()
        .update("doc-1", "wh-1", "https://example.com/new")
        .await
        .unwrap()
        .data
        .unwrap();
    assert_eq!(hook.uuid, "wh-1");
    assert_eq!(hook.url.as_deref(), Some("https://example.com/new"));
}

#[tokio::test]
async fn test_webhook_lifecycle() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/documents/doc-1/webhooks/wh-1/disable"))
        .respond_with(ok(serde_json::json!({})))
        .expect(1)
        .mount(&mock_server)
        .await;
    Mock::given(method("POST"))
        .and(path("/documents/doc-1/webhooks/wh-1/enable"))
        .respond_with(ok(serde_json::json!({})))
        .expect(1)
        .mount(&mock_server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/documents/doc-1/webhooks/wh-1"))
        .respond_with(ok(serde_json::json!({})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let webhooks = client.webhooks();
    webhooks.disable("doc-1", "wh-1").await.unwrap();
    webhooks.enable("doc-1", "wh-1").await.unwrap();
    webhooks.delete("doc-1", "wh-1").await.unwrap();
}

#[tokio::test]
async fn test_list_certificates() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/certificate/doc-1/list"))
        .and(body_json(serde_json::json!({ "key_signer": "k1" })))
        .respond_with(ok(serde_json::json!([
            { "uuid": "cert-1", "name": "Jane", "type": "icp_brasil", "status": "active" }
        ])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let certs = client
        .certificates()
        .list("doc-1", "k1")
        .await
        .unwrap()
        .data
        .unwrap();
    assert_eq!(certs.len(), 1);
    assert_eq!(certs[0].kind.as_deref(), Some("icp_brasil"));
}

#[tokio::test]
async fn test_create_certificate() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/certificate/doc-1/add"))
        .and(body_json(serde_json::json!({
            "key_signer": "k1",
            "document_type": "PF",
            "document_number": "12345678900",
            "pades": ""
        })))
        .respond_with(ok(serde_json::json!({})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    client
        .certificates()
        .create(
            "doc-1",
            AddCertificate {
                key_signer: "k1".to_string(),
                document_type: "PF".to_string(),
                document_number: "12345678900".to_string(),
                ..Default::default()
            },
        )
        .await
        .unwrap();
}

#[tokio::test]
async fn test_certificate_lifecycle() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/certificate/doc-1/cert-1"))
        .respond_with(ok(serde_json::json!({ "uuid": "cert-1", "status": "active" })))
        .expect(1)
        .mount(&mock_server)
        .await;
    Mock::given(method("POST"))
        .and(path("/certificate/doc-1/cert-1/disable"))
        .respond_with(ok(serde_json::json!({})))
        .expect(1)
        .mount(&mock_server)
        .await;
    Mock::given(method("POST"))
        .and(path("/certificate/doc-1/cert-1/enable"))
        .respond_with(ok(serde_json::json!({})))
        .expect(1)
        .mount(&mock_server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/certificate/doc-1/cert-1"))
        .respond_with(ok(serde_json::json!({})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let certificates = client.certificates();
    let cert = certificates
        .get("doc-1", "cert-1")
        .await
        .unwrap()
        .data
        .unwrap();
    assert_eq!(cert.status.as_deref(), Some("active"));
    certificates.disable("doc-1", "cert-1").await.unwrap();
    certificates.enable("doc-1", "cert-1").await.unwrap();
    certificates.delete("doc-1", "cert-1").await.unwrap();
}

#[tokio::test]
async fn test_remote_rejection_on_resource_call() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/certificate/doc-1/list"))
        .respond_with(ResponseTemplate::new(400).set_body_json(serde_json::json!({
            "success": false,
            "message": "key_signer not found"
        })))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = client
        .certificates()
        .list("doc-1", "missing")
        .await
        .unwrap_err();
    assert_eq!(err.status(), 400);
    assert_eq!(
        err.to_string(),
        "D4Sign API Error: 400 - key_signer not found"
    );
}
