mod common;

use cfiamcli::{
    cloudflare::{ClientSettings, CloudflareClient},
    config,
    error::ClientError,
    types::Page,
};
use common::{MockApi, ok_envelope};
use serde_json::json;
use std::time::Duration;

#[tokio::test]
async fn test_requests_carry_auth_and_content_type() {
    let api = MockApi::new();
    api.respond_json("/accounts", 200, ok_envelope(json!([])));
    let base = api.start().await;

    let client = CloudflareClient::new(&ClientSettings::with_base_url(base), "  secret-token \n").unwrap();
    client.list_accounts(Page::default()).await.unwrap();

    let requests = api.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].authorization.as_deref(), Some("Bearer secret-token"));
    assert_eq!(requests[0].content_type.as_deref(), Some("application/json"));
}

#[tokio::test]
async fn test_list_accounts_sends_first_page() {
    let api = MockApi::new();
    api.respond_json(
        "/accounts",
        200,
        ok_envelope(json!([{"id": "a1", "name": "Acme"}, {"id": "b2", "name": "Beta"}])),
    );
    let base = api.start().await;

    let client = CloudflareClient::new(&ClientSettings::with_base_url(base), "tok").unwrap();
    let envelope = client.list_accounts(Page::default()).await.unwrap();

    let accounts = envelope.result.unwrap();
    assert_eq!(accounts.len(), 2);
    assert_eq!(accounts[1].id, "b2");
    assert_eq!(api.requests()[0].query.as_deref(), Some("page=1&per_page=50"));
}

#[tokio::test]
async fn test_verify_token_is_pinned_to_configured_account() {
    let api = MockApi::new();
    let pinned = format!("/accounts/{}/tokens/verify", config::DEFAULT_VERIFY_ACCOUNT_ID);
    api.respond_json(&pinned, 200, ok_envelope(json!({"id": "t1", "status": "active"})));
    let base = api.start().await;

    let client = CloudflareClient::new(&ClientSettings::with_base_url(base), "tok").unwrap();
    let envelope = client.verify_token().await.unwrap();

    assert_eq!(envelope.result.unwrap().status.as_deref(), Some("active"));
    let requests = api.requests();
    assert_eq!(requests[0].path, pinned);
    assert_eq!(requests[0].query, None);
}

#[tokio::test]
async fn test_verify_account_id_can_be_overridden() {
    let api = MockApi::new();
    api.respond_json(
        "/accounts/other/tokens/verify",
        200,
        ok_envelope(json!({"status": "active"})),
    );
    let base = api.start().await;

    let settings = ClientSettings {
        verify_account_id: "other".to_string(),
        ..ClientSettings::with_base_url(base)
    };
    let client = CloudflareClient::new(&settings, "tok").unwrap();

    assert!(client.verify_token().await.is_ok());
    assert_eq!(api.requests()[0].path, "/accounts/other/tokens/verify");
}

#[tokio::test]
async fn test_members_and_groups_paths() {
    let api = MockApi::new();
    api.respond_json("/accounts/a1/members", 200, ok_envelope(json!([])));
    api.respond_json("/accounts/a1/iam/user_groups", 200, ok_envelope(json!([])));
    let base = api.start().await;

    let settings = ClientSettings {
        per_page: 10,
        ..ClientSettings::with_base_url(base)
    };
    let client = CloudflareClient::new(&settings, "tok").unwrap();
    client.list_members("a1", settings.first_page()).await.unwrap();
    client.list_user_groups("a1", settings.first_page()).await.unwrap();

    let requests = api.requests();
    assert_eq!(requests[0].path, "/accounts/a1/members");
    assert_eq!(requests[1].path, "/accounts/a1/iam/user_groups");
    assert_eq!(requests[1].query.as_deref(), Some("page=1&per_page=10"));
}

#[tokio::test]
async fn test_non_json_response_keeps_status() {
    let api = MockApi::new();
    api.respond("/accounts", 502, "<html>502 Bad Gateway</html>");
    let base = api.start().await;

    let client = CloudflareClient::new(&ClientSettings::with_base_url(base), "tok").unwrap();

    match client.list_accounts(Page::default()).await {
        Err(ClientError::Protocol { status, body }) => {
            assert_eq!(status, 502);
            assert!(body.contains("Bad Gateway"));
        }
        other => panic!("expected Protocol error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_unsuccessful_envelope_is_api_error() {
    let api = MockApi::new();
    api.respond_json(
        "/accounts/a1/members",
        403,
        json!({
            "success": false,
            "errors": [{"code": 9109, "message": "Unauthorized to access requested resource"}],
            "messages": [],
            "result": null
        }),
    );
    let base = api.start().await;

    let client = CloudflareClient::new(&ClientSettings::with_base_url(base), "tok").unwrap();

    match client.list_members("a1", Page::default()).await {
        Err(ClientError::Api {
            status, path, errors, ..
        }) => {
            assert_eq!(status, 403);
            assert_eq!(path, "/accounts/a1/members");
            assert_eq!(errors[0]["code"], json!(9109));
        }
        other => panic!("expected Api error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_slow_provider_times_out() {
    let api = MockApi::new();
    api.respond_json("/accounts", 200, ok_envelope(json!([])));
    api.delay("/accounts", Duration::from_millis(500));
    let base = api.start().await;

    let settings = ClientSettings {
        timeout: Duration::from_millis(100),
        ..ClientSettings::with_base_url(base)
    };
    let client = CloudflareClient::new(&settings, "tok").unwrap();

    match client.list_accounts(Page::default()).await {
        Err(ClientError::Network(e)) => assert!(e.is_timeout()),
        other => panic!("expected timeout, got {:?}", other),
    }
    assert_eq!(api.hits(), 1);
}

#[test]
fn test_empty_token_is_rejected_before_any_request() {
    let settings = ClientSettings::default();

    assert!(matches!(
        CloudflareClient::new(&settings, "   "),
        Err(ClientError::Validation(_))
    ));
    assert!(matches!(
        CloudflareClient::new(&settings, "bad\ntoken"),
        Err(ClientError::Validation(_))
    ));
}

#[test]
fn test_default_settings() {
    let settings = ClientSettings::default();

    assert_eq!(settings.base_url, "https://api.cloudflare.com/client/v4");
    assert_eq!(settings.timeout.as_secs(), 30);
    assert_eq!(settings.verify_account_id, "3ef9aca3e663821dd1413c72b4ae0db8");
    assert_eq!(settings.first_page(), Page { page: 1, per_page: 50 });
    assert_eq!(
        ClientSettings::with_base_url("http://localhost:8080/").base_url,
        "http://localhost:8080"
    );
}
