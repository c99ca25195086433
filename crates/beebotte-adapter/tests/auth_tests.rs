/*
[INPUT]:  Fixed credentials, dates and subscription metadata
[OUTPUT]: Test results for request and subscription signing
[POS]:    Integration tests - authentication
[UPDATE]: When signing algorithm or token format changes
*/

mod common;

use beebotte_adapter::{BeebotteClient, Credentials, RequestSigner, SubscriptionRequest};
use common::{TEST_SECRET_KEY, test_credentials};
use tokio_test::assert_ok;

const DATE: &str = "Mon, 19 Oct 2026 10:00:00 +0000";

#[test]
fn test_request_signature_reference_values() {
    let signer = RequestSigner::new(Credentials::new("key", "secret"));

    assert_eq!(
        signer.sign_request("GET", None, DATE, "/v1/data/read/dev/temp?limit=5"),
        "key:5S0vc5W6BgUb06c3R5OHuwbYpfM="
    );

    let md5 = RequestSigner::content_md5(br#"{"data":42}"#);
    assert_eq!(md5, "DugeMB1SvWsiS1YOoLrXyA==");
    assert_eq!(
        signer.sign_request("POST", Some(&md5), DATE, "/v1/data/write/dev/temp"),
        "key:cwT+8SE5DTMNvKbwvLE3ue/HdVg="
    );
}

#[test]
fn test_subscription_tokens_vary_with_permissions() {
    let client = assert_ok!(BeebotteClient::new(test_credentials()));
    let request = SubscriptionRequest::new("1234.5678", "private-sensors").resource("temp");

    let read = client.subscription_token(&request.clone().read(true).write(false));
    let write = client.subscription_token(&request.clone().read(false).write(true));
    let ttl_zero = client.subscription_token(&request.clone().ttl(0));
    let ttl_sixty = client.subscription_token(&request.clone().ttl(60));

    assert_ne!(read, write);
    assert_ne!(ttl_zero, ttl_sixty);
    for token in [&read, &write, &ttl_zero, &ttl_sixty] {
        assert!(token.starts_with(&format!("{}:", common::TEST_KEY_ID)));
        assert!(!token.contains(TEST_SECRET_KEY));
    }
}

#[test]
fn test_subscription_token_is_deterministic() {
    let first = assert_ok!(BeebotteClient::new(test_credentials()));
    let second = assert_ok!(BeebotteClient::new(test_credentials()));
    let request = SubscriptionRequest::new("sid", "presence:lobby").read(true);

    assert_eq!(first.subscription_token(&request), second.subscription_token(&request));
}
