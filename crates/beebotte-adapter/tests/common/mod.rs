/*
[INPUT]:  Test configuration and mock server requirements
[OUTPUT]: Shared test utilities, fixtures, and a stateful mock platform
[POS]:    Test infrastructure - shared across all test modules
[UPDATE]: When adding new test patterns or fixtures
*/

//! Common test utilities for beebotte-adapter tests

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use beebotte_adapter::{BeebotteClient, ClientConfig, Credentials};
use serde_json::{Value, json};
use wiremock::matchers::{method, path_regex};
use wiremock::{Mock, MockServer, Request, Respond, ResponseTemplate};

pub const TEST_KEY_ID: &str = "test-access-key";
pub const TEST_SECRET_KEY: &str = "test-secret-key-never-sent";

/// Setup a mock HTTP server for testing
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

pub fn test_credentials() -> Credentials {
    Credentials::new(TEST_KEY_ID, TEST_SECRET_KEY)
}

/// Client pointed at the mock server
pub fn client_for(server: &MockServer) -> BeebotteClient {
    BeebotteClient::with_config_and_base_url(test_credentials(), ClientConfig::default(), &server.uri())
        .expect("client init")
}

/// In-memory platform: writes persist, publishes are only logged
#[derive(Debug, Clone, Default)]
pub struct MockPlatform {
    persisted: Arc<Mutex<HashMap<String, Vec<Value>>>>,
    transient: Arc<Mutex<Vec<(String, Value)>>>,
}

impl MockPlatform {
    /// Mount write, publish and read handlers on the server
    pub async fn mount(&self, server: &MockServer) {
        Mock::given(method("POST"))
            .and(path_regex(r"^/v1/data/write/[^/]+/[^/]+$"))
            .respond_with(WriteResponder(self.clone()))
            .mount(server)
            .await;
        Mock::given(method("POST"))
            .and(path_regex(r"^/v1/data/publish/[^/]+/[^/]+$"))
            .respond_with(PublishResponder(self.clone()))
            .mount(server)
            .await;
        Mock::given(method("GET"))
            .and(path_regex(r"^/v1/data/read/[^/]+/[^/]+$"))
            .respond_with(ReadResponder(self.clone()))
            .mount(server)
            .await;
    }

    pub fn persisted_count(&self) -> usize {
        self.persisted.lock().unwrap().values().map(Vec::len).sum()
    }

    pub fn transient_log(&self) -> Vec<(String, Value)> {
        self.transient.lock().unwrap().clone()
    }
}

fn resource_key(request: &Request) -> String {
    let segments: Vec<&str> = request.url.path().rsplit('/').take(2).collect();
    format!("{}/{}", segments[1], segments[0])
}

struct WriteResponder(MockPlatform);

impl Respond for WriteResponder {
    fn respond(&self, request: &Request) -> ResponseTemplate {
        let body: Value = match serde_json::from_slice(&request.body) {
            Ok(body) => body,
            Err(_) => {
                return ResponseTemplate::new(400)
                    .set_body_json(json!({"error": {"code": 1403, "message": "Bad request"}}));
            }
        };
        let record = json!({
            "data": body["data"].clone(),
            "ts": body.get("ts").cloned().unwrap_or(json!(1_700_000_000_000i64)),
        });
        self.0
            .persisted
            .lock()
            .unwrap()
            .entry(resource_key(request))
            .or_default()
            .push(record);
        ResponseTemplate::new(200).set_body_json(json!(true))
    }
}

struct PublishResponder(MockPlatform);

impl Respond for PublishResponder {
    fn respond(&self, request: &Request) -> ResponseTemplate {
        let body: Value = serde_json::from_slice(&request.body).unwrap_or(Value::Null);
        self.0
            .transient
            .lock()
            .unwrap()
            .push((resource_key(request), body["data"].clone()));
        ResponseTemplate::new(200).set_body_json(json!(true))
    }
}

struct ReadResponder(MockPlatform);

impl Respond for ReadResponder {
    fn respond(&self, request: &Request) -> ResponseTemplate {
        let persisted = self.0.persisted.lock().unwrap();
        match persisted.get(&resource_key(request)) {
            Some(records) => {
                // Most recent first
                let newest_first: Vec<Value> = records.iter().rev().cloned().collect();
                ResponseTemplate::new(200).set_body_json(Value::Array(newest_first))
            }
            None => ResponseTemplate::new(404)
                .set_body_json(json!({"error": {"code": 1302, "message": "Resource not found"}})),
        }
    }
}
