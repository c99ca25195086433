/*
[INPUT]:  Owner, channel and resource names plus read query parameters
[OUTPUT]: Records of public resources
[POS]:    HTTP layer - public data endpoints (no auth required)
[UPDATE]: When adding new public endpoints or changing response format
*/

use crate::http::{BeebotteClient, Result, resource_path};
use crate::types::{ReadQuery, ReadRecord};

impl BeebotteClient {
    /// Read records from a resource with public access
    ///
    /// GET /v1/public/data/read/{owner}/{channel}/{resource}?limit=&source=&time-range=
    /// The call is not signed.
    pub async fn public_read(
        &self,
        owner: &str,
        channel: &str,
        resource: &str,
        query: &ReadQuery,
    ) -> Result<Vec<ReadRecord>> {
        let path = resource_path(&self.endpoints().public_read, &[owner, channel, resource])?;
        let uri = format!("{path}?{}", query.to_query_string()?);
        let builder = self.get_request(&uri, false)?;
        self.send_json(builder).await
    }
}

#[cfg(test)]
mod tests {
    use crate::http::{BeebotteClient, BeebotteError, ClientConfig, Credentials};
    use crate::types::{ReadQuery, ReadSource};
    use serde_json::json;
    use wiremock::matchers::{header, header_exists, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn client_for(server: &MockServer) -> BeebotteClient {
        BeebotteClient::with_config_and_base_url(
            Credentials::new("key", "secret"),
            ClientConfig::default(),
            &server.uri(),
        )
        .expect("client init")
    }

    #[tokio::test]
    async fn test_public_read() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1/public/data/read/alice/weather/temp"))
            .and(query_param("limit", "2"))
            .and(query_param("source", "live"))
            .and(header("content-type", "application/json"))
            .and(header_exists("date"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {"data": 21.5, "ts": 1_700_000_000_000i64},
                {"data": 21.0, "ts": 1_699_999_990_000i64}
            ])))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        let records = client
            .public_read(
                "alice",
                "weather",
                "temp",
                &ReadQuery::new().limit(2).source(ReadSource::Live),
            )
            .await
            .expect("public_read failed");

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].data, json!(21.5));
        assert_eq!(records[1].ts, Some(1_699_999_990_000));

        let requests = server.received_requests().await.expect("recording enabled");
        assert!(requests[0].headers.get("authorization").is_none());
    }

    #[tokio::test]
    async fn test_public_read_not_found() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1/public/data/read/alice/weather/missing"))
            .respond_with(ResponseTemplate::new(404).set_body_json(json!({
                "error": {"code": 1303, "message": "Resource not found"}
            })))
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        let err = client
            .public_read("alice", "weather", "missing", &ReadQuery::default())
            .await
            .expect_err("should fail");

        match err {
            BeebotteError::Api(api) => {
                assert_eq!(api.kind, crate::http::ApiErrorKind::NotFound);
                assert_eq!(api.code, Some(1303));
                assert_eq!(api.message, "Resource not found");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_public_read_rejects_bad_owner_without_request() {
        let server = MockServer::start().await;
        let client = client_for(&server).await;

        let err = client
            .public_read("al/ice", "weather", "temp", &ReadQuery::default())
            .await
            .expect_err("should fail");
        assert!(matches!(err, BeebotteError::InvalidArgument(_)));

        let requests = server.received_requests().await.expect("recording enabled");
        assert!(requests.is_empty());
    }
}
