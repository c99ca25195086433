/*
[INPUT]:  HTTP configuration (hostname, port, endpoints, timeouts) and API credentials
[OUTPUT]: Configured reqwest client, signed requests and classified responses
[POS]:    HTTP layer - core client implementation
[UPDATE]: When adding connection options or changing client behavior
*/

use std::fmt;
use std::time::Duration;

use chrono::Utc;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, DATE, HeaderValue};
use reqwest::{Client, Method, RequestBuilder, StatusCode, Url};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, warn};

use crate::http::signature::{CONTENT_TYPE_JSON, RequestSigner};
use crate::http::{ApiError, BeebotteError, Result};
use crate::types::ErrorEnvelope;

/// Default API host for Beebotte
const DEFAULT_HOSTNAME: &str = "http://api.beebotte.com";
const DEFAULT_PORT: u16 = 80;

const CONTENT_MD5: &str = "content-md5";

/// API endpoint prefixes; channel/resource segments are appended to these
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    pub public_read: String,
    pub read: String,
    pub write: String,
    pub bulk_write: String,
    pub publish: String,
    pub bulk_publish: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            public_read: "/v1/public/data/read".to_string(),
            read: "/v1/data/read".to_string(),
            write: "/v1/data/write".to_string(),
            bulk_write: "/v1/data/write".to_string(),
            publish: "/v1/data/publish".to_string(),
            bulk_publish: "/v1/data/publish".to_string(),
        }
    }
}

/// HTTP client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Host including scheme, e.g. `http://api.beebotte.com`
    pub hostname: String,
    pub port: u16,
    pub timeout: Duration,
    pub connect_timeout: Duration,
    pub endpoints: Endpoints,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            hostname: DEFAULT_HOSTNAME.to_string(),
            port: DEFAULT_PORT,
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
            endpoints: Endpoints::default(),
        }
    }
}

impl ClientConfig {
    /// Base URL built from hostname and port
    pub fn base_url(&self) -> Result<Url> {
        let mut url = Url::parse(&self.hostname)?;
        if url.cannot_be_a_base() {
            return Err(BeebotteError::Config(format!(
                "hostname must include a scheme: {}",
                self.hostname
            )));
        }
        url.set_port(Some(self.port))
            .map_err(|_| BeebotteError::Config(format!("cannot set port on {}", self.hostname)))?;
        Ok(url)
    }
}

/// Credentials for authenticated requests
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    /// Access key, sent in the Authorization header
    pub key_id: String,
    /// Secret key, only used to derive signatures
    pub secret_key: String,
}

impl Credentials {
    pub fn new(key_id: impl Into<String>, secret_key: impl Into<String>) -> Self {
        Self {
            key_id: key_id.into(),
            secret_key: secret_key.into(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("key_id", &self.key_id)
            .field("secret_key", &"<redacted>")
            .finish()
    }
}

/// Main HTTP client for the Beebotte API
#[derive(Debug)]
pub struct BeebotteClient {
    http_client: Client,
    base_url: Url,
    endpoints: Endpoints,
    signer: RequestSigner,
}

impl BeebotteClient {
    /// Create a new client with default configuration
    pub fn new(credentials: Credentials) -> Result<Self> {
        Self::with_config(credentials, ClientConfig::default())
    }

    /// Create a new client with custom configuration
    pub fn with_config(credentials: Credentials, config: ClientConfig) -> Result<Self> {
        let base_url = config.base_url()?;
        Self::build(credentials, config, base_url)
    }

    /// Create a new client against an explicit base URL, ignoring `hostname` and `port`
    pub fn with_config_and_base_url(
        credentials: Credentials,
        config: ClientConfig,
        base_url: &str,
    ) -> Result<Self> {
        let base_url = Url::parse(base_url)?;
        Self::build(credentials, config, base_url)
    }

    fn build(credentials: Credentials, config: ClientConfig, base_url: Url) -> Result<Self> {
        // No idle connections are kept: every call opens and releases its own.
        let http_client = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .pool_max_idle_per_host(0)
            .build()?;

        Ok(Self {
            http_client,
            base_url,
            endpoints: config.endpoints,
            signer: RequestSigner::new(credentials),
        })
    }

    pub fn key_id(&self) -> &str {
        self.signer.key_id()
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    pub(crate) fn signer(&self) -> &RequestSigner {
        &self.signer
    }

    /// Build a GET request; `uri` must carry its query string
    pub(crate) fn get_request(&self, uri: &str, signed: bool) -> Result<RequestBuilder> {
        let url = self.base_url.join(uri)?;
        let date = http_date();
        let mut builder = self
            .http_client
            .request(Method::GET, url)
            .header(CONTENT_TYPE, CONTENT_TYPE_JSON)
            .header(DATE, &date);

        if signed {
            let authorization = self.signer.sign_request("GET", None, &date, uri);
            builder = builder.header(AUTHORIZATION, header_value(&authorization)?);
        }

        debug!(method = "GET", uri, signed, "sending request");
        Ok(builder)
    }

    /// Build a signed POST request carrying `body` as JSON
    pub(crate) fn post_request(&self, uri: &str, body: Vec<u8>) -> Result<RequestBuilder> {
        let url = self.base_url.join(uri)?;
        let date = http_date();
        let md5 = RequestSigner::content_md5(&body);
        let authorization = self.signer.sign_request("POST", Some(&md5), &date, uri);

        let builder = self
            .http_client
            .request(Method::POST, url)
            .header(CONTENT_MD5, &md5)
            .header(CONTENT_TYPE, CONTENT_TYPE_JSON)
            .header(DATE, &date)
            .header(AUTHORIZATION, header_value(&authorization)?)
            .body(body);

        debug!(method = "POST", uri, "sending request");
        Ok(builder)
    }

    /// Send a request and decode its successful response
    pub(crate) async fn send_json<T: DeserializeOwned>(&self, builder: RequestBuilder) -> Result<T> {
        let response = builder.send().await?;
        let status = response.status();
        let bytes = response.bytes().await?;
        debug!(status = status.as_u16(), len = bytes.len(), "received response");

        // Error pages from proxies are not JSON; they still classify by status.
        let body = if bytes.iter().all(u8::is_ascii_whitespace) {
            Value::Null
        } else {
            match serde_json::from_slice(&bytes) {
                Ok(body) => body,
                Err(_) if status.as_u16() >= 400 => Value::Null,
                Err(err) => return Err(err.into()),
            }
        };

        let data = process_response(status, body)?;
        Ok(serde_json::from_value(data)?)
    }
}

/// Check a response envelope: return the body when the status is below 400,
/// otherwise the classified API error
pub fn process_response(status: StatusCode, body: Value) -> Result<Value> {
    if status.as_u16() < 400 {
        return Ok(body);
    }

    let (code, message) = match serde_json::from_value::<ErrorEnvelope>(body) {
        Ok(envelope) => (envelope.error.code, envelope.error.message),
        Err(_) => (None, String::new()),
    };
    let error = ApiError::new(status.as_u16(), code, message);
    warn!(
        status = error.status,
        code = ?error.code,
        kind = %error.kind,
        "API call failed"
    );
    Err(BeebotteError::Api(error))
}

/// Current time in RFC 2822 format, as expected in the Date header
fn http_date() -> String {
    Utc::now().to_rfc2822()
}

fn header_value(value: &str) -> Result<HeaderValue> {
    HeaderValue::from_str(value)
        .map_err(|err| BeebotteError::InvalidArgument(format!("invalid header value: {err}")))
}
