/*
[INPUT]:  API credentials, request verb/URI/date/body, subscription metadata
[OUTPUT]: Authorization header values ("{key_id}:{signature}") and Content-MD5 digests
[POS]:    HTTP layer - request signing for authenticated endpoints
[UPDATE]: When changing signing algorithm or header format
*/

use base64::{Engine as _, engine::general_purpose::STANDARD as BASE64};
use hmac::{Hmac, Mac};
use md5::{Digest, Md5};
use sha1::Sha1;

use crate::http::Credentials;

type HmacSha1 = Hmac<Sha1>;

/// Content type every request is sent and signed with
pub const CONTENT_TYPE_JSON: &str = "application/json";

/// Signs API calls and subscription requests with the account secret key
#[derive(Debug, Clone)]
pub struct RequestSigner {
    credentials: Credentials,
}

impl RequestSigner {
    /// Create a new request signer for the given credentials
    pub fn new(credentials: Credentials) -> Self {
        Self { credentials }
    }

    pub fn key_id(&self) -> &str {
        &self.credentials.key_id
    }

    /// Base64-encoded MD5 digest of a request body (Content-MD5 header)
    pub fn content_md5(body: &[u8]) -> String {
        BASE64.encode(Md5::digest(body))
    }

    /// Sign an API call according to the Beebotte specification
    ///
    /// Format: "{verb}\n{content_md5}\n{content_type}\n{date}\n{uri}"
    /// `content_md5` is empty for GET requests. `uri` is the path, including the
    /// query string for GET requests.
    /// Returns the Authorization header value "{key_id}:{signature}"
    pub fn sign_request(
        &self,
        verb: &str,
        content_md5: Option<&str>,
        date: &str,
        uri: &str,
    ) -> String {
        let message = format!(
            "{verb}\n{}\n{CONTENT_TYPE_JSON}\n{date}\n{uri}",
            content_md5.unwrap_or_default()
        );
        self.authorization(&message)
    }

    /// Sign subscription metadata for a real-time client session
    ///
    /// Format: "{sid}:{channel}.{resource}:ttl={ttl}:read={read}:write={write}"
    pub fn sign_subscription(
        &self,
        sid: &str,
        channel: &str,
        resource: &str,
        ttl: u64,
        read: bool,
        write: bool,
    ) -> String {
        let message = format!("{sid}:{channel}.{resource}:ttl={ttl}:read={read}:write={write}");
        self.authorization(&message)
    }

    fn authorization(&self, message: &str) -> String {
        format!("{}:{}", self.credentials.key_id, self.signature(message))
    }

    fn signature(&self, message: &str) -> String {
        // HMAC accepts keys of any length
        let mut mac = HmacSha1::new_from_slice(self.credentials.secret_key.as_bytes())
            .expect("HMAC can take key of any size");
        mac.update(message.as_bytes());
        BASE64.encode(mac.finalize().into_bytes())
    }
}
