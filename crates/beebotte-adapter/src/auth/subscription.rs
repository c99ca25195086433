/*
[INPUT]:  Session id, channel, resource, ttl and access flags
[OUTPUT]: "{key_id}:{signature}" tokens and {"auth": ...} objects
[POS]:    Auth layer - subscription token computation (no network I/O)
[UPDATE]: When subscription signing or token format changes
*/

use crate::http::BeebotteClient;
use crate::types::{SubscriptionAuth, SubscriptionRequest};

impl BeebotteClient {
    /// Sign subscription metadata so a real-time client can join a channel
    ///
    /// Channels prefixed with `presence:` or `private:` require this token.
    pub fn subscription_token(&self, request: &SubscriptionRequest) -> String {
        self.signer().sign_subscription(
            &request.sid,
            &request.channel,
            &request.resource,
            request.ttl,
            request.read,
            request.write,
        )
    }

    /// Token wrapped as `{"auth": token}`
    pub fn subscription_auth(&self, request: &SubscriptionRequest) -> SubscriptionAuth {
        SubscriptionAuth {
            auth: self.subscription_token(request),
        }
    }
}
